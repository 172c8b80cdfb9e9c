//! Paint option page contract.

use crate::properties::PropertiesConfiguration;

/// Dialog grouping for option pages in the brush editor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OptionCategory {
    #[default]
    General,
    Color,
    Texture,
    Filter,
}

/// A pluggable configuration page for one paint-tool option.
///
/// The host brush editor collects pages, groups them by [`OptionCategory`],
/// and asks each page to persist itself into and restore itself from the
/// generic settings container.
pub trait PaintOpOption {
    /// Stable object name identifying the page.
    fn object_name(&self) -> &str;

    /// Where the page is grouped in the dialog.
    fn category(&self) -> OptionCategory;

    /// Whether the page can be toggled on and off. Non-checkable pages are
    /// always active when present.
    fn is_checkable(&self) -> bool;

    /// Persist the page's state into the settings container.
    fn write_option_setting(&self, setting: &mut PropertiesConfiguration);

    /// Restore the page's state from the settings container.
    fn read_option_setting(&mut self, setting: &PropertiesConfiguration);
}

/// Seam to the preset chooser panel rendered next to an option page.
pub trait PresetChooser {
    /// Name of the preset currently highlighted in the chooser.
    fn current_paint_op(&self) -> &str;
}

/// Chooser that always reports the same preset name.
///
/// Stands in for the interactive chooser panel in hosts and tests that drive
/// an option page directly.
#[derive(Debug, Clone)]
pub struct FixedPresetChooser {
    name: String,
}

impl FixedPresetChooser {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }

    pub fn set_name(&mut self, name: impl Into<String>) {
        self.name = name.into();
    }
}

impl PresetChooser for FixedPresetChooser {
    fn current_paint_op(&self) -> &str {
        &self.name
    }
}
