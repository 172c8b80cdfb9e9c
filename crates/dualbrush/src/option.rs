//! Option page adapter plugging the editor into the host dialog.

use scumble_paintop::{OptionCategory, PaintOpOption, PropertiesConfiguration};

use crate::editor::DualBrushEditor;
use crate::preset::StackedPreset;

/// The dual brush entry in the brush editor's option page list.
///
/// Registered under the general category and non-checkable: when the page is
/// present the option is always active.
#[derive(Debug, Default)]
pub struct DualBrushOpOption {
    editor: DualBrushEditor,
}

impl DualBrushOpOption {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn editor(&self) -> &DualBrushEditor {
        &self.editor
    }

    pub fn editor_mut(&mut self) -> &mut DualBrushEditor {
        &mut self.editor
    }
}

impl PaintOpOption for DualBrushOpOption {
    fn object_name(&self) -> &str {
        "DualBrushOpOption"
    }

    fn category(&self) -> OptionCategory {
        OptionCategory::General
    }

    fn is_checkable(&self) -> bool {
        false
    }

    fn write_option_setting(&self, _setting: &mut PropertiesConfiguration) {
        // TODO: decide a settings layout for the preset stack. Until then the
        // stack is not persisted, matching the behavior hosts rely on today.
    }

    fn read_option_setting(&mut self, _setting: &PropertiesConfiguration) {
        // TODO: see write_option_setting; nothing is restored until a
        // settings layout exists.
    }
}

/// Engine-facing dual brush parameters read from stored settings.
///
/// Mirrors the option page on the paint engine side. Stays empty until the
/// settings layout above exists.
#[derive(Debug, Clone, Default)]
pub struct DualBrushProperties {
    pub presets: Vec<StackedPreset>,
}

impl DualBrushProperties {
    pub fn read_option_setting(&mut self, _setting: &PropertiesConfiguration) {
        // TODO: fill from the settings container once the layout is decided.
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use image::{Rgba, RgbaImage};
    use scumble_paintop::{FixedPresetChooser, MemoryPresetServer, PaintOpPreset};

    fn option_with_one_preset() -> DualBrushOpOption {
        let mut server = MemoryPresetServer::new();
        server.add(PaintOpPreset::new(
            "Charcoal",
            RgbaImage::from_pixel(8, 8, Rgba([64, 64, 64, 255])),
        ));

        let mut option = DualBrushOpOption::new();
        let chooser = FixedPresetChooser::new("Charcoal");
        option.editor_mut().add_preset(&chooser, &server);
        option
    }

    #[test]
    fn test_page_registration_flags() {
        let option = DualBrushOpOption::new();
        assert_eq!(option.object_name(), "DualBrushOpOption");
        assert_eq!(option.category(), OptionCategory::General);
        assert!(!option.is_checkable());
    }

    #[test]
    fn test_write_option_setting_persists_nothing() {
        let option = option_with_one_preset();
        let mut setting = PropertiesConfiguration::new();
        option.write_option_setting(&mut setting);
        assert!(setting.is_empty());
    }

    #[test]
    fn test_read_option_setting_leaves_the_editor_untouched() {
        let mut option = option_with_one_preset();
        let setting = PropertiesConfiguration::new();
        option.read_option_setting(&setting);
        assert_eq!(option.editor().len(), 1);
        assert_eq!(option.editor().preset_stack()[0].preset_name, "Charcoal");
    }

    #[test]
    fn test_properties_read_is_a_stub() {
        let mut properties = DualBrushProperties::default();
        properties.read_option_setting(&PropertiesConfiguration::new());
        assert!(properties.presets.is_empty());
    }
}
