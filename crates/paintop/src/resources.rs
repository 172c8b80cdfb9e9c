//! Brush preset resource server.

use std::collections::HashMap;
use std::sync::Arc;

use image::RgbaImage;

/// A named brush preset held by the resource server.
///
/// Carries the preview image the UI renders row thumbnails from. The actual
/// brush configuration stays inside the paint engine; option pages only need
/// the name and the preview.
#[derive(Debug, Clone)]
pub struct PaintOpPreset {
    name: String,
    image: RgbaImage,
}

impl PaintOpPreset {
    pub fn new(name: impl Into<String>, image: RgbaImage) -> Self {
        Self {
            name: name.into(),
            image,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Preview image used for thumbnails.
    pub fn image(&self) -> &RgbaImage {
        &self.image
    }
}

/// Lookup seam to the application's preset resource store.
pub trait PresetServer {
    /// Look up a preset by name.
    ///
    /// Returns `None` when no resource with that name exists; callers are
    /// expected to degrade gracefully rather than treat this as an error.
    fn resource_by_name(&self, name: &str) -> Option<Arc<PaintOpPreset>>;
}

/// In-memory preset server.
///
/// Hosts populate it at startup; tests populate it directly.
#[derive(Debug, Default)]
pub struct MemoryPresetServer {
    presets: HashMap<String, Arc<PaintOpPreset>>,
}

impl MemoryPresetServer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a preset, replacing any existing preset with the same name.
    pub fn add(&mut self, preset: PaintOpPreset) {
        self.presets
            .insert(preset.name().to_string(), Arc::new(preset));
    }

    pub fn preset_count(&self) -> usize {
        self.presets.len()
    }
}

impl PresetServer for MemoryPresetServer {
    fn resource_by_name(&self, name: &str) -> Option<Arc<PaintOpPreset>> {
        self.presets.get(name).cloned()
    }
}
