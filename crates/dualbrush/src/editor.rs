//! The preset stack editor: data list, selection, and bound controls.

use std::fmt;

use image::RgbaImage;
use tracing::{debug, warn};

use scumble_paintop::{CompositeOp, PresetChooser, PresetServer};

use crate::controls::StackControls;
use crate::icon::preset_icon;
use crate::preset::StackedPreset;

/// Events re-emitted by the editor to its listeners.
///
/// External systems (the host dialog, the paint engine's settings sync)
/// subscribe through [`DualBrushEditor::add_event_listener`] without coupling
/// to the editor implementation.
#[derive(Debug, Clone)]
pub enum EditorEvent {
    /// A control value changed, either from a user edit or from loading a
    /// record's values into the controls.
    ConfigurationChanged,
}

/// One row of the display projection: an entry's title and thumbnail.
#[derive(Debug)]
pub struct PresetRow<'a> {
    pub title: &'a str,
    pub icon: &'a RgbaImage,
}

struct StackEntry {
    preset: StackedPreset,
    icon: RgbaImage,
}

/// Editor state for the dual brush preset stack.
///
/// Owns the ordered list of stacked presets, the selection index, and the
/// five bound controls. The list is the authoritative stacking order;
/// [`DualBrushEditor::rows`] is a derived, read-only projection for display.
///
/// Control edits are flushed into the selected record when the selection
/// changes away from it; selecting a row loads its stored values back into
/// the controls. Structural operations at list boundaries are silent no-ops.
pub struct DualBrushEditor {
    entries: Vec<StackEntry>,
    selection: Option<usize>,
    controls: StackControls,
    #[allow(clippy::type_complexity)]
    listeners: Vec<Box<dyn Fn(EditorEvent) + Send + Sync>>,
}

impl fmt::Debug for DualBrushEditor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DualBrushEditor")
            .field("entry_count", &self.entries.len())
            .field("selection", &self.selection)
            .field("listener_count", &self.listeners.len())
            .finish()
    }
}

impl Default for DualBrushEditor {
    fn default() -> Self {
        Self {
            entries: Vec::new(),
            selection: None,
            controls: StackControls::new(),
            listeners: Vec::new(),
        }
    }
}

impl DualBrushEditor {
    /// Create an empty editor with the controls at their initial values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a listener for editor events.
    pub fn add_event_listener<F>(&mut self, listener: F)
    where
        F: Fn(EditorEvent) + Send + Sync + 'static,
    {
        self.listeners.push(Box::new(listener));
    }

    fn emit(&self, event: EditorEvent) {
        for listener in &self.listeners {
            listener(event.clone());
        }
    }

    /// Current control state, read-only. Mutation goes through the `set_*`
    /// methods so listeners stay informed.
    pub fn controls(&self) -> &StackControls {
        &self.controls
    }

    /// Index of the selected row, if any.
    pub fn selection(&self) -> Option<usize> {
        self.selection
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Snapshot of the full stack in stacking order.
    pub fn preset_stack(&self) -> Vec<StackedPreset> {
        self.entries.iter().map(|e| e.preset.clone()).collect()
    }

    /// Read-only row projection for display, in stacking order.
    pub fn rows(&self) -> impl Iterator<Item = PresetRow<'_>> {
        self.entries.iter().map(|e| PresetRow {
            title: &e.preset.preset_name,
            icon: &e.icon,
        })
    }

    pub fn set_vertical_offset(&mut self, value: f32) {
        if self.controls.vertical_offset.set(value) {
            self.emit(EditorEvent::ConfigurationChanged);
        }
    }

    pub fn set_horizontal_offset(&mut self, value: f32) {
        if self.controls.horizontal_offset.set(value) {
            self.emit(EditorEvent::ConfigurationChanged);
        }
    }

    pub fn set_fuzziness(&mut self, value: f32) {
        if self.controls.fuzziness.set(value) {
            self.emit(EditorEvent::ConfigurationChanged);
        }
    }

    pub fn set_opacity(&mut self, value: f32) {
        if self.controls.opacity.set(value) {
            self.emit(EditorEvent::ConfigurationChanged);
        }
    }

    pub fn select_composite_op(&mut self, op: CompositeOp) {
        if self.controls.composite.select(op) {
            self.emit(EditorEvent::ConfigurationChanged);
        }
    }

    /// Append a new stack entry built from the chooser's current preset.
    ///
    /// The controls are reset to the add-time defaults first, then the new
    /// record snapshots them along with the chosen preset name. The name is
    /// resolved through the resource server once; a failed lookup leaves the
    /// record's handle empty and the row gets a blank thumbnail.
    pub fn add_preset(&mut self, chooser: &dyn PresetChooser, server: &dyn PresetServer) {
        self.set_fuzziness(0.0);
        self.set_opacity(0.0);
        self.set_vertical_offset(0.0);
        self.set_horizontal_offset(0.0);
        self.select_composite_op(CompositeOp::Over);

        let preset_name = chooser.current_paint_op().to_string();
        let paintop = server.resource_by_name(&preset_name);
        if paintop.is_none() {
            warn!(name = %preset_name, "brush preset did not resolve, stacking without a handle");
        }

        let icon = preset_icon(paintop.as_deref().map(|p| p.image()));
        let preset = StackedPreset {
            preset_name,
            paintop,
            composite_op: self.controls.composite.selected(),
            opacity: self.controls.opacity.value(),
            fuzziness: self.controls.fuzziness.value(),
            vertical_offset: self.controls.vertical_offset.value(),
            horizontal_offset: self.controls.horizontal_offset.value(),
        };

        debug!(name = %preset.preset_name, index = self.entries.len(), "stacked preset added");
        self.entries.push(StackEntry { preset, icon });
    }

    /// Remove the selected row. Does nothing when no row is selected.
    pub fn remove_preset(&mut self) {
        let Some(index) = self.selection else {
            return;
        };
        let entry = self.entries.remove(index);
        self.selection = None;
        debug!(name = %entry.preset.preset_name, index, "stacked preset removed");
    }

    /// Swap the selected row with its predecessor, keeping it selected.
    /// Does nothing at the top of the list or without a selection.
    pub fn move_preset_up(&mut self) {
        let Some(index) = self.selection else {
            return;
        };
        if index == 0 {
            return;
        }
        self.entries.swap(index, index - 1);
        self.selection = Some(index - 1);
    }

    /// Swap the selected row with its successor, keeping it selected.
    /// Does nothing at the bottom of the list or without a selection.
    pub fn move_preset_down(&mut self) {
        let Some(index) = self.selection else {
            return;
        };
        if index + 1 >= self.entries.len() {
            return;
        }
        self.entries.swap(index, index + 1);
        self.selection = Some(index + 1);
    }

    /// Change the selected row.
    ///
    /// Flushes the live control values into the record losing selection,
    /// then loads the record gaining selection into the controls. Both
    /// directions run, in that order, so edits to the previous row are never
    /// lost. Selecting an out-of-range index is ignored.
    pub fn select(&mut self, index: Option<usize>) {
        if let Some(i) = index {
            if i >= self.entries.len() {
                return;
            }
        }
        if index == self.selection {
            return;
        }

        if let Some(previous) = self.selection {
            self.flush_controls_into(previous);
        }
        self.selection = index;
        if let Some(current) = index {
            self.load_record_into_controls(current);
        }
    }

    fn flush_controls_into(&mut self, index: usize) {
        let preset = &mut self.entries[index].preset;
        preset.fuzziness = self.controls.fuzziness.value();
        preset.composite_op = self.controls.composite.selected();
        preset.opacity = self.controls.opacity.value();
        preset.vertical_offset = self.controls.vertical_offset.value();
        preset.horizontal_offset = self.controls.horizontal_offset.value();
    }

    fn load_record_into_controls(&mut self, index: usize) {
        let preset = &self.entries[index].preset;
        let (fuzziness, opacity, vertical, horizontal, composite_op) = (
            preset.fuzziness,
            preset.opacity,
            preset.vertical_offset,
            preset.horizontal_offset,
            preset.composite_op,
        );
        self.set_fuzziness(fuzziness);
        self.set_opacity(opacity);
        self.set_vertical_offset(vertical);
        self.set_horizontal_offset(horizontal);
        self.select_composite_op(composite_op);
    }
}
