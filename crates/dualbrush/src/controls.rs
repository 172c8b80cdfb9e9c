//! Model-side state for the editor's bound controls.

use scumble_paintop::CompositeOp;

/// A bounded numeric control.
///
/// Mirrors the value/min/max surface of the dialog sliders without any
/// toolkit dependency: setting a value clamps it into range.
#[derive(Debug, Clone)]
pub struct SliderControl {
    value: f32,
    min: f32,
    max: f32,
}

impl SliderControl {
    pub fn new(min: f32, max: f32, value: f32) -> Self {
        let mut control = Self {
            value: min,
            min,
            max,
        };
        control.set(value);
        control
    }

    pub fn value(&self) -> f32 {
        self.value
    }

    /// Set the value, clamped into the control's range. Returns whether the
    /// stored value changed.
    pub fn set(&mut self, value: f32) -> bool {
        let clamped = value.clamp(self.min, self.max);
        if clamped == self.value {
            return false;
        }
        self.value = clamped;
        true
    }
}

/// Selector over the composite operation registry.
#[derive(Debug, Clone, Default)]
pub struct CompositeSelector {
    selected: CompositeOp,
}

impl CompositeSelector {
    pub fn selected(&self) -> CompositeOp {
        self.selected
    }

    /// Select a mode. Returns whether the selection changed.
    pub fn select(&mut self, op: CompositeOp) -> bool {
        if op == self.selected {
            return false;
        }
        self.selected = op;
        true
    }

    /// Select a mode by its string id. Unknown ids leave the selection
    /// unchanged.
    pub fn select_id(&mut self, id: &str) -> bool {
        match CompositeOp::from_id(id) {
            Some(op) => self.select(op),
            None => false,
        }
    }

    /// Modes available to the selector, in registry order.
    pub fn available(&self) -> &'static [CompositeOp] {
        CompositeOp::all()
    }
}

/// The five controls bound to the selected stack entry.
#[derive(Debug, Clone)]
pub struct StackControls {
    pub vertical_offset: SliderControl,
    pub horizontal_offset: SliderControl,
    pub fuzziness: SliderControl,
    pub opacity: SliderControl,
    pub composite: CompositeSelector,
}

impl StackControls {
    /// Control state as the dialog first comes up: offsets and fuzziness at
    /// zero, opacity at 100%, composite mode `over`.
    pub fn new() -> Self {
        Self {
            vertical_offset: SliderControl::new(-100.0, 100.0, 0.0),
            horizontal_offset: SliderControl::new(-100.0, 100.0, 0.0),
            fuzziness: SliderControl::new(0.0, 100.0, 0.0),
            opacity: SliderControl::new(0.0, 100.0, 100.0),
            composite: CompositeSelector::default(),
        }
    }
}

impl Default for StackControls {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_slider_clamps_into_range() {
        let mut slider = SliderControl::new(-100.0, 100.0, 0.0);

        assert!(slider.set(150.0));
        assert_eq!(slider.value(), 100.0);

        assert!(slider.set(-150.0));
        assert_eq!(slider.value(), -100.0);

        assert!(slider.set(42.0));
        assert_eq!(slider.value(), 42.0);
    }

    #[test]
    fn test_slider_reports_unchanged_sets() {
        let mut slider = SliderControl::new(0.0, 100.0, 40.0);
        assert!(!slider.set(40.0));
        // Clamped to the same bound twice: only the first set changes it.
        assert!(slider.set(120.0));
        assert!(!slider.set(130.0));
    }

    #[test]
    fn test_selector_by_id() {
        let mut selector = CompositeSelector::default();
        assert_eq!(selector.selected(), CompositeOp::Over);

        assert!(selector.select_id("multiply"));
        assert_eq!(selector.selected(), CompositeOp::Multiply);

        // Unknown id keeps the current selection.
        assert!(!selector.select_id("luminosity"));
        assert_eq!(selector.selected(), CompositeOp::Multiply);

        assert!(!selector.select_id("multiply"));
    }

    #[test]
    fn test_selector_enumerates_the_registry() {
        let selector = CompositeSelector::default();
        assert!(selector.available().contains(&CompositeOp::Over));
        assert!(selector.available().contains(&CompositeOp::Erase));
    }

    #[test]
    fn test_initial_control_values() {
        let controls = StackControls::new();
        assert_eq!(controls.vertical_offset.value(), 0.0);
        assert_eq!(controls.horizontal_offset.value(), 0.0);
        assert_eq!(controls.fuzziness.value(), 0.0);
        assert_eq!(controls.opacity.value(), 100.0);
        assert_eq!(controls.composite.selected(), CompositeOp::Over);
    }
}
