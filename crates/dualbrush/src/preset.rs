//! Stacked preset records.

use std::sync::Arc;

use serde::{Deserialize, Serialize};

use scumble_paintop::{CompositeOp, PaintOpPreset};

/// One entry of the dual brush stack.
///
/// Pairs a brush preset from the resource store with the parameters used
/// when its dabs are composited over the primary stroke. The resolved
/// resource handle is looked up once at insertion time and is not
/// serialized; it is re-resolved from `preset_name`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StackedPreset {
    /// Name of the brush preset in the resource store.
    pub preset_name: String,
    /// Resolved preset resource. `None` when the name did not resolve at
    /// insertion time; consumers must tolerate the absence.
    #[serde(skip)]
    pub paintop: Option<Arc<PaintOpPreset>>,
    /// Blend mode used to composite this preset's dabs.
    pub composite_op: CompositeOp,
    /// Opacity percentage, 0-100.
    pub opacity: f32,
    /// Dab randomization, 0-100.
    pub fuzziness: f32,
    /// Vertical placement offset, -100..100.
    pub vertical_offset: f32,
    /// Horizontal placement offset, -100..100.
    pub horizontal_offset: f32,
}
