//! Composite (blend) operation registry.

use serde::{Deserialize, Serialize};

/// Pixel-combination modes available when compositing brush dabs.
///
/// Every mode has a stable string id used in stored settings and UI
/// selectors; [`CompositeOp::all`] enumerates the registry in the order
/// selectors present it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CompositeOp {
    #[default]
    Over,
    Multiply,
    Screen,
    Overlay,
    Darken,
    Lighten,
    Dodge,
    Burn,
    Add,
    Subtract,
    Erase,
}

impl CompositeOp {
    /// Stable string id of this mode.
    pub const fn id(self) -> &'static str {
        use CompositeOp::*;
        match self {
            Over => "over",
            Multiply => "multiply",
            Screen => "screen",
            Overlay => "overlay",
            Darken => "darken",
            Lighten => "lighten",
            Dodge => "dodge",
            Burn => "burn",
            Add => "add",
            Subtract => "subtract",
            Erase => "erase",
        }
    }

    /// Look up a mode by its string id.
    pub fn from_id(id: &str) -> Option<Self> {
        use CompositeOp::*;
        Some(match id {
            "over" => Over,
            "multiply" => Multiply,
            "screen" => Screen,
            "overlay" => Overlay,
            "darken" => Darken,
            "lighten" => Lighten,
            "dodge" => Dodge,
            "burn" => Burn,
            "add" => Add,
            "subtract" => Subtract,
            "erase" => Erase,
            _ => {
                return None;
            }
        })
    }

    /// The full registry, in selector order.
    pub const fn all() -> &'static [CompositeOp] {
        use CompositeOp::*;
        &[
            Over, Multiply, Screen, Overlay, Darken, Lighten, Dodge, Burn, Add, Subtract, Erase,
        ]
    }
}
