//! Host-side contracts shared between the paint engine and option pages.
//!
//! This crate defines the seams an option page plugs into:
//! - [`properties::PropertiesConfiguration`] - the generic persisted-settings container
//! - [`option::PaintOpOption`] - the pluggable option page contract
//! - [`compositeop::CompositeOp`] - the composite (blend) operation registry
//! - [`resources`] - the brush preset resource server

pub mod compositeop;
pub mod error;
pub mod option;
pub mod properties;
pub mod resources;

pub use compositeop::*;
pub use error::*;
pub use option::*;
pub use properties::*;
pub use resources::*;
