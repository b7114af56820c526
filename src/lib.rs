//! Balustrade Core - frameless glass balustrade configurator engines
//!
//! PS1 spacing lookup, panel layout solving, gate geometry and hardware
//! bill-of-materials derivation.

pub mod bom;
pub mod calculation;
pub mod compliance;
pub mod core;
pub mod layout;

pub use bom::{build_order_list, OrderItem};
pub use calculation::{calculate, CalculationError, CalculationInput, CalculationResult};
pub use compliance::{resolve_spacing, ResolvedSpacing};
pub use layout::{apply_gate, solve_panel_layout, spigots_for_panel, GateSpec, PanelLayout};
