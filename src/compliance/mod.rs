//! PS1 compliance data and spacing resolution

pub mod data;
pub mod lookup;
pub mod rules;
pub mod table;

pub use lookup::{resolve_spacing, resolve_spacing_in, select_row, ResolvedSpacing};
pub use rules::{ClampRule, ClampTrigger};
pub use table::{SpacingRow, SpacingTable, SpacingTables};
