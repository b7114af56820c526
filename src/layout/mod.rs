//! Panel layout solving and gate geometry

pub mod gate;
pub mod solver;

pub use gate::{
    apply_gate, apply_gate_with, gate_footprint, gate_sides, panel_offsets, spigots_for_panel,
    Adjacency, GateFootprint, GateSides, GateSpec, Segment, SegmentKind, SideOffsets,
};
pub use solver::{
    solve_panel_layout, solve_panel_layout_with, solve_reserved, solve_reserved_for_count,
    PanelLayout,
};
