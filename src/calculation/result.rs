//! Calculation response and pipeline errors

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::bom::OrderItem;
use crate::compliance::ResolvedSpacing;
use crate::core::systems::SystemKey;
use crate::core::types::{HardwareFamily, StructuralSystem, WindZone};
use crate::layout::{GateSides, GateSpec, PanelLayout, SegmentKind, SideOffsets};

/// Solved geometry for one side
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SideResult {
    pub index: usize,
    pub run_mm: f64,
    pub layout: PanelLayout,
    /// The gate after re-clamping to this layout
    pub gate: Option<GateSpec>,
    pub gate_sides: Option<GateSides>,
    pub offsets: SideOffsets,
    /// Fixing positions per panel, left to right
    pub spigots_per_panel: Vec<u32>,
}

impl SideResult {
    pub fn spigot_count(&self) -> u32 {
        self.spigots_per_panel.iter().sum()
    }

    /// Gate leaf plus its clearances; zero without a gate
    pub fn gate_footprint_mm(&self) -> f64 {
        if self.gate.is_none() {
            return 0.0;
        }
        self.offsets
            .segments
            .iter()
            .filter(|s| {
                matches!(
                    s.kind,
                    SegmentKind::HingeGap | SegmentKind::Leaf | SegmentKind::LatchGap
                )
            })
            .map(|s| s.width_mm)
            .sum()
    }
}

/// Everything handed to presentation and ordering
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CalculationResult {
    pub system: SystemKey,
    pub total_run_mm: f64,
    pub side_runs_mm: Vec<f64>,
    pub spacing: ResolvedSpacing,
    pub sides: Vec<SideResult>,
    pub summary: String,
    /// Fixing positions across all sides
    pub total_spigots: u32,
    /// Hardware pieces across all positions; standoffs and clamps fit two per position
    pub total_fixing_pieces: u32,
    pub order_items: Vec<OrderItem>,
}

impl CalculationResult {
    pub fn panel_count(&self) -> usize {
        self.sides.iter().map(|s| s.layout.panel_count()).sum()
    }

    pub fn gate_count(&self) -> usize {
        self.sides.iter().filter(|s| s.gate.is_some()).count()
    }
}

/// Why a calculation produced no result
#[derive(Error, Debug, Clone, PartialEq)]
pub enum CalculationError {
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error(
        "No {family:?} PS1 data for {structural_system:?} {thickness_mm}mm glass at {height_mm}mm in zone {zone}"
    )]
    NoComplianceData {
        family: HardwareFamily,
        structural_system: StructuralSystem,
        thickness_mm: f64,
        height_mm: f64,
        zone: WindZone,
    },

    #[error("Layout not achievable for side {} ({}mm) with current inputs", .side + 1, .run_mm)]
    InfeasibleLayout { side: usize, run_mm: f64 },
}
