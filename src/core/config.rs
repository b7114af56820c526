//! Solver configuration with documented constants
//!
//! Every tunable number used by the layout solver, the gate geometry and the
//! BOM quantity formulas is collected here.

use serde::{Deserialize, Serialize};

use crate::core::error::{BalustradeError, Result};

/// Configuration for the layout, gate and BOM engines
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SolverConfig {
    // === PANEL SOLVER ===
    /// Narrowest glass panel the solver will ever propose (mm)
    ///
    /// Below this width a panel cannot carry two fixing points.
    pub min_panel_width_mm: f64,

    /// Highest panel count tried per side before giving up
    ///
    /// Bounds the search so an infeasible run terminates.
    pub max_panel_count: usize,

    // === GATES ===
    /// Narrowest gate leaf (mm)
    pub gate_leaf_min_mm: f64,

    /// Widest gate leaf (mm)
    ///
    /// Hinges are only rated for leaves up to this width.
    pub gate_leaf_max_mm: f64,

    /// Clearance between a hinge and an adjacent glass panel (mm)
    pub hinge_gap_to_glass_mm: f64,

    /// Clearance between a latch and an adjacent glass panel (mm)
    pub latch_gap_to_glass_mm: f64,

    /// Clearance between a hinge and a wall (mm)
    pub hinge_gap_to_wall_mm: f64,

    /// Clearance between a latch and a wall (mm)
    pub latch_gap_to_wall_mm: f64,

    // === BOM ===
    /// Stock length of one handrail (mm)
    pub handrail_length_mm: f64,

    /// Length of glass covered by one gasket pack (mm)
    pub gasket_length_mm: f64,

    /// Fixing points covered by one bag of core-drill grout
    pub grout_points_per_bag: u32,

    /// Measure handrail and gasket over the run minus gate openings
    ///
    /// Off by default: quantities are taken over the full run.
    pub handrail_excludes_gates: bool,
}

impl Default for SolverConfig {
    fn default() -> Self {
        Self {
            min_panel_width_mm: 200.0,
            max_panel_count: 100,

            gate_leaf_min_mm: 350.0,
            gate_leaf_max_mm: 1000.0,
            hinge_gap_to_glass_mm: 5.0,
            latch_gap_to_glass_mm: 10.0,
            hinge_gap_to_wall_mm: 7.0,
            latch_gap_to_wall_mm: 7.5,

            handrail_length_mm: 5800.0,
            gasket_length_mm: 1000.0,
            grout_points_per_bag: 6,
            handrail_excludes_gates: false,
        }
    }
}

impl SolverConfig {
    /// Create a new config with default values
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse a config from TOML; missing keys keep their defaults
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let config: SolverConfig = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    /// Load a config from a TOML file
    pub fn load(path: &std::path::Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        Self::from_toml_str(&content)
    }

    /// Validate configuration for internal consistency
    pub fn validate(&self) -> Result<()> {
        if self.min_panel_width_mm <= 0.0 {
            return Err(BalustradeError::InvalidConfig(
                "min_panel_width_mm must be positive".into(),
            ));
        }

        if self.max_panel_count == 0 {
            return Err(BalustradeError::InvalidConfig(
                "max_panel_count must be at least 1".into(),
            ));
        }

        if self.gate_leaf_min_mm > self.gate_leaf_max_mm {
            return Err(BalustradeError::InvalidConfig(format!(
                "gate_leaf_min_mm ({}) should be <= gate_leaf_max_mm ({})",
                self.gate_leaf_min_mm, self.gate_leaf_max_mm
            )));
        }

        let gaps = [
            self.hinge_gap_to_glass_mm,
            self.latch_gap_to_glass_mm,
            self.hinge_gap_to_wall_mm,
            self.latch_gap_to_wall_mm,
        ];
        if gaps.iter().any(|g| *g < 0.0) {
            return Err(BalustradeError::InvalidConfig(
                "Gate clearances must not be negative".into(),
            ));
        }

        if self.handrail_length_mm <= 0.0 || self.gasket_length_mm <= 0.0 {
            return Err(BalustradeError::InvalidConfig(
                "Handrail and gasket lengths must be positive".into(),
            ));
        }

        if self.grout_points_per_bag == 0 {
            return Err(BalustradeError::InvalidConfig(
                "grout_points_per_bag must be at least 1".into(),
            ));
        }

        Ok(())
    }
}

// === GLOBAL CONFIG ACCESS ===

use std::sync::OnceLock;

static CONFIG: OnceLock<SolverConfig> = OnceLock::new();

/// Get the global solver config (initializes with defaults if not set)
pub fn config() -> &'static SolverConfig {
    CONFIG.get_or_init(SolverConfig::default)
}

/// Set the global solver config (can only be called once)
///
/// Returns Err if config was already set.
pub fn set_config(config: SolverConfig) -> std::result::Result<(), SolverConfig> {
    CONFIG.set(config)
}
