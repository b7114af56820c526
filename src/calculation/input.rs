//! Calculation request

use serde::{Deserialize, Serialize};

use crate::core::systems::SystemKey;
use crate::core::types::{Handrail, Shape, SpigotsPerPanel, StructuralSystem, WindZone};
use crate::layout::GateSpec;

fn default_structural_system() -> StructuralSystem {
    StructuralSystem::Balustrade
}

/// Everything the user selected for one balustrade
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CalculationInput {
    pub shape: Shape,
    /// Run length of each side, in drawing order
    pub side_lengths_mm: Vec<f64>,
    pub system: SystemKey,
    #[serde(default = "default_structural_system")]
    pub structural_system: StructuralSystem,
    pub thickness_mm: Option<f64>,
    pub height_mm: Option<f64>,
    pub zone: Option<WindZone>,
    /// Free text; canonicalised before use
    #[serde(default)]
    pub fixing: String,
    /// Free text; canonicalised before use
    #[serde(default)]
    pub finish: String,
    #[serde(default)]
    pub handrail: Handrail,
    /// Gate per side, by side index
    #[serde(default)]
    pub gates: Vec<Option<GateSpec>>,
    #[serde(default)]
    pub spigots_per_panel: SpigotsPerPanel,
}

impl Default for CalculationInput {
    fn default() -> Self {
        Self {
            shape: Shape::Inline,
            side_lengths_mm: Vec::new(),
            system: SystemKey::Sp12,
            structural_system: StructuralSystem::Balustrade,
            thickness_mm: None,
            height_mm: None,
            zone: None,
            fixing: String::new(),
            finish: String::new(),
            handrail: Handrail::None,
            gates: Vec::new(),
            spigots_per_panel: SpigotsPerPanel::Auto,
        }
    }
}

impl CalculationInput {
    /// The enabled gate on `side`, if any
    pub fn gate_for_side(&self, side: usize) -> Option<&GateSpec> {
        self.gates
            .get(side)
            .and_then(|gate| gate.as_ref())
            .filter(|gate| gate.enabled)
    }

    /// Put a gate on `side`, growing the per-side list as needed
    pub fn set_gate(&mut self, side: usize, gate: GateSpec) {
        if self.gates.len() <= side {
            self.gates.resize(side + 1, None);
        }
        self.gates[side] = Some(gate);
    }

    pub fn total_run_mm(&self) -> f64 {
        self.side_lengths_mm.iter().sum()
    }
}
