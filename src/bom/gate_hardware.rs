//! Gate hinge and latch resolution

use serde::{Deserialize, Serialize};

use super::catalog::{
    HINGE_GLASS_TO_GLASS, HINGE_WALL_TO_GLASS, LATCH_GLASS_TO_GLASS, LATCH_WALL_TO_GLASS,
};
use super::order::OrderList;
use crate::calculation::CalculationResult;
use crate::layout::{gate_sides, Adjacency};

/// Hinge and latch counts by what they fix to
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GateTally {
    pub hinge_glass: u32,
    pub hinge_wall: u32,
    pub latch_glass: u32,
    pub latch_wall: u32,
}

impl GateTally {
    pub fn gate_count(&self) -> u32 {
        self.hinge_glass + self.hinge_wall
    }

    /// One line per non-zero tally
    pub fn emit(&self, order: &mut OrderList) {
        order.push(HINGE_GLASS_TO_GLASS, self.hinge_glass as f64);
        order.push(HINGE_WALL_TO_GLASS, self.hinge_wall as f64);
        order.push(LATCH_GLASS_TO_GLASS, self.latch_glass as f64);
        order.push(LATCH_WALL_TO_GLASS, self.latch_wall as f64);
    }
}

/// Classify every enabled gate in the result
pub fn tally_gates(result: &CalculationResult) -> GateTally {
    let mut tally = GateTally::default();
    for side in &result.sides {
        let Some(gate) = side.gate.filter(|g| g.enabled) else {
            continue;
        };
        let sides = gate_sides(&gate, side.layout.panel_count());
        match sides.hinge {
            Adjacency::Glass => tally.hinge_glass += 1,
            Adjacency::Wall => tally.hinge_wall += 1,
        }
        match sides.latch {
            Adjacency::Glass => tally.latch_glass += 1,
            Adjacency::Wall => tally.latch_wall += 1,
        }
    }
    tally
}
