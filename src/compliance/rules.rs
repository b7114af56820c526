//! Family-specific spacing caps applied after row selection
//!
//! Caps only ever lower a value. They never influence which row was chosen.

use serde::{Deserialize, Serialize};

use crate::core::types::{FixingType, HardwareFamily, WindZone};

/// What triggers a clamp rule
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ClampTrigger {
    Fixing(FixingType),
    Zone(WindZone),
}

/// A downward cap on internal and/or edge spacing
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ClampRule {
    pub name: &'static str,
    pub trigger: ClampTrigger,
    pub max_internal_mm: Option<f64>,
    pub max_edge_mm: Option<f64>,
}

impl ClampRule {
    pub fn applies(&self, zone: WindZone, fixing: Option<FixingType>) -> bool {
        match self.trigger {
            ClampTrigger::Fixing(wanted) => fixing == Some(wanted),
            ClampTrigger::Zone(wanted) => zone == wanted,
        }
    }
}

const SPIGOT_RULES: &[ClampRule] = &[
    ClampRule {
        name: "timber-spigot",
        trigger: ClampTrigger::Fixing(FixingType::Timber),
        max_internal_mm: Some(700.0),
        max_edge_mm: Some(200.0),
    },
    ClampRule {
        name: "extreme-wind-spigot",
        trigger: ClampTrigger::Zone(WindZone::ExtraHigh),
        max_internal_mm: Some(600.0),
        max_edge_mm: None,
    },
];

const STANDOFF_RULES: &[ClampRule] = &[ClampRule {
    name: "timber-standoff",
    trigger: ClampTrigger::Fixing(FixingType::Timber),
    max_internal_mm: Some(600.0),
    max_edge_mm: Some(175.0),
}];

const POST_RULES: &[ClampRule] = &[ClampRule {
    name: "timber-clamp",
    trigger: ClampTrigger::Fixing(FixingType::Timber),
    max_internal_mm: Some(900.0),
    max_edge_mm: None,
}];

const CHANNEL_RULES: &[ClampRule] = &[
    ClampRule {
        name: "timber-channel",
        trigger: ClampTrigger::Fixing(FixingType::Timber),
        max_internal_mm: Some(250.0),
        max_edge_mm: Some(100.0),
    },
    ClampRule {
        name: "extreme-wind-channel",
        trigger: ClampTrigger::Zone(WindZone::ExtraHigh),
        max_internal_mm: None,
        max_edge_mm: Some(100.0),
    },
];

pub fn rules_for(family: HardwareFamily) -> &'static [ClampRule] {
    match family {
        HardwareFamily::Spigot => SPIGOT_RULES,
        HardwareFamily::Standoff => STANDOFF_RULES,
        HardwareFamily::Post => POST_RULES,
        HardwareFamily::Channel => CHANNEL_RULES,
    }
}
