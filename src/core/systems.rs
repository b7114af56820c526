//! Hardware system profiles
//!
//! A system key (the product code the customer picks) selects a profile that
//! carries everything family-specific: which spacing table applies, how the
//! BOM is built, and the panel/gap limits the solver works within.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::core::error::BalustradeError;
use crate::core::types::HardwareFamily;

/// Selectable hardware system
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SystemKey {
    /// Round core-fix spigot
    #[serde(rename = "SP12")]
    Sp12,
    /// Base-plate spigot
    #[serde(rename = "SP13")]
    Sp13,
    /// 50mm disc standoff
    #[serde(rename = "SD50")]
    Sd50,
    /// Fascia clamp standoff
    #[serde(rename = "SC40")]
    Sc40,
    /// Aluminium base channel kit
    #[serde(rename = "ACK")]
    Ack,
}

impl SystemKey {
    pub const ALL: [SystemKey; 5] = [
        SystemKey::Sp12,
        SystemKey::Sp13,
        SystemKey::Sd50,
        SystemKey::Sc40,
        SystemKey::Ack,
    ];

    pub fn code(&self) -> &'static str {
        self.profile().code_prefix
    }

    pub fn profile(&self) -> &'static SystemProfile {
        match self {
            Self::Sp12 => &SP12,
            Self::Sp13 => &SP13,
            Self::Sd50 => &SD50,
            Self::Sc40 => &SC40,
            Self::Ack => &ACK,
        }
    }
}

impl FromStr for SystemKey {
    type Err = BalustradeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_ascii_uppercase();
        Self::ALL
            .into_iter()
            .find(|key| key.code() == wanted)
            .ok_or(BalustradeError::UnknownCode(wanted))
    }
}

impl fmt::Display for SystemKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

/// How a family's order list is derived
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum BomKind {
    SpigotPost,
    DiscStandoff,
    ClampStandoff,
    ChannelKit,
}

/// Width search granularity for the panel solver
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum PanelStep {
    /// Panels are cut in multiples of this many mm
    Stepped(f64),
    /// Any whole-mm width
    Continuous,
}

impl PanelStep {
    /// Snap granularity in mm
    pub fn snap_mm(&self) -> f64 {
        match self {
            Self::Stepped(step) if *step > 0.0 => *step,
            _ => 1.0,
        }
    }
}

/// Static, per-system reference data
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SystemProfile {
    pub key: SystemKey,
    pub name: &'static str,
    pub family: HardwareFamily,
    pub bom_kind: BomKind,
    /// Leading part of every primary hardware code
    pub code_prefix: &'static str,
    pub max_panel_width_mm: f64,
    pub panel_step: PanelStep,
    pub gap_min_mm: f64,
    pub gap_max_mm: f64,
    /// Hardware pieces at each fixing position (standoffs fix top and bottom)
    pub pieces_per_position: u32,
    /// Length covered by one channel kit; zero for point-fixed systems
    pub kit_length_mm: f64,
}

static SP12: SystemProfile = SystemProfile {
    key: SystemKey::Sp12,
    name: "SP12 core-fix spigot",
    family: HardwareFamily::Spigot,
    bom_kind: BomKind::SpigotPost,
    code_prefix: "SP12",
    max_panel_width_mm: 1800.0,
    panel_step: PanelStep::Stepped(25.0),
    gap_min_mm: 15.0,
    gap_max_mm: 25.0,
    pieces_per_position: 1,
    kit_length_mm: 0.0,
};

static SP13: SystemProfile = SystemProfile {
    key: SystemKey::Sp13,
    name: "SP13 base-plate spigot",
    family: HardwareFamily::Spigot,
    bom_kind: BomKind::SpigotPost,
    code_prefix: "SP13",
    max_panel_width_mm: 1800.0,
    panel_step: PanelStep::Stepped(25.0),
    gap_min_mm: 15.0,
    gap_max_mm: 25.0,
    pieces_per_position: 1,
    kit_length_mm: 0.0,
};

static SD50: SystemProfile = SystemProfile {
    key: SystemKey::Sd50,
    name: "SD50 disc standoff",
    family: HardwareFamily::Standoff,
    bom_kind: BomKind::DiscStandoff,
    code_prefix: "SD50",
    max_panel_width_mm: 1500.0,
    panel_step: PanelStep::Stepped(10.0),
    gap_min_mm: 10.0,
    gap_max_mm: 20.0,
    pieces_per_position: 2,
    kit_length_mm: 0.0,
};

static SC40: SystemProfile = SystemProfile {
    key: SystemKey::Sc40,
    name: "SC40 fascia clamp",
    family: HardwareFamily::Post,
    bom_kind: BomKind::ClampStandoff,
    code_prefix: "SC40",
    max_panel_width_mm: 1200.0,
    panel_step: PanelStep::Stepped(10.0),
    gap_min_mm: 15.0,
    gap_max_mm: 30.0,
    pieces_per_position: 2,
    kit_length_mm: 0.0,
};

static ACK: SystemProfile = SystemProfile {
    key: SystemKey::Ack,
    name: "Aluminium base channel kit",
    family: HardwareFamily::Channel,
    bom_kind: BomKind::ChannelKit,
    code_prefix: "ACK",
    max_panel_width_mm: 2000.0,
    panel_step: PanelStep::Continuous,
    gap_min_mm: 3.0,
    gap_max_mm: 10.0,
    pieces_per_position: 1,
    kit_length_mm: 4000.0,
};
