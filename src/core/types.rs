//! Core type definitions used throughout the codebase

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::core::error::BalustradeError;

/// Structural use the glass is certified for
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StructuralSystem {
    Balustrade,
    Pool,
}

impl FromStr for StructuralSystem {
    type Err = BalustradeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "balustrade" => Ok(Self::Balustrade),
            "pool" | "pool fence" | "pool_fence" => Ok(Self::Pool),
            other => Err(BalustradeError::UnknownCode(other.to_string())),
        }
    }
}

/// Wind-load category
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum WindZone {
    #[serde(rename = "L")]
    Low,
    #[serde(rename = "M")]
    Medium,
    #[serde(rename = "H")]
    High,
    #[serde(rename = "VH")]
    VeryHigh,
    #[serde(rename = "EH")]
    ExtraHigh,
}

impl WindZone {
    pub fn code(&self) -> &'static str {
        match self {
            Self::Low => "L",
            Self::Medium => "M",
            Self::High => "H",
            Self::VeryHigh => "VH",
            Self::ExtraHigh => "EH",
        }
    }
}

impl FromStr for WindZone {
    type Err = BalustradeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_uppercase().as_str() {
            "L" => Ok(Self::Low),
            "M" => Ok(Self::Medium),
            "H" => Ok(Self::High),
            "VH" => Ok(Self::VeryHigh),
            "EH" => Ok(Self::ExtraHigh),
            other => Err(BalustradeError::UnknownCode(other.to_string())),
        }
    }
}

impl fmt::Display for WindZone {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

/// Hardware family; each has its own PS1 spacing table
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum HardwareFamily {
    Spigot,
    Channel,
    Standoff,
    Post,
}

impl HardwareFamily {
    pub const ALL: [HardwareFamily; 4] = [
        HardwareFamily::Spigot,
        HardwareFamily::Channel,
        HardwareFamily::Standoff,
        HardwareFamily::Post,
    ];
}

impl FromStr for HardwareFamily {
    type Err = BalustradeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "spigot" => Ok(Self::Spigot),
            "channel" => Ok(Self::Channel),
            "standoff" => Ok(Self::Standoff),
            "post" => Ok(Self::Post),
            other => Err(BalustradeError::UnknownCode(other.to_string())),
        }
    }
}

/// How the hardware is fixed to the substrate
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FixingType {
    Concrete,
    Timber,
    Steel,
    CoreDrilled,
}

/// Hardware finish
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Finish {
    /// Satin stainless
    #[serde(rename = "SS")]
    SatinStainless,
    /// Mirror-polished stainless
    #[serde(rename = "MSS")]
    MirrorStainless,
    #[serde(rename = "BLK")]
    Black,
    #[serde(rename = "WHT")]
    White,
    /// Custom powdercoat colour, made to order
    #[serde(rename = "PC")]
    Custom,
}

impl Finish {
    pub fn code(&self) -> &'static str {
        match self {
            Self::SatinStainless => "SS",
            Self::MirrorStainless => "MSS",
            Self::Black => "BLK",
            Self::White => "WHT",
            Self::Custom => "PC",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::SatinStainless => "satin stainless",
            Self::MirrorStainless => "mirror stainless",
            Self::Black => "matte black",
            Self::White => "gloss white",
            Self::Custom => "custom powdercoat",
        }
    }

    /// Custom colours carry a per-item surcharge
    pub fn has_surcharge(&self) -> bool {
        matches!(self, Self::Custom)
    }

    pub fn from_code(code: &str) -> Option<Self> {
        match code {
            "SS" => Some(Self::SatinStainless),
            "MSS" => Some(Self::MirrorStainless),
            "BLK" => Some(Self::Black),
            "WHT" => Some(Self::White),
            "PC" => Some(Self::Custom),
            _ => None,
        }
    }
}

/// Top handrail option
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Handrail {
    #[default]
    None,
    /// 25mm slotted rail over the glass edge
    Slot25,
    /// 50mm round rail on brackets
    Round50,
    /// 40mm square slotted rail
    Square40,
}

impl Handrail {
    pub fn code(&self) -> Option<&'static str> {
        match self {
            Self::None => None,
            Self::Slot25 => Some("HR25"),
            Self::Round50 => Some("HR50"),
            Self::Square40 => Some("HRSQ40"),
        }
    }
}

/// Plan shape of the balustrade run
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Shape {
    Inline,
    Corner,
    #[serde(rename = "u", alias = "U")]
    UShape,
    Enclosed,
    Custom,
}

impl Shape {
    /// Number of sides the shape requires; `None` for custom shapes
    pub fn expected_sides(&self) -> Option<usize> {
        match self {
            Self::Inline => Some(1),
            Self::Corner => Some(2),
            Self::UShape => Some(3),
            Self::Enclosed => Some(4),
            Self::Custom => None,
        }
    }

    /// Corners between sides
    pub fn corner_count(&self, side_count: usize) -> usize {
        match self {
            Self::Enclosed => side_count,
            _ => side_count.saturating_sub(1),
        }
    }

    /// Open ends terminating against a wall
    pub fn wall_end_count(&self) -> usize {
        match self {
            Self::Enclosed => 0,
            _ => 2,
        }
    }
}

/// How many fixing points each panel carries
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SpigotsPerPanel {
    /// As many as the spacing table demands
    #[default]
    Auto,
    Two,
    Three,
}

impl SpigotsPerPanel {
    pub fn fixed_count(&self) -> Option<u32> {
        match self {
            Self::Auto => None,
            Self::Two => Some(2),
            Self::Three => Some(3),
        }
    }
}
