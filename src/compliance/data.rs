//! Built-in PS1 spacing rows
//!
//! Bands per (system, thickness, zone) do not overlap. The 1100-1101 seam is a
//! deliberate gap in the certified data; heights inside it resolve by fallback.

use super::table::SpacingRow;
use crate::core::types::{HardwareFamily, StructuralSystem, WindZone};
use crate::core::types::StructuralSystem::{Balustrade, Pool};
use crate::core::types::WindZone::{ExtraHigh as EH, High as H, Low as L, Medium as M, VeryHigh as VH};

const fn row(
    system: StructuralSystem,
    thickness: f64,
    band: (f64, f64),
    zone: WindZone,
    internal: f64,
    edge: f64,
) -> SpacingRow {
    SpacingRow::new(system, thickness, band.0, band.1, zone, internal, edge)
}

const LOW_BAND: (f64, f64) = (900.0, 1100.0);
const HIGH_BAND: (f64, f64) = (1101.0, 1300.0);
const POOL_BAND: (f64, f64) = (1200.0, 1400.0);

pub const SPIGOT_ROWS: &[SpacingRow] = &[
    row(Balustrade, 12.0, LOW_BAND, L, 1200.0, 350.0),
    row(Balustrade, 12.0, LOW_BAND, M, 1100.0, 300.0),
    row(Balustrade, 12.0, LOW_BAND, H, 950.0, 300.0),
    row(Balustrade, 12.0, LOW_BAND, VH, 800.0, 250.0),
    row(Balustrade, 12.0, LOW_BAND, EH, 650.0, 200.0),
    row(Balustrade, 12.0, HIGH_BAND, L, 1050.0, 300.0),
    row(Balustrade, 12.0, HIGH_BAND, M, 950.0, 300.0),
    row(Balustrade, 12.0, HIGH_BAND, H, 850.0, 250.0),
    row(Balustrade, 12.0, HIGH_BAND, VH, 700.0, 225.0),
    row(Balustrade, 12.0, HIGH_BAND, EH, 550.0, 175.0),
    row(Balustrade, 15.0, LOW_BAND, L, 1400.0, 400.0),
    row(Balustrade, 15.0, LOW_BAND, M, 1300.0, 350.0),
    row(Balustrade, 15.0, LOW_BAND, H, 1100.0, 325.0),
    row(Balustrade, 15.0, LOW_BAND, VH, 950.0, 300.0),
    row(Balustrade, 15.0, LOW_BAND, EH, 800.0, 250.0),
    row(Balustrade, 15.0, HIGH_BAND, L, 1250.0, 350.0),
    row(Balustrade, 15.0, HIGH_BAND, M, 1150.0, 325.0),
    row(Balustrade, 15.0, HIGH_BAND, H, 1000.0, 300.0),
    row(Balustrade, 15.0, HIGH_BAND, VH, 850.0, 275.0),
    row(Balustrade, 15.0, HIGH_BAND, EH, 700.0, 225.0),
    row(Pool, 12.0, POOL_BAND, L, 1000.0, 300.0),
    row(Pool, 12.0, POOL_BAND, M, 900.0, 275.0),
    row(Pool, 12.0, POOL_BAND, H, 800.0, 250.0),
    row(Pool, 12.0, POOL_BAND, VH, 650.0, 200.0),
    row(Pool, 15.0, POOL_BAND, L, 1200.0, 350.0),
    row(Pool, 15.0, POOL_BAND, M, 1100.0, 325.0),
    row(Pool, 15.0, POOL_BAND, H, 950.0, 300.0),
    row(Pool, 15.0, POOL_BAND, VH, 800.0, 250.0),
    row(Pool, 15.0, POOL_BAND, EH, 650.0, 200.0),
];

pub const STANDOFF_ROWS: &[SpacingRow] = &[
    row(Balustrade, 12.0, LOW_BAND, L, 1000.0, 250.0),
    row(Balustrade, 12.0, LOW_BAND, M, 900.0, 250.0),
    row(Balustrade, 12.0, LOW_BAND, H, 800.0, 225.0),
    row(Balustrade, 12.0, LOW_BAND, VH, 650.0, 200.0),
    row(Balustrade, 12.0, HIGH_BAND, L, 900.0, 225.0),
    row(Balustrade, 12.0, HIGH_BAND, M, 800.0, 225.0),
    row(Balustrade, 12.0, HIGH_BAND, H, 700.0, 200.0),
    row(Balustrade, 12.0, HIGH_BAND, VH, 600.0, 175.0),
    row(Balustrade, 15.0, LOW_BAND, L, 1200.0, 300.0),
    row(Balustrade, 15.0, LOW_BAND, M, 1100.0, 275.0),
    row(Balustrade, 15.0, LOW_BAND, H, 950.0, 250.0),
    row(Balustrade, 15.0, LOW_BAND, VH, 800.0, 225.0),
    row(Balustrade, 15.0, LOW_BAND, EH, 700.0, 200.0),
    row(Balustrade, 15.0, HIGH_BAND, L, 1100.0, 275.0),
    row(Balustrade, 15.0, HIGH_BAND, M, 1000.0, 250.0),
    row(Balustrade, 15.0, HIGH_BAND, H, 850.0, 225.0),
    row(Balustrade, 15.0, HIGH_BAND, VH, 700.0, 200.0),
    row(Pool, 15.0, POOL_BAND, L, 1000.0, 250.0),
    row(Pool, 15.0, POOL_BAND, M, 900.0, 250.0),
    row(Pool, 15.0, POOL_BAND, H, 800.0, 225.0),
];

pub const POST_ROWS: &[SpacingRow] = &[
    row(Balustrade, 10.0, LOW_BAND, L, 1100.0, 300.0),
    row(Balustrade, 10.0, LOW_BAND, M, 1000.0, 275.0),
    row(Balustrade, 10.0, LOW_BAND, H, 850.0, 250.0),
    row(Balustrade, 12.0, LOW_BAND, L, 1200.0, 325.0),
    row(Balustrade, 12.0, LOW_BAND, M, 1100.0, 300.0),
    row(Balustrade, 12.0, LOW_BAND, H, 950.0, 275.0),
    row(Balustrade, 12.0, LOW_BAND, VH, 800.0, 250.0),
    row(Balustrade, 12.0, HIGH_BAND, L, 1050.0, 300.0),
    row(Balustrade, 12.0, HIGH_BAND, M, 950.0, 275.0),
    row(Balustrade, 12.0, HIGH_BAND, H, 850.0, 250.0),
    row(Pool, 12.0, POOL_BAND, L, 1000.0, 275.0),
    row(Pool, 12.0, POOL_BAND, M, 900.0, 250.0),
];

pub const CHANNEL_ROWS: &[SpacingRow] = &[
    row(Balustrade, 12.0, LOW_BAND, L, 500.0, 150.0),
    row(Balustrade, 12.0, LOW_BAND, M, 450.0, 150.0),
    row(Balustrade, 12.0, LOW_BAND, H, 400.0, 125.0),
    row(Balustrade, 12.0, LOW_BAND, VH, 350.0, 125.0),
    row(Balustrade, 12.0, LOW_BAND, EH, 300.0, 100.0),
    row(Balustrade, 15.0, LOW_BAND, L, 600.0, 150.0),
    row(Balustrade, 15.0, LOW_BAND, M, 550.0, 150.0),
    row(Balustrade, 15.0, LOW_BAND, H, 500.0, 150.0),
    row(Balustrade, 15.0, LOW_BAND, VH, 450.0, 125.0),
    row(Balustrade, 15.0, LOW_BAND, EH, 400.0, 125.0),
    row(Balustrade, 15.0, HIGH_BAND, L, 500.0, 150.0),
    row(Balustrade, 15.0, HIGH_BAND, M, 450.0, 125.0),
    row(Balustrade, 15.0, HIGH_BAND, H, 400.0, 125.0),
    row(Pool, 12.0, POOL_BAND, L, 450.0, 125.0),
    row(Pool, 12.0, POOL_BAND, M, 400.0, 125.0),
    row(Pool, 12.0, POOL_BAND, H, 350.0, 100.0),
];

pub fn rows_for(family: HardwareFamily) -> &'static [SpacingRow] {
    match family {
        HardwareFamily::Spigot => SPIGOT_ROWS,
        HardwareFamily::Standoff => STANDOFF_ROWS,
        HardwareFamily::Post => POST_ROWS,
        HardwareFamily::Channel => CHANNEL_ROWS,
    }
}
