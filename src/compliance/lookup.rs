//! PS1 row resolution with nearest-band fallback

use ordered_float::OrderedFloat;
use serde::{Deserialize, Serialize};

use super::rules::rules_for;
use super::table::{SpacingRow, SpacingTable, SpacingTables};
use crate::core::types::{FixingType, HardwareFamily, StructuralSystem, WindZone};

/// Thickness values closer than this are the same glass
pub const THICKNESS_TOLERANCE_MM: f64 = 0.01;

/// The spacing chosen for one calculation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResolvedSpacing {
    pub family: HardwareFamily,
    /// The selected table row, before any clamps
    pub row: SpacingRow,
    /// Internal spacing after clamps
    pub internal_spacing_mm: f64,
    /// Edge spacing after clamps
    pub edge_spacing_mm: f64,
    /// True when no band contained the height and the nearest band was used
    pub used_fallback: bool,
    /// Names of the clamp rules that lowered a value
    pub applied_clamps: Vec<String>,
}

/// Pick a row for the query.
///
/// Returns the row and whether the nearest-midpoint fallback was needed.
/// Among bands containing the height the first in table order wins; among
/// fallback candidates ties also go to the earlier row.
pub fn select_row(
    rows: &[SpacingRow],
    structural_system: StructuralSystem,
    thickness_mm: f64,
    height_mm: f64,
    zone: WindZone,
) -> Option<(SpacingRow, bool)> {
    let candidates: Vec<&SpacingRow> = rows
        .iter()
        .filter(|row| {
            row.structural_system == structural_system
                && (row.thickness_mm - thickness_mm).abs() <= THICKNESS_TOLERANCE_MM
                && row.zone == zone
        })
        .collect();

    if candidates.is_empty() {
        return None;
    }

    if let Some(row) = candidates.iter().find(|row| row.band_contains(height_mm)) {
        return Some((**row, false));
    }

    // min_by_key keeps the first of equal keys
    candidates
        .iter()
        .min_by_key(|row| OrderedFloat((row.band_midpoint() - height_mm).abs()))
        .map(|row| (**row, true))
}

impl SpacingTable {
    /// Resolve spacing against this table and apply the family's clamps
    pub fn resolve(
        &self,
        structural_system: StructuralSystem,
        thickness_mm: f64,
        height_mm: f64,
        zone: WindZone,
        fixing: Option<FixingType>,
    ) -> Option<ResolvedSpacing> {
        let Some((row, used_fallback)) =
            select_row(&self.rows, structural_system, thickness_mm, height_mm, zone)
        else {
            tracing::debug!(
                "No {:?} PS1 data for {:?} {}mm zone {}",
                self.family,
                structural_system,
                thickness_mm,
                zone
            );
            return None;
        };

        if used_fallback {
            tracing::info!(
                "Height {}mm outside certified bands; using nearest band [{}, {}]",
                height_mm,
                row.height_min_mm,
                row.height_max_mm
            );
        }

        let mut resolved = ResolvedSpacing {
            family: self.family,
            row,
            internal_spacing_mm: row.internal_spacing_mm,
            edge_spacing_mm: row.edge_spacing_mm,
            used_fallback,
            applied_clamps: Vec::new(),
        };

        for rule in rules_for(self.family) {
            if !rule.applies(zone, fixing) {
                continue;
            }
            let mut fired = false;
            if let Some(cap) = rule.max_internal_mm {
                if resolved.internal_spacing_mm > cap {
                    resolved.internal_spacing_mm = cap;
                    fired = true;
                }
            }
            if let Some(cap) = rule.max_edge_mm {
                if resolved.edge_spacing_mm > cap {
                    resolved.edge_spacing_mm = cap;
                    fired = true;
                }
            }
            if fired {
                tracing::debug!("Clamp rule {} lowered spacing", rule.name);
                resolved.applied_clamps.push(rule.name.to_string());
            }
        }

        Some(resolved)
    }
}

/// Resolve spacing from the given table set
pub fn resolve_spacing_in(
    tables: &SpacingTables,
    family: HardwareFamily,
    structural_system: StructuralSystem,
    thickness_mm: f64,
    height_mm: f64,
    zone: WindZone,
    fixing: Option<FixingType>,
) -> Option<ResolvedSpacing> {
    tables
        .get(family)?
        .resolve(structural_system, thickness_mm, height_mm, zone, fixing)
}

/// Resolve spacing from the built-in PS1 tables
pub fn resolve_spacing(
    family: HardwareFamily,
    structural_system: StructuralSystem,
    thickness_mm: f64,
    height_mm: f64,
    zone: WindZone,
    fixing: Option<FixingType>,
) -> Option<ResolvedSpacing> {
    resolve_spacing_in(
        SpacingTables::builtin(),
        family,
        structural_system,
        thickness_mm,
        height_mm,
        zone,
        fixing,
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn banded_rows() -> Vec<SpacingRow> {
        vec![
            SpacingRow::new(StructuralSystem::Balustrade, 12.0, 1000.0, 1150.0, WindZone::Low, 1100.0, 300.0),
            SpacingRow::new(StructuralSystem::Balustrade, 12.0, 1150.0, 1200.0, WindZone::Low, 1000.0, 280.0),
            SpacingRow::new(StructuralSystem::Balustrade, 12.0, 1000.0, 1200.0, WindZone::High, 900.0, 250.0),
        ]
    }

    #[test]
    fn test_exact_table_row() {
        let resolved = resolve_spacing(
            HardwareFamily::Spigot,
            StructuralSystem::Balustrade,
            12.0,
            1100.0,
            WindZone::VeryHigh,
            None,
        )
        .unwrap();
        assert_eq!(resolved.internal_spacing_mm, 800.0);
        assert_eq!(resolved.edge_spacing_mm, 250.0);
        assert!(!resolved.used_fallback);
        assert!(resolved.applied_clamps.is_empty());
    }

    #[test]
    fn test_fallback_picks_nearest_midpoint() {
        let (row, fallback) = select_row(
            &banded_rows(),
            StructuralSystem::Balustrade,
            12.0,
            1300.0,
            WindZone::Low,
        )
        .unwrap();
        assert!(fallback);
        // Midpoints are 1075 and 1175; 1175 is closer to 1300
        assert_eq!(row.height_min_mm, 1150.0);
        assert_eq!(row.internal_spacing_mm, 1000.0);
    }

    #[test]
    fn test_shared_band_edge_goes_to_first_row() {
        let (row, fallback) = select_row(
            &banded_rows(),
            StructuralSystem::Balustrade,
            12.0,
            1150.0,
            WindZone::Low,
        )
        .unwrap();
        assert!(!fallback);
        assert_eq!(row.height_max_mm, 1150.0);
    }

    #[test]
    fn test_fallback_tie_keeps_table_order() {
        let rows = vec![
            SpacingRow::new(StructuralSystem::Pool, 12.0, 1000.0, 1100.0, WindZone::Low, 900.0, 250.0),
            SpacingRow::new(StructuralSystem::Pool, 12.0, 1200.0, 1300.0, WindZone::Low, 800.0, 225.0),
        ];
        // 1150 is 100mm from both midpoints
        let (row, _) = select_row(&rows, StructuralSystem::Pool, 12.0, 1150.0, WindZone::Low).unwrap();
        assert_eq!(row.internal_spacing_mm, 900.0);
    }

    #[test]
    fn test_thickness_tolerance() {
        assert!(select_row(&banded_rows(), StructuralSystem::Balustrade, 12.005, 1100.0, WindZone::Low).is_some());
        assert!(select_row(&banded_rows(), StructuralSystem::Balustrade, 12.5, 1100.0, WindZone::Low).is_none());
    }

    #[test]
    fn test_unengineered_combination_is_none() {
        // No 12mm pool spigot data for extreme wind
        assert!(resolve_spacing(
            HardwareFamily::Spigot,
            StructuralSystem::Pool,
            12.0,
            1200.0,
            WindZone::ExtraHigh,
            None,
        )
        .is_none());
    }

    #[test]
    fn test_timber_clamp_lowers_values_but_keeps_row() {
        let plain = resolve_spacing(
            HardwareFamily::Spigot,
            StructuralSystem::Balustrade,
            12.0,
            1000.0,
            WindZone::Low,
            Some(FixingType::Concrete),
        )
        .unwrap();
        let timber = resolve_spacing(
            HardwareFamily::Spigot,
            StructuralSystem::Balustrade,
            12.0,
            1000.0,
            WindZone::Low,
            Some(FixingType::Timber),
        )
        .unwrap();
        assert_eq!(plain.row, timber.row);
        assert_eq!(timber.internal_spacing_mm, 700.0);
        assert_eq!(timber.edge_spacing_mm, 200.0);
        assert_eq!(timber.applied_clamps, vec!["timber-spigot".to_string()]);
    }

    #[test]
    fn test_resolution_is_deterministic() {
        let a = resolve_spacing(HardwareFamily::Standoff, StructuralSystem::Balustrade, 15.0, 1100.5, WindZone::High, None);
        let b = resolve_spacing(HardwareFamily::Standoff, StructuralSystem::Balustrade, 15.0, 1100.5, WindZone::High, None);
        assert_eq!(a, b);
        assert!(a.unwrap().used_fallback);
    }
}
