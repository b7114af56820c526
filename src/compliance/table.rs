//! PS1 spacing tables
//!
//! A table holds the certified rows for one hardware family. Rows are plain
//! values; a table is never mutated once it has been handed to the lookup.

use ahash::AHashMap;
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::sync::OnceLock;

use crate::core::error::{BalustradeError, Result};
use crate::core::types::{HardwareFamily, StructuralSystem, WindZone};

/// One certified spacing row
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SpacingRow {
    #[serde(alias = "system")]
    pub structural_system: StructuralSystem,
    pub thickness_mm: f64,
    pub height_min_mm: f64,
    pub height_max_mm: f64,
    pub zone: WindZone,
    /// Maximum distance between adjacent fixing points
    pub internal_spacing_mm: f64,
    /// Maximum distance from a panel edge to its nearest fixing point
    pub edge_spacing_mm: f64,
}

impl SpacingRow {
    pub const fn new(
        structural_system: StructuralSystem,
        thickness_mm: f64,
        height_min_mm: f64,
        height_max_mm: f64,
        zone: WindZone,
        internal_spacing_mm: f64,
        edge_spacing_mm: f64,
    ) -> Self {
        Self {
            structural_system,
            thickness_mm,
            height_min_mm,
            height_max_mm,
            zone,
            internal_spacing_mm,
            edge_spacing_mm,
        }
    }

    /// Whether the height band contains `height_mm` (inclusive both ends)
    pub fn band_contains(&self, height_mm: f64) -> bool {
        height_mm >= self.height_min_mm && height_mm <= self.height_max_mm
    }

    pub fn band_midpoint(&self) -> f64 {
        (self.height_min_mm + self.height_max_mm) / 2.0
    }

    fn validate(&self) -> std::result::Result<(), String> {
        if !(self.thickness_mm > 0.0) {
            return Err(format!("thickness {} must be positive", self.thickness_mm));
        }
        if self.height_min_mm > self.height_max_mm {
            return Err(format!(
                "height band [{}, {}] is inverted",
                self.height_min_mm, self.height_max_mm
            ));
        }
        if !(self.internal_spacing_mm > 0.0) || !(self.edge_spacing_mm > 0.0) {
            return Err("spacing values must be positive".into());
        }
        Ok(())
    }
}

/// All certified rows for one hardware family, in table order
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SpacingTable {
    pub family: HardwareFamily,
    pub rows: Vec<SpacingRow>,
}

#[derive(Deserialize)]
struct TomlTable {
    rows: Vec<SpacingRow>,
}

impl SpacingTable {
    /// Build a table, rejecting malformed rows
    pub fn new(family: HardwareFamily, rows: Vec<SpacingRow>) -> Result<Self> {
        for (index, row) in rows.iter().enumerate() {
            row.validate()
                .map_err(|reason| BalustradeError::InvalidSpacingRow {
                    family,
                    index,
                    reason,
                })?;
        }
        Ok(Self { family, rows })
    }

    /// Parse a table from TOML (`[[rows]]` array)
    pub fn parse_toml(family: HardwareFamily, content: &str) -> Result<Self> {
        let parsed: TomlTable = toml::from_str(content)?;
        Self::new(family, parsed.rows)
    }

    /// Load a table from a TOML file
    pub fn load_from_toml(family: HardwareFamily, path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        Self::parse_toml(family, &content)
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

/// Spacing tables indexed by family
#[derive(Debug, Clone, Default)]
pub struct SpacingTables {
    tables: AHashMap<HardwareFamily, SpacingTable>,
}

impl SpacingTables {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert or replace the table for its family
    pub fn insert(&mut self, table: SpacingTable) {
        tracing::debug!(
            "Registered {:?} spacing table with {} rows",
            table.family,
            table.len()
        );
        self.tables.insert(table.family, table);
    }

    pub fn get(&self, family: HardwareFamily) -> Option<&SpacingTable> {
        self.tables.get(&family)
    }

    /// The compiled-in tables, built once per process
    pub fn builtin() -> &'static SpacingTables {
        static BUILTIN: OnceLock<SpacingTables> = OnceLock::new();
        BUILTIN.get_or_init(|| {
            let mut tables = SpacingTables::new();
            for family in HardwareFamily::ALL {
                tables.insert(SpacingTable {
                    family,
                    rows: super::data::rows_for(family).to_vec(),
                });
            }
            tables
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_tables_cover_every_family() {
        let tables = SpacingTables::builtin();
        for family in HardwareFamily::ALL {
            let table = tables.get(family).unwrap();
            assert!(!table.is_empty(), "{:?} table is empty", family);
            // Builtin rows must pass the same validation as loaded ones
            assert!(SpacingTable::new(family, table.rows.clone()).is_ok());
        }
    }

    #[test]
    fn test_parse_toml_table() {
        let content = r#"
            [[rows]]
            system = "balustrade"
            thickness_mm = 12.0
            height_min_mm = 1000.0
            height_max_mm = 1150.0
            zone = "L"
            internal_spacing_mm = 1100.0
            edge_spacing_mm = 300.0
        "#;
        let table = SpacingTable::parse_toml(HardwareFamily::Spigot, content).unwrap();
        assert_eq!(table.len(), 1);
        assert_eq!(table.rows[0].zone, WindZone::Low);
        assert_eq!(table.rows[0].structural_system, StructuralSystem::Balustrade);
    }

    #[test]
    fn test_inverted_band_rejected() {
        let rows = vec![SpacingRow::new(
            StructuralSystem::Pool,
            12.0,
            1400.0,
            1200.0,
            WindZone::Low,
            900.0,
            250.0,
        )];
        let result = SpacingTable::new(HardwareFamily::Post, rows);
        assert!(matches!(
            result,
            Err(BalustradeError::InvalidSpacingRow { index: 0, .. })
        ));
    }
}
