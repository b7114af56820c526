//! Gate geometry
//!
//! A gate sits on one panel boundary of a side. Boundary 0 is the left end,
//! boundary `panel_count` the right end. The gate footprint (hinge clearance,
//! leaf, latch clearance) takes the place of the ordinary gap on its boundary.

use serde::{Deserialize, Serialize};

use super::solver::PanelLayout;
use crate::compliance::ResolvedSpacing;
use crate::core::config::{config, SolverConfig};

/// A gate on one side
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GateSpec {
    pub enabled: bool,
    pub panel_boundary_index: usize,
    pub hinge_on_left: bool,
    pub leaf_width_mm: f64,
}

impl GateSpec {
    /// An enabled gate
    pub fn new(panel_boundary_index: usize, hinge_on_left: bool, leaf_width_mm: f64) -> Self {
        Self {
            enabled: true,
            panel_boundary_index,
            hinge_on_left,
            leaf_width_mm,
        }
    }

    /// Pull the boundary and leaf width back into range for `panel_count` panels
    pub fn clamped(&self, panel_count: usize, cfg: &SolverConfig) -> Self {
        Self {
            panel_boundary_index: self.panel_boundary_index.min(panel_count),
            leaf_width_mm: clamp_leaf(self.leaf_width_mm, cfg),
            ..*self
        }
    }

    /// Move the gate `delta` boundaries, stopping at either end
    pub fn moved_by(&self, delta: i64, panel_count: usize) -> Self {
        let target = self.panel_boundary_index as i64 + delta;
        Self {
            panel_boundary_index: target.clamp(0, panel_count as i64) as usize,
            ..*self
        }
    }

    /// Swap hinge and latch sides; the gate stays put
    pub fn flipped(&self) -> Self {
        Self {
            hinge_on_left: !self.hinge_on_left,
            ..*self
        }
    }

    pub fn resized(&self, leaf_width_mm: f64, cfg: &SolverConfig) -> Self {
        Self {
            leaf_width_mm: clamp_leaf(leaf_width_mm, cfg),
            ..*self
        }
    }
}

fn clamp_leaf(width_mm: f64, cfg: &SolverConfig) -> f64 {
    if width_mm.is_nan() {
        return cfg.gate_leaf_min_mm;
    }
    width_mm.clamp(cfg.gate_leaf_min_mm, cfg.gate_leaf_max_mm)
}

/// What a hinge or latch fixes to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Adjacency {
    Glass,
    Wall,
}

/// Hinge and latch classification for one gate
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct GateSides {
    pub hinge: Adjacency,
    pub latch: Adjacency,
}

/// Classify hinge and latch by whether a panel exists beside them
pub fn gate_sides(spec: &GateSpec, panel_count: usize) -> GateSides {
    let boundary = spec.panel_boundary_index.min(panel_count);
    let left = if boundary > 0 {
        Adjacency::Glass
    } else {
        Adjacency::Wall
    };
    let right = if boundary < panel_count {
        Adjacency::Glass
    } else {
        Adjacency::Wall
    };
    if spec.hinge_on_left {
        GateSides {
            hinge: left,
            latch: right,
        }
    } else {
        GateSides {
            hinge: right,
            latch: left,
        }
    }
}

/// Widths making up the space a gate occupies
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GateFootprint {
    pub hinge_gap_mm: f64,
    pub leaf_mm: f64,
    pub latch_gap_mm: f64,
}

impl GateFootprint {
    pub fn total_mm(&self) -> f64 {
        self.hinge_gap_mm + self.leaf_mm + self.latch_gap_mm
    }
}

pub fn gate_footprint(spec: &GateSpec, panel_count: usize, cfg: &SolverConfig) -> GateFootprint {
    let sides = gate_sides(spec, panel_count);
    GateFootprint {
        hinge_gap_mm: match sides.hinge {
            Adjacency::Glass => cfg.hinge_gap_to_glass_mm,
            Adjacency::Wall => cfg.hinge_gap_to_wall_mm,
        },
        leaf_mm: clamp_leaf(spec.leaf_width_mm, cfg),
        latch_gap_mm: match sides.latch {
            Adjacency::Glass => cfg.latch_gap_to_glass_mm,
            Adjacency::Wall => cfg.latch_gap_to_wall_mm,
        },
    }
}

/// Kind of segment along a side
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum SegmentKind {
    Gap,
    Panel { index: usize },
    HingeGap,
    Leaf,
    LatchGap,
}

/// One piece of a side, positioned from the left end
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Segment {
    pub kind: SegmentKind,
    pub start_mm: f64,
    pub width_mm: f64,
}

/// Positions of every gap, panel and gate part along a side
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SideOffsets {
    pub segments: Vec<Segment>,
    /// The gate sits on the left end, so no leading spacer is drawn
    pub omit_leading_gap: bool,
    /// The gate sits on the right end, so no trailing spacer is drawn
    pub omit_trailing_gap: bool,
    /// Position reached after the last segment
    pub length_mm: f64,
}

struct Walker {
    segments: Vec<Segment>,
    cursor: f64,
}

impl Walker {
    fn new() -> Self {
        Self {
            segments: Vec::new(),
            cursor: 0.0,
        }
    }

    fn push(&mut self, kind: SegmentKind, width_mm: f64) {
        self.segments.push(Segment {
            kind,
            start_mm: self.cursor,
            width_mm,
        });
        self.cursor += width_mm;
    }
}

/// Offsets for a side without a gate
pub fn panel_offsets(layout: &PanelLayout) -> SideOffsets {
    let mut walker = Walker::new();
    walker.push(SegmentKind::Gap, layout.gap_mm);
    for (index, width) in layout.panel_widths_mm.iter().enumerate() {
        walker.push(SegmentKind::Panel { index }, *width);
        walker.push(SegmentKind::Gap, layout.gap_mm);
    }
    SideOffsets {
        segments: walker.segments,
        omit_leading_gap: false,
        omit_trailing_gap: false,
        length_mm: walker.cursor,
    }
}

/// Re-clamp a gate against its layout and lay the side out, using the global config
pub fn apply_gate(layout: &PanelLayout, spec: &GateSpec) -> (GateSpec, SideOffsets) {
    apply_gate_with(config(), layout, spec)
}

pub fn apply_gate_with(
    cfg: &SolverConfig,
    layout: &PanelLayout,
    spec: &GateSpec,
) -> (GateSpec, SideOffsets) {
    let panel_count = layout.panel_count();
    let updated = spec.clamped(panel_count, cfg);
    if !updated.enabled {
        return (updated, panel_offsets(layout));
    }

    let footprint = gate_footprint(&updated, panel_count, cfg);
    let boundary = updated.panel_boundary_index;
    let mut walker = Walker::new();

    for slot in 0..=panel_count {
        if slot == boundary {
            if updated.hinge_on_left {
                walker.push(SegmentKind::HingeGap, footprint.hinge_gap_mm);
                walker.push(SegmentKind::Leaf, footprint.leaf_mm);
                walker.push(SegmentKind::LatchGap, footprint.latch_gap_mm);
            } else {
                walker.push(SegmentKind::LatchGap, footprint.latch_gap_mm);
                walker.push(SegmentKind::Leaf, footprint.leaf_mm);
                walker.push(SegmentKind::HingeGap, footprint.hinge_gap_mm);
            }
        } else {
            walker.push(SegmentKind::Gap, layout.gap_mm);
        }
        if let Some(width) = layout.panel_widths_mm.get(slot) {
            walker.push(SegmentKind::Panel { index: slot }, *width);
        }
    }

    let offsets = SideOffsets {
        segments: walker.segments,
        omit_leading_gap: boundary == 0,
        omit_trailing_gap: boundary == panel_count,
        length_mm: walker.cursor,
    };
    (updated, offsets)
}

/// Fixing points one panel needs: `max(2, ceil((width - 2*edge) / internal) + 1)`
pub fn spigots_for_panel(width_mm: f64, spacing: &ResolvedSpacing) -> u32 {
    let internal = spacing.internal_spacing_mm;
    if !(internal > 0.0) {
        return 2;
    }
    let span = width_mm - 2.0 * spacing.edge_spacing_mm;
    let count = (span / internal).ceil() + 1.0;
    if count.is_finite() {
        count.max(2.0) as u32
    } else {
        2
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::compliance::SpacingRow;
    use crate::core::types::{HardwareFamily, StructuralSystem, WindZone};

    fn four_panels() -> PanelLayout {
        PanelLayout {
            panel_widths_mm: vec![900.0; 4],
            gap_mm: 20.0,
            adjusted_length_mm: 3700.0,
        }
    }

    fn spacing(internal: f64, edge: f64) -> ResolvedSpacing {
        ResolvedSpacing {
            family: HardwareFamily::Spigot,
            row: SpacingRow::new(StructuralSystem::Balustrade, 12.0, 900.0, 1100.0, WindZone::VeryHigh, internal, edge),
            internal_spacing_mm: internal,
            edge_spacing_mm: edge,
            used_fallback: false,
            applied_clamps: Vec::new(),
        }
    }

    #[test]
    fn test_gate_at_left_end() {
        let cfg = SolverConfig::default();
        let (spec, offsets) = apply_gate_with(&cfg, &four_panels(), &GateSpec::new(0, true, 900.0));
        assert!(offsets.omit_leading_gap);
        assert!(!offsets.omit_trailing_gap);
        assert_eq!(gate_sides(&spec, 4).hinge, Adjacency::Wall);
        assert_eq!(gate_sides(&spec, 4).latch, Adjacency::Glass);
        assert_eq!(offsets.segments[0].kind, SegmentKind::HingeGap);
        assert_eq!(offsets.segments[0].width_mm, 7.0);
        assert_eq!(offsets.segments[2].width_mm, 10.0);
    }

    #[test]
    fn test_gate_replaces_one_gap() {
        let cfg = SolverConfig::default();
        let layout = four_panels();
        let (_, offsets) = apply_gate_with(&cfg, &layout, &GateSpec::new(2, true, 800.0));
        let gaps = offsets
            .segments
            .iter()
            .filter(|s| s.kind == SegmentKind::Gap)
            .count();
        assert_eq!(gaps, 4);
        // 4 panels + 4 gaps + (5 + 800 + 10)
        assert!((offsets.length_mm - (3600.0 + 80.0 + 815.0)).abs() < 1e-9);
        let leaf = offsets
            .segments
            .iter()
            .find(|s| s.kind == SegmentKind::Leaf)
            .unwrap();
        assert_eq!(leaf.start_mm, 20.0 + 900.0 + 20.0 + 900.0 + 5.0);
    }

    #[test]
    fn test_boundary_reclamped_after_panel_count_drops() {
        let cfg = SolverConfig::default();
        let (spec, offsets) = apply_gate_with(&cfg, &four_panels(), &GateSpec::new(9, false, 2000.0));
        assert_eq!(spec.panel_boundary_index, 4);
        assert_eq!(spec.leaf_width_mm, 1000.0);
        assert!(offsets.omit_trailing_gap);
        // Hinge on the right at the right end fixes to the wall
        assert_eq!(gate_sides(&spec, 4).hinge, Adjacency::Wall);
    }

    #[test]
    fn test_move_and_flip() {
        let spec = GateSpec::new(1, true, 900.0);
        assert_eq!(spec.moved_by(-1, 4).panel_boundary_index, 0);
        assert_eq!(spec.moved_by(-1, 4).moved_by(-1, 4).panel_boundary_index, 0);
        assert_eq!(spec.moved_by(10, 4).panel_boundary_index, 4);
        let flipped = spec.flipped();
        assert!(!flipped.hinge_on_left);
        assert_eq!(flipped.panel_boundary_index, 1);
        assert_eq!(spec.resized(100.0, &SolverConfig::default()).leaf_width_mm, 350.0);
    }

    #[test]
    fn test_disabled_gate_leaves_layout_alone() {
        let mut spec = GateSpec::new(2, true, 900.0);
        spec.enabled = false;
        let (_, offsets) = apply_gate_with(&SolverConfig::default(), &four_panels(), &spec);
        assert_eq!(offsets, panel_offsets(&four_panels()));
        assert!((offsets.length_mm - 3700.0).abs() < 1e-9);
    }

    #[test]
    fn test_spigots_for_panel() {
        let s = spacing(800.0, 250.0);
        assert_eq!(spigots_for_panel(1300.0, &s), 2);
        assert_eq!(spigots_for_panel(1301.0, &s), 3);
        assert_eq!(spigots_for_panel(300.0, &s), 2);
        assert_eq!(spigots_for_panel(2100.0, &s), 3);
        assert_eq!(spigots_for_panel(2101.0, &s), 4);
    }
}
