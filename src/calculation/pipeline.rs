//! Full calculation pass: validate, resolve spacing, solve each side, place
//! gates, derive the order list.

use rayon::prelude::*;

use super::input::CalculationInput;
use super::result::{CalculationError, CalculationResult, SideResult};
use crate::bom::{build_order_list_with, normalize_fixing};
use crate::compliance::{ResolvedSpacing, SpacingTables};
use crate::core::config::{config, SolverConfig};
use crate::core::systems::{BomKind, SystemProfile};
use crate::core::types::{SpigotsPerPanel, WindZone};
use crate::layout::{
    apply_gate_with, gate_footprint, gate_sides, panel_offsets, solve_panel_layout_with,
    solve_reserved_for_count, spigots_for_panel, GateSpec, PanelLayout,
};

/// Inputs that passed validation
struct Checked {
    thickness_mm: f64,
    height_mm: f64,
    zone: WindZone,
}

/// Runs calculations against a fixed table set and config
#[derive(Clone, Copy)]
pub struct Calculator<'a> {
    tables: &'a SpacingTables,
    config: &'a SolverConfig,
}

impl Calculator<'static> {
    /// Built-in tables and the global config
    pub fn builtin() -> Self {
        Self {
            tables: SpacingTables::builtin(),
            config: config(),
        }
    }
}

impl<'a> Calculator<'a> {
    pub fn new(tables: &'a SpacingTables, config: &'a SolverConfig) -> Self {
        Self { tables, config }
    }

    pub fn calculate(&self, input: &CalculationInput) -> Result<CalculationResult, CalculationError> {
        let checked = validate(input)?;
        let profile = input.system.profile();
        let fixing = normalize_fixing(&input.fixing);

        let table = self.tables.get(profile.family);
        let spacing = table
            .and_then(|t| {
                t.resolve(
                    input.structural_system,
                    checked.thickness_mm,
                    checked.height_mm,
                    checked.zone,
                    fixing,
                )
            })
            .ok_or(CalculationError::NoComplianceData {
                family: profile.family,
                structural_system: input.structural_system,
                thickness_mm: checked.thickness_mm,
                height_mm: checked.height_mm,
                zone: checked.zone,
            })?;

        let max_width = max_panel_width(profile, &spacing, input.spigots_per_panel);

        let mut sides = Vec::with_capacity(input.side_lengths_mm.len());
        for (index, run_mm) in input.side_lengths_mm.iter().copied().enumerate() {
            let side = self.solve_side(
                index,
                run_mm,
                input.gate_for_side(index),
                profile,
                max_width,
                &spacing,
            )?;
            sides.push(side);
        }

        let total_spigots = sides.iter().map(SideResult::spigot_count).sum();
        let mut result = CalculationResult {
            system: input.system,
            total_run_mm: input.total_run_mm(),
            side_runs_mm: input.side_lengths_mm.clone(),
            summary: String::new(),
            spacing,
            sides,
            total_spigots,
            total_fixing_pieces: total_spigots * profile.pieces_per_position,
            order_items: Vec::new(),
        };
        result.summary = summarize(&result, profile);
        result.order_items = build_order_list_with(self.config, input.system, input, &result);

        tracing::info!(
            "{}: {} panels, {} fixing positions, {} order lines over {}mm",
            input.system,
            result.panel_count(),
            result.total_spigots,
            result.order_items.len(),
            result.total_run_mm
        );
        Ok(result)
    }

    /// Independent calculations in parallel; results keep input order
    pub fn calculate_batch(
        &self,
        inputs: &[CalculationInput],
    ) -> Vec<Result<CalculationResult, CalculationError>> {
        inputs.par_iter().map(|input| self.calculate(input)).collect()
    }

    fn solve_side(
        &self,
        index: usize,
        run_mm: f64,
        gate: Option<&GateSpec>,
        profile: &SystemProfile,
        max_width: f64,
        spacing: &ResolvedSpacing,
    ) -> Result<SideResult, CalculationError> {
        let cfg = self.config;
        let infeasible = || CalculationError::InfeasibleLayout { side: index, run_mm };

        let Some(gate) = gate else {
            let layout = solve_panel_layout_with(
                cfg,
                run_mm,
                profile.gap_min_mm,
                profile.gap_max_mm,
                max_width,
                profile.panel_step,
            )
            .ok_or_else(infeasible)?;
            return Ok(side_result(index, run_mm, layout, None, spacing, cfg));
        };

        // An end boundary meets a wall, so the footprint depends on the panel
        // count. Each count is tried with its own footprint; fewest panels wins.
        for count in 1..=cfg.max_panel_count {
            let footprint = gate_footprint(&gate.clamped(count, cfg), count, cfg).total_mm();
            if let Some(layout) = solve_reserved_for_count(
                cfg,
                run_mm,
                footprint,
                count,
                profile.gap_min_mm,
                profile.gap_max_mm,
                max_width,
                profile.panel_step,
            ) {
                return Ok(side_result(index, run_mm, layout, Some(gate), spacing, cfg));
            }
        }

        tracing::debug!("No gated layout for side {} ({}mm)", index + 1, run_mm);
        Err(infeasible())
    }
}

fn side_result(
    index: usize,
    run_mm: f64,
    layout: PanelLayout,
    gate: Option<&GateSpec>,
    spacing: &ResolvedSpacing,
    cfg: &SolverConfig,
) -> SideResult {
    let (gate, classified, offsets) = match gate {
        Some(spec) => {
            let (updated, offsets) = apply_gate_with(cfg, &layout, spec);
            let sides = gate_sides(&updated, layout.panel_count());
            (Some(updated), Some(sides), offsets)
        }
        None => (None, None, panel_offsets(&layout)),
    };
    let spigots_per_panel = layout
        .panel_widths_mm
        .iter()
        .map(|w| spigots_for_panel(*w, spacing))
        .collect();
    SideResult {
        index,
        run_mm,
        layout,
        gate,
        gate_sides: classified,
        offsets,
        spigots_per_panel,
    }
}

/// Widest panel the profile and spigot mode allow
fn max_panel_width(profile: &SystemProfile, spacing: &ResolvedSpacing, mode: SpigotsPerPanel) -> f64 {
    if profile.bom_kind == BomKind::ChannelKit {
        return profile.max_panel_width_mm;
    }
    match mode.fixed_count() {
        None => profile.max_panel_width_mm,
        Some(n) => {
            let reach = 2.0 * spacing.edge_spacing_mm + (n - 1) as f64 * spacing.internal_spacing_mm;
            profile.max_panel_width_mm.min(reach)
        }
    }
}

fn validate(input: &CalculationInput) -> Result<Checked, CalculationError> {
    let invalid = |msg: String| Err(CalculationError::InvalidInput(msg));

    let sides = input.side_lengths_mm.len();
    if sides == 0 {
        return invalid("at least one side length is required".into());
    }
    if let Some(expected) = input.shape.expected_sides() {
        if expected != sides {
            return invalid(format!(
                "{:?} shape needs {} sides, got {}",
                input.shape, expected, sides
            ));
        }
    }
    if let Some((i, run)) = input
        .side_lengths_mm
        .iter()
        .enumerate()
        .find(|(_, run)| !run.is_finite() || **run <= 0.0)
    {
        return invalid(format!("side {} length {} must be positive", i + 1, run));
    }
    if input.gates.len() > sides {
        return invalid(format!(
            "{} gate entries for {} sides",
            input.gates.len(),
            sides
        ));
    }

    let Some(thickness_mm) = input.thickness_mm.filter(|t| t.is_finite() && *t > 0.0) else {
        return invalid("glass thickness is required".into());
    };
    let Some(height_mm) = input.height_mm.filter(|h| h.is_finite() && *h > 0.0) else {
        return invalid("balustrade height is required".into());
    };
    let Some(zone) = input.zone else {
        return invalid("wind zone is required".into());
    };

    Ok(Checked {
        thickness_mm,
        height_mm,
        zone,
    })
}

fn summarize(result: &CalculationResult, profile: &SystemProfile) -> String {
    let mut lines = Vec::with_capacity(result.sides.len() + 1);
    for side in &result.sides {
        let layout = &side.layout;
        let width = layout.panel_widths_mm.first().copied().unwrap_or(0.0);
        let mut line = format!(
            "Side {}: {} x {:.0}mm panels, {:.1}mm gaps, {} fixing positions",
            side.index + 1,
            layout.panel_count(),
            width,
            layout.gap_mm,
            side.spigot_count()
        );
        if let (Some(gate), Some(sides)) = (side.gate, side.gate_sides) {
            line.push_str(&format!(
                "; {:.0}mm gate at boundary {} (hinge to {:?}, latch to {:?})",
                gate.leaf_width_mm, gate.panel_boundary_index, sides.hinge, sides.latch
            ));
        }
        lines.push(line);
    }
    lines.push(format!(
        "{}: {} panels, {} fixing positions ({} pieces) over {:.0}mm",
        profile.name,
        result.panel_count(),
        result.total_spigots,
        result.total_fixing_pieces,
        result.total_run_mm
    ));
    lines.join("\n")
}

/// Run a calculation with the built-in tables and global config
pub fn calculate(input: &CalculationInput) -> Result<CalculationResult, CalculationError> {
    Calculator::builtin().calculate(input)
}

/// Run many independent calculations in parallel
pub fn calculate_batch(
    inputs: &[CalculationInput],
) -> Vec<Result<CalculationResult, CalculationError>> {
    Calculator::builtin().calculate_batch(inputs)
}
