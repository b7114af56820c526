//! Panel layout solver
//!
//! Finds the fewest, widest equal panels whose uniform gap lands inside the
//! system's gap bounds. Panel count starts at the theoretical minimum and
//! grows; within a count, width is stepped down from the widest allowed value.

use serde::{Deserialize, Serialize};

use crate::core::config::{config, SolverConfig};
use crate::core::systems::PanelStep;

/// Panels and gaps along one side
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PanelLayout {
    /// Panel widths left to right
    pub panel_widths_mm: Vec<f64>,
    /// Uniform gap between panels and at each end
    pub gap_mm: f64,
    /// Length the panels and their `count + 1` gaps fill
    pub adjusted_length_mm: f64,
}

impl PanelLayout {
    pub fn panel_count(&self) -> usize {
        self.panel_widths_mm.len()
    }

    /// Total glass width
    pub fn glass_mm(&self) -> f64 {
        self.panel_widths_mm.iter().sum()
    }

    /// Whether glass plus gaps reconstructs the adjusted length
    pub fn is_balanced(&self, tolerance_mm: f64) -> bool {
        let filled = self.glass_mm() + self.gap_mm * (self.panel_count() + 1) as f64;
        (filled - self.adjusted_length_mm).abs() <= tolerance_mm
    }
}

/// Solve a side using the global config
pub fn solve_panel_layout(
    run_mm: f64,
    gap_min_mm: f64,
    gap_max_mm: f64,
    max_panel_width_mm: f64,
    panel_step: PanelStep,
) -> Option<PanelLayout> {
    solve_panel_layout_with(
        config(),
        run_mm,
        gap_min_mm,
        gap_max_mm,
        max_panel_width_mm,
        panel_step,
    )
}

/// Solve a side with an explicit config
pub fn solve_panel_layout_with(
    cfg: &SolverConfig,
    run_mm: f64,
    gap_min_mm: f64,
    gap_max_mm: f64,
    max_panel_width_mm: f64,
    panel_step: PanelStep,
) -> Option<PanelLayout> {
    search(
        cfg,
        run_mm,
        0.0,
        gap_min_mm,
        gap_max_mm,
        max_panel_width_mm,
        panel_step,
    )
}

/// Solve a side where one panel boundary is taken by a fixed insert.
///
/// The insert (a gate footprint) supplies its own clearances, so only
/// `count` ordinary gaps remain. The returned layout's adjusted length is
/// `run - reserved + gap`, which keeps the usual balance invariant.
pub fn solve_reserved(
    cfg: &SolverConfig,
    run_mm: f64,
    reserved_mm: f64,
    gap_min_mm: f64,
    gap_max_mm: f64,
    max_panel_width_mm: f64,
    panel_step: PanelStep,
) -> Option<PanelLayout> {
    if !(reserved_mm > 0.0) {
        return None;
    }
    search(
        cfg,
        run_mm,
        reserved_mm,
        gap_min_mm,
        gap_max_mm,
        max_panel_width_mm,
        panel_step,
    )
}

/// Solve a side with a fixed insert using exactly `panel_count` panels.
///
/// Used when the insert's width depends on the panel count, so each count
/// has to be tried with its own reservation.
pub fn solve_reserved_for_count(
    cfg: &SolverConfig,
    run_mm: f64,
    reserved_mm: f64,
    panel_count: usize,
    gap_min_mm: f64,
    gap_max_mm: f64,
    max_panel_width_mm: f64,
    panel_step: PanelStep,
) -> Option<PanelLayout> {
    if !(reserved_mm > 0.0) || panel_count == 0 || panel_count > cfg.max_panel_count {
        return None;
    }
    let available = checked_available(run_mm, reserved_mm, gap_min_mm, gap_max_mm, max_panel_width_mm)?;
    search_count(
        cfg,
        available,
        reserved_mm,
        panel_count,
        gap_min_mm,
        gap_max_mm,
        max_panel_width_mm,
        panel_step,
    )
}

/// Length left for panels and gaps, or `None` for unusable inputs
fn checked_available(
    run_mm: f64,
    reserved_mm: f64,
    gap_min_mm: f64,
    gap_max_mm: f64,
    max_panel_width_mm: f64,
) -> Option<f64> {
    let inputs = [run_mm, reserved_mm, gap_min_mm, gap_max_mm, max_panel_width_mm];
    if inputs.iter().any(|v| !v.is_finite()) {
        return None;
    }
    if run_mm <= 0.0 || max_panel_width_mm <= 0.0 || gap_min_mm > gap_max_mm {
        return None;
    }
    let available = run_mm - reserved_mm;
    (available > 0.0).then_some(available)
}

/// Fewest-panels search.
///
/// Widths start at `floor(min(max_width, available / count) / step) * step`.
/// When that divides the run exactly the first candidate leaves a zero gap,
/// which is skipped as long as `gap_min_mm > 0`.
fn search(
    cfg: &SolverConfig,
    run_mm: f64,
    reserved_mm: f64,
    gap_min_mm: f64,
    gap_max_mm: f64,
    max_panel_width_mm: f64,
    panel_step: PanelStep,
) -> Option<PanelLayout> {
    let available = checked_available(run_mm, reserved_mm, gap_min_mm, gap_max_mm, max_panel_width_mm)?;
    let first_count = ((available / max_panel_width_mm).ceil() as usize).max(1);

    for count in first_count..=cfg.max_panel_count {
        if max_panel_width_mm.min(available / count as f64) < cfg.min_panel_width_mm {
            // More panels only makes them narrower
            break;
        }
        let found = search_count(
            cfg,
            available,
            reserved_mm,
            count,
            gap_min_mm,
            gap_max_mm,
            max_panel_width_mm,
            panel_step,
        );
        if found.is_some() {
            return found;
        }
    }

    tracing::debug!(
        "No panel layout for {}mm run (reserved {}mm, gap {}..{}mm, max width {}mm)",
        run_mm,
        reserved_mm,
        gap_min_mm,
        gap_max_mm,
        max_panel_width_mm
    );
    None
}

/// Widest stepped width for one panel count whose gap lands in bounds
fn search_count(
    cfg: &SolverConfig,
    available: f64,
    reserved_mm: f64,
    count: usize,
    gap_min_mm: f64,
    gap_max_mm: f64,
    max_panel_width_mm: f64,
    panel_step: PanelStep,
) -> Option<PanelLayout> {
    let snap = panel_step.snap_mm();
    let c = count as f64;
    let widest = max_panel_width_mm.min(available / c);
    // With an insert only `count` ordinary gaps remain
    let gap_count = if reserved_mm > 0.0 { c } else { c + 1.0 };

    let mut steps = (widest / snap).floor() as i64;
    while steps > 0 {
        let width = steps as f64 * snap;
        if width < cfg.min_panel_width_mm {
            break;
        }
        let gap = (available - width * c) / gap_count;
        if gap > gap_max_mm {
            break;
        }
        if gap >= gap_min_mm {
            return Some(PanelLayout {
                panel_widths_mm: vec![width; count],
                gap_mm: gap,
                adjusted_length_mm: if reserved_mm > 0.0 {
                    available + gap
                } else {
                    available
                },
            });
        }
        steps -= 1;
    }
    None
}
