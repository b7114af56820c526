//! Integration tests for the full calculation pipeline
//!
//! These tests drive `calculate` end to end:
//! - PS1 spacing resolution for the selected system
//! - Panel layout per side, with and without gates
//! - Order list derivation for each hardware family

use balustrade_core::bom::{tally_gates, OrderItem};
use balustrade_core::calculation::{
    calculate, calculate_batch, CalculationError, CalculationInput, Calculator,
};
use balustrade_core::compliance::SpacingTables;
use balustrade_core::core::config::SolverConfig;
use balustrade_core::core::systems::SystemKey;
use balustrade_core::core::types::{Handrail, Shape, StructuralSystem, WindZone};
use balustrade_core::layout::{Adjacency, GateSpec, SegmentKind};

fn sp12_input(sides: Vec<f64>, shape: Shape) -> CalculationInput {
    CalculationInput {
        shape,
        side_lengths_mm: sides,
        system: SystemKey::Sp12,
        structural_system: StructuralSystem::Balustrade,
        thickness_mm: Some(12.0),
        height_mm: Some(1100.0),
        zone: Some(WindZone::VeryHigh),
        fixing: "Concrete".into(),
        finish: "SSS".into(),
        ..CalculationInput::default()
    }
}

fn qty(items: &[OrderItem], code: &str) -> f64 {
    items
        .iter()
        .find(|item| item.code == code)
        .map(|item| item.quantity)
        .unwrap_or(0.0)
}

fn assert_unique_codes(items: &[OrderItem]) {
    for (i, item) in items.iter().enumerate() {
        assert!(
            items[i + 1..].iter().all(|other| other.code != item.code),
            "duplicate code {}",
            item.code
        );
    }
}

// ============================================================================
// Spigot systems
// ============================================================================

/// SP12 in zone VH at 1100mm resolves to the exact table row, and a 3m run
/// needs six spigots which become six SP12-SS and six concrete fixing kits.
#[test]
fn test_sp12_inline_order() {
    let result = calculate(&sp12_input(vec![3000.0], Shape::Inline)).unwrap();

    assert_eq!(result.spacing.internal_spacing_mm, 800.0);
    assert_eq!(result.spacing.edge_spacing_mm, 250.0);
    assert!(!result.spacing.used_fallback);

    let side = &result.sides[0];
    assert_eq!(side.layout.panel_widths_mm, vec![1475.0, 1475.0]);
    assert!(side.layout.is_balanced(1e-6));
    assert_eq!(side.spigots_per_panel, vec![3, 3]);
    assert_eq!(result.total_spigots, 6);

    assert_eq!(qty(&result.order_items, "SP12-SS"), 6.0);
    assert_eq!(qty(&result.order_items, "FK-CONC"), 6.0);
    assert_eq!(result.order_items.len(), 2);
    assert_unique_codes(&result.order_items);
}

/// A gate on the left end of a four-panel side hinges off the wall and
/// takes the place of the leading gap.
#[test]
fn test_gate_at_left_end_of_side() {
    let mut input = sp12_input(vec![5000.0], Shape::Inline);
    input.set_gate(0, GateSpec::new(0, true, 900.0));

    let result = calculate(&input).unwrap();
    let side = &result.sides[0];

    assert_eq!(side.layout.panel_count(), 4);
    assert!(side.offsets.omit_leading_gap);
    assert_eq!(side.offsets.segments[0].kind, SegmentKind::HingeGap);

    let sides = side.gate_sides.unwrap();
    assert_eq!(sides.hinge, Adjacency::Wall);
    assert_eq!(sides.latch, Adjacency::Glass);

    // Gate footprint plus panels and remaining gaps rebuild the run
    assert!((side.offsets.length_mm - 5000.0).abs() < 1e-6);

    assert_eq!(qty(&result.order_items, "HNG-W2G"), 1.0);
    assert_eq!(qty(&result.order_items, "LAT-G2G"), 1.0);
    assert_eq!(qty(&result.order_items, "HNG-G2G"), 0.0);
}

/// Gate boundary past the panel count is pulled back to the right end.
#[test]
fn test_gate_boundary_reclamped() {
    let mut input = sp12_input(vec![3000.0], Shape::Inline);
    input.set_gate(0, GateSpec::new(7, true, 800.0));

    let result = calculate(&input).unwrap();
    let side = &result.sides[0];
    let gate = side.gate.unwrap();

    assert_eq!(gate.panel_boundary_index, side.layout.panel_count());
    assert!(side.offsets.omit_trailing_gap);
    assert_eq!(side.gate_sides.unwrap().latch, Adjacency::Wall);
    assert!((side.offsets.length_mm - 3000.0).abs() < 1e-6);
}

/// U-shape with a slot handrail and a mid-side gate.
#[test]
fn test_u_shape_handrail_lines() {
    let mut input = sp12_input(vec![3000.0, 6000.0, 3000.0], Shape::UShape);
    input.handrail = Handrail::Slot25;
    input.finish = "Satin Stainless".into();
    input.set_gate(1, GateSpec::new(1, true, 900.0));

    let result = calculate(&input).unwrap();
    let items = &result.order_items;

    // Rails and gaskets are measured over the full 12m run
    assert!((result.sides[1].gate_footprint_mm() - 915.0).abs() < 1e-9);
    assert_eq!(qty(items, "HR25-SS"), 3.0);
    assert_eq!(qty(items, "HRG25"), 12.0);
    assert_eq!(qty(items, "HRC25-SS"), 2.0);
    assert_eq!(qty(items, "HRW25-SS"), 2.0);
    assert_eq!(qty(items, "HRE25-SS"), 2.0);
    // Only the 6m side needs a second length
    assert_eq!(qty(items, "HRJ25-SS"), 1.0);
    assert_eq!(qty(items, "HNG-G2G"), 1.0);
    assert_eq!(qty(items, "LAT-G2G"), 1.0);
    assert_unique_codes(items);
}

fn gated_handrail_input() -> CalculationInput {
    let mut input = sp12_input(vec![5500.0], Shape::Inline);
    input.handrail = Handrail::Slot25;
    input.set_gate(0, GateSpec::new(1, true, 900.0));
    input
}

/// A gate does not reduce rail or gasket quantities by default.
#[test]
fn test_gated_handrail_uses_total_run() {
    let result = calculate(&gated_handrail_input()).unwrap();
    assert!((result.sides[0].gate_footprint_mm() - 915.0).abs() < 1e-9);
    assert_eq!(qty(&result.order_items, "HR25-SS"), 1.0);
    assert_eq!(qty(&result.order_items, "HRG25"), 6.0);
    assert_eq!(qty(&result.order_items, "HRE25-SS"), 2.0);
}

/// With gate exclusion switched on, the 915mm opening is left out.
#[test]
fn test_gated_handrail_can_exclude_gate_openings() {
    let cfg = SolverConfig {
        handrail_excludes_gates: true,
        ..SolverConfig::default()
    };
    let calculator = Calculator::new(SpacingTables::builtin(), &cfg);
    let result = calculator.calculate(&gated_handrail_input()).unwrap();
    assert_eq!(qty(&result.order_items, "HR25-SS"), 1.0);
    assert_eq!(qty(&result.order_items, "HRG25"), 5.0);
}

/// Rails longer than stock length need joiners.
#[test]
fn test_long_run_needs_joiners() {
    let mut input = sp12_input(vec![12000.0], Shape::Inline);
    input.handrail = Handrail::Slot25;

    let result = calculate(&input).unwrap();
    assert_eq!(qty(&result.order_items, "HR25-SS"), 3.0);
    assert_eq!(qty(&result.order_items, "HRJ25-SS"), 2.0);
}

/// Custom powdercoat adds one surcharge per coated item.
#[test]
fn test_powdercoat_surcharge() {
    let mut input = sp12_input(vec![3000.0], Shape::Inline);
    input.finish = "Powdercoat Monument".into();
    input.handrail = Handrail::Slot25;

    let result = calculate(&input).unwrap();
    let items = &result.order_items;
    assert_eq!(qty(items, "SP12-PC"), 6.0);
    assert_eq!(qty(items, "HR25-PC"), 1.0);
    assert_eq!(qty(items, "HRW25-PC"), 2.0);
    assert_eq!(qty(items, "HRG25"), 3.0);
    assert_eq!(qty(items, "PC-SURCHARGE"), 9.0);
}

/// Unknown finish text drops finish-coded lines but keeps fixing kits.
#[test]
fn test_unknown_finish_is_silent_omission() {
    let mut input = sp12_input(vec![3000.0], Shape::Inline);
    input.finish = "bronze".into();

    let result = calculate(&input).unwrap();
    assert_eq!(result.order_items.len(), 1);
    assert_eq!(result.order_items[0].code, "FK-CONC");
}

/// Timber fixing clamps spacing and switches the fixing kit.
#[test]
fn test_timber_fixing() {
    let mut input = sp12_input(vec![3000.0], Shape::Inline);
    input.zone = Some(WindZone::Low);
    input.height_mm = Some(1000.0);
    input.fixing = "timber deck".into();

    let result = calculate(&input).unwrap();
    assert_eq!(result.spacing.internal_spacing_mm, 700.0);
    assert_eq!(result.spacing.edge_spacing_mm, 200.0);
    assert_eq!(qty(&result.order_items, "FK-TIMB"), result.total_spigots as f64);
}

// ============================================================================
// Standoff and channel systems
// ============================================================================

/// Disc standoffs fix top and bottom, so each position is two pieces.
#[test]
fn test_disc_standoff_pieces() {
    let input = CalculationInput {
        system: SystemKey::Sd50,
        height_mm: Some(1000.0),
        zone: Some(WindZone::Medium),
        ..sp12_input(vec![3000.0], Shape::Inline)
    };

    let result = calculate(&input).unwrap();
    assert_eq!(result.sides[0].layout.panel_widths_mm, vec![1480.0, 1480.0]);
    assert_eq!(result.total_spigots, 6);
    assert_eq!(result.total_fixing_pieces, 12);
    assert_eq!(qty(&result.order_items, "SD50-SS"), 12.0);
    assert_eq!(qty(&result.order_items, "SFK-CONC"), 12.0);
}

/// Channel kits produce one line sized by total run.
#[test]
fn test_channel_kit_single_line() {
    let mut input = CalculationInput {
        system: SystemKey::Ack,
        height_mm: Some(1000.0),
        zone: Some(WindZone::Low),
        handrail: Handrail::Slot25,
        ..sp12_input(vec![3000.0, 2500.0], Shape::Corner)
    };
    input.set_gate(0, GateSpec::new(0, true, 900.0));

    let result = calculate(&input).unwrap();
    assert_eq!(result.order_items.len(), 1);
    assert_eq!(result.order_items[0].code, "ACK-SS");
    assert_eq!(result.order_items[0].quantity, 2.0);
}

/// An enclosed pool fence with gates on two sides.
#[test]
fn test_enclosed_pool_gate_tally() {
    let mut input = CalculationInput {
        system: SystemKey::Sd50,
        structural_system: StructuralSystem::Pool,
        thickness_mm: Some(15.0),
        height_mm: Some(1200.0),
        zone: Some(WindZone::Low),
        ..sp12_input(vec![4000.0, 3000.0, 4000.0, 3000.0], Shape::Enclosed)
    };
    input.set_gate(0, GateSpec::new(1, false, 900.0));
    input.set_gate(2, GateSpec::new(0, true, 1000.0));

    let result = calculate(&input).unwrap();
    let tally = tally_gates(&result);
    assert_eq!(tally.gate_count(), 2);
    assert_eq!(tally.hinge_glass + tally.hinge_wall, 2);
    assert_eq!(tally.latch_glass + tally.latch_wall, 2);
    assert_eq!(result.gate_count(), 2);

    let hinges = qty(&result.order_items, "HNG-G2G") + qty(&result.order_items, "HNG-W2G");
    assert_eq!(hinges, 2.0);
    assert_eq!(
        qty(&result.order_items, "SD50-SS"),
        result.total_fixing_pieces as f64
    );
    assert_eq!(result.total_fixing_pieces, result.total_spigots * 2);
    assert_unique_codes(&result.order_items);
}

// ============================================================================
// Failure paths
// ============================================================================

#[test]
fn test_unengineered_combination() {
    let input = CalculationInput {
        structural_system: StructuralSystem::Pool,
        height_mm: Some(1200.0),
        zone: Some(WindZone::ExtraHigh),
        ..sp12_input(vec![3000.0], Shape::Inline)
    };
    assert!(matches!(
        calculate(&input),
        Err(CalculationError::NoComplianceData { .. })
    ));
}

/// At one panel the gate would meet the wall and leave 628mm, which no
/// single panel fits. Two panels move it inside, where 2 x 300mm fits.
#[test]
fn test_gate_solved_with_interior_footprint() {
    let mut input = CalculationInput {
        height_mm: Some(1000.0),
        zone: Some(WindZone::Medium),
        ..sp12_input(vec![1545.0], Shape::Inline)
    };
    input.set_gate(0, GateSpec::new(1, false, 900.0));

    let result = calculate(&input).unwrap();
    let side = &result.sides[0];
    assert_eq!(side.layout.panel_widths_mm, vec![300.0, 300.0]);
    assert_eq!(side.layout.gap_mm, 15.0);
    assert_eq!(side.gate.unwrap().panel_boundary_index, 1);
    assert_eq!(side.gate_sides.unwrap().hinge, Adjacency::Glass);
    assert!((side.gate_footprint_mm() - 915.0).abs() < 1e-9);
    assert!((side.offsets.length_mm - 1545.0).abs() < 1e-6);
}

#[test]
fn test_side_too_short_for_a_panel() {
    let input = sp12_input(vec![3000.0, 100.0], Shape::Corner);
    assert_eq!(
        calculate(&input).unwrap_err(),
        CalculationError::InfeasibleLayout {
            side: 1,
            run_mm: 100.0
        }
    );
}

#[test]
fn test_missing_thickness() {
    let input = CalculationInput {
        thickness_mm: None,
        ..sp12_input(vec![3000.0], Shape::Inline)
    };
    assert!(matches!(
        calculate(&input),
        Err(CalculationError::InvalidInput(_))
    ));
}

// ============================================================================
// Batch and determinism
// ============================================================================

#[test]
fn test_batch_matches_single_calculations() {
    let inputs = vec![
        sp12_input(vec![3000.0], Shape::Inline),
        sp12_input(vec![100.0], Shape::Inline),
        sp12_input(vec![4200.0, 2600.0], Shape::Corner),
    ];
    let batch = calculate_batch(&inputs);
    assert_eq!(batch.len(), 3);
    for (input, result) in inputs.iter().zip(&batch) {
        assert_eq!(&calculate(input), result);
    }
    assert!(batch[1].is_err());
}

#[test]
fn test_result_serializes_side_offsets() {
    let mut input = sp12_input(vec![5000.0], Shape::Inline);
    input.set_gate(0, GateSpec::new(2, false, 750.0));
    let result = calculate(&input).unwrap();

    let value = serde_json::to_value(&result).unwrap();
    let segments = value["sides"][0]["offsets"]["segments"].as_array().unwrap();
    assert!(segments.iter().any(|s| s["kind"]["kind"] == "leaf"));
    assert_eq!(value["order_items"][0]["code"], "SP12-SS");
}
