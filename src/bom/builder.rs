//! Order list derivation
//!
//! Each BOM kind has a builder behind the `OrderBuilder` trait. Family
//! differences live in the system profile and the code catalog, so the two
//! builders cover all four hardware families.

use super::catalog::{
    finished_code, fixing_kit, handrail_codes, KitQuantity, POWDERCOAT_SURCHARGE,
};
use super::gate_hardware::tally_gates;
use super::normalize::{normalize_finish, normalize_fixing};
use super::order::{OrderItem, OrderList};
use crate::calculation::{CalculationInput, CalculationResult};
use crate::core::config::{config, SolverConfig};
use crate::core::systems::{BomKind, SystemKey, SystemProfile};
use crate::core::types::{Finish, FixingType};

/// Everything a builder reads
pub struct BomContext<'a> {
    pub profile: &'static SystemProfile,
    pub input: &'a CalculationInput,
    pub result: &'a CalculationResult,
    pub finish: Option<Finish>,
    pub fixing: Option<FixingType>,
    pub config: &'a SolverConfig,
}

impl<'a> BomContext<'a> {
    pub fn new(
        system: SystemKey,
        input: &'a CalculationInput,
        result: &'a CalculationResult,
        config: &'a SolverConfig,
    ) -> Self {
        Self {
            profile: system.profile(),
            input,
            result,
            finish: normalize_finish(&input.finish),
            fixing: normalize_fixing(&input.fixing),
            config,
        }
    }

    /// Hardware pieces across all fixing positions
    pub fn fixing_points(&self) -> u32 {
        self.result.total_fixing_pieces
    }
}

pub trait OrderBuilder: Sync {
    fn build(&self, ctx: &BomContext<'_>, order: &mut OrderList);
}

/// Spigots, disc standoffs and clamp standoffs
pub struct PointFixedBuilder;

/// Channel systems ordered as whole kits
pub struct ChannelKitBuilder;

pub fn builder_for(kind: BomKind) -> &'static dyn OrderBuilder {
    match kind {
        BomKind::SpigotPost | BomKind::DiscStandoff | BomKind::ClampStandoff => &PointFixedBuilder,
        BomKind::ChannelKit => &ChannelKitBuilder,
    }
}

impl OrderBuilder for ChannelKitBuilder {
    fn build(&self, ctx: &BomContext<'_>, order: &mut OrderList) {
        let Some(finish) = ctx.finish else {
            tracing::debug!("No finish mapped for {:?}; channel kit omitted", ctx.input.finish);
            return;
        };
        let kit_length = ctx.profile.kit_length_mm;
        if !(kit_length > 0.0) {
            return;
        }
        let kits = (ctx.result.total_run_mm / kit_length).ceil().max(1.0);
        order.push(&finished_code(ctx.profile.code_prefix, finish), kits);
    }
}

impl OrderBuilder for PointFixedBuilder {
    fn build(&self, ctx: &BomContext<'_>, order: &mut OrderList) {
        let points = ctx.fixing_points() as f64;

        match ctx.finish {
            Some(finish) => order.push(&finished_code(ctx.profile.code_prefix, finish), points),
            None => tracing::debug!("No finish mapped for {:?}; primary hardware omitted", ctx.input.finish),
        }

        push_fixing_kits(ctx, points, order);

        if let Some(finish) = ctx.finish {
            push_handrail(ctx, finish, order);
        }

        tally_gates(ctx.result).emit(order);

        if let Some(finish) = ctx.finish.filter(|f| f.has_surcharge()) {
            push_surcharge(finish, order);
        }
    }
}

fn push_fixing_kits(ctx: &BomContext<'_>, points: f64, order: &mut OrderList) {
    let Some(fixing) = ctx.fixing else {
        tracing::debug!("No fixing mapped for {:?}; fixing kits omitted", ctx.input.fixing);
        return;
    };
    let Some(kit) = fixing_kit(ctx.profile.bom_kind, fixing) else {
        tracing::debug!("{:?} has no {:?} fixing kit", ctx.profile.bom_kind, fixing);
        return;
    };
    let quantity = match kit.quantity {
        KitQuantity::PerPoint => points,
        KitQuantity::PerGroutBag => (points / ctx.config.grout_points_per_bag as f64).ceil(),
    };
    order.push(kit.code, quantity);
}

fn push_handrail(ctx: &BomContext<'_>, finish: Finish, order: &mut OrderList) {
    let handrail = ctx.input.handrail;
    let Some(codes) = handrail_codes(handrail, finish) else {
        if handrail.code().is_some() {
            tracing::debug!("{:?} handrail not stocked in {:?}", handrail, finish);
        }
        return;
    };

    let rail_length = ctx.config.handrail_length_mm;
    let excludes_gates = ctx.config.handrail_excludes_gates;
    let side_rails: Vec<f64> = ctx
        .result
        .sides
        .iter()
        .map(|side| {
            if excludes_gates {
                (side.run_mm - side.gate_footprint_mm()).max(0.0)
            } else {
                side.run_mm
            }
        })
        .collect();
    let rail_run = if excludes_gates {
        side_rails.iter().sum()
    } else {
        ctx.result.total_run_mm
    };
    if rail_run <= 0.0 {
        return;
    }

    order.push(&finished_code(codes.rail, finish), (rail_run / rail_length).ceil());
    if let Some(gasket) = codes.gasket {
        order.push(gasket, (rail_run / ctx.config.gasket_length_mm).ceil());
    }

    let joiners: f64 = side_rails
        .iter()
        .map(|run| ((run / rail_length).ceil() - 1.0).max(0.0))
        .sum();
    order.push(&finished_code(codes.joiner, finish), joiners);

    let corners = ctx.input.shape.corner_count(ctx.result.sides.len());
    order.push(&finished_code(codes.corner, finish), corners as f64);

    let wall_ends = ctx.input.shape.wall_end_count();
    order.push(&finished_code(codes.wall, finish), wall_ends as f64);

    let end_caps = 2 * ctx.result.gate_count();
    order.push(&finished_code(codes.end_cap, finish), end_caps as f64);
}

fn push_surcharge(finish: Finish, order: &mut OrderList) {
    let suffix = format!("-{}", finish.code());
    let coated: f64 = order
        .items()
        .iter()
        .filter(|item| item.code.ends_with(&suffix))
        .map(|item| item.quantity)
        .sum();
    order.push(POWDERCOAT_SURCHARGE, coated);
}

/// Derive the order list for a calculation, using the global config
pub fn build_order_list(
    system: SystemKey,
    input: &CalculationInput,
    result: &CalculationResult,
) -> Vec<OrderItem> {
    build_order_list_with(config(), system, input, result)
}

pub fn build_order_list_with(
    cfg: &SolverConfig,
    system: SystemKey,
    input: &CalculationInput,
    result: &CalculationResult,
) -> Vec<OrderItem> {
    let ctx = BomContext::new(system, input, result, cfg);
    let mut order = OrderList::new();
    builder_for(ctx.profile.bom_kind).build(&ctx, &mut order);
    tracing::debug!("{} order lines for {}", order.len(), system);
    order.into_items()
}
