//! Hardware code catalog
//!
//! Maps (family, option) combinations to order codes, and codes back to
//! human-readable descriptions. A combination missing from these tables has
//! no code; callers emit nothing for it.

use crate::core::systems::{BomKind, SystemKey};
use crate::core::types::{Finish, FixingType, Handrail};

pub const HINGE_GLASS_TO_GLASS: &str = "HNG-G2G";
pub const HINGE_WALL_TO_GLASS: &str = "HNG-W2G";
pub const LATCH_GLASS_TO_GLASS: &str = "LAT-G2G";
pub const LATCH_WALL_TO_GLASS: &str = "LAT-W2G";
pub const POWDERCOAT_SURCHARGE: &str = "PC-SURCHARGE";

/// How a fixing kit line is counted
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KitQuantity {
    /// One kit per fixing point
    PerPoint,
    /// One bag per `grout_points_per_bag` points
    PerGroutBag,
}

#[derive(Debug, Clone, Copy)]
pub struct FixingKit {
    pub kind: BomKind,
    pub fixing: FixingType,
    pub code: &'static str,
    pub quantity: KitQuantity,
    pub description: &'static str,
}

const FIXING_KITS: &[FixingKit] = &[
    FixingKit {
        kind: BomKind::SpigotPost,
        fixing: FixingType::Concrete,
        code: "FK-CONC",
        quantity: KitQuantity::PerPoint,
        description: "Spigot fixing kit, concrete anchor",
    },
    FixingKit {
        kind: BomKind::SpigotPost,
        fixing: FixingType::Timber,
        code: "FK-TIMB",
        quantity: KitQuantity::PerPoint,
        description: "Spigot fixing kit, coach screws for timber",
    },
    FixingKit {
        kind: BomKind::SpigotPost,
        fixing: FixingType::Steel,
        code: "FK-STEEL",
        quantity: KitQuantity::PerPoint,
        description: "Spigot fixing kit, bolts for steel",
    },
    FixingKit {
        kind: BomKind::SpigotPost,
        fixing: FixingType::CoreDrilled,
        code: "GROUT-CORE",
        quantity: KitQuantity::PerGroutBag,
        description: "Non-shrink core-drill grout, 5kg bag",
    },
    FixingKit {
        kind: BomKind::DiscStandoff,
        fixing: FixingType::Concrete,
        code: "SFK-CONC",
        quantity: KitQuantity::PerPoint,
        description: "Standoff fixing kit, concrete anchor",
    },
    FixingKit {
        kind: BomKind::DiscStandoff,
        fixing: FixingType::Timber,
        code: "SFK-TIMB",
        quantity: KitQuantity::PerPoint,
        description: "Standoff fixing kit, timber screw",
    },
    FixingKit {
        kind: BomKind::DiscStandoff,
        fixing: FixingType::Steel,
        code: "SFK-STEEL",
        quantity: KitQuantity::PerPoint,
        description: "Standoff fixing kit, steel bolt",
    },
    FixingKit {
        kind: BomKind::ClampStandoff,
        fixing: FixingType::Concrete,
        code: "CFK-CONC",
        quantity: KitQuantity::PerPoint,
        description: "Clamp fixing kit, concrete anchor",
    },
    FixingKit {
        kind: BomKind::ClampStandoff,
        fixing: FixingType::Timber,
        code: "CFK-TIMB",
        quantity: KitQuantity::PerPoint,
        description: "Clamp fixing kit, timber screw",
    },
];

pub fn fixing_kit(kind: BomKind, fixing: FixingType) -> Option<&'static FixingKit> {
    FIXING_KITS
        .iter()
        .find(|kit| kit.kind == kind && kit.fixing == fixing)
}

/// Code stems for one handrail profile
#[derive(Debug, Clone, Copy)]
pub struct HandrailCodes {
    pub handrail: Handrail,
    pub rail: &'static str,
    pub gasket: Option<&'static str>,
    pub joiner: &'static str,
    pub corner: &'static str,
    pub wall: &'static str,
    pub end_cap: &'static str,
    pub finishes: &'static [Finish],
    pub label: &'static str,
}

const HANDRAILS: &[HandrailCodes] = &[
    HandrailCodes {
        handrail: Handrail::Slot25,
        rail: "HR25",
        gasket: Some("HRG25"),
        joiner: "HRJ25",
        corner: "HRC25",
        wall: "HRW25",
        end_cap: "HRE25",
        finishes: &[
            Finish::SatinStainless,
            Finish::MirrorStainless,
            Finish::Black,
            Finish::White,
            Finish::Custom,
        ],
        label: "25mm slot handrail",
    },
    HandrailCodes {
        handrail: Handrail::Round50,
        rail: "HR50",
        gasket: None,
        joiner: "HRJ50",
        corner: "HRC50",
        wall: "HRW50",
        end_cap: "HRE50",
        finishes: &[Finish::SatinStainless, Finish::MirrorStainless],
        label: "50mm round handrail",
    },
    HandrailCodes {
        handrail: Handrail::Square40,
        rail: "HRSQ40",
        gasket: Some("HRGSQ40"),
        joiner: "HRJSQ40",
        corner: "HRCSQ40",
        wall: "HRWSQ40",
        end_cap: "HRESQ40",
        finishes: &[Finish::SatinStainless, Finish::Black, Finish::White, Finish::Custom],
        label: "40mm square slot handrail",
    },
];

/// Codes for a handrail in a finish it is stocked in
pub fn handrail_codes(handrail: Handrail, finish: Finish) -> Option<&'static HandrailCodes> {
    HANDRAILS
        .iter()
        .find(|codes| codes.handrail == handrail && codes.finishes.contains(&finish))
}

/// `{stem}-{finish}`
pub fn finished_code(stem: &str, finish: Finish) -> String {
    format!("{}-{}", stem, finish.code())
}

const FIXED_DESCRIPTIONS: &[(&str, &str)] = &[
    (HINGE_GLASS_TO_GLASS, "Gate hinge, glass to glass"),
    (HINGE_WALL_TO_GLASS, "Gate hinge, wall to glass"),
    (LATCH_GLASS_TO_GLASS, "Gate latch, glass to glass"),
    (LATCH_WALL_TO_GLASS, "Gate latch, wall to glass"),
    (POWDERCOAT_SURCHARGE, "Custom powdercoat surcharge, per item"),
];

fn stem_description(stem: &str) -> Option<String> {
    if let Some(key) = SystemKey::ALL.iter().find(|key| key.code() == stem) {
        return Some(key.profile().name.to_string());
    }
    for codes in HANDRAILS {
        let part = if stem == codes.rail {
            "5.8m length"
        } else if stem == codes.joiner {
            "joiner"
        } else if stem == codes.corner {
            "corner joiner"
        } else if stem == codes.wall {
            "wall attachment"
        } else if stem == codes.end_cap {
            "end cap"
        } else {
            continue;
        };
        return Some(format!("{} {}", codes.label, part));
    }
    None
}

/// Human-readable description of an order code; unknown codes describe themselves
pub fn describe(code: &str) -> String {
    if let Some((_, text)) = FIXED_DESCRIPTIONS.iter().find(|(c, _)| *c == code) {
        return text.to_string();
    }
    if let Some(kit) = FIXING_KITS.iter().find(|kit| kit.code == code) {
        return kit.description.to_string();
    }
    if let Some(codes) = HANDRAILS.iter().find(|codes| codes.gasket == Some(code)) {
        return format!("{} gasket, 1m", codes.label);
    }
    if let Some((stem, suffix)) = code.rsplit_once('-') {
        if let (Some(base), Some(finish)) = (stem_description(stem), Finish::from_code(suffix)) {
            return format!("{}, {}", base, finish.label());
        }
    }
    code.to_string()
}
