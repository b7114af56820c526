//! Canonicalise free-text finish and fixing selections
//!
//! Unrecognised text maps to `None`; the BOM then simply omits the lines that
//! depend on it.

use crate::core::types::{Finish, FixingType};

pub fn normalize_finish(raw: &str) -> Option<Finish> {
    let text = raw.trim().to_ascii_lowercase();
    let finish = match text.as_str() {
        "" => return None,
        "ss" | "sss" | "satin" => Finish::SatinStainless,
        "mss" | "mirror" | "polished" => Finish::MirrorStainless,
        "blk" | "black" => Finish::Black,
        "wht" | "white" => Finish::White,
        "pc" | "custom" => Finish::Custom,
        _ if text.contains("mirror") || text.contains("polish") => Finish::MirrorStainless,
        _ if text.contains("satin") || text.contains("stainless") => Finish::SatinStainless,
        _ if text.contains("black") => Finish::Black,
        _ if text.contains("white") => Finish::White,
        _ if text.contains("powder") => Finish::Custom,
        _ => return None,
    };
    Some(finish)
}

pub fn normalize_fixing(raw: &str) -> Option<FixingType> {
    let text = raw.trim().to_ascii_lowercase();
    if text.contains("concrete") {
        Some(FixingType::Concrete)
    } else if text.contains("timber") || text.contains("wood") {
        Some(FixingType::Timber)
    } else if text.contains("core") {
        Some(FixingType::CoreDrilled)
    } else if text.contains("steel") {
        Some(FixingType::Steel)
    } else {
        None
    }
}
