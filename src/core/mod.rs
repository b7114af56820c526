pub mod config;
pub mod error;
pub mod systems;
pub mod types;

pub use config::{config, SolverConfig};
pub use error::{BalustradeError, Result};
pub use systems::{BomKind, PanelStep, SystemKey, SystemProfile};
pub use types::{
    Finish, FixingType, Handrail, HardwareFamily, Shape, SpigotsPerPanel, StructuralSystem,
    WindZone,
};
