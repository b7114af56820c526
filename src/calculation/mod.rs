//! Calculation request/response and the end-to-end pipeline

pub mod input;
pub mod pipeline;
pub mod result;

pub use input::CalculationInput;
pub use pipeline::{calculate, calculate_batch, Calculator};
pub use result::{CalculationError, CalculationResult, SideResult};
