//! Core data models for the Zakat Engine.
//!
//! This module contains all the domain models used throughout the engine.

mod asset;
mod calculation_result;
mod history;
mod liability;
mod rules;

pub use asset::{Asset, AssetCategory};
pub use calculation_result::{BreakdownLine, CalculationResult};
pub use history::{HistoryRecord, total_arrears};
pub use liability::Liability;
pub use rules::{Conditions, Fiqh, MetalPrices, NisabStandard};
