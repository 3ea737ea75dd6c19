//! Settings for the Zakat Engine.
//!
//! The surrounding application persists the payer's jurisprudential and
//! pricing choices; this module provides the strongly-typed settings
//! structure and a YAML loader for it. Metal prices are always supplied
//! through settings or directly by the caller — never fetched.

mod loader;
mod types;

pub use loader::SettingsLoader;
pub use types::ZakatSettings;
