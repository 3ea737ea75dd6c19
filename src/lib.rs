//! Zakat calculation and Hijri calendar conversion engine.
//!
//! This crate provides two independent, composable cores: a proleptic
//! Gregorian ↔ Hijri (tabular Islamic) calendar converter pivoting on the
//! Julian Day Number, and a rule-based Zakat engine that computes a wealth
//! obligation from typed assets, liabilities, jurisprudence-school rules and
//! precious-metal prices. Both are pure, deterministic and free of I/O.

#![warn(missing_docs)]

pub mod calendar;
pub mod config;
pub mod engine;
pub mod error;
pub mod models;
