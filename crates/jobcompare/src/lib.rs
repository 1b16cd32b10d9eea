//! Two-offer job comparison: a pure scoring engine plus the codec that turns a
//! comparison into a shareable link.

pub mod comparison;
pub mod config;
pub mod error;
pub mod sharing;
pub mod telemetry;
