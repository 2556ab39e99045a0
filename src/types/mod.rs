//! Core domain types for chequer.
//!
//! - `Colour` - RGBA colour values
//! - `Configuration` - board/node sizing and the colour pair
//! - `BoardSize`, `NodeSize`, `Spacing` - named presentation tiers

mod colour;
mod config;

pub use colour::Colour;
pub use config::{
    BoardSize, Configuration, NodeSize, Resolved, Sizing, Spacing, Tier, TierRepr,
    DEFAULT_RADIUS_EXPONENT, DEFAULT_SIZE_EXPONENT, MAX_RADIUS_EXPONENT, MAX_SIZE_EXPONENT,
};
