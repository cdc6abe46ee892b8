//! Domain layer containing business logic and domain types.
//!
//! # Module Organization
//!
//! - `foundation` - Shared domain primitives (IDs, errors)
//! - `fuzzy` - Interval-valued Pythagorean fuzzy numbers
//! - `analysis` - Pure domain services for WISP scoring and ranking
//! - `commute` - Category lookup and commentary for commuting alternatives

pub mod analysis;
pub mod commute;
pub mod foundation;
pub mod fuzzy;
