//! IVPF-WISP - Fuzzy multi-criteria ranking of commuting alternatives
//!
//! This crate scores a matrix of interval-valued Pythagorean fuzzy judgments
//! against fuzzy criterion weights and ranks the alternatives by a blend of
//! their weighted sum and weighted product.

pub mod adapters;
pub mod application;
pub mod config;
pub mod domain;
pub mod ports;
