//! Fuzzy Module - Interval-valued Pythagorean fuzzy judgments.
//!
//! An [`Ivpfn`] is the unit of input for both the decision matrix cells
//! and the criterion weights. Its only derived value is the crisp score.

mod ivpfn;

pub use ivpfn::Ivpfn;
