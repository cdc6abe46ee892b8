//! Commute Module - Presentation-side classification of alternatives.
//!
//! Maps each alternative to a stable category tag and the commentary line
//! shown when that category wins. Kept out of the analysis module: the
//! ranking never depends on categories.

mod category;

pub use category::CommuteCategory;
