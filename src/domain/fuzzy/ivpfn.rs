//! Interval-valued Pythagorean fuzzy number (IVPFN).

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::domain::foundation::ValidationError;

/// Slack allowed on the Pythagorean bound for values read from decimal text.
const PYTHAGOREAN_TOLERANCE: f64 = 1e-9;

/// One fuzzy judgment: a membership interval and a non-membership interval.
///
/// Values are immutable once constructed. [`Ivpfn::new`] accepts any reals
/// for permissive scoring; [`Ivpfn::try_new`] enforces the
/// unit range and the Pythagorean bound `max(mu)^2 + max(nu)^2 <= 1`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Ivpfn {
    mu: [f64; 2],
    nu: [f64; 2],
}

impl Ivpfn {
    /// Creates an IVPFN without validation.
    pub const fn new(mu_low: f64, mu_high: f64, nu_low: f64, nu_high: f64) -> Self {
        Self {
            mu: [mu_low, mu_high],
            nu: [nu_low, nu_high],
        }
    }

    /// Creates an IVPFN, returning an error naming `field` if it is invalid.
    pub fn try_new(
        field: &str,
        mu_low: f64,
        mu_high: f64,
        nu_low: f64,
        nu_high: f64,
    ) -> Result<Self, ValidationError> {
        let value = Self::new(mu_low, mu_high, nu_low, nu_high);
        value.validate(field)?;
        Ok(value)
    }

    /// Creates an IVPFN from the tabular column order
    /// `[mu_high, mu_low, nu_low, nu_high]`.
    pub fn from_layout(columns: [f64; 4]) -> Self {
        let [mu_high, mu_low, nu_low, nu_high] = columns;
        Self::new(mu_low, mu_high, nu_low, nu_high)
    }

    /// Membership interval `[low, high]`.
    pub fn mu(&self) -> [f64; 2] {
        self.mu
    }

    /// Non-membership interval `[low, high]`.
    pub fn nu(&self) -> [f64; 2] {
        self.nu
    }

    /// Checks the unit range of every component and the Pythagorean bound.
    ///
    /// Bound order within an interval is not checked since the score does not
    /// depend on it.
    pub fn validate(&self, field: &str) -> Result<(), ValidationError> {
        let components = [
            ("mu_low", self.mu[0]),
            ("mu_high", self.mu[1]),
            ("nu_low", self.nu[0]),
            ("nu_high", self.nu[1]),
        ];

        for (name, value) in components {
            if !value.is_finite() || !(0.0..=1.0).contains(&value) {
                return Err(ValidationError::out_of_range(
                    format!("{}.{}", field, name),
                    0.0,
                    1.0,
                    value,
                ));
            }
        }

        let mu_max = self.mu[0].max(self.mu[1]);
        let nu_max = self.nu[0].max(self.nu[1]);
        let sum_of_squares = mu_max * mu_max + nu_max * nu_max;
        if sum_of_squares > 1.0 + PYTHAGOREAN_TOLERANCE {
            return Err(ValidationError::pythagorean_violation(field, sum_of_squares));
        }

        Ok(())
    }

    /// Returns true if [`Ivpfn::validate`] would succeed.
    pub fn is_valid(&self) -> bool {
        self.validate("ivpfn").is_ok()
    }

    /// Crisp score of this judgment.
    ///
    /// `0.5 * ((avg(mu_low², mu_high²) - avg(nu_low², nu_high²)) + 1)`,
    /// which lies in `[0, 1]` for valid inputs.
    pub fn score(&self) -> f64 {
        let mu_sq = (self.mu[0].powi(2) + self.mu[1].powi(2)) / 2.0;
        let nu_sq = (self.nu[0].powi(2) + self.nu[1].powi(2)) / 2.0;
        0.5 * ((mu_sq - nu_sq) + 1.0)
    }
}

impl fmt::Display for Ivpfn {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "([{}, {}], [{}, {}])",
            self.mu[0], self.mu[1], self.nu[0], self.nu[1]
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn assert_close(actual: f64, expected: f64) {
        assert!(
            (actual - expected).abs() < 1e-12,
            "expected {}, got {}",
            expected,
            actual
        );
    }

    #[test]
    fn score_of_balanced_judgment_is_half() {
        assert_close(Ivpfn::new(0.5, 0.5, 0.5, 0.5).score(), 0.5);
    }

    #[test]
    fn score_of_strong_judgment() {
        // 0.5 * ((0.81 - 0.01) + 1)
        assert_close(Ivpfn::new(0.9, 0.9, 0.1, 0.1).score(), 0.9);
    }

    #[test]
    fn score_extremes() {
        assert_close(Ivpfn::new(1.0, 1.0, 0.0, 0.0).score(), 1.0);
        assert_close(Ivpfn::new(0.0, 0.0, 1.0, 1.0).score(), 0.0);
    }

    #[test]
    fn score_averages_interval_bounds() {
        // mu_sq = (0.04 + 0.36) / 2 = 0.2, nu_sq = (0.01 + 0.09) / 2 = 0.05
        assert_close(Ivpfn::new(0.2, 0.6, 0.1, 0.3).score(), 0.575);
    }

    #[test]
    fn from_layout_reorders_columns() {
        let value = Ivpfn::from_layout([0.7, 0.6, 0.2, 0.3]);
        assert_eq!(value.mu(), [0.6, 0.7]);
        assert_eq!(value.nu(), [0.2, 0.3]);
    }

    #[test]
    fn try_new_accepts_valid_values() {
        assert!(Ivpfn::try_new("A/C1", 0.6, 0.7, 0.2, 0.3).is_ok());
        assert!(Ivpfn::try_new("A/C1", 0.0, 1.0, 0.0, 0.0).is_ok());
    }

    #[test]
    fn try_new_rejects_out_of_range_component() {
        let result = Ivpfn::try_new("Walking/C4", 0.6, 1.2, 0.1, 0.2);
        match result {
            Err(ValidationError::OutOfRange { field, actual, .. }) => {
                assert_eq!(field, "Walking/C4.mu_high");
                assert_close(actual, 1.2);
            }
            other => panic!("Expected OutOfRange error, got {:?}", other),
        }
    }

    #[test]
    fn try_new_rejects_nan() {
        let result = Ivpfn::try_new("w/C1", 0.5, 0.5, f64::NAN, 0.2);
        assert!(matches!(result, Err(ValidationError::OutOfRange { .. })));
    }

    #[test]
    fn try_new_rejects_pythagorean_violation() {
        // 0.9^2 + 0.6^2 = 1.17
        let result = Ivpfn::try_new("Car/C2", 0.8, 0.9, 0.5, 0.6);
        match result {
            Err(ValidationError::PythagoreanViolation { field, sum_of_squares }) => {
                assert_eq!(field, "Car/C2");
                assert!((sum_of_squares - 1.17).abs() < 1e-9);
            }
            other => panic!("Expected PythagoreanViolation, got {:?}", other),
        }
    }

    #[test]
    fn pythagorean_bound_is_inclusive() {
        // 0.6^2 + 0.8^2 = 1
        assert!(Ivpfn::new(0.6, 0.6, 0.8, 0.8).is_valid());
    }

    #[test]
    fn new_is_permissive() {
        let value = Ivpfn::new(1.5, 2.0, 0.0, 0.0);
        assert!(!value.is_valid());
        assert!(value.score() > 1.0);
    }

    #[test]
    fn displays_intervals() {
        let value = Ivpfn::new(0.1, 0.2, 0.3, 0.4);
        assert_eq!(value.to_string(), "([0.1, 0.2], [0.3, 0.4])");
    }

    #[test]
    fn serializes_as_intervals() {
        let value = Ivpfn::new(0.5, 0.75, 0.25, 0.5);
        let json = serde_json::to_value(value).unwrap();
        assert_eq!(json, serde_json::json!({ "mu": [0.5, 0.75], "nu": [0.25, 0.5] }));

        let back: Ivpfn = serde_json::from_value(json).unwrap();
        assert_eq!(back, value);
    }

    fn valid_ivpfn() -> impl Strategy<Value = Ivpfn> {
        (0.0f64..=1.0, 0.0f64..=1.0, 0.0f64..=1.0, 0.0f64..=1.0).prop_map(
            |(mu_a, mu_b, nu_a, nu_b)| {
                // Shrink non-membership so the Pythagorean bound holds.
                let mu_max = mu_a.max(mu_b);
                let nu_cap = (1.0 - mu_max * mu_max).max(0.0).sqrt();
                Ivpfn::new(mu_a, mu_b, nu_a * nu_cap, nu_b * nu_cap)
            },
        )
    }

    proptest! {
        #[test]
        fn score_is_in_unit_interval_for_valid_inputs(value in valid_ivpfn()) {
            let score = value.score();
            prop_assert!((0.0..=1.0).contains(&score), "score {} out of range", score);
        }

        #[test]
        fn score_is_symmetric_in_membership_bounds(
            mu_a in 0.0f64..=1.0,
            mu_b in 0.0f64..=1.0,
            nu_low in 0.0f64..=1.0,
            nu_high in 0.0f64..=1.0,
        ) {
            let forward = Ivpfn::new(mu_a, mu_b, nu_low, nu_high).score();
            let swapped = Ivpfn::new(mu_b, mu_a, nu_low, nu_high).score();
            prop_assert!((forward - swapped).abs() < 1e-15);
        }

        #[test]
        fn generated_values_pass_validation(value in valid_ivpfn()) {
            prop_assert!(value.is_valid());
        }
    }
}
