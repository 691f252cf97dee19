//! Statistics over measurement counts.
//!
//! A two-qubit Bell experiment produces counts over the four computational
//! basis outcomes. The quantity of interest is the ZZ-parity correlation:
//! even-parity outcomes (`00`, `11`) contribute +1, odd-parity outcomes
//! (`01`, `10`) contribute -1, averaged over all shots.

use std::fmt;

use bellhop_hal::Counts;

/// The four two-qubit computational basis outcomes, in canonical order.
pub const OUTCOMES: [&str; 4] = ["00", "01", "10", "11"];

/// ZZ-parity correlation of a two-qubit counts distribution.
///
/// The value is `(n00 + n11 - n01 - n10) / total`, always in `[-1.0, 1.0]`.
/// An empty distribution (zero total shots) has correlation zero.
///
/// `Display` formats with an explicit sign and two decimals, e.g. `+1.00`,
/// `-0.47`, `+0.00`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Correlation(f64);

impl Correlation {
    /// Compute the correlation from a counts distribution.
    ///
    /// Outcomes other than the four two-qubit basis states are ignored.
    pub fn from_counts(counts: &Counts) -> Self {
        let n00 = counts.get("00") as f64;
        let n01 = counts.get("01") as f64;
        let n10 = counts.get("10") as f64;
        let n11 = counts.get("11") as f64;
        let total = n00 + n01 + n10 + n11;

        if total == 0.0 {
            return Self(0.0);
        }
        Self((n00 + n11 - n01 - n10) / total)
    }

    /// The raw correlation value.
    pub fn value(&self) -> f64 {
        self.0
    }
}

impl fmt::Display for Correlation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:+.2}", self.0)
    }
}

/// Expand a counts distribution so all four basis outcomes are present.
///
/// Unobserved outcomes get an explicit zero, which keeps downstream
/// consumers (JSON responses, histograms) from special-casing missing keys.
pub fn canonical_counts(counts: &Counts) -> Counts {
    OUTCOMES
        .iter()
        .map(|outcome| (outcome.to_string(), counts.get(outcome)))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn counts_of(pairs: &[(&str, u64)]) -> Counts {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), *v))
            .collect()
    }

    #[test]
    fn perfect_even_parity_is_plus_one() {
        let counts = counts_of(&[("00", 512), ("11", 512)]);
        assert_eq!(Correlation::from_counts(&counts).to_string(), "+1.00");
    }

    #[test]
    fn perfect_odd_parity_is_minus_one() {
        let counts = counts_of(&[("01", 700), ("10", 324)]);
        assert_eq!(Correlation::from_counts(&counts).to_string(), "-1.00");
    }

    #[test]
    fn uniform_distribution_is_zero() {
        let counts = counts_of(&[("00", 256), ("01", 256), ("10", 256), ("11", 256)]);
        assert_eq!(Correlation::from_counts(&counts).to_string(), "+0.00");
    }

    #[test]
    fn empty_counts_is_zero() {
        let counts = Counts::new();
        let corr = Correlation::from_counts(&counts);
        assert_eq!(corr.value(), 0.0);
        assert_eq!(corr.to_string(), "+0.00");
    }

    #[test]
    fn mixed_distribution() {
        // (600 + 150 - 200 - 50) / 1000 = 0.5
        let counts = counts_of(&[("00", 600), ("01", 200), ("10", 50), ("11", 150)]);
        let corr = Correlation::from_counts(&counts);
        assert_eq!(corr.value(), 0.5);
        assert_eq!(corr.to_string(), "+0.50");
    }

    #[test]
    fn near_perfect_rounds_to_two_decimals() {
        // (1010 - 14) / 1024 = 0.97265625
        let counts = counts_of(&[("00", 505), ("01", 8), ("10", 6), ("11", 505)]);
        assert_eq!(Correlation::from_counts(&counts).to_string(), "+0.97");
    }

    #[test]
    fn foreign_outcomes_are_ignored() {
        let counts = counts_of(&[("00", 100), ("000", 9999)]);
        assert_eq!(Correlation::from_counts(&counts).value(), 1.0);
    }

    #[test]
    fn canonical_counts_fills_missing_outcomes() {
        let counts = counts_of(&[("00", 512), ("11", 512)]);
        let canonical = canonical_counts(&counts);
        assert_eq!(canonical.len(), 4);
        assert_eq!(canonical.get("00"), 512);
        assert_eq!(canonical.get("01"), 0);
        assert_eq!(canonical.get("10"), 0);
        assert_eq!(canonical.get("11"), 512);
    }

    #[test]
    fn canonical_counts_preserves_total() {
        let counts = counts_of(&[("01", 300), ("10", 724)]);
        assert_eq!(canonical_counts(&counts).total(), counts.total());
    }

    proptest! {
        #[test]
        fn correlation_is_bounded(
            n00 in 0u64..100_000,
            n01 in 0u64..100_000,
            n10 in 0u64..100_000,
            n11 in 0u64..100_000,
        ) {
            let counts = counts_of(&[("00", n00), ("01", n01), ("10", n10), ("11", n11)]);
            let value = Correlation::from_counts(&counts).value();
            prop_assert!((-1.0..=1.0).contains(&value));
        }

        #[test]
        fn correlation_is_parity_symmetric(
            n00 in 0u64..100_000,
            n01 in 0u64..100_000,
            n10 in 0u64..100_000,
            n11 in 0u64..100_000,
        ) {
            // Swapping outcomes within a parity class changes nothing.
            let a = counts_of(&[("00", n00), ("01", n01), ("10", n10), ("11", n11)]);
            let b = counts_of(&[("00", n11), ("01", n10), ("10", n01), ("11", n00)]);
            prop_assert_eq!(
                Correlation::from_counts(&a).value(),
                Correlation::from_counts(&b).value()
            );
        }

        #[test]
        fn swapping_parity_classes_negates(
            n00 in 0u64..100_000,
            n01 in 0u64..100_000,
            n10 in 0u64..100_000,
            n11 in 0u64..100_000,
        ) {
            let a = counts_of(&[("00", n00), ("01", n01), ("10", n10), ("11", n11)]);
            let b = counts_of(&[("00", n01), ("01", n00), ("10", n11), ("11", n10)]);
            prop_assert_eq!(
                Correlation::from_counts(&a).value(),
                -Correlation::from_counts(&b).value()
            );
        }
    }
}
