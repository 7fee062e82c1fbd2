use serde::{Deserialize, Serialize};

/// Signed certainty in `[-100, 100]` derived from the output neuron.
///
/// Positive means the `true` class, negative the `false` class; the
/// magnitude is the confidence.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Classification {
    pub certainty: f64,
}

impl Classification {
    /// Maps an output in (0, 1) to `100 · (output - 0.5) / 0.5`.
    pub fn from_output(output: f64) -> Classification {
        let max_deviation = 0.5;
        Classification {
            certainty: 100.0 * ((output - 0.5) / max_deviation),
        }
    }

    pub fn is_positive(&self) -> bool {
        self.certainty > 0.0
    }

    pub fn confidence(&self) -> f64 {
        self.certainty.abs()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn midpoint_is_undecided() {
        let c = Classification::from_output(0.5);
        assert_eq!(c.certainty, 0.0);
        assert!(!c.is_positive());
    }

    #[test]
    fn extremes_map_to_full_confidence() {
        assert_eq!(Classification::from_output(1.0).certainty, 100.0);
        assert_eq!(Classification::from_output(0.0).certainty, -100.0);
        assert_eq!(Classification::from_output(0.25).confidence(), 50.0);
    }

    proptest! {
        #[test]
        fn certainty_is_monotonic(a in 0.0f64..1.0, b in 0.0f64..1.0) {
            let (lo, hi) = if a <= b { (a, b) } else { (b, a) };
            let low = Classification::from_output(lo).certainty;
            let high = Classification::from_output(hi).certainty;
            prop_assert!(low <= high);
        }

        #[test]
        fn certainty_is_bounded(x in 0.0f64..=1.0) {
            let c = Classification::from_output(x).certainty;
            prop_assert!((-100.0..=100.0).contains(&c));
        }
    }
}
