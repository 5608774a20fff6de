//! Tunable weights of the heuristic evaluator.
//!
//! The weights are plain configuration: [`EvaluatorWeights::DEFAULT`] is the tuned
//! set used unless a JSON file says otherwise. Penalties are stored as non-negative
//! magnitudes and subtracted by the evaluator.
//!
//! ```
//! use tetrabot_evaluator::weights::EvaluatorWeights;
//!
//! let weights: EvaluatorWeights = serde_json::from_str(
//!     r#"{ "lines_cleared": 80.0, "aggregate_height": 4.0, "holes": 40.0, "bumpiness": 8.0 }"#,
//! )
//! .unwrap();
//! assert!(weights.validate().is_ok());
//! ```

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, derive_more::Display, derive_more::Error)]
pub enum WeightsError {
    #[display("weight `{name}` must be a finite number, got {value}")]
    NotFinite { name: &'static str, value: f32 },
    #[display("weight `{name}` must not be negative, got {value}")]
    Negative { name: &'static str, value: f32 },
    #[display("`holes` ({holes}) must be the largest penalty, but `{name}` is {value}")]
    HolesNotHeaviest {
        holes: f32,
        name: &'static str,
        value: f32,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct EvaluatorWeights {
    /// Reward per cleared line.
    pub lines_cleared: f32,
    /// Penalty per unit of summed column height.
    pub aggregate_height: f32,
    /// Penalty per hole.
    pub holes: f32,
    /// Penalty per unit of height difference between neighbouring columns.
    pub bumpiness: f32,
}

impl Default for EvaluatorWeights {
    fn default() -> Self {
        Self::DEFAULT
    }
}

impl EvaluatorWeights {
    pub const DEFAULT: Self = Self {
        lines_cleared: 100.0,
        aggregate_height: 5.0,
        holes: 35.0,
        bumpiness: 10.0,
    };

    fn named(&self) -> [(&'static str, f32); 4] {
        [
            ("lines_cleared", self.lines_cleared),
            ("aggregate_height", self.aggregate_height),
            ("holes", self.holes),
            ("bumpiness", self.bumpiness),
        ]
    }

    /// Checks that every weight is a non-negative finite number and that holes carry
    /// the heaviest penalty.
    pub fn validate(&self) -> Result<(), WeightsError> {
        for (name, value) in self.named() {
            if !value.is_finite() {
                return Err(WeightsError::NotFinite { name, value });
            }
            if value < 0.0 {
                return Err(WeightsError::Negative { name, value });
            }
        }
        for (name, value) in [
            ("aggregate_height", self.aggregate_height),
            ("bumpiness", self.bumpiness),
        ] {
            if value > self.holes {
                return Err(WeightsError::HolesNotHeaviest {
                    holes: self.holes,
                    name,
                    value,
                });
            }
        }
        Ok(())
    }
}
