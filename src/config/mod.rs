/*!
Configuration of the [built-in oracle](crate::oracle::builtin).

The compiler itself has nothing to configure --- the encoding of a formula is fixed.
All configuration is of the search made by the built-in oracle, and each option is a [ConfigOption] which records the bounds of acceptable values.

```rust
# use tseitin_cnf::config::Config;
let mut config = Config::default();

assert!(config.polarity_lean.set(0.75).is_ok());
assert!(config.polarity_lean.set(1.5).is_err());
assert_eq!(config.polarity_lean.value, 0.75);
```
*/

mod config_option;
pub use config_option::ConfigOption;

use std::time::Duration;

/// The probability of assigning positive polarity to an atom when freely choosing a value.
pub type PolarityLean = f64;

/// The probability of choosing a random unvalued atom when making a decision.
pub type RandomDecisionBias = f64;

/// The primary configuration structure.
#[derive(Clone, Debug)]
pub struct Config {
    /// The probability of assigning positive polarity to an atom when freely choosing a value.
    pub polarity_lean: ConfigOption<PolarityLean>,

    /// The probability of choosing a random unvalued atom, rather than the least unvalued atom.
    pub random_decision_bias: ConfigOption<RandomDecisionBias>,

    /// Default to the last set value of an atom when choosing a value for the atom, otherwise decide with [polarity_lean](Config::polarity_lean).
    pub phase_saving: ConfigOption<bool>,

    /// The time limit for a solve.
    /// A limit of zero is no limit.
    pub time_limit: ConfigOption<Duration>,

    /// The seed for the source of randomness.
    pub seed: ConfigOption<u64>,
}

impl Default for Config {
    /// The default configuration is deterministic: no random decisions, all values are initially false, and no time limit.
    fn default() -> Self {
        Config {
            polarity_lean: ConfigOption {
                name: "polarity_lean",
                min: 0.0,
                max: 1.0,
                value: 0.0,
            },

            random_decision_bias: ConfigOption {
                name: "random_decision_bias",
                min: 0.0,
                max: 1.0,
                value: 0.0,
            },

            phase_saving: ConfigOption {
                name: "phase_saving",
                min: false,
                max: true,
                value: true,
            },

            time_limit: ConfigOption {
                name: "time_limit",
                min: Duration::from_secs(0),
                max: Duration::MAX,
                value: Duration::from_secs(0),
            },

            seed: ConfigOption {
                name: "seed",
                min: u64::MIN,
                max: u64::MAX,
                value: 0,
            },
        }
    }
}

impl Config {
    /// The time limit of a solve, if some limit is set.
    pub fn time_limit(&self) -> Option<Duration> {
        match self.time_limit.value.is_zero() {
            true => None,
            false => Some(self.time_limit.value),
        }
    }
}
