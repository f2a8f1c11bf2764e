use std::time::Duration;

use tseitin_cnf::config::Config;

use crate::Args;

/// A [Config] from the given arguments.
///
/// If some value is out of bounds, a message naming the bounds of the option is returned.
pub fn config_from_args(args: &Args) -> Result<Config, String> {
    let mut config = Config::default();

    if let Some(seconds) = args.time_limit {
        println!("c time_limit set to: {seconds}s");
        config.time_limit.value = Duration::from_secs(seconds);
    }

    if let Some(seed) = args.seed {
        println!("c seed set to: {seed}");
        config.seed.value = seed;
    }

    if let Some(lean) = args.polarity_lean {
        let (min, max) = config.polarity_lean.min_max();
        if config.polarity_lean.set(lean).is_err() {
            return Err(format!("polarity_lean requires a value between {min} and {max}"));
        }
        println!("c polarity_lean set to: {lean}");
    }

    if let Some(bias) = args.random_decision_bias {
        let (min, max) = config.random_decision_bias.min_max();
        if config.random_decision_bias.set(bias).is_err() {
            return Err(format!(
                "random_decision_bias requires a value between {min} and {max}"
            ));
        }
        println!("c random_decision_bias set to: {bias}");
    }

    if args.no_phase_saving {
        println!("c phase_saving disabled");
        config.phase_saving.value = false;
    }

    Ok(config)
}
