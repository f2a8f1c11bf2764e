/*!
A procedure to determine the satisfiability of the clauses of a context.

# Overview

The solve procedure is a loop over propagation and decisions:

```none
        +-----------------+
  +---> |  propagation    | ---> conflict ---> backtrack ---> (none left) ---> unsatisfiable
  |     +-----------------+                        |
  |              |                                 |
  |         no conflict                            |
  |              v                                 |
  |     +-----------------+                        |
  +---- |    decision     | <----------------------+
        +-----------------+
                 |
          (none possible)
                 v
            satisfiable
```

Before the loop, the context backjumps to level zero and the whole trail is queued for propagation, as clauses added since the previous solve may be unit (or false) on the values at level zero.

Each iteration of the loop checks the time limit of the [configuration](crate::config::Config::time_limit), and the procedure ends with [TimeUp](SolveReport::TimeUp) if the limit has been exceeded.

On a conflict at level zero the context is marked as inconsistent, and any further solve is immediately unsatisfiable.
*/

use std::time::Instant;

use crate::{
    misc::log::targets::{self},
    oracle::{builtin::Context, SolveReport},
};

use super::decision::DecisionOk;

impl Context {
    /// Determines the satisfiability of the clauses of the context.
    ///
    /// For documentation see [procedures::solve](crate::oracle::builtin::procedures::solve).
    pub fn solve_clauses(&mut self) -> SolveReport {
        if self.inconsistent {
            return SolveReport::Unsatisfiable;
        }

        let this_total_time = Instant::now();
        let time_limit = self.config.time_limit();

        self.backjump(0);
        self.q_head = 0;

        let report = 'solve_loop: loop {
            self.counters.total_iterations += 1;

            if let Some(limit) = time_limit {
                if this_total_time.elapsed() > limit {
                    break 'solve_loop SolveReport::TimeUp;
                }
            }

            match self.propagate() {
                Err(key) => {
                    self.counters.total_conflicts += 1;
                    log::trace!(target: targets::PROPAGATION, "Conflict on {key:?} at level {}", self.current_level());

                    if !self.backtrack() {
                        self.inconsistent = true;
                        break 'solve_loop SolveReport::Unsatisfiable;
                    }
                }

                Ok(()) => match self.make_decision() {
                    DecisionOk::Literal(_) => {}

                    DecisionOk::Exhausted => {
                        break 'solve_loop SolveReport::Satisfiable(self.valuation_literals());
                    }
                },
            }
        };

        self.counters.time += this_total_time.elapsed();

        log::info!(target: targets::ORACLE,
            "{report} after {} decisions and {} conflicts",
            self.counters.total_decisions,
            self.counters.total_conflicts
        );

        report
    }
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use crate::{config::Config, oracle::builtin::Context, oracle::SolveReport};

    /// Every clause over atoms `1..=atom_count` of length `atom_count`, which is unsatisfiable.
    fn full_instance(context: &mut Context, atom_count: u32) {
        for mask in 0..(1_u32 << atom_count) {
            let clause = (1..=atom_count)
                .map(|atom| match mask & (1 << (atom - 1)) {
                    0 => atom as i32,
                    _ => -(atom as i32),
                })
                .collect::<Vec<_>>();
            assert!(context.register_clause(&clause).is_ok());
        }
    }

    #[test]
    fn full_instance_unsat() {
        let mut context = Context::from_config(Config::default(), 4);
        full_instance(&mut context, 4);
        assert_eq!(context.solve_clauses(), SolveReport::Unsatisfiable);
        assert_eq!(context.solve_clauses(), SolveReport::Unsatisfiable);
    }

    #[test]
    fn incremental() {
        let mut context = Context::from_config(Config::default(), 2);
        assert!(context.register_clause(&[1, 2]).is_ok());
        assert_eq!(context.solve_clauses(), SolveReport::Satisfiable(vec![-1, 2]));

        assert!(context.register_clause(&[-2]).is_ok());
        assert_eq!(context.solve_clauses(), SolveReport::Satisfiable(vec![1, -2]));

        assert!(context.register_clause(&[-1, 2]).is_ok());
        assert_eq!(context.solve_clauses(), SolveReport::Unsatisfiable);
    }

    #[test]
    fn time_up() {
        let mut config = Config::default();
        assert!(config.time_limit.set(Duration::from_nanos(1)).is_ok());
        let mut context = Context::from_config(config, 12);
        full_instance(&mut context, 12);

        assert_eq!(context.solve_clauses(), SolveReport::TimeUp);
    }
}
