/*!
Adding a clause to a context.

# Overview

A clause is first made canonical: sorted, with duplicate literals removed.
Then, by the literals which remain:
- A clause containing some literal and its negation is a tautology, and is dropped.
- The empty clause is a contradiction.
- A unit clause is assigned at level zero, unless the atom of the clause already has a value at level zero.
  In which case, the clause is either satisfied, and dropped, or is a contradiction.
- Any other clause is stored, with the first two literals of the clause watched.

Before a clause is added, the context backjumps to level zero, and so clauses may be added between solves.

The literals of a stored clause are ordered so literals which are not false at level zero are watched, where possible.
No other use is made of the valuation at level zero, and in particular a stored clause may be unit, or false, at level zero.
Such clauses are found when the trail is propagated at the start of a [solve](crate::oracle::builtin::procedures::solve).
*/

use crate::{
    misc::log::targets::{self},
    oracle::builtin::{watch_index, Context},
    structures::{clause::Clause, literal::CLiteral},
    types::err::{self},
};

impl Context {
    /// Adds a clause to the context.
    ///
    /// For documentation see [procedures::registration](crate::oracle::builtin::procedures::registration).
    pub fn register_clause(&mut self, clause: &[CLiteral]) -> Result<(), err::OracleError> {
        if clause.iter().any(|literal| *literal == 0) {
            return Err(err::OracleError::ZeroLiteral);
        }

        self.backjump(0);

        let mut clause = clause.to_vec().canonical();

        // As the clause is canonical, a literal and its negation are adjacent.
        if clause.windows(2).any(|pair| pair[0] == -pair[1]) {
            log::trace!(target: targets::ORACLE, "Dropped tautology {}", clause.as_dimacs(false));
            return Ok(());
        }

        if let Some(max) = clause.atoms().max() {
            self.ensure_atom(max);
        }

        match clause.len() {
            0 => {
                self.inconsistent = true;
                Err(err::OracleError::Contradiction)
            }

            1 => match self.value_of_literal(clause[0]) {
                Some(true) => Ok(()),

                Some(false) => {
                    log::info!(target: targets::ORACLE, "Unit {} conflicts with level zero", clause[0]);
                    self.inconsistent = true;
                    Err(err::OracleError::Contradiction)
                }

                None => {
                    self.assign(clause[0]);
                    Ok(())
                }
            },

            _ => {
                clause.sort_by_key(|literal| self.value_of_literal(*literal) == Some(false));

                let watch_a = watch_index(clause[0]);
                let watch_b = watch_index(clause[1]);

                let key = self.clauses.insert(clause);
                self.watches[watch_a].push(key);
                self.watches[watch_b].push(key);

                Ok(())
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;

    #[test]
    fn tautology_dropped() {
        let mut context = Context::from_config(Config::default(), 2);
        assert!(context.register_clause(&[2, 1, -2]).is_ok());
        assert_eq!(context.clause_count(), 0);
    }

    #[test]
    fn unit_contradiction() {
        let mut context = Context::from_config(Config::default(), 2);
        assert!(context.register_clause(&[2]).is_ok());
        assert!(context.register_clause(&[2, 2]).is_ok());
        assert_eq!(
            context.register_clause(&[-2]),
            Err(err::OracleError::Contradiction)
        );
    }

    #[test]
    fn empty_and_zero() {
        let mut context = Context::from_config(Config::default(), 1);
        assert_eq!(
            context.register_clause(&[1, 0]),
            Err(err::OracleError::ZeroLiteral)
        );
        assert_eq!(
            context.register_clause(&[]),
            Err(err::OracleError::Contradiction)
        );
    }

    #[test]
    fn unfalsified_literals_watched() {
        let mut context = Context::from_config(Config::default(), 3);
        assert!(context.register_clause(&[-1]).is_ok());
        assert!(context.register_clause(&[1, 2, 3]).is_ok());
        assert!(context.watches[watch_index(1)].is_empty());
        assert_eq!(context.watches[watch_index(2)].len(), 1);
        assert_eq!(context.watches[watch_index(3)].len(), 1);
    }
}
