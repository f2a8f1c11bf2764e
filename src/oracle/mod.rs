/*!
Oracles, aka. something which decides the satisfiability of a CNF instance, and the adapter from oracle reports to [models](crate::structures::model).

# Overview

An oracle is used in two steps:
- An [instance](Oracle::new_instance) is created with the atom count of the CNF instance, and each clause is [added](OracleInstance::add_clause) in turn.
- The instance is [solved](OracleInstance::solve), and the result is returned as a [SolveReport].

Adding a clause may fail with a [Contradiction](err::OracleError::Contradiction), if the oracle finds the clauses added so far are trivially inconsistent (e.g. the empty clause was added, or a unit clause conflicting with an earlier unit clause).

The library includes one oracle, the [built-in](builtin) oracle, and any other backend may be used by implementing [Oracle] and [OracleInstance].

# The adapter

[solve] drives an oracle through the two steps, and reads the result as an optional model:
- A contradiction during clause registration, or an [Unsatisfiable](SolveReport::Unsatisfiable) report, is *no* model.
- A [Satisfiable](SolveReport::Satisfiable) report is read as a model, with each atom of a positive literal true and every other atom false.
- A [TimeUp](SolveReport::TimeUp) report is the error [Timeout](err::ErrorKind::Timeout), and is never read as *no* model.

```rust
# use tseitin_cnf::oracle::{self, builtin::BuiltinOracle};
# use tseitin_cnf::structures::cnf::Cnf;
let mut cnf = Cnf::new(2);
assert!(cnf.add_clause(vec![1, 2]).is_ok());
assert!(cnf.add_clause(vec![-1]).is_ok());

let model = oracle::solve(&BuiltinOracle::default(), &cnf).unwrap().unwrap();
assert_eq!(model.literals(), vec![-1, 2]);

assert!(cnf.add_clause(vec![-2]).is_ok());
assert_eq!(oracle::solve(&BuiltinOracle::default(), &cnf), Ok(None));
```

# Auxiliary atoms

The model returned contains a value for every atom up to the atom count of the instance.
So, for an [encoding](crate::transform::tseitin) of a formula, the model includes the values of auxiliary atoms.
*/

pub mod builtin;

use crate::{
    misc::log::targets::{self},
    structures::{cnf::Cnf, literal::IntLiteral, model::Model},
    types::err::{self},
};

/// The result of a solve.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SolveReport {
    /// The instance is satisfiable, with a literal for each atom of the instance.
    Satisfiable(Vec<IntLiteral>),

    /// The instance is unsatisfiable.
    Unsatisfiable,

    /// The time allowed for the solve was exceeded before a result was found.
    TimeUp,
}

impl std::fmt::Display for SolveReport {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Satisfiable(_) => write!(f, "Satisfiable"),
            Self::Unsatisfiable => write!(f, "Unsatisfiable"),
            Self::TimeUp => write!(f, "Unknown"),
        }
    }
}

/// A source of instances.
pub trait Oracle {
    /// The type of instances of the oracle.
    type Instance: OracleInstance;

    /// A fresh instance, over atoms `1..=atom_count`.
    fn new_instance(&self, atom_count: u32) -> Self::Instance;
}

/// An instance of an oracle, to which clauses are added before a solve.
pub trait OracleInstance {
    /// Adds a clause to the instance.
    ///
    /// An oracle may report a [Contradiction](err::OracleError::Contradiction) on finding the clauses added are trivially inconsistent, after which the instance should not be used.
    fn add_clause(&mut self, clause: &[IntLiteral]) -> Result<(), err::OracleError>;

    /// Determines the satisfiability of the clauses added.
    fn solve(&mut self) -> Result<SolveReport, err::OracleError>;
}

/// Solves an instance with the oracle, returning a model of the instance if the instance is satisfiable.
///
/// # Errors
/// - [Timeout](err::ErrorKind::Timeout) if the oracle reports time is up.
/// - Any oracle error other than a contradiction.
pub fn solve<O: Oracle + ?Sized>(oracle: &O, cnf: &Cnf) -> Result<Option<Model>, err::ErrorKind> {
    let mut instance = oracle.new_instance(cnf.atom_count());

    for clause in cnf.clauses() {
        match instance.add_clause(clause) {
            Ok(()) => {}

            Err(err::OracleError::Contradiction) => {
                log::info!(target: targets::ORACLE, "Contradiction on registration of {clause:?}");
                return Ok(None);
            }

            Err(e) => {
                log::error!(target: targets::ORACLE, "Registration of {clause:?} failed: {e}");
                return Err(err::ErrorKind::from(e));
            }
        }
    }

    log::trace!(target: targets::ORACLE, "Registered {} clauses", cnf.clause_count());

    match instance.solve() {
        Ok(SolveReport::Satisfiable(literals)) => {
            log::info!(target: targets::ORACLE, "Satisfiable");
            Ok(Some(Model::from_literals(cnf.atom_count(), literals)))
        }

        Ok(SolveReport::Unsatisfiable) | Err(err::OracleError::Contradiction) => {
            log::info!(target: targets::ORACLE, "Unsatisfiable");
            Ok(None)
        }

        Ok(SolveReport::TimeUp) => {
            log::warn!(target: targets::ORACLE, "Time up");
            Err(err::ErrorKind::Timeout)
        }

        Err(e) => Err(err::ErrorKind::from(e)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// An oracle which reports a fixed result to every solve, after accepting every clause.
    struct Fixed(SolveReport);

    struct FixedInstance(SolveReport);

    impl Oracle for Fixed {
        type Instance = FixedInstance;

        fn new_instance(&self, _atom_count: u32) -> Self::Instance {
            FixedInstance(self.0.clone())
        }
    }

    impl OracleInstance for FixedInstance {
        fn add_clause(&mut self, _clause: &[IntLiteral]) -> Result<(), err::OracleError> {
            Ok(())
        }

        fn solve(&mut self) -> Result<SolveReport, err::OracleError> {
            Ok(self.0.clone())
        }
    }

    #[test]
    fn time_up_is_not_unsatisfiable() {
        let cnf = Cnf::new(1);
        assert_eq!(
            solve(&Fixed(SolveReport::TimeUp), &cnf),
            Err(err::ErrorKind::Timeout)
        );
    }

    #[test]
    fn model_from_report() {
        let mut cnf = Cnf::new(3);
        assert!(cnf.add_clause(vec![1]).is_ok());
        let model = solve(&Fixed(SolveReport::Satisfiable(vec![1, -2, 3])), &cnf)
            .unwrap()
            .unwrap();
        assert_eq!(model.atom_count(), 3);
        assert_eq!(model.literals(), vec![1, -2, 3]);
    }

    #[test]
    fn unsatisfiable_report() {
        let cnf = Cnf::new(0);
        assert_eq!(solve(&Fixed(SolveReport::Unsatisfiable), &cnf), Ok(None));
    }
}
