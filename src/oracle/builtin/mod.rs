/*!
The built-in oracle, a small DPLL search.

# Overview

Each [instance](Context) of the oracle stores:
- The clauses added, each of length at least two, in a clause store.
- The *watches* of each literal, aka. the clauses in which the literal is one of the two watched literals.
- A valuation of the atoms, and the trail of literals assigned, in order of assignment.
- The decision levels of the search.

Unit clauses are not stored, and are instead assigned at level zero when added.

A [solve](procedures::solve) alternates between [propagation](procedures::bcp) and [decisions](procedures::decision), and on a conflict [backtracks](procedures::backjump) to the most recent decision whose other polarity has not yet been tried.
There is no clause learning, and so the search is complete but is only suited to the modest instances of the library's tests and examples.

```rust
# use tseitin_cnf::oracle::{Oracle, OracleInstance, SolveReport};
# use tseitin_cnf::oracle::builtin::BuiltinOracle;
let oracle = BuiltinOracle::default();
let mut instance = oracle.new_instance(3);

assert!(instance.add_clause(&[1, 2]).is_ok());
assert!(instance.add_clause(&[-1, 3]).is_ok());
assert!(instance.add_clause(&[-2]).is_ok());

assert_eq!(instance.solve(), Ok(SolveReport::Satisfiable(vec![1, -2, 3])));
```

# Configuration

The search is configured by a [Config](crate::config::Config), for the polarity and choice of decisions, phase saving, and a time limit.
With the default configuration the search is deterministic.
*/

pub mod counters;
pub mod procedures;

use rand::{rngs::StdRng, SeedableRng};
use slotmap::{new_key_type, SlotMap};

use crate::{
    config::Config,
    oracle::{Oracle, OracleInstance, SolveReport},
    structures::literal::{CLiteral, IntLiteral, Literal},
    types::err::{self},
};

use counters::Counters;

new_key_type! {
    /// The key of a clause in the clause store of a context.
    pub struct ClauseKey;
}

/// The built-in oracle.
#[derive(Clone, Debug, Default)]
pub struct BuiltinOracle {
    /// The configuration given to each instance.
    pub config: Config,
}

impl BuiltinOracle {
    pub fn from_config(config: Config) -> Self {
        BuiltinOracle { config }
    }
}

impl Oracle for BuiltinOracle {
    type Instance = Context;

    fn new_instance(&self, atom_count: u32) -> Self::Instance {
        Context::from_config(self.config.clone(), atom_count)
    }
}

/// A decision level.
#[derive(Clone, Copy, Debug)]
pub struct Level {
    /// The index on the trail of the decision of the level.
    pub trail_start: usize,

    /// The decision, as a literal.
    pub decision: CLiteral,

    /// Whether the decision is the negation of an earlier decision, after which the level may not be flipped again.
    pub flipped: bool,
}

/// An instance of the built-in oracle.
pub struct Context {
    /// The configuration of the context.
    pub config: Config,

    /// Counters related to a solve.
    pub counters: Counters,

    /// The greatest atom of the context.
    pub(super) atom_count: u32,

    /// The value of each atom, indexed by atom, with index zero unused.
    pub(super) valuation: Vec<Option<bool>>,

    /// The most recent value of each atom, for phase saving.
    pub(super) previous_valuation: Vec<Option<bool>>,

    /// Stored clauses, each of length at least two, with the watched literals at indices 0 and 1.
    pub(super) clauses: SlotMap<ClauseKey, Vec<CLiteral>>,

    /// The keys of clauses watching a literal, indexed by [watch_index].
    pub(super) watches: Vec<Vec<ClauseKey>>,

    /// Literals assigned, in order of assignment.
    pub(super) trail: Vec<CLiteral>,

    /// The index of the next literal of the trail to propagate.
    pub(super) q_head: usize,

    /// The decision levels, with level zero implicit.
    pub(super) levels: Vec<Level>,

    /// Whether the clauses added are known to be unsatisfiable.
    pub(super) inconsistent: bool,

    /// The source of randomness for decisions.
    pub(super) rng: StdRng,
}

/// The index of the watch list of a literal.
pub fn watch_index(literal: CLiteral) -> usize {
    2 * literal.atom() as usize + usize::from(!literal.polarity())
}

impl Context {
    /// A context over atoms `1..=atom_count`.
    pub fn from_config(config: Config, atom_count: u32) -> Self {
        let rng = StdRng::seed_from_u64(config.seed.value);
        let mut the_context = Context {
            config,
            counters: Counters::default(),
            atom_count: 0,
            valuation: vec![None],
            previous_valuation: vec![None],
            clauses: SlotMap::with_key(),
            watches: vec![Vec::default(), Vec::default()],
            trail: Vec::default(),
            q_head: 0,
            levels: Vec::default(),
            inconsistent: false,
            rng,
        };
        the_context.ensure_atom(atom_count);
        the_context
    }

    /// Extends the context to include every atom up to the given atom.
    pub(super) fn ensure_atom(&mut self, atom: u32) {
        if atom > self.atom_count {
            self.atom_count = atom;
            let size = atom as usize + 1;
            self.valuation.resize(size, None);
            self.previous_valuation.resize(size, None);
            self.watches.resize_with(2 * size, Vec::default);
        }
    }

    /// The greatest atom of the context.
    pub fn atom_count(&self) -> u32 {
        self.atom_count
    }

    /// The current value of an atom, if any.
    pub fn value_of(&self, atom: u32) -> Option<bool> {
        self.valuation.get(atom as usize).copied().flatten()
    }

    /// The current value of a literal, if the atom of the literal has a value.
    pub fn value_of_literal(&self, literal: CLiteral) -> Option<bool> {
        self.value_of(literal.atom())
            .map(|value| value == literal.polarity())
    }

    /// The current decision level.
    pub fn current_level(&self) -> usize {
        self.levels.len()
    }

    /// A count of the clauses (of length at least two) stored.
    pub fn clause_count(&self) -> usize {
        self.clauses.len()
    }

    /// Assigns the atom of a literal the polarity of the literal, and places the literal on the trail.
    ///
    /// The atom must not have a value.
    pub(super) fn assign(&mut self, literal: CLiteral) {
        let atom = literal.atom() as usize;
        self.valuation[atom] = Some(literal.polarity());
        self.previous_valuation[atom] = Some(literal.polarity());
        self.trail.push(literal);
    }

    /// The current valuation as one literal per atom.
    /// Any atom without a value is read as false.
    pub(super) fn valuation_literals(&self) -> Vec<IntLiteral> {
        (1..=self.atom_count)
            .map(|atom| IntLiteral::new(atom, self.value_of(atom).unwrap_or(false)))
            .collect()
    }
}

impl OracleInstance for Context {
    fn add_clause(&mut self, clause: &[IntLiteral]) -> Result<(), err::OracleError> {
        self.register_clause(clause)
    }

    fn solve(&mut self) -> Result<SolveReport, err::OracleError> {
        Ok(self.solve_clauses())
    }
}
