//! Clauses, aka. a collection of literals, interpreted as the disjunction of those literals.
//!
//! The canonical representation of a clause is as a vector of literals.
//! A clause is a *set* of literals, and so clauses stored in a [CNF instance](crate::structures::cnf) are first made [canonical](Clause::canonical): sorted by [literal order](crate::structures::literal::literal_order), without duplicates.
//!
//! ```rust
//! # use tseitin_cnf::structures::clause::Clause;
//! let clause: Vec<i32> = vec![3, -1, 2, 3];
//!
//! assert_eq!(clause.size(), 4);
//! assert_eq!(clause.clone().canonical(), vec![-1, 2, 3]);
//! assert_eq!(clause.canonical().as_dimacs(true), "-1 2 3 0");
//! ```
//!
//! - The empty clause is always false (never true).
//! - Tautological clauses (containing both a literal and its negation) are not detected or removed.

use crate::structures::literal::{literal_order, CLiteral, Literal};

/// The clause trait.
pub trait Clause {
    /// A string of the clause in DIMACS form, with the terminating `0` as optional.
    fn as_dimacs(&self, zero: bool) -> String;

    /// An iterator over all literals in the clause.
    fn literals(&self) -> impl Iterator<Item = &CLiteral>;

    /// The number of literals in the clause.
    fn size(&self) -> usize;

    /// An iterator over all atoms (indices) in the clause.
    fn atoms(&self) -> impl Iterator<Item = u32>;

    /// The clause in its canonical form.
    fn canonical(self) -> CClause;

    /// Whether some literal of the clause is true on the given valuation of atoms.
    fn satisfied_by(&self, value_of: impl Fn(u32) -> bool) -> bool;
}

/// The implementation of a clause as a vector of literals.
pub type VClause = Vec<CLiteral>;

/// The canonical implementation of a clause.
pub type CClause = VClause;

impl Clause for VClause {
    fn as_dimacs(&self, zero: bool) -> String {
        let mut the_string = String::default();
        for literal in self {
            the_string.push_str(format!("{literal} ").as_str());
        }
        match zero {
            true => the_string.push('0'),
            false => {
                the_string.pop();
            }
        }
        the_string
    }

    fn literals(&self) -> impl Iterator<Item = &CLiteral> {
        self.iter()
    }

    fn size(&self) -> usize {
        self.len()
    }

    fn atoms(&self) -> impl Iterator<Item = u32> {
        self.iter().map(|literal| literal.atom())
    }

    fn canonical(mut self) -> CClause {
        self.sort_unstable_by(literal_order);
        self.dedup();
        self
    }

    fn satisfied_by(&self, value_of: impl Fn(u32) -> bool) -> bool {
        self.iter()
            .any(|literal| value_of(literal.atom()) == literal.polarity())
    }
}
