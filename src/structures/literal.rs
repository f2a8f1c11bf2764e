//! Literals are atoms paired with a (boolean) polarity.
//!
//! Or, rather, anything which has methods for returning an atom and a polarity.
//!
//! The representation used throughout the library is a (nonzero) integer, with the sign of the integer indicating polarity.
//! This is the representation of DIMACS, and of most solvers.
//!
//! ```rust
//! # use tseitin_cnf::structures::literal::{IntLiteral, Literal};
//! let literal = IntLiteral::new(79, true);
//!
//! assert!(literal.polarity());
//! assert_eq!(literal.atom(), 79);
//! assert!(!literal.negate().polarity());
//! assert_eq!(literal.negate(), -79);
//! ```
//!
//! Literals are ordered by atom and then polarity (see [literal_order]), with the (Rust default) ordering of 'false' being (strictly) less than 'true'.

use std::cmp::Ordering;

use crate::structures::atom::ATOM_MAX;

/// Something which has methods for returning an atom (index) and a polarity, etc.
pub trait Literal: std::cmp::Ord + std::hash::Hash {
    /// A fresh literal, specified by pairing an atom (index) with a boolean.
    ///
    /// The atom must be no greater than [ATOM_MAX].
    fn new(atom: u32, polarity: bool) -> Self;

    /// The negation of the literal.
    fn negate(&self) -> Self;

    /// The atom (index) of the literal.
    fn atom(&self) -> u32;

    /// The polarity of the literal.
    fn polarity(&self) -> bool;
}

/// The representation of a literal as a signed integer.
pub type IntLiteral = i32;

/// The canonical implementation of a literal.
pub type CLiteral = IntLiteral;

impl Literal for IntLiteral {
    fn new(atom: u32, polarity: bool) -> Self {
        debug_assert!(atom <= ATOM_MAX, "atom {atom} exceeds the maximum atom");
        match polarity {
            true => atom as IntLiteral,
            false => -(atom as IntLiteral),
        }
    }

    fn negate(&self) -> Self {
        -self
    }

    fn atom(&self) -> u32 {
        self.unsigned_abs()
    }

    fn polarity(&self) -> bool {
        self.is_positive()
    }
}

/// Orders literals by atom and then polarity.
pub fn literal_order(a: &CLiteral, b: &CLiteral) -> Ordering {
    a.atom()
        .cmp(&b.atom())
        .then(a.polarity().cmp(&b.polarity()))
}
