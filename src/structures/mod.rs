//! Key structures, such as atoms, formulas, and clauses.
//!
//! # Formulas and instances
//!
//! Two notions of 'formula' are in play.
//! - A [formula] is a tree over atoms, built by a user, with no restriction on nesting.
//! - A [cnf] instance is a set of [clauses](clause), interpreted as the conjunction of those clauses (and so is the conjunction of disjunctions over [literals](literal)).
//!
//! The [encoding](crate::transform::tseitin) takes a formula to an instance which is satisfiable exactly when the formula is, and a [model] of the instance is read back as a model of the formula.
//!
//! ## (Boolean) values
//!
//! A (boolean) value is one of two things.
//! Typically the first of the pair is identified as [true] and the second as [false].

pub mod atom;
pub mod clause;
pub mod cnf;
pub mod formula;
pub mod literal;
pub mod model;
