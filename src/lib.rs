//! A library for compiling propositional formulas to conjunctive normal form.
//!
//! tseitin_cnf takes formulas with arbitrary nesting of negation, conjunction, and disjunction (and implication, bi-implication, and exclusive-or, as sugar) to an equisatisfiable set of clauses, by the Tseitin encoding.
//! The clauses may be written in the DIMACS form, or handed to a satisfiability oracle, and a model found by the oracle is read back as a model of the formula.
//!
//! # Orientation
//!
//! The library is designed around a handful of steps, each with its own module:
//! - Atoms are allocated from a [namespace].
//! - [Formulas](crate::structures::formula) are built over atoms with the [builder].
//! - A formula is [encoded](crate::transform::tseitin) as a [CNF instance](crate::structures::cnf).
//! - An instance may be [written or read](crate::dimacs) in DIMACS form.
//! - An instance is [solved](crate::oracle::solve) by an [oracle], and the result read as an optional [model](crate::structures::model).
//!
//! The [compiler] bundles a namespace with an oracle, and is the usual entry point.
//!
//! # Example
//!
//! ```rust
//! # use tseitin_cnf::builder::{and, imp, neg, or, var};
//! # use tseitin_cnf::compiler::Compiler;
//! let mut compiler = Compiler::default();
//! let rain = compiler.fresh_atom().unwrap();
//! let wet = compiler.fresh_atom().unwrap();
//! let umbrella = compiler.fresh_atom().unwrap();
//!
//! // If it rains and there's no umbrella, things get wet.
//! let rule = imp(and(var(rain), neg(var(umbrella))), var(wet));
//! let scenario = and(rule.clone(), and(var(rain), neg(var(wet))));
//!
//! let model = compiler.encode_and_solve(&scenario).unwrap().unwrap();
//! assert!(model.value_of(umbrella));
//! assert!(scenario.evaluate(&model));
//!
//! // Nothing satisfies both the rule and its negation.
//! let absurd = and(rule.clone(), neg(rule));
//! assert_eq!(compiler.encode_and_solve(&absurd), Ok(None));
//! ```
//!
//! # Models and auxiliary atoms
//!
//! The encoding of a formula introduces an auxiliary atom for each conjunction and disjunction of the formula.
//! A model of an encoding values these atoms too, and so a model of an encoding should be [restricted](crate::structures::model::Model::restrict) to the atoms of interest where only those atoms matter.
//!
//! # Logging
//!
//! Calls to [log] are made throughout the library, to the [targets](crate::misc::log::targets) of each area.
//! No logger is installed by the library.

#![allow(clippy::single_match)]
#![allow(clippy::derivable_impls)]

pub mod builder;
pub mod compiler;
pub mod config;
pub mod dimacs;
pub mod namespace;
pub mod oracle;
pub mod structures;
pub mod transform;
pub mod types;

pub mod misc;
