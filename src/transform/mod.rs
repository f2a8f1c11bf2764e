//! Transformations from formulas to clauses.
//!
//! For the moment, this is limited to the [Tseitin encoding](tseitin).

pub mod tseitin;
