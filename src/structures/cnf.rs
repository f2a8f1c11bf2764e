/*!
CNF instances, aka. a set of clauses paired with a bound on the atoms used.

A CNF instance is interpreted as the conjunction of its clauses.
Clauses are stored in canonical form in a set, and so duplicate clauses collapse and the order in which clauses were added carries no meaning.

```rust
# use tseitin_cnf::structures::cnf::Cnf;
let mut cnf = Cnf::new(2);

assert_eq!(cnf.add_clause(vec![1, -2]), Ok(true));
assert_eq!(cnf.add_clause(vec![-2, 1, 1]), Ok(false));
assert_eq!(cnf.add_clause(vec![3]), Ok(true));

assert_eq!(cnf.clause_count(), 2);
assert_eq!(cnf.atom_count(), 3);
```

Every literal of a clause is nonzero, with an atom no greater than [ATOM_MAX], and so every instance may be written in DIMACS form.
*/

use std::collections::BTreeSet;

use crate::{
    structures::{
        atom::ATOM_MAX,
        clause::{CClause, Clause},
        literal::{IntLiteral, Literal},
    },
    types::err::{self},
};

/// A set of clauses, and the maximum atom (index) in use.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Cnf {
    /// The clauses of the instance, each in canonical form.
    clauses: BTreeSet<CClause>,

    /// The declared maximum atom (index).
    atom_count: u32,
}

impl Cnf {
    /// An empty instance over atoms `1..=atom_count`, with the count capped at [ATOM_MAX].
    pub fn new(atom_count: u32) -> Self {
        Cnf {
            clauses: BTreeSet::default(),
            atom_count: atom_count.min(ATOM_MAX),
        }
    }

    /// Adds a clause to the instance, returning whether the clause was new.
    ///
    /// If the clause contains an atom above the declared atom count, the count is raised to that atom.
    ///
    /// # Errors
    /// - A zero in the clause is a [NullAtom](err::FormulaError::NullAtom).
    /// - A literal whose atom exceeds [ATOM_MAX] (only `i32::MIN`) is a [LiteralRange](err::FormulaError::LiteralRange).
    ///
    /// On error the instance is unchanged.
    pub fn add_clause(&mut self, clause: CClause) -> Result<bool, err::ErrorKind> {
        for literal in &clause {
            match literal.atom() {
                0 => return Err(err::ErrorKind::from(err::FormulaError::NullAtom)),
                atom if atom > ATOM_MAX => {
                    return Err(err::ErrorKind::from(err::FormulaError::LiteralRange(
                        *literal,
                    )))
                }
                _ => {}
            }
        }

        if let Some(max) = clause.atoms().max() {
            self.atom_count = self.atom_count.max(max);
        }
        Ok(self.clauses.insert(clause.canonical()))
    }

    /// An iterator over the clauses of the instance.
    pub fn clauses(&self) -> impl Iterator<Item = &CClause> {
        self.clauses.iter()
    }

    pub fn clause_count(&self) -> usize {
        self.clauses.len()
    }

    /// A count of literal occurrences over all clauses.
    pub fn literal_count(&self) -> usize {
        self.clauses.iter().map(|clause| clause.size()).sum()
    }

    pub fn atom_count(&self) -> u32 {
        self.atom_count
    }

    /// Declares the maximum atom in use.
    /// The count is never lowered below an atom appearing in some clause, and never raised above [ATOM_MAX].
    pub fn declare_atom_count(&mut self, atom_count: u32) {
        let used = self
            .clauses
            .iter()
            .flat_map(|clause| clause.atoms())
            .max()
            .unwrap_or(0);
        self.atom_count = atom_count.min(ATOM_MAX).max(used);
    }

    pub fn is_empty(&self) -> bool {
        self.clauses.is_empty()
    }

    /// Whether every clause of the instance is satisfied on the given valuation of atoms.
    pub fn satisfied_by(&self, value_of: impl Fn(u32) -> bool) -> bool {
        self.clauses
            .iter()
            .all(|clause| clause.satisfied_by(&value_of))
    }

    /// Whether some clause contains the literal.
    pub fn mentions(&self, literal: IntLiteral) -> bool {
        self.clauses.iter().any(|clause| clause.contains(&literal))
    }
}

impl std::fmt::Display for Cnf {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut clauses = self.clauses.iter().peekable();
        while let Some(clause) = clauses.next() {
            write!(f, "({})", clause.as_dimacs(false))?;
            if clauses.peek().is_some() {
                write!(f, " ")?;
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dimacs;

    #[test]
    fn zero_is_rejected() {
        let mut cnf = Cnf::new(1);
        assert_eq!(
            cnf.add_clause(vec![1, 0]),
            Err(err::ErrorKind::Formula(err::FormulaError::NullAtom))
        );
        assert!(cnf.is_empty());
        assert_eq!(cnf.atom_count(), 1);
    }

    #[test]
    fn minimum_integer_is_rejected() {
        let mut cnf = Cnf::default();
        assert_eq!(
            cnf.add_clause(vec![1, i32::MIN]),
            Err(err::ErrorKind::Formula(err::FormulaError::LiteralRange(
                i32::MIN
            )))
        );
        assert_eq!(cnf.atom_count(), 0);

        assert_eq!(cnf.add_clause(vec![1, -i32::MAX]), Ok(true));
        assert_eq!(cnf.atom_count(), ATOM_MAX);
    }

    #[test]
    fn counts_capped() {
        let mut cnf = Cnf::new(u32::MAX);
        assert_eq!(cnf.atom_count(), ATOM_MAX);

        cnf.declare_atom_count(u32::MAX);
        assert_eq!(cnf.atom_count(), ATOM_MAX);
    }

    #[test]
    fn accepted_clauses_render() {
        let mut cnf = Cnf::default();
        assert!(cnf.add_clause(vec![1, 0]).is_err());
        assert!(cnf.add_clause(vec![i32::MIN]).is_err());
        assert_eq!(cnf.add_clause(vec![-3, 2]), Ok(true));

        assert_eq!(dimacs::parse(&dimacs::render(&cnf)), Ok(cnf));
    }
}
