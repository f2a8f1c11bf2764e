/*!
Formulas, aka. (finite) trees over atoms built with negation, conjunction, and disjunction.

A formula is one of four things:
- An atom, `Var(a)`.
- The negation of some formula, `Neg(φ)`.
- The conjunction of some (non-empty) list of formulas, `And([φ, ψ, ...])`.
- The disjunction of some (non-empty) list of formulas, `Or([φ, ψ, ...])`.

Other connectives (implication, bi-implication, exclusive-or) are expressed through these four by the [builder](crate::builder), and are not distinct kinds of formula.

Formulas are immutable.
Subformulas are held by reference counting, and so cloning a formula (e.g. to use it in a larger formula) shares rather than copies the structure of the formula.
Shared subformulas are *not* identified by the [encoding](crate::transform::tseitin), and each occurrence of a subformula is encoded as though it were distinct.

```rust
# use tseitin_cnf::namespace::Namespace;
# use tseitin_cnf::builder::{and, neg, or, var};
let mut namespace = Namespace::default();
let p = namespace.fresh_atom().unwrap();
let q = namespace.fresh_atom().unwrap();

let formula = or(and(var(p), neg(var(q))), var(q));

assert_eq!(formula.to_string(), "((x1 ∧ ¬x2) ∨ x2)");
assert_eq!(formula.connective_count(), 2);
assert!(formula.evaluate_with(|atom| atom == p));
```
*/

use std::{collections::BTreeSet, rc::Rc};

use crate::structures::{atom::Atom, model::Model};

/// A formula.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Formula {
    /// An atom.
    Var(Atom),

    /// The negation of a formula.
    Neg(Rc<Formula>),

    /// The conjunction of the formulas, in order of insertion.
    And(Rc<[Formula]>),

    /// The disjunction of the formulas, in order of insertion.
    Or(Rc<[Formula]>),
}

impl Formula {
    /// The value of the formula when each atom is valued by `value_of`.
    pub fn evaluate_with(&self, value_of: impl Fn(Atom) -> bool + Copy) -> bool {
        match self {
            Self::Var(atom) => value_of(*atom),
            Self::Neg(sub) => !sub.evaluate_with(value_of),
            Self::And(operands) => operands.iter().all(|sub| sub.evaluate_with(value_of)),
            Self::Or(operands) => operands.iter().any(|sub| sub.evaluate_with(value_of)),
        }
    }

    /// The value of the formula on a model.
    pub fn evaluate(&self, model: &Model) -> bool {
        self.evaluate_with(|atom| model.value_of(atom))
    }

    /// The atoms which occur in the formula.
    pub fn atoms(&self) -> BTreeSet<Atom> {
        let mut atoms = BTreeSet::default();
        self.collect_atoms(&mut atoms);
        atoms
    }

    fn collect_atoms(&self, atoms: &mut BTreeSet<Atom>) {
        match self {
            Self::Var(atom) => {
                atoms.insert(*atom);
            }
            Self::Neg(sub) => sub.collect_atoms(atoms),
            Self::And(operands) | Self::Or(operands) => {
                for sub in operands.iter() {
                    sub.collect_atoms(atoms);
                }
            }
        }
    }

    /// A count of the conjunctions and disjunctions in the formula, counting each occurrence of a shared subformula.
    pub fn connective_count(&self) -> usize {
        match self {
            Self::Var(_) => 0,
            Self::Neg(sub) => sub.connective_count(),
            Self::And(operands) | Self::Or(operands) => {
                1 + operands.iter().map(|sub| sub.connective_count()).sum::<usize>()
            }
        }
    }
}

impl std::fmt::Display for Formula {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Var(atom) => write!(f, "{atom}"),
            Self::Neg(sub) => write!(f, "¬{sub}"),
            Self::And(operands) => write_list(f, operands, " ∧ "),
            Self::Or(operands) => write_list(f, operands, " ∨ "),
        }
    }
}

fn write_list(
    f: &mut std::fmt::Formatter<'_>,
    operands: &[Formula],
    connective: &str,
) -> std::fmt::Result {
    write!(f, "(")?;
    for (index, sub) in operands.iter().enumerate() {
        if index > 0 {
            write!(f, "{connective}")?;
        }
        write!(f, "{sub}")?;
    }
    write!(f, ")")
}
