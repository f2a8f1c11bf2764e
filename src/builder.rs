/*!
Tools for building formulas.

The binary constructors ([and], [or], [imp], [iff], [xor]) are infallible, while the n-ary constructors ([and_all], [or_all]) fail on an empty list of operands.
An n-ary constructor given a single operand returns that operand, as the conjunction (or disjunction) of a single formula is that formula.

Implication, bi-implication, and exclusive-or are expanded immediately:

| Constructor   | Formula                      |
|---------------|------------------------------|
| `imp(φ, ψ)`   | `Or(Neg(φ), ψ)`              |
| `iff(φ, ψ)`   | `And(imp(φ, ψ), imp(ψ, φ))`  |
| `xor(φ, ψ)`   | `Or(And(φ, Neg(ψ)), And(Neg(φ), ψ))` |

```rust
# use tseitin_cnf::builder::{and_all, imp, neg, or, var};
# use tseitin_cnf::namespace::Namespace;
# use tseitin_cnf::structures::formula::Formula;
# use tseitin_cnf::types::err::FormulaError;
let mut namespace = Namespace::default();
let p = namespace.fresh_or_max_atom();
let q = namespace.fresh_or_max_atom();

assert_eq!(imp(var(p), var(q)), or(neg(var(p)), var(q)));
assert_eq!(and_all([var(p)]), Ok(var(p)));
assert_eq!(and_all(Vec::<Formula>::new()), Err(FormulaError::EmptyConnective));
```
*/

use std::rc::Rc;

use crate::{
    structures::{
        atom::Atom,
        clause::CClause,
        formula::Formula,
        literal::{CLiteral, Literal},
    },
    types::err::{self},
};

/// The formula of an atom.
pub fn var(atom: Atom) -> Formula {
    Formula::Var(atom)
}

/// The negation of a formula.
pub fn neg(formula: Formula) -> Formula {
    Formula::Neg(Rc::new(formula))
}

/// The conjunction of two formulas.
pub fn and(left: Formula, right: Formula) -> Formula {
    Formula::And(Rc::from(vec![left, right]))
}

/// The disjunction of two formulas.
pub fn or(left: Formula, right: Formula) -> Formula {
    Formula::Or(Rc::from(vec![left, right]))
}

/// The conjunction of some (non-empty) collection of formulas.
pub fn and_all(
    operands: impl IntoIterator<Item = Formula>,
) -> Result<Formula, err::FormulaError> {
    let mut operands = operands.into_iter().collect::<Vec<_>>();
    match operands.len() {
        0 => Err(err::FormulaError::EmptyConnective),
        1 => Ok(operands.remove(0)),
        _ => Ok(Formula::And(Rc::from(operands))),
    }
}

/// The disjunction of some (non-empty) collection of formulas.
pub fn or_all(
    operands: impl IntoIterator<Item = Formula>,
) -> Result<Formula, err::FormulaError> {
    let mut operands = operands.into_iter().collect::<Vec<_>>();
    match operands.len() {
        0 => Err(err::FormulaError::EmptyConnective),
        1 => Ok(operands.remove(0)),
        _ => Ok(Formula::Or(Rc::from(operands))),
    }
}

/// The implication from `antecedent` to `consequent`.
pub fn imp(antecedent: Formula, consequent: Formula) -> Formula {
    or(neg(antecedent), consequent)
}

/// The bi-implication of two formulas.
pub fn iff(left: Formula, right: Formula) -> Formula {
    and(imp(left.clone(), right.clone()), imp(right, left))
}

/// The exclusive disjunction of two formulas.
pub fn xor(left: Formula, right: Formula) -> Formula {
    or(
        and(left.clone(), neg(right.clone())),
        and(neg(left), right),
    )
}

/// The formula of a literal, with atoms found by `lookup`.
pub fn literal(
    literal: CLiteral,
    lookup: impl Fn(u32) -> Result<Atom, err::ErrorKind>,
) -> Result<Formula, err::ErrorKind> {
    let atom = var(lookup(literal.atom())?);
    match literal.polarity() {
        true => Ok(atom),
        false => Ok(neg(atom)),
    }
}

/// The conjunction of the disjunctions of some (non-empty) collection of (non-empty) clauses.
///
/// Each literal of a clause is read through `lookup`, and so the clauses may be placed on any atoms.
/// For example, by shifting each index to read a clause over 'primed' copies of some atoms.
///
/// ```rust
/// # use tseitin_cnf::builder::{from_clauses, neg, or, var};
/// # use tseitin_cnf::namespace::Namespace;
/// let mut namespace = Namespace::default();
/// let atoms = namespace.fresh_atoms(4).unwrap();
///
/// // The clause -1 2 read over the second pair of atoms.
/// let primed = from_clauses(&[vec![-1, 2]], |index| namespace.atom(index + 2)).unwrap();
/// assert_eq!(primed, or(neg(var(atoms[2])), var(atoms[3])));
/// ```
pub fn from_clauses(
    clauses: &[CClause],
    lookup: impl Fn(u32) -> Result<Atom, err::ErrorKind>,
) -> Result<Formula, err::ErrorKind> {
    let mut conjuncts = Vec::with_capacity(clauses.len());
    for clause in clauses {
        let mut disjuncts = Vec::with_capacity(clause.len());
        for l in clause {
            disjuncts.push(literal(*l, &lookup)?);
        }
        conjuncts.push(or_all(disjuncts)?);
    }
    Ok(and_all(conjuncts)?)
}
