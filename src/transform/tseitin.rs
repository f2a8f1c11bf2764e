/*!
The Tseitin encoding of a formula, aka. a (linear size) transformation of a formula to an equisatisfiable CNF instance.

# Overview

The encoding is a single traversal of a formula, which returns a literal standing for the truth value of each subformula visited.
Alongside, clauses are added to an instance which *define* the auxiliary atoms introduced for conjunctions and disjunctions:

| Subformula        | Literal | Clauses                                              |
|-------------------|---------|------------------------------------------------------|
| `Var(a)`          | `a`     | none                                                 |
| `Neg(φ)`          | `-l`    | none, where `l` is the literal of φ                  |
| `And(φ1, …, φn)`  | `z`     | `-z l_i` for each *i*, and `z -l_1 … -l_n`           |
| `Or(φ1, …, φn)`   | `z`     | `z -l_i` for each *i*, and `-z l_1 … l_n`            |

Here, `z` is a fresh atom allocated from the namespace.
And, after the literal *r* of the root formula is found, the unit clause `r` is added --- the clauses above only ensure each auxiliary atom agrees with the subformula it stands for, and the unit clause asserts that the formula itself is true.

Negation introduces no atom and no clause: the literal of the negated subformula is negated.

# Equisatisfiability

The instance is satisfiable if and only if the formula is satisfiable.
Still, the instance is *not* equivalent to the formula, as the instance is over more atoms.
- Any model of the instance, restricted to the atoms of the formula, is a model of the formula.
- Any model of the formula extends to exactly one model of the instance, as the value of each auxiliary atom is forced by the values of the atoms below it.

# Size

Each conjunction or disjunction with *n* operands adds *n + 1* clauses and *2n + 1* literals, and so the size of the instance is linear in the size of the formula.
Each occurrence of a shared subformula is encoded independently.

```rust
# use tseitin_cnf::builder::{and, neg, var};
# use tseitin_cnf::namespace::Namespace;
# use tseitin_cnf::transform::tseitin;
let mut namespace = Namespace::default();
let p = namespace.fresh_or_max_atom();
let q = namespace.fresh_or_max_atom();

let encoding = tseitin::encode(&mut namespace, &and(var(p), neg(var(q)))).unwrap();

assert_eq!(encoding.root, 3);
assert_eq!(encoding.cnf.atom_count(), 3);
// -3 1, -3 -2, 3 -1 2, and the unit clause 3.
assert_eq!(encoding.cnf.clause_count(), 4);
```
*/

use crate::{
    misc::log::targets::{self},
    namespace::Namespace,
    structures::{
        atom::Atom,
        clause::{CClause, Clause},
        cnf::Cnf,
        formula::Formula,
        literal::{CLiteral, Literal},
    },
    types::err::{self},
};

/// The result of encoding a formula.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Encoding {
    /// The instance, including the unit clause of the root literal.
    pub cnf: Cnf,

    /// The literal standing for the formula.
    pub root: CLiteral,
}

/// Encodes a formula, allocating auxiliary atoms from the namespace.
///
/// The atom count of the instance is the high-water mark of the namespace after encoding, and so includes every atom allocated by the namespace, whether or not the atom occurs in the formula.
///
/// # Errors
/// - An atom of the formula above the high-water mark of the namespace is [UnknownAtom](err::NamespaceError::UnknownAtom).
/// - A conjunction or disjunction without operands is an [EmptyConnective](err::FormulaError::EmptyConnective).
///
/// On error, auxiliary atoms allocated before the error was found remain allocated.
pub fn encode(namespace: &mut Namespace, root: &Formula) -> Result<Encoding, err::ErrorKind> {
    let mut encoder = Encoder {
        namespace,
        cnf: Cnf::default(),
    };

    let root_literal = encoder.literal_of(root)?;
    encoder.cnf.add_clause(vec![root_literal])?;

    let Encoder { namespace, mut cnf } = encoder;
    cnf.declare_atom_count(namespace.high_water_mark());

    log::info!(target: targets::TSEITIN,
        "Encoded {} connectives as {} clauses over {} atoms",
        root.connective_count(),
        cnf.clause_count(),
        cnf.atom_count()
    );

    Ok(Encoding {
        cnf,
        root: root_literal,
    })
}

/// Bookkeeping for a single encoding.
struct Encoder<'n> {
    namespace: &'n mut Namespace,
    cnf: Cnf,
}

/// The kind of an n-ary connective.
#[derive(Clone, Copy)]
enum Connective {
    And,
    Or,
}

impl Encoder<'_> {
    /// The literal standing for the given subformula, with any defining clauses added to the instance.
    fn literal_of(&mut self, formula: &Formula) -> Result<CLiteral, err::ErrorKind> {
        match formula {
            Formula::Var(atom) => self.literal_of_atom(*atom),

            Formula::Neg(sub) => Ok(self.literal_of(sub)?.negate()),

            Formula::And(operands) => self.define(Connective::And, operands),

            Formula::Or(operands) => self.define(Connective::Or, operands),
        }
    }

    fn literal_of_atom(&self, atom: Atom) -> Result<CLiteral, err::ErrorKind> {
        match self.namespace.is_known(atom) {
            true => Ok(CLiteral::new(atom.index(), true)),
            false => {
                log::warn!(target: targets::TSEITIN, "Atom {atom} is unknown to the namespace");
                Err(err::ErrorKind::from(err::NamespaceError::UnknownAtom(
                    atom.index(),
                )))
            }
        }
    }

    /// Allocates an auxiliary atom standing for the connective over the operands, and adds the clauses defining the atom.
    ///
    /// For a conjunction with auxiliary atom `z` and operand literals `l_1 … l_n`:
    /// - `-z l_i` for each *i*, as `z` implies each operand.
    /// - `z -l_1 … -l_n`, as the operands together imply `z`.
    ///
    /// A disjunction is dual, with each literal negated.
    fn define(
        &mut self,
        connective: Connective,
        operands: &[Formula],
    ) -> Result<CLiteral, err::ErrorKind> {
        if operands.is_empty() {
            return Err(err::ErrorKind::from(err::FormulaError::EmptyConnective));
        }

        let mut operand_literals = Vec::with_capacity(operands.len());
        for operand in operands {
            operand_literals.push(self.literal_of(operand)?);
        }

        let z = CLiteral::new(self.namespace.fresh_atom()?.index(), true);

        // For a disjunction, each literal is negated.
        let sign = match connective {
            Connective::And => 1,
            Connective::Or => -1,
        };

        let mut long_clause: CClause = Vec::with_capacity(operand_literals.len() + 1);
        long_clause.push(sign * z);

        for literal in operand_literals {
            self.cnf.add_clause(vec![sign * -z, sign * literal])?;
            long_clause.push(sign * -literal);
        }

        log::trace!(target: targets::TSEITIN, "Defined {z} by {}", long_clause.as_dimacs(true));
        self.cnf.add_clause(long_clause)?;

        Ok(z)
    }
}
