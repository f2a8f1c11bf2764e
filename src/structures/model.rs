/*!
Models, aka. a (total) function from atoms to truth values which satisfies some formula.

A model is stored as the set of atoms which are true, and every other atom is false.
The model also records the atom count of the instance it was read from, and so atoms above the count may be identified as those the model says nothing about (though they are still false).

# Auxiliary atoms

A model obtained by [solving](crate::oracle::solve) an encoding contains a value for every atom up to the atom count of the encoding, and so includes the auxiliary atoms introduced by the [encoding](crate::transform::tseitin).
These atoms have no meaning outside of the encoding, and [restrict](Model::restrict) may be used to drop them.

```rust
# use tseitin_cnf::structures::{atom::Atom, model::Model};
let model = Model::from_literals(3, [1, -2, 3]);
let one = Atom::try_from(1).unwrap();
let two = Atom::try_from(2).unwrap();

assert!(model.value_of(one));
assert!(!model.value_of(two));
assert_eq!(model.restrict(&[one, two]).true_atoms().count(), 1);
```
*/

use std::collections::BTreeSet;

use crate::structures::{
    atom::Atom,
    literal::{IntLiteral, Literal},
};

/// The atoms true on a satisfying assignment.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Model {
    true_atoms: BTreeSet<Atom>,
    atom_count: u32,
}

impl Model {
    /// A model from the literals of an assignment.
    /// Each positive literal is read as a true atom, and everything else is false.
    pub fn from_literals(atom_count: u32, literals: impl IntoIterator<Item = IntLiteral>) -> Self {
        let true_atoms = literals
            .into_iter()
            .filter(|literal| literal.polarity())
            .filter_map(|literal| Atom::try_from(literal.atom()).ok())
            .collect();
        Model {
            true_atoms,
            atom_count,
        }
    }

    /// The value of an atom on the model.
    pub fn value_of(&self, atom: Atom) -> bool {
        self.true_atoms.contains(&atom)
    }

    /// An iterator over the atoms true on the model, in order.
    pub fn true_atoms(&self) -> impl Iterator<Item = Atom> + '_ {
        self.true_atoms.iter().copied()
    }

    /// The atom count of the instance the model was read from.
    pub fn atom_count(&self) -> u32 {
        self.atom_count
    }

    /// The model, restricted to the given atoms.
    pub fn restrict(&self, atoms: &[Atom]) -> Model {
        let true_atoms = atoms
            .iter()
            .filter(|atom| self.value_of(**atom))
            .copied()
            .collect();
        Model {
            true_atoms,
            atom_count: self.atom_count,
        }
    }

    /// The model as a (full) list of literals over atoms `1..=atom_count`.
    pub fn literals(&self) -> Vec<IntLiteral> {
        (1..=self.atom_count)
            .map(|index| match Atom::try_from(index) {
                Ok(atom) => IntLiteral::new(index, self.value_of(atom)),
                Err(_) => IntLiteral::new(index, false),
            })
            .collect()
    }
}

impl std::fmt::Display for Model {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut atoms = self.true_atoms.iter().peekable();
        while let Some(atom) = atoms.next() {
            write!(f, "{atom}")?;
            if atoms.peek().is_some() {
                write!(f, " ")?;
            }
        }
        Ok(())
    }
}
