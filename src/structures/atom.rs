/*!
Atoms (aka. 'variables').

Broadly, atoms are things with a name to which assigning a (boolean) value (true or false) is of interest.

Each atom is a strictly positive integer, and atoms are allocated by a [namespace](crate::namespace) in strict, contiguous, order: 1, 2, 3, ...
As a consequence, the atom with index *i* may be written as the DIMACS literal *i* (or *-i*), and a valuation of the atoms of a namespace may be stored in a vector.

```rust
# use tseitin_cnf::structures::atom::Atom;
let atom = Atom::try_from(7).unwrap();
assert_eq!(atom.index(), 7);
assert_eq!(atom.to_string(), "x7");

assert!(Atom::try_from(0).is_err());
```

# Generations

An atom is only meaningful relative to the generation of the namespace it was allocated in.
Atoms are compared by index alone, and so two atoms from different generations (or different namespaces) may compare equal while naming unrelated things.
Keeping atoms of different generations apart is an obligation of the caller, though where possible misuse is [detected](crate::types::err::NamespaceError::UnknownAtom).

# Notes
- In the SAT literature these are often called 'variables' while in the logic literature these are often called 'atoms'.
*/

use std::num::NonZeroU32;

use crate::types::err::{self};

/// The largest index of an atom, as atoms must be expressible as (signed) DIMACS literals.
pub const ATOM_MAX: u32 = i32::MAX.unsigned_abs();

/// An atom, aka. a 'variable'.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Atom(NonZeroU32);

impl Atom {
    /// The maximum atom.
    pub const MAX: Atom = match NonZeroU32::new(ATOM_MAX) {
        Some(index) => Atom(index),
        None => panic!("the maximum atom is nonzero"),
    };

    /// The (strictly positive) index of the atom.
    pub fn index(&self) -> u32 {
        self.0.get()
    }
}

impl TryFrom<u32> for Atom {
    type Error = err::FormulaError;

    fn try_from(index: u32) -> Result<Self, Self::Error> {
        match NonZeroU32::new(index) {
            Some(index) => Ok(Atom(index)),
            None => Err(err::FormulaError::NullAtom),
        }
    }
}

impl std::fmt::Display for Atom {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "x{}", self.0)
    }
}
