/*!
A namespace of atoms.

A namespace allocates atoms in strict, contiguous, order, beginning with the atom 1.
Each atom allocated is strictly greater than every atom allocated before it in the same *generation* of the namespace, and a [reset](Namespace::reset) begins a new generation with the counter back at 1.

A namespace is a value, and nothing is shared between namespaces.
So, independent encodings (e.g. in different threads, or different tests) use independent namespaces, and a reset of one namespace has no effect on any other.

```rust
# use tseitin_cnf::namespace::Namespace;
let mut namespace = Namespace::default();

let p = namespace.fresh_or_max_atom();
let q = namespace.fresh_or_max_atom();
assert!(p < q);
assert_eq!(namespace.high_water_mark(), 2);

namespace.reset();
assert_eq!(namespace.generation(), 1);
assert_eq!(namespace.fresh_or_max_atom(), p);
```

# Stale atoms

After a reset, atoms from an earlier generation should not be used.
Atoms are plain indices, and so an atom from an earlier generation is indistinguishable from an atom of the current generation with the same index.
Still, a stale atom above the high-water mark of the current generation is detected by [atom](Namespace::atom) and by the [encoding](crate::transform::tseitin).
*/

use crate::{
    structures::atom::{Atom, ATOM_MAX},
    types::err::{self},
};

/// A monotonic allocator of atoms.
#[derive(Clone, Debug, Default)]
pub struct Namespace {
    /// The most recently allocated atom (index), or zero if no atom has been allocated.
    high_water_mark: u32,

    /// A count of resets.
    generation: u32,
}

impl Namespace {
    /// A fresh atom, strictly greater than every atom allocated in the current generation.
    pub fn fresh_atom(&mut self) -> Result<Atom, err::NamespaceError> {
        if self.high_water_mark >= ATOM_MAX {
            return Err(err::NamespaceError::AtomsExhausted);
        }
        self.high_water_mark += 1;
        log::trace!("Fresh atom {}", self.high_water_mark);
        Atom::try_from(self.high_water_mark).map_err(|_| err::NamespaceError::AtomsExhausted)
    }

    /// A fresh atom, or the maximum atom if all atoms have been allocated.
    pub fn fresh_or_max_atom(&mut self) -> Atom {
        match self.fresh_atom() {
            Ok(atom) => atom,
            Err(_) => Atom::MAX,
        }
    }

    /// A vector of `count` fresh atoms, in order of allocation.
    pub fn fresh_atoms(&mut self, count: usize) -> Result<Vec<Atom>, err::NamespaceError> {
        (0..count).map(|_| self.fresh_atom()).collect()
    }

    /// The atom with the given index, if the atom has been allocated in the current generation.
    pub fn atom(&self, index: u32) -> Result<Atom, err::ErrorKind> {
        let atom = Atom::try_from(index)?;
        match index <= self.high_water_mark {
            true => Ok(atom),
            false => Err(err::ErrorKind::from(err::NamespaceError::UnknownAtom(index))),
        }
    }

    /// Whether the atom may have been allocated in the current generation.
    pub fn is_known(&self, atom: Atom) -> bool {
        atom.index() <= self.high_water_mark
    }

    /// The most recently allocated atom (index), or zero if no atom has been allocated in the current generation.
    pub fn high_water_mark(&self) -> u32 {
        self.high_water_mark
    }

    /// A count of the resets of the namespace.
    pub fn generation(&self) -> u32 {
        self.generation
    }

    /// Begins a new generation of the namespace, with atoms again allocated from 1.
    ///
    /// Formulas built from atoms of an earlier generation should not be used after a reset.
    pub fn reset(&mut self) {
        log::debug!(
            "Namespace reset after generation {} with {} atoms",
            self.generation,
            self.high_water_mark
        );
        self.high_water_mark = 0;
        self.generation += 1;
    }
}
