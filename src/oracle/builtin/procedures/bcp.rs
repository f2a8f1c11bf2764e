/*!
Boolean constraint propagation, by two watched literals.

# Overview

Propagates an atom being assigned some value, given as a literal.

Each stored clause watches its first two literals, and while a clause is not satisfied on the current valuation at least one watched literal is without a value, unless the clause is unit or false.
So, when a literal is assigned, the only clauses which may have become unit (or false) are those watching the negation of the literal, and only those clauses are examined.

For each clause watching the (now false) negation:
- If the other watched literal is true, the clause is satisfied, and nothing changes.
- If some unwatched literal is not false, the watch is moved to that literal.
- Otherwise, if the other watched literal has no value the clause is unit, and the other watched literal is assigned.
- Otherwise, the clause is false on the valuation, and propagation stops with a conflict.

Watches are not updated on a backjump, as unassigning atoms never falsifies a watched literal.

# Example

```rust,ignore
match self.propagate() {
    Err(key) => {
        // Conflict, so backtrack.
    }
    Ok(()) => {
        // No conflict, so make a decision.
    }
}
```
*/

use crate::{
    misc::log::targets::{self},
    oracle::builtin::{watch_index, ClauseKey, Context},
    structures::{
        clause::Clause,
        literal::{CLiteral, Literal},
    },
};

impl Context {
    /// Propagates the assignment of a literal, returning the key of a conflicting clause if a conflict is found.
    ///
    /// For documentation see [procedures::bcp](crate::oracle::builtin::procedures::bcp).
    pub fn bcp(&mut self, literal: CLiteral) -> Result<(), ClauseKey> {
        let false_literal = literal.negate();
        let list_index = watch_index(false_literal);

        // The watch list is taken from the context, as watches are moved to other lists during the loop.
        let mut watch_list = std::mem::take(&mut self.watches[list_index]);

        let mut index = 0;
        let mut conflict = None;

        'watch_loop: while index < watch_list.len() {
            let key = watch_list[index];

            let Some(clause) = self.clauses.get_mut(key) else {
                watch_list.swap_remove(index);
                continue 'watch_loop;
            };

            // Keep the false watch at index 1.
            if clause[0] == false_literal {
                clause.swap(0, 1);
            }

            let other = clause[0];
            let other_value = self
                .valuation
                .get(other.atom() as usize)
                .copied()
                .flatten()
                .map(|value| value == other.polarity());

            if other_value == Some(true) {
                index += 1;
                continue 'watch_loop;
            }

            let replacement = clause.iter().skip(2).position(|candidate| {
                self.valuation[candidate.atom() as usize] != Some(!candidate.polarity())
            });

            if let Some(offset) = replacement {
                clause.swap(1, 2 + offset);
                let fresh_watch = clause[1];
                self.watches[watch_index(fresh_watch)].push(key);
                watch_list.swap_remove(index);
                continue 'watch_loop;
            }

            match other_value {
                None => {
                    log::trace!(target: targets::PROPAGATION, "{other} from {} and {literal}", clause.as_dimacs(false));
                    self.assign(other);
                    index += 1;
                }

                Some(_) => {
                    log::trace!(target: targets::PROPAGATION, "Conflict on {} from {literal}", clause.as_dimacs(false));
                    conflict = Some(key);
                    break 'watch_loop;
                }
            }
        }

        self.watches[list_index] = watch_list;

        match conflict {
            Some(key) => Err(key),
            None => Ok(()),
        }
    }

    /// Propagates literals on the trail until every literal on the trail has been propagated, or a conflict is found.
    pub fn propagate(&mut self) -> Result<(), ClauseKey> {
        while let Some(literal) = self.trail.get(self.q_head).copied() {
            self.bcp(literal)?;
            self.q_head += 1;
        }
        Ok(())
    }
}
