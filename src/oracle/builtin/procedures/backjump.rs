//! Recovery from a conflict.
//!
//! # Overview
//!
//! A backjump is a 'jump' from some (higher) decision level to some previous (lower) decision level.
//! All decisions and all consequences of those decisions above the target level are undone, and the queue of literals to propagate is trimmed to the trail.
//!
//! # Methods
//!
//! # [backjump](Context::backjump) --- Backjump to a target level
//!
//! Performs a backjump to some level.
//! Passing a target level greater than the current level is safe --- nothing will happen.
//!
//! # [backtrack](Context::backtrack) --- Chronological backtracking
//!
//! Without clause learning the only recovery from a conflict is to try the other polarity of the most recent decision.
//! Each level records whether its decision is already the second polarity tried, and if so the level is dropped and the search continues with the level below.
//! If every level has been flipped the conflict holds at level zero, and the clauses are unsatisfiable.
//!
//! ```rust,ignore
//! if let Err(key) = self.propagate() {
//!     if !self.backtrack() {
//!         return SolveReport::Unsatisfiable;
//!     }
//! }
//! ```

use crate::{
    misc::log::targets::{self},
    oracle::builtin::{Context, Level},
    structures::literal::Literal,
};

impl Context {
    /// Backjumps to the given target level.
    ///
    /// For documentation, see [procedures::backjump](crate::oracle::builtin::procedures::backjump).
    pub fn backjump(&mut self, target: usize) {
        while self.levels.len() > target {
            if let Some(level) = self.levels.pop() {
                self.unwind_to(level.trail_start);
            }
        }
        self.q_head = self.q_head.min(self.trail.len());
    }

    /// Drops every value assigned from the given index of the trail.
    fn unwind_to(&mut self, trail_index: usize) {
        for literal in self.trail.drain(trail_index..) {
            self.valuation[literal.atom() as usize] = None;
        }
    }

    /// Flips the most recent decision which has not been flipped, returning false if there is no such decision.
    pub fn backtrack(&mut self) -> bool {
        while let Some(level) = self.levels.pop() {
            self.unwind_to(level.trail_start);

            if !level.flipped {
                let flip = level.decision.negate();
                log::trace!(target: targets::BACKJUMP, "Flipped {} to {flip} at level {}", level.decision, self.levels.len() + 1);

                self.q_head = self.trail.len();
                self.levels.push(Level {
                    trail_start: self.trail.len(),
                    decision: flip,
                    flipped: true,
                });
                self.assign(flip);
                return true;
            }
        }

        log::trace!(target: targets::BACKJUMP, "Conflict at level zero");
        self.q_head = self.q_head.min(self.trail.len());
        false
    }
}
