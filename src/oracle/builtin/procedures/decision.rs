/*!
Methods for choosing the value of an atom.

# Overview

The core decision procedure is straightforward:
- Search through all atoms in the context for an atom which is not assigned a value, and assign either true or false.

By default the first atom without a value is chosen, though with probability [random_decision_bias](crate::config::Config::random_decision_bias) some atom without a value is chosen at random.

# Decisions as literals

Strictly a decision is to value some atom *a* with value *v*.
Still, it is convenient to represent such a decision as a literal with atom *a* and polarity *v*.
For example, a decision to value *p* with value *false* can be represented with the literal *-p*.

# Phase saving

If phase saving is enabled and a chosen atom was previously valued *v* the atom is again valued *v*.
Otherwise, the atom is valued true with probability [polarity_lean](crate::config::Config::polarity_lean).
*/

use rand::{seq::IteratorRandom, Rng};

use crate::{
    misc::log::targets::{self},
    oracle::builtin::{Context, Level},
    structures::literal::{CLiteral, Literal},
};

/// Possible results from choosing a truth value to assign an atom.
pub enum DecisionOk {
    /// Some truth value was assigned to some atom.
    Literal(CLiteral),

    /// All atoms had already been assigned truth values, so no decision could be made.
    Exhausted,
}

impl Context {
    /// An iterator over the atoms without a value.
    pub fn unvalued_atoms(&self) -> impl Iterator<Item = u32> + '_ {
        self.valuation
            .iter()
            .enumerate()
            .skip(1)
            .filter(|(_, value)| value.is_none())
            .map(|(atom, _)| atom as u32)
    }

    /// Chooses an atom without a value, if one exists.
    fn choose_atom(&mut self) -> Option<u32> {
        let bias = self.config.random_decision_bias.value;
        if bias > 0.0 && self.rng.gen_bool(bias) {
            let atoms = self.unvalued_atoms().collect::<Vec<_>>();
            atoms.into_iter().choose(&mut self.rng)
        } else {
            self.unvalued_atoms().next()
        }
    }

    /// Chooses a polarity for the given atom.
    fn choose_polarity(&mut self, atom: u32) -> bool {
        let saved = match self.config.phase_saving.value {
            true => self.previous_valuation[atom as usize],
            false => None,
        };
        match saved {
            Some(polarity) => polarity,
            None => self.rng.gen_bool(self.config.polarity_lean.value),
        }
    }

    /// Makes a decision, opening a fresh level, if some atom is without a value.
    ///
    /// For documentation see [procedures::decision](crate::oracle::builtin::procedures::decision).
    pub fn make_decision(&mut self) -> DecisionOk {
        let Some(atom) = self.choose_atom() else {
            return DecisionOk::Exhausted;
        };

        let decision = CLiteral::new(atom, self.choose_polarity(atom));
        log::trace!(target: targets::DECISION, "Decided {decision} at level {}", self.levels.len() + 1);

        self.counters.total_decisions += 1;
        self.levels.push(Level {
            trail_start: self.trail.len(),
            decision,
            flipped: false,
        });
        self.assign(decision);

        DecisionOk::Literal(decision)
    }
}
