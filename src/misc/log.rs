/*!
Miscelanous items related to [logging](log).

Calls to the log macro are made throughout the library, and are directed to a handful of targets.

Note, no log implementation is provided by the library.
The `tseitin_cli` binary installs one when built with the `log` feature.
*/

/// Targets to be used within a [log]! macro.
pub mod targets {
    /// Logs related to the [Tseitin encoding](crate::transform::tseitin)
    pub const TSEITIN: &str = "tseitin";

    /// Logs related to [DIMACS](crate::dimacs) rendering and parsing
    pub const DIMACS: &str = "dimacs";

    /// Logs related to the [oracle adapter](crate::oracle)
    pub const ORACLE: &str = "oracle";

    /// Logs related to [BCP](crate::oracle::builtin::procedures::bcp)
    pub const PROPAGATION: &str = "propagation";

    /// Logs related to [decisions](crate::oracle::builtin::procedures::decision)
    pub const DECISION: &str = "decision";

    /// Logs related to [backjumping](crate::oracle::builtin::procedures::backjump)
    pub const BACKJUMP: &str = "backjump";
}
