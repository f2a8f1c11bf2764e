//! Error types used in the library.
//!
//! - Formula and namespace errors are local and synchronous --- they follow from the way a formula was built, and retrying will not help.
//! - Oracle errors are raised by an [oracle](crate::oracle) while clauses are registered or during a solve.
//!   The [adapter](crate::oracle::solve) reads a contradiction as unsatisfiability, and never reads a timeout as anything other than a timeout.
//! - Parse errors name the (one-based) line of DIMACS input at which parsing failed.
//!
//! Names of the error enums --- for the most part --- overlap with the area of the library the error is raised from.
//  As such, throughout the library err::{self} is often used to prefix use of the types with `err::`.

/// The error type of the library, wrapping the error of each area.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum ErrorKind {
    Formula(FormulaError),
    Namespace(NamespaceError),
    Oracle(OracleError),
    Parse(ParseError),

    /// The oracle exceeded the time allowed for a solve.
    ///
    /// Distinct from unsatisfiability, as nothing is known about the formula.
    Timeout,
}

/// Malformed formula construction, aka. an invalid argument.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum FormulaError {
    /// A conjunction or disjunction was requested over no operands.
    EmptyConnective,

    /// An atom was requested with index zero, which names no atom.
    NullAtom,

    /// A literal whose atom exceeds the maximum atom.
    LiteralRange(i32),
}

impl From<FormulaError> for ErrorKind {
    fn from(e: FormulaError) -> Self {
        ErrorKind::Formula(e)
    }
}

/// Misuse of a [namespace](crate::namespace).
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum NamespaceError {
    /// The atom (index) has not been allocated in the current generation of the namespace.
    ///
    /// Typically, the atom was allocated before a reset, or by some other namespace.
    UnknownAtom(u32),

    /// There are no more fresh atoms which may be written as a DIMACS literal.
    AtomsExhausted,
}

impl From<NamespaceError> for ErrorKind {
    fn from(e: NamespaceError) -> Self {
        ErrorKind::Namespace(e)
    }
}

/// Errors raised by an oracle.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum OracleError {
    /// The clauses registered so far are trivially inconsistent.
    /// For example, the empty clause, or a unit clause which conflicts with an earlier unit clause.
    Contradiction,

    /// A zero was found inside a clause, where only nonzero literals are permitted.
    ZeroLiteral,
}

impl From<OracleError> for ErrorKind {
    fn from(e: OracleError) -> Self {
        ErrorKind::Oracle(e)
    }
}

/// Errors during parsing of DIMACS input.
/// Each variant carries the (one-based) number of the offending line.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum ParseError {
    /// Some issue with the problem specification (the `p cnf` line).
    ProblemSpecification(usize),

    /// Some unspecific problem at a specific line, e.g. a token which is not an integer.
    Line(usize),

    /// A literal whose atom exceeds the atom count declared by the problem specification.
    AtomBound(usize),

    /// The input could not be read.
    Read(usize),
}

impl From<ParseError> for ErrorKind {
    fn from(e: ParseError) -> Self {
        ErrorKind::Parse(e)
    }
}

impl std::fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Formula(e) => write!(f, "invalid formula: {e}"),
            Self::Namespace(e) => write!(f, "namespace misuse: {e}"),
            Self::Oracle(e) => write!(f, "oracle: {e}"),
            Self::Parse(e) => write!(f, "malformed DIMACS: {e}"),
            Self::Timeout => write!(f, "the oracle timed out"),
        }
    }
}

impl std::fmt::Display for FormulaError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::EmptyConnective => write!(f, "a conjunction or disjunction requires an operand"),
            Self::NullAtom => write!(f, "atom indices begin at 1"),
            Self::LiteralRange(literal) => write!(f, "literal {literal} is out of range"),
        }
    }
}

impl std::fmt::Display for NamespaceError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::UnknownAtom(index) => write!(f, "atom {index} is unknown to the namespace"),
            Self::AtomsExhausted => write!(f, "no fresh atoms remain"),
        }
    }
}

impl std::fmt::Display for OracleError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Contradiction => write!(f, "contradictory clause"),
            Self::ZeroLiteral => write!(f, "zero is not a literal"),
        }
    }
}

impl std::fmt::Display for ParseError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::ProblemSpecification(line) => write!(f, "line {line}: invalid problem line"),
            Self::Line(line) => write!(f, "line {line}: invalid clause"),
            Self::AtomBound(line) => {
                write!(f, "line {line}: atom exceeds the declared atom count")
            }
            Self::Read(line) => write!(f, "line {line}: failed to read"),
        }
    }
}

impl std::error::Error for ErrorKind {}
