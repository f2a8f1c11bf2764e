/*!
Reading and writing CNF instances in DIMACS form.

# The format

A DIMACS file is read line by line:
- Lines beginning with `c` are comments.
- A line beginning with `p` is the problem specification `p cnf <atoms> <clauses>`, which declares the atom count of the instance (and the number of clauses, though this is only used to warn of a mismatch).
- A line beginning with `%` ends the formula, and anything after is ignored (a convention of the SATLIB benchmarks).
- Any other line whose final token is `0` is a clause, made of the tokens before the `0`.
- Any other line is ignored.

So, in particular, a clause may not be split over multiple lines, and the clause of a line is ended by the end of the line.

```rust
# use tseitin_cnf::dimacs;
let text = "
c A small example
p cnf 3 2
 1 -2 0
-1  3 0
";

let cnf = dimacs::parse(text).unwrap();
assert_eq!(cnf.atom_count(), 3);
assert_eq!(cnf.clause_count(), 2);

assert_eq!(dimacs::parse(&dimacs::render(&cnf)), Ok(cnf));
```

If no problem specification is found, the atom count of the instance is the greatest atom of some clause.

# Errors

Each [ParseError](err::ParseError) carries the (one-based) number of the line the error was found on:
- A malformed problem specification, or a second problem specification, is a [ProblemSpecification](err::ParseError::ProblemSpecification) error.
- A token of a clause line which is not a (nonzero) integer literal is a [Line](err::ParseError::Line) error.
- A literal whose atom exceeds the declared atom count is an [AtomBound](err::ParseError::AtomBound) error.
- A failure to read from the reader is a [Read](err::ParseError::Read) error.

```rust
# use tseitin_cnf::dimacs;
# use tseitin_cnf::types::err::{ErrorKind, ParseError};
assert_eq!(
    dimacs::parse("p cnf 2 1\n1 a 0\n"),
    Err(ErrorKind::Parse(ParseError::Line(2)))
);
assert_eq!(
    dimacs::parse("c\np cnf 2 1\n\n1 -3 0\n"),
    Err(ErrorKind::Parse(ParseError::AtomBound(4)))
);
```
*/

use std::io::BufRead;

use crate::{
    misc::log::targets::{self},
    structures::{
        atom::ATOM_MAX,
        clause::{CClause, Clause},
        cnf::Cnf,
        literal::{CLiteral, Literal},
    },
    types::err::{self},
};

/// The comment line written at the head of a rendered instance.
const HEADER: &str = "c tseitin_cnf";

/// The instance in DIMACS form, with one clause per line.
pub fn render(cnf: &Cnf) -> String {
    let mut the_string = String::with_capacity(16 * (cnf.clause_count() + 2));

    the_string.push_str(HEADER);
    the_string.push('\n');
    the_string.push_str(&format!(
        "p cnf {} {}\n",
        cnf.atom_count(),
        cnf.clause_count()
    ));

    for clause in cnf.clauses() {
        the_string.push_str(&clause.as_dimacs(true));
        the_string.push('\n');
    }

    log::trace!(target: targets::DIMACS, "Rendered {} clauses", cnf.clause_count());
    the_string
}

/// Parses an instance from DIMACS text.
pub fn parse(text: &str) -> Result<Cnf, err::ErrorKind> {
    read_dimacs(text.as_bytes())
}

/// Reads an instance in DIMACS form from a reader.
///
/// ```rust,ignore
/// let cnf = dimacs::read_dimacs(BufReader::new(&file))?;
/// ```
pub fn read_dimacs(mut reader: impl BufRead) -> Result<Cnf, err::ErrorKind> {
    let mut buffer = String::with_capacity(1024);
    let mut cnf = Cnf::default();

    let mut line_counter = 0;
    let mut clause_counter = 0;

    // The atom and clause counts of the problem specification, if one has been read.
    let mut declared: Option<(u32, usize)> = None;

    'line_loop: loop {
        buffer.clear();
        match reader.read_line(&mut buffer) {
            Ok(0) => break,
            Ok(_) => line_counter += 1,
            Err(_) => return Err(err::ErrorKind::from(err::ParseError::Read(line_counter + 1))),
        }

        match buffer.trim_start().chars().next() {
            Some('c') => continue 'line_loop,

            Some('%') => break 'line_loop,

            Some('p') => {
                if declared.is_some() {
                    log::warn!(target: targets::DIMACS, "Second problem specification at line {line_counter}");
                    return Err(err::ErrorKind::from(err::ParseError::ProblemSpecification(
                        line_counter,
                    )));
                }

                let (atom_count, clause_count) = problem_specification(&buffer, line_counter)?;

                // Clauses read before the specification must respect the bound.
                if cnf.atom_count() > atom_count {
                    return Err(err::ErrorKind::from(err::ParseError::AtomBound(line_counter)));
                }

                cnf.declare_atom_count(atom_count);
                declared = Some((atom_count, clause_count));
            }

            _ => {
                let Some(clause) = clause_line(&buffer, line_counter)? else {
                    continue 'line_loop;
                };

                if let Some((atom_count, _)) = declared {
                    if clause.atoms().any(|atom| atom > atom_count) {
                        return Err(err::ErrorKind::from(err::ParseError::AtomBound(
                            line_counter,
                        )));
                    }
                }

                cnf.add_clause(clause).map_err(|_| {
                    err::ErrorKind::from(err::ParseError::Line(line_counter))
                })?;
                clause_counter += 1;
            }
        }
    }

    if let Some((_, clause_count)) = declared {
        if clause_count != clause_counter {
            log::warn!(target: targets::DIMACS,
                "Expected {clause_count} clauses, read {clause_counter}"
            );
        }
    }

    log::info!(target: targets::DIMACS,
        "Read {clause_counter} clauses ({} distinct) over {} atoms from {line_counter} lines",
        cnf.clause_count(),
        cnf.atom_count()
    );

    Ok(cnf)
}

/// The atom and clause counts of a problem specification `p cnf <atoms> <clauses>`.
fn problem_specification(line: &str, line_number: usize) -> Result<(u32, usize), err::ErrorKind> {
    let problem_error = || err::ErrorKind::from(err::ParseError::ProblemSpecification(line_number));

    let mut problem_details = line.split_whitespace();

    match (problem_details.next(), problem_details.next()) {
        (Some("p"), Some("cnf")) => {}
        _ => return Err(problem_error()),
    }

    let atom_count = match problem_details.next().map(str::parse::<u32>) {
        Some(Ok(count)) if count <= ATOM_MAX => count,
        _ => return Err(problem_error()),
    };

    let clause_count = match problem_details.next().map(str::parse::<usize>) {
        Some(Ok(count)) => count,
        _ => return Err(problem_error()),
    };

    match problem_details.next() {
        None => Ok((atom_count, clause_count)),
        Some(_) => Err(problem_error()),
    }
}

/// The clause of a line, if the line is a clause line.
///
/// A clause line ends with the token `0`, and every other token is a nonzero literal.
fn clause_line(line: &str, line_number: usize) -> Result<Option<CClause>, err::ErrorKind> {
    let tokens = line.split_whitespace().collect::<Vec<_>>();

    let Some((&"0", literals)) = tokens.split_last() else {
        return Ok(None);
    };

    let mut clause: CClause = Vec::with_capacity(literals.len());
    for token in literals {
        match token.parse::<CLiteral>() {
            Ok(literal) if literal != 0 && literal.atom() <= ATOM_MAX => clause.push(literal),
            _ => return Err(err::ErrorKind::from(err::ParseError::Line(line_number))),
        }
    }

    Ok(Some(clause))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn render_layout() {
        let mut cnf = Cnf::new(4);
        assert!(cnf.add_clause(vec![2, -1]).is_ok());
        assert!(cnf.add_clause(vec![3]).is_ok());

        let rendered = render(&cnf);
        let mut lines = rendered.lines();
        assert_eq!(lines.next(), Some(HEADER));
        assert_eq!(lines.next(), Some("p cnf 4 2"));
        assert_eq!(lines.next(), Some("-1 2 0"));
        assert_eq!(lines.next(), Some("3 0"));
        assert_eq!(lines.next(), None);
    }

    #[test]
    fn non_clause_lines_ignored() {
        let text = "
c comment
p cnf 3 2

this is not a clause
1 2 0
   -3    0
";
        let cnf = parse(text).unwrap();
        assert_eq!(cnf.clause_count(), 2);
        assert!(cnf.mentions(-3));
    }

    #[test]
    fn percent_ends_formula() {
        let text = "p cnf 2 1\n1 2 0\n%\n0\n";
        let cnf = parse(text).unwrap();
        assert_eq!(cnf.clause_count(), 1);
    }

    #[test]
    fn empty_clause() {
        let cnf = parse("p cnf 0 1\n0\n").unwrap();
        assert_eq!(cnf.clause_count(), 1);
        assert_eq!(cnf.literal_count(), 0);
    }

    #[test]
    fn no_problem_specification() {
        let cnf = parse("1 -7 0\n").unwrap();
        assert_eq!(cnf.atom_count(), 7);
    }

    #[test]
    fn problem_errors() {
        assert_eq!(
            parse("p cnf x 1\n"),
            Err(err::ErrorKind::Parse(err::ParseError::ProblemSpecification(1)))
        );
        assert_eq!(
            parse("p dnf 1 1\n"),
            Err(err::ErrorKind::Parse(err::ParseError::ProblemSpecification(1)))
        );
        assert_eq!(
            parse("p cnf 1 1\n1 0\np cnf 1 1\n"),
            Err(err::ErrorKind::Parse(err::ParseError::ProblemSpecification(3)))
        );
    }

    #[test]
    fn zero_inside_clause() {
        assert_eq!(
            parse("1 0 2 0\n"),
            Err(err::ErrorKind::Parse(err::ParseError::Line(1)))
        );
    }

    #[test]
    fn late_problem_specification() {
        assert_eq!(
            parse("1 5 0\np cnf 3 1\n"),
            Err(err::ErrorKind::Parse(err::ParseError::AtomBound(2)))
        );
    }
}
