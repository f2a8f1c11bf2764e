use tseitin_cnf::{
    builder::{iff, imp, neg, or, var, xor},
    compiler::Compiler,
    dimacs,
    structures::cnf::Cnf,
    types::err::{ErrorKind, ParseError},
};

mod round_trip {
    use super::*;

    #[test]
    fn empty_instance() {
        let cnf = Cnf::default();
        let rendered = dimacs::render(&cnf);

        assert!(rendered.lines().any(|line| line == "p cnf 0 0"));
        assert_eq!(dimacs::parse(&rendered), Ok(cnf));
    }

    #[test]
    fn unused_atoms_kept() {
        let mut cnf = Cnf::new(10);
        assert!(cnf.add_clause(vec![1, -2]).is_ok());

        let parsed = dimacs::parse(&dimacs::render(&cnf)).unwrap();
        assert_eq!(parsed.atom_count(), 10);
        assert_eq!(parsed, cnf);
    }

    #[test]
    fn encoded_formula() {
        let mut compiler = Compiler::default();
        let [p, q, r] = *compiler.fresh_atoms(3).unwrap().as_slice() else {
            panic!("Insufficient atoms");
        };

        let formula = iff(imp(var(p), or(var(q), neg(var(r)))), xor(var(r), var(p)));
        let encoding = compiler.encode(&formula).unwrap();

        let parsed = dimacs::parse(&dimacs::render(&encoding.cnf)).unwrap();
        assert_eq!(parsed, encoding.cnf);
        assert_eq!(compiler.solve(&parsed), compiler.solve(&encoding.cnf));
    }

    #[test]
    fn reader() {
        let text = b"c from a reader\np cnf 2 2\n1 2 0\n-1 0\n";
        let cnf = dimacs::read_dimacs(&text[..]).unwrap();

        assert_eq!(cnf.clause_count(), 2);
        assert!(cnf.mentions(-1));
    }
}

mod errors {
    use super::*;

    #[test]
    fn bad_literal() {
        assert_eq!(
            dimacs::parse("p cnf 3 2\n1 2 0\n1 two 0\n"),
            Err(ErrorKind::Parse(ParseError::Line(3)))
        );
    }

    #[test]
    fn bad_problem_line() {
        assert_eq!(
            dimacs::parse("c ok\np cnf 3\n1 0\n"),
            Err(ErrorKind::Parse(ParseError::ProblemSpecification(2)))
        );
    }

    #[test]
    fn atom_above_bound() {
        assert_eq!(
            dimacs::parse("p cnf 3 1\n1 4 0\n"),
            Err(ErrorKind::Parse(ParseError::AtomBound(2)))
        );
    }
}
