use tseitin_cnf::{
    builder::{and, from_clauses, neg},
    compiler::Compiler,
    dimacs,
    structures::{clause::CClause, formula::Formula},
    types::err::ErrorKind,
};

/// A counter over the states 0, 1, 2 of two bits, with the low bit 1 and the high bit 2, and 3 and 4 the bits of the next state.
const INITIAL: &str = "
c the counter begins at 0
p cnf 2 2
-1 0
-2 0
";

const TRANSITION: &str = "
c low' <-> (!low & !high)
p cnf 4 6
-3 -1 0
-3 -2 0
3 1 2 0
c high' <-> (low & !high)
-4 1 0
-4 -2 0
4 -1 2 0
";

/// The counter is never 3.
const NEVER_THREE: &str = "p cnf 2 1\n-1 -2 0\n";

/// The counter is never 2.
const NEVER_TWO: &str = "p cnf 2 1\n1 -2 0\n";

fn clauses(text: &str) -> Vec<CClause> {
    match dimacs::parse(text) {
        Ok(cnf) => cnf.clauses().cloned().collect(),
        Err(e) => panic!("{e}"),
    }
}

/// A compiler with the two bits of a state and of the next state allocated.
fn setup() -> Compiler {
    let mut compiler = Compiler::default();
    compiler.fresh_atoms(4).unwrap();
    compiler
}

/// The clauses over the bits of the current state.
fn current(compiler: &Compiler, text: &str) -> Result<Formula, ErrorKind> {
    from_clauses(&clauses(text), |index| compiler.namespace().atom(index))
}

/// The clauses read over the bits of the next state.
fn primed(compiler: &Compiler, text: &str) -> Result<Formula, ErrorKind> {
    from_clauses(&clauses(text), |index| compiler.namespace().atom(index + 2))
}

mod inductive {
    use super::*;

    #[test]
    fn initial_states_safe() {
        let mut compiler = setup();
        let formula = and(
            current(&compiler, INITIAL).unwrap(),
            neg(current(&compiler, NEVER_THREE).unwrap()),
        );
        assert_eq!(compiler.is_satisfiable(&formula), Ok(false));
    }

    #[test]
    fn transitions_safe() {
        let mut compiler = setup();
        let formula = and(
            current(&compiler, TRANSITION).unwrap(),
            neg(primed(&compiler, NEVER_THREE).unwrap()),
        );
        assert_eq!(compiler.is_satisfiable(&formula), Ok(false));
    }

    #[test]
    fn property_inductive() {
        let mut compiler = setup();
        let formula = and(
            and(
                current(&compiler, NEVER_THREE).unwrap(),
                current(&compiler, TRANSITION).unwrap(),
            ),
            neg(primed(&compiler, NEVER_THREE).unwrap()),
        );
        assert_eq!(compiler.is_satisfiable(&formula), Ok(false));
    }

    #[test]
    fn property_not_inductive() {
        let mut compiler = setup();
        let atoms = (1..=4)
            .map(|index| compiler.namespace().atom(index).unwrap())
            .collect::<Vec<_>>();

        let initial = and(
            current(&compiler, INITIAL).unwrap(),
            neg(current(&compiler, NEVER_TWO).unwrap()),
        );
        assert_eq!(compiler.is_satisfiable(&initial), Ok(false));

        let step = and(
            and(
                current(&compiler, NEVER_TWO).unwrap(),
                current(&compiler, TRANSITION).unwrap(),
            ),
            neg(primed(&compiler, NEVER_TWO).unwrap()),
        );
        let model = compiler.encode_and_solve(&step).unwrap().unwrap();

        // The counter steps from 1 to 2.
        let state = atoms
            .iter()
            .map(|atom| model.value_of(*atom))
            .collect::<Vec<_>>();
        assert_eq!(state, vec![true, false, false, true]);
    }

    #[test]
    fn unallocated_primes() {
        let mut compiler = Compiler::default();
        compiler.fresh_atoms(2).unwrap();
        assert!(primed(&compiler, NEVER_TWO).is_err());
    }
}
