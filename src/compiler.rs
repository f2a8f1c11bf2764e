/*!
A compiler, aka. a namespace paired with an oracle.

The compiler is the usual entry point to the library: atoms are allocated from the compiler, formulas are built over those atoms with the [builder](crate::builder), and the compiler [encodes](Compiler::encode) and [solves](Compiler::encode_and_solve) the formulas.

```rust
# use tseitin_cnf::builder::{neg, or, var, xor};
# use tseitin_cnf::compiler::Compiler;
let mut compiler = Compiler::default();
let a = compiler.fresh_atom().unwrap();
let b = compiler.fresh_atom().unwrap();

let model = compiler.encode_and_solve(&xor(var(a), var(b))).unwrap().unwrap();
assert_ne!(model.value_of(a), model.value_of(b));

let formula = or(var(a), neg(var(a)));
assert!(compiler.is_satisfiable(&neg(formula)).is_ok_and(|sat| !sat));
```

# Namespaces

Each compiler owns a namespace, and so independent compilers allocate independent atoms.
A [reset](Compiler::reset) begins a new generation of the namespace of the compiler, after which formulas built from earlier atoms should not be given to the compiler.

# Oracles

By default a compiler uses the [built-in oracle](crate::oracle::builtin), and any other oracle may be given with [with_oracle](Compiler::with_oracle).
*/

use crate::{
    builder,
    config::Config,
    dimacs,
    namespace::Namespace,
    oracle::{self, builtin::BuiltinOracle, Oracle},
    structures::{
        atom::Atom,
        cnf::Cnf,
        formula::Formula,
        literal::{CLiteral, Literal},
        model::Model,
    },
    transform::tseitin::{self, Encoding},
    types::err::{self},
};

/// A namespace of atoms, and an oracle to decide the satisfiability of encoded formulas.
#[derive(Clone, Debug)]
pub struct Compiler<O: Oracle = BuiltinOracle> {
    namespace: Namespace,
    oracle: O,
}

impl Default for Compiler<BuiltinOracle> {
    fn default() -> Self {
        Compiler::with_oracle(BuiltinOracle::default())
    }
}

impl Compiler<BuiltinOracle> {
    /// A compiler using the built-in oracle with the given configuration.
    pub fn from_config(config: Config) -> Self {
        Compiler::with_oracle(BuiltinOracle::from_config(config))
    }
}

impl<O: Oracle> Compiler<O> {
    pub fn with_oracle(oracle: O) -> Self {
        Compiler {
            namespace: Namespace::default(),
            oracle,
        }
    }

    /// A fresh atom.
    pub fn fresh_atom(&mut self) -> Result<Atom, err::NamespaceError> {
        self.namespace.fresh_atom()
    }

    /// A fresh atom, or the maximum atom if all atoms have been allocated.
    pub fn fresh_or_max_atom(&mut self) -> Atom {
        self.namespace.fresh_or_max_atom()
    }

    /// A vector of `count` fresh atoms.
    pub fn fresh_atoms(&mut self, count: usize) -> Result<Vec<Atom>, err::NamespaceError> {
        self.namespace.fresh_atoms(count)
    }

    pub fn namespace(&self) -> &Namespace {
        &self.namespace
    }

    pub fn oracle(&self) -> &O {
        &self.oracle
    }

    /// Begins a new generation of the namespace.
    pub fn reset(&mut self) {
        self.namespace.reset();
    }

    /// The [Tseitin encoding](crate::transform::tseitin) of a formula.
    pub fn encode(&mut self, formula: &Formula) -> Result<Encoding, err::ErrorKind> {
        tseitin::encode(&mut self.namespace, formula)
    }

    /// A model of the instance, if the instance is satisfiable.
    pub fn solve(&self, cnf: &Cnf) -> Result<Option<Model>, err::ErrorKind> {
        oracle::solve(&self.oracle, cnf)
    }

    /// A model of the encoding of a formula, if the formula is satisfiable.
    ///
    /// The model includes the values of the auxiliary atoms of the encoding.
    pub fn encode_and_solve(&mut self, formula: &Formula) -> Result<Option<Model>, err::ErrorKind> {
        let encoding = self.encode(formula)?;
        self.solve(&encoding.cnf)
    }

    /// Whether the formula is satisfiable.
    pub fn is_satisfiable(&mut self, formula: &Formula) -> Result<bool, err::ErrorKind> {
        Ok(self.encode_and_solve(formula)?.is_some())
    }

    /// The encoding of a formula in DIMACS form.
    pub fn dimacs(&mut self, formula: &Formula) -> Result<String, err::ErrorKind> {
        Ok(dimacs::render(&self.encode(formula)?.cnf))
    }

    /// The encoding of a formula, as a formula: a conjunction of disjunctions of literals.
    ///
    /// ```rust
    /// # use tseitin_cnf::builder::var;
    /// # use tseitin_cnf::compiler::Compiler;
    /// let mut compiler = Compiler::default();
    /// let p = compiler.fresh_atom().unwrap();
    ///
    /// assert_eq!(compiler.cnf_formula(&var(p)), Ok(var(p)));
    /// ```
    pub fn cnf_formula(&mut self, formula: &Formula) -> Result<Formula, err::ErrorKind> {
        let encoding = self.encode(formula)?;
        let clauses = encoding.cnf.clauses().cloned().collect::<Vec<_>>();
        builder::from_clauses(&clauses, |index| self.namespace.atom(index))
    }

    /// Up to `limit` models of a formula, distinct on the given atoms, and each restricted to the given atoms.
    ///
    /// After each model is found the assignment to the given atoms is blocked, and so the models returned are distinct when restricted to the given atoms.
    /// With no atoms given, at most one (empty) model is returned.
    ///
    /// ```rust
    /// # use tseitin_cnf::builder::{or, var};
    /// # use tseitin_cnf::compiler::Compiler;
    /// let mut compiler = Compiler::default();
    /// let p = compiler.fresh_atom().unwrap();
    /// let q = compiler.fresh_atom().unwrap();
    ///
    /// let models = compiler.all_models(&or(var(p), var(q)), &[p, q], usize::MAX).unwrap();
    /// assert_eq!(models.len(), 3);
    /// ```
    pub fn all_models(
        &mut self,
        formula: &Formula,
        over: &[Atom],
        limit: usize,
    ) -> Result<Vec<Model>, err::ErrorKind> {
        let Encoding { mut cnf, .. } = self.encode(formula)?;
        let mut models = Vec::default();

        while models.len() < limit {
            let Some(model) = self.solve(&cnf)? else {
                break;
            };

            let blocking_clause = over
                .iter()
                .map(|atom| CLiteral::new(atom.index(), !model.value_of(*atom)))
                .collect::<Vec<_>>();

            models.push(model.restrict(over));

            if !cnf.add_clause(blocking_clause)? {
                break;
            }
        }

        Ok(models)
    }
}
