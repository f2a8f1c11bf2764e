use tseitin_cnf::{
    builder::{and, and_all, iff, imp, neg, or, or_all, var},
    compiler::Compiler,
    structures::{atom::Atom, formula::Formula, model::Model},
};

fn conjunction(conditions: Vec<Formula>) -> Formula {
    match and_all(conditions) {
        Ok(formula) => formula,
        Err(e) => panic!("{e}"),
    }
}

fn disjunction(options: Vec<Formula>) -> Formula {
    match or_all(options) {
        Ok(formula) => formula,
        Err(e) => panic!("{e}"),
    }
}

/// Sudoku over a grid of side `box_size * box_size`, with digits `0..side`.
struct Sudoku {
    box_size: usize,
    cells: Vec<Atom>,
}

impl Sudoku {
    fn new(compiler: &mut Compiler, box_size: usize) -> Self {
        let side = box_size * box_size;
        let cells = compiler.fresh_atoms(side * side * side).unwrap();
        Sudoku { box_size, cells }
    }

    fn side(&self) -> usize {
        self.box_size * self.box_size
    }

    /// The atom of the given digit at the given row and column.
    fn at(&self, row: usize, column: usize, digit: usize) -> Atom {
        let side = self.side();
        self.cells[(row * side + column) * side + digit]
    }

    /// The (row, column) of each cell in each row, column, and box.
    fn units(&self) -> Vec<Vec<(usize, usize)>> {
        let side = self.side();
        let mut units = Vec::default();
        for i in 0..side {
            units.push((0..side).map(|j| (i, j)).collect());
            units.push((0..side).map(|j| (j, i)).collect());

            let (box_row, box_column) = (i / self.box_size, i % self.box_size);
            units.push(
                (0..side)
                    .map(|j| {
                        (
                            box_row * self.box_size + j / self.box_size,
                            box_column * self.box_size + j % self.box_size,
                        )
                    })
                    .collect(),
            );
        }
        units
    }

    fn formula(&self, givens: &[(usize, usize, usize)]) -> Formula {
        let side = self.side();
        let mut conditions = Vec::default();

        for (row, column, digit) in givens {
            conditions.push(var(self.at(*row, *column, *digit)));
        }

        // Exactly one digit in each cell.
        for row in 0..side {
            for column in 0..side {
                conditions.push(disjunction(
                    (0..side).map(|d| var(self.at(row, column, d))).collect(),
                ));
                for d1 in 0..side {
                    for d2 in (d1 + 1)..side {
                        conditions.push(neg(and(
                            var(self.at(row, column, d1)),
                            var(self.at(row, column, d2)),
                        )));
                    }
                }
            }
        }

        // Each digit exactly once in each unit.
        for unit in self.units() {
            for digit in 0..side {
                conditions.push(disjunction(
                    unit.iter()
                        .map(|(row, column)| var(self.at(*row, *column, digit)))
                        .collect(),
                ));
                for (index, (r1, c1)) in unit.iter().enumerate() {
                    for (r2, c2) in &unit[(index + 1)..] {
                        conditions.push(or(
                            neg(var(self.at(*r1, *c1, digit))),
                            neg(var(self.at(*r2, *c2, digit))),
                        ));
                    }
                }
            }
        }

        conjunction(conditions)
    }

    /// The grid of a model.
    fn grid(&self, model: &Model) -> Vec<Vec<usize>> {
        let side = self.side();
        (0..side)
            .map(|row| {
                (0..side)
                    .map(|column| {
                        let digits = (0..side)
                            .filter(|digit| model.value_of(self.at(row, column, *digit)))
                            .collect::<Vec<_>>();
                        assert_eq!(digits.len(), 1);
                        digits[0]
                    })
                    .collect()
            })
            .collect()
    }

    fn check(&self, grid: &[Vec<usize>], givens: &[(usize, usize, usize)]) {
        for (row, column, digit) in givens {
            assert_eq!(grid[*row][*column], *digit);
        }
        for unit in self.units() {
            let mut digits = unit
                .iter()
                .map(|(row, column)| grid[*row][*column])
                .collect::<Vec<_>>();
            digits.sort_unstable();
            assert_eq!(digits, (0..self.side()).collect::<Vec<_>>());
        }
    }
}

/// The river crossing of a farmer with a wolf, a goat, and a cabbage.
///
/// At each time each of the four is on the left or the right bank, and from one time to the next either nothing moves or the farmer crosses, possibly with one companion on the same bank.
/// The goat may not be left with the wolf, or with the cabbage, without the farmer.
struct RiverCrossing {
    max_time: usize,
    left: Vec<Atom>,
    right: Vec<Atom>,
}

const CABBAGE: usize = 0;
const GOAT: usize = 1;
const WOLF: usize = 2;
const FARMER: usize = 3;

impl RiverCrossing {
    fn new(compiler: &mut Compiler, max_time: usize) -> Self {
        let left = compiler.fresh_atoms(4 * (max_time + 1)).unwrap();
        let right = compiler.fresh_atoms(4 * (max_time + 1)).unwrap();
        RiverCrossing {
            max_time,
            left,
            right,
        }
    }

    fn left(&self, who: usize, time: usize) -> Formula {
        var(self.left[4 * time + who])
    }

    fn right(&self, who: usize, time: usize) -> Formula {
        var(self.right[4 * time + who])
    }

    fn stays(&self, who: usize, time: usize) -> Vec<Formula> {
        vec![
            iff(self.left(who, time), self.left(who, time + 1)),
            iff(self.right(who, time), self.right(who, time + 1)),
        ]
    }

    fn crosses(&self, who: usize, time: usize) -> Vec<Formula> {
        vec![
            iff(self.left(who, time), self.right(who, time + 1)),
            iff(self.right(who, time), self.left(who, time + 1)),
        ]
    }

    fn formula(&self) -> Formula {
        let mut conditions = Vec::default();

        for who in 0..4 {
            conditions.push(self.left(who, 0));
            conditions.push(self.right(who, self.max_time));
        }

        for time in 0..=self.max_time {
            for who in 0..4 {
                conditions.push(neg(and(self.left(who, time), self.right(who, time))));
                conditions.push(or(self.left(who, time), self.right(who, time)));
            }

            for bank in [Self::left, Self::right] {
                for other in [CABBAGE, WOLF] {
                    conditions.push(imp(
                        and(bank(self, GOAT, time), bank(self, other, time)),
                        bank(self, FARMER, time),
                    ));
                }
            }
        }

        for time in 0..self.max_time {
            let mut steps = Vec::default();

            steps.push(conjunction(
                (0..4).flat_map(|who| self.stays(who, time)).collect(),
            ));

            for companion in 0..4 {
                let mut step = vec![
                    iff(self.left(companion, time), self.left(FARMER, time)),
                    iff(self.right(companion, time), self.right(FARMER, time)),
                ];
                step.extend(self.crosses(companion, time));
                step.extend(self.crosses(FARMER, time));
                for other in 0..4 {
                    if other != companion && other != FARMER {
                        step.extend(self.stays(other, time));
                    }
                }
                steps.push(conjunction(step));
            }

            conditions.push(disjunction(steps));
        }

        conjunction(conditions)
    }

    /// Whether each is on the left bank, at each time.
    fn positions(&self, model: &Model) -> Vec<[bool; 4]> {
        (0..=self.max_time)
            .map(|time| {
                let mut banks = [false; 4];
                for (who, bank) in banks.iter_mut().enumerate() {
                    *bank = model.value_of(self.left[4 * time + who]);
                    assert_ne!(*bank, model.value_of(self.right[4 * time + who]));
                }
                banks
            })
            .collect()
    }
}

mod sudoku {
    use super::*;

    #[test]
    fn four_by_four_unique() {
        let mut compiler = Compiler::default();
        let sudoku = Sudoku::new(&mut compiler, 2);

        // 0 . | . .
        // . . | 2 .
        // ----+----
        // . 3 | . .
        // . . | . 1
        let givens = [(0, 0, 0), (1, 2, 2), (2, 1, 3), (3, 3, 1)];
        let formula = sudoku.formula(&givens);

        let models = compiler
            .all_models(&formula, &sudoku.cells, 2)
            .unwrap();
        assert_eq!(models.len(), 1);

        let grid = sudoku.grid(&models[0]);
        sudoku.check(&grid, &givens);
    }

    #[test]
    fn four_by_four_conflict() {
        let mut compiler = Compiler::default();
        let sudoku = Sudoku::new(&mut compiler, 2);

        let givens = [(0, 0, 0), (3, 0, 0)];
        assert_eq!(compiler.is_satisfiable(&sudoku.formula(&givens)), Ok(false));
    }

    #[test]
    fn nine_by_nine() {
        let mut compiler = Compiler::default();
        let sudoku = Sudoku::new(&mut compiler, 3);

        let puzzle = [
            "6...175..",
            ".812...7.",
            ".....5...",
            ".294....1",
            ".54.2..3.",
            "..6.78.54",
            ".....93.7",
            "..38..4..",
            "..5....9.",
        ];

        let givens = puzzle
            .iter()
            .enumerate()
            .flat_map(|(row, line)| {
                line.chars().enumerate().filter_map(move |(column, c)| {
                    c.to_digit(10).map(|d| (row, column, d as usize - 1))
                })
            })
            .collect::<Vec<_>>();

        let model = compiler
            .encode_and_solve(&sudoku.formula(&givens))
            .unwrap()
            .unwrap();

        let grid = sudoku.grid(&model);
        sudoku.check(&grid, &givens);
    }
}

mod river_crossing {
    use super::*;

    #[test]
    fn seven_crossings() {
        let mut compiler = Compiler::default();
        let crossing = RiverCrossing::new(&mut compiler, 7);
        let formula = crossing.formula();

        let model = compiler.encode_and_solve(&formula).unwrap().unwrap();
        assert!(formula.evaluate(&model));

        let positions = crossing.positions(&model);
        assert_eq!(positions[0], [true; 4]);
        assert_eq!(positions[7], [false; 4]);

        for banks in &positions {
            let goat_unattended = banks[GOAT] != banks[FARMER];
            assert!(!(goat_unattended && banks[GOAT] == banks[WOLF]));
            assert!(!(goat_unattended && banks[GOAT] == banks[CABBAGE]));
        }

        for pair in positions.windows(2) {
            let moved = (0..4).filter(|who| pair[0][*who] != pair[1][*who]).count();
            assert!(moved <= 2);
            if moved > 0 {
                assert_ne!(pair[0][FARMER], pair[1][FARMER]);
            }
        }
    }

    #[test]
    fn too_few_crossings() {
        let mut compiler = Compiler::default();
        let crossing = RiverCrossing::new(&mut compiler, 6);
        assert_eq!(compiler.is_satisfiable(&crossing.formula()), Ok(false));
    }
}
