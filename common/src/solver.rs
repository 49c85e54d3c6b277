use std::{thread, time::Duration};

use crate::{IllegalMove, Tower};

/// Frame–Stewart split table for the four-peg puzzle.
///
/// For every disk count `n` up to the build target, the table holds the
/// minimal four-peg move count together with the split that achieves it: the
/// number of disks left for the single three-peg transfer after the rest of
/// the stack has been parked on a spare peg.
#[derive(Debug, Clone)]
pub struct SplitTable {
    // (move count, split) at index n - 1
    table: Vec<(u64, u32)>,
}

impl SplitTable {
    /// Build the table bottom-up for all disk counts up to `disks`.
    ///
    /// A single disk moves directly. For `n > 1` the candidate cost of a
    /// split `i` is `2 * cost(n - i) + 2^i - 1`, the two four-peg transfers
    /// of the parked stack plus the closed-form three-peg cost of the
    /// remaining `i` disks. Candidates are scanned with `i` increasing and
    /// only a strictly smaller cost replaces the current best, so cost ties
    /// resolve to the smallest split. That tie-break is load-bearing: it
    /// keeps the generated move sequence identical across runs.
    pub fn up_to(disks: u32) -> Self {
        let mut table = Vec::with_capacity(disks.max(1) as usize);
        table.push((1, 1));

        for n in 2..=disks {
            let mut best: Option<(u64, u32)> = None;
            for i in 1..n {
                let cost = 2 * table[(n - i) as usize - 1].0 + ((1u64 << i) - 1);
                if best.is_none_or(|(best_cost, _)| cost < best_cost) {
                    best = Some((cost, i));
                }
            }
            table.push(best.expect("every n >= 2 has a candidate split"));
        }

        Self { table }
    }

    /// Minimal four-peg move count for `n` disks.
    pub fn cost(&self, n: u32) -> u64 {
        self.table[n as usize - 1].0
    }

    /// The split chosen for `n` disks: how many disks the three-peg transfer
    /// in the middle of the four-peg recursion carries.
    pub fn split(&self, n: u32) -> u32 {
        self.table[n as usize - 1].1
    }
}

/// Recursive solver that migrates a tower's starting stack to its last peg.
///
/// The solver owns the split table and applies moves directly to the shared
/// [`Tower`], so after a successful run the tower's own move log holds the
/// full solution. A correct solver never produces an illegal move; an `Err`
/// out of [`Solver::solve`] means the split computation or a role
/// permutation in the recursion is broken.
#[derive(Debug, Clone)]
pub struct Solver {
    splits: SplitTable,
    animate: Option<Duration>,
}

impl Solver {
    /// Create a solver for towers holding up to `disks` disks.
    pub fn new(disks: u32) -> Self {
        Self {
            splits: SplitTable::up_to(disks),
            animate: None,
        }
    }

    /// Print the board and pause for `delay` before every move.
    ///
    /// Purely cosmetic; the move order and count do not change.
    pub fn animated(mut self, delay: Duration) -> Self {
        self.animate = Some(delay);
        self
    }

    /// Number of moves a solve will take for `disks` disks on `peg_count`
    /// pegs.
    pub fn predicted_moves(&self, peg_count: usize, disks: u32) -> u64 {
        if disks == 0 {
            return 0;
        }
        match peg_count {
            3 => (1u64 << disks) - 1,
            4 => self.splits.cost(disks),
            pegs => panic!("no solver for {pegs} pegs, only 3 and 4 are supported"),
        }
    }

    /// Move every disk from the first peg to the last one.
    ///
    /// Expects a tower in the standard start configuration with no more
    /// disks than this solver was built for. Panics on peg counts other
    /// than three or four; the model supports any peg count, the solver
    /// does not.
    pub fn solve(&self, tower: &mut Tower) -> Result<(), IllegalMove> {
        let n = tower.disk_count() as u32;
        if n == 0 {
            return Ok(());
        }

        log::debug!("solving {n} disks on {} pegs", tower.peg_count());
        match tower.peg_count() {
            3 => self.solve_three(tower, n, 0, 1, 2)?,
            4 => self.solve_four(tower, n, 0, 1, 2, 3)?,
            pegs => panic!("no solver for {pegs} pegs, only 3 and 4 are supported"),
        }
        if self.animate.is_some() {
            println!("{tower}");
        }

        Ok(())
    }

    /// Four-peg recursion: park the top of the stack on `spare1` with all
    /// four pegs in play, carry the remaining `split(n)` disks from `src` to
    /// `dst` across `spare2` alone (`spare1` holds the parked stack and must
    /// stay untouched), then bring the parked stack home.
    fn solve_four(
        &self,
        tower: &mut Tower,
        n: u32,
        src: usize,
        spare1: usize,
        spare2: usize,
        dst: usize,
    ) -> Result<(), IllegalMove> {
        if n == 1 {
            return self.step(tower, src, dst);
        }

        let parked = n - self.splits.split(n);
        self.solve_four(tower, parked, src, spare2, dst, spare1)?;
        self.solve_three(tower, n - parked, src, spare2, dst)?;
        self.solve_four(tower, parked, spare1, src, spare2, dst)
    }

    /// Classic three-peg recursion; takes exactly `2^n - 1` moves.
    fn solve_three(
        &self,
        tower: &mut Tower,
        n: u32,
        src: usize,
        spare: usize,
        dst: usize,
    ) -> Result<(), IllegalMove> {
        if n == 1 {
            return self.step(tower, src, dst);
        }

        self.solve_three(tower, n - 1, src, dst, spare)?;
        self.step(tower, src, dst)?;
        self.solve_three(tower, n - 1, spare, src, dst)
    }

    /// One disk transfer, with the optional animation pause in front.
    fn step(&self, tower: &mut Tower, src: usize, dst: usize) -> Result<(), IllegalMove> {
        if let Some(delay) = self.animate {
            println!("{tower}");
            thread::sleep(delay);
        }
        tower.move_disk(src, dst)
    }
}
