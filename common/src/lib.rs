pub mod moves;
pub mod solver;

use std::fmt;

use crate::moves::{Move, MoveSequence};

/// A disk for stacking on a peg.
///
/// Invariant: the size is at least 1. Two disks are the same disk iff they
/// have the same size.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct Disk(u32);

impl Disk {
    pub fn new(size: u32) -> Self {
        assert!(size >= 1, "disks have positive size");
        Disk(size)
    }

    pub fn size(self) -> u32 {
        self.0
    }
}

/// A move that violates the stacking rules of the tower.
///
/// This is the only error the model produces. It is never caught inside the
/// model; presenting it and re-prompting is the caller's job.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum IllegalMove {
    #[error("peg {peg} has no disk to move")]
    EmptySource { peg: usize },
    #[error("cannot place a disk of size {moved} onto a disk of size {onto}")]
    SizeConflict { moved: u32, onto: u32 },
}

/// A Tower of Hanoi board: a fixed number of pegs holding stacks of disks.
///
/// Within each peg the disk sizes strictly decrease from bottom to top, and
/// [`Tower::move_disk`] is the only operation that relocates disks, so the
/// ordering holds for every reachable tower. Every applied move is recorded
/// in an owned [`MoveSequence`].
///
/// Peg indices are 0-based everywhere; passing an index that is out of range
/// panics.
#[derive(Debug, Clone)]
pub struct Tower {
    pegs: Vec<Vec<Disk>>,
    moves: MoveSequence,
}

impl Tower {
    /// Create a tower of `peg_count` empty pegs.
    pub fn new(peg_count: usize) -> Self {
        assert!(peg_count >= 1, "a tower needs at least one peg");
        Tower {
            pegs: vec![Vec::new(); peg_count],
            moves: MoveSequence::new(),
        }
    }

    /// Stack `disk_count` disks on the first peg, the largest at the bottom
    /// and a disk of size 1 on top.
    ///
    /// This is the standard start configuration. The peg is not checked for
    /// prior occupants; callers fill a fresh tower.
    pub fn fill_first_peg(&mut self, disk_count: u32) {
        for size in (1..=disk_count).rev() {
            self.pegs[0].push(Disk::new(size));
        }
    }

    /// Move the top disk of `src` onto `dst`.
    ///
    /// Fails if `src` is empty or if the top disk of `dst` is not strictly
    /// larger than the moved disk. The checks run before anything mutates,
    /// so a rejected move leaves the tower exactly as it was.
    pub fn move_disk(&mut self, src: usize, dst: usize) -> Result<(), IllegalMove> {
        let moved = self
            .top_disk(src)
            .ok_or(IllegalMove::EmptySource { peg: src })?;
        if let Some(onto) = self.top_disk(dst) {
            if onto.size() <= moved.size() {
                return Err(IllegalMove::SizeConflict {
                    moved: moved.size(),
                    onto: onto.size(),
                });
            }
        }

        let disk = self.pegs[src].pop().expect("source top checked above");
        self.pegs[dst].push(disk);
        self.moves.push(Move { src, dst });
        log::debug!("moved disk {} from peg {src} to peg {dst}", disk.size());

        Ok(())
    }

    /// The top disk of a peg, or `None` if the peg is empty.
    pub fn top_disk(&self, peg: usize) -> Option<Disk> {
        self.pegs[peg].last().copied()
    }

    /// The disk at `height` on a peg, counted from the bottom at 0.
    pub fn disk_at(&self, peg: usize, height: usize) -> Option<Disk> {
        self.pegs[peg].get(height).copied()
    }

    /// Index of the peg currently holding `disk`. Each disk sits on exactly
    /// one peg, so the first match is the only one.
    pub fn disk_location(&self, disk: Disk) -> Option<usize> {
        self.pegs.iter().position(|peg| peg.contains(&disk))
    }

    pub fn peg_count(&self) -> usize {
        self.pegs.len()
    }

    /// Total number of disks across all pegs.
    pub fn disk_count(&self) -> usize {
        self.pegs.iter().map(Vec::len).sum()
    }

    /// Number of moves applied so far.
    pub fn move_count(&self) -> usize {
        self.moves.len()
    }

    /// The chronological log of every move applied to this tower.
    pub fn moves(&self) -> &MoveSequence {
        &self.moves
    }
}

/// Two towers are equal when their disk configurations look the same, peg by
/// peg. The move history is not compared; different move paths can reach the
/// same configuration.
impl PartialEq for Tower {
    fn eq(&self, other: &Self) -> bool {
        self.pegs == other.pegs
    }
}

impl Eq for Tower {}

impl fmt::Display for Tower {
    /// Fixed-width picture of the current configuration.
    ///
    /// Each disk renders as `2 * size - 1` dashes centered in a field wide
    /// enough for the largest disk on the board, one text row per height
    /// level, topped stacks first, with a row of `=` peg baselines at the
    /// bottom.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let levels = self.disk_count();
        let max_size = self
            .pegs
            .iter()
            .flatten()
            .map(|disk| disk.size() as usize)
            .max()
            .unwrap_or(0);
        let field_width = 2 * max_size + 1;

        let disk_str = |size: usize| {
            if size == 0 {
                return " ".repeat(field_width);
            }
            let dashes = 2 * size - 1;
            let filler = " ".repeat((field_width - dashes) / 2);
            format!("{filler}{}{filler}", "-".repeat(dashes))
        };

        for height in (0..levels).rev() {
            for peg in 0..self.peg_count() {
                let size = self.disk_at(peg, height).map_or(0, |d| d.size() as usize);
                write!(f, "{}  ", disk_str(size))?;
            }
            writeln!(f)?;
        }
        for _ in 0..self.peg_count() {
            write!(f, "{}  ", "=".repeat(field_width))?;
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use proptest::{collection::vec, prop_assert, prop_assert_eq, proptest};

    use super::*;

    fn standard_tower(pegs: usize, disks: u32) -> Tower {
        let mut tower = Tower::new(pegs);
        tower.fill_first_peg(disks);
        tower
    }

    #[test]
    fn test_fill_first_peg_stacks_largest_at_bottom() {
        let tower = standard_tower(4, 5);

        assert_eq!(tower.peg_count(), 4);
        assert_eq!(tower.disk_count(), 5);
        assert_eq!(tower.move_count(), 0);
        assert_eq!(tower.disk_at(0, 0), Some(Disk::new(5)));
        assert_eq!(tower.disk_at(0, 3), Some(Disk::new(2)));
        assert_eq!(tower.top_disk(0), Some(Disk::new(1)));
    }

    #[test]
    fn test_move_transfers_top_disk() {
        let mut tower = standard_tower(4, 3);

        tower.move_disk(0, 2).unwrap();

        assert_eq!(tower.top_disk(0), Some(Disk::new(2)));
        assert_eq!(tower.top_disk(2), Some(Disk::new(1)));
        assert_eq!(tower.move_count(), 1);
        assert_eq!(tower.moves().get(0), Some(Move { src: 0, dst: 2 }));
    }

    #[test]
    fn test_move_from_empty_peg_is_illegal() {
        let mut tower = standard_tower(4, 3);

        assert_eq!(
            tower.move_disk(1, 2),
            Err(IllegalMove::EmptySource { peg: 1 })
        );
    }

    #[test]
    fn test_larger_disk_cannot_rest_on_smaller() {
        let mut tower = standard_tower(4, 3);
        tower.move_disk(0, 1).unwrap();

        // peg 0 now has size 2 on top, peg 1 holds the size-1 disk
        assert_eq!(
            tower.move_disk(0, 1),
            Err(IllegalMove::SizeConflict { moved: 2, onto: 1 })
        );
    }

    #[test]
    fn test_equal_sizes_cannot_stack() {
        // moving a peg onto itself would stack a disk on its equal
        let mut tower = standard_tower(3, 2);

        assert_eq!(
            tower.move_disk(0, 0),
            Err(IllegalMove::SizeConflict { moved: 1, onto: 1 })
        );
    }

    #[test]
    fn test_rejected_move_leaves_tower_untouched() {
        let mut tower = standard_tower(4, 3);
        tower.move_disk(0, 3).unwrap();
        let before = tower.clone();
        let moves_before = tower.move_count();

        assert!(tower.move_disk(0, 3).is_err());
        assert!(tower.move_disk(2, 1).is_err());

        assert_eq!(tower, before);
        assert_eq!(tower.move_count(), moves_before);
        assert_eq!(tower.disk_count(), 3);
    }

    #[test]
    fn test_equality_ignores_move_history() {
        let mut a = standard_tower(4, 7);
        a.move_disk(0, 1).unwrap();
        a.move_disk(0, 2).unwrap();
        a.move_disk(1, 2).unwrap();

        let mut b = standard_tower(4, 7);
        b.move_disk(0, 3).unwrap();
        b.move_disk(0, 2).unwrap();
        b.move_disk(3, 2).unwrap();

        assert_eq!(a, b);
        assert_ne!(a.moves(), b.moves());
    }

    #[test]
    fn test_disk_location_finds_peg() {
        let mut tower = standard_tower(4, 3);
        tower.move_disk(0, 2).unwrap();

        assert_eq!(tower.disk_location(Disk::new(1)), Some(2));
        assert_eq!(tower.disk_location(Disk::new(3)), Some(0));
        assert_eq!(tower.disk_location(Disk::new(9)), None);
    }

    #[test]
    fn test_disk_at_beyond_stack_height_is_none() {
        let tower = standard_tower(4, 2);

        assert_eq!(tower.disk_at(0, 2), None);
        assert_eq!(tower.disk_at(1, 0), None);
        assert_eq!(tower.top_disk(1), None);
    }

    #[test]
    fn test_render_standard_tower() {
        let blank = "       ";
        let expected = format!(
            "{d1}  {blank}  {blank}  {blank}  \n\
             {d2}  {blank}  {blank}  {blank}  \n\
             {d3}  {blank}  {blank}  {blank}  \n\
             {base}  {base}  {base}  {base}  ",
            d1 = "   -   ",
            d2 = "  ---  ",
            d3 = " ----- ",
            base = "=======",
        );

        assert_eq!(standard_tower(4, 3).to_string(), expected);
    }

    #[test]
    fn test_render_empty_tower() {
        assert_eq!(Tower::new(3).to_string(), "=  =  =  ");
    }

    proptest! {
        #[test]
        fn test_random_moves_preserve_the_invariants(
            moves in vec((0usize..4, 0usize..4), 0..64)
        ) {
            let mut tower = standard_tower(4, 5);

            for (src, dst) in moves {
                let before = tower.clone();
                if tower.move_disk(src, dst).is_err() {
                    prop_assert_eq!(&tower, &before);
                    prop_assert_eq!(tower.move_count(), before.move_count());
                }

                prop_assert_eq!(tower.disk_count(), 5);
                for peg in 0..tower.peg_count() {
                    let mut height = 1;
                    while let (Some(below), Some(above)) =
                        (tower.disk_at(peg, height - 1), tower.disk_at(peg, height))
                    {
                        prop_assert!(above.size() < below.size());
                        height += 1;
                    }
                }
            }
        }
    }
}
