use std::io::{self, BufRead, Write};

use anyhow::{Result, bail, ensure};
use common::Tower;

const INTRO: &str = "\
Tower of Hanoi: At each turn select a peg to remove a disk
from, and a peg to move that disk to. The objective is to get all the
disks from the first peg to the last peg. However, you can NEVER place
a larger disk on top of a smaller disk, so move the disk thoughtfully.
Each peg is represented by a number, where the first peg is 1, the second
peg is 2, etc. Good Luck!
";

/// Console play loop.
///
/// All input translation lives here: prompts use 1-based peg numbers with 0
/// as the quit sentinel, the model only ever sees validated 0-based indices.
pub fn play(pegs: usize, disks: u32) -> Result<()> {
    ensure!(pegs >= 1, "need at least one peg");
    ensure!(disks >= 1, "need at least one disk");

    let mut input = io::stdin().lock();
    let mut tower = Tower::new(pegs);
    tower.fill_first_peg(disks);

    println!("{INTRO}");
    loop {
        println!("{}", "*".repeat(100));
        println!("{tower}");

        let src = loop {
            let n = prompt(
                &mut input,
                "\nEnter the peg you wish to remove the top disk from.\nOr enter 0 if you wish to quit: ",
            )?;
            match n {
                Some(n) if n <= pegs => break n,
                _ => println!("\n********Invalid input, please try again.********\n\n{tower}"),
            }
        };
        if src == 0 {
            println!("Thank you for playing");
            return Ok(());
        }

        let dst = loop {
            let n = prompt(&mut input, "\nEnter the peg you wish to move the disk to: ")?;
            match n {
                Some(n) if (1..=pegs).contains(&n) => break n,
                _ => println!("\n********Invalid input, please try again.********\n\n{tower}"),
            }
        };

        if let Err(err) = tower.move_disk(src - 1, dst - 1) {
            println!("\n********Illegal move, please try again ({err})********");
        }
    }
}

/// Show `msg` and read one line; `None` means the line was not a number.
fn prompt(input: &mut impl BufRead, msg: &str) -> Result<Option<usize>> {
    print!("{msg}");
    io::stdout().flush()?;

    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        bail!("input closed before the game ended");
    }

    Ok(line.trim().parse().ok())
}
