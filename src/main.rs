mod args;
mod controller;

use std::time::{Duration, Instant};

use anyhow::{Result, ensure};
use clap::Parser;
use common::{Tower, solver::Solver};
use serde::Serialize;

use crate::args::{Cli, Command, SolveArgs};

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Command::Solve(args) => solve(args),
        Command::Play(args) => controller::play(args.pegs, args.disks),
    }
}

#[derive(Serialize)]
struct SolveStats {
    pegs: usize,
    disks: u32,
    moves: usize,
    predicted_moves: u64,
    elapsed_secs: f32,
}

fn solve(args: SolveArgs) -> Result<()> {
    ensure!(args.disks >= 1, "need at least one disk");
    ensure!(
        matches!(args.pegs, 3 | 4),
        "the solver supports 3 or 4 pegs, not {}",
        args.pegs
    );

    let mut tower = Tower::new(args.pegs);
    tower.fill_first_peg(args.disks);

    let mut solver = Solver::new(args.disks);
    if args.animate {
        solver = solver.animated(Duration::from_secs_f32(args.delay));
    }

    let start = Instant::now();
    solver.solve(&mut tower)?;
    let elapsed_secs = start.elapsed().as_secs_f32();

    if args.stats {
        let stats = SolveStats {
            pegs: args.pegs,
            disks: args.disks,
            moves: tower.move_count(),
            predicted_moves: solver.predicted_moves(args.pegs, args.disks),
            elapsed_secs,
        };
        println!("{}", serde_json::to_string_pretty(&stats)?);
    } else {
        println!("{tower}");
        println!("solved in {} moves", tower.move_count());
    }

    Ok(())
}
