use clap::{Args, Parser, Subcommand};

/// Tower of Hanoi on three or four pegs: solve it or play it.
#[derive(Debug, Parser)]
#[command(author, version, about)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Run the Frame-Stewart solver on a freshly filled tower.
    Solve(SolveArgs),
    /// Play the puzzle interactively on the console.
    Play(PlayArgs),
}

#[derive(Debug, Args)]
pub struct SolveArgs {
    /// Number of disks stacked on the first peg.
    #[arg(long)]
    pub disks: u32,

    /// Number of pegs. The solver supports 3 and 4.
    #[arg(long, default_value_t = 4)]
    pub pegs: usize,

    /// Print the board before every move.
    #[arg(long, default_value_t = false)]
    pub animate: bool,

    /// Pause between animated moves, in seconds.
    #[arg(long, default_value_t = 0.33)]
    pub delay: f32,

    /// Print a JSON summary of the run instead of the final board.
    #[arg(long, default_value_t = false)]
    pub stats: bool,
}

#[derive(Debug, Args)]
pub struct PlayArgs {
    /// Number of pegs on the board.
    #[arg(long, default_value_t = 4)]
    pub pegs: usize,

    /// Number of disks stacked on the first peg.
    #[arg(long, default_value_t = 5)]
    pub disks: u32,
}
