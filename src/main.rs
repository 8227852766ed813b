mod cli;
mod draw;

use anyhow::Context;
use clap::Parser;
use common::{Direction, towers::Towers};

use crate::cli::Cli;

fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let cli = Cli::parse();
    let puzzle = cli.puzzle()?;

    let moves = puzzle.solve();
    log::info!(
        "solving {} disks from peg {} to peg {}: {} moves",
        puzzle.disks,
        puzzle.src,
        puzzle.dst,
        moves.len()
    );

    let mut towers = Towers::new(puzzle.disks, puzzle.src);
    if cli.draw && !cli.quiet {
        print!("{}", draw::draw(&towers, None));
        println!();
    }

    for (i, &mv) in moves.iter().enumerate() {
        let disk = towers
            .apply_move(mv, Direction::Forward)
            .with_context(|| format!("Replay failed at move {}", i + 1))?;

        if cli.quiet {
            continue;
        }
        println!("{}: {mv} (disk {disk})", i + 1);
        if cli.draw {
            print!("{}", draw::draw(&towers, Some(disk)));
            println!();
        }
    }

    if !towers.is_solved(puzzle.dst) {
        anyhow::bail!("Disks did not end up on peg {}", puzzle.dst);
    }
    println!("solved {} disks in {} moves", puzzle.disks, moves.len());

    Ok(())
}
