use anyhow::{anyhow, bail};
use clap::Parser;
use common::{DEFAULT_DISKS, MAX_DISKS, Move, PegId};

#[derive(Parser, Debug)]
#[command(name = "hanoi")]
#[command(author, version, about = "Solve the Tower of Hanoi and replay the solution")]
/// Command-line arguments for the solver
pub struct Cli {
    /// Number of disks on the starting peg
    #[arg(short = 'n', long, default_value_t = DEFAULT_DISKS)]
    pub disks: u8,

    /// Peg holding all disks at the start
    #[arg(long, default_value_t = 0)]
    pub from: u8,

    /// Peg that should hold all disks at the end
    #[arg(long, default_value_t = 1)]
    pub to: u8,

    /// Peg used as intermediate storage
    #[arg(long, default_value_t = 2)]
    pub via: u8,

    /// Draw the pegs after every move
    #[arg(short, long)]
    pub draw: bool,

    /// Only print the summary
    #[arg(short, long)]
    pub quiet: bool,
}

/// Validated puzzle parameters.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Puzzle {
    pub disks: u8,
    pub src: PegId,
    pub dst: PegId,
    pub spare: PegId,
}

impl Cli {
    pub fn puzzle(&self) -> anyhow::Result<Puzzle> {
        if !(1..=MAX_DISKS).contains(&self.disks) {
            bail!(
                "Number of disks must be between 1 and {MAX_DISKS}, got {}",
                self.disks
            );
        }

        let peg = |label: u8| PegId::new(label).ok_or_else(|| anyhow!("There is no peg {label}"));
        let (src, dst, spare) = (peg(self.from)?, peg(self.to)?, peg(self.via)?);
        if src == dst || src == spare || dst == spare {
            bail!("Pegs must be distinct, got from={src}, to={dst}, via={spare}");
        }

        Ok(Puzzle {
            disks: self.disks,
            src,
            dst,
            spare,
        })
    }
}

impl Puzzle {
    pub fn solve(&self) -> Vec<Move> {
        common::solve(self.disks, self.src, self.dst, self.spare)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> Cli {
        Cli::try_parse_from(std::iter::once("hanoi").chain(args.iter().copied())).unwrap()
    }

    #[test]
    fn test_defaults() {
        let puzzle = parse(&[]).puzzle().unwrap();
        assert_eq!(puzzle.disks, DEFAULT_DISKS);
        assert_eq!(puzzle.src, PegId::left());
        assert_eq!(puzzle.dst, PegId::middle());
        assert_eq!(puzzle.spare, PegId::right());
    }

    #[test]
    fn test_custom_pegs() {
        let puzzle = parse(&["-n", "2", "--from", "2", "--to", "0", "--via", "1"])
            .puzzle()
            .unwrap();
        let moves = puzzle.solve();
        assert_eq!(moves.len(), 3);
        assert_eq!(moves[1], Move::new(PegId::right(), PegId::left()));
    }

    #[test]
    fn test_rejects_bad_disk_count() {
        assert!(parse(&["-n", "0"]).puzzle().is_err());
        assert!(parse(&["-n", "21"]).puzzle().is_err());
        assert!(Cli::try_parse_from(["hanoi", "-n", "300"]).is_err());
    }

    #[test]
    fn test_rejects_bad_pegs() {
        assert!(parse(&["--from", "3"]).puzzle().is_err());
        let err = parse(&["--to", "0"]).puzzle().unwrap_err();
        assert!(err.to_string().contains("distinct"));
    }
}
