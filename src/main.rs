//! Polycube Counter
//!
//! Counts the connected shapes of a given number of unit cubes that are
//! distinct up to translation (fixed polycubes). Shapes are enumerated by
//! exhaustive backtracking and deduplicated by a translation-invariant
//! positional hash, so the totals for a given count are reproducible
//! run-to-run.

use clap::{Parser, Subcommand};

use polycount::Generator;

/// Counts distinct polycubes of a given cube count.
#[derive(Parser)]
#[command(name = "polycount")]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Count the distinct shapes of exactly N cubes.
    Count {
        /// Target cube count (at least 1).
        n: usize,
    },
    /// Print the counts for every cube count from 1 through MAX.
    Table {
        /// Largest cube count to enumerate.
        max: usize,
    },
}

fn main() {
    let cli = Cli::parse();

    match cli.command {
        Command::Count { n } => {
            if n == 0 {
                eprintln!("cube count must be at least 1");
                std::process::exit(1);
            }
            print!("{}", count_line(n));
        }
        Command::Table { max } => {
            if max == 0 {
                eprintln!("cube count must be at least 1");
                std::process::exit(1);
            }
            print!("{}", counts_table(max));
        }
    }
}

/// Runs one enumeration and formats its result line.
fn count_line(n: usize) -> String {
    let mut generator = Generator::new(n);
    generator.generate();
    format!("n={}: {}\n", n, generator.count())
}

/// Formats the result lines for every count in `1..=max`.
fn counts_table(max: usize) -> String {
    (1..=max).map(count_line).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_counts_table_snapshot() {
        insta::assert_snapshot!(counts_table(4).trim_end(), @r"
        n=1: 1
        n=2: 3
        n=3: 15
        n=4: 86
        ");
    }

    #[test]
    fn test_count_line_format() {
        assert_eq!(count_line(1), "n=1: 1\n");
    }
}
