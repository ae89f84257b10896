//! Demo runner: generate a day's puzzle and print it.
//!
//! Exercises the full generation path (seed derivation, theme selection,
//! placement) and optionally the path finder for each hidden word.

use std::collections::BTreeSet;

use anyhow::{anyhow, Result};

use wordgrid::core::pathfinder;
use wordgrid::engine::factory;
use wordgrid::types::{clamp_grid_size, DayKey};

#[derive(Debug, Clone, Copy)]
struct Args {
    day: i64,
    size: usize,
    show_paths: bool,
}

fn parse_args(args: &[String]) -> Result<Args> {
    let mut parsed = Args {
        day: 0,
        size: 9,
        show_paths: false,
    };
    let mut i = 0usize;
    while i < args.len() {
        match args[i].as_str() {
            "--day" => {
                i += 1;
                let v = args.get(i).ok_or_else(|| anyhow!("missing value for --day"))?;
                parsed.day = v
                    .parse::<i64>()
                    .map_err(|_| anyhow!("invalid --day value: {}", v))?;
            }
            "--size" => {
                i += 1;
                let v = args
                    .get(i)
                    .ok_or_else(|| anyhow!("missing value for --size"))?;
                parsed.size = v
                    .parse::<usize>()
                    .map_err(|_| anyhow!("invalid --size value: {}", v))?;
            }
            "--paths" => {
                parsed.show_paths = true;
            }
            other => {
                return Err(anyhow!("unknown argument: {}", other));
            }
        }
        i += 1;
    }
    Ok(parsed)
}

fn main() -> Result<()> {
    let raw: Vec<String> = std::env::args().skip(1).collect();
    let args = parse_args(&raw)?;

    let day = DayKey::new(args.day);
    let size = clamp_grid_size(args.size);
    let puzzle = factory::make_puzzle(day, size);

    println!(
        "Puzzle #{} (day {}, {}x{})",
        puzzle.number(),
        day.offset(),
        size,
        size
    );
    println!();
    for row in puzzle.grid().rows() {
        let line: Vec<String> = row.iter().map(|c| c.to_string()).collect();
        println!("  {}", line.join(" "));
    }
    println!();
    println!("Hidden words:");
    for word in puzzle.words() {
        if args.show_paths {
            let path = pathfinder::find_path(word.text(), puzzle.grid(), &BTreeSet::new())
                .ok_or_else(|| anyhow!("placed word {} not found in grid", word.text()))?;
            let start = path.first().expect("path is never empty");
            let end = path.last().expect("path is never empty");
            println!(
                "  {:<12} ({}, {}) -> ({}, {})",
                word.text(),
                start.row,
                start.col,
                end.row,
                end.col
            );
        } else {
            println!("  {}", word.text());
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn strings(args: &[&str]) -> Vec<String> {
        args.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_parse_defaults() {
        let args = parse_args(&[]).unwrap();
        assert_eq!(args.day, 0);
        assert_eq!(args.size, 9);
        assert!(!args.show_paths);
    }

    #[test]
    fn test_parse_flags() {
        let args = parse_args(&strings(&["--day", "12", "--size", "7", "--paths"])).unwrap();
        assert_eq!(args.day, 12);
        assert_eq!(args.size, 7);
        assert!(args.show_paths);
    }

    #[test]
    fn test_parse_rejects_unknown() {
        assert!(parse_args(&strings(&["--bogus"])).is_err());
        assert!(parse_args(&strings(&["--day"])).is_err());
        assert!(parse_args(&strings(&["--day", "x"])).is_err());
    }
}
