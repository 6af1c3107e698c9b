//! Output formatting for search results

use crate::matcher::LineMatches;
use crate::tree::TreeStats;
use serde::Serialize;
use std::io::{self, Write};
use termcolor::{Color, ColorChoice, ColorSpec, StandardStream, WriteColor};

/// Print occurrence positions, 1-based, one per line
pub fn print_positions(positions: &[usize], choice: ColorChoice) -> io::Result<()> {
    let mut stdout = StandardStream::stdout(choice);
    write_positions(&mut stdout, positions)
}

pub fn write_positions<W: WriteColor>(out: &mut W, positions: &[usize]) -> io::Result<()> {
    for &pos in positions {
        out.set_color(ColorSpec::new().set_fg(Some(Color::Green)))?;
        write!(out, "{}", pos + 1)?;
        out.reset()?;
        writeln!(out)?;
    }
    Ok(())
}

/// Print line matches as `line:position`, both 1-based
pub fn print_line_matches(results: &[LineMatches], choice: ColorChoice) -> io::Result<()> {
    let mut stdout = StandardStream::stdout(choice);
    write_line_matches(&mut stdout, results)
}

pub fn write_line_matches<W: WriteColor>(out: &mut W, results: &[LineMatches]) -> io::Result<()> {
    for m in results {
        for &pos in &m.positions {
            out.set_color(ColorSpec::new().set_fg(Some(Color::Magenta)))?;
            write!(out, "{}", m.line_number)?;
            out.reset()?;
            write!(out, ":")?;
            out.set_color(ColorSpec::new().set_fg(Some(Color::Green)))?;
            write!(out, "{}", pos + 1)?;
            out.reset()?;
            writeln!(out)?;
        }
    }
    Ok(())
}

/// Print tree statistics
pub fn print_stats(stats: &TreeStats, choice: ColorChoice) -> io::Result<()> {
    let mut stdout = StandardStream::stdout(choice);

    let rows = [
        ("Text length", stats.text_len),
        ("Nodes", stats.node_count),
        ("Leaves", stats.leaf_count),
        ("Internal nodes", stats.internal_count),
    ];
    for (label, value) in rows {
        write!(stdout, "{:<16}", label)?;
        stdout.set_color(ColorSpec::new().set_bold(true))?;
        writeln!(stdout, "{}", value)?;
        stdout.reset()?;
    }

    Ok(())
}

/// Print any serializable value as a single JSON line
pub fn print_json<T: Serialize>(value: &T) -> io::Result<()> {
    let stdout = io::stdout();
    let mut lock = stdout.lock();
    serde_json::to_writer(&mut lock, value)?;
    writeln!(lock)
}

#[cfg(test)]
mod tests {
    use super::*;
    use termcolor::NoColor;

    #[test]
    fn test_positions_are_one_based() {
        let mut out = NoColor::new(Vec::new());
        write_positions(&mut out, &[0, 2]).unwrap();
        assert_eq!(String::from_utf8(out.into_inner()).unwrap(), "1\n3\n");
    }

    #[test]
    fn test_line_matches_format() {
        let mut out = NoColor::new(Vec::new());
        let results = vec![
            LineMatches {
                line_number: 2,
                positions: vec![0, 4],
            },
            LineMatches {
                line_number: 5,
                positions: vec![1],
            },
        ];
        write_line_matches(&mut out, &results).unwrap();
        assert_eq!(
            String::from_utf8(out.into_inner()).unwrap(),
            "2:1\n2:5\n5:2\n"
        );
    }
}
