use anyhow::{Context, Result};
use clap::{ArgAction, Parser, Subcommand, ValueEnum};
use log::{LevelFilter, Metadata, Record, debug};
use memmap2::Mmap;
use serde::Serialize;
use std::fs::File;
use std::io::{self, BufRead, IsTerminal};
use std::path::{Path, PathBuf};
use sufmatch::config::MatchConfig;
use sufmatch::matcher::{Matcher, count_lines};
use sufmatch::output;
use sufmatch::utils::progress::line_progress;
use termcolor::ColorChoice;

#[derive(Parser)]
#[command(name = "sufmatch")]
#[command(about = "Exact pattern search via suffix trees")]
#[command(
    long_about = "Exact pattern search via suffix trees.\n\nWithout a subcommand, reads the pattern and the haystack as two lines from stdin and prints every 1-based occurrence position."
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// JSON configuration file
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Match ASCII letters case-insensitively
    #[arg(short = 'i', long, global = true)]
    ignore_case: bool,

    /// Terminator byte appended to the pattern (must not occur in it)
    #[arg(long, global = true)]
    sentinel: Option<u8>,

    /// When to use colors
    #[arg(long, value_enum, default_value_t = ColorMode::Auto, global = true)]
    color: ColorMode,

    /// Log to stderr (-v debug, -vv trace)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    verbose: u8,
}

#[derive(Subcommand)]
enum Commands {
    /// Search a file for a pattern
    Search {
        /// Pattern to search for
        pattern: String,

        /// File to search in (treated as one haystack)
        file: PathBuf,

        /// Print results as JSON (0-based offsets)
        #[arg(long)]
        json: bool,
    },
    /// Search every line of a file separately
    Lines {
        /// Pattern to search for
        pattern: String,

        /// File whose lines are searched
        file: PathBuf,

        /// Print results as JSON (0-based positions)
        #[arg(long)]
        json: bool,

        /// Show a progress bar on stderr
        #[arg(long)]
        progress: bool,
    },
    /// Show suffix tree statistics for a text
    Stats {
        /// Text to index
        text: String,

        /// Print statistics as JSON
        #[arg(long)]
        json: bool,
    },
    /// Print the suffix tree of a text
    Tree {
        /// Text to index
        text: String,
    },
}

#[derive(Clone, Copy, ValueEnum)]
enum ColorMode {
    Auto,
    Always,
    Never,
}

impl ColorMode {
    fn choice(self) -> ColorChoice {
        match self {
            ColorMode::Always => ColorChoice::Always,
            ColorMode::Never => ColorChoice::Never,
            ColorMode::Auto if io::stdout().is_terminal() => ColorChoice::Auto,
            ColorMode::Auto => ColorChoice::Never,
        }
    }
}

#[derive(Serialize)]
struct SearchReport<'a> {
    pattern: &'a str,
    offsets: Vec<usize>,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let mut config = match &cli.config {
        Some(path) => MatchConfig::load(path)?,
        None => MatchConfig::default(),
    };
    if cli.ignore_case {
        config.case_insensitive = true;
    }
    if let Some(sentinel) = cli.sentinel {
        config.sentinel = sentinel;
    }
    let color = cli.color.choice();

    match cli.command {
        Some(Commands::Search {
            pattern,
            file,
            json,
        }) => {
            let matcher = Matcher::new(pattern.as_bytes(), &config)?;
            let haystack = map_file(&file)?;
            let offsets = matcher.find(haystack.as_deref().unwrap_or_default());

            if json {
                output::print_json(&SearchReport {
                    pattern: &pattern,
                    offsets,
                })?;
            } else {
                output::print_positions(&offsets, color)?;
            }
        }
        Some(Commands::Lines {
            pattern,
            file,
            json,
            progress,
        }) => {
            let matcher = Matcher::new(pattern.as_bytes(), &config)?;
            let mapped = map_file(&file)?;
            let data = mapped.as_deref().unwrap_or_default();

            let results = if progress {
                let bar = line_progress(count_lines(data) as u64);
                let results = matcher.find_in_lines_with_progress(data, &bar);
                bar.finish_and_clear();
                results
            } else {
                matcher.find_in_lines(data)
            };

            if json {
                output::print_json(&results)?;
            } else {
                output::print_line_matches(&results, color)?;
            }
        }
        Some(Commands::Stats { text, json }) => {
            let matcher = Matcher::new(text.as_bytes(), &config)?;
            let stats = matcher.tree().stats();
            if json {
                output::print_json(&stats)?;
            } else {
                output::print_stats(&stats, color)?;
            }
        }
        Some(Commands::Tree { text }) => {
            let matcher = Matcher::new(text.as_bytes(), &config)?;
            let stdout = io::stdout();
            matcher.tree().dump(&mut stdout.lock())?;
        }
        None => {
            run_stdin(&config, color)?;
        }
    }

    Ok(())
}

/// Line mode: pattern on the first line, haystack on the second.
///
/// Empty lines or a haystack shorter than the pattern print nothing. A
/// pattern the tree rejects is reported on stderr; the exit code stays 0.
fn run_stdin(config: &MatchConfig, color: ColorChoice) -> Result<()> {
    let stdin = io::stdin();
    let mut input = stdin.lock();

    let pattern = read_line(&mut input).context("Failed to read pattern")?;
    let haystack = read_line(&mut input).context("Failed to read haystack")?;

    if pattern.is_empty() || haystack.is_empty() || haystack.len() < pattern.len() {
        debug!(
            "nothing to search (pattern {} bytes, haystack {} bytes)",
            pattern.len(),
            haystack.len()
        );
        return Ok(());
    }

    let matcher = match Matcher::new(&pattern, config) {
        Ok(matcher) => matcher,
        Err(err) => {
            eprintln!("sufmatch: {}", err);
            return Ok(());
        }
    };
    let positions = matcher.find(&haystack);
    debug!("{} occurrences", positions.len());

    output::print_positions(&positions, color)?;
    Ok(())
}

/// Read one line without its terminator; empty at end of input
fn read_line<R: BufRead>(input: &mut R) -> io::Result<Vec<u8>> {
    let mut line = Vec::new();
    input.read_until(b'\n', &mut line)?;
    if line.last() == Some(&b'\n') {
        line.pop();
    }
    if line.last() == Some(&b'\r') {
        line.pop();
    }
    Ok(line)
}

/// Memory-map a file; `None` for an empty file, which cannot be mapped
fn map_file(path: &Path) -> Result<Option<Mmap>> {
    let file = File::open(path).with_context(|| format!("Failed to open {}", path.display()))?;
    let len = file
        .metadata()
        .with_context(|| format!("Failed to stat {}", path.display()))?
        .len();
    if len == 0 {
        return Ok(None);
    }

    let mmap = unsafe { Mmap::map(&file) }
        .with_context(|| format!("Failed to map {}", path.display()))?;
    debug!("mapped {} ({} bytes)", path.display(), len);
    Ok(Some(mmap))
}

/// Stderr logger in the `sufmatch: <message>` style
struct StderrLogger {
    level: LevelFilter,
}

impl log::Log for StderrLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= self.level
    }

    fn log(&self, record: &Record) {
        if self.enabled(record.metadata()) {
            eprintln!("sufmatch: {}", record.args());
        }
    }

    fn flush(&self) {}
}

fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => LevelFilter::Off,
        1 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    };
    if log::set_boxed_logger(Box::new(StderrLogger { level })).is_ok() {
        log::set_max_level(level);
    }
}
