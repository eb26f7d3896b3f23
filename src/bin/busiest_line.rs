use std::{
    fs::File,
    io::{self, BufRead, BufReader},
    path::PathBuf,
};

use anyhow::Context;
use clap::Parser;
use tracing::debug;

use charfreq::{count, report, Dominant};

/// Find the line whose most frequent character occurs the most times
#[derive(Parser)]
#[command(name = "busiest_line")]
struct Cli {
    path: PathBuf,

    /// Drop space characters before counting each line
    #[arg(
        short,
        long,
        env = "CHARFREQ_IGNORE_SPACES",
        value_parser = clap::builder::FalseyValueParser::new()
    )]
    ignore_spaces: bool,

    /// Enable debug logging
    #[arg(short, long, default_value_t = false)]
    debug: bool,
}

#[derive(Debug, Default, PartialEq, Eq)]
struct Scan {
    lines: usize,
    /// Blank lines never win.
    best: Option<(String, Dominant)>,
}

fn busiest(
    lines: impl IntoIterator<Item = io::Result<String>>,
    ignore_spaces: bool,
) -> anyhow::Result<Scan> {
    let mut scan = Scan::default();
    for (i, line) in lines.into_iter().enumerate() {
        let line = line.with_context(|| format!("failed to read line {}", i + 1))?;
        scan.lines += 1;
        let Some(d) = count(&line, ignore_spaces).dominant else {
            continue;
        };
        debug!(
            "line {}: '{}' x{}",
            i + 1,
            report::Escaped(d.ch),
            d.count
        );
        // first line wins ties, like the dominant character within a line
        if scan.best.as_ref().map_or(true, |(_, b)| d.count > b.count) {
            scan.best = Some((line, d));
        }
    }
    Ok(scan)
}

fn describe(scan: &Scan) -> String {
    match &scan.best {
        Some((line, d)) => format!(
            "busiest line: {line}\n{}",
            report::summary(Some(*d))
        ),
        None if scan.lines == 0 => "no lines".to_string(),
        None => format!("no characters in {} blank lines", scan.lines),
    }
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    if cli.debug {
        tracing_subscriber::fmt()
            .with_writer(io::stderr)
            .with_max_level(tracing::Level::DEBUG)
            .init();
    }

    let file = File::open(&cli.path)
        .with_context(|| format!("failed to open {}", cli.path.display()))?;
    let scan = busiest(BufReader::new(file).lines(), cli.ignore_spaces)?;
    println!("{}", describe(&scan));

    Ok(())
}
