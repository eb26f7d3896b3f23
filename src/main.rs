use std::{
    fs,
    io::{self, BufRead, Write},
    path::PathBuf,
    time::Instant,
};

use anyhow::{bail, Context};
use clap::Parser;
use tracing::{debug, info};

use charfreq::report::{self, Format};

#[derive(Parser)]
#[command(name = "charfreq")]
#[command(about = "Count how often each character occurs and report the most frequent one", long_about = None)]
struct Cli {
    /// Text to count; prompts for a line on stdin when omitted
    #[arg(conflicts_with = "file")]
    text: Option<String>,

    /// Count the contents of a file instead
    #[arg(short, long)]
    file: Option<PathBuf>,

    /// Drop space characters (not tabs or newlines) before counting
    #[arg(
        short,
        long,
        env = "CHARFREQ_IGNORE_SPACES",
        value_parser = clap::builder::FalseyValueParser::new()
    )]
    ignore_spaces: bool,

    /// Output format
    #[arg(long, value_enum, env = "CHARFREQ_FORMAT", default_value_t = Format::Text)]
    format: Format,

    /// Enable debug logging
    #[arg(short, long, default_value_t = false)]
    debug: bool,
}

/// Strip one trailing `\n` or `\r\n`.
fn trim_line_ending(line: &mut String) {
    if line.ends_with('\n') {
        line.pop();
        if line.ends_with('\r') {
            line.pop();
        }
    }
}

/// Ask for a line on `prompt_out` and read it from `input`.
///
/// The prompt never goes to stdout, which is reserved for the report.
fn prompt(input: &mut impl BufRead, prompt_out: &mut impl Write) -> anyhow::Result<String> {
    write!(prompt_out, "Enter a string: ")?;
    prompt_out.flush()?;

    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        bail!("no input on stdin");
    }
    trim_line_ending(&mut line);
    Ok(line)
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    tracing_subscriber::fmt()
        .with_writer(io::stderr)
        .with_max_level(if cli.debug {
            tracing::Level::DEBUG
        } else {
            tracing::Level::WARN
        })
        .init();

    let input = match (cli.text, &cli.file) {
        (Some(text), _) => {
            debug!("counting argument");
            text
        }
        (None, Some(path)) => {
            debug!("counting {}", path.display());
            fs::read_to_string(path)
                .with_context(|| format!("failed to read {}", path.display()))?
        }
        (None, None) => prompt(&mut io::stdin().lock(), &mut io::stderr())
            .context("failed to read input")?,
    };
    debug!("{} chars, ignore_spaces = {}", input.chars().count(), cli.ignore_spaces);

    let tick = Instant::now();
    let tally = charfreq::count(&input, cli.ignore_spaces);
    debug!("counted in {:?}", tick.elapsed());
    info!(
        "{} distinct characters; {}",
        tally.table.len(),
        report::summary(tally.dominant)
    );

    let mut stdout = io::stdout().lock();
    report::write(&mut stdout, &tally, cli.format).context("failed to write report")?;
    Ok(())
}
