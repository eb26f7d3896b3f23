//! Rendering a [`Tally`] for the terminal.

use std::{fmt, io::Write};

use crate::{Dominant, Tally};

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, clap::ValueEnum)]
pub enum Format {
    /// `c: n` lines followed by a summary line
    #[default]
    Text,
    Json,
}

/// Displays a character with `char::escape_debug`, so whitespace stays visible.
pub struct Escaped(pub char);

impl fmt::Display for Escaped {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.escape_debug())
    }
}

pub fn summary(dominant: Option<Dominant>) -> String {
    match dominant {
        Some(Dominant { ch, count }) => {
            format!("Most frequent character: '{}' ({count})", Escaped(ch))
        }
        None => "No dominant character (empty input)".to_string(),
    }
}

pub fn write_text(out: &mut impl Write, tally: &Tally) -> std::io::Result<()> {
    for (c, n) in tally.table.iter() {
        writeln!(out, "{}: {n}", Escaped(c))?;
    }
    writeln!(out, "{}", summary(tally.dominant))
}

pub fn write_json(out: &mut impl Write, tally: &Tally) -> std::io::Result<()> {
    serde_json::to_writer_pretty(&mut *out, tally)?;
    writeln!(out)
}

pub fn write(out: &mut impl Write, tally: &Tally, format: Format) -> std::io::Result<()> {
    match format {
        Format::Text => write_text(out, tally),
        Format::Json => write_json(out, tally),
    }
}
