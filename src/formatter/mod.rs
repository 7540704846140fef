//! Scan output formatting module

use std::io::{self, Write};

use crate::scanner::{EntryOutcome, Payload};

/// How decoded values are rendered
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ValueStyle {
    /// Single-line JSON
    #[default]
    Compact,
    /// Indented, multi-line JSON
    Pretty,
}

/// Writes scan outcomes to a sink
///
/// An emitted entry becomes one line with its path; a decoded value adds a
/// second line. Undecodable files print their path only; skipped entries and
/// traversal failures print nothing.
pub struct OutcomeFormatter<W: Write> {
    out: W,
    style: ValueStyle,
}

impl<W: Write> OutcomeFormatter<W> {
    pub fn new(out: W) -> Self {
        Self {
            out,
            style: ValueStyle::default(),
        }
    }

    pub fn with_style(mut self, style: ValueStyle) -> Self {
        self.style = style;
        self
    }

    /// Write the lines for one outcome
    pub fn write_outcome(&mut self, outcome: &EntryOutcome) -> io::Result<()> {
        let EntryOutcome::Emitted { entry, payload } = outcome else {
            return Ok(());
        };

        writeln!(self.out, "{}", entry.path.display())?;
        if let Payload::Decoded(value) = payload {
            match self.style {
                ValueStyle::Compact => writeln!(self.out, "{}", value)?,
                ValueStyle::Pretty => writeln!(self.out, "{:#}", value)?,
            }
        }
        Ok(())
    }

    pub fn flush(&mut self) -> io::Result<()> {
        self.out.flush()
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

/// Render outcomes to a string, as they would appear on stdout
pub fn render_outcomes<'a>(
    outcomes: impl IntoIterator<Item = &'a EntryOutcome>,
    style: ValueStyle,
) -> String {
    let mut formatter = OutcomeFormatter::new(Vec::new()).with_style(style);
    for outcome in outcomes {
        // Writing into a Vec cannot fail
        let _ = formatter.write_outcome(outcome);
    }
    String::from_utf8_lossy(&formatter.into_inner()).into_owned()
}
