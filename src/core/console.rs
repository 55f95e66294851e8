//! Line-based console used by the game loop.
//!
//! Game logic never writes to the terminal itself: it returns event values
//! that implement [`Narrate`], and the console renders them.

use super::error::Result;
use crossterm::style::Stylize;
use std::fmt::Display;
use std::io::{BufRead, Write};

/// Visual weight of a narrated line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Tone {
    #[default]
    Plain,
    Heading,
    Good,
    Bad,
    Warning,
}

/// Something the console can print as one or more lines.
pub trait Narrate: Display {
    fn tone(&self) -> Tone {
        Tone::Plain
    }

    /// Print an empty line first.
    fn spaced(&self) -> bool {
        false
    }
}

pub struct Console<I, W> {
    input: I,
    output: W,
    color: bool,
}

impl<I: BufRead, W: Write> Console<I, W> {
    pub fn new(input: I, output: W, color: bool) -> Self {
        Self {
            input,
            output,
            color,
        }
    }

    pub fn say(&mut self, text: impl Display) -> Result<()> {
        self.say_toned(text, Tone::Plain)
    }

    pub fn say_toned(&mut self, text: impl Display, tone: Tone) -> Result<()> {
        let line = self.paint(text.to_string(), tone);
        writeln!(self.output, "{}", line)?;
        Ok(())
    }

    pub fn blank(&mut self) -> Result<()> {
        writeln!(self.output)?;
        Ok(())
    }

    pub fn narrate(&mut self, event: &impl Narrate) -> Result<()> {
        if event.spaced() {
            self.blank()?;
        }
        self.say_toned(event, event.tone())
    }

    pub fn narrate_all<'a, E: Narrate + 'a>(
        &mut self,
        events: impl IntoIterator<Item = &'a E>,
    ) -> Result<()> {
        for event in events {
            self.narrate(event)?;
        }
        Ok(())
    }

    /// Prints `message` without a newline and reads one line.
    /// Returns `None` once input is exhausted. Invalid UTF-8 is replaced
    /// rather than rejected, so garbage input reaches the menu parsers.
    pub fn prompt(&mut self, message: &str) -> Result<Option<String>> {
        write!(self.output, "{}", message)?;
        self.output.flush()?;

        let mut buf = Vec::new();
        if self.input.read_until(b'\n', &mut buf)? == 0 {
            // Keep the transcript tidy when input ends mid-prompt
            writeln!(self.output)?;
            return Ok(None);
        }
        let line = String::from_utf8_lossy(&buf);
        Ok(Some(line.trim_end_matches(['\r', '\n']).to_string()))
    }

    pub fn into_output(self) -> W {
        self.output
    }

    fn paint(&self, text: String, tone: Tone) -> String {
        if !self.color {
            return text;
        }
        match tone {
            Tone::Plain => text,
            Tone::Heading => text.bold().to_string(),
            Tone::Good => text.green().to_string(),
            Tone::Bad => text.red().to_string(),
            Tone::Warning => text.yellow().to_string(),
        }
    }
}
