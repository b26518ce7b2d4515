//! Line-oriented terminal used by every interactive step of the game.
//!
//! The game never touches stdin/stdout directly. It talks to a [`Terminal`],
//! which lets the binary use the real console while tests drive a session from
//! an in-memory script and inspect the narration afterwards.

use std::io::{self, BufRead, StdinLock, Stdout, Write};

use log::{debug, trace};

use super::art::Banner;
use super::error::GameError;
use crate::logutil::quote_input;

/// A prompt/response channel to the player.
pub trait Terminal {
    /// Print one line of narration.
    fn say(&mut self, text: &str) -> Result<(), GameError>;

    /// Show `prompt` and block until the player answers with a line.
    ///
    /// The returned line has its line terminator removed but is otherwise raw;
    /// each call site normalizes it the way its own matching rule requires.
    fn ask(&mut self, prompt: &str) -> Result<String, GameError>;

    /// Render a decorative banner. Callers never depend on what it prints.
    fn banner(&mut self, banner: Banner) -> Result<(), GameError>;
}

/// [`Terminal`] over any buffered reader and writer.
pub struct Console<R, W> {
    input: R,
    output: W,
    show_art: bool,
}

/// The console wired to the process's standard streams.
pub type StdConsole = Console<StdinLock<'static>, Stdout>;

impl StdConsole {
    pub fn stdio() -> Self {
        Console::new(io::stdin().lock(), io::stdout())
    }
}

impl<R: BufRead, W: Write> Console<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Console {
            input,
            output,
            show_art: true,
        }
    }

    /// Enable or disable banner rendering.
    pub fn with_art(mut self, show_art: bool) -> Self {
        self.show_art = show_art;
        self
    }

    /// Consume the console and hand back the writer (used by tests to read the transcript).
    pub fn into_output(self) -> W {
        self.output
    }
}

impl<R: BufRead, W: Write> Terminal for Console<R, W> {
    fn say(&mut self, text: &str) -> Result<(), GameError> {
        writeln!(self.output, "{}", text)?;
        Ok(())
    }

    fn ask(&mut self, prompt: &str) -> Result<String, GameError> {
        write!(self.output, "{}", prompt)?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            debug!("input closed at prompt {}", quote_input(prompt));
            return Err(GameError::InputClosed);
        }
        while line.ends_with('\n') || line.ends_with('\r') {
            line.pop();
        }
        debug!("answer {} to prompt {}", quote_input(&line), quote_input(prompt));
        Ok(line)
    }

    fn banner(&mut self, banner: Banner) -> Result<(), GameError> {
        if !self.show_art {
            trace!("banner {:?} suppressed", banner);
            return Ok(());
        }
        writeln!(self.output)?;
        writeln!(self.output, "{}", banner.art())?;
        writeln!(self.output)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    #[test]
    fn ask_strips_line_endings_only() {
        let mut console = Console::new(Cursor::new("  Rock \r\n".as_bytes()), Vec::new());
        let answer = console.ask("> ").unwrap();
        assert_eq!(answer, "  Rock ");
    }

    #[test]
    fn ask_reports_closed_input() {
        let mut console = Console::new(Cursor::new("".as_bytes()), Vec::new());
        let err = console.ask("> ").unwrap_err();
        assert!(matches!(err, GameError::InputClosed));
    }

    #[test]
    fn banners_can_be_suppressed() {
        let mut console = Console::new(Cursor::new("".as_bytes()), Vec::new()).with_art(false);
        console.banner(Banner::GameOver).unwrap();
        console.say("after").unwrap();
        let out = String::from_utf8(console.into_output()).unwrap();
        assert_eq!(out, "after\n");
    }
}
