//! Terminal display host and the interactive session loop.
//!
//! `TerminalHost` keeps displayed screens on a `NavigationStack` and draws the
//! top one as plain text. `run_session` reads commands line by line and turns
//! them into button taps on the displayed screen.
use std::cell::RefCell;
use std::io::{BufRead, Write};
use std::rc::Rc;

use log::{debug, info, warn};
use quote_common::{DisplayHost, NavigationStack, Result, Screen};

/// Prompt printed under every drawn screen.
pub const PROMPT: &str = "[Enter] tap button, [q] quit";

/// `DisplayHost` drawing screens to a text writer.
pub struct TerminalHost<W: Write> {
    stack: NavigationStack,
    out: W,
}

impl<W: Write> TerminalHost<W> {
    /// Creates a host writing to `out`.
    pub fn new(out: W) -> Self {
        Self {
            stack: NavigationStack::new(),
            out,
        }
    }

    /// Screen currently on top.
    pub fn top(&self) -> Option<Rc<dyn Screen>> {
        self.stack.top()
    }

    /// Draws the top screen's label and button.
    pub fn draw(&mut self) -> Result<()> {
        let Some(screen) = self.stack.top() else {
            writeln!(self.out, "(nothing displayed)")?;
            return Ok(());
        };
        let label = screen.label_text();
        if label.is_empty() {
            writeln!(self.out, "  ...")?;
        } else {
            writeln!(self.out, "  {}", label)?;
        }
        writeln!(self.out, "  <{}>  {}", screen.button_title(), PROMPT)?;
        self.out.flush()?;
        Ok(())
    }

    /// Gives back the writer.
    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write> DisplayHost for TerminalHost<W> {
    fn show(&mut self, screen: Rc<dyn Screen>) -> Result<()> {
        writeln!(self.out, "== {} ==", screen.title())?;
        self.stack.show(screen)?;
        self.draw()
    }

    fn dismiss(&mut self, screen: &Rc<dyn Screen>) -> Result<bool> {
        let removed = self.stack.dismiss(screen)?;
        if removed {
            writeln!(self.out, "== {} dismissed ==", screen.title())?;
            self.out.flush()?;
        }
        Ok(removed)
    }
}

/// A line of user input.
#[derive(Debug, PartialEq, Eq)]
pub enum SessionCommand {
    /// Tap the button.
    Tap,
    /// Leave the session.
    Quit,
    /// Anything else.
    Unknown(String),
}

impl SessionCommand {
    /// Interprets one input line.
    pub fn parse(line: &str) -> Self {
        match line.trim().to_ascii_lowercase().as_str() {
            "" | "t" | "tap" => SessionCommand::Tap,
            "q" | "quit" | "exit" => SessionCommand::Quit,
            other => SessionCommand::Unknown(other.to_string()),
        }
    }
}

/// Runs the session until the user quits or input ends. Returns the number of taps.
pub fn run_session<R: BufRead, W: Write>(input: R, host: &Rc<RefCell<TerminalHost<W>>>) -> Result<usize> {
    let mut taps = 0;
    for line in input.lines() {
        match SessionCommand::parse(&line?) {
            SessionCommand::Tap => {
                let screen = host.borrow().top();
                match screen {
                    Some(screen) => {
                        screen.did_tap_button();
                        taps += 1;
                        debug!("Tap #{} on {}", taps, screen.title());
                    }
                    None => warn!("Tap ignored: nothing displayed"),
                }
                host.borrow_mut().draw()?;
            }
            SessionCommand::Quit => {
                info!("Quit requested");
                return Ok(taps);
            }
            SessionCommand::Unknown(command) => {
                warn!("Unknown command: {}", command);
            }
        }
    }
    info!("Input closed");
    Ok(taps)
}
