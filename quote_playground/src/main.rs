//! Quote Playground — shows one "random quote" screen built in the chosen
//! architecture pattern and lets the user tap its button from the terminal.
//!
//! Usage example (CLI):
//! ```bash
//! quote_playground --pattern viper --seed 7
//! quote_playground --pattern mvvm --quotes ./quotes.txt
//! quote_playground --list
//! ```
//!
//! Each empty line (or `tap`) taps the "Show Quotes" button; `q` or end of
//! input dismisses the screen and exits. The quotes file, if given, replaces
//! the built-in list; see `quote_common::source` for the formats.
#![warn(missing_docs)]
mod args;
mod terminal;

use crate::args::Args;
use crate::terminal::{TerminalHost, run_session};
use clap::Parser;
use log::{error, info, warn};
use quote_common::random::quote_rng;
use quote_common::source::load_quotes_file;
use quote_common::{BuiltinQuotes, DisplayHost, PlaygroundError, QuoteSource, Result, Screen};
use quote_patterns::viper::ViperQuoteRouter;
use quote_patterns::{Pattern, mvc, mvp, mvvm};
use std::cell::RefCell;
use std::io::{self, BufRead, Write};
use std::path::PathBuf;
use std::rc::Rc;

fn main() -> Result<(), PlaygroundError> {
    init_logger();
    let args = Args::parse();

    if args.list {
        print_patterns();
        return Ok(());
    }

    let source = quote_source(args.quotes.as_deref())?;
    let host = Rc::new(RefCell::new(TerminalHost::new(io::stdout())));
    info!("Starting {} playground", args.pattern);

    let rng = quote_rng(args.seed);
    let taps = match args.pattern {
        Pattern::Viper => {
            let mut router = ViperQuoteRouter::new(host.clone(), source, args.seed);
            run_routed(&mut router, io::stdin().lock(), &host)?
        }
        Pattern::Mvc => run_hosted(io::stdin().lock(), &host, mvc::assemble(source, rng))?,
        Pattern::Mvp => run_hosted(io::stdin().lock(), &host, mvp::assemble(source.as_ref(), rng))?,
        Pattern::Mvvm => run_hosted(io::stdin().lock(), &host, mvvm::assemble(source.as_ref(), rng))?,
    };

    info!("Session finished after {} tap(s)", taps);
    Ok(())
}

/// Presents the VIPER screen through its router and runs the session.
///
/// The screen is dismissed even when the session fails; the session error is
/// reported first.
fn run_routed<R: BufRead, W: Write>(
    router: &mut ViperQuoteRouter,
    input: R,
    host: &Rc<RefCell<TerminalHost<W>>>,
) -> Result<usize> {
    router.present_screen(None)?;
    let session = run_session(input, host);
    if let Err(e) = &session {
        error!("VIPER session failed: {}", e);
    }
    let dismissed = router.dismiss_screen();
    let taps = session?;
    dismissed?;
    Ok(taps)
}

/// Shows a screen that has no router of its own, runs the session, then
/// dismisses it whether or not the session succeeded.
fn run_hosted<R: BufRead, W: Write>(
    input: R,
    host: &Rc<RefCell<TerminalHost<W>>>,
    screen: Rc<dyn Screen>,
) -> Result<usize> {
    host.borrow_mut().show(Rc::clone(&screen))?;
    let session = run_session(input, host);
    let dismissed = host.borrow_mut().dismiss(&screen);
    if let Err(e) = &session {
        error!("Session on {} failed: {}", screen.title(), e);
    }
    let taps = session?;
    dismissed?;
    Ok(taps)
}

fn quote_source(path: Option<&str>) -> Result<Rc<dyn QuoteSource>> {
    match path {
        Some(raw) => {
            let quotes = load_quotes_file(&normalize_path(raw))?;
            if quotes.is_empty() {
                warn!("Quotes file is empty; the button will not show anything");
            }
            Ok(Rc::new(quotes))
        }
        None => Ok(Rc::new(BuiltinQuotes)),
    }
}

fn print_patterns() {
    for pattern in Pattern::all() {
        println!("{:<6} {}", pattern, pattern.long_name());
        println!("       {}", pattern.description());
    }
}

/// Logs at `Info` unless `RUST_LOG` says otherwise.
fn init_logger() {
    env_logger::Builder::new()
        .filter_level(log::LevelFilter::Info)
        .parse_default_env()
        .init();
}

/// Turns the `--quotes` argument into a path. Surrounding whitespace and one
/// pair of enclosing double quotes are stripped.
fn normalize_path(raw: &str) -> PathBuf {
    let trimmed = raw.trim();
    let no_quotes = trimmed
        .strip_prefix('"')
        .and_then(|s| s.strip_suffix('"'))
        .unwrap_or(trimmed);
    PathBuf::from(no_quotes)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::{BufReader, Read};

    struct BrokenInput;

    impl Read for BrokenInput {
        fn read(&mut self, _buf: &mut [u8]) -> io::Result<usize> {
            Err(io::Error::other("stdin closed unexpectedly"))
        }
    }

    fn terminal() -> Rc<RefCell<TerminalHost<Vec<u8>>>> {
        Rc::new(RefCell::new(TerminalHost::new(Vec::new())))
    }

    #[test]
    fn routed_session_error_still_dismisses() {
        let host = terminal();
        let mut router = ViperQuoteRouter::new(host.clone(), Rc::new(BuiltinQuotes), Some(3));

        let result = run_routed(&mut router, BufReader::new(BrokenInput), &host);

        assert!(matches!(result, Err(PlaygroundError::Io(_))));
        assert!(host.borrow().top().is_none());
        assert_eq!(router.presented_count(), 0);
    }

    #[test]
    fn hosted_session_error_still_dismisses() {
        let host = terminal();
        let screen = mvc::assemble(Rc::new(BuiltinQuotes), quote_rng(Some(3)));

        let result = run_hosted(BufReader::new(BrokenInput), &host, screen.clone());

        assert!(matches!(result, Err(PlaygroundError::Io(_))));
        assert!(host.borrow().top().is_none());
    }

    #[test]
    fn hosted_session_counts_taps() {
        let host = terminal();
        let screen = mvc::assemble(Rc::new(BuiltinQuotes), quote_rng(Some(3)));

        let taps = run_hosted(io::Cursor::new("\ntap\nq\n"), &host, screen).unwrap();

        assert_eq!(taps, 2);
        assert!(host.borrow().top().is_none());
    }

    #[test]
    fn normalize_strips_matching_quotes() {
        assert_eq!(normalize_path("  \"C:\\quotes.txt\" "), PathBuf::from("C:\\quotes.txt"));
        assert_eq!(normalize_path("quotes.json"), PathBuf::from("quotes.json"));
        assert_eq!(normalize_path("\"unbalanced"), PathBuf::from("\"unbalanced"));
    }

    #[test]
    fn builtin_source_without_path() {
        assert_eq!(quote_source(None).unwrap().quotes().len(), 13);
    }

    #[test]
    fn missing_quotes_file_is_an_error() {
        assert!(matches!(
            quote_source(Some("/no/such/quotes.txt")),
            Err(PlaygroundError::QuotesFileNotFound(_))
        ));
    }
}
