//! Quote sources and quote-file parsing.
//!
//! A `QuoteSource` supplies the ordered list of quotes a screen loads. The
//! playground ships with `BuiltinQuotes`; a file given on the command line can
//! replace it. Quote files are either JSON (an array of `{"text", "source"}`
//! objects) or plain text with one `<text> -<source>` entry per line.
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use log::{debug, info};

use crate::error::PlaygroundError;
use crate::quote::Quote;

/// Separator between text and source in the line format.
pub const SOURCE_SEPARATOR: &str = " -";

/// Supplies the quotes loaded by a screen.
///
/// Implementations return the full collection every time they are asked, in
/// a fixed order, so loading twice yields the same collection.
pub trait QuoteSource {
    /// Returns the ordered quote list.
    fn quotes(&self) -> Vec<Quote>;
}

/// The fixed list of quotes the playground ships with.
#[derive(Debug, Clone, Copy, Default)]
pub struct BuiltinQuotes;

const BUILTIN: [(&str, &str); 13] = [
    ("It’s not my fault.", "Han Solo"),
    ("Your focus determines your reality.", "Qui-Gon Jinn"),
    ("Do. Or do not. There is no try.", "Yoda"),
    ("Somebody has to save our skins.", "Leia Organa"),
    ("In my experience there is no such thing as luck.", "Obi-Wan Kenobi"),
    ("I find your lack of faith disturbing.", "Darth Vader"),
    ("I’ve got a bad feeling about this.", "Luke Skywalker"),
    ("It’s a trap!", "Admiral Ackbar"),
    ("So this is how liberty dies…with thunderous applause.", "Padmé Amidala"),
    ("Your eyes can deceive you. Don’t trust them.", "Obi-Wan Kenobi"),
    ("Never tell me the odds.", "Han Solo"),
    ("Great, kid. Don’t get cocky.", "Han Solo"),
    ("Stay on target.", "Gold Five"),
];

impl QuoteSource for BuiltinQuotes {
    fn quotes(&self) -> Vec<Quote> {
        BUILTIN
            .iter()
            .map(|(text, source)| Quote::new(*text, *source))
            .collect()
    }
}

impl QuoteSource for Vec<Quote> {
    fn quotes(&self) -> Vec<Quote> {
        self.clone()
    }
}

/// Trait providing file parsing for quotes.
pub trait QuoteParser {
    /// Parses quotes in the line format from a buffered reader.
    ///
    /// Each non-empty line is split at the last `" -"` into text and source.
    /// Returns an error naming the line if a line has no separator or an
    /// empty side.
    fn parse_lines<R: BufRead>(reader: R) -> Result<Vec<Quote>, PlaygroundError>;

    /// Parses a JSON array of quotes from a buffered reader.
    fn parse_json<R: BufRead>(reader: R) -> Result<Vec<Quote>, PlaygroundError>;
}

impl QuoteParser for Quote {
    fn parse_lines<R: BufRead>(reader: R) -> Result<Vec<Self>, PlaygroundError> {
        let mut quotes = Vec::new();

        for (index, line_result) in reader.lines().enumerate() {
            let line = line_result.map_err(PlaygroundError::Io)?;
            let trimmed_line = line.trim();
            if trimmed_line.is_empty() {
                continue;
            }

            match trimmed_line.rsplit_once(SOURCE_SEPARATOR) {
                Some((text, source)) if !text.trim().is_empty() && !source.trim().is_empty() => {
                    quotes.push(Quote::new(text.trim(), source.trim()));
                }
                _ => {
                    return Err(PlaygroundError::ParseQuotesFile {
                        line: index + 1,
                        reason: format!("expected `<text>{}<source>`, got `{}`", SOURCE_SEPARATOR, trimmed_line),
                    });
                }
            }
        }
        Ok(quotes)
    }

    fn parse_json<R: BufRead>(reader: R) -> Result<Vec<Self>, PlaygroundError> {
        let quotes: Vec<Quote> = serde_json::from_reader(reader)?;
        Ok(quotes)
    }
}

/// Loads a quotes file, choosing the format by extension (`.json` or text).
pub fn load_quotes_file(path: &Path) -> Result<Vec<Quote>, PlaygroundError> {
    if !path.is_file() {
        return Err(PlaygroundError::QuotesFileNotFound(path.display().to_string()));
    }
    let reader = BufReader::new(File::open(path)?);
    let is_json = path
        .extension()
        .is_some_and(|ext| ext.eq_ignore_ascii_case("json"));
    debug!("Parsing quotes file {} (json: {})", path.display(), is_json);

    let quotes = if is_json {
        Quote::parse_json(reader)?
    } else {
        Quote::parse_lines(reader)?
    };
    info!("Loaded {} quotes from {}", quotes.len(), path.display());
    Ok(quotes)
}
