//! Command-line arguments for the Quote Playground.
//!
//! This module defines the CLI interface using `clap`. See `main` for end-to-end usage.
use clap::Parser;
use quote_patterns::Pattern;

/// Parsed command-line arguments.
#[derive(Debug, Parser)]
#[command(version, about, long_about = None)]
pub struct Args {
    /// Architecture pattern used to assemble the quote screen.
    #[clap(long, value_enum, default_value_t = Pattern::Viper)]
    pub pattern: Pattern,

    /// Path to a quotes file replacing the built-in list.
    /// `.json` files hold an array of {"text", "source"} objects; any other file
    /// holds one `<text> -<source>` entry per line.
    #[clap(long)]
    pub quotes: Option<String>,

    /// Seed for a repeatable quote sequence.
    #[clap(long)]
    pub seed: Option<u64>,

    /// Print the available patterns and exit.
    #[clap(long)]
    pub list: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_to_viper() {
        let args = Args::try_parse_from(["quote_playground"]).unwrap();
        assert_eq!(args.pattern, Pattern::Viper);
        assert!(args.quotes.is_none());
        assert!(args.seed.is_none());
        assert!(!args.list);
    }

    #[test]
    fn parses_all_flags() {
        let args = Args::try_parse_from([
            "quote_playground",
            "--pattern",
            "mvvm",
            "--quotes",
            "quotes.json",
            "--seed",
            "42",
        ])
        .unwrap();
        assert_eq!(args.pattern, Pattern::Mvvm);
        assert_eq!(args.quotes.as_deref(), Some("quotes.json"));
        assert_eq!(args.seed, Some(42));
    }

    #[test]
    fn rejects_unknown_pattern() {
        assert!(Args::try_parse_from(["quote_playground", "--pattern", "mvi"]).is_err());
    }
}
