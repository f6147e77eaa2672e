use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};

/// Search, highlight, and copy text from laid-out document pages.
#[derive(Debug, Parser)]
#[command(name = "textsel", about, version)]
pub struct Cli {
    /// Log query details to stderr (set RUST_LOG for finer control)
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

/// Available subcommands.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Find a needle and print its hit rectangles
    Search {
        /// Path to the document JSON file
        #[arg(value_name = "FILE")]
        file: PathBuf,

        /// Text to find (ASCII case-insensitive; a space matches a run of spaces)
        #[arg(value_name = "NEEDLE")]
        needle: String,

        /// Page range (e.g. '1,3-5'). Default: all pages
        #[arg(long)]
        pages: Option<String>,

        /// Maximum number of rectangles per page
        #[arg(long, default_value_t = 500)]
        max_hits: usize,

        /// Output format
        #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
        format: OutputFormat,
    },

    /// Print highlight rectangles for a selection rectangle
    Highlight {
        /// Path to the document JSON file
        #[arg(value_name = "FILE")]
        file: PathBuf,

        /// Selection rectangle as 'x0,top,x1,bottom'
        #[arg(long, allow_hyphen_values = true)]
        rect: String,

        /// Page range (e.g. '1,3-5'). Default: all pages
        #[arg(long)]
        pages: Option<String>,

        /// Maximum number of rectangles per page
        #[arg(long, default_value_t = 500)]
        max_hits: usize,

        /// Output format
        #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
        format: OutputFormat,
    },

    /// Print the text under a selection rectangle
    Copy {
        /// Path to the document JSON file
        #[arg(value_name = "FILE")]
        file: PathBuf,

        /// Selection rectangle as 'x0,top,x1,bottom'. Default: whole page
        #[arg(long, allow_hyphen_values = true)]
        rect: Option<String>,

        /// Page range (e.g. '1,3-5'). Default: all pages
        #[arg(long)]
        pages: Option<String>,

        /// Output format
        #[arg(long, value_enum, default_value_t = TextFormat::Text)]
        format: TextFormat,
    },

    /// Display page, line, and character counts
    Info {
        /// Path to the document JSON file
        #[arg(value_name = "FILE")]
        file: PathBuf,

        /// Output format
        #[arg(long, value_enum, default_value_t = TextFormat::Text)]
        format: TextFormat,
    },
}

/// Output format for rectangle-producing subcommands.
#[derive(Debug, Clone, ValueEnum)]
pub enum OutputFormat {
    /// Plain text (tab-separated)
    Text,
    /// JSON output
    Json,
    /// CSV output
    Csv,
}

/// Output format for text-producing subcommands.
#[derive(Debug, Clone, ValueEnum)]
pub enum TextFormat {
    /// Plain text
    Text,
    /// JSON output
    Json,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn parse_search_defaults() {
        let cli = Cli::parse_from(["textsel", "search", "doc.json", "hello world"]);
        assert!(!cli.verbose);
        match cli.command {
            Commands::Search {
                ref file,
                ref needle,
                ref pages,
                max_hits,
                ref format,
            } => {
                assert_eq!(file, &PathBuf::from("doc.json"));
                assert_eq!(needle, "hello world");
                assert!(pages.is_none());
                assert_eq!(max_hits, 500);
                assert!(matches!(format, OutputFormat::Text));
            }
            _ => panic!("expected Search command"),
        }
    }

    #[test]
    fn parse_highlight_with_negative_rect() {
        let cli = Cli::parse_from([
            "textsel",
            "highlight",
            "doc.json",
            "--rect",
            "-5,0,100,20",
            "--format",
            "json",
            "--verbose",
        ]);
        assert!(cli.verbose);
        match cli.command {
            Commands::Highlight {
                ref rect,
                ref format,
                ..
            } => {
                assert_eq!(rect, "-5,0,100,20");
                assert!(matches!(format, OutputFormat::Json));
            }
            _ => panic!("expected Highlight command"),
        }
    }

    #[test]
    fn parse_copy_without_rect() {
        let cli = Cli::parse_from(["textsel", "copy", "doc.json", "--pages", "2"]);
        match cli.command {
            Commands::Copy {
                ref rect,
                ref pages,
                ..
            } => {
                assert!(rect.is_none());
                assert_eq!(pages.as_deref(), Some("2"));
            }
            _ => panic!("expected Copy command"),
        }
    }

    #[test]
    fn highlight_requires_rect() {
        let result = Cli::try_parse_from(["textsel", "highlight", "doc.json"]);
        assert!(result.is_err());
    }
}
