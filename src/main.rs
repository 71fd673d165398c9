// Module-specific lints configuration
#![allow(clippy::uninlined_format_args)]

use anyhow::{Context, Result};
use clap::{Args, CommandFactory, Parser, Subcommand, ValueEnum};
use clap_complete::{Shell, generate};
use log::{Level, LevelFilter, Log, Metadata, Record, SetLoggerError, debug};
use std::io::{Read, Write};
use std::path::{Path, PathBuf};

use snipmark::app_config::{Config, LogLevel};
use snipmark::highlight::fragment::DEFAULT_KEYWORD_PARAM;
use snipmark::{Highlighter, keywords_from_fragment, split_terms};

/// CLI Wrapper for LogLevel to implement ValueEnum
#[derive(Debug, Clone, ValueEnum)]
enum CliLogLevel {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

impl From<CliLogLevel> for LogLevel {
    fn from(cli_level: CliLogLevel) -> Self {
        match cli_level {
            CliLogLevel::Error => LogLevel::Error,
            CliLogLevel::Warn => LogLevel::Warn,
            CliLogLevel::Info => LogLevel::Info,
            CliLogLevel::Debug => LogLevel::Debug,
            CliLogLevel::Trace => LogLevel::Trace,
        }
    }
}

/// Where keywords come from
#[derive(Args, Debug, Clone)]
struct KeywordArgs {
    /// Keyword(s); each may hold several terms separated by commas or spaces
    #[arg(short, long = "keyword", value_name = "KEYWORD")]
    keywords: Vec<String>,

    /// URL or fragment carrying keywords (e.g. '#kw=apple,pie')
    #[arg(long)]
    fragment: Option<String>,

    /// Fragment parameter holding keywords
    #[arg(long, default_value = DEFAULT_KEYWORD_PARAM)]
    param: String,
}

impl KeywordArgs {
    fn collect(&self) -> Vec<String> {
        let mut keywords = self.keywords.clone();
        if let Some(fragment) = &self.fragment {
            keywords.extend(keywords_from_fragment(fragment, &self.param));
        }
        keywords
    }
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Mark every keyword occurrence in the whole document
    Highlight {
        /// Input file, or '-' for stdin
        #[arg(value_name = "INPUT", default_value = "-")]
        input: PathBuf,

        #[command(flatten)]
        keywords: KeywordArgs,

        /// Print the number of matches to stderr
        #[arg(long)]
        stats: bool,
    },

    /// Cut a snippet around the first match and mark keywords in it
    Snippet {
        /// Input file, or '-' for stdin
        #[arg(value_name = "INPUT", default_value = "-")]
        input: PathBuf,

        #[command(flatten)]
        keywords: KeywordArgs,

        /// Use the expanded ("read more") window
        #[arg(short, long)]
        expanded: bool,

        /// Print the number of matches to stderr
        #[arg(long)]
        stats: bool,
    },

    /// Show the atomic terms keywords resolve to
    Terms {
        #[command(flatten)]
        keywords: KeywordArgs,
    },

    /// Generate shell completions for snipmark
    Completions {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },
}

/// snipmark - keyword highlighting and snippet previews
///
/// Reads HTML or plain text, wraps keyword matches in marker elements and
/// optionally cuts a preview window around the first match.
#[derive(Parser, Debug)]
#[command(name = "snipmark")]
#[command(version)]
#[command(about = "Keyword highlighting and snippet previews")]
#[command(long_about = "snipmark highlights keywords in HTML or plain text content.

EXAMPLES:
    snipmark highlight page.html -k apple              # Mark all matches
    snipmark snippet page.html -k 'apple, pie'         # Two-paragraph preview
    snipmark snippet page.html -k apple --expanded     # Five-paragraph preview
    snipmark snippet page.html --fragment '#kw=apple'  # Keywords from a URL fragment
    cat page.html | snipmark highlight -k apple        # Read from stdin
    snipmark terms -k '苦 乐, 因果'                       # Show atomic terms
    snipmark completions bash > snipmark.bash          # Generate bash completions

CONFIGURATION:
    Configuration is read from --config-path, else snipmark.json in the working
    directory, else the per-user config file. Defaults are used otherwise.")]
struct CommandLineOptions {
    #[command(subcommand)]
    command: Commands,

    /// Configuration file path
    #[arg(short, long, global = true)]
    config_path: Option<PathBuf>,

    /// Set logging level
    #[arg(short, long, value_enum, global = true)]
    log_level: Option<CliLogLevel>,
}

// @struct: Custom logger implementation
struct CustomLogger {
    level: LevelFilter,
}

impl CustomLogger {
    // @creates: New logger with specified level
    fn new(level: LevelFilter) -> Self {
        CustomLogger { level }
    }

    // @initializes: Global logger
    fn init(level: LevelFilter) -> Result<(), SetLoggerError> {
        let logger = Box::new(CustomLogger::new(level));
        log::set_boxed_logger(logger)?;
        log::set_max_level(level);
        Ok(())
    }

    // @returns: ANSI colour and label for log level
    fn style_for_level(level: Level) -> (&'static str, &'static str) {
        match level {
            Level::Error => ("1;31", "ERROR"),
            Level::Warn => ("1;33", "WARN "),
            Level::Info => ("1;32", "INFO "),
            Level::Debug => ("1;36", "DEBUG"),
            Level::Trace => ("1;35", "TRACE"),
        }
    }
}

impl Log for CustomLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= self.level
    }

    fn log(&self, record: &Record) {
        if self.enabled(record.metadata()) {
            let now = chrono::Local::now().format("%H:%M:%S.%3f");
            let (colour, label) = Self::style_for_level(record.level());

            let mut stderr = std::io::stderr();
            let _ = writeln!(
                stderr,
                "\x1B[{}m{} {} {}\x1B[0m",
                colour, now, label, record.args()
            );
        }
    }

    fn flush(&self) {
        let _ = std::io::stderr().flush();
    }
}

fn read_input(input: &Path) -> Result<String> {
    if input.as_os_str() == "-" {
        let mut content = String::new();
        std::io::stdin()
            .read_to_string(&mut content)
            .context("Failed to read content from stdin")?;
        Ok(content)
    } else {
        std::fs::read_to_string(input)
            .context(format!("Failed to read input file: {}", input.display()))
    }
}

fn write_output(output: &str) -> Result<()> {
    let mut stdout = std::io::stdout().lock();
    stdout.write_all(output.as_bytes()).context("Failed to write output")?;
    stdout.flush().context("Failed to flush output")?;
    Ok(())
}

/// `--stats` line for the highlight command
fn highlight_stats(matches: usize) -> String {
    format!("{} matches", matches)
}

/// `--stats` line for the snippet command
fn snippet_stats(matches: usize, snippet_len: usize, content_len: usize) -> String {
    format!(
        "{} matches in document, snippet {} of {} bytes",
        matches, snippet_len, content_len
    )
}

fn main() -> Result<()> {
    // Logger starts permissive; the effective level is applied once config is known
    CustomLogger::init(LevelFilter::Trace)?;
    log::set_max_level(LevelFilter::Warn);

    let cli = CommandLineOptions::parse();

    if let Commands::Completions { shell } = cli.command {
        let mut cmd = CommandLineOptions::command();
        generate(shell, &mut cmd, "snipmark", &mut std::io::stdout());
        return Ok(());
    }

    let mut config = Config::resolve(cli.config_path.as_deref())?;
    if let Some(level) = cli.log_level {
        config.log_level = level.into();
    }
    log::set_max_level(config.log_level.to_level_filter());

    config.validate().context("Configuration validation failed")?;
    debug!("Using config: {:?}", config);

    let highlighter = Highlighter::new(&config.highlight);

    match cli.command {
        Commands::Highlight { input, keywords, stats } => {
            let content = read_input(&input)?;
            let keywords = keywords.collect();
            if stats {
                eprintln!("{}", highlight_stats(highlighter.count_matches(&content, &keywords)));
            }
            write_output(&highlighter.highlight_full(&content, &keywords))
        }
        Commands::Snippet { input, keywords, expanded, stats } => {
            let content = read_input(&input)?;
            let keywords = keywords.collect();
            let snippet = highlighter.highlight_snippet(&content, &keywords, expanded);
            if stats {
                eprintln!(
                    "{}",
                    snippet_stats(highlighter.count_matches(&content, &keywords), snippet.len(), content.len())
                );
            }
            write_output(&snippet)
        }
        Commands::Terms { keywords } => {
            for term in split_terms(&keywords.collect()) {
                println!("{}", term);
            }
            Ok(())
        }
        Commands::Completions { .. } => Ok(()),
    }
}
