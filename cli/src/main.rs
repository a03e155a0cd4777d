use std::fs;
use std::io::{self, IsTerminal, Read};
use std::path::{Path, PathBuf};
use std::process;

use clap::{Parser, ValueEnum};
use glint::diagnostics::{coverage, source_map::SourceMap};
use glint::errors::GlintError;
use glint::render::{self, RenderOptions};
use glint::{Language, Token};
use owo_colors::OwoColorize;
use tracing::{Level, debug};
use tracing_subscriber::EnvFilter;

mod highlighter;

#[derive(Parser)]
#[command(name = "glint", about = "Tokenize and highlight source code")]
struct Cli {
    /// File to highlight; reads stdin when omitted or `-`
    file: Option<PathBuf>,
    /// Highlight inline source instead of a file
    #[arg(long, conflicts_with = "file")]
    eval: Option<String>,
    /// Language id (python, javascript, js, html, css); detected from the
    /// file extension otherwise
    #[arg(short, long)]
    language: Option<String>,
    /// Output format
    #[arg(short, long, value_enum, default_value_t = Format::Ansi)]
    format: Format,
    /// Class name prefix for HTML spans
    #[arg(long, default_value = "token-")]
    class_prefix: String,
    /// Verify that the tokens cover the input exactly
    #[arg(long)]
    check: bool,
    /// Disable terminal colors
    #[arg(long)]
    no_color: bool,
    /// Enable debug logging
    #[arg(short, long)]
    verbose: bool,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
enum Format {
    /// Colored terminal output
    Ansi,
    /// `<span>` markup
    Html,
    /// One token per line with its position
    Tokens,
    /// JSON token array
    Json,
}

fn main() {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    if let Err(err) = run(&cli) {
        eprintln!("{} {:?}", "error:".red().bold(), miette::Report::new(err));
        process::exit(1);
    }
}

fn init_tracing(verbose: bool) {
    let level = if verbose { Level::DEBUG } else { Level::WARN };
    tracing_subscriber::fmt()
        .with_writer(io::stderr)
        .with_env_filter(EnvFilter::from_default_env().add_directive(level.into()))
        .init();
}

fn run(cli: &Cli) -> Result<(), GlintError> {
    let source = read_source(cli)?;
    let language = resolve_language(cli.language.as_deref(), cli.file.as_deref());
    debug!(language = language.id(), "resolved language");

    let tokens = glint::lexer::tokenize(&source, language);
    if cli.check {
        coverage::check(&source, &tokens)?;
        debug!(tokens = tokens.len(), "coverage check passed");
    }

    match cli.format {
        Format::Ansi => {
            if cli.no_color || !io::stdout().is_terminal() {
                print!("{source}");
            } else {
                print!("{}", highlighter::highlight(&tokens));
            }
        }
        Format::Html => {
            let options = RenderOptions {
                class_prefix: cli.class_prefix.clone(),
            };
            println!("{}", render::html::render(&tokens, &options));
        }
        Format::Tokens => print_tokens(&source, &tokens, !cli.no_color),
        Format::Json => println!("{}", render::json::render(&tokens)?),
    }
    Ok(())
}

fn read_source(cli: &Cli) -> Result<String, GlintError> {
    if let Some(code) = &cli.eval {
        return Ok(code.clone());
    }
    match cli.file.as_deref() {
        Some(path) if path != Path::new("-") => {
            fs::read_to_string(path).map_err(|source| GlintError::Io {
                path: path.to_path_buf(),
                source,
            })
        }
        _ => {
            let mut buf = String::new();
            io::stdin()
                .read_to_string(&mut buf)
                .map_err(|source| GlintError::Io {
                    path: PathBuf::from("<stdin>"),
                    source,
                })?;
            Ok(buf)
        }
    }
}

/// An explicit id wins; otherwise the extension decides, falling back to the
/// default language like the editor does.
fn resolve_language(id: Option<&str>, path: Option<&Path>) -> Language {
    match id {
        Some(id) => Language::from_id(id),
        None => path.and_then(Language::from_path).unwrap_or_default(),
    }
}

fn print_tokens(source: &str, tokens: &[Token<'_>], color: bool) {
    let map = SourceMap::from_source(source);
    for token in tokens {
        let pos = map.byte_to_pos(token.start());
        let location = format!("{}:{}", pos.line, pos.col);
        if color {
            println!(
                "{:>8} {:<10} {:?}",
                location.bright_black(),
                token.kind.cyan(),
                token.value
            );
        } else {
            println!("{location:>8} {:<10} {:?}", token.kind, token.value);
        }
    }
}
