//! sysfont CLI (made by FontLab https://www.fontlab.com/)

use std::io::{self, BufRead, IsTerminal, Write};
use std::path::{Path, PathBuf};

use anyhow::{anyhow, Context, Result};
use clap::{ArgAction, Args, Parser, Subcommand, ValueEnum, ValueHint};
use log::debug;
use rayon::prelude::*;
use rayon::ThreadPoolBuilder;
use regex::Regex;
use serde::Serialize;

use sysfont_core::discovery::default_font_dirs;
use sysfont_core::output::{write_json_pretty, write_ndjson};
use sysfont_core::{Finder, FinderOptions, Font};

/// CLI entrypoint for sysfont.
#[derive(Debug, Parser)]
#[command(
    name = "sysfont",
    about = "Find installed fonts and resolve font names (made by FontLab https://www.fontlab.com/)"
)]
pub struct Cli {
    /// Log discovery and matching decisions to stderr
    #[arg(long = "verbose", global = true, action = ArgAction::SetTrue)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// List installed fonts with their identified family and name
    List(ListArgs),
    /// Resolve font names to installed fonts or metric-compatible substitutes
    Match(MatchArgs),
    /// Show installed fonts that may stand in for a family
    Alternatives(AlternativesArgs),
}

#[derive(Debug, Args)]
struct SourceArgs {
    /// Font directories to search (default: platform font directories)
    #[arg(short = 'd', long = "dir", value_hint = ValueHint::DirPath)]
    dirs: Vec<PathBuf>,

    /// Read newline-delimited directories from STDIN
    #[arg(long = "stdin-paths", action = ArgAction::SetTrue)]
    stdin_paths: bool,

    /// Also search the platform font directories
    #[arg(long = "system-fonts", action = ArgAction::SetTrue)]
    system_fonts: bool,

    /// File extensions treated as fonts (default: .ttf,.ttc,.otf)
    #[arg(short = 'e', long = "ext", value_delimiter = ',', value_hint = ValueHint::Other)]
    extensions: Vec<String>,

    /// Follow symlinks while walking directories
    #[arg(long = "follow-symlinks", action = ArgAction::SetTrue)]
    follow_symlinks: bool,
}

#[derive(Debug, Args)]
struct OutputArgs {
    /// Emit a single JSON array
    #[arg(long = "json", action = ArgAction::SetTrue, conflicts_with = "ndjson")]
    json: bool,

    /// Emit newline-delimited JSON
    #[arg(long = "ndjson", action = ArgAction::SetTrue)]
    ndjson: bool,

    /// Format output as padded columns
    #[arg(long = "columns", action = ArgAction::SetTrue)]
    columns: bool,

    /// Control colorized output (auto|always|never)
    #[arg(long = "color", default_value_t = ColorChoice::Auto, value_enum)]
    color: ColorChoice,
}

#[derive(Debug, Args)]
struct ListArgs {
    #[command(flatten)]
    source: SourceArgs,

    /// Regex patterns that must match the family or name of listed fonts
    #[arg(short = 'n', long = "name", value_hint = ValueHint::Other)]
    name_patterns: Vec<String>,

    #[command(flatten)]
    output: OutputArgs,
}

#[derive(Debug, Args)]
struct MatchArgs {
    /// Font names to resolve, e.g. "Arial Bold"
    #[arg(required = true)]
    queries: Vec<String>,

    /// Worker threads used to resolve queries
    #[arg(short = 'j', long = "jobs")]
    jobs: Option<usize>,

    #[command(flatten)]
    source: SourceArgs,

    #[command(flatten)]
    output: OutputArgs,
}

#[derive(Debug, Args)]
struct AlternativesArgs {
    /// Family (or full font name) to find substitutes for
    family: String,

    #[command(flatten)]
    source: SourceArgs,

    #[command(flatten)]
    output: OutputArgs,
}

#[derive(Copy, Clone, Debug, Eq, PartialEq, ValueEnum)]
enum ColorChoice {
    Auto,
    Always,
    Never,
}

/// Resolution of one query, as reported by `sysfont match`.
#[derive(Debug, Clone, Serialize)]
struct MatchOutcome {
    query: String,
    font: Option<Font>,
}

/// Parse CLI args and execute the selected command.
pub fn run() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    match cli.command {
        Command::List(args) => run_list(args),
        Command::Match(args) => run_match(args),
        Command::Alternatives(args) => run_alternatives(args),
    }
}

fn init_logging(verbose: bool) {
    let default_filter = if verbose { "debug" } else { "warn" };
    let env = env_logger::Env::default().default_filter_or(default_filter);
    // A second init (e.g. from tests) keeps the first logger.
    let _ = env_logger::Builder::from_env(env).try_init();
}

fn run_list(args: ListArgs) -> Result<()> {
    let finder = build_finder(&args.source)?;
    let patterns = compile_patterns(&args.name_patterns)?;
    let fonts = filter_by_name(finder.list(), &patterns);

    let stdout = io::stdout();
    let mut handle = stdout.lock();
    let color = use_color(args.output.color, &handle);
    write_fonts(&fonts, &args.output, &mut handle, color)
}

fn run_match(args: MatchArgs) -> Result<()> {
    let finder = build_finder(&args.source)?;
    let outcomes = resolve_queries(&finder, &args.queries, args.jobs)?;

    let stdout = io::stdout();
    let mut handle = stdout.lock();
    let color = use_color(args.output.color, &handle);

    if args.output.ndjson {
        write_ndjson(&outcomes, &mut handle)?;
    } else if args.output.json {
        write_json_pretty(&outcomes, &mut handle)?;
    } else {
        write_outcomes(&outcomes, &mut handle, color)?;
    }

    Ok(())
}

fn run_alternatives(args: AlternativesArgs) -> Result<()> {
    let finder = build_finder(&args.source)?;
    let fonts = finder.alternatives(&args.family);

    let stdout = io::stdout();
    let mut handle = stdout.lock();
    let color = use_color(args.output.color, &handle);
    write_fonts(&fonts, &args.output, &mut handle, color)
}

fn use_color(choice: ColorChoice, handle: &impl IsTerminal) -> bool {
    match choice {
        ColorChoice::Always => true,
        ColorChoice::Never => false,
        ColorChoice::Auto => handle.is_terminal(),
    }
}

fn build_finder(source: &SourceArgs) -> Result<Finder<'static>> {
    let stdin = io::stdin();
    let dirs = gather_paths(
        &source.dirs,
        source.stdin_paths,
        source.system_fonts,
        stdin.lock(),
    )?;

    let mut opts = FinderOptions::new()
        .with_search_paths(dirs)
        .follow_symlinks(source.follow_symlinks);
    if !source.extensions.is_empty() {
        opts = opts.with_extensions(&source.extensions);
    }

    Ok(Finder::discover(&opts))
}

/// Resolve every query against `finder`, in input order.
fn resolve_queries(
    finder: &Finder<'_>,
    queries: &[String],
    jobs: Option<usize>,
) -> Result<Vec<MatchOutcome>> {
    let resolve = || -> Vec<MatchOutcome> {
        queries
            .par_iter()
            .map(|query| MatchOutcome {
                query: query.clone(),
                font: finder.match_query(query),
            })
            .collect()
    };

    if let Some(jobs) = jobs {
        let pool = ThreadPoolBuilder::new()
            .num_threads(jobs)
            .build()
            .context("building match thread pool")?;
        Ok(pool.install(resolve))
    } else {
        Ok(resolve())
    }
}

fn compile_patterns(patterns: &[String]) -> Result<Vec<Regex>> {
    patterns
        .iter()
        .map(|p| Regex::new(p).with_context(|| format!("invalid regex: {p}")))
        .collect()
}

fn filter_by_name(fonts: Vec<Font>, patterns: &[Regex]) -> Vec<Font> {
    if patterns.is_empty() {
        return fonts;
    }

    fonts
        .into_iter()
        .filter(|font| {
            patterns
                .iter()
                .any(|re| re.is_match(&font.family) || re.is_match(&font.name))
        })
        .collect()
}

fn gather_paths(
    raw_paths: &[PathBuf],
    read_stdin: bool,
    include_system: bool,
    mut stdin: impl BufRead,
) -> Result<Vec<PathBuf>> {
    let mut paths = Vec::new();

    if read_stdin {
        paths.extend(read_paths_from(&mut stdin)?);
    }

    for path in raw_paths {
        if path == Path::new("-") {
            paths.extend(read_paths_from(&mut stdin)?);
        } else {
            paths.push(path.clone());
        }
    }

    if include_system || paths.is_empty() {
        let system = default_font_dirs();
        debug!("platform font directories: {system:?}");
        paths.extend(system);
    }

    if paths.is_empty() {
        return Err(anyhow!("no font directories found for this platform"));
    }

    Ok(paths)
}

fn read_paths_from(reader: &mut impl BufRead) -> Result<Vec<PathBuf>> {
    let mut buf = String::new();
    let mut paths = Vec::new();

    loop {
        buf.clear();
        let read = reader.read_line(&mut buf)?;
        if read == 0 {
            break;
        }

        let trimmed = buf.trim();
        if !trimmed.is_empty() {
            paths.push(PathBuf::from(trimmed));
        }
    }

    Ok(paths)
}

fn write_fonts(fonts: &[Font], output: &OutputArgs, w: impl Write, color: bool) -> Result<()> {
    if output.ndjson {
        write_ndjson(fonts, w)
    } else if output.json {
        write_json_pretty(fonts, w)
    } else if output.columns {
        write_columns(fonts, w, color)
    } else {
        write_plain(fonts, w, color)
    }
}

fn display_name(font: &Font) -> &str {
    if font.is_identified() {
        &font.name
    } else {
        "(unidentified)"
    }
}

fn write_plain(fonts: &[Font], mut w: impl Write, color: bool) -> Result<()> {
    for font in fonts {
        let path = apply_color(&font.filename.display().to_string(), color, AnsiColor::Cyan);
        writeln!(w, "{}\t{}\t{path}", font.family, display_name(font))?;
    }
    Ok(())
}

fn write_columns(fonts: &[Font], mut w: impl Write, color: bool) -> Result<()> {
    let family_width = fonts
        .iter()
        .map(|f| f.family.chars().count())
        .max()
        .unwrap_or(0)
        .clamp(0, 60);
    let name_width = fonts
        .iter()
        .map(|f| display_name(f).chars().count())
        .max()
        .unwrap_or(0)
        .clamp(0, 80);

    for font in fonts {
        let padded_family = format!("{:<family_width$}", font.family);
        let padded_name = format!("{:<name_width$}", display_name(font));
        let rendered_family = apply_color(&padded_family, color, AnsiColor::Green);
        let rendered_name = apply_color(&padded_name, color, AnsiColor::Yellow);
        let rendered_path = apply_color(&font.filename.display().to_string(), color, AnsiColor::Cyan);

        writeln!(w, "{rendered_family}  {rendered_name}  {rendered_path}")?;
    }

    Ok(())
}

fn write_outcomes(outcomes: &[MatchOutcome], mut w: impl Write, color: bool) -> Result<()> {
    let query_width = outcomes
        .iter()
        .map(|o| o.query.chars().count())
        .max()
        .unwrap_or(0)
        .clamp(0, 60);

    for outcome in outcomes {
        let query = format!("{:<query_width$}", outcome.query);
        match &outcome.font {
            Some(font) => {
                let name = apply_color(display_name(font), color, AnsiColor::Yellow);
                let path = apply_color(&font.filename.display().to_string(), color, AnsiColor::Cyan);
                writeln!(w, "{query} -> {name} ({path})")?;
            }
            None => writeln!(w, "{query} -> (no match)")?,
        }
    }

    Ok(())
}

#[derive(Copy, Clone)]
enum AnsiColor {
    Cyan,
    Yellow,
    Green,
}

fn apply_color(text: &str, color: bool, code: AnsiColor) -> String {
    if !color {
        return text.to_string();
    }

    let code_str = match code {
        AnsiColor::Cyan => "36",
        AnsiColor::Yellow => "33",
        AnsiColor::Green => "32",
    };

    format!("\u{1b}[{}m{}\u{1b}[0m", code_str, text)
}

#[cfg(test)]
mod tests;
