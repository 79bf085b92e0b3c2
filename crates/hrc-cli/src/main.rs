use anyhow::{Context, Result, bail};
use clap::{Parser, ValueEnum};
use hrc_config::Config;
use hrc_engine::{LineEnding, io, process_lines, render_report};
use std::io::Write;
use std::path::PathBuf;

/// Rewrite outline lines into hierarchical, dot-numbered items.
#[derive(Parser, Debug)]
#[command(name = "hrc", version, about)]
struct Cli {
    /// Text file to process (surrounding quotes are ignored)
    input: String,

    /// Level configuration file (defaults to ~/.config/hrc/levels.toml)
    #[arg(short, long, env = "HRC_CONFIG")]
    config: Option<PathBuf>,

    /// Output file (defaults to <name>.processed<ext> next to the input)
    #[arg(short, long, conflicts_with = "stdout")]
    output: Option<PathBuf>,

    /// Print the processed lines instead of writing a file
    #[arg(long)]
    stdout: bool,

    /// Line terminator for the output, overriding the config file
    #[arg(long, value_enum)]
    line_ending: Option<LineEndingArg>,

    /// Do not prefix the output file with a UTF-8 byte order mark
    #[arg(long)]
    no_bom: bool,

    /// Increase verbosity level (can be repeated: -v, -vv, -vvv)
    #[arg(short = 'v', long = "verbose", action = clap::ArgAction::Count)]
    verbosity: u8,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum LineEndingArg {
    Crlf,
    Lf,
}

impl From<LineEndingArg> for LineEnding {
    fn from(arg: LineEndingArg) -> Self {
        match arg {
            LineEndingArg::Crlf => LineEnding::Crlf,
            LineEndingArg::Lf => LineEnding::Lf,
        }
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    env_logger::Builder::from_default_env()
        .filter_level(verbosity_filter(cli.verbosity))
        .init();

    run(&cli, &mut std::io::stdout(), &mut std::io::stderr())
}

fn verbosity_filter(verbosity: u8) -> log::LevelFilter {
    match verbosity {
        0 => log::LevelFilter::Error,
        1 => log::LevelFilter::Warn,
        2 => log::LevelFilter::Info,
        3 => log::LevelFilter::Debug,
        _ => log::LevelFilter::Trace,
    }
}

/// Strips whitespace and a pair of surrounding quotes from a pasted path.
fn normalize_input_path(raw: &str) -> PathBuf {
    let trimmed = raw.trim();
    let unquoted = trimmed
        .strip_prefix('"')
        .and_then(|s| s.strip_suffix('"'))
        .unwrap_or(trimmed);
    let path = PathBuf::from(unquoted);
    Config::expand_path(&path).unwrap_or(path)
}

fn run(cli: &Cli, out: &mut impl Write, err: &mut impl Write) -> Result<()> {
    let explicit = cli
        .config
        .as_deref()
        .map(|p| Config::expand_path(p).unwrap_or_else(|| p.to_path_buf()));
    let loaded = match &explicit {
        Some(path) => Config::load_from_path(path)?,
        None => Config::load()?,
    };
    let config_path = explicit.unwrap_or_else(Config::config_path);
    log::info!("Config path: {}", config_path.display());

    let Some(config) = loaded else {
        bail!("no level configuration found at {}", config_path.display());
    };
    let levels = config
        .compile_levels()
        .with_context(|| format!("invalid level configuration in {}", config_path.display()))?;
    log::info!("Loaded {} level(s)", levels.len());

    let input = normalize_input_path(&cli.input);
    let lines = io::read_lines(&input)
        .with_context(|| format!("failed to read {}", input.display()))?;

    let result = process_lines(&lines, &levels);

    let ending = cli
        .line_ending
        .map(LineEnding::from)
        .unwrap_or(config.output.line_ending);

    if cli.stdout {
        for line in &result.output_lines {
            writeln!(out, "{line}")?;
        }
        write!(err, "{}", render_report(&result, std::path::Path::new("-")))?;
        return Ok(());
    }

    let output_path = cli
        .output
        .clone()
        .unwrap_or_else(|| io::output_path_for(&input));
    let byte_order_mark = config.output.byte_order_mark && !cli.no_bom;
    io::write_lines(&output_path, &result.output_lines, ending, byte_order_mark)
        .with_context(|| format!("failed to write {}", output_path.display()))?;
    log::info!("Wrote {}", output_path.display());

    write!(out, "{}", render_report(&result, &output_path))?;
    Ok(())
}
