//! CLI entry point for twig

use std::io::{self, BufWriter, IsTerminal};
use std::path::PathBuf;
use std::process;
use std::sync::atomic::Ordering;
use std::time::Duration;

use clap::{Parser, ValueEnum};
use twig::{CancelFlag, OutputBuffer, OutputConfig, TreeConfig, TreeWalker, resolve_root};

/// Size of the buffered writer in front of stdout.
const OUTPUT_BUFFER_SIZE: usize = 1024 * 1024;

/// Color output mode
#[derive(Debug, Clone, Copy, Default, ValueEnum)]
enum ColorMode {
    /// Auto-detect based on terminal and environment
    #[default]
    Auto,
    /// Always use colors
    Always,
    /// Never use colors
    Never,
}

/// Determine whether to use color output based on mode and environment.
fn should_use_color(mode: ColorMode) -> bool {
    match mode {
        ColorMode::Always => true,
        ColorMode::Never => false,
        ColorMode::Auto => {
            // Respect NO_COLOR environment variable (https://no-color.org/)
            if std::env::var_os("NO_COLOR").is_some() {
                return false;
            }
            if std::env::var_os("FORCE_COLOR").is_some() {
                return true;
            }
            if std::env::var("TERM").map(|t| t == "dumb").unwrap_or(false) {
                return false;
            }
            io::stdout().is_terminal()
        }
    }
}

#[derive(Parser, Debug)]
#[command(name = "twig")]
#[command(about = "Display a directory tree, streaming output as it goes")]
#[command(version)]
struct Args {
    /// Root path of the tree
    #[arg(default_value = ".")]
    path: PathBuf,

    /// List files as well as directories
    #[arg(short = 'f', long = "files")]
    include_files: bool,

    /// Deepest level to descend into (0 = only the root's entries, -1 = no limit)
    #[arg(
        short = 'm',
        long = "max-depth",
        default_value = "-1",
        allow_negative_numbers = true
    )]
    max_depth: i64,

    /// Flush output to stdout every MS milliseconds (-1 to disable).
    /// Durations such as 250ms or 2s are also accepted
    #[arg(
        short = 't',
        long = "flush-interval",
        value_name = "MS",
        default_value = "1",
        allow_hyphen_values = true
    )]
    flush_interval: String,

    /// Control color output: auto, always, never
    #[arg(long = "color", value_name = "WHEN", default_value = "auto")]
    color: ColorMode,

    /// Descend into directories reached through symbolic links
    #[arg(long = "follow-links")]
    follow_links: bool,

    /// Print diagnostics to stderr
    #[arg(short = 'v', long = "verbose")]
    verbose: bool,
}

/// Convert the depth argument, where -1 means unbounded.
fn parse_max_depth(depth: i64) -> Result<Option<usize>, String> {
    match depth {
        -1 => Ok(None),
        d if d < 0 => Err("must be -1 or a non-negative number".to_string()),
        d => usize::try_from(d).map(Some).map_err(|e| e.to_string()),
    }
}

/// Parse the flush interval: -1 disables periodic flushing, a bare number
/// is milliseconds, anything else goes through humantime ("250ms", "2s").
fn parse_flush_interval(s: &str) -> Result<Option<Duration>, String> {
    let s = s.trim();
    if s == "-1" {
        return Ok(None);
    }
    if let Ok(ms) = s.parse::<u64>() {
        return Ok(Some(Duration::from_millis(ms)));
    }
    humantime::parse_duration(s)
        .map(Some)
        .map_err(|e| e.to_string())
}

fn init_logging(verbose: bool) {
    let level = if verbose {
        tracing::Level::DEBUG
    } else {
        tracing::Level::WARN
    };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(io::stderr)
        .with_target(false)
        .init();
}

fn main() {
    let args = Args::parse();
    init_logging(args.verbose);

    let max_depth = parse_max_depth(args.max_depth).unwrap_or_else(|e| {
        eprintln!("twig: invalid --max-depth '{}': {}", args.max_depth, e);
        process::exit(1);
    });

    let flush_interval = parse_flush_interval(&args.flush_interval).unwrap_or_else(|e| {
        eprintln!("twig: invalid --flush-interval '{}': {}", args.flush_interval, e);
        process::exit(1);
    });

    let root = resolve_root(&args.path).unwrap_or_else(|e| {
        eprintln!("twig: {}", e);
        process::exit(1);
    });

    let cancel = CancelFlag::default();
    let handler_flag = cancel.clone();
    if let Err(e) = ctrlc::set_handler(move || handler_flag.store(true, Ordering::SeqCst)) {
        tracing::warn!("cannot install Ctrl-C handler: {}", e);
    }

    let tree_config = TreeConfig {
        include_files: args.include_files,
        max_depth,
        follow_links: args.follow_links,
    };
    let output_config = OutputConfig {
        use_color: should_use_color(args.color),
        flush_interval,
    };

    let walker = TreeWalker::new(tree_config).with_cancel_flag(cancel);
    let stdout = io::stdout();
    let sink = BufWriter::with_capacity(OUTPUT_BUFFER_SIZE, stdout.lock());
    let mut out = OutputBuffer::new(sink, &output_config);

    match walker.walk(&root, &mut out) {
        Ok(_) => {}
        // The reader went away (e.g. piped into `head`); nothing left to do.
        Err(e) if e.is_broken_pipe() => {}
        Err(e) => {
            eprintln!("twig: {}", e);
            process::exit(1);
        }
    }
}
