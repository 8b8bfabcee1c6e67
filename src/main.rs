//! CLI entry point for sprout

use std::io::{self, IsTerminal};
use std::process;

use clap::{Parser, ValueEnum};
use sprout::{
    Entry, FindVisitor, LineSink, ListVisitor, OutputConfig, StatsConfig, TreeFormatter, WriteSink,
    collect_stats, print_json, print_stats, print_stats_json, sample,
};
use thiserror::Error;
use tracing::Level;

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

/// How the tree is printed
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
enum Format {
    /// One `prefix/name(size)` line per entry, via the entry's own listing
    #[default]
    List,
    /// The same lines, produced by the listing visitor
    Visit,
    /// Box-drawing tree
    Tree,
    /// Pretty-printed JSON
    Json,
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
#[command(name = "sprout")]
#[command(about = "Build the sample entry tree and print it")]
#[command(version)]
struct Args {
    /// Output format
    #[arg(short = 'f', long = "format", value_name = "FORMAT", default_value = "list")]
    format: Format,

    /// Also add the users' home directories under /root/usr
    #[arg(short = 'u', long = "users")]
    users: bool,

    /// Base prefix for list and visit output
    #[arg(short = 'p', long = "prefix", default_value_t = String::new())]
    prefix: String,

    /// Show sizes next to names in tree output
    #[arg(short = 's', long = "size")]
    size: bool,

    /// Print the paths of entries whose name matches a glob pattern
    #[arg(long = "find", value_name = "PATTERN", conflicts_with = "stats")]
    find: Option<String>,

    /// Show tree statistics (as JSON with --format json)
    #[arg(long = "stats")]
    stats: bool,

    /// Number of parallel workers for --stats
    /// (0 = auto-detect, N = use N workers)
    #[arg(short = 'j', long = "jobs", default_value = "0")]
    jobs: usize,

    /// Control color output: auto, always, never
    #[arg(long = "color", value_name = "WHEN", default_value = "auto")]
    color: ColorMode,

    /// Log debug output to stderr
    #[arg(short = 'v', long = "verbose")]
    verbose: bool,
}

#[derive(Debug, Error)]
enum CliError {
    #[error(transparent)]
    Tree(#[from] sprout::Error),

    #[error("error writing output: {0}")]
    Output(#[from] io::Error),
}

fn init_logging(verbose: bool) {
    let level = if verbose { Level::DEBUG } else { Level::INFO };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(io::stderr)
        .with_target(false)
        .init();
}

fn build_tree(args: &Args) -> sprout::Result<Entry> {
    let mut root = sample::root_entries()?;
    if args.users {
        sample::add_user_entries(&mut root)?;
    }
    tracing::debug!(entries = count_entries(&root), size = root.size(), "built sample tree");
    Ok(root)
}

fn count_entries(root: &Entry) -> usize {
    let mut pending = vec![root];
    let mut count = 0;
    while let Some(entry) = pending.pop() {
        count += 1;
        pending.extend(entry.children());
    }
    count
}

fn run(args: &Args) -> Result<(), CliError> {
    let root = build_tree(args)?;
    let use_color = should_use_color(args.color);

    if let Some(pattern) = &args.find {
        let mut finder = FindVisitor::new(pattern)?;
        root.accept(&mut finder)?;
        let mut sink = WriteSink::stdout();
        for path in finder.matches() {
            sink.emit(path)?;
        }
        return Ok(());
    }

    if args.stats {
        let stats = collect_stats(&root, &StatsConfig { workers: args.jobs })?;
        if args.format == Format::Json {
            print_stats_json(&stats)?;
        } else {
            print_stats(&stats, use_color)?;
        }
        return Ok(());
    }

    match args.format {
        Format::List => root.print_list(&args.prefix, &mut WriteSink::stdout())?,
        Format::Visit => {
            let mut visitor = ListVisitor::new(WriteSink::stdout());
            root.accept_with_prefix(&args.prefix, &mut visitor)?;
        }
        Format::Tree => {
            let formatter = TreeFormatter::new(OutputConfig {
                use_color,
                show_size: args.size,
            });
            formatter.print(&root)?;
        }
        Format::Json => print_json(&root)?,
    }
    Ok(())
}

fn main() {
    let args = Args::parse();
    init_logging(args.verbose);

    if let Err(e) = run(&args) {
        eprintln!("sprout: {}", e);
        process::exit(1);
    }
}
