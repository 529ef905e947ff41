use std::io::{BufRead, Write};
use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;
use tracing::{debug, Level};

use arti_filter::{ArtifactDescriptor, ArtifactFilter, CompositeFilter, FilterConfig};

/// Prunes a list of resolved dependencies. Reads one `group:artifact:version:type:classifier:scope`
///  coordinate per line from stdin and prints the ones the filter accepts.
#[derive(Parser, Debug)]
#[command(author, version, long_about = None)]
struct Args {
    /// Filter pattern, e.g. `org.foo:*:*:*:*:test`; `!` negates a single segment. Combined with
    /// the config's own pattern; filters already present (such as the default scope exclusions)
    /// are not added a second time
    #[arg(long, short)]
    pattern: Option<String>,

    /// JSON file with additional filter wiring
    #[arg(long, short)]
    config: Option<PathBuf>,

    /// Print the compacted filter tree to stderr before filtering
    #[arg(long)]
    compact: bool,

    /// Log debug output to stderr
    #[arg(long, short)]
    verbose: bool,
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_max_level(if args.verbose { Level::DEBUG } else { Level::WARN })
        .init();

    let filter = build_filter(&args)?;
    if args.compact {
        eprintln!("{:#?}", filter.clone().compact());
    }

    let stdin = std::io::stdin();
    let stdout = std::io::stdout();
    let mut out = stdout.lock();

    let mut num_accepted = 0usize;
    let mut num_rejected = 0usize;
    for line in stdin.lock().lines() {
        let line = line.context("failed to read coordinates from stdin")?;
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }

        if filter.accept(&ArtifactDescriptor::parse(line)) {
            writeln!(out, "{}", line)?;
            num_accepted += 1;
        }
        else {
            debug!("excluding {}", line);
            num_rejected += 1;
        }
    }

    debug!("{} artifacts accepted, {} excluded", num_accepted, num_rejected);
    Ok(())
}

fn build_filter(args: &Args) -> anyhow::Result<CompositeFilter> {
    let mut filter = match &args.config {
        Some(path) => FilterConfig::load(path)?.build(),
        None => CompositeFilter::new(),
    };

    // AND is idempotent, so a filter the config already has adds nothing
    let mut from_pattern = CompositeFilter::new();
    from_pattern.add_filters_from_pattern(args.pattern.as_deref());
    for f in from_pattern.filters() {
        if !filter.filters().contains(f) {
            filter.add_filter(f.clone());
        }
    }
    Ok(filter)
}
