use crate::location::{navigate, start, MemoryLocation};
use crate::options::{OptionPairs, OptionSet};
use crate::router::Router;
use crate::{parse, serialize};
use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand};
use serde::Serialize;
use std::cell::RefCell;
use std::io::{self, BufRead, Write};
use std::rc::Rc;
use tracing::info;

/// Location used when `--from` is not given.
pub const DEFAULT_LOCATION: &str = "http://localhost/";

/// Command-line interface for hashrouter
#[derive(Parser)]
#[command(name = "hashrouter")]
#[command(about = "Parse, build and watch `#slug[options]` location hashes", long_about = None)]
#[command(version)]
pub struct Cli {
    /// The subcommand to execute
    #[command(subcommand)]
    pub command: Commands,
}

/// Available CLI commands
#[derive(Subcommand)]
pub enum Commands {
    /// Parse a hash and print its slug and options as JSON
    Parse {
        /// Hash to parse, e.g. `#foo[a=1,b]`
        hash: String,

        /// Pretty-print the JSON output
        #[arg(long, default_value_t = false)]
        pretty: bool,
    },
    /// Render `key` or `key=value` pairs as an options block
    Serialize {
        /// Pairs in output order
        pairs: Vec<String>,
    },
    /// Navigate an in-memory location and print the final URL
    Navigate {
        /// Target URL, absolute or relative to `--from`
        url: String,

        /// Options to append; without any, the URL is used as is
        pairs: Vec<String>,

        /// URL the location starts on
        #[arg(long, default_value = DEFAULT_LOCATION)]
        from: String,
    },
    /// Read hashes from stdin and print each change as a JSON line
    Watch {
        /// URL the location starts on
        #[arg(long, default_value = DEFAULT_LOCATION)]
        from: String,

        /// Slugs to register (repeatable)
        #[arg(long = "route")]
        routes: Vec<String>,
    },
}

#[derive(Serialize)]
struct WatchRecord<'a> {
    #[serde(flatten)]
    opts: &'a OptionSet,
    routed: bool,
}

fn pairs_from_args(args: &[String]) -> OptionPairs {
    let mut pairs = OptionPairs::new();
    for arg in args {
        pairs.push_fragment(arg);
    }
    pairs
}

fn open_location(from: &str) -> Result<MemoryLocation> {
    MemoryLocation::new(from).with_context(|| format!("invalid --from URL: {from}"))
}

/// Execute `cli`, reading stdin from `input` and writing results to `out`.
pub fn run<R, W>(cli: &Cli, input: R, out: &mut W) -> Result<()>
where
    R: BufRead,
    W: Write,
{
    match &cli.command {
        Commands::Parse { hash, pretty } => {
            let opts = parse(hash);
            let json = if *pretty {
                serde_json::to_string_pretty(&opts)?
            } else {
                serde_json::to_string(&opts)?
            };
            writeln!(out, "{json}")?;
        }
        Commands::Serialize { pairs } => {
            writeln!(out, "{}", serialize(&pairs_from_args(pairs)))?;
        }
        Commands::Navigate { url, pairs, from } => {
            let location = open_location(from)?;
            let data = (!pairs.is_empty()).then(|| pairs_from_args(pairs));
            let before = location.href();
            let target = navigate(&location, url, data.as_ref());
            let resolved = open_location(from)?
                .resolve(&target)
                .with_context(|| format!("cannot resolve navigation target: {target}"))?;
            if location.href() != resolved.as_str() {
                bail!("navigation to {target} did not complete (still at {before})");
            }
            info!(url = %target, href = %location.href(), "navigation finished");
            writeln!(out, "{}", location.href())?;
        }
        Commands::Watch { from, routes } => {
            let location = open_location(from)?;
            let router: Router<()> = routes.iter().map(|slug| (slug.as_str(), ())).collect();

            let changes: Rc<RefCell<Vec<OptionSet>>> = Rc::new(RefCell::new(Vec::new()));
            let sink = Rc::clone(&changes);
            start(&location, move |opts| sink.borrow_mut().push(opts));
            flush_changes(&changes, &router, out)?;

            for line in input.lines() {
                let line = line.context("failed to read hash from stdin")?;
                let line = line.trim();
                if line.is_empty() {
                    continue;
                }
                location.set_hash(line);
                flush_changes(&changes, &router, out)?;
            }
        }
    }
    Ok(())
}

fn flush_changes<W: Write>(
    changes: &RefCell<Vec<OptionSet>>,
    router: &Router<()>,
    out: &mut W,
) -> Result<()> {
    let drained: Vec<OptionSet> = changes.borrow_mut().drain(..).collect();
    for opts in &drained {
        let record = WatchRecord {
            opts,
            routed: router.route(opts).is_some(),
        };
        writeln!(out, "{}", serde_json::to_string(&record)?)?;
    }
    Ok(())
}

/// Parse process arguments and run against stdin/stdout.
pub fn run_cli() -> Result<()> {
    let cli = Cli::parse();
    let stdin = io::stdin();
    let stdout = io::stdout();
    run(&cli, stdin.lock(), &mut stdout.lock())
}
