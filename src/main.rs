use std::path::PathBuf;

use clap::Parser;
use radix_router::{config::RouteTable, Match};
use tracing::Level;

/// Match paths against a route table.
#[derive(Parser, Debug)]
#[command(version, about)]
struct Cli {
    /// Route table in TOML format
    #[arg(short, long)]
    routes: PathBuf,

    /// Treat `/a/` and `/a` as different paths
    #[arg(long)]
    strict_trailing_slash: bool,

    /// Log tree operations to stderr
    #[arg(short, long)]
    verbose: bool,

    /// Paths to look up
    #[arg(required = true)]
    paths: Vec<String>,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    tracing_subscriber::fmt()
        .with_max_level(if cli.verbose { Level::DEBUG } else { Level::WARN })
        .with_writer(std::io::stderr)
        .init();

    let mut table = RouteTable::from_file(&cli.routes)?;
    table.strict_trailing_slash |= cli.strict_trailing_slash;
    let router = table.into_router()?;

    for path in &cli.paths {
        println!("{}", format_match(path, router.lookup(path)));
    }
    Ok(())
}

fn format_match(path: &str, m: Option<Match<'_, String>>) -> String {
    let Some(m) = m else {
        return format!("{path}\tno match");
    };

    let Some(params) = m.params else {
        return format!("{path}\t{}", m.data);
    };
    let params: Vec<_> = params
        .iter()
        .map(|(name, value)| format!("{name}={value}"))
        .collect();
    format!("{path}\t{}\t{}", m.data, params.join(","))
}
