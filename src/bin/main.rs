use anyhow::{Context, Result};
use grouper_core::ClusterEngine;
use std::io::{self, Read, Write};

fn main() -> Result<()> {
    // Diagnostics go to stderr so the report stream stays clean.
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .with_target(false)
        .with_writer(io::stderr)
        .init();

    let as_json = std::env::args().skip(1).any(|arg| arg == "--json");

    let mut input = String::new();
    io::stdin()
        .read_to_string(&mut input)
        .context("failed to read token stream from stdin")?;

    let mut tokens = input.split_whitespace();
    let window: usize = tokens
        .next()
        .context("token stream is empty; expected a leading window size")?
        .parse()
        .context("leading token is not a valid window size")?;

    let results = ClusterEngine::new(window).run(tokens);

    let stdout = io::stdout();
    let mut out = io::BufWriter::new(stdout.lock());
    if as_json {
        serde_json::to_writer(&mut out, &results)?;
        writeln!(out)?;
    } else {
        for group in &results {
            writeln!(out, "{}: {}", group.representative, group.count)?;
        }
    }
    out.flush()?;
    Ok(())
}
