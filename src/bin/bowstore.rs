//! bowstore CLI
//!
//! Ingests a text document and answers free-text similarity queries.

use bowstore::{Config, Session};
use clap::Parser;
use std::io::{self, BufRead, Write};
use std::path::PathBuf;
use tracing::info;
use tracing_subscriber::{fmt, EnvFilter};

/// bowstore - Bag-of-Words Similarity Search
#[derive(Parser, Debug)]
#[command(author, version, about)]
struct Args {
    /// Text document to ingest
    file: PathBuf,

    /// Marker where the region to ingest starts
    #[arg(long, requires = "end")]
    start: Option<String>,

    /// Marker where the region to ingest ends (included)
    #[arg(long, requires = "start")]
    end: Option<String>,

    /// Number of results per query
    #[arg(short, long, default_value_t = 3)]
    num_results: usize,
}

fn main() -> anyhow::Result<()> {
    fmt()
        .with_writer(io::stderr)
        .with_env_filter(EnvFilter::from_default_env().add_directive("bowstore=info".parse()?))
        .init();

    let args = Args::parse();

    let mut config = Config::default().with_num_results(args.num_results);
    if let (Some(start), Some(end)) = (args.start, args.end) {
        config = config.with_bounds(start, end);
    }

    println!("Initializing, this may take a minute...");
    let session = Session::from_file(&args.file, config)?;
    info!(
        file = %args.file.display(),
        vectors = session.len(),
        vocabulary = session.vocabulary().len(),
        "Ready"
    );

    println!("Ready! Enter a query, or 'exit' to quit.\n");
    query_loop(&session)?;

    println!("{}", session.metrics().summary());
    Ok(())
}

fn query_loop(session: &Session) -> anyhow::Result<()> {
    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();

    loop {
        print!("query> ");
        io::stdout().flush()?;

        let Some(line) = lines.next() else {
            println!();
            break;
        };
        let line = line?;
        let input = line.trim();

        if input.is_empty() {
            continue;
        }

        if input.eq_ignore_ascii_case("exit") || input.eq_ignore_ascii_case("quit") {
            println!("Goodbye!");
            break;
        }

        match session.search(input) {
            Ok(results) => print_results(&results),
            Err(e) => eprintln!("Error: {}", e),
        }
    }

    Ok(())
}

fn print_results(results: &[(String, f32)]) {
    if results.is_empty() {
        println!("(no results)");
        return;
    }
    for (rank, (id, score)) in results.iter().enumerate() {
        println!("  {}. [{:.4}] {}", rank + 1, score, id);
    }
    println!();
}
