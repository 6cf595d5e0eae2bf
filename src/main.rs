use std::{sync::Arc, time::Duration};

use anyhow::anyhow;
use clap::Parser;
use log::info;
use tokio::io::{AsyncBufReadExt, BufReader};

use github_search::{
    DEFAULT_QUERY_TERM, FetchCoordinator, FetchOutcome, GITHUB_API_ENDPOINT, HttpPageFetcher,
    ResultPresenter, SearchDebouncer, SearchResult, SearchSession, StdResult,
};

/// Command line arguments for the repository search client
#[derive(Parser, Debug)]
#[command(version)]
struct Args {
    /// Search query (the default term is substituted when empty)
    #[arg(default_value = "")]
    query: String,

    /// Number of pages fetched per refresh
    #[arg(short = 'n', long, default_value_t = 2)]
    pages: u32,

    /// Results per page
    #[arg(short, long, default_value_t = 15)]
    per_page: u16,

    /// Base URL of the search API
    #[arg(short, long, env = "SEARCH_BASE_URL", default_value = GITHUB_API_ENDPOINT)]
    base_url: String,

    /// Print the merged results as JSON instead of a plain list
    #[arg(short, long)]
    json: bool,

    /// Read search text line by line from stdin instead of running one query
    #[arg(short, long)]
    interactive: bool,

    /// Debounce quiet period in milliseconds (interactive mode)
    #[arg(long, default_value_t = 500)]
    quiet_period_ms: u64,

    /// Minimum query length before a search triggers, 0 disables the gate
    /// (interactive mode)
    #[arg(long, default_value_t = 3)]
    min_length: usize,
}

#[tokio::main]
async fn main() -> StdResult<()> {
    env_logger::init();
    let args = Args::parse();
    info!("Starting repository search");

    let fetcher = Arc::new(HttpPageFetcher::try_new(&args.base_url)?);
    let coordinator = Arc::new(FetchCoordinator::new(
        fetcher,
        args.pages,
        args.per_page,
        DEFAULT_QUERY_TERM,
    ));

    if args.interactive {
        let session = SearchSession::new(coordinator, Arc::new(ConsolePresenter));
        run_interactive(
            session,
            Duration::from_millis(args.quiet_period_ms),
            args.min_length,
        )
        .await
    } else {
        match coordinator.refresh(&args.query).await {
            FetchOutcome::Success(results) => {
                if args.json {
                    println!("{}", serde_json::to_string_pretty(&results)?);
                } else {
                    print_results(&results);
                }
                Ok(())
            }
            FetchOutcome::Failure(reason) => Err(anyhow!(
                "There was a problem loading the results; please check your connection and try again ({reason})"
            )),
        }
    }
}

/// Feeds stdin lines through the debouncer into the session: plain text is
/// a text-change event, an empty line re-triggers the current search
/// (refresh gesture) and a bare number selects that result for detail
/// display.
async fn run_interactive(
    session: SearchSession,
    quiet_period: Duration,
    min_length: usize,
) -> StdResult<()> {
    let (debouncer, mut triggers) = SearchDebouncer::spawn(quiet_period, min_length);
    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    let mut current_query = String::new();
    println!("Type to search, an empty line refreshes, a number opens that result.");

    loop {
        tokio::select! {
            line = lines.next_line() => {
                match line? {
                    None => break,
                    Some(line) => {
                        let line = line.trim().to_string();
                        if line.is_empty() {
                            session.trigger_refresh(&current_query);
                        } else if let Ok(index) = line.parse::<usize>() {
                            if session.select(index).await.is_none() {
                                println!("No result at index {index}");
                            }
                        } else {
                            debouncer.on_text_change(&line);
                        }
                    }
                }
            }
            trigger = triggers.recv() => {
                match trigger {
                    None => break,
                    Some(text) => {
                        current_query = text;
                        session.trigger_refresh(&current_query);
                    }
                }
            }
        }
    }

    Ok(())
}

fn print_results(results: &[SearchResult]) {
    println!("Received {} repositories.", results.len());
    for (index, result) in results.iter().enumerate() {
        println!(
            "[{index}] {} - {}",
            result.name().unwrap_or("<unnamed>"),
            result.description().unwrap_or("")
        );
        if let Some(url) = result.url() {
            println!("    {url}");
        }
    }
}

/// Prints outcomes and selections to the console, with one uniform notice
/// for every failure.
struct ConsolePresenter;

impl ResultPresenter for ConsolePresenter {
    fn on_outcome(&self, outcome: &FetchOutcome) {
        match outcome {
            FetchOutcome::Success(results) => print_results(results),
            FetchOutcome::Failure(_) => {
                println!(
                    "There was a problem loading the results; please check your connection and try again."
                );
            }
        }
    }

    fn on_select(&self, result: &SearchResult) {
        match result.url() {
            Some(url) => println!("Opening {url}"),
            None => println!("Selected result has no URL."),
        }
    }
}
