//! Interactive search prompt.
//!
//! One loop owns the [`SearchView`]. Input lines and search completions are
//! both events on that loop; requests run on spawned tasks and report back
//! over a channel tagged with their ticket id.

use std::io::Write;
use std::sync::Arc;

use anyhow::Result;
use mealsearch_client::{MealSearch, SearchError};
use mealsearch_core::MealSearchResponse;
use mealsearch_view::{Completion, SearchTicket, SearchView, TicketId, render_details, render_results};
use tokio::io::{AsyncBufReadExt, BufReader};
use tokio::sync::mpsc;

const HELP: &str = "\
Type a query and press Enter to search.
  :open N   show details of result N
  :close    close the details and show the results again
  :help     show this help
  :quit     exit";

type SearchOutcome = (TicketId, Result<MealSearchResponse, SearchError>);

#[derive(Debug, PartialEq, Eq)]
pub(crate) enum Command {
    Search(String),
    Open(usize),
    Close,
    Help,
    Quit,
    Unknown(String),
}

/// Interprets one input line. Anything not starting with `:` is a query.
pub(crate) fn parse_command(line: &str) -> Command {
    let trimmed = line.trim();
    let Some(rest) = trimmed.strip_prefix(':') else {
        return Command::Search(line.trim_end_matches(['\r', '\n']).to_owned());
    };
    let mut parts = rest.split_whitespace();
    match (parts.next(), parts.next()) {
        (Some("open" | "o"), Some(n)) => match n.parse() {
            Ok(n) => Command::Open(n),
            Err(_) => Command::Unknown(trimmed.to_owned()),
        },
        (Some("close" | "c"), None) => Command::Close,
        (Some("help" | "h"), None) => Command::Help,
        (Some("quit" | "q" | "exit"), None) => Command::Quit,
        _ => Command::Unknown(trimmed.to_owned()),
    }
}

fn prompt() {
    print!("> ");
    let _ = std::io::stdout().flush();
}

fn spawn_search(
    search: &Arc<dyn MealSearch>,
    ticket: SearchTicket,
    tx: &mpsc::UnboundedSender<SearchOutcome>,
) {
    let search = Arc::clone(search);
    let tx = tx.clone();
    tokio::spawn(async move {
        let outcome = search.search_meals(&ticket.query, ticket.top_k).await;
        if tx.send((ticket.id, outcome)).is_err() {
            tracing::debug!(id = ticket.id, "prompt closed before search completed");
        }
    });
}

/// Applies one input line to the view. Returns `false` when the user quits.
fn handle_line(
    view: &mut SearchView,
    line: &str,
    search: &Arc<dyn MealSearch>,
    tx: &mpsc::UnboundedSender<SearchOutcome>,
) -> bool {
    match parse_command(line) {
        Command::Quit => return false,
        Command::Help => println!("{HELP}"),
        Command::Search(query) => {
            view.set_query(query);
            if let Some(ticket) = view.submit() {
                spawn_search(search, ticket, tx);
                print!("{}", render_results(view));
            }
        },
        Command::Open(n) => {
            if n > 0 && view.select(n - 1) {
                if let Some(meal) = view.selected() {
                    print!("{}", render_details(meal));
                }
            } else {
                println!("No result #{n}.");
            }
        },
        Command::Close => {
            view.close_details();
            print!("{}", render_results(view));
        },
        Command::Unknown(cmd) => println!("Unknown command {cmd}. Type :help."),
    }
    prompt();
    true
}

pub(crate) async fn run_interactive(search: Arc<dyn MealSearch>, top_k: u32) -> Result<()> {
    let mut view = SearchView::new(top_k);
    let (tx, mut rx) = mpsc::unbounded_channel::<SearchOutcome>();
    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    let mut input_open = true;

    println!("{HELP}");
    prompt();

    loop {
        tokio::select! {
            line = lines.next_line(), if input_open => {
                match line? {
                    Some(line) => {
                        if !handle_line(&mut view, &line, &search, &tx) {
                            break;
                        }
                    },
                    None => input_open = false,
                }
            },
            Some((id, outcome)) = rx.recv() => {
                if view.complete(id, outcome) != Completion::Stale {
                    println!();
                    print!("{}", render_results(&view));
                    prompt();
                }
            },
        }

        // Input ended: wait for the search in flight, then stop.
        if !input_open && !view.is_searching() {
            println!();
            break;
        }
    }

    Ok(())
}
