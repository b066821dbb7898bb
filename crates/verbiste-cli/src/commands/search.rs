//! Implementation of the `verbiste search` command.

use clap::Args;
use log::debug;
use miette::IntoDiagnostic;
use serde::Serialize;
use verbiste::{SelectionController, SelectionEvent, SelectionKey, VerbEntry};

use crate::commands::DataArgs;
use crate::output::table::format_matches_table;

/// Arguments for the search command.
#[derive(Debug, Args)]
pub struct SearchArgs {
    /// Prefix to search for, accents and case ignored
    pub query: String,

    /// Keys to replay against the result list (down, up, enter, escape)
    #[arg(long, value_delimiter = ',')]
    pub keys: Vec<SelectionKey>,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

/// JSON output for search results.
#[derive(Serialize)]
struct SearchJson<'a> {
    query: &'a str,
    results: &'a [&'a VerbEntry],
    highlighted: Option<usize>,
    committed: Option<&'a str>,
}

/// Run the search command.
pub fn run_search(args: SearchArgs, data: &DataArgs) -> miette::Result<i32> {
    let index = match data.load_verbs() {
        Ok(index) => index,
        Err(failure) => return Ok(failure.emit()),
    };

    let mut selection = SelectionController::with_query(args.query);
    let mut results = index.search(selection.query());
    let mut committed: Option<String> = None;

    for key in args.keys {
        let event = selection.handle_key(key, &results);
        debug!("{} -> {:?}", key, event);
        match event {
            SelectionEvent::Committed(name) => {
                results = index.search(&name);
                committed = Some(name);
            }
            SelectionEvent::Cleared => {
                results.clear();
                committed = None;
            }
            SelectionEvent::Moved(_) | SelectionEvent::Ignored => {}
        }
    }

    if args.json {
        let output = SearchJson {
            query: selection.query(),
            results: &results,
            highlighted: selection.highlighted(),
            committed: committed.as_deref(),
        };
        println!("{}", serde_json::to_string_pretty(&output).into_diagnostic()?);
    } else if results.is_empty() {
        println!("No verbs match '{}'", selection.query());
        let suggestions = index.suggest(selection.query());
        if !suggestions.is_empty() {
            let names: Vec<&str> = suggestions.iter().map(|e| e.verb.as_str()).collect();
            println!("Did you mean: {}?", names.join(", "));
        }
    } else {
        println!("{}", format_matches_table(&results, selection.highlighted()));
        if let Some(name) = &committed {
            println!("selected: {}", name);
        }
    }

    Ok(exitcode::OK)
}
