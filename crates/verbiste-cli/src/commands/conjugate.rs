//! Implementation of the `verbiste conjugate` command.

use clap::Args;
use log::debug;
use miette::IntoDiagnostic;
use owo_colors::{OwoColorize, Stream};
use serde::Serialize;
use verbiste::{
    conjugate, Auxiliary, ConjugateError, Conjugation, ConjugationRequest, PersistedSelection,
    QueryStringStore, VerbEntry, VerbSearchIndex,
};

use crate::commands::DataArgs;
use crate::output::table::{format_conjugation_tables, imperative_forms};

/// Arguments for the conjugate command.
#[derive(Debug, Args)]
pub struct ConjugateArgs {
    /// Verb to conjugate. Defaults to the query saved in --state
    pub verb: Option<String>,

    /// Auxiliary for verbs that accept both (etre or avoir)
    #[arg(long)]
    pub aux: Option<Auxiliary>,

    /// Saved selection as a query string, e.g. "q=descendre&aux=avoir"
    #[arg(long)]
    pub state: Option<String>,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

/// How a query was matched against the verb list.
#[derive(Debug, PartialEq, Eq)]
pub enum Resolution<'a> {
    /// The query is a known verb.
    Exact(&'a VerbEntry),
    /// The query is the prefix of exactly one verb.
    Unique(&'a VerbEntry),
    /// The query is the prefix of several verbs.
    Ambiguous(Vec<&'a VerbEntry>),
    /// Nothing starts with the query; these are the closest verbs.
    Unknown(Vec<&'a VerbEntry>),
}

/// Match a query the way the search box does: exact verb first, then a
/// single prefix match, otherwise report candidates.
pub fn resolve<'a>(index: &'a VerbSearchIndex, query: &str) -> Resolution<'a> {
    if let Some(entry) = index.get(query) {
        return Resolution::Exact(entry);
    }
    let mut matches = index.search(query);
    match matches.len() {
        0 => Resolution::Unknown(index.suggest(query)),
        1 => Resolution::Unique(matches.remove(0)),
        _ => Resolution::Ambiguous(matches),
    }
}

/// JSON output for a conjugation.
#[derive(Serialize)]
struct ConjugateJson<'a> {
    #[serde(flatten)]
    conjugation: &'a Conjugation,
    state: String,
}

/// Run the conjugate command.
pub fn run_conjugate(args: ConjugateArgs, data: &DataArgs) -> miette::Result<i32> {
    let mut store = QueryStringStore::parse(args.state.as_deref().unwrap_or_default());
    let saved = PersistedSelection::load(&store);

    let Some(query) = args.verb.or(saved.query) else {
        eprintln!("No verb given and no query in --state");
        return Ok(exitcode::USAGE);
    };
    let auxiliary = args.aux.or(saved.auxiliary);

    let index = match data.load_verbs() {
        Ok(index) => index,
        Err(failure) => return Ok(failure.emit()),
    };

    let entry = match resolve(&index, &query) {
        Resolution::Exact(entry) | Resolution::Unique(entry) => entry,
        Resolution::Ambiguous(matches) => {
            eprintln!("'{}' matches several verbs:", query);
            for entry in matches {
                eprintln!("  - {}", entry.verb);
            }
            return Ok(exitcode::DATAERR);
        }
        Resolution::Unknown(suggestions) => {
            eprintln!("Unknown verb '{}'", query);
            if !suggestions.is_empty() {
                let names: Vec<&str> = suggestions.iter().map(|e| e.verb.as_str()).collect();
                eprintln!("Did you mean: {}?", names.join(", "));
            }
            return Ok(exitcode::DATAERR);
        }
    };
    debug!("'{}' resolved to '{}' ({})", query, entry.verb, entry.template);

    let templates = match data.load_templates() {
        Ok(templates) => templates,
        Err(failure) => return Ok(failure.emit()),
    };

    let request = ConjugationRequest::builder()
        .verb(entry.verb.as_str())
        .template(entry.template.as_str())
        .aspirate_h(entry.aspirate_h)
        .maybe_auxiliary(auxiliary)
        .build();

    let conjugation = match conjugate(&templates, &request) {
        Ok(conjugation) => conjugation,
        Err(e @ ConjugateError::TemplateNotFound { .. }) => {
            eprintln!("Cannot conjugate '{}': {}", entry.verb, e);
            return Ok(exitcode::DATAERR);
        }
        Err(e) => {
            eprintln!("Incomplete template data for '{}': {}", entry.verb, e);
            return Ok(exitcode::DATAERR);
        }
    };

    // Only an explicit choice for an ambiguous verb is worth remembering.
    let selection = PersistedSelection {
        query: Some(conjugation.verb.clone()),
        auxiliary: auxiliary.filter(|_| conjugation.needs_auxiliary_choice()),
    };
    selection.save(&mut store);

    if args.json {
        let output = ConjugateJson {
            conjugation: &conjugation,
            state: store.to_string(),
        };
        println!("{}", serde_json::to_string_pretty(&output).into_diagnostic()?);
    } else {
        print_conjugation(&conjugation);
        println!("state: {}", store);
    }

    Ok(exitcode::OK)
}

fn print_conjugation(conjugation: &Conjugation) {
    let infinitive = conjugation.infinitive.render();
    println!(
        "{}  {}  {}",
        infinitive.if_supports_color(Stream::Stdout, |t| t.bold()),
        conjugation
            .group
            .label()
            .if_supports_color(Stream::Stdout, |t| t.dimmed()),
        conjugation
            .template
            .if_supports_color(Stream::Stdout, |t| t.dimmed()),
    );
    println!(
        "participe présent: {}  participe passé: {}",
        conjugation.present_participle.render(),
        if conjugation.past_participle.is_empty() {
            "-"
        } else {
            conjugation.past_participle.as_str()
        }
    );
    if conjugation.needs_auxiliary_choice() {
        let other = match conjugation.auxiliary {
            Auxiliary::Etre => Auxiliary::Avoir,
            Auxiliary::Avoir => Auxiliary::Etre,
        };
        println!(
            "auxiliaire: {} (--aux {} pour {})",
            conjugation
                .auxiliary
                .if_supports_color(Stream::Stdout, |t| t.yellow()),
            other.as_key(),
            other
        );
    } else {
        println!("auxiliaire: {}", conjugation.auxiliary);
    }

    for table in format_conjugation_tables(conjugation) {
        println!("\n{}", table);
    }

    let imperative = imperative_forms(conjugation);
    if !imperative.is_empty() {
        let forms: Vec<String> = imperative
            .iter()
            .map(|(person, form)| format!("({}) {}", person.pronoun(), form))
            .collect();
        println!("\nImpératif: {}", forms.join(", "));
    }
}
