//! Implementation of the `verbiste auxiliary` command.

use clap::Args;
use miette::IntoDiagnostic;
use serde::Serialize;
use verbiste_semantics::{is_vandertramp_verb, resolve_auxiliary, Auxiliary};

/// Arguments for the auxiliary command.
#[derive(Debug, Args)]
pub struct AuxiliaryArgs {
    /// Verb infinitive, e.g. "descendre"
    pub verb: String,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

/// JSON output for the auxiliary class of a verb.
#[derive(Serialize)]
struct AuxiliaryJson<'a> {
    verb: &'a str,
    class: String,
    allowed: Vec<&'static str>,
    default: &'static str,
    vandertramp: bool,
}

/// Run the auxiliary command.
pub fn run_auxiliary(args: AuxiliaryArgs) -> miette::Result<i32> {
    let class = resolve_auxiliary(&args.verb);

    if args.json {
        let output = AuxiliaryJson {
            verb: &args.verb,
            class: class.to_string(),
            allowed: class.allowed().iter().copied().map(Auxiliary::as_key).collect(),
            default: class.default_auxiliary().as_key(),
            vandertramp: is_vandertramp_verb(&args.verb),
        };
        println!("{}", serde_json::to_string_pretty(&output).into_diagnostic()?);
    } else {
        println!("{}: {}", args.verb, class);
        if class.is_ambiguous() {
            println!(
                "  {} by default, {} when used with a direct object",
                class.default_auxiliary(),
                Auxiliary::Avoir
            );
        }
    }

    Ok(exitcode::OK)
}
