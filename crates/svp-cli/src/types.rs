//! # Types Subcommand
//!
//! Lists the Schema.org types the toolkit knows about and which of them
//! have a validator. With `--values`, lists the enumerated property values
//! (offer availability, event status and attendance mode) with their URIs.

use std::fmt::Debug;

use anyhow::Result;
use clap::Args;

use svp_core::{Availability, EventAttendanceMode, EventStatus, SchemaType};

/// Arguments for the `svp types` subcommand.
#[derive(Args, Debug)]
pub struct TypesArgs {
    /// Only list types that can be validated.
    #[arg(long)]
    pub validated: bool,

    /// List enumerated property values and their URIs instead of types.
    #[arg(long, conflicts_with = "validated")]
    pub values: bool,
}

pub fn run_types(args: &TypesArgs) -> Result<u8> {
    if args.values {
        print!("{}", render_values());
    } else {
        print!("{}", render_types(args.validated));
    }
    Ok(0)
}

pub fn render_types(validated_only: bool) -> String {
    let mut out = String::new();
    for ty in SchemaType::all() {
        if validated_only && !ty.is_validated() {
            continue;
        }
        let role = if ty.is_top_level() { "document" } else { "nested" };
        let status = if ty.is_validated() { "validated" } else { "-" };
        out.push_str(&format!("{:<20} {:<10} {status}\n", ty.as_str(), role));
    }
    out
}

/// One section per vocabulary, headed by the property it fills.
pub fn render_values() -> String {
    let mut out = String::new();
    push_section(&mut out, "availability", Availability::all(), Availability::uri);
    push_section(&mut out, "eventStatus", EventStatus::all(), EventStatus::uri);
    push_section(
        &mut out,
        "eventAttendanceMode",
        EventAttendanceMode::all(),
        EventAttendanceMode::uri,
    );
    out
}

fn push_section<T: Debug>(
    out: &mut String,
    property: &str,
    values: &[T],
    uri: fn(&T) -> &'static str,
) {
    out.push_str(&format!("{property}:\n"));
    for value in values {
        let name = format!("{value:?}");
        out.push_str(&format!("  {name:<20} {}\n", uri(value)));
    }
}
