//! Everything written to stdout and stderr besides the logs.

use colored::Colorize;
use graphql_input_union::{Diagnostics, InputValueError};

pub(crate) fn diagnostics(diagnostics: &Diagnostics) {
    for warning in diagnostics.iter_warnings() {
        eprintln!("{}: {warning}", "warning".yellow().bold());
    }
    for error in diagnostics.iter_errors() {
        eprintln!("{}: {error}", "error".red().bold());
    }
}

pub(crate) fn schema_is_valid(input_unions: usize, warnings: usize) {
    let summary = format!("✔ {input_unions} input union(s) are valid");
    if warnings == 0 {
        println!("{}", summary.green());
    } else {
        println!("{} {}", summary.green(), format!("with {warnings} warning(s)").yellow());
    }
}

pub(crate) fn schema_is_invalid(errors: usize) {
    eprintln!("{}", format!("✘ the schema has {errors} error(s)").red());
}

pub(crate) fn input_value_errors(errors: &[InputValueError]) {
    for error in errors {
        eprintln!("{}: {error}", "error".red().bold());
    }
}

pub(crate) fn json(value: &serde_json::Value) -> anyhow::Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}
