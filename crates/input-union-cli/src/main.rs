use std::process::ExitCode;

use anyhow::anyhow;
use args::{Args, Command, InputArgs, SchemaArgs};
use clap::crate_version;
use graphql_input_union::{Schema, Value};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

mod args;
mod output;

fn main() -> anyhow::Result<ExitCode> {
    let args = args::parse();
    init_logging(&args);

    tracing::debug!("input-union {}", crate_version!());

    match &args.command {
        Command::Check(schema) => check(schema),
        Command::Coerce { schema, ty, input } => coerce(schema, ty, input),
        Command::Resolve { schema, union, input } => resolve(schema, union, input),
    }
}

fn init_logging(args: &Args) {
    let env_filter = EnvFilter::new(args.log_level.env_filter());

    tracing_subscriber::registry()
        .with(args.log_format())
        .with(env_filter)
        .init();
}

fn check(args: &SchemaArgs) -> anyhow::Result<ExitCode> {
    let result = graphql_input_union::build(&args.document()?);
    output::diagnostics(result.diagnostics());

    match result.schema() {
        Some(schema) => {
            let warnings = result.diagnostics().iter_warnings().count();
            output::schema_is_valid(schema.input_union_ids().len(), warnings);
            Ok(ExitCode::SUCCESS)
        }
        None => {
            output::schema_is_invalid(result.diagnostics().iter_errors().count());
            Ok(ExitCode::FAILURE)
        }
    }
}

fn coerce(args: &SchemaArgs, ty: &str, input: &InputArgs) -> anyhow::Result<ExitCode> {
    let Some(schema) = build(args)? else {
        return Ok(ExitCode::FAILURE);
    };
    let ty = schema
        .type_record(ty)
        .ok_or_else(|| anyhow!("unknown type reference '{ty}'"))?;
    let value = Value::from(input.value()?);

    match schema.coerce(ty, &value) {
        Ok(coerced) => {
            output::json(&serde_json::to_value(&coerced)?)?;
            Ok(ExitCode::SUCCESS)
        }
        Err(errors) => {
            output::input_value_errors(&errors);
            Ok(ExitCode::FAILURE)
        }
    }
}

fn resolve(args: &SchemaArgs, union: &str, input: &InputArgs) -> anyhow::Result<ExitCode> {
    let Some(schema) = build(args)? else {
        return Ok(ExitCode::FAILURE);
    };
    let union_id = schema
        .input_union_by_name(union)
        .ok_or_else(|| anyhow!("unknown input union '{union}'"))?;
    let value = Value::from(input.value()?);

    match schema.resolve_member(union_id, &value) {
        Ok(member_id) => {
            println!("{}", schema.definition_name(member_id));
            Ok(ExitCode::SUCCESS)
        }
        Err(error) => {
            output::input_value_errors(&[error]);
            Ok(ExitCode::FAILURE)
        }
    }
}

/// Schema errors are reported, `None` means the schema is invalid.
fn build(args: &SchemaArgs) -> anyhow::Result<Option<Schema>> {
    let result = graphql_input_union::build(&args.document()?);
    output::diagnostics(result.diagnostics());
    Ok(result.into_result().ok())
}
