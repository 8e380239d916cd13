use std::{
    fs,
    io::{self, Read},
    path::{Path, PathBuf},
};

use anyhow::{anyhow, Context};
use clap::{Parser, Subcommand};
use graphql_input_union::SchemaDocument;
use tracing::Subscriber;
use tracing_subscriber::{registry::LookupSpan, Layer};

mod log;

pub(crate) use log::{LogLevel, LogStyle};

#[derive(Debug, Parser)]
#[command(name = "input-union", version)]
#[command(arg_required_else_help = true)]
/// Validates GraphQL input unions and resolves values against them
pub(crate) struct Args {
    #[command(subcommand)]
    pub command: Command,
    /// Set the logging level, logs are written to stderr
    #[arg(long = "log", env = "INPUT_UNION_LOG", global = true, default_value_t = LogLevel::Off)]
    pub log_level: LogLevel,
    /// Set the style of log output
    #[arg(long, env = "INPUT_UNION_LOG_STYLE", global = true, default_value_t = LogStyle::Text)]
    pub log_style: LogStyle,
}

#[derive(Debug, Subcommand)]
pub(crate) enum Command {
    /// Build a schema and report every input union violating the rules of its strategy
    Check(SchemaArgs),
    /// Coerce a JSON value against a type, resolving every input union on the way
    Coerce {
        #[command(flatten)]
        schema: SchemaArgs,
        /// Type reference to coerce against, such as `[AnimalInput!]`
        #[arg(long = "type", short)]
        ty: String,
        #[command(flatten)]
        input: InputArgs,
    },
    /// Print the member of an input union a JSON value resolves to
    Resolve {
        #[command(flatten)]
        schema: SchemaArgs,
        /// Name of the input union
        #[arg(long, short)]
        union: String,
        #[command(flatten)]
        input: InputArgs,
    },
}

#[derive(Debug, clap::Args)]
pub(crate) struct SchemaArgs {
    /// Path to the schema declarations, TOML or JSON depending on the extension
    #[arg(long, short, env = "INPUT_UNION_SCHEMA_PATH")]
    pub schema: PathBuf,
    /// Treat warnings as errors
    #[arg(long)]
    pub strict: bool,
}

#[derive(Debug, clap::Args)]
pub(crate) struct InputArgs {
    /// Path to the JSON input value. Read from stdin if omitted.
    #[arg(long, short)]
    pub input: Option<PathBuf>,
}

impl SchemaArgs {
    pub fn document(&self) -> anyhow::Result<SchemaDocument> {
        let source = fs::read_to_string(&self.schema)
            .with_context(|| format!("error loading schema from {}", self.schema.display()))?;

        let mut document = if has_extension(&self.schema, "json") {
            SchemaDocument::from_json(&source).map_err(|e| anyhow!("error parsing schema:\n{e}"))?
        } else {
            SchemaDocument::from_toml(&source).map_err(|e| anyhow!("error parsing schema:\n{e}"))?
        };
        document.options.strict |= self.strict;

        Ok(document)
    }
}

impl InputArgs {
    pub fn value(&self) -> anyhow::Result<serde_json::Value> {
        let source = match &self.input {
            Some(path) => {
                fs::read_to_string(path).with_context(|| format!("error loading input from {}", path.display()))?
            }
            None => {
                let mut source = String::new();
                io::stdin()
                    .read_to_string(&mut source)
                    .context("error reading input from stdin")?;
                source
            }
        };

        serde_json::from_str(&source).map_err(|e| anyhow!("error parsing input:\n{e}"))
    }
}

impl Args {
    pub fn log_format<S>(&self) -> Box<dyn Layer<S> + Send + Sync + 'static>
    where
        S: Subscriber + for<'span> LookupSpan<'span> + Send + Sync,
    {
        let layer = tracing_subscriber::fmt::layer().with_writer(io::stderr);

        match self.log_style {
            LogStyle::Text => layer.boxed(),
            LogStyle::Pretty => layer.pretty().with_file(true).with_line_number(true).boxed(),
            LogStyle::Json => layer.json().boxed(),
        }
    }
}

fn has_extension(path: &Path, extension: &str) -> bool {
    path.extension()
        .is_some_and(|candidate| candidate.eq_ignore_ascii_case(extension))
}

pub(crate) fn parse() -> Args {
    Args::parse()
}
