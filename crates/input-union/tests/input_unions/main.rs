mod build_errors;
mod discriminator;
mod round_trip;
mod structural;

use graphql_input_union::{Schema, SchemaDocument};

#[ctor::ctor]
fn setup_logging() {
    let filter = tracing_subscriber::filter::EnvFilter::builder()
        .parse(std::env::var("RUST_LOG").unwrap_or("graphql_input_union=debug".to_string()))
        .unwrap();
    tracing_subscriber::fmt()
        .pretty()
        .with_env_filter(filter)
        .with_file(true)
        .with_line_number(true)
        .with_target(true)
        .without_time()
        .init();
}

/// CatInput and DogInput, shared by most of the strategies.
pub const ANIMALS: &str = r#"
[[enums]]
name = "DogBreed"
values = ["WHIPPET", "BEAGLE", "POODLE"]

[[input_objects]]
name = "CatInput"
fields = [
  { name = "name", type = "String!" },
  { name = "age", type = "Int" },
  { name = "livesLeft", type = "Int!" },
]

[[input_objects]]
name = "DogInput"
fields = [
  { name = "name", type = "String!" },
  { name = "age", type = "Int" },
  { name = "breed", type = "DogBreed!" },
]
"#;

pub fn document(source: &str) -> SchemaDocument {
    SchemaDocument::from_toml(source).unwrap()
}

#[track_caller]
pub fn build(source: &str) -> Schema {
    graphql_input_union::build(&document(source))
        .into_result()
        .unwrap_or_else(|diagnostics| panic!("{diagnostics}"))
}

#[track_caller]
pub fn build_errors(source: &str) -> Vec<String> {
    match graphql_input_union::build(&document(source)).into_result() {
        Ok(_) => panic!("Expected the schema to be invalid"),
        Err(diagnostics) => diagnostics.iter_errors().map(ToString::to_string).collect(),
    }
}

#[track_caller]
pub fn coerce(schema: &Schema, ty: &str, input: serde_json::Value) -> Result<serde_json::Value, Vec<String>> {
    let ty = schema.type_record(ty).unwrap();
    schema
        .coerce(ty, &input.into())
        .map(|value| serde_json::to_value(&value).unwrap())
        .map_err(|errors| errors.iter().map(ToString::to_string).collect())
}

#[track_caller]
pub fn resolve(schema: &Schema, union: &str, input: serde_json::Value) -> Result<String, String> {
    let union_id = schema.input_union_by_name(union).unwrap();
    schema
        .resolve_member(union_id, &input.into())
        .map(|member_id| schema.definition_name(member_id).to_string())
        .map_err(|error| error.to_string())
}
