mod ingest;

use crate::{
    schema::Schema,
    validate::validate_union,
    Diagnostics, SchemaDocument, SchemaError,
};

/// The result of a [`build()`] invocation.
#[derive(Debug)]
pub struct BuildResult {
    schema: Option<Schema>,
    diagnostics: Diagnostics,
}

impl BuildResult {
    /// `Ok()` contains the [Schema], `Err()` all [Diagnostics] as soon as one of them is fatal.
    pub fn into_result(self) -> Result<Schema, Diagnostics> {
        match self.schema {
            Some(schema) => Ok(schema),
            None => Err(self.diagnostics),
        }
    }

    pub fn schema(&self) -> Option<&Schema> {
        self.schema.as_ref()
    }

    /// Warnings and errors.
    pub fn diagnostics(&self) -> &Diagnostics {
        &self.diagnostics
    }
}

/// Builds a schema from its declarations, validating every input union and computing its
/// resolution plan.
#[tracing::instrument(skip_all)]
pub fn build(document: &SchemaDocument) -> BuildResult {
    let mut diagnostics = Diagnostics::default();
    let ingest::Ingested { graph, broken_unions } = ingest::ingest(document, &mut diagnostics);

    let mut plans = Vec::with_capacity(graph.input_union_definitions.len());
    for union_id in graph.input_union_ids() {
        if broken_unions.contains(&union_id) {
            plans.push(None);
            continue;
        }

        let union = &graph[union_id];
        match validate_union(&graph, union_id, &document.options) {
            Ok(validated) => {
                tracing::debug!("Input union '{}' ({}) is valid", union.name, union.strategy.kind());
                for warning in validated.warnings {
                    tracing::warn!("{warning}");
                    diagnostics.push_warning(warning);
                }
                plans.push(Some(validated.plan));
            }
            Err(errors) => {
                tracing::debug!(
                    "Input union '{}' ({}) has {} error(s)",
                    union.name,
                    union.strategy.kind(),
                    errors.len()
                );
                for error in errors {
                    if error.is_warning() && !document.options.strict {
                        diagnostics.push_warning(error);
                    } else {
                        diagnostics.push_fatal(error);
                    }
                }
                plans.push(None);
            }
        }
    }

    let plans = match plans.into_iter().collect::<Option<Vec<_>>>() {
        Some(plans) if !diagnostics.any_fatal() => plans,
        _ => return BuildResult { schema: None, diagnostics },
    };

    let schema = Schema { graph, plans };
    check_default_values(&schema, &mut diagnostics);
    if diagnostics.any_fatal() {
        return BuildResult { schema: None, diagnostics };
    }

    tracing::debug!(
        "Built schema with {} input object(s) and {} input union(s)",
        schema.input_object_definitions.len(),
        schema.input_union_definitions.len()
    );
    BuildResult {
        schema: Some(schema),
        diagnostics,
    }
}

/// Default values may contain input unions, so they can only be checked once all plans exist.
fn check_default_values(schema: &Schema, diagnostics: &mut Diagnostics) {
    for input_object in &schema.input_object_definitions {
        for field in &input_object.fields {
            let Some(default_value) = &field.default_value else {
                continue;
            };
            if let Err(errors) = schema.coerce(field.ty, default_value) {
                for error in errors {
                    diagnostics.push_fatal(SchemaError::InvalidDefaultValue {
                        location: format!("{}.{}", input_object.name, field.name),
                        error,
                    });
                }
            }
        }
    }
}
