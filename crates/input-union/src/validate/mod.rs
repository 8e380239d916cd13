//! Build time checks of input unions, one strategy at a time.
//!
//! Every violated rule is reported, validation never stops at the first one. A union passing all
//! of its rules gets a [`ResolutionPlan`].

mod diagnostics;
mod discriminator;
mod error;
mod literal_tag;
mod members;
mod one_of;
mod ordered;
mod structural;

use crate::{
    schema::{Graph, InputUnionDefinitionId, InputUnionDefinitionRecord, Strategy},
    ResolutionPlan, SchemaOptions,
};

pub use diagnostics::Diagnostics;
pub use error::*;

#[derive(Debug, Clone, PartialEq)]
pub struct ValidatedUnion {
    pub plan: ResolutionPlan,
    /// Non-fatal findings, always empty in strict mode.
    pub warnings: Vec<SchemaError>,
}

struct ValidateContext<'a> {
    graph: &'a Graph,
    union: &'a InputUnionDefinitionRecord,
    errors: Vec<SchemaError>,
}

impl<'a> ValidateContext<'a> {
    fn push(&mut self, rule: UnionRule) {
        self.errors.push(SchemaError::InputUnion {
            union: self.union.name.clone(),
            strategy: self.union.strategy.kind(),
            rule,
        });
    }

    fn name(&self, id: impl Into<crate::schema::DefinitionId>) -> String {
        self.graph.definition_name(id.into()).to_string()
    }
}

/// Checks an input union against the rules of its strategy.
///
/// On failure every diagnostic of the union is returned, warnings included. In strict mode warnings
/// are errors.
pub fn validate_union(
    graph: &Graph,
    union_id: InputUnionDefinitionId,
    options: &SchemaOptions,
) -> Result<ValidatedUnion, Vec<SchemaError>> {
    let mut ctx = ValidateContext {
        graph,
        union: &graph[union_id],
        errors: Vec::new(),
    };

    let union = ctx.union;
    let plan = match &union.strategy {
        Strategy::Discriminator {
            field,
            default_member_id,
        } => {
            let members = members::flatten_members(&mut ctx, union_id);
            Some(discriminator::validate(&mut ctx, &members, field, *default_member_id))
        }
        Strategy::LiteralTag { field } => {
            let members = members::flatten_members(&mut ctx, union_id);
            literal_tag::validate(&mut ctx, &members, field)
        }
        Strategy::Ordered => {
            let members = members::flatten_members(&mut ctx, union_id);
            Some(ordered::validate(&mut ctx, &members))
        }
        Strategy::Structural => {
            let members = members::flatten_members(&mut ctx, union_id);
            Some(structural::validate(&mut ctx, &members))
        }
        Strategy::OneOf { wrapper_id } => Some(one_of::validate(&mut ctx, *wrapper_id)),
    };

    let is_fatal = |error: &SchemaError| options.strict || !error.is_warning();
    match plan {
        Some(plan) if !ctx.errors.iter().any(is_fatal) => Ok(ValidatedUnion {
            plan,
            warnings: ctx.errors,
        }),
        _ => {
            if ctx.errors.is_empty() {
                ctx.push(UnionRule::NoMembers);
            }
            Err(ctx.errors)
        }
    }
}
