mod discriminator;
mod literal_tag;
mod one_of;
mod ordered;
mod structural;

use indexmap::IndexMap;

use crate::{
    coerce::InputValueCoercer,
    schema::{DefinitionId, InputObjectDefinitionId, InputUnionDefinitionId},
    CoercedValue, InputValueError, ResolutionPlan, Value,
};

/// Outcome of the discrimination of a value against an input union.
pub(crate) enum Resolution<'s, 'v> {
    /// `value` must now be coerced against the member.
    Member {
        member_id: DefinitionId,
        value: &'v Value,
        excluded_field: Option<&'s str>,
    },
    /// The value of wrapper field `field` must be coerced against the member.
    WrapperField {
        field: &'s str,
        member_id: InputObjectDefinitionId,
        value: &'v Value,
    },
    /// Resolution had to coerce the value already.
    Coerced { member_id: DefinitionId, value: CoercedValue },
}

impl Resolution<'_, '_> {
    pub(crate) fn member_id(&self) -> DefinitionId {
        match self {
            Resolution::Member { member_id, .. } | Resolution::Coerced { member_id, .. } => *member_id,
            Resolution::WrapperField { member_id, .. } => DefinitionId::InputObject(*member_id),
        }
    }
}

pub(crate) fn resolve<'s, 'v>(
    coercer: &InputValueCoercer<'s>,
    union_id: InputUnionDefinitionId,
    value: &'v Value,
) -> Result<Resolution<'s, 'v>, InputValueError> {
    let schema = coercer.schema();
    let resolution = match schema.plan(union_id) {
        ResolutionPlan::Discriminator(plan) => discriminator::resolve(coercer, union_id, plan, value),
        ResolutionPlan::LiteralTag(plan) => literal_tag::resolve(coercer, union_id, plan, value),
        ResolutionPlan::Ordered(plan) => ordered::resolve(coercer, union_id, plan, value),
        ResolutionPlan::Structural(plan) => structural::resolve(coercer, union_id, plan, value),
        ResolutionPlan::OneOf(plan) => one_of::resolve(coercer, union_id, plan, value),
    }?;

    tracing::trace!(
        "Input union '{}' resolved to {}",
        schema[union_id].name,
        schema.definition_name(resolution.member_id())
    );
    Ok(resolution)
}

fn expect_object<'v>(
    coercer: &InputValueCoercer<'_>,
    union_id: InputUnionDefinitionId,
    value: &'v Value,
) -> Result<&'v IndexMap<String, Value>, InputValueError> {
    value
        .as_object()
        .ok_or_else(|| expected_object(coercer, union_id, value))
}

fn expected_object(coercer: &InputValueCoercer<'_>, union_id: InputUnionDefinitionId, value: &Value) -> InputValueError {
    InputValueError::ExpectedObject {
        union: union_name(coercer, union_id),
        actual: value.into(),
        path: coercer.path(),
    }
}

/// A non-object value can only be the leaf member, if the union has one.
fn resolve_leaf_member<'s, 'v>(
    coercer: &InputValueCoercer<'s>,
    union_id: InputUnionDefinitionId,
    leaf_member: Option<DefinitionId>,
    value: &'v Value,
) -> Result<Resolution<'s, 'v>, InputValueError> {
    let Some(member_id) = leaf_member else {
        return Err(expected_object(coercer, union_id, value));
    };
    let value = coercer.coerce_leaf(member_id, value)?;
    Ok(Resolution::Coerced { member_id, value })
}

fn union_name(coercer: &InputValueCoercer<'_>, union_id: InputUnionDefinitionId) -> String {
    coercer.schema()[union_id].name.clone()
}
