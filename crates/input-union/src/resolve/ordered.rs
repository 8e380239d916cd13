use crate::{
    coerce::InputValueCoercer,
    plan::OrderedPlan,
    schema::{DefinitionId, InputUnionDefinitionId},
    InputValueError, MemberAttempt, Value,
};

use super::{resolve_leaf_member, union_name, Resolution};

/// Tries each member in declaration order and keeps the first one coercing without errors.
pub(super) fn resolve<'s, 'v>(
    coercer: &InputValueCoercer<'s>,
    union_id: InputUnionDefinitionId,
    plan: &'s OrderedPlan,
    value: &'v Value,
) -> Result<Resolution<'s, 'v>, InputValueError> {
    if !matches!(value, Value::Object(_)) {
        return resolve_leaf_member(coercer, union_id, plan.leaf_member, value);
    }

    let schema = coercer.schema();
    let mut attempts = Vec::with_capacity(plan.members.len());
    for &member_id in &plan.members {
        let member_id = DefinitionId::InputObject(member_id);
        let mut trial = coercer.trial();
        let coerced = trial.coerce_member(member_id, value, None);
        match trial.finish(coerced) {
            Ok(value) => return Ok(Resolution::Coerced { member_id, value }),
            Err(errors) => {
                tracing::trace!(
                    "Member {} of '{}' rejected the value with {} error(s)",
                    schema.definition_name(member_id),
                    schema[union_id].name,
                    errors.len()
                );
                attempts.push(MemberAttempt {
                    member: schema.definition_name(member_id).to_string(),
                    errors,
                });
            }
        }
    }

    Err(InputValueError::NoMatchingMember {
        union: union_name(coercer, union_id),
        attempts,
        path: coercer.path(),
    })
}
