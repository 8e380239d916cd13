use crate::{
    coerce::InputValueCoercer, plan::DiscriminatorPlan, schema::DefinitionId, schema::InputUnionDefinitionId,
    InputValueError, Value,
};

use super::{expect_object, union_name, Resolution};

/// The discriminator field names the member. It is consumed here and never reaches the member.
pub(super) fn resolve<'s, 'v>(
    coercer: &InputValueCoercer<'s>,
    union_id: InputUnionDefinitionId,
    plan: &'s DiscriminatorPlan,
    value: &'v Value,
) -> Result<Resolution<'s, 'v>, InputValueError> {
    let fields = expect_object(coercer, union_id, value)?;

    let member_id = match fields.get(&plan.field) {
        None | Some(Value::Null) => plan
            .default_member_id
            .ok_or_else(|| InputValueError::MissingDiscriminator {
                union: union_name(coercer, union_id),
                field: plan.field.clone(),
                path: coercer.path(),
            })?,
        Some(discriminator) => discriminator
            .as_str()
            .and_then(|name| plan.members.get(name).copied())
            .ok_or_else(|| InputValueError::UnrecognizedDiscriminator {
                union: union_name(coercer, union_id),
                value: discriminator.to_string(),
                expected: plan.members.keys().cloned().collect(),
                path: coercer.path(),
            })?,
    };

    Ok(Resolution::Member {
        member_id: DefinitionId::InputObject(member_id),
        value,
        excluded_field: Some(&plan.field),
    })
}
