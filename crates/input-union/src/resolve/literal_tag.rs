use crate::{
    coerce::InputValueCoercer,
    plan::{LiteralKey, LiteralTagPlan},
    schema::{DefinitionId, InputUnionDefinitionId},
    InputValueError, Value, ValuePath,
};

use super::{expect_object, union_name, Resolution};

pub(super) fn resolve<'s, 'v>(
    coercer: &InputValueCoercer<'s>,
    union_id: InputUnionDefinitionId,
    plan: &'s LiteralTagPlan,
    value: &'v Value,
) -> Result<Resolution<'s, 'v>, InputValueError> {
    let fields = expect_object(coercer, union_id, value)?;

    let tag = match fields.get(&plan.field) {
        None | Some(Value::Null) => {
            return Err(InputValueError::MissingTagField {
                union: union_name(coercer, union_id),
                field: plan.field.clone(),
                path: coercer.path(),
            })
        }
        Some(tag) => tag,
    };

    // The tag stays in the value, the member checks it against its literal.
    let member_id = coercer
        .schema()
        .coerce_leaf(plan.tag_type, tag, ValuePath::default)
        .ok()
        .and_then(|tag| LiteralKey::from_leaf(&tag))
        .and_then(|key| plan.members.get(&key).copied())
        .ok_or_else(|| InputValueError::UnrecognizedTag {
            union: union_name(coercer, union_id),
            field: plan.field.clone(),
            value: tag.to_string(),
            path: coercer.path(),
        })?;

    Ok(Resolution::Member {
        member_id: DefinitionId::InputObject(member_id),
        value,
        excluded_field: None,
    })
}
