use crate::{coerce::InputValueCoercer, plan::OneOfPlan, schema::InputUnionDefinitionId, InputValueError, Value};

use super::{expect_object, union_name, Resolution};

/// Exactly one wrapper field must hold a non-null value, its name selects the member.
pub(super) fn resolve<'s, 'v>(
    coercer: &InputValueCoercer<'s>,
    union_id: InputUnionDefinitionId,
    plan: &'s OneOfPlan,
    value: &'v Value,
) -> Result<Resolution<'s, 'v>, InputValueError> {
    let fields = expect_object(coercer, union_id, value)?;

    if let Some(name) = fields.keys().find(|name| !plan.members.contains_key(name.as_str())) {
        return Err(InputValueError::UnknownInputField {
            input_object: coercer.schema()[plan.wrapper_id].name.clone(),
            name: name.clone(),
            path: coercer.path(),
        });
    }

    let mut selected = plan.members.iter().filter_map(|(field, &member_id)| {
        fields
            .get(field)
            .filter(|value| !value.is_null())
            .map(|value| (field.as_str(), member_id, value))
    });

    match (selected.next(), selected.next()) {
        (None, _) => Err(InputValueError::NoMemberSelected {
            union: union_name(coercer, union_id),
            fields: plan.members.keys().cloned().collect(),
            path: coercer.path(),
        }),
        (Some((field, member_id, value)), None) => Ok(Resolution::WrapperField { field, member_id, value }),
        (Some((first, ..)), Some((second, ..))) => Err(InputValueError::MultipleMembersSelected {
            union: union_name(coercer, union_id),
            fields: [first, second]
                .into_iter()
                .chain(selected.map(|(field, ..)| field))
                .map(str::to_string)
                .collect(),
            path: coercer.path(),
        }),
    }
}
