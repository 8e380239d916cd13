use crate::{
    coerce::InputValueCoercer,
    plan::{StructuralMember, StructuralPlan},
    schema::{DefinitionId, InputUnionDefinitionId},
    InputValueError, Value,
};

use super::{resolve_leaf_member, union_name, Resolution};

/// Matches the present keys against the required field sets of the members.
///
/// Candidates are the members whose required fields are all present. A candidate whose required
/// set is strictly included in the one of another candidate is less specific and dropped.
pub(super) fn resolve<'s, 'v>(
    coercer: &InputValueCoercer<'s>,
    union_id: InputUnionDefinitionId,
    plan: &'s StructuralPlan,
    value: &'v Value,
) -> Result<Resolution<'s, 'v>, InputValueError> {
    let Value::Object(fields) = value else {
        return resolve_leaf_member(coercer, union_id, plan.leaf_member, value);
    };

    let present = plan.required_set(fields.keys().map(String::as_str));
    let member = |member: &StructuralMember| Resolution::Member {
        member_id: DefinitionId::InputObject(member.id),
        value,
        excluded_field: None,
    };

    if let Some(&index) = plan.by_required_set.get(&present) {
        return Ok(member(&plan.members[index]));
    }

    let candidates = plan
        .members
        .iter()
        .filter(|member| member.required.is_subset(&present))
        .collect::<Vec<&StructuralMember>>();
    let most_specific = candidates
        .iter()
        .filter(|candidate| {
            !candidates.iter().any(|other| {
                candidate.required != other.required && candidate.required.is_subset(&other.required)
            })
        })
        .copied()
        .collect::<Vec<_>>();

    match most_specific.as_slice() {
        [] => Err(InputValueError::NoMatchingMember {
            union: union_name(coercer, union_id),
            attempts: Vec::new(),
            path: coercer.path(),
        }),
        [single] => Ok(member(*single)),
        several => Err(InputValueError::AmbiguousMembers {
            union: union_name(coercer, union_id),
            members: several
                .iter()
                .map(|member| coercer.schema()[member.id].name.clone())
                .collect(),
            path: coercer.path(),
        }),
    }
}
