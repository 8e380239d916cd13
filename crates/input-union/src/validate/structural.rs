use fxhash::FxHashMap;
use indexmap::IndexSet;

use crate::{
    plan::{StructuralMember, StructuralPlan},
    schema::InputObjectDefinitionRecord,
    ResolutionPlan,
};

use super::{
    members::{leaf_member_ambiguity, Members},
    UnionRule, ValidateContext,
};

/// No member may accept all the required fields of another one, otherwise a value holding exactly
/// those fields matches both.
pub(super) fn validate(ctx: &mut ValidateContext<'_>, members: &Members) -> ResolutionPlan {
    leaf_member_ambiguity(ctx, &members.leaves, 1);

    let graph = ctx.graph;
    for (i, &a) in members.objects.iter().enumerate() {
        for &b in &members.objects[i + 1..] {
            let (a, b) = (&graph[a], &graph[b]);
            let (first, second) = if accepts_required_fields(b, a) {
                (a, b)
            } else if accepts_required_fields(a, b) {
                (b, a)
            } else {
                continue;
            };
            ctx.push(UnionRule::AmbiguousMembers {
                first: first.name.clone(),
                second: second.name.clone(),
                fields: required_fields(first).map(str::to_string).collect(),
            });
        }
    }

    let universe = members
        .objects
        .iter()
        .flat_map(|&id| required_fields(&graph[id]))
        .map(str::to_string)
        .collect::<IndexSet<_, _>>();

    let mut plan = StructuralPlan {
        required_fields: universe,
        members: Vec::with_capacity(members.objects.len()),
        by_required_set: FxHashMap::default(),
        leaf_member: members.leaves.first().copied(),
    };
    for &id in &members.objects {
        let required = plan.required_set(required_fields(&graph[id]));
        plan.by_required_set.entry(required.clone()).or_insert(plan.members.len());
        plan.members.push(StructuralMember { id, required });
    }

    ResolutionPlan::Structural(plan)
}

fn required_fields(input_object: &InputObjectDefinitionRecord) -> impl Iterator<Item = &str> + '_ {
    input_object
        .fields
        .iter()
        .filter(|field| field.is_required())
        .map(|field| field.name.as_str())
}

/// Does `candidate` declare every required field of `member`?
fn accepts_required_fields(candidate: &InputObjectDefinitionRecord, member: &InputObjectDefinitionRecord) -> bool {
    required_fields(member).all(|name| candidate.field(name).is_some())
}
