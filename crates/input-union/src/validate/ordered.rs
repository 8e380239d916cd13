use crate::{plan::OrderedPlan, ResolutionPlan};

use super::{
    members::{leaf_member_ambiguity, structurally_identical, Members},
    UnionRule, ValidateContext,
};

/// A member identical to an earlier one is never selected. That's a warning, only fatal in strict
/// mode.
pub(super) fn validate(ctx: &mut ValidateContext<'_>, members: &Members) -> ResolutionPlan {
    leaf_member_ambiguity(ctx, &members.leaves, 1);

    let graph = ctx.graph;
    for (i, &member_id) in members.objects.iter().enumerate() {
        if let Some(&earlier) = members.objects[..i]
            .iter()
            .find(|&&earlier| structurally_identical(graph, earlier, member_id))
        {
            ctx.push(UnionRule::UnreachableMember {
                member: ctx.name(member_id),
                shadowed_by: ctx.name(earlier),
            });
        }
    }

    ResolutionPlan::Ordered(OrderedPlan {
        members: members.objects.clone(),
        leaf_member: members.leaves.first().copied(),
    })
}
