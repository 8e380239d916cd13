use fxhash::FxBuildHasher;
use indexmap::IndexMap;

use crate::{
    plan::DiscriminatorPlan,
    schema::{DefinitionId, InputObjectDefinitionId},
    ResolutionPlan,
};

use super::{
    members::{leaf_member_ambiguity, Members},
    UnionRule, ValidateContext,
};

pub(super) fn validate(
    ctx: &mut ValidateContext<'_>,
    members: &Members,
    field: &str,
    default_member_id: Option<DefinitionId>,
) -> ResolutionPlan {
    leaf_member_ambiguity(ctx, &members.leaves, 0);

    let graph = ctx.graph;
    let mut by_name = IndexMap::<String, InputObjectDefinitionId, FxBuildHasher>::default();
    for &member_id in &members.objects {
        let member = &graph[member_id];
        if default_member_id.is_none() && member.field(field).is_some() {
            ctx.push(UnionRule::ReservedDiscriminatorField {
                member: member.name.clone(),
                field: field.to_string(),
            });
        }
        by_name.insert(member.name.clone(), member_id);
    }

    let default_member_id = default_member_id.and_then(|default_member_id| {
        let found = default_member_id
            .as_input_object()
            .filter(|id| by_name.values().any(|member_id| member_id == id));
        if found.is_none() {
            ctx.push(UnionRule::UnknownDefaultMember {
                member: ctx.name(default_member_id),
            });
        }
        found
    });

    ResolutionPlan::Discriminator(DiscriminatorPlan {
        field: field.to_string(),
        members: by_name,
        default_member_id,
    })
}
