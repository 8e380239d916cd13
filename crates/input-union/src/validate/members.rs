use crate::schema::{DefinitionId, Graph, InputObjectDefinitionId, InputUnionDefinitionId, Strategy};

use super::{UnionRule, ValidateContext};

/// Members of a union once nested unions are replaced by their own members, in declaration order.
#[derive(Debug, Default)]
pub(super) struct Members {
    pub objects: Vec<InputObjectDefinitionId>,
    pub leaves: Vec<DefinitionId>,
}

pub(super) fn flatten_members(ctx: &mut ValidateContext<'_>, union_id: InputUnionDefinitionId) -> Members {
    if ctx.union.member_ids.is_empty() {
        ctx.push(UnionRule::NoMembers);
    }

    let mut members = Members::default();
    let mut seen = Vec::new();
    let mut on_path = vec![union_id];
    visit(ctx, union_id, &mut on_path, &mut seen, &mut members);
    members
}

fn visit(
    ctx: &mut ValidateContext<'_>,
    union_id: InputUnionDefinitionId,
    on_path: &mut Vec<InputUnionDefinitionId>,
    seen: &mut Vec<DefinitionId>,
    members: &mut Members,
) {
    let graph = ctx.graph;
    for &member_id in &graph[union_id].member_ids {
        let DefinitionId::InputUnion(nested_id) = member_id else {
            if seen.contains(&member_id) {
                ctx.push(UnionRule::DuplicateMember {
                    member: ctx.name(member_id),
                });
                continue;
            }
            seen.push(member_id);
            match member_id {
                DefinitionId::InputObject(id) => members.objects.push(id),
                leaf => members.leaves.push(leaf),
            }
            continue;
        };

        if let Some(start) = on_path.iter().position(|id| *id == nested_id) {
            let cycle = on_path[start..]
                .iter()
                .chain(std::iter::once(&nested_id))
                .map(|id| ctx.name(*id))
                .collect();
            ctx.push(UnionRule::MemberCycle { cycle });
            continue;
        }

        if matches!(graph[nested_id].strategy, Strategy::OneOf { .. }) {
            ctx.push(UnionRule::NestedOneOf {
                member: ctx.name(nested_id),
            });
            continue;
        }

        on_path.push(nested_id);
        visit(ctx, nested_id, on_path, seen, members);
        on_path.pop();
    }
}

pub(super) fn leaf_member_ambiguity(ctx: &mut ValidateContext<'_>, leaves: &[DefinitionId], allowed: usize) {
    if leaves.len() > allowed {
        let members = leaves.iter().map(|id| ctx.name(*id)).collect();
        ctx.push(UnionRule::LeafMemberAmbiguity { members, allowed });
    }
}

/// Two input objects accepting exactly the same values.
pub(super) fn structurally_identical(graph: &Graph, a: InputObjectDefinitionId, b: InputObjectDefinitionId) -> bool {
    let (a, b) = (&graph[a], &graph[b]);
    a.fields.len() == b.fields.len()
        && a.fields.iter().all(|field| {
            b.field(&field.name).is_some_and(|other| {
                field.ty == other.ty && field.literal == other.literal && field.is_required() == other.is_required()
            })
        })
}
