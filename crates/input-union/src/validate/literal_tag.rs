use std::collections::hash_map::Entry;

use fxhash::FxHashMap;

use crate::{
    plan::{LiteralKey, LiteralTagPlan},
    schema::TypeRecord,
    ResolutionPlan, ValuePath,
};

use super::{
    members::{leaf_member_ambiguity, Members},
    UnionRule, ValidateContext,
};

pub(super) fn validate(ctx: &mut ValidateContext<'_>, members: &Members, field: &str) -> Option<ResolutionPlan> {
    leaf_member_ambiguity(ctx, &members.leaves, 0);

    let graph = ctx.graph;
    let mut tag_type: Option<TypeRecord> = None;
    let mut by_literal = FxHashMap::default();

    for &member_id in &members.objects {
        let member = &graph[member_id];
        let Some(tag) = member.field(field) else {
            ctx.push(UnionRule::MissingTagField {
                member: member.name.clone(),
                field: field.to_string(),
            });
            continue;
        };

        if tag.ty.wrapping.is_list() || !tag.ty.definition_id.is_leaf() {
            ctx.push(UnionRule::TagFieldNotLeaf {
                member: member.name.clone(),
                field: field.to_string(),
                ty: graph.type_name(tag.ty),
            });
            continue;
        }

        match tag_type {
            None => tag_type = Some(tag.ty),
            Some(expected) if expected != tag.ty => {
                ctx.push(UnionRule::InconsistentTagType {
                    member: member.name.clone(),
                    field: field.to_string(),
                    ty: graph.type_name(tag.ty),
                    expected: graph.type_name(expected),
                });
                continue;
            }
            Some(_) => {}
        }

        let Some(literal) = &tag.literal else {
            ctx.push(UnionRule::TagFieldWithoutLiteral {
                member: member.name.clone(),
                field: field.to_string(),
            });
            continue;
        };

        let Some(key) = graph
            .coerce_leaf(tag.ty.definition_id, literal, ValuePath::default)
            .ok()
            .and_then(|value| LiteralKey::from_leaf(&value))
        else {
            ctx.push(UnionRule::UnsupportedTagLiteral {
                member: member.name.clone(),
                field: field.to_string(),
                literal: literal.clone(),
            });
            continue;
        };

        match by_literal.entry(key) {
            Entry::Occupied(entry) => ctx.push(UnionRule::DuplicateTagLiteral {
                first: ctx.name(*entry.get()),
                second: member.name.clone(),
                literal: literal.clone(),
            }),
            Entry::Vacant(entry) => {
                entry.insert(member_id);
            }
        }
    }

    Some(ResolutionPlan::LiteralTag(LiteralTagPlan {
        field: field.to_string(),
        tag_type: tag_type?.definition_id,
        members: by_literal,
    }))
}
