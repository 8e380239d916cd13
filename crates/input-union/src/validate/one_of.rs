use fxhash::FxBuildHasher;
use indexmap::IndexMap;

use crate::{plan::OneOfPlan, schema::InputObjectDefinitionId, ResolutionPlan};

use super::{UnionRule, ValidateContext};

/// Each field of the wrapper is an implicit member. Setting a field selects its member, so fields
/// can neither be required nor have a default value.
pub(super) fn validate(ctx: &mut ValidateContext<'_>, wrapper_id: InputObjectDefinitionId) -> ResolutionPlan {
    let graph = ctx.graph;
    let wrapper = &graph[wrapper_id];

    if !ctx.union.member_ids.is_empty() {
        ctx.push(UnionRule::WrapperMembersDeclared);
    }

    if wrapper.fields.len() < 2 {
        ctx.push(UnionRule::WrapperTooFewFields {
            wrapper: wrapper.name.clone(),
            count: wrapper.fields.len(),
        });
    }

    let mut members = IndexMap::<String, InputObjectDefinitionId, FxBuildHasher>::default();
    let mut leaves = Vec::new();
    for field in &wrapper.fields {
        if field.is_required() {
            ctx.push(UnionRule::WrapperRequiredField {
                wrapper: wrapper.name.clone(),
                field: field.name.clone(),
            });
        }
        if field.default_value.is_some() {
            ctx.push(UnionRule::WrapperFieldDefault {
                wrapper: wrapper.name.clone(),
                field: field.name.clone(),
            });
        }

        if field.ty.wrapping.is_list() {
            ctx.push(UnionRule::WrapperFieldNotInputObject {
                wrapper: wrapper.name.clone(),
                field: field.name.clone(),
                ty: graph.type_name(field.ty),
            });
            continue;
        }
        if field.ty.definition_id.is_leaf() {
            leaves.push(field.ty.definition_id);
            continue;
        }
        let Some(member_id) = field.ty.definition_id.as_input_object() else {
            ctx.push(UnionRule::WrapperFieldNotInputObject {
                wrapper: wrapper.name.clone(),
                field: field.name.clone(),
                ty: graph.type_name(field.ty),
            });
            continue;
        };

        if members.values().any(|id| *id == member_id) {
            ctx.push(UnionRule::DuplicateMember {
                member: ctx.name(member_id),
            });
        }
        members.insert(field.name.clone(), member_id);
    }

    super::members::leaf_member_ambiguity(ctx, &leaves, 0);

    ResolutionPlan::OneOf(OneOfPlan { wrapper_id, members })
}
