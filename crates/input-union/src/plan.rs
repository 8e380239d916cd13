use fixedbitset::FixedBitSet;
use fxhash::{FxBuildHasher, FxHashMap};
use indexmap::{IndexMap, IndexSet};

use crate::{
    schema::{DefinitionId, InputObjectDefinitionId},
    LeafValue,
};

/// Everything the resolver needs for one input union, computed once at build time.
#[derive(Debug, Clone, PartialEq)]
pub enum ResolutionPlan {
    Discriminator(DiscriminatorPlan),
    LiteralTag(LiteralTagPlan),
    Ordered(OrderedPlan),
    Structural(StructuralPlan),
    OneOf(OneOfPlan),
}

#[derive(Debug, Clone, PartialEq)]
pub struct DiscriminatorPlan {
    pub field: String,
    /// Member name to member, in flattened declaration order.
    pub members: IndexMap<String, InputObjectDefinitionId, FxBuildHasher>,
    pub default_member_id: Option<InputObjectDefinitionId>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct LiteralTagPlan {
    pub field: String,
    /// Leaf type shared by the tag field of every member.
    pub tag_type: DefinitionId,
    pub members: FxHashMap<LiteralKey, InputObjectDefinitionId>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct OrderedPlan {
    /// Input object members, first match wins.
    pub members: Vec<InputObjectDefinitionId>,
    pub leaf_member: Option<DefinitionId>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct StructuralPlan {
    /// Union of the required field names of all members, bit positions of the member sets.
    pub required_fields: IndexSet<String, FxBuildHasher>,
    pub members: Vec<StructuralMember>,
    pub by_required_set: FxHashMap<FixedBitSet, usize>,
    pub leaf_member: Option<DefinitionId>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct StructuralMember {
    pub id: InputObjectDefinitionId,
    pub required: FixedBitSet,
}

#[derive(Debug, Clone, PartialEq)]
pub struct OneOfPlan {
    pub wrapper_id: InputObjectDefinitionId,
    /// Wrapper field name to the member it selects.
    pub members: IndexMap<String, InputObjectDefinitionId, FxBuildHasher>,
}

/// Hashable form of a tag literal. Floats and JSON scalars can't be used as tags.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum LiteralKey {
    Boolean(bool),
    Int(i32),
    String(String),
}

impl LiteralKey {
    pub(crate) fn from_leaf(value: &LeafValue) -> Option<Self> {
        match value {
            LeafValue::Boolean(b) => Some(LiteralKey::Boolean(*b)),
            LeafValue::Int(n) => Some(LiteralKey::Int(*n)),
            LeafValue::String(s) | LeafValue::Id(s) | LeafValue::Enum(s) => Some(LiteralKey::String(s.clone())),
            LeafValue::Float(_) | LeafValue::Json(_) => None,
        }
    }
}

impl StructuralPlan {
    pub(crate) fn required_set<'a>(&self, names: impl IntoIterator<Item = &'a str>) -> FixedBitSet {
        let mut set = FixedBitSet::with_capacity(self.required_fields.len());
        for name in names {
            if let Some(index) = self.required_fields.get_index_of(name) {
                set.insert(index);
            }
        }
        set
    }
}
