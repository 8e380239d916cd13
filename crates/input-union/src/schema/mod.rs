mod ids;
mod leaf;
mod wrapping;

use fxhash::FxHashMap;
use std::ops::Deref;

use crate::{ResolutionPlan, Value};

pub use ids::*;
pub use leaf::*;
pub(crate) use wrapping::parse_type_reference;
pub use wrapping::{ListWrapping, Wrapping};

/// All definitions of a schema, as ingested from a [`SchemaDocument`](crate::SchemaDocument).
///
/// The graph is what the strategy validator works on. Once every input union validated, it is
/// frozen into a [`Schema`] together with the resolution plans.
#[derive(Debug, Default)]
pub struct Graph {
    pub(crate) scalar_definitions: Vec<ScalarDefinitionRecord>,
    pub(crate) enum_definitions: Vec<EnumDefinitionRecord>,
    pub(crate) input_object_definitions: Vec<InputObjectDefinitionRecord>,
    pub(crate) input_union_definitions: Vec<InputUnionDefinitionRecord>,
    pub(crate) definitions_by_name: FxHashMap<String, DefinitionId>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum DefinitionId {
    Scalar(ScalarDefinitionId),
    Enum(EnumDefinitionId),
    InputObject(InputObjectDefinitionId),
    InputUnion(InputUnionDefinitionId),
}

impl DefinitionId {
    pub fn is_leaf(&self) -> bool {
        matches!(self, DefinitionId::Scalar(_) | DefinitionId::Enum(_))
    }

    pub fn as_input_object(&self) -> Option<InputObjectDefinitionId> {
        match self {
            DefinitionId::InputObject(id) => Some(*id),
            _ => None,
        }
    }

    pub fn as_input_union(&self) -> Option<InputUnionDefinitionId> {
        match self {
            DefinitionId::InputUnion(id) => Some(*id),
            _ => None,
        }
    }
}

impl From<ScalarDefinitionId> for DefinitionId {
    fn from(id: ScalarDefinitionId) -> Self {
        DefinitionId::Scalar(id)
    }
}

impl From<EnumDefinitionId> for DefinitionId {
    fn from(id: EnumDefinitionId) -> Self {
        DefinitionId::Enum(id)
    }
}

impl From<InputObjectDefinitionId> for DefinitionId {
    fn from(id: InputObjectDefinitionId) -> Self {
        DefinitionId::InputObject(id)
    }
}

impl From<InputUnionDefinitionId> for DefinitionId {
    fn from(id: InputUnionDefinitionId) -> Self {
        DefinitionId::InputUnion(id)
    }
}

/// A named type and its wrappers, e.g. `[CatInput!]!`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TypeRecord {
    pub definition_id: DefinitionId,
    pub wrapping: Wrapping,
}

impl From<DefinitionId> for TypeRecord {
    fn from(definition_id: DefinitionId) -> Self {
        TypeRecord {
            definition_id,
            wrapping: Wrapping::nullable(),
        }
    }
}

#[derive(Debug)]
pub struct ScalarDefinitionRecord {
    pub name: String,
    pub ty: ScalarType,
}

#[derive(Debug)]
pub struct EnumDefinitionRecord {
    pub name: String,
    pub values: Vec<String>,
}

#[derive(Debug)]
pub struct InputObjectDefinitionRecord {
    pub name: String,
    /// In declaration order, names are unique.
    pub fields: Vec<InputValueDefinitionRecord>,
}

impl InputObjectDefinitionRecord {
    pub fn field(&self, name: &str) -> Option<&InputValueDefinitionRecord> {
        self.fields.iter().find(|field| field.name == name)
    }
}

#[derive(Debug)]
pub struct InputValueDefinitionRecord {
    pub name: String,
    pub ty: TypeRecord,
    pub default_value: Option<Value>,
    /// Restricts the field to a single fixed value.
    pub literal: Option<Value>,
}

impl InputValueDefinitionRecord {
    /// A field must be provided when its type is non-null and it has no default value.
    pub fn is_required(&self) -> bool {
        self.ty.wrapping.is_required() && self.default_value.is_none()
    }
}

#[derive(Debug)]
pub struct InputUnionDefinitionRecord {
    pub name: String,
    /// Members as declared. A tagged wrapper declares none, its members are the wrapper field types.
    pub member_ids: Vec<DefinitionId>,
    pub strategy: Strategy,
}

/// How the members of an input union are told apart.
#[derive(Debug, Clone, PartialEq)]
pub enum Strategy {
    /// A reserved field holds the name of the member type.
    Discriminator {
        field: String,
        default_member_id: Option<DefinitionId>,
    },
    /// Every member declares the same field with a distinct literal.
    LiteralTag { field: String },
    /// The first member, in declaration order, accepting the value wins.
    Ordered,
    /// The set of required fields identifies the member.
    Structural,
    /// Exactly one field of the wrapper input object is set, its type is the member.
    OneOf { wrapper_id: InputObjectDefinitionId },
}

impl Strategy {
    pub fn kind(&self) -> StrategyKind {
        match self {
            Strategy::Discriminator { .. } => StrategyKind::Discriminator,
            Strategy::LiteralTag { .. } => StrategyKind::LiteralTag,
            Strategy::Ordered => StrategyKind::Ordered,
            Strategy::Structural => StrategyKind::Structural,
            Strategy::OneOf { .. } => StrategyKind::OneOf,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, strum::Display)]
pub enum StrategyKind {
    #[strum(serialize = "discriminator")]
    Discriminator,
    #[strum(serialize = "literal tag")]
    LiteralTag,
    #[strum(serialize = "ordered")]
    Ordered,
    #[strum(serialize = "structural")]
    Structural,
    #[strum(serialize = "oneOf")]
    OneOf,
}

impl Graph {
    pub fn definition_by_name(&self, name: &str) -> Option<DefinitionId> {
        self.definitions_by_name.get(name).copied()
    }

    pub fn input_union_by_name(&self, name: &str) -> Option<InputUnionDefinitionId> {
        self.definition_by_name(name)?.as_input_union()
    }

    pub fn input_object_by_name(&self, name: &str) -> Option<InputObjectDefinitionId> {
        self.definition_by_name(name)?.as_input_object()
    }

    pub fn input_union_ids(&self) -> impl ExactSizeIterator<Item = InputUnionDefinitionId> {
        (0..self.input_union_definitions.len()).map(InputUnionDefinitionId::from)
    }

    pub fn definition_name(&self, id: DefinitionId) -> &str {
        match id {
            DefinitionId::Scalar(id) => &self[id].name,
            DefinitionId::Enum(id) => &self[id].name,
            DefinitionId::InputObject(id) => &self[id].name,
            DefinitionId::InputUnion(id) => &self[id].name,
        }
    }

    pub fn type_name(&self, ty: TypeRecord) -> String {
        ty.wrapping.format(self.definition_name(ty.definition_id))
    }

    /// Resolves a type reference such as `[AnimalInput!]` against the schema definitions.
    pub fn type_record(&self, reference: &str) -> Option<TypeRecord> {
        let (name, wrapping) = parse_type_reference(reference)?;
        Some(TypeRecord {
            definition_id: self.definition_by_name(name)?,
            wrapping,
        })
    }
}

/// An immutable schema: the definitions and one resolution plan per input union.
///
/// Nothing is mutated after build, so a schema can be shared across threads.
#[derive(Debug)]
pub struct Schema {
    pub(crate) graph: Graph,
    pub(crate) plans: Vec<ResolutionPlan>,
}

impl Schema {
    pub fn plan(&self, id: InputUnionDefinitionId) -> &ResolutionPlan {
        &self.plans[usize::from(id)]
    }
}

impl Deref for Schema {
    type Target = Graph;

    fn deref(&self) -> &Self::Target {
        &self.graph
    }
}
