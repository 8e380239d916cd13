use itertools::Itertools;

use crate::{schema::StrategyKind, InputValueError, Value};

/// An error detected while building a schema.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum SchemaError {
    #[error("Input union '{union}' ({strategy}): {rule}")]
    InputUnion {
        union: String,
        strategy: StrategyKind,
        rule: UnionRule,
    },
    #[error("Type '{name}' is defined more than once")]
    DuplicateDefinition { name: String },
    #[error("Field '{field}' is defined more than once on input object {input_object}")]
    DuplicateField { input_object: String, field: String },
    #[error("Input object {name} has no fields")]
    EmptyInputObject { name: String },
    #[error("Enum {name} has no values")]
    EmptyEnum { name: String },
    #[error("Unknown type '{name}' referenced by {location}")]
    UnknownType { name: String, location: String },
    #[error("Invalid type reference '{reference}' on {location}")]
    InvalidTypeReference { reference: String, location: String },
    #[error("'{name}' referenced by {location} is not an input object")]
    NotAnInputObject { name: String, location: String },
    #[error("Field {location} has a literal but its type {ty} is not a leaf type")]
    LiteralOnNonLeafField { location: String, ty: String },
    #[error("Invalid literal for {location}: {error}")]
    InvalidLiteral { location: String, error: InputValueError },
    #[error("Invalid default value for {location}: {error}")]
    InvalidDefaultValue { location: String, error: InputValueError },
    #[error("Default value {default} of {location} differs from its literal {literal}")]
    DefaultConflictsWithLiteral {
        location: String,
        default: String,
        literal: String,
    },
}

impl SchemaError {
    /// Warnings don't prevent the schema from being built, unless the schema is built in strict mode.
    pub fn is_warning(&self) -> bool {
        matches!(self, SchemaError::InputUnion { rule, .. } if rule.is_warning())
    }
}

/// A rule of an input union strategy that was violated.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum UnionRule {
    #[error("the union has no members")]
    NoMembers,
    #[error("member {member} appears more than once")]
    DuplicateMember { member: String },
    #[error("nested input unions form a cycle: {}", .cycle.join(" -> "))]
    MemberCycle { cycle: Vec<String> },
    #[error("nested input union {member} uses the oneOf strategy and cannot be flattened")]
    NestedOneOf { member: String },
    #[error(
        "leaf member ambiguity between {}, at most {allowed} leaf member is allowed",
        .members.join(", ")
    )]
    LeafMemberAmbiguity { members: Vec<String>, allowed: usize },
    #[error("member {member} declares the reserved discriminator field '{field}'")]
    ReservedDiscriminatorField { member: String, field: String },
    #[error("default member {member} is not a member of the union")]
    UnknownDefaultMember { member: String },
    #[error("member {member} has no tag field '{field}'")]
    MissingTagField { member: String, field: String },
    #[error("tag field {member}.{field} has no literal")]
    TagFieldWithoutLiteral { member: String, field: String },
    #[error("tag field {member}.{field} must have a leaf type, found {ty}")]
    TagFieldNotLeaf { member: String, field: String, ty: String },
    #[error("tag field {member}.{field} has type {ty} but previous members declare it as {expected}")]
    InconsistentTagType {
        member: String,
        field: String,
        ty: String,
        expected: String,
    },
    #[error("literal {literal} of tag field {member}.{field} cannot be used as a tag")]
    UnsupportedTagLiteral { member: String, field: String, literal: Value },
    #[error("members {first} and {second} share the tag literal {literal}")]
    DuplicateTagLiteral { first: String, second: String, literal: Value },
    #[error("member {member} is structurally identical to the earlier member {shadowed_by} and can never be selected")]
    UnreachableMember { member: String, shadowed_by: String },
    #[error(
        "ambiguous members {first} and {second}, a value with the fields {{{}}} is accepted by both",
        .fields.iter().format(", ")
    )]
    AmbiguousMembers {
        first: String,
        second: String,
        fields: Vec<String>,
    },
    #[error("wrapper {wrapper} must have at least 2 fields, found {count}")]
    WrapperTooFewFields { wrapper: String, count: usize },
    #[error("wrapper field {wrapper}.{field} must not be required")]
    WrapperRequiredField { wrapper: String, field: String },
    #[error("wrapper field {wrapper}.{field} must not have a default value")]
    WrapperFieldDefault { wrapper: String, field: String },
    #[error("wrapper field {wrapper}.{field} must have a named input object type, found {ty}")]
    WrapperFieldNotInputObject { wrapper: String, field: String, ty: String },
    #[error("members are implied by the wrapper fields and must not be declared")]
    WrapperMembersDeclared,
}

impl UnionRule {
    pub fn is_warning(&self) -> bool {
        matches!(self, UnionRule::UnreachableMember { .. })
    }
}
