//! Input unions for GraphQL-like schemas.
//!
//! An input union accepts a value of one of its member types. Which member a raw client value
//! represents is decided by the strategy of the union: a discriminator field, a literal tag
//! field, declaration order, the set of required fields or a oneOf wrapper object.
//!
//! [`build()`] validates every input union of a [`SchemaDocument`] and computes its
//! [`ResolutionPlan`]. The resulting [`Schema`] is immutable and resolves and coerces values with
//! [`Schema::coerce()`] and [`Schema::resolve_member()`].

#![deny(unsafe_code)]

mod builder;
mod coerce;
mod coerced;
mod document;
mod plan;
mod resolve;
pub mod schema;
mod validate;
mod value;

pub use builder::{build, BuildResult};
pub use coerce::{InputValueError, MemberAttempt, ValueKind, ValuePath, ValuePathSegment};
pub use coerced::{CoercedObject, CoercedValue, LeafValue};
pub use document::{
    EnumDeclaration, InputFieldDeclaration, InputObjectDeclaration, InputUnionDeclaration, ScalarDeclaration,
    SchemaDocument, SchemaOptions, StrategyDeclaration,
};
pub use plan::{
    DiscriminatorPlan, LiteralKey, LiteralTagPlan, OneOfPlan, OrderedPlan, ResolutionPlan, StructuralMember,
    StructuralPlan,
};
pub use schema::{ScalarType, Schema};
pub use validate::{validate_union, Diagnostics, SchemaError, UnionRule, ValidatedUnion};
pub use value::Value;
