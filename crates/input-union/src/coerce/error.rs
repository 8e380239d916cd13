use std::fmt;

use itertools::Itertools;

use crate::Value;

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum InputValueError {
    #[error("Found a null where we expected a {expected}{path}")]
    UnexpectedNull { expected: String, path: ValuePath },
    #[error("Found a {actual} value where we expected a {expected}{path}")]
    MissingList {
        actual: ValueKind,
        expected: String,
        path: ValuePath,
    },
    #[error("Found a {actual} value where we expected a '{name}' input object{path}")]
    MissingObject {
        name: String,
        actual: ValueKind,
        path: ValuePath,
    },
    #[error("Found a {actual} value where we expected a {expected} scalar{path}")]
    IncorrectScalarType {
        actual: ValueKind,
        expected: String,
        path: ValuePath,
    },
    #[error("Found value {actual} which cannot be coerced into a {expected} scalar{path}")]
    IncorrectScalarValue {
        actual: String,
        expected: String,
        path: ValuePath,
    },
    #[error("Found a {actual} value where we expected a {r#enum} enum value{path}")]
    IncorrectEnumValueType {
        r#enum: String,
        actual: ValueKind,
        path: ValuePath,
    },
    #[error("Unknown enum value '{value}' for enum {r#enum}{path}")]
    UnknownEnumValue {
        r#enum: String,
        value: String,
        path: ValuePath,
    },
    #[error("Input object {input_object} does not have a field named '{name}'{path}")]
    UnknownInputField {
        input_object: String,
        name: String,
        path: ValuePath,
    },
    #[error("Field {field} only accepts {expected}, found {actual}{path}")]
    LiteralMismatch {
        /// `InputObject.field`
        field: String,
        expected: String,
        actual: String,
        path: ValuePath,
    },
    #[error("Default value of {input_object}.{field} depends on itself{path}")]
    DefaultValueCycle {
        input_object: String,
        field: String,
        path: ValuePath,
    },
    #[error("Found a {actual} value where we expected an object for input union '{union}'{path}")]
    ExpectedObject {
        union: String,
        actual: ValueKind,
        path: ValuePath,
    },
    #[error("Missing discriminator field '{field}' for input union '{union}'{path}")]
    MissingDiscriminator {
        union: String,
        field: String,
        path: ValuePath,
    },
    #[error(
        "Unrecognized discriminator value {value} for input union '{union}', expected one of: {}{path}",
        .expected.join(", ")
    )]
    UnrecognizedDiscriminator {
        union: String,
        value: String,
        expected: Vec<String>,
        path: ValuePath,
    },
    #[error("Missing tag field '{field}' for input union '{union}'{path}")]
    MissingTagField {
        union: String,
        field: String,
        path: ValuePath,
    },
    #[error("Unrecognized value {value} for tag field '{field}' of input union '{union}'{path}")]
    UnrecognizedTag {
        union: String,
        field: String,
        value: String,
        path: ValuePath,
    },
    #[error("No member of input union '{union}' matches the value{path}{}", format_attempts(.attempts))]
    NoMatchingMember {
        union: String,
        attempts: Vec<MemberAttempt>,
        path: ValuePath,
    },
    #[error("Value matches several members of input union '{union}': {}{path}", .members.join(", "))]
    AmbiguousMembers {
        union: String,
        members: Vec<String>,
        path: ValuePath,
    },
    #[error(
        "No member of input union '{union}' was selected, exactly one of {} must be set{path}",
        .fields.join(", ")
    )]
    NoMemberSelected {
        union: String,
        fields: Vec<String>,
        path: ValuePath,
    },
    #[error(
        "Multiple members of input union '{union}' were selected ({}), exactly one must be set{path}",
        .fields.join(", ")
    )]
    MultipleMembersSelected {
        union: String,
        fields: Vec<String>,
        path: ValuePath,
    },
}

impl InputValueError {
    pub fn path(&self) -> &ValuePath {
        match self {
            InputValueError::UnexpectedNull { path, .. }
            | InputValueError::MissingList { path, .. }
            | InputValueError::MissingObject { path, .. }
            | InputValueError::IncorrectScalarType { path, .. }
            | InputValueError::IncorrectScalarValue { path, .. }
            | InputValueError::IncorrectEnumValueType { path, .. }
            | InputValueError::UnknownEnumValue { path, .. }
            | InputValueError::UnknownInputField { path, .. }
            | InputValueError::LiteralMismatch { path, .. }
            | InputValueError::DefaultValueCycle { path, .. }
            | InputValueError::ExpectedObject { path, .. }
            | InputValueError::MissingDiscriminator { path, .. }
            | InputValueError::UnrecognizedDiscriminator { path, .. }
            | InputValueError::MissingTagField { path, .. }
            | InputValueError::UnrecognizedTag { path, .. }
            | InputValueError::NoMatchingMember { path, .. }
            | InputValueError::AmbiguousMembers { path, .. }
            | InputValueError::NoMemberSelected { path, .. }
            | InputValueError::MultipleMembersSelected { path, .. } => path,
        }
    }
}

/// Why a member was rejected during order-based resolution.
#[derive(Debug, Clone, PartialEq)]
pub struct MemberAttempt {
    pub member: String,
    pub errors: Vec<InputValueError>,
}

fn format_attempts(attempts: &[MemberAttempt]) -> String {
    if attempts.is_empty() {
        return String::new();
    }
    format!(
        ". Tried {}",
        attempts
            .iter()
            .format_with(", ", |attempt, f| f(&format_args!(
                "{} ({})",
                attempt.member,
                attempt.errors.iter().join("; ")
            )))
    )
}

/// Location of a value within the submitted input, rendered as ` at path '.animals.0.name'`.
///
/// An empty path renders as nothing, so it can be appended to any message.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ValuePath(Vec<ValuePathSegment>);

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValuePathSegment {
    Field(String),
    Index(usize),
}

impl ValuePath {
    pub fn segments(&self) -> &[ValuePathSegment] {
        &self.0
    }

    pub fn is_root(&self) -> bool {
        self.0.is_empty()
    }
}

impl FromIterator<ValuePathSegment> for ValuePath {
    fn from_iter<T: IntoIterator<Item = ValuePathSegment>>(iter: T) -> Self {
        ValuePath(iter.into_iter().collect())
    }
}

impl fmt::Display for ValuePath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.0.is_empty() {
            return Ok(());
        }
        f.write_str(" at path '")?;
        for segment in &self.0 {
            match segment {
                ValuePathSegment::Field(name) => write!(f, ".{name}")?,
                ValuePathSegment::Index(index) => write!(f, ".{index}")?,
            }
        }
        f.write_str("'")
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, strum::Display)]
pub enum ValueKind {
    String,
    Integer,
    Enum,
    Float,
    Object,
    Boolean,
    List,
    Null,
}

impl From<&Value> for ValueKind {
    fn from(value: &Value) -> Self {
        match value {
            Value::Null => ValueKind::Null,
            Value::Boolean(_) => ValueKind::Boolean,
            Value::Int(_) => ValueKind::Integer,
            Value::Float(_) => ValueKind::Float,
            Value::String(_) => ValueKind::String,
            Value::Enum(_) => ValueKind::Enum,
            Value::List(_) => ValueKind::List,
            Value::Object(_) => ValueKind::Object,
        }
    }
}
