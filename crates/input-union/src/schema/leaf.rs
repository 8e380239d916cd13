use crate::{InputValueError, LeafValue, Value, ValuePath};

use super::{DefinitionId, EnumDefinitionId, Graph, ScalarDefinitionId};

/// How a scalar parses its raw input. Custom scalars pick one of these behaviours.
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Deserialize, strum::Display)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum ScalarType {
    String,
    Int,
    Float,
    Boolean,
    Id,
    /// Accepts anything.
    Json,
}

impl Graph {
    pub(crate) fn coerce_leaf(
        &self,
        definition_id: DefinitionId,
        value: &Value,
        path: impl Fn() -> ValuePath,
    ) -> Result<LeafValue, InputValueError> {
        match definition_id {
            DefinitionId::Scalar(id) => self.coerce_scalar(id, value, path),
            DefinitionId::Enum(id) => self.coerce_enum(id, value, path),
            DefinitionId::InputObject(_) | DefinitionId::InputUnion(_) => unreachable!("Not a leaf type."),
        }
    }

    fn coerce_scalar(
        &self,
        id: ScalarDefinitionId,
        value: &Value,
        path: impl Fn() -> ValuePath,
    ) -> Result<LeafValue, InputValueError> {
        let scalar = &self[id];
        let incorrect_value = |actual: String| InputValueError::IncorrectScalarValue {
            actual,
            expected: scalar.name.clone(),
            path: path(),
        };

        match (scalar.ty, value) {
            (ScalarType::String, Value::String(s)) => Ok(LeafValue::String(s.clone())),
            (ScalarType::Int, Value::Int(n)) => i32::try_from(*n)
                .map(LeafValue::Int)
                .map_err(|_| incorrect_value(n.to_string())),
            (ScalarType::Int, Value::Float(f)) if can_coerce_to_int(*f) => Ok(LeafValue::Int(*f as i32)),
            (ScalarType::Int, Value::Float(f)) => Err(incorrect_value(f.to_string())),
            (ScalarType::Float, Value::Int(n)) => Ok(LeafValue::Float(*n as f64)),
            (ScalarType::Float, Value::Float(f)) => Ok(LeafValue::Float(*f)),
            (ScalarType::Boolean, Value::Boolean(b)) => Ok(LeafValue::Boolean(*b)),
            (ScalarType::Id, Value::String(s)) => Ok(LeafValue::Id(s.clone())),
            (ScalarType::Id, Value::Int(n)) => Ok(LeafValue::Id(n.to_string())),
            (ScalarType::Json, value) => Ok(LeafValue::Json(value.clone())),
            (_, value) => Err(InputValueError::IncorrectScalarType {
                actual: value.into(),
                expected: scalar.name.clone(),
                path: path(),
            }),
        }
    }

    fn coerce_enum(
        &self,
        id: EnumDefinitionId,
        value: &Value,
        path: impl Fn() -> ValuePath,
    ) -> Result<LeafValue, InputValueError> {
        let r#enum = &self[id];
        let name = match value {
            Value::Enum(name) | Value::String(name) => name,
            value => {
                return Err(InputValueError::IncorrectEnumValueType {
                    r#enum: r#enum.name.clone(),
                    actual: value.into(),
                    path: path(),
                })
            }
        };

        if r#enum.values.iter().any(|candidate| candidate == name) {
            Ok(LeafValue::Enum(name.clone()))
        } else {
            Err(InputValueError::UnknownEnumValue {
                r#enum: r#enum.name.clone(),
                value: name.clone(),
                path: path(),
            })
        }
    }
}

fn can_coerce_to_int(float: f64) -> bool {
    float.fract() == 0.0 && float >= f64::from(i32::MIN) && float <= f64::from(i32::MAX)
}
