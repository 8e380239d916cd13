use fixedbitset::FixedBitSet;
use indexmap::IndexMap;
use serde::{ser::SerializeMap, Serialize, Serializer};

use crate::{
    schema::{DefinitionId, Schema, TypeRecord},
    ResolutionPlan, Value,
};

/// A value that went through coercion. Every object knows which input object it was coerced
/// into, so union positions carry their resolved member.
#[derive(Debug, Clone, PartialEq)]
pub enum CoercedValue {
    Null,
    Leaf { type_name: String, value: LeafValue },
    List(Vec<CoercedValue>),
    Object(CoercedObject),
}

#[derive(Debug, Clone, PartialEq)]
pub struct CoercedObject {
    pub type_name: String,
    /// Declared fields in declaration order.
    pub fields: IndexMap<String, CoercedValue>,
    /// Positions in `fields` filled from a default value rather than from the input.
    pub defaulted: FixedBitSet,
}

impl CoercedObject {
    pub fn is_defaulted(&self, field: &str) -> bool {
        self.fields
            .get_index_of(field)
            .is_some_and(|index| self.defaulted.contains(index))
    }
}

/// A parsed scalar or enum value.
#[derive(Debug, Clone, PartialEq)]
pub enum LeafValue {
    Boolean(bool),
    Int(i32),
    Float(f64),
    String(String),
    Id(String),
    Enum(String),
    Json(Value),
}

impl CoercedValue {
    /// Name of the type this value was coerced into, `None` for null and lists.
    pub fn member_type_name(&self) -> Option<&str> {
        match self {
            CoercedValue::Leaf { type_name, .. } => Some(type_name),
            CoercedValue::Object(object) => Some(&object.type_name),
            CoercedValue::Null | CoercedValue::List(_) => None,
        }
    }

    pub fn as_object(&self) -> Option<&CoercedObject> {
        match self {
            CoercedValue::Object(object) => Some(object),
            _ => None,
        }
    }

    pub fn get(&self, field: &str) -> Option<&CoercedValue> {
        self.as_object()?.fields.get(field)
    }
}

impl From<&LeafValue> for Value {
    fn from(value: &LeafValue) -> Self {
        match value {
            LeafValue::Boolean(b) => Value::Boolean(*b),
            LeafValue::Int(n) => Value::Int((*n).into()),
            LeafValue::Float(f) => Value::Float(*f),
            LeafValue::String(s) | LeafValue::Id(s) => Value::String(s.clone()),
            LeafValue::Enum(name) => Value::Enum(name.clone()),
            LeafValue::Json(value) => value.clone(),
        }
    }
}

impl Serialize for LeafValue {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match self {
            LeafValue::Boolean(b) => serializer.serialize_bool(*b),
            LeafValue::Int(n) => serializer.serialize_i32(*n),
            LeafValue::Float(f) => serializer.serialize_f64(*f),
            LeafValue::String(s) | LeafValue::Id(s) | LeafValue::Enum(s) => serializer.serialize_str(s),
            LeafValue::Json(value) => value.serialize(serializer),
        }
    }
}

/// Objects are written with a leading `__typename` entry naming the coerced type.
impl Serialize for CoercedValue {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match self {
            CoercedValue::Null => serializer.serialize_none(),
            CoercedValue::Leaf { value, .. } => value.serialize(serializer),
            CoercedValue::List(items) => serializer.collect_seq(items),
            CoercedValue::Object(object) => {
                let mut map = serializer.serialize_map(Some(object.fields.len() + 1))?;
                map.serialize_entry("__typename", &object.type_name)?;
                for (name, value) in &object.fields {
                    map.serialize_entry(name, value)?;
                }
                map.end()
            }
        }
    }
}

impl Schema {
    /// Rebuilds a raw value which, submitted again for `ty`, resolves to the same members.
    ///
    /// Discriminator unions get their discriminator field back and oneOf unions are wrapped in
    /// the field selecting the member. Fields filled from their default value are left out.
    pub fn to_input_value(&self, ty: TypeRecord, value: &CoercedValue) -> Value {
        match value {
            CoercedValue::Null => Value::Null,
            CoercedValue::Leaf { value, .. } => value.into(),
            CoercedValue::List(items) => Value::List(items.iter().map(|item| self.to_input_value(ty, item)).collect()),
            CoercedValue::Object(object) => self.object_to_input_value(ty.definition_id, object),
        }
    }

    fn object_to_input_value(&self, definition_id: DefinitionId, object: &CoercedObject) -> Value {
        let member_fields = || -> IndexMap<String, Value> {
            let member = self.input_object_by_name(&object.type_name).map(|id| &self[id]);
            object
                .fields
                .iter()
                .enumerate()
                .filter(|(index, _)| !object.defaulted.contains(*index))
                .map(|(_, (name, value))| {
                    let value = match member.and_then(|member| member.field(name)) {
                        Some(field) => self.to_input_value(field.ty, value),
                        None => Value::Null,
                    };
                    (name.clone(), value)
                })
                .collect()
        };

        let DefinitionId::InputUnion(union_id) = definition_id else {
            return Value::Object(member_fields());
        };

        match self.plan(union_id) {
            ResolutionPlan::Discriminator(plan) => {
                let mut fields = IndexMap::with_capacity(object.fields.len() + 1);
                fields.insert(plan.field.clone(), Value::String(object.type_name.clone()));
                fields.extend(member_fields());
                Value::Object(fields)
            }
            ResolutionPlan::OneOf(plan) => {
                let Some(wrapper_field) = plan
                    .members
                    .iter()
                    .find(|(_, id)| self[**id].name == object.type_name)
                    .map(|(name, _)| name.clone())
                else {
                    return Value::Object(member_fields());
                };
                Value::object([(wrapper_field, Value::Object(member_fields()))])
            }
            _ => Value::Object(member_fields()),
        }
    }
}
