mod error;

use fixedbitset::FixedBitSet;
use indexmap::IndexMap;

use crate::{
    resolve::{resolve, Resolution},
    schema::{
        DefinitionId, InputObjectDefinitionId, InputUnionDefinitionId, InputValueDefinitionRecord, ListWrapping, Schema,
        TypeRecord, Wrapping,
    },
    CoercedObject, CoercedValue, Value,
};

pub use error::*;

impl Schema {
    /// Coerces a raw value against a declared type, resolving every input union position on the
    /// way. All errors are collected, sibling fields and list items don't stop at the first one.
    pub fn coerce(&self, ty: TypeRecord, value: &Value) -> Result<CoercedValue, Vec<InputValueError>> {
        let mut coercer = InputValueCoercer::new(self);
        let value = coercer.coerce_input_value(ty, value);
        coercer.finish(value)
    }

    /// Coerces a raw value against a single member type, with no discrimination at the root.
    pub fn coerce_member(&self, member_id: DefinitionId, value: &Value) -> Result<CoercedValue, Vec<InputValueError>> {
        let mut coercer = InputValueCoercer::new(self);
        let value = coercer.coerce_member(member_id, value, None);
        coercer.finish(value)
    }

    pub fn coerce_union(
        &self,
        union_id: InputUnionDefinitionId,
        value: &Value,
    ) -> Result<CoercedValue, Vec<InputValueError>> {
        self.coerce(TypeRecord::from(DefinitionId::InputUnion(union_id)), value)
    }

    /// Determines which member `value` represents, without coercing the rest of the value.
    pub fn resolve_member(&self, union_id: InputUnionDefinitionId, value: &Value) -> Result<DefinitionId, InputValueError> {
        let coercer = InputValueCoercer::new(self);
        resolve(&coercer, union_id, value).map(|resolution| resolution.member_id())
    }
}

#[derive(Debug, Clone, Copy)]
enum PathSegment<'s> {
    Field(&'s str),
    Index(usize),
}

/// Walks a raw value along its declared type. Errors are accumulated, a failed position is
/// replaced by a null.
pub(crate) struct InputValueCoercer<'s> {
    schema: &'s Schema,
    value_path: Vec<PathSegment<'s>>,
    /// Fields whose default value is being coerced.
    defaults_in_progress: Vec<(InputObjectDefinitionId, usize)>,
    errors: Vec<InputValueError>,
}

impl<'s> InputValueCoercer<'s> {
    fn new(schema: &'s Schema) -> Self {
        Self {
            schema,
            value_path: Vec::new(),
            defaults_in_progress: Vec::new(),
            errors: Vec::new(),
        }
    }

    pub(crate) fn schema(&self) -> &'s Schema {
        self.schema
    }

    /// A coercer starting at the same position with an empty error list. What it produces is
    /// only kept if it succeeds.
    pub(crate) fn trial(&self) -> Self {
        Self {
            schema: self.schema,
            value_path: self.value_path.clone(),
            defaults_in_progress: self.defaults_in_progress.clone(),
            errors: Vec::new(),
        }
    }

    pub(crate) fn finish(self, value: CoercedValue) -> Result<CoercedValue, Vec<InputValueError>> {
        if self.errors.is_empty() {
            Ok(value)
        } else {
            Err(self.errors)
        }
    }

    pub(crate) fn path(&self) -> ValuePath {
        self.value_path
            .iter()
            .map(|segment| match segment {
                PathSegment::Field(name) => ValuePathSegment::Field((*name).to_string()),
                PathSegment::Index(index) => ValuePathSegment::Index(*index),
            })
            .collect()
    }

    fn coerce_input_value(&mut self, ty: TypeRecord, value: &Value) -> CoercedValue {
        if ty.wrapping.is_list() && !value.is_list() && !value.is_null() {
            let mut value = self.coerce_named_type(ty.definition_id, value);
            for _ in 0..ty.wrapping.list_wrappings().len() {
                value = CoercedValue::List(vec![value]);
            }
            return value;
        }

        self.coerce_type(ty.definition_id, ty.wrapping, value)
    }

    fn coerce_type(&mut self, definition_id: DefinitionId, mut wrapping: Wrapping, value: &Value) -> CoercedValue {
        let Some(list_wrapping) = wrapping.pop_outermost_list_wrapping() else {
            if value.is_null() {
                if wrapping.is_required() {
                    self.errors.push(InputValueError::UnexpectedNull {
                        expected: format!("{}!", self.schema.definition_name(definition_id)),
                        path: self.path(),
                    });
                }
                return CoercedValue::Null;
            }
            return self.coerce_named_type(definition_id, value);
        };

        match (value, list_wrapping) {
            (Value::Null, ListWrapping::RequiredList) => {
                self.errors.push(InputValueError::UnexpectedNull {
                    expected: self.expected_list(definition_id, wrapping, list_wrapping),
                    path: self.path(),
                });
                CoercedValue::Null
            }
            (Value::Null, ListWrapping::NullableList) => CoercedValue::Null,
            (Value::List(items), _) => {
                let mut coerced = Vec::with_capacity(items.len());
                for (index, item) in items.iter().enumerate() {
                    self.value_path.push(PathSegment::Index(index));
                    coerced.push(self.coerce_type(definition_id, wrapping, item));
                    self.value_path.pop();
                }
                CoercedValue::List(coerced)
            }
            (value, _) => {
                self.errors.push(InputValueError::MissingList {
                    actual: value.into(),
                    expected: self.expected_list(definition_id, wrapping, list_wrapping),
                    path: self.path(),
                });
                CoercedValue::Null
            }
        }
    }

    fn expected_list(&self, definition_id: DefinitionId, wrapping: Wrapping, list_wrapping: ListWrapping) -> String {
        self.schema.type_name(TypeRecord {
            definition_id,
            wrapping: wrapping.wrapped_by(list_wrapping),
        })
    }

    fn coerce_named_type(&mut self, definition_id: DefinitionId, value: &Value) -> CoercedValue {
        match definition_id {
            DefinitionId::Scalar(_) | DefinitionId::Enum(_) => match self.coerce_leaf(definition_id, value) {
                Ok(value) => value,
                Err(err) => {
                    self.errors.push(err);
                    CoercedValue::Null
                }
            },
            DefinitionId::InputObject(id) => self.coerce_input_object(id, value, None),
            DefinitionId::InputUnion(id) => self.coerce_input_union(id, value),
        }
    }

    /// Parses a leaf value at the current position without recording the error.
    pub(crate) fn coerce_leaf(
        &self,
        definition_id: DefinitionId,
        value: &Value,
    ) -> Result<CoercedValue, InputValueError> {
        let schema = self.schema;
        let value = schema.coerce_leaf(definition_id, value, || self.path())?;
        Ok(CoercedValue::Leaf {
            type_name: schema.definition_name(definition_id).to_string(),
            value,
        })
    }

    /// Coerces against a resolved member. `excluded_field` is a key consumed by the resolver,
    /// it is neither coerced nor reported as unknown.
    pub(crate) fn coerce_member(
        &mut self,
        member_id: DefinitionId,
        value: &Value,
        excluded_field: Option<&str>,
    ) -> CoercedValue {
        match member_id {
            DefinitionId::InputObject(id) => self.coerce_input_object(id, value, excluded_field),
            member_id => self.coerce_named_type(member_id, value),
        }
    }

    fn coerce_input_object(
        &mut self,
        id: InputObjectDefinitionId,
        value: &Value,
        excluded_field: Option<&str>,
    ) -> CoercedValue {
        let schema = self.schema;
        let input_object = &schema[id];

        let Value::Object(fields) = value else {
            self.errors.push(InputValueError::MissingObject {
                name: input_object.name.clone(),
                actual: value.into(),
                path: self.path(),
            });
            return CoercedValue::Null;
        };

        let mut coerced = IndexMap::with_capacity(input_object.fields.len());
        let mut defaulted = FixedBitSet::with_capacity(input_object.fields.len());
        for (index, field) in input_object.fields.iter().enumerate() {
            self.value_path.push(PathSegment::Field(&field.name));
            let value = match fields.get(&field.name) {
                Some(value) => {
                    let coerced = self.coerce_input_value(field.ty, value);
                    self.check_literal(&input_object.name, field, value, &coerced);
                    coerced
                }
                None => match &field.default_value {
                    Some(default_value) => {
                        defaulted.insert(index);
                        self.coerce_default_value(id, index, field, default_value)
                    }
                    None => {
                        if field.ty.wrapping.is_required() {
                            self.errors.push(InputValueError::UnexpectedNull {
                                expected: schema.type_name(field.ty),
                                path: self.path(),
                            });
                        }
                        CoercedValue::Null
                    }
                },
            };
            self.value_path.pop();
            coerced.insert(field.name.clone(), value);
        }

        for name in fields.keys() {
            if Some(name.as_str()) != excluded_field && input_object.field(name).is_none() {
                self.errors.push(InputValueError::UnknownInputField {
                    input_object: input_object.name.clone(),
                    name: name.clone(),
                    path: self.path(),
                });
            }
        }

        CoercedValue::Object(CoercedObject {
            type_name: input_object.name.clone(),
            fields: coerced,
            defaulted,
        })
    }

    fn coerce_default_value(
        &mut self,
        id: InputObjectDefinitionId,
        index: usize,
        field: &InputValueDefinitionRecord,
        default_value: &Value,
    ) -> CoercedValue {
        if self.defaults_in_progress.contains(&(id, index)) {
            self.errors.push(InputValueError::DefaultValueCycle {
                input_object: self.schema[id].name.clone(),
                field: field.name.clone(),
                path: self.path(),
            });
            return CoercedValue::Null;
        }
        self.defaults_in_progress.push((id, index));
        let value = self.coerce_input_value(field.ty, default_value);
        self.defaults_in_progress.pop();
        value
    }

    fn check_literal(
        &mut self,
        input_object: &str,
        field: &InputValueDefinitionRecord,
        value: &Value,
        coerced: &CoercedValue,
    ) {
        let Some(literal) = &field.literal else {
            return;
        };
        let matches = match coerced {
            CoercedValue::Leaf { value: actual, .. } => self
                .schema
                .coerce_leaf(field.ty.definition_id, literal, ValuePath::default)
                .is_ok_and(|expected| &expected == actual),
            CoercedValue::Null => !value.is_null(),
            CoercedValue::List(_) | CoercedValue::Object(_) => true,
        };
        if !matches {
            self.errors.push(InputValueError::LiteralMismatch {
                field: format!("{input_object}.{}", field.name),
                expected: literal.to_string(),
                actual: value.to_string(),
                path: self.path(),
            });
        }
    }

    fn coerce_input_union(&mut self, id: InputUnionDefinitionId, value: &Value) -> CoercedValue {
        match resolve(self, id, value) {
            Ok(Resolution::Member {
                member_id,
                value,
                excluded_field,
            }) => self.coerce_member(member_id, value, excluded_field),
            Ok(Resolution::WrapperField { field, member_id, value }) => {
                self.value_path.push(PathSegment::Field(field));
                let value = self.coerce_member(DefinitionId::InputObject(member_id), value, None);
                self.value_path.pop();
                value
            }
            Ok(Resolution::Coerced { value, .. }) => value,
            Err(err) => {
                self.errors.push(err);
                CoercedValue::Null
            }
        }
    }
}
