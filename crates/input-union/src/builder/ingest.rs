use fxhash::FxHashSet;

use crate::{
    document::{InputObjectDeclaration, InputUnionDeclaration, StrategyDeclaration},
    schema::{
        DefinitionId, EnumDefinitionRecord, Graph, InputObjectDefinitionRecord, InputUnionDefinitionId,
        InputUnionDefinitionRecord, InputValueDefinitionRecord, ScalarDefinitionRecord, ScalarType, Strategy,
        TypeRecord,
    },
    Diagnostics, SchemaDocument, SchemaError, ValuePath,
};

const BUILT_IN_SCALARS: [(&str, ScalarType); 5] = [
    ("String", ScalarType::String),
    ("Int", ScalarType::Int),
    ("Float", ScalarType::Float),
    ("Boolean", ScalarType::Boolean),
    ("ID", ScalarType::Id),
];

pub(super) struct Ingested {
    pub graph: Graph,
    /// Unions whose declaration couldn't be resolved, they aren't validated.
    pub broken_unions: FxHashSet<InputUnionDefinitionId>,
}

/// Turns the declarations into a [`Graph`]. Names are registered first so that declarations can
/// reference each other in any order.
pub(super) fn ingest(document: &SchemaDocument, diagnostics: &mut Diagnostics) -> Ingested {
    let mut ctx = IngestContext {
        graph: Graph::default(),
        diagnostics,
        broken_unions: FxHashSet::default(),
    };

    for (name, ty) in BUILT_IN_SCALARS {
        ctx.register_scalar(name, ty);
    }
    for scalar in &document.scalars {
        ctx.register_scalar(&scalar.name, scalar.behaviour);
    }
    for r#enum in &document.enums {
        if r#enum.values.is_empty() {
            ctx.diagnostics.push_fatal(SchemaError::EmptyEnum {
                name: r#enum.name.clone(),
            });
        }
        let id = ctx.graph.enum_definitions.len().into();
        if ctx.register_name(&r#enum.name, DefinitionId::Enum(id)) {
            ctx.graph.enum_definitions.push(EnumDefinitionRecord {
                name: r#enum.name.clone(),
                values: r#enum.values.clone(),
            });
        }
    }

    let mut input_objects = Vec::with_capacity(document.input_objects.len());
    for input_object in &document.input_objects {
        let id = ctx.graph.input_object_definitions.len().into();
        if ctx.register_name(&input_object.name, DefinitionId::InputObject(id)) {
            ctx.graph.input_object_definitions.push(InputObjectDefinitionRecord {
                name: input_object.name.clone(),
                fields: Vec::new(),
            });
            input_objects.push(input_object);
        }
    }

    let mut input_unions = Vec::with_capacity(document.input_unions.len());
    for input_union in &document.input_unions {
        let id = ctx.graph.input_union_definitions.len().into();
        if ctx.register_name(&input_union.name, DefinitionId::InputUnion(id)) {
            ctx.graph.input_union_definitions.push(InputUnionDefinitionRecord {
                name: input_union.name.clone(),
                member_ids: Vec::new(),
                strategy: Strategy::Ordered,
            });
            input_unions.push(input_union);
        }
    }

    for (i, input_object) in input_objects.into_iter().enumerate() {
        let fields = ctx.ingest_fields(input_object);
        ctx.graph.input_object_definitions[i].fields = fields;
    }

    for (i, input_union) in input_unions.into_iter().enumerate() {
        ctx.ingest_union(i.into(), input_union);
    }

    Ingested {
        graph: ctx.graph,
        broken_unions: ctx.broken_unions,
    }
}

struct IngestContext<'d> {
    graph: Graph,
    diagnostics: &'d mut Diagnostics,
    broken_unions: FxHashSet<InputUnionDefinitionId>,
}

impl IngestContext<'_> {
    fn register_name(&mut self, name: &str, id: DefinitionId) -> bool {
        if self.graph.definitions_by_name.contains_key(name) {
            self.diagnostics
                .push_fatal(SchemaError::DuplicateDefinition { name: name.to_string() });
            return false;
        }
        self.graph.definitions_by_name.insert(name.to_string(), id);
        true
    }

    fn register_scalar(&mut self, name: &str, ty: ScalarType) {
        let id = self.graph.scalar_definitions.len().into();
        if self.register_name(name, DefinitionId::Scalar(id)) {
            self.graph.scalar_definitions.push(ScalarDefinitionRecord {
                name: name.to_string(),
                ty,
            });
        }
    }

    fn resolve_type(&mut self, reference: &str, location: &str) -> Option<TypeRecord> {
        let Some((name, wrapping)) = crate::schema::parse_type_reference(reference) else {
            self.diagnostics.push_fatal(SchemaError::InvalidTypeReference {
                reference: reference.to_string(),
                location: location.to_string(),
            });
            return None;
        };
        let Some(definition_id) = self.graph.definition_by_name(name) else {
            self.diagnostics.push_fatal(SchemaError::UnknownType {
                name: name.to_string(),
                location: location.to_string(),
            });
            return None;
        };
        Some(TypeRecord {
            definition_id,
            wrapping,
        })
    }

    fn resolve_name(&mut self, name: &str, location: &str) -> Option<DefinitionId> {
        let id = self.graph.definition_by_name(name);
        if id.is_none() {
            self.diagnostics.push_fatal(SchemaError::UnknownType {
                name: name.to_string(),
                location: location.to_string(),
            });
        }
        id
    }

    fn ingest_fields(&mut self, input_object: &InputObjectDeclaration) -> Vec<InputValueDefinitionRecord> {
        if input_object.fields.is_empty() {
            self.diagnostics.push_fatal(SchemaError::EmptyInputObject {
                name: input_object.name.clone(),
            });
        }

        let mut fields = Vec::<InputValueDefinitionRecord>::with_capacity(input_object.fields.len());
        for field in &input_object.fields {
            let location = format!("{}.{}", input_object.name, field.name);
            if fields.iter().any(|existing| existing.name == field.name) {
                self.diagnostics.push_fatal(SchemaError::DuplicateField {
                    input_object: input_object.name.clone(),
                    field: field.name.clone(),
                });
                continue;
            }
            let Some(ty) = self.resolve_type(&field.ty, &location) else {
                continue;
            };

            if let Some(literal) = &field.literal {
                if ty.wrapping.is_list() || !ty.definition_id.is_leaf() {
                    self.diagnostics.push_fatal(SchemaError::LiteralOnNonLeafField {
                        location,
                        ty: self.graph.type_name(ty),
                    });
                    continue;
                }
                let expected = match self.graph.coerce_leaf(ty.definition_id, literal, ValuePath::default) {
                    Ok(expected) => expected,
                    Err(error) => {
                        self.diagnostics
                            .push_fatal(SchemaError::InvalidLiteral { location, error });
                        continue;
                    }
                };
                // A default that doesn't parse is reported by the default value check.
                if let Some(default) = &field.default {
                    let conflicts = default.is_null()
                        || self
                            .graph
                            .coerce_leaf(ty.definition_id, default, ValuePath::default)
                            .is_ok_and(|default| default != expected);
                    if conflicts {
                        self.diagnostics.push_fatal(SchemaError::DefaultConflictsWithLiteral {
                            location,
                            default: default.to_string(),
                            literal: literal.to_string(),
                        });
                        continue;
                    }
                }
            }

            fields.push(InputValueDefinitionRecord {
                name: field.name.clone(),
                ty,
                default_value: field.default.clone(),
                literal: field.literal.clone(),
            });
        }
        fields
    }

    fn ingest_union(&mut self, id: InputUnionDefinitionId, input_union: &InputUnionDeclaration) {
        let location = format!("input union {}", input_union.name);
        let mut broken = false;

        let mut member_ids = Vec::with_capacity(input_union.members.len());
        for member in &input_union.members {
            match self.resolve_name(member, &location) {
                Some(member_id) => member_ids.push(member_id),
                None => broken = true,
            }
        }

        let strategy = match &input_union.strategy {
            StrategyDeclaration::Discriminator { field, default_member } => {
                let default_member_id = default_member.as_ref().and_then(|name| {
                    let id = self.resolve_name(name, &location);
                    broken |= id.is_none();
                    id
                });
                Strategy::Discriminator {
                    field: field.clone(),
                    default_member_id,
                }
            }
            StrategyDeclaration::LiteralTag { field } => Strategy::LiteralTag { field: field.clone() },
            StrategyDeclaration::Ordered => Strategy::Ordered,
            StrategyDeclaration::Structural => Strategy::Structural,
            StrategyDeclaration::OneOf { wrapper } => match self.resolve_name(wrapper, &location) {
                Some(DefinitionId::InputObject(wrapper_id)) => Strategy::OneOf { wrapper_id },
                Some(_) => {
                    self.diagnostics.push_fatal(SchemaError::NotAnInputObject {
                        name: wrapper.clone(),
                        location: location.clone(),
                    });
                    broken = true;
                    Strategy::Ordered
                }
                None => {
                    broken = true;
                    Strategy::Ordered
                }
            },
        };

        if broken {
            self.broken_unions.insert(id);
        }
        let record = &mut self.graph.input_union_definitions[usize::from(id)];
        record.member_ids = member_ids;
        record.strategy = strategy;
    }
}
