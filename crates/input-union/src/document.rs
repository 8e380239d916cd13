use crate::Value;

/// Declarations a [`Schema`](crate::Schema) is built from, usually written in TOML.
///
/// ```toml
/// [[input_objects]]
/// name = "CatInput"
/// fields = [{ name = "name", type = "String!" }, { name = "lives", type = "Int", default = 9 }]
///
/// [[input_unions]]
/// name = "AnimalInput"
/// members = ["CatInput", "DogInput"]
/// strategy = { kind = "discriminator" }
/// ```
#[derive(Debug, Default, Clone, PartialEq, serde::Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SchemaDocument {
    pub options: SchemaOptions,
    pub scalars: Vec<ScalarDeclaration>,
    pub enums: Vec<EnumDeclaration>,
    pub input_objects: Vec<InputObjectDeclaration>,
    pub input_unions: Vec<InputUnionDeclaration>,
}

impl SchemaDocument {
    pub fn from_toml(source: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(source)
    }

    pub fn from_json(source: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(source)
    }
}

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, serde::Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SchemaOptions {
    /// Treat warnings as errors.
    pub strict: bool,
}

#[derive(Debug, Clone, PartialEq, serde::Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ScalarDeclaration {
    pub name: String,
    pub behaviour: crate::ScalarType,
}

#[derive(Debug, Clone, PartialEq, serde::Deserialize)]
#[serde(deny_unknown_fields)]
pub struct EnumDeclaration {
    pub name: String,
    pub values: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, serde::Deserialize)]
#[serde(deny_unknown_fields)]
pub struct InputObjectDeclaration {
    pub name: String,
    #[serde(default)]
    pub fields: Vec<InputFieldDeclaration>,
}

#[derive(Debug, Clone, PartialEq, serde::Deserialize)]
#[serde(deny_unknown_fields)]
pub struct InputFieldDeclaration {
    pub name: String,
    /// Type reference such as `[String!]!`.
    #[serde(rename = "type")]
    pub ty: String,
    pub default: Option<Value>,
    /// The only value the field accepts.
    pub literal: Option<Value>,
}

#[derive(Debug, Clone, PartialEq, serde::Deserialize)]
#[serde(deny_unknown_fields)]
pub struct InputUnionDeclaration {
    pub name: String,
    #[serde(default)]
    pub members: Vec<String>,
    pub strategy: StrategyDeclaration,
}

#[derive(Debug, Clone, PartialEq, serde::Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case", deny_unknown_fields)]
pub enum StrategyDeclaration {
    Discriminator {
        #[serde(default = "default_discriminator_field")]
        field: String,
        /// Member used when the discriminator field is absent.
        default_member: Option<String>,
    },
    LiteralTag {
        field: String,
    },
    Ordered,
    Structural,
    OneOf {
        wrapper: String,
    },
}

fn default_discriminator_field() -> String {
    "__typename".to_string()
}
