use graphql_input_union::{validate_union, SchemaOptions, Value};
use serde_json::json;

use super::{build, build_errors, coerce, document, ANIMALS};

#[test]
fn declarations() {
    let errors = build_errors(
        r#"
        [[enums]]
        name = "String"
        values = ["A"]

        [[enums]]
        name = "Mood"
        values = []

        [[input_objects]]
        name = "CatInput"
        fields = [
          { name = "name", type = "String!" },
          { name = "name", type = "String" },
          { name = "owner", type = "Person" },
          { name = "tags", type = "[String" },
          { name = "friend", type = "CatInput", literal = "Tom" },
          { name = "kind", type = "Int!", literal = "cat" },
        ]

        [[input_objects]]
        name = "CatInput"
        fields = [{ name = "lives", type = "Int" }]

        [[input_objects]]
        name = "EmptyInput"
        fields = []

        [[input_unions]]
        name = "AnimalInput"
        members = ["CatInput", "Horse"]
        strategy = { kind = "ordered" }
        "#,
    );

    insta::assert_snapshot!(errors.join("\n"), @r"
    Type 'String' is defined more than once
    Enum Mood has no values
    Type 'CatInput' is defined more than once
    Field 'name' is defined more than once on input object CatInput
    Unknown type 'Person' referenced by CatInput.owner
    Invalid type reference '[String' on CatInput.tags
    Field CatInput.friend has a literal but its type CatInput is not a leaf type
    Invalid literal for CatInput.kind: Found a String value where we expected a Int scalar
    Input object EmptyInput has no fields
    Unknown type 'Horse' referenced by input union AnimalInput
    ");
}

#[test]
fn union_without_members() {
    let errors = build_errors(&format!(
        r#"{ANIMALS}
        [[input_unions]]
        name = "AnimalInput"
        strategy = {{ kind = "discriminator" }}
        "#
    ));
    insta::assert_snapshot!(errors.join("\n"), @"Input union 'AnimalInput' (discriminator): the union has no members");
}

#[test]
fn default_values_are_coerced_at_build_time() {
    let errors = build_errors(&format!(
        r#"{ANIMALS}
        [[input_objects]]
        name = "ShelterInput"
        fields = [
          {{ name = "capacity", type = "Int", default = "large" }},
          {{ name = "resident", type = "AnimalInput", default = {{ __typename = "DogInput", name = "Rex", breed = "CORGI" }} }},
        ]

        [[input_unions]]
        name = "AnimalInput"
        members = ["CatInput", "DogInput"]
        strategy = {{ kind = "discriminator" }}
        "#
    ));
    insta::assert_snapshot!(errors.join("\n"), @r"
    Invalid default value for ShelterInput.capacity: Found a String value where we expected a Int scalar
    Invalid default value for ShelterInput.resident: Unknown enum value 'CORGI' for enum DogBreed at path '.breed'
    ");
}

#[test]
fn default_values_must_match_literals() {
    let errors = build_errors(
        r#"
        [[input_objects]]
        name = "CircleInput"
        fields = [
          { name = "shape", type = "String!", literal = "circle", default = "square" },
          { name = "size", type = "Float!" },
        ]
        "#,
    );
    insta::assert_snapshot!(errors.join("\n"), @r#"Default value "square" of CircleInput.shape differs from its literal "circle""#);

    let mut document = document(
        r#"
        [[input_objects]]
        name = "SquareInput"
        fields = [
          { name = "shape", type = "String", literal = "square" },
          { name = "side", type = "Float!" },
        ]
        "#,
    );
    document.input_objects[0].fields[0].default = Some(Value::Null);
    let Err(diagnostics) = graphql_input_union::build(&document).into_result() else {
        panic!("Expected the schema to be invalid");
    };
    let errors = diagnostics.iter_errors().map(ToString::to_string).collect::<Vec<_>>();
    insta::assert_snapshot!(errors.join("\n"), @r#"Default value null of SquareInput.shape differs from its literal "square""#);

    let schema = build(
        r#"
        [[input_objects]]
        name = "CircleInput"
        fields = [
          { name = "shape", type = "String!", literal = "circle", default = "circle" },
          { name = "size", type = "Float!" },
        ]
        "#,
    );
    assert_eq!(
        coerce(&schema, "CircleInput", json!({"size": 1})),
        Ok(json!({"__typename": "CircleInput", "shape": "circle", "size": 1.0}))
    );
}

#[test]
fn default_value_depending_on_itself() {
    let errors = build_errors(
        r#"
        [[input_objects]]
        name = "NodeInput"
        fields = [
          { name = "value", type = "Int!" },
          { name = "next", type = "NodeInput!", default = { value = 1 } },
        ]
        "#,
    );
    insta::assert_snapshot!(errors.join("\n"), @"Invalid default value for NodeInput.next: Default value of NodeInput.next depends on itself at path '.next.next'");
}

#[test]
fn union_default_values() {
    let schema = build(&format!(
        r#"{ANIMALS}
        [[input_objects]]
        name = "ShelterInput"
        fields = [
          {{ name = "resident", type = "AnimalInput!", default = {{ __typename = "DogInput", name = "Rex", breed = "BEAGLE" }} }},
        ]

        [[input_unions]]
        name = "AnimalInput"
        members = ["CatInput", "DogInput"]
        strategy = {{ kind = "discriminator" }}
        "#
    ));

    let shelter = coerce(&schema, "ShelterInput", json!({})).unwrap();
    assert_eq!(
        shelter["resident"],
        json!({"__typename": "DogInput", "name": "Rex", "age": null, "breed": "BEAGLE"})
    );
}

#[test]
fn diagnostics_display() {
    let result = graphql_input_union::build(&document(
        r#"
        [[input_objects]]
        name = "CatInput"
        fields = [{ name = "lives", type = "Int", default = true }]

        [[input_objects]]
        name = "KittenInput"
        fields = [{ name = "lives", type = "Int", default = 9 }]

        [[input_objects]]
        name = "TomInput"
        fields = [{ name = "lives", type = "Int", default = 9 }]

        [[input_unions]]
        name = "AnimalInput"
        members = ["KittenInput", "TomInput"]
        strategy = { kind = "ordered" }
        "#,
    ));

    insta::assert_snapshot!(result.diagnostics(), @r"
    warning: Input union 'AnimalInput' (ordered): member TomInput is structurally identical to the earlier member KittenInput and can never be selected
    error: Invalid default value for CatInput.lives: Found a Boolean value where we expected a Int scalar
    ");
    assert!(result.schema().is_none());
}

#[test]
fn validation_is_idempotent() {
    let schema = build(&format!(
        r#"{ANIMALS}
        [[input_unions]]
        name = "AnimalInput"
        members = ["CatInput", "DogInput"]
        strategy = {{ kind = "structural" }}
        "#
    ));
    let union_id = schema.input_union_by_name("AnimalInput").unwrap();

    let first = validate_union(&schema, union_id, &SchemaOptions::default());
    let second = validate_union(&schema, union_id, &SchemaOptions::default());
    assert_eq!(first, second);
    assert_eq!(&first.unwrap().plan, schema.plan(union_id));

    let strict = validate_union(&schema, union_id, &SchemaOptions { strict: true });
    assert!(strict.is_ok());
}
