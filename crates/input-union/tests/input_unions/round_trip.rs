use graphql_input_union::Schema;
use rstest::rstest;
use serde_json::json;

use super::{build, ANIMALS};

fn schema() -> Schema {
    build(&format!(
        r#"{ANIMALS}
        [[input_objects]]
        name = "TaggedCatInput"
        fields = [{{ name = "kind", type = "String!", literal = "cat" }}, {{ name = "name", type = "String!" }}]

        [[input_objects]]
        name = "TaggedDogInput"
        fields = [
          {{ name = "kind", type = "String!", literal = "dog" }},
          {{ name = "name", type = "String!" }},
          {{ name = "breed", type = "DogBreed" }},
        ]

        [[input_objects]]
        name = "StrayCatInput"
        fields = [{{ name = "name", type = "String!" }}, {{ name = "livesLeft", type = "Int!", default = 9 }}]

        [[input_objects]]
        name = "AnimalWrapper"
        fields = [{{ name = "cat", type = "CatInput" }}, {{ name = "dog", type = "DogInput" }}]

        [[input_unions]]
        name = "DiscriminatedAnimal"
        members = ["CatInput", "DogInput"]
        strategy = {{ kind = "discriminator" }}

        [[input_unions]]
        name = "TaggedAnimal"
        members = ["TaggedCatInput", "TaggedDogInput"]
        strategy = {{ kind = "literal_tag", field = "kind" }}

        [[input_unions]]
        name = "OrderedAnimal"
        members = ["CatInput", "DogInput", "ID"]
        strategy = {{ kind = "ordered" }}

        [[input_unions]]
        name = "AdoptableAnimal"
        members = ["CatInput", "StrayCatInput"]
        strategy = {{ kind = "ordered" }}

        [[input_unions]]
        name = "StructuralAnimal"
        members = ["CatInput", "DogInput"]
        strategy = {{ kind = "structural" }}

        [[input_unions]]
        name = "WrappedAnimal"
        strategy = {{ kind = "one_of", wrapper = "AnimalWrapper" }}
        "#
    ))
}

/// A coerced value turned back into a raw one coerces into the same value again.
#[rstest]
#[case("DiscriminatedAnimal", json!({"__typename": "DogInput", "name": "Rex", "breed": "POODLE"}))]
#[case("DiscriminatedAnimal", json!({"__typename": "CatInput", "name": "Tom", "livesLeft": 2, "age": 4}))]
#[case("TaggedAnimal", json!({"kind": "dog", "name": "Rex"}))]
#[case("TaggedAnimal", json!({"name": "Tom", "kind": "cat"}))]
#[case("OrderedAnimal", json!({"name": "Rex", "breed": "WHIPPET"}))]
#[case("OrderedAnimal", json!(7))]
#[case("AdoptableAnimal", json!({"name": "Tom"}))]
#[case("AdoptableAnimal", json!({"name": "Tom", "livesLeft": 2}))]
#[case("StructuralAnimal", json!({"breed": "BEAGLE", "name": "Rex"}))]
#[case("StructuralAnimal", json!({"name": "Tom", "livesLeft": 1}))]
#[case("WrappedAnimal", json!({"dog": {"name": "Rex", "breed": "BEAGLE"}}))]
#[case("[WrappedAnimal!]", json!([{"cat": {"name": "Tom", "livesLeft": 3}}, {"dog": {"name": "Rex", "breed": "BEAGLE"}}]))]
#[case("[DiscriminatedAnimal]", json!([{"__typename": "CatInput", "name": "Tom", "livesLeft": 3}, null]))]
fn coerced_values_round_trip(#[case] ty: &str, #[case] input: serde_json::Value) {
    let schema = schema();
    let ty = schema.type_record(ty).unwrap();

    let coerced = schema.coerce(ty, &input.into()).unwrap();
    let raw = schema.to_input_value(ty, &coerced);
    let again = schema.coerce(ty, &raw).unwrap();

    pretty_assertions::assert_eq!(coerced, again, "{raw}");
}

#[test]
fn raw_values_carry_what_resolution_needs() {
    let schema = schema();

    let discriminated = schema.type_record("DiscriminatedAnimal").unwrap();
    let coerced = schema
        .coerce(discriminated, &json!({"name": "Rex", "__typename": "DogInput", "breed": "POODLE"}).into())
        .unwrap();
    let raw = serde_json::Value::from(schema.to_input_value(discriminated, &coerced));
    assert_eq!(
        serde_json::to_string(&raw).unwrap(),
        r#"{"__typename":"DogInput","name":"Rex","age":null,"breed":"POODLE"}"#
    );

    let wrapped = schema.type_record("WrappedAnimal").unwrap();
    let coerced = schema
        .coerce(wrapped, &json!({"cat": {"name": "Tom", "livesLeft": 3}}).into())
        .unwrap();
    let raw = serde_json::Value::from(schema.to_input_value(wrapped, &coerced));
    assert_eq!(raw, json!({"cat": {"name": "Tom", "age": null, "livesLeft": 3}}));
}

#[test]
fn defaulted_fields_are_left_out_of_raw_values() {
    let schema = schema();
    let adoptable = schema.type_record("AdoptableAnimal").unwrap();

    let coerced = schema.coerce(adoptable, &json!({"name": "Tom"}).into()).unwrap();
    let object = coerced.as_object().unwrap();
    assert_eq!(object.type_name, "StrayCatInput");
    assert!(object.is_defaulted("livesLeft"));
    assert!(!object.is_defaulted("name"));

    let raw = serde_json::Value::from(schema.to_input_value(adoptable, &coerced));
    assert_eq!(raw, json!({"name": "Tom"}));

    let again = schema.coerce(adoptable, &schema.to_input_value(adoptable, &coerced)).unwrap();
    assert_eq!(again.member_type_name(), Some("StrayCatInput"));
}
