use graphql_input_union::Schema;
use serde_json::json;

use super::{build, build_errors, coerce, resolve, ANIMALS};

fn schema(strategy: &str) -> Schema {
    build(&format!(
        r#"{ANIMALS}
        [[input_unions]]
        name = "AnimalInput"
        members = ["CatInput", "DogInput"]
        strategy = {strategy}
        "#
    ))
}

#[test]
fn discriminator_selects_the_member() {
    let schema = schema(r#"{ kind = "discriminator" }"#);

    let cat = coerce(
        &schema,
        "AnimalInput",
        json!({"__typename": "CatInput", "name": "Buster", "livesLeft": 7}),
    );
    pretty_assertions::assert_eq!(
        cat,
        Ok(json!({"__typename": "CatInput", "name": "Buster", "age": null, "livesLeft": 7}))
    );

    let dog = resolve(
        &schema,
        "AnimalInput",
        json!({"name": "Rex", "__typename": "DogInput", "breed": "BEAGLE"}),
    );
    assert_eq!(dog.as_deref(), Ok("DogInput"));
}

#[test]
fn unrecognized_discriminator() {
    let schema = schema(r#"{ kind = "discriminator" }"#);

    let error = resolve(&schema, "AnimalInput", json!({"__typename": "Snake", "name": "Kaa"})).unwrap_err();
    insta::assert_snapshot!(error, @r#"Unrecognized discriminator value "Snake" for input union 'AnimalInput', expected one of: CatInput, DogInput"#);

    // Member names are matched exactly.
    let error = resolve(&schema, "AnimalInput", json!({"__typename": "catinput", "name": "Kaa"})).unwrap_err();
    insta::assert_snapshot!(error, @r#"Unrecognized discriminator value "catinput" for input union 'AnimalInput', expected one of: CatInput, DogInput"#);

    let error = resolve(&schema, "AnimalInput", json!({"__typename": 1, "name": "Kaa"})).unwrap_err();
    insta::assert_snapshot!(error, @"Unrecognized discriminator value 1 for input union 'AnimalInput', expected one of: CatInput, DogInput");
}

#[test]
fn missing_discriminator() {
    let schema = schema(r#"{ kind = "discriminator" }"#);

    let error = resolve(&schema, "AnimalInput", json!({"name": "Buster", "livesLeft": 7})).unwrap_err();
    insta::assert_snapshot!(error, @"Missing discriminator field '__typename' for input union 'AnimalInput'");

    let error = resolve(&schema, "AnimalInput", json!({"__typename": null, "name": "Buster"})).unwrap_err();
    insta::assert_snapshot!(error, @"Missing discriminator field '__typename' for input union 'AnimalInput'");
}

#[test]
fn default_member_is_used_without_discriminator() {
    let schema = schema(r#"{ kind = "discriminator", default_member = "CatInput" }"#);

    let cat = coerce(&schema, "AnimalInput", json!({"name": "Buster", "livesLeft": 7}));
    pretty_assertions::assert_eq!(
        cat,
        Ok(json!({"__typename": "CatInput", "name": "Buster", "age": null, "livesLeft": 7}))
    );

    let dog = resolve(
        &schema,
        "AnimalInput",
        json!({"__typename": "DogInput", "name": "Rex", "breed": "BEAGLE"}),
    );
    assert_eq!(dog.as_deref(), Ok("DogInput"));
}

#[test]
fn custom_discriminator_field() {
    let schema = schema(r#"{ kind = "discriminator", field = "species" }"#);

    let dog = coerce(
        &schema,
        "AnimalInput",
        json!({"species": "DogInput", "name": "Rex", "breed": "BEAGLE"}),
    );
    pretty_assertions::assert_eq!(
        dog,
        Ok(json!({"__typename": "DogInput", "name": "Rex", "age": null, "breed": "BEAGLE"}))
    );

    // __typename has no special meaning anymore
    let errors = coerce(
        &schema,
        "AnimalInput",
        json!({"species": "DogInput", "__typename": "DogInput", "name": "Rex", "breed": "BEAGLE"}),
    )
    .unwrap_err();
    insta::assert_snapshot!(errors.join("\n"), @"Input object DogInput does not have a field named '__typename'");
}

#[test]
fn member_errors_are_accumulated() {
    let schema = schema(r#"{ kind = "discriminator" }"#);

    let errors = coerce(
        &schema,
        "AnimalInput",
        json!({"__typename": "DogInput", "name": null, "breed": "LABRADOR", "owner": "Mowgli"}),
    )
    .unwrap_err();
    insta::assert_snapshot!(errors.join("\n"), @r"
    Found a null where we expected a String! at path '.name'
    Unknown enum value 'LABRADOR' for enum DogBreed at path '.breed'
    Input object DogInput does not have a field named 'owner'
    ");
}

#[test]
fn non_object_values() {
    let schema = schema(r#"{ kind = "discriminator" }"#);

    let error = resolve(&schema, "AnimalInput", json!(42)).unwrap_err();
    insta::assert_snapshot!(error, @"Found a Integer value where we expected an object for input union 'AnimalInput'");

    let errors = coerce(&schema, "[AnimalInput!]!", json!([{"__typename": "CatInput", "name": "Tom", "livesLeft": 1}, "cat"]))
        .unwrap_err();
    insta::assert_snapshot!(errors.join("\n"), @"Found a String value where we expected an object for input union 'AnimalInput' at path '.1'");
}

#[test]
fn reserved_field_and_leaf_members_are_rejected() {
    let errors = build_errors(
        r#"
        [[input_objects]]
        name = "CatInput"
        fields = [{ name = "__typename", type = "String" }, { name = "name", type = "String!" }]

        [[input_objects]]
        name = "DogInput"
        fields = [{ name = "name", type = "String!" }]

        [[input_unions]]
        name = "AnimalInput"
        members = ["CatInput", "DogInput", "Int"]
        strategy = { kind = "discriminator" }
        "#,
    );
    insta::assert_snapshot!(errors.join("\n"), @r"
    Input union 'AnimalInput' (discriminator): leaf member ambiguity between Int, at most 0 leaf member is allowed
    Input union 'AnimalInput' (discriminator): member CatInput declares the reserved discriminator field '__typename'
    ");
}

#[test]
fn reserved_field_is_allowed_with_a_default_member() {
    let schema = build(
        r#"
        [[input_objects]]
        name = "CatInput"
        fields = [{ name = "__typename", type = "String" }, { name = "name", type = "String!" }]

        [[input_objects]]
        name = "DogInput"
        fields = [{ name = "name", type = "String!" }]

        [[input_unions]]
        name = "AnimalInput"
        members = ["CatInput", "DogInput"]
        strategy = { kind = "discriminator", default_member = "DogInput" }
        "#,
    );

    assert_eq!(resolve(&schema, "AnimalInput", json!({"name": "Rex"})), Ok("DogInput".to_string()));
    assert_eq!(
        resolve(&schema, "AnimalInput", json!({"__typename": "CatInput", "name": "Tom"})),
        Ok("CatInput".to_string())
    );
}

#[test]
fn default_member_must_be_a_member() {
    let errors = build_errors(&format!(
        r#"{ANIMALS}
        [[input_objects]]
        name = "BirdInput"
        fields = [{{ name = "name", type = "String!" }}]

        [[input_unions]]
        name = "AnimalInput"
        members = ["CatInput", "DogInput"]
        strategy = {{ kind = "discriminator", default_member = "BirdInput" }}
        "#
    ));
    insta::assert_snapshot!(errors.join("\n"), @"Input union 'AnimalInput' (discriminator): default member BirdInput is not a member of the union");
}
