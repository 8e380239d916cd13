use graphql_input_union::Schema;
use serde_json::json;

use super::{build, build_errors, coerce, resolve, ANIMALS};

fn animals(members: &str) -> Schema {
    build(&format!(
        r#"{ANIMALS}
        [[input_unions]]
        name = "AnimalInput"
        members = {members}
        strategy = {{ kind = "structural" }}
        "#
    ))
}

#[test]
fn required_fields_identify_the_member() {
    let schema = animals(r#"["CatInput", "DogInput"]"#);

    let dog = coerce(&schema, "AnimalInput", json!({"name": "Rex", "breed": "BEAGLE"}));
    pretty_assertions::assert_eq!(
        dog,
        Ok(json!({"__typename": "DogInput", "name": "Rex", "age": null, "breed": "BEAGLE"}))
    );

    // optional fields play no part
    let cat = resolve(&schema, "AnimalInput", json!({"livesLeft": 9, "age": 3, "name": "Tom"}));
    assert_eq!(cat.as_deref(), Ok("CatInput"));
}

#[test]
fn missing_required_fields() {
    let schema = animals(r#"["CatInput", "DogInput"]"#);

    let error = resolve(&schema, "AnimalInput", json!({"name": "Rex"})).unwrap_err();
    insta::assert_snapshot!(error, @"No member of input union 'AnimalInput' matches the value");

    let error = resolve(&schema, "AnimalInput", json!({})).unwrap_err();
    insta::assert_snapshot!(error, @"No member of input union 'AnimalInput' matches the value");
}

#[test]
fn fields_of_several_members() {
    let schema = animals(r#"["CatInput", "DogInput"]"#);

    let error = resolve(
        &schema,
        "AnimalInput",
        json!({"name": "Rex", "breed": "BEAGLE", "livesLeft": 1}),
    )
    .unwrap_err();
    insta::assert_snapshot!(error, @"Value matches several members of input union 'AnimalInput': CatInput, DogInput");
}

#[test]
fn member_errors_are_reported_after_resolution() {
    let schema = animals(r#"["CatInput", "DogInput"]"#);

    let errors = coerce(
        &schema,
        "[AnimalInput!]",
        json!([{"name": "Rex", "breed": "BEAGLE"}, {"name": "Tom", "livesLeft": "nine", "color": "grey"}]),
    )
    .unwrap_err();
    insta::assert_snapshot!(errors.join("\n"), @r"
    Found a String value where we expected a Int scalar at path '.1.livesLeft'
    Input object CatInput does not have a field named 'color' at path '.1'
    ");
}

#[test]
fn leaf_member() {
    let schema = animals(r#"["CatInput", "DogInput", "String"]"#);

    assert_eq!(coerce(&schema, "AnimalInput", json!("Rex")), Ok(json!("Rex")));

    let error = resolve(&schema, "AnimalInput", json!(1)).unwrap_err();
    insta::assert_snapshot!(error, @"Found a Integer value where we expected a String scalar");
}

#[test]
fn members_accepting_each_other_required_fields_are_ambiguous() {
    let errors = build_errors(&format!(
        r#"{ANIMALS}
        [[input_objects]]
        name = "NamedInput"
        fields = [{{ name = "name", type = "String!" }}, {{ name = "nickname", type = "String" }}]

        [[input_unions]]
        name = "AnimalInput"
        members = ["CatInput", "DogInput", "NamedInput"]
        strategy = {{ kind = "structural" }}
        "#
    ));
    insta::assert_snapshot!(errors.join("\n"), @r"
    Input union 'AnimalInput' (structural): ambiguous members NamedInput and CatInput, a value with the fields {name} is accepted by both
    Input union 'AnimalInput' (structural): ambiguous members NamedInput and DogInput, a value with the fields {name} is accepted by both
    ");
}

#[test]
fn fields_with_a_default_are_not_required() {
    let errors = build_errors(&format!(
        r#"{ANIMALS}
        [[input_objects]]
        name = "StrayCatInput"
        fields = [
          {{ name = "name", type = "String!" }},
          {{ name = "livesLeft", type = "Int!", default = 9 }},
        ]

        [[input_unions]]
        name = "AnimalInput"
        members = ["CatInput", "StrayCatInput"]
        strategy = {{ kind = "structural" }}
        "#
    ));
    insta::assert_snapshot!(errors.join("\n"), @"Input union 'AnimalInput' (structural): ambiguous members CatInput and StrayCatInput, a value with the fields {name, livesLeft} is accepted by both");
}
