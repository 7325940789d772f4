//! End-to-end validation of a realistic object.

use nebula_require::prelude::*;
use pretty_assertions::assert_eq;
use serde_json::json;

fn john() -> Value {
    let spouse = Value::from(json!({"name": "Jane"})).with("age", Value::nan());
    Value::from(json!({"name": "John", "age": 26})).with("spouse", spouse)
}

fn rules() -> Vec<Descriptor> {
    vec![
        Descriptor::new("name"),
        Descriptor::new("age").invalid_value(Value::nan()),
        Descriptor::new("spouse.name")
            .invalid_values([""])
            .with_error(json!({"message": "spouse is required and must contain a name"})),
        Descriptor::new("spouse.age")
            .invalid_value(Value::nan())
            .with_error(json!({"message": "spouse is required and must contain an age"})),
        Descriptor::new(["notThere", "alsoNotThere"]),
    ]
}

#[test]
fn reports_every_failure_in_order() {
    let result = validate(&john(), &rules(), false).unwrap();

    assert!(!result.is_valid());
    assert_eq!(
        serde_json::to_value(&result).unwrap(),
        json!({
            "valid": false,
            "errors": [
                {"message": "spouse is required and must contain an age"},
                {"message": "Object must contain a valid value for notThere or alsoNotThere"}
            ]
        })
    );
}

#[test]
fn lazy_reports_only_the_first_failure() {
    let result = validate(&john(), &rules(), true).unwrap();

    assert!(!result.is_valid());
    assert_eq!(
        result.into_errors(),
        vec![ErrorPayload::Custom(
            json!({"message": "spouse is required and must contain an age"})
        )]
    );
}

#[test]
fn present_object_satisfies_bare_requirement() {
    let rules: Vec<Descriptor> = vec![Descriptor::new("spouse")];
    let result = validate(&john(), &rules, false).unwrap();
    assert_eq!(result, ValidationResult::success());
}

#[test]
fn descriptors_are_not_modified() {
    let rules = rules();
    let before = rules.clone();
    let _ = validate(&john(), &rules, false).unwrap();

    // NaN != NaN, so compare the parts that do not hold floats.
    for (after, before) in rules.iter().zip(&before) {
        assert_eq!(after.required(), before.required());
        assert_eq!(after.error(), before.error());
    }
    assert_eq!(rules[0].required(), &Required::One("name".to_owned()));
}

#[test]
fn validator_type_gives_the_same_answers() {
    let validator = Validator::new(rules()).unwrap();
    let eager = validator.check(&john());
    let lazy = validator.clone().lazy(true).check(&john());

    assert_eq!(eager, validate(&john(), &rules(), false).unwrap());
    assert_eq!(lazy.errors().first(), eager.errors().first());
    assert_eq!(lazy.errors().len(), 1);
}

#[test]
fn json_loaded_rules_match_builder_rules() {
    let loaded: Vec<Descriptor> = nebula_require::json::descriptors_from_value(json!([
        {"required": "name"},
        {"required": "spouse.name", "invalidValues": [""],
         "error": {"message": "spouse is required and must contain a name"}},
        {"required": ["notThere", "alsoNotThere"]}
    ]))
    .unwrap();

    let result = validate(&john(), &loaded, false).unwrap();
    assert_eq!(
        result.into_errors(),
        vec![ErrorPayload::<serde_json::Value>::missing(&["notThere", "alsoNotThere"])]
    );
}

#[test]
fn shared_across_threads() {
    let validator = std::sync::Arc::new(Validator::new(rules()).unwrap());

    let handles: Vec<_> = (0..4)
        .map(|_| {
            let validator = std::sync::Arc::clone(&validator);
            std::thread::spawn(move || validator.check(&john()).errors().len())
        })
        .collect();

    for handle in handles {
        assert_eq!(handle.join().unwrap(), 2);
    }
}
