//! Whole-pipeline scenarios: compile, resolve references, validate, and pin
//! the exact error kind reported on failure.
use schemapool::{Context, SchemaIndex, ValidationError};
use serde_json::{json, Value};

fn compiled(schema: &Value) -> (Context, SchemaIndex) {
    let mut context = Context::new();
    let root = context.compile_value(schema).expect("schema must compile");
    context.resolve_refs(root).expect("refs must resolve");
    context.set_root(root);
    (context, root)
}

#[test]
fn scalar_type_check() {
    let (context, root) = compiled(&json!({"type": "number"}));
    assert_eq!(context.validate_value(&json!(42), root), Ok(()));
    assert_eq!(
        context.validate_value(&json!("foo"), root),
        Err(ValidationError::Type)
    );
}

#[test]
fn person_schema_with_a_numeric_bound() {
    let (context, root) = compiled(&json!({
        "$id": "x",
        "type": "object",
        "properties": {
            "firstName": {"type": "string"},
            "lastName": {"type": "string"},
            "age": {"type": "integer", "minimum": 21}
        }
    }));
    assert_eq!(
        context.validate_value(
            &json!({"firstName": "John", "lastName": "Doe", "age": 21}),
            root
        ),
        Ok(())
    );
    assert_eq!(
        context.validate_value(
            &json!({"firstName": "John", "lastName": "Doe", "age": 20}),
            root
        ),
        Err(ValidationError::Minimum)
    );
}

#[test]
fn nested_properties_are_not_implicitly_required() {
    let (context, root) = compiled(&json!({
        "type": "object",
        "properties": {
            "name": {
                "type": "object",
                "properties": {
                    "firstName": {"type": "string"},
                    "lastName": {"type": "string"}
                }
            }
        }
    }));
    assert_eq!(context.validate_value(&json!({}), root), Ok(()));
}

#[test]
fn contains_window() {
    let (context, root) = compiled(&json!({
        "contains": {"type": "integer"},
        "minContains": 2,
        "maxContains": 3
    }));
    assert_eq!(context.validate_value(&json!([1, "a", 2]), root), Ok(()));
    assert_eq!(
        context.validate_value(&json!([1]), root),
        Err(ValidationError::MinContains)
    );
    assert_eq!(
        context.validate_value(&json!([1, 2, 3, 4]), root),
        Err(ValidationError::MaxContains)
    );
}

#[test]
fn reference_through_a_nested_container() {
    let (context, root) = compiled(&json!({
        "$defs": {
            "personal": {
                "address": {
                    "type": "object",
                    "properties": {"street": {"type": "string"}}
                }
            }
        },
        "properties": {"home": {"$ref": "#/$defs/personal/address"}}
    }));
    assert_eq!(
        context.validate_value(&json!({"home": {"street": "Main"}}), root),
        Ok(())
    );
    assert_eq!(
        context.validate_value(&json!({"home": {"street": 42}}), root),
        Err(ValidationError::Type)
    );
}

#[test]
fn conditional_branches_report_their_own_kinds() {
    let (context, root) = compiled(&json!({
        "if": {"type": "integer"},
        "then": {"minimum": 0},
        "else": {"type": "string"}
    }));
    assert_eq!(context.validate_value(&json!(5), root), Ok(()));
    assert_eq!(
        context.validate_value(&json!(-1), root),
        Err(ValidationError::IfThen)
    );
    assert_eq!(context.validate_value(&json!("hi"), root), Ok(()));
    assert_eq!(
        context.validate_value(&json!(true), root),
        Err(ValidationError::IfElse)
    );
}

#[test]
fn one_context_can_hold_several_roots() {
    let mut context = Context::new();
    let numbers = context.compile_value(&json!({"type": "number"})).unwrap();
    let strings = context.compile_value(&json!({"type": "string"})).unwrap();
    context.resolve_refs(numbers).unwrap();
    assert_eq!(context.validate_value(&json!(1), numbers), Ok(()));
    assert_eq!(context.validate_value(&json!("x"), strings), Ok(()));
    assert_eq!(
        context.validate_value(&json!("x"), numbers),
        Err(ValidationError::Type)
    );
}

#[test]
fn a_finalized_context_validates_from_several_threads() {
    let (context, root) = compiled(&json!({"type": "integer", "minimum": 0}));
    std::thread::scope(|scope| {
        for _ in 0..4 {
            scope.spawn(|| {
                assert_eq!(context.validate_value(&json!(7), root), Ok(()));
                assert_eq!(
                    context.validate_value(&json!(-7), root),
                    Err(ValidationError::Minimum)
                );
            });
        }
    });
}

#[test]
fn validation_is_repeatable_on_a_finalized_context() {
    let (context, root) = compiled(&json!({"minimum": 3}));
    for _ in 0..3 {
        assert_eq!(context.validate_value(&json!(5), root), Ok(()));
        assert_eq!(
            context.validate_value(&json!(1), root),
            Err(ValidationError::Minimum)
        );
    }
}
