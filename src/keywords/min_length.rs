use crate::context::{Context, SchemaIndex};
use crate::error::ValidationError;
use crate::keywords::helpers;
use crate::schemas::Schema;
use serde_json::Value;

pub(crate) fn compile(
    value: &Value,
    index: SchemaIndex,
    context: &mut Context,
) -> Result<(), ValidationError> {
    context.schema_mut(index).min_length = Some(helpers::non_negative_integer(value)?);
    Ok(())
}

/// Lengths count Unicode code points, not bytes. Non-strings pass.
pub(crate) fn validate(
    _: &Context,
    schema: &Schema,
    instance: &Value,
) -> Result<(), ValidationError> {
    let Value::String(text) = instance else {
        return Ok(());
    };
    match schema.min_length {
        Some(bound) if (text.chars().count() as u64) < bound => Err(ValidationError::MinLength),
        _ => Ok(()),
    }
}

#[cfg(test)]
mod tests {
    use crate::tests_util::{expect_compile_error, expect_error, expect_valid};
    use crate::ValidationError;
    use serde_json::{json, Value};
    use test_case::test_case;

    #[test_case(json!("abc"))]
    #[test_case(json!("abcd"))]
    #[test_case(json!("héé"); "code points not bytes")]
    #[test_case(json!(12); "non-strings pass")]
    #[test_case(json!(null))]
    fn accepts(instance: Value) {
        expect_valid(json!({"minLength": 3}), instance);
    }

    #[test_case(json!(""))]
    #[test_case(json!("ab"))]
    #[test_case(json!("é"); "one code point")]
    fn rejects(instance: Value) {
        expect_error(json!({"minLength": 3}), instance, ValidationError::MinLength);
    }

    #[test]
    fn combining_marks_count_separately() {
        // U+0065 U+0301 is two code points even though it renders as one glyph.
        expect_valid(json!({"minLength": 2}), json!("e\u{301}"));
        expect_error(
            json!({"minLength": 2}),
            json!("\u{e9}"),
            ValidationError::MinLength,
        );
    }

    #[test]
    fn bound_must_be_a_non_negative_integer() {
        expect_compile_error(
            json!({"minLength": -1}),
            ValidationError::InvalidIntegerType,
        );
        expect_compile_error(
            json!({"minLength": 1.5}),
            ValidationError::InvalidIntegerType,
        );
    }
}
