//! Schema compilation. A JSON schema document is walked against the keyword
//! dispatch table and materialized as flat records in the context's pool;
//! validation later consumes the records without touching the source JSON.
use crate::context::{Context, SchemaIndex};
use crate::error::ValidationError;
use crate::keywords;
use serde_json::Value;

/// Compile one schema document (or subschema) into a freshly appended pool
/// record and return its handle.
///
/// Boolean documents become boolean-literal records. Object documents get
/// one dispatch-table pass — every recognized keyword with a compile handler
/// runs and, on success, sets its bit in the record's keyword set — followed
/// by a second pass retaining unrecognized keys as subschemas so `$ref`
/// pointers can descend through them. Anything else is rejected.
pub(crate) fn compile_schema(
    document: &Value,
    context: &mut Context,
) -> Result<SchemaIndex, ValidationError> {
    match document {
        Value::Bool(value) => {
            let index = context.alloc();
            context.schema_mut(index).bool_schema = Some(*value);
            Ok(index)
        }
        Value::Object(object) => {
            let index = context.alloc();
            for spec in &keywords::KEYWORDS {
                let Some(value) = object.get(spec.name) else {
                    continue;
                };
                match spec.compile {
                    Some(compile) => {
                        compile(value, index, context)?;
                        context.schema_mut(index).flags.insert(spec.keyword);
                    }
                    None => {
                        tracing::debug!(
                            keyword = spec.name,
                            kind = ?spec.kind,
                            "ignoring unimplemented keyword"
                        );
                    }
                }
            }
            for (key, value) in object {
                if keywords::lookup(key).is_some() {
                    continue;
                }
                match value {
                    Value::Object(_) | Value::Bool(_) => {
                        let child = compile_schema(value, context)?;
                        context.schema_mut(index).other_keys.insert(key.clone(), child);
                    }
                    _ => {
                        tracing::debug!(key = %key, "unknown key does not hold a schema, skipping");
                    }
                }
            }
            if context.schema(index).flags.is_empty() {
                context.schema_mut(index).empty_container = true;
            }
            Ok(index)
        }
        _ => Err(ValidationError::InvalidObjectType),
    }
}
