use crate::context::{Context, SchemaIndex};
use crate::error::ValidationError;
use crate::schemas::Schema;
use serde_json::Value;
use std::collections::HashSet;

/// `dependentRequired` maps a trigger property to the keys that must appear
/// alongside it. Each dependency list must hold unique strings.
pub(crate) fn compile(
    value: &Value,
    index: SchemaIndex,
    context: &mut Context,
) -> Result<(), ValidationError> {
    let Value::Object(entries) = value else {
        return Err(ValidationError::InvalidObjectType);
    };
    let mut dependent = Vec::with_capacity(entries.len());
    for (trigger, dependencies) in entries {
        let Value::Array(dependencies) = dependencies else {
            return Err(ValidationError::InvalidArrayType);
        };
        let mut keys = Vec::with_capacity(dependencies.len());
        let mut seen = HashSet::with_capacity(dependencies.len());
        for dependency in dependencies {
            let Value::String(key) = dependency else {
                return Err(ValidationError::InvalidStringType);
            };
            if !seen.insert(key) {
                return Err(ValidationError::InvalidArrayType);
            }
            keys.push(key.clone());
        }
        dependent.push((trigger.clone(), keys));
    }
    context.schema_mut(index).dependent_required = dependent;
    Ok(())
}

pub(crate) fn validate(
    _: &Context,
    schema: &Schema,
    instance: &Value,
) -> Result<(), ValidationError> {
    let Value::Object(object) = instance else {
        return Ok(());
    };
    for (trigger, dependencies) in &schema.dependent_required {
        if !object.contains_key(trigger) {
            continue;
        }
        if !dependencies.iter().all(|key| object.contains_key(key)) {
            return Err(ValidationError::DependentRequired);
        }
    }
    Ok(())
}
