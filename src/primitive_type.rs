use serde_json::Value;
use std::{convert::TryFrom, fmt};

/// The JSON kinds an instance may declare through the `type` keyword.
///
/// `Integer` is not a distinct wire type: a JSON number whose fractional
/// part is exactly zero satisfies it, and every integer satisfies `Number`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InstanceType {
    /// A JSON array.
    Array,
    /// A JSON boolean.
    Boolean,
    /// A JSON number with a zero fractional part.
    Integer,
    /// The JSON null value.
    Null,
    /// Any JSON number.
    Number,
    /// A JSON object.
    Object,
    /// A JSON string.
    String,
}

impl fmt::Display for InstanceType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            InstanceType::Array => f.write_str("array"),
            InstanceType::Boolean => f.write_str("boolean"),
            InstanceType::Integer => f.write_str("integer"),
            InstanceType::Null => f.write_str("null"),
            InstanceType::Number => f.write_str("number"),
            InstanceType::Object => f.write_str("object"),
            InstanceType::String => f.write_str("string"),
        }
    }
}

impl TryFrom<&str> for InstanceType {
    type Error = ();

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        match value {
            "array" => Ok(InstanceType::Array),
            "boolean" => Ok(InstanceType::Boolean),
            "integer" => Ok(InstanceType::Integer),
            "null" => Ok(InstanceType::Null),
            "number" => Ok(InstanceType::Number),
            "object" => Ok(InstanceType::Object),
            "string" => Ok(InstanceType::String),
            _ => Err(()),
        }
    }
}

/// A set of permitted instance types, one bit per [`InstanceType`]. A `type`
/// keyword holding an array of names becomes the union of their bits.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub(crate) struct TypeSet(u8);

impl TypeSet {
    pub(crate) const fn empty() -> TypeSet {
        TypeSet(0)
    }

    pub(crate) fn insert(&mut self, ty: InstanceType) {
        self.0 |= 1 << ty as u8;
    }

    pub(crate) fn contains(self, ty: InstanceType) -> bool {
        self.0 & (1 << ty as u8) != 0
    }

    /// Whether `instance` is one of the permitted types. Integers satisfy
    /// `number`; numbers with a zero fractional part satisfy `integer`.
    pub(crate) fn matches(self, instance: &Value) -> bool {
        match instance {
            Value::Null => self.contains(InstanceType::Null),
            Value::Bool(_) => self.contains(InstanceType::Boolean),
            Value::String(_) => self.contains(InstanceType::String),
            Value::Array(_) => self.contains(InstanceType::Array),
            Value::Object(_) => self.contains(InstanceType::Object),
            Value::Number(number) => {
                if self.contains(InstanceType::Number) {
                    return true;
                }
                self.contains(InstanceType::Integer)
                    && (number.is_u64()
                        || number.is_i64()
                        || number.as_f64().map_or(false, |value| value.fract() == 0.0))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{InstanceType, TypeSet};
    use serde_json::json;
    use std::convert::TryFrom;
    use test_case::test_case;

    #[test_case("array", InstanceType::Array)]
    #[test_case("boolean", InstanceType::Boolean)]
    #[test_case("integer", InstanceType::Integer)]
    #[test_case("null", InstanceType::Null)]
    #[test_case("number", InstanceType::Number)]
    #[test_case("object", InstanceType::Object)]
    #[test_case("string", InstanceType::String)]
    fn round_trips_through_names(name: &str, expected: InstanceType) {
        assert_eq!(InstanceType::try_from(name), Ok(expected));
        assert_eq!(expected.to_string(), name);
    }

    #[test]
    fn rejects_unknown_names() {
        assert!(InstanceType::try_from("float").is_err());
    }

    #[test]
    fn integers_satisfy_number() {
        let mut types = TypeSet::empty();
        types.insert(InstanceType::Number);
        assert!(types.matches(&json!(42)));
        assert!(types.matches(&json!(42.5)));
    }

    #[test]
    fn zero_fraction_floats_satisfy_integer() {
        let mut types = TypeSet::empty();
        types.insert(InstanceType::Integer);
        assert!(types.matches(&json!(42)));
        assert!(types.matches(&json!(42.0)));
        assert!(!types.matches(&json!(42.5)));
    }

    #[test]
    fn union_accepts_any_member() {
        let mut types = TypeSet::empty();
        types.insert(InstanceType::String);
        types.insert(InstanceType::Null);
        assert!(types.matches(&json!("x")));
        assert!(types.matches(&json!(null)));
        assert!(!types.matches(&json!([])));
    }
}
