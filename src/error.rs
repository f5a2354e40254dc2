use std::{error, fmt};

/// The single error enumeration shared by schema compilation, reference
/// resolution and instance validation. Both phases stop at the first error
/// and report exactly one kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValidationError {
    /// The underlying JSON document failed to parse.
    JsonParse,
    /// A schema document was neither an object nor a boolean, or a keyword
    /// expecting an object subschema container got something else.
    InvalidObjectType,
    /// A keyword expecting a number got a different JSON kind.
    InvalidNumberType,
    /// A keyword expecting a non-negative integer got a different value.
    InvalidIntegerType,
    /// A keyword expecting a string got a different JSON kind.
    InvalidStringType,
    /// A keyword expecting an array got a different JSON kind.
    InvalidArrayType,
    /// The `enum` keyword value was not an array.
    InvalidEnumType,
    /// A `type` entry named an unknown instance type.
    InvalidInstanceType,
    /// The `type` keyword value was neither a string nor an array of strings.
    ExpectedArrayOrString,
    /// A `pattern` or `patternProperties` regular expression failed to compile.
    RegexCreationFailed,

    /// The instance's type does not match the schema's declared type.
    Type,
    /// The instance deep-equals no element of the schema's `enum` array.
    Enum,
    /// The instance does not deep-equal the schema's `const` value.
    Constant,
    /// The string is shorter than `minLength` code points.
    MinLength,
    /// The string is longer than `maxLength` code points.
    MaxLength,
    /// The string does not match the schema's `pattern`.
    Pattern,
    /// The number is below `minimum`.
    Minimum,
    /// The number is above `maximum`.
    Maximum,
    /// The number is not strictly above `exclusiveMinimum`.
    ExclusiveMinimum,
    /// The number is not strictly below `exclusiveMaximum`.
    ExclusiveMaximum,
    /// The number is not a multiple of `multipleOf`.
    MultipleOf,
    /// A property listed in `required` is missing.
    Required,
    /// A property triggered a `dependentRequired` entry whose keys are missing.
    DependentRequired,
    /// The object has fewer than `minProperties` properties.
    MinProperties,
    /// The object has more than `maxProperties` properties.
    MaxProperties,
    /// The array has fewer than `minItems` items.
    MinItems,
    /// The array has more than `maxItems` items.
    MaxItems,
    /// The array contains duplicate items under `uniqueItems`.
    UniqueItems,
    /// No array element matched the `contains` subschema.
    Contains,
    /// Fewer elements matched `contains` than `minContains` allows.
    MinContains,
    /// More elements matched `contains` than `maxContains` allows.
    MaxContains,
    /// An element past the `prefixItems` window failed the `items` subschema.
    Items,
    /// An element within the `prefixItems` window failed its positional subschema.
    PrefixItems,
    /// Some subschema of `allOf` rejected the instance.
    AllOf,
    /// Every subschema of `anyOf` rejected the instance.
    AnyOf,
    /// The number of `oneOf` subschemas accepting the instance was not exactly one.
    OneOf,
    /// The `if` subschema accepted the instance but `then` rejected it.
    IfThen,
    /// The `if` subschema rejected the instance and so did `else`.
    IfElse,
    /// The `not` subschema accepted the instance.
    Not,
    /// A property triggered a `dependentSchemas` entry that rejected the instance.
    DependentSchemas,
    /// A property matched by neither `properties` nor `patternProperties`
    /// failed the `additionalProperties` subschema.
    AdditionalProperties,
    /// A property name failed the `propertyNames` subschema.
    PropertyNames,
    /// A property matched a `patternProperties` regex and failed its subschema.
    PatternProperties,
    /// The schema was the boolean literal `false`, which rejects everything.
    FalseSchema,

    /// The `$ref` fragment has a shape this pool does not resolve
    /// (non-fragment refs, or a pointer outside `$defs`).
    UnsupportedReference,
    /// A `$ref` pointer segment did not lead to a schema.
    ReferenceNotFound,
    /// The first `$ref` pointer segment named no entry in the root's `$defs`.
    DefinitionNotFound,
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let message = match self {
            ValidationError::JsonParse => "the document is not valid JSON",
            ValidationError::InvalidObjectType => "expected an object or boolean schema",
            ValidationError::InvalidNumberType => "expected a number",
            ValidationError::InvalidIntegerType => "expected a non-negative integer",
            ValidationError::InvalidStringType => "expected a string",
            ValidationError::InvalidArrayType => "expected an array",
            ValidationError::InvalidEnumType => "'enum' must be an array",
            ValidationError::InvalidInstanceType => "unknown instance type name",
            ValidationError::ExpectedArrayOrString => {
                "'type' must be a string or an array of strings"
            }
            ValidationError::RegexCreationFailed => "invalid regular expression",
            ValidationError::Type => "the instance type is not allowed",
            ValidationError::Enum => "the instance matches no enum variant",
            ValidationError::Constant => "the instance does not equal the constant",
            ValidationError::MinLength => "the string is too short",
            ValidationError::MaxLength => "the string is too long",
            ValidationError::Pattern => "the string does not match the pattern",
            ValidationError::Minimum => "the number is below the minimum",
            ValidationError::Maximum => "the number is above the maximum",
            ValidationError::ExclusiveMinimum => "the number is at or below the exclusive minimum",
            ValidationError::ExclusiveMaximum => "the number is at or above the exclusive maximum",
            ValidationError::MultipleOf => "the number is not a multiple of the divisor",
            ValidationError::Required => "a required property is missing",
            ValidationError::DependentRequired => "a dependent required property is missing",
            ValidationError::MinProperties => "the object has too few properties",
            ValidationError::MaxProperties => "the object has too many properties",
            ValidationError::MinItems => "the array has too few items",
            ValidationError::MaxItems => "the array has too many items",
            ValidationError::UniqueItems => "the array has duplicate items",
            ValidationError::Contains => "no array item matches the contained schema",
            ValidationError::MinContains => "too few array items match the contained schema",
            ValidationError::MaxContains => "too many array items match the contained schema",
            ValidationError::Items => "an array item does not match the items schema",
            ValidationError::PrefixItems => "an array item does not match its positional schema",
            ValidationError::AllOf => "the instance fails a subschema of 'allOf'",
            ValidationError::AnyOf => "the instance fails every subschema of 'anyOf'",
            ValidationError::OneOf => "the instance must match exactly one subschema of 'oneOf'",
            ValidationError::IfThen => "the instance matches 'if' but fails 'then'",
            ValidationError::IfElse => "the instance fails both 'if' and 'else'",
            ValidationError::Not => "the instance matches the negated schema",
            ValidationError::DependentSchemas => "the instance fails a dependent schema",
            ValidationError::AdditionalProperties => "an additional property fails its schema",
            ValidationError::PropertyNames => "a property name fails its schema",
            ValidationError::PatternProperties => "a pattern-matched property fails its schema",
            ValidationError::FalseSchema => "the schema rejects every instance",
            ValidationError::UnsupportedReference => "unsupported '$ref' shape",
            ValidationError::ReferenceNotFound => "'$ref' target not found",
            ValidationError::DefinitionNotFound => "'$ref' names no entry in '$defs'",
        };
        f.write_str(message)
    }
}

impl error::Error for ValidationError {}

impl From<serde_json::Error> for ValidationError {
    fn from(_: serde_json::Error) -> Self {
        ValidationError::JsonParse
    }
}

impl From<regex::Error> for ValidationError {
    fn from(_: regex::Error) -> Self {
        ValidationError::RegexCreationFailed
    }
}
