pub(crate) mod additional_properties;
pub(crate) mod all_of;
pub(crate) mod any_of;
pub(crate) mod const_;
pub(crate) mod contains;
pub(crate) mod defs;
pub(crate) mod dependent_required;
pub(crate) mod dependent_schemas;
pub(crate) mod enum_;
pub(crate) mod exclusive_maximum;
pub(crate) mod exclusive_minimum;
pub(crate) mod helpers;
pub(crate) mod if_;
pub(crate) mod items;
pub(crate) mod max_items;
pub(crate) mod max_length;
pub(crate) mod max_properties;
pub(crate) mod maximum;
pub(crate) mod metadata;
pub(crate) mod min_items;
pub(crate) mod min_length;
pub(crate) mod min_properties;
pub(crate) mod minimum;
pub(crate) mod multiple_of;
pub(crate) mod not;
pub(crate) mod one_of;
pub(crate) mod pattern;
pub(crate) mod pattern_properties;
pub(crate) mod prefix_items;
pub(crate) mod properties;
pub(crate) mod property_names;
pub(crate) mod ref_;
pub(crate) mod required;
pub(crate) mod type_;
pub(crate) mod unique_items;

use crate::context::{Context, SchemaIndex};
use crate::error::ValidationError;
use crate::schemas::{Schema, SchemaKeyword};
use serde_json::Value;

/// Compiles one keyword's value into the record at the given index.
pub(crate) type CompileFunc =
    fn(&Value, SchemaIndex, &mut Context) -> Result<(), ValidationError>;

/// Checks one keyword of a compiled record against an instance.
pub(crate) type ValidateFunc = fn(&Context, &Schema, &Value) -> Result<(), ValidationError>;

/// The vocabulary group a keyword belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum KeywordKind {
    Core,
    Validation,
    Applicator,
    Metadata,
    Unevaluated,
}

/// One dispatch-table row: the textual keyword, its enum variant (also its
/// bit position), its group, and the two optional handlers. A row with a
/// compile handler but no validate handler is metadata or is validated by a
/// neighboring keyword; a row with no compile handler is unimplemented and
/// its appearance is logged.
#[derive(Debug)]
pub(crate) struct KeywordSpec {
    pub(crate) name: &'static str,
    pub(crate) keyword: SchemaKeyword,
    pub(crate) kind: KeywordKind,
    pub(crate) compile: Option<CompileFunc>,
    pub(crate) validate: Option<ValidateFunc>,
}

macro_rules! spec {
    ($name:literal, $keyword:ident, $kind:ident, $compile:expr, $validate:expr) => {
        KeywordSpec {
            name: $name,
            keyword: SchemaKeyword::$keyword,
            kind: KeywordKind::$kind,
            compile: $compile,
            validate: $validate,
        }
    };
}

/// The single source of truth binding keyword names, enum variants and
/// handlers. Row order is [`SchemaKeyword`] discriminant order: compilation
/// walks the whole table per schema object, validation walks a record's set
/// bits in the same order, so earlier rows short-circuit first.
pub(crate) static KEYWORDS: [KeywordSpec; 53] = [
    spec!("$schema", Schema, Core, Some(metadata::compile_dialect), None),
    spec!("$id", Id, Core, Some(metadata::compile_id), None),
    spec!("$ref", Ref, Core, Some(ref_::compile), None),
    spec!("$comment", Comment, Core, Some(metadata::compile_comment), None),
    spec!("$defs", Defs, Core, Some(defs::compile), None),
    spec!("$anchor", Anchor, Core, None, None),
    spec!("$dynamicAnchor", DynamicAnchor, Core, None, None),
    spec!("$dynamicRef", DynamicRef, Core, None, None),
    spec!("$vocabulary", Vocabulary, Core, None, None),
    spec!("type", Type, Validation, Some(type_::compile), Some(type_::validate)),
    spec!("enum", Enum, Validation, Some(enum_::compile), Some(enum_::validate)),
    spec!("const", Const, Validation, Some(const_::compile), Some(const_::validate)),
    spec!("minLength", MinLength, Validation, Some(min_length::compile), Some(min_length::validate)),
    spec!("maxLength", MaxLength, Validation, Some(max_length::compile), Some(max_length::validate)),
    spec!("pattern", Pattern, Validation, Some(pattern::compile), Some(pattern::validate)),
    spec!("minimum", Minimum, Validation, Some(minimum::compile), Some(minimum::validate)),
    spec!("maximum", Maximum, Validation, Some(maximum::compile), Some(maximum::validate)),
    spec!("exclusiveMinimum", ExclusiveMinimum, Validation, Some(exclusive_minimum::compile), Some(exclusive_minimum::validate)),
    spec!("exclusiveMaximum", ExclusiveMaximum, Validation, Some(exclusive_maximum::compile), Some(exclusive_maximum::validate)),
    spec!("multipleOf", MultipleOf, Validation, Some(multiple_of::compile), Some(multiple_of::validate)),
    spec!("required", Required, Validation, Some(required::compile), Some(required::validate)),
    spec!("dependentRequired", DependentRequired, Validation, Some(dependent_required::compile), Some(dependent_required::validate)),
    spec!("minProperties", MinProperties, Validation, Some(min_properties::compile), Some(min_properties::validate)),
    spec!("maxProperties", MaxProperties, Validation, Some(max_properties::compile), Some(max_properties::validate)),
    spec!("minItems", MinItems, Validation, Some(min_items::compile), Some(min_items::validate)),
    spec!("maxItems", MaxItems, Validation, Some(max_items::compile), Some(max_items::validate)),
    spec!("uniqueItems", UniqueItems, Validation, Some(unique_items::compile), Some(unique_items::validate)),
    spec!("minContains", MinContains, Validation, Some(contains::compile_min), None),
    spec!("maxContains", MaxContains, Validation, Some(contains::compile_max), None),
    spec!("properties", Properties, Applicator, Some(properties::compile), Some(properties::validate)),
    spec!("patternProperties", PatternProperties, Applicator, Some(pattern_properties::compile), Some(pattern_properties::validate)),
    spec!("additionalProperties", AdditionalProperties, Applicator, Some(additional_properties::compile), Some(additional_properties::validate)),
    spec!("propertyNames", PropertyNames, Applicator, Some(property_names::compile), Some(property_names::validate)),
    spec!("prefixItems", PrefixItems, Applicator, Some(prefix_items::compile), Some(prefix_items::validate)),
    spec!("items", Items, Applicator, Some(items::compile), Some(items::validate)),
    spec!("contains", Contains, Applicator, Some(contains::compile), Some(contains::validate)),
    spec!("allOf", AllOf, Applicator, Some(all_of::compile), Some(all_of::validate)),
    spec!("anyOf", AnyOf, Applicator, Some(any_of::compile), Some(any_of::validate)),
    spec!("oneOf", OneOf, Applicator, Some(one_of::compile), Some(one_of::validate)),
    spec!("if", If, Applicator, Some(if_::compile_if), Some(if_::validate)),
    spec!("then", Then, Applicator, Some(if_::compile_then), None),
    spec!("else", Else, Applicator, Some(if_::compile_else), None),
    spec!("not", Not, Applicator, Some(not::compile), Some(not::validate)),
    spec!("dependentSchemas", DependentSchemas, Applicator, Some(dependent_schemas::compile), Some(dependent_schemas::validate)),
    spec!("title", Title, Metadata, Some(metadata::compile_title), None),
    spec!("description", Description, Metadata, Some(metadata::compile_description), None),
    spec!("default", Default, Metadata, None, None),
    spec!("deprecated", Deprecated, Metadata, None, None),
    spec!("examples", Examples, Metadata, None, None),
    spec!("readOnly", ReadOnly, Metadata, None, None),
    spec!("writeOnly", WriteOnly, Metadata, None, None),
    spec!("unevaluatedItems", UnevaluatedItems, Unevaluated, None, None),
    spec!("unevaluatedProperties", UnevaluatedProperties, Unevaluated, None, None),
];

/// The table row for a textual keyword, if it is part of the vocabulary.
pub(crate) fn lookup(name: &str) -> Option<&'static KeywordSpec> {
    KEYWORDS.iter().find(|spec| spec.name == name)
}
