use crate::context::SchemaIndex;
use crate::primitive_type::TypeSet;
use regex::Regex;
use serde_json::Value;
use std::collections::HashMap;

/// Every keyword the dispatch table recognizes. The discriminant doubles as
/// the keyword's bit position in [`KeywordSet`] and as its row index in the
/// dispatch table, so enum order is both parse order and validation
/// short-circuit priority.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub(crate) enum SchemaKeyword {
    // Core.
    Schema = 0,
    Id,
    Ref,
    Comment,
    Defs,
    Anchor,
    DynamicAnchor,
    DynamicRef,
    Vocabulary,
    // Validation.
    Type,
    Enum,
    Const,
    MinLength,
    MaxLength,
    Pattern,
    Minimum,
    Maximum,
    ExclusiveMinimum,
    ExclusiveMaximum,
    MultipleOf,
    Required,
    DependentRequired,
    MinProperties,
    MaxProperties,
    MinItems,
    MaxItems,
    UniqueItems,
    MinContains,
    MaxContains,
    // Applicators.
    Properties,
    PatternProperties,
    AdditionalProperties,
    PropertyNames,
    PrefixItems,
    Items,
    Contains,
    AllOf,
    AnyOf,
    OneOf,
    If,
    Then,
    Else,
    Not,
    DependentSchemas,
    // Metadata.
    Title,
    Description,
    Default,
    Deprecated,
    Examples,
    ReadOnly,
    WriteOnly,
    // Unevaluated.
    UnevaluatedItems,
    UnevaluatedProperties,
}

impl SchemaKeyword {
    /// All keywords in discriminant order; indexable by `keyword as usize`.
    pub(crate) const ALL: [SchemaKeyword; 53] = [
        SchemaKeyword::Schema,
        SchemaKeyword::Id,
        SchemaKeyword::Ref,
        SchemaKeyword::Comment,
        SchemaKeyword::Defs,
        SchemaKeyword::Anchor,
        SchemaKeyword::DynamicAnchor,
        SchemaKeyword::DynamicRef,
        SchemaKeyword::Vocabulary,
        SchemaKeyword::Type,
        SchemaKeyword::Enum,
        SchemaKeyword::Const,
        SchemaKeyword::MinLength,
        SchemaKeyword::MaxLength,
        SchemaKeyword::Pattern,
        SchemaKeyword::Minimum,
        SchemaKeyword::Maximum,
        SchemaKeyword::ExclusiveMinimum,
        SchemaKeyword::ExclusiveMaximum,
        SchemaKeyword::MultipleOf,
        SchemaKeyword::Required,
        SchemaKeyword::DependentRequired,
        SchemaKeyword::MinProperties,
        SchemaKeyword::MaxProperties,
        SchemaKeyword::MinItems,
        SchemaKeyword::MaxItems,
        SchemaKeyword::UniqueItems,
        SchemaKeyword::MinContains,
        SchemaKeyword::MaxContains,
        SchemaKeyword::Properties,
        SchemaKeyword::PatternProperties,
        SchemaKeyword::AdditionalProperties,
        SchemaKeyword::PropertyNames,
        SchemaKeyword::PrefixItems,
        SchemaKeyword::Items,
        SchemaKeyword::Contains,
        SchemaKeyword::AllOf,
        SchemaKeyword::AnyOf,
        SchemaKeyword::OneOf,
        SchemaKeyword::If,
        SchemaKeyword::Then,
        SchemaKeyword::Else,
        SchemaKeyword::Not,
        SchemaKeyword::DependentSchemas,
        SchemaKeyword::Title,
        SchemaKeyword::Description,
        SchemaKeyword::Default,
        SchemaKeyword::Deprecated,
        SchemaKeyword::Examples,
        SchemaKeyword::ReadOnly,
        SchemaKeyword::WriteOnly,
        SchemaKeyword::UnevaluatedItems,
        SchemaKeyword::UnevaluatedProperties,
    ];
}

/// Which keywords a schema record actually carries. The validator walks set
/// bits only, so absent keywords cost nothing at validation time.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub(crate) struct KeywordSet(u64);

impl KeywordSet {
    pub(crate) fn insert(&mut self, keyword: SchemaKeyword) {
        self.0 |= 1 << keyword as u64;
    }

    pub(crate) fn contains(self, keyword: SchemaKeyword) -> bool {
        self.0 & (1 << keyword as u64) != 0
    }

    pub(crate) fn is_empty(self) -> bool {
        self.0 == 0
    }

    /// Set bits in ascending order, i.e. dispatch-table order.
    pub(crate) fn iter(self) -> KeywordIter {
        KeywordIter(self.0)
    }
}

#[derive(Debug)]
pub(crate) struct KeywordIter(u64);

impl Iterator for KeywordIter {
    type Item = SchemaKeyword;

    fn next(&mut self) -> Option<SchemaKeyword> {
        if self.0 == 0 {
            return None;
        }
        let bit = self.0.trailing_zeros() as usize;
        self.0 &= self.0 - 1;
        Some(SchemaKeyword::ALL[bit])
    }
}

/// One pool entry. All subschema edges are [`SchemaIndex`] values into the
/// owning context's pool, never references. A record is either a boolean
/// literal (`bool_schema` set, other fields inert) or a normal record whose
/// meaningful fields are exactly those named by `flags`.
#[derive(Debug, Default, Clone)]
pub(crate) struct Schema {
    pub(crate) flags: KeywordSet,
    pub(crate) bool_schema: Option<bool>,
    /// The object carried no recognized keyword at all.
    pub(crate) empty_container: bool,

    // Identity.
    pub(crate) dialect: String,
    pub(crate) id: String,
    pub(crate) title: String,
    pub(crate) comment: String,
    pub(crate) description: String,
    pub(crate) reference: String,
    /// The key this schema answers for when it is a named child
    /// (a `properties` or `dependentSchemas` entry).
    pub(crate) name: String,
    pub(crate) defs: HashMap<String, SchemaIndex>,
    /// Unrecognized keys kept as subschemas so `$ref` pointers can descend
    /// through containers that are not themselves vocabulary keywords.
    pub(crate) other_keys: HashMap<String, SchemaIndex>,

    // Applicators.
    pub(crate) properties: Vec<SchemaIndex>,
    /// Parallel to `pattern_regex`, entry for entry.
    pub(crate) pattern_properties: Vec<SchemaIndex>,
    pub(crate) pattern_regex: Vec<Regex>,
    pub(crate) additional_properties: Option<SchemaIndex>,
    pub(crate) property_names: Option<SchemaIndex>,
    pub(crate) contains: Option<SchemaIndex>,
    pub(crate) items: Option<SchemaIndex>,
    pub(crate) prefix_items: Vec<SchemaIndex>,
    pub(crate) if_schema: Option<SchemaIndex>,
    pub(crate) then_schema: Option<SchemaIndex>,
    pub(crate) else_schema: Option<SchemaIndex>,
    pub(crate) not_schema: Option<SchemaIndex>,
    pub(crate) all_of: Vec<SchemaIndex>,
    pub(crate) any_of: Vec<SchemaIndex>,
    pub(crate) one_of: Vec<SchemaIndex>,
    pub(crate) dependent_schemas: Vec<SchemaIndex>,

    // Validation keywords.
    pub(crate) types: TypeSet,
    pub(crate) const_value: Option<Value>,
    pub(crate) enum_values: Vec<Value>,
    pub(crate) min_length: Option<u64>,
    pub(crate) max_length: Option<u64>,
    pub(crate) min_items: Option<u64>,
    pub(crate) max_items: Option<u64>,
    pub(crate) min_properties: Option<u64>,
    pub(crate) max_properties: Option<u64>,
    pub(crate) min_contains: Option<u64>,
    pub(crate) max_contains: Option<u64>,
    pub(crate) minimum: Option<serde_json::Number>,
    pub(crate) maximum: Option<serde_json::Number>,
    pub(crate) exclusive_minimum: Option<serde_json::Number>,
    pub(crate) exclusive_maximum: Option<serde_json::Number>,
    pub(crate) multiple_of: Option<serde_json::Number>,
    pub(crate) required: Vec<String>,
    pub(crate) dependent_required: Vec<(String, Vec<String>)>,
    pub(crate) pattern: Option<Regex>,
    pub(crate) unique_items: bool,
}
