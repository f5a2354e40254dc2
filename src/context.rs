use crate::error::ValidationError;
use crate::schemas::Schema;
use crate::{compilation, resolver, validator};
use serde_json::Value;

/// An opaque handle to one schema record in a [`Context`]'s pool. Handles
/// stay valid for the life of the context that issued them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SchemaIndex(pub(crate) usize);

#[derive(Debug)]
pub(crate) struct PendingRef {
    pub(crate) referrer: SchemaIndex,
    pub(crate) path: String,
}

/// Owns the schema pool, the list of `$ref`s awaiting resolution, and the
/// root schema index. The pool grows only by appending; records are never
/// moved or dropped individually, so every handed-out [`SchemaIndex`]
/// remains addressable until the context itself is dropped.
#[derive(Debug, Default)]
pub struct Context {
    pub(crate) pool: Vec<Schema>,
    pub(crate) pending_refs: Vec<PendingRef>,
    root: Option<SchemaIndex>,
}

impl Context {
    /// An empty context.
    #[must_use]
    pub fn new() -> Context {
        Context::default()
    }

    /// An empty context with room for `capacity` records before the pool
    /// reallocates.
    #[must_use]
    pub fn with_capacity(capacity: usize) -> Context {
        Context {
            pool: Vec::with_capacity(capacity),
            pending_refs: Vec::new(),
            root: None,
        }
    }

    /// Append a zero-initialized record and return its handle.
    pub(crate) fn alloc(&mut self) -> SchemaIndex {
        self.pool.push(Schema::default());
        SchemaIndex(self.pool.len() - 1)
    }

    pub(crate) fn schema(&self, index: SchemaIndex) -> &Schema {
        &self.pool[index.0]
    }

    pub(crate) fn schema_mut(&mut self, index: SchemaIndex) -> &mut Schema {
        &mut self.pool[index.0]
    }

    pub(crate) fn record_pending_ref(&mut self, referrer: SchemaIndex, path: String) {
        self.pending_refs.push(PendingRef { referrer, path });
    }

    /// Compile a schema document from its JSON text and return the handle of
    /// its root record. Nested subschemas are compiled into the pool as a
    /// side effect; `$ref`s are collected for a later [`Context::resolve_refs`].
    pub fn compile_str(&mut self, text: &str) -> Result<SchemaIndex, ValidationError> {
        let document: Value = serde_json::from_str(text)?;
        self.compile_value(&document)
    }

    /// Compile an already-parsed schema document. See [`Context::compile_str`].
    pub fn compile_value(&mut self, document: &Value) -> Result<SchemaIndex, ValidationError> {
        compilation::compile_schema(document, self)
    }

    /// Rewrite every schema that carried a `$ref` so it holds its target's
    /// contents. Must run after the root document is compiled and before
    /// validation; `root` anchors `$defs` lookups.
    pub fn resolve_refs(&mut self, root: SchemaIndex) -> Result<(), ValidationError> {
        resolver::resolve_refs(root, self)
    }

    /// Record which schema the driver treats as the document root.
    pub fn set_root(&mut self, root: SchemaIndex) {
        self.root = Some(root);
    }

    /// The root recorded by [`Context::set_root`], if any.
    #[must_use]
    pub fn root(&self) -> Option<SchemaIndex> {
        self.root
    }

    /// The `$id` string of a compiled schema, empty when absent.
    #[must_use]
    pub fn id(&self, index: SchemaIndex) -> &str {
        &self.schema(index).id
    }

    /// The `title` string of a compiled schema, empty when absent.
    #[must_use]
    pub fn title(&self, index: SchemaIndex) -> &str {
        &self.schema(index).title
    }

    /// The `description` string of a compiled schema, empty when absent.
    #[must_use]
    pub fn description(&self, index: SchemaIndex) -> &str {
        &self.schema(index).description
    }

    /// The `$comment` string of a compiled schema, empty when absent.
    #[must_use]
    pub fn comment(&self, index: SchemaIndex) -> &str {
        &self.schema(index).comment
    }

    /// Validate an instance given as JSON text against the schema at `root`.
    pub fn validate_str(&self, text: &str, root: SchemaIndex) -> Result<(), ValidationError> {
        let instance: Value = serde_json::from_str(text)?;
        self.validate_value(&instance, root)
    }

    /// Validate a parsed instance against the schema at `root`, reporting
    /// the first failing keyword.
    pub fn validate_value(&self, instance: &Value, root: SchemaIndex) -> Result<(), ValidationError> {
        validator::validate_schema(self, root, instance)
    }
}
