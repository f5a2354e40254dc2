//! `$ref` resolution. Runs once between compilation and validation: every
//! pending reference is located by descending the root's `$defs` (and any
//! retained non-vocabulary containers below it), then the referring record
//! is overwritten with a copy of the target so validation never chases an
//! indirection.
use crate::context::{Context, PendingRef, SchemaIndex};
use crate::error::ValidationError;
use std::collections::HashMap;

#[derive(Clone, Copy, PartialEq)]
enum RefState {
    Unresolved,
    InProgress,
    Done,
}

pub(crate) fn resolve_refs(root: SchemaIndex, context: &mut Context) -> Result<(), ValidationError> {
    let pending = std::mem::take(&mut context.pending_refs);
    // Referrer index -> pending-list position, so a chain of references can
    // be resolved depth-first before anyone copies a stale record.
    let by_referrer: HashMap<SchemaIndex, usize> = pending
        .iter()
        .enumerate()
        .map(|(position, entry)| (entry.referrer, position))
        .collect();
    let mut states = vec![RefState::Unresolved; pending.len()];
    for position in 0..pending.len() {
        resolve_one(position, &pending, &by_referrer, &mut states, root, context)?;
    }
    tracing::debug!(count = pending.len(), "resolved pending references");
    Ok(())
}

fn resolve_one(
    position: usize,
    pending: &[PendingRef],
    by_referrer: &HashMap<SchemaIndex, usize>,
    states: &mut Vec<RefState>,
    root: SchemaIndex,
    context: &mut Context,
) -> Result<(), ValidationError> {
    match states[position] {
        RefState::Done => return Ok(()),
        // A reference cycle; fusing by copy cannot represent it, so the
        // record is left pointing at whatever has been resolved so far.
        RefState::InProgress => return Ok(()),
        RefState::Unresolved => {}
    }
    states[position] = RefState::InProgress;
    let entry = &pending[position];
    if let Some(target) = locate(&entry.path, root, context)? {
        if let Some(&dependency) = by_referrer.get(&target) {
            resolve_one(dependency, pending, by_referrer, states, root, context)?;
        }
        fuse(entry.referrer, target, context);
    }
    states[position] = RefState::Done;
    Ok(())
}

/// Follow a `#/$defs/...` fragment pointer from the root. `Ok(None)` means
/// the pointer was the bare root fragment `#`, which needs no rewriting.
fn locate(
    path: &str,
    root: SchemaIndex,
    context: &Context,
) -> Result<Option<SchemaIndex>, ValidationError> {
    let mut segments = path.split('/');
    if segments.next() != Some("#") {
        return Err(ValidationError::UnsupportedReference);
    }
    let Some(container) = segments.next() else {
        return Ok(None);
    };
    if container != "$defs" {
        // Cross-document references and non-$defs pointers are out of scope.
        return Err(ValidationError::UnsupportedReference);
    }
    let name = segments.next().ok_or(ValidationError::DefinitionNotFound)?;
    let mut current = *context
        .schema(root)
        .defs
        .get(name)
        .ok_or(ValidationError::DefinitionNotFound)?;
    for segment in segments {
        current = *context
            .schema(current)
            .other_keys
            .get(segment)
            .ok_or(ValidationError::ReferenceNotFound)?;
    }
    Ok(Some(current))
}

/// Overwrite the referrer with the target's record. The referrer keeps its
/// own `name` (a property child must keep answering for its key) and its
/// original reference string.
fn fuse(referrer: SchemaIndex, target: SchemaIndex, context: &mut Context) {
    let mut copy = context.schema(target).clone();
    let record = context.schema_mut(referrer);
    copy.name = std::mem::take(&mut record.name);
    copy.reference = std::mem::take(&mut record.reference);
    *record = copy;
}
