//! List Reconciliation
//!
//! Applies confirmed store results to a local entity list. Callers only
//! use these after the store round-trip succeeded.

use crate::domain::{DomainError, DomainResult, Entity};

pub fn position_of<T: Entity>(list: &[T], id: T::Id) -> Option<usize> {
    list.iter().position(|entity| entity.id() == id)
}

/// Append a record the store has just created
pub fn append<T: Entity>(list: &mut Vec<T>, saved: T) {
    list.push(saved);
}

/// Replace the entry with the same id
pub fn replace_by_id<T: Entity>(list: &mut [T], updated: T) -> DomainResult<()> {
    let id = updated.id();
    let slot = list
        .iter_mut()
        .find(|entity| entity.id() == id)
        .ok_or_else(|| DomainError::NotFound(format!("record {}", id)))?;
    *slot = updated;
    Ok(())
}

/// Remove and return the entry with `id`
pub fn remove_by_id<T: Entity>(list: &mut Vec<T>, id: T::Id) -> DomainResult<T> {
    let index = position_of(list, id)
        .ok_or_else(|| DomainError::NotFound(format!("record {}", id)))?;
    Ok(list.remove(index))
}
