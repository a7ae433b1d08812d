/// True iff `index` addresses an element of `seq`.
///
/// Indices are signed so callers can pass raw host values; negative indices are
/// never in bounds.
pub fn has_index<T>(seq: &[T], index: i64) -> bool {
    usize::try_from(index).is_ok_and(|i| i < seq.len())
}

/// Element at `index`, or `None` when [`has_index`] is false.
pub fn get_index<T>(seq: &[T], index: i64) -> Option<&T> {
    usize::try_from(index).ok().and_then(|i| seq.get(i))
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/lookup.rs"]
mod tests;
