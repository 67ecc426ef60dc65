//! Error Suppression Guard
//!
//! A `Result`-oriented scope guard: run a fallible operation and swallow
//! only the error kinds the caller lists, letting everything else propagate.

/// Errors that report a coarse kind usable for matching.
pub trait Kinded {
    type Kind: PartialEq;

    fn kind(&self) -> Self::Kind;
}

/// Run `op`, swallowing errors whose kind appears in `kinds`.
///
/// Returns `Ok(Some(value))` on success, `Ok(None)` when the error was
/// suppressed, and the original error otherwise. Several kinds may be
/// suppressed by one guard.
pub fn suppress<T, E, F>(kinds: &[E::Kind], op: F) -> Result<Option<T>, E>
where
    E: Kinded,
    F: FnOnce() -> Result<T, E>,
{
    match op() {
        Ok(value) => Ok(Some(value)),
        Err(err) if kinds.contains(&err.kind()) => Ok(None),
        Err(err) => Err(err),
    }
}
