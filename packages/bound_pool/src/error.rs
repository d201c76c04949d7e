use std::error::Error as StdError;

use thiserror::Error;

/// Errors that can occur when resizing a [`BoundPool`][crate::BoundPool].
///
/// Misuse of the pool by the caller (e.g. accessing an index beyond the current length) is
/// not reported via this type - such contract violations panic.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum Error {
    /// The pool could not grow because storage for a new slot or a new item could not be
    /// obtained.
    ///
    /// What happens to the items that were constructed before the failure is determined by
    /// the [`GrowthPolicy`][crate::GrowthPolicy] of the pool.
    #[error("failed to allocate the item for slot {index}")]
    AllocationFailure {
        /// Index of the slot that could not be filled.
        index: usize,

        /// The underlying cause, either a failure to reserve slot storage or the error
        /// returned by [`FromConfig::from_config()`][crate::FromConfig::from_config].
        #[source]
        source: Box<dyn StdError + Send + Sync + 'static>,
    },
}

/// A specialized `Result` type for pool operations, returning the crate's
/// [`Error`] type as the error value.
pub(crate) type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
#[cfg_attr(coverage_nightly, coverage(off))]
mod tests {
    use std::collections::TryReserveError;
    use std::fmt::Debug;

    use static_assertions::assert_impl_all;

    use super::*;

    assert_impl_all!(Error: Send, Sync, Debug);

    fn reserve_error() -> TryReserveError {
        Vec::<u8>::new()
            .try_reserve(usize::MAX)
            .expect_err("reserving usize::MAX bytes cannot succeed")
    }

    #[test]
    fn allocation_failure_message_names_slot() {
        let error = Error::AllocationFailure {
            index: 7,
            source: Box::new(reserve_error()),
        };

        assert_eq!(error.to_string(), "failed to allocate the item for slot 7");
    }

    #[test]
    fn allocation_failure_exposes_source() {
        let error = Error::AllocationFailure {
            index: 0,
            source: Box::new(reserve_error()),
        };

        let source = error.source().expect("allocation failure always has a source");
        assert!(source.downcast_ref::<TryReserveError>().is_some());
    }
}
