/// Determines what happens to a partially grown pool when an item cannot be constructed.
///
/// By default, the items constructed before the failure are kept.
///
/// # Examples
///
/// ```
/// use bound_pool::{BoundPool, Buffer, GrowthPolicy};
///
/// let config = ();
///
/// // The growth policy is set at pool creation time.
/// let pool = BoundPool::<(), Buffer<'_, ()>>::builder(&config)
///     .growth_policy(GrowthPolicy::RollBack)
///     .build();
///
/// assert_eq!(pool.growth_policy(), GrowthPolicy::RollBack);
/// ```
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
#[non_exhaustive]
pub enum GrowthPolicy {
    /// Items constructed before the failure stay in the pool, so after a failed
    /// [`resize()`][crate::BoundPool::resize] the length of the pool equals the index of the
    /// slot that could not be filled. This is the default.
    #[default]
    KeepPartial,

    /// Items constructed by the failed [`resize()`][crate::BoundPool::resize] are dropped
    /// again, so the pool has the same length as before the call.
    ///
    /// Items that existed before the call are never affected, whatever the policy.
    RollBack,
}
