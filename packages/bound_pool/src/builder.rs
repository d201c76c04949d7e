use std::marker::PhantomData;

use crate::{BoundPool, GrowthPolicy};

/// Builder for creating an instance of [`BoundPool`].
///
/// You only need to use this builder if you want to customize the pool configuration.
/// The default configuration used by [`BoundPool::new()`][1] is sufficient for most use cases.
///
/// # Examples
///
/// ```
/// use bound_pool::{BoundPool, Buffer, GrowthPolicy};
///
/// let locale = "fi-FI";
///
/// let pool = BoundPool::<&str, Buffer<'_, &str>>::builder(&locale)
///     .growth_policy(GrowthPolicy::KeepPartial)
///     .build();
/// ```
///
/// [1]: BoundPool::new
#[must_use]
pub struct BoundPoolBuilder<'c, C: ?Sized, T> {
    config: &'c C,
    growth_policy: GrowthPolicy,

    _item: PhantomData<T>,
}

impl<C: ?Sized, T> std::fmt::Debug for BoundPoolBuilder<'_, C, T> {
    #[cfg_attr(test, mutants::skip)] // No API contract to test.
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("BoundPoolBuilder")
            .field(
                "config_type",
                &std::format_args!("{}", std::any::type_name::<C>()),
            )
            .field(
                "item_type",
                &std::format_args!("{}", std::any::type_name::<T>()),
            )
            .field("growth_policy", &self.growth_policy)
            .finish_non_exhaustive()
    }
}

impl<'c, C: ?Sized, T> BoundPoolBuilder<'c, C, T> {
    pub(crate) fn new(config: &'c C) -> Self {
        Self {
            config,
            growth_policy: GrowthPolicy::default(),
            _item: PhantomData,
        }
    }

    /// Sets the [growth policy][GrowthPolicy] for the pool. This governs what happens to
    /// items constructed by a [`resize()`][1] that fails partway through.
    ///
    /// # Examples
    ///
    /// ```
    /// use bound_pool::{BoundPool, Buffer, GrowthPolicy};
    ///
    /// let config = 1.5_f64;
    ///
    /// let pool = BoundPool::<f64, Buffer<'_, f64>>::builder(&config)
    ///     .growth_policy(GrowthPolicy::RollBack)
    ///     .build();
    /// ```
    ///
    /// [1]: BoundPool::resize
    pub fn growth_policy(mut self, policy: GrowthPolicy) -> Self {
        self.growth_policy = policy;
        self
    }

    /// Builds the pool with the specified configuration. The pool starts empty.
    ///
    /// # Examples
    ///
    /// ```
    /// use bound_pool::{BoundPool, Buffer};
    ///
    /// let config = 'x';
    ///
    /// let pool = BoundPool::<char, Buffer<'_, char>>::builder(&config).build();
    /// assert!(pool.is_empty());
    /// ```
    ///
    /// # Panics
    ///
    /// Panics if `T` is zero-sized.
    #[must_use]
    pub fn build(self) -> BoundPool<'c, C, T> {
        BoundPool::new_inner(self.config, self.growth_policy)
    }
}
