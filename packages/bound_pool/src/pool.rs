use std::cmp::Ordering;
use std::fmt;
use std::pin::Pin;

use tracing::{debug, warn};

use crate::{BoundPoolBuilder, Error, FromConfig, GrowthPolicy, Result, View, ViewMut};

/// A resizable pool of items that are each constructed from a shared configuration reference.
///
/// The pool owns a sequence of slots, each of which exclusively owns one item in its own pinned
/// heap allocation. The length of the pool is changed with [`resize()`][1]:
///
/// * Growing constructs the missing items in ascending slot order via
///   [`FromConfig::from_config()`], passing the configuration the pool was created with.
/// * Shrinking drops the items in the trailing slots.
///
/// # Stable addresses
///
/// Growing the pool may reallocate the sequence of slots, but that only moves the pointers to
/// the items, never the items themselves. Existing items are not reconstructed either, so any
/// state written to them before the growth remains intact and any pointer obtained from a
/// pinned reference to an item remains valid until the item is dropped by a shrinking
/// [`resize()`][1] or by dropping the pool.
///
/// A shrink followed by a regrow does not bring back the dropped items - the regrown slots get
/// freshly constructed items.
///
/// # Access
///
/// The items are accessed by position through [`view()`][2] and [`view_mut()`][3]. Neither
/// gives the caller any way to insert, remove, reorder or replace slots, so the pool's
/// ownership bookkeeping cannot be disturbed from outside.
///
/// # Thread safety
///
/// The pool itself performs no synchronization. Wrap it in a `Mutex` if it needs to be shared
/// between threads.
///
/// # Example
///
/// ```rust
/// use bound_pool::{BoundPool, Buffer};
///
/// let config = "sv-SE".to_string();
/// let mut pool = BoundPool::<String, Buffer<'_, String>>::new(&config);
///
/// pool.resize(5).unwrap();
/// for (index, buffer) in pool.view_mut().iter_mut().enumerate() {
///     write!(buffer, "marker {index}").unwrap();
/// }
///
/// pool.resize(2).unwrap();
/// pool.resize(5).unwrap();
///
/// let view = pool.view();
/// assert_eq!(view.get(1).as_str(), "marker 1");
/// assert!(view.get(4).is_empty());
/// ```
///
/// [1]: Self::resize
/// [2]: Self::view
/// [3]: Self::view_mut
pub struct BoundPool<'c, C: ?Sized, T> {
    config: &'c C,

    /// Each item is boxed so that reallocating this Vec never moves an item. Items are pinned so
    /// that callers cannot move them out of their slot either.
    slots: Vec<Pin<Box<T>>>,

    growth_policy: GrowthPolicy,
}

impl<'c, C: ?Sized, T> BoundPool<'c, C, T> {
    /// # Panics
    ///
    /// Panics if `T` is zero-sized.
    #[must_use]
    pub(crate) fn new_inner(config: &'c C, growth_policy: GrowthPolicy) -> Self {
        // Zero-sized items all share one dangling address, so they would have no identity.
        assert!(
            size_of::<T>() > 0,
            "BoundPool must have non-zero item size"
        );

        Self {
            config,
            slots: Vec::new(),
            growth_policy,
        }
    }

    /// Creates a new empty [`BoundPool`] whose items will be bound to `config`.
    ///
    /// # Example
    ///
    /// ```rust
    /// use bound_pool::{BoundPool, Buffer};
    ///
    /// let config = 8_u16;
    /// let pool = BoundPool::<u16, Buffer<'_, u16>>::new(&config);
    ///
    /// assert_eq!(pool.len(), 0);
    /// assert!(pool.is_empty());
    /// ```
    ///
    /// # Panics
    ///
    /// Panics if `T` is zero-sized.
    #[must_use]
    pub fn new(config: &'c C) -> Self {
        Self::builder(config).build()
    }

    /// Starts building a new [`BoundPool`] whose items will be bound to `config`.
    ///
    /// Use this when you want to customize the pool configuration beyond the defaults.
    ///
    /// # Example
    ///
    /// ```rust
    /// use bound_pool::{BoundPool, Buffer, GrowthPolicy};
    ///
    /// let config = 8_u16;
    /// let pool = BoundPool::<u16, Buffer<'_, u16>>::builder(&config)
    ///     .growth_policy(GrowthPolicy::RollBack)
    ///     .build();
    ///
    /// assert!(pool.is_empty());
    /// ```
    ///
    /// The item size is only checked when the pool is built, see [`BoundPoolBuilder::build()`].
    pub fn builder(config: &'c C) -> BoundPoolBuilder<'c, C, T> {
        BoundPoolBuilder::new(config)
    }

    /// The configuration that every item of the pool is constructed from.
    #[must_use]
    pub fn config(&self) -> &'c C {
        self.config
    }

    /// What happens to the items constructed by a [`resize()`][Self::resize] that fails.
    #[must_use]
    pub fn growth_policy(&self) -> GrowthPolicy {
        self.growth_policy
    }

    /// The number of items in the pool.
    #[must_use]
    pub fn len(&self) -> usize {
        self.slots.len()
    }

    /// Whether the pool contains no items.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    /// Shared access to the items of the pool, in slot order.
    ///
    /// # Example
    ///
    /// ```rust
    /// use bound_pool::{BoundPool, Buffer};
    ///
    /// let config = ();
    /// let mut pool = BoundPool::<(), Buffer<'_, ()>>::new(&config);
    /// pool.resize(2).unwrap();
    ///
    /// let view = pool.view();
    /// assert_eq!(view.len(), 2);
    /// assert!(view.get(0).is_empty());
    /// ```
    #[must_use]
    pub fn view(&self) -> View<'_, T> {
        View::new(&self.slots)
    }

    /// Exclusive access to the items of the pool, in slot order.
    ///
    /// The items can be modified through their own methods but the slots cannot be rearranged.
    ///
    /// # Example
    ///
    /// ```rust
    /// use bound_pool::{BoundPool, Buffer};
    ///
    /// let config = ();
    /// let mut pool = BoundPool::<(), Buffer<'_, ()>>::new(&config);
    /// pool.resize(2).unwrap();
    ///
    /// pool.view_mut().get_mut(1).push_str("second");
    /// assert_eq!(pool.view().get(1).as_str(), "second");
    /// ```
    #[must_use]
    pub fn view_mut(&mut self) -> ViewMut<'_, T> {
        ViewMut::new(&mut self.slots)
    }

    fn shrink(&mut self, new_len: usize) {
        let previous_len = self.slots.len();

        self.slots.truncate(new_len);

        debug!(from = previous_len, to = new_len, "shrank pool");
    }
}

impl<'c, C: ?Sized, T> BoundPool<'c, C, T>
where
    T: FromConfig<'c, C>,
{
    /// Sets the number of items in the pool to `new_len`.
    ///
    /// * If `new_len` is greater than the current length, new items are constructed from the
    ///   pool's configuration for the slots `len()..new_len`, in ascending order. Existing items
    ///   are not touched.
    /// * If `new_len` is less than the current length, the items in the slots
    ///   `new_len..len()` are dropped. The remaining items are not touched.
    /// * If `new_len` equals the current length, nothing happens.
    ///
    /// # Errors
    ///
    /// Returns [`Error::AllocationFailure`] if storage for the new slots cannot be reserved
    /// (nothing is changed in that case) or if an item cannot be constructed. In the latter
    /// case, the [`GrowthPolicy`] of the pool decides whether the items constructed before the
    /// failure are kept or dropped again. Shrinking never fails.
    ///
    /// # Example
    ///
    /// ```rust
    /// use bound_pool::{BoundPool, Buffer};
    ///
    /// let config = ();
    /// let mut pool = BoundPool::<(), Buffer<'_, ()>>::new(&config);
    ///
    /// pool.resize(1).unwrap();
    /// pool.view_mut().get_mut(0).push_str("A");
    ///
    /// pool.resize(16).unwrap();
    /// assert_eq!(pool.len(), 16);
    /// assert_eq!(pool.view().get(0).as_str(), "A");
    ///
    /// pool.resize(0).unwrap();
    /// assert!(pool.is_empty());
    /// ```
    pub fn resize(&mut self, new_len: usize) -> Result<()> {
        match new_len.cmp(&self.slots.len()) {
            Ordering::Equal => Ok(()),
            Ordering::Less => {
                self.shrink(new_len);
                Ok(())
            }
            Ordering::Greater => self.grow(new_len),
        }
    }

    fn grow(&mut self, new_len: usize) -> Result<()> {
        let previous_len = self.slots.len();

        let additional = new_len
            .checked_sub(previous_len)
            .expect("we only grow to a length greater than the current one");

        if let Err(error) = self.slots.try_reserve(additional) {
            warn!(
                index = previous_len,
                additional,
                %error,
                "failed to reserve storage for pool slots"
            );

            return Err(Error::AllocationFailure {
                index: previous_len,
                source: Box::new(error),
            });
        }

        for index in previous_len..new_len {
            match T::from_config(self.config) {
                Ok(item) => self.slots.push(Box::pin(item)),
                Err(error) => {
                    warn!(
                        index,
                        %error,
                        policy = ?self.growth_policy,
                        "failed to construct pool item"
                    );

                    if self.growth_policy == GrowthPolicy::RollBack {
                        self.slots.truncate(previous_len);
                    }

                    return Err(Error::AllocationFailure {
                        index,
                        source: Box::new(error),
                    });
                }
            }
        }

        debug!(from = previous_len, to = new_len, "grew pool");

        Ok(())
    }
}

impl<C: ?Sized, T> fmt::Debug for BoundPool<'_, C, T> {
    #[cfg_attr(test, mutants::skip)] // No API contract to test.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("BoundPool")
            .field(
                "config_type",
                &std::format_args!("{}", std::any::type_name::<C>()),
            )
            .field(
                "item_type",
                &std::format_args!("{}", std::any::type_name::<T>()),
            )
            .field("len", &self.slots.len())
            .field("growth_policy", &self.growth_policy)
            .finish_non_exhaustive()
    }
}
