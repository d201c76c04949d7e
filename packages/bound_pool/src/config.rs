use std::error::Error as StdError;

/// Construction of an item from a borrowed configuration value.
///
/// This is the only way a [`BoundPool`][crate::BoundPool] creates its items. There is no
/// requirement for the item type to implement [`Default`] - instead, every item is handed a
/// reference to the configuration the pool was created with, and may keep that reference for
/// as long as it lives.
///
/// The configuration is borrowed for `'c`, so the borrow checker guarantees that it outlives
/// both the pool and every item constructed from it.
///
/// # Example
///
/// ```rust
/// use std::convert::Infallible;
///
/// use bound_pool::{BoundPool, FromConfig};
///
/// struct Greeting {
///     greeting: &'static str,
/// }
///
/// struct Greeter<'c> {
///     config: &'c Greeting,
///     greeted: usize,
/// }
///
/// impl<'c> FromConfig<'c, Greeting> for Greeter<'c> {
///     type Error = Infallible;
///
///     fn from_config(config: &'c Greeting) -> Result<Self, Self::Error> {
///         Ok(Self { config, greeted: 0 })
///     }
/// }
///
/// let config = Greeting { greeting: "hello" };
/// let mut pool = BoundPool::<Greeting, Greeter<'_>>::new(&config);
/// pool.resize(3).unwrap();
///
/// assert!(pool.view().iter().all(|g| g.config.greeting == "hello" && g.greeted == 0));
/// ```
pub trait FromConfig<'c, C: ?Sized>: Sized {
    /// The error returned when an item cannot be constructed, e.g. because a resource it
    /// needs has been exhausted.
    type Error: StdError + Send + Sync + 'static;

    /// Constructs a new item bound to `config`.
    ///
    /// # Errors
    ///
    /// Returns an error if the item cannot be constructed. The pool surfaces this to the
    /// caller of [`resize()`][crate::BoundPool::resize] as an
    /// [`Error::AllocationFailure`][crate::Error::AllocationFailure].
    fn from_config(config: &'c C) -> Result<Self, Self::Error>;
}
