use std::fmt;
use std::iter::FusedIterator;
use std::pin::Pin;
use std::slice;

/// Shared, position-ordered access to the items of a [`BoundPool`][crate::BoundPool].
///
/// Created by [`BoundPool::view()`][crate::BoundPool::view]. Index `i` of the view is the
/// item in slot `i` of the pool.
///
/// The view can read items but cannot change the structure of the pool in any way. As long as
/// the view exists, the pool is borrowed and cannot be resized.
///
/// # Example
///
/// ```rust
/// use bound_pool::{BoundPool, Buffer};
///
/// let config = ();
/// let mut pool = BoundPool::<(), Buffer<'_, ()>>::new(&config);
/// pool.resize(3).unwrap();
///
/// let view = pool.view();
/// assert_eq!(view.len(), 3);
/// assert!(view.iter().all(|buffer| buffer.is_empty()));
/// assert!(view.try_get(3).is_none());
/// ```
pub struct View<'p, T> {
    slots: &'p [Pin<Box<T>>],
}

impl<'p, T> View<'p, T> {
    pub(crate) fn new(slots: &'p [Pin<Box<T>>]) -> Self {
        Self { slots }
    }

    /// The number of items visible through the view.
    #[must_use]
    pub fn len(&self) -> usize {
        self.slots.len()
    }

    /// Whether the view contains no items.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    /// Gets a pinned reference to the item at `index`.
    ///
    /// # Panics
    ///
    /// Panics if `index` is not less than the length of the pool.
    #[must_use]
    pub fn get(&self, index: usize) -> Pin<&'p T> {
        self.try_get(index)
            .expect("index was not within the current length of the pool")
    }

    /// Gets a pinned reference to the item at `index`, or `None` if the index is out of bounds.
    #[must_use]
    pub fn try_get(&self, index: usize) -> Option<Pin<&'p T>> {
        self.slots.get(index).map(Pin::as_ref)
    }

    /// The item in the first slot, if any.
    #[must_use]
    pub fn first(&self) -> Option<Pin<&'p T>> {
        self.slots.first().map(Pin::as_ref)
    }

    /// The item in the last slot, if any.
    #[must_use]
    pub fn last(&self) -> Option<Pin<&'p T>> {
        self.slots.last().map(Pin::as_ref)
    }

    /// Iterates over the items in slot order.
    pub fn iter(&self) -> Iter<'p, T> {
        Iter {
            inner: self.slots.iter(),
        }
    }
}

impl<T> Clone for View<'_, T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for View<'_, T> {}

impl<T> fmt::Debug for View<'_, T> {
    #[cfg_attr(test, mutants::skip)] // No API contract to test.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("View")
            .field("item_type", &std::format_args!("{}", std::any::type_name::<T>()))
            .field("len", &self.len())
            .finish_non_exhaustive()
    }
}

impl<'p, T> IntoIterator for View<'p, T> {
    type Item = Pin<&'p T>;
    type IntoIter = Iter<'p, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<'p, T> IntoIterator for &View<'p, T> {
    type Item = Pin<&'p T>;
    type IntoIter = Iter<'p, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Exclusive, position-ordered access to the items of a [`BoundPool`][crate::BoundPool].
///
/// Created by [`BoundPool::view_mut()`][crate::BoundPool::view_mut]. Items are handed out as
/// `Pin<&mut T>`, which permits changing the internal state of an item through its own methods
/// but (for `T: !Unpin`) prevents moving, swapping or replacing the item. There is no method to
/// insert, remove or reorder slots - only [`BoundPool::resize()`][crate::BoundPool::resize]
/// can do that.
///
/// # `Unpin` items
///
/// Pinning only restricts moves for item types that are `!Unpin`. If `T: Unpin`, safe code can
/// call [`Pin::get_mut()`] on an item and then assign a new value to it or
/// [`mem::swap()`][std::mem::swap] it with another item. The slots themselves and the addresses
/// of the items stay the same, but the contents no longer have to match the slot they were
/// constructed for - an assigned value may even be bound to a different configuration than the
/// pool's. Use an `!Unpin` item type such as [`Buffer`][crate::Buffer] (or add a
/// [`PhantomPinned`][std::marker::PhantomPinned] field) if that must not be possible.
///
/// # Example
///
/// ```rust
/// use bound_pool::{BoundPool, Buffer};
///
/// let config = ();
/// let mut pool = BoundPool::<(), Buffer<'_, ()>>::new(&config);
/// pool.resize(3).unwrap();
///
/// let mut view = pool.view_mut();
/// for (index, buffer) in view.iter_mut().enumerate() {
///     write!(buffer, "item {index}").unwrap();
/// }
///
/// assert_eq!(view.get(2).as_str(), "item 2");
/// ```
pub struct ViewMut<'p, T> {
    slots: &'p mut [Pin<Box<T>>],
}

impl<'p, T> ViewMut<'p, T> {
    pub(crate) fn new(slots: &'p mut [Pin<Box<T>>]) -> Self {
        Self { slots }
    }

    /// The number of items visible through the view.
    #[must_use]
    pub fn len(&self) -> usize {
        self.slots.len()
    }

    /// Whether the view contains no items.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    /// Gets a pinned reference to the item at `index`.
    ///
    /// # Panics
    ///
    /// Panics if `index` is not less than the length of the pool.
    #[must_use]
    pub fn get(&self, index: usize) -> Pin<&T> {
        self.as_view().get(index)
    }

    /// Gets a pinned reference to the item at `index`, or `None` if the index is out of bounds.
    #[must_use]
    pub fn try_get(&self, index: usize) -> Option<Pin<&T>> {
        self.as_view().try_get(index)
    }

    /// Gets an exclusive pinned reference to the item at `index`.
    ///
    /// # Panics
    ///
    /// Panics if `index` is not less than the length of the pool.
    #[must_use]
    pub fn get_mut(&mut self, index: usize) -> Pin<&mut T> {
        self.try_get_mut(index)
            .expect("index was not within the current length of the pool")
    }

    /// Gets an exclusive pinned reference to the item at `index`, or `None` if the index is
    /// out of bounds.
    #[must_use]
    pub fn try_get_mut(&mut self, index: usize) -> Option<Pin<&mut T>> {
        self.slots.get_mut(index).map(Pin::as_mut)
    }

    /// The item in the first slot, if any.
    #[must_use]
    pub fn first_mut(&mut self) -> Option<Pin<&mut T>> {
        self.slots.first_mut().map(Pin::as_mut)
    }

    /// The item in the last slot, if any.
    #[must_use]
    pub fn last_mut(&mut self) -> Option<Pin<&mut T>> {
        self.slots.last_mut().map(Pin::as_mut)
    }

    /// Iterates over the items in slot order.
    pub fn iter(&self) -> Iter<'_, T> {
        self.as_view().iter()
    }

    /// Iterates over the items in slot order, with exclusive access to each.
    pub fn iter_mut(&mut self) -> IterMut<'_, T> {
        IterMut {
            inner: self.slots.iter_mut(),
        }
    }

    /// Reborrows this view as a shared [`View`].
    #[must_use]
    pub fn as_view(&self) -> View<'_, T> {
        View::new(&*self.slots)
    }
}

impl<T> fmt::Debug for ViewMut<'_, T> {
    #[cfg_attr(test, mutants::skip)] // No API contract to test.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ViewMut")
            .field("item_type", &std::format_args!("{}", std::any::type_name::<T>()))
            .field("len", &self.len())
            .finish_non_exhaustive()
    }
}

impl<'p, T> IntoIterator for ViewMut<'p, T> {
    type Item = Pin<&'p mut T>;
    type IntoIter = IterMut<'p, T>;

    fn into_iter(self) -> Self::IntoIter {
        IterMut {
            inner: self.slots.iter_mut(),
        }
    }
}

impl<'a, T> IntoIterator for &'a ViewMut<'_, T> {
    type Item = Pin<&'a T>;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<'a, T> IntoIterator for &'a mut ViewMut<'_, T> {
    type Item = Pin<&'a mut T>;
    type IntoIter = IterMut<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter_mut()
    }
}

/// Iterator over shared pinned references to the items of a pool, in slot order.
///
/// Returned by [`View::iter()`] and [`ViewMut::iter()`].
#[derive(Debug)]
pub struct Iter<'p, T> {
    inner: slice::Iter<'p, Pin<Box<T>>>,
}

impl<'p, T> Iterator for Iter<'p, T> {
    type Item = Pin<&'p T>;

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next().map(Pin::as_ref)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl<T> DoubleEndedIterator for Iter<'_, T> {
    fn next_back(&mut self) -> Option<Self::Item> {
        self.inner.next_back().map(Pin::as_ref)
    }
}

impl<T> ExactSizeIterator for Iter<'_, T> {}

impl<T> FusedIterator for Iter<'_, T> {}

/// Iterator over exclusive pinned references to the items of a pool, in slot order.
///
/// Returned by [`ViewMut::iter_mut()`].
#[derive(Debug)]
pub struct IterMut<'p, T> {
    inner: slice::IterMut<'p, Pin<Box<T>>>,
}

impl<'p, T> Iterator for IterMut<'p, T> {
    type Item = Pin<&'p mut T>;

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next().map(Pin::as_mut)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl<T> DoubleEndedIterator for IterMut<'_, T> {
    fn next_back(&mut self) -> Option<Self::Item> {
        self.inner.next_back().map(Pin::as_mut)
    }
}

impl<T> ExactSizeIterator for IterMut<'_, T> {}

impl<T> FusedIterator for IterMut<'_, T> {}
