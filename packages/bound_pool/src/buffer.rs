use std::convert::Infallible;
use std::fmt;
use std::marker::PhantomPinned;
use std::pin::Pin;

use crate::FromConfig;

/// A text buffer that is bound to a configuration value for its entire life.
///
/// This is the reference item type for a [`BoundPool`][crate::BoundPool]: it cannot be
/// created without a configuration reference, it accumulates text across many writes and it
/// can be neither cloned nor moved once pinned. The last property means that safe code holding
/// a [`ViewMut`][crate::ViewMut] cannot swap two buffers or replace one with a fresh instance -
/// it can only change the contents.
///
/// Text is appended through methods that take `self: Pin<&mut Self>`, including
/// [`write_fmt()`][Self::write_fmt], which makes the buffer a target for [`write!`].
///
/// # Example
///
/// ```rust
/// use bound_pool::{BoundPool, Buffer};
///
/// let config = 42_u32;
/// let mut pool = BoundPool::<u32, Buffer<'_, u32>>::new(&config);
/// pool.resize(1).unwrap();
///
/// let mut view = pool.view_mut();
/// let mut buffer = view.get_mut(0);
/// let answer = *buffer.config();
/// write!(buffer.as_mut(), "answer = {answer}").unwrap();
/// buffer.as_mut().push('!');
///
/// assert_eq!(buffer.as_str(), "answer = 42!");
/// ```
pub struct Buffer<'c, C: ?Sized> {
    config: &'c C,
    text: String,

    // Pooled buffers are identified by their address, so we do not allow them to move.
    _pinned: PhantomPinned,
}

impl<'c, C: ?Sized> Buffer<'c, C> {
    /// Creates an empty buffer bound to `config`.
    ///
    /// The returned buffer is not yet pinned. Pools pin every buffer they construct.
    #[must_use]
    pub fn new(config: &'c C) -> Self {
        Self {
            config,
            text: String::new(),
            _pinned: PhantomPinned,
        }
    }

    /// The configuration this buffer was constructed with.
    #[must_use]
    pub fn config(&self) -> &'c C {
        self.config
    }

    /// The text accumulated so far.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.text
    }

    /// Length of the accumulated text, in bytes.
    #[must_use]
    pub fn len(&self) -> usize {
        self.text.len()
    }

    /// Whether no text has been written to the buffer (or it has been cleared).
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    /// Appends a string slice to the end of the buffer.
    pub fn push_str(self: Pin<&mut Self>, s: &str) {
        self.text_mut().push_str(s);
    }

    /// Appends a single character to the end of the buffer.
    pub fn push(self: Pin<&mut Self>, c: char) {
        self.text_mut().push(c);
    }

    /// Appends formatted text to the end of the buffer.
    ///
    /// This is what [`write!`] and [`writeln!`] call, so you do not usually call it directly.
    ///
    /// # Errors
    ///
    /// Returns an error only if a [`Display`][fmt::Display] or [`Debug`][fmt::Debug]
    /// implementation involved in formatting `args` returns an error.
    pub fn write_fmt(self: Pin<&mut Self>, args: fmt::Arguments<'_>) -> fmt::Result {
        fmt::Write::write_fmt(self.text_mut(), args)
    }

    /// Removes all accumulated text. The configuration binding is unaffected.
    pub fn clear(self: Pin<&mut Self>) {
        self.text_mut().clear();
    }

    fn text_mut(self: Pin<&mut Self>) -> &mut String {
        // SAFETY: The text is not structurally pinned - moving the String value does not move
        // the buffer itself and we never move the buffer out of the returned reference.
        unsafe { &mut self.get_unchecked_mut().text }
    }
}

impl<'c, C: ?Sized> FromConfig<'c, C> for Buffer<'c, C> {
    type Error = Infallible;

    fn from_config(config: &'c C) -> Result<Self, Self::Error> {
        Ok(Self::new(config))
    }
}

impl<C: ?Sized> fmt::Display for Buffer<'_, C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.text)
    }
}

impl<C: ?Sized> fmt::Debug for Buffer<'_, C> {
    #[cfg_attr(test, mutants::skip)] // No API contract to test.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Buffer")
            .field(
                "config_type",
                &std::format_args!("{}", std::any::type_name::<C>()),
            )
            .field("text", &self.text)
            .finish_non_exhaustive()
    }
}
