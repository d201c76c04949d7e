#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

//! This package provides [`BoundPool`], a resizable pool of objects that cannot be
//! default-constructed because each of them needs a reference to a shared configuration value
//! at construction time.
//!
//! This is part of the [Folo project](https://github.com/folo-rs/folo) that provides mechanisms for
//! high-performance hardware-aware programming in Rust.
//!
//! # Stable addresses
//!
//! Every item lives in its own pinned heap allocation and the pool only stores the pointers.
//! Growing the pool may reallocate the pointer storage but never moves, reconstructs or resets
//! an item that already exists, so state written to an item before a [`resize()`][1] is still
//! there after it.
//!
//! # Restricted access
//!
//! Only the pool itself can change its structure. Callers receive a [`View`] or a [`ViewMut`],
//! which give access to the items by position (pinned, so items cannot be moved or swapped out)
//! but offer no way to insert, remove, reorder or replace slots.
//!
//! # Example
//!
//! ```rust
//! use bound_pool::{BoundPool, Buffer};
//!
//! let locale = "en-US".to_string();
//! let mut pool = BoundPool::<String, Buffer<'_, String>>::new(&locale);
//!
//! pool.resize(1).unwrap();
//! pool.view_mut().get_mut(0).push_str("Some front text");
//!
//! // Growing does not disturb the item we already wrote to.
//! pool.resize(16).unwrap();
//! pool.view_mut().get_mut(15).push_str("Some back text");
//!
//! let view = pool.view();
//! let joined = format!("{}{}", view.get(0), view.get(15));
//! assert_eq!(joined, "Some front textSome back text");
//! ```
//!
//! [1]: BoundPool::resize

mod buffer;
mod builder;
mod config;
mod error;
mod growth_policy;
mod pool;
mod view;

pub use buffer::*;
pub use builder::*;
pub use config::*;
pub use error::*;
pub use growth_policy::*;
pub use pool::*;
pub use view::*;
