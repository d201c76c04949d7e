//! Integration tests that drive a `BoundPool` the way an owning context object would:
//! resizing it by position and writing into specific items through the views.

#![allow(clippy::indexing_slicing, reason = "panic is fine in tests")]

use std::cell::Cell;
use std::fmt::Write as _;
use std::ptr;

use bound_pool::{BoundPool, Buffer, Error, FromConfig, GrowthPolicy};

/// A locale-like configuration value that all buffers of a pool are bound to.
#[derive(Debug)]
struct Locale {
    name: &'static str,
    decimal_separator: char,
}

impl Locale {
    fn format_ratio(&self, whole: u32, tenths: u32) -> String {
        let mut formatted = String::new();
        write!(formatted, "{whole}{}{tenths}", self.decimal_separator).unwrap();
        formatted
    }
}

/// Owns a pool and uses it the way the pooling context in a real application would.
struct Context<'l> {
    pool: BoundPool<'l, Locale, Buffer<'l, Locale>>,
}

impl<'l> Context<'l> {
    fn new(locale: &'l Locale) -> Self {
        Self {
            pool: BoundPool::new(locale),
        }
    }

    fn run(&mut self) -> String {
        self.pool.resize(1).unwrap();
        writeln!(self.pool.view_mut().get_mut(0), "Some front text").unwrap();

        self.pool.resize(0x10).unwrap();

        let mut view = self.pool.view_mut();
        let mut back = view.last_mut().unwrap();
        let ratio = back.config().format_ratio(1, 5);
        writeln!(back.as_mut(), "Some back text {ratio}").unwrap();

        let view = self.pool.view();
        format!("{}{}", view.first().unwrap(), view.last().unwrap())
    }
}

#[test]
fn context_joins_front_and_back_text() {
    let locale = Locale {
        name: "de-DE",
        decimal_separator: ',',
    };
    let mut context = Context::new(&locale);

    let result = context.run();

    assert_eq!(result, "Some front text\nSome back text 1,5\n");
    assert_eq!(context.pool.len(), 16);
    assert_eq!(context.pool.config().name, "de-DE");
}

#[test]
fn grow_from_one_to_sixteen_keeps_first_item() {
    let locale = Locale {
        name: "en-US",
        decimal_separator: '.',
    };
    let mut pool = BoundPool::<Locale, Buffer<'_, Locale>>::new(&locale);

    pool.resize(1).unwrap();
    pool.view_mut().get_mut(0).push_str("A");
    let first = ptr::from_ref(pool.view().get(0).get_ref());

    pool.resize(16).unwrap();

    assert!(ptr::eq(pool.view().get(0).get_ref(), first));
    assert_eq!(pool.view().get(0).as_str(), "A");

    pool.view_mut().get_mut(15).push_str("B");

    let view = pool.view();
    assert_eq!(format!("{}{}", view.get(0), view.get(15)), "AB");
    assert!(view.iter().skip(1).take(14).all(|buffer| buffer.is_empty()));
    assert!(view.iter().all(|buffer| ptr::eq(buffer.config(), &locale)));
}

#[test]
fn shrink_then_regrow_does_not_resurrect_markers() {
    let locale = Locale {
        name: "fr-FR",
        decimal_separator: ',',
    };
    let mut pool = BoundPool::<Locale, Buffer<'_, Locale>>::new(&locale);

    pool.resize(5).unwrap();
    for (index, buffer) in pool.view_mut().iter_mut().enumerate() {
        write!(buffer, "marker-{index}").unwrap();
    }

    pool.resize(2).unwrap();

    let view = pool.view();
    assert_eq!(view.len(), 2);
    assert_eq!(view.get(0).as_str(), "marker-0");
    assert_eq!(view.get(1).as_str(), "marker-1");

    pool.resize(5).unwrap();

    let view = pool.view();
    assert_eq!(view.get(0).as_str(), "marker-0");
    assert_eq!(view.get(1).as_str(), "marker-1");
    assert!(view.iter().skip(2).all(|buffer| buffer.is_empty()));
}

#[test]
fn resize_twice_to_same_len_changes_nothing() {
    let locale = Locale {
        name: "it-IT",
        decimal_separator: ',',
    };
    let mut pool = BoundPool::<Locale, Buffer<'_, Locale>>::new(&locale);

    pool.resize(3).unwrap();
    pool.view_mut().get_mut(2).push_str("kept");
    let addresses: Vec<_> = pool
        .view()
        .iter()
        .map(|buffer| ptr::from_ref(buffer.get_ref()))
        .collect();

    pool.resize(3).unwrap();

    let view = pool.view();
    assert_eq!(view.get(2).as_str(), "kept");
    for (buffer, address) in view.iter().zip(addresses) {
        assert!(ptr::eq(buffer.get_ref(), address));
    }
}

#[test]
#[should_panic]
fn access_beyond_len_panics() {
    let locale = Locale {
        name: "es-ES",
        decimal_separator: ',',
    };
    let mut pool = BoundPool::<Locale, Buffer<'_, Locale>>::new(&locale);
    pool.resize(4).unwrap();
    pool.resize(2).unwrap();

    _ = pool.view().get(2);
}

/// A configuration that hands out a limited number of connection permits.
#[derive(Debug)]
struct Permits {
    remaining: Cell<usize>,
}

#[derive(Debug, thiserror::Error)]
#[error("no connection permits remaining")]
struct NoPermits;

#[derive(Debug)]
struct Connection<'p> {
    permits: &'p Permits,
}

impl<'p> FromConfig<'p, Permits> for Connection<'p> {
    type Error = NoPermits;

    fn from_config(config: &'p Permits) -> Result<Self, Self::Error> {
        let remaining = config.remaining.get().checked_sub(1).ok_or(NoPermits)?;
        config.remaining.set(remaining);

        Ok(Self { permits: config })
    }
}

impl Drop for Connection<'_> {
    fn drop(&mut self) {
        self.permits.remaining.set(self.permits.remaining.get() + 1);
    }
}

#[test]
fn exhausted_resource_keeps_partial_growth() {
    let permits = Permits {
        remaining: Cell::new(3),
    };
    let mut pool = BoundPool::<Permits, Connection<'_>>::new(&permits);

    let error = pool.resize(5).unwrap_err();

    let (index, source) = match error {
        Error::AllocationFailure { index, source } => (index, source),
        other => panic!("unexpected error: {other}"),
    };
    assert_eq!(index, 3);
    assert!(source.is::<NoPermits>());
    assert_eq!(pool.len(), 3);
    assert_eq!(permits.remaining.get(), 0);

    // The caller may retry with a smaller growth after releasing some items.
    pool.resize(1).unwrap();
    assert_eq!(permits.remaining.get(), 2);
    pool.resize(3).unwrap();
    assert_eq!(pool.len(), 3);
}

#[test]
fn exhausted_resource_rolls_back_when_configured() {
    let permits = Permits {
        remaining: Cell::new(3),
    };
    let mut pool = BoundPool::<Permits, Connection<'_>>::builder(&permits)
        .growth_policy(GrowthPolicy::RollBack)
        .build();

    pool.resize(1).unwrap();

    let error = pool.resize(5).unwrap_err();
    assert!(matches!(error, Error::AllocationFailure { index: 3, .. }));
    assert_eq!(error.to_string(), "failed to allocate the item for slot 3");

    assert_eq!(pool.len(), 1);
    assert_eq!(permits.remaining.get(), 2);
}

#[test]
fn dropping_pool_releases_everything() {
    let permits = Permits {
        remaining: Cell::new(10),
    };

    {
        let mut pool = BoundPool::<Permits, Connection<'_>>::new(&permits);
        pool.resize(10).unwrap();
        assert_eq!(permits.remaining.get(), 0);
    }

    assert_eq!(permits.remaining.get(), 10);
}
