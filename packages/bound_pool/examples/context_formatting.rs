//! A context object that owns a pool of text buffers, all bound to the same locale.
//!
//! * Creating a pool from a configuration reference.
//! * Growing the pool and writing into specific items.
//! * Growing again without disturbing the text already written.
//! * Reading the accumulated text back.
//!
//! The debug events logged by the pool are printed alongside the output.

use bound_pool::{BoundPool, Buffer};
use tracing::Level;

/// The configuration every buffer is bound to. The pool only borrows it.
#[derive(Debug)]
struct Locale {
    name: String,
    thousands_separator: char,
}

impl Locale {
    fn format_count(&self, count: u64) -> String {
        let digits = count.to_string();
        let mut formatted = String::with_capacity(digits.len().saturating_mul(2));

        for (position, digit) in digits.chars().enumerate() {
            let remaining = digits
                .len()
                .checked_sub(position)
                .expect("position is always within the digits");

            if position > 0 && remaining.checked_rem(3) == Some(0) {
                formatted.push(self.thousands_separator);
            }

            formatted.push(digit);
        }

        formatted
    }
}

struct Context<'l> {
    pool: BoundPool<'l, Locale, Buffer<'l, Locale>>,
}

impl<'l> Context<'l> {
    fn new(locale: &'l Locale) -> Self {
        Self {
            pool: BoundPool::new(locale),
        }
    }

    fn run(&mut self) -> Result<String, bound_pool::Error> {
        self.pool.resize(1)?;
        writeln!(self.pool.view_mut().get_mut(0), "Some front text")
            .expect("writing to a buffer cannot fail");

        // Growing reallocates the slot storage but the first buffer stays where it is.
        self.pool.resize(0x10)?;

        let mut view = self.pool.view_mut();
        let mut back = view.last_mut().expect("we just grew the pool to 16 items");
        let count = back.config().format_count(1_234_567);
        writeln!(back.as_mut(), "Some back text ({count} items)")
            .expect("writing to a buffer cannot fail");

        let view = self.pool.view();
        Ok(format!(
            "{}{}",
            view.first().expect("pool is not empty"),
            view.last().expect("pool is not empty")
        ))
    }
}

fn main() -> Result<(), bound_pool::Error> {
    tracing_subscriber::fmt().with_max_level(Level::DEBUG).init();

    let locale = Locale {
        name: "en-US".to_string(),
        thousands_separator: ',',
    };

    let mut context = Context::new(&locale);
    let text = context.run()?;

    println!("Formatted with locale {}:", locale.name);
    print!("{text}");

    Ok(())
}
