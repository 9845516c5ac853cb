//! Generators and argument-passing coroutines on stable Rust, without any
//! stack switching: the body of a generator runs on an execution context of
//! its own (by default, a dedicated thread), and hands values back and forth
//! with its caller through a strict rendezvous.
//!
//! ```rust
//! use ::thread_gen::Gen;
//!
//! let squares = Gen::new(|co| {
//!     for i in 1 ..= 4_u32 {
//!         co.yield_(i * i);
//!     }
//! });
//! assert_eq!(squares.collect::<Vec<_>>(), [1, 4, 9, 16]);
//! ```
//!
//!   - [`Gen`]: a value-only generator, which is an [`Iterator`];
//!
//!   - [`ArgGen`]: each step takes an argument, which the body receives as
//!     the result of its pending `yield_`;
//!
//!   - [`Coroutine`]: the general shape, which additionally returns a value.
//!
//! Bodies are scheduled through a [`Spawn`] implementation, configured on a
//! [`Builder`]. With the `macros` feature (enabled by default), the
//! [`generator`][`macro@generator`] attribute turns a function into a
//! [`Coroutine`] constructor.

#![warn(
    future_incompatible,
    rust_2018_compatibility,
    missing_docs,
    clippy::cargo,
    clippy::pedantic,
)]
#![deny(
    unused_must_use,
)]

pub
mod prelude;

#[macro_use]
mod utils;

mod iter;
pub use self::iter::Iter;

pub use self::generator::*;
mod generator;

mod rendezvous;
pub use self::rendezvous::Yielder;

pub use self::coroutine::Coroutine;
mod coroutine;

pub use self::gen_iter::Gen;
mod gen_iter;

pub use self::arg_gen::ArgGen;
mod arg_gen;

pub use self::builder::Builder;
mod builder;

pub
mod spawn;
pub use self::spawn::{Spawn, Task, ThreadSpawner};

pub use self::error::SpawnError;
mod error;

#[cfg(feature = "macros")]
pub use ::thread_gen_proc_macros::generator;

#[cfg(test)]
mod tests;
