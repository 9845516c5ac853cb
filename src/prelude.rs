//! The crate prelude: reexport the most essential utilities so that blob
//! `use`-ing them should enable the most straight-forward usage.

pub use {
    crate::{
        arg_gen::ArgGen,
        coroutine::Coroutine,
        gen_iter::Gen,
        generator::{
            Generator,
            GeneratorExt as _,
            GeneratorState,
        },
        rendezvous::Yielder,
    },
};

#[cfg(feature = "macros")]
pub use {
    ::thread_gen_proc_macros::{
        generator,
    },
};
