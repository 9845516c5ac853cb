pub(in crate)
use {
    ::std::{
        any::Any,
        fmt,
        ops::Not as _,
        panic,
        sync::Arc,
        thread,
    },
    ::crossbeam::channel::{
        Receiver,
        Sender,
    },
    ::tracing::{
        debug,
        trace,
    },
    crate::{
        coroutine::Coroutine,
        error::SpawnError,
        generator::{
            Generator,
            GeneratorState,
        },
        rendezvous::Yielder,
        spawn::{
            Spawn,
            Task,
        },
        utils::macros,
    },
};
