//! Generator configuration, in the manner of [`::std::thread::Builder`].

use_prelude!();

use crate::{
    arg_gen::ArgGen,
    gen_iter::Gen,
    spawn::ThreadSpawner,
};

/// Configures how generator bodies get scheduled.
///
/// A `Builder` can be reused to create any number of generators; each one
/// gets its own execution context and its own handshake.
///
/// # Example
///
/// ```rust
/// use ::thread_gen::Builder;
///
/// let builder = Builder::new()
///     .name("fibonacci")
///     .stack_size(64 * 1024);
///
/// let fibonacci = builder.generator(|co| {
///     assert_eq!(::std::thread::current().name(), Some("fibonacci"));
///     let (mut a, mut b) = (0_u64, 1);
///     loop {
///         co.yield_(a);
///         (a, b) = (b, a + b);
///     }
/// })?;
/// assert_eq!(
///     fibonacci.take(8).collect::<Vec<_>>(),
///     [0, 1, 1, 2, 3, 5, 8, 13],
/// );
/// # Ok::<(), ::thread_gen::SpawnError>(())
/// ```
#[derive(Debug, Clone)]
pub
struct Builder<S = ThreadSpawner> {
    name: Option<String>,
    spawner: S,
}

impl Builder {
    /// A builder spawning one dedicated thread per generator.
    pub
    fn new ()
      -> Self
    {
        Self {
            name: None,
            spawner: ThreadSpawner::new(),
        }
    }

    /// Sets the stack size of the threads running the generator bodies.
    pub
    fn stack_size (self: Self, stack_size: usize)
      -> Self
    {
        Self {
            spawner: self.spawner.stack_size(stack_size),
            ..self
        }
    }
}

impl Default for Builder {
    #[inline]
    fn default ()
      -> Self
    {
        Self::new()
    }
}

impl<S> Builder<S> {
    /// Names the generators: the name shows up on their body thread (when
    /// spawned by a [`ThreadSpawner`]) and on their `tracing` span.
    pub
    fn name (self: Self, name: impl Into<String>)
      -> Self
    {
        Self {
            name: Some(name.into()),
            ..self
        }
    }

    /// Replaces the execution substrate.
    pub
    fn spawner<S2 : Spawn> (self: Self, spawner: S2)
      -> Builder<S2>
    {
        Builder {
            name: self.name,
            spawner,
        }
    }
}

impl<S : Spawn> Builder<S> {
    /// Creates a [`Coroutine`], with the configured name and substrate.
    ///
    /// # Errors
    ///
    /// If the substrate cannot schedule the body.
    pub
    fn coroutine<Yield, Return, ResumeArg, F> (self: &'_ Self, body: F)
      -> Result<Coroutine<Yield, Return, ResumeArg>, SpawnError>
    where
        Yield : Send + 'static,
        Return : Send + 'static,
        ResumeArg : Send + 'static,
        F : FnOnce(Yielder<'_, Yield, ResumeArg>) -> Return,
        F : Send + 'static,
    {
        Coroutine::spawn_with(self.name.clone(), &self.spawner, body)
    }

    /// Creates a [`Gen`], with the configured name and substrate.
    ///
    /// # Errors
    ///
    /// If the substrate cannot schedule the body.
    pub
    fn generator<Item, F> (self: &'_ Self, body: F)
      -> Result<Gen<Item>, SpawnError>
    where
        Item : Send + 'static,
        F : FnOnce(Yielder<'_, Item>),
        F : Send + 'static,
    {
        self.coroutine::<Item, (), (), F>(body).map(Gen::from)
    }

    /// Creates an [`ArgGen`], with the configured name and substrate.
    ///
    /// # Errors
    ///
    /// If the substrate cannot schedule the body.
    pub
    fn arg_generator<Arg, Item, F> (self: &'_ Self, body: F)
      -> Result<ArgGen<Arg, Item>, SpawnError>
    where
        Arg : Send + 'static,
        Item : Send + 'static,
        F : FnOnce(Yielder<'_, Item, Arg>),
        F : Send + 'static,
    {
        self.coroutine::<Item, (), Arg, F>(body).map(ArgGen::from)
    }
}
