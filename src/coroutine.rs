//! The general generator: yields, receives resume arguments, returns.

use_prelude!();

use crate::rendezvous::{self, CallerEnd};

/// A generator whose body runs on its own execution context, stepped by
/// [`.resume()`][`Coroutine::resume`].
///
/// The body is a closure receiving a [`Yielder`]. It is scheduled when the
/// `Coroutine` is created, but does not start running until the first
/// resume. From then on the caller and the body take strict turns:
///
///   - each `resume(arg)` wakes the body up and blocks until the body either
///     [yields][`Yielder::yield_`] a value or returns;
///
///   - each `yield_(value)` hands `value` to the blocked `resume` and blocks
///     the body until the next one, whose `arg` it returns.
///
/// The argument of the very first `resume` has no pending `yield_` to be
/// returned from, and is dropped. In other words, the `k`-th `yield_` call
/// returns the argument of the `(k + 1)`-th `resume`.
///
/// Once the body has returned, every further `resume` short-circuits to
/// [`GeneratorState::Exhausted`] without touching the body's context.
///
/// # Example
///
/// ```rust
/// use ::thread_gen::{Coroutine, GeneratorState};
///
/// let mut running_sum = Coroutine::new(|co| {
///     let mut total = 0;
///     loop {
///         let term: i32 = co.yield_(total);
///         if term == 0 {
///             return format!("final sum: {}", total);
///         }
///         total += term;
///     }
/// });
///
/// assert_eq!(running_sum.resume(-1), GeneratorState::Yielded(0)); // `-1` is dropped.
/// assert_eq!(running_sum.resume(3), GeneratorState::Yielded(3));
/// assert_eq!(running_sum.resume(4), GeneratorState::Yielded(7));
/// assert_eq!(
///     running_sum.resume(0),
///     GeneratorState::Returned("final sum: 7".to_owned()),
/// );
/// assert_eq!(running_sum.resume(5), GeneratorState::Exhausted);
/// ```
///
/// # Abandoning a generator
///
/// There is no cancellation: if a `Coroutine` is dropped while its body is
/// suspended, the body never resumes and its execution context stays blocked
/// (with the default [`ThreadSpawner`][`crate::ThreadSpawner`], a parked
/// thread is leaked). A `Coroutine` dropped before its first resume, on the
/// other hand, releases its context without ever running the body.
///
/// # Panics
///
/// A panic in the body is caught on the body's context and resumed on the
/// caller's thread, from the `resume` call that was waiting on it. The
/// generator is then exhausted.
pub
struct Coroutine<Yield, Return = (), ResumeArg = ()> {
    caller: CallerEnd<Yield, Return, ResumeArg>,
    name: Option<String>,
}

impl<Yield, Return, ResumeArg> Coroutine<Yield, Return, ResumeArg>
where
    Yield : Send + 'static,
    Return : Send + 'static,
    ResumeArg : Send + 'static,
{
    /// Schedules `body` on a new thread, which waits for the first resume.
    ///
    /// # Panics
    ///
    /// If the thread cannot be spawned. Use [`Builder::coroutine`][
    /// `crate::Builder::coroutine`] to handle that error instead.
    pub
    fn new<F> (body: F)
      -> Self
    where
        F : FnOnce(Yielder<'_, Yield, ResumeArg>) -> Return,
        F : Send + 'static,
    {
        match crate::Builder::new().coroutine(body) {
            | Ok(it) => it,
            | Err(err) => panic!("{}", err),
        }
    }

    pub(in crate)
    fn spawn_with<S, F> (
        name: Option<String>,
        spawner: &'_ S,
        body: F,
    ) -> Result<Self, SpawnError>
    where
        S : ?Sized + Spawn,
        F : FnOnce(Yielder<'_, Yield, ResumeArg>) -> Return,
        F : Send + 'static,
    {
        let (caller, body_end) = rendezvous::pair();
        let span = ::tracing::trace_span!(
            "generator",
            name = name.as_deref().unwrap_or("<unnamed>"),
        );
        let task = Task::new(name.clone(), move || {
            let _entered = span.enter();
            body_end.run(body);
        });
        spawner.spawn(task)?;
        trace!(name = ?name, "generator body scheduled");
        Ok(Self { caller, name })
    }
}

impl<Yield, Return, ResumeArg> Coroutine<Yield, Return, ResumeArg> {
    /// Runs the body until it next yields or returns.
    ///
    /// See the [type-level docs][`Coroutine`] for the protocol.
    #[inline]
    pub
    fn resume (self: &'_ mut Self, arg: ResumeArg)
      -> GeneratorState<Yield, Return>
    {
        self.caller.resume(arg)
    }

    /// Whether the body has returned (or panicked).
    #[inline]
    pub
    fn is_complete (self: &'_ Self)
      -> bool
    {
        self.caller.is_complete()
    }

    /// The name given through [`Builder::name`][`crate::Builder::name`].
    #[inline]
    pub
    fn name (self: &'_ Self)
      -> Option<&'_ str>
    {
        self.name.as_deref()
    }
}

impl<Yield, Return, ResumeArg> Generator<ResumeArg>
    for Coroutine<Yield, Return, ResumeArg>
{
    type Yield = Yield;
    type Return = Return;

    #[inline]
    fn resume (
        self: &'_ mut Self,
        arg: ResumeArg,
    ) -> GeneratorState<Yield, Return>
    {
        Coroutine::resume(self, arg)
    }
}

impl<Yield, Return, ResumeArg> fmt::Debug
    for Coroutine<Yield, Return, ResumeArg>
{
    fn fmt (self: &'_ Self, f: &'_ mut fmt::Formatter<'_>)
      -> fmt::Result
    {
        f   .debug_struct("Coroutine")
            .field("name", &self.name)
            .field("complete", &self.is_complete())
            .finish_non_exhaustive()
    }
}
