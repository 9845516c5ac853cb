//! Execution substrates for generator bodies.
//!
//! A generator body needs an execution context of its own, able to block for
//! as long as the body stays suspended. Where that context comes from is up
//! to the caller: by default each body gets a dedicated OS thread
//! ([`ThreadSpawner`]), but any [`Spawn`] implementation can be plugged into
//! a [`Builder`][`crate::Builder`].

use_prelude!();

/// A generator body, ready to be run on an execution context.
///
/// Running a `Task` blocks until the body completes, which may be never if
/// the generator is abandoned while suspended.
pub
struct Task {
    name: Option<String>,
    run: Box<dyn FnOnce() + Send + 'static>,
}

impl Task {
    pub(in crate)
    fn new (
        name: Option<String>,
        run: impl FnOnce() + Send + 'static,
    ) -> Self
    {
        Self { name, run: Box::new(run) }
    }

    /// The name the generator was built with, if any.
    #[inline]
    pub
    fn name (self: &'_ Self)
      -> Option<&'_ str>
    {
        self.name.as_deref()
    }

    /// Runs the body on the current thread.
    pub
    fn run (self: Self)
    {
        (self.run)()
    }
}

impl fmt::Debug for Task {
    fn fmt (self: &'_ Self, f: &'_ mut fmt::Formatter<'_>)
      -> fmt::Result
    {
        f   .debug_struct("Task")
            .field("name", &self.name)
            .finish_non_exhaustive()
    }
}

/// The capability of running a [`Task`] concurrently with the caller.
///
/// Implementations must run every accepted task exactly once, on a context
/// that is allowed to block indefinitely without starving the caller: a
/// pool-backed implementation must thus reserve a whole slot per task, for
/// as long as the task runs.
///
/// Dropping an accepted task without running it breaks the handshake with
/// the generator, which then aborts the process on its next resume.
///
/// # Example
///
/// ```rust
/// use ::std::sync::atomic::{AtomicUsize, Ordering};
/// use ::thread_gen::{Builder, Spawn, SpawnError, Task};
///
/// #[derive(Default)]
/// struct Counting(AtomicUsize);
///
/// impl Spawn for Counting {
///     fn spawn (&self, task: Task) -> Result<(), SpawnError>
///     {
///         self.0.fetch_add(1, Ordering::Relaxed);
///         ::std::thread::spawn(move || task.run());
///         Ok(())
///     }
/// }
///
/// let spawner = Counting::default();
/// let squares = Builder::new()
///     .spawner(&spawner)
///     .generator(|co| for i in 1 ..= 3_u32 { co.yield_(i * i); })?;
/// assert_eq!(squares.collect::<Vec<_>>(), [1, 4, 9]);
/// assert_eq!(spawner.0.load(Ordering::Relaxed), 1);
/// # Ok::<(), SpawnError>(())
/// ```
pub
trait Spawn {
    /// Schedules `task` to run once, concurrently with the caller.
    fn spawn (self: &'_ Self, task: Task)
      -> Result<(), SpawnError>
    ;
}

/// Runs each generator body on a dedicated, detached OS thread.
///
/// The thread is named after the generator, if it has a name.
#[derive(Debug, Clone, Default)]
pub
struct ThreadSpawner {
    stack_size: Option<usize>,
}

impl ThreadSpawner {
    /// A spawner using the platform's default stack size.
    pub
    fn new ()
      -> Self
    {
        Self::default()
    }

    /// Sets the stack size, in bytes, of the spawned threads.
    pub
    fn stack_size (self: Self, stack_size: usize)
      -> Self
    {
        Self { stack_size: Some(stack_size) }
    }
}

impl Spawn for ThreadSpawner {
    fn spawn (self: &'_ Self, task: Task)
      -> Result<(), SpawnError>
    {
        let mut builder = thread::Builder::new();
        if let Some(name) = task.name() {
            builder = builder.name(name.to_owned());
        }
        if let Some(stack_size) = self.stack_size {
            builder = builder.stack_size(stack_size);
        }
        // Detached: the rendezvous is the only join point.
        let _ = builder.spawn(move || task.run())?;
        Ok(())
    }
}

/// Adapts a closure into a [`Spawn`] implementation.
///
/// ```rust
/// use ::thread_gen::{spawn::SpawnFn, Builder, SpawnError, Task};
///
/// let spawner = SpawnFn(|task: Task| {
///     ::std::thread::spawn(move || task.run());
///     Ok::<(), SpawnError>(())
/// });
/// let mut letters = Builder::new()
///     .spawner(spawner)
///     .generator(|co| "abc".chars().for_each(|c| co.yield_(c)))
///     .unwrap();
/// assert_eq!(letters.next(), Some('a'));
/// ```
#[derive(Debug, Clone, Copy)]
pub
struct SpawnFn<F> (
    pub F,
);

impl<F> Spawn for SpawnFn<F>
where
    F : Fn(Task) -> Result<(), SpawnError>,
{
    #[inline]
    fn spawn (self: &'_ Self, task: Task)
      -> Result<(), SpawnError>
    {
        (self.0)(task)
    }
}

// # TRANSITIVE IMPLS
impl<S : ?Sized + Spawn> Spawn for &'_ S {
    transitive_impl_deferring_to!(|self| **self);
}
impl<S : ?Sized + Spawn> Spawn for Box<S> {
    transitive_impl_deferring_to!(|self| **self);
}
impl<S : ?Sized + Spawn> Spawn for Arc<S> {
    transitive_impl_deferring_to!(|self| **self);
}

// where:
macro_rules! transitive_impl_deferring_to {(
    |$self:tt| $expr:expr $(,)?
) => (
    #[inline]
    fn spawn (
        $self: &'_ Self,
        task: Task,
    ) -> Result<(), SpawnError>
    {
        <S as Spawn>::spawn(&$expr, task)
    }
)} use transitive_impl_deferring_to;
