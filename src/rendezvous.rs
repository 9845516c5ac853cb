//! The handshake every generator shape is built on.
//!
//! Two zero-capacity channels connect the caller and the body: one carries
//! resume arguments towards the body, the other carries [`Handoff`]s back.
//! A send on a zero-capacity channel only completes once the other side has
//! received it, so the two parties take strict turns and at most one value
//! is ever in flight.

use_prelude!();

use ::crossbeam::channel;

/// What the body hands back at the end of each of its turns.
pub(in crate)
enum Handoff<Yield, Return> {
    Yielded(Yield),
    Returned(Return),
    Panicked(Box<dyn Any + Send>),
}

/// The resuming half, owned by the generator.
pub(in crate)
struct CallerEnd<Yield, Return, ResumeArg> {
    resume_tx: Sender<ResumeArg>,
    handoff_rx: Receiver<Handoff<Yield, Return>>,
    completed: bool,
}

/// The yielding half, moved onto the body's execution context.
pub(in crate)
struct BodyEnd<Yield, Return, ResumeArg> {
    resume_rx: Receiver<ResumeArg>,
    handoff_tx: Sender<Handoff<Yield, Return>>,
}

pub(in crate)
fn pair<Yield, Return, ResumeArg> ()
  -> (
        CallerEnd<Yield, Return, ResumeArg>,
        BodyEnd<Yield, Return, ResumeArg>,
    )
{
    let (resume_tx, resume_rx) = channel::bounded(0);
    let (handoff_tx, handoff_rx) = channel::bounded(0);
    (
        CallerEnd { resume_tx, handoff_rx, completed: false },
        BodyEnd { resume_rx, handoff_tx },
    )
}

impl<Yield, Return, ResumeArg> CallerEnd<Yield, Return, ResumeArg> {
    #[inline]
    pub(in crate)
    fn is_complete (self: &'_ Self)
      -> bool
    {
        self.completed
    }

    /// Hands control to the body until it next yields or returns.
    ///
    /// If the body panicked during this turn, the panic resumes here, on the
    /// caller's thread.
    pub(in crate)
    fn resume (self: &'_ mut Self, arg: ResumeArg)
      -> GeneratorState<Yield, Return>
    {
        if self.completed {
            return GeneratorState::Exhausted;
        }
        if self.resume_tx.send(arg).is_err() {
            protocol_violation();
        }
        match self.handoff_rx.recv() {
            | Ok(Handoff::Yielded(value)) => {
                trace!("received a yielded value");
                GeneratorState::Yielded(value)
            },
            | Ok(Handoff::Returned(value)) => {
                trace!("generator body returned");
                self.completed = true;
                GeneratorState::Returned(value)
            },
            | Ok(Handoff::Panicked(payload)) => {
                self.completed = true;
                panic::resume_unwind(payload)
            },
            | Err(_) => protocol_violation(),
        }
    }
}

impl<Yield, Return, ResumeArg> BodyEnd<Yield, Return, ResumeArg> {
    /// Runs `body` on the current thread, once the first resume arrives.
    ///
    /// The argument of that first resume has no yield to be returned from,
    /// so it is dropped.
    pub(in crate)
    fn run<F> (self: Self, body: F)
    where
        F : FnOnce(Yielder<'_, Yield, ResumeArg>) -> Return,
    {
        let Self { resume_rx, handoff_tx } = self;
        match resume_rx.recv() {
            | Ok(_first_arg) => trace!("generator body started"),
            | Err(_) => {
                debug!("generator dropped before its first resume; body never ran");
                return;
            },
        }
        let yielder = Yielder {
            port: &handoff_tx,
            resume_rx: &resume_rx,
        };
        let handoff = match panic::catch_unwind(panic::AssertUnwindSafe(
            move || body(yielder)
        ))
        {
            | Ok(value) => Handoff::Returned(value),
            | Err(payload) => {
                debug!("generator body panicked");
                Handoff::Panicked(payload)
            },
        };
        // The caller is blocked in `resume` and thus still listening.
        let _ = handoff_tx.send(handoff);
    }
}

/// Type-erases the return type out of the body-to-caller channel, so that
/// [`Yielder`] only mentions what the body can observe.
trait YieldPort<Yield> {
    fn put (self: &'_ Self, value: Yield)
      -> bool
    ;
}

impl<Yield, Return> YieldPort<Yield>
    for Sender<Handoff<Yield, Return>>
{
    fn put (self: &'_ Self, value: Yield)
      -> bool
    {
        self.send(Handoff::Yielded(value)).is_ok()
    }
}

/// The handle through which a generator body suspends itself.
///
/// A `Yielder` is given to the body when it starts, and borrows from the
/// body's execution context: it cannot escape the body, nor be sent to
/// another thread.
///
/// # Example
///
/// ```rust
/// use ::thread_gen::{ArgGen, Yielder};
///
/// let mut echo = ArgGen::new(|co: Yielder<'_, String, &'static str>| {
///     let mut word = co.yield_("ready".to_owned());
///     while !word.is_empty() {
///         word = co.yield_(word.to_uppercase());
///     }
/// });
/// assert_eq!(echo.next("ignored").as_deref(), Some("ready"));
/// assert_eq!(echo.next("hey").as_deref(), Some("HEY"));
/// assert_eq!(echo.next(""), None);
/// ```
pub
struct Yielder<'body, Yield, ResumeArg = ()> {
    port: &'body dyn YieldPort<Yield>,
    resume_rx: &'body Receiver<ResumeArg>,
}

impl<Yield, ResumeArg> Yielder<'_, Yield, ResumeArg> {
    /// Hands `value` to the pending `resume` call and suspends the body until
    /// the next one, whose argument is returned.
    ///
    /// If the generator is dropped while the body is suspended here, this
    /// call never returns: there is no cancellation, and the execution
    /// context running the body stays parked for the rest of the process.
    pub
    fn yield_ (self: &'_ Self, value: Yield)
      -> ResumeArg
    {
        trace!("generator body yielding");
        if self.port.put(value).not() {
            abandoned();
        }
        match self.resume_rx.recv() {
            | Ok(arg) => arg,
            | Err(_) => abandoned(),
        }
    }
}

impl<Yield, ResumeArg> fmt::Debug for Yielder<'_, Yield, ResumeArg> {
    fn fmt (self: &'_ Self, f: &'_ mut fmt::Formatter<'_>)
      -> fmt::Result
    {
        f   .debug_struct("Yielder")
            .finish_non_exhaustive()
    }
}

fn abandoned ()
  -> !
{
    debug!("generator dropped while its body was suspended; parking the body forever");
    loop {
        thread::park();
    }
}

fn protocol_violation ()
  -> !
{
    macros::abort_with_msg!("\
        `::thread_gen` fatal runtime error: \
        the generator body vanished without completing.\
        \n\
        \n\
        This happens when a `Spawn` implementation drops a `Task` \
        instead of running it, or when the thread running it is torn down. \
        The rendezvous can no longer be honored, \
        so the program will now abort.\
    ")
}
