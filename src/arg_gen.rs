//! Argument-passing generators.

use_prelude!();

/// A generator that receives an `Arg` at each step, and yields an `Item`
/// back.
///
/// [`next(arg)`][`ArgGen::next`] resumes the body until its next
/// [`yield_`][`Yielder::yield_`], and returns the yielded item; `arg` becomes
/// the value returned by the `yield_` that the body was suspended in.
///
/// The first `next` finds the body not started yet, rather than suspended,
/// so its argument is dropped: the body's `k`-th `yield_` returns the
/// argument of the `(k + 1)`-th `next`.
///
/// # Example
///
/// ```rust
/// use ::thread_gen::ArgGen;
///
/// let mut exchange = ArgGen::new(|co| {
///     let a = co.yield_(10);
///     let _ = co.yield_(a + 1);
/// });
/// assert_eq!(exchange.next(5), Some(10));
/// assert_eq!(exchange.next(100), Some(101));
/// assert_eq!(exchange.next(0), None);
/// ```
pub
struct ArgGen<Arg, Item> {
    coroutine: Coroutine<Item, (), Arg>,
}

impl<Arg, Item> ArgGen<Arg, Item>
where
    Arg : Send + 'static,
    Item : Send + 'static,
{
    /// Schedules `body` on a new thread, which waits for the first `next`.
    ///
    /// # Panics
    ///
    /// If the thread cannot be spawned. Use [`Builder::arg_generator`][
    /// `crate::Builder::arg_generator`] to handle that error instead.
    pub
    fn new<F> (body: F)
      -> Self
    where
        F : FnOnce(Yielder<'_, Item, Arg>),
        F : Send + 'static,
    {
        Coroutine::<Item, (), Arg>::new(body).into()
    }
}

impl<Arg, Item> ArgGen<Arg, Item> {
    /// Delivers `arg` to the body and runs it until it yields the next item.
    ///
    /// Returns `None` once the body has returned; from then on, `arg` is
    /// dropped without the body ever seeing it.
    #[inline]
    pub
    fn next (self: &'_ mut Self, arg: Arg)
      -> Option<Item>
    {
        self.coroutine.resume(arg).yielded()
    }

    /// Whether the body has returned.
    #[inline]
    pub
    fn is_complete (self: &'_ Self)
      -> bool
    {
        self.coroutine.is_complete()
    }

    /// The underlying [`Coroutine`].
    #[inline]
    pub
    fn into_inner (self: Self)
      -> Coroutine<Item, (), Arg>
    {
        self.coroutine
    }
}

impl<Arg, Item> From<Coroutine<Item, (), Arg>> for ArgGen<Arg, Item> {
    #[inline]
    fn from (coroutine: Coroutine<Item, (), Arg>)
      -> Self
    {
        Self { coroutine }
    }
}

impl<Arg, Item> Generator<Arg> for ArgGen<Arg, Item> {
    type Yield = Item;
    type Return = ();

    #[inline]
    fn resume (self: &'_ mut Self, arg: Arg)
      -> GeneratorState<Item>
    {
        self.coroutine.resume(arg)
    }
}

impl<Arg, Item> fmt::Debug for ArgGen<Arg, Item> {
    fn fmt (self: &'_ Self, f: &'_ mut fmt::Formatter<'_>)
      -> fmt::Result
    {
        f   .debug_tuple("ArgGen")
            .field(&self.coroutine)
            .finish()
    }
}
