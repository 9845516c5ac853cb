//! Value-only generators.

use_prelude!();

use ::core::iter::FusedIterator;

/// A lazy sequence of `Item`s, produced by a body running on its own
/// execution context.
///
/// Each [`next()`][`Iterator::next`] resumes the body until its next
/// [`yield_`][`Yielder::yield_`], and returns the yielded item; once the body
/// has returned, `next()` returns `None`, forever. The sequence is finite
/// unless the body loops forever, and cannot be restarted.
///
/// # Example
///
/// ```rust
/// use ::thread_gen::Gen;
///
/// let mut counter = Gen::new(|co| {
///     co.yield_(1);
///     co.yield_(2);
///     co.yield_(3);
/// });
/// assert_eq!(counter.next(), Some(1));
/// assert_eq!(counter.next(), Some(2));
/// assert_eq!(counter.next(), Some(3));
/// assert_eq!(counter.next(), None);
/// assert_eq!(counter.next(), None);
/// ```
///
/// See [`Coroutine`] for what happens when a `Gen` is dropped half-way
/// through, or when its body panics.
pub
struct Gen<Item> {
    coroutine: Coroutine<Item>,
}

impl<Item : Send + 'static> Gen<Item> {
    /// Schedules `body` on a new thread, which waits for the first `next()`.
    ///
    /// # Panics
    ///
    /// If the thread cannot be spawned. Use [`Builder::generator`][
    /// `crate::Builder::generator`] to handle that error instead.
    pub
    fn new<F> (body: F)
      -> Self
    where
        F : FnOnce(Yielder<'_, Item>),
        F : Send + 'static,
    {
        Coroutine::<Item>::new(body).into()
    }
}

impl<Item> Gen<Item> {
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
      -> Coroutine<Item>
    {
        self.coroutine
    }
}

impl<Item> From<Coroutine<Item>> for Gen<Item> {
    #[inline]
    fn from (coroutine: Coroutine<Item>)
      -> Self
    {
        Self { coroutine }
    }
}

impl<Item> Iterator for Gen<Item> {
    type Item = Item;

    #[inline]
    fn next (self: &'_ mut Self)
      -> Option<Item>
    {
        self.coroutine.resume(()).yielded()
    }
}

impl<Item> FusedIterator for Gen<Item> {}

impl<Item> Generator for Gen<Item> {
    type Yield = Item;
    type Return = ();

    #[inline]
    fn resume (self: &'_ mut Self, (): ())
      -> GeneratorState<Item>
    {
        self.coroutine.resume(())
    }
}

impl<Item> fmt::Debug for Gen<Item> {
    fn fmt (self: &'_ Self, f: &'_ mut fmt::Formatter<'_>)
      -> fmt::Result
    {
        f   .debug_tuple("Gen")
            .field(&self.coroutine)
            .finish()
    }
}
