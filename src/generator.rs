//! The [`Generator`] trait, shared by every generator shape of this crate.

use_prelude!();

/// Something that can be resumed, and then either yields or returns.
///
/// Implemented by [`Coroutine`], [`Gen`][`crate::Gen`] (with
/// `ResumeArg = ()`) and [`ArgGen`][`crate::ArgGen`], so that code driving
/// generators does not have to care about which shape it is given.
///
/// # Example
///
/// ```rust
/// use ::thread_gen::{prelude::*, Gen};
///
/// fn drain<G : Generator> (generator: &mut G)
///   -> Vec<G::Yield>
/// {
///     generator.gen_into_iter().collect()
/// }
///
/// let mut letters = Gen::new(|co| "abc".chars().for_each(|c| co.yield_(c)));
/// assert_eq!(drain(&mut letters), ['a', 'b', 'c']);
/// assert!(letters.is_complete());
/// ```
///
/// # `Generator` _vs._ `Iterator`
///
///   - a `Generator` can return a non-trivial value when done,
///     contrary to an `Iterator`,
///
///   - and it may take a resume argument at each step.
///
/// [`GeneratorExt`] bridges the two for `ResumeArg = ()`.
pub
trait Generator<ResumeArg = ()> {
    /// The type of value this generator yields.
    type Yield;

    /// The type of value this generator returns.
    type Return;

    /// Resumes the execution of this generator.
    ///
    /// This starts the generator if it hasn't started yet, or resumes it from
    /// its latest suspension point otherwise. It then runs until the generator
    /// either yields or returns.
    ///
    /// # Return value
    ///
    ///   - [`Yielded`][`GeneratorState::Yielded`]: the generator reached a
    ///     suspension point, and can be resumed again;
    ///
    ///   - [`Returned`][`GeneratorState::Returned`]: the generator completed
    ///     during this call;
    ///
    ///   - [`Exhausted`][`GeneratorState::Exhausted`]: the generator had
    ///     already completed, and nothing was run.
    fn resume (
        self: &'_ mut Self,
        resume_arg: ResumeArg,
    ) -> GeneratorState<Self::Yield, Self::Return>
    ;
}

/// Value obtained when [resuming][`Generator::resume`] a [`Generator`].
#[derive(
    Debug,
    Clone, Copy,
    PartialOrd, Ord,
    PartialEq, Eq,
    Hash
)]
pub
enum GeneratorState<Yield, Return = ()> {
    /// The generator suspended with a value.
    Yielded(Yield),

    /// The generator completed with a value, during this very resume.
    ///
    /// This happens at most once per generator.
    Returned(Return),

    /// The generator had already completed: there is no value left.
    Exhausted,
}

impl<Yield> GeneratorState<Yield, ()> {
    /// Alias for `Returned(())`.
    #[allow(nonstandard_style)]
    pub
    const Complete: Self = Self::Returned(());
}

impl<Yield, Return> GeneratorState<Yield, Return> {
    /// The yielded value, if any.
    #[inline]
    pub
    fn yielded (self: Self)
      -> Option<Yield>
    {
        match self {
            | Self::Yielded(value) => Some(value),
            | Self::Returned(_) | Self::Exhausted => None,
        }
    }

    /// The returned value, if the generator completed during this resume.
    #[inline]
    pub
    fn returned (self: Self)
      -> Option<Return>
    {
        match self {
            | Self::Returned(value) => Some(value),
            | Self::Yielded(_) | Self::Exhausted => None,
        }
    }

    /// Whether the generator suspended with a value.
    #[inline]
    pub
    fn is_yielded (self: &'_ Self)
      -> bool
    {
        matches!(*self, Self::Yielded(_))
    }
}

// # TRANSITIVE IMPLS
impl<ResumeArg, G : ?Sized> Generator<ResumeArg> for &'_ mut G
where
    G : Generator<ResumeArg>,
{
    transitive_impl_deferring_to!(|self| **self);
}

impl<ResumeArg, G : ?Sized> Generator<ResumeArg> for Box<G>
where
    G : Generator<ResumeArg>,
{
    transitive_impl_deferring_to!(|self| **self);
}

// where:
macro_rules! transitive_impl_deferring_to {(
    |$self:tt| $expr:expr $(,)?
) => (
    type Yield = G::Yield;
    type Return = G::Return;

    #[inline]
    fn resume (
        $self: &'_ mut Self,
        arg: ResumeArg,
    ) -> GeneratorState<Self::Yield, Self::Return>
    {
        <G as Generator<ResumeArg>>::resume(&mut $expr, arg)
    }
)} use transitive_impl_deferring_to;

/// Extension trait with some convenience methods for [`Generator`]s.
pub
trait GeneratorExt<ResumeArg>
:
    Generator<ResumeArg> +
{
    /// Borrows a generator as an iterator over its yielded values.
    ///
    ///   - (provided `ResumeArg = ()`).
    ///
    /// The return value, if any, is dropped.
    #[inline]
    fn gen_into_iter (self: &'_ mut Self)
      -> crate::iter::Iter<&'_ mut Self>
    where
        Self : Generator<()>,
    {
        crate::iter::Iter(self)
    }

    /// Same as [`.gen_into_iter()`][`GeneratorExt::gen_into_iter`], but for a
    /// boxed (_e.g._, type-erased) generator.
    ///
    /// ```rust
    /// use ::thread_gen::{prelude::*, Coroutine, Yielder};
    ///
    /// let generator: Box<dyn Generator<Yield = u8, Return = &str>> =
    ///     Box::new(Coroutine::new(|co: Yielder<'_, u8>| {
    ///         co.yield_(4);
    ///         co.yield_(2);
    ///         "done"
    ///     }));
    /// assert_eq!(generator.boxed_gen_into_iter().collect::<Vec<_>>(), [4, 2]);
    /// ```
    #[inline]
    fn boxed_gen_into_iter (self: Box<Self>)
      -> crate::iter::Iter<Box<Self>>
    where
        Self : Generator<()>,
    {
        crate::iter::Iter(self)
    }
}

impl<ResumeArg, G : ?Sized> GeneratorExt<ResumeArg> for G
where
    G : Generator<ResumeArg>,
{}
