use_prelude!();

/// Iterator over the values yielded by a [`Generator<()>`][`Generator`].
///
/// Obtained through [`GeneratorExt`][`crate::GeneratorExt`].
#[derive(Debug)]
pub
struct Iter<G> (
    pub(in crate) G,
);

impl<G> Iter<G> {
    /// Gets the generator back, _e.g._, to inspect its state.
    #[inline]
    pub
    fn into_inner (self: Self)
      -> G
    {
        self.0
    }
}

impl<G> Iterator for Iter<G>
where
    G : Generator<()>,
{
    type Item = G::Yield;

    fn next (self: &'_ mut Self)
      -> Option<Self::Item>
    {
        self.0.resume(()).yielded()
    }
}
