//! Errors surfaced when scheduling a generator body.

use ::thiserror::Error;

/// The execution substrate could not take the generator body.
///
/// This is the only fallible step of a generator's life: once the body has
/// been scheduled, every [`resume`][`crate::Coroutine::resume`] either hands
/// back a value or reports exhaustion.
#[derive(Debug, Error)]
pub
enum SpawnError {
    /// The operating system refused to start the body thread.
    #[error("failed to spawn the generator body thread: {0}")]
    Io(#[from] ::std::io::Error),

    /// A custom [`Spawn`][`crate::Spawn`] implementation turned the body down.
    #[error("the executor rejected the generator body: {0}")]
    Rejected(#[source] Box<dyn ::std::error::Error + Send + Sync>),
}

impl SpawnError {
    /// Convenience constructor for [`SpawnError::Rejected`].
    pub
    fn rejected (
        reason: impl Into<Box<dyn ::std::error::Error + Send + Sync>>,
    ) -> Self
    {
        Self::Rejected(reason.into())
    }
}
