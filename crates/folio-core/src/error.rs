use thiserror::Error;

/// Failures reported by a [`crate::Dom`] implementation.
///
/// The effects are cosmetic, so the controller logs these and carries on;
/// nothing here ever reaches the page.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DomError {
    #[error("could not create <{0}> element")]
    Create(String),
    #[error("could not append child: {0}")]
    Append(String),
    #[error("{0}")]
    Js(String),
}
