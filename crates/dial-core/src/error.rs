use thiserror::Error;

/// Configuration errors raised while building a dial.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DialError {
    /// A dial needs at least one section to snap to.
    #[error("section count must be greater than zero")]
    NoSections,
}
