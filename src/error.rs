use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PathError {
    /// A character in the path violates the grammar. `position` is the
    /// 0-based character index; `message` names the character found and
    /// the alternative expected there.
    #[error("grammar error in '{path}' at position {position}: {message}")]
    Grammar {
        path: String,
        position: usize,
        message: String,
    },

    /// Parent resolution was requested for a self-referencing path, which
    /// has no addressable parent.
    #[error("path '{path}' is a self-reference and has no parent")]
    NoParent { path: String },
}
