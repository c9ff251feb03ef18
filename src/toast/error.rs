use std::fmt;

/// Toast queue error types
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ToastError {
    /// Removal index past the end of the queue
    IndexOutOfBounds { index: usize, len: usize },
    /// Raw kind value with no matching `ToastKind`
    UnknownKind(u8),
}

impl fmt::Display for ToastError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ToastError::IndexOutOfBounds { index, len } => {
                write!(f, "Toast index out of bounds: index {index}, len {len}")
            }
            ToastError::UnknownKind(value) => write!(f, "Unknown toast kind: {value}"),
        }
    }
}

impl std::error::Error for ToastError {}
