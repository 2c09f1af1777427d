/// A convenience alias for deque operations that can fail.
pub type Result<T> = std::result::Result<T, Error>;

/// The error type for deque operations.
///
/// Removal from an empty deque is the only failure the container can report;
/// pushes, length queries, peeks, and iteration always succeed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    /// Removal was attempted on a deque holding no elements.
    #[error("deque is empty")]
    EmptyContainer,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        assert_eq!(Error::EmptyContainer.to_string(), "deque is empty");
    }
}
