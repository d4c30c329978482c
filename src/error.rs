use std::collections::TryReserveError;

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum QueueError {
    #[error("node allocation failed: {0}")]
    AllocFailed(#[from] TryReserveError),

    #[error("queue is empty")]
    EmptyQueue,

    #[error("invalid operation on a past-the-end cursor")]
    InvalidOperation,
}

pub type Result<T> = std::result::Result<T, QueueError>;

#[cfg(test)]
mod test {
    use super::QueueError;

    #[test]
    fn test_display() {
        assert_eq!(QueueError::EmptyQueue.to_string(), "queue is empty");
        assert_eq!(
            QueueError::InvalidOperation.to_string(),
            "invalid operation on a past-the-end cursor"
        );

        let err = Vec::<u64>::new().try_reserve(usize::MAX).unwrap_err();
        let err = QueueError::from(err);
        assert!(matches!(err, QueueError::AllocFailed(_)));
        assert!(err.to_string().starts_with("node allocation failed"));
    }
}
