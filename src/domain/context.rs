use std::time::{Duration, Instant};

use tokio_util::sync::CancellationToken;

use crate::domain::errors::{RepositoryError, RepositoryResult};

/// Per-request carrier of a cancellation signal and an optional deadline.
///
/// Repository implementations call [`RequestContext::ensure_active`] between
/// store calls so a cancelled request stops issuing further I/O instead of
/// running the operation to completion.
#[derive(Debug, Clone)]
pub struct RequestContext {
    cancel: CancellationToken,
    deadline: Option<Instant>,
}

impl RequestContext {
    pub fn new() -> Self {
        Self {
            cancel: CancellationToken::new(),
            deadline: None,
        }
    }

    pub fn with_cancellation(token: CancellationToken) -> Self {
        Self {
            cancel: token,
            deadline: None,
        }
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.deadline = Some(Instant::now() + timeout);
        self
    }

    /// Request cancellation of this context and everything derived from it.
    pub fn cancel(&self) {
        self.cancel.cancel();
    }

    pub fn is_cancelled(&self) -> bool {
        self.cancel.is_cancelled()
            || self
                .deadline
                .is_some_and(|deadline| Instant::now() >= deadline)
    }

    /// Fail with `RepositoryError::Cancelled` once the context is cancelled or
    /// its deadline has passed.
    pub fn ensure_active(&self) -> RepositoryResult<()> {
        if self.is_cancelled() {
            Err(RepositoryError::Cancelled)
        } else {
            Ok(())
        }
    }
}

impl Default for RequestContext {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fresh_context_is_active() {
        let ctx = RequestContext::new();
        assert!(ctx.ensure_active().is_ok());
    }

    #[test]
    fn test_cancelled_context_fails() {
        let ctx = RequestContext::new();
        ctx.cancel();
        assert!(matches!(
            ctx.ensure_active(),
            Err(RepositoryError::Cancelled)
        ));
    }

    #[test]
    fn test_expired_deadline_fails() {
        let ctx = RequestContext::new().with_timeout(Duration::from_secs(0));
        assert!(matches!(
            ctx.ensure_active(),
            Err(RepositoryError::Cancelled)
        ));
    }
}
