use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

/// Invalidates the pending events of one animation run.
///
/// Every clone observes the same flag. Once [`cancel`](Self::cancel) is
/// called, the [`Animation`](crate::Animation) the token came from drops
/// whatever it has not delivered yet; the flag cannot be cleared again.
#[derive(Clone, Debug, Default)]
pub struct CancelToken {
    cancelled: Arc<AtomicBool>,
}

impl CancelToken {
    pub fn new() -> Self {
        Self::default()
    }

    #[inline]
    pub fn is_cancelled(&self) -> bool {
        self.cancelled.load(Ordering::Relaxed)
    }

    #[inline]
    pub fn cancel(&self) {
        self.cancelled.store(true, Ordering::Relaxed);
    }
}
