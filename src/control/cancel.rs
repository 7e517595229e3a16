use std::sync::{Arc, Condvar, Mutex, PoisonError};
use std::time::{Duration, Instant};

/// Cooperative stop flag shared between the control thread and a worker.
///
/// The worker checks [`CancelToken::is_cancelled`] at safe points and sleeps
/// with [`CancelToken::sleep`], which wakes up early when the token is
/// cancelled.
#[derive(Debug, Clone, Default)]
pub struct CancelToken {
    inner: Arc<(Mutex<bool>, Condvar)>,
}

impl CancelToken {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn cancel(&self) {
        let (cancelled, wakeup) = &*self.inner;
        *cancelled.lock().unwrap_or_else(PoisonError::into_inner) = true;
        wakeup.notify_all();
    }

    pub fn is_cancelled(&self) -> bool {
        *self.inner.0.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Sleep for `duration` unless cancelled first.
    ///
    /// Returns true if the token was cancelled before or during the sleep.
    pub fn sleep(&self, duration: Duration) -> bool {
        let (cancelled, wakeup) = &*self.inner;
        let deadline = Instant::now() + duration;
        let mut guard = cancelled.lock().unwrap_or_else(PoisonError::into_inner);

        while !*guard {
            let now = Instant::now();
            if now >= deadline {
                return false;
            }
            guard = wakeup
                .wait_timeout(guard, deadline - now)
                .unwrap_or_else(PoisonError::into_inner)
                .0;
        }

        true
    }
}
