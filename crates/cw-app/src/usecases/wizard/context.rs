use std::sync::Arc;

use cw_core::wizard::WizardSnapshot;
use tokio::sync::Mutex;

/// Shared wizard context containing the snapshot and dispatch lock.
///
/// ## Lock Ordering
/// When acquiring both locks, acquire `dispatch_lock` first, then `snapshot`.
/// - `dispatch_lock`: held for a whole `dispatch`, including the prediction
///   round trip, so one form has at most one request in flight.
/// - `snapshot`: held only to read or replace the snapshot.
#[derive(Clone)]
pub struct WizardContext {
    snapshot: Arc<Mutex<WizardSnapshot>>,
    dispatch_lock: Arc<Mutex<()>>,
}

impl WizardContext {
    pub fn new(initial: WizardSnapshot) -> Self {
        Self {
            snapshot: Arc::new(Mutex::new(initial)),
            dispatch_lock: Arc::new(Mutex::new(())),
        }
    }

    pub fn arc(self) -> Arc<Self> {
        Arc::new(self)
    }

    /// Clone of the current snapshot. Does NOT acquire `dispatch_lock`.
    pub async fn get_snapshot(&self) -> WizardSnapshot {
        self.snapshot.lock().await.clone()
    }

    pub async fn acquire_dispatch_lock(&self) -> tokio::sync::MutexGuard<'_, ()> {
        self.dispatch_lock.lock().await
    }

    /// Replace the snapshot. Call only while holding `dispatch_lock`.
    pub async fn set_snapshot(&self, snapshot: WizardSnapshot) {
        let mut guard = self.snapshot.lock().await;
        *guard = snapshot;
    }
}

impl Default for WizardContext {
    fn default() -> Self {
        Self::new(WizardSnapshot::default())
    }
}
