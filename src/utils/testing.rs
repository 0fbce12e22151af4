//! Shared support for tests that touch process-global state.

use std::sync::{Mutex, MutexGuard};

static CWD_LOCK: Mutex<()> = Mutex::new(());

/// Serializes tests that change the process working directory. The test
/// harness runs tests on parallel threads and the working directory is
/// shared between them.
pub fn lock_cwd() -> MutexGuard<'static, ()> {
    CWD_LOCK.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
}
