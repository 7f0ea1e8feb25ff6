//! One-shot effect timers.
//!
//! Tasks are spawned in the calling component's scope, so they are dropped
//! with the view that started them.

use std::time::Duration;

use dioxus::prelude::*;

/// Run `expire` once `lifetime` has passed.
pub fn expire_after(lifetime: Duration, expire: impl FnOnce() + 'static) {
    spawn(async move {
        tokio::time::sleep(lifetime).await;
        expire();
    });
}
