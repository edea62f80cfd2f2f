//! Task spawning on the UI event loop.

use std::future::Future;

/// Run a future on the UI event loop. Must be called from inside the Dioxus runtime.
pub fn spawn_future<F>(future: F)
where
    F: Future<Output = ()> + 'static,
{
    dioxus::prelude::spawn(future);
}
