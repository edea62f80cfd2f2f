//! Timers and cancellable background tasks.
//!
//! Background work that must stop when some piece of UI state ends is spawned
//! through [`guarded`]: the returned [`TaskGuard`] aborts the task when dropped,
//! so storing the guard next to the state it belongs to ties the two lifetimes
//! together.

use std::future::Future;

use futures::future::{AbortHandle, Abortable};
use futures::FutureExt;

use super::platform;

pub async fn sleep_ms(ms: u64) {
    #[cfg(target_arch = "wasm32")]
    {
        gloo_timers::future::TimeoutFuture::new(ms.min(u32::MAX as u64) as u32).await;
    }

    #[cfg(not(target_arch = "wasm32"))]
    {
        tokio::time::sleep(std::time::Duration::from_millis(ms)).await;
    }
}

/// Owning handle of a background task. Dropping it aborts the task at its next
/// suspension point.
#[derive(Debug)]
pub struct TaskGuard {
    handle: AbortHandle,
}

impl Drop for TaskGuard {
    fn drop(&mut self) {
        self.handle.abort();
    }
}

/// Wrap `task` so it can be stopped through the returned guard.
pub fn guarded<F>(task: F) -> (TaskGuard, impl Future<Output = ()>)
where
    F: Future<Output = ()>,
{
    let (handle, registration) = AbortHandle::new_pair();
    let task = Abortable::new(task, registration).map(|_| ());
    (TaskGuard { handle }, task)
}

/// Call `tick` every `interval_ms`, forever. The first call happens one
/// interval after the future is first polled.
pub async fn periodic<F>(interval_ms: u64, mut tick: F)
where
    F: FnMut(),
{
    loop {
        sleep_ms(interval_ms).await;
        tick();
    }
}

/// Spawn [`periodic`] on the UI event loop and return the guard that stops it.
pub fn spawn_periodic<F>(interval_ms: u64, tick: F) -> TaskGuard
where
    F: FnMut() + 'static,
{
    let (guard, task) = guarded(periodic(interval_ms, tick));
    platform::spawn_future(task);
    guard
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;
    use std::rc::Rc;
    use std::time::Duration;

    #[test]
    fn dropping_guard_finishes_pending_task() {
        let (guard, task) = guarded(futures::future::pending::<()>());
        drop(guard);
        // Would hang forever if the abort did not reach the task.
        futures::executor::block_on(task);
    }

    #[tokio::test(start_paused = true)]
    async fn periodic_ticks_stop_with_guard() {
        let ticks = Rc::new(Cell::new(0u32));
        let counter = ticks.clone();
        let (guard, task) = guarded(periodic(100, move || counter.set(counter.get() + 1)));
        let mut task = Box::pin(task);

        let still_running = tokio::time::timeout(Duration::from_millis(350), &mut task).await;
        assert!(still_running.is_err());
        assert_eq!(ticks.get(), 3);

        drop(guard);
        task.await;
        tokio::time::sleep(Duration::from_millis(500)).await;
        assert_eq!(ticks.get(), 3);
    }
}
