//! Event-loop hooks the controller needs: background tasks and timers.

use futures::future::LocalBoxFuture;

/// Spawns work onto the host's single-threaded event loop.
///
/// The browser implementation uses `spawn_local` and `setTimeout`; tests use
/// a `LocalPool` and timers that resolve immediately.
pub trait Scheduler {
    /// Run `task` to completion in the background.
    fn spawn(&self, task: LocalBoxFuture<'static, ()>);

    /// Future that resolves after roughly `millis` milliseconds.
    fn delay(&self, millis: u32) -> LocalBoxFuture<'static, ()>;
}
