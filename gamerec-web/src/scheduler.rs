use crate::dom;
use futures::FutureExt;
use futures::future::LocalBoxFuture;
use gamerec_core::Scheduler;

/// Runs controller tasks on the browser event loop.
#[derive(Debug, Clone, Copy, Default)]
pub struct BrowserScheduler;

impl Scheduler for BrowserScheduler {
    fn spawn(&self, task: LocalBoxFuture<'static, ()>) {
        wasm_bindgen_futures::spawn_local(task);
    }

    fn delay(&self, millis: u32) -> LocalBoxFuture<'static, ()> {
        let millis = i32::try_from(millis).unwrap_or(i32::MAX);
        async move {
            if let Err(err) = dom::sleep_ms(millis).await {
                log::error!("Timer failed: {}", dom::js_error_message(&err));
            }
        }
        .boxed_local()
    }
}
