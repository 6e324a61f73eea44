/// Global Tokio runtime for async HTTP operations
///
/// egui renders on the main thread and has no async executor of its own,
/// while reqwest requires a tokio context. `main` enters this runtime before
/// starting the event loop so handlers can `tokio::spawn` network tasks that
/// report back over the app's event channel.
use once_cell::sync::Lazy;
use tokio::runtime::Runtime;

pub static TOKIO_RT: Lazy<Runtime> = Lazy::new(|| {
    Runtime::new().expect("Failed to create Tokio runtime for async HTTP operations")
});
