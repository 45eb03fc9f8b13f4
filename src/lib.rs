pub mod app;
pub mod errors;
pub mod handlers;
pub mod models;
pub mod progress;
pub mod record_store;
pub mod storage;
pub mod ui;
pub mod state;

pub use app::router;
pub use record_store::RecordStore;
pub use state::AppState;
pub use storage::{Defaults, resolve_data_path};
