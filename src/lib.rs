pub mod app;
pub mod calendar;
pub mod config;
pub mod errors;
pub mod handlers;
pub mod history;
pub mod models;
pub mod root;
pub mod session;
pub mod state;
pub mod storage;
pub mod tracker;
pub mod ui;
pub mod wizard;

pub use app::router;
pub use config::Config;
pub use session::Session;
pub use state::AppState;
pub use storage::{load_area, persist_area};
