pub mod api;
pub mod config;
pub mod dispatch;
pub mod error;
pub mod mail;
pub mod models;
pub mod state;

pub use config::Config;
pub use error::{AppError, Result};
pub use state::AppState;
