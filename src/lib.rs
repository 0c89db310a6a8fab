pub mod assets;
pub mod config;
pub mod error;
pub mod middleware;
pub mod observability;
pub mod routes;
pub mod stats;
pub mod template;

pub use config::Config;
pub use routes::{AppState, app, router};
