//! Server-rendered weather lookup.
//!
//! Routes, views and server startup for the weather web app. The weather
//! lookup itself lives in `weather-core`; this crate only turns form
//! submissions into queries and lookups into HTML.

pub mod extract;
pub mod routes;
pub mod server;
pub mod state;
pub mod view;

pub use routes::router;
pub use state::AppState;
