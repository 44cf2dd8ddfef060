//! Notes Service — a small in-memory notes CRUD API.

pub mod config;
pub mod error;
pub mod extract;
pub mod logging;
pub mod routes;
pub mod store;

pub use config::Config;
pub use error::{ApiError, NoteError};
pub use routes::{create_router, AppState};
pub use store::NoteStore;
