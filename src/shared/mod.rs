pub mod errors; // Shared error types

pub use errors::{AppError, AppResult};
