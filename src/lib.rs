// Library exports for testing and reusability

pub mod config;
pub mod constants;
pub mod error;
pub mod models;
pub mod routes;
pub mod services;

// Re-export commonly used types
pub use error::{AppError, Result};

// App state for sharing across the application
use services::profile_generator::ProfileGenerator;

pub struct AppState {
    pub profile_generator: ProfileGenerator,
}
