pub mod errors;
pub mod extensions;
pub mod logging;
pub mod style;
pub mod ui;

// Re-export main entry helpers if needed in future integration tests.
