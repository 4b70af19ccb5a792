pub mod api;
pub mod auth;
pub mod config;
pub mod constants;
pub mod core;
pub mod infrastructure;

pub use crate::core::controller::FormController;
pub use crate::core::errors::PortalError;
pub use crate::core::services::AccountService;

#[cfg(test)]
mod tests; // Include integration tests
