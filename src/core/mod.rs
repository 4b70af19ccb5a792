pub mod controller;
pub mod dialogs;
pub mod errors;
pub mod models;
pub mod services;
