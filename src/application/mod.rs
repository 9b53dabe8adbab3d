pub mod assets;
pub mod commands;
pub mod dto;
pub mod error;
pub mod ports;
pub mod queries;
pub mod services;
pub mod slugs;

pub use error::ApplicationResult;
