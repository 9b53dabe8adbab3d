// src/application/commands/mod.rs
pub(crate) mod access;

pub mod categories;
pub mod contacts;
pub mod posts;
pub mod products;
