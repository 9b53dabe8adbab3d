// src/presentation/http/controllers/mod.rs
pub mod categories;
pub mod contacts;
pub mod params;
pub mod posts;
pub mod products;
