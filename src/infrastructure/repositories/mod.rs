// src/infrastructure/repositories/mod.rs
mod error;
mod postgres_category;
mod postgres_contact;
mod postgres_post;
mod postgres_product;

pub(crate) use error::map_sqlx;
pub use postgres_category::PostgresCategoryRepository;
pub use postgres_contact::PostgresContactRepository;
pub use postgres_post::PostgresPostRepository;
pub use postgres_product::PostgresProductRepository;
