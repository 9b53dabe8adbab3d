pub mod categories;
pub mod contacts;
pub mod posts;
pub mod products;
