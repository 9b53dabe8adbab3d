//! Catalog backend for the Bee Shop storefront: categories, products, blog
//! posts and contact submissions, with images kept on an external media host.

pub mod application;
pub mod config;
pub mod domain;
pub mod infrastructure;
pub mod presentation;
