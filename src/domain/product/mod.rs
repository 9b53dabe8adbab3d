pub mod entity;
pub mod repository;
pub mod value_objects;

pub use entity::{MAX_PRODUCT_IMAGES, NewProduct, Product};
pub use repository::ProductRepository;
pub use value_objects::{Price, ProductCode, ProductId, ProductName};
