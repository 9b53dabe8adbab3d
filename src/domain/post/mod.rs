pub mod entity;
pub mod repository;
pub mod value_objects;

pub use entity::{NewPost, Post};
pub use repository::PostRepository;
pub use value_objects::{PostExcerpt, PostId, PostTitle};
