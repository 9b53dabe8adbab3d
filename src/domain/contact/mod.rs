pub mod entity;
pub mod repository;

pub use entity::{Contact, ContactDetails, ContactId, NewContact};
pub use repository::ContactRepository;
