pub mod asset;
pub mod category;
pub mod contact;
pub mod errors;
pub mod pagination;
pub mod post;
pub mod product;
pub mod slug;
