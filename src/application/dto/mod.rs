pub mod assets;
pub mod auth;
pub mod categories;
pub mod contacts;
pub mod pagination;
pub mod posts;
pub mod products;

pub use assets::AssetReferenceDto;
pub use auth::{AuthenticatedUser, Role};
pub use categories::CategoryDto;
pub use contacts::ContactDto;
pub use pagination::{PageDto, PaginationMeta};
pub use posts::PostDto;
pub use products::ProductDto;
