// tests/support/mocks/mod.rs
pub mod media;
pub mod repos;
pub mod security;
pub mod time;

pub use media::{AssetCall, RecordingAssetStore};
pub use repos::{InMemoryDb, StaleSlugIndex};
pub use security::{ADMIN_TOKEN, CUSTOMER_TOKEN, StaticTokenVerifier};
pub use time::{FixedClock, fixed_now};
