mod cloudinary;

pub use cloudinary::{CloudinaryAssetStore, CloudinarySettings, DEFAULT_BASE_URL};
