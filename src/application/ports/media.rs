// src/application/ports/media.rs
use crate::application::ApplicationResult;
use crate::domain::asset::{AssetNamespace, AssetReference};
use async_trait::async_trait;
use bytes::Bytes;

/// One raw file received from the caller, not yet stored anywhere.
#[derive(Debug, Clone)]
pub struct AssetUpload {
    pub bytes: Bytes,
    pub file_name: Option<String>,
    pub content_type: Option<String>,
}

impl AssetUpload {
    #[must_use]
    pub fn new(bytes: impl Into<Bytes>) -> Self {
        Self {
            bytes: bytes.into(),
            file_name: None,
            content_type: None,
        }
    }

    #[must_use]
    pub fn with_file_name(mut self, file_name: impl Into<String>) -> Self {
        self.file_name = Some(file_name.into());
        self
    }

    #[must_use]
    pub fn with_content_type(mut self, content_type: impl Into<String>) -> Self {
        self.content_type = Some(content_type.into());
        self
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }
}

/// External media host holding the binary objects behind asset references.
#[async_trait]
pub trait AssetStore: Send + Sync {
    /// Create one object under `namespace`. Fails with `ApplicationError::Upload`.
    async fn store(
        &self,
        upload: AssetUpload,
        namespace: AssetNamespace,
    ) -> ApplicationResult<AssetReference>;

    /// Delete the object keyed by `public_id`. An already absent object counts
    /// as success. Fails with `ApplicationError::Removal`.
    async fn discard(&self, public_id: &str) -> ApplicationResult<()>;
}
