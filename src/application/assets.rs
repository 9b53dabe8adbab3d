// src/application/assets.rs
use std::sync::Arc;

use crate::application::{
    error::{ApplicationError, ApplicationResult},
    ports::media::{AssetStore, AssetUpload},
};
use crate::domain::asset::{AssetList, AssetNamespace, AssetReference};

/// Outcome of a best-effort teardown: which objects the media host accepted
/// removing and which it refused. Refusals leave orphans behind.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct DiscardReport {
    pub discarded: Vec<String>,
    pub failed: Vec<String>,
}

impl DiscardReport {
    #[must_use]
    pub fn is_clean(&self) -> bool {
        self.failed.is_empty()
    }

    fn record(&mut self, public_id: &str, ok: bool) {
        if ok {
            self.discarded.push(public_id.to_string());
        } else {
            self.failed.push(public_id.to_string());
        }
    }
}

/// Keeps the asset references held by entity records in step with the
/// objects stored on the media host. Every upload happens before the record
/// referencing it is written, so a persisted reference always points at an
/// object that was actually stored.
pub struct AssetReferenceManager {
    store: Arc<dyn AssetStore>,
}

impl AssetReferenceManager {
    #[must_use]
    pub const fn new(store: Arc<dyn AssetStore>) -> Self {
        Self { store }
    }

    pub async fn store_one(
        &self,
        upload: AssetUpload,
        namespace: AssetNamespace,
    ) -> ApplicationResult<AssetReference> {
        if upload.is_empty() {
            return Err(ApplicationError::validation("uploaded file is empty"));
        }
        let size = upload.len();
        let asset = self.store.store(upload, namespace).await?;
        tracing::debug!(%namespace, public_id = asset.public_id(), size, "stored asset");
        Ok(asset)
    }

    /// Store `uploads` in input order. When one fails, the assets already
    /// stored by this call are discarded again before the error is returned,
    /// so a failed create leaves no orphans unless that cleanup fails too.
    pub async fn store_all(
        &self,
        uploads: Vec<AssetUpload>,
        namespace: AssetNamespace,
    ) -> ApplicationResult<Vec<AssetReference>> {
        let mut stored = Vec::with_capacity(uploads.len());
        for upload in uploads {
            match self.store_one(upload, namespace).await {
                Ok(asset) => stored.push(asset),
                Err(err) => {
                    if !stored.is_empty() {
                        let report = self.discard_all(&stored).await;
                        tracing::warn!(
                            %namespace,
                            rolled_back = report.discarded.len(),
                            orphaned = ?report.failed,
                            "upload failed partway, rolled back stored assets"
                        );
                    }
                    return Err(err);
                }
            }
        }
        Ok(stored)
    }

    /// Single-slot replace: the previous object is discarded first (failure is
    /// logged, not fatal), then the new upload is stored.
    pub async fn replace(
        &self,
        current: Option<&AssetReference>,
        upload: AssetUpload,
        namespace: AssetNamespace,
    ) -> ApplicationResult<AssetReference> {
        if let Some(previous) = current {
            self.discard_quietly(previous.public_id()).await;
        }
        self.store_one(upload, namespace).await
    }

    /// Apply a removal request and then new uploads to a bounded list.
    ///
    /// Only ids the list actually holds are discarded; unknown ids are
    /// ignored. The projected size is checked against `max` before any call
    /// to the media host.
    pub async fn reconcile(
        &self,
        mut current: AssetList,
        removals: &[String],
        uploads: Vec<AssetUpload>,
        namespace: AssetNamespace,
        max: usize,
    ) -> ApplicationResult<(AssetList, DiscardReport)> {
        let mut held: Vec<&str> = removals
            .iter()
            .map(String::as_str)
            .filter(|id| current.contains(id))
            .collect();
        held.sort_unstable();
        held.dedup();
        let projected = current.len() - held.len() + uploads.len();
        if projected > max {
            return Err(ApplicationError::validation(format!(
                "at most {max} images are allowed, request would leave {projected}"
            )));
        }

        let mut report = DiscardReport::default();
        for public_id in removals {
            match current.remove(public_id) {
                Some(asset) => {
                    let ok = self.discard_quietly(asset.public_id()).await;
                    report.record(asset.public_id(), ok);
                }
                None => {
                    tracing::debug!(%namespace, public_id, "ignoring removal of unknown asset");
                }
            }
        }

        for asset in self.store_all(uploads, namespace).await? {
            current.push(asset);
        }

        Ok((current, report))
    }

    /// Discard every reference in order, continuing past failures.
    pub async fn discard_all<'a, I>(&self, assets: I) -> DiscardReport
    where
        I: IntoIterator<Item = &'a AssetReference>,
    {
        let mut report = DiscardReport::default();
        for asset in assets {
            let ok = self.discard_quietly(asset.public_id()).await;
            report.record(asset.public_id(), ok);
        }
        report
    }

    async fn discard_quietly(&self, public_id: &str) -> bool {
        match self.store.discard(public_id).await {
            Ok(()) => {
                tracing::debug!(public_id, "discarded asset");
                true
            }
            Err(err) => {
                tracing::warn!(public_id, error = %err, "failed to discard asset");
                false
            }
        }
    }
}
