// tests/support/mocks/media.rs
use std::sync::Mutex;

use async_trait::async_trait;
use beeshop_core::application::{
    ApplicationResult,
    error::ApplicationError,
    ports::media::{AssetStore, AssetUpload},
};
use beeshop_core::domain::asset::{AssetNamespace, AssetReference};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AssetCall {
    Store { namespace: String, bytes: Vec<u8> },
    Discard(String),
}

#[derive(Default)]
struct State {
    calls: Vec<AssetCall>,
    stored: usize,
    fail_store_at: Option<usize>,
    fail_discard: bool,
}

/// Media host double that records every call in order and hands out
/// `<namespace>/<n>` public ids.
#[derive(Default)]
pub struct RecordingAssetStore {
    state: Mutex<State>,
}

impl RecordingAssetStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Fail the `index`-th store call (0-based, counted across the store's life).
    pub fn fail_store_at(self, index: usize) -> Self {
        self.state.lock().unwrap().fail_store_at = Some(index);
        self
    }

    pub fn failing_discards(self) -> Self {
        self.state.lock().unwrap().fail_discard = true;
        self
    }

    pub fn calls(&self) -> Vec<AssetCall> {
        self.state.lock().unwrap().calls.clone()
    }

    pub fn discarded(&self) -> Vec<String> {
        self.calls()
            .into_iter()
            .filter_map(|call| match call {
                AssetCall::Discard(id) => Some(id),
                AssetCall::Store { .. } => None,
            })
            .collect()
    }

    pub fn stored_namespaces(&self) -> Vec<String> {
        self.calls()
            .into_iter()
            .filter_map(|call| match call {
                AssetCall::Store { namespace, .. } => Some(namespace),
                AssetCall::Discard(_) => None,
            })
            .collect()
    }

    pub fn clear(&self) {
        self.state.lock().unwrap().calls.clear();
    }
}

#[async_trait]
impl AssetStore for RecordingAssetStore {
    async fn store(
        &self,
        upload: AssetUpload,
        namespace: AssetNamespace,
    ) -> ApplicationResult<AssetReference> {
        let mut state = self.state.lock().unwrap();
        let index = state.stored;
        state.stored += 1;
        state.calls.push(AssetCall::Store {
            namespace: namespace.to_string(),
            bytes: upload.bytes.to_vec(),
        });
        if state.fail_store_at == Some(index) {
            return Err(ApplicationError::upload("media host unavailable"));
        }
        let public_id = format!("{namespace}/{index}");
        let url = format!("https://media.test/{public_id}.jpg");
        Ok(AssetReference::new(public_id, url)?)
    }

    async fn discard(&self, public_id: &str) -> ApplicationResult<()> {
        let mut state = self.state.lock().unwrap();
        state.calls.push(AssetCall::Discard(public_id.to_string()));
        if state.fail_discard {
            return Err(ApplicationError::removal("media host unavailable"));
        }
        Ok(())
    }
}
