// src/infrastructure/media/cloudinary.rs
use std::{sync::Arc, time::Duration};

use async_trait::async_trait;
use reqwest::multipart::{Form, Part};
use serde::Deserialize;
use sha2::{Digest, Sha256};

use crate::{
    application::{
        ApplicationResult,
        error::ApplicationError,
        ports::{
            media::{AssetStore, AssetUpload},
            time::Clock,
        },
    },
    domain::asset::{AssetNamespace, AssetReference},
};

pub const DEFAULT_BASE_URL: &str = "https://api.cloudinary.com";

#[derive(Clone, Debug)]
pub struct CloudinarySettings {
    pub cloud_name: String,
    pub api_key: String,
    pub api_secret: String,
    pub base_url: String,
    /// Optional prefix placed in front of every namespace folder.
    pub root_folder: Option<String>,
}

/// Media host client speaking the Cloudinary signed upload API.
#[derive(Clone)]
pub struct CloudinaryAssetStore {
    http: reqwest::Client,
    settings: CloudinarySettings,
    clock: Arc<dyn Clock>,
}

#[derive(Debug, Deserialize)]
struct UploadResponse {
    public_id: String,
    secure_url: String,
}

#[derive(Debug, Deserialize)]
struct DestroyResponse {
    result: String,
}

#[derive(Debug, Deserialize)]
struct ErrorEnvelope {
    error: ErrorBody,
}

#[derive(Debug, Deserialize)]
struct ErrorBody {
    message: String,
}

impl CloudinaryAssetStore {
    #[must_use]
    pub const fn new(
        http: reqwest::Client,
        settings: CloudinarySettings,
        clock: Arc<dyn Clock>,
    ) -> Self {
        Self {
            http,
            settings,
            clock,
        }
    }

    /// Client with the timeouts used in production.
    pub fn default_http_client() -> reqwest::Result<reqwest::Client> {
        reqwest::Client::builder()
            .connect_timeout(Duration::from_secs(5))
            .timeout(Duration::from_secs(60))
            .build()
    }

    fn endpoint(&self, action: &str) -> String {
        format!(
            "{}/v1_1/{}/image/{action}",
            self.settings.base_url.trim_end_matches('/'),
            self.settings.cloud_name
        )
    }

    fn folder_for(&self, namespace: AssetNamespace) -> String {
        folder_for(self.settings.root_folder.as_deref(), namespace)
    }

    fn signed_fields(&self, params: &[(&str, String)]) -> Vec<(String, String)> {
        let signature = sign(params, &self.settings.api_secret);
        let mut fields: Vec<(String, String)> = params
            .iter()
            .map(|(key, value)| ((*key).to_string(), value.clone()))
            .collect();
        fields.push(("api_key".into(), self.settings.api_key.clone()));
        fields.push(("signature".into(), signature));
        fields.push(("signature_algorithm".into(), "sha256".into()));
        fields
    }
}

/// Folder under which a namespace's objects are created.
fn folder_for(root: Option<&str>, namespace: AssetNamespace) -> String {
    match root.map(|r| r.trim_matches('/')).filter(|r| !r.is_empty()) {
        Some(root) => format!("{root}/{namespace}"),
        None => namespace.to_string(),
    }
}

/// Request signature: the parameters sorted by name, joined as
/// `key=value&key=value`, with the API secret appended, hashed with SHA-256.
fn sign(params: &[(&str, String)], secret: &str) -> String {
    let mut sorted: Vec<&(&str, String)> = params.iter().collect();
    sorted.sort_by(|a, b| a.0.cmp(b.0));
    let joined = sorted
        .iter()
        .map(|(key, value)| format!("{key}={value}"))
        .collect::<Vec<_>>()
        .join("&");
    format!("{:x}", Sha256::digest(format!("{joined}{secret}").as_bytes()))
}

async fn error_message(resp: reqwest::Response) -> String {
    let status = resp.status();
    match resp.json::<ErrorEnvelope>().await {
        Ok(envelope) => format!("{status}: {}", envelope.error.message),
        Err(_) => status.to_string(),
    }
}

#[async_trait]
impl AssetStore for CloudinaryAssetStore {
    async fn store(
        &self,
        upload: AssetUpload,
        namespace: AssetNamespace,
    ) -> ApplicationResult<AssetReference> {
        let timestamp = self.clock.now().timestamp().to_string();
        let fields = self.signed_fields(&[
            ("folder", self.folder_for(namespace)),
            ("timestamp", timestamp),
        ]);

        let file_name = upload.file_name.unwrap_or_else(|| "upload".into());
        let mut file = Part::bytes(upload.bytes.to_vec()).file_name(file_name);
        if let Some(content_type) = upload.content_type.as_deref() {
            file = file
                .mime_str(content_type)
                .map_err(|err| ApplicationError::upload(format!("invalid content type: {err}")))?;
        }

        let form = fields
            .into_iter()
            .fold(Form::new().part("file", file), |form, (key, value)| {
                form.text(key, value)
            });

        let resp = self
            .http
            .post(self.endpoint("upload"))
            .multipart(form)
            .send()
            .await
            .map_err(|err| ApplicationError::upload(err.to_string()))?;

        if !resp.status().is_success() {
            return Err(ApplicationError::upload(error_message(resp).await));
        }

        let body: UploadResponse = resp
            .json()
            .await
            .map_err(|err| ApplicationError::upload(format!("unexpected response: {err}")))?;

        tracing::debug!(public_id = %body.public_id, %namespace, "asset stored");
        AssetReference::new(body.public_id, body.secure_url)
            .map_err(|err| ApplicationError::upload(err.to_string()))
    }

    async fn discard(&self, public_id: &str) -> ApplicationResult<()> {
        let timestamp = self.clock.now().timestamp().to_string();
        let fields = self.signed_fields(&[
            ("public_id", public_id.to_string()),
            ("timestamp", timestamp),
        ]);
        let form = fields
            .into_iter()
            .fold(Form::new(), |form, (key, value)| form.text(key, value));

        let resp = self
            .http
            .post(self.endpoint("destroy"))
            .multipart(form)
            .send()
            .await
            .map_err(|err| ApplicationError::removal(err.to_string()))?;

        if !resp.status().is_success() {
            return Err(ApplicationError::removal(error_message(resp).await));
        }

        let body: DestroyResponse = resp
            .json()
            .await
            .map_err(|err| ApplicationError::removal(format!("unexpected response: {err}")))?;

        match body.result.as_str() {
            "ok" => Ok(()),
            "not found" => {
                tracing::debug!(public_id, "asset already absent on media host");
                Ok(())
            }
            other => Err(ApplicationError::removal(format!(
                "media host refused to delete {public_id}: {other}"
            ))),
        }
    }
}
