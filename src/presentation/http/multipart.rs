// src/presentation/http/multipart.rs
use std::collections::HashMap;

use axum::extract::Multipart;

use crate::application::ports::media::AssetUpload;

use super::error::{HttpError, HttpResult};

/// Field names accepted for the product image removal list.
const REMOVAL_FIELDS: [&str; 4] = [
    "remove_images",
    "remove_images[]",
    "removeImages",
    "removeImages[]",
];

/// A fully buffered multipart form: text fields plus file parts, both keyed
/// by field name and kept in arrival order.
#[derive(Debug, Default)]
pub struct MultipartForm {
    fields: HashMap<String, Vec<String>>,
    files: HashMap<String, Vec<AssetUpload>>,
}

impl MultipartForm {
    pub async fn read(mut multipart: Multipart, max_file_bytes: usize) -> HttpResult<Self> {
        let mut form = Self::default();

        while let Some(field) = multipart
            .next_field()
            .await
            .map_err(|err| HttpError::bad_request(format!("malformed multipart body: {err}")))?
        {
            let Some(name) = field.name().map(str::to_string) else {
                continue;
            };

            if let Some(file_name) = field.file_name().map(str::to_string) {
                let content_type = field.content_type().map(str::to_string);
                let bytes = field.bytes().await.map_err(|err| {
                    HttpError::bad_request(format!("failed to read file {name}: {err}"))
                })?;
                // Browsers submit an empty part for an untouched file input.
                if bytes.is_empty() && file_name.is_empty() {
                    continue;
                }
                if bytes.len() > max_file_bytes {
                    return Err(HttpError::payload_too_large(format!(
                        "file {file_name} exceeds the {max_file_bytes} byte limit"
                    )));
                }
                let mut upload = AssetUpload::new(bytes).with_file_name(file_name);
                if let Some(content_type) = content_type {
                    upload = upload.with_content_type(content_type);
                }
                form.files.entry(name).or_default().push(upload);
            } else {
                let value = field.text().await.map_err(|err| {
                    HttpError::bad_request(format!("failed to read field {name}: {err}"))
                })?;
                form.fields.entry(name).or_default().push(value);
            }
        }

        Ok(form)
    }

    #[must_use]
    pub fn text(&self, name: &str) -> Option<String> {
        self.fields.get(name).and_then(|values| values.first()).cloned()
    }

    pub fn require_text(&self, name: &str) -> HttpResult<String> {
        self.text(name)
            .filter(|value| !value.trim().is_empty())
            .ok_or_else(|| HttpError::bad_request(format!("{name} is required")))
    }

    pub fn integer(&self, name: &str) -> HttpResult<Option<i64>> {
        self.text(name)
            .map(|raw| {
                raw.trim()
                    .parse::<i64>()
                    .map_err(|_| HttpError::bad_request(format!("{name} must be an integer")))
            })
            .transpose()
    }

    pub fn require_integer(&self, name: &str) -> HttpResult<i64> {
        self.integer(name)?
            .ok_or_else(|| HttpError::bad_request(format!("{name} is required")))
    }

    /// The single file sent under `name`, if any. More than one part under
    /// the same name is rejected.
    pub fn take_file(&mut self, name: &str) -> HttpResult<Option<AssetUpload>> {
        let Some(mut files) = self.files.remove(name) else {
            return Ok(None);
        };
        if files.len() > 1 {
            return Err(HttpError::bad_request(format!(
                "only one {name} file is accepted, got {}",
                files.len()
            )));
        }
        Ok(files.pop())
    }

    pub fn take_files(&mut self, name: &str) -> Vec<AssetUpload> {
        self.files.remove(name).unwrap_or_default()
    }

    /// Public ids the caller asked to drop, from repeated fields or a JSON
    /// array string, under any of the accepted field names.
    pub fn removal_list(&self) -> HttpResult<Vec<String>> {
        let values: Vec<&str> = REMOVAL_FIELDS
            .iter()
            .filter_map(|name| self.fields.get(*name))
            .flatten()
            .map(String::as_str)
            .collect();
        parse_removals(&values)
    }

    #[cfg(test)]
    fn with_file(mut self, name: &str, bytes: &'static [u8]) -> Self {
        self.files
            .entry(name.to_string())
            .or_default()
            .push(AssetUpload::new(bytes).with_file_name("photo.jpg"));
        self
    }

    #[cfg(test)]
    fn with_field(mut self, name: &str, value: &str) -> Self {
        self.fields
            .entry(name.to_string())
            .or_default()
            .push(value.to_string());
        self
    }
}

fn parse_removals(values: &[&str]) -> HttpResult<Vec<String>> {
    let mut ids = Vec::new();
    for raw in values {
        let trimmed = raw.trim();
        if trimmed.starts_with('[') {
            let parsed: Vec<String> = serde_json::from_str(trimmed).map_err(|_| {
                HttpError::bad_request("remove_images must be a JSON array of strings")
            })?;
            ids.extend(parsed);
        } else {
            ids.push(trimmed.to_string());
        }
    }
    ids.retain(|id| !id.trim().is_empty());
    Ok(ids)
}
