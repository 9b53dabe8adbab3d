// src/domain/asset.rs
use crate::domain::errors::{DomainError, DomainResult};
use serde::{Deserialize, Serialize};

/// Pointer to one object held by the external media host. Owned by exactly
/// one entity record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AssetReference {
    public_id: String,
    url: String,
}

impl AssetReference {
    pub fn new(public_id: impl Into<String>, url: impl Into<String>) -> DomainResult<Self> {
        let public_id = public_id.into();
        let url = url.into();
        if public_id.trim().is_empty() {
            return Err(DomainError::Validation("asset public id cannot be empty".into()));
        }
        if url.trim().is_empty() {
            return Err(DomainError::Validation("asset url cannot be empty".into()));
        }
        Ok(Self { public_id, url })
    }

    #[must_use]
    pub fn public_id(&self) -> &str {
        &self.public_id
    }

    #[must_use]
    pub fn url(&self) -> &str {
        &self.url
    }
}

/// Logical folder an asset is stored under, one per entity kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AssetNamespace {
    Categories,
    Posts,
    Products,
}

impl AssetNamespace {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Categories => "categories",
            Self::Posts => "posts",
            Self::Products => "products",
        }
    }
}

impl std::fmt::Display for AssetNamespace {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Ordered, bounded list of asset references (product gallery).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AssetList(Vec<AssetReference>);

impl AssetList {
    pub fn new(items: Vec<AssetReference>, max: usize) -> DomainResult<Self> {
        if items.len() > max {
            return Err(DomainError::Validation(format!(
                "at most {max} images are allowed"
            )));
        }
        Ok(Self(items))
    }

    #[must_use]
    pub const fn empty() -> Self {
        Self(Vec::new())
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    #[must_use]
    pub fn iter(&self) -> std::slice::Iter<'_, AssetReference> {
        self.0.iter()
    }

    #[must_use]
    pub fn contains(&self, public_id: &str) -> bool {
        self.0.iter().any(|asset| asset.public_id() == public_id)
    }

    /// Drop the reference with `public_id`; absent ids are ignored.
    pub fn remove(&mut self, public_id: &str) -> Option<AssetReference> {
        let index = self.0.iter().position(|asset| asset.public_id() == public_id)?;
        Some(self.0.remove(index))
    }

    pub fn push(&mut self, asset: AssetReference) {
        self.0.push(asset);
    }

    #[must_use]
    pub fn into_inner(self) -> Vec<AssetReference> {
        self.0
    }
}

impl<'a> IntoIterator for &'a AssetList {
    type Item = &'a AssetReference;
    type IntoIter = std::slice::Iter<'a, AssetReference>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn asset(id: &str) -> AssetReference {
        AssetReference::new(id, format!("https://cdn.test/{id}.jpg")).unwrap()
    }

    #[test]
    fn reference_requires_both_parts() {
        assert!(AssetReference::new("", "https://cdn.test/a.jpg").is_err());
        assert!(AssetReference::new("products/a", " ").is_err());
    }

    #[test]
    fn list_enforces_bound() {
        let items = (0..3).map(|i| asset(&format!("p{i}"))).collect();
        assert!(AssetList::new(items, 2).is_err());
    }

    #[test]
    fn removing_unknown_id_leaves_list_unchanged() {
        let mut list = AssetList::new(vec![asset("pid-1"), asset("pid-2")], 6).unwrap();
        assert!(list.remove("pid-9").is_none());
        assert_eq!(list.len(), 2);
        assert!(list.remove("pid-1").is_some());
        assert!(!list.contains("pid-1"));
        assert_eq!(list.iter().next().map(AssetReference::public_id), Some("pid-2"));
    }

    #[test]
    fn serializes_as_plain_array() {
        let list = AssetList::new(vec![asset("pid-1")], 6).unwrap();
        let json = serde_json::to_value(&list).unwrap();
        assert_eq!(json[0]["public_id"], "pid-1");
    }
}
