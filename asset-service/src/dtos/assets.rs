use crate::models::Asset;
use mongodb::bson::{doc, Document};
use serde::{Deserialize, Serialize};
use validator::Validate;

#[derive(Debug, Deserialize, Validate)]
pub struct CreateAssetRequest {
    #[validate(length(min = 1, message = "title must not be empty"))]
    pub title: String,
    #[validate(length(min = 1, message = "image_url must not be empty"))]
    pub image_url: String,
    #[validate(length(min = 1, message = "prompt must not be empty"))]
    pub prompt: String,
    pub is_active: Option<bool>,
}

impl CreateAssetRequest {
    pub fn into_asset(self) -> Asset {
        Asset::new(
            self.title,
            self.image_url,
            self.prompt,
            self.is_active.unwrap_or(true),
        )
    }
}

/// Partial update. A field is "set" iff present and non-null in the request
/// body; everything else is left untouched.
#[derive(Debug, Default, Deserialize)]
pub struct UpdateAssetRequest {
    pub title: Option<String>,
    pub image_url: Option<String>,
    pub prompt: Option<String>,
    pub is_active: Option<bool>,
}

impl UpdateAssetRequest {
    /// Build the `$set` document from the fields that were actually provided.
    /// Empty result means the patch carried no effective changes.
    pub fn to_set_document(&self) -> Document {
        let mut fields = doc! {};
        if let Some(ref title) = self.title {
            fields.insert("title", title.as_str());
        }
        if let Some(ref image_url) = self.image_url {
            fields.insert("image_url", image_url.as_str());
        }
        if let Some(ref prompt) = self.prompt {
            fields.insert("prompt", prompt.as_str());
        }
        if let Some(is_active) = self.is_active {
            fields.insert("is_active", is_active);
        }
        fields
    }
}

/// Stable output shape. Only these five fields ever cross the HTTP boundary;
/// the BSON representation stays internal.
#[derive(Debug, Serialize, Deserialize)]
pub struct AssetResponse {
    pub id: String,
    pub title: String,
    pub image_url: String,
    pub prompt: String,
    pub is_active: bool,
}

impl From<Asset> for AssetResponse {
    fn from(asset: Asset) -> Self {
        Self {
            id: asset.id.map(|id| id.to_hex()).unwrap_or_default(),
            title: asset.title,
            image_url: asset.image_url,
            prompt: asset.prompt,
            is_active: asset.is_active,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mongodb::bson::oid::ObjectId;
    use validator::Validate;

    #[test]
    fn create_request_rejects_empty_title() {
        let req = CreateAssetRequest {
            title: "".into(),
            image_url: "http://i".into(),
            prompt: "p".into(),
            is_active: None,
        };
        assert!(req.validate().is_err());
    }

    #[test]
    fn create_request_defaults_is_active() {
        let req = CreateAssetRequest {
            title: "X".into(),
            image_url: "http://i".into(),
            prompt: "p".into(),
            is_active: None,
        };
        assert!(req.into_asset().is_active);
    }

    #[test]
    fn empty_patch_yields_empty_set_document() {
        let patch: UpdateAssetRequest = serde_json::from_str("{}").unwrap();
        assert!(patch.to_set_document().is_empty());
    }

    #[test]
    fn null_fields_are_not_set() {
        let patch: UpdateAssetRequest =
            serde_json::from_str(r#"{"title": null, "is_active": false}"#).unwrap();
        let fields = patch.to_set_document();
        assert_eq!(fields.len(), 1);
        assert!(!fields.get_bool("is_active").unwrap());
    }

    #[test]
    fn response_renders_object_id_as_hex() {
        let oid = ObjectId::new();
        let mut asset = Asset::new("X".into(), "http://i".into(), "p".into(), true);
        asset.id = Some(oid);
        let out = AssetResponse::from(asset);
        assert_eq!(out.id, oid.to_hex());
    }
}
