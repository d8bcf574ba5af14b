use mongodb::bson::oid::ObjectId;
use serde::{Deserialize, Serialize};

/// Name of the MongoDB collection holding asset documents.
pub const ASSET_COLLECTION: &str = "asset";

const DEMO_IMAGE_URL: &str =
    "https://images.unsplash.com/photo-1518779578993-ec3579fee39f?w=800&q=80&auto=format&fit=crop";
const DEMO_PROMPT: &str = "A futuristic UI with glowing panels and soft gradients";

/// Persisted asset document. `id` is `None` until the driver assigns an
/// ObjectId at insertion; `updated_at` is only ever set by a partial update.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Asset {
    #[serde(rename = "_id", skip_serializing_if = "Option::is_none")]
    pub id: Option<ObjectId>,
    pub title: String,
    pub image_url: String,
    pub prompt: String,
    #[serde(default = "default_is_active")]
    pub is_active: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<mongodb::bson::DateTime>,
}

fn default_is_active() -> bool {
    true
}

impl Asset {
    pub fn new(title: String, image_url: String, prompt: String, is_active: bool) -> Self {
        Self {
            id: None,
            title,
            image_url,
            prompt,
            is_active,
            updated_at: None,
        }
    }

    /// Demo records inserted by the seed endpoint when the collection is empty.
    pub fn demo_set() -> Vec<Asset> {
        (1..=8)
            .map(|i| {
                Asset::new(
                    format!("Sample #{}", i),
                    DEMO_IMAGE_URL.to_string(),
                    DEMO_PROMPT.to_string(),
                    true,
                )
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mongodb::bson::doc;

    #[test]
    fn demo_set_has_eight_titled_samples() {
        let demo = Asset::demo_set();
        assert_eq!(demo.len(), 8);
        assert_eq!(demo[0].title, "Sample #1");
        assert_eq!(demo[7].title, "Sample #8");
        assert!(demo.iter().all(|a| a.is_active));
        assert!(demo.iter().all(|a| a.id.is_none()));
    }

    #[test]
    fn serialization_omits_unset_id_and_updated_at() {
        let asset = Asset::new("X".into(), "http://i".into(), "p".into(), true);
        let doc = mongodb::bson::to_document(&asset).unwrap();
        assert!(!doc.contains_key("_id"));
        assert!(!doc.contains_key("updated_at"));
        assert_eq!(doc.get_str("title").unwrap(), "X");
    }

    #[test]
    fn is_active_defaults_to_true_on_missing_field() {
        let doc = doc! {
            "_id": ObjectId::new(),
            "title": "X",
            "image_url": "http://i",
            "prompt": "p",
        };
        let asset: Asset = mongodb::bson::from_document(doc).unwrap();
        assert!(asset.is_active);
    }
}
