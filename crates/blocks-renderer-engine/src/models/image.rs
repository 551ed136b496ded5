use serde::{Deserialize, Serialize};
use std::hash::{Hash, Hasher};

/// Media metadata attached to an image block.
///
/// Only `url` is required; everything else is carried through untouched so
/// custom image renderers can use it.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Image {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub alternative_text: Option<String>,
    pub url: String,
    #[serde(default)]
    pub caption: Option<String>,
    #[serde(default)]
    pub width: Option<f64>,
    #[serde(default)]
    pub height: Option<f64>,
    #[serde(default)]
    pub formats: Option<serde_json::Value>,
    #[serde(default)]
    pub hash: Option<String>,
    #[serde(default)]
    pub ext: Option<String>,
    #[serde(default)]
    pub mime: Option<String>,
    #[serde(default)]
    pub size: Option<f64>,
    #[serde(default)]
    pub preview_url: Option<String>,
    #[serde(default)]
    pub provider: Option<String>,
    #[serde(default, rename = "provider_metadata")]
    pub provider_metadata: Option<serde_json::Value>,
    #[serde(default)]
    pub created_at: Option<String>,
    #[serde(default)]
    pub updated_at: Option<String>,
}

impl Image {
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            ..Self::default()
        }
    }

    pub fn with_alternative_text(mut self, text: impl Into<String>) -> Self {
        self.alternative_text = Some(text.into());
        self
    }

    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    pub fn with_dimensions(mut self, width: f64, height: f64) -> Self {
        self.width = Some(width);
        self.height = Some(height);
        self
    }

    /// Feed the identifying fields into a hasher.
    ///
    /// Free-form JSON (`formats`, `provider_metadata`) is left out.
    pub(crate) fn hash_identity<H: Hasher>(&self, state: &mut H) {
        self.name.hash(state);
        self.url.hash(state);
        self.alternative_text.hash(state);
        self.caption.hash(state);
        self.hash.hash(state);
        self.width.map(f64::to_bits).hash(state);
        self.height.map(f64::to_bits).hash(state);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_deserialize_full_metadata() {
        let json = serde_json::json!({
            "name": "test",
            "alternativeText": "Test",
            "caption": "A caption",
            "width": 100,
            "height": 50,
            "formats": {},
            "hash": "abc",
            "ext": "jpg",
            "mime": "image/jpeg",
            "url": "https://test.com/test.jpg",
            "size": 12.5,
            "previewUrl": null,
            "provider": "local",
            "provider_metadata": null,
            "createdAt": "2021-01-01",
            "updatedAt": "2021-01-02"
        });

        let image: Image = serde_json::from_value(json).unwrap();

        assert_eq!(image.url, "https://test.com/test.jpg");
        assert_eq!(image.alternative_text.as_deref(), Some("Test"));
        assert_eq!(image.width, Some(100.0));
        assert_eq!(image.size, Some(12.5));
        assert_eq!(image.preview_url, None);
        assert_eq!(image.updated_at.as_deref(), Some("2021-01-02"));
    }

    #[test]
    fn test_only_url_is_required() {
        let image: Image = serde_json::from_value(serde_json::json!({ "url": "/a.png" })).unwrap();
        assert_eq!(image, Image::new("/a.png"));

        let missing_url = serde_json::from_value::<Image>(serde_json::json!({ "name": "x" }));
        assert!(missing_url.is_err());
    }
}
