//! Product records as delivered by the catalog endpoint.
//!
//! Products are read-only to this crate. Optional fields that are missing,
//! null or of the wrong type decode to their defaults and are substituted
//! with placeholders at display time, so one odd record never fails the
//! whole list.

use serde::de::DeserializeOwned;
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;
use unicode_segmentation::UnicodeSegmentation;

/// Image shown when a product carries no image URLs.
pub const PLACEHOLDER_IMAGE: &str = "https://via.placeholder.com/100x100?text=No+Image";

/// Text shown for a missing description or category.
pub const NOT_AVAILABLE: &str = "N/A";

/// Prefix prepended to every displayed price.
pub const CURRENCY_PREFIX: &str = "$";

/// Descriptions longer than this many characters are truncated.
pub const DESCRIPTION_LIMIT: usize = 100;

/// Suffix appended to a truncated description.
pub const TRUNCATION_SUFFIX: &str = "...";

/// Category reference attached to a product.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Category {
    /// Display name of the category.
    #[serde(default, deserialize_with = "lenient")]
    pub name: String,
}

impl Category {
    /// Creates a category with the given name.
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }
}

/// A single catalog entry.
///
/// # Examples
///
/// ```rust
/// use catalog_view::product::Product;
///
/// let product: Product = serde_json::from_str(
///     r#"{"id": 7, "title": "Desk Lamp", "price": 19.99, "images": ["[\"https://cdn/lamp.png\"]"]}"#,
/// ).unwrap();
///
/// assert_eq!(product.display_price(), "$19.99");
/// assert_eq!(product.image_url(), "https://cdn/lamp.png");
/// assert_eq!(product.category_name(), "N/A");
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    /// Unique identifier.
    pub id: i64,
    /// Display title. Tolerated as absent; such products never match a search.
    #[serde(default, deserialize_with = "lenient")]
    pub title: Option<String>,
    /// Non-negative price.
    #[serde(default, deserialize_with = "lenient")]
    pub price: f64,
    /// Free text, possibly empty or absent.
    #[serde(default, deserialize_with = "lenient")]
    pub description: Option<String>,
    /// Optional category reference.
    #[serde(default, deserialize_with = "lenient")]
    pub category: Option<Category>,
    /// Image URLs in display order. Entries that are not strings are kept as-is.
    #[serde(default, deserialize_with = "lenient")]
    pub images: Vec<Value>,
}

impl Product {
    /// Creates a product with a title and price and no optional fields.
    pub fn new(id: i64, title: impl Into<String>, price: f64) -> Self {
        Self {
            id,
            title: Some(title.into()),
            price,
            description: None,
            category: None,
            images: Vec::new(),
        }
    }

    /// Sets the description (builder pattern).
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Sets the category (builder pattern).
    pub fn with_category(mut self, name: impl Into<String>) -> Self {
        self.category = Some(Category::new(name));
        self
    }

    /// Appends an image URL (builder pattern).
    pub fn with_image(mut self, url: impl Into<String>) -> Self {
        self.images.push(Value::String(url.into()));
        self
    }

    /// Title as displayed, empty when absent.
    pub fn title(&self) -> &str {
        self.title.as_deref().unwrap_or_default()
    }

    /// URL of the first image.
    ///
    /// String entries are stripped of every bracket and quote character, which
    /// undoes the stringified-array URLs some payloads carry. Entries that are
    /// not strings are returned in their JSON form without sanitizing. An empty
    /// image list yields [`PLACEHOLDER_IMAGE`].
    pub fn image_url(&self) -> String {
        match self.images.first() {
            Some(Value::String(url)) => sanitize_image_url(url),
            Some(other) => other.to_string(),
            None => PLACEHOLDER_IMAGE.to_string(),
        }
    }

    /// Price with the currency prefix, in shortest round-trip form.
    pub fn display_price(&self) -> String {
        format!("{CURRENCY_PREFIX}{}", self.price)
    }

    /// Description truncated to [`DESCRIPTION_LIMIT`] characters.
    pub fn display_description(&self) -> String {
        match self.description.as_deref() {
            None | Some("") => NOT_AVAILABLE.to_string(),
            Some(text) => truncate(text, DESCRIPTION_LIMIT),
        }
    }

    /// Category name, or [`NOT_AVAILABLE`] when the product has no named category.
    pub fn category_name(&self) -> &str {
        self.category
            .as_ref()
            .map(|c| c.name.as_str())
            .filter(|name| !name.is_empty())
            .unwrap_or(NOT_AVAILABLE)
    }
}

/// Decodes a field, falling back to `T::default()` when it is null or malformed.
fn lenient<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + DeserializeOwned,
{
    let value = Value::deserialize(deserializer)?;
    Ok(serde_json::from_value(value).unwrap_or_default())
}

/// Removes every `[`, `]`, `"` and `'` from an image URL.
pub fn sanitize_image_url(url: &str) -> String {
    url.chars()
        .filter(|c| !matches!(c, '[' | ']' | '"' | '\''))
        .collect()
}

/// Cuts `text` to `limit` grapheme clusters and appends [`TRUNCATION_SUFFIX`].
///
/// Text at or under the limit is returned unchanged.
pub fn truncate(text: &str, limit: usize) -> String {
    let mut graphemes = text.grapheme_indices(true);
    match graphemes.nth(limit) {
        Some((cut, _)) => format!("{}{TRUNCATION_SUFFIX}", &text[..cut]),
        None => text.to_string(),
    }
}
