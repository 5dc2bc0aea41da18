use serde::{Deserialize, Deserializer, Serialize};

use stylehub_core::{DomainError, DomainResult, Entity, ValueObject};

/// Characters of description shown on a product card before truncation.
pub const DEFAULT_DESCRIPTION_CHARS: usize = 100;

/// Product identifier, opaque to the storefront.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ProductId(String);

impl ProductId {
    pub fn new(id: impl Into<String>) -> DomainResult<Self> {
        let id = id.into();
        if id.trim().is_empty() {
            return Err(DomainError::invalid_id("product id cannot be empty"));
        }
        Ok(Self(id))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl core::fmt::Display for ProductId {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(&self.0)
    }
}

/// Unit price in the store currency (decimal, as reported by the backend).
///
/// `Price::new` enforces `price >= 0`. Values decoded from the wire are taken
/// as-is; the card renders whatever the backend sent.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Price(f64);

impl ValueObject for Price {}

impl Price {
    pub fn new(amount: f64) -> DomainResult<Self> {
        if !amount.is_finite() {
            return Err(DomainError::validation("price must be a finite number"));
        }
        if amount < 0.0 {
            return Err(DomainError::validation("price must be non-negative"));
        }
        Ok(Self(amount))
    }

    pub fn amount(&self) -> f64 {
        self.0
    }

    /// Whether the amount satisfies the catalog invariant.
    pub fn is_valid(&self) -> bool {
        self.0.is_finite() && self.0 >= 0.0
    }
}

impl core::fmt::Display for Price {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "${:.2}", self.0)
    }
}

/// A product as listed by the catalog backend.
///
/// Immutable once decoded; the catalog view replaces its whole product set on
/// every successful fetch.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    #[serde(rename = "_id")]
    id: ProductId,
    name: String,
    #[serde(default, deserialize_with = "null_as_default")]
    description: String,
    price: Price,
    category: String,
    #[serde(default, deserialize_with = "null_as_default")]
    image_url: String,
    #[serde(default, deserialize_with = "null_as_default")]
    featured: bool,
}

impl Product {
    pub fn new(
        id: ProductId,
        name: impl Into<String>,
        price: Price,
        category: impl Into<String>,
    ) -> Self {
        Self {
            id,
            name: name.into(),
            description: String::new(),
            price,
            category: category.into(),
            image_url: String::new(),
            featured: false,
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    pub fn with_image_url(mut self, image_url: impl Into<String>) -> Self {
        self.image_url = image_url.into();
        self
    }

    pub fn with_featured(mut self, featured: bool) -> Self {
        self.featured = featured;
        self
    }

    pub fn id_typed(&self) -> &ProductId {
        &self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn price(&self) -> Price {
        self.price
    }

    pub fn category(&self) -> &str {
        &self.category
    }

    pub fn image_url(&self) -> &str {
        &self.image_url
    }

    pub fn is_featured(&self) -> bool {
        self.featured
    }

    /// Price with currency prefix, e.g. `$29.99`.
    pub fn display_price(&self) -> String {
        self.price.to_string()
    }

    /// Description cut to at most `max_chars` characters, with an ellipsis
    /// appended when anything was dropped.
    pub fn short_description(&self, max_chars: usize) -> String {
        truncate_chars(&self.description, max_chars)
    }
}

impl Entity for Product {
    type Id = ProductId;

    fn id(&self) -> &Self::Id {
        &self.id
    }
}

/// Treat an explicit JSON `null` like a missing field.
fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de> + Default,
{
    Option::<T>::deserialize(deserializer).map(Option::unwrap_or_default)
}

fn truncate_chars(text: &str, max_chars: usize) -> String {
    match text.char_indices().nth(max_chars) {
        None => text.to_string(),
        Some((cut, _)) => {
            let mut out = text[..cut].trim_end().to_string();
            out.push('…');
            out
        }
    }
}
