use serde::Deserialize;
use std::fmt;

use crate::models::review::Review;

#[derive(Deserialize, Debug, Clone, PartialEq)]
pub struct Place {
    pub id: String,              // API identifier, used in detail links
    pub name: String,
    #[serde(default, alias = "price_by_night")]
    pub price: f64,              // Price per night
    #[serde(default)]
    pub city: String,
    #[serde(default)]
    pub country: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub host: String,
    #[serde(default)]
    pub image: Option<String>,   // Image URL or path, if the listing has one
    #[serde(default)]
    pub amenities: Vec<String>,  // Amenity names in API order
    #[serde(default)]
    pub reviews: Vec<Review>,    // Only populated by the detail endpoint
}

impl Place {
    pub fn location(&self) -> String {
        format!("{}, {}", self.city, self.country)
    }
}

/// Non-empty place identifier taken from a page URL.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct PlaceId(String);

impl PlaceId {
    pub fn new(id: impl Into<String>) -> Option<Self> {
        let id = id.into();
        let id = id.trim();
        if id.is_empty() {
            None
        } else {
            Some(Self(id.to_string()))
        }
    }

    /// Reads the `id` parameter out of a location query string such as `?id=42&x=y`.
    pub fn from_query(query: &str) -> Option<Self> {
        query
            .trim_start_matches('?')
            .split('&')
            .filter_map(|pair| pair.split_once('=').or(Some((pair, ""))))
            .find(|(key, _)| *key == "id")
            .and_then(|(_, value)| {
                let value = value.replace('+', " ");
                urlencoding::decode(&value).ok().map(|v| v.into_owned())
            })
            .and_then(Self::new)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for PlaceId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
