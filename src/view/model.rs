use crate::models::place::Place;
use crate::models::review::Review;

pub const RATING_SCALE: usize = 5;
pub const FILLED_GLYPH: char = '★';
pub const EMPTY_GLYPH: char = '☆';
pub const PLACE_PAGE: &str = "place.html";

/// Star counts for a review, clamped to the 0..=5 scale.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RatingGlyphs {
    pub filled: usize,
    pub empty: usize,
}

impl RatingGlyphs {
    pub fn from_rating(rating: i32) -> Self {
        let filled = rating.clamp(0, RATING_SCALE as i32) as usize;
        Self {
            filled,
            empty: RATING_SCALE - filled,
        }
    }

    pub fn to_text(self) -> String {
        std::iter::repeat(FILLED_GLYPH)
            .take(self.filled)
            .chain(std::iter::repeat(EMPTY_GLYPH).take(self.empty))
            .collect()
    }
}

/// What the listing shows for one place.
#[derive(Debug, Clone, PartialEq)]
pub struct PlaceCard {
    pub id: String,
    pub name: String,
    pub price_text: String,
    pub location_text: String,
    pub details_href: String,
}

impl From<&Place> for PlaceCard {
    fn from(place: &Place) -> Self {
        Self {
            id: place.id.clone(),
            name: place.name.clone(),
            price_text: format!("Price per night: ${}", place.price),
            location_text: format!("Location: {}", place.location()),
            details_href: details_href(&place.id),
        }
    }
}

pub fn details_href(place_id: &str) -> String {
    format!("{}?id={}", PLACE_PAGE, urlencoding::encode(place_id))
}

#[derive(Debug, Clone, PartialEq)]
pub struct ReviewCard {
    pub user: String,
    pub comment: String,
    pub glyphs: RatingGlyphs,
}

impl From<&Review> for ReviewCard {
    fn from(review: &Review) -> Self {
        let user = if review.user.trim().is_empty() {
            "Anonymous".to_string()
        } else {
            review.user.clone()
        };
        Self {
            user,
            comment: review.comment.clone(),
            glyphs: RatingGlyphs::from_rating(review.rating),
        }
    }
}
