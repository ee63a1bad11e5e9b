// src/models/review.rs
use serde::{Deserialize, Serialize};
use thiserror::Error;

pub const MIN_RATING: u8 = 1;
pub const MAX_RATING: u8 = 5;

#[derive(Deserialize, Debug, Clone, PartialEq)]
pub struct Review {
    #[serde(default, alias = "user_name")]
    pub user: String,        // Display label of the reviewer
    #[serde(default, alias = "text")]
    pub comment: String,     // Review body
    #[serde(default)]
    pub rating: i32,         // Stars given, expected in 0..=5
}

/// Why a review couldn't be turned into a [`ReviewDraft`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DraftError {
    #[error("Please write a comment before submitting")]
    EmptyComment,
    #[error("Rating must be a whole number between 1 and 5")]
    InvalidRating,
}

/// Review input that has been checked and is ready to send.
#[derive(Serialize, Debug, Clone, PartialEq, Eq)]
pub struct ReviewDraft {
    comment: String,
    rating: u8,
}

impl ReviewDraft {
    pub fn new(comment: &str, rating: &str) -> Result<Self, DraftError> {
        let comment = comment.trim();
        if comment.is_empty() {
            return Err(DraftError::EmptyComment);
        }
        let rating = rating
            .trim()
            .parse::<u8>()
            .ok()
            .filter(|r| (MIN_RATING..=MAX_RATING).contains(r))
            .ok_or(DraftError::InvalidRating)?;

        Ok(Self {
            comment: comment.to_string(),
            rating,
        })
    }

    pub fn comment(&self) -> &str {
        &self.comment
    }

    pub fn rating(&self) -> u8 {
        self.rating
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn draft_trims_comment_and_parses_rating() {
        let draft = ReviewDraft::new("  Lovely flat  ", " 4 ").unwrap();
        assert_eq!(draft.comment(), "Lovely flat");
        assert_eq!(draft.rating(), 4);
    }

    #[test]
    fn draft_rejects_blank_comment() {
        assert_eq!(ReviewDraft::new("   ", "3"), Err(DraftError::EmptyComment));
    }

    #[test]
    fn draft_rejects_ratings_outside_one_to_five() {
        for rating in ["0", "6", "-1", "3.5", "", "five"] {
            assert_eq!(
                ReviewDraft::new("ok", rating),
                Err(DraftError::InvalidRating),
                "rating {rating:?} should be rejected"
            );
        }
    }

    #[test]
    fn draft_serializes_as_request_body() {
        let draft = ReviewDraft::new("Great host", "5").unwrap();
        let body = serde_json::to_value(&draft).unwrap();
        assert_eq!(body, serde_json::json!({ "comment": "Great host", "rating": 5 }));
    }

    #[test]
    fn review_accepts_alternate_field_names() {
        let review: Review =
            serde_json::from_str(r#"{"user_name":"Ana","text":"Nice","rating":4}"#).unwrap();
        assert_eq!(review.user, "Ana");
        assert_eq!(review.comment, "Nice");
        assert_eq!(review.rating, 4);
    }
}
