use chrono::{DateTime, Utc};
use thiserror::Error;

use crate::models::{Review, ReviewCategory};

pub const MAX_RATING: u8 = 5;

/// Form input for a new review. A rating of 0 means none was picked; the
/// rating stays wide until validated so any out-of-range value is reported
/// as such.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReviewDraft {
    pub category: ReviewCategory,
    pub name: String,
    pub review: String,
    pub rating: i64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ReviewRejection {
    #[error("Please fill out all fields!")]
    MissingFields,
    #[error("Rating must be between 1 and 5")]
    RatingOutOfRange,
}

/// Submitted reviews in submission order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ReviewBook {
    reviews: Vec<Review>,
}

impl ReviewBook {
    pub fn from_reviews(reviews: Vec<Review>) -> Self {
        Self { reviews }
    }

    pub fn reviews(&self) -> &[Review] {
        &self.reviews
    }

    pub fn len(&self) -> usize {
        self.reviews.len()
    }

    pub fn is_empty(&self) -> bool {
        self.reviews.is_empty()
    }

    pub fn submit(&mut self, draft: ReviewDraft, now: DateTime<Utc>) -> Result<&Review, ReviewRejection> {
        let name = draft.name.trim();
        let body = draft.review.trim();
        if name.is_empty() || body.is_empty() || draft.rating == 0 {
            return Err(ReviewRejection::MissingFields);
        }
        let rating = u8::try_from(draft.rating)
            .ok()
            .filter(|rating| (1..=MAX_RATING).contains(rating))
            .ok_or(ReviewRejection::RatingOutOfRange)?;

        let review = Review {
            id: self.next_id(now.timestamp_millis()),
            category: draft.category,
            name: name.to_string(),
            review: body.to_string(),
            rating,
            date: now.date_naive(),
        };
        self.reviews.push(review);
        Ok(&self.reviews[self.reviews.len() - 1])
    }

    /// Returns whether a review was removed.
    pub fn delete(&mut self, id: i64) -> bool {
        let before = self.reviews.len();
        self.reviews.retain(|review| review.id != id);
        self.reviews.len() != before
    }

    pub fn by_category(&self, category: ReviewCategory) -> Vec<Review> {
        self.reviews
            .iter()
            .filter(|review| review.category == category)
            .cloned()
            .collect()
    }

    // Millisecond timestamps collide when two reviews land in the same
    // millisecond or the clock steps back.
    fn next_id(&self, now_millis: i64) -> i64 {
        match self.reviews.iter().map(|review| review.id).max() {
            Some(last) if now_millis <= last => last + 1,
            _ => now_millis,
        }
    }
}
