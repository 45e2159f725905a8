//! Comment fixtures for creating in-memory test data.

use chrono::{DateTime, Utc};
use entity::comment;

/// Default test comment body.
pub const DEFAULT_BODY: &str =
    "Oh, I've got compassion running out of my nose, pal! I'm the Sultan of Sentiment!";

/// Default creation time of the fixture comment in milliseconds since the epoch.
pub const DEFAULT_CREATED_AT_MS: i64 = 1_511_354_163_389;

/// Creates a comment entity model with default values.
///
/// # Default Values
/// - comment_id: `1`
/// - article_id: `9`
/// - author: `"butter_bridge"`
/// - votes: `16`
///
/// # Returns
/// - `comment::Model` - In-memory comment entity
pub fn entity() -> comment::Model {
    comment::Model {
        comment_id: 1,
        author: "butter_bridge".to_string(),
        article_id: 9,
        votes: 16,
        created_at: DateTime::<Utc>::from_timestamp_millis(DEFAULT_CREATED_AT_MS)
            .unwrap_or_default(),
        body: DEFAULT_BODY.to_string(),
    }
}
