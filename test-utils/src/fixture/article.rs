//! Article fixtures for creating in-memory test data.

use chrono::{DateTime, Utc};
use entity::article;

/// Default test article title.
pub const DEFAULT_TITLE: &str = "Living in the shadow of a great man";

/// Default test article body.
pub const DEFAULT_BODY: &str = "I find this existence challenging";

/// Default creation time of the fixture article in milliseconds since the epoch.
pub const DEFAULT_CREATED_AT_MS: i64 = 1_542_284_514_171;

/// Creates an article entity model with default values.
///
/// # Default Values
/// - article_id: `1`
/// - title: `"Living in the shadow of a great man"`
/// - topic: `"mitch"`
/// - author: `"butter_bridge"`
/// - created_at: `2018-11-15T12:21:54.171Z`
/// - votes: `100`
///
/// # Returns
/// - `article::Model` - In-memory article entity
pub fn entity() -> article::Model {
    article::Model {
        article_id: 1,
        title: DEFAULT_TITLE.to_string(),
        body: DEFAULT_BODY.to_string(),
        topic: "mitch".to_string(),
        author: "butter_bridge".to_string(),
        created_at: DateTime::<Utc>::from_timestamp_millis(DEFAULT_CREATED_AT_MS)
            .unwrap_or_default(),
        votes: 100,
    }
}
