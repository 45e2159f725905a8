//! Canonical seed dataset for scenario tests.
//!
//! Inserts a fixed set of 3 topics, 4 users, 12 articles and 18 comments. Articles
//! and comments are inserted in declaration order so their generated ids are stable
//! (`article_id` 1..=12, `comment_id` 1..=18).
//!
//! Notable properties relied on by tests:
//! - `butter_bridge` authored 3 articles, `lurker` authored none
//! - the `paper` topic has no articles
//! - article 1 has 100 votes and 13 comments
//! - article 5 has 2 comments, article 2 has none

use chrono::{DateTime, Utc};
use sea_orm::{DatabaseConnection, DbErr};

use crate::factory::{
    article::ArticleFactory, comment::CommentFactory, topic::TopicFactory, user::UserFactory,
};

pub const TOPICS: &[(&str, &str)] = &[
    ("mitch", "The man, the Mitch, the legend"),
    ("cats", "Not dogs"),
    ("paper", "what books are made of"),
];

/// `(username, name, avatar_url)`
pub const USERS: &[(&str, &str, &str)] = &[
    (
        "butter_bridge",
        "jonny",
        "https://www.healthytherapies.com/wp-content/uploads/2016/06/Lime3.jpg",
    ),
    (
        "icellusedkars",
        "sam",
        "https://avatars2.githubusercontent.com/u/24604688?s=460&v=4",
    ),
    (
        "rogersop",
        "paul",
        "https://avatars2.githubusercontent.com/u/24394918?s=400&v=4",
    ),
    (
        "lurker",
        "do_nothing",
        "https://www.golenbock.com/wp-content/uploads/2015/01/placeholder-user.png",
    ),
];

struct SeedArticle {
    title: &'static str,
    topic: &'static str,
    author: &'static str,
    body: &'static str,
    created_at_ms: i64,
    votes: i64,
}

const ARTICLES: &[SeedArticle] = &[
    SeedArticle {
        title: "Living in the shadow of a great man",
        topic: "mitch",
        author: "butter_bridge",
        body: "I find this existence challenging",
        created_at_ms: 1_542_284_514_171,
        votes: 100,
    },
    SeedArticle {
        title: "Sony Vaio; or, The Laptop",
        topic: "mitch",
        author: "icellusedkars",
        body: "Call me Mitchell. Some years ago, never mind how long precisely, having little or no money in my purse, and nothing particular to interest me on shore, I thought I would buy a laptop about a little and see the codey part of the world.",
        created_at_ms: 1_416_140_514_171,
        votes: 0,
    },
    SeedArticle {
        title: "Eight pug gifs that remind me of mitch",
        topic: "mitch",
        author: "icellusedkars",
        body: "some gifs",
        created_at_ms: 1_289_996_514_171,
        votes: 0,
    },
    SeedArticle {
        title: "Student SUES Mitch!",
        topic: "mitch",
        author: "rogersop",
        body: "We all love Mitch and his wonderful, unique typing style. However, the volume of his typing has ALLEGEDLY burst another students eardrums, and they are now suing for damages",
        created_at_ms: 1_163_852_514_171,
        votes: 0,
    },
    SeedArticle {
        title: "UNCOVERED: catspiracy to bring down democracy",
        topic: "cats",
        author: "rogersop",
        body: "Bastet walks amongst us, and the cats are taking arms!",
        created_at_ms: 1_037_708_514_171,
        votes: 0,
    },
    SeedArticle {
        title: "A",
        topic: "mitch",
        author: "icellusedkars",
        body: "Delicious tin of cat food",
        created_at_ms: 911_564_514_171,
        votes: 0,
    },
    SeedArticle {
        title: "Z",
        topic: "mitch",
        author: "icellusedkars",
        body: "I was hungry.",
        created_at_ms: 785_420_514_171,
        votes: 0,
    },
    SeedArticle {
        title: "Does Mitch predate civilisation?",
        topic: "mitch",
        author: "icellusedkars",
        body: "Archaeologists have uncovered a gigantic statue from the dawn of humanity, and it has an uncanny resemblance to Mitch.",
        created_at_ms: 659_276_514_171,
        votes: 0,
    },
    SeedArticle {
        title: "They're not exactly dogs, are they?",
        topic: "mitch",
        author: "butter_bridge",
        body: "Well? Think about it.",
        created_at_ms: 533_132_514_171,
        votes: 0,
    },
    SeedArticle {
        title: "Seven inspirational thought leaders from Manchester UK",
        topic: "mitch",
        author: "rogersop",
        body: "Who are we kidding, there is only one, and it's Mitch!",
        created_at_ms: 406_988_514_171,
        votes: 0,
    },
    SeedArticle {
        title: "Am I a cat?",
        topic: "mitch",
        author: "icellusedkars",
        body: "Having run out of ideas for articles, I am staring at the wall blankly, like a cat. Does this make me a cat?",
        created_at_ms: 280_844_514_171,
        votes: 0,
    },
    SeedArticle {
        title: "Moustache",
        topic: "mitch",
        author: "butter_bridge",
        body: "Have you seen the size of that thing?",
        created_at_ms: 154_700_514_171,
        votes: 0,
    },
];

struct SeedComment {
    article_id: i32,
    author: &'static str,
    body: &'static str,
    votes: i64,
    created_at_ms: i64,
}

const COMMENTS: &[SeedComment] = &[
    SeedComment {
        article_id: 9,
        author: "butter_bridge",
        body: "Oh, I've got compassion running out of my nose, pal! I'm the Sultan of Sentiment!",
        votes: 16,
        created_at_ms: 1_511_354_163_389,
    },
    SeedComment {
        article_id: 1,
        author: "butter_bridge",
        body: "The beautiful thing about treasure is that it exists. Got to find out what kind of sheets these are; not cotton, not rayon, silky.",
        votes: 14,
        created_at_ms: 1_479_818_163_389,
    },
    SeedComment {
        article_id: 1,
        author: "icellusedkars",
        body: "Replacing the quiet elegance of the dark suit and tie with the casual indifference of these muted earth tones is a form of fashion suicide, but, uh, call me crazy, on you it works.",
        votes: 100,
        created_at_ms: 1_448_282_163_389,
    },
    SeedComment {
        article_id: 1,
        author: "icellusedkars",
        body: "I carry a log, yes. Is it funny to you? It is not to me.",
        votes: -100,
        created_at_ms: 1_416_746_163_389,
    },
    SeedComment {
        article_id: 1,
        author: "icellusedkars",
        body: "I hate streaming noses",
        votes: 0,
        created_at_ms: 1_385_210_163_389,
    },
    SeedComment {
        article_id: 1,
        author: "icellusedkars",
        body: "I hate streaming eyes even more",
        votes: 0,
        created_at_ms: 1_353_674_163_389,
    },
    SeedComment {
        article_id: 1,
        author: "icellusedkars",
        body: "Lobster pot",
        votes: 0,
        created_at_ms: 1_322_138_163_389,
    },
    SeedComment {
        article_id: 1,
        author: "icellusedkars",
        body: "Delicious crackerbreads",
        votes: 0,
        created_at_ms: 1_290_602_163_389,
    },
    SeedComment {
        article_id: 1,
        author: "icellusedkars",
        body: "Superficially charming",
        votes: 0,
        created_at_ms: 1_259_066_163_389,
    },
    SeedComment {
        article_id: 1,
        author: "icellusedkars",
        body: "git push origin master",
        votes: 0,
        created_at_ms: 1_227_530_163_389,
    },
    SeedComment {
        article_id: 1,
        author: "icellusedkars",
        body: "Ambidextrous marsupial",
        votes: 0,
        created_at_ms: 1_195_994_163_389,
    },
    SeedComment {
        article_id: 1,
        author: "icellusedkars",
        body: "Massive intercranial brain haemorrhage",
        votes: 0,
        created_at_ms: 1_164_458_163_389,
    },
    SeedComment {
        article_id: 1,
        author: "icellusedkars",
        body: "Fruit pastilles",
        votes: 0,
        created_at_ms: 1_132_922_163_389,
    },
    SeedComment {
        article_id: 1,
        author: "butter_bridge",
        body: "This morning, I showered for nine minutes.",
        votes: 16,
        created_at_ms: 975_242_163_389,
    },
    SeedComment {
        article_id: 5,
        author: "icellusedkars",
        body: "I am 100% sure that we're not completely sure.",
        votes: 1,
        created_at_ms: 1_069_850_163_389,
    },
    SeedComment {
        article_id: 5,
        author: "butter_bridge",
        body: "What do you see? I have no idea where this will lead us. This place I speak of, is known as the Black Lodge.",
        votes: 16,
        created_at_ms: 1_101_386_163_389,
    },
    SeedComment {
        article_id: 9,
        author: "icellusedkars",
        body: "The owls are not what they seem.",
        votes: 20,
        created_at_ms: 1_006_778_163_389,
    },
    SeedComment {
        article_id: 6,
        author: "icellusedkars",
        body: "This is a bad article name",
        votes: 1,
        created_at_ms: 1_038_314_163_389,
    },
];

fn timestamp(ms: i64) -> Result<DateTime<Utc>, DbErr> {
    DateTime::<Utc>::from_timestamp_millis(ms)
        .ok_or_else(|| DbErr::Custom(format!("Invalid seed timestamp {}", ms)))
}

/// Inserts the canonical dataset into an empty news schema.
///
/// The tables must already exist (see `TestBuilder::with_news_tables`) and be empty,
/// otherwise generated ids will not line up with the documented values.
///
/// # Arguments
/// - `db` - Database connection
///
/// # Returns
/// - `Ok(())` - All rows inserted
/// - `Err(DbErr)` - Database error during insertion
pub async fn seed_news_data(db: &DatabaseConnection) -> Result<(), DbErr> {
    for (slug, description) in TOPICS {
        TopicFactory::new(db)
            .slug(*slug)
            .description(*description)
            .build()
            .await?;
    }

    for (username, name, avatar_url) in USERS {
        UserFactory::new(db)
            .username(*username)
            .name(*name)
            .avatar_url(*avatar_url)
            .build()
            .await?;
    }

    for article in ARTICLES {
        ArticleFactory::new(db, article.topic, article.author)
            .title(article.title)
            .body(article.body)
            .created_at(timestamp(article.created_at_ms)?)
            .votes(article.votes)
            .build()
            .await?;
    }

    for comment in COMMENTS {
        CommentFactory::new(db, comment.article_id, comment.author)
            .body(comment.body)
            .created_at(timestamp(comment.created_at_ms)?)
            .votes(comment.votes)
            .build()
            .await?;
    }

    Ok(())
}
