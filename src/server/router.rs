use axum::{
    routing::{get, patch},
    Router,
};
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};
use utoipa::OpenApi;

use crate::{
    model::{
        api::{EndpointDto, EndpointsDto, ErrorDto},
        article::{
            ArticleDto, ArticleSummaryDto, PaginatedArticlesDto, PatchVotesDto, SingleArticleDto,
        },
        comment::{CommentDto, CommentsDto, PostCommentDto, SingleCommentDto},
        topic::{TopicDto, TopicsDto},
        user::{SingleUserDto, UserDto, UsersDto},
    },
    server::{
        controller::{
            api, article, comment,
            fallback::{method_not_allowed, route_not_found},
            topic, user,
        },
        state::AppState,
    },
};

#[derive(OpenApi)]
#[openapi(
    paths(
        api::get_endpoints,
        topic::get_topics,
        user::get_users,
        user::get_user,
        article::get_articles,
        article::get_article,
        article::patch_article,
        comment::get_article_comments,
        comment::post_comment,
        comment::patch_comment,
        comment::delete_comment,
    ),
    components(schemas(
        ErrorDto,
        EndpointDto,
        EndpointsDto,
        TopicDto,
        TopicsDto,
        UserDto,
        UsersDto,
        SingleUserDto,
        ArticleDto,
        ArticleSummaryDto,
        PaginatedArticlesDto,
        SingleArticleDto,
        PatchVotesDto,
        CommentDto,
        CommentsDto,
        SingleCommentDto,
        PostCommentDto,
    ))
)]
pub struct ApiDoc;

/// Builds the API router.
///
/// Every route answers unsupported methods with 405 and any unmatched path falls
/// through to a 404. Requests are traced and CORS is open to all origins.
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/api", get(api::get_endpoints).fallback(method_not_allowed))
        .route(
            "/api/openapi.json",
            get(api::get_openapi).fallback(method_not_allowed),
        )
        .route(
            "/api/topics",
            get(topic::get_topics).fallback(method_not_allowed),
        )
        .route(
            "/api/users",
            get(user::get_users).fallback(method_not_allowed),
        )
        .route(
            "/api/users/{username}",
            get(user::get_user).fallback(method_not_allowed),
        )
        .route(
            "/api/articles",
            get(article::get_articles).fallback(method_not_allowed),
        )
        .route(
            "/api/articles/{article_id}",
            get(article::get_article)
                .patch(article::patch_article)
                .fallback(method_not_allowed),
        )
        .route(
            "/api/articles/{article_id}/comments",
            get(comment::get_article_comments)
                .post(comment::post_comment)
                .fallback(method_not_allowed),
        )
        .route(
            "/api/comments/{comment_id}",
            patch(comment::patch_comment)
                .delete(comment::delete_comment)
                .fallback(method_not_allowed),
        )
        .fallback(route_not_found)
        .layer(TraceLayer::new_for_http())
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
}
