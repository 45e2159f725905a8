use std::{collections::BTreeMap, sync::LazyLock};

use axum::{http::StatusCode, response::IntoResponse, Json};
use utoipa::{
    openapi::{path::ParameterIn, OpenApi as OpenApiDoc},
    OpenApi,
};

use crate::{
    model::api::{EndpointDto, EndpointsDto},
    server::router::ApiDoc,
};

/// Tag for grouping API description endpoints in OpenAPI documentation
pub static API_TAG: &str = "api";

static OPENAPI: LazyLock<OpenApiDoc> = LazyLock::new(ApiDoc::openapi);

static ENDPOINTS: LazyLock<EndpointsDto> = LazyLock::new(|| EndpointsDto {
    endpoints: describe_endpoints(&OPENAPI),
});

/// Describes every endpoint the API serves.
///
/// Built from the OpenAPI document, keyed by `"<METHOD> <path>"`.
#[utoipa::path(
    get,
    path = "/api",
    tag = API_TAG,
    responses(
        (status = 200, description = "Successfully described endpoints", body = EndpointsDto)
    ),
)]
pub async fn get_endpoints() -> impl IntoResponse {
    (StatusCode::OK, Json(&*ENDPOINTS))
}

/// Serves the OpenAPI document.
pub async fn get_openapi() -> impl IntoResponse {
    (StatusCode::OK, Json(&*OPENAPI))
}

/// Flattens an OpenAPI document into one entry per method and path.
///
/// The description is the operation summary, falling back to its description. Query
/// parameters are listed in declaration order.
pub fn describe_endpoints(doc: &OpenApiDoc) -> BTreeMap<String, EndpointDto> {
    let mut endpoints = BTreeMap::new();

    for (path, item) in doc.paths.paths.iter() {
        let operations = [
            ("GET", &item.get),
            ("POST", &item.post),
            ("PUT", &item.put),
            ("PATCH", &item.patch),
            ("DELETE", &item.delete),
        ];

        for (method, operation) in operations {
            let Some(operation) = operation else {
                continue;
            };

            let description = operation
                .summary
                .clone()
                .or_else(|| operation.description.clone())
                .unwrap_or_default();

            let queries: Vec<String> = operation
                .parameters
                .iter()
                .flatten()
                .filter(|p| matches!(p.parameter_in, ParameterIn::Query))
                .map(|p| p.name.clone())
                .collect();

            endpoints.insert(
                format!("{} {}", method, path),
                EndpointDto {
                    description,
                    queries: (!queries.is_empty()).then_some(queries),
                },
            );
        }
    }

    endpoints
}
