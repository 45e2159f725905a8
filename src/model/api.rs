use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use utoipa::ToSchema;

/// Body of every failed request.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ErrorDto {
    pub msg: String,
}

/// One entry of the self-description returned by `GET /api`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct EndpointDto {
    pub description: String,
    /// Accepted query parameters, omitted when the endpoint takes none.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub queries: Option<Vec<String>>,
}

/// Endpoints keyed by `"<METHOD> <path>"`.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct EndpointsDto {
    pub endpoints: BTreeMap<String, EndpointDto>,
}
