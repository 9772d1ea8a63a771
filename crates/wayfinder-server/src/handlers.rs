//! REST API handlers for the Wayfinder server

use std::collections::BTreeMap;
use std::sync::Arc;

use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Json, Response},
};
use serde::{Deserialize, Serialize};
use tracing::debug;

use axum_extra::extract::Query;
use wayfinder_campus::{CampusError, Point};

use crate::ServerState;

/// Query parameters for the path endpoint
#[derive(Debug, Deserialize)]
pub struct PathQuery {
    pub start: String,
    pub end: String,
}

/// One traversed segment in a path response
#[derive(Debug, Serialize)]
pub struct SegmentResponse {
    pub start: Point,
    pub end: Point,
    pub cost: f64,
}

/// A computed route between two buildings
#[derive(Debug, Serialize)]
pub struct RouteResponse {
    pub start: Point,
    pub segments: Vec<SegmentResponse>,
    pub cost: f64,
}

/// Response for the path endpoint. `path` is `null` when the buildings are
/// not connected, which is a valid outcome served with status 200.
#[derive(Debug, Serialize)]
pub struct PathResponse {
    pub path: Option<RouteResponse>,
}

/// Health check response
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
}

/// Client-visible rejection, serialized as a JSON body.
#[derive(Debug, Serialize)]
pub struct ApiError {
    pub error: String,
    #[serde(skip)]
    pub status: StatusCode,
}

impl ApiError {
    fn bad_request(message: impl Into<String>) -> Self {
        ApiError {
            error: message.into(),
            status: StatusCode::BAD_REQUEST,
        }
    }

    fn internal(message: impl Into<String>) -> Self {
        ApiError {
            error: message.into(),
            status: StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        (self.status, Json(self)).into_response()
    }
}

impl From<CampusError> for ApiError {
    fn from(err: CampusError) -> Self {
        match &err {
            CampusError::UnknownBuilding(_) => ApiError::bad_request(err.to_string()),
            // Construction faults cannot occur after startup; anything else
            // here is a server-side defect.
            _ => ApiError::internal(err.to_string()),
        }
    }
}

/// List all buildings as a short name → long name mapping
pub async fn list_buildings(
    State(state): State<Arc<ServerState>>,
) -> Json<BTreeMap<String, String>> {
    Json(state.map.building_names().clone())
}

/// Compute the shortest path between two buildings given by short name
pub async fn get_path(
    State(state): State<Arc<ServerState>>,
    Query(query): Query<PathQuery>,
) -> Result<Json<PathResponse>, ApiError> {
    if query.start.is_empty() || query.end.is_empty() {
        return Err(ApiError::bad_request("start and end must be non-empty"));
    }

    debug!(start = %query.start, end = %query.end, "path request");

    let path = state.map.find_shortest_path(&query.start, &query.end)?;
    let route = path.map(|p| RouteResponse {
        start: *p.start(),
        cost: p.cost(),
        segments: p
            .edges()
            .iter()
            .map(|e| SegmentResponse {
                start: e.src,
                end: e.dst,
                cost: e.label,
            })
            .collect(),
    });

    Ok(Json(PathResponse { path: route }))
}

/// Health check endpoint
pub async fn health_check() -> impl IntoResponse {
    let health = HealthResponse {
        status: "ok".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
    };
    Json(health)
}

#[cfg(test)]
mod tests {
    use super::*;
    use wayfinder_campus::{CampusBuilding, CampusMap, CampusSegment};

    fn test_state() -> Arc<ServerState> {
        let buildings = vec![
            CampusBuilding {
                short_name: "LIB".to_string(),
                long_name: "Main Library".to_string(),
                x: 0.0,
                y: 0.0,
            },
            CampusBuilding {
                short_name: "GYM".to_string(),
                long_name: "Recreation Center".to_string(),
                x: 3.0,
                y: 4.0,
            },
            CampusBuilding {
                short_name: "OBS".to_string(),
                long_name: "Hilltop Observatory".to_string(),
                x: 99.0,
                y: 99.0,
            },
        ];
        let segments = vec![CampusSegment {
            x1: 0.0,
            y1: 0.0,
            x2: 3.0,
            y2: 4.0,
            distance: 5.0,
        }];
        let map = CampusMap::build(buildings, segments).unwrap();
        Arc::new(ServerState::new(map))
    }

    #[tokio::test]
    async fn buildings_handler_lists_all_names() {
        let Json(names) = list_buildings(State(test_state())).await;
        assert_eq!(names.len(), 3);
        assert_eq!(names.get("LIB").map(String::as_str), Some("Main Library"));
    }

    #[tokio::test]
    async fn path_handler_returns_route() {
        let query = PathQuery {
            start: "LIB".to_string(),
            end: "GYM".to_string(),
        };
        let Json(response) = get_path(State(test_state()), Query(query)).await.unwrap();
        let route = response.path.unwrap();
        assert_eq!(route.cost, 5.0);
        assert_eq!(route.segments.len(), 1);
        assert_eq!(route.segments[0].end, Point::new(3.0, 4.0));
    }

    #[tokio::test]
    async fn path_handler_serves_null_for_disconnected_buildings() {
        let query = PathQuery {
            start: "LIB".to_string(),
            end: "OBS".to_string(),
        };
        let Json(response) = get_path(State(test_state()), Query(query)).await.unwrap();
        assert!(response.path.is_none());
    }

    #[tokio::test]
    async fn path_handler_rejects_unknown_building() {
        let query = PathQuery {
            start: "LIB".to_string(),
            end: "XYZ".to_string(),
        };
        let err = get_path(State(test_state()), Query(query)).await.unwrap_err();
        assert_eq!(err.status, StatusCode::BAD_REQUEST);
        assert!(err.error.contains("XYZ"));
    }

    #[tokio::test]
    async fn path_handler_rejects_empty_params() {
        let query = PathQuery {
            start: String::new(),
            end: "GYM".to_string(),
        };
        let err = get_path(State(test_state()), Query(query)).await.unwrap_err();
        assert_eq!(err.status, StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn health_returns_ok() {
        let _response = health_check().await;
    }
}
