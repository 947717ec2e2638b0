//! HTTP endpoint serving the assignment.
//!
//! `POST /create-routes-service` takes a problem in json format and answers
//! with the solution, or with an [`ErrorOutput`] and a matching status code.
//! Every request deserializes its own problem, so concurrent requests never
//! share vehicle or matrix state.

use std::io::BufReader;
use warp::http::StatusCode;
use warp::hyper::body::Bytes;
use warp::{Filter, Rejection, Reply};

use crate::config::AssignmentConfig;
use crate::constructive::greedy_assignment;
use crate::error::RoutingError;
use crate::format::{read_problem, ErrorDetail, ErrorOutput, SolutionOutput};

const MAX_BODY_BYTES: u64 = 64 * 1024 * 1024;

fn status_for(err: &RoutingError) -> StatusCode {
    match err {
        RoutingError::MalformedInput { .. } | RoutingError::DegenerateMatrix { .. } => {
            StatusCode::BAD_REQUEST
        }
        RoutingError::InfeasibleAssignment { .. } => StatusCode::UNPROCESSABLE_ENTITY,
        RoutingError::Interrupted { .. } => StatusCode::SERVICE_UNAVAILABLE,
    }
}

async fn handle(body: Bytes, config: AssignmentConfig) -> Result<impl Reply, Rejection> {
    config.log(&format!("received problem of {} bytes", body.len()));
    let route_key = config.route_key();
    let logger = config.clone();

    let result = tokio::task::spawn_blocking(move || {
        let problem = read_problem(BufReader::new(&body[..]))?;
        greedy_assignment(&problem, &config).map(|solution| SolutionOutput::new(&solution, route_key))
    })
    .await;

    let reply = match result {
        Ok(Ok(output)) => warp::reply::with_status(warp::reply::json(&output), StatusCode::OK),
        Ok(Err(err)) => {
            logger.log(&format!("request failed: {err}"));
            warp::reply::with_status(warp::reply::json(&ErrorOutput::from(&err)), status_for(&err))
        }
        Err(err) => {
            logger.log(&format!("assignment task failed: {err}"));
            let output = ErrorOutput {
                error: ErrorDetail {
                    kind: "Internal".to_string(),
                    message: err.to_string(),
                },
            };
            warp::reply::with_status(warp::reply::json(&output), StatusCode::INTERNAL_SERVER_ERROR)
        }
    };

    Ok(reply)
}

/// Builds the `POST /create-routes-service` filter.
pub fn create_routes_service(
    config: AssignmentConfig,
) -> impl Filter<Extract = (impl Reply,), Error = Rejection> + Clone {
    warp::path("create-routes-service")
        .and(warp::path::end())
        .and(warp::post())
        .and(warp::body::content_length_limit(MAX_BODY_BYTES))
        .and(warp::body::bytes())
        .and_then(move |body: Bytes| handle(body, config.clone()))
}

/// Serves the endpoint on all interfaces at `port` until the process stops.
pub async fn serve(port: u16, config: AssignmentConfig) {
    config.log(&format!("starting webserver on port {port}"));
    warp::serve(create_routes_service(config))
        .run(([0, 0, 0, 0], port))
        .await;
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::{json, Value};

    fn problem_body(capacity: i64) -> Value {
        json!({
            "vehicles": [{ "id": 1, "capacity": [capacity], "start_index": 0 }],
            "jobs": [{ "delivery": [3] }, { "delivery": [4] }],
            "matrix": [[0, 5, 5], [5, 0, 1], [5, 1, 0]]
        })
    }

    #[tokio::test]
    async fn test_solves_problem() {
        let filter = create_routes_service(AssignmentConfig::new());
        let res = warp::test::request()
            .method("POST")
            .path("/create-routes-service")
            .json(&problem_body(10))
            .reply(&filter)
            .await;

        assert_eq!(res.status(), StatusCode::OK);
        let body: Value = serde_json::from_slice(res.body()).expect("json");
        assert_eq!(body["total_delivery_duration"], json!(6.0));
        assert_eq!(body["routes"]["1"]["jobs"], json!([1, 2]));
    }

    #[tokio::test]
    async fn test_infeasible_is_unprocessable() {
        let filter = create_routes_service(AssignmentConfig::new());
        let res = warp::test::request()
            .method("POST")
            .path("/create-routes-service")
            .json(&problem_body(0))
            .reply(&filter)
            .await;

        assert_eq!(res.status(), StatusCode::UNPROCESSABLE_ENTITY);
        let body: Value = serde_json::from_slice(res.body()).expect("json");
        assert_eq!(body["error"]["kind"], "InfeasibleAssignment");
    }

    #[tokio::test]
    async fn test_bad_json_is_bad_request() {
        let filter = create_routes_service(AssignmentConfig::new());
        let res = warp::test::request()
            .method("POST")
            .path("/create-routes-service")
            .body("{ \"vehicles\": ")
            .reply(&filter)
            .await;

        assert_eq!(res.status(), StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_rejects_get() {
        let filter = create_routes_service(AssignmentConfig::new());
        let res = warp::test::request()
            .method("GET")
            .path("/create-routes-service")
            .reply(&filter)
            .await;

        assert_eq!(res.status(), StatusCode::METHOD_NOT_ALLOWED);
    }
}
