//! Solution and error output in json format.

use serde::ser::SerializeMap;
use serde::{Serialize, Serializer};
use std::io::{BufWriter, Write};

use crate::config::RouteKey;
use crate::error::RoutingError;
use crate::models::{Route, Solution};

/// A single vehicle's route.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct RouteOutput {
    /// Visited matrix locations in order.
    pub jobs: Vec<usize>,
    /// Cumulative travel time of the route.
    pub delivery_duration: f64,
}

/// Routes keyed by vehicle, serialized as a json object in vehicle input order.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct RouteMap(pub Vec<(String, RouteOutput)>);

impl RouteMap {
    /// Returns the route stored under `key`.
    pub fn get(&self, key: &str) -> Option<&RouteOutput> {
        self.0.iter().find(|(k, _)| k == key).map(|(_, route)| route)
    }
}

impl Serialize for RouteMap {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.0.len()))?;
        for (key, route) in &self.0 {
            map.serialize_entry(key, route)?;
        }
        map.end()
    }
}

/// A solution in json format.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct SolutionOutput {
    /// Sum of all route durations.
    pub total_delivery_duration: f64,
    /// One route per vehicle.
    pub routes: RouteMap,
    /// Positions of jobs whose location no vehicle visited.
    pub unassigned: Vec<usize>,
}

fn route_key(route: &Route, key: RouteKey) -> String {
    match key {
        RouteKey::Id => route.vehicle_id().to_string(),
        RouteKey::Position => (route.vehicle() + 1).to_string(),
    }
}

impl SolutionOutput {
    /// Builds the json view of a solution with routes keyed by `key`.
    pub fn new(solution: &Solution, key: RouteKey) -> Self {
        let routes = solution
            .routes()
            .iter()
            .map(|route| {
                (
                    route_key(route, key),
                    RouteOutput {
                        jobs: route.locations(),
                        delivery_duration: route.duration(),
                    },
                )
            })
            .collect();

        Self {
            total_delivery_duration: solution.total_duration(),
            routes: RouteMap(routes),
            unassigned: solution.unassigned().to_vec(),
        }
    }
}

/// Error details in json format.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct ErrorDetail {
    /// Error kind, e.g. `MalformedInput`.
    pub kind: String,
    /// Human readable message.
    pub message: String,
}

/// An error response in json format.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct ErrorOutput {
    /// Error details.
    pub error: ErrorDetail,
}

impl From<&RoutingError> for ErrorOutput {
    fn from(err: &RoutingError) -> Self {
        Self {
            error: ErrorDetail {
                kind: err.kind().to_string(),
                message: err.to_string(),
            },
        }
    }
}

/// Writes a solution in json format.
///
/// The buffer is flushed before returning so that a failed write is reported
/// instead of being lost on drop.
pub fn write_solution<W: Write>(
    mut writer: BufWriter<W>,
    solution: &Solution,
    key: RouteKey,
) -> serde_json::Result<()> {
    serde_json::to_writer_pretty(&mut writer, &SolutionOutput::new(solution, key))?;
    writer.flush().map_err(serde_json::Error::io)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Commit, Vehicle};
    use serde_json::json;

    fn solution() -> Solution {
        let vehicles = vec![Vehicle::new(7, 10), Vehicle::new("b", 10)];
        let mut sol = Solution::new(&vehicles, 2);
        sol.commit(Commit {
            vehicle: 1,
            job: 0,
            demand: 2,
            location: 2,
            duration: 4.0,
        });
        sol.commit(Commit {
            vehicle: 1,
            job: 1,
            demand: 2,
            location: 3,
            duration: 1.5,
        });
        sol.add_unassigned(2);
        sol
    }

    #[test]
    fn test_keyed_by_id() {
        let value = serde_json::to_value(SolutionOutput::new(&solution(), RouteKey::Id))
            .expect("serializable");
        assert_eq!(
            value,
            json!({
                "total_delivery_duration": 5.5,
                "routes": {
                    "7": { "jobs": [], "delivery_duration": 0.0 },
                    "b": { "jobs": [2, 3], "delivery_duration": 5.5 }
                },
                "unassigned": [2]
            })
        );
    }

    #[test]
    fn test_keyed_by_position() {
        let output = SolutionOutput::new(&solution(), RouteKey::Position);
        assert_eq!(output.routes.get("2").map(|r| r.jobs.clone()), Some(vec![2, 3]));
        assert!(output.routes.get("1").is_some_and(|r| r.jobs.is_empty()));
        assert!(output.routes.get("b").is_none());
    }

    #[test]
    fn test_routes_keep_vehicle_order() {
        let vehicles = vec![Vehicle::new(10, 1), Vehicle::new(2, 1)];
        let sol = Solution::new(&vehicles, 0);
        let text = serde_json::to_string(&SolutionOutput::new(&sol, RouteKey::Id))
            .expect("serializable");
        let first = text.find("\"10\"").expect("key 10");
        let second = text.find("\"2\"").expect("key 2");
        assert!(first < second);
    }

    #[test]
    fn test_write_solution() {
        let mut buffer = Vec::new();
        write_solution(BufWriter::new(&mut buffer), &solution(), RouteKey::Id)
            .expect("writes");
        let value: serde_json::Value = serde_json::from_slice(&buffer).expect("json");
        assert_eq!(value["routes"]["b"]["jobs"], json!([2, 3]));
    }

    struct FullDevice;

    impl Write for FullDevice {
        fn write(&mut self, _: &[u8]) -> std::io::Result<usize> {
            Err(std::io::Error::new(std::io::ErrorKind::Other, "no space left on device"))
        }

        fn flush(&mut self) -> std::io::Result<()> {
            Ok(())
        }
    }

    #[test]
    fn test_write_solution_reports_io_error() {
        let err = write_solution(BufWriter::new(FullDevice), &solution(), RouteKey::Id)
            .expect_err("device is full");
        assert!(err.is_io());
        assert!(err.to_string().contains("no space left"));
    }

    #[test]
    fn test_error_output() {
        let err = RoutingError::DegenerateMatrix { row: 1, column: 2 };
        let value = serde_json::to_value(ErrorOutput::from(&err)).expect("serializable");
        assert_eq!(value["error"]["kind"], "DegenerateMatrix");
    }
}
