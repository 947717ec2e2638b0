//! Run configuration for the greedy assignment.

use std::fmt;
use std::str::FromStr;
use std::sync::Arc;
use std::time::Duration;

/// A logger used to report progress of a run.
pub type InfoLogger = Arc<dyn Fn(&str) + Send + Sync>;

/// Decides how the job charged at an iteration relates to the location visited.
///
/// Iteration `k` always charges the demand of job `k`. The strategies differ
/// in which location the selected vehicle is sent to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AssignmentStrategy {
    /// Vehicles compete for job `k`'s own location; the visited location is
    /// always the charged job.
    #[default]
    JobOrder,
    /// Vehicles compete for the nearest unconsumed job location; the visited
    /// location may belong to a different job than the one charged.
    NearestLocation,
}

impl AssignmentStrategy {
    /// Name used on the command line.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::JobOrder => "job-order",
            Self::NearestLocation => "nearest-location",
        }
    }
}

impl FromStr for AssignmentStrategy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "job-order" => Ok(Self::JobOrder),
            "nearest-location" => Ok(Self::NearestLocation),
            _ => Err(format!("unknown assignment strategy: '{s}'")),
        }
    }
}

/// How routes are keyed in the serialized output.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RouteKey {
    /// By the vehicle's declared identifier. Identifiers must be unique.
    #[default]
    Id,
    /// By the vehicle's 1-based position in the input list.
    Position,
}

impl RouteKey {
    /// Name used on the command line.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Id => "id",
            Self::Position => "position",
        }
    }
}

impl FromStr for RouteKey {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "id" => Ok(Self::Id),
            "position" => Ok(Self::Position),
            _ => Err(format!("unknown route key: '{s}'")),
        }
    }
}

/// Configuration of a single assignment run.
///
/// # Examples
///
/// ```
/// use std::time::Duration;
/// use u_dispatch::config::{AssignmentConfig, AssignmentStrategy, RouteKey};
///
/// let config = AssignmentConfig::new()
///     .with_strategy(AssignmentStrategy::NearestLocation)
///     .with_route_key(RouteKey::Position)
///     .with_max_time(Duration::from_secs(5));
/// assert_eq!(config.strategy(), AssignmentStrategy::NearestLocation);
/// assert_eq!(config.max_time(), Some(Duration::from_secs(5)));
/// ```
#[derive(Clone)]
pub struct AssignmentConfig {
    strategy: AssignmentStrategy,
    route_key: RouteKey,
    max_time: Option<Duration>,
    logger: InfoLogger,
}

impl AssignmentConfig {
    /// Creates a default configuration: job-order strategy, routes keyed by
    /// id, no time limit, silent logger.
    pub fn new() -> Self {
        Self {
            strategy: AssignmentStrategy::default(),
            route_key: RouteKey::default(),
            max_time: None,
            logger: Arc::new(|_| {}),
        }
    }

    /// Sets the assignment strategy.
    pub fn with_strategy(mut self, strategy: AssignmentStrategy) -> Self {
        self.strategy = strategy;
        self
    }

    /// Sets the output route key convention.
    pub fn with_route_key(mut self, route_key: RouteKey) -> Self {
        self.route_key = route_key;
        self
    }

    /// Sets a time limit checked between iterations.
    pub fn with_max_time(mut self, max_time: Duration) -> Self {
        self.max_time = Some(max_time);
        self
    }

    /// Sets the logger.
    pub fn with_logger(mut self, logger: InfoLogger) -> Self {
        self.logger = logger;
        self
    }

    /// Assignment strategy.
    pub fn strategy(&self) -> AssignmentStrategy {
        self.strategy
    }

    /// Output route key convention.
    pub fn route_key(&self) -> RouteKey {
        self.route_key
    }

    /// Time limit, if any.
    pub fn max_time(&self) -> Option<Duration> {
        self.max_time
    }

    /// Writes a message to the configured logger.
    pub fn log(&self, message: &str) {
        (self.logger)(message)
    }
}

impl Default for AssignmentConfig {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for AssignmentConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AssignmentConfig")
            .field("strategy", &self.strategy)
            .field("route_key", &self.route_key)
            .field("max_time", &self.max_time)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Mutex;

    #[test]
    fn test_defaults() {
        let config = AssignmentConfig::default();
        assert_eq!(config.strategy(), AssignmentStrategy::JobOrder);
        assert_eq!(config.route_key(), RouteKey::Id);
        assert!(config.max_time().is_none());
    }

    #[test]
    fn test_parse_names() {
        for strategy in [AssignmentStrategy::JobOrder, AssignmentStrategy::NearestLocation] {
            assert_eq!(strategy.as_str().parse::<AssignmentStrategy>(), Ok(strategy));
        }
        for key in [RouteKey::Id, RouteKey::Position] {
            assert_eq!(key.as_str().parse::<RouteKey>(), Ok(key));
        }
        assert!("nearest".parse::<AssignmentStrategy>().is_err());
        assert!("index".parse::<RouteKey>().is_err());
    }

    #[test]
    fn test_logger_receives_messages() {
        let lines = Arc::new(Mutex::new(Vec::new()));
        let sink = lines.clone();
        let config = AssignmentConfig::new().with_logger(Arc::new(move |msg: &str| {
            sink.lock().expect("lock").push(msg.to_string());
        }));

        config.log("hello");

        assert_eq!(*lines.lock().expect("lock"), vec!["hello".to_string()]);
    }
}
