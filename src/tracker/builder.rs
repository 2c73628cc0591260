//! Builder API for creating history trackers.

use crate::core::Record;
use crate::tracker::config::{EchoPolicy, TrackerConfig};
use crate::tracker::error::BuildError;
use crate::tracker::HistoryTracker;

/// Builder for creating a [`HistoryTracker`].
///
/// # Example
///
/// ```rust
/// use formstate::core::Record;
/// use formstate::tracker::{EchoPolicy, TrackerBuilder};
/// use serde::{Deserialize, Serialize};
///
/// #[derive(Clone, PartialEq, Debug, Serialize, Deserialize)]
/// struct Login { user: String, remember: bool }
///
/// impl Record for Login {
///     fn blank() -> Self { Self { user: String::new(), remember: false } }
/// }
///
/// let tracker = TrackerBuilder::<Login>::new()
///     .capacity(50)
///     .skip_duplicates(true)
///     .echo_policy(EchoPolicy::AbsorbMatching)
///     .build()
///     .unwrap();
///
/// assert_eq!(tracker.config().capacity, Some(50));
/// ```
pub struct TrackerBuilder<R: Record> {
    config: TrackerConfig,
    baseline: Option<R>,
}

impl<R: Record> TrackerBuilder<R> {
    pub fn new() -> Self {
        Self {
            config: TrackerConfig::default(),
            baseline: None,
        }
    }

    /// Set the maximum number of retained snapshots
    pub fn capacity(mut self, n: usize) -> Self {
        self.config.capacity = Some(n);
        self
    }

    /// Ignore edits that equal the newest snapshot
    pub fn skip_duplicates(mut self, skip: bool) -> Self {
        self.config.skip_duplicates = skip;
        self
    }

    /// Set how a redo echo is classified
    pub fn echo_policy(mut self, policy: EchoPolicy) -> Self {
        self.config.echo_policy = policy;
        self
    }

    /// Replace the whole configuration
    pub fn config(mut self, config: TrackerConfig) -> Self {
        self.config = config;
        self
    }

    /// Override the record returned once undo runs past the oldest
    /// snapshot. Defaults to `R::blank()`.
    pub fn baseline(mut self, record: R) -> Self {
        self.baseline = Some(record);
        self
    }

    /// Build the tracker
    pub fn build(self) -> Result<HistoryTracker<R>, BuildError> {
        self.config.validate()?;
        let baseline = self.baseline.unwrap_or_else(R::blank);
        Ok(HistoryTracker::from_parts(self.config, baseline))
    }
}

impl<R: Record> Default for TrackerBuilder<R> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::{Deserialize, Serialize};

    #[derive(Clone, PartialEq, Debug, Serialize, Deserialize)]
    struct Field {
        value: String,
    }

    impl Record for Field {
        fn blank() -> Self {
            Self {
                value: String::new(),
            }
        }
    }

    #[test]
    fn builder_defaults_match_new() {
        let tracker = TrackerBuilder::<Field>::new().build().unwrap();
        assert_eq!(tracker.config(), &TrackerConfig::default());
        assert_eq!(tracker.baseline(), &Field::blank());
    }

    #[test]
    fn builder_rejects_zero_capacity() {
        let result = TrackerBuilder::<Field>::new().capacity(0).build();
        assert!(matches!(result, Err(BuildError::ZeroCapacity)));
    }

    #[test]
    fn builder_rejects_zero_capacity_from_config() {
        let config = TrackerConfig {
            capacity: Some(0),
            ..TrackerConfig::default()
        };
        let result = TrackerBuilder::<Field>::new().config(config).build();
        assert!(result.is_err());
    }

    #[test]
    fn builder_stores_settings() {
        let tracker = TrackerBuilder::<Field>::new()
            .capacity(3)
            .skip_duplicates(true)
            .echo_policy(EchoPolicy::AbsorbMatching)
            .build()
            .unwrap();

        assert_eq!(tracker.config().capacity, Some(3));
        assert!(tracker.config().skip_duplicates);
        assert_eq!(tracker.config().echo_policy, EchoPolicy::AbsorbMatching);
    }

    #[test]
    fn custom_baseline_is_used() {
        let baseline = Field {
            value: "untitled".to_string(),
        };
        let mut tracker = TrackerBuilder::new().baseline(baseline.clone()).build().unwrap();

        tracker.record_change(Field {
            value: "draft".to_string(),
        });
        assert_eq!(tracker.undo(), baseline);
    }
}
