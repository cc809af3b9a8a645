//! # Result Records
//!
//! One output line of an algorithm component: `test_id,function_name,duration`,
//! headerless, no quoting. The stub always reports [`DURATION_SENTINEL_NS`].
//!
//! ```rust
//! use algo_stub::record::ResultRecord;
//! let record: ResultRecord = "t1,alpha,1234".parse().unwrap();
//! assert_eq!(record.function_name, "alpha");
//! assert_eq!(record.to_string(), "t1,alpha,1234");
//! ```

use serde::{Deserialize, Serialize};
use std::fmt;
use std::num::ParseIntError;
use std::str::FromStr;
use thiserror::Error;

/// Fake duration in nanoseconds reported for every result.
pub const DURATION_SENTINEL_NS: u64 = 1234;

#[derive(Debug, Error)]
pub enum RecordError {
    #[error("Expected 3 comma-separated fields, found {parts}: {line}")]
    FieldCount { parts: usize, line: String },
    #[error("Invalid duration '{duration}': {source}")]
    Duration {
        duration: String,
        #[source]
        source: ParseIntError,
    },
}

/// A single `(test case, function)` timing result.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResultRecord {
    pub test_id: String,
    pub function_name: String,
    /// Nanoseconds.
    pub duration: u64,
}

impl ResultRecord {
    /// A record carrying the sentinel duration.
    pub fn stub(test_id: &str, function_name: &str) -> Self {
        Self {
            test_id: test_id.to_string(),
            function_name: function_name.to_string(),
            duration: DURATION_SENTINEL_NS,
        }
    }
}

impl fmt::Display for ResultRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{},{},{}", self.test_id, self.function_name, self.duration)
    }
}

impl FromStr for ResultRecord {
    type Err = RecordError;

    fn from_str(line: &str) -> Result<Self, Self::Err> {
        let parts: Vec<&str> = line.split(',').collect();
        if parts.len() != 3 {
            return Err(RecordError::FieldCount {
                parts: parts.len(),
                line: line.to_string(),
            });
        }
        let duration = parts[2].parse::<u64>().map_err(|e| RecordError::Duration {
            duration: parts[2].to_string(),
            source: e,
        })?;
        Ok(Self {
            test_id: parts[0].to_string(),
            function_name: parts[1].to_string(),
            duration,
        })
    }
}
