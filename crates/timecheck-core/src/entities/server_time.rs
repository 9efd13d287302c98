//! ServerTime entity - the database server's clock reading

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A point in time as reported by the database server
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ServerTime(DateTime<Utc>);

impl ServerTime {
    /// Wrap a timestamp read from the database
    #[inline]
    pub const fn new(at: DateTime<Utc>) -> Self {
        Self(at)
    }

    /// Get the underlying timestamp
    #[inline]
    pub const fn into_inner(self) -> DateTime<Utc> {
        self.0
    }
}
