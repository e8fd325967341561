//! Treatment-period date arithmetic.
//!
//! Every ordination is active over an inclusive range of calendar dates;
//! daily-pattern variants scale their dose figures by the length of that
//! range.

use crate::{Error, Result};
use chrono::NaiveDate;
use serde::Serialize;

/// The inclusive range of calendar dates an ordination is active for
#[derive(Clone, Copy, Debug, Serialize, PartialEq, Eq)]
pub struct TreatmentPeriod {
    start: NaiveDate,
    end: NaiveDate,
}

impl TreatmentPeriod {
    /// Create a period spanning `start` to `end`, both inclusive.
    ///
    /// Rejects ranges whose end date precedes their start date.
    pub fn new(start: NaiveDate, end: NaiveDate) -> Result<Self> {
        if end < start {
            return Err(Error::InvalidArgument(format!(
                "treatment period ends ({}) before it starts ({})",
                end, start
            )));
        }
        Ok(Self { start, end })
    }

    pub fn start(&self) -> NaiveDate {
        self.start
    }

    pub fn end(&self) -> NaiveDate {
        self.end
    }

    /// Number of days in the period, counting both endpoints
    ///
    /// Dec 2 to Dec 4 is 3 days.
    pub fn days(&self) -> i64 {
        (self.end - self.start).num_days() + 1
    }

    /// Whether `date` falls inside the period
    pub fn contains(&self, date: NaiveDate) -> bool {
        self.start <= date && date <= self.end
    }
}
