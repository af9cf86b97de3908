//! crates/moviepulse_core/src/period.rs
//!
//! The voting-period policy: one active/inactive window shared by the
//! write-side eligibility gate and the read-side "is voting open" displays.

use chrono::{DateTime, Months, Utc};

use crate::domain::VotingPeriod;
use crate::ports::{PortResult, VotingPeriodStore};

impl VotingPeriod {
    /// Both eligibility and the open/closed display derive from this:
    /// the period is open while it is active and `now` has not passed the
    /// end date.
    pub fn is_open(&self, now: DateTime<Utc>) -> bool {
        self.is_active && now <= self.end_date
    }

    /// Whole days left until the end date, rounded up. Zero once the
    /// period is closed.
    pub fn remaining_days(&self, now: DateTime<Utc>) -> i64 {
        if !self.is_open(now) {
            return 0;
        }
        let remaining = self.end_date - now;
        let days = remaining.num_days();
        if remaining - chrono::Duration::days(days) > chrono::Duration::zero() {
            days + 1
        } else {
            days
        }
    }
}

/// The period used when nothing is stored: active, running one calendar
/// month from `now`.
pub fn default_period(now: DateTime<Utc>) -> VotingPeriod {
    VotingPeriod {
        is_active: true,
        start_date: now,
        end_date: now.checked_add_months(Months::new(1)).unwrap_or(now),
    }
}

/// The stored period, or the default when the store is empty. A pure read;
/// the default is not persisted.
pub fn current_period(store: &dyn VotingPeriodStore, now: DateTime<Utc>) -> PortResult<VotingPeriod> {
    Ok(store.load()?.unwrap_or_else(|| default_period(now)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn at(y: i32, mo: u32, d: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(y, mo, d, 12, 0, 0).unwrap()
    }

    #[test]
    fn default_runs_one_month() {
        let now = at(2024, 3, 15);
        let period = default_period(now);
        assert!(period.is_active);
        assert_eq!(period.start_date, now);
        assert_eq!(period.end_date, at(2024, 4, 15));
    }

    #[test]
    fn open_requires_active_and_unexpired() {
        let now = at(2024, 3, 15);
        let mut period = default_period(now);
        assert!(period.is_open(now));
        assert!(period.is_open(period.end_date));
        assert!(!period.is_open(period.end_date + chrono::Duration::seconds(1)));

        period.is_active = false;
        assert!(!period.is_open(now));
    }

    #[test]
    fn remaining_days_rounds_up_and_floors_at_zero() {
        let now = at(2024, 3, 15);
        let period = VotingPeriod {
            is_active: true,
            start_date: now,
            end_date: now + chrono::Duration::days(2) + chrono::Duration::hours(3),
        };
        assert_eq!(period.remaining_days(now), 3);

        let closed = VotingPeriod {
            is_active: false,
            ..period
        };
        assert_eq!(closed.remaining_days(now), 0);
    }
}
