use chrono::{Local, NaiveDate, NaiveDateTime};

/// Source of "now" for expiry derivations.
///
/// Days-left and status values are computed against the user's local
/// wall-clock time, so the clock yields naive local date-times.
pub trait Clock: Send + Sync {
    fn now(&self) -> NaiveDateTime;

    fn today(&self) -> NaiveDate {
        self.now().date()
    }
}

pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> NaiveDateTime {
        Local::now().naive_local()
    }
}

/// Clock pinned to a single instant.
#[derive(Debug, Clone, Copy)]
pub struct FixedClock(pub NaiveDateTime);

impl Clock for FixedClock {
    fn now(&self) -> NaiveDateTime {
        self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_derive_today_from_now() {
        let instant = NaiveDate::from_ymd_opt(2024, 6, 10)
            .unwrap()
            .and_hms_opt(18, 45, 0)
            .unwrap();
        let clock = FixedClock(instant);
        assert_eq!(clock.today(), NaiveDate::from_ymd_opt(2024, 6, 10).unwrap());
    }
}
