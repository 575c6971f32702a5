//! Shared fixtures for message tests.

use chrono::{DateTime, Local, TimeZone, Utc};
use mockable::Clock;
use rstest::fixture;

/// The instant every fixed clock reports.
pub fn fixed_instant() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2024, 5, 1, 12, 0, 0)
        .single()
        .expect("valid fixed instant")
}

/// A clock frozen at [`fixed_instant`].
#[derive(Debug, Clone, Copy)]
pub struct FixedClock(pub DateTime<Utc>);

impl Clock for FixedClock {
    fn local(&self) -> DateTime<Local> {
        self.0.with_timezone(&Local)
    }

    fn utc(&self) -> DateTime<Utc> {
        self.0
    }
}

#[fixture]
pub fn clock() -> FixedClock {
    FixedClock(fixed_instant())
}

mockall::mock! {
    pub WallClock {}

    impl Clock for WallClock {
        fn local(&self) -> DateTime<Local>;
        fn utc(&self) -> DateTime<Utc>;
    }
}

/// A mock clock that must be consulted exactly `times` times.
pub fn expecting_clock(times: usize) -> MockWallClock {
    let mut clock = MockWallClock::new();
    clock.expect_utc().times(times).return_const(fixed_instant());
    clock
}
