//! Shared clock fixture for integration tests.

use chrono::{DateTime, Local, TimeZone, Utc};
use mockable::Clock;

/// Clock pinned to 2024-05-01T12:00:00Z.
pub struct FrozenClock;

impl Clock for FrozenClock {
    fn local(&self) -> DateTime<Local> {
        self.utc().with_timezone(&Local)
    }

    #[expect(
        clippy::expect_used,
        reason = "Test code uses expect for assertion clarity"
    )]
    fn utc(&self) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 5, 1, 12, 0, 0)
            .single()
            .expect("valid frozen instant")
    }
}
