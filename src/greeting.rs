//! Greeting page rendering.
//!
//! The root page body comes from a pure function that takes the timestamp
//! explicitly, so formatting is testable without touching the clock.

use chrono::DateTime;
use chrono_tz::Tz;

/// Timezone the timestamp is rendered in
pub const DISPLAY_TZ: Tz = chrono_tz::Europe::Prague;

/// en-GB style: day/month/year, 24-hour clock
pub const TIMESTAMP_FORMAT: &str = "%d/%m/%Y, %H:%M:%S";

/// Render the greeting body for the given timestamp.
pub fn render(timestamp: DateTime<Tz>) -> String {
    format!(
        "Hello! This is the Pulse demo app. <br>\u{1F552} Current time: {}",
        timestamp.format(TIMESTAMP_FORMAT)
    )
}

/// Current time in the display timezone.
pub fn now() -> DateTime<Tz> {
    chrono::Utc::now().with_timezone(&DISPLAY_TZ)
}
