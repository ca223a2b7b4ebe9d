//! Today according to the device clock.

use chrono::NaiveDate;

/// The device-local calendar date, with no time-of-day component.
///
/// All rotation decisions key off this value, so a user travelling across
/// timezones sees whatever their device considers "today".
#[must_use]
pub fn today() -> NaiveDate {
    chrono::Local::now().date_naive()
}
