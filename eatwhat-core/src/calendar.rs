//! Monday-first month-grid layout for the swipeable calendar.

use chrono::{Datelike, Days, NaiveDate};

use crate::date::{days_in_month, month_start};

/// One slot in a month grid, row-major.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GridSlot {
    /// Padding before the first or after the last day of the month.
    Blank,
    /// A day of the viewed month.
    Day(NaiveDate),
}

/// Monday-first layout of a single month, padded to whole weeks.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MonthGrid {
    first: NaiveDate,
    leading_blanks: u32,
    day_count: u32,
}

impl MonthGrid {
    /// Layout for the month `date` falls in.
    #[must_use]
    pub fn for_month(date: NaiveDate) -> Self {
        let first = month_start(date);
        Self {
            first,
            leading_blanks: first.weekday().num_days_from_monday(),
            day_count: days_in_month(first),
        }
    }

    /// First day of the laid-out month.
    #[must_use]
    pub const fn first(&self) -> NaiveDate {
        self.first
    }

    /// Blank slots before day 1 (Monday-first weekday index).
    #[must_use]
    pub const fn leading_blanks(&self) -> u32 {
        self.leading_blanks
    }

    /// Days in the laid-out month.
    #[must_use]
    pub const fn day_count(&self) -> u32 {
        self.day_count
    }

    /// Total slots, rounded up to whole weeks of seven.
    #[must_use]
    pub const fn slot_count(&self) -> u32 {
        (self.leading_blanks + self.day_count).div_ceil(7) * 7
    }

    /// Iterate every slot of the grid in row-major order.
    pub fn slots(&self) -> impl Iterator<Item = GridSlot> + use<> {
        let leading = self.leading_blanks;
        let days = self.day_count;
        let first = self.first;
        (0..self.slot_count()).map(move |index| {
            if index < leading || index >= leading + days {
                GridSlot::Blank
            } else {
                first
                    .checked_add_days(Days::new(u64::from(index - leading)))
                    .map_or(GridSlot::Blank, GridSlot::Day)
            }
        })
    }
}
