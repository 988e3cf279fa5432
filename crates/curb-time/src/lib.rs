//! # curb-time
//!
//! Date, weekday, and observed-holiday rule types for municipal
//! waste-collection schedules.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// ── Modules ───────────────────────────────────────────────────────────────────

/// `Date` type.
pub mod date;

/// `HolidayRule` trait and the `HolidaySchedule` dispatcher.
pub mod holiday;

/// Municipal rule sets.
pub mod holidays;

/// `Month` — month of the year.
pub mod month;

/// `Weekday` — day of the week.
pub mod weekday;

// ── Convenience re-exports ────────────────────────────────────────────────────

pub use date::Date;
pub use holiday::{HolidayRule, HolidaySchedule};
pub use holidays::new_york::NEW_YORK_COLLECTION;
pub use month::Month;
pub use weekday::Weekday;
