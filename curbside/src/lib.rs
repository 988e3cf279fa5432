//! # curbside
//!
//! Municipal waste-collection holiday calendars.
//!
//! This crate is a **façade** that re-exports the public items of the
//! underlying workspace crates. Application code should depend on this crate
//! rather than the individual `curb-*` crates.
//!
//! ## Quick start
//!
//! ```toml
//! [dependencies]
//! curbside = "0.1"
//! ```
//!
//! ```rust
//! use curbside::{Date, NEW_YORK_COLLECTION};
//!
//! let labor_day = Date::from_ymd(2021, 9, 6).unwrap();
//! assert_eq!(NEW_YORK_COLLECTION.holiday_name(labor_day), Some("Labor Day"));
//!
//! let ordinary = Date::from_ymd(2021, 3, 29).unwrap();
//! assert!(!NEW_YORK_COLLECTION.is_holiday(ordinary));
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

/// Shared error definitions.
pub use curb_core as core;

/// Date, weekday, and holiday rule types.
pub use curb_time as time;

pub use curb_core::errors::{Error, Result};
pub use curb_time::{Date, HolidayRule, HolidaySchedule, Month, Weekday, NEW_YORK_COLLECTION};
