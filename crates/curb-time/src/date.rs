//! `Date` — calendar dates as day serial numbers.
//!
//! A date is a count of days since the epoch: serial 1 is
//! **January 1, 1970**. The valid range is 1970-01-01 to 2199-12-31, and the
//! constructors reject anything outside it, so every `Date` in circulation is
//! a real calendar day and the holiday rules stay total.

use crate::month::Month;
use crate::weekday::Weekday;
use curb_core::errors::{Error, Result};

/// A calendar date represented as a serial number of days since the epoch.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Date(i32);

impl Date {
    /// Minimum valid date: January 1, 1970.
    pub const MIN: Date = Date(1);

    /// Maximum valid date: December 31, 2199.
    pub const MAX: Date = Date(84_006);

    // ── Constructors ─────────────────────────────────────────────────────────

    /// Create a date from a serial number.
    ///
    /// Returns an error if `serial` falls outside `[Date::MIN, Date::MAX]`.
    pub fn from_serial(serial: i32) -> Result<Self> {
        if serial < Self::MIN.0 || serial > Self::MAX.0 {
            return Err(Error::Date(format!(
                "serial {serial} out of range [{}, {}]",
                Self::MIN.0,
                Self::MAX.0
            )));
        }
        Ok(Date(serial))
    }

    /// Create a date from year, month (1–12), and day-of-month (1–31).
    pub fn from_ymd(year: u16, month: u8, day: u8) -> Result<Self> {
        if !(1970..=2199).contains(&year) {
            return Err(Error::Date(format!(
                "year {year} out of range [1970, 2199]"
            )));
        }
        if !(1..=12).contains(&month) {
            return Err(Error::Date(format!("month {month} out of range [1, 12]")));
        }
        let days_in = days_in_month(year, month);
        if day == 0 || day > days_in {
            return Err(Error::Date(format!(
                "day {day} out of range [1, {days_in}] for {year}-{month:02}"
            )));
        }
        Ok(Date(serial_from_ymd(year, month, day)))
    }

    // ── Accessors ─────────────────────────────────────────────────────────────

    /// Return the serial number.
    pub fn serial(&self) -> i32 {
        self.0
    }

    /// Return the year (1970–2199).
    pub fn year(&self) -> u16 {
        ymd_from_serial(self.0).0
    }

    /// Return the month.
    pub fn month(&self) -> Month {
        let m = ymd_from_serial(self.0).1;
        Month::from_number(m).expect("serial decomposition yields 1..=12")
    }

    /// Return the day of the month (1–31).
    pub fn day_of_month(&self) -> u8 {
        ymd_from_serial(self.0).2
    }

    /// Return the weekday.
    pub fn weekday(&self) -> Weekday {
        // Serial 1 (1970-01-01) is a Thursday.
        let w = ((self.0 + 2).rem_euclid(7) + 1) as u8;
        Weekday::from_ordinal(w).expect("rem_euclid always lands in 1..=7")
    }

    // ── Arithmetic ────────────────────────────────────────────────────────────

    /// Advance by `n` days (`n` may be negative).
    ///
    /// Returns an error if the result is out of the valid range.
    pub fn add_days(self, n: i32) -> Result<Self> {
        let serial = self.0 + n;
        if serial < Self::MIN.0 || serial > Self::MAX.0 {
            return Err(Error::Date(format!(
                "date arithmetic: serial {serial} out of range"
            )));
        }
        Ok(Date(serial))
    }

    /// Return the last calendar day of the month containing this date.
    pub fn end_of_month(self) -> Self {
        let (y, m, _) = ymd_from_serial(self.0);
        Date(serial_from_ymd(y, m, days_in_month(y, m)))
    }

    /// Return the *n*-th occurrence of `weekday` in the month of
    /// `year`/`month`.
    ///
    /// For example, `nth_weekday(4, Weekday::Thursday, 2021, 11)` returns the
    /// fourth Thursday of November 2021 (2021-11-25).
    ///
    /// # Errors
    /// Returns an error if `n` is zero or larger than the number of such
    /// weekdays in the month, or if the month is out of range.
    pub fn nth_weekday(n: u8, weekday: Weekday, year: u16, month: u8) -> Result<Self> {
        if n == 0 {
            return Err(Error::Date("nth_weekday: n must be >= 1".into()));
        }
        let first = Date::from_ymd(year, month, 1)?;
        // Days from the 1st to the first occurrence of the target weekday.
        let skip = (i32::from(weekday.ordinal()) - i32::from(first.weekday().ordinal()))
            .rem_euclid(7) as u16;
        let day = 1 + skip + 7 * u16::from(n - 1);
        if day > u16::from(days_in_month(year, month)) {
            return Err(Error::Date(format!(
                "nth_weekday: {n}-th {weekday} does not exist in {year}-{month:02}"
            )));
        }
        Date::from_ymd(year, month, day as u8)
    }
}

// ── Arithmetic operators ──────────────────────────────────────────────────────

impl std::ops::Add<i32> for Date {
    type Output = Self;
    fn add(self, rhs: i32) -> Self {
        self.add_days(rhs).expect("date addition out of range")
    }
}

impl std::ops::Sub<i32> for Date {
    type Output = Self;
    fn sub(self, rhs: i32) -> Self {
        self.add_days(-rhs).expect("date subtraction out of range")
    }
}

impl std::ops::Sub<Date> for Date {
    type Output = i32;
    fn sub(self, rhs: Date) -> i32 {
        self.0 - rhs.0
    }
}

impl std::ops::AddAssign<i32> for Date {
    fn add_assign(&mut self, rhs: i32) {
        *self = self.add_days(rhs).expect("date addition out of range");
    }
}

// ── Display ───────────────────────────────────────────────────────────────────

impl std::fmt::Display for Date {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} {} {}", self.day_of_month(), self.month(), self.year())
    }
}

impl std::fmt::Debug for Date {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let (y, m, d) = ymd_from_serial(self.0);
        write!(f, "Date({y:04}-{m:02}-{d:02})")
    }
}

// ── Internal helpers ──────────────────────────────────────────────────────────

/// Whether a given year is a leap year.
pub fn is_leap_year(year: u16) -> bool {
    (year % 4 == 0 && year % 100 != 0) || year % 400 == 0
}

/// Number of days in a given month/year.
pub fn days_in_month(year: u16, month: u8) -> u8 {
    debug_assert!((1..=12).contains(&month));
    match month {
        1 | 3 | 5 | 7 | 8 | 10 | 12 => 31,
        4 | 6 | 9 | 11 => 30,
        2 => {
            if is_leap_year(year) {
                29
            } else {
                28
            }
        }
        _ => unreachable!(),
    }
}

/// Gregorian leap days before the epoch year, `1969/4 - 1969/100 + 1969/400`.
const LEAP_DAYS_BEFORE_EPOCH: i32 = 477;

/// Cumulative day-of-year offset at the start of each month (non-leap).
const MONTH_OFFSET: [u16; 12] = [0, 31, 59, 90, 120, 151, 181, 212, 243, 273, 304, 334];

/// Convert (year, month, day) to a serial number. Serial 1 = 1970-01-01.
fn serial_from_ymd(year: u16, month: u8, day: u8) -> i32 {
    let y = i32::from(year);
    // Whole years since the epoch, plus one day per leap year in [1970, year).
    let mut serial = (y - 1970) * 365;
    serial += (y - 1) / 4 - (y - 1) / 100 + (y - 1) / 400 - LEAP_DAYS_BEFORE_EPOCH;
    serial += i32::from(MONTH_OFFSET[month as usize - 1]);
    if month > 2 && is_leap_year(year) {
        serial += 1;
    }
    serial + i32::from(day)
}

/// Decompose a serial number into (year, month, day).
fn ymd_from_serial(serial: i32) -> (u16, u8, u8) {
    // Dividing by 366 can only undershoot the year, never overshoot.
    let mut y = (1970 + serial / 366) as u16;
    while serial >= serial_from_ymd(y + 1, 1, 1) {
        y += 1;
    }
    let mut remaining = serial - serial_from_ymd(y, 1, 1) + 1;
    let mut m = 1u8;
    loop {
        let len = i32::from(days_in_month(y, m));
        if remaining <= len {
            break;
        }
        remaining -= len;
        m += 1;
    }
    (y, m, remaining as u8)
}

// ── Tests ─────────────────────────────────────────────────────────────────────
