//! `HolidayRule` trait and the `HolidaySchedule` dispatcher.
//!
//! A schedule is an ordered, statically constructed set of independent rules.
//! Rules are mutually exclusive by construction, so evaluation order only
//! pins down first-match determinism; the dispatcher does not defend against
//! overlap at runtime.

use crate::date::Date;

/// A single observed-holiday rule.
///
/// Each rule owns exactly one holiday name and decides, from the date alone,
/// whether collection is suspended on that date for its holiday. Rules are
/// pure and total over valid dates.
pub trait HolidayRule: std::fmt::Debug + Send + Sync {
    /// Canonical holiday name (e.g. `"Labor Day"`).
    fn name(&self) -> &'static str;

    /// Return `true` if `date` is the observed occurrence of this holiday.
    fn observed_on(&self, date: Date) -> bool;
}

/// An ordered set of holiday rules for one collection schedule.
///
/// The rule set is fixed at compile time and read-only afterwards, so a
/// `HolidaySchedule` can be shared across threads without synchronization.
#[derive(Debug)]
pub struct HolidaySchedule {
    name: &'static str,
    rules: &'static [&'static dyn HolidayRule],
}

impl HolidaySchedule {
    /// Create a schedule from an ordered rule slice.
    pub const fn new(name: &'static str, rules: &'static [&'static dyn HolidayRule]) -> Self {
        HolidaySchedule { name, rules }
    }

    /// Human-readable schedule name (e.g. `"New York (Collection)"`).
    pub fn name(&self) -> &'static str {
        self.name
    }

    /// The rules in evaluation order.
    pub fn rules(&self) -> impl Iterator<Item = &'static dyn HolidayRule> {
        self.rules.iter().copied()
    }

    /// Return the name of the holiday observed on `date`, or `None` when
    /// collection runs as usual.
    ///
    /// Short-circuiting linear scan over the rules; first match wins.
    pub fn holiday_name(&self, date: Date) -> Option<&'static str> {
        self.rules
            .iter()
            .find(|rule| rule.observed_on(date))
            .map(|rule| rule.name())
    }

    /// Return `true` if any rule matches `date`.
    pub fn is_holiday(&self, date: Date) -> bool {
        self.holiday_name(date).is_some()
    }

    /// Every observed holiday in the inclusive range `[from, to]`, in date
    /// order. Empty if `from > to`.
    pub fn holidays_between(&self, from: Date, to: Date) -> Vec<(Date, &'static str)> {
        let mut holidays = Vec::new();
        let mut d = from;
        while d <= to {
            if let Some(name) = self.holiday_name(d) {
                holidays.push((d, name));
            }
            match d.add_days(1) {
                Ok(next) => d = next,
                Err(_) => break, // reached Date::MAX
            }
        }
        holidays
    }
}
