//! # Schedule
//!
//! This module turns the months and day ranges given on the command line into an ordered
//! schedule of (month, day) slots.
//!

use std::str::FromStr;

use crate::{
    calendar::{Month, TimeOfDay, WeekDay},
    error::{Error, Result},
};

/// Separates the two ends of a day range, e.g. "pn-wt".
pub const RANGE_SEPARATOR: char = '-';
/// Separates the tokens of a list, e.g. "styczeń, luty".
pub const LIST_SEPARATOR: char = ',';

/// A single day or an inclusive span of days.
///
/// A span whose start comes after its end wraps around the week: "pt-wt" covers
/// Friday, Saturday, Sunday, Monday and Tuesday.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DayRange {
    Single(WeekDay),
    Span { start: WeekDay, end: WeekDay },
}

impl DayRange {
    /// Number of days covered by the range.
    pub fn num_days(&self) -> usize {
        match *self {
            DayRange::Single(_) => 1,
            DayRange::Span { start, end } => {
                let (start, end) = (start.position(), end.position());
                if start <= end {
                    end - start + 1
                } else {
                    WeekDay::COUNT - start + end + 1
                }
            }
        }
    }

    /// The days covered by the range in week order, starting at the first day of the range.
    pub fn days(&self) -> Vec<WeekDay> {
        let first = match *self {
            DayRange::Single(day) => day,
            DayRange::Span { start, .. } => start,
        };
        std::iter::successors(Some(first), |day| Some(day.succ()))
            .take(self.num_days())
            .collect()
    }
}

impl FromStr for DayRange {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        let token = s.trim();
        let ends: Vec<&str> = token.split(RANGE_SEPARATOR).collect();
        match ends.as_slice() {
            [day] => Ok(DayRange::Single(day.parse()?)),
            [start, end] => Ok(DayRange::Span {
                start: start.parse()?,
                end: end.parse()?,
            }),
            _ => Err(Error::MalformedRange(token.to_string())),
        }
    }
}

/// A month together with the days of that month that get a record.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScheduleEntry {
    pub month: Month,
    pub days: DayRange,
}

/// One resolved calendar day.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Slot {
    pub month: Month,
    pub day: WeekDay,
}

/// An ordered list of months with their day ranges.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Schedule {
    entries: Vec<ScheduleEntry>,
}

impl Schedule {
    /// Pairs every month with the day range at the same position.
    ///
    /// Fails if the two lists differ in length.
    pub fn new(months: Vec<Month>, day_ranges: Vec<DayRange>) -> Result<Self> {
        if months.len() != day_ranges.len() {
            return Err(Error::LengthMismatch {
                months: months.len(),
                days: day_ranges.len(),
            });
        }
        let entries = months
            .into_iter()
            .zip(day_ranges.into_iter())
            .map(|(month, days)| ScheduleEntry { month, days })
            .collect();
        Ok(Self { entries })
    }

    /// Builds a schedule from raw month and day range tokens.
    pub fn from_tokens<S: AsRef<str>>(months: &[S], day_ranges: &[S]) -> Result<Self> {
        let months = months
            .iter()
            .map(|token| token.as_ref().parse())
            .collect::<Result<Vec<Month>>>()?;
        let day_ranges = day_ranges
            .iter()
            .map(|token| token.as_ref().parse())
            .collect::<Result<Vec<DayRange>>>()?;
        Self::new(months, day_ranges)
    }

    pub fn entries(&self) -> &[ScheduleEntry] {
        &self.entries
    }

    /// Total number of slots in the schedule.
    pub fn num_slots(&self) -> usize {
        self.entries.iter().map(|entry| entry.days.num_days()).sum()
    }

    /// All slots, month by month in schedule order and day by day within each month.
    pub fn slots(&self) -> Vec<Slot> {
        self.entries
            .iter()
            .flat_map(|entry| {
                let month = entry.month;
                entry
                    .days
                    .days()
                    .into_iter()
                    .map(move |day| Slot { month, day })
            })
            .collect()
    }
}

fn parse_list<T: FromStr<Err = Error>>(s: &str) -> Result<Vec<T>> {
    s.split(LIST_SEPARATOR).map(str::parse).collect()
}

/// A comma separated list of months, e.g. "styczeń, luty".
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MonthList(pub Vec<Month>);

impl FromStr for MonthList {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        parse_list(s).map(MonthList)
    }
}

/// A comma separated list of day ranges, e.g. "pn-wt, czw".
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DayRangeList(pub Vec<DayRange>);

impl FromStr for DayRangeList {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        parse_list(s).map(DayRangeList)
    }
}

/// A comma separated list of times of day, e.g. "r, w".
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TimeOfDayList(pub Vec<TimeOfDay>);

impl FromStr for TimeOfDayList {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        parse_list(s).map(TimeOfDayList)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::calendar::WeekDay::*;

    fn span(start: WeekDay, end: WeekDay) -> DayRange {
        DayRange::Span { start, end }
    }

    #[test]
    fn single_day_and_degenerate_span() {
        assert_eq!(vec![Friday], DayRange::Single(Friday).days());
        assert_eq!(vec![Friday], span(Friday, Friday).days());
    }

    #[test]
    fn forward_span() {
        assert_eq!(vec![Monday, Tuesday, Wednesday], span(Monday, Wednesday).days());
        assert_eq!(WeekDay::ALL.to_vec(), span(Monday, Sunday).days());
    }

    #[test]
    fn span_wraps_around_the_week() {
        assert_eq!(
            vec![Thursday, Friday, Saturday, Sunday, Monday, Tuesday],
            span(Thursday, Tuesday).days()
        );
        assert_eq!(vec![Sunday, Monday], span(Sunday, Monday).days());
        assert_eq!(6, span(Tuesday, Monday).num_days());
    }

    #[test]
    fn parses_day_ranges() {
        assert_eq!(DayRange::Single(Wednesday), "śr".parse().unwrap());
        assert_eq!(span(Thursday, Tuesday), "cz-wt".parse().unwrap());
        assert_eq!(span(Monday, Tuesday), " pn-wt ".parse().unwrap());
        assert_eq!(
            Err(Error::MalformedRange("pn-wt-śr".to_string())),
            "pn-wt-śr".parse::<DayRange>()
        );
        assert!(matches!(
            "pn-".parse::<DayRange>(),
            Err(Error::InvalidToken { .. })
        ));
    }

    #[test]
    fn parses_comma_separated_lists() {
        let MonthList(months) = "styczeń, luty".parse().unwrap();
        assert_eq!(vec![Month::January, Month::February], months);
        let DayRangeList(ranges) = "pn-wt, śr-czw, czw".parse().unwrap();
        assert_eq!(
            vec![span(Monday, Tuesday), span(Wednesday, Thursday), DayRange::Single(Thursday)],
            ranges
        );
        let TimeOfDayList(times) = "r,w".parse().unwrap();
        assert_eq!(vec![TimeOfDay::Morning, TimeOfDay::Evening], times);
        assert!("styczeń, lipiec, foo".parse::<MonthList>().is_err());
    }

    #[test]
    fn schedule_requires_one_range_per_month() {
        let err = Schedule::from_tokens(&["styczeń", "luty"], &["pn"]).unwrap_err();
        assert_eq!(Error::LengthMismatch { months: 2, days: 1 }, err);
    }

    #[test]
    fn slots_are_month_major() {
        let schedule = Schedule::from_tokens(&["luty", "styczeń"], &["sb-pn", "wt"]).unwrap();
        let slots = schedule.slots();
        assert_eq!(4, schedule.num_slots());
        assert_eq!(
            vec![
                Slot { month: Month::February, day: Saturday },
                Slot { month: Month::February, day: Sunday },
                Slot { month: Month::February, day: Monday },
                Slot { month: Month::January, day: Tuesday },
            ],
            slots
        );
    }
}
