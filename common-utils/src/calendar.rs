//! # Calendar vocabularies
//!
//! This module yields the fixed symbolic vocabularies used to lay out record directories:
//! months, week days and times of day. None of these carry an actual date; week days only
//! know their position in a cyclic seven day week.
//!

use std::{fmt, str::FromStr};

use itertools::Itertools;

use crate::error::{Error, TokenKind};

/// One of the twelve months. The name of a month is also the name of its directory.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Month {
    January,
    February,
    March,
    April,
    May,
    June,
    July,
    August,
    September,
    October,
    November,
    December,
}

impl Month {
    pub const ALL: [Month; 12] = [
        Month::January,
        Month::February,
        Month::March,
        Month::April,
        Month::May,
        Month::June,
        Month::July,
        Month::August,
        Month::September,
        Month::October,
        Month::November,
        Month::December,
    ];

    /// The name accepted on the command line and used as a directory name.
    pub fn name(self) -> &'static str {
        match self {
            Month::January => "styczeń",
            Month::February => "luty",
            Month::March => "marzec",
            Month::April => "kwiecień",
            Month::May => "maj",
            Month::June => "czerwiec",
            Month::July => "lipiec",
            Month::August => "sierpień",
            Month::September => "wrzesień",
            Month::October => "październik",
            Month::November => "listopad",
            Month::December => "grudzień",
        }
    }

    fn allowed() -> String {
        Self::ALL.iter().map(|month| month.name()).join(", ")
    }
}

impl fmt::Display for Month {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

impl FromStr for Month {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let token = s.trim();
        Self::ALL
            .iter()
            .copied()
            .find(|month| month.name() == token)
            .ok_or_else(|| Error::invalid_token(TokenKind::Month, token, Self::allowed()))
    }
}

/// A day of the week. The order of the variants is the order of the week, starting on Monday.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum WeekDay {
    Monday,
    Tuesday,
    Wednesday,
    Thursday,
    Friday,
    Saturday,
    Sunday,
}

impl WeekDay {
    /// Number of days in a week.
    pub const COUNT: usize = 7;

    pub const ALL: [WeekDay; WeekDay::COUNT] = [
        WeekDay::Monday,
        WeekDay::Tuesday,
        WeekDay::Wednesday,
        WeekDay::Thursday,
        WeekDay::Friday,
        WeekDay::Saturday,
        WeekDay::Sunday,
    ];

    /// Position in the week, Monday being 0 and Sunday 6.
    pub fn position(self) -> usize {
        self as usize
    }

    /// The day at the given position, wrapping around the week.
    pub fn from_position(position: usize) -> Self {
        Self::ALL[position % Self::COUNT]
    }

    /// The following day. Sunday is followed by Monday.
    pub fn succ(self) -> Self {
        Self::from_position(self.position() + 1)
    }

    /// The abbreviation accepted on the command line.
    pub fn abbreviation(self) -> &'static str {
        match self {
            WeekDay::Monday => "pn",
            WeekDay::Tuesday => "wt",
            WeekDay::Wednesday => "śr",
            WeekDay::Thursday => "czw",
            WeekDay::Friday => "pt",
            WeekDay::Saturday => "sb",
            WeekDay::Sunday => "nd",
        }
    }

    /// The full name of the day, used as a directory name.
    pub fn display_name(self) -> &'static str {
        match self {
            WeekDay::Monday => "poniedziałek",
            WeekDay::Tuesday => "wtorek",
            WeekDay::Wednesday => "środa",
            WeekDay::Thursday => "czwartek",
            WeekDay::Friday => "piątek",
            WeekDay::Saturday => "sobota",
            WeekDay::Sunday => "niedziela",
        }
    }

    fn allowed() -> String {
        Self::ALL.iter().map(|day| day.abbreviation()).join(", ")
    }
}

impl fmt::Display for WeekDay {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

impl FromStr for WeekDay {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let token = s.trim();
        // "cz" is a common short form of "czw".
        if token == "cz" {
            return Ok(WeekDay::Thursday);
        }
        Self::ALL
            .iter()
            .copied()
            .find(|day| day.abbreviation() == token)
            .ok_or_else(|| Error::invalid_token(TokenKind::Day, token, Self::allowed()))
    }
}

/// The time of day a record belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TimeOfDay {
    Morning,
    Evening,
}

impl TimeOfDay {
    pub const ALL: [TimeOfDay; 2] = [TimeOfDay::Morning, TimeOfDay::Evening];

    /// The single letter token accepted on the command line.
    pub fn code(self) -> &'static str {
        match self {
            TimeOfDay::Morning => "r",
            TimeOfDay::Evening => "w",
        }
    }

    /// The name used as a directory name.
    pub fn display_name(self) -> &'static str {
        match self {
            TimeOfDay::Morning => "rano",
            TimeOfDay::Evening => "wieczór",
        }
    }
}

/// Slots that are not given a time of day fall back to the morning.
impl Default for TimeOfDay {
    fn default() -> Self {
        TimeOfDay::Morning
    }
}

impl fmt::Display for TimeOfDay {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

impl FromStr for TimeOfDay {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let token = s.trim();
        Self::ALL
            .iter()
            .copied()
            .find(|time| time.code() == token)
            .ok_or_else(|| {
                let allowed = Self::ALL.iter().map(|time| time.code()).join(", ");
                Error::invalid_token(TokenKind::TimeOfDay, token, allowed)
            })
    }
}
