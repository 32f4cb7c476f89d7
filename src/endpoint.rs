// ABOUTME: Selector enum for the Oura usercollection endpoints sharing the date-range shape
// ABOUTME: Maps each variant to its URL path segment
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 oura-client contributors

use std::fmt;

/// The eight `usercollection` routes that take `start_date`/`end_date`.
///
/// All of them share one request shape (same query parameter names, same
/// date validation, same response handling) and differ only in the URL
/// path segment, so the client implements them as a single parameterized
/// fetch over this selector. The heartrate route takes datetimes instead
/// and is deliberately not a variant here.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DateRangeEndpoint {
    /// Daily activity summaries
    DailyActivity,
    /// Daily readiness scores
    DailyReadiness,
    /// Daily sleep scores
    DailySleep,
    /// Moment and rest sessions
    Session,
    /// Individual sleep periods
    Sleep,
    /// User-entered tags
    Tag,
    /// Workouts
    Workout,
    /// Personal info (age, height, weight, biological sex)
    PersonalInfo,
}

impl DateRangeEndpoint {
    /// Every date-ranged endpoint, in upstream documentation order
    pub const ALL: [Self; 8] = [
        Self::DailyActivity,
        Self::DailyReadiness,
        Self::DailySleep,
        Self::Session,
        Self::Sleep,
        Self::Tag,
        Self::Workout,
        Self::PersonalInfo,
    ];

    /// URL path segment under the API base URL
    #[must_use]
    pub const fn path(self) -> &'static str {
        match self {
            Self::DailyActivity => "daily_activity",
            Self::DailyReadiness => "daily_readiness",
            Self::DailySleep => "daily_sleep",
            Self::Session => "session",
            Self::Sleep => "sleep",
            Self::Tag => "tag",
            Self::Workout => "workout",
            Self::PersonalInfo => "personal_info",
        }
    }
}

impl fmt::Display for DateRangeEndpoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.path())
    }
}
