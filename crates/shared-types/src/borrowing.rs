//! A member's loans as shown on the dashboard, the recommendation list, and
//! the "due soon" derivation.

use chrono::{DateTime, NaiveDate, NaiveDateTime, TimeDelta, Utc};
use serde::{Deserialize, Serialize};

/// Placeholder for a missing borrow or due date.
pub const MISSING_DATE: &str = "N/A";

/// Books due within this many days (inclusive) count as "upcoming".
pub const DUE_SOON_WINDOW_DAYS: i64 = 7;

const MILLIS_PER_DAY: i64 = 24 * 60 * 60 * 1000;

/// A loan as the backend sends it.
///
/// Dates arrive under either camelCase or snake_case keys depending on which
/// backend revision wrote the record.
#[derive(Debug, Clone, Deserialize, Default)]
pub struct RawBorrowedBook {
    #[serde(rename = "_id", default)]
    pub id: Option<String>,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub author: Option<String>,
    #[serde(default)]
    pub genre: Option<String>,
    #[serde(default)]
    pub cover_filename: Option<String>,
    #[serde(rename = "borrowingDate", default)]
    pub borrowing_date_camel: Option<String>,
    #[serde(rename = "borrowing_date", default)]
    pub borrowing_date_snake: Option<String>,
    #[serde(rename = "dueDate", default)]
    pub due_date_camel: Option<String>,
    #[serde(rename = "due_date", default)]
    pub due_date_snake: Option<String>,
}

/// A loan in the one shape the views render.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct BorrowedBook {
    pub id: String,
    pub name: String,
    pub author: String,
    pub genre: String,
    pub cover_filename: Option<String>,
    pub borrowing_date: String,
    pub due_date: String,
}

impl From<RawBorrowedBook> for BorrowedBook {
    fn from(raw: RawBorrowedBook) -> Self {
        Self {
            id: raw.id.unwrap_or_default(),
            name: raw.name.unwrap_or_default(),
            author: raw.author.unwrap_or_default(),
            genre: raw.genre.unwrap_or_default(),
            cover_filename: non_blank(raw.cover_filename),
            borrowing_date: first_present(raw.borrowing_date_camel, raw.borrowing_date_snake),
            due_date: first_present(raw.due_date_camel, raw.due_date_snake),
        }
    }
}

/// Body of `/get-user/{username}`: either the member record or `{error}`.
#[derive(Debug, Clone, Deserialize, Default)]
pub struct UserRecordResponse {
    #[serde(default)]
    pub error: Option<String>,
    #[serde(default)]
    pub borrowed_books: Option<Vec<RawBorrowedBook>>,
}

impl UserRecordResponse {
    /// Normalized loans, empty when the backend sent none.
    pub fn into_borrowed_books(self) -> Vec<BorrowedBook> {
        self.borrowed_books
            .unwrap_or_default()
            .into_iter()
            .map(BorrowedBook::from)
            .collect()
    }
}

/// An advisory suggestion from `/recommendations/{username}`.
///
/// Carries no unique key; views use list position as identity.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Recommendation {
    pub name: String,
    #[serde(default)]
    pub author: String,
    #[serde(default)]
    pub genre: String,
    #[serde(default)]
    pub similarity: Option<f64>,
    #[serde(default)]
    pub reason: Option<String>,
}

impl Recommendation {
    /// `Match: NN%` when a non-zero similarity score is present.
    pub fn match_label(&self) -> Option<String> {
        self.similarity
            .filter(|s| *s != 0.0 && s.is_finite())
            .map(|s| format!("Match: {:.0}%", s * 100.0))
    }
}

/// One line of the "Upcoming Due Dates" panel.
#[derive(Debug, Clone, PartialEq)]
pub struct DueSoon {
    pub title: String,
    pub due_in_days: i64,
    pub due_date: String,
}

impl DueSoon {
    /// `Dune - Due in 3 days`.
    pub fn summary(&self) -> String {
        let unit = if self.due_in_days == 1 { "day" } else { "days" };
        format!("{} - Due in {} {}", self.title, self.due_in_days, unit)
    }
}

/// Parse a backend date as a calendar instant.
///
/// Accepts RFC 3339, RFC 2822, naive ISO datetimes (with or without
/// fractional seconds, `T` or space separated), `YYYY-MM-DD` and
/// `DD-MM-YYYY`. Naive values are taken as UTC.
pub fn parse_calendar_date(value: &str) -> Option<DateTime<Utc>> {
    let value = value.trim();
    if value.is_empty() || value == MISSING_DATE {
        return None;
    }
    if let Ok(dt) = DateTime::parse_from_rfc3339(value) {
        return Some(dt.with_timezone(&Utc));
    }
    if let Ok(dt) = DateTime::parse_from_rfc2822(value) {
        return Some(dt.with_timezone(&Utc));
    }
    for format in ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%d %H:%M:%S%.f"] {
        if let Ok(naive) = NaiveDateTime::parse_from_str(value, format) {
            return Some(naive.and_utc());
        }
    }
    for format in ["%Y-%m-%d", "%d-%m-%Y"] {
        if let Ok(date) = NaiveDate::parse_from_str(value, format) {
            return date.and_hms_opt(0, 0, 0).map(|naive| naive.and_utc());
        }
    }
    None
}

/// Whole days from `now` until `due`, rounding any partial day up.
pub fn days_until(due: DateTime<Utc>, now: DateTime<Utc>) -> i64 {
    let delta: TimeDelta = due - now;
    let millis = delta.num_milliseconds();
    // ceil for signed integer division
    let days = millis / MILLIS_PER_DAY;
    if millis % MILLIS_PER_DAY > 0 {
        days + 1
    } else {
        days
    }
}

/// Loans due within [`DUE_SOON_WINDOW_DAYS`] of `now`, soonest first.
///
/// Books with unparsable or past due dates are left out here but stay in the
/// borrowed-books table.
pub fn upcoming_due(books: &[BorrowedBook], now: DateTime<Utc>) -> Vec<DueSoon> {
    let mut upcoming: Vec<DueSoon> = books
        .iter()
        .filter_map(|book| {
            let due = parse_calendar_date(&book.due_date)?;
            let due_in_days = days_until(due, now);
            (0..=DUE_SOON_WINDOW_DAYS)
                .contains(&due_in_days)
                .then(|| DueSoon {
                    title: book.name.clone(),
                    due_in_days,
                    due_date: book.due_date.clone(),
                })
        })
        .collect();
    upcoming.sort_by_key(|entry| entry.due_in_days);
    upcoming
}

fn non_blank(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}

fn first_present(primary: Option<String>, secondary: Option<String>) -> String {
    non_blank(primary)
        .or_else(|| non_blank(secondary))
        .unwrap_or_else(|| MISSING_DATE.to_string())
}
