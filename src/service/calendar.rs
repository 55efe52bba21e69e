use chrono::{Datelike, Duration, NaiveDate};

use crate::service::translation::Translator;

pub const GRID_COLUMNS: usize = 7;
pub const GRID_ROWS: usize = 6;
pub const GRID_CELLS: usize = GRID_COLUMNS * GRID_ROWS;

const MONTH_KEYS: [&str; 12] = [
    "month.january",
    "month.february",
    "month.march",
    "month.april",
    "month.may",
    "month.june",
    "month.july",
    "month.august",
    "month.september",
    "month.october",
    "month.november",
    "month.december",
];

const WEEKDAY_KEYS: [&str; GRID_COLUMNS] = [
    "day.short.sun",
    "day.short.mon",
    "day.short.tue",
    "day.short.wed",
    "day.short.thu",
    "day.short.fri",
    "day.short.sat",
];

/// The (year, month) shown by a calendar. Months are 1-based.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct MonthCursor {
    year: i32,
    month: u32,
}

impl MonthCursor {
    pub fn new(year: i32, month: u32) -> Option<Self> {
        if !(1..=12).contains(&month) || !year_in_range(year) {
            return None;
        }
        Some(Self { year, month })
    }

    pub fn containing(date: NaiveDate) -> Self {
        Self {
            year: date.year(),
            month: date.month(),
        }
    }

    pub fn year(&self) -> i32 {
        self.year
    }

    pub fn month(&self) -> u32 {
        self.month
    }

    /// Moves by `delta` months, carrying into the year. Stops at the edge of
    /// the representable date range.
    pub fn advance(self, delta: i32) -> Self {
        let total = i64::from(self.year) * 12 + i64::from(self.month - 1) + i64::from(delta);
        let year = total.div_euclid(12);
        let month = total.rem_euclid(12) as u32 + 1;
        match i32::try_from(year) {
            Ok(year) if year_in_range(year) => Self { year, month },
            _ => self,
        }
    }

    pub fn first_day(&self) -> NaiveDate {
        NaiveDate::from_ymd_opt(self.year, self.month, 1).unwrap_or(NaiveDate::MIN)
    }

    pub fn days_in_month(&self) -> u32 {
        let next = self.advance(1).first_day();
        (next - self.first_day()).num_days() as u32
    }

    pub fn contains(&self, date: NaiveDate) -> bool {
        date.year() == self.year && date.month() == self.month
    }

    pub fn title(&self, translator: &Translator) -> String {
        format!("{} {}", translator.t(MONTH_KEYS[self.month as usize - 1]), self.year)
    }
}

// One spare year on each side keeps the padding days representable.
fn year_in_range(year: i32) -> bool {
    year > NaiveDate::MIN.year() && year < NaiveDate::MAX.year()
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CalendarCell {
    pub date: NaiveDate,
    pub day_number: u32,
    pub belongs_to_current_month: bool,
    pub is_past: bool,
    pub is_today: bool,
    pub is_selected: bool,
}

impl CalendarCell {
    /// Padding days and past days cannot be picked.
    pub fn is_selectable(&self) -> bool {
        self.belongs_to_current_month && !self.is_past
    }

    pub fn date_key(&self) -> String {
        date_key(self.date)
    }
}

/// `YYYY-MM-DD`, zero padded.
pub fn date_key(date: NaiveDate) -> String {
    date.format("%Y-%m-%d").to_string()
}

pub fn parse_date_key(value: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(value.trim(), "%Y-%m-%d").ok()
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MonthGrid {
    pub cursor: MonthCursor,
    pub cells: Vec<CalendarCell>,
}

impl MonthGrid {
    pub fn weeks(&self) -> impl Iterator<Item = &[CalendarCell]> {
        self.cells.chunks(GRID_COLUMNS)
    }

    pub fn weekday_headers(translator: &Translator) -> Vec<String> {
        WEEKDAY_KEYS.iter().map(|key| translator.t(key)).collect()
    }

    pub fn selected(&self) -> Option<&CalendarCell> {
        self.cells.iter().find(|cell| cell.is_selected)
    }
}

/// Lays out a six-week month view starting on Sunday, padded with the tail
/// of the previous month and the head of the next one.
pub fn build_month_grid(
    cursor: MonthCursor,
    today: NaiveDate,
    selected: Option<&str>,
) -> MonthGrid {
    let first = cursor.first_day();
    let leading = first.weekday().num_days_from_sunday() as usize;
    let days = cursor.days_in_month() as usize;
    assert!(
        leading + days <= GRID_CELLS,
        "month {}-{} does not fit in {} cells",
        cursor.year,
        cursor.month,
        GRID_CELLS
    );

    let start = first - Duration::days(leading as i64);
    let cells = (0..GRID_CELLS)
        .map(|offset| {
            let date = start + Duration::days(offset as i64);
            let belongs_to_current_month = cursor.contains(date);
            CalendarCell {
                date,
                day_number: date.day(),
                belongs_to_current_month,
                is_past: date < today,
                is_today: date == today,
                is_selected: belongs_to_current_month
                    && selected.is_some_and(|key| key == date_key(date)),
            }
        })
        .collect();

    MonthGrid { cursor, cells }
}
