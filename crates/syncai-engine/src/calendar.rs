//! Month-grid view of the schedule.
//!
//! The grid is computed from real dates (Monday-first weeks, whole
//! rows, adjacent-month padding) but the events on it are seeded
//! illustrative data; nothing is read from a calendar provider.

use chrono::{Datelike, Days, NaiveDate, Weekday};
use serde::{Deserialize, Serialize};

/// Weekday header labels, Monday first.
pub const DAY_NAMES: [&str; 7] = ["Mon", "Tue", "Wed", "Thu", "Fri", "Sat", "Sun"];

/// Accent used when rendering an event chip.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EventAccent {
    Primary,
    Accent,
    Secondary,
    Neutral,
}

/// A scheduled event shown on the month grid.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CalendarEvent {
    /// Day the event occurs on.
    pub date: NaiveDate,
    /// Event title.
    pub title: String,
    /// Start time label, e.g. "10:00 AM".
    pub time: String,
    /// Rendering accent.
    pub accent: EventAccent,
}

impl CalendarEvent {
    fn new(date: NaiveDate, title: &str, time: &str, accent: EventAccent) -> Self {
        Self {
            date,
            title: title.into(),
            time: time.into(),
            accent,
        }
    }
}

/// One cell of the month grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MonthCell {
    /// The cell's date.
    pub date: NaiveDate,
    /// Whether the date falls inside the displayed month.
    pub in_month: bool,
    /// Whether the date is "today".
    pub is_today: bool,
}

/// The month being displayed, plus the seeded events.
#[derive(Debug, Clone)]
pub struct MonthView {
    /// First day of the displayed month.
    first: NaiveDate,
    /// The date highlighted as today.
    today: NaiveDate,
    events: Vec<CalendarEvent>,
}

/// The four illustrative events the product ships with, all in
/// October 2026.
pub fn seed_events() -> Vec<CalendarEvent> {
    let day = |d| NaiveDate::from_ymd_opt(2026, 10, d).expect("valid seed date");
    vec![
        CalendarEvent::new(day(4), "Design Sync", "10:00 AM", EventAccent::Primary),
        CalendarEvent::new(day(12), "Marketing Review", "2:30 PM", EventAccent::Accent),
        CalendarEvent::new(day(15), "1:1 with Alex", "11:00 AM", EventAccent::Secondary),
        CalendarEvent::new(day(22), "Board Meeting", "1:00 PM", EventAccent::Neutral),
    ]
}

impl MonthView {
    /// The seeded view: October 2026 with the 15th as today.
    pub fn seeded() -> Self {
        Self {
            first: NaiveDate::from_ymd_opt(2026, 10, 1).expect("valid seed month"),
            today: NaiveDate::from_ymd_opt(2026, 10, 15).expect("valid seed today"),
            events: seed_events(),
        }
    }

    /// Display label, e.g. "October 2026".
    pub fn label(&self) -> String {
        self.first.format("%B %Y").to_string()
    }

    /// Move to the previous month.
    pub fn prev_month(&mut self) {
        self.first = self
            .first
            .pred_opt()
            .map(|d| d.with_day(1).expect("day 1 always valid"))
            .unwrap_or(self.first);
    }

    /// Move to the next month.
    pub fn next_month(&mut self) {
        let days_left = u64::from(self.days_in_month()) - u64::from(self.first.day()) + 1;
        if let Some(next) = self.first.checked_add_days(Days::new(days_left)) {
            self.first = next;
        }
    }

    /// Number of days in the displayed month.
    fn days_in_month(&self) -> u32 {
        let (year, month) = if self.first.month() == 12 {
            (self.first.year() + 1, 1)
        } else {
            (self.first.year(), self.first.month() + 1)
        };
        NaiveDate::from_ymd_opt(year, month, 1)
            .and_then(|d| d.pred_opt())
            .map_or(31, |d| d.day())
    }

    /// Full grid of cells: whole Monday-first weeks padded with the
    /// adjacent months' days.
    pub fn cells(&self) -> Vec<MonthCell> {
        let leading = u64::from(self.first.weekday().num_days_from_monday());
        let start = self
            .first
            .checked_sub_days(Days::new(leading))
            .unwrap_or(self.first);

        let total = leading + u64::from(self.days_in_month());
        let rows = total.div_ceil(7);

        (0..rows * 7)
            .filter_map(|i| start.checked_add_days(Days::new(i)))
            .map(|date| MonthCell {
                date,
                in_month: date.month() == self.first.month() && date.year() == self.first.year(),
                is_today: date == self.today,
            })
            .collect()
    }

    /// Events occurring on a specific date.
    pub fn events_on(&self, date: NaiveDate) -> Vec<&CalendarEvent> {
        self.events.iter().filter(|e| e.date == date).collect()
    }

    /// All seeded events, in date order.
    pub fn events(&self) -> &[CalendarEvent] {
        &self.events
    }
}

impl Default for MonthView {
    fn default() -> Self {
        Self::seeded()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_seeded_month_label() {
        let view = MonthView::seeded();
        assert_eq!(view.label(), "October 2026");
    }

    #[test]
    fn test_seeded_grid_shape() {
        let view = MonthView::seeded();
        let cells = view.cells();
        // October 2026 starts on a Thursday: 3 leading days, 31 in
        // month, 1 trailing, five full weeks.
        assert_eq!(cells.len(), 35);
        assert_eq!(cells[0].date, NaiveDate::from_ymd_opt(2026, 9, 28).unwrap());
        assert!(!cells[0].in_month);
        assert_eq!(cells[3].date, NaiveDate::from_ymd_opt(2026, 10, 1).unwrap());
        assert!(cells[3].in_month);
        assert_eq!(cells[34].date, NaiveDate::from_ymd_opt(2026, 11, 1).unwrap());
        assert!(!cells[34].in_month);
    }

    #[test]
    fn test_grid_starts_on_monday() {
        let view = MonthView::seeded();
        assert_eq!(view.cells()[0].date.weekday(), Weekday::Mon);
    }

    #[test]
    fn test_today_is_marked_once() {
        let view = MonthView::seeded();
        let today_cells = view.cells().iter().filter(|c| c.is_today).count();
        assert_eq!(today_cells, 1);
    }

    #[test]
    fn test_seed_events_land_on_their_days() {
        let view = MonthView::seeded();
        let oct = |d| NaiveDate::from_ymd_opt(2026, 10, d).unwrap();

        let on_fourth = view.events_on(oct(4));
        assert_eq!(on_fourth.len(), 1);
        assert_eq!(on_fourth[0].title, "Design Sync");

        assert!(view.events_on(oct(5)).is_empty());
        assert_eq!(view.events().len(), 4);
    }

    #[test]
    fn test_month_navigation_round_trip() {
        let mut view = MonthView::seeded();
        view.next_month();
        assert_eq!(view.label(), "November 2026");
        view.prev_month();
        assert_eq!(view.label(), "October 2026");
        view.prev_month();
        assert_eq!(view.label(), "September 2026");
    }

    #[test]
    fn test_december_rolls_into_next_year() {
        let mut view = MonthView::seeded();
        view.next_month();
        view.next_month();
        assert_eq!(view.label(), "December 2026");
        view.next_month();
        assert_eq!(view.label(), "January 2027");
    }

    #[test]
    fn test_navigated_month_has_no_seed_events() {
        let mut view = MonthView::seeded();
        view.next_month();
        let has_events = view.cells().iter().any(|c| !view.events_on(c.date).is_empty());
        assert!(!has_events);
    }
}
