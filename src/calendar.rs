use std::fmt;

use chrono::{Datelike, Local, Month, NaiveDate};
use num_traits::FromPrimitive;

/// Number of days in the given month, accounting for leap years.
pub fn days_of_month(month: &Month, year: i32) -> u32 {
    let first = NaiveDate::from_ymd_opt(year, month.number_from_month(), 1).unwrap();
    let next = if month.number_from_month() == 12 {
        NaiveDate::from_ymd_opt(year + 1, 1, 1)
    } else {
        NaiveDate::from_ymd_opt(year, month.number_from_month() + 1, 1)
    }
    .unwrap();

    next.signed_duration_since(first).num_days() as u32
}

/// A (year, month) pair, the unit of calendar navigation. Always refers to
/// a valid calendar month.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MonthIndex {
    month: Month,
    year: i32,
}

impl MonthIndex {
    pub fn new(month: Month, year: i32) -> Self {
        MonthIndex { month, year }
    }

    pub fn month(&self) -> Month {
        self.month
    }

    pub fn year(&self) -> i32 {
        self.year
    }

    /// The following month, crossing into the next year after December.
    pub fn succ(&self) -> Self {
        let next = self.month.succ();

        MonthIndex {
            month: next,
            year: if next == Month::January {
                self.year + 1
            } else {
                self.year
            },
        }
    }

    /// The preceding month, crossing into the previous year before January.
    pub fn pred(&self) -> Self {
        let prev = self.month.pred();

        MonthIndex {
            month: prev,
            year: if prev == Month::December {
                self.year - 1
            } else {
                self.year
            },
        }
    }

    pub fn num_days(&self) -> u32 {
        days_of_month(&self.month, self.year)
    }

    /// Column of the first day in a Monday-first week grid.
    pub fn first_weekday_offset(&self) -> u32 {
        NaiveDate::from_ymd_opt(self.year, self.month.number_from_month(), 1)
            .unwrap()
            .weekday()
            .num_days_from_monday()
    }

    pub fn contains(&self, date: &NaiveDate) -> bool {
        date.year() == self.year && date.month() == self.month.number_from_month()
    }

    /// Cells for every day of the month, in order. Recomputed fresh on each
    /// call; exactly the cell matching `today` is flagged, if any.
    pub fn day_cells(&self, today: NaiveDate) -> impl Iterator<Item = DayCell> {
        let today_num = if self.contains(&today) {
            Some(today.day())
        } else {
            None
        };

        (1..=self.num_days()).map(move |day| DayCell {
            day_num: day as u8,
            is_today: today_num == Some(day),
        })
    }
}

impl Default for MonthIndex {
    fn default() -> Self {
        MonthIndex::from(Local::now().date_naive())
    }
}

impl<T: Datelike> From<T> for MonthIndex {
    fn from(d: T) -> Self {
        MonthIndex::new(Month::from_u32(d.month()).unwrap(), d.year())
    }
}

impl fmt::Display for MonthIndex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.month.name(), self.year)
    }
}

/// One day-of-month entry, derived per render.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DayCell {
    day_num: u8,
    is_today: bool,
}

impl DayCell {
    pub fn day_num(&self) -> u8 {
        self.day_num
    }

    pub fn is_today(&self) -> bool {
        self.is_today
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pred_succ_round_trip() {
        for year in [1999, 2020, 2024] {
            for month in 1..=12u32 {
                let idx = MonthIndex::new(Month::from_u32(month).unwrap(), year);
                assert_eq!(idx.pred().succ(), idx);
                assert_eq!(idx.succ().pred(), idx);
            }
        }
    }

    #[test]
    fn navigation_crosses_year_boundaries() {
        let jan = MonthIndex::new(Month::January, 2024);
        assert_eq!(jan.pred(), MonthIndex::new(Month::December, 2023));

        let dec = MonthIndex::new(Month::December, 2024);
        assert_eq!(dec.succ(), MonthIndex::new(Month::January, 2025));
    }

    #[test]
    fn days_of_month_2021() {
        let expected = [31, 28, 31, 30, 31, 30, 31, 31, 30, 31, 30, 31];
        for (month, &days) in (1..=12u32).zip(expected.iter()) {
            assert_eq!(days_of_month(&Month::from_u32(month).unwrap(), 2021), days);
        }
    }

    #[test]
    fn february_depends_on_leap_year() {
        let today = NaiveDate::from_ymd_opt(2024, 2, 15).unwrap();

        let cells: Vec<_> = MonthIndex::new(Month::February, 2024)
            .day_cells(today)
            .collect();
        assert_eq!(cells.len(), 29);
        assert!(cells[14].is_today());
        assert_eq!(cells.iter().filter(|c| c.is_today()).count(), 1);

        let cells: Vec<_> = MonthIndex::new(Month::February, 2023)
            .day_cells(today)
            .collect();
        assert_eq!(cells.len(), 28);
        assert_eq!(cells.iter().filter(|c| c.is_today()).count(), 0);
    }

    #[test]
    fn today_flagged_only_in_matching_month() {
        let today = NaiveDate::from_ymd_opt(2024, 3, 1).unwrap();

        for year in [2023, 2024] {
            for month in 1..=12u32 {
                let idx = MonthIndex::new(Month::from_u32(month).unwrap(), year);
                let flagged = idx.day_cells(today).filter(|c| c.is_today()).count();
                if year == 2024 && month == 3 {
                    assert_eq!(flagged, 1);
                } else {
                    assert_eq!(flagged, 0);
                }
            }
        }
    }

    #[test]
    fn day_cells_are_ordered_and_complete() {
        let today = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap();
        let idx = MonthIndex::new(Month::January, 2024);
        let nums: Vec<u8> = idx.day_cells(today).map(|c| c.day_num()).collect();
        assert_eq!(nums, (1..=31).collect::<Vec<u8>>());
    }

    #[test]
    fn title_format() {
        assert_eq!(
            MonthIndex::new(Month::January, 2024).to_string(),
            "January 2024"
        );
    }

    #[test]
    fn weekday_offset_is_monday_based() {
        // 2024-01-01 was a Monday, 2024-02-01 a Thursday.
        assert_eq!(
            MonthIndex::new(Month::January, 2024).first_weekday_offset(),
            0
        );
        assert_eq!(
            MonthIndex::new(Month::February, 2024).first_weekday_offset(),
            3
        );
    }

    #[test]
    fn from_datelike() {
        let date = NaiveDate::from_ymd_opt(2022, 7, 23).unwrap();
        assert_eq!(MonthIndex::from(date), MonthIndex::new(Month::July, 2022));
    }
}
