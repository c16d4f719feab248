use chrono::NaiveDate;

use unsegen::base::style::*;

use crate::calendar::MonthIndex;

#[derive(Clone, Debug)]
pub struct Theme {
    pub day_style: StyleModifier,
    pub day_text_style: TextFormatModifier,
    pub today_day_style: StyleModifier,
    pub today_day_text_style: TextFormatModifier,
    pub today_day_char: Option<char>,
    pub weekday_header_style: StyleModifier,
    pub weekday_header_text_style: TextFormatModifier,
    pub month_title_style: StyleModifier,
    pub month_title_text_style: TextFormatModifier,
}

impl Default for Theme {
    fn default() -> Self {
        Theme {
            day_style: StyleModifier::default(),
            day_text_style: TextFormatModifier::default(),
            today_day_style: StyleModifier::default().invert(true),
            today_day_text_style: TextFormatModifier::default(),
            today_day_char: Some('*'),
            weekday_header_style: StyleModifier::default(),
            weekday_header_text_style: TextFormatModifier::default().bold(true),
            month_title_style: StyleModifier::default().fg_color(Color::Yellow),
            month_title_text_style: TextFormatModifier::default(),
        }
    }
}

/// All mutable UI state: the displayed month and the reference date for
/// the today marker. The reference date is captured once at startup.
pub struct Context {
    theme: Theme,
    displayed: MonthIndex,
    today: NaiveDate,
}

impl Context {
    pub fn new(today: NaiveDate) -> Self {
        Context {
            theme: Theme::default(),
            displayed: MonthIndex::from(today),
            today,
        }
    }

    pub fn with_theme(mut self, theme: Theme) -> Self {
        self.theme = theme;
        self
    }

    pub fn theme(&self) -> &Theme {
        &self.theme
    }

    pub fn displayed(&self) -> MonthIndex {
        self.displayed
    }

    pub fn today(&self) -> NaiveDate {
        self.today
    }

    pub fn next_month(&mut self) {
        self.displayed = self.displayed.succ();
        log::debug!("Displaying {}", self.displayed);
    }

    pub fn prev_month(&mut self) {
        self.displayed = self.displayed.pred();
        log::debug!("Displaying {}", self.displayed);
    }

    pub fn select_today(&mut self) {
        self.displayed = MonthIndex::from(self.today);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Month;

    #[test]
    fn navigation_returns_to_today() {
        let today = NaiveDate::from_ymd_opt(2024, 6, 10).unwrap();
        let mut context = Context::new(today);

        context.prev_month();
        context.prev_month();
        assert_eq!(context.displayed(), MonthIndex::new(Month::April, 2024));

        context.select_today();
        assert_eq!(context.displayed(), MonthIndex::new(Month::June, 2024));
    }
}
