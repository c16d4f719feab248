use std::fmt::Display;
use std::fmt::Write;

use unsegen::base::*;
use unsegen::widget::*;

use crate::calendar;
use crate::calendar::MonthIndex;

use super::{Context, Theme};

/// A single day in the month grid, rendered as a marker column plus the
/// right-aligned day number.
pub struct DayCell<'a> {
    cell: calendar::DayCell,
    theme: &'a Theme,
}

impl<'a> DayCell<'a> {
    pub const CELL_HEIGHT: usize = 1;
    pub const CELL_WIDTH: usize = 4;

    fn new(cell: calendar::DayCell, theme: &'a Theme) -> Self {
        DayCell { cell, theme }
    }
}

impl Display for DayCell<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let marker = if self.cell.is_today() {
            self.theme.today_day_char.unwrap_or(' ')
        } else {
            ' '
        };

        write!(f, "{}{:>3}", marker, self.cell.day_num())
    }
}

/// Widget for one month: title row, weekday header, then the day grid.
#[derive(Clone)]
pub struct MonthPane<'a> {
    month: MonthIndex,
    context: &'a Context,
}

impl<'a> MonthPane<'a> {
    const COLUMNS: usize = 7;
    const ROWS: usize = 6;
    const TITLE_ROWS: usize = 1;
    const HEADER_ROWS: usize = 1;

    const HEADER: &'static [&'static str] = &["Mon", "Tue", "Wed", "Thu", "Fri", "Sat", "Sun"];

    pub fn new(month: MonthIndex, context: &'a Context) -> Self {
        MonthPane { month, context }
    }
}

impl Widget for MonthPane<'_> {
    fn space_demand(&self) -> Demand2D {
        Demand2D {
            width: ColDemand::exact(Self::COLUMNS * DayCell::CELL_WIDTH),
            height: RowDemand::exact(
                Self::TITLE_ROWS + Self::HEADER_ROWS + Self::ROWS * DayCell::CELL_HEIGHT,
            ),
        }
    }

    fn draw(&self, mut window: Window, _hints: RenderingHints) {
        let theme = self.context.theme();
        let width = Self::COLUMNS * DayCell::CELL_WIDTH;

        let mut cursor = Cursor::new(&mut window)
            .wrapping_mode(WrappingMode::Wrap)
            .style_modifier(theme.month_title_style.format(theme.month_title_text_style));

        // Title and header each fill a full row, so wrapping advances the
        // cursor to the next line.
        write!(&mut cursor, "{:^width$}", self.month.to_string(), width = width).unwrap();

        cursor.set_style_modifier(
            theme
                .weekday_header_style
                .format(theme.weekday_header_text_style),
        );
        for &head in Self::HEADER {
            write!(
                &mut cursor,
                "{:>width$}",
                &head,
                width = DayCell::CELL_WIDTH
            )
            .unwrap();
        }

        cursor.set_style_modifier(theme.day_style.format(theme.day_text_style));
        cursor.move_by(
            ColDiff::new(
                (DayCell::CELL_WIDTH * self.month.first_weekday_offset() as usize) as i32,
            ),
            RowDiff::new(0),
        );

        for cell in self.month.day_cells(self.context.today()) {
            if cell.is_today() {
                cursor.set_style_modifier(theme.today_day_style.format(theme.today_day_text_style));
            }

            write!(&mut cursor, "{}", DayCell::new(cell, theme)).unwrap();

            if cell.is_today() {
                cursor.set_style_modifier(theme.day_style.format(theme.day_text_style));
            }
        }
    }
}
