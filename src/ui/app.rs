use chrono::NaiveDate;

use crate::config::Config;
use crate::events::{Dispatcher, Event};

use super::{Context, MonthPane, Theme};

use unsegen::base::Terminal;
use unsegen::input::{Key, OperationResult, ScrollBehavior, Scrollable};
use unsegen::widget::*;

pub struct App {
    context: Context,
}

impl App {
    pub fn new(config: &Config, today: NaiveDate) -> App {
        let theme = Theme {
            today_day_char: config.today_char,
            ..Theme::default()
        };

        App {
            context: Context::new(today).with_theme(theme),
        }
    }

    fn bottom_bar<'w>(&'w self) -> impl Widget + 'w {
        "h/l: previous/next month  t: today  q: quit".with_demand(|_| Demand2D {
            width: ColDemand::at_least(1),
            height: RowDemand::exact(1),
        })
    }

    fn as_widget<'w>(&'w self) -> impl Widget + 'w {
        VLayout::new()
            .widget(HLayout::new().widget(MonthPane::new(self.context.displayed(), &self.context)))
            .widget(self.bottom_bar())
    }

    pub fn run(
        &mut self,
        dispatcher: Dispatcher,
        mut term: Terminal,
    ) -> Result<(), Box<dyn std::error::Error>> {
        let mut run = true;

        while run {
            // Draw first so the current month is visible before any input.
            let root = term.create_root_window();
            self.as_widget().draw(root, RenderingHints::default());
            term.present();

            // Handle events
            if let Ok(event) = dispatcher.next() {
                match event {
                    Event::Update => {}
                    Event::Input(input) => {
                        if input.matches(Key::Char('q')) {
                            run = false;
                        } else if input.matches(Key::Char('t')) {
                            self.context.select_today();
                        } else {
                            let leftover = input
                                .chain(
                                    ScrollBehavior::new(&mut MonthScrollBehaviour(
                                        &mut self.context,
                                    ))
                                    .forwards_on(Key::Char('l'))
                                    .backwards_on(Key::Char('h')),
                                )
                                .finish();

                            if let Some(input) = leftover {
                                if input.matches(Key::Right) {
                                    self.context.next_month();
                                } else if input.matches(Key::Left) {
                                    self.context.prev_month();
                                }
                            }
                        }
                    }
                }
            }
        }

        Ok(())
    }
}

/// Month navigation expressed as scrolling: forwards is the next month,
/// backwards the previous one.
struct MonthScrollBehaviour<'a>(&'a mut Context);

impl Scrollable for MonthScrollBehaviour<'_> {
    fn scroll_forwards(&mut self) -> OperationResult {
        self.0.next_month();
        Ok(())
    }

    fn scroll_backwards(&mut self) -> OperationResult {
        self.0.prev_month();
        Ok(())
    }
}
