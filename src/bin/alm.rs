extern crate almanac as lib;

use chrono::{Local, NaiveDate};
use flexi_logger::{FileSpec, Logger};
use itertools::Itertools;
use lib::calendar::MonthIndex;
use lib::events::Dispatcher;
use lib::ui::App;
use nix::sys::{signal, termios};
use std::io::stdout;
use std::path::PathBuf;
use structopt::StructOpt;
use unsegen::base::Terminal;

#[derive(Debug, StructOpt)]
#[structopt(name = "alm", about = "Almanac - a TUI month calendar.")]
pub struct Args {
    #[structopt(
        name = "CONFIG",
        short = "c",
        long = "config",
        help = "path to config file",
        parse(from_os_str)
    )]
    pub configfile: Option<PathBuf>,

    #[structopt(
        short = "s",
        long = "show",
        help = "only show the current month non-interactively"
    )]
    pub show: bool,

    #[structopt(long = "log-file", help = "path to log file", parse(from_os_str))]
    pub log_file: Option<PathBuf>,
}

const CELL_WIDTH: usize = 4;
const WEEKDAYS: &[&str] = &["Mon", "Tue", "Wed", "Thu", "Fri", "Sat", "Sun"];

fn show_month(month: MonthIndex, today: NaiveDate, today_char: Option<char>) {
    println!(
        "{:^width$}",
        month.to_string(),
        width = WEEKDAYS.len() * CELL_WIDTH
    );
    println!(
        "{}",
        WEEKDAYS
            .iter()
            .map(|day| format!("{:>width$}", day, width = CELL_WIDTH))
            .collect::<String>()
    );

    let cells = std::iter::repeat(None)
        .take(month.first_weekday_offset() as usize)
        .chain(month.day_cells(today).map(Some));

    for week in &cells.chunks(WEEKDAYS.len()) {
        let line: String = week
            .map(|cell| match cell {
                Some(cell) => {
                    let marker = if cell.is_today() {
                        today_char.unwrap_or(' ')
                    } else {
                        ' '
                    };
                    format!("{}{:>3}", marker, cell.day_num())
                }
                None => " ".repeat(CELL_WIDTH),
            })
            .collect();
        println!("{}", line.trim_end());
    }
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::from_args();

    const DEFAULT_LOG_LEVEL: &str = if cfg!(debug_assertions) { "debug" } else { "info" };

    let mut logger = Logger::try_with_env_or_str(DEFAULT_LOG_LEVEL)?;

    if let Some(log_file) = args.log_file {
        logger = logger
            .log_to_file(FileSpec::try_from(log_file)?)
            .print_message();
    }

    logger.start()?;

    let config = lib::config::load_suitable_config(args.configfile.as_deref())?;

    let today = Local::now().date_naive();
    log::debug!("Starting on {}", today);

    if args.show {
        show_month(MonthIndex::from(today), today, config.today_char);
        return Ok(());
    }

    const TTY_FD: std::os::unix::io::RawFd = 0;
    let orig_attr = std::sync::Mutex::new(
        termios::tcgetattr(TTY_FD).expect("Failed to get terminal attributes"),
    );

    std::panic::set_hook(Box::new(move |info| {
        // Switch to main terminal screen
        println!("{}{}", termion::screen::ToMainScreen, termion::cursor::Show);

        let _ = termios::tcsetattr(TTY_FD, termios::SetArg::TCSANOW, &orig_attr.lock().unwrap());

        println!("alm ran into a fatal error!");
        println!("{}", info);
        println!("{:?}", backtrace::Backtrace::new());
    }));

    let mut signals_to_wait = signal::SigSet::empty();
    signals_to_wait.add(signal::SIGWINCH);
    signal::pthread_sigmask(signal::SigmaskHow::SIG_BLOCK, Some(&signals_to_wait), None)?;

    let dispatcher = Dispatcher::from_config(&config, signals_to_wait);

    // Setup unsegen terminal
    let stdout = stdout();
    let term = Terminal::new(stdout.lock())?;

    let mut app = App::new(&config, today);

    app.run(dispatcher, term)
}
