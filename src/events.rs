use std::io;
use std::sync::mpsc;
use std::thread;

use nix::sys::signal;
use unsegen::input::Input;

use crate::config::Config;

pub enum Event {
    Input(Input),
    Update,
}

/// Fans stdin input, periodic ticks and terminal resize signals into a
/// single channel. All sources are registered exactly once, at
/// construction; consumers poll with [`next`](Dispatcher::next).
pub struct Dispatcher {
    rx: mpsc::Receiver<Event>,
    _input_handle: thread::JoinHandle<()>,
    _tick_handle: thread::JoinHandle<()>,
    _signal_handle: thread::JoinHandle<()>,
}

impl Dispatcher {
    /// `signals` must already be blocked on the calling thread, before any
    /// other thread is spawned.
    pub fn from_config(config: &Config, signals: signal::SigSet) -> Dispatcher {
        let tick_rate = config.tick_rate();
        let (tx, rx) = mpsc::channel();

        let input_handle = {
            let tx = tx.clone();
            thread::spawn(move || {
                let stdin = io::stdin();
                let stdin = stdin.lock();
                for evt in Input::read_all(stdin) {
                    if let Ok(input) = evt {
                        if tx.send(Event::Input(input)).is_err() {
                            return;
                        }
                    }
                }
            })
        };

        let tick_handle = {
            let tx = tx.clone();
            thread::spawn(move || loop {
                if tx.send(Event::Update).is_err() {
                    return;
                }
                thread::sleep(tick_rate);
            })
        };

        let signal_handle = thread::spawn(move || loop {
            if signals.wait().is_ok() && tx.send(Event::Update).is_err() {
                return;
            }
        });

        Dispatcher {
            rx,
            _input_handle: input_handle,
            _tick_handle: tick_handle,
            _signal_handle: signal_handle,
        }
    }

    pub fn next(&self) -> Result<Event, mpsc::RecvError> {
        self.rx.recv()
    }
}
