use std::thread;
use std::time::Duration;

use anyhow::{anyhow, Result};
use crossterm::event::{self, Event, KeyEvent, KeyEventKind, MouseEventKind};
use tokio::sync::mpsc::{self, UnboundedReceiver, UnboundedSender};
use tokio::time::{interval, Interval, MissedTickBehavior};
use tracing::{debug, warn};

/// How long the input thread blocks before checking whether it should stop
const INPUT_POLL: Duration = Duration::from_millis(100);

/// Application events
#[derive(Debug)]
pub enum AppEvent {
    /// A key was pressed
    Key(KeyEvent),
    /// Mouse wheel moved; positive is down
    MouseScroll(i32),
    /// Terminal was resized
    Resize(u16, u16),
    /// Display refresh at the animation rate
    Frame,
}

/// Merges terminal input with a fixed-rate frame clock
///
/// Input is read on its own thread and queued, so any number of scroll
/// events can arrive between two frames.
pub struct EventHandler {
    input: UnboundedReceiver<AppEvent>,
    frames: Interval,
}

impl EventHandler {
    pub fn new(animation_fps: u32) -> Self {
        let (tx, rx) = mpsc::unbounded_channel();
        thread::spawn(move || read_input(tx));

        let period = Duration::from_secs_f64(1.0 / animation_fps.max(1) as f64);
        let mut frames = interval(period);
        frames.set_missed_tick_behavior(MissedTickBehavior::Skip);

        Self { input: rx, frames }
    }

    /// Wait for the next input event or frame
    pub async fn next(&mut self) -> Result<AppEvent> {
        tokio::select! {
            event = self.input.recv() => event.ok_or_else(|| anyhow!("Terminal input closed")),
            _ = self.frames.tick() => Ok(AppEvent::Frame),
        }
    }
}

fn read_input(tx: UnboundedSender<AppEvent>) {
    while !tx.is_closed() {
        match event::poll(INPUT_POLL) {
            Ok(false) => continue,
            Ok(true) => {}
            Err(e) => {
                warn!("Failed to poll terminal input: {}", e);
                break;
            }
        }

        let event = match event::read() {
            Ok(event) => event,
            Err(e) => {
                warn!("Failed to read terminal input: {}", e);
                break;
            }
        };

        if let Some(event) = translate(event) {
            if tx.send(event).is_err() {
                break;
            }
        }
    }
    debug!("Input reader stopped");
}

fn translate(event: Event) -> Option<AppEvent> {
    match event {
        // Only handle key press events, ignore release events
        // (crossterm 0.27+ sends release events on some systems)
        Event::Key(key) if key.kind == KeyEventKind::Press => Some(AppEvent::Key(key)),
        Event::Mouse(mouse) => match mouse.kind {
            MouseEventKind::ScrollDown => Some(AppEvent::MouseScroll(1)),
            MouseEventKind::ScrollUp => Some(AppEvent::MouseScroll(-1)),
            _ => None,
        },
        Event::Resize(w, h) => Some(AppEvent::Resize(w, h)),
        _ => None,
    }
}
