use std::io::{self, Stdout};

use anyhow::Result;
use crossterm::{
    event::{DisableMouseCapture, EnableMouseCapture},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen, SetTitle},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use tracing::info;

use heartbeats_core::timeline::SmoothingMode;
use heartbeats_core::AppConfig;
use heartbeats_tui::{
    event::{AppEvent, EventHandler},
    input::handle_key_event,
    keymap::Keymap,
    ui, App,
};

pub async fn run(config: AppConfig, mode: Option<SmoothingMode>) -> Result<()> {
    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture, SetTitle("HeartBeats"))?;

    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let result = run_loop(&mut terminal, config, mode).await;

    // Restore terminal even when the loop failed
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    result
}

async fn run_loop(
    terminal: &mut Terminal<CrosstermBackend<Stdout>>,
    config: AppConfig,
    mode: Option<SmoothingMode>,
) -> Result<()> {
    let keymap = Keymap::from_config(&config.keymap);
    let mut events = EventHandler::new(config.ui.animation_fps);

    let size = terminal.size()?;
    let mut app = App::new(config, mode, (size.width, size.height));

    // Main loop
    loop {
        if app.take_redraw() {
            terminal.draw(|frame| ui::draw(frame, &app))?;
        }

        match events.next().await? {
            AppEvent::Key(key) => {
                let action = handle_key_event(key, &app, &keymap);
                app.handle_action(action);
            }
            AppEvent::MouseScroll(lines) => app.scroll_lines(lines),
            AppEvent::Resize(cols, rows) => app.resize(cols, rows),
            AppEvent::Frame => app.on_frame(),
        }

        if app.should_quit {
            break;
        }
    }

    let last = app.unmount();
    info!(
        offset = last.raw_offset,
        hero = last.phases.hero,
        gallery = last.phases.gallery,
        expansion = last.phases.expansion,
        "Preview closed"
    );
    Ok(())
}
