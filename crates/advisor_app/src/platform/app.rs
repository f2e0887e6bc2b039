use std::io::{self, Stdout};
use std::time::{Duration, Instant};

use advisor_core::{update, AppState, Msg};
use advisor_engine::ClientSettings;
use advisor_logging::advisor_info;
use anyhow::Result;
use crossterm::{
    event::{self, DisableBracketedPaste, EnableBracketedPaste, Event, KeyEventKind},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};

use super::effects::EffectRunner;
use super::ui::input::UiState;
use super::ui::render;

/// Interval between `Tick` messages; drives the busy indicator.
const TICK_INTERVAL: Duration = Duration::from_millis(75);

type AdvisorTerminal = Terminal<CrosstermBackend<Stdout>>;

pub fn run_tui(settings: ClientSettings) -> Result<()> {
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableBracketedPaste)?;
    let mut terminal = Terminal::new(CrosstermBackend::new(stdout))?;

    let result = event_loop(&mut terminal, settings);

    // Restore the terminal even when the loop failed.
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        DisableBracketedPaste,
        LeaveAlternateScreen
    )?;
    terminal.show_cursor()?;

    result
}

struct App {
    state: AppState,
    ui: UiState,
    runner: EffectRunner,
    needs_redraw: bool,
}

impl App {
    fn dispatch(&mut self, msg: Msg) {
        let state = std::mem::take(&mut self.state);
        let (mut state, effects) = update(state, msg);
        if state.consume_dirty() {
            self.needs_redraw = true;
        }
        self.state = state;
        self.runner.enqueue(effects);
    }

    fn handle_event(&mut self, event: Event) {
        let view = self.state.view();
        let msgs = match event {
            Event::Key(key) if key.kind == KeyEventKind::Press => self.ui.handle_key(&view, key),
            Event::Paste(text) => self.ui.handle_paste(&view, &text),
            Event::Resize(..) => Vec::new(),
            _ => return,
        };
        // Focus and typed paths are UI-only, so input always repaints.
        self.needs_redraw = true;
        for msg in msgs {
            self.dispatch(msg);
        }
    }
}

fn event_loop(terminal: &mut AdvisorTerminal, settings: ClientSettings) -> Result<()> {
    advisor_info!("Starting TUI; endpoint {}", settings.endpoint);
    let mut app = App {
        state: AppState::new(),
        ui: UiState::default(),
        runner: EffectRunner::new(settings),
        needs_redraw: true,
    };
    let mut last_tick = Instant::now();

    while !app.ui.should_quit {
        if app.needs_redraw {
            let view = app.state.view();
            terminal.draw(|frame| render::render(frame, &view, &app.ui))?;
            app.needs_redraw = false;
        }

        let timeout = TICK_INTERVAL.saturating_sub(last_tick.elapsed());
        if event::poll(timeout)? {
            app.handle_event(event::read()?);
        }

        for msg in app.runner.drain()? {
            app.dispatch(msg);
        }

        if last_tick.elapsed() >= TICK_INTERVAL {
            app.dispatch(Msg::Tick);
            last_tick = Instant::now();
        }
    }

    advisor_info!("TUI closed");
    Ok(())
}
