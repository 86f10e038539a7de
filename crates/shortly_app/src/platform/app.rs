use std::io::Stdout;
use std::sync::Arc;

use anyhow::Context;
use crossterm::event::{self, Event, KeyEventKind};
use ratatui::backend::CrosstermBackend;
use ratatui::Terminal;
use shortly_core::{update, FormState, Msg};
use shortly_engine::{ArboardClipboard, EngineHandle, ReqwestShorteningClient};
use shortly_logging::{shortly_debug, shortly_info};

use super::config::AppConfig;
use super::effects::EffectRunner;
use super::logging;
use super::ui;
use super::ui::input::KeyAction;

pub fn run_app() -> anyhow::Result<()> {
    let config = AppConfig::from_env().context("invalid configuration")?;
    logging::initialize(config.log_destination, config.log_level);

    let client =
        ReqwestShorteningClient::new(config.client).context("failed to build HTTP client")?;
    shortly_info!("Api used: {}", client.settings().base_url);

    let engine = EngineHandle::new(Arc::new(client), Arc::new(ArboardClipboard::new()))
        .context("failed to start engine")?;
    let runner = EffectRunner::new(engine);
    runner.check_health();

    let (mut terminal, guard) = ui::terminal_guard::setup_terminal()
        .context("failed to prepare terminal")?;
    let result = event_loop(&mut terminal, &runner);
    drop(guard);
    shortly_info!("exiting");
    result
}

fn event_loop(
    terminal: &mut Terminal<CrosstermBackend<Stdout>>,
    runner: &EffectRunner,
) -> anyhow::Result<()> {
    let mut form = Form::default();
    let mut spinner_frame = 0usize;
    let mut needs_draw = true;

    loop {
        if needs_draw {
            let view = form.state.view();
            terminal.draw(|frame| ui::render::draw(frame, &view, spinner_frame))?;
            needs_draw = false;
        }

        if event::poll(ui::constants::TICK_RATE)? {
            let view = form.state.view();
            let action = match event::read()? {
                Event::Key(key) if key.kind == KeyEventKind::Press => {
                    ui::input::map_key(key, &view)
                }
                Event::Paste(text) => ui::input::map_paste(&text, &view),
                Event::Resize(..) => {
                    needs_draw = true;
                    KeyAction::Ignore
                }
                _ => KeyAction::Ignore,
            };
            match action {
                KeyAction::Quit => break,
                KeyAction::Dispatch(msg) => needs_draw |= form.dispatch(msg, runner),
                KeyAction::Ignore => {}
            }
        } else {
            needs_draw |= form.dispatch(Msg::Tick, runner);
            if form.state.is_loading() {
                spinner_frame = spinner_frame.wrapping_add(1);
                needs_draw = true;
            }
        }

        for msg in runner.drain() {
            needs_draw |= form.dispatch(msg, runner);
        }
    }

    Ok(())
}

/// Owns the form state on the UI thread; every change goes through `update`.
#[derive(Default)]
struct Form {
    state: FormState,
}

impl Form {
    /// Applies `msg`, runs resulting effects, and reports whether a redraw is due.
    fn dispatch(&mut self, msg: Msg, runner: &EffectRunner) -> bool {
        shortly_debug!("dispatch {:?}", msg);
        let state = std::mem::take(&mut self.state);
        let (mut state, effects) = update(state, msg);
        let was_dirty = state.consume_dirty();
        self.state = state;
        runner.enqueue(effects);
        was_dirty
    }
}
