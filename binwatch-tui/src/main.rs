//! Terminal UI showing which North Lanarkshire bins are due for collection tomorrow.

mod app;
mod input;
mod ui;

use std::{io, sync::Arc, time::Duration as StdDuration};

use anyhow::Result;
use crossterm::{
    event::{self, DisableMouseCapture, EnableMouseCapture, Event as CEvent},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use reqwest::Client;
use binwatch_core::{registry::CategoryRegistry, service::ScheduleService};
use binwatch_provider_northlanarkshire::NorthLanarkshireSource;

use crate::app::App;
use crate::input::Action;

#[tokio::main]
async fn main() -> Result<()> {
    // HTTP + service setup
    let client = Client::builder().user_agent("binwatch/0.1").build()?;
    let source = Arc::new(NorthLanarkshireSource::new(client));
    let service = Arc::new(ScheduleService::new(
        source,
        CategoryRegistry::north_lanarkshire(),
    ));

    // App state
    let app = App::new(service);

    // Terminal init
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Run event loop
    let res = run(&mut terminal, app).await;

    // Restore terminal
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    res
}

async fn run(terminal: &mut Terminal<CrosstermBackend<io::Stdout>>, mut app: App) -> Result<()> {
    loop {
        // Draw current UI
        terminal.draw(|frame| ui::draw(frame, &app))?;

        // Poll for input (non-blocking, small timeout to keep CPU low)
        if event::poll(StdDuration::from_millis(100))?
            && let CEvent::Key(key) = event::read()?
        {
            let action = input::handle_key_event(key, &mut app);

            match action {
                Action::Quit => break,
                Action::None => {}
                Action::LoadScheduleForCurrentAddress => {
                    if app.select_current_address().is_none() {
                        app.error_message = Some("No address to select".into());
                        continue;
                    }
                    refresh_schedule(terminal, &mut app).await?;
                }
                Action::Reload => {
                    refresh_schedule(terminal, &mut app).await?;
                }
                Action::ToggleSimulation => {
                    app.simulate = !app.simulate;
                    if app.selected_address.is_some() {
                        refresh_schedule(terminal, &mut app).await?;
                    }
                }
            }
        }
    }

    Ok(())
}

/// Load or simulate the schedule for the selected address.
///
/// Each load is awaited to completion before the loop reads further input, so
/// extractions never overlap; rapid re-selection is simply serialized. A
/// failed load keeps the previous snapshot on screen and only sets the error
/// line.
async fn refresh_schedule(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    app: &mut App,
) -> Result<()> {
    let Some(address) = app.selected_address.clone() else {
        app.error_message = Some("Select an address first".into());
        return Ok(());
    };

    let reference = App::reference_day();

    if app.simulate {
        app.snapshot = Some(app.service.simulated(reference));
        app.error_message = None;
        return Ok(());
    }

    app.is_loading = true;
    app.error_message = None;
    terminal.draw(|frame| ui::draw(frame, app))?;

    let res = app.service.load(&address.key, reference).await;

    app.is_loading = false;
    match res {
        Ok(snapshot) => {
            app.snapshot = Some(snapshot);
        }
        Err(err) => {
            app.error_message = Some(format!("Failed to load schedule: {err}"));
        }
    }

    Ok(())
}
