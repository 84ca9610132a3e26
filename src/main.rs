// Binary includes library modules - some public API items are only for library consumers
#![allow(unused)]

use std::io;
use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;

use anyhow::Result;
use clap::Parser;
use crossterm::{
    event::{DisableMouseCapture, EnableMouseCapture, Event},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{
    backend::CrosstermBackend,
    layout::{Constraint, Layout},
    Terminal,
};

mod api;
mod app;
mod data;
mod events;
mod settings;
mod source;
mod store;
mod sync;
mod ui;

use api::{HttpApi, MonitorApi};
use app::{App, Role, View};
use settings::Settings;
use source::StatusSource;
use store::NotificationStore;

#[derive(Parser, Debug)]
#[command(name = "aquawatch")]
#[command(about = "Settings and diagnostics TUI for an ESP32 water quality monitor")]
struct Args {
    /// Base URL of the monitoring backend
    #[arg(short, long)]
    server: Option<String>,

    /// Role to run the client as (gates editing and admin views)
    #[arg(short = 'R', long, value_enum, default_value_t = Role::Viewer)]
    role: Role,

    /// Device-status refresh interval in seconds
    #[arg(short, long)]
    refresh: Option<u64>,

    /// Path to the notification preference store
    #[arg(long)]
    store: Option<PathBuf>,

    /// Path to a TOML settings file
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Print current thresholds and device status as JSON and exit
    #[arg(long)]
    check: bool,
}

fn main() -> Result<()> {
    let args = Args::parse();

    let mut settings = Settings::load(args.config.as_deref())?;
    if let Some(server) = args.server {
        settings.server = server;
    }
    if let Some(refresh) = args.refresh {
        settings.refresh_secs = refresh;
    }
    if let Some(store) = args.store {
        settings.store_path = store;
    }

    let rt = tokio::runtime::Runtime::new()?;

    let api = HttpApi::builder()
        .endpoint(&settings.server)
        .timeout(Duration::from_secs(settings.timeout_secs))
        .build();

    // Handle check mode (non-interactive)
    if args.check {
        return check_to_stdout(&rt, &api);
    }

    let api: Arc<dyn MonitorApi> = Arc::new(api);
    let store = NotificationStore::new(&settings.store_path);

    run_tui(
        api,
        store,
        args.role,
        Duration::from_secs(settings.refresh_secs),
        &rt,
    )
}

/// Fetch current thresholds and device status, print them as JSON, and exit.
///
/// The JSON is printed even when the device fetch fails (with a
/// `device_error` field instead of `device`), but the process still exits
/// non-zero so scripts gating on the exit code notice a dead device.
fn check_to_stdout(rt: &tokio::runtime::Runtime, api: &dyn MonitorApi) -> Result<()> {
    let thresholds = rt.block_on(api.fetch_thresholds())?;
    let device = rt.block_on(api.fetch_device_status());

    let mut out = serde_json::Map::new();
    out.insert("thresholds".to_string(), serde_json::to_value(&thresholds)?);
    let device_error = match device {
        Ok(status) => {
            out.insert("device".to_string(), serde_json::to_value(&status)?);
            None
        }
        Err(e) => {
            out.insert("device_error".to_string(), serde_json::json!(e.to_string()));
            Some(e)
        }
    };

    println!(
        "{}",
        serde_json::to_string_pretty(&serde_json::Value::Object(out))?
    );

    if let Some(e) = device_error {
        anyhow::bail!("device status check failed: {}", e);
    }
    Ok(())
}

/// Run the TUI against the given backend.
fn run_tui(
    api: Arc<dyn MonitorApi>,
    store: NotificationStore,
    role: Role,
    refresh_interval: Duration,
    rt: &tokio::runtime::Runtime,
) -> Result<()> {
    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Setup panic hook to restore terminal
    let original_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |panic| {
        let _ = disable_raw_mode();
        let _ = execute!(io::stdout(), LeaveAlternateScreen);
        original_hook(panic);
    }));

    // Background device-status poller
    let mut status_source = StatusSource::spawn(api.clone(), refresh_interval, rt.handle());

    // Create app and load initial data
    let mut app = App::new(api, store, role, rt.handle().clone());
    app.load_thresholds();

    // Run the main loop
    let result = run_app(&mut terminal, &mut app, &mut status_source);

    // Restore terminal
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    result
}

fn run_app(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    app: &mut App,
    status_source: &mut StatusSource,
) -> Result<()> {
    // Minimum terminal size for usable display
    const MIN_WIDTH: u16 = 60;
    const MIN_HEIGHT: u16 = 12;

    while app.running {
        // Draw UI
        terminal.draw(|frame| {
            let area = frame.area();

            // Check for minimum terminal size
            if area.width < MIN_WIDTH || area.height < MIN_HEIGHT {
                let msg = format!(
                    "Terminal too small: {}x{}\nMinimum: {}x{}\n\nResize to continue",
                    area.width, area.height, MIN_WIDTH, MIN_HEIGHT
                );
                let paragraph = ratatui::widgets::Paragraph::new(msg)
                    .alignment(ratatui::layout::Alignment::Center)
                    .style(ratatui::style::Style::default().fg(ratatui::style::Color::Yellow));
                frame.render_widget(paragraph, undersized_banner(area));
                return;
            }

            let chunks = Layout::vertical([
                Constraint::Length(1), // Header bar
                Constraint::Length(1), // Tabs
                Constraint::Min(8),    // Content
                Constraint::Length(1), // Status bar
            ])
            .split(area);

            ui::common::render_header(frame, app, chunks[0]);
            ui::common::render_tabs(frame, app, chunks[1]);

            match app.current_view {
                View::Thresholds => ui::thresholds::render(frame, app, chunks[2]),
                View::Notifications => ui::notifications::render(frame, app, chunks[2]),
                View::Device => ui::device::render(frame, app, chunks[2]),
                View::Users => ui::users::render(frame, app, chunks[2]),
            }

            ui::common::render_status_bar(frame, app, chunks[3]);

            // Render confirmation dialog if active
            if app.confirm.is_some() {
                ui::common::render_confirm(frame, app, area);
            }

            // Render help overlay if active
            if app.show_help {
                ui::common::render_help(frame, app, area);
            }
        })?;

        // Poll for events with a short timeout
        if let Some(event) = events::poll_event(Duration::from_millis(100))? {
            match event {
                Event::Key(key) => events::handle_key_event(app, key),
                Event::Resize(_, _) => {
                    // Terminal will redraw on next iteration
                }
                _ => {}
            }
        }

        // Pick up the latest device status from the background poller
        if let Some(status) = status_source.poll() {
            app.device = Some(status);
        }
        app.device_error = status_source.last_error();

        // Run any scheduled post-save reload
        app.tick();
    }

    Ok(())
}

/// Centered area for the too-small banner. Must stay in bounds even on
/// terminals shorter than the banner itself.
fn undersized_banner(area: ratatui::layout::Rect) -> ratatui::layout::Rect {
    let y = (area.height / 2).saturating_sub(2);
    ratatui::layout::Rect::new(0, y, area.width, 5)
}
