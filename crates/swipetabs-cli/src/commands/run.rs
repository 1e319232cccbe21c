use std::io;
use std::sync::Arc;
use std::time::Instant;

use anyhow::Result;
use crossterm::{
    event::{DisableMouseCapture, EnableMouseCapture},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen, SetTitle},
};
use ratatui::{backend::CrosstermBackend, layout::Rect, Terminal};

use swipetabs_core::AppConfig;
use swipetabs_tui::{
    app::App,
    event::{AppEvent, EventHandler},
    input::{handle_key_event, handle_mouse_event},
    widgets::{ContentWidget, HeaderWidget, StatusBarWidget},
};

pub async fn run(config: Arc<AppConfig>) -> Result<()> {
    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture, SetTitle("Swipetabs"))?;

    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let result = event_loop(&mut terminal, config);

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

fn event_loop(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    config: Arc<AppConfig>,
) -> Result<()> {
    let event_handler =
        EventHandler::with_frame_interval(config.ui.tick_rate_ms, config.animation.frame_interval());

    let mut app = App::new(config);
    let size = terminal.size()?;
    app.set_viewport(Rect::new(0, 0, size.width, size.height), Instant::now());

    tracing::info!(tabs = app.tab_count(), "Terminal UI started");

    // Checked at the end of each iteration to pick the next poll rate
    let mut needs_fast_update = true;

    loop {
        app.update(Instant::now());

        terminal.draw(|frame| {
            HeaderWidget::render(frame, app.header_area, &app);
            ContentWidget::render(frame, app.content_area, &app);
            StatusBarWidget::render(frame, app.status_area, &app);
        })?;

        let event = if needs_fast_update {
            event_handler.next_animation()?
        } else {
            event_handler.next()?
        };
        if let Some(event) = event {
            let now = Instant::now();
            match event {
                AppEvent::Key(key) => {
                    let action = handle_key_event(key);
                    app.handle_action(action, now);
                }
                AppEvent::Mouse(mouse) => {
                    let action = handle_mouse_event(mouse, &mut app, now);
                    app.handle_action(action, now);
                }
                AppEvent::Resize(width, height) => {
                    app.set_viewport(Rect::new(0, 0, width, height), now);
                }
                AppEvent::Tick => {}
            }
        }

        needs_fast_update = app.needs_update() || app.gesture.is_active();

        if app.should_quit {
            break;
        }
    }

    tracing::info!("Terminal UI stopped");
    Ok(())
}
