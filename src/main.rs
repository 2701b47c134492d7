use std::io;

use anyhow::Context;
use clap::Parser;
use crossterm::{
    event::{
        self, Event, KeyEventKind, KeyboardEnhancementFlags, PopKeyboardEnhancementFlags,
        PushKeyboardEnhancementFlags,
    },
    execute,
    terminal::{
        disable_raw_mode, enable_raw_mode, supports_keyboard_enhancement, EnterAlternateScreen,
        LeaveAlternateScreen, SetTitle,
    },
};
use ratatui::prelude::*;

use shortcut_nav::app::App;
use shortcut_nav::config::Config;
use shortcut_nav::log::{self, LogConfig};
use shortcut_nav::ui;

fn main() -> anyhow::Result<()> {
    let config = Config::parse();
    config.validate()?;

    let mut log_config = LogConfig::default().with_level(config.log_level);
    if let Some(dir) = &config.log_dir {
        log_config = log_config.with_directory(dir);
    }
    let _log = log::init(log_config).context("initialising logging")?;

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    // Without this most terminals fold Ctrl+Shift+<letter> into Ctrl+<letter>.
    // Only disambiguate: reporting all keys as escape codes turns `?` into `/`+Shift.
    let enhanced = supports_keyboard_enhancement().unwrap_or(false);
    if enhanced {
        execute!(
            stdout,
            PushKeyboardEnhancementFlags(KeyboardEnhancementFlags::DISAMBIGUATE_ESCAPE_CODES)
        )?;
    } else {
        tracing::warn!("terminal lacks keyboard enhancement; Shift may not be reported");
    }
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let result = run(&mut terminal, &config);

    // Restore terminal
    if enhanced {
        execute!(terminal.backend_mut(), PopKeyboardEnhancementFlags)?;
    }
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;

    if let Err(err) = &result {
        tracing::error!(error = %err, "exiting on error");
    }
    result
}

fn run(terminal: &mut Terminal<CrosstermBackend<io::Stdout>>, config: &Config) -> anyhow::Result<()> {
    let mut app = App::new(config.start.clone());
    let tick_rate = config.tick_rate();
    let mut shown_title = String::new();

    loop {
        let title = app.page().title().to_string();
        if title != shown_title {
            execute!(terminal.backend_mut(), SetTitle(format!("{title} - shortcut-nav")))?;
            shown_title = title;
        }

        terminal.draw(|frame| ui::render(frame, &mut app))?;

        if event::poll(tick_rate)? {
            if let Event::Key(key) = event::read()? {
                if key.kind == KeyEventKind::Press {
                    app.handle_key(key);
                }
            }
        }

        app.tick();

        if app.should_quit {
            break;
        }
    }

    Ok(())
}
