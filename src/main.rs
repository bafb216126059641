use std::time::{Duration, Instant};

use anyhow::{Context, Result};
use clap::{Arg, ArgAction, Command};
use crossterm::event::KeyCode;
use log::info;
use ratatui::Terminal;
use ratatui::backend::Backend as RatatuiBackend;
use termfolio::{App, AppMode, Event, EventHandler, Page, logging};
use termfolio::{TerminalGuard, init_panic_hook, init_tui};

/// Tick rate for the event loop.
///
/// Must stay finer than the shortest animation delay (the 50ms erase
/// delay), otherwise typed characters would bunch up.
const TICK_RATE: Duration = Duration::from_millis(25);

fn main() -> Result<()>
{
    init_panic_hook();

    // Parse command line arguments
    let matches = Command::new("termfolio")
        .about("A terminal-based personal portfolio")
        .after_help(format!(
            "Pages: {}.\nLogs are written to: {}",
            Page::ALL
                .iter()
                .map(|page| page.title().to_lowercase())
                .collect::<Vec<_>>()
                .join(", "),
            logging::log_file_path()
                .map_or_else(|_| String::from("<unavailable>"), |path| path
                    .display()
                    .to_string()),
        ))
        .arg(
            Arg::new("page")
                .help("Page to open at startup (e.g. skills)")
                .value_name("PAGE")
                .index(1),
        )
        .arg(
            Arg::new("list-pages")
                .long("list-pages")
                .help("List the available pages and exit")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("clear-log")
                .long("clear-log")
                .help("Remove the log file and exit")
                .action(ArgAction::SetTrue),
        )
        .get_matches();

    if matches.get_flag("list-pages")
    {
        for page in Page::ALL
        {
            println!("{}", page.title().to_lowercase());
        }
        return Ok(());
    }

    if matches.get_flag("clear-log")
    {
        logging::clear_log_file()?;
        println!("Log file removed");
        return Ok(());
    }

    logging::init_logging()?;

    // Resolve the startup page before touching the terminal
    let start_page = match matches.get_one::<String>("page")
    {
        Some(name) => Page::from_name(name).context(format!(
            "Unknown page '{name}' - try one of: {}",
            Page::ALL
                .iter()
                .map(|page| page.title().to_lowercase())
                .collect::<Vec<_>>()
                .join(", ")
        ))?,
        None => Page::Home,
    };

    info!("Starting on the {} page", start_page.title());

    // Use RAII to ensure terminal cleanup happens
    let _terminal_guard = TerminalGuard::new()?;

    let mut terminal = init_tui()?;

    // Create app state; the animator starts if we open on Home
    let app = App::new(start_page, Instant::now())?;

    let event_handler = EventHandler::new(TICK_RATE);

    // Terminal is cleaned up automatically when _terminal_guard is dropped
    run_app(&mut terminal, app, &event_handler)
}

/// Run the main loop
///
/// # Arguments
///
/// * `terminal` - The terminal to draw to
/// * `app` - The app to run
/// * `event_handler` - The event handler to receive events from
///
/// # Errors
///
/// Returns an error if the terminal fails to draw to the screen.
fn run_app<T: RatatuiBackend>(
    terminal: &mut Terminal<T>,
    mut app: App,
    event_handler: &EventHandler,
) -> Result<()>
where
    T::Error: Send + Sync + 'static,
{
    loop
    {
        terminal.draw(|frame| app.render(frame))?;

        match event_handler.next()?
        {
            Event::Tick =>
            {
                app.on_tick(Instant::now());
            }

            Event::Key(key) =>
            {
                match (app.mode, key.code)
                {
                    // Quit with 'q' in normal mode
                    (AppMode::Normal, KeyCode::Char('q')) =>
                    {
                        app.should_quit = true;
                    }

                    // Help toggle with '?'
                    (AppMode::Normal | AppMode::Help, KeyCode::Char('?')) |
                    (AppMode::Help, KeyCode::Esc) =>
                    {
                        app.toggle_help();
                    }

                    // Page navigation
                    (AppMode::Normal, KeyCode::Tab | KeyCode::Char('l') | KeyCode::Right) =>
                    {
                        app.next_page(Instant::now());
                    }
                    (AppMode::Normal, KeyCode::BackTab | KeyCode::Char('h') | KeyCode::Left) =>
                    {
                        app.previous_page(Instant::now());
                    }
                    (AppMode::Normal, KeyCode::Char(digit @ '1'..='7')) =>
                    {
                        // '1' is the first tab
                        let index = digit as usize - '1' as usize;
                        app.goto(Page::ALL[index], Instant::now());
                    }

                    // Scrolling in normal mode
                    (AppMode::Normal, KeyCode::Char('j') | KeyCode::Down) =>
                    {
                        app.scroll_down(1);
                    }
                    (AppMode::Normal, KeyCode::Char('k') | KeyCode::Up) =>
                    {
                        app.scroll_up(1);
                    }
                    // 2 for borders
                    (AppMode::Normal, KeyCode::Char('f') | KeyCode::PageDown) =>
                    {
                        app.scroll_down(
                            terminal
                                .size()?
                                .height
                                .saturating_sub(2)
                                .into(),
                        );
                    }
                    (AppMode::Normal, KeyCode::Char('b') | KeyCode::PageUp) =>
                    {
                        app.scroll_up(
                            terminal
                                .size()?
                                .height
                                .saturating_sub(2)
                                .into(),
                        );
                    }
                    (AppMode::Normal, KeyCode::Char('g')) =>
                    {
                        app.scroll_to_top();
                    }
                    (AppMode::Normal, KeyCode::Char('G')) =>
                    {
                        app.scroll_to_bottom();
                    }

                    _ =>
                    {} // Ignore other key combinations
                }
            }

            // The next draw picks up the new size
            Event::Resize(..) =>
            {}
        }

        if app.should_quit
        {
            break;
        }
    }

    Ok(())
}
