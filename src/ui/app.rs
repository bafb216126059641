//! Application state for the portfolio viewer.
//!
//! Owns the current page, the scroll position, the help overlay and the
//! home-page animations. The animator lives only while the home page is
//! shown: switching away cancels it, switching back restarts it from the
//! first phrase, mirroring how the web version mounted and unmounted the
//! home component.
use std::time::Instant;

use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
    text::{Line, Text},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
};

use super::navbar::{self, Page};
use super::pages;
use crate::animation::{AnimationError, CursorBlink, TypingAnimator, TypingConfig};
use crate::content::PROFILE;

/// Application mode that determines how user input is interpreted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppMode
{
    /// Normal browsing mode - default state
    Normal,
    /// Help overlay is displayed
    Help,
}

/// Main application state.
pub struct App
{
    /// Page currently displayed
    pub page: Page,
    /// Current application mode
    pub mode: AppMode,
    /// Scroll position on the current page, in lines
    pub scroll: usize,
    /// Largest useful scroll position, recomputed on every render
    max_scroll: usize,
    /// Flag indicating if the application should exit
    pub should_quit: bool,
    /// Typewriter animation for the home headline
    animator: TypingAnimator,
    /// Blinking cursor next to the typed headline
    cursor: CursorBlink,
}

impl App
{
    /// Creates the app opened at the given page.
    ///
    /// # Arguments
    ///
    /// * `page` - The page to show first
    /// * `now` - The current timestamp
    ///
    /// # Returns
    ///
    /// A new `App`, or an error if the profile supplies no intro phrases.
    ///
    /// # Errors
    ///
    /// Returns `AnimationError::InvalidConfig` if the phrase list is empty.
    pub fn new(page: Page, now: Instant) -> Result<Self, AnimationError>
    {
        let phrases = PROFILE
            .intro_phrases
            .iter()
            .map(|phrase| (*phrase).to_owned())
            .collect();
        let mut animator = TypingAnimator::new(phrases, TypingConfig::default())?;

        if page == Page::Home
        {
            animator.start(now);
        }

        Ok(Self {
            page,
            mode: AppMode::Normal,
            scroll: 0,
            max_scroll: 0,
            should_quit: false,
            animator,
            cursor: CursorBlink::new(now),
        })
    }

    /// Switches to the given page, resetting the scroll position.
    ///
    /// Entering the home page restarts the typewriter from the first
    /// phrase; leaving it cancels the pending animation deadline.
    ///
    /// # Arguments
    ///
    /// * `page` - The page to switch to
    /// * `now` - The current timestamp
    pub fn goto(&mut self, page: Page, now: Instant)
    {
        if page == self.page
        {
            return;
        }

        if page == Page::Home
        {
            self.animator.start(now);
        }
        else if self.page == Page::Home
        {
            self.animator.stop();
        }

        self.page = page;
        self.scroll = 0;
        self.max_scroll = 0;
    }

    /// Switches to the next page in tab order.
    pub fn next_page(&mut self, now: Instant)
    {
        self.goto(self.page.next(), now);
    }

    /// Switches to the previous page in tab order.
    pub fn previous_page(&mut self, now: Instant)
    {
        self.goto(self.page.previous(), now);
    }

    /// Feeds one clock tick to the running animations.
    ///
    /// # Arguments
    ///
    /// * `now` - The current timestamp
    pub fn on_tick(&mut self, now: Instant)
    {
        if self.page == Page::Home
        {
            self.animator.tick(now);
            self.cursor.tick(now);
        }
    }

    /// Whether the typewriter currently has a pending deadline.
    #[must_use]
    pub const fn is_animating(&self) -> bool
    {
        self.animator.is_running()
    }

    /// Scrolls the current page up by the specified amount.
    pub fn scroll_up(&mut self, amount: usize)
    {
        self.scroll = self.scroll.saturating_sub(amount);
    }

    /// Scrolls the current page down by the specified amount.
    ///
    /// Clamped against the content height measured at the last render.
    pub fn scroll_down(&mut self, amount: usize)
    {
        self.scroll = self
            .scroll
            .saturating_add(amount)
            .min(self.max_scroll);
    }

    /// Jumps to the top of the current page.
    pub const fn scroll_to_top(&mut self)
    {
        self.scroll = 0;
    }

    /// Jumps to the bottom of the current page.
    pub const fn scroll_to_bottom(&mut self)
    {
        self.scroll = self.max_scroll;
    }

    /// Toggles the help overlay.
    pub fn toggle_help(&mut self)
    {
        self.mode = if self.mode == AppMode::Help
        {
            AppMode::Normal
        }
        else
        {
            AppMode::Help
        };
    }

    /// Renders the whole UI to the provided frame.
    ///
    /// # Arguments
    ///
    /// * `frame` - The frame to render the UI to
    pub fn render(&mut self, frame: &mut Frame)
    {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Length(2), Constraint::Min(0)])
            .split(frame.area());

        navbar::render(frame, chunks[0], self.page);

        if self.page == Page::Home
        {
            self.max_scroll = 0;
            pages::render_home(
                frame,
                chunks[1],
                self.animator.display_text(),
                self.cursor.is_visible(),
            );
        }
        else
        {
            self.render_content_page(frame, chunks[1]);
        }

        if self.mode == AppMode::Help
        {
            Self::render_help(frame);
        }
    }

    /// Renders a scrollable content page with its border and title.
    fn render_content_page(&mut self, frame: &mut Frame, area: Rect)
    {
        // 2 for the borders
        let inner_width = area.width.saturating_sub(2);
        let inner_height = usize::from(area.height.saturating_sub(2));

        let lines = pages::lines(self.page, inner_width);

        self.max_scroll = lines.len().saturating_sub(inner_height);
        self.scroll = self.scroll.min(self.max_scroll);

        let title = format!("{} - Press ? for help", self.page.title());

        let paragraph = Paragraph::new(Text::from(lines))
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .title(title),
            )
            .wrap(Wrap { trim: false })
            .scroll((u16::try_from(self.scroll).unwrap_or(u16::MAX), 0));

        frame.render_widget(paragraph, area);
    }

    /// Renders the help overlay with keyboard shortcuts.
    fn render_help(frame: &mut Frame)
    {
        let area = centered_rect(60, 60, frame.area());

        // Clear the area first to make it fully opaque
        frame.render_widget(Clear, area);

        let text = Text::from(vec![
            Line::from("Termfolio Help:"),
            Line::from(""),
            Line::from("Tab/l/→ or Shift-Tab/h/←: Next/previous page"),
            Line::from("1-7: Jump to a page"),
            Line::from("j/k or ↓/↑: Scroll down/up"),
            Line::from("f/b or PgDn/PgUp: Scroll page down/up"),
            Line::from("g/G: Go to top/bottom of page"),
            Line::from("q: Quit"),
            Line::from("?: Toggle help"),
        ]);

        let help_box = Paragraph::new(text)
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .title("Help"),
            )
            .wrap(Wrap { trim: true });

        frame.render_widget(help_box, area);
    }
}

/// Creates a centered rectangle inside the given area.
///
/// # Arguments
///
/// * `percent_x` - Width of the rectangle as a percentage of the parent area
/// * `percent_y` - Height of the rectangle as a percentage of the parent area
/// * `parent` - Parent rectangle
fn centered_rect(percent_x: u16, percent_y: u16, parent: Rect) -> Rect
{
    let popup_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(parent);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(popup_layout[1])[1]
}

#[cfg(test)]
mod tests
{
    use ratatui::Terminal;
    use ratatui::backend::TestBackend;

    use super::*;

    fn app_at(page: Page) -> App
    {
        App::new(page, Instant::now()).unwrap()
    }

    #[test]
    fn starts_animating_only_on_the_home_page()
    {
        assert!(app_at(Page::Home).is_animating());
        assert!(!app_at(Page::Skills).is_animating());
    }

    #[test]
    fn leaving_home_cancels_the_animation()
    {
        let mut app = app_at(Page::Home);
        let now = Instant::now();

        app.next_page(now);
        assert_eq!(app.page, Page::Education);
        assert!(!app.is_animating());

        app.goto(Page::Home, now);
        assert!(app.is_animating());
    }

    #[test]
    fn switching_pages_resets_the_scroll()
    {
        let mut app = app_at(Page::Projects);
        app.max_scroll = 50;
        app.scroll_down(10);
        assert_eq!(app.scroll, 10);

        app.next_page(Instant::now());
        assert_eq!(app.scroll, 0);
    }

    #[test]
    fn scrolling_saturates_at_both_ends()
    {
        let mut app = app_at(Page::Education);
        app.scroll_up(5);
        assert_eq!(app.scroll, 0);

        app.max_scroll = 3;
        app.scroll_down(100);
        assert_eq!(app.scroll, 3);

        app.scroll_to_top();
        assert_eq!(app.scroll, 0);
        app.scroll_to_bottom();
        assert_eq!(app.scroll, 3);
    }

    #[test]
    fn help_overlay_toggles()
    {
        let mut app = app_at(Page::Home);
        assert_eq!(app.mode, AppMode::Normal);
        app.toggle_help();
        assert_eq!(app.mode, AppMode::Help);
        app.toggle_help();
        assert_eq!(app.mode, AppMode::Normal);
    }

    #[test]
    fn render_measures_the_scroll_range()
    {
        let backend = TestBackend::new(80, 10);
        let mut terminal = Terminal::new(backend).unwrap();
        let mut app = app_at(Page::Projects);

        // Request an absurd scroll; the render pass clamps it
        app.max_scroll = usize::MAX;
        app.scroll_down(1_000_000);
        terminal
            .draw(|frame| app.render(frame))
            .unwrap();

        assert!(app.scroll <= app.max_scroll);
        assert!(app.max_scroll < 1_000_000);
    }

    #[test]
    fn render_home_does_not_panic_on_a_tiny_terminal()
    {
        let backend = TestBackend::new(10, 3);
        let mut terminal = Terminal::new(backend).unwrap();
        let mut app = app_at(Page::Home);

        terminal
            .draw(|frame| app.render(frame))
            .unwrap();
    }
}
