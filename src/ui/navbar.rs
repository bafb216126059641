//! Navigation bar.
//!
//! The portfolio is a fixed set of pages cycled with the keyboard. This
//! module owns the page enumeration (the "router") and the tab bar that
//! shows where the user currently is.
use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::symbols::line::VERTICAL;
use ratatui::text::Line;
use ratatui::widgets::{Block, Borders, Tabs};

const ACTIVE_TAB_STYLE: Style = Style::new()
    .fg(Color::LightYellow)
    .add_modifier(Modifier::BOLD);

const NAVBAR_BORDER_STYLE: Style = Style::new().fg(Color::Gray);

/// The pages of the portfolio, in navigation order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Page
{
    Home,
    Education,
    Skills,
    Experience,
    Projects,
    Leadership,
    Achievements,
}

impl Page
{
    /// All pages in the order they appear in the tab bar.
    pub const ALL: [Self; 7] = [
        Self::Home,
        Self::Education,
        Self::Skills,
        Self::Experience,
        Self::Projects,
        Self::Leadership,
        Self::Achievements,
    ];

    /// The tab label for this page.
    #[must_use]
    pub const fn title(self) -> &'static str
    {
        match self
        {
            Self::Home => "Home",
            Self::Education => "Education",
            Self::Skills => "Skills",
            Self::Experience => "Experience",
            Self::Projects => "Projects",
            Self::Leadership => "Leadership",
            Self::Achievements => "Achievements",
        }
    }

    /// Position of this page in the tab bar.
    #[must_use]
    pub const fn index(self) -> usize
    {
        match self
        {
            Self::Home => 0,
            Self::Education => 1,
            Self::Skills => 2,
            Self::Experience => 3,
            Self::Projects => 4,
            Self::Leadership => 5,
            Self::Achievements => 6,
        }
    }

    /// The page after this one, wrapping around at the end.
    #[must_use]
    pub const fn next(self) -> Self
    {
        Self::ALL[(self.index() + 1) % Self::ALL.len()]
    }

    /// The page before this one, wrapping around at the start.
    #[must_use]
    pub const fn previous(self) -> Self
    {
        Self::ALL[(self.index() + Self::ALL.len() - 1) % Self::ALL.len()]
    }

    /// Looks a page up by its (case-insensitive) name.
    ///
    /// Accepts the plural spellings the web navbar used as well.
    ///
    /// # Arguments
    ///
    /// * `name` - The page name, e.g. `"skills"`
    ///
    /// # Returns
    ///
    /// The matching page, or `None` for an unknown name.
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self>
    {
        match name.to_lowercase().as_str()
        {
            "home" => Some(Self::Home),
            "education" => Some(Self::Education),
            "skill" | "skills" => Some(Self::Skills),
            "experience" | "experiences" => Some(Self::Experience),
            "project" | "projects" => Some(Self::Projects),
            "leadership" | "leaderships" => Some(Self::Leadership),
            "achievement" | "achievements" => Some(Self::Achievements),
            _ => None,
        }
    }
}

/// Renders the tab bar with the active page highlighted.
///
/// # Arguments
///
/// * `frame` - The frame to render to
/// * `area` - The area within the frame to render the bar
/// * `active` - The currently displayed page
pub fn render(frame: &mut Frame, area: Rect, active: Page)
{
    let titles = Page::ALL
        .iter()
        .map(|page| Line::from(page.title()));

    let tabs = Tabs::new(titles)
        .block(
            Block::default()
                .borders(Borders::BOTTOM)
                .border_style(NAVBAR_BORDER_STYLE),
        )
        .select(active.index())
        .highlight_style(ACTIVE_TAB_STYLE)
        .divider(VERTICAL);

    frame.render_widget(tabs, area);
}

#[cfg(test)]
mod tests
{
    use super::*;

    #[test]
    fn next_and_previous_wrap_around()
    {
        assert_eq!(Page::Achievements.next(), Page::Home);
        assert_eq!(Page::Home.previous(), Page::Achievements);
        assert_eq!(Page::Home.next(), Page::Education);
    }

    #[test]
    fn a_full_lap_returns_to_the_start()
    {
        let mut page = Page::Home;
        for _ in 0..Page::ALL.len()
        {
            page = page.next();
        }
        assert_eq!(page, Page::Home);
    }

    #[test]
    fn indices_match_tab_order()
    {
        for (position, page) in Page::ALL.iter().enumerate()
        {
            assert_eq!(page.index(), position);
        }
    }

    #[test]
    fn lookup_by_name_is_forgiving()
    {
        assert_eq!(Page::from_name("SKILLS"), Some(Page::Skills));
        assert_eq!(Page::from_name("skill"), Some(Page::Skills));
        assert_eq!(Page::from_name("experiences"), Some(Page::Experience));
        assert_eq!(Page::from_name("nope"), None);
    }
}
