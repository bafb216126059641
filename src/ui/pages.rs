//! Page renderers.
//!
//! Each content page turns its category's records into styled text lines;
//! the home page draws the typed headline. All layout here is read-only
//! presentation over the static content tables.
use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Direction, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;
use textwrap::Options;

use super::navbar::Page;
use crate::content;
use crate::content::{PROFILE, Skill};

const HEADLINE_STYLE: Style = Style::new()
    .fg(Color::LightCyan)
    .add_modifier(Modifier::BOLD);

const CURSOR_STYLE: Style = Style::new().fg(Color::LightBlue);

const META_STYLE: Style = Style::new().fg(Color::DarkGray);

const BODY_STYLE: Style = Style::new().fg(Color::Gray);

const LINK_STYLE: Style = Style::new().fg(Color::LightBlue);

/// Width of a skill meter in cells.
const METER_WIDTH: usize = 24;

/// Renders the home page: typed headline, cursor, tagline and links.
///
/// The cursor cell is drawn as a space while hidden so the headline does
/// not shift when it blinks.
///
/// # Arguments
///
/// * `frame` - The frame to render to
/// * `area` - The area below the navbar
/// * `display_text` - The currently revealed headline prefix
/// * `cursor_visible` - Whether to draw the cursor glyph
pub fn render_home(frame: &mut Frame, area: Rect, display_text: &str, cursor_visible: bool)
{
    let cursor = if cursor_visible { "|" } else { " " };

    let mut lines = vec![
        Line::from(vec![
            Span::styled(display_text.to_owned(), HEADLINE_STYLE),
            Span::styled(cursor, CURSOR_STYLE),
        ]),
        Line::default(),
        Line::from(Span::styled(
            PROFILE.headline,
            Style::new()
                .fg(Color::White)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(PROFILE.tagline, LINK_STYLE)),
        Line::default(),
    ];

    for link in PROFILE.links
    {
        lines.push(Line::from(vec![
            Span::styled(
                format!("{:<10}", link.label),
                Style::new().add_modifier(Modifier::BOLD),
            ),
            Span::styled(link.url, META_STYLE),
        ]));
    }

    // Center the block vertically; the paragraph centers horizontally
    let height = u16::try_from(lines.len()).unwrap_or(u16::MAX);
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Fill(1),
            Constraint::Length(height),
            Constraint::Fill(1),
        ])
        .split(area);

    let paragraph = Paragraph::new(lines).alignment(Alignment::Center);
    frame.render_widget(paragraph, rows[1]);
}

/// Builds the text lines for a content page, wrapped to the given width.
///
/// # Arguments
///
/// * `page` - The page to build; `Home` yields no lines
/// * `width` - The inner width of the content pane in cells
#[must_use]
pub fn lines(page: Page, width: u16) -> Vec<Line<'static>>
{
    // Keep the wrapper sane on tiny terminals
    let width = usize::from(width).max(16);

    match page
    {
        Page::Home => Vec::new(),
        Page::Education => education_lines(width),
        Page::Skills => skills_lines(),
        Page::Experience => experience_lines(width),
        Page::Projects => project_lines(width),
        Page::Leadership => leadership_lines(width),
        Page::Achievements => achievement_lines(width),
    }
}

fn wrapped(text: &str, width: usize, style: Style) -> Vec<Line<'static>>
{
    textwrap::wrap(text, width)
        .into_iter()
        .map(|row| Line::from(Span::styled(row.into_owned(), style)))
        .collect()
}

/// Bulleted list with a hanging indent.
fn bullets(items: &[&str], width: usize, style: Style) -> Vec<Line<'static>>
{
    let options = Options::new(width)
        .initial_indent("  - ")
        .subsequent_indent("    ");

    items
        .iter()
        .flat_map(|item| {
            textwrap::wrap(item, options.clone())
                .into_iter()
                .map(|row| Line::from(Span::styled(row.into_owned(), style)))
                .collect::<Vec<Line>>()
        })
        .collect()
}

fn tag_line(label: &str, values: &[&str], accent: Color) -> Line<'static>
{
    Line::from(vec![
        Span::styled(format!("{label}: "), META_STYLE),
        Span::styled(values.join(", "), Style::new().fg(accent)),
    ])
}

fn education_lines(width: usize) -> Vec<Line<'static>>
{
    let mut lines = Vec::new();

    for entry in content::EDUCATION
    {
        lines.push(Line::from(Span::styled(
            entry.level,
            Style::new()
                .fg(entry.accent)
                .add_modifier(Modifier::BOLD),
        )));
        lines.push(Line::from(Span::styled(entry.institution, LINK_STYLE)));
        lines.extend(wrapped(entry.degree, width, BODY_STYLE));
        lines.push(Line::from(Span::styled(
            format!("{}  |  {}", entry.duration, entry.location),
            META_STYLE,
        )));
        lines.push(Line::from(Span::styled(
            entry.grade,
            Style::new().fg(Color::Green),
        )));
        lines.push(Line::default());
    }

    lines
}

fn skill_meter(skill: &Skill, accent: Color) -> Line<'static>
{
    let filled = usize::from(skill.level) * METER_WIDTH / 100;

    Line::from(vec![
        Span::styled(format!("  {:<14}", skill.name), BODY_STYLE),
        Span::styled("█".repeat(filled), Style::new().fg(accent)),
        Span::styled("░".repeat(METER_WIDTH - filled), META_STYLE),
        Span::styled(format!(" {:>3}%", skill.level), META_STYLE),
    ])
}

fn skills_lines() -> Vec<Line<'static>>
{
    let mut lines = Vec::new();

    for category in content::SKILLS
    {
        lines.push(Line::from(Span::styled(
            category.category,
            Style::new()
                .fg(category.accent)
                .add_modifier(Modifier::BOLD),
        )));

        for skill in category.skills
        {
            lines.push(skill_meter(skill, category.accent));
        }

        lines.push(Line::default());
    }

    lines
}

fn experience_lines(width: usize) -> Vec<Line<'static>>
{
    let mut lines = Vec::new();

    for entry in content::EXPERIENCE
    {
        lines.push(Line::from(Span::styled(
            entry.role,
            Style::new()
                .fg(entry.accent)
                .add_modifier(Modifier::BOLD),
        )));
        lines.push(Line::from(vec![
            Span::styled(entry.company, LINK_STYLE),
            Span::styled(format!("  ({})", entry.kind), META_STYLE),
        ]));
        lines.push(Line::from(Span::styled(
            format!("{}  |  {}", entry.duration, entry.location),
            META_STYLE,
        )));
        lines.extend(wrapped(entry.description, width, BODY_STYLE));
        lines.extend(bullets(entry.achievements, width, BODY_STYLE));
        lines.push(tag_line("Tech", entry.technologies, entry.accent));
        lines.push(Line::default());
    }

    lines
}

fn project_lines(width: usize) -> Vec<Line<'static>>
{
    let mut lines = Vec::new();

    for project in content::PROJECTS
    {
        lines.push(Line::from(vec![
            Span::styled(
                project.title,
                Style::new()
                    .fg(project.accent)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::styled(format!("  ({})", project.date), META_STYLE),
        ]));
        lines.push(Line::from(Span::styled(
            project.subtitle,
            Style::new()
                .fg(Color::Gray)
                .add_modifier(Modifier::ITALIC),
        )));
        lines.extend(wrapped(project.description, width, BODY_STYLE));
        lines.extend(bullets(project.features, width, BODY_STYLE));
        lines.push(tag_line("Tech", project.technologies, project.accent));

        if let Some(url) = project.live_url
        {
            lines.push(Line::from(vec![
                Span::styled("Live: ", META_STYLE),
                Span::styled(url, LINK_STYLE),
            ]));
        }
        if let Some(url) = project.github_url
        {
            lines.push(Line::from(vec![
                Span::styled("Code: ", META_STYLE),
                Span::styled(url, LINK_STYLE),
            ]));
        }

        lines.push(Line::default());
    }

    lines
}

fn leadership_lines(width: usize) -> Vec<Line<'static>>
{
    let mut lines = Vec::new();

    for role in content::LEADERSHIP
    {
        let status_style = if role.status == "Ongoing"
        {
            Style::new().fg(Color::Green)
        }
        else
        {
            META_STYLE
        };

        lines.push(Line::from(vec![
            Span::styled(
                role.position,
                Style::new()
                    .fg(role.accent)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::styled(format!("  [{}]", role.status), status_style),
        ]));
        lines.push(Line::from(vec![
            Span::styled(role.organization, LINK_STYLE),
            Span::styled(format!("  ({})", role.kind), META_STYLE),
        ]));
        lines.push(Line::from(Span::styled(
            format!("{}  |  {}", role.duration, role.location),
            META_STYLE,
        )));
        lines.extend(wrapped(role.description, width, BODY_STYLE));
        lines.extend(bullets(role.responsibilities, width, BODY_STYLE));
        lines.push(tag_line("Skills", role.skills, role.accent));
        lines.push(Line::default());
    }

    lines
}

fn achievement_lines(width: usize) -> Vec<Line<'static>>
{
    let mut lines = Vec::new();

    for achievement in content::ACHIEVEMENTS
    {
        lines.push(Line::from(vec![
            Span::styled(
                achievement.title,
                Style::new()
                    .fg(achievement.accent)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::styled(format!("  ({})", achievement.date), META_STYLE),
        ]));
        lines.push(Line::from(Span::styled(
            achievement.subtitle,
            Style::new()
                .fg(Color::Gray)
                .add_modifier(Modifier::ITALIC),
        )));
        lines.push(Line::from(Span::styled(achievement.organization, LINK_STYLE)));
        lines.extend(wrapped(achievement.description, width, BODY_STYLE));
        lines.extend(bullets(achievement.details, width, BODY_STYLE));

        if let Some(url) = achievement.certificate_url
        {
            lines.push(Line::from(vec![
                Span::styled("Certificate: ", META_STYLE),
                Span::styled(url, LINK_STYLE),
            ]));
        }

        lines.push(Line::default());
    }

    lines
}

#[cfg(test)]
mod tests
{
    use super::*;

    #[test]
    fn every_content_page_produces_lines()
    {
        for page in Page::ALL
        {
            if page == Page::Home
            {
                continue;
            }
            assert!(!lines(page, 80).is_empty(), "{} is blank", page.title());
        }
    }

    #[test]
    fn home_has_no_scrollable_body()
    {
        assert!(lines(Page::Home, 80).is_empty());
    }

    #[test]
    fn wrapped_lines_respect_the_width()
    {
        for page in Page::ALL
        {
            for line in lines(page, 60)
            {
                assert!(
                    line.width() <= 60,
                    "overlong line on {}: {:?}",
                    page.title(),
                    line
                );
            }
        }
    }

    #[test]
    fn skill_meters_never_overflow()
    {
        let full = Skill { name: "x", level: 100 };
        let meter = skill_meter(&full, Color::Cyan);
        assert!(meter.width() > METER_WIDTH);

        let empty = Skill { name: "x", level: 0 };
        // Must not panic on the empty end of the range
        let _ = skill_meter(&empty, Color::Cyan);
    }
}
