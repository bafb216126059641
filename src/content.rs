//! Static portfolio content.
//!
//! Every record in this module is a hardcoded, immutable table; nothing in
//! the application mutates it. Record shapes mirror the categories of the
//! portfolio: education, skills, experience, projects, leadership roles and
//! achievements, plus the profile shown on the home page. Accent colors are
//! terminal colors picked per record.
use ratatui::style::Color;

/// Identity and home-page material.
pub struct Profile
{
    /// Full name
    pub name: &'static str,
    /// One-line professional headline
    pub headline: &'static str,
    /// Short motto below the headline
    pub tagline: &'static str,
    /// Phrases cycled by the typewriter animation
    pub intro_phrases: &'static [&'static str],
    /// Social and contact links
    pub links: &'static [Link],
}

/// A labeled external link.
pub struct Link
{
    pub label: &'static str,
    pub url: &'static str,
}

/// One stage of formal education.
pub struct Education
{
    pub level: &'static str,
    pub institution: &'static str,
    pub degree: &'static str,
    pub duration: &'static str,
    pub location: &'static str,
    pub grade: &'static str,
    pub accent: Color,
}

/// A named skill with a self-assessed level from 0 to 100.
pub struct Skill
{
    pub name: &'static str,
    pub level: u8,
}

/// A group of related skills rendered as one block.
pub struct SkillCategory
{
    pub category: &'static str,
    pub accent: Color,
    pub skills: &'static [Skill],
}

/// A work experience entry.
pub struct Experience
{
    pub role: &'static str,
    pub company: &'static str,
    pub kind: &'static str,
    pub duration: &'static str,
    pub location: &'static str,
    pub description: &'static str,
    pub achievements: &'static [&'static str],
    pub technologies: &'static [&'static str],
    pub accent: Color,
}

/// A personal or academic project.
pub struct Project
{
    pub title: &'static str,
    pub subtitle: &'static str,
    pub description: &'static str,
    pub date: &'static str,
    pub features: &'static [&'static str],
    pub technologies: &'static [&'static str],
    pub live_url: Option<&'static str>,
    pub github_url: Option<&'static str>,
    pub accent: Color,
}

/// A leadership or volunteering role.
pub struct LeadershipRole
{
    pub position: &'static str,
    pub organization: &'static str,
    pub kind: &'static str,
    pub duration: &'static str,
    pub location: &'static str,
    pub status: &'static str,
    pub description: &'static str,
    pub responsibilities: &'static [&'static str],
    pub skills: &'static [&'static str],
    pub accent: Color,
}

/// An award, certification or milestone.
pub struct Achievement
{
    pub title: &'static str,
    pub subtitle: &'static str,
    pub date: &'static str,
    pub organization: &'static str,
    pub description: &'static str,
    pub details: &'static [&'static str],
    pub certificate_url: Option<&'static str>,
    pub accent: Color,
}

pub static PROFILE: Profile = Profile {
    name: "Kopal Garg",
    headline: "Software Developer",
    tagline: "Turning coffee and code into seamless user experiences.",
    intro_phrases: &["Hi, I'm Kopal Garg", "Let's walk through my portfolio"],
    links: &[
        Link {
            label: "GitHub",
            url: "https://github.com/kopalg20",
        },
        Link {
            label: "LinkedIn",
            url: "https://www.linkedin.com/in/kopal-garg-6ab454287/",
        },
        Link {
            label: "Email",
            url: "mailto:kopalgarg2005@gmail.com",
        },
        Link {
            label: "LeetCode",
            url: "https://leetcode.com/u/kopalgarg20/",
        },
    ],
};

pub static EDUCATION: &[Education] = &[
    Education {
        level: "Bachelor of Technology",
        institution: "Jaypee Institute of Information Technology",
        degree: "Computer Science and Engineering",
        duration: "2023 - 2027",
        location: "Noida, India",
        grade: "CGPA: 8.9 / 10",
        accent: Color::Cyan,
    },
    Education {
        level: "Senior Secondary (Class XII)",
        institution: "St. Joseph's Convent School",
        degree: "Science with Computer Science, CBSE",
        duration: "2021 - 2023",
        location: "Kanpur, India",
        grade: "Percentage: 94.2%",
        accent: Color::Magenta,
    },
    Education {
        level: "Secondary (Class X)",
        institution: "St. Joseph's Convent School",
        degree: "CBSE",
        duration: "2019 - 2021",
        location: "Kanpur, India",
        grade: "Percentage: 96.0%",
        accent: Color::Green,
    },
];

pub static SKILLS: &[SkillCategory] = &[
    SkillCategory {
        category: "Languages",
        accent: Color::Cyan,
        skills: &[
            Skill { name: "C++", level: 90 },
            Skill { name: "Python", level: 80 },
            Skill { name: "JavaScript", level: 85 },
            Skill { name: "TypeScript", level: 75 },
            Skill { name: "SQL", level: 70 },
        ],
    },
    SkillCategory {
        category: "Frontend",
        accent: Color::Magenta,
        skills: &[
            Skill { name: "React", level: 85 },
            Skill { name: "Next.js", level: 80 },
            Skill { name: "Tailwind CSS", level: 85 },
            Skill { name: "Framer Motion", level: 70 },
        ],
    },
    SkillCategory {
        category: "Backend",
        accent: Color::Green,
        skills: &[
            Skill { name: "Node.js", level: 75 },
            Skill { name: "Express", level: 70 },
            Skill { name: "MongoDB", level: 70 },
            Skill { name: "Firebase", level: 65 },
        ],
    },
    SkillCategory {
        category: "Tools",
        accent: Color::Yellow,
        skills: &[
            Skill { name: "Git", level: 85 },
            Skill { name: "Linux", level: 75 },
            Skill { name: "Postman", level: 70 },
            Skill { name: "Figma", level: 60 },
        ],
    },
];

pub static EXPERIENCE: &[Experience] = &[
    Experience {
        role: "Software Developer Intern",
        company: "Bluestock Fintech",
        kind: "Internship",
        duration: "May 2025 - Aug 2025",
        location: "Remote",
        description: "Built and shipped features for an investor-facing analytics \
                      dashboard used by several thousand monthly users.",
        achievements: &[
            "Automated the weekly reporting pipeline, cutting a manual process from hours to seconds",
            "Implemented reusable React components that reduced duplicated UI code by a third",
            "Wrote integration tests that caught two regressions before release",
        ],
        technologies: &["React", "TypeScript", "Node.js", "MongoDB"],
        accent: Color::Cyan,
    },
    Experience {
        role: "Web Developer",
        company: "Freelance",
        kind: "Contract",
        duration: "Jan 2025 - Apr 2025",
        location: "Remote",
        description: "Designed and delivered responsive sites for two local businesses, \
                      from wireframe to deployment.",
        achievements: &[
            "Delivered both projects ahead of schedule with all acceptance criteria met",
            "Improved page load times by lazy-loading media and trimming bundle size",
        ],
        technologies: &["Next.js", "Tailwind CSS", "Firebase"],
        accent: Color::Magenta,
    },
];

pub static PROJECTS: &[Project] = &[
    Project {
        title: "Termfolio",
        subtitle: "This portfolio, in your terminal",
        description: "A keyboard-driven portfolio viewer with a typewriter home page, \
                      built to mirror the web version page for page.",
        date: "2025",
        features: &[
            "Typewriter headline with blinking cursor",
            "Seven navigable content pages",
            "Vim-style scrolling and shortcuts",
        ],
        technologies: &["Rust", "ratatui", "crossterm"],
        live_url: None,
        github_url: Some("https://github.com/kopalg20/termfolio"),
        accent: Color::Cyan,
    },
    Project {
        title: "StudySync",
        subtitle: "Collaborative study planner",
        description: "A planner that lets study groups share schedules, track topics \
                      and nudge each other before deadlines.",
        date: "2024",
        features: &[
            "Shared group timetables with conflict detection",
            "Topic-level progress tracking",
            "Email reminders before planned sessions",
        ],
        technologies: &["Next.js", "TypeScript", "MongoDB", "Tailwind CSS"],
        live_url: Some("https://studysync-kopal.vercel.app"),
        github_url: Some("https://github.com/kopalg20/studysync"),
        accent: Color::Magenta,
    },
    Project {
        title: "PathViz",
        subtitle: "Pathfinding algorithm visualizer",
        description: "An interactive grid where BFS, DFS, Dijkstra and A* race each \
                      other, with step-by-step playback.",
        date: "2024",
        features: &[
            "Four algorithms with adjustable speed",
            "Wall drawing and weighted cells",
            "Side-by-side run comparison",
        ],
        technologies: &["React", "JavaScript"],
        live_url: Some("https://pathviz-kopal.vercel.app"),
        github_url: Some("https://github.com/kopalg20/pathviz"),
        accent: Color::Green,
    },
];

pub static LEADERSHIP: &[LeadershipRole] = &[
    LeadershipRole {
        position: "Core Member, Web Team",
        organization: "Google Developer Groups on Campus",
        kind: "Student Community",
        duration: "Aug 2024 - Present",
        location: "Noida, India",
        status: "Ongoing",
        description: "Part of the team that builds and maintains the chapter's event \
                      sites and runs hands-on web workshops.",
        responsibilities: &[
            "Built the registration site for the annual hackathon",
            "Mentored first-year students through their first pull requests",
            "Ran two workshops on React fundamentals",
        ],
        skills: &["Mentoring", "Public speaking", "React"],
        accent: Color::Cyan,
    },
    LeadershipRole {
        position: "Event Coordinator",
        organization: "College Coding Club",
        kind: "Student Society",
        duration: "Sep 2023 - Jul 2024",
        location: "Noida, India",
        status: "Completed",
        description: "Coordinated the club's competitive programming calendar for the \
                      academic year.",
        responsibilities: &[
            "Organized six contests with over 200 cumulative participants",
            "Curated problem sets with the senior problem-setting team",
        ],
        skills: &["Organization", "Teamwork"],
        accent: Color::Magenta,
    },
];

pub static ACHIEVEMENTS: &[Achievement] = &[
    Achievement {
        title: "Smart India Hackathon Finalist",
        subtitle: "National finals, team of six",
        date: "Dec 2024",
        organization: "Ministry of Education, Government of India",
        description: "Reached the national finals with a crop-advisory prototype built \
                      over 36 hours.",
        details: &[
            "Top 5 among 120+ teams in the internal round",
            "Owned the frontend and the offline-first data sync",
        ],
        certificate_url: Some("https://sih.gov.in"),
        accent: Color::Cyan,
    },
    Achievement {
        title: "500+ Problems Solved",
        subtitle: "Competitive programming milestone",
        date: "2025",
        organization: "LeetCode",
        description: "Crossed five hundred solved problems with a contest rating in the \
                      top 15% globally.",
        details: &[
            "100-day daily-challenge streak",
            "Knight badge in biweekly contests",
        ],
        certificate_url: Some("https://leetcode.com/u/kopalgarg20/"),
        accent: Color::Yellow,
    },
    Achievement {
        title: "Dean's List",
        subtitle: "Academic excellence",
        date: "2024",
        organization: "Jaypee Institute of Information Technology",
        description: "Recognized for placing in the top 5% of the batch across the \
                      first two semesters.",
        details: &["Merit scholarship for the following academic year"],
        certificate_url: None,
        accent: Color::Green,
    },
];

#[cfg(test)]
mod tests
{
    use super::*;

    #[test]
    fn every_category_has_records()
    {
        assert!(!EDUCATION.is_empty());
        assert!(!SKILLS.is_empty());
        assert!(!EXPERIENCE.is_empty());
        assert!(!PROJECTS.is_empty());
        assert!(!LEADERSHIP.is_empty());
        assert!(!ACHIEVEMENTS.is_empty());
    }

    #[test]
    fn profile_supplies_phrases_for_the_animator()
    {
        assert!(!PROFILE.intro_phrases.is_empty());
        assert!(
            PROFILE
                .intro_phrases
                .iter()
                .all(|phrase| !phrase.is_empty())
        );
    }

    #[test]
    fn skill_levels_are_percentages()
    {
        for category in SKILLS
        {
            assert!(!category.skills.is_empty(), "{} is empty", category.category);
            for skill in category.skills
            {
                assert!(skill.level <= 100, "{} exceeds 100", skill.name);
            }
        }
    }

    #[test]
    fn links_are_absolute()
    {
        for link in PROFILE.links
        {
            assert!(
                link.url.starts_with("https://") || link.url.starts_with("mailto:"),
                "{} has a relative url",
                link.label
            );
        }
    }
}
