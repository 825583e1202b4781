//! Types for portfolio profile files (.profile.ron).
//!
//! A profile carries everything the terminal prints that is not part of the
//! command table itself: identity, skills, per-page listings and page text.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::Path;

use super::page::Page;

/// One row of the `skills --list` summary.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct SkillGroup {
    pub category: String,
    pub items: Vec<String>,
}

/// Root type for profile files.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Profile {
    pub user: String,
    pub host: String,
    /// Directory that `pwd` prefixes to the page name.
    pub home_dir: String,
    pub welcome: String,
    #[serde(default)]
    pub identity: Vec<String>,
    #[serde(default)]
    pub skills: Vec<SkillGroup>,
    /// Pseudo-filenames printed by `ls`, keyed by page.
    #[serde(default)]
    pub listings: BTreeMap<Page, Vec<String>>,
    /// Body text of the page view, keyed by page.
    #[serde(default)]
    pub pages: BTreeMap<Page, Vec<String>>,
}

impl Profile {
    /// Load a profile from a RON file.
    pub fn load(path: &Path) -> crate::error::Result<Self> {
        if !path.exists() {
            return Err(crate::error::Error::ProfileNotFound(path.to_path_buf()));
        }
        let content = std::fs::read_to_string(path)?;
        let profile: Profile = ron::from_str(&content)?;
        Ok(profile)
    }

    /// Save the profile to a RON file.
    pub fn save(&self, path: &Path) -> crate::error::Result<()> {
        let content = ron::ser::to_string_pretty(self, ron::ser::PrettyConfig::default())?;
        std::fs::write(path, content)?;
        Ok(())
    }

    /// Listing for a page, if the profile has a non-empty one.
    pub fn listing(&self, page: Page) -> Option<&[String]> {
        self.listings
            .get(&page)
            .map(Vec::as_slice)
            .filter(|entries| !entries.is_empty())
    }
}

fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

impl Default for Profile {
    fn default() -> Self {
        let listings = BTreeMap::from([
            (Page::Home, strings(&["intro.md", "navigation.js", "terminal.exe"])),
            (
                Page::About,
                strings(&["education.json", "personal-info.txt", "interests.md"]),
            ),
            (
                Page::Experience,
                strings(&["internships/", "projects/", "achievements.log"]),
            ),
            (
                Page::Projects,
                strings(&["financio/", "web-projects/", "ai-models/", "README.md"]),
            ),
            (
                Page::Skills,
                strings(&["technical-skills.json", "certifications/", "tools.config"]),
            ),
            (
                Page::Contact,
                strings(&["social-links.json", "resume.pdf", "contact-form.html"]),
            ),
        ]);

        let pages = BTreeMap::from([
            (
                Page::Home,
                strings(&[
                    "Miten Gandhi",
                    "B.Tech Artificial Intelligence, SVNIT Surat",
                    "",
                    "Open the terminal and type 'help' to look around.",
                ]),
            ),
            (
                Page::About,
                strings(&[
                    "AI undergraduate with an interest in security and the web.",
                    "CGPA 9.72",
                ]),
            ),
            (
                Page::Experience,
                strings(&["Cyber Security Intern, C-DAC (May 2024 - Jun 2024)"]),
            ),
            (
                Page::Projects,
                strings(&["Financio: personal finance web app", "AI model experiments"]),
            ),
            (
                Page::Skills,
                strings(&["Run 'skills --list' in the terminal for the full summary."]),
            ),
            (
                Page::Contact,
                strings(&["github.com/miten-gandhi", "linkedin.com/in/miten-gandhi"]),
            ),
        ]);

        Self {
            user: "miten".to_string(),
            host: "portfolio".to_string(),
            home_dir: "/home/miten/portfolio".to_string(),
            welcome: "Welcome to Miten's Portfolio Terminal! Type \"help\" for available commands."
                .to_string(),
            identity: strings(&[
                "miten-gandhi",
                "B.Tech AI Student at SVNIT Surat",
                "CGPA: 9.72 | Roll No: U23AI017",
                "Cyber Security Enthusiast | Full Stack Developer",
            ]),
            skills: vec![
                SkillGroup {
                    category: "Languages".to_string(),
                    items: strings(&["Python", "C++", "JavaScript", "TypeScript", "HTML5", "CSS"]),
                },
                SkillGroup {
                    category: "Frameworks".to_string(),
                    items: strings(&["React", "Next.js", "Node.js", "TensorFlow", "PyTorch"]),
                },
                SkillGroup {
                    category: "Tools".to_string(),
                    items: strings(&["Git", "Docker", "VS Code", "Volatility", "Wireshark"]),
                },
                SkillGroup {
                    category: "Databases".to_string(),
                    items: strings(&["MySQL", "PostgreSQL"]),
                },
                SkillGroup {
                    category: "Specialties".to_string(),
                    items: strings(&["AI/ML", "Cyber Security", "Web Development"]),
                },
            ],
            listings,
            pages,
        }
    }
}
