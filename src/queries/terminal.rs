//! Read-only views over the profile and command table used by the terminal.

use crate::data::command::CommandTable;
use crate::data::page::Page;
use crate::data::profile::Profile;

/// Shell prompt shown before each command, e.g. `miten@portfolio:~/about$`.
pub fn prompt(profile: &Profile, page: Page) -> String {
    format!("{}@{}:~/{}$", profile.user, profile.host, page)
}

/// Synthetic working directory for a page.
pub fn working_dir(profile: &Profile, page: Page) -> String {
    format!("{}/{}", profile.home_dir.trim_end_matches('/'), page)
}

/// `ls` output for a page.
pub fn listing(profile: &Profile, page: Page) -> String {
    match profile.listing(page) {
        Some(entries) => entries.join("  "),
        None => "Directory contents unavailable".to_string(),
    }
}

/// Reference card listing every command plus example invocations.
pub fn help_text(commands: &CommandTable) -> String {
    let width = commands
        .iter()
        .map(|spec| spec.usage.len())
        .max()
        .unwrap_or(0);
    let count = commands.len();

    let mut lines = vec!["Available commands:".to_string()];
    for (i, spec) in commands.iter().enumerate() {
        let branch = if i + 1 == count { "└─" } else { "├─" };
        lines.push(format!(
            "{} {:<width$}  {}",
            branch,
            spec.usage,
            spec.description,
            width = width
        ));
    }
    lines.push(String::new());
    lines.push("Examples:".to_string());
    lines.push("> cd about       # Navigate to about page".to_string());
    lines.push("> cd ..          # Go back".to_string());
    lines.join("\n")
}

/// Formatted `skills --list` summary.
pub fn skills_summary(profile: &Profile) -> String {
    if profile.skills.is_empty() {
        return "No skills listed".to_string();
    }
    let width = profile
        .skills
        .iter()
        .map(|group| group.category.len())
        .max()
        .unwrap_or(0);
    let count = profile.skills.len();

    let mut lines = vec!["Technical Skills:".to_string()];
    for (i, group) in profile.skills.iter().enumerate() {
        let branch = if i + 1 == count { "└─" } else { "├─" };
        lines.push(format!(
            "{} {:<width$}  {}",
            branch,
            group.category,
            group.items.join(", "),
            width = width
        ));
    }
    lines.join("\n")
}
