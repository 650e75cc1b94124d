use crate::error::AppResult;
use crate::profile::{Preference, Profile};

pub fn print_line(line: &str) -> AppResult<()> {
    println!("{line}");
    Ok(())
}

pub fn list_lines(noun: &str, entries: impl IntoIterator<Item = String>) -> Vec<String> {
    let lines: Vec<String> = entries
        .into_iter()
        .enumerate()
        .map(|(index, entry)| format!("{}. {entry}", index + 1))
        .collect();

    if lines.is_empty() {
        return vec![format!("0 {noun}")];
    }

    lines
}

pub fn format_preferences(preferences: &[Preference]) -> String {
    preferences
        .iter()
        .map(|pref| pref.label())
        .collect::<Vec<_>>()
        .join(", ")
}

pub fn format_profile(profile: &Profile) -> String {
    format!(
        "@{} ({})\n   {}",
        profile.username,
        profile.created_at,
        format_preferences(&profile.preferences)
    )
}
