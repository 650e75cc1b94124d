use crate::cli::SaveArgs;
use crate::context::AppContext;
use crate::error::AppResult;
use crate::output::text;
use crate::profile::{Preference, Profile};

pub fn run(ctx: &mut AppContext, args: SaveArgs) -> AppResult<()> {
    let profile = save(ctx, args)?;
    let text = format!("saved {}", text::format_profile(&profile));
    ctx.output.emit(&text, &profile)
}

pub fn save(ctx: &mut AppContext, args: SaveArgs) -> AppResult<Profile> {
    let preferences = parse_preferences(&args.prefs)?;
    let manager = &mut ctx.manager;
    manager.reset();

    if args.update {
        manager.load_into_draft(&args.username)?;
        manager.clear_selection();
    }

    manager.set_username(args.username);
    for pref in preferences {
        manager.toggle(pref);
    }

    manager.save()
}

// Repeats are dropped so a toggle never undoes itself.
fn parse_preferences(raw: &[String]) -> AppResult<Vec<Preference>> {
    let mut preferences = Vec::with_capacity(raw.len());
    for label in raw.iter().filter(|label| !label.trim().is_empty()) {
        let pref: Preference = label.parse()?;
        if !preferences.contains(&pref) {
            preferences.push(pref);
        }
    }

    Ok(preferences)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn labels(raw: &[&str]) -> Vec<String> {
        raw.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn parses_and_dedupes_preferences() {
        let parsed = parse_preferences(&labels(&["mare", "Relax", "MARE"])).expect("parse");
        assert_eq!(parsed, vec![Preference::Mare, Preference::Relax]);
    }

    #[test]
    fn skips_blank_entries() {
        let parsed = parse_preferences(&labels(&["", " ", "Spa"])).expect("parse");
        assert_eq!(parsed, vec![Preference::Spa]);
    }

    #[test]
    fn rejects_unknown_labels() {
        assert!(parse_preferences(&labels(&["Mare", "Beach"])).is_err());
    }
}
