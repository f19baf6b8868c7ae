use crate::age::Age;
use crate::config::Identity;
use crate::document::INDENT;
use crate::stats::{LanguageShares, ProfileStats, Summary};

const RULE: &str = "------------";

/// Keeps a `label: value` line at exactly one colon.
fn value(v: impl ToString) -> String {
    v.to_string().replace(':', ";")
}

/// Builds the text block drawn in the stats column.
pub fn compose(
    identity: &Identity,
    username: &str,
    age: &Age,
    profile: &ProfileStats,
    summary: &Summary,
) -> String {
    let mut lines = vec![
        format!("{}@{username}", identity.user),
        RULE.to_string(),
        format!("OS: {}", value(&identity.os)),
        format!("Uptime: {}", value(age)),
        String::new(),
        format!("Hobbies: [{}]", value(identity.hobbies.join(", "))),
        format!("Editor: {}", value(&identity.editor)),
        String::new(),
        "Github Stats:".to_string(),
        RULE.to_string(),
        format!("Github.public_repos: {}", value(&profile.public_repos)),
        format!("Github.followers: {}", value(&profile.followers)),
        format!("Github.following: {}", value(&profile.following)),
        format!("Github.stars_recieved: {}", summary.total_stars),
        String::new(),
        "Github.languages:".to_string(),
    ];

    match &summary.languages {
        LanguageShares::NoData => lines.push(format!("{INDENT}no data")),
        LanguageShares::Percentages(shares) => lines.extend(
            shares
                .iter()
                .map(|s| format!("{INDENT}{} ({:.2})", s.language, s.percent)),
        ),
    }

    lines.push(String::new());
    lines.push("Github.top_repos: ".to_string());
    lines.extend(
        summary
            .top_repos
            .iter()
            .map(|r| format!("{INDENT}{} ({} stars)", r.name, r.stars)),
    );

    let mut out = lines.join("\n");
    out.push('\n');
    out
}
