use std::collections::HashMap;
use std::fmt;

pub const TOP_LANGUAGES: usize = 6;
pub const TOP_REPOSITORIES: usize = 3;

/// A profile value, or the marker for "could not be fetched".
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Field<T> {
    Available(T),
    Unavailable,
}

impl<T> From<Option<T>> for Field<T> {
    fn from(value: Option<T>) -> Self {
        value.map_or(Field::Unavailable, Field::Available)
    }
}

impl<T: fmt::Display> fmt::Display for Field<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Field::Available(v) => v.fmt(f),
            Field::Unavailable => f.write_str("N/A"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProfileStats {
    pub name: Field<String>,
    pub public_repos: Field<u64>,
    pub followers: Field<u64>,
    pub following: Field<u64>,
}

impl ProfileStats {
    pub fn unavailable() -> Self {
        Self {
            name: Field::Unavailable,
            public_repos: Field::Unavailable,
            followers: Field::Unavailable,
            following: Field::Unavailable,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RepositorySummary {
    pub name: String,
    pub stars: u64,
    pub is_fork: bool,
    /// Language byte counts in the order the API listed them.
    pub languages: Vec<(String, u64)>,
}

/// Bytes per language over non-fork repositories, in first-seen order.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct LanguageTotals {
    totals: Vec<(String, u64)>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct LanguageShare {
    pub language: String,
    pub percent: f64,
}

#[derive(Debug, Clone, PartialEq)]
pub enum LanguageShares {
    /// No bytes observed, so there is nothing to divide by.
    NoData,
    Percentages(Vec<LanguageShare>),
}

impl LanguageTotals {
    pub fn from_repositories(repos: &[RepositorySummary]) -> Self {
        let mut index: HashMap<&str, usize> = HashMap::new();
        let mut totals: Vec<(String, u64)> = Vec::new();

        for repo in repos.iter().filter(|r| !r.is_fork) {
            for (language, bytes) in &repo.languages {
                match index.get(language.as_str()) {
                    Some(&i) => totals[i].1 = totals[i].1.saturating_add(*bytes),
                    None => {
                        index.insert(language.as_str(), totals.len());
                        totals.push((language.clone(), *bytes));
                    }
                }
            }
        }

        Self { totals }
    }

    pub fn total_bytes(&self) -> u64 {
        self.totals
            .iter()
            .fold(0u64, |acc, (_, b)| acc.saturating_add(*b))
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, u64)> {
        self.totals.iter().map(|(l, b)| (l.as_str(), *b))
    }

    pub fn percentages(&self) -> LanguageShares {
        let total = self.total_bytes();
        if total == 0 {
            return LanguageShares::NoData;
        }

        LanguageShares::Percentages(
            self.iter()
                .map(|(language, bytes)| LanguageShare {
                    language: language.to_string(),
                    percent: bytes as f64 / total as f64 * 100.0,
                })
                .collect(),
        )
    }
}

/// Stars summed over non-fork repositories.
pub fn total_stars(repos: &[RepositorySummary]) -> u64 {
    repos
        .iter()
        .filter(|r| !r.is_fork)
        .fold(0u64, |acc, r| acc.saturating_add(r.stars))
}

/// Highest shares first; equal shares keep their original order.
pub fn top_languages(shares: &[LanguageShare], n: usize) -> Vec<LanguageShare> {
    let mut sorted = shares.to_vec();
    sorted.sort_by(|a, b| b.percent.total_cmp(&a.percent));
    sorted.truncate(n);
    sorted
}

/// Most starred repositories, forks included.
pub fn top_repositories(repos: &[RepositorySummary], n: usize) -> Vec<&RepositorySummary> {
    let mut sorted: Vec<&RepositorySummary> = repos.iter().collect();
    sorted.sort_by(|a, b| b.stars.cmp(&a.stars));
    sorted.truncate(n);
    sorted
}

/// Everything the stats column needs from the repository list.
#[derive(Debug, Clone, PartialEq)]
pub struct Summary {
    pub total_stars: u64,
    pub languages: LanguageShares,
    pub top_repos: Vec<RepositorySummary>,
}

impl Summary {
    pub fn from_repositories(repos: &[RepositorySummary]) -> Self {
        let languages = match LanguageTotals::from_repositories(repos).percentages() {
            LanguageShares::NoData => LanguageShares::NoData,
            LanguageShares::Percentages(all) => {
                LanguageShares::Percentages(top_languages(&all, TOP_LANGUAGES))
            }
        };

        Self {
            total_stars: total_stars(repos),
            languages,
            top_repos: top_repositories(repos, TOP_REPOSITORIES)
                .into_iter()
                .cloned()
                .collect(),
        }
    }
}
