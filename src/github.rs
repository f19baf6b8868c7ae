use anyhow::{Context, Result};
use reqwest::Client;
use serde::Deserialize;
use serde::de::DeserializeOwned;
use serde_json::{Map, Value};

use crate::config::Config;
use crate::stats::{ProfileStats, RepositorySummary};

const LOG_TARGET: &str = "github";

#[derive(Deserialize)]
struct ProfileResponse {
    name: Option<String>,
    public_repos: Option<u64>,
    followers: Option<u64>,
    following: Option<u64>,
}

impl From<ProfileResponse> for ProfileStats {
    fn from(r: ProfileResponse) -> Self {
        Self {
            name: r.name.into(),
            public_repos: r.public_repos.into(),
            followers: r.followers.into(),
            following: r.following.into(),
        }
    }
}

#[derive(Deserialize)]
struct RepoResponse {
    name: String,
    fork: bool,
    stargazers_count: u64,
    languages_url: String,
}

#[derive(Clone)]
pub struct GithubClient {
    http: Client,
    api_base: String,
}

impl GithubClient {
    /// Create a REST client for the API base and timeout in `config`.
    pub fn new(config: &Config) -> Result<Self> {
        let mut builder = Client::builder().user_agent(config.user_agent.as_str());
        if let Some(timeout) = config.timeout {
            builder = builder.timeout(timeout);
        }
        let http = builder.build().context("Failed to build HTTP client")?;

        Ok(Self {
            http,
            api_base: config.api_base.trim_end_matches('/').to_string(),
        })
    }

    /// GET `url` and decode the JSON body; non-2xx statuses are errors.
    async fn get_json<T: DeserializeOwned>(&self, url: &str) -> Result<T> {
        log::debug!(target: LOG_TARGET, "GET {url}");

        let resp = self
            .http
            .get(url)
            .send()
            .await
            .with_context(|| format!("Network error requesting {url}"))?
            .error_for_status()
            .with_context(|| format!("GitHub API rejected {url}"))?;

        resp.json()
            .await
            .with_context(|| format!("Failed to parse JSON from {url}"))
    }

    /// Profile counters for `username`. Any failure is logged and turned into
    /// a profile whose fields are all unavailable.
    pub async fn profile(&self, username: &str) -> ProfileStats {
        let url = format!("{}/users/{username}", self.api_base);
        match self.get_json::<ProfileResponse>(&url).await {
            Ok(resp) => resp.into(),
            Err(e) => {
                log::warn!(target: LOG_TARGET, "Error fetching GitHub data: {e:#}");
                ProfileStats::unavailable()
            }
        }
    }

    /// Language byte counts for one repository, in API order.
    async fn languages(&self, languages_url: &str) -> Result<Vec<(String, u64)>> {
        let map: Map<String, Value> = self.get_json(languages_url).await?;
        map.into_iter()
            .map(|(language, bytes)| {
                let bytes = bytes.as_u64().with_context(|| {
                    format!("Byte count for {language} is not a non-negative integer")
                })?;
                Ok((language, bytes))
            })
            .collect()
    }

    /// First page of `username`'s repositories, with language breakdowns for
    /// every non-fork entry (sequential; one request per repository).
    pub async fn repositories(&self, username: &str) -> Result<Vec<RepositorySummary>> {
        let url = format!("{}/users/{username}/repos", self.api_base);
        let repos: Vec<RepoResponse> = self
            .get_json(&url)
            .await
            .context("Failed to fetch repository list")?;

        log::info!(target: LOG_TARGET, "Fetched {} repositories for {username}", repos.len());

        let mut out = Vec::with_capacity(repos.len());
        for repo in repos {
            let languages = if repo.fork {
                Vec::new()
            } else {
                self.languages(&repo.languages_url)
                    .await
                    .with_context(|| format!("Failed to fetch languages for {}", repo.name))?
            };

            out.push(RepositorySummary {
                name: repo.name,
                stars: repo.stargazers_count,
                is_fork: repo.fork,
                languages,
            });
        }

        Ok(out)
    }
}
