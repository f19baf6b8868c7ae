use anyhow::{Context, Result, bail};
use chrono::NaiveDate;
use std::path::PathBuf;
use std::time::Duration;

use crate::theme::Theme;

/// Environment variable holding the HTTP timeout in whole seconds.
pub const TIMEOUT_ENV: &str = "JMATTAA_HTTP_TIMEOUT_SECS";

/// Static lines shown at the top of the stats column.
#[derive(Clone, Debug)]
pub struct Identity {
    pub user: String,
    pub os: String,
    pub hobbies: Vec<String>,
    pub editor: String,
}

/// Canvas geometry and font sizes, in pixels.
#[derive(Clone, Copy, Debug)]
pub struct Layout {
    pub width: u32,
    pub height: u32,
    /// 150 columns of art across half of the canvas.
    pub ascii_font_size: f32,
    pub stats_font_size: f32,
    pub stats_margin: u32,
}

impl Layout {
    pub fn half_width(&self) -> u32 {
        self.width / 2
    }
}

impl Default for Layout {
    fn default() -> Self {
        Self {
            width: 1400,
            height: 700,
            ascii_font_size: 9.333_333,
            stats_font_size: 20.0,
            stats_margin: 20,
        }
    }
}

#[derive(Clone, Debug)]
pub struct Config {
    pub username: String,
    pub reference_date: NaiveDate,
    pub identity: Identity,
    pub api_base: String,
    pub user_agent: String,
    pub timeout: Option<Duration>,
    pub art_path: PathBuf,
    pub font_path: PathBuf,
    pub output_path: PathBuf,
    pub layout: Layout,
    pub theme: Theme,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            username: "jmattaa".to_string(),
            reference_date: NaiveDate::from_ymd_opt(2007, 8, 18).unwrap_or_default(),
            identity: Identity {
                user: "jonathan".to_string(),
                os: "Arch (btw)".to_string(),
                hobbies: ["Talking", "Music", "Gym", "Vim"]
                    .into_iter()
                    .map(String::from)
                    .collect(),
                editor: "neovim".to_string(),
            },
            api_base: "https://api.github.com".to_string(),
            user_agent: "jmattaa-stats".to_string(),
            timeout: None,
            art_path: PathBuf::from("./res/me.txt"),
            font_path: PathBuf::from("./res/DejaVuSansMono.ttf"),
            output_path: PathBuf::from("img.png"),
            layout: Layout::default(),
            theme: Theme::Gruvbox,
        }
    }
}

impl Config {
    /// Defaults, plus the HTTP timeout from the environment when set.
    pub fn from_env() -> Result<Self> {
        let mut config = Self::default();
        if let Ok(raw) = std::env::var(TIMEOUT_ENV) {
            config.timeout = Some(parse_timeout(&raw)?);
        }
        Ok(config)
    }
}

fn parse_timeout(raw: &str) -> Result<Duration> {
    let secs: u64 = raw
        .trim()
        .parse()
        .with_context(|| format!("{TIMEOUT_ENV} must be a whole number of seconds, got {raw:?}"))?;
    if secs == 0 {
        bail!("{TIMEOUT_ENV} must be greater than zero");
    }
    Ok(Duration::from_secs(secs))
}
