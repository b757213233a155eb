use std::env;
use std::path::PathBuf;

const DEFAULT_WATCH_URL: &str = "http://www.e-maple.net/classified.html?area=MO&cat=WO";
const DEFAULT_STATE_PATH: &str = "state.json";
const DEFAULT_FETCH_LIMIT: usize = 80;

#[derive(Debug, Clone)]
pub struct Config {
    pub watch_url: String,
    pub open_url: String,
    pub line_token: Option<String>,
    pub state_path: PathBuf,
    pub fetch_limit: usize,
}

impl Config {
    /// Every key is optional; OPEN_URL defaults to the watched page so the
    /// notification links back to whatever is being polled.
    pub fn from_env() -> anyhow::Result<Self> {
        let watch_url = env::var("WATCH_URL").unwrap_or_else(|_| DEFAULT_WATCH_URL.to_string());
        let open_url = env::var("OPEN_URL").unwrap_or_else(|_| watch_url.clone());

        let line_token = env::var("LINE_TOKEN")
            .ok()
            .map(|t| t.trim().to_string())
            .filter(|t| !t.is_empty());

        let state_path = env::var("STATE_PATH")
            .map(PathBuf::from)
            .unwrap_or_else(|_| PathBuf::from(DEFAULT_STATE_PATH));

        let fetch_limit = match env::var("FETCH_LIMIT") {
            Ok(raw) => raw.parse()?,
            Err(_) => DEFAULT_FETCH_LIMIT,
        };

        Ok(Self {
            watch_url,
            open_url,
            line_token,
            state_path,
            fetch_limit,
        })
    }
}
