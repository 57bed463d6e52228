//! Source locations, read from the environment.

pub const DEFAULT_CASES_URL: &str =
    "https://w3qa5ydb4l.execute-api.eu-west-1.amazonaws.com/prod/finnishCoronaData/v2";
pub const DEFAULT_BOUNDARIES_URL: &str = "https://raw.githubusercontent.com/VuokkoH/koronavirus-avoindata/master/healthDistrictsEPSG4326.geojson";

/// Where the case list and boundary polygons are loaded from. Either may be
/// a URL or a local file path.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub cases_url: String,
    pub boundaries_url: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            cases_url: DEFAULT_CASES_URL.to_string(),
            boundaries_url: DEFAULT_BOUNDARIES_URL.to_string(),
        }
    }
}

impl Config {
    /// Reads `CASES_API_URL` and `BOUNDARIES_URL`, falling back to the public
    /// endpoints.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let defaults = Self::default();
        Self {
            cases_url: lookup("CASES_API_URL").unwrap_or(defaults.cases_url),
            boundaries_url: lookup("BOUNDARIES_URL").unwrap_or(defaults.boundaries_url),
        }
    }

    /// Applies per-invocation overrides.
    pub fn with_overrides(mut self, cases_url: Option<String>, boundaries_url: Option<String>) -> Self {
        if let Some(url) = cases_url {
            self.cases_url = url;
        }
        if let Some(url) = boundaries_url {
            self.boundaries_url = url;
        }
        self
    }
}
