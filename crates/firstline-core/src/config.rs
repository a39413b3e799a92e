use crate::error::{FirstLineError, Result};

const ENV_HOST: &str = "FIRSTLINE_HOST";
const ENV_PORT: &str = "FIRSTLINE_PORT";
const ENV_SEARCH_LIMIT: &str = "FIRSTLINE_SEARCH_LIMIT";

const DEFAULT_HOST: &str = "127.0.0.1";
const DEFAULT_PORT: u16 = 8093;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: DEFAULT_HOST.to_string(),
            port: DEFAULT_PORT,
        }
    }
}

impl ServerConfig {
    pub fn from_env() -> Result<Self> {
        let host = read_non_empty_env(ENV_HOST).unwrap_or_else(|| DEFAULT_HOST.to_string());
        let port = match read_non_empty_env(ENV_PORT) {
            None => DEFAULT_PORT,
            Some(raw) => raw.parse::<u16>().map_err(|_| {
                FirstLineError::Validation(format!(
                    "invalid {ENV_PORT}: {raw} (expected 1-65535)"
                ))
            })?,
        };
        Ok(Self { host, port })
    }
}

/// Server-wide cap on result counts; `None` means unlimited. A request's
/// own `limit` may only tighten this further.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SearchConfig {
    pub max_results: Option<usize>,
}

impl SearchConfig {
    pub fn from_env() -> Result<Self> {
        let max_results = match read_non_empty_env(ENV_SEARCH_LIMIT) {
            None => None,
            Some(raw) => {
                let value = raw.parse::<usize>().ok().filter(|v| *v >= 1).ok_or_else(|| {
                    FirstLineError::Validation(format!(
                        "invalid {ENV_SEARCH_LIMIT}: {raw} (expected integer >= 1)"
                    ))
                })?;
                Some(value)
            }
        };
        Ok(Self { max_results })
    }

    #[must_use]
    pub fn effective_limit(self, requested: Option<usize>) -> Option<usize> {
        match (self.max_results, requested) {
            (Some(cap), Some(limit)) => Some(cap.min(limit)),
            (Some(cap), None) => Some(cap),
            (None, limit) => limit,
        }
    }
}

#[must_use]
fn read_non_empty_env(name: &str) -> Option<String> {
    std::env::var(name)
        .ok()
        .map(|raw| raw.trim().to_string())
        .filter(|value| !value.is_empty())
}

#[cfg(test)]
mod tests {
    use super::SearchConfig;

    #[test]
    fn effective_limit_takes_the_tighter_of_cap_and_request() {
        let capped = SearchConfig {
            max_results: Some(5),
        };
        assert_eq!(capped.effective_limit(None), Some(5));
        assert_eq!(capped.effective_limit(Some(3)), Some(3));
        assert_eq!(capped.effective_limit(Some(9)), Some(5));

        let uncapped = SearchConfig::default();
        assert_eq!(uncapped.effective_limit(None), None);
        assert_eq!(uncapped.effective_limit(Some(4)), Some(4));
    }
}
