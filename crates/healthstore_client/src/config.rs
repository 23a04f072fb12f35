use crate::HealthStoreError;
use secrecy::SecretString;

#[derive(Clone, Debug)]
pub struct Config {
    pub api_key: SecretString,
    pub base_url: String,
}

impl Config {
    pub fn from_env() -> Result<Self, HealthStoreError> {
        Self::from_env_with(|k| std::env::var(k).ok())
    }

    /// Testable helper that reads configuration values using the provided
    /// function. This avoids mutating global environment in tests and keeps
    /// `from_env()` small and safe.
    pub fn from_env_with<F>(mut get: F) -> Result<Self, HealthStoreError>
    where
        F: FnMut(&str) -> Option<String>,
    {
        let api = get("HEALTHSTORE_API_KEY")
            .ok_or_else(|| HealthStoreError::Config("HEALTHSTORE_API_KEY missing".into()))?;
        let base_url =
            get("HEALTHSTORE_BASE_URL").unwrap_or_else(|| "https://healthstore.local".into());
        Ok(Self {
            api_key: SecretString::new(api.into()),
            base_url,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_env_missing_api_key() {
        let get = |k: &str| match k {
            "HEALTHSTORE_BASE_URL" => Some("http://localhost".into()),
            _ => None,
        };
        let res = Config::from_env_with(get);
        assert!(res.is_err());
    }

    #[test]
    fn from_env_reads_values_and_defaults_base_url() {
        let get = |k: &str| match k {
            "HEALTHSTORE_API_KEY" => Some("sekrit".into()),
            _ => None,
        };
        let cfg = Config::from_env_with(get).expect("cfg");
        assert_eq!(cfg.base_url, "https://healthstore.local");
    }
}
