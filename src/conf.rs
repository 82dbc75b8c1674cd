use config::{Config, ConfigError, Environment};
use lazy_static::lazy_static;
use serde::Deserialize;

#[derive(Deserialize, Debug)]
pub struct Settings {
    pub base_url: String,
    pub service_name: String,
    pub listen_port: String,
    pub session_cookie: String,
    pub seed_mock_jobs: bool,
}

impl Settings {
    pub fn new() -> Result<Self, ConfigError> {
        let conf = Config::builder()
            .set_default("service_name", "JobBoard")?
            .set_default("listen_port", "8080")?
            .set_default("base_url", "http://localhost:8080")?
            .set_default("session_cookie", "_Host_jobboard_token")?
            .set_default("seed_mock_jobs", true)?
            .add_source(Environment::default())
            .build()?;
        let mut s: Settings = conf.try_deserialize()?;
        s.base_url = s.base_url.trim_end_matches('/').to_string();
        if s.session_cookie.trim().is_empty() {
            s.session_cookie = "_Host_jobboard_token".into();
        }
        Ok(s)
    }
}

lazy_static! {
    pub static ref settings: Settings = Settings::new().expect("improperly configured");
}

#[cfg(test)]
mod tests {
    use super::Settings;

    #[test]
    fn defaults_fill_every_key() {
        let s = Settings::new().unwrap();
        assert!(!s.service_name.is_empty());
        assert!(!s.listen_port.is_empty());
        assert!(!s.session_cookie.is_empty());
        assert!(!s.base_url.ends_with('/'));
    }
}
