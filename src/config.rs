use std::env;

const HOST: &str = "0.0.0.0";
const PORT: u16 = 8080;
const BASE_URL: &str = "http://localhost:3000";

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub host: String,
    pub port: u16,
    pub stripe_secret_key: Option<String>,
    pub sendgrid_api_key: Option<String>,
    pub from_email: Option<String>,
    /// Public URL of the booking UI, used for onboarding redirects.
    pub base_url: String,
}

fn non_empty_var(key: &str) -> Option<String> {
    env::var(key).ok().filter(|v| !v.trim().is_empty())
}

impl AppConfig {
    pub fn from_env() -> Self {
        Self {
            host: env::var("HOST").unwrap_or_else(|_| HOST.to_string()),
            port: env::var("PORT")
                .unwrap_or_else(|_| PORT.to_string())
                .parse()
                .unwrap_or(PORT),
            stripe_secret_key: non_empty_var("STRIPE_SECRET_KEY"),
            sendgrid_api_key: non_empty_var("SENDGRID_API_KEY"),
            from_email: non_empty_var("FROM_EMAIL"),
            base_url: non_empty_var("BASE_URL")
                .unwrap_or_else(|| BASE_URL.to_string())
                .trim_end_matches('/')
                .to_string(),
        }
    }

    /// Confirmation emails are only sent when both relay settings are present.
    pub fn email_configured(&self) -> bool {
        self.sendgrid_api_key.is_some() && self.from_email.is_some()
    }

    pub fn onboarding_urls(&self) -> Result<(String, String), url::ParseError> {
        let refresh_url = url::Url::parse(&format!("{}/stripe/reauth", self.base_url))?;
        let return_url = url::Url::parse(&format!("{}/stripe/success", self.base_url))?;
        Ok((refresh_url.to_string(), return_url.to_string()))
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            host: HOST.to_string(),
            port: PORT,
            stripe_secret_key: None,
            sendgrid_api_key: None,
            from_email: None,
            base_url: BASE_URL.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;

    const KEYS: [&str; 6] = [
        "HOST",
        "PORT",
        "STRIPE_SECRET_KEY",
        "SENDGRID_API_KEY",
        "FROM_EMAIL",
        "BASE_URL",
    ];

    fn clear_env() {
        for key in KEYS {
            env::remove_var(key);
        }
    }

    #[test]
    #[serial]
    fn test_defaults() {
        clear_env();
        let config = AppConfig::from_env();
        assert_eq!(config.host, "0.0.0.0");
        assert_eq!(config.port, 8080);
        assert_eq!(config.base_url, "http://localhost:3000");
        assert!(config.stripe_secret_key.is_none());
        assert!(!config.email_configured());
    }

    #[test]
    #[serial]
    fn test_reads_environment() {
        clear_env();
        env::set_var("PORT", "9000");
        env::set_var("SENDGRID_API_KEY", "SG.key");
        env::set_var("FROM_EMAIL", "bookings@example.com");
        env::set_var("BASE_URL", "https://rooms.example.com/");

        let config = AppConfig::from_env();
        assert_eq!(config.port, 9000);
        assert!(config.email_configured());
        assert_eq!(config.base_url, "https://rooms.example.com");
        clear_env();
    }

    #[test]
    #[serial]
    fn test_invalid_port_and_blank_values() {
        clear_env();
        env::set_var("PORT", "not-a-port");
        env::set_var("SENDGRID_API_KEY", "SG.key");
        env::set_var("FROM_EMAIL", "  ");

        let config = AppConfig::from_env();
        assert_eq!(config.port, 8080);
        assert!(!config.email_configured());
        clear_env();
    }

    #[test]
    fn test_onboarding_urls() {
        let config = AppConfig {
            base_url: "https://rooms.example.com".to_string(),
            ..Default::default()
        };
        let (refresh_url, return_url) = config.onboarding_urls().unwrap();
        assert_eq!(refresh_url, "https://rooms.example.com/stripe/reauth");
        assert_eq!(return_url, "https://rooms.example.com/stripe/success");

        let config = AppConfig {
            base_url: "not a url".to_string(),
            ..Default::default()
        };
        assert!(config.onboarding_urls().is_err());
    }
}
