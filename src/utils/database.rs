use sqlx::mysql::{MySqlConnectOptions, MySqlPool, MySqlPoolOptions};
use std::time::Duration;

#[derive(Clone, Debug, PartialEq)]
pub enum DatabaseDriver {
    MySql,
    Memory,
}

impl DatabaseDriver {
    pub fn from(raw_driver: String) -> Self {
        match raw_driver.as_ref() {
            "memory" => Self::Memory,
            _ => Self::MySql,
        }
    }
}

#[derive(Clone)]
pub struct DatabaseConfig {
    pub driver: DatabaseDriver,
    pub url: Option<String>,
    pub host: String,
    pub port: u16,
    pub user: String,
    pub password: String,
    pub name: String,
    pub connect_timeout: Duration,
}

impl DatabaseConfig {
    /// `DATABASE_URL` wins over the individual `DB_*` settings.
    pub fn connect_options(&self) -> Result<MySqlConnectOptions, sqlx::Error> {
        match &self.url {
            Some(url) => url.parse::<MySqlConnectOptions>(),
            None => Ok(MySqlConnectOptions::new()
                .host(&self.host)
                .port(self.port)
                .username(&self.user)
                .password(&self.password)
                .database(&self.name)),
        }
    }
}

#[derive(Clone)]
pub struct DatabaseConnection {
    pub pool: MySqlPool,
}

// The pool is capped at one connection: every request shares it. An
// unreachable server fails after `connect_timeout` instead of sqlx's 30s.
pub async fn connect(config: &DatabaseConfig) -> Result<DatabaseConnection, sqlx::Error> {
    let options = config.connect_options()?;

    MySqlPoolOptions::new()
        .max_connections(1)
        .acquire_timeout(config.connect_timeout)
        .connect_with(options)
        .await
        .map(|pool| DatabaseConnection { pool })
        .map_err(|err| {
            tracing::error!(
                "Error connecting to database {}:{}/{}: {}",
                config.host,
                config.port,
                config.name,
                err
            );
            err
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config(url: Option<&str>) -> DatabaseConfig {
        DatabaseConfig {
            driver: DatabaseDriver::MySql,
            url: url.map(String::from),
            host: "127.0.0.1".to_string(),
            port: 3307,
            user: "root".to_string(),
            password: String::new(),
            name: "pizza".to_string(),
            connect_timeout: Duration::from_secs(1),
        }
    }

    #[test]
    fn unknown_driver_falls_back_to_mysql() {
        assert_eq!(DatabaseDriver::from("memory".to_string()), DatabaseDriver::Memory);
        assert_eq!(DatabaseDriver::from("postgres".to_string()), DatabaseDriver::MySql);
    }

    #[test]
    fn builds_options_from_parts() {
        assert!(config(None).connect_options().is_ok());
    }

    #[test]
    fn rejects_malformed_url() {
        assert!(config(Some("not a url")).connect_options().is_err());
    }

    #[tokio::test]
    async fn malformed_url_fails_to_connect() {
        assert!(connect(&config(Some("not a url"))).await.is_err());
    }

    #[tokio::test]
    async fn unreachable_server_fails_within_connect_timeout() {
        // Port 1 on a TEST-NET address never answers.
        let config = DatabaseConfig {
            host: "192.0.2.1".to_string(),
            port: 1,
            ..config(None)
        };

        let started = std::time::Instant::now();
        let result = tokio::time::timeout(Duration::from_secs(10), connect(&config))
            .await
            .expect("connect outlived its timeout");

        assert!(result.is_err());
        assert!(started.elapsed() < Duration::from_secs(10));
    }
}
