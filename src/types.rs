pub use crate::utils::database;
use crate::modules::pizza::repository::{
    MemoryPizzaRepository, MySqlPizzaRepository, PizzaRepository, UnavailablePizzaRepository,
};
use async_trait::async_trait;
use std::env;
use std::sync::Arc;
use std::time::Duration;

#[derive(Clone)]
pub struct AppContext {
    pub host: String,
    pub port: u16,
}

#[derive(Clone)]
pub struct Context {
    pub app: AppContext,
    pub pizzas: Arc<dyn PizzaRepository>,
}

#[derive(Clone)]
pub struct AppConfig {
    pub host: String,
    pub port: u16,
}

#[derive(Clone)]
pub struct Config {
    pub database: database::DatabaseConfig,
    pub app: AppConfig,
}

impl Default for Config {
    fn default() -> Self {
        let host = env::var("HOST").unwrap_or_else(|_| "0.0.0.0".to_string());
        let port = env::var("PORT")
            .unwrap_or_else(|_| "3000".to_string())
            .parse::<u16>()
            .expect("Invalid PORT number");

        let database_driver = env::var("DB_DRIVER").unwrap_or_else(|_| "mysql".to_string());
        let database_url = env::var("DATABASE_URL").ok();
        let database_host = env::var("DB_HOST").unwrap_or_else(|_| "127.0.0.1".to_string());
        let database_port = env::var("DB_PORT")
            .unwrap_or_else(|_| "3307".to_string())
            .parse::<u16>()
            .expect("Invalid DB_PORT number");
        let database_user = env::var("DB_USER").unwrap_or_else(|_| "root".to_string());
        let database_password = env::var("DB_PASSWORD").unwrap_or_default();
        let database_name = env::var("DB_NAME").unwrap_or_else(|_| "pizza".to_string());
        let database_connect_timeout = env::var("DB_CONNECT_TIMEOUT")
            .unwrap_or_else(|_| "5".to_string())
            .parse::<u64>()
            .map(Duration::from_secs)
            .expect("Invalid DB_CONNECT_TIMEOUT seconds");

        Self {
            database: database::DatabaseConfig {
                driver: database::DatabaseDriver::from(database_driver),
                url: database_url,
                host: database_host,
                port: database_port,
                user: database_user,
                password: database_password,
                name: database_name,
                connect_timeout: database_connect_timeout,
            },
            app: AppConfig { host, port },
        }
    }
}

#[async_trait]
pub trait ToContext {
    async fn to_context(self) -> Context;
}

#[async_trait]
impl ToContext for Config {
    /// Never fails: an unreachable database is logged and every later query
    /// reports a server error instead.
    async fn to_context(self) -> Context {
        let pizzas: Arc<dyn PizzaRepository> = match self.database.driver {
            database::DatabaseDriver::Memory => {
                tracing::warn!("Using the in-memory pizza store, nothing will be persisted");
                Arc::new(MemoryPizzaRepository::new())
            }
            database::DatabaseDriver::MySql => match database::connect(&self.database).await {
                Ok(db_conn) => {
                    tracing::info!("Connected to the database");
                    Arc::new(MySqlPizzaRepository::new(db_conn))
                }
                Err(err) => {
                    tracing::error!("Failed to connect to the database: {}", err);
                    Arc::new(UnavailablePizzaRepository)
                }
            },
        };

        Context {
            app: AppContext {
                host: self.app.host,
                port: self.app.port,
            },
            pizzas,
        }
    }
}
