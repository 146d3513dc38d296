mod memory;

pub use memory::MemoryPizzaRepository;

use crate::types::database::DatabaseConnection;
use async_trait::async_trait;
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::{Number, Value};
use sqlx::{
    mysql::{MySql, MySqlArguments},
    query::Query,
    MySqlExecutor,
};

/// A price as the client sent it. Numbers and numeric strings become
/// `Number`; anything else is kept verbatim and left for the database to
/// accept or reject.
#[derive(Serialize, Clone, Debug, PartialEq)]
#[serde(untagged)]
pub enum Price {
    Number(Number),
    Raw(String),
}

impl Price {
    pub fn parse(text: &str) -> Option<Number> {
        serde_json::from_str::<Number>(text.trim()).ok()
    }
}

impl From<Value> for Price {
    fn from(value: Value) -> Self {
        match value {
            Value::Number(number) => Self::Number(number),
            Value::String(text) => match Self::parse(&text) {
                Some(number) => Self::Number(number),
                None => Self::Raw(text),
            },
            other => Self::Raw(other.to_string()),
        }
    }
}

impl<'de> Deserialize<'de> for Price {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        Value::deserialize(deserializer).map(Self::from)
    }
}

#[derive(Serialize, Clone, Debug, PartialEq)]
pub struct Pizza {
    pub id: i64,
    pub name: Option<String>,
    pub price: Option<Price>,
}

// `par` is read back as text so INT, DECIMAL and FLOAT columns all decode.
#[derive(sqlx::FromRow)]
struct PizzaRow {
    id: i64,
    name: Option<String>,
    price: Option<String>,
}

impl From<PizzaRow> for Pizza {
    fn from(row: PizzaRow) -> Self {
        Self {
            id: row.id,
            name: row.name,
            price: row.price.map(|text| match Price::parse(&text) {
                Some(number) => Price::Number(number),
                None => Price::Raw(text),
            }),
        }
    }
}

const SELECT_PIZZAS: &str =
    "SELECT pazon AS id, pnev AS name, CAST(par AS CHAR) AS price FROM pizza";

/// Summary of a write statement, shaped like the MySQL OK packet.
#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct WriteOutcome {
    pub affected_rows: u64,
    pub insert_id: u64,
}

/// Fields are bound as-is; a missing value becomes NULL.
#[derive(Clone, Debug, Default)]
pub struct PizzaPayload {
    pub name: Option<String>,
    pub price: Option<Price>,
}

// Integers go over the wire as integers, other numbers as doubles.
fn bind_price<'q>(
    query: Query<'q, MySql, MySqlArguments>,
    price: Option<Price>,
) -> Query<'q, MySql, MySqlArguments> {
    match price {
        None => query.bind(None::<String>),
        Some(Price::Number(number)) => match number.as_i64() {
            Some(price) => query.bind(price),
            None => query.bind(number.as_f64()),
        },
        Some(Price::Raw(text)) => query.bind(text),
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Error {
    /// The database connection was never established.
    Unavailable,
    UnexpectedError,
}

#[async_trait]
pub trait PizzaRepository: Send + Sync {
    async fn find_many(&self) -> Result<Vec<Pizza>, Error>;
    async fn find_by_id(&self, id: String) -> Result<Vec<Pizza>, Error>;
    async fn create(&self, payload: PizzaPayload) -> Result<Pizza, Error>;
    async fn update_by_id(&self, id: String, payload: PizzaPayload) -> Result<WriteOutcome, Error>;
    async fn delete_by_id(&self, id: String) -> Result<WriteOutcome, Error>;
}

pub async fn find_many<'e, E: MySqlExecutor<'e>>(e: E) -> Result<Vec<Pizza>, Error> {
    sqlx::query_as::<_, PizzaRow>(SELECT_PIZZAS)
        .fetch_all(e)
        .await
        .map(|rows| rows.into_iter().map(Pizza::from).collect())
        .map_err(|err| {
            tracing::error!("Error occurred while trying to fetch many pizzas: {}", err);
            Error::UnexpectedError
        })
}

// The id goes to the database untouched; MySQL does the string-to-integer
// comparison.
pub async fn find_by_id<'e, E: MySqlExecutor<'e>>(e: E, id: String) -> Result<Vec<Pizza>, Error> {
    sqlx::query_as::<_, PizzaRow>(&format!("{SELECT_PIZZAS} WHERE pazon = ?"))
        .bind(&id)
        .fetch_all(e)
        .await
        .map(|rows| rows.into_iter().map(Pizza::from).collect())
        .map_err(|err| {
            tracing::error!("Error occurred while fetching pizza with id {}: {}", id, err);
            Error::UnexpectedError
        })
}

pub async fn create<'e, E: MySqlExecutor<'e>>(e: E, payload: PizzaPayload) -> Result<Pizza, Error> {
    let query = sqlx::query("INSERT INTO pizza (pazon, pnev, par) VALUES (NULL, ?, ?)")
        .bind(payload.name.clone());

    match bind_price(query, payload.price.clone()).execute(e).await {
        Ok(result) => Ok(Pizza {
            id: result.last_insert_id() as i64,
            name: payload.name,
            price: payload.price,
        }),
        Err(err) => {
            tracing::error!("Error occurred while trying to create a pizza: {}", err);
            Err(Error::UnexpectedError)
        }
    }
}

pub async fn update_by_id<'e, E: MySqlExecutor<'e>>(
    e: E,
    id: String,
    payload: PizzaPayload,
) -> Result<WriteOutcome, Error> {
    let query = sqlx::query("UPDATE pizza SET pnev = ?, par = ? WHERE pazon = ?").bind(payload.name);

    bind_price(query, payload.price)
        .bind(&id)
        .execute(e)
        .await
        .map(|result| WriteOutcome {
            affected_rows: result.rows_affected(),
            insert_id: result.last_insert_id(),
        })
        .map_err(|err| {
            tracing::error!(
                "Error occurred while trying to update a pizza by id {}: {}",
                id,
                err
            );
            Error::UnexpectedError
        })
}

pub async fn delete_by_id<'e, E: MySqlExecutor<'e>>(
    e: E,
    id: String,
) -> Result<WriteOutcome, Error> {
    sqlx::query("DELETE FROM pizza WHERE pazon = ?")
        .bind(&id)
        .execute(e)
        .await
        .map(|result| WriteOutcome {
            affected_rows: result.rows_affected(),
            insert_id: result.last_insert_id(),
        })
        .map_err(|err| {
            tracing::error!(
                "Error occurred while trying to delete a pizza by id {}: {}",
                id,
                err
            );
            Error::UnexpectedError
        })
}

pub struct MySqlPizzaRepository {
    db_conn: DatabaseConnection,
}

impl MySqlPizzaRepository {
    pub fn new(db_conn: DatabaseConnection) -> Self {
        Self { db_conn }
    }
}

#[async_trait]
impl PizzaRepository for MySqlPizzaRepository {
    async fn find_many(&self) -> Result<Vec<Pizza>, Error> {
        find_many(&self.db_conn.pool).await
    }

    async fn find_by_id(&self, id: String) -> Result<Vec<Pizza>, Error> {
        find_by_id(&self.db_conn.pool, id).await
    }

    async fn create(&self, payload: PizzaPayload) -> Result<Pizza, Error> {
        create(&self.db_conn.pool, payload).await
    }

    async fn update_by_id(&self, id: String, payload: PizzaPayload) -> Result<WriteOutcome, Error> {
        update_by_id(&self.db_conn.pool, id, payload).await
    }

    async fn delete_by_id(&self, id: String) -> Result<WriteOutcome, Error> {
        delete_by_id(&self.db_conn.pool, id).await
    }
}

/// Stands in for the database when the startup connection failed.
pub struct UnavailablePizzaRepository;

impl UnavailablePizzaRepository {
    fn fail<T>(operation: &str) -> Result<T, Error> {
        tracing::error!("Cannot {} pizzas: database connection is not available", operation);
        Err(Error::Unavailable)
    }
}

#[async_trait]
impl PizzaRepository for UnavailablePizzaRepository {
    async fn find_many(&self) -> Result<Vec<Pizza>, Error> {
        Self::fail("list")
    }

    async fn find_by_id(&self, _id: String) -> Result<Vec<Pizza>, Error> {
        Self::fail("fetch")
    }

    async fn create(&self, _payload: PizzaPayload) -> Result<Pizza, Error> {
        Self::fail("create")
    }

    async fn update_by_id(&self, _id: String, _payload: PizzaPayload) -> Result<WriteOutcome, Error> {
        Self::fail("update")
    }

    async fn delete_by_id(&self, _id: String) -> Result<WriteOutcome, Error> {
        Self::fail("delete")
    }
}
