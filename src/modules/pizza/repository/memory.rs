use super::{Error, Pizza, PizzaPayload, PizzaRepository, Price, WriteOutcome};
use async_trait::async_trait;
use regex::Regex;
use std::collections::BTreeMap;
use std::sync::OnceLock;
use tokio::sync::Mutex;

#[derive(Default)]
struct Table {
    last_id: i64,
    rows: BTreeMap<i64, Pizza>,
}

/// In-process stand-in for the `pizza` table. Ids are handed out the way
/// AUTO_INCREMENT does and are never reused.
#[derive(Default)]
pub struct MemoryPizzaRepository {
    table: Mutex<Table>,
}

impl MemoryPizzaRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

/// Casts the id the way MySQL compares a string with an INT column: the
/// leading numeric part counts (`"1abc"` is 1, `"abc"` is 0) and a
/// fractional value matches no row.
fn parse_id(id: &str) -> Option<i64> {
    static NUMERIC_PREFIX: OnceLock<Regex> = OnceLock::new();

    let prefix = NUMERIC_PREFIX
        .get_or_init(|| {
            Regex::new(r"^\s*[+-]?(\d+(\.\d*)?|\.\d+)").expect("Invalid numeric prefix regex")
        })
        .find(id)
        .map_or("0", |found| found.as_str().trim_start());

    let value = prefix.parse::<f64>().ok()?;
    (value.fract() == 0.0).then_some(value as i64)
}

// Strict-mode MySQL refuses a price it cannot read as a number.
fn check_price(payload: &PizzaPayload) -> Result<(), Error> {
    match &payload.price {
        Some(Price::Raw(text)) => {
            tracing::error!("Incorrect value for column 'par': {:?}", text);
            Err(Error::UnexpectedError)
        }
        _ => Ok(()),
    }
}

#[async_trait]
impl PizzaRepository for MemoryPizzaRepository {
    async fn find_many(&self) -> Result<Vec<Pizza>, Error> {
        Ok(self.table.lock().await.rows.values().cloned().collect())
    }

    async fn find_by_id(&self, id: String) -> Result<Vec<Pizza>, Error> {
        let table = self.table.lock().await;

        Ok(parse_id(&id)
            .and_then(|id| table.rows.get(&id))
            .cloned()
            .into_iter()
            .collect())
    }

    async fn create(&self, payload: PizzaPayload) -> Result<Pizza, Error> {
        check_price(&payload)?;
        let mut table = self.table.lock().await;
        table.last_id += 1;

        let pizza = Pizza {
            id: table.last_id,
            name: payload.name,
            price: payload.price,
        };
        table.rows.insert(pizza.id, pizza.clone());

        Ok(pizza)
    }

    async fn update_by_id(&self, id: String, payload: PizzaPayload) -> Result<WriteOutcome, Error> {
        check_price(&payload)?;
        let mut table = self.table.lock().await;

        let row = match parse_id(&id) {
            Some(id) => table.rows.get_mut(&id),
            None => None,
        };

        let affected_rows = match row {
            Some(pizza) => {
                pizza.name = payload.name;
                pizza.price = payload.price;
                1
            }
            None => 0,
        };

        Ok(WriteOutcome {
            affected_rows,
            insert_id: 0,
        })
    }

    async fn delete_by_id(&self, id: String) -> Result<WriteOutcome, Error> {
        let mut table = self.table.lock().await;

        let affected_rows = parse_id(&id)
            .and_then(|id| table.rows.remove(&id))
            .map_or(0, |_| 1);

        Ok(WriteOutcome {
            affected_rows,
            insert_id: 0,
        })
    }
}
