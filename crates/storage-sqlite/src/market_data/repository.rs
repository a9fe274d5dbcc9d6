use async_trait::async_trait;
use diesel::prelude::*;
use std::sync::Arc;

use crate::db::{get_connection, DbPool, WriteHandle};
use crate::errors::DieselErrorExt;
use crate::schema::market_data::dsl::*;

use super::model::{NewPricePointRow, PricePointRow};
use margindesk_core::errors::{Error, Result};
use margindesk_core::market_data::{NewPricePoint, PricePoint, PriceRepositoryTrait};

/// Repository for market price observations. Append-only from this
/// engine's perspective.
pub struct PriceRepository {
    pool: Arc<DbPool>,
    writer: WriteHandle,
}

impl PriceRepository {
    /// Creates a new PriceRepository instance
    pub fn new(pool: Arc<DbPool>, writer: WriteHandle) -> Self {
        Self { pool, writer }
    }
}

#[async_trait]
impl PriceRepositoryTrait for PriceRepository {
    /// Returns the observation with the greatest timestamp for the symbol.
    /// Tied timestamps resolve to whichever row SQLite returns first.
    fn get_latest_price(&self, sym: &str) -> Result<PricePoint> {
        let mut conn = get_connection(&self.pool)?;

        let row = market_data
            .select(PricePointRow::as_select())
            .filter(symbol.eq(sym))
            .order(timestamp.desc())
            .first::<PricePointRow>(&mut conn)
            .optional()
            .map_err(|e| e.into_core_error())?;

        match row {
            Some(row) => row.into_domain(),
            None => Err(Error::PriceNotFound(sym.to_string())),
        }
    }

    async fn append_price_point(&self, new_point: NewPricePoint) -> Result<PricePoint> {
        self.writer
            .exec(move |conn| {
                let row = diesel::insert_into(market_data)
                    .values(&NewPricePointRow {
                        symbol: new_point.symbol,
                        price: new_point.price.to_string(),
                        timestamp: new_point.timestamp.naive_utc(),
                    })
                    .returning(PricePointRow::as_returning())
                    .get_result::<PricePointRow>(conn)
                    .map_err(|e| e.into_core_error())?;
                row.into_domain()
            })
            .await
    }

    fn list_price_points(&self) -> Result<Vec<PricePoint>> {
        let mut conn = get_connection(&self.pool)?;

        let rows = market_data
            .select(PricePointRow::as_select())
            .order(timestamp.desc())
            .load::<PricePointRow>(&mut conn)
            .map_err(|e| e.into_core_error())?;

        rows.into_iter().map(PricePointRow::into_domain).collect()
    }
}
