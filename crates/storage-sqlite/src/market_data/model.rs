//! Database model for market price observations.

use chrono::{NaiveDateTime, TimeZone, Utc};
use diesel::prelude::*;

use crate::errors::parse_stored_decimal;
use margindesk_core::errors::Result;
use margindesk_core::market_data::PricePoint;

/// Database row for price observations. `price` is a TEXT decimal;
/// `timestamp` is stored as naive UTC.
#[derive(Queryable, Identifiable, Selectable, PartialEq, Eq, Debug, Clone)]
#[diesel(table_name = crate::schema::market_data)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
pub struct PricePointRow {
    pub id: i64,
    pub symbol: String,
    pub price: String,
    pub timestamp: NaiveDateTime,
}

#[derive(Insertable, Debug)]
#[diesel(table_name = crate::schema::market_data)]
pub struct NewPricePointRow {
    pub symbol: String,
    pub price: String,
    pub timestamp: NaiveDateTime,
}

impl PricePointRow {
    pub fn into_domain(self) -> Result<PricePoint> {
        let price = parse_stored_decimal(&self.price, "market_data.price")?;
        Ok(PricePoint {
            symbol: self.symbol,
            price,
            timestamp: Utc.from_utc_datetime(&self.timestamp),
        })
    }
}
