//! Database model for positions.

use diesel::prelude::*;

use crate::errors::parse_stored_decimal;
use margindesk_core::errors::Result;
use margindesk_core::positions::Position;

/// Database row for positions. `cost_basis` is a TEXT decimal.
#[derive(Queryable, Identifiable, Selectable, PartialEq, Eq, Debug, Clone)]
#[diesel(table_name = crate::schema::positions)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
pub struct PositionRow {
    pub id: i64,
    pub client_id: i64,
    pub symbol: String,
    pub quantity: Option<i64>,
    pub cost_basis: String,
}

#[derive(Insertable, Debug)]
#[diesel(table_name = crate::schema::positions)]
pub struct NewPositionRow {
    pub client_id: i64,
    pub symbol: String,
    pub quantity: Option<i64>,
    pub cost_basis: String,
}

impl PositionRow {
    pub fn into_domain(self) -> Result<Position> {
        let cost_basis = parse_stored_decimal(&self.cost_basis, "positions.cost_basis")?;
        Ok(Position {
            id: self.id,
            client_id: self.client_id,
            symbol: self.symbol,
            quantity: self.quantity,
            cost_basis,
        })
    }
}
