//! Database model for margin accounts.

use chrono::{NaiveDateTime, TimeZone, Utc};
use diesel::prelude::*;

use crate::errors::parse_stored_decimal;
use margindesk_core::errors::Result;
use margindesk_core::margin::MarginAccount;

/// Database row for margin accounts, one per client (client_id is the
/// primary key, which is what makes the upsert well defined).
#[derive(Queryable, Identifiable, Insertable, Selectable, PartialEq, Eq, Debug, Clone)]
#[diesel(table_name = crate::schema::margins)]
#[diesel(primary_key(client_id))]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
pub struct MarginAccountRow {
    pub client_id: i64,
    pub margin_requirement: String,
    pub loan: String,
    pub updated_at: NaiveDateTime,
}

impl MarginAccountRow {
    pub fn into_domain(self) -> Result<MarginAccount> {
        let margin_requirement =
            parse_stored_decimal(&self.margin_requirement, "margins.margin_requirement")?;
        let loan = parse_stored_decimal(&self.loan, "margins.loan")?;
        Ok(MarginAccount {
            client_id: self.client_id,
            margin_requirement,
            loan,
            updated_at: Utc.from_utc_datetime(&self.updated_at),
        })
    }
}
