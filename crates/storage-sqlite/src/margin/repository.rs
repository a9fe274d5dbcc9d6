use async_trait::async_trait;
use chrono::Utc;
use diesel::prelude::*;
use rust_decimal::Decimal;
use std::sync::Arc;

use crate::db::{get_connection, DbPool, WriteHandle};
use crate::errors::DieselErrorExt;
use crate::schema::margins::dsl::*;

use super::model::MarginAccountRow;
use margindesk_core::errors::{Error, Result};
use margindesk_core::margin::{MarginAccount, MarginRepositoryTrait};

/// Repository for margin account records.
pub struct MarginRepository {
    pool: Arc<DbPool>,
    writer: WriteHandle,
}

impl MarginRepository {
    /// Creates a new MarginRepository instance
    pub fn new(pool: Arc<DbPool>, writer: WriteHandle) -> Self {
        Self { pool, writer }
    }
}

#[async_trait]
impl MarginRepositoryTrait for MarginRepository {
    fn get_account(&self, client: i64) -> Result<MarginAccount> {
        let mut conn = get_connection(&self.pool)?;

        let row = margins
            .select(MarginAccountRow::as_select())
            .find(client)
            .first::<MarginAccountRow>(&mut conn)
            .optional()
            .map_err(|e| e.into_core_error())?;

        match row {
            Some(row) => row.into_domain(),
            None => Err(Error::MarginAccountNotFound(client)),
        }
    }

    /// Insert-or-update keyed by client id. The seeding path inserts the
    /// initial record; evaluations only ever update an existing one.
    async fn upsert(
        &self,
        client: i64,
        requirement: Decimal,
        loan_amount: Decimal,
    ) -> Result<MarginAccount> {
        self.writer
            .exec(move |conn| {
                let row = MarginAccountRow {
                    client_id: client,
                    margin_requirement: requirement.to_string(),
                    loan: loan_amount.to_string(),
                    updated_at: Utc::now().naive_utc(),
                };

                diesel::insert_into(margins)
                    .values(&row)
                    .on_conflict(client_id)
                    .do_update()
                    .set((
                        margin_requirement.eq(&row.margin_requirement),
                        loan.eq(&row.loan),
                        updated_at.eq(row.updated_at),
                    ))
                    .execute(conn)
                    .map_err(|e| e.into_core_error())?;

                row.into_domain()
            })
            .await
    }
}
