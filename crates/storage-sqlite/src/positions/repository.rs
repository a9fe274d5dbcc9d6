use async_trait::async_trait;
use diesel::prelude::*;
use std::sync::Arc;

use crate::db::{get_connection, DbPool, WriteHandle};
use crate::errors::DieselErrorExt;
use crate::schema::positions::dsl::*;

use super::model::{NewPositionRow, PositionRow};
use margindesk_core::errors::Result;
use margindesk_core::positions::{NewPosition, Position, PositionRepositoryTrait};

/// Repository for position data.
pub struct PositionRepository {
    pool: Arc<DbPool>,
    writer: WriteHandle,
}

impl PositionRepository {
    /// Creates a new PositionRepository instance
    pub fn new(pool: Arc<DbPool>, writer: WriteHandle) -> Self {
        Self { pool, writer }
    }
}

#[async_trait]
impl PositionRepositoryTrait for PositionRepository {
    /// Lists a client's positions in insertion order (ascending row id).
    fn get_for_client(&self, client: i64) -> Result<Vec<Position>> {
        let mut conn = get_connection(&self.pool)?;

        let rows = positions
            .select(PositionRow::as_select())
            .filter(client_id.eq(client))
            .order(id.asc())
            .load::<PositionRow>(&mut conn)
            .map_err(|e| e.into_core_error())?;

        rows.into_iter().map(PositionRow::into_domain).collect()
    }

    async fn create(&self, new_position: NewPosition) -> Result<Position> {
        self.writer
            .exec(move |conn| {
                let row = diesel::insert_into(positions)
                    .values(&NewPositionRow {
                        client_id: new_position.client_id,
                        symbol: new_position.symbol,
                        quantity: new_position.quantity,
                        cost_basis: new_position.cost_basis.to_string(),
                    })
                    .returning(PositionRow::as_returning())
                    .get_result::<PositionRow>(conn)
                    .map_err(|e| e.into_core_error())?;
                row.into_domain()
            })
            .await
    }
}
