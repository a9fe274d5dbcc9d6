use async_trait::async_trait;
use diesel::prelude::*;
use std::sync::Arc;

use crate::db::{get_connection, DbPool, WriteHandle};
use crate::errors::DieselErrorExt;
use crate::schema::clients::dsl::*;

use super::model::{ClientRow, NewClientRow};
use margindesk_core::clients::{Client, ClientRepositoryTrait, NewClient};
use margindesk_core::errors::{Error, Result};

/// Repository for client data.
pub struct ClientRepository {
    pool: Arc<DbPool>,
    writer: WriteHandle,
}

impl ClientRepository {
    /// Creates a new ClientRepository instance
    pub fn new(pool: Arc<DbPool>, writer: WriteHandle) -> Self {
        Self { pool, writer }
    }
}

#[async_trait]
impl ClientRepositoryTrait for ClientRepository {
    fn get_by_id(&self, client_id: i64) -> Result<Client> {
        let mut conn = get_connection(&self.pool)?;

        let row = clients
            .select(ClientRow::as_select())
            .find(client_id)
            .first::<ClientRow>(&mut conn)
            .optional()
            .map_err(|e| e.into_core_error())?;

        row.map(Client::from)
            .ok_or(Error::ClientNotFound(client_id))
    }

    fn list(&self) -> Result<Vec<Client>> {
        let mut conn = get_connection(&self.pool)?;

        let rows = clients
            .select(ClientRow::as_select())
            .order(id.asc())
            .load::<ClientRow>(&mut conn)
            .map_err(|e| e.into_core_error())?;

        Ok(rows.into_iter().map(Client::from).collect())
    }

    async fn create(&self, new_client: NewClient) -> Result<Client> {
        self.writer
            .exec(move |conn| {
                let row = diesel::insert_into(clients)
                    .values(&NewClientRow {
                        name: new_client.name,
                    })
                    .returning(ClientRow::as_returning())
                    .get_result::<ClientRow>(conn)
                    .map_err(|e| e.into_core_error())?;
                Ok(row.into())
            })
            .await
    }
}
