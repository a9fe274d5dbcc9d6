//! Database model for clients.

use diesel::prelude::*;

use margindesk_core::clients::Client;

/// Database row for clients
#[derive(Queryable, Identifiable, Selectable, PartialEq, Eq, Debug, Clone)]
#[diesel(table_name = crate::schema::clients)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
pub struct ClientRow {
    pub id: i64,
    pub name: String,
}

#[derive(Insertable, Debug)]
#[diesel(table_name = crate::schema::clients)]
pub struct NewClientRow {
    pub name: String,
}

impl From<ClientRow> for Client {
    fn from(row: ClientRow) -> Self {
        Self {
            id: row.id,
            name: row.name,
        }
    }
}
