//! Sample dataset for demos and tests.
//!
//! Mirrors the back office's onboarding fixtures: two clients, three
//! positions, a margin account each, and one price observation per held
//! symbol. Runs as a single job on the write actor so it is atomic.

use chrono::Utc;
use diesel::prelude::*;
use log::info;

use crate::clients::ClientRow;
use crate::db::WriteHandle;
use crate::errors::DieselErrorExt;
use crate::margin::MarginAccountRow;
use crate::market_data::PricePointRow;
use crate::positions::PositionRow;
use margindesk_core::errors::Result;

/// Inserts the sample dataset unless clients already exist.
pub async fn seed_sample_data(writer: &WriteHandle) -> Result<bool> {
    let seeded = writer
        .exec(|conn| {
            use crate::schema::{clients, margins, market_data, positions};

            let existing: i64 = clients::table
                .count()
                .get_result(conn)
                .map_err(|e| e.into_core_error())?;
            if existing > 0 {
                return Ok(false);
            }

            let john = diesel::insert_into(clients::table)
                .values(clients::name.eq("John Doe"))
                .returning(ClientRow::as_returning())
                .get_result::<ClientRow>(conn)
                .map_err(|e| e.into_core_error())?;
            let jane = diesel::insert_into(clients::table)
                .values(clients::name.eq("Jane Smith"))
                .returning(ClientRow::as_returning())
                .get_result::<ClientRow>(conn)
                .map_err(|e| e.into_core_error())?;

            let position_rows = [
                (john.id, "AAPL", Some(100i64), "150.00"),
                (john.id, "TSLA", Some(50), "700.00"),
                (jane.id, "GOOG", Some(200), "2800.00"),
            ];
            for (client, sym, qty, basis) in position_rows {
                diesel::insert_into(positions::table)
                    .values((
                        positions::client_id.eq(client),
                        positions::symbol.eq(sym),
                        positions::quantity.eq(qty),
                        positions::cost_basis.eq(basis),
                    ))
                    .returning(PositionRow::as_returning())
                    .get_result::<PositionRow>(conn)
                    .map_err(|e| e.into_core_error())?;
            }

            let now = Utc::now().naive_utc();
            let price_rows = [("AAPL", "160.00"), ("TSLA", "750.00"), ("GOOG", "2900.00")];
            for (sym, px) in price_rows {
                diesel::insert_into(market_data::table)
                    .values((
                        market_data::symbol.eq(sym),
                        market_data::price.eq(px),
                        market_data::timestamp.eq(now),
                    ))
                    .returning(PricePointRow::as_returning())
                    .get_result::<PricePointRow>(conn)
                    .map_err(|e| e.into_core_error())?;
            }

            for (client, loan) in [(john.id, "10000.00"), (jane.id, "15000.00")] {
                diesel::insert_into(margins::table)
                    .values(MarginAccountRow {
                        client_id: client,
                        margin_requirement: "0".to_string(),
                        loan: loan.to_string(),
                        updated_at: now,
                    })
                    .execute(conn)
                    .map_err(|e| e.into_core_error())?;
            }

            Ok(true)
        })
        .await?;

    if seeded {
        info!("Seeded sample clients, positions, prices, and margin accounts");
    }
    Ok(seeded)
}
