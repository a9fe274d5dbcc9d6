// Hand-maintained Diesel schema. Monetary columns are TEXT holding exact
// decimal strings, never binary floats.

diesel::table! {
    clients (id) {
        id -> BigInt,
        name -> Text,
    }
}

diesel::table! {
    positions (id) {
        id -> BigInt,
        client_id -> BigInt,
        symbol -> Text,
        quantity -> Nullable<BigInt>,
        cost_basis -> Text,
    }
}

diesel::table! {
    market_data (id) {
        id -> BigInt,
        symbol -> Text,
        price -> Text,
        timestamp -> Timestamp,
    }
}

diesel::table! {
    margins (client_id) {
        client_id -> BigInt,
        margin_requirement -> Text,
        loan -> Text,
        updated_at -> Timestamp,
    }
}

diesel::joinable!(positions -> clients (client_id));
diesel::joinable!(margins -> clients (client_id));

diesel::allow_tables_to_appear_in_same_query!(clients, positions, market_data, margins);
