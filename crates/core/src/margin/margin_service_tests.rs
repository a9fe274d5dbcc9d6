#[cfg(test)]
mod tests {
    use crate::clients::{Client, ClientRepositoryTrait, NewClient};
    use crate::errors::{Error, Result};
    use crate::margin::{value_positions, MarginAccount, MarginService};
    use crate::margin::{MarginRepositoryTrait, MarginServiceTrait};
    use crate::market_data::{NewPricePoint, PricePoint, PriceRepositoryTrait};
    use crate::positions::{NewPosition, Position, PositionRepositoryTrait};
    use async_trait::async_trait;
    use chrono::{DateTime, TimeZone, Utc};
    use rust_decimal::Decimal;
    use rust_decimal_macros::dec;
    use std::collections::HashMap;
    use std::sync::{Arc, Mutex};

    // --- Mock repositories ---

    #[derive(Default)]
    struct MockClientRepository {
        clients: Mutex<HashMap<i64, Client>>,
    }

    impl MockClientRepository {
        fn with_client(id: i64, name: &str) -> Arc<Self> {
            let repo = Self::default();
            repo.clients.lock().unwrap().insert(
                id,
                Client {
                    id,
                    name: name.to_string(),
                },
            );
            Arc::new(repo)
        }
    }

    #[async_trait]
    impl ClientRepositoryTrait for MockClientRepository {
        fn get_by_id(&self, client_id: i64) -> Result<Client> {
            self.clients
                .lock()
                .unwrap()
                .get(&client_id)
                .cloned()
                .ok_or(Error::ClientNotFound(client_id))
        }

        fn list(&self) -> Result<Vec<Client>> {
            Ok(self.clients.lock().unwrap().values().cloned().collect())
        }

        async fn create(&self, _new_client: NewClient) -> Result<Client> {
            unimplemented!()
        }
    }

    #[derive(Default)]
    struct MockPositionRepository {
        positions: Mutex<Vec<Position>>,
    }

    impl MockPositionRepository {
        fn with_positions(positions: Vec<Position>) -> Arc<Self> {
            Arc::new(Self {
                positions: Mutex::new(positions),
            })
        }
    }

    #[async_trait]
    impl PositionRepositoryTrait for MockPositionRepository {
        fn get_for_client(&self, client_id: i64) -> Result<Vec<Position>> {
            Ok(self
                .positions
                .lock()
                .unwrap()
                .iter()
                .filter(|p| p.client_id == client_id)
                .cloned()
                .collect())
        }

        async fn create(&self, _new_position: NewPosition) -> Result<Position> {
            unimplemented!()
        }
    }

    #[derive(Default)]
    struct MockPriceRepository {
        latest: Mutex<HashMap<String, PricePoint>>,
    }

    impl MockPriceRepository {
        fn add_price(&self, symbol: &str, price: Decimal, timestamp: DateTime<Utc>) {
            self.latest.lock().unwrap().insert(
                symbol.to_string(),
                PricePoint {
                    symbol: symbol.to_string(),
                    price,
                    timestamp,
                },
            );
        }
    }

    #[async_trait]
    impl PriceRepositoryTrait for MockPriceRepository {
        fn get_latest_price(&self, symbol: &str) -> Result<PricePoint> {
            self.latest
                .lock()
                .unwrap()
                .get(symbol)
                .cloned()
                .ok_or_else(|| Error::PriceNotFound(symbol.to_string()))
        }

        async fn append_price_point(&self, new_point: NewPricePoint) -> Result<PricePoint> {
            let point = PricePoint {
                symbol: new_point.symbol,
                price: new_point.price,
                timestamp: new_point.timestamp,
            };
            self.latest
                .lock()
                .unwrap()
                .insert(point.symbol.clone(), point.clone());
            Ok(point)
        }

        fn list_price_points(&self) -> Result<Vec<PricePoint>> {
            Ok(self.latest.lock().unwrap().values().cloned().collect())
        }
    }

    #[derive(Default)]
    struct MockMarginRepository {
        accounts: Mutex<HashMap<i64, MarginAccount>>,
        upsert_count: Mutex<usize>,
    }

    impl MockMarginRepository {
        fn with_account(client_id: i64, loan: Decimal) -> Arc<Self> {
            let repo = Self::default();
            repo.accounts.lock().unwrap().insert(
                client_id,
                MarginAccount {
                    client_id,
                    margin_requirement: Decimal::ZERO,
                    loan,
                    updated_at: Utc.with_ymd_and_hms(2026, 1, 1, 0, 0, 0).unwrap(),
                },
            );
            Arc::new(repo)
        }

        fn upserts(&self) -> usize {
            *self.upsert_count.lock().unwrap()
        }

        fn stored(&self, client_id: i64) -> Option<MarginAccount> {
            self.accounts.lock().unwrap().get(&client_id).cloned()
        }
    }

    #[async_trait]
    impl MarginRepositoryTrait for MockMarginRepository {
        fn get_account(&self, client_id: i64) -> Result<MarginAccount> {
            self.accounts
                .lock()
                .unwrap()
                .get(&client_id)
                .cloned()
                .ok_or(Error::MarginAccountNotFound(client_id))
        }

        async fn upsert(
            &self,
            client_id: i64,
            margin_requirement: Decimal,
            loan: Decimal,
        ) -> Result<MarginAccount> {
            *self.upsert_count.lock().unwrap() += 1;
            let account = MarginAccount {
                client_id,
                margin_requirement,
                loan,
                updated_at: Utc::now(),
            };
            self.accounts
                .lock()
                .unwrap()
                .insert(client_id, account.clone());
            Ok(account)
        }
    }

    // --- Fixtures ---

    fn position(id: i64, client_id: i64, symbol: &str, quantity: Option<i64>) -> Position {
        Position {
            id,
            client_id,
            symbol: symbol.to_string(),
            quantity,
            cost_basis: dec!(150.00),
        }
    }

    fn sample_prices() -> Arc<MockPriceRepository> {
        let prices = MockPriceRepository::default();
        prices.add_price(
            "AAPL",
            dec!(160.00),
            Utc.with_ymd_and_hms(2026, 8, 27, 14, 0, 0).unwrap(),
        );
        prices.add_price(
            "TSLA",
            dec!(750.00),
            Utc.with_ymd_and_hms(2026, 8, 27, 14, 5, 0).unwrap(),
        );
        Arc::new(prices)
    }

    fn service_for(
        clients: Arc<MockClientRepository>,
        positions: Arc<MockPositionRepository>,
        prices: Arc<MockPriceRepository>,
        margins: Arc<MockMarginRepository>,
    ) -> MarginService {
        MarginService::new(clients, positions, prices, margins, dec!(0.25))
    }

    // --- Tests ---

    #[tokio::test]
    async fn evaluates_healthy_portfolio_without_call() {
        let clients = MockClientRepository::with_client(1, "John Doe");
        let positions = MockPositionRepository::with_positions(vec![
            position(1, 1, "AAPL", Some(100)),
            position(2, 1, "TSLA", Some(50)),
        ]);
        let prices = sample_prices();
        let margins = MockMarginRepository::with_account(1, dec!(10000.00));
        let service = service_for(clients, positions, prices, margins.clone());

        let decision = service.evaluate_margin(1).await.unwrap();

        assert_eq!(decision.client_id, 1);
        assert_eq!(decision.portfolio_value, dec!(53500.000));
        assert_eq!(decision.loan_amount, dec!(10000.00));
        assert_eq!(decision.net_equity, dec!(43500.000));
        assert_eq!(decision.margin_requirement, dec!(13375.000));
        assert_eq!(decision.margin_shortfall, Decimal::ZERO);
        assert!(!decision.margin_call_triggered);
        // Latest contributing observation wins
        assert_eq!(
            decision.timestamp,
            Utc.with_ymd_and_hms(2026, 8, 27, 14, 5, 0).unwrap()
        );

        let stored = margins.stored(1).unwrap();
        assert_eq!(stored.margin_requirement, dec!(13375.000));
        assert_eq!(stored.loan, dec!(10000.00));
    }

    #[tokio::test]
    async fn evaluates_underwater_portfolio_with_call() {
        let clients = MockClientRepository::with_client(1, "John Doe");
        let positions = MockPositionRepository::with_positions(vec![
            position(1, 1, "AAPL", Some(100)),
            position(2, 1, "TSLA", Some(50)),
        ]);
        let prices = sample_prices();
        let margins = MockMarginRepository::with_account(1, dec!(50000.00));
        let service = service_for(clients, positions, prices, margins);

        let decision = service.evaluate_margin(1).await.unwrap();

        assert_eq!(decision.net_equity, dec!(3500.000));
        assert_eq!(decision.margin_requirement, dec!(13375.000));
        assert_eq!(decision.margin_shortfall, dec!(9875.000));
        assert!(decision.margin_call_triggered);
    }

    #[tokio::test]
    async fn unknown_client_fails() {
        let clients = MockClientRepository::with_client(1, "John Doe");
        let positions = Arc::new(MockPositionRepository::default());
        let prices = sample_prices();
        let margins = MockMarginRepository::with_account(1, dec!(10000.00));
        let service = service_for(clients, positions, prices, margins);

        let err = service.evaluate_margin(42).await.unwrap_err();
        assert!(matches!(err, Error::ClientNotFound(42)));
    }

    #[tokio::test]
    async fn zero_positions_is_a_distinct_failure() {
        let clients = MockClientRepository::with_client(1, "John Doe");
        let positions = Arc::new(MockPositionRepository::default());
        let prices = sample_prices();
        let margins = MockMarginRepository::with_account(1, dec!(10000.00));
        let service = service_for(clients, positions, prices, margins.clone());

        let err = service.evaluate_margin(1).await.unwrap_err();
        assert!(matches!(err, Error::NoPositions(1)));
        assert_eq!(margins.upserts(), 0);
    }

    #[tokio::test]
    async fn missing_margin_account_fails_fast() {
        let clients = MockClientRepository::with_client(1, "John Doe");
        let positions =
            MockPositionRepository::with_positions(vec![position(1, 1, "AAPL", Some(100))]);
        let prices = sample_prices();
        let margins = Arc::new(MockMarginRepository::default());
        let service = service_for(clients, positions, prices, margins.clone());

        let err = service.evaluate_margin(1).await.unwrap_err();
        assert!(matches!(err, Error::MarginAccountNotFound(1)));
        // The engine never materializes an account from nothing
        assert_eq!(margins.upserts(), 0);
    }

    #[tokio::test]
    async fn missing_price_aborts_without_persisting() {
        let clients = MockClientRepository::with_client(1, "John Doe");
        let positions = MockPositionRepository::with_positions(vec![
            position(1, 1, "AAPL", Some(100)),
            position(2, 1, "GOOG", Some(10)),
        ]);
        let prices = sample_prices(); // no GOOG history
        let margins = MockMarginRepository::with_account(1, dec!(10000.00));
        let service = service_for(clients, positions, prices, margins.clone());

        let err = service.evaluate_margin(1).await.unwrap_err();
        match err {
            Error::PriceNotFound(symbol) => assert_eq!(symbol, "GOOG"),
            other => panic!("expected PriceNotFound, got {other}"),
        }
        assert_eq!(margins.upserts(), 0);
        assert_eq!(
            margins.stored(1).unwrap().margin_requirement,
            Decimal::ZERO,
            "partial evaluation must not be persisted"
        );
    }

    #[tokio::test]
    async fn null_quantity_counts_as_zero_shares() {
        let clients = MockClientRepository::with_client(1, "John Doe");
        let positions = MockPositionRepository::with_positions(vec![
            position(1, 1, "AAPL", Some(100)),
            position(2, 1, "TSLA", None),
        ]);
        let prices = sample_prices();
        let margins = MockMarginRepository::with_account(1, dec!(10000.00));
        let service = service_for(clients, positions, prices, margins);

        let decision = service.evaluate_margin(1).await.unwrap();
        assert_eq!(decision.portfolio_value, dec!(16000.000));
        assert!(decision.portfolio_value >= Decimal::ZERO);
    }

    #[tokio::test]
    async fn repeated_evaluation_is_idempotent() {
        let clients = MockClientRepository::with_client(1, "John Doe");
        let positions = MockPositionRepository::with_positions(vec![
            position(1, 1, "AAPL", Some(100)),
            position(2, 1, "TSLA", Some(50)),
        ]);
        let prices = sample_prices();
        let margins = MockMarginRepository::with_account(1, dec!(10000.00));
        let service = service_for(clients, positions, prices, margins.clone());

        let first = service.evaluate_margin(1).await.unwrap();
        let second = service.evaluate_margin(1).await.unwrap();

        assert_eq!(first, second);
        assert_eq!(margins.upserts(), 2);
        let stored = margins.stored(1).unwrap();
        assert_eq!(stored.margin_requirement, first.margin_requirement);
        assert_eq!(stored.loan, first.loan_amount);
    }

    #[test]
    fn valuation_rounds_each_contribution() {
        let prices = MockPriceRepository::default();
        let ts = Utc.with_ymd_and_hms(2026, 8, 27, 14, 0, 0).unwrap();
        // 3 x 0.3335 = 1.0005 -> rounds half-up to 1.001 per contribution
        prices.add_price("PENNY", dec!(0.3335), ts);

        let positions = vec![position(1, 1, "PENNY", Some(3))];
        let valuation = value_positions(&positions, &prices).unwrap();
        assert_eq!(valuation.total_value, dec!(1.001));
        assert_eq!(valuation.as_of, ts);
    }
}
