use anyhow::{bail, Context};
use rust_decimal::Decimal;

use margindesk_core::constants::DEFAULT_MAINTENANCE_MARGIN_RATIO;

/// Server configuration, sourced from the environment.
#[derive(Debug, Clone)]
pub struct Config {
    pub listen_addr: String,
    pub db_path: String,
    /// Maintenance margin ratio, validated to lie in (0, 1].
    pub mmr_ratio: Decimal,
    /// Load the sample dataset on startup when the database is empty.
    pub seed: bool,
}

impl Config {
    pub fn from_env() -> anyhow::Result<Self> {
        let listen_addr =
            std::env::var("MARGINDESK_LISTEN_ADDR").unwrap_or_else(|_| "0.0.0.0:8000".to_string());
        let db_path =
            std::env::var("MARGINDESK_DB_PATH").unwrap_or_else(|_| "margindesk.db".to_string());

        let raw_mmr = std::env::var("MARGINDESK_MMR")
            .unwrap_or_else(|_| DEFAULT_MAINTENANCE_MARGIN_RATIO.to_string());
        let mmr_ratio = parse_mmr_ratio(&raw_mmr)?;

        let seed = std::env::var("MARGINDESK_SEED")
            .map(|v| matches!(v.to_ascii_lowercase().as_str(), "1" | "true" | "yes"))
            .unwrap_or(false);

        Ok(Self {
            listen_addr,
            db_path,
            mmr_ratio,
            seed,
        })
    }
}

/// Parses and validates the maintenance margin ratio. Out-of-range ratios
/// are a configuration error, rejected at startup rather than at
/// evaluation time.
fn parse_mmr_ratio(raw: &str) -> anyhow::Result<Decimal> {
    let ratio: Decimal = raw
        .parse()
        .with_context(|| format!("MARGINDESK_MMR is not a decimal: {raw}"))?;
    if ratio <= Decimal::ZERO || ratio > Decimal::ONE {
        bail!("MARGINDESK_MMR must be in (0, 1], got {ratio}");
    }
    Ok(ratio)
}

#[cfg(test)]
mod tests {
    use super::parse_mmr_ratio;
    use rust_decimal_macros::dec;

    #[test]
    fn accepts_ratios_in_range() {
        assert_eq!(parse_mmr_ratio("0.25").unwrap(), dec!(0.25));
        assert_eq!(parse_mmr_ratio("0.3").unwrap(), dec!(0.3));
        assert_eq!(parse_mmr_ratio("1").unwrap(), dec!(1));
    }

    #[test]
    fn rejects_out_of_range_and_garbage() {
        assert!(parse_mmr_ratio("0").is_err());
        assert!(parse_mmr_ratio("-0.25").is_err());
        assert!(parse_mmr_ratio("1.5").is_err());
        assert!(parse_mmr_ratio("quarter").is_err());
    }
}
