/// Decimal scale for all monetary amounts (portfolio value, requirement,
/// shortfall). Every intermediate multiplication is quantized to this scale.
pub const MONEY_SCALE: u32 = 3;

/// Default maintenance margin ratio used when none is configured.
pub const DEFAULT_MAINTENANCE_MARGIN_RATIO: &str = "0.25";
