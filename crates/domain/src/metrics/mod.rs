//! Metrics derived from current and historical snapshots.

use rust_decimal::Decimal;

pub mod change;
pub mod price;
pub mod window;

pub use change::{DailyChange, GainerPair, LoserPair};
pub use price::{change_since, fees_for_volume, token_price_usd};
pub use window::{VolumeReserve, WindowStats};

/// Swap fee charged by the exchange, 0.3%.
pub const FEE_RATE: Decimal = Decimal::from_parts(3, 0, 0, false, 3);
