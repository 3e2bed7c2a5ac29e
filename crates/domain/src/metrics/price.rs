use super::FEE_RATE;
use rust_decimal::Decimal;

/// USD price of a token from its ETH-denominated price.
///
/// `None` if either input is missing or the product overflows.
#[must_use]
pub fn token_price_usd(derived_eth: Option<Decimal>, eth_price: Option<Decimal>) -> Option<Decimal> {
    derived_eth?.checked_mul(eth_price?)
}

/// Difference between a cumulative counter now and at a past snapshot.
#[must_use]
pub fn change_since(current: Option<Decimal>, past: Option<Decimal>) -> Option<Decimal> {
    current?.checked_sub(past?)
}

/// Fees generated by a volume at [`FEE_RATE`].
#[must_use]
pub fn fees_for_volume(volume: Option<Decimal>) -> Option<Decimal> {
    volume?.checked_mul(FEE_RATE)
}
