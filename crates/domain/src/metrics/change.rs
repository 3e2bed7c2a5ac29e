//! Day-over-day changes for the gainers and losers lists.

use super::price::{change_since, fees_for_volume};
use crate::entities::{Pair, PairSnapshot};
use crate::numeric::decimal_of;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Volume, fee and reserve movement of a pair over the last two days.
///
/// "Today" spans one day ago to now, "yesterday" spans two days ago to one
/// day ago. A value is `None` when either end of its span is unknown.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DailyChange {
    pub volume_usd: Option<Decimal>,
    pub volume_usd_yesterday: Option<Decimal>,
    pub fees_usd: Option<Decimal>,
    pub fees_usd_yesterday: Option<Decimal>,
    pub reserve_usd: Option<Decimal>,
    pub reserve_usd_yesterday: Option<Decimal>,
}

impl DailyChange {
    /// Computes the change from the current pair and its one- and two-day snapshots.
    #[must_use]
    pub fn compute(
        current: &Pair,
        one_day: Option<&PairSnapshot>,
        two_day: Option<&PairSnapshot>,
    ) -> Self {
        let one_day_volume = one_day.and_then(|s| decimal_of(s.volume_usd.as_ref()));
        let two_day_volume = two_day.and_then(|s| decimal_of(s.volume_usd.as_ref()));
        let one_day_reserve = one_day.and_then(|s| decimal_of(s.reserve_usd.as_ref()));
        let two_day_reserve = two_day.and_then(|s| decimal_of(s.reserve_usd.as_ref()));
        let current_volume = decimal_of(current.volume_usd.as_ref());
        let current_reserve = decimal_of(current.reserve_usd.as_ref());

        let volume_usd = change_since(current_volume, one_day_volume);
        let volume_usd_yesterday = change_since(one_day_volume, two_day_volume);

        Self {
            volume_usd,
            volume_usd_yesterday,
            fees_usd: fees_for_volume(volume_usd),
            fees_usd_yesterday: fees_for_volume(volume_usd_yesterday),
            reserve_usd: change_since(current_reserve, one_day_reserve),
            reserve_usd_yesterday: change_since(one_day_reserve, two_day_reserve),
        }
    }
}

/// A pair on the gainers list.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GainerPair {
    #[serde(flatten)]
    pub pair: Pair,
    #[serde(rename = "feesUSDGained")]
    pub fees_usd_gained: Option<Decimal>,
    #[serde(rename = "feesUSDGainedYesterday")]
    pub fees_usd_gained_yesterday: Option<Decimal>,
    #[serde(rename = "reserveUSDGained")]
    pub reserve_usd_gained: Option<Decimal>,
    #[serde(rename = "reserveUSDGainedYesterday")]
    pub reserve_usd_gained_yesterday: Option<Decimal>,
    #[serde(rename = "volumeUSDGained")]
    pub volume_usd_gained: Option<Decimal>,
    #[serde(rename = "volumeUSDGainedYesterday")]
    pub volume_usd_gained_yesterday: Option<Decimal>,
}

impl GainerPair {
    #[must_use]
    pub fn new(pair: Pair, change: DailyChange) -> Self {
        Self {
            pair,
            fees_usd_gained: change.fees_usd,
            fees_usd_gained_yesterday: change.fees_usd_yesterday,
            reserve_usd_gained: change.reserve_usd,
            reserve_usd_gained_yesterday: change.reserve_usd_yesterday,
            volume_usd_gained: change.volume_usd,
            volume_usd_gained_yesterday: change.volume_usd_yesterday,
        }
    }
}

/// A pair on the losers list.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LoserPair {
    #[serde(flatten)]
    pub pair: Pair,
    #[serde(rename = "feesUSDLost")]
    pub fees_usd_lost: Option<Decimal>,
    #[serde(rename = "feesUSDLostYesterday")]
    pub fees_usd_lost_yesterday: Option<Decimal>,
    #[serde(rename = "volumeUSDLost")]
    pub volume_usd_lost: Option<Decimal>,
    #[serde(rename = "volumeUSDLostYesterday")]
    pub volume_usd_lost_yesterday: Option<Decimal>,
    #[serde(rename = "reserveUSDLost")]
    pub reserve_usd_lost: Option<Decimal>,
    #[serde(rename = "reserveUSDLostYesterday")]
    pub reserve_usd_lost_yesterday: Option<Decimal>,
}

impl LoserPair {
    #[must_use]
    pub fn new(pair: Pair, change: DailyChange) -> Self {
        Self {
            pair,
            fees_usd_lost: change.fees_usd,
            fees_usd_lost_yesterday: change.fees_usd_yesterday,
            volume_usd_lost: change.volume_usd,
            volume_usd_lost_yesterday: change.volume_usd_yesterday,
            reserve_usd_lost: change.reserve_usd,
            reserve_usd_lost_yesterday: change.reserve_usd_yesterday,
        }
    }
}
