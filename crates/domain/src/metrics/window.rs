use crate::entities::PairSnapshot;
use crate::numeric::Numeric;
use serde::{Deserialize, Serialize};

/// Counters of a pair at the start of a window (one, two or seven days ago).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct WindowStats {
    #[serde(rename = "untrackedVolumeUSD")]
    pub untracked_volume_usd: Option<Numeric>,
    #[serde(rename = "volumeUSD")]
    pub volume_usd: Option<Numeric>,
    #[serde(rename = "reserveUSD")]
    pub reserve_usd: Option<Numeric>,
    #[serde(rename = "txCount")]
    pub tx_count: Option<Numeric>,
}

impl WindowStats {
    /// Copies the counters of a snapshot; all fields are `None` without one.
    #[must_use]
    pub fn from_snapshot(snapshot: Option<&PairSnapshot>) -> Self {
        snapshot.map_or_else(Self::default, |s| Self {
            untracked_volume_usd: s.untracked_volume_usd.clone(),
            volume_usd: s.volume_usd.clone(),
            reserve_usd: s.reserve_usd.clone(),
            tx_count: s.tx_count.clone(),
        })
    }
}

/// Volume and reserve of a pair at the start of a window.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct VolumeReserve {
    #[serde(rename = "volumeUSD")]
    pub volume_usd: Option<Numeric>,
    #[serde(rename = "reserveUSD")]
    pub reserve_usd: Option<Numeric>,
}

impl VolumeReserve {
    #[must_use]
    pub fn from_snapshot(snapshot: Option<&PairSnapshot>) -> Self {
        snapshot.map_or_else(Self::default, |s| Self {
            volume_usd: s.volume_usd.clone(),
            reserve_usd: s.reserve_usd.clone(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_window_from_snapshot() {
        let snapshot = PairSnapshot {
            id: "0xpair".to_string(),
            volume_usd: Some("100".into()),
            untracked_volume_usd: Some("110.000000000000000001".into()),
            reserve_usd: Some("50".into()),
            tx_count: Some("7".into()),
        };

        let stats = WindowStats::from_snapshot(Some(&snapshot));
        assert_eq!(stats.volume_usd, Some("100".into()));
        assert_eq!(stats.tx_count, Some("7".into()));
        assert_eq!(
            serde_json::to_value(&stats).unwrap()["untrackedVolumeUSD"],
            "110.000000000000000001"
        );

        let reserve = VolumeReserve::from_snapshot(Some(&snapshot));
        assert_eq!(reserve.reserve_usd, Some("50".into()));
    }

    #[test]
    fn test_missing_snapshot_serializes_nulls() {
        let stats = WindowStats::from_snapshot(None);
        assert_eq!(
            serde_json::to_value(&stats).unwrap(),
            json!({
                "untrackedVolumeUSD": null,
                "volumeUSD": null,
                "reserveUSD": null,
                "txCount": null
            })
        );
    }
}
