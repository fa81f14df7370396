//! Chart state container — app-owned, SDK-provided update logic.

use super::PricePoint;
use crate::shared::{ChartRange, CoinId};
use std::collections::HashMap;

/// Historical price series keyed by coin and timeframe.
///
/// The app owns instances of this type (e.g. inside the detail view's
/// state). Entries are replaced wholesale per fetch and never evicted,
/// matching the detail-cache policy.
#[derive(Debug, Clone, Default)]
pub struct ChartState {
    data: HashMap<(CoinId, ChartRange), Vec<PricePoint>>,
}

impl ChartState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store a fetched series for one (coin, timeframe), replacing any
    /// previous series for that key.
    pub fn apply_snapshot(&mut self, id: CoinId, range: ChartRange, series: Vec<PricePoint>) {
        self.data.insert((id, range), series);
    }

    pub fn get(&self, id: &CoinId, range: ChartRange) -> Option<&[PricePoint]> {
        self.data
            .get(&(id.clone(), range))
            .map(|series| series.as_slice())
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    pub fn clear(&mut self) {
        self.data.clear();
    }
}
