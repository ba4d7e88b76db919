//! In-memory draw cache.
//!
//! Built once at startup and passed by reference to whatever needs
//! draws. The data only changes between builds, so there is no
//! runtime invalidation: restart to reload.

use crate::{
    draw::{Draw, LottoDataFile},
    error::{CoreError, CoreResult},
    types::Round,
    validation::validate_draws,
};
use chrono::{DateTime, Utc};

pub struct DrawCache {
    /// Most recent first.
    draws: Vec<Draw>,
    last_updated: Option<DateTime<Utc>>,
}

impl DrawCache {
    /// Read and validate the data file at `path`.
    pub fn load(path: &str) -> CoreResult<Self> {
        let file = LottoDataFile::read(path)?;
        let cache = Self::from_file(file)?;
        log::info!("draw cache loaded from {path}: {} draws", cache.len());
        Ok(cache)
    }

    pub fn from_file(file: LottoDataFile) -> CoreResult<Self> {
        let last_updated = file.last_updated_at();
        let mut cache = Self::from_draws(file.draws)?;
        cache.last_updated = last_updated;
        Ok(cache)
    }

    /// Validate and index `draws`. Order on input does not matter.
    pub fn from_draws(mut draws: Vec<Draw>) -> CoreResult<Self> {
        if draws.is_empty() {
            return Err(CoreError::EmptyDataset);
        }
        validate_draws(&draws).into_result()?;
        draws.sort_by(|a, b| b.round.cmp(&a.round));
        Ok(Self { draws, last_updated: None })
    }

    pub fn all(&self) -> &[Draw] {
        &self.draws
    }

    pub fn latest(&self) -> &Draw {
        // Non-empty by construction.
        &self.draws[0]
    }

    /// The most recent `n` draws (fewer if the cache is smaller).
    pub fn recent(&self, n: usize) -> &[Draw] {
        &self.draws[..n.min(self.draws.len())]
    }

    pub fn by_round(&self, round: Round) -> Option<&Draw> {
        // Rounds are contiguous and descending after validation.
        let offset = self.latest().round.checked_sub(round)? as usize;
        self.draws.get(offset)
    }

    pub fn len(&self) -> usize {
        self.draws.len()
    }

    pub fn is_empty(&self) -> bool {
        self.draws.is_empty()
    }

    pub fn last_updated(&self) -> Option<DateTime<Utc>> {
        self.last_updated
    }
}
