//! The build pipeline: host tables → parser stages → transient cache →
//! finalizer → a fully reconciled [`GameData`].
//!
//! Stages run strictly in order because later ones read cache state built
//! by earlier ones. The first failing stage aborts the build; nothing from
//! a failed build is ever returned.

mod achievements;
mod cache;
mod card_types;
mod cards;
mod finalize;
mod locations;
mod npcs;
mod rewards;
mod rules;

use tracing::{debug, error};

use crate::{
    config::LoaderConfig,
    error::{DataResult, DataWarning},
    model::GameData,
    source::TableSource,
};

use cache::NpcCache;

/// Output of a successful build.
#[derive(Debug)]
pub struct BuildOutput {
    /// The assembled catalogues.
    pub data: GameData,
    /// Non-fatal problems found along the way.
    pub warnings: Vec<DataWarning>,
}

/// Mutable state threaded through the stages of one build.
pub(crate) struct BuildContext<'a> {
    pub source: &'a dyn TableSource,
    pub data: GameData,
    pub cache: NpcCache,
    pub warnings: Vec<DataWarning>,
    pub drift_slack: usize,
}

impl<'a> BuildContext<'a> {
    fn new(source: &'a dyn TableSource, config: &LoaderConfig) -> Self {
        Self {
            source,
            data: GameData::empty(),
            cache: NpcCache::default(),
            warnings: Vec::new(),
            drift_slack: config.index_drift_slack,
        }
    }

    pub fn warn(&mut self, warning: DataWarning) {
        tracing::warn!("{warning}");
        self.warnings.push(warning);
    }
}

type Stage = fn(&mut BuildContext<'_>) -> DataResult<()>;

const STAGES: [(&str, Stage); 7] = [
    ("rules", rules::parse),
    ("card types", card_types::parse),
    ("cards", cards::parse),
    ("npcs", npcs::parse),
    ("npc achievements", achievements::parse),
    ("npc locations", locations::parse),
    ("card rewards", rewards::parse),
];

/// Build every catalogue from scratch.
///
/// Safe to repeat: each call starts from empty catalogues and an empty cache.
pub fn build_game_data(
    source: &dyn TableSource,
    config: &LoaderConfig,
) -> DataResult<BuildOutput> {
    let mut ctx = BuildContext::new(source, config);

    for (name, stage) in STAGES {
        debug!("parsing {name}");
        if let Err(err) = stage(&mut ctx) {
            error!("failed to parse {name}: {err}");
            return Err(err);
        }
    }

    finalize::run(&mut ctx);

    Ok(BuildOutput {
        data: ctx.data,
        warnings: ctx.warnings,
    })
}

#[cfg(test)]
pub(crate) mod fixtures;
