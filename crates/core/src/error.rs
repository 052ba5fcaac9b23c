//! Error and warning types produced while assembling game data.

use thiserror::Error;

/// Fault reported by the host while reading one of its tables.
///
/// The host gives no finer classification than "something went wrong while
/// enumerating", so every variant is treated as transient by the loader.
#[derive(Debug, Clone, Error)]
pub enum HostError {
    /// The host refused access to the table right now.
    #[error("sheet {sheet} is unavailable: {reason}")]
    Unavailable {
        /// Schema name of the table.
        sheet: String,
        /// Host-provided description.
        reason: String,
    },
    /// Enumeration of the table broke off midway.
    #[error("enumeration of sheet {sheet} failed: {reason}")]
    Enumeration {
        /// Schema name of the table, `*` when unknown.
        sheet: String,
        /// Host-provided description.
        reason: String,
    },
}

/// Fatal failure of a single build attempt.
#[derive(Debug, Error)]
pub enum DataError {
    /// Row counts or field shapes disagree with the fixed expectations.
    #[error("schema mismatch in {table}: {detail}")]
    SchemaMismatch {
        /// Table whose shape is off.
        table: &'static str,
        /// What was expected and what was found.
        detail: String,
    },
    /// An id in one table failed to resolve against another table or catalogue.
    #[error("cross-reference mismatch ({context}): {detail}")]
    CrossReferenceMismatch {
        /// Table or catalogue the id failed to resolve against.
        context: &'static str,
        /// The offending id and its owner.
        detail: String,
    },
    /// Card ids drifted away from the row order of the card table.
    #[error("card index drift (list length:{got}, row id:{expected})")]
    IndexDrift {
        /// Row id of the card.
        expected: u32,
        /// Catalogue length after padding.
        got: usize,
    },
    /// A required table yielded no usable rows.
    #[error("{table} has no usable rows")]
    EmptyDataset {
        /// Table that came back empty.
        table: &'static str,
    },
    /// Rows of a table could not be decoded into their typed form.
    #[error("failed to decode {table}: {source}")]
    Decode {
        /// Table holding the malformed row.
        table: &'static str,
        /// Underlying decode error.
        #[source]
        source: serde_json::Error,
    },
    /// The host failed while handing out a table.
    #[error(transparent)]
    Host(#[from] HostError),
}

impl DataError {
    pub(crate) fn schema(table: &'static str, detail: impl Into<String>) -> Self {
        Self::SchemaMismatch {
            table,
            detail: detail.into(),
        }
    }

    pub(crate) fn cross_ref(context: &'static str, detail: impl Into<String>) -> Self {
        Self::CrossReferenceMismatch {
            context,
            detail: detail.into(),
        }
    }
}

/// Non-fatal problem found while building; recorded and logged, never blocks a load.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DataWarning {
    /// A reward item exists but its additional data does not name a known card.
    #[error(
        "failed to parse npc reward data (npc:{triad_id}, rewardId:{item_id}, card:{additional_data})"
    )]
    UnresolvedReward {
        /// Opponent row offering the reward.
        triad_id: u32,
        /// Reward item row.
        item_id: u32,
        /// Card id the item claims to grant.
        additional_data: u32,
    },
    /// No achievement/order entry for an opponent.
    #[error("failed to find achievement id for triadId:{triad_id}")]
    MissingAchievement {
        /// Opponent row without an entry.
        triad_id: u32,
    },
    /// Reverse reward link pointed outside the finalized opponent list.
    #[error("failed to match npc reward data (npc:{opponent_index}, key:{enpc_id})")]
    RewardLinkOutOfRange {
        /// Index the link pointed at.
        opponent_index: usize,
        /// NPC the link was recorded for.
        enpc_id: u32,
    },
}

/// Result alias used by the pipeline stages.
pub type DataResult<T> = Result<T, DataError>;
