#![warn(clippy::all, missing_docs)]

//! Game data ingestion for the Triple Triad helper.
//!
//! This crate reads the host's read-only tables (rules, cards, opponents,
//! their placement and rewards), cross-checks them against each other and
//! assembles a reconciled [`GameData`] graph. Loads are retried on host
//! faults and published atomically through a [`GameDataStore`].

pub mod config;
pub mod coords;
pub mod error;
pub mod loader;
pub mod mapping;
pub mod model;
pub mod pipeline;
pub mod source;
pub mod store;

pub use config::LoaderConfig;
pub use error::{DataError, DataWarning, HostError};
pub use loader::{GameDataLoader, LoadReport};
pub use model::{
    Card, CardCatalogue, CardInfo, CardRarity, CardSides, CardType, GameData, MapLink, Opponent,
    OpponentInfo, Rule,
};
pub use pipeline::{build_game_data, BuildOutput};
pub use source::{SnapshotSource, TableSource};
pub use store::{GameDataStore, LoadState};
