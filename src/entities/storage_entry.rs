//! Storage entry entity - the key-value table backing the record store.
//!
//! Every collection (and the session record) is persisted as a JSON document
//! under its own versioned string key, mirroring a browser's local storage.

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// Storage database model - one JSON document per versioned key
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "storage")]
pub struct Model {
    /// Versioned storage key (e.g. `"wg_itineraries_v12"`)
    #[sea_orm(primary_key, auto_increment = false)]
    pub key: String,
    /// JSON-serialized payload for the key
    #[sea_orm(column_type = "Text")]
    pub value: String,
    /// When this entry was last written
    pub updated_at: DateTime,
}

/// Storage entries have no relationships with other entities
#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
