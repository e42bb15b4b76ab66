//! Region catalog entries

use serde::Deserialize;

/// A region code and its display title, e.g. `RU-MOS` / `Московская область`
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct Region {
    pub id: String,
    pub title: String,
}
