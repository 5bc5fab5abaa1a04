//! GearSource - Stats from equipped items

use crate::source::StatSource;
use crate::stat_block::StatAccumulator;
use crate::types::StatKind;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::HashMap;

/// Stat bonus map of a single equipped item, as stored by the backend.
///
/// Values are arbitrary JSON; only numbers under a recognised stat name
/// contribute. Everything else is ignored.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct StatBonuses(pub HashMap<String, Value>);

impl StatBonuses {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style insert
    pub fn with(mut self, name: impl Into<String>, value: impl Into<Value>) -> Self {
        self.0.insert(name.into(), value.into());
        self
    }

    /// Numeric bonuses for recognised stats
    pub fn numeric(&self) -> impl Iterator<Item = (StatKind, f64)> + '_ {
        self.0.iter().filter_map(|(name, value)| {
            let Some(kind) = StatKind::from_name(name) else {
                tracing::debug!("ignoring bonus for unknown stat {:?}", name);
                return None;
            };
            match value.as_f64() {
                Some(amount) => Some((kind, amount)),
                None => {
                    tracing::debug!("ignoring non-numeric {} bonus: {}", name, value);
                    None
                }
            }
        })
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl From<HashMap<String, Value>> for StatBonuses {
    fn from(map: HashMap<String, Value>) -> Self {
        StatBonuses(map)
    }
}

/// Stats from an equipped item
pub struct GearSource {
    /// Identifier of the equipped item
    pub item_id: String,
    pub bonuses: StatBonuses,
}

impl GearSource {
    /// Create a new gear source
    pub fn new(item_id: impl Into<String>, bonuses: StatBonuses) -> Self {
        GearSource {
            item_id: item_id.into(),
            bonuses,
        }
    }
}

impl StatSource for GearSource {
    fn id(&self) -> &str {
        &self.item_id
    }

    fn priority(&self) -> i32 {
        0 // Gear applies at default priority
    }

    fn apply(&self, stats: &mut StatAccumulator) {
        for (kind, amount) in self.bonuses.numeric() {
            stats.apply_stat(kind, amount);
        }
    }
}
