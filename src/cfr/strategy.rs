use crate::cfr::action::Action;
use crate::cfr::infoset::InfoSet;
use crate::Probability;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// one infoset's exported strategy: the time-averaged action distribution
/// plus the action list it was computed over (needed to reconstruct a
/// uniform fallback if the probabilities round to all-zero).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Entry {
    pub strategy: HashMap<String, Probability>,
    pub actions: Vec<String>,
}

/// the on-disk artifact shape. two historical formats exist: the current
/// `{key: {strategy, actions}}` map, and a legacy form whose values expose
/// an equivalent "average strategy" query instead of a plain map. the reader
/// normalizes both into `Entry` so callers never see the distinction.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Artifact {
    Modern(HashMap<String, Entry>),
    Legacy(HashMap<String, LegacyEntry>),
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LegacyEntry {
    pub average_strategy: HashMap<String, Probability>,
    #[serde(default)]
    pub actions: Vec<String>,
}

/// a loaded, read-only strategy table: infoset key to action distribution.
#[derive(Debug, Clone, Default)]
pub struct Strategy {
    entries: HashMap<String, Entry>,
}

impl Strategy {
    pub fn from_infosets(infosets: &HashMap<String, InfoSet>) -> Self {
        let entries = infosets
            .iter()
            .map(|(key, info)| {
                let avg = info.average_strategy();
                let strategy = avg.iter().map(|(a, &p)| (a.token().to_string(), p)).collect();
                let actions = info.actions().iter().map(|a| a.token().to_string()).collect();
                (key.clone(), Entry { strategy, actions })
            })
            .collect();
        Self { entries }
    }

    pub fn from_artifact(artifact: Artifact) -> Self {
        let entries = match artifact {
            Artifact::Modern(map) => map,
            Artifact::Legacy(map) => map
                .into_iter()
                .map(|(key, legacy)| {
                    let actions = if legacy.actions.is_empty() {
                        legacy.average_strategy.keys().cloned().collect()
                    } else {
                        legacy.actions
                    };
                    (key, Entry { strategy: legacy.average_strategy, actions })
                })
                .collect(),
        };
        Self { entries }
    }

    pub fn get(&self, key: &str) -> Option<&Entry> {
        self.entries.get(key)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// the modern on-disk shape: `key -> { strategy, actions }`.
    pub fn entries_for_export(&self) -> &HashMap<String, Entry> {
        &self.entries
    }

    #[cfg(test)]
    pub fn distributions(&self) -> impl Iterator<Item = &HashMap<String, Probability>> {
        self.entries.values().map(|e| &e.strategy)
    }

    /// sample an abstract action from a stored distribution, falling back to
    /// the listed actions uniformly if the distribution is degenerate.
    pub fn sample(&self, key: &str, roll: Probability) -> Option<Action> {
        let entry = self.get(key)?;
        let total: Probability = entry.strategy.values().sum();
        if total <= 0.0 {
            let n = entry.actions.len();
            if n == 0 {
                return None;
            }
            let idx = ((roll * n as Probability) as usize).min(n - 1);
            return Action::parse(&entry.actions[idx]);
        }
        let mut acc = 0.0;
        let target = roll * total;
        for action_str in &entry.actions {
            if let Some(&p) = entry.strategy.get(action_str) {
                acc += p;
                if acc >= target {
                    return Action::parse(action_str);
                }
            }
        }
        entry.actions.last().and_then(|a| Action::parse(a))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn legacy_artifact_normalizes_into_modern_entries() {
        let mut avg = HashMap::new();
        avg.insert("k".to_string(), 0.7);
        avg.insert("bMIN".to_string(), 0.3);
        let mut map = HashMap::new();
        map.insert("42".to_string(), LegacyEntry { average_strategy: avg, actions: vec!["k".into(), "bMIN".into()] });

        let strategy = Strategy::from_artifact(Artifact::Legacy(map));
        let entry = strategy.get("42").unwrap();
        assert_eq!(entry.actions.len(), 2);
        assert!((entry.strategy["k"] - 0.7).abs() < 1e-9);
    }

    #[test]
    fn sample_respects_degenerate_distribution() {
        let mut strategy = HashMap::new();
        strategy.insert("k".to_string(), 0.0);
        strategy.insert("c".to_string(), 0.0);
        let mut entries = HashMap::new();
        entries.insert("7".to_string(), Entry { strategy, actions: vec!["k".into(), "c".into()] });
        let table = Strategy { entries };
        assert!(table.sample("7", 0.01).is_some());
    }
}
