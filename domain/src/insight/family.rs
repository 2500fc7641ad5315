//! Per-family commentary

use crate::ranking::RankingResult;
use std::collections::BTreeMap;

/// `family → commentary` for every family present in a ranking.
///
/// Each family is described once, listing its members in ranked order, so
/// insight lines can refer to a family without restating it.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct FamilyNotes {
    notes: BTreeMap<String, String>,
}

impl FamilyNotes {
    pub fn from_ranking(ranking: &RankingResult<'_>) -> Self {
        let mut members: BTreeMap<&str, Vec<&str>> = BTreeMap::new();
        for candidate in ranking {
            members
                .entry(candidate.model.family.as_str())
                .or_default()
                .push(candidate.model.id.as_str());
        }

        let notes = members
            .into_iter()
            .map(|(family, ids)| {
                let note = match ids.as_slice() {
                    [only] => format!("{} is the only eligible {} model", only, family),
                    [first, rest @ ..] => {
                        format!("{} leads the {} family over {}", first, family, rest.join(", "))
                    }
                    [] => format!("no eligible {} models", family),
                };
                (family.to_string(), note)
            })
            .collect();

        Self { notes }
    }

    pub fn get(&self, family: &str) -> Option<&str> {
        self.notes.get(family).map(String::as_str)
    }

    /// Families in alphabetical order with their commentary
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.notes.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    pub fn len(&self) -> usize {
        self.notes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.notes.is_empty()
    }
}
