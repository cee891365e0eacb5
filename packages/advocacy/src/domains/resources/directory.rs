use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use super::models::{
    canonical_state_name, KeyStatistics, LegalAidContact, StateResource, SupportGroup, US_STATES,
};

const BUILTIN_RESOURCES: &str = include_str!("../../../data/state_resources.json");

/// Which part of a state's resources to show.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ResourceFilter {
    #[default]
    All,
    Legal,
    Support,
    Statistics,
}

impl std::fmt::Display for ResourceFilter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ResourceFilter::All => write!(f, "all"),
            ResourceFilter::Legal => write!(f, "legal"),
            ResourceFilter::Support => write!(f, "support"),
            ResourceFilter::Statistics => write!(f, "statistics"),
        }
    }
}

impl std::str::FromStr for ResourceFilter {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_ascii_lowercase().as_str() {
            "all" => Ok(ResourceFilter::All),
            "legal" => Ok(ResourceFilter::Legal),
            "support" => Ok(ResourceFilter::Support),
            "statistics" => Ok(ResourceFilter::Statistics),
            _ => Err(anyhow::anyhow!("Invalid resource filter: {}", s)),
        }
    }
}

/// A state's resources narrowed by a `ResourceFilter`.
///
/// Legal covers the custody law summary, legal aid and the support
/// calculator; Support covers support groups; Statistics covers key figures.
/// Important notes only appear under All.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ResourceSections<'a> {
    pub state: &'a str,
    pub custody_laws: Option<&'a str>,
    pub support_calculator: Option<&'a str>,
    pub legal_aid: &'a [LegalAidContact],
    pub support_groups: &'a [SupportGroup],
    pub key_statistics: Option<&'a KeyStatistics>,
    pub important_notes: &'a [String],
}

#[derive(Debug, Clone)]
pub struct StateDirectory {
    resources: Vec<StateResource>,
}

impl StateDirectory {
    pub fn new(resources: Vec<StateResource>) -> Self {
        Self { resources }
    }

    /// Directory backed by the bundled resource data.
    pub fn builtin() -> Result<Self> {
        let resources: Vec<StateResource> = serde_json::from_str(BUILTIN_RESOURCES)
            .context("Failed to parse bundled state resources")?;
        Ok(Self::new(resources))
    }

    /// State names containing `term`, case-insensitive. Blank matches all 50.
    pub fn search(&self, term: &str) -> Vec<&'static str> {
        let needle = term.trim().to_lowercase();
        US_STATES
            .iter()
            .map(|(name, _)| *name)
            .filter(|name| name.to_lowercase().contains(&needle))
            .collect()
    }

    /// Detailed resources for a state, by name or abbreviation.
    ///
    /// Returns None for unknown states and for states without detailed data yet.
    pub fn lookup(&self, name_or_abbreviation: &str) -> Option<&StateResource> {
        let name = canonical_state_name(name_or_abbreviation)?;
        self.resources.iter().find(|r| r.state == name)
    }

    pub fn has_details(&self, name_or_abbreviation: &str) -> bool {
        self.lookup(name_or_abbreviation).is_some()
    }

    pub fn covered_states(&self) -> impl Iterator<Item = &str> {
        self.resources.iter().map(|r| r.state.as_str())
    }

    pub fn sections(
        &self,
        name_or_abbreviation: &str,
        filter: ResourceFilter,
    ) -> Option<ResourceSections<'_>> {
        let resource = self.lookup(name_or_abbreviation)?;
        let legal = matches!(filter, ResourceFilter::All | ResourceFilter::Legal);
        let support = matches!(filter, ResourceFilter::All | ResourceFilter::Support);
        let statistics = matches!(filter, ResourceFilter::All | ResourceFilter::Statistics);

        Some(ResourceSections {
            state: &resource.state,
            custody_laws: legal.then_some(resource.custody_laws.as_str()),
            support_calculator: legal.then_some(resource.support_calculator.as_str()),
            legal_aid: if legal { resource.legal_aid.as_slice() } else { &[] },
            support_groups: if support { resource.support_groups.as_slice() } else { &[] },
            key_statistics: statistics.then_some(&resource.key_statistics),
            important_notes: if filter == ResourceFilter::All {
                resource.important_notes.as_slice()
            } else {
                &[]
            },
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn directory() -> StateDirectory {
        StateDirectory::builtin().unwrap()
    }

    #[test]
    fn test_bundled_data_covers_four_states() {
        let dir = directory();
        let covered: Vec<_> = dir.covered_states().collect();
        assert_eq!(covered, vec!["California", "Texas", "Florida", "New York"]);
    }

    #[test]
    fn test_search_is_case_insensitive() {
        let dir = directory();
        assert_eq!(dir.search("NEW"), vec!["New Hampshire", "New Jersey", "New Mexico", "New York"]);
        assert_eq!(dir.search("").len(), 50);
        assert!(dir.search("atlantis").is_empty());
    }

    #[test]
    fn test_lookup_by_name_or_abbreviation() {
        let dir = directory();
        assert_eq!(dir.lookup("tx").unwrap().state, "Texas");
        assert_eq!(dir.lookup(" new york ").unwrap().abbreviation, "NY");
        assert!(dir.lookup("Ohio").is_none());
        assert!(dir.lookup("Atlantis").is_none());
    }

    #[test]
    fn test_sections_follow_filter() {
        let dir = directory();

        let legal = dir.sections("CA", ResourceFilter::Legal).unwrap();
        assert_eq!(legal.legal_aid.len(), 2);
        assert!(legal.custody_laws.is_some());
        assert!(legal.support_groups.is_empty());
        assert!(legal.key_statistics.is_none());

        let stats = dir.sections("Florida", ResourceFilter::Statistics).unwrap();
        assert_eq!(stats.key_statistics.unwrap().custody_rate, "25%");
        assert!(stats.legal_aid.is_empty());

        let all = dir.sections("NY", ResourceFilter::All).unwrap();
        assert_eq!(all.support_groups.len(), 2);
        assert_eq!(all.important_notes.len(), 3);
    }

    #[test]
    fn test_filter_parses() {
        assert_eq!("Support".parse::<ResourceFilter>().unwrap(), ResourceFilter::Support);
        assert!("maps".parse::<ResourceFilter>().is_err());
    }
}
