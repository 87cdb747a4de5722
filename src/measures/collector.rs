use std::collections::HashMap;

use tracing::{debug, warn};

use super::ScmMeasures;
use crate::error::AssignError;
use crate::host::{Component, MeasureProvider, Metric, path_part};

/// Fetches and caches the SCM measures of analyzed components.
///
/// A metric with no payload, or an empty one, counts as missing; a
/// component needs all three metrics to yield usable measures.
pub struct MeasuresCollector<'a> {
    provider: &'a dyn MeasureProvider,
    cache: HashMap<String, ScmMeasures>,
}

impl<'a> MeasuresCollector<'a> {
    pub fn new(provider: &'a dyn MeasureProvider) -> MeasuresCollector<'a> {
        MeasuresCollector {
            provider,
            cache: HashMap::new(),
        }
    }

    /// Eagerly collects measures for every file component. A component
    /// without usable data is reported and skipped, not failed.
    pub fn collect_files(&mut self) {
        let provider = self.provider;
        for component in provider.components() {
            if !component.is_file() {
                continue;
            }
            match self.fetch(&component.key) {
                Ok(measures) => {
                    debug!("collected SCM measures for [{}]", component.key);
                    self.cache.insert(component.key.clone(), measures);
                }
                Err(err) => warn!("measures not collected for [{}]: {err}", component.key),
            }
        }
        debug!("collected measures for {} components", self.cache.len());
    }

    /// The measures of one component, fetched on the first request and
    /// served from the cache afterwards.
    pub fn measures_for(&mut self, component_key: &str) -> Result<&ScmMeasures, AssignError> {
        if self.cache.contains_key(component_key) {
            return Ok(&self.cache[component_key]);
        }
        let component = self.resolve(component_key)?;
        let measures = self.fetch(&component.key)?;
        debug!("collected SCM measures for [{}]", component.key);
        Ok(self
            .cache
            .entry(component_key.to_string())
            .or_insert(measures))
    }

    /// Number of components with collected measures.
    pub fn collected(&self) -> usize {
        self.cache.len()
    }

    fn resolve(&self, key: &str) -> Result<&'a Component, AssignError> {
        let provider = self.provider;
        if let Some(component) = provider.find_component(key) {
            return Ok(component);
        }
        // A branch or module prefix can hide a file behind a different
        // project key; fall back to matching on the path segment.
        if let Some(path) = path_part(key) {
            if let Some(component) = provider
                .components()
                .iter()
                .find(|c| c.is_file() && path_part(&c.key) == Some(path))
            {
                debug!("resolved [{key}] to [{}] by path", component.key);
                return Ok(component);
            }
        }
        Err(AssignError::ResourceNotFound {
            component: key.to_string(),
        })
    }

    fn fetch(&self, component_key: &str) -> Result<ScmMeasures, AssignError> {
        let authors = self.metric_data(component_key, Metric::AuthorsByLine)?;
        let last_commits = self.metric_data(component_key, Metric::LastCommitDatetimesByLine)?;
        let revisions = self.metric_data(component_key, Metric::RevisionsByLine)?;
        Ok(ScmMeasures::new(component_key, authors, last_commits, revisions))
    }

    fn metric_data(&self, component_key: &str, metric: Metric) -> Result<&'a str, AssignError> {
        let provider = self.provider;
        provider
            .measure_data(component_key, metric)
            .filter(|data| !data.is_empty())
            .ok_or_else(|| AssignError::MissingScmMeasureData {
                component: component_key.to_string(),
            })
    }
}

#[cfg(test)]
#[path = "collector_test.rs"]
mod tests;
