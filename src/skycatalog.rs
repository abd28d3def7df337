//! Name-indexed collection of constellations.
//!
//! `SkyCatalog` keeps constellations in the order the service delivered them
//! and indexes them by name for lookups driven by selection and
//! cross-references. Every content change bumps [`SkyCatalog::version`], so
//! derived geometry can be memoized per `(name, version)`.

use std::collections::HashMap;

use tracing::{info, warn};

use crate::Constellation;

#[derive(Debug, Clone, Default)]
pub struct SkyCatalog {
    constellations: Vec<Constellation>,
    index: HashMap<String, usize>,
    version: u64,
}

impl SkyCatalog {
    /// Build a catalog from decoded constellations.
    ///
    /// When a name occurs more than once, the first occurrence is kept.
    pub fn new(constellations: Vec<Constellation>) -> Self {
        let mut catalog = Self::default();
        catalog.fill(constellations);
        catalog
    }

    /// Build a catalog from a saved `GET /api/constellations` response.
    pub fn load_from_file<P: AsRef<std::path::Path>>(path: P) -> anyhow::Result<Self> {
        let constellations = crate::catalogs::load_constellations_from_file(path)?;
        Ok(Self::new(constellations))
    }

    /// Swap in new contents and bump the version.
    pub fn replace(&mut self, constellations: Vec<Constellation>) {
        self.constellations.clear();
        self.index.clear();
        self.fill(constellations);
        self.version += 1;
    }

    fn fill(&mut self, constellations: Vec<Constellation>) {
        self.constellations.reserve(constellations.len());
        for c in constellations {
            if self.index.contains_key(&c.name) {
                warn!("Duplicate constellation \"{}\" ignored", c.name);
                continue;
            }
            self.index.insert(c.name.clone(), self.constellations.len());
            self.constellations.push(c);
        }
        info!("Sky catalog holds {} constellations", self.constellations.len());
    }

    /// Content version; increases on every [`replace`](Self::replace).
    pub fn version(&self) -> u64 {
        self.version
    }

    pub fn get(&self, name: &str) -> Option<&Constellation> {
        self.index.get(name).map(|&i| &self.constellations[i])
    }

    pub fn contains(&self, name: &str) -> bool {
        self.index.contains_key(name)
    }

    /// Constellation names in delivery order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.constellations.iter().map(|c| c.name.as_str())
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Constellation> {
        self.constellations.iter()
    }

    pub fn len(&self) -> usize {
        self.constellations.len()
    }

    pub fn is_empty(&self) -> bool {
        self.constellations.is_empty()
    }
}

impl<'a> IntoIterator for &'a SkyCatalog {
    type Item = &'a Constellation;
    type IntoIter = std::slice::Iter<'a, Constellation>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
