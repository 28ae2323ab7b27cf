//! The loaded classification: every lookup structure, built once.

use anyhow::Result;
use std::sync::Arc;

use soc_index_core::{Hierarchy, IndexRow, MetaIndex, RephraseLookup, StructureRow, TitleLookup};

use crate::config::Config;
use crate::data_access;

/// Immutable bundle of the structures the CLI commands query.
#[derive(Debug)]
pub struct Catalog {
    pub meta: Arc<MetaIndex>,
    pub hierarchy: Hierarchy,
    pub titles: TitleLookup,
    pub rephrase: RephraseLookup,
}

impl Catalog {
    pub fn load(config: &Config) -> Result<Self> {
        let structure = data_access::load_structure(&config.data.structure)?;
        let index = data_access::load_index(&config.data.index)?;
        Ok(Self::from_rows(&structure, &index))
    }

    pub fn from_rows(structure: &[StructureRow], index: &[IndexRow]) -> Self {
        let meta = Arc::new(MetaIndex::build(structure));
        let hierarchy = Hierarchy::from_meta(&meta, index);
        let titles = TitleLookup::build(index, Arc::clone(&meta));
        let rephrase = RephraseLookup::from_hierarchy(&hierarchy);

        tracing::info!(
            groups = meta.len(),
            skipped_rows = meta.skipped(),
            nodes = hierarchy.len(),
            titles = titles.len(),
            leaves = rephrase.len(),
            "catalog loaded"
        );

        Catalog {
            meta,
            hierarchy,
            titles,
            rephrase,
        }
    }
}
