//! # SOC Index Core
//!
//! In-memory model of the SOC 2020 occupational classification: code
//! validation, the group hierarchy, and lookups from job titles and codes to
//! classification metadata.
//!
//! This crate does no filesystem I/O. Callers supply the two source tables
//! as typed rows ([`StructureRow`], [`IndexRow`]); everything built from them
//! is immutable and safe to share across threads.
//!
//! | Module | Purpose |
//! |--------|---------|
//! | [`code`] | Code validation and group levels |
//! | [`models`] | Structure- and index-table rows |
//! | [`meta`] | Per-group metadata records |
//! | [`hierarchy`] | The classification tree |
//! | [`lookup`] | Job-title lookup |
//! | [`rephrase`] | Leaf descriptions and payload annotation |

pub mod code;
pub mod hierarchy;
pub mod lookup;
pub mod meta;
pub mod models;
pub mod rephrase;

#[cfg(test)]
mod test_fixtures;

pub use code::{CodeError, GroupLevel, SocCode};
pub use hierarchy::{Hierarchy, HierarchyError, HierarchyNode, LeafText};
pub use lookup::{
    LookupResult, MajorGroupMeta, MajorGroupResult, PotentialMatches, SocCandidate, TitleLookup,
};
pub use meta::{MetaIndex, MetaRecord, RowError};
pub use models::{IndexRow, StructureRow};
pub use rephrase::{ClassificationPayload, PayloadError, RephraseLookup, RephraseResult};
