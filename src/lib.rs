//! # SOC Index
//!
//! Command-line access to the SOC 2020 occupational classification. Loads
//! the structure table and the coding index from JSON, builds the lookup
//! structures from [`soc_index_core`], and answers queries about job titles,
//! codes, and group descriptions.
//!
//! ## Architecture
//!
//! ```text
//! ┌──────────────┐   ┌──────────────┐   ┌─────────────────┐
//! │ soc.toml     │──▶│ data_access  │──▶│ Catalog         │
//! │ JSON tables  │   │ clean index  │   │ meta/tree/title │
//! └──────────────┘   └──────────────┘   └────────┬────────┘
//!                                                │
//!                                                ▼
//!                                          ┌──────────┐
//!                                          │   CLI    │
//!                                          │  (soc)   │
//!                                          └──────────┘
//! ```
//!
//! ## Quick Start
//!
//! ```bash
//! soc sources                         # check the data tables
//! soc lookup "zoologist"              # exact title lookup
//! soc lookup "biolog" --similarity    # substring matches too
//! soc node 2112                       # inspect a group
//! soc rephrase 2112                   # aggregated leaf description
//! soc annotate --input result.json    # annotate a classifier payload
//! ```
//!
//! ## Modules
//!
//! | Module | Purpose |
//! |--------|---------|
//! | [`config`] | TOML configuration parsing and file location |
//! | [`data_access`] | Loading and cleaning the source tables |
//! | [`catalog`] | The built lookup structures |
//! | [`sources`] | Data-table status |
//! | [`lookup`] | Title and major-group lookup commands |
//! | [`node`] | Hierarchy inspection commands |
//! | [`rephrase`] | Leaf descriptions and payload annotation commands |

pub mod catalog;
pub mod config;
pub mod data_access;
pub mod lookup;
pub mod node;
pub mod rephrase;
pub mod sources;
