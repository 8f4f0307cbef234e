//! Search and selection utilities for contacts.
//!
//! This module provides field-scoped partial matching and the ordinal
//! selection step used when a search returns several contacts.

pub mod searcher;

pub use searcher::{
    find_matches, find_positions, select_from_list, select_index, Chooser, SearchField,
};
