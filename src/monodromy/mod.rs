// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Monodromy triples of Belyi maps and the search that enumerates them.

pub mod search;
pub mod triple;

pub use search::{search, search_with, SearchOptions, SearchReport, SearchStrategy};
pub use triple::{is_monodromy, MonodromyTriple, Passport};
