//! Seed generator for the lockfile diff test suite.
//!
//! Enumerates every non-empty combination of the eight [`case::CaseLabel`]s and
//! writes them, one per line, to `output/combinations.txt`.
pub mod case;
pub mod combinations;
pub mod generator;
pub mod output;
pub mod paths;
