//! Configuration and path management for pocketbudget

pub mod paths;

pub use paths::TrackerPaths;
