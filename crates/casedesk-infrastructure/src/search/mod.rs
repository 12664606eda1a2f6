//! Search service implementations.

pub mod registry_search;

pub use registry_search::RegistrySearchService;
