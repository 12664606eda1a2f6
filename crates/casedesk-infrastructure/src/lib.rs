//! Infrastructure for CaseDesk: fixture-backed repositories, preference
//! stores, file storage, paths and configuration loading.

pub mod config_service;
pub mod file_preference_store;
pub mod fixtures;
pub mod memory;
pub mod memory_preference_store;
pub mod paths;
pub mod search;
pub mod storage;

pub use config_service::ConfigService;
pub use file_preference_store::FilePreferenceStore;
pub use memory_preference_store::MemoryPreferenceStore;
pub use paths::DeskPaths;
pub use search::RegistrySearchService;
