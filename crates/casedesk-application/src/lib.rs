//! Application layer for CaseDesk.
//!
//! Use cases that coordinate domain repositories with the preference
//! store. Each mutation persists before it returns.

pub mod case_usecase;
pub mod desk;
pub mod inbox_usecase;
pub mod overview_usecase;
pub mod playbook_usecase;
pub mod report_usecase;
pub mod search_usecase;
pub mod settings_usecase;

pub use case_usecase::{CaseDetail, CaseUseCase};
pub use desk::{Desk, Registries};
pub use inbox_usecase::InboxUseCase;
pub use overview_usecase::OverviewUseCase;
pub use playbook_usecase::{PlaybookOutcome, PlaybookUseCase};
pub use report_usecase::ReportUseCase;
pub use search_usecase::SearchUseCase;
pub use settings_usecase::SettingsUseCase;
