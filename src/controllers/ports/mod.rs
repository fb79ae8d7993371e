pub mod file_presenter;
pub mod report_presenter;
