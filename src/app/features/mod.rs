pub mod checklist;
pub mod dashboard;
pub mod data;
pub mod navigation;
pub mod palette;
pub mod ui;
