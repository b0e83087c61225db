pub mod campaign_hub;
pub mod footer;
pub mod forge;
pub mod header;
pub mod modals;
pub mod page;
pub mod panel;
pub mod prep_checklist;
pub mod session_countdown;
pub mod world_pulse;
