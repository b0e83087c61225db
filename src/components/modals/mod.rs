pub mod command_palette;
pub mod error;
pub mod help;
pub mod helpers;
pub mod manager;
pub mod task_input;

pub use manager::ModalManager;
