pub mod mode;
pub mod models;
pub mod proximity;
pub mod route;
pub mod source;
pub mod time;
