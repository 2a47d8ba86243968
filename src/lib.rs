pub mod app_state;
pub mod budget;
pub mod constants;
pub mod errors;
pub mod realtime;
pub mod settings;
pub mod tenders;
pub mod views;

pub use app_state::AppState;
pub use tenders::*;
