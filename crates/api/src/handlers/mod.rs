mod live;
mod models;
mod state;
mod status;

pub use live::{get_live_status, refresh_live_status};
pub use models::AppState;
pub use status::get_status;
