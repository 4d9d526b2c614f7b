mod reading_time_routes;
mod settings_routes;

pub use reading_time_routes::reading_time_routes;
pub use settings_routes::settings_routes;
