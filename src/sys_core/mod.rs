// ----- Public Modules ----- //

pub mod core_config;
pub mod core_logging;
pub mod core_responses;
pub mod core_routing;
pub mod core_server;

// ----- Exports ----- //

pub use core_server::Server;
pub use core_routing::HttpResponse;

pub use core_config::{config_path, load_config, AppConfig};
pub use core_logging::{init_logging, LogFormat};
