// ----- Modules ----- //

mod sys_bot;
mod sys_core;
mod sys_resource;

// ----- Imports ----- //

use std::{process, sync::Arc};

use crate::{
    sys_bot::{Catalog, OpenAiClient, Responder},
    sys_core::{config_path, init_logging, load_config, AppConfig, LogFormat, Server},
};

// ----- Lifecycle ----- //

fn main() {
    // A missing .env is fine; the variables may come from the real environment
    let _ = dotenv::dotenv();

    let config = match load_config(&config_path()) {
        Ok(config) => config,
        Err(err) => {
            init_logging(LogFormat::default());
            log::error!("Configuration error: {}", err);
            process::exit(1);
        }
    };
    init_logging(config.log_format);

    let catalog = match load_catalog(&config) {
        Ok(catalog) => catalog,
        Err(err) => {
            log::error!("Catalog error: {}", err);
            process::exit(1);
        }
    };
    log::info!(
        "Loaded catalog: {} courses, {} FAQ topics, {} phone-ask keywords",
        catalog.course_count(),
        catalog.faq_count(),
        catalog.phone_keyword_count()
    );

    let generator = Arc::new(OpenAiClient::from_config(&config));
    let responder = Responder::new(Arc::new(catalog), generator);

    let server = Server::new(&config.address(), responder);
    if let Err(err) = server.run() {
        log::error!("Server error on {}: {}", config.address(), err);
        process::exit(1);
    }
}

fn load_catalog(config: &AppConfig) -> Result<Catalog, sys_bot::bot_errors::CatalogError> {
    match &config.catalog_path {
        Some(path) => Catalog::from_path(path),
        None => Catalog::builtin(),
    }
}
