use std::io::Write;
use std::sync::Once;

use chrono::Utc;
use serde::Deserialize;

static INIT: Once = Once::new();

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    #[default]
    Text,
    Json,
}

/// Installs the global logger on first call; later calls are no-ops.
/// The filter comes from `RUST_LOG` and defaults to `info`.
pub fn init_logging(format: LogFormat) {
    INIT.call_once(|| {
        let mut builder =
            env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"));

        builder.format(move |buf, record| {
            let ts = Utc::now().to_rfc3339_opts(chrono::SecondsFormat::Millis, true);
            match format {
                LogFormat::Json => {
                    let obj = serde_json::json!({
                        "ts": ts,
                        "level": record.level().to_string(),
                        "target": record.target(),
                        "msg": record.args().to_string(),
                    });
                    writeln!(buf, "{}", obj)
                }
                LogFormat::Text => writeln!(
                    buf,
                    "{} {} {} {}",
                    ts,
                    record.level(),
                    record.target(),
                    record.args()
                ),
            }
        });

        builder.target(env_logger::Target::Stdout);
        let _ = builder.try_init();
    });
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn log_format_parses_lowercase() {
        let format: LogFormat = serde_json::from_str(r#""json""#).unwrap();
        assert_eq!(format, LogFormat::Json);
        assert!(serde_json::from_str::<LogFormat>(r#""xml""#).is_err());
    }

    #[test]
    fn init_is_idempotent() {
        init_logging(LogFormat::Text);
        init_logging(LogFormat::Json);
        log::info!("logger initialized twice without panicking");
    }
}
