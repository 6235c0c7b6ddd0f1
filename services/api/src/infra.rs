use metrics_exporter_prometheus::PrometheusHandle;
use radgrade::classification::ClassificationService;
use radgrade::config::AppConfig;
use radgrade::error::AppError;
use radgrade::telemetry;
use std::sync::atomic::AtomicBool;
use std::sync::Arc;

#[derive(Clone)]
pub(crate) struct AppState {
    pub(crate) readiness: Arc<AtomicBool>,
    pub(crate) metrics: Arc<PrometheusHandle>,
}

/// Load configuration, install logging, and build the service over the
/// built-in catalog. Used by every command except `serve`.
pub(crate) fn load_service() -> Result<(AppConfig, ClassificationService), AppError> {
    let config = AppConfig::load()?;
    telemetry::init(&config.telemetry)?;
    let service = ClassificationService::standard(config.reporting.clone())?;
    Ok((config, service))
}

/// Parse a `name=value` pair given on the command line.
pub(crate) fn parse_assignment(raw: &str) -> Result<(String, String), String> {
    match raw.split_once('=') {
        Some((name, value)) if !name.trim().is_empty() => {
            Ok((name.trim().to_string(), value.trim().to_string()))
        }
        _ => Err(format!("expected name=value, got '{raw}'")),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn loading_the_service_installs_logging() {
        let (_, service) = load_service().expect("service loads");
        assert_eq!(service.catalog().len(), 46);
        assert!(tracing::dispatcher::has_been_set());
    }

    #[test]
    fn assignments_split_on_the_first_equals_sign() {
        assert_eq!(
            parse_assignment(" features = Washout; Capsule Appearance "),
            Ok((
                "features".to_string(),
                "Washout; Capsule Appearance".to_string()
            ))
        );
        assert_eq!(
            parse_assignment("note=a=b"),
            Ok(("note".to_string(), "a=b".to_string()))
        );
    }

    #[test]
    fn assignments_need_a_name() {
        assert!(parse_assignment("=3").is_err());
        assert!(parse_assignment("three").is_err());
    }
}
