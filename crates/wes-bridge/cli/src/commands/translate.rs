//! `translate`: WES state change → workflow run update detail

use crate::config::{RegistryConfig, RegistryKind};
use crate::output::{read_json_input, OutputOptions};
use anyhow::{bail, Context, Result};
use std::sync::Arc;
use tracing::info;
use wes_bridge_engine::{handle_state_change_event, StateChangeTranslator};
use wes_bridge_registry::{
    HttpRegistryConfig, HttpWorkflowRegistry, InMemoryWorkflowRegistry, WorkflowRegistry,
};
use wes_bridge_types::events::WORKFLOW_RUN_UPDATE_DETAIL_TYPE;

/// Registry selection flags given on the command line
#[derive(Debug, Default)]
pub struct RegistryOverrides {
    pub registry_url: Option<String>,
    pub fixture: Option<String>,
}

pub async fn execute(
    input: Option<&str>,
    overrides: RegistryOverrides,
    registry: &RegistryConfig,
    output: &OutputOptions,
) -> Result<()> {
    let event = read_json_input(input)?;
    let registry = build_registry(overrides, registry)?;
    let translator = StateChangeTranslator::new(registry);

    let detail = handle_state_change_event(event, &translator).await?;
    println!("{}", output.render(WORKFLOW_RUN_UPDATE_DETAIL_TYPE, detail)?);
    Ok(())
}

/// Command-line flags win over the configured backend
fn build_registry(
    overrides: RegistryOverrides,
    config: &RegistryConfig,
) -> Result<Arc<dyn WorkflowRegistry>> {
    if let Some(path) = overrides.fixture {
        return fixture_registry(&path);
    }
    if let Some(url) = overrides.registry_url {
        return http_registry(url, config);
    }

    match config.kind {
        RegistryKind::Fixture => match &config.fixture_path {
            Some(path) => fixture_registry(path),
            None => bail!("registry.kind is \"fixture\" but registry.fixture_path is not set"),
        },
        RegistryKind::Http => match &config.base_url {
            Some(url) => http_registry(url.clone(), config),
            None => bail!("no workflow registry configured; pass --registry-url or --fixture"),
        },
    }
}

fn fixture_registry(path: &str) -> Result<Arc<dyn WorkflowRegistry>> {
    let raw = std::fs::read_to_string(path)
        .with_context(|| format!("cannot read registry fixture {}", path))?;
    let registry = InMemoryWorkflowRegistry::from_fixture_json(&raw)
        .with_context(|| format!("invalid registry fixture {}", path))?;
    info!(path = %path, runs = registry.run_count(), "Loaded registry fixture");
    Ok(Arc::new(registry))
}

fn http_registry(url: String, config: &RegistryConfig) -> Result<Arc<dyn WorkflowRegistry>> {
    let mut http = HttpRegistryConfig::new(url).with_timeout_secs(config.timeout_secs);
    if let Some(token) = &config.auth_token {
        http = http.with_auth_token(token.clone());
    }
    let registry = HttpWorkflowRegistry::new(http)?;
    info!(base_url = %registry.base_url(), "Using workflow manager registry");
    Ok(Arc::new(registry))
}
