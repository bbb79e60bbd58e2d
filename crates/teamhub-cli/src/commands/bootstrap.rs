//! First-run setup: schema plus the default project.

use serde::Serialize;

use crate::output::{self, OutputFormat};
use teamhub_core::config::AppConfig;
use teamhub_core::error::AppError;
use teamhub_database::DatabasePool;

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct BootstrapReport {
    project_id: i64,
    project_name: String,
    storage: String,
}

/// Apply migrations, then build the hub (which ensures the default project).
pub async fn execute(config: AppConfig, format: OutputFormat) -> Result<(), AppError> {
    DatabasePool::connect_and_migrate(&config.database)
        .await?
        .close()
        .await;

    let hub = super::connect_hub(config).await?;
    let project = hub.default_project().await?;
    let report = BootstrapReport {
        project_id: project.id.into_inner(),
        project_name: project.name.clone(),
        storage: hub.content.provider_type().to_string(),
    };

    output::print_item(
        &report,
        &[
            ("Default project", format!("{} (#{})", project.name, project.id)),
            ("Storage", report.storage.clone()),
        ],
        format,
    );
    if format == OutputFormat::Table {
        output::print_success("TeamHub is ready.");
    }
    Ok(())
}
