//! Dashboard reporting commands: stats, contributions, activity, feed, team.

use clap::Args;
use serde::Serialize;
use tabled::Tabled;

use crate::output::{self, OutputFormat};
use teamhub_core::config::{ActivityWindow, AppConfig};
use teamhub_core::error::AppError;
use teamhub_core::types::id::ProjectId;

/// Arguments for the activity-by-day report
#[derive(Debug, Args)]
pub struct ActivityArgs {
    /// Window length in days, today inclusive (default from config)
    #[arg(short, long)]
    pub window_days: Option<u32>,
}

/// Arguments for the activity feed
#[derive(Debug, Args)]
pub struct FeedArgs {
    /// Number of entries (default from config)
    #[arg(short, long)]
    pub limit: Option<u32>,
}

/// Arguments for the team listing
#[derive(Debug, Args)]
pub struct TeamArgs {
    /// Project ID (defaults to the default project)
    #[arg(short, long)]
    pub project: Option<i64>,
}

#[derive(Debug, Serialize, Tabled)]
struct CountRow {
    name: String,
    value: i64,
}

#[derive(Debug, Serialize, Tabled)]
struct ContributionRow {
    user: String,
    files: i64,
    comments: i64,
    score: i64,
    #[tabled(rename = "share %")]
    percentage: i64,
}

#[derive(Debug, Serialize, Tabled)]
struct DayRow {
    date: String,
    files: i64,
    comments: i64,
}

#[derive(Debug, Serialize, Tabled)]
struct FeedRow {
    when: String,
    user: String,
    action: String,
    file: String,
}

#[derive(Debug, Serialize, Tabled)]
struct TeamRow {
    name: String,
    email: String,
    role: String,
    files: String,
    comments: String,
    #[tabled(rename = "contribution %")]
    contribution: i64,
}

/// Print headline statistics.
pub async fn stats(config: AppConfig, format: OutputFormat) -> Result<(), AppError> {
    let hub = super::connect_hub(config).await?;
    let stats = hub.stats.get_stats().await?;

    output::print_item(
        &stats,
        &[
            ("Uploads", stats.uploads.to_string()),
            ("Comments", stats.comments.to_string()),
            ("Members", stats.members.to_string()),
            ("Days active", stats.days_active.to_string()),
        ],
        format,
    );
    if format == OutputFormat::Table {
        let types: Vec<CountRow> = stats
            .file_types
            .iter()
            .chain(stats.activity_by_category.iter())
            .map(|c| CountRow {
                name: c.name.clone(),
                value: c.value,
            })
            .collect();
        println!();
        output::print_list(&types, &stats, format);
    }
    Ok(())
}

/// Print the weighted contribution ranking.
pub async fn contributions(config: AppConfig, format: OutputFormat) -> Result<(), AppError> {
    let hub = super::connect_hub(config).await?;
    let contributions = hub.stats.get_contributions().await?;
    let rows: Vec<ContributionRow> = contributions
        .iter()
        .map(|c| ContributionRow {
            user: c.user.name.clone(),
            files: c.files_count,
            comments: c.comments_count,
            score: c.score,
            percentage: c.percentage,
        })
        .collect();
    output::print_list(&rows, &contributions, format);
    Ok(())
}

/// Print per-day activity over the trailing window.
pub async fn activity(
    args: &ActivityArgs,
    config: AppConfig,
    format: OutputFormat,
) -> Result<(), AppError> {
    let hub = super::connect_hub(config).await?;
    let days = hub
        .stats
        .activity_by_day(args.window_days.map(ActivityWindow::days))
        .await?;
    let rows: Vec<DayRow> = days
        .iter()
        .map(|d| DayRow {
            date: d.date.to_string(),
            files: d.files,
            comments: d.comments,
        })
        .collect();
    output::print_list(&rows, &days, format);
    Ok(())
}

/// Print the most recent activity entries.
pub async fn feed(args: &FeedArgs, config: AppConfig, format: OutputFormat) -> Result<(), AppError> {
    let hub = super::connect_hub(config).await?;
    let entries = hub.activities.recent_activities(args.limit).await?;
    let rows: Vec<FeedRow> = entries
        .iter()
        .map(|e| FeedRow {
            when: e.activity.timestamp.format("%Y-%m-%d %H:%M").to_string(),
            user: e.user.name.clone(),
            action: e.activity.activity_type.to_string(),
            file: e.file_name.clone().unwrap_or_default(),
        })
        .collect();
    output::print_list(&rows, &entries, format);
    Ok(())
}

/// Print project members with their contribution figures.
pub async fn team(args: &TeamArgs, config: AppConfig, format: OutputFormat) -> Result<(), AppError> {
    let hub = super::connect_hub(config).await?;
    let project_id = match args.project {
        Some(id) => ProjectId(id),
        None => hub.default_project().await?.id,
    };
    let members = hub.team.list_team(project_id).await?;
    let rows: Vec<TeamRow> = members
        .iter()
        .map(|m| TeamRow {
            name: m.name.clone(),
            email: m.email.clone(),
            role: m.role.clone(),
            files: format!("{} ({:.1}%)", m.files_count, m.files_percentage),
            comments: format!("{} ({:.1}%)", m.comments_count, m.comments_percentage),
            contribution: m.contribution_percentage,
        })
        .collect();
    output::print_list(&rows, &members, format);
    Ok(())
}
