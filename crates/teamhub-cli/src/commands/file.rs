//! File and version history commands.

use clap::{Args, Subcommand};
use serde::Serialize;
use tabled::Tabled;

use crate::output::{self, OutputFormat};
use teamhub_core::config::AppConfig;
use teamhub_core::error::AppError;
use teamhub_core::types::id::FileId;

/// Arguments for file commands
#[derive(Debug, Args)]
pub struct FileArgs {
    /// File subcommand
    #[command(subcommand)]
    pub command: FileCommand,
}

/// File subcommands
#[derive(Debug, Subcommand)]
pub enum FileCommand {
    /// List files, newest first
    List {
        /// Show only the N most recent files
        #[arg(short, long)]
        limit: Option<u32>,
    },
    /// Show a file's version history
    Versions {
        /// File ID
        file_id: i64,
    },
    /// Show a file's comments
    Comments {
        /// File ID
        file_id: i64,
    },
}

#[derive(Debug, Serialize, Tabled)]
struct FileRow {
    id: i64,
    name: String,
    #[tabled(rename = "type")]
    file_type: String,
    size: i64,
    uploader: String,
    updated_at: String,
}

#[derive(Debug, Serialize, Tabled)]
struct VersionRow {
    version: i32,
    action: String,
    author: String,
    size: i64,
    notes: String,
    created_at: String,
}

#[derive(Debug, Serialize, Tabled)]
struct CommentRow {
    id: i64,
    author: String,
    text: String,
    created_at: String,
}

/// Execute file commands
pub async fn execute(
    args: &FileArgs,
    config: AppConfig,
    format: OutputFormat,
) -> Result<(), AppError> {
    let hub = super::connect_hub(config).await?;

    match &args.command {
        FileCommand::List { limit } => {
            let files = match limit {
                Some(n) => hub.files.recent_files(Some(*n)).await?,
                None => hub.files.list_files().await?,
            };
            let rows: Vec<FileRow> = files
                .iter()
                .map(|f| FileRow {
                    id: f.file.id.into_inner(),
                    name: f.file.name.clone(),
                    file_type: f.file.file_type.clone(),
                    size: f.file.size_bytes,
                    uploader: f.user.name.clone(),
                    updated_at: f.file.updated_at.format("%Y-%m-%d %H:%M").to_string(),
                })
                .collect();
            output::print_list(&rows, &files, format);
        }
        FileCommand::Versions { file_id } => {
            let versions = hub.versions.list_versions(FileId(*file_id)).await?;
            let rows: Vec<VersionRow> = versions
                .iter()
                .map(|v| VersionRow {
                    version: v.version.version,
                    action: v.version.action.clone(),
                    author: v.user.name.clone(),
                    size: v.version.size_bytes,
                    notes: v.version.notes.clone().unwrap_or_default(),
                    created_at: v.version.created_at.format("%Y-%m-%d %H:%M").to_string(),
                })
                .collect();
            output::print_list(&rows, &versions, format);
        }
        FileCommand::Comments { file_id } => {
            let comments = hub.comments.list_file_comments(FileId(*file_id)).await?;
            let rows: Vec<CommentRow> = comments
                .iter()
                .map(|c| CommentRow {
                    id: c.comment.id.into_inner(),
                    author: c.user.name.clone(),
                    text: c.comment.text.clone(),
                    created_at: c.comment.created_at.format("%Y-%m-%d %H:%M").to_string(),
                })
                .collect();
            output::print_list(&rows, &comments, format);
        }
    }

    Ok(())
}
