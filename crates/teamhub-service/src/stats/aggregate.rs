//! Pure aggregation math over store rows.

use std::collections::BTreeMap;

use chrono::{DateTime, Days, NaiveDate, Utc};

use teamhub_entity::activity::{Activity, ActivityType};
use teamhub_entity::stats::{ActivityTypeCount, AuthorCounts, NamedCount};

use super::model::{Contribution, DailyActivity};

/// Points per uploaded file.
pub const FILE_WEIGHT: i64 = 3;
/// Points per posted comment.
pub const COMMENT_WEIGHT: i64 = 1;

/// Dashboard activity categories, in display order.
pub const ACTIVITY_CATEGORIES: [(ActivityType, &str); 3] = [
    (ActivityType::Upload, "Uploads"),
    (ActivityType::Update, "Updates"),
    (ActivityType::Comment, "Comments"),
];

/// Weighted contribution score.
pub fn contribution_score(files_count: i64, comments_count: i64) -> i64 {
    files_count * FILE_WEIGHT + comments_count * COMMENT_WEIGHT
}

/// `100 * part / total` rounded half away from zero; 0 when `total` is 0.
pub fn rounded_percentage(part: i64, total: i64) -> i64 {
    if total <= 0 {
        return 0;
    }
    (200 * part + total) / (2 * total)
}

/// `100 * part / total` without rounding; 0 when `total` is 0.
pub fn share_percentage(part: i64, total: i64) -> f64 {
    if total <= 0 {
        return 0.0;
    }
    part as f64 / total as f64 * 100.0
}

/// Scores every author and sorts by percentage, highest first.
///
/// The sort is stable, so equal percentages keep the input (user ID) order.
pub fn contributions(authors: Vec<AuthorCounts>) -> Vec<Contribution> {
    let total: i64 = authors
        .iter()
        .map(|a| contribution_score(a.files_count, a.comments_count))
        .sum();

    let mut result: Vec<Contribution> = authors
        .into_iter()
        .map(|a| {
            let score = contribution_score(a.files_count, a.comments_count);
            Contribution {
                user: a.user,
                files_count: a.files_count,
                comments_count: a.comments_count,
                score,
                percentage: rounded_percentage(score, total),
            }
        })
        .collect();
    result.sort_by(|a, b| b.percentage.cmp(&a.percentage));
    result
}

/// Maps per-type activity counts onto the fixed dashboard categories.
/// Missing categories report zero; `join` is not a category.
pub fn activity_by_category(counts: &[ActivityTypeCount]) -> Vec<NamedCount> {
    ACTIVITY_CATEGORIES
        .iter()
        .map(|(kind, label)| {
            let value = counts
                .iter()
                .filter(|c| c.activity_type == *kind)
                .map(|c| c.count)
                .sum();
            NamedCount::new(*label, value)
        })
        .collect()
}

/// Orders the file-type histogram by count descending, then name.
pub fn sort_file_types(mut types: Vec<NamedCount>) -> Vec<NamedCount> {
    types.sort_by(|a, b| b.value.cmp(&a.value).then_with(|| a.name.cmp(&b.name)));
    types
}

/// The first day of a `days`-long window ending on `today`.
pub fn window_first_day(today: NaiveDate, days: u32) -> NaiveDate {
    today
        .checked_sub_days(Days::new(u64::from(days.saturating_sub(1))))
        .unwrap_or(NaiveDate::MIN)
}

/// Midnight UTC at the start of the window.
pub fn window_start(today: NaiveDate, days: u32) -> DateTime<Utc> {
    window_first_day(today, days)
        .and_time(chrono::NaiveTime::MIN)
        .and_utc()
}

/// Buckets activities into one entry per UTC day of the window ending on
/// `today`, oldest first. Uploads and updates count as files, comments as
/// comments; other activities and activities outside the window are ignored.
pub fn bucket_activity_by_day(
    activities: &[Activity],
    today: NaiveDate,
    days: u32,
) -> Vec<DailyActivity> {
    let first = window_first_day(today, days);
    let mut buckets: BTreeMap<NaiveDate, DailyActivity> = first
        .iter_days()
        .take_while(|d| *d <= today)
        .map(|date| {
            (
                date,
                DailyActivity {
                    date,
                    files: 0,
                    comments: 0,
                },
            )
        })
        .collect();

    for activity in activities {
        let Some(bucket) = buckets.get_mut(&activity.timestamp.date_naive()) else {
            continue;
        };
        if activity.activity_type.is_file_change() {
            bucket.files += 1;
        } else if activity.activity_type == ActivityType::Comment {
            bucket.comments += 1;
        }
    }

    buckets.into_values().collect()
}
