//! Location keys for stored content.

use uuid::Uuid;

const FALLBACK_NAME: &str = "file";

/// Build a fresh object key from a name hint such as `"uploads/report.pdf"`.
///
/// Directory segments are kept (minus empty, `.` and `..` segments), the
/// file name is reduced to a safe character set, and a time-ordered UUID is
/// prepended to the file name so repeated uploads never collide.
pub fn object_key(name_hint: &str) -> String {
    let (dir, name) = match name_hint.rsplit_once('/') {
        Some((dir, name)) => (dir, name),
        None => ("", name_hint),
    };

    let prefix: Vec<String> = dir
        .split('/')
        .filter(|seg| !seg.is_empty() && *seg != "." && *seg != "..")
        .map(sanitize)
        .collect();

    let mut name = sanitize(name);
    if name.is_empty() || name.chars().all(|c| c == '.') {
        name = FALLBACK_NAME.to_string();
    }

    let file = format!("{}-{name}", Uuid::now_v7());
    if prefix.is_empty() {
        file
    } else {
        format!("{}/{file}", prefix.join("/"))
    }
}

fn sanitize(segment: &str) -> String {
    segment
        .chars()
        .map(|c| {
            if c.is_ascii_alphanumeric() || matches!(c, '.' | '-' | '_') {
                c
            } else {
                '_'
            }
        })
        .collect()
}
