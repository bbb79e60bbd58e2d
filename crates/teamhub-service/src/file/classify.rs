//! Declared file types.
//!
//! The declared type is a coarse label chosen once, at upload time, from the
//! MIME type reported by the client and the file name's extension. It drives
//! the file-type histogram and the download content type.

/// Derives the declared type of an upload.
///
/// MIME-based rules win over extension rules, except that a `.csv` file is
/// always a spreadsheet. Unrecognized files fall back to the upper-cased
/// extension, or `"Unknown"` without one.
pub fn classify_file_type(mime_type: Option<&str>, file_name: &str) -> String {
    let mime = mime_type.unwrap_or_default().to_ascii_lowercase();
    let extension = file_name
        .rsplit_once('.')
        .map(|(_, ext)| ext.to_ascii_lowercase())
        .filter(|ext| !ext.is_empty());
    let ext = extension.as_deref();

    let label = if mime.starts_with("image/") {
        "Image"
    } else if mime == "application/pdf" {
        "PDF"
    } else if mime == "application/json" {
        "JSON"
    } else if mime.contains("excel") || mime.contains("spreadsheet") || ext == Some("csv") {
        "Spreadsheet"
    } else if mime.contains("word") || mime.contains("document") {
        "Document"
    } else {
        match ext {
            Some("js") => "JavaScript",
            Some("html") => "HTML",
            Some("css") => "CSS",
            Some("ts" | "tsx") => "TypeScript",
            Some("py") => "Python",
            Some("java") => "Java",
            Some("c" | "cpp" | "h") => "C/C++",
            _ if mime.contains("text") => "Text",
            Some(other) => return other.to_uppercase(),
            None => "Unknown",
        }
    };
    label.to_string()
}

/// The content type served when downloading a file of the given declared type.
pub fn content_type_for(file_type: &str) -> &'static str {
    match file_type {
        "Image" => "image/jpeg",
        "PDF" => "application/pdf",
        "Document" => "application/msword",
        "Spreadsheet" => "application/vnd.ms-excel",
        "Text" | "JavaScript" | "HTML" | "CSS" => "text/plain",
        _ => "application/octet-stream",
    }
}
