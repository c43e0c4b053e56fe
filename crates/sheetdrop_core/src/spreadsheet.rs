//! File-type contract for accepted spreadsheets.

/// MIME type a dragged item must declare to light up the drop zone.
pub const XLSX_MIME: &str = "application/vnd.openxmlformats-officedocument.spreadsheetml.sheet";

/// Extension a dropped file name must carry to be accepted.
pub const XLSX_EXTENSION: &str = ".xlsx";

/// True if the declared MIME type (possibly with parameters) is the xlsx type.
pub fn is_spreadsheet_mime(mime: &str) -> bool {
    let essence = mime.split(';').next().unwrap_or(mime).trim();
    essence.eq_ignore_ascii_case(XLSX_MIME)
}

/// True if the file name ends with the accepted spreadsheet extension.
pub fn has_spreadsheet_extension(name: &str) -> bool {
    name.ends_with(XLSX_EXTENSION)
}
