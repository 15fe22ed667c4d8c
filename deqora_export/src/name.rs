use std::time::{SystemTime, UNIX_EPOCH};

/// Suggest an export filename of the form `qr_{kind}_{seconds}.{extension}`,
/// where `kind` names the content type and `seconds` is the Unix time. Good
/// enough to avoid collisions between consecutive exports.
pub fn suggested_filename(kind: &str, extension: &str) -> String {
    let seconds = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|elapsed| elapsed.as_secs())
        .unwrap_or(0);
    format!("qr_{kind}_{seconds}.{extension}")
}
