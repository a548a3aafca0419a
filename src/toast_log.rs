use chrono::Local;
use std::fs::OpenOptions;
use std::io::Write;

pub const NOTICE_LOG_FILE: &str = "notice.log";

/// Append a notice line to the audit log. Failures are ignored; the log is
/// best-effort.
pub fn append_notice_log(msg: &str) {
    if let Ok(mut file) = OpenOptions::new()
        .create(true)
        .append(true)
        .open(NOTICE_LOG_FILE)
    {
        let _ = writeln!(file, "{} - {}", Local::now().to_rfc3339(), msg);
    }
}
