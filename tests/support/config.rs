use std::io::Write;

use tempfile::NamedTempFile;

/// Write `contents` to a fresh temp file that lives as long as the handle.
pub fn write_temp_config(contents: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().expect("create temp config");
    file.write_all(contents.as_bytes()).expect("write temp config");
    file
}

/// Config pointing every endpoint at `base` with proxies disabled.
pub fn local_config(base: &str) -> String {
    format!(
        r#"
[catalog]
sports_url = "{base}/sports"
league_events_url = "{base}/events?league_id={{id}}"
match_url = "{base}/event?eventId={{id}}"

[http]
timeout_ms = 2000
connect_timeout_ms = 1000
system_proxy = false

[logging]
level = "warn"
"#
    )
}
