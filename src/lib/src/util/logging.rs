use env_logger::Env;
use std::io::Write;

/// Installs the global logger, configured from `RUST_LOG`.
///
/// Safe to call more than once; later calls are ignored.
pub fn init_logging() {
    match env_logger::Builder::from_env(Env::default())
        .format(|buf, record| {
            let formatted_target = format_target(record.target());
            let file_name = take_last(record.file().unwrap_or("unknown"), '/');
            let line_number = record.line().unwrap_or(0);

            writeln!(
                buf,
                "[{}] {} - {}/{}:{} {}",
                record.level(),
                chrono::Local::now().format("%Y-%m-%dT%H:%M:%S%.3f"),
                formatted_target,
                file_name,
                line_number,
                record.args()
            )
        })
        .try_init()
    {
        Ok(_) => (),
        Err(_) => {
            // Already initialized, tests install their own logger
        }
    }
}

// Split string on a character and take the last part
fn take_last(s: &str, c: char) -> &str {
    s.split(c).last().unwrap_or("")
}

// "librtfs::command::ls" -> "command"
fn format_target(target: &str) -> String {
    target
        .strip_prefix("librtfs::")
        .unwrap_or(target)
        .rsplit_once("::")
        .map(|(path, _)| path.replace("::", "/"))
        .unwrap_or_else(|| target.replace("::", "/"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_target_strips_crate_and_module() {
        assert_eq!(format_target("librtfs::api::client::search"), "api/client");
        assert_eq!(format_target("librtfs::command::ls"), "command");
        assert_eq!(format_target("rtfs"), "rtfs");
    }

    #[test]
    fn test_take_last() {
        assert_eq!(take_last("src/lib/src/command/ls.rs", '/'), "ls.rs");
        assert_eq!(take_last("ls.rs", '/'), "ls.rs");
    }
}
