use librtfs::config::ServerConfig;
use librtfs::error::RtfsError;
use librtfs::model::ServerDetails;
use librtfs::util;

pub const SERVER_ID_ARG: &str = "server-id";

/// The server a command talks to, from `--server-id` or the config defaults
pub fn get_server(args: &clap::ArgMatches) -> Result<ServerDetails, RtfsError> {
    let server_id = args.get_one::<String>(SERVER_ID_ARG).map(String::as_str);
    let config = ServerConfig::get()?;
    let server = config.resolve(server_id)?;
    log::debug!("Using server {:?}", server);
    Ok(server)
}

/// A path argument must name something, blank input is rejected before any
/// request is made
pub fn parse_pattern(path: Option<&String>) -> Result<String, RtfsError> {
    let pattern = path.map(|path| util::path::normalize(path)).unwrap_or_default();
    if pattern.is_empty() {
        return Err(RtfsError::path_argument_missing());
    }
    Ok(pattern)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_pattern_rejects_blank_paths() {
        assert!(matches!(parse_pattern(None), Err(RtfsError::InputError(_))));
        let blank = String::from("  ");
        assert!(matches!(
            parse_pattern(Some(&blank)),
            Err(RtfsError::InputError(_))
        ));
        let root = String::from("//");
        assert!(matches!(
            parse_pattern(Some(&root)),
            Err(RtfsError::InputError(_))
        ));
        let path = String::from("/repo//dir ");
        assert_eq!(parse_pattern(Some(&path)).ok(), Some("repo/dir".to_string()));
    }
}
