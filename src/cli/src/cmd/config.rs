use async_trait::async_trait;
use clap::{Arg, Command};
use colored::Colorize;

use librtfs::config::ServerConfig;
use librtfs::error::RtfsError;
use librtfs::model::ServerDetails;

use crate::cmd::RunCmd;
pub const NAME: &str = "config";
pub struct ConfigCmd;

#[async_trait]
impl RunCmd for ConfigCmd {
    fn name(&self) -> &str {
        NAME
    }

    fn args(&self) -> Command {
        // Setups the CLI args for the command
        Command::new(NAME)
            .about("Manages the artifact servers in ~/.config/rtfs/servers.toml")
            .arg(
                Arg::new("add")
                    .long("add")
                    .num_args(2)
                    .value_names(["SERVER_ID", "URL"])
                    .help("Add a server, or replace the server with the same id.")
                    .action(clap::ArgAction::Set),
            )
            .arg(
                Arg::new("access-token")
                    .long("access-token")
                    .short('t')
                    .requires("add")
                    .help("Access token sent as a bearer token to the added server.")
                    .action(clap::ArgAction::Set),
            )
            .arg(
                Arg::new("user")
                    .long("user")
                    .short('u')
                    .requires("add")
                    .conflicts_with("access-token")
                    .help("User for basic auth against the added server.")
                    .action(clap::ArgAction::Set),
            )
            .arg(
                Arg::new("password")
                    .long("password")
                    .short('p')
                    .requires("user")
                    .help("Password for basic auth against the added server.")
                    .action(clap::ArgAction::Set),
            )
            .arg(
                Arg::new("default")
                    .long("default")
                    .value_name("SERVER_ID")
                    .help("Use this server when --server-id is not given.")
                    .action(clap::ArgAction::Set),
            )
            // "delete" to match the remote commands
            .arg(
                Arg::new("delete")
                    .long("delete")
                    .value_name("SERVER_ID")
                    .help("Remove a server from the config.")
                    .action(clap::ArgAction::Set),
            )
            .arg(
                Arg::new("list")
                    .long("list")
                    .short('l')
                    .help("List the configured servers.")
                    .action(clap::ArgAction::SetTrue),
            )
            .arg_required_else_help(true)
    }

    async fn run(&self, args: &clap::ArgMatches) -> Result<(), RtfsError> {
        let mut config = ServerConfig::get_or_create()?;

        if let Some(add) = args.get_many::<String>("add") {
            if let [server_id, url] = add.collect::<Vec<_>>()[..] {
                let server = Self::server_from_args(server_id, url, args)?;
                Self::add_server(&mut config, server)?;
            } else {
                return Err(RtfsError::input_error("invalid arguments for --add"));
            }
        }

        if let Some(server_id) = args.get_one::<String>("default") {
            config.set_default(server_id)?;
            config.save_default()?;
            println!("Default server set to: {server_id}");
        }

        if let Some(server_id) = args.get_one::<String>("delete") {
            if !config.remove_server(server_id) {
                return Err(RtfsError::server_not_found(server_id));
            }
            config.save_default()?;
            println!("Deleted server: {server_id}");
        }

        if args.get_flag("list") {
            Self::list(&config);
        }

        Ok(())
    }
}

impl ConfigCmd {
    fn server_from_args(
        server_id: &str,
        url: &str,
        args: &clap::ArgMatches,
    ) -> Result<ServerDetails, RtfsError> {
        let mut server = ServerDetails::new(server_id, url);
        // Fail early on urls the client could not use
        server.base_url()?;

        if let Some(token) = args.get_one::<String>("access-token") {
            server = server.with_access_token(token);
        }
        if let Some(user) = args.get_one::<String>("user") {
            server.user = Some(user.to_string());
            server.password = args.get_one::<String>("password").cloned();
        }
        Ok(server)
    }

    pub fn add_server(config: &mut ServerConfig, server: ServerDetails) -> Result<(), RtfsError> {
        let server_id = server.server_id.clone();
        let url = server.url.clone();
        config.add_server(server);
        config.save_default()?;
        println!("Added server {server_id}: {url}");
        Ok(())
    }

    pub fn list(config: &ServerConfig) {
        let servers = config.list();
        if servers.is_empty() {
            println!("No servers configured");
            return;
        }

        for server in servers {
            if config.default_server.as_deref() == Some(server.server_id.as_str()) {
                println!("{} {}\t{}", "*".green(), server.server_id.bold(), server.url);
            } else {
                println!("  {}\t{}", server.server_id, server.url);
            }
        }
    }
}
