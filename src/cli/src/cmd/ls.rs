use async_trait::async_trait;
use clap::{Arg, Command};

use librtfs::api::client::search::AqlSearch;
use librtfs::command;
use librtfs::error::RtfsError;
use librtfs::opts::LsOpts;

use crate::cmd::RunCmd;
use crate::helpers;

pub const NAME: &str = "ls";
pub struct LsCmd;

#[async_trait]
impl RunCmd for LsCmd {
    fn name(&self) -> &str {
        NAME
    }

    fn args(&self) -> Command {
        // Setups the CLI args for the command
        Command::new(NAME)
            .about("List the files and folders directly under a repository path.")
            .arg(
                Arg::new("path")
                    .help("Path to list, starting with the repository key, e.g. libs-release-local/org/acme")
                    .required(true)
                    .action(clap::ArgAction::Set),
            )
            .arg(
                Arg::new(helpers::SERVER_ID_ARG)
                    .long(helpers::SERVER_ID_ARG)
                    .short('s')
                    .help("Server to list from. Defaults to the default server in your rtfs config.")
                    .action(clap::ArgAction::Set),
            )
            .arg(
                Arg::new("verbose")
                    .long("verbose")
                    .short('v')
                    .help("Log search progress.")
                    .action(clap::ArgAction::SetTrue),
            )
    }

    async fn run(&self, args: &clap::ArgMatches) -> Result<(), RtfsError> {
        let pattern = helpers::parse_pattern(args.get_one::<String>("path"))?;
        let verbose = args.get_flag("verbose");
        let server = helpers::get_server(args)?;

        let opts = LsOpts::new(server, pattern).verbose(verbose);
        let search = AqlSearch::new(&opts.server)?;
        let result_set = command::ls(&search, &opts).await?;
        result_set.print_stdout()
    }
}
