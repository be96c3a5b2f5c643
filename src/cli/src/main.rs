use std::collections::HashMap;
use std::process::ExitCode;

use clap::Command;
use librtfs::util;

pub mod cmd;
pub mod helpers;

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    util::logging::init_logging();

    let cmds: Vec<Box<dyn cmd::RunCmd>> = vec![Box::new(cmd::ConfigCmd), Box::new(cmd::LsCmd)];

    let mut command = Command::new("rtfs")
        .version(librtfs::constants::RTFS_VERSION)
        .about("List remote artifact repositories like a local file system")
        .subcommand_required(true)
        .arg_required_else_help(true);

    // Add all the commands to the command line
    let mut runners: HashMap<String, Box<dyn cmd::RunCmd>> = HashMap::new();
    for cmd in cmds {
        command = command.subcommand(cmd.args());
        runners.insert(cmd.name().to_string(), cmd);
    }

    let matches = command.get_matches();
    let Some((command, args)) = matches.subcommand() else {
        eprintln!("No command given, see `rtfs --help`");
        return ExitCode::FAILURE;
    };

    // Lookup command in runners and run on args
    let Some(runner) = runners.get(command) else {
        eprintln!("Unknown command `rtfs {command}`");
        return ExitCode::FAILURE;
    };
    match runner.run(args).await {
        Ok(_) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("{err}");
            ExitCode::FAILURE
        }
    }
}
