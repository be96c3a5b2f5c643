use librtfs::error::RtfsError;

use async_trait::async_trait;

pub mod config;
pub use config::ConfigCmd;

pub mod ls;
pub use ls::LsCmd;

#[async_trait]
pub trait RunCmd {
    fn name(&self) -> &str;
    fn args(&self) -> clap::Command;
    async fn run(&self, args: &clap::ArgMatches) -> Result<(), RtfsError>;
}
