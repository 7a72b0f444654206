use anyhow::Result;
use clap::{ArgAction, Parser};
use std::path::PathBuf;

pub const DEFAULT_EMAIL: &str = "your@email.com";

#[derive(Parser, Debug)]
#[command(name = "commitgrid")]
#[command(about = "Contribution heatmap of your commits across local git repositories")]
#[command(version)]
pub struct Cli {
    #[arg(long, value_name = "FOLDER", help = "Scan this folder for git repositories and register them")]
    pub add: Option<PathBuf>,

    #[arg(long, default_value = DEFAULT_EMAIL, help = "Author email to count commits for")]
    pub email: String,

    #[arg(
        long,
        env = "COMMITGRID_HOME",
        value_name = "DIR",
        help = "Directory holding the repository registry [default: home directory]"
    )]
    pub state_dir: Option<PathBuf>,

    #[arg(long, help = "Abort on the first repository that cannot be read")]
    pub strict: bool,

    #[arg(short, long, action = ArgAction::Count, help = "Log more (-v info, -vv debug)")]
    pub verbose: u8,
}

impl Cli {
    pub fn execute(self) -> Result<()> {
        crate::logging::init(self.verbose);
        crate::heat::exec(self)
    }
}
