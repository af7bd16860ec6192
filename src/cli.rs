use clap::{ArgAction, Parser};

#[derive(Debug, Parser)]
#[command(
    name = "miracle",
    version,
    about = "A command-line tool for setting up the developer tools and themes"
)]
pub struct Cli {
    #[arg(value_name = "GIT_PROFILE_NAME", help = "Git profile (user) name")]
    pub git_profile_name: String,
    #[arg(value_name = "GIT_EMAIL", help = "Git email address")]
    pub git_email: String,
    #[arg(long, help = "Emit JSON output")]
    pub json: bool,
    #[arg(short = 'v', long, action = ArgAction::Count, help = "Verbose logging to stderr")]
    pub verbose: u8,
}
