use std::path::PathBuf;

use clap::Parser;

#[derive(Parser, Debug)]
#[command(name = "askmentor", version, about = "Ask your mentor a question from the terminal")]
pub struct Cli {
    /// Config file [default: <config dir>/askmentor/config.yaml]
    #[arg(long, value_name = "path")]
    pub config: Option<PathBuf>,

    /// Base URL of the platform API
    #[arg(long, value_name = "url")]
    pub api_base: Option<String>,

    /// Base URL of the web app, used to print where to go next
    #[arg(long, value_name = "url")]
    pub web_base: Option<String>,

    /// Access token
    #[arg(long, env = "ASKMENTOR_TOKEN", hide_env_values = true)]
    pub token: Option<String>,

    /// Log file [default: <cache dir>/askmentor/askmentor.log]
    #[arg(long, value_name = "path")]
    pub log_file: Option<PathBuf>,

    /// Print the lessons you can ask about and exit
    #[arg(long)]
    pub list_lessons: bool,
}
