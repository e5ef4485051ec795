use super::*;

#[derive(Parser)]
#[command(author, version, about)]
pub(super) struct Cli {
    #[arg(
        long,
        global = true,
        help = "Skip persistent storage and use the fixed fallback identity"
    )]
    pub(super) no_store: bool,
    #[command(subcommand)]
    pub(super) command: Commands,
}

#[derive(clap::Subcommand)]
pub(super) enum Commands {
    #[command(about = "Show today's selection for the resolved identity")]
    Today(TodayArgs),
    #[command(about = "Show the current date key")]
    Date,
    #[command(about = "Manage the persisted user identifier")]
    UserId(UserIdArgs),
    #[command(about = "Manage config")]
    Config(ConfigArgs),
}

#[derive(Parser)]
pub(super) struct TodayArgs {
    #[arg(long, help = "Override the date key (YYYY-MM-DD)")]
    pub(super) date: Option<String>,
    #[arg(long, help = "Override the user identifier")]
    pub(super) user: Option<String>,
    #[arg(long)]
    pub(super) json: bool,
    #[arg(long)]
    pub(super) config: Option<PathBuf>,
    #[arg(long)]
    pub(super) store: Option<PathBuf>,
}

#[derive(Parser)]
pub(super) struct UserIdArgs {
    #[command(subcommand)]
    pub(super) command: UserIdCommands,
}

#[derive(clap::Subcommand)]
pub(super) enum UserIdCommands {
    #[command(about = "Print the resolved user identifier")]
    Show(UserIdShowArgs),
    #[command(about = "Delete the persisted identifier so the next call regenerates it")]
    Reset(UserIdResetArgs),
}

#[derive(Parser)]
pub(super) struct UserIdShowArgs {
    #[arg(long)]
    pub(super) store: Option<PathBuf>,
}

#[derive(Parser)]
pub(super) struct UserIdResetArgs {
    #[arg(long)]
    pub(super) store: Option<PathBuf>,
}

#[derive(Parser)]
pub(super) struct ConfigArgs {
    #[command(subcommand)]
    pub(super) command: ConfigCommands,
}

#[derive(clap::Subcommand)]
pub(super) enum ConfigCommands {
    #[command(about = "Initialize config with the catalog size")]
    Init(InitArgs),
}

#[derive(Parser)]
pub(super) struct InitArgs {
    #[arg(long, default_value = "1010")]
    pub(super) catalog_size: u32,
    #[arg(long)]
    pub(super) config: Option<PathBuf>,
}
