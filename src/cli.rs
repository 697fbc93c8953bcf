use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "golosovalka")]
#[command(author, version, about = "Telegram bot for quick polls with inline-button voting", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug, PartialEq, Eq)]
pub enum Commands {
    /// Run the bot in long polling mode (default)
    Run {
        /// Skip updates that piled up while the bot was offline
        #[arg(long)]
        drop_pending: bool,
    },

    /// Validate the configuration and exit
    CheckConfig,
}

impl Cli {
    pub fn parse_args() -> Self {
        Self::parse()
    }
}
