use clap::Subcommand;

#[derive(Debug, Subcommand)]
pub enum SessionCommand {
    /// Show the user this client acts as
    Whoami,
    /// Switch to another user; without an id, generate the next one
    Switch {
        #[arg(value_name = "USER")]
        user_id: Option<String>,
    },
}
