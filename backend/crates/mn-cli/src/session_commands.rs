use clap::Subcommand;

#[derive(Subcommand)]
pub enum SessionCommands {
    /// Show the current identity and theme
    Show,
    /// Log in; the admin address gets the admin role
    Login {
        #[arg(long)]
        email: String,
        #[arg(long, default_value = "")]
        password: String,
    },
    /// Log out (no-op when nobody is logged in)
    Logout,
}
