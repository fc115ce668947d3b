use clap::Subcommand;

#[derive(Subcommand)]
pub enum ThemeCommands {
    /// Show the active theme
    Show,
    /// Set the theme
    Set {
        #[arg(value_parser = ["dark", "light"])]
        theme: String,
    },
    /// Switch between dark and light
    Toggle,
}
