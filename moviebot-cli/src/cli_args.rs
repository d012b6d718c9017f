use clap::{Args, Parser, Subcommand};

/// MovieBot CLI
///
/// Ask MovieBot about movies and review your past conversations.
///
/// Every command logs in first; the session lives only as long as the process.
#[derive(Parser, Debug)]
#[clap(name = "moviebot")]
pub struct Opt {
    /// Base URL of the MovieBot backend.
    ///
    /// Defaults to `MOVIEBOT_API_URL`, then to http://localhost:8000.
    #[clap(long = "url", global = true)]
    pub url: Option<String>,

    #[clap(subcommand)]
    pub mode: Mode,
}

#[derive(Subcommand, Debug)]
pub enum Mode {
    /// Create an account.
    Register(Register),

    /// Start an interactive chat session.
    ///
    /// Type a message and press enter. `/history` shows past conversations,
    /// `/quit` logs out.
    Chat(Login),

    /// Print past conversations grouped by exchange.
    History(Login),
}

#[derive(Args, Debug, Clone)]
pub struct Login {
    #[clap(long = "username", short = 'u')]
    pub username: String,

    #[clap(long = "password", short = 'p')]
    pub password: String,
}

#[derive(Args, Debug, Clone)]
pub struct Register {
    #[clap(long = "username", short = 'u')]
    pub username: String,

    #[clap(long = "password", short = 'p')]
    pub password: String,

    /// Password confirmation. Must match `--password`.
    #[clap(long = "confirm")]
    pub confirm: String,
}
