use anyhow::bail;
use moviebot_client::{AccountFlow, ChatDispatcher, ClientConfig, HistoryView};
use moviebot_cli::cli_args::Login;
use moviebot_cli::terminal::TerminalSurface;
use tokio::io::{AsyncBufReadExt, BufReader};
use tracing::{debug, info};

pub async fn chat(config: ClientConfig, login: Login) -> anyhow::Result<()> {
    let client = config.client()?;
    let surface = TerminalSurface::default();
    let account = AccountFlow::new(&client, &surface);
    account.login(&login.username, &login.password).await?;

    let dispatcher = ChatDispatcher::new(&client, &surface);
    let history = HistoryView::new(&client, &surface);
    println!("Logged in as {}. Type a message, /history or /quit.", login.username);

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    while let Some(line) = lines.next_line().await? {
        match line.trim() {
            "/quit" => break,
            "/history" => {
                // Failures are already shown as a notice.
                let _ = history.load().await;
            }
            text => {
                let state = dispatcher.send(text).await;
                debug!(?state, "send cycle finished");
            }
        }
        if surface.session_lost() {
            bail!("session expired; run `moviebot chat` again to log in");
        }
    }

    info!("logging out");
    account.logout().await;
    Ok(())
}
