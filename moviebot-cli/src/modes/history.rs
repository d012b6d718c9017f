use moviebot_client::{AccountFlow, ClientConfig, HistoryView};
use moviebot_cli::cli_args::Login;
use moviebot_cli::terminal::TerminalSurface;

pub async fn history(config: ClientConfig, login: Login) -> anyhow::Result<()> {
    let client = config.client()?;
    let surface = TerminalSurface::default();
    let account = AccountFlow::new(&client, &surface);
    account.login(&login.username, &login.password).await?;

    let result = HistoryView::new(&client, &surface).load().await;
    account.logout().await;
    result?;
    Ok(())
}
