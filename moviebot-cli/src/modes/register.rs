use moviebot_client::{AccountFlow, ClientConfig};
use moviebot_cli::cli_args::Register;
use moviebot_cli::terminal::TerminalSurface;

pub async fn register(config: ClientConfig, args: Register) -> anyhow::Result<()> {
    let client = config.client()?;
    let surface = TerminalSurface::default();
    let user = AccountFlow::new(&client, &surface)
        .register(&args.username, &args.password, &args.confirm)
        .await?;
    println!("Created account '{}' (id {}).", user.username, user.id);
    Ok(())
}
