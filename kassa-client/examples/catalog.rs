// kassa-client/examples/catalog.rs
// Log in, list the catalog and show what the role may do

use kassa_client::{
    ClientConfig, CredentialStore, FileCredentialStore, KassaClient, LoginRequest, LoginResponse,
    Product, define_abilities_for,
};
use std::sync::Arc;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let _ = dotenv::dotenv();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "kassa_client=debug,catalog=info".into()),
        )
        .init();

    let args: Vec<String> = std::env::args().collect();
    if args.len() < 3 {
        println!("Usage: {} <username> <password>", args[0]);
        return Ok(());
    }

    let config = ClientConfig::from_env()?;
    let cred_dir =
        std::env::var("KASSA_CREDENTIAL_DIR").unwrap_or_else(|_| "./work_dir".to_string());
    let store = Arc::new(FileCredentialStore::new(cred_dir, "credentials.json"));

    let client = KassaClient::new(&config, store.clone())?;

    let login: LoginResponse = client
        .login(&LoginRequest::new(&args[1], &args[2]))
        .await?
        .json()?;
    store.set_tokens(&login.tokens)?;

    let role = login.role.unwrap_or_default();
    let ability = define_abilities_for(&role);
    tracing::info!(role = %role, rules = ability.rules().len(), "Logged in");

    let products: Vec<Product> = client.get_all_products().await?.json()?;
    for product in &products {
        println!("{:>6}  {}", product.id, product.name);
    }

    for (action, subject) in [
        ("view", "qoldiqlar"),
        ("use", "Create Product"),
        ("use", "Edit"),
        ("view", "Actions"),
    ] {
        println!("{action:>6} {subject:<16} {}", ability.can(action, subject));
    }

    client.logout().await?;
    store.clear()?;
    Ok(())
}
