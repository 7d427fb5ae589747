//! CLI entry point - the composition root.
//!
//! This is the ONLY place where infrastructure is wired together for the
//! terminal commands; `serve` delegates to the Axum adapter's own
//! bootstrap.

use anyhow::Result;
use clap::Parser;

use newsdesk_axum::bootstrap::{CorsConfig, ServerConfig, start_server};
use newsdesk_cli::{Cli, Commands, NewsCommand, SettingsCommand};
use newsdesk_core::{NewNewsItem, SettingsUpdate, database_path};
use newsdesk_db::{CoreFactory, setup_database};

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "newsdesk=info".into()),
        )
        .init();

    let cli = Cli::parse();
    let db_path = match cli.db {
        Some(path) => path,
        None => database_path()?,
    };
    tracing::debug!(db = %db_path.display(), "using database");

    match cli.command {
        Commands::Serve { port } => {
            start_server(ServerConfig {
                port,
                db_path: Some(db_path),
                cors: CorsConfig::AllowAll,
            })
            .await
        }
        Commands::News(cmd) => {
            let pool = setup_database(&db_path).await?;
            let core = CoreFactory::build_app_core(pool);
            match cmd {
                NewsCommand::Add { title, text, date } => {
                    let item = core.news().publish(NewNewsItem { title, text, date }).await?;
                    println!("Published news {} ({})", item.id, item.date);
                    Ok(())
                }
                NewsCommand::List { limit } => {
                    let items = core.news().recent(limit).await?;
                    if items.is_empty() {
                        println!("No news yet.");
                    }
                    for item in items {
                        println!("{:>5}  {}  {}", item.id, item.date, item.title);
                    }
                    Ok(())
                }
            }
        }
        Commands::Settings(cmd) => {
            let pool = setup_database(&db_path).await?;
            let core = CoreFactory::build_app_core(pool);
            match cmd {
                SettingsCommand::Show => {
                    let settings = core.settings().get().await?;
                    println!("home_page_size    = {}", settings.effective_home_page_size());
                    println!("session_ttl_hours = {}", settings.effective_session_ttl_hours());
                    if let Some(title) = settings.site_title {
                        println!("site_title        = {title}");
                    }
                    Ok(())
                }
                SettingsCommand::SetPageSize { size } => {
                    let merged = core
                        .settings()
                        .update(SettingsUpdate {
                            home_page_size: Some(Some(size)),
                            ..SettingsUpdate::default()
                        })
                        .await?;
                    println!("home_page_size = {}", merged.effective_home_page_size());
                    Ok(())
                }
            }
        }
    }
}
