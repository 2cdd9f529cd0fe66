use std::sync::Arc;

use anyhow::{Context, Result};
use tokio::signal;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

use web_sugar::application::{
    commands::pages::CreatePageCommand,
    ports::{templates::TemplateRenderer, util::SlugGenerator},
    services::ApplicationServices,
};
use web_sugar::config::AppConfig;
use web_sugar::domain::{page::PageRepository, slug::SlugIndex};
use web_sugar::infrastructure::{
    repositories::InMemoryPageRepository, templates::TeraRenderer, util::DefaultSlugGenerator,
};
use web_sugar::presentation::http::{routes::build_router, state::HttpState};

const DEFAULT_LOG_FILTER: &str = "info,tower_http=info";

#[tokio::main]
async fn main() {
    if let Err(err) = bootstrap().await {
        tracing::error!(error = %err, "fatal error");
        eprintln!("fatal error: {err:#}");
        std::process::exit(1);
    }
}

async fn bootstrap() -> Result<()> {
    dotenvy::dotenv().ok();
    init_tracing();

    let config = AppConfig::from_env()?;
    let services = Arc::new(wire_services(&config)?);
    seed_pages(&services, config.seed_pages()).await?;

    let app = build_router(HttpState {
        services: Arc::clone(&services),
    });

    let listener = tokio::net::TcpListener::bind(config.listen_addr())
        .await
        .with_context(|| format!("cannot bind {}", config.listen_addr()))?;
    tracing::info!(address = %listener.local_addr()?, "listening");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    Ok(())
}

/// One in-memory store backs both the page repository and the slug index.
fn wire_services(config: &AppConfig) -> Result<ApplicationServices> {
    let store = Arc::new(InMemoryPageRepository::new());
    let page_repo: Arc<dyn PageRepository> = Arc::clone(&store) as Arc<dyn PageRepository>;
    let slug_index: Arc<dyn SlugIndex> = store;
    let slugger: Arc<dyn SlugGenerator> = Arc::new(DefaultSlugGenerator);

    let renderer = TeraRenderer::from_dir(config.template_dir()).with_context(|| {
        format!("loading templates from {}", config.template_dir().display())
    })?;
    let renderer: Arc<dyn TemplateRenderer> = Arc::new(renderer);

    Ok(ApplicationServices::new(
        page_repo,
        slug_index,
        Some(slugger),
        renderer,
    ))
}

async fn seed_pages(services: &ApplicationServices, titles: &[String]) -> Result<()> {
    for title in titles {
        let page = services
            .page_commands
            .create_page(CreatePageCommand {
                title: title.clone(),
            })
            .await
            .with_context(|| format!("seeding page {title:?}"))?;
        tracing::info!(slug = %page.slug, "seeded page");
    }
    Ok(())
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER));

    if tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer())
        .try_init()
        .is_err()
    {
        tracing::warn!("tracing subscriber already initialised");
    }
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(err) = signal::ctrl_c().await {
            tracing::error!(error = %err, "ctrl-c handler unavailable");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut sigterm) => {
                sigterm.recv().await;
            }
            Err(err) => {
                tracing::error!(error = %err, "SIGTERM handler unavailable");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => {}
        () = terminate => {}
    }
    tracing::info!("shutting down");
}
