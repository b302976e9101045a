//! src/startup.rs

use actix_web::{dev::Server, web, App, HttpServer};
use std::net::TcpListener;
use std::sync::Arc;
use tracing_actix_web::TracingLogger;

use crate::{
    configuration::{NavigationSettings, Settings},
    navigation::{root_routes, AdminTableLoader, Dispatcher, LazyTable},
    routes::{health_check, home, navigate},
};

/// Base URL of the backend API rendered into the admin pages.
#[derive(Debug, Clone)]
pub struct ApiBaseUrl(pub String);

pub struct Application {
    port: u16,
    server: Server,
    admin_table: Arc<LazyTable>,
}

impl Application {
    pub async fn build(configuration: Settings) -> Result<Self, anyhow::Error> {
        let (dispatcher, admin_table) = get_dispatcher(&configuration.navigation)?;

        let address = format!(
            "{}:{}",
            configuration.application.host, configuration.application.port
        );

        tracing::info!("Using application address {:?}", &address);
        let listener = TcpListener::bind(address)?;
        let port = listener.local_addr()?.port();
        let server = run(
            listener,
            dispatcher,
            ApiBaseUrl(configuration.application.api_base_url),
        )?;

        Ok(Self {
            port,
            server,
            admin_table,
        })
    }

    pub fn port(&self) -> u16 {
        self.port
    }

    /// The deferred admin table, for checking when it gets fetched.
    pub fn admin_table(&self) -> Arc<LazyTable> {
        self.admin_table.clone()
    }

    // A more expressive name that makes it clear that
    // this function only returns when the application is stopped.
    pub async fn run_until_stopped(self) -> Result<(), std::io::Error> {
        self.server.await
    }
}

pub fn get_dispatcher(
    configuration: &NavigationSettings,
) -> Result<(Dispatcher, Arc<LazyTable>), anyhow::Error> {
    tracing::info!("Using {:?}", configuration);
    let admin_table = Arc::new(LazyTable::new(
        configuration.admin_prefix.as_str(),
        AdminTableLoader,
    ));
    let root = root_routes(&configuration.admin_prefix, admin_table.clone())?;
    Ok((
        Dispatcher::new(root, configuration.max_redirects),
        admin_table,
    ))
}

pub fn run(
    listener: TcpListener,
    dispatcher: Dispatcher,
    api_base_url: ApiBaseUrl,
) -> Result<Server, std::io::Error> {
    let dispatcher = web::Data::new(dispatcher);
    let api_base_url = web::Data::new(api_base_url);

    let server = HttpServer::new(move || {
        App::new()
            .wrap(TracingLogger::default())
            .route("/", web::get().to(home))
            .route("/health_check", web::get().to(health_check))
            .default_service(web::to(navigate))
            .app_data(dispatcher.clone())
            .app_data(api_base_url.clone())
    })
    .listen(listener)?
    .run();

    Ok(server)
}
