use std::sync::Arc;

use once_cell::sync::Lazy;
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::TcpStream;

use estate_admin::configuration::get_configuration;
use estate_admin::navigation::LazyTable;
use estate_admin::startup::Application;
use estate_admin::telemetry::{get_log_subscriber, init_log_subscriber};

// Ensure that the `tracing` stack is only initialised once using `once_cell`
static TRACING: Lazy<()> = Lazy::new(|| {
    let default_filter_level = "info".to_string();
    let subscriber_name = "test".to_string();
    // We cannot assign the output of `get_log_subscriber` to a variable based on the value of `TEST_LOG`
    // because the sink is part of the type returned by `get_log_subscriber`, therefore they are not the
    // same type.
    if std::env::var("TEST_LOG").is_ok() {
        let subscriber = get_log_subscriber(subscriber_name, default_filter_level, std::io::stdout);
        init_log_subscriber(subscriber).expect("Failed to set up test logging");
    } else {
        let subscriber = get_log_subscriber(subscriber_name, default_filter_level, std::io::sink);
        init_log_subscriber(subscriber).expect("Failed to set up test logging");
    };
});

pub struct TestApp {
    pub address: String,
    pub port: u16,
    pub admin_table: Arc<LazyTable>,
    pub api_client: reqwest::Client,
}

impl TestApp {
    pub async fn get(&self, path: &str) -> reqwest::Response {
        self.api_client
            .get(&format!("{}{}", &self.address, path))
            .send()
            .await
            .expect("Failed to execute request.")
    }

    pub async fn get_html(&self, path: &str) -> String {
        self.get(path).await.text().await.unwrap()
    }

    /// Sends `path` exactly as given, bypassing the client's URL normalisation.
    pub async fn get_raw(&self, path: &str) -> String {
        let mut stream = TcpStream::connect(("127.0.0.1", self.port))
            .await
            .expect("Failed to connect to the application.");
        let request = format!(
            "GET {} HTTP/1.1\r\nHost: 127.0.0.1\r\nConnection: close\r\n\r\n",
            path
        );
        stream
            .write_all(request.as_bytes())
            .await
            .expect("Failed to send raw request.");
        let mut response = String::new();
        stream
            .read_to_string(&mut response)
            .await
            .expect("Failed to read raw response.");
        response
    }

    pub async fn post(&self, path: &str) -> reqwest::Response {
        self.api_client
            .post(&format!("{}{}", &self.address, path))
            .send()
            .await
            .expect("Failed to execute request.")
    }
}

pub async fn spawn_app() -> TestApp {
    Lazy::force(&TRACING);

    // Randomise configuration to ensure test isolation
    let configuration = {
        let mut c = get_configuration().expect("Failed to read configuration.");
        // Use a random OS port
        c.application.port = 0;
        c.application.api_base_url = "http://api.test".into();
        c
    };

    let application = Application::build(configuration)
        .await
        .expect("Failed to build application.");
    let port = application.port();
    let address = format!("http://127.0.0.1:{}", port);
    let admin_table = application.admin_table();
    let _ = tokio::spawn(application.run_until_stopped());

    let api_client = reqwest::Client::builder()
        .redirect(reqwest::redirect::Policy::none())
        .build()
        .unwrap();

    TestApp {
        address,
        port,
        admin_table,
        api_client,
    }
}

pub fn assert_is_redirect_to(response: &reqwest::Response, location: &str) {
    assert_eq!(response.status().as_u16(), 303);
    assert_eq!(response.headers().get("Location").unwrap(), location);
}
