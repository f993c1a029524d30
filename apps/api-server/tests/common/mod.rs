//! Test harness: spawns the server against a fresh store, seeds it, tears it down.

pub mod fixtures;

use std::future::Future;
use std::net::TcpListener;
use std::panic::AssertUnwindSafe;
use std::sync::Arc;
use std::time::Duration;

use actix_web::dev::ServerHandle;
use futures::FutureExt;

use api_server::config::AppConfig;
use api_server::startup;
use api_server::state::{AppState, connect_posts};
use blog_core::domain::BlogPost;
use blog_core::ports::PostRepository;

/// Posts inserted before every scenario.
pub const SEED_COUNT: usize = 10;

/// A running server plus direct access to the store behind it.
#[derive(Clone)]
pub struct TestApp {
    pub address: String,
    pub client: reqwest::Client,
    pub store: Arc<dyn PostRepository>,
    pub seeded: Vec<BlogPost>,
    server: ServerHandle,
}

impl TestApp {
    /// Start a server on an ephemeral port and seed `SEED_COUNT` posts.
    ///
    /// Every app gets its own database so scenarios stay independent when
    /// run in parallel. Without a reachable MongoDB the in-memory store is used.
    pub async fn spawn() -> TestApp {
        init_test_tracing();

        let config = AppConfig::from_env();
        let mut db_config = config.test_database();
        db_config.database_name = Some(format!("blogTestDb_{}", uuid::Uuid::new_v4().simple()));
        db_config.connect_timeout = Duration::from_secs(1);

        let store = connect_posts(&db_config).await;
        let state = AppState::with_repository(store.clone(), Duration::from_secs(5));

        let listener = TcpListener::bind("127.0.0.1:0").expect("failed to bind random port");
        let port = listener.local_addr().unwrap().port();
        let server = startup::run(listener, state).expect("failed to build server");
        let handle = server.handle();
        tokio::spawn(server);

        let mut app = TestApp {
            address: format!("http://127.0.0.1:{}", port),
            client: reqwest::Client::new(),
            store,
            seeded: Vec::new(),
            server: handle,
        };
        app.seed().await;
        app
    }

    async fn seed(&mut self) {
        tracing::info!("seeding blog data");
        self.seeded = self
            .store
            .insert_many(fixtures::seed_data(SEED_COUNT))
            .await
            .expect("failed to seed posts");
    }

    pub fn url(&self, path: &str) -> String {
        format!("{}{}", self.address, path)
    }

    /// Run `scenario` against this app, then tear it down.
    ///
    /// Teardown also happens when the scenario panics; the panic is
    /// re-raised afterwards so the test still fails.
    pub async fn run<F, Fut>(self, scenario: F)
    where
        F: FnOnce(TestApp) -> Fut,
        Fut: Future<Output = ()>,
    {
        let outcome = AssertUnwindSafe(scenario(self.clone())).catch_unwind().await;
        self.teardown().await;

        if let Err(panic) = outcome {
            std::panic::resume_unwind(panic);
        }
    }

    /// Drop all fixture data and stop the server.
    pub async fn teardown(self) {
        tracing::warn!("Deleting database");
        self.store.clear().await.expect("failed to drop test data");
        self.server.stop(false).await;
    }
}

/// Spawn a fresh app and run `scenario` against it.
pub async fn scenario<F, Fut>(scenario: F)
where
    F: FnOnce(TestApp) -> Fut,
    Fut: Future<Output = ()>,
{
    TestApp::spawn().await.run(scenario).await;
}

fn init_test_tracing() {
    if std::env::var("TEST_LOG").is_ok() {
        let _ = tracing_subscriber::fmt()
            .with_env_filter("debug")
            .with_test_writer()
            .try_init();
    }
}
