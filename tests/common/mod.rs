#![allow(dead_code)]

use recipebook::config::ApiConfig;
use recipebook::service::ApiClient;
use recipebook::service::ReloadSignal;
use recipebook::service::SessionStore;
use tempfile::TempDir;
use wiremock::MockServer;

/// A client wired to a mock backend, with its session file in a scratch directory.
pub struct TestBackend {
    pub server: MockServer,
    pub config: ApiConfig,
    pub session: SessionStore,
    pub reload: ReloadSignal,
    pub client: ApiClient,
    _dir: TempDir,
}

impl TestBackend {
    pub async fn start() -> Self {
        let server = MockServer::start().await;
        let config = ApiConfig {
            base_url: server.uri(),
            ..ApiConfig::default()
        };
        let dir = tempfile::tempdir().expect("temp dir");
        let session = SessionStore::new(dir.path().join("session.json"));
        let reload = ReloadSignal::new();
        let client = ApiClient::new(&config, session.clone(), reload.clone()).expect("client");

        Self {
            server,
            config,
            session,
            reload,
            client,
            _dir: dir,
        }
    }
}
