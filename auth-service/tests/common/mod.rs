use std::sync::Arc;

use auth_core::TokenIssuer;
use auth_service::domain::auth::service::AuthService;
use auth_service::inbound::http::router::create_router;
use auth_service::outbound::providers::InMemoryUserProvider;
use chrono::Duration;

pub const TEST_SECRET: &[u8] = b"test-secret-key-for-jwt-signing-at-least-32-bytes";

/// Test application that spawns a real server
pub struct TestApp {
    pub address: String,
    pub api_client: reqwest::Client,
}

impl TestApp {
    /// Spawn the application in a background task and return TestApp
    pub async fn spawn() -> Self {
        // Use random port (0 = OS assigns)
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
            .await
            .expect("Failed to bind random port");
        let port = listener.local_addr().unwrap().port();
        let address = format!("http://127.0.0.1:{}", port);

        let tokens = Arc::new(TokenIssuer::new(TEST_SECRET, Duration::minutes(15)));
        let provider = Arc::new(InMemoryUserProvider::new());
        let auth_service = Arc::new(AuthService::new(provider, Arc::clone(&tokens)));

        let application = create_router(auth_service, tokens);

        tokio::spawn(async move {
            axum::serve(listener, application)
                .await
                .expect("Server failed");
        });

        Self {
            address,
            api_client: reqwest::Client::new(),
        }
    }

    pub fn post(&self, path: &str) -> reqwest::RequestBuilder {
        self.api_client.post(format!("{}{}", self.address, path))
    }

    pub fn get(&self, path: &str) -> reqwest::RequestBuilder {
        self.api_client.get(format!("{}{}", self.address, path))
    }

    pub fn get_authenticated(&self, path: &str, token: &str) -> reqwest::RequestBuilder {
        self.get(path)
            .header("Authorization", format!("Bearer {}", token))
    }

    /// Mint a token signed with the app's secret but already expired.
    pub fn expired_token(&self, subject: &str, email: &str) -> String {
        TokenIssuer::new(TEST_SECRET, Duration::hours(-1))
            .issue(subject, email, &["user".to_string()])
            .expect("Failed to issue expired token")
    }
}
