use std::sync::Arc;

use auth::Authenticator;
use auth::Claims;
use auth::JwtHandler;
use kitten_service::domain::kitten::ports::KittenServicePort;
use kitten_service::domain::kitten::service::KittenService;
use kitten_service::domain::user::ports::UserServicePort;
use kitten_service::domain::user::service::UserService;
use kitten_service::inbound::http::router::create_router;
use kitten_service::outbound::repositories::MemoryKittenRepository;
use kitten_service::outbound::repositories::MemoryUserRepository;

pub const TEST_JWT_SECRET: &[u8] = b"test-secret-key-for-jwt-signing-at-least-32-bytes";

/// Test application backed by the in-memory repositories, spawned on a
/// random loopback port.
pub struct TestApp {
    pub address: String,
    pub api_client: reqwest::Client,
    pub jwt_handler: JwtHandler,
    pub kitten_repo: Arc<MemoryKittenRepository>,
}

impl TestApp {
    /// Spawn the application in a background task and return TestApp
    pub async fn spawn() -> Self {
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
            .await
            .expect("Failed to bind random port");
        let port = listener.local_addr().unwrap().port();
        let address = format!("http://127.0.0.1:{}", port);

        let user_repo = Arc::new(MemoryUserRepository::new());
        let kitten_repo = Arc::new(MemoryKittenRepository::new());

        let user_service: Arc<dyn UserServicePort> = Arc::new(UserService::new(user_repo));
        let kitten_service: Arc<dyn KittenServicePort> =
            Arc::new(KittenService::new(Arc::clone(&kitten_repo)));

        let authenticator = Arc::new(Authenticator::new(TEST_JWT_SECRET));

        let router = create_router(user_service, kitten_service, authenticator, 24);

        tokio::spawn(async move {
            axum::serve(listener, router).await.expect("Server error");
        });

        Self {
            address,
            api_client: reqwest::Client::new(),
            jwt_handler: JwtHandler::new(TEST_JWT_SECRET),
            kitten_repo,
        }
    }

    /// Helper to make GET request
    pub fn get(&self, path: &str) -> reqwest::RequestBuilder {
        self.api_client.get(format!("{}{}", self.address, path))
    }

    /// Helper to make POST request
    pub fn post(&self, path: &str) -> reqwest::RequestBuilder {
        self.api_client.post(format!("{}{}", self.address, path))
    }

    /// Helper to make GET request with Bearer token
    pub fn get_authenticated(&self, path: &str, token: &str) -> reqwest::RequestBuilder {
        self.get(path).bearer_auth(token)
    }

    /// Helper to make POST request with Bearer token
    pub fn post_authenticated(&self, path: &str, token: &str) -> reqwest::RequestBuilder {
        self.post(path).bearer_auth(token)
    }

    /// Helper to make DELETE request with Bearer token
    pub fn delete_authenticated(&self, path: &str, token: &str) -> reqwest::RequestBuilder {
        self.api_client
            .delete(format!("{}{}", self.address, path))
            .bearer_auth(token)
    }

    /// Register a user through the API and return the issued token.
    pub async fn register(&self, username: &str, password: &str) -> String {
        let response = self
            .post("/register")
            .json(&serde_json::json!({ "username": username, "password": password }))
            .send()
            .await
            .expect("Failed to execute request");
        assert_eq!(response.status(), reqwest::StatusCode::OK);

        let body: serde_json::Value = response.json().await.expect("Failed to parse response");
        body["token"].as_str().expect("Missing token").to_string()
    }

    /// Decode a token issued by the app and return its subject (user id).
    pub fn subject_of(&self, token: &str) -> String {
        self.jwt_handler
            .decode(token)
            .expect("Failed to decode token")
            .sub
    }

    /// Token signed with the service secret but already expired.
    pub fn expired_token_for(&self, user_id: &str, username: &str) -> String {
        let mut claims = Claims::for_user(user_id, username.to_string(), 1);
        claims.iat -= 4 * 60 * 60;
        claims.exp -= 4 * 60 * 60;
        self.jwt_handler
            .encode(&claims)
            .expect("Failed to encode token")
    }

    /// Token for the given identity signed with the wrong secret.
    pub fn foreign_token_for(&self, user_id: &str, username: &str) -> String {
        let claims = Claims::for_user(user_id, username.to_string(), 24);
        JwtHandler::new(b"some-other-secret-also-32-bytes-long!!")
            .encode(&claims)
            .expect("Failed to encode token")
    }

    /// Token signed with the service secret for a user that does not exist.
    pub fn token_for_unknown_user(&self) -> String {
        let claims = Claims::for_user(uuid::Uuid::new_v4(), "ghost".to_string(), 24);
        self.jwt_handler
            .encode(&claims)
            .expect("Failed to encode token")
    }
}
