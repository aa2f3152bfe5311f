use std::path::PathBuf;

use account_adapters::{
    Argon2CredentialHasher, HashMapUserStore, JwtTokenIssuer, MockMediaHost,
    config::{ApplicationSettings, AuthSettings, HashingSettings, JwtSettings, constants},
};
use account_axum::{AppState, CookieNames};
use account_service::{AccountApi, USERS_PATH};
use reqwest::{
    Response,
    multipart::{Form, Part},
};
use secrecy::Secret;
use serde_json::Value;
use tempfile::TempDir;

pub struct TestApp {
    pub address: String,
    pub http_client: reqwest::Client,
    pub media_host: MockMediaHost,
    pub upload_dir: PathBuf,
    _public_dir: TempDir,
}

impl TestApp {
    pub async fn new() -> Self {
        let public_dir = tempfile::tempdir().unwrap();
        let upload_dir = public_dir.path().join("temp");

        let user_store = HashMapUserStore::new();
        let media_host = MockMediaHost::new();
        let hasher = Argon2CredentialHasher::new(&HashingSettings {
            memory_size_kib: 4096,
            iterations: 1,
            parallelism: 1,
        })
        .unwrap();
        let jwt = |secret: &str, cookie_name: &str| JwtSettings {
            cookie_name: cookie_name.to_string(),
            secret: Secret::new(secret.to_string()),
            time_to_live: 600,
        };
        let auth = AuthSettings {
            access_token: jwt("test-access-secret", constants::ACCESS_TOKEN_COOKIE_NAME),
            refresh_token: jwt("test-refresh-secret", constants::REFRESH_TOKEN_COOKIE_NAME),
        };

        let state = AppState::new(
            user_store.clone(),
            user_store,
            hasher,
            JwtTokenIssuer::new(&auth),
            media_host.clone(),
            CookieNames {
                access: constants::ACCESS_TOKEN_COOKIE_NAME.to_string(),
                refresh: constants::REFRESH_TOKEN_COOKIE_NAME.to_string(),
            },
            upload_dir.clone(),
        );
        let settings = ApplicationSettings {
            address: constants::test::APP_ADDRESS.to_string(),
            public_dir: public_dir.path().to_path_buf(),
            upload_dir: upload_dir.clone(),
            json_body_limit: constants::JSON_BODY_LIMIT_BYTES,
            upload_body_limit: constants::UPLOAD_BODY_LIMIT_BYTES,
            allowed_origins: Default::default(),
        };

        let listener = tokio::net::TcpListener::bind(constants::test::APP_ADDRESS)
            .await
            .unwrap();
        let address = format!("http://{}", listener.local_addr().unwrap());

        let api = AccountApi::new(state, &settings);
        let _ = tokio::spawn(api.run_standalone(listener, None));

        Self {
            address,
            http_client: reqwest::Client::new(),
            media_host,
            upload_dir,
            _public_dir: public_dir,
        }
    }

    pub fn url(&self, path: &str) -> String {
        format!("{}{USERS_PATH}{path}", self.address)
    }

    pub async fn register(&self, form: Form) -> Response {
        self.http_client
            .post(self.url("/register"))
            .multipart(form)
            .send()
            .await
            .expect("Failed to execute request.")
    }

    pub async fn post_json(&self, path: &str, body: &Value, token: Option<&str>) -> Response {
        let mut request = self.http_client.post(self.url(path)).json(body);
        if let Some(token) = token {
            request = request.bearer_auth(token);
        }
        request.send().await.expect("Failed to execute request.")
    }

    pub async fn patch_json(&self, path: &str, body: &Value, token: &str) -> Response {
        self.http_client
            .patch(self.url(path))
            .bearer_auth(token)
            .json(body)
            .send()
            .await
            .expect("Failed to execute request.")
    }

    pub async fn patch_multipart(&self, path: &str, form: Form, token: &str) -> Response {
        self.http_client
            .patch(self.url(path))
            .bearer_auth(token)
            .multipart(form)
            .send()
            .await
            .expect("Failed to execute request.")
    }

    pub async fn get(&self, path: &str, token: Option<&str>) -> Response {
        let mut request = self.http_client.get(self.url(path));
        if let Some(token) = token {
            request = request.bearer_auth(token);
        }
        request.send().await.expect("Failed to execute request.")
    }

    pub async fn post_empty(&self, path: &str, token: Option<&str>) -> Response {
        let mut request = self.http_client.post(self.url(path));
        if let Some(token) = token {
            request = request.bearer_auth(token);
        }
        request.send().await.expect("Failed to execute request.")
    }

    /// Registers a user and logs them in, returning `(access, refresh)`.
    pub async fn signed_in(&self, username: &str, email: &str, password: &str) -> (String, String) {
        let response = self
            .register(registration_form(username, email, password))
            .await;
        assert_eq!(response.status().as_u16(), 201);

        let response = self
            .post_json(
                "/login",
                &serde_json::json!({ "username": username, "password": password }),
                None,
            )
            .await;
        assert_eq!(response.status().as_u16(), 200);
        let body = json_body(response).await;
        (
            body["data"]["accessToken"].as_str().unwrap().to_string(),
            body["data"]["refreshToken"].as_str().unwrap().to_string(),
        )
    }

    pub fn leftover_uploads(&self) -> usize {
        std::fs::read_dir(&self.upload_dir)
            .map(|entries| entries.count())
            .unwrap_or(0)
    }
}

pub fn image() -> Part {
    Part::bytes(b"\x89PNG fake image".to_vec()).file_name("image.png")
}

pub fn registration_form(username: &str, email: &str, password: &str) -> Form {
    Form::new()
        .text("fullName", "Jane Doe")
        .text("username", username.to_string())
        .text("email", email.to_string())
        .text("password", password.to_string())
        .part("avatar", image())
}

pub async fn json_body(response: Response) -> Value {
    response
        .json::<Value>()
        .await
        .expect("Failed to parse response body")
}
