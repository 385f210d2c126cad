//! Common Test Utilities
//!
//! Shared helpers, fixtures, and test infrastructure.

use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use axum::{
    body::Body,
    http::{Request, Response},
    Router,
};
use chrono::Utc;
use jsonwebtoken::{encode, EncodingKey, Header};
use tower::ServiceExt;

use pool_predictions::config::{
    DatabaseSettings, JwtSettings, NicknameSettings, ServerSettings, Settings,
};
use pool_predictions::domain::{
    MembershipStatus, PoolMembership, PoolMembershipRepository, User, UserRepository,
};
use pool_predictions::presentation::http::routes;
use pool_predictions::presentation::middleware::Claims;
use pool_predictions::shared::error::AppError;
use pool_predictions::startup::AppState;

pub const TEST_JWT_SECRET: &str = "test-secret-that-is-at-least-32-characters";

/// User repository backed by a map, with a unique nickname constraint.
#[derive(Default)]
pub struct InMemoryUserRepository {
    users: Mutex<HashMap<i64, User>>,
}

impl InMemoryUserRepository {
    pub fn insert(&self, user: User) {
        self.users.lock().unwrap().insert(user.id, user);
    }

    pub fn get(&self, id: i64) -> Option<User> {
        self.users.lock().unwrap().get(&id).cloned()
    }
}

#[async_trait]
impl UserRepository for InMemoryUserRepository {
    async fn find_by_id(&self, id: i64) -> Result<Option<User>, AppError> {
        Ok(self.get(id))
    }

    async fn update(&self, user: &User) -> Result<User, AppError> {
        let mut users = self.users.lock().unwrap();

        if let Some(nickname) = user.nickname.as_deref() {
            let taken = users
                .values()
                .any(|other| other.id != user.id && other.nickname.as_deref() == Some(nickname));
            if taken {
                return Err(AppError::Conflict("users_nickname_key".into()));
            }
        }

        match users.get_mut(&user.id) {
            Some(stored) => {
                *stored = user.clone();
                Ok(user.clone())
            }
            None => Err(AppError::NotFound(format!("User with id {} not found", user.id))),
        }
    }
}

/// Pool membership repository backed by a map keyed on (pool, user).
#[derive(Default)]
pub struct InMemoryPoolMembershipRepository {
    memberships: Mutex<HashMap<(i64, i64), PoolMembership>>,
    updates: Mutex<usize>,
}

impl InMemoryPoolMembershipRepository {
    pub fn insert(&self, membership: PoolMembership) {
        self.memberships
            .lock()
            .unwrap()
            .insert((membership.pool_id, membership.user_id), membership);
    }

    pub fn get(&self, pool_id: i64, user_id: i64) -> Option<PoolMembership> {
        self.memberships.lock().unwrap().get(&(pool_id, user_id)).cloned()
    }

    pub fn update_count(&self) -> usize {
        *self.updates.lock().unwrap()
    }
}

#[async_trait]
impl PoolMembershipRepository for InMemoryPoolMembershipRepository {
    async fn find(&self, pool_id: i64, user_id: i64) -> Result<Option<PoolMembership>, AppError> {
        Ok(self.get(pool_id, user_id))
    }

    async fn update(&self, membership: &PoolMembership) -> Result<PoolMembership, AppError> {
        *self.updates.lock().unwrap() += 1;
        self.insert(membership.clone());
        Ok(membership.clone())
    }
}

/// Test application builder
pub struct TestApp {
    pub router: Router,
    pub users: Arc<InMemoryUserRepository>,
    pub memberships: Arc<InMemoryPoolMembershipRepository>,
}

impl TestApp {
    /// Create a new test application over in-memory repositories
    pub fn new() -> Self {
        let users = Arc::new(InMemoryUserRepository::default());
        let memberships = Arc::new(InMemoryPoolMembershipRepository::default());

        let state = AppState::new(test_settings(), users.clone(), memberships.clone()).unwrap();

        Self {
            router: routes::create_router(state),
            users,
            memberships,
        }
    }

    /// Store a user with the given id and nickname.
    pub fn seed_user(&self, id: i64, nickname: Option<&str>) {
        self.users.insert(User {
            id,
            email: format!("user{}@example.com", id),
            nickname: nickname.map(str::to_string),
            ..User::default()
        });
    }

    /// Store a membership in the given state.
    pub fn seed_membership(&self, pool_id: i64, user_id: i64, status: MembershipStatus) {
        let mut membership = PoolMembership::invited(pool_id, user_id);
        membership.status = status;
        self.memberships.insert(membership);
    }

    /// Mint a valid bearer token for a user
    pub fn token_for(&self, user_id: i64) -> String {
        let now = Utc::now().timestamp();
        let claims = Claims {
            sub: user_id.to_string(),
            exp: now + 3600,
            iat: now,
            roles: vec!["member".to_string()],
        };

        encode(
            &Header::default(),
            &claims,
            &EncodingKey::from_secret(TEST_JWT_SECRET.as_bytes()),
        )
        .unwrap()
    }

    /// Make a GET request to the application
    pub async fn get(&self, uri: &str) -> Response<Body> {
        self.send(Request::builder().method("GET").uri(uri).body(Body::empty()).unwrap())
            .await
    }

    /// Make a request with a JSON body, optionally authenticated
    pub async fn json(
        &self,
        method: &str,
        uri: &str,
        body: &str,
        token: Option<&str>,
    ) -> Response<Body> {
        let mut builder = Request::builder()
            .method(method)
            .uri(uri)
            .header("Content-Type", "application/json");

        if let Some(token) = token {
            builder = builder.header("Authorization", format!("Bearer {}", token));
        }

        self.send(builder.body(Body::from(body.to_string())).unwrap())
            .await
    }

    async fn send(&self, request: Request<Body>) -> Response<Body> {
        self.router.clone().oneshot(request).await.unwrap()
    }
}

/// Read a response body as JSON
pub async fn body_json(response: Response<Body>) -> serde_json::Value {
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    serde_json::from_slice(&bytes).unwrap()
}

fn test_settings() -> Settings {
    Settings {
        server: ServerSettings {
            host: "127.0.0.1".to_string(),
            port: 0,
        },
        database: DatabaseSettings {
            url: "postgres://localhost/pool_predictions_test".to_string(),
            max_connections: 1,
            min_connections: 0,
            acquire_timeout: 1,
        },
        jwt: JwtSettings {
            secret: TEST_JWT_SECRET.to_string(),
        },
        nickname: NicknameSettings::default(),
        environment: "test".to_string(),
    }
}
