use std::sync::Arc;

use async_trait::async_trait;
use auth::Authenticator;

use crate::domain::user::models::LoginResult;
use crate::domain::user::models::NewUser;
use crate::domain::user::models::RegisterUserCommand;
use crate::domain::user::models::User;
use crate::domain::user::models::UserId;
use crate::domain::user::models::Username;
use crate::user::errors::UserError;
use crate::user::ports::UserRepository;
use crate::user::ports::UserServicePort;

/// Domain service implementation for user operations.
///
/// Registration hashes passwords before they reach the repository; login
/// verifies against the stored record and only then issues a token.
pub struct UserService<UR>
where
    UR: UserRepository,
{
    repository: Arc<UR>,
    authenticator: Arc<Authenticator>,
}

impl<UR> UserService<UR>
where
    UR: UserRepository,
{
    /// Create a new user service with injected dependencies.
    ///
    /// # Arguments
    /// * `repository` - User persistence implementation
    /// * `authenticator` - Credential hasher and token issuer
    pub fn new(repository: Arc<UR>, authenticator: Arc<Authenticator>) -> Self {
        Self {
            repository,
            authenticator,
        }
    }
}

#[async_trait]
impl<UR> UserServicePort for UserService<UR>
where
    UR: UserRepository,
{
    async fn register(&self, command: RegisterUserCommand) -> Result<User, UserError> {
        if self
            .repository
            .find_by_username(&command.username)
            .await?
            .is_some()
        {
            return Err(UserError::UsernameAlreadyExists(
                command.username.to_string(),
            ));
        }

        let password_hash = self
            .authenticator
            .hash_password(command.password.expose())?;

        let user = self
            .repository
            .create(NewUser {
                username: command.username,
                password_hash,
            })
            .await?;

        tracing::info!(user_id = %user.id, username = %user.username, "User registered");

        Ok(user)
    }

    async fn login(&self, username: &Username, password: &str) -> Result<LoginResult, UserError> {
        let user = self
            .repository
            .find_by_username(username)
            .await?
            .ok_or(UserError::InvalidCredentials)?;

        let result = self
            .authenticator
            .authenticate(
                password,
                &user.password_hash,
                user.id.0,
                user.username.as_str(),
            )
            .map_err(|e| {
                tracing::warn!(user_id = %user.id, error = %e, "Login rejected");
                UserError::from(e)
            })?;

        tracing::info!(user_id = %user.id, "User logged in");

        Ok(LoginResult {
            user,
            token: result.access_token,
        })
    }

    async fn get_user(&self, id: &UserId) -> Result<User, UserError> {
        self.repository
            .find_by_id(id)
            .await?
            .ok_or(UserError::NotFound(id.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use auth::DigestScheme;
    use auth::PasswordHasher;
    use auth::SigningKeys;
    use auth::TokenCodec;
    use chrono::Utc;
    use mockall::mock;

    use super::*;
    use crate::domain::user::models::Password;

    mock! {
        pub TestUserRepository {}

        #[async_trait]
        impl UserRepository for TestUserRepository {
            async fn create(&self, user: NewUser) -> Result<User, UserError>;
            async fn find_by_id(&self, id: &UserId) -> Result<Option<User>, UserError>;
            async fn find_by_username(&self, username: &Username) -> Result<Option<User>, UserError>;
        }
    }

    fn authenticator() -> Arc<Authenticator> {
        Arc::new(Authenticator::new(
            TokenCodec::new(SigningKeys::new(b"test_secret_key_at_least_32_bytes!".to_vec())),
            PasswordHasher::new(DigestScheme::Sha256),
        ))
    }

    fn stored_user(id: i64, username: &str, password_hash: String) -> User {
        User {
            id: UserId(id),
            username: Username::new(username.to_string()).unwrap(),
            password_hash,
            created_at: Utc::now(),
            updated_at: Utc::now(),
        }
    }

    #[tokio::test]
    async fn test_register_success() {
        let mut repository = MockTestUserRepository::new();

        repository
            .expect_find_by_username()
            .times(1)
            .returning(|_| Ok(None));

        repository
            .expect_create()
            .withf(|user| {
                user.username.as_str() == "testuser"
                    && user.password_hash.len() == 64
                    && user.password_hash != "password123"
            })
            .times(1)
            .returning(|user| Ok(stored_user(1, user.username.as_str(), user.password_hash)));

        let authenticator = authenticator();
        let service = UserService::new(Arc::new(repository), Arc::clone(&authenticator));

        let command = RegisterUserCommand::new(
            Username::new("testuser".to_string()).unwrap(),
            Password::new("password123".to_string()).unwrap(),
        );

        let user = service.register(command).await.expect("Register failed");
        assert_eq!(user.id, UserId(1));
        assert!(authenticator
            .verify_password(&user.password_hash, "password123")
            .unwrap());
    }

    #[tokio::test]
    async fn test_register_duplicate_username() {
        let mut repository = MockTestUserRepository::new();

        repository
            .expect_find_by_username()
            .times(1)
            .returning(|username| Ok(Some(stored_user(1, username.as_str(), String::new()))));
        repository.expect_create().times(0);

        let service = UserService::new(Arc::new(repository), authenticator());

        let command = RegisterUserCommand::new(
            Username::new("testuser".to_string()).unwrap(),
            Password::new("password123".to_string()).unwrap(),
        );

        let result = service.register(command).await;
        assert!(matches!(
            result.unwrap_err(),
            UserError::UsernameAlreadyExists(_)
        ));
    }

    #[tokio::test]
    async fn test_login_success() {
        let authenticator = authenticator();
        let hash = authenticator.hash_password("correct-horse").unwrap();

        let mut repository = MockTestUserRepository::new();
        repository
            .expect_find_by_username()
            .times(1)
            .returning(move |username| Ok(Some(stored_user(5, username.as_str(), hash.clone()))));

        let service = UserService::new(Arc::new(repository), Arc::clone(&authenticator));

        let username = Username::new("alice".to_string()).unwrap();
        let result = service
            .login(&username, "correct-horse")
            .await
            .expect("Login failed");

        let header = format!("Bearer {}", result.token);
        let claims = authenticator.gate().authenticate(Some(&header)).unwrap();
        assert_eq!(claims.user_id, 5);
        assert_eq!(claims.username, "alice");
        assert_eq!(result.user.id, UserId(5));
    }

    #[tokio::test]
    async fn test_login_wrong_password() {
        let authenticator = authenticator();
        let hash = authenticator.hash_password("correct-horse").unwrap();

        let mut repository = MockTestUserRepository::new();
        repository
            .expect_find_by_username()
            .times(1)
            .returning(move |username| Ok(Some(stored_user(5, username.as_str(), hash.clone()))));

        let service = UserService::new(Arc::new(repository), authenticator);

        let username = Username::new("alice".to_string()).unwrap();
        let result = service.login(&username, "wrong").await;

        assert!(matches!(result.unwrap_err(), UserError::InvalidCredentials));
    }

    #[tokio::test]
    async fn test_login_unknown_user() {
        let mut repository = MockTestUserRepository::new();
        repository
            .expect_find_by_username()
            .times(1)
            .returning(|_| Ok(None));

        let service = UserService::new(Arc::new(repository), authenticator());

        let username = Username::new("nobody".to_string()).unwrap();
        let result = service.login(&username, "whatever").await;

        assert!(matches!(result.unwrap_err(), UserError::InvalidCredentials));
    }

    #[tokio::test]
    async fn test_login_corrupt_record() {
        let mut repository = MockTestUserRepository::new();
        repository
            .expect_find_by_username()
            .times(1)
            .returning(|username| Ok(Some(stored_user(5, username.as_str(), "c2hvcnQ=".to_string()))));

        let service = UserService::new(Arc::new(repository), authenticator());

        let username = Username::new("alice".to_string()).unwrap();
        let result = service.login(&username, "correct-horse").await;

        assert!(matches!(
            result.unwrap_err(),
            UserError::Credential(auth::PasswordError::InvalidRecordLength { .. })
        ));
    }

    #[tokio::test]
    async fn test_get_user_not_found() {
        let mut repository = MockTestUserRepository::new();
        repository
            .expect_find_by_id()
            .times(1)
            .returning(|_| Ok(None));

        let service = UserService::new(Arc::new(repository), authenticator());

        let result = service.get_user(&UserId(99)).await;
        assert!(matches!(result.unwrap_err(), UserError::NotFound(_)));
    }
}
