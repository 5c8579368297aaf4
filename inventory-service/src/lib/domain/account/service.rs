use std::sync::Arc;

use async_trait::async_trait;
use auth::AuthenticationError;
use auth::Authenticator;
use auth::Claims;

use crate::domain::account::errors::AccountError;
use crate::domain::account::models::AccessToken;
use crate::domain::account::models::Account;
use crate::domain::account::models::Credentials;
use crate::domain::account::models::NewAccount;
use crate::domain::account::ports::AccountRepository;
use crate::domain::account::ports::AccountServicePort;

/// Domain service for registration and login.
pub struct AccountService<AR>
where
    AR: AccountRepository,
{
    repository: Arc<AR>,
    authenticator: Arc<Authenticator>,
}

impl<AR> AccountService<AR>
where
    AR: AccountRepository,
{
    /// Create a new account service.
    ///
    /// # Arguments
    /// * `repository` - Account persistence implementation
    /// * `authenticator` - Password hashing and token signing
    pub fn new(repository: Arc<AR>, authenticator: Arc<Authenticator>) -> Self {
        Self {
            repository,
            authenticator,
        }
    }
}

#[async_trait]
impl<AR> AccountServicePort for AccountService<AR>
where
    AR: AccountRepository,
{
    async fn register(&self, credentials: Credentials) -> Result<Account, AccountError> {
        let password_hash = self
            .authenticator
            .hash_password(credentials.password.expose())
            .map_err(|e| AccountError::Hashing(e.to_string()))?;

        let account = self
            .repository
            .create(NewAccount {
                username: credentials.username,
                password_hash,
            })
            .await?;

        tracing::info!(account_id = %account.id, username = %account.username, "Account registered");

        Ok(account)
    }

    async fn login(&self, credentials: Credentials) -> Result<AccessToken, AccountError> {
        let account = match self
            .repository
            .find_by_username(&credentials.username)
            .await?
        {
            Some(account) => account,
            None => {
                tracing::debug!(username = %credentials.username, "Login for unknown username");
                if let AuthenticationError::PasswordError(e) = self
                    .authenticator
                    .reject_unknown_account(credentials.password.expose())
                {
                    tracing::error!(error = %e, "Unknown-account verification failed");
                }
                return Err(AccountError::InvalidCredentials);
            }
        };

        let claims = Claims::for_admin(account.username.as_str(), self.authenticator.token_ttl());

        let result = self
            .authenticator
            .authenticate(
                credentials.password.expose(),
                &account.password_hash,
                &claims,
            )
            .map_err(|e| match e {
                AuthenticationError::InvalidCredentials => {
                    tracing::debug!(username = %account.username, "Login with wrong password");
                    AccountError::InvalidCredentials
                }
                AuthenticationError::PasswordError(err) => AccountError::Hashing(err.to_string()),
                AuthenticationError::JwtError(err) => AccountError::TokenIssuance(err.to_string()),
            })?;

        tracing::info!(username = %account.username, "Login succeeded");

        Ok(AccessToken {
            token: result.access_token,
            expires_at: result.expires_at,
        })
    }
}
