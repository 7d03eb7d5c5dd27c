//! Registration workflow implementation

use std::sync::Arc;

use ud_shared::phone::mask_phone_number;

use crate::domain::entities::user::{NewUser, User};
use crate::errors::{AdmissionError, DomainError, DomainResult, ProcessingError};
use crate::repositories::{PositionRepository, UserRepository};
use crate::services::photo::PhotoPipeline;
use crate::services::token::TokenStore;

use super::config::RegistrationServiceConfig;
use super::types::RegistrationCandidate;
use super::validation::RegistrationValidator;

/// Registration service admitting, validating and persisting new users
pub struct RegistrationService {
    /// Single-slot admission token store
    tokens: Arc<dyn TokenStore>,
    /// User persistence
    users: Arc<dyn UserRepository>,
    /// Field rules backed by the directory
    validator: RegistrationValidator,
    /// Photo storage and optimization
    photos: Arc<PhotoPipeline>,
    /// Service configuration
    config: RegistrationServiceConfig,
}

impl RegistrationService {
    /// Create a new registration service
    ///
    /// # Arguments
    ///
    /// * `tokens` - Store holding the live admission token
    /// * `users` - User repository
    /// * `positions` - Position repository used to validate `position_id`
    /// * `photos` - Photo pipeline
    /// * `config` - Service configuration
    pub fn new(
        tokens: Arc<dyn TokenStore>,
        users: Arc<dyn UserRepository>,
        positions: Arc<dyn PositionRepository>,
        photos: Arc<PhotoPipeline>,
        config: RegistrationServiceConfig,
    ) -> Self {
        let validator = RegistrationValidator::new(users.clone(), positions);
        Self {
            tokens,
            users,
            validator,
            photos,
            config,
        }
    }

    /// Check a bearer credential against the live token
    ///
    /// A blank credential counts as missing.
    pub async fn admit(&self, bearer: Option<&str>) -> DomainResult<()> {
        self.check_token(credential(bearer)?).await
    }

    async fn check_token(&self, candidate: &str) -> DomainResult<()> {
        if self.tokens.validate(candidate).await? {
            Ok(())
        } else {
            tracing::warn!(event = "registration_rejected", reason = "invalid_token");
            Err(AdmissionError::InvalidOrExpiredToken.into())
        }
    }

    /// Register a new user
    ///
    /// This method:
    /// 1. Checks the bearer credential against the live token
    /// 2. Validates every field, collecting all violations
    /// 3. Stores and optimizes the photo
    /// 4. Consumes the token; of concurrent registrations presenting the
    ///    same token only one gets past this point
    /// 5. Inserts the user row, handing the token back if the insert fails
    ///
    /// # Returns
    ///
    /// * `Ok(User)` - The created user, joined with its position name
    /// * `Err(DomainError::Admission)` - Missing or non-matching token
    /// * `Err(DomainError::Validation)` - One or more fields are invalid
    /// * `Err(DomainError::Processing)` - Photo or persistence stage failed
    pub async fn register(
        &self,
        candidate: RegistrationCandidate,
        bearer: Option<&str>,
    ) -> DomainResult<User> {
        let token = credential(bearer)?;
        self.check_token(token).await?;

        let validated = match self.validator.validate(candidate).await {
            Ok(validated) => validated,
            Err(e) => {
                if let DomainError::Validation(ref validation) = e {
                    tracing::info!(
                        event = "registration_invalid",
                        fields = %validation
                            .field_errors()
                            .map(ToString::to_string)
                            .unwrap_or_default(),
                        "Registration failed validation"
                    );
                }
                return Err(e);
            }
        };

        let stored = self.photos.store_and_optimize(&validated.photo).await?;

        let consumed = match self.tokens.consume(token).await {
            Ok(Some(consumed)) => consumed,
            Ok(None) => {
                tracing::warn!(
                    event = "registration_rejected",
                    reason = "token_already_used",
                    "Registration token was consumed or replaced while processing"
                );
                self.photos.discard(&stored).await;
                return Err(AdmissionError::InvalidOrExpiredToken.into());
            }
            Err(e) => {
                self.photos.discard(&stored).await;
                return Err(e);
            }
        };

        let new_user = NewUser::new(
            validated.name,
            validated.email,
            validated.phone,
            validated.position_id,
            stored.reference.clone(),
        );

        let user = match self.users.create(new_user).await {
            Ok(user) => user,
            Err(e) => {
                let message = match e {
                    DomainError::Internal { message } => message,
                    other => other.to_string(),
                };
                tracing::error!(
                    error = %message,
                    photo = %stored.reference,
                    event = "registration_failed",
                    stage = "persistence",
                    "Failed to create user"
                );
                if self.config.discard_orphaned_photos {
                    self.photos.discard(&stored).await;
                }
                if let Err(e) = self.tokens.restore(consumed).await {
                    tracing::warn!(
                        error = %e,
                        event = "registration_token_restore_failed",
                        "Failed to hand the registration token back"
                    );
                }
                return Err(ProcessingError::Persistence { message }.into());
            }
        };

        tracing::info!(
            user_id = user.id,
            phone = %mask_phone_number(&user.phone),
            event = "user_registered",
            "User registered"
        );

        Ok(user)
    }
}

/// Trimmed bearer credential; blank or absent is `MissingToken`
fn credential(bearer: Option<&str>) -> DomainResult<&str> {
    match bearer.map(str::trim) {
        Some(token) if !token.is_empty() => Ok(token),
        _ => Err(AdmissionError::MissingToken.into()),
    }
}
