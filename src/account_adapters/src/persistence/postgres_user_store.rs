use account_core::{
    AccountUpdate, Email, FullName, MediaSlot, NewUser, PasswordHash, RefreshToken,
    SessionStore, SessionStoreError, User, UserId, UserStore, UserStoreError, Username,
};
use chrono::{DateTime, Utc};
use secrecy::{ExposeSecret, Secret};
use sqlx::{FromRow, PgPool};
use uuid::Uuid;

const USER_COLUMNS: &str = "id, full_name, username, email, avatar, cover_image, \
     password_hash, refresh_token, created_at, updated_at";

#[derive(Clone)]
pub struct PostgresUserStore {
    pool: PgPool,
}

impl PostgresUserStore {
    pub fn new(pool: PgPool) -> Self {
        PostgresUserStore { pool }
    }
}

#[derive(FromRow)]
struct UserRow {
    id: Uuid,
    full_name: String,
    username: String,
    email: String,
    avatar: String,
    cover_image: String,
    password_hash: String,
    refresh_token: Option<String>,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl TryFrom<UserRow> for User {
    type Error = UserStoreError;

    fn try_from(row: UserRow) -> Result<Self, Self::Error> {
        let invalid = |e: account_core::UserError| UserStoreError::UnexpectedError(e.to_string());
        Ok(User {
            id: UserId::from(row.id),
            full_name: FullName::try_from(row.full_name).map_err(invalid)?,
            username: Username::try_from(row.username).map_err(invalid)?,
            email: Email::try_from(row.email).map_err(invalid)?,
            avatar: row.avatar,
            cover_image: row.cover_image,
            password_hash: PasswordHash::new(Secret::from(row.password_hash)),
            refresh_token: row.refresh_token.map(RefreshToken::new),
            created_at: row.created_at,
            updated_at: row.updated_at,
        })
    }
}

fn map_write_error(e: sqlx::Error) -> UserStoreError {
    if let Some(db_err) = e.as_database_error() {
        if db_err.is_unique_violation() {
            return UserStoreError::UserAlreadyExists;
        }
    }
    UserStoreError::UnexpectedError(e.to_string())
}

fn fetched(row: Option<UserRow>) -> Result<User, UserStoreError> {
    row.ok_or(UserStoreError::UserNotFound)?.try_into()
}

#[async_trait::async_trait]
impl UserStore for PostgresUserStore {
    #[tracing::instrument(name = "Adding user to PostgreSQL", skip_all)]
    async fn add_user(&self, user: NewUser) -> Result<UserId, UserStoreError> {
        let id = UserId::new();

        sqlx::query(
            r#"
                INSERT INTO users (id, full_name, username, email, avatar, cover_image, password_hash)
                VALUES ($1, $2, $3, $4, $5, $6, $7)
            "#,
        )
        .bind(id.as_uuid())
        .bind(user.full_name.as_str())
        .bind(user.username.as_str())
        .bind(user.email.as_str())
        .bind(&user.avatar)
        .bind(&user.cover_image)
        .bind(user.password_hash.as_ref().expose_secret())
        .execute(&self.pool)
        .await
        .map_err(map_write_error)?;

        Ok(id)
    }

    #[tracing::instrument(name = "Retrieving user from PostgreSQL", skip_all)]
    async fn get_user(&self, id: &UserId) -> Result<User, UserStoreError> {
        let row = sqlx::query_as::<_, UserRow>(&format!(
            "SELECT {USER_COLUMNS} FROM users WHERE id = $1"
        ))
        .bind(id.as_uuid())
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| UserStoreError::UnexpectedError(e.to_string()))?;

        fetched(row)
    }

    #[tracing::instrument(name = "Finding user by username or email", skip_all)]
    async fn find_by_username_or_email(
        &self,
        username: Option<&Username>,
        email: Option<&Email>,
    ) -> Result<User, UserStoreError> {
        let row = sqlx::query_as::<_, UserRow>(&format!(
            "SELECT {USER_COLUMNS} FROM users WHERE username = $1 OR email = $2 LIMIT 1"
        ))
        .bind(username.map(Username::as_str))
        .bind(email.map(Email::as_str))
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| UserStoreError::UnexpectedError(e.to_string()))?;

        fetched(row)
    }

    #[tracing::instrument(name = "Set new password hash", skip_all)]
    async fn set_password_hash(
        &self,
        id: &UserId,
        password_hash: PasswordHash,
    ) -> Result<(), UserStoreError> {
        let result = sqlx::query(
            r#"
                UPDATE users
                SET password_hash = $2, updated_at = now()
                WHERE id = $1
            "#,
        )
        .bind(id.as_uuid())
        .bind(password_hash.as_ref().expose_secret())
        .execute(&self.pool)
        .await
        .map_err(|e| UserStoreError::UnexpectedError(e.to_string()))?;

        if result.rows_affected() == 0 {
            return Err(UserStoreError::UserNotFound);
        }
        Ok(())
    }

    #[tracing::instrument(name = "Updating account details in PostgreSQL", skip_all)]
    async fn update_account(
        &self,
        id: &UserId,
        update: AccountUpdate,
    ) -> Result<User, UserStoreError> {
        let row = sqlx::query_as::<_, UserRow>(&format!(
            r#"
                UPDATE users
                SET full_name = COALESCE($2, full_name),
                    email = COALESCE($3, email),
                    username = COALESCE($4, username),
                    updated_at = now()
                WHERE id = $1
                RETURNING {USER_COLUMNS}
            "#
        ))
        .bind(id.as_uuid())
        .bind(update.full_name.as_ref().map(FullName::as_str))
        .bind(update.email.as_ref().map(Email::as_str))
        .bind(update.username.as_ref().map(Username::as_str))
        .fetch_optional(&self.pool)
        .await
        .map_err(map_write_error)?;

        fetched(row)
    }

    #[tracing::instrument(name = "Updating profile image in PostgreSQL", skip_all)]
    async fn set_media(
        &self,
        id: &UserId,
        slot: MediaSlot,
        url: String,
    ) -> Result<User, UserStoreError> {
        let column = match slot {
            MediaSlot::Avatar => "avatar",
            MediaSlot::CoverImage => "cover_image",
        };

        let row = sqlx::query_as::<_, UserRow>(&format!(
            "UPDATE users SET {column} = $2, updated_at = now() WHERE id = $1 \
             RETURNING {USER_COLUMNS}"
        ))
        .bind(id.as_uuid())
        .bind(url)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| UserStoreError::UnexpectedError(e.to_string()))?;

        fetched(row)
    }
}

#[async_trait::async_trait]
impl SessionStore for PostgresUserStore {
    #[tracing::instrument(name = "Persisting refresh token", skip_all)]
    async fn persist(
        &self,
        subject: &UserId,
        token: &RefreshToken,
    ) -> Result<(), SessionStoreError> {
        let result = sqlx::query("UPDATE users SET refresh_token = $2 WHERE id = $1")
            .bind(subject.as_uuid())
            .bind(token.as_str())
            .execute(&self.pool)
            .await
            .map_err(|e| SessionStoreError::UnexpectedError(e.to_string()))?;

        if result.rows_affected() == 0 {
            return Err(SessionStoreError::UserNotFound);
        }
        Ok(())
    }

    #[tracing::instrument(name = "Clearing refresh token", skip_all)]
    async fn clear(&self, subject: &UserId) -> Result<(), SessionStoreError> {
        sqlx::query("UPDATE users SET refresh_token = NULL WHERE id = $1")
            .bind(subject.as_uuid())
            .execute(&self.pool)
            .await
            .map_err(|e| SessionStoreError::UnexpectedError(e.to_string()))?;
        Ok(())
    }

    #[tracing::instrument(name = "Reading refresh token", skip_all)]
    async fn current_of(
        &self,
        subject: &UserId,
    ) -> Result<Option<RefreshToken>, SessionStoreError> {
        let token = sqlx::query_scalar::<_, Option<String>>(
            "SELECT refresh_token FROM users WHERE id = $1",
        )
        .bind(subject.as_uuid())
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| SessionStoreError::UnexpectedError(e.to_string()))?;

        Ok(token.flatten().map(RefreshToken::new))
    }
}
