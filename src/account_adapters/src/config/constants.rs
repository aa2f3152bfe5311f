pub mod env {
    pub const APP_ENVIRONMENT_ENV_VAR: &str = "APP_ENVIRONMENT";
    pub const ACCESS_TOKEN_SECRET_ENV_VAR: &str = "ACCESS_TOKEN_SECRET";
    pub const ACCESS_TOKEN_EXPIRY_ENV_VAR: &str = "ACCESS_TOKEN_EXPIRY";
    pub const REFRESH_TOKEN_SECRET_ENV_VAR: &str = "REFRESH_TOKEN_SECRET";
    pub const REFRESH_TOKEN_EXPIRY_ENV_VAR: &str = "REFRESH_TOKEN_EXPIRY";
    pub const DATABASE_URL_ENV_VAR: &str = "DATABASE_URL";
    pub const CORS_ORIGIN_ENV_VAR: &str = "CORS_ORIGIN";
    pub const CLOUDINARY_CLOUD_NAME_ENV_VAR: &str = "CLOUDINARY_CLOUD_NAME";
    pub const CLOUDINARY_API_KEY_ENV_VAR: &str = "CLOUDINARY_API_KEY";
    pub const CLOUDINARY_API_SECRET_ENV_VAR: &str = "CLOUDINARY_API_SECRET";
}

pub const CONFIG_DIR: &str = "config";
pub const BASE_CONFIG_FILE: &str = "base.json";
pub const DEFAULT_ENVIRONMENT: &str = "local";
pub const ENV_PREFIX: &str = "APP";
pub const ENV_SEPARATOR: &str = "__";

pub const ACCESS_TOKEN_COOKIE_NAME: &str = "accessToken";
pub const REFRESH_TOKEN_COOKIE_NAME: &str = "refreshToken";
pub const ACCESS_TOKEN_TTL_SECONDS: i64 = 15 * 60;
pub const REFRESH_TOKEN_TTL_SECONDS: i64 = 10 * 24 * 60 * 60;

pub const PUBLIC_DIR: &str = "public";
pub const UPLOAD_DIR: &str = "public/temp";
pub const JSON_BODY_LIMIT_BYTES: usize = 40 * 1024;
pub const UPLOAD_BODY_LIMIT_BYTES: usize = 10 * 1024 * 1024;

pub mod password_hashing {
    pub const MEMORY_SIZE_KIB: u32 = 15000;
    pub const ITERATIONS: u32 = 2;
    pub const PARALLELISM: u32 = 1;
}

pub mod prod {
    pub const APP_ADDRESS: &str = "0.0.0.0:8000";
    pub const POSTGRES_MAX_CONNECTIONS: u32 = 5;
    pub mod media_host {
        pub const BASE_URL: &str = "https://api.cloudinary.com";
        pub const TIMEOUT_IN_MILLIS: u64 = 10_000;
    }
}

pub mod test {
    pub const APP_ADDRESS: &str = "127.0.0.1:0";
    pub mod media_host {
        pub const TIMEOUT_IN_MILLIS: u64 = 200;
    }
}
