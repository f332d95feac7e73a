//! Application-wide constants

pub const DEFAULT_API_BASE_URL: &str = "http://localhost:8080/api/v1";
pub const DEFAULT_SESSION_FILE: &str = ".coupon-session.json";
pub const DEFAULT_LOG_LEVEL: &str = "info";

/// Persisted storage keys, cleared together on logout.
pub const ACCESS_TOKEN_KEY: &str = "accessToken";
pub const REFRESH_TOKEN_KEY: &str = "refreshToken";
pub const USER_INFO_KEY: &str = "userInfo";

pub const SESSION_KEYS: [&str; 3] = [ACCESS_TOKEN_KEY, REFRESH_TOKEN_KEY, USER_INFO_KEY];

pub const MIN_NAME_LENGTH: u64 = 2;
pub const MAX_NAME_LENGTH: u64 = 100;
pub const MAX_DESCRIPTION_LENGTH: u64 = 1000;

/// Entry point the user is sent to when the session cannot be recovered.
pub const LOGIN_PATH: &str = "/login";
