/// localStorage keys of the persisted session
pub const STORAGE_KEY_ACCESS_TOKEN: &str = "accessToken";
pub const STORAGE_KEY_REFRESH_TOKEN: &str = "refreshToken";
pub const STORAGE_KEY_TOKEN_EXPIRES_AT: &str = "tokenExpiresAt";

pub const CONSOLE_PATH: &str = "/";

/// Notification texts
pub const NOTIFY_UPDATED: &str = "Update";
pub const NOTIFY_DELETED: &str = "Deleted";
