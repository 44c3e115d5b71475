pub const DEFAULT_RUST_LOG: &str = "info";
pub const DEFAULT_DB_MAX_CONNECTIONS: i64 = 5;
pub const DEFAULT_DB_MIN_IDLE: i64 = 1;
pub const DEFAULT_DB_CONNECT_TIMEOUT_SECS: i64 = 5;
