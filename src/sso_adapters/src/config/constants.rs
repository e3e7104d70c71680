pub mod env {
    pub const CONFIG_PATH_ENV_VAR: &str = "CONFIG_PATH";
    /// Prefix of environment variables overriding file settings, e.g.
    /// `SSO__TOKEN_TTL_IN_SECONDS` or `SSO__HTTP__ADDRESS`.
    pub const ENV_PREFIX: &str = "SSO";
    pub const ENV_SEPARATOR: &str = "__";
}

pub const DEFAULT_CONFIG_PATH: &str = "config/local.json";

pub mod defaults {
    pub const ENV: &str = "local";
    pub const HTTP_ADDRESS: &str = "0.0.0.0:44044";
    pub const HTTP_TIMEOUT_IN_MILLIS: u64 = 5000;
    pub const POSTGRES_MAX_CONNECTIONS: u32 = 5;

    // Argon2id cost
    pub const HASHING_MEMORY_KIB: u32 = 15000;
    pub const HASHING_ITERATIONS: u32 = 2;
    pub const HASHING_PARALLELISM: u32 = 1;
}

pub mod limits {
    /// Ten years. Longer lifetimes are rejected at startup.
    pub const MAX_TOKEN_TTL_IN_SECONDS: u64 = 10 * 365 * 24 * 60 * 60;
}

pub mod test {
    pub const APP_ADDRESS: &str = "127.0.0.1:0";
}
