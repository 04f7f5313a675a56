use std::env;
use std::fs;

/// Keys read through `option_env!` in src/config.rs
const CONFIG_KEYS: &[&str] = &[
    "ENVIRONMENT",
    "BACKEND_URL_DEVELOPMENT",
    "BACKEND_URL_PRODUCTION",
    "ENABLE_LOGGING",
    "ORDER_BACKEND",
    "SIGN_IN_PATH",
    "DEFAULT_PAGE_SIZE",
    "NOTIFICATION_TIMEOUT_MS",
    "NETWORK_TIMEOUT_SECONDS",
];

/// `KEY=value` with optional `export` prefix and surrounding quotes
fn parse_entry(line: &str) -> Option<(&str, &str)> {
    let line = line.trim();
    if line.is_empty() || line.starts_with('#') {
        return None;
    }
    let line = line.strip_prefix("export ").unwrap_or(line);
    let (key, value) = line.split_once('=')?;
    let value = value.trim();
    let value = value
        .strip_prefix('"')
        .and_then(|v| v.strip_suffix('"'))
        .or_else(|| value.strip_prefix('\'').and_then(|v| v.strip_suffix('\'')))
        .unwrap_or(value);
    Some((key.trim(), value))
}

fn main() {
    println!("cargo:rerun-if-changed=build.rs");
    println!("cargo:rerun-if-changed=.env");
    for key in CONFIG_KEYS {
        println!("cargo:rerun-if-env-changed={}", key);
    }

    let contents = match fs::read_to_string(".env") {
        Ok(contents) => contents,
        Err(_) => {
            println!("cargo:warning=.env not found; order console uses built-in defaults (see .env.example)");
            return;
        }
    };

    for (key, value) in contents.lines().filter_map(parse_entry) {
        if !CONFIG_KEYS.contains(&key) {
            println!("cargo:warning=.env key {} is not read by the console, skipped", key);
            continue;
        }
        // A variable already set in the build environment takes precedence
        if env::var_os(key).is_none() {
            println!("cargo:rustc-env={}={}", key, value);
        }
    }
}
