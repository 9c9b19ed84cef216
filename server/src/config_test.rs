use std::sync::{Mutex, MutexGuard, PoisonError};

use super::*;

static ENV_LOCK: Mutex<()> = Mutex::new(());

/// Serializes tests that touch process environment variables.
fn env_guard() -> MutexGuard<'static, ()> {
    ENV_LOCK.lock().unwrap_or_else(PoisonError::into_inner)
}

/// # Safety
/// Callers must hold `env_guard()`.
unsafe fn clear_server_env() {
    unsafe {
        std::env::remove_var("PORT");
        std::env::remove_var("BIND_ADDR");
        std::env::remove_var("ASSETS_DIR");
        std::env::remove_var("CONSULTATION_API_BASE_URL");
    }
}

#[test]
fn from_env_defaults() {
    let _guard = env_guard();
    unsafe { clear_server_env() };

    let cfg = ServerConfig::from_env().unwrap();
    assert_eq!(cfg.port, DEFAULT_PORT);
    assert_eq!(cfg.bind_addr.to_string(), DEFAULT_BIND_ADDR);
    assert!(cfg.assets_dir.ends_with("public"));
    assert_eq!(cfg.consultation_api_base, None);
    assert_eq!(cfg.socket_addr().to_string(), "0.0.0.0:3000");
}

#[test]
fn from_env_reads_overrides() {
    let _guard = env_guard();
    unsafe {
        clear_server_env();
        std::env::set_var("PORT", "8080");
        std::env::set_var("BIND_ADDR", "127.0.0.1");
        std::env::set_var("ASSETS_DIR", "/srv/site");
        std::env::set_var("CONSULTATION_API_BASE_URL", "https://api.example.com/");
    }

    let cfg = ServerConfig::from_env().unwrap();
    assert_eq!(cfg.socket_addr().to_string(), "127.0.0.1:8080");
    assert_eq!(cfg.assets_dir, PathBuf::from("/srv/site"));
    assert_eq!(cfg.consultation_api_base.as_deref(), Some("https://api.example.com"));

    unsafe { clear_server_env() };
}

#[test]
fn from_env_rejects_bad_port() {
    let _guard = env_guard();
    unsafe {
        clear_server_env();
        std::env::set_var("PORT", "eighty");
    }

    assert_eq!(ServerConfig::from_env(), Err(ConfigError::InvalidPort("eighty".to_owned())));

    unsafe { clear_server_env() };
}

#[test]
fn from_env_rejects_bad_bind_addr() {
    let _guard = env_guard();
    unsafe {
        clear_server_env();
        std::env::set_var("BIND_ADDR", "localhost:1");
    }

    assert!(matches!(ServerConfig::from_env(), Err(ConfigError::InvalidBindAddr(_))));

    unsafe { clear_server_env() };
}
