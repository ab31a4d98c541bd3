use std::path::Path;
use std::sync::{Mutex, MutexGuard};

use minihttpd::config::Config;

// Config::load reads process-global environment variables; serialize the
// tests that touch them.
static ENV_LOCK: Mutex<()> = Mutex::new(());

fn env_guard() -> MutexGuard<'static, ()> {
    ENV_LOCK.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
}

fn clear_env() {
    unsafe {
        std::env::remove_var("LISTEN");
        std::env::remove_var("CONFIG");
    }
}

#[test]
fn test_defaults() {
    let _guard = env_guard();
    clear_env();

    let cfg = Config::load().unwrap();
    assert_eq!(cfg.listen_addr, "0.0.0.0:8888");
    assert_eq!(cfg.root, Path::new("."));
    assert_eq!(cfg.index, "index.html");
}

#[test]
fn test_listen_env_override() {
    let _guard = env_guard();
    clear_env();

    unsafe {
        std::env::set_var("LISTEN", "127.0.0.1:3000");
    }
    let cfg = Config::load().unwrap();
    assert_eq!(cfg.listen_addr, "127.0.0.1:3000");

    clear_env();
}

#[test]
fn test_yaml_config_file() {
    let _guard = env_guard();
    clear_env();

    let dir = std::env::temp_dir().join(format!("minihttpd-cfg-{}", std::process::id()));
    std::fs::create_dir_all(&dir).unwrap();
    let file = dir.join("config.yaml");
    std::fs::write(
        &file,
        "listen_addr: 127.0.0.1:9999\nroot: /srv/www\nindex: home.html\n",
    )
    .unwrap();

    unsafe {
        std::env::set_var("CONFIG", &file);
    }
    let cfg = Config::load().unwrap();
    assert_eq!(cfg.listen_addr, "127.0.0.1:9999");
    assert_eq!(cfg.root, Path::new("/srv/www"));
    assert_eq!(cfg.index, "home.html");

    clear_env();
}

#[test]
fn test_partial_yaml_keeps_defaults() {
    let _guard = env_guard();
    clear_env();

    let dir = std::env::temp_dir().join(format!("minihttpd-cfg-partial-{}", std::process::id()));
    std::fs::create_dir_all(&dir).unwrap();
    let file = dir.join("config.yaml");
    std::fs::write(&file, "root: /srv/www\n").unwrap();

    unsafe {
        std::env::set_var("CONFIG", &file);
    }
    let cfg = Config::load().unwrap();
    assert_eq!(cfg.listen_addr, "0.0.0.0:8888");
    assert_eq!(cfg.root, Path::new("/srv/www"));

    clear_env();
}

#[test]
fn test_listen_env_beats_config_file() {
    let _guard = env_guard();
    clear_env();

    let dir = std::env::temp_dir().join(format!("minihttpd-cfg-env-{}", std::process::id()));
    std::fs::create_dir_all(&dir).unwrap();
    let file = dir.join("config.yaml");
    std::fs::write(&file, "listen_addr: 127.0.0.1:1111\n").unwrap();

    unsafe {
        std::env::set_var("CONFIG", &file);
        std::env::set_var("LISTEN", "127.0.0.1:2222");
    }
    let cfg = Config::load().unwrap();
    assert_eq!(cfg.listen_addr, "127.0.0.1:2222");

    clear_env();
}

#[test]
fn test_missing_config_file_is_fatal() {
    let _guard = env_guard();
    clear_env();

    unsafe {
        std::env::set_var("CONFIG", "/nonexistent/minihttpd.yaml");
    }
    assert!(Config::load().is_err());

    clear_env();
}
