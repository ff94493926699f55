use ramadan_schedule_bot::config::Config;
use ramadan_schedule_bot::utils::validation::ChannelRef;
use chrono::NaiveDate;
use std::env;
use std::sync::Mutex;
use std::time::Duration;

// Mutex to ensure config tests run sequentially to avoid environment variable conflicts
static CONFIG_TEST_MUTEX: Mutex<()> = Mutex::new(());

const ALL_VARS: &[&str] = &[
    "TELEGRAM_BOT_TOKEN",
    "CHANNEL_USERNAME",
    "CHANNEL_INVITE_LINK",
    "OBSERVANCE_START",
    "PRAYER_API_URL",
    "LOOKUP_TIMEOUT_SECS",
    "PRAYER_CACHE",
    "HTTP_PORT",
];

fn clear_env() {
    for var in ALL_VARS {
        env::remove_var(var);
    }
}

fn set_required() {
    env::set_var("TELEGRAM_BOT_TOKEN", "123456:test_token");
    env::set_var("CHANNEL_USERNAME", "@ramazon_uz");
}

#[test]
fn test_config_from_env_with_all_vars() {
    let _guard = CONFIG_TEST_MUTEX.lock().unwrap();
    clear_env();

    env::set_var("TELEGRAM_BOT_TOKEN", "123456:test_token");
    env::set_var("CHANNEL_USERNAME", "-1001234567890");
    env::set_var("CHANNEL_INVITE_LINK", "https://t.me/+AbCdEf123");
    env::set_var("OBSERVANCE_START", "2027-02-08");
    env::set_var("PRAYER_API_URL", "http://localhost:9000/v1/");
    env::set_var("LOOKUP_TIMEOUT_SECS", "5");
    env::set_var("PRAYER_CACHE", "true");
    env::set_var("HTTP_PORT", "8080");

    let config = Config::from_env().unwrap();

    assert_eq!(config.telegram_bot_token, "123456:test_token");
    assert_eq!(config.channel, ChannelRef::Id(-1001234567890));
    assert_eq!(config.invite_link, "https://t.me/+AbCdEf123");
    assert_eq!(config.observance_start, NaiveDate::from_ymd_opt(2027, 2, 8).unwrap());
    assert_eq!(config.prayer_api_url, "http://localhost:9000/v1");
    assert_eq!(config.lookup_timeout, Duration::from_secs(5));
    assert!(config.prayer_cache_enabled);
    assert_eq!(config.http_port, 8080);

    clear_env();
}

#[test]
fn test_config_from_env_with_defaults() {
    let _guard = CONFIG_TEST_MUTEX.lock().unwrap();
    clear_env();
    set_required();

    let config = Config::from_env().unwrap();

    assert_eq!(config.channel, ChannelRef::Username("@ramazon_uz".to_string()));
    assert_eq!(config.invite_link, "https://t.me/ramazon_uz");
    assert_eq!(config.observance_start, NaiveDate::from_ymd_opt(2026, 2, 18).unwrap());
    assert_eq!(config.prayer_api_url, "https://api.aladhan.com/v1");
    assert_eq!(config.lookup_timeout, Duration::from_secs(10));
    assert!(!config.prayer_cache_enabled);
    assert_eq!(config.http_port, 3000);

    clear_env();
}

#[test]
fn test_config_missing_required_token() {
    let _guard = CONFIG_TEST_MUTEX.lock().unwrap();
    clear_env();
    env::set_var("CHANNEL_USERNAME", "@ramazon_uz");

    let result = Config::from_env();
    assert!(result.is_err());

    let error_msg = result.unwrap_err().to_string();
    assert!(error_msg.contains("TELEGRAM_BOT_TOKEN must be set"));

    clear_env();
}

#[test]
fn test_config_missing_channel() {
    let _guard = CONFIG_TEST_MUTEX.lock().unwrap();
    clear_env();
    env::set_var("TELEGRAM_BOT_TOKEN", "123456:test_token");

    let error_msg = Config::from_env().unwrap_err().to_string();
    assert!(error_msg.contains("CHANNEL_USERNAME must be set"));

    clear_env();
}

#[test]
fn test_config_channel_without_at_sign() {
    let _guard = CONFIG_TEST_MUTEX.lock().unwrap();
    clear_env();
    set_required();
    env::set_var("CHANNEL_USERNAME", "ramazon_uz");

    let config = Config::from_env().unwrap();
    assert_eq!(config.channel, ChannelRef::Username("@ramazon_uz".to_string()));
    assert_eq!(config.invite_link, "https://t.me/ramazon_uz");

    clear_env();
}

#[test]
fn test_config_numeric_channel_needs_invite_link() {
    let _guard = CONFIG_TEST_MUTEX.lock().unwrap();
    clear_env();
    set_required();
    env::set_var("CHANNEL_USERNAME", "-1001234567890");

    let error_msg = Config::from_env().unwrap_err().to_string();
    assert!(error_msg.contains("CHANNEL_INVITE_LINK"));

    clear_env();
}

#[test]
fn test_config_invalid_values() {
    let _guard = CONFIG_TEST_MUTEX.lock().unwrap();

    let cases = [
        ("TELEGRAM_BOT_TOKEN", "not-a-token", "Invalid TELEGRAM_BOT_TOKEN"),
        ("CHANNEL_USERNAME", "@abc", "Invalid CHANNEL_USERNAME"),
        ("OBSERVANCE_START", "18.02.2026", "Invalid OBSERVANCE_START"),
        ("LOOKUP_TIMEOUT_SECS", "0", "Invalid LOOKUP_TIMEOUT_SECS"),
        ("LOOKUP_TIMEOUT_SECS", "ten", "Invalid LOOKUP_TIMEOUT_SECS"),
        ("PRAYER_CACHE", "maybe", "Invalid PRAYER_CACHE"),
        ("HTTP_PORT", "invalid_port", "Invalid HTTP_PORT"),
        ("HTTP_PORT", "-1", "Invalid HTTP_PORT"),
        ("CHANNEL_INVITE_LINK", "ftp://example.com", "Invalid CHANNEL_INVITE_LINK"),
    ];

    for (var, value, expected) in cases {
        clear_env();
        set_required();
        env::set_var(var, value);

        let result = Config::from_env();
        assert!(result.is_err(), "{var}={value} should be rejected");
        let error_msg = result.unwrap_err().to_string();
        assert!(error_msg.contains(expected), "{var}={value}: got '{error_msg}'");
    }

    clear_env();
}

#[test]
fn test_config_whitespace_handling() {
    let _guard = CONFIG_TEST_MUTEX.lock().unwrap();
    clear_env();

    env::set_var("TELEGRAM_BOT_TOKEN", "  123456:token  ");
    env::set_var("CHANNEL_USERNAME", "  @ramazon_uz  ");
    env::set_var("HTTP_PORT", "  3000  ");
    env::set_var("PRAYER_CACHE", " ON ");

    let config = Config::from_env().unwrap();

    assert_eq!(config.telegram_bot_token, "123456:token");
    assert_eq!(config.channel, ChannelRef::Username("@ramazon_uz".to_string()));
    assert_eq!(config.http_port, 3000);
    assert!(config.prayer_cache_enabled);

    clear_env();
}
