//! Environment helpers: centralized dotenv loading and typed getters.
//! Call `init_env()` once early in each binary (safe to call repeatedly).
use std::str::FromStr;
use std::sync::Once;

static INIT: Once = Once::new();

/// Load `.env` exactly once. Later calls are no-ops.
pub fn init_env() {
    INIT.call_once(|| {
        let _ = dotenv::dotenv();
    });
}

/// Optional env var (None if unset or blank).
pub fn env_opt(key: &str) -> Option<String> {
    init_env();
    match std::env::var(key) {
        Ok(v) if !v.trim().is_empty() => Some(v),
        _ => None,
    }
}

/// Parsed value with a default fallback; unparseable values fall back too.
pub fn env_parse<T>(key: &str, default: T) -> T
where
    T: FromStr,
{
    init_env();
    match std::env::var(key) {
        Ok(raw) => raw.trim().parse::<T>().unwrap_or(default),
        Err(_) => default,
    }
}

/// Boolean flag; 1/true/on/yes (case-insensitive) count as true.
pub fn env_flag(key: &str, default: bool) -> bool {
    init_env();
    match std::env::var(key) {
        Ok(raw) => {
            let v = raw.trim().to_ascii_lowercase();
            matches!(v.as_str(), "1" | "true" | "on" | "yes")
        }
        Err(_) => default,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_falls_back_on_garbage() {
        std::env::set_var("GLOWCART_TEST_PARSE", "not-a-number");
        assert_eq!(env_parse::<usize>("GLOWCART_TEST_PARSE", 12), 12);
        std::env::set_var("GLOWCART_TEST_PARSE", "24");
        assert_eq!(env_parse::<usize>("GLOWCART_TEST_PARSE", 12), 24);
        std::env::remove_var("GLOWCART_TEST_PARSE");
    }

    #[test]
    fn flag_accepts_common_spellings() {
        for v in ["1", "true", "ON", "Yes"] {
            std::env::set_var("GLOWCART_TEST_FLAG", v);
            assert!(env_flag("GLOWCART_TEST_FLAG", false), "value {v}");
        }
        std::env::set_var("GLOWCART_TEST_FLAG", "0");
        assert!(!env_flag("GLOWCART_TEST_FLAG", true));
        std::env::remove_var("GLOWCART_TEST_FLAG");
    }
}
