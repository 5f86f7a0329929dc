//! In-memory fixed-window limiter for login attempts.

use std::{
    collections::HashMap,
    sync::Arc,
    time::{Duration, Instant},
};

use tokio::sync::Mutex;

/// Attempts allowed per key inside one window.
pub const LOGIN_MAX_ATTEMPTS: u32 = 10;
/// Length of the login window.
pub const LOGIN_WINDOW: Duration = Duration::from_secs(60);

/// Entries are pruned once the table grows past this size.
const PRUNE_THRESHOLD: usize = 1000;

struct Window {
    count: u32,
    started: Instant,
}

/// Limiter key for a login attempt. Scoping by client address keeps one client's
/// failures from blocking the same username everywhere else.
pub fn login_key(client_address: &str, username: &str) -> String {
    format!("{}|{}", client_address, username.trim())
}

/// Counts attempts per key (see `login_key`) within a fixed window.
///
/// Clones share the same table.
#[derive(Clone)]
pub struct LoginRateLimiter {
    entries: Arc<Mutex<HashMap<String, Window>>>,
    max_attempts: u32,
    window: Duration,
}

impl LoginRateLimiter {
    pub fn new(max_attempts: u32, window: Duration) -> Self {
        Self {
            entries: Arc::new(Mutex::new(HashMap::new())),
            max_attempts,
            window,
        }
    }

    /// Records an attempt for `key`.
    ///
    /// # Returns
    /// - `true` - The attempt is within the limit
    /// - `false` - The key has used up its attempts for the current window
    pub async fn check(&self, key: &str) -> bool {
        self.check_at(key, Instant::now()).await
    }

    async fn check_at(&self, key: &str, now: Instant) -> bool {
        let mut entries = self.entries.lock().await;

        if entries.len() > PRUNE_THRESHOLD {
            entries.retain(|_, w| now.duration_since(w.started) < self.window);
        }

        let entry = entries.entry(key.to_string()).or_insert(Window {
            count: 0,
            started: now,
        });

        if now.duration_since(entry.started) >= self.window {
            entry.count = 1;
            entry.started = now;
            return true;
        }

        entry.count += 1;
        entry.count <= self.max_attempts
    }
}

impl Default for LoginRateLimiter {
    fn default() -> Self {
        Self::new(LOGIN_MAX_ATTEMPTS, LOGIN_WINDOW)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn blocks_after_max_attempts() {
        let limiter = LoginRateLimiter::new(3, Duration::from_secs(60));
        let now = Instant::now();

        for _ in 0..3 {
            assert!(limiter.check_at("admin", now).await);
        }
        assert!(!limiter.check_at("admin", now).await);
    }

    #[tokio::test]
    async fn keys_are_independent() {
        let limiter = LoginRateLimiter::new(1, Duration::from_secs(60));
        let now = Instant::now();

        assert!(limiter.check_at("admin", now).await);
        assert!(!limiter.check_at("admin", now).await);
        assert!(limiter.check_at("operator", now).await);
    }

    #[tokio::test]
    async fn same_username_from_other_clients_is_not_blocked() {
        let limiter = LoginRateLimiter::new(2, Duration::from_secs(60));
        let now = Instant::now();
        let attacker = login_key("203.0.113.7", "admin");

        assert!(limiter.check_at(&attacker, now).await);
        assert!(limiter.check_at(&attacker, now).await);
        assert!(!limiter.check_at(&attacker, now).await);

        assert!(limiter.check_at(&login_key("192.0.2.10", "admin"), now).await);
        assert!(limiter.check_at(&login_key("203.0.113.7", "operator"), now).await);
    }

    #[test]
    fn login_key_trims_username() {
        assert_eq!(login_key("192.0.2.10", " admin "), login_key("192.0.2.10", "admin"));
        assert_ne!(login_key("192.0.2.10", "admin"), login_key("192.0.2.11", "admin"));
    }

    #[tokio::test]
    async fn window_resets_after_expiry() {
        let limiter = LoginRateLimiter::new(1, Duration::from_secs(60));
        let now = Instant::now();

        assert!(limiter.check_at("admin", now).await);
        assert!(!limiter.check_at("admin", now).await);
        assert!(
            limiter
                .check_at("admin", now + Duration::from_secs(61))
                .await
        );
    }
}
