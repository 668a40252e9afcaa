use std::sync::Arc;

use parking_lot::Mutex;

use crate::api::schema::App;

lazy_static::lazy_static! {
    static ref SHARED: Arc<AppListCache> = Arc::new(AppListCache::new());
}

/// Memoized result of the last successful `GetAppList` request
///
/// The lock is held for the whole lookup-then-fetch sequence, so
/// concurrent callers never request the list twice for the same miss
#[derive(Debug, Default)]
pub struct AppListCache {
    apps: Mutex<Option<Arc<[App]>>>
}

impl AppListCache {
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    /// Process-wide cache used by clients created without their own one
    ///
    /// It lives in memory only and is empty on every process start
    #[inline]
    pub fn shared() -> Arc<Self> {
        SHARED.clone()
    }

    /// Get cached list if it was fetched before
    #[inline]
    pub fn get(&self) -> Option<Arc<[App]>> {
        self.apps.lock().clone()
    }

    #[inline]
    pub fn is_populated(&self) -> bool {
        self.apps.lock().is_some()
    }

    /// Replace cached list
    pub fn set(&self, apps: impl Into<Arc<[App]>>) {
        *self.apps.lock() = Some(apps.into());
    }

    /// Forget cached list so the next lookup will fetch it again
    pub fn invalidate(&self) {
        tracing::debug!("Invalidating app list cache");

        *self.apps.lock() = None;
    }

    /// Return cached list or fetch and store a new one
    ///
    /// `fetch` is called when the cache is empty or `force` is set.
    /// Its result replaces the cache even if it's empty. On error
    /// the cache keeps its previous value
    pub fn get_or_try_fetch<E>(&self, force: bool, fetch: impl FnOnce() -> Result<Vec<App>, E>) -> Result<Arc<[App]>, E> {
        let mut apps = self.apps.lock();

        if !force {
            if let Some(apps) = apps.as_ref() {
                tracing::debug!(count = apps.len(), "Using cached app list");

                return Ok(apps.clone());
            }
        }

        let fetched: Arc<[App]> = fetch()?.into();

        *apps = Some(fetched.clone());

        Ok(fetched)
    }
}
