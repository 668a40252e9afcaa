use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

use crate::prelude::*;

fn app(app_id: u32, name: &str) -> App {
    App {
        app_id,
        name: name.to_string()
    }
}

#[test]
fn test_cache_miss_then_hit() -> anyhow::Result<()> {
    let cache = AppListCache::new();
    let fetches = AtomicUsize::new(0);

    assert!(!cache.is_populated());
    assert!(cache.get().is_none());

    let fetch = || -> anyhow::Result<Vec<App>> {
        fetches.fetch_add(1, Ordering::SeqCst);

        Ok(vec![app(440, "Team Fortress 2")])
    };

    let first = cache.get_or_try_fetch(false, fetch)?;
    let second = cache.get_or_try_fetch(false, fetch)?;

    assert_eq!(fetches.load(Ordering::SeqCst), 1);
    assert!(Arc::ptr_eq(&first, &second));
    assert!(cache.is_populated());

    Ok(())
}

#[test]
fn test_cache_force_overwrites_with_empty() -> anyhow::Result<()> {
    let cache = AppListCache::new();

    cache.set(vec![app(570, "Dota 2")]);

    let apps = cache.get_or_try_fetch(true, || anyhow::Ok(Vec::new()))?;

    assert!(apps.is_empty());
    assert_eq!(cache.get().map(|apps| apps.len()), Some(0));

    Ok(())
}

#[test]
fn test_cache_keeps_value_on_error() {
    let cache = AppListCache::new();

    cache.set(vec![app(620, "Portal 2")]);

    let result = cache.get_or_try_fetch(true, || Err("unreachable"));

    assert_eq!(result.err(), Some("unreachable"));
    assert_eq!(cache.get().as_deref(), Some(&[app(620, "Portal 2")][..]));
}

#[test]
fn test_cache_invalidate() -> anyhow::Result<()> {
    let cache = AppListCache::new();

    cache.set(vec![app(620, "Portal 2")]);
    cache.invalidate();

    assert!(!cache.is_populated());

    let apps = cache.get_or_try_fetch(false, || anyhow::Ok(vec![app(440, "Team Fortress 2")]))?;

    assert_eq!(apps[0].app_id, 440);

    Ok(())
}

#[test]
fn test_cache_concurrent_fetch_once() {
    let cache = AppListCache::new();
    let fetches = AtomicUsize::new(0);

    std::thread::scope(|scope| {
        for _ in 0..8 {
            scope.spawn(|| {
                let apps = cache.get_or_try_fetch(false, || {
                    fetches.fetch_add(1, Ordering::SeqCst);

                    std::thread::sleep(std::time::Duration::from_millis(20));

                    Ok::<_, ()>(vec![app(730, "Counter-Strike")])
                });

                assert_eq!(apps.map(|apps| apps.len()), Ok(1));
            });
        }
    });

    assert_eq!(fetches.load(Ordering::SeqCst), 1);
}

#[test]
fn test_shared_cache() {
    assert!(Arc::ptr_eq(&AppListCache::shared(), &AppListCache::shared()));
}
