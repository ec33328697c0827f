//! Browser timers tied to the owning component's lifetime.
//!
//! Both helpers stop firing once the component that installed them is
//! cleaned up. On the server they do nothing.

/// Run `f` once after `millis`, unless the owner is disposed first.
pub fn after<F>(millis: u64, f: F)
where
    F: FnOnce() + 'static,
{
    #[cfg(feature = "hydrate")]
    {
        use std::sync::Arc;
        use std::sync::atomic::{AtomicBool, Ordering};

        let alive = Arc::new(AtomicBool::new(true));
        let alive_task = alive.clone();
        leptos::task::spawn_local(async move {
            gloo_timers::future::sleep(std::time::Duration::from_millis(millis)).await;
            if alive_task.load(Ordering::Relaxed) {
                f();
            }
        });
        leptos::prelude::on_cleanup(move || alive.store(false, Ordering::Relaxed));
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (millis, f);
    }
}

/// Call `tick` once per second until it returns `false` or the owner is disposed.
pub fn every_second<F>(mut tick: F)
where
    F: FnMut() -> bool + 'static,
{
    #[cfg(feature = "hydrate")]
    {
        use std::sync::Arc;
        use std::sync::atomic::{AtomicBool, Ordering};

        let alive = Arc::new(AtomicBool::new(true));
        let alive_task = alive.clone();
        leptos::task::spawn_local(async move {
            loop {
                gloo_timers::future::sleep(std::time::Duration::from_secs(1)).await;
                if !alive_task.load(Ordering::Relaxed) || !tick() {
                    break;
                }
            }
        });
        leptos::prelude::on_cleanup(move || alive.store(false, Ordering::Relaxed));
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = &mut tick;
    }
}
