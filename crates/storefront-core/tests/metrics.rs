#![allow(clippy::unwrap_used)]
#![allow(clippy::expect_used)]
#![allow(clippy::panic)]

use std::panic::AssertUnwindSafe;
use std::thread;

use storefront_core::metrics::Registry;

#[test]
fn duplicate_registration_fails() {
    let registry = Registry::new();
    registry.register_counter("requests_total", "help").unwrap();

    let err = registry
        .register_counter("requests_total", "help again")
        .expect_err("duplicate name must fail");
    assert!(err.to_string().contains("requests_total"));

    // Name collision across kinds is rejected too.
    registry
        .register_summary("requests_total", "help")
        .expect_err("duplicate name across kinds must fail");
}

#[test]
fn counter_is_exact_under_concurrent_increments() {
    let registry = Registry::new();
    let counter = registry.register_counter("hits_total", "hits").unwrap();

    let threads = 8;
    let per_thread = 1_000;
    let handles: Vec<_> = (0..threads)
        .map(|_| {
            let c = counter.clone();
            thread::spawn(move || {
                for _ in 0..per_thread {
                    c.inc();
                }
            })
        })
        .collect();
    for h in handles {
        h.join().unwrap();
    }

    assert_eq!(counter.value(), threads * per_thread);
}

#[test]
fn summary_counts_and_sums_observations() {
    let registry = Registry::new();
    let summary = registry.register_summary("proc_seconds", "proc time").unwrap();

    summary.observe(0.25);
    summary.observe(0.5);
    {
        let _t = summary.start_timer();
    }

    assert_eq!(summary.count(), 3);
    assert!(summary.sum() >= 0.75);
}

#[test]
fn timer_records_on_panic() {
    let registry = Registry::new();
    let summary = registry.register_summary("proc_seconds", "proc time").unwrap();

    let result = std::panic::catch_unwind(AssertUnwindSafe(|| {
        let _t = summary.start_timer();
        panic!("handler blew up");
    }));
    assert!(result.is_err());

    // The guard dropped during unwind and still recorded.
    assert_eq!(summary.count(), 1);
    assert!(summary.sum() >= 0.0);

    // Registry operations stay total after the unwind: render and further
    // registration keep working.
    let out = registry.render();
    assert!(out.contains("proc_seconds_count 1\n"));
    registry.register_counter("late_total", "late").unwrap();
}

#[test]
fn summary_is_exact_under_concurrent_observations() {
    let registry = Registry::new();
    let summary = registry.register_summary("proc_seconds", "proc time").unwrap();

    let threads = 4;
    let per_thread = 500;
    let handles: Vec<_> = (0..threads)
        .map(|_| {
            let s = summary.clone();
            thread::spawn(move || {
                for _ in 0..per_thread {
                    s.observe(0.001);
                }
            })
        })
        .collect();
    for h in handles {
        h.join().unwrap();
    }

    assert_eq!(summary.count(), threads * per_thread);
    let expected = 0.001 * (threads * per_thread) as f64;
    assert!((summary.sum() - expected).abs() < 1e-9);
}

#[test]
fn render_exposition_format() {
    let registry = Registry::new();
    let counter = registry
        .register_counter("user_requests_total", "Total /users calls")
        .unwrap();
    let summary = registry
        .register_summary("product_processing_seconds", "Time in /products")
        .unwrap();
    registry
        .register_info("app_info", "Application info", &[("version", "1.0.0")])
        .unwrap();

    counter.add(7);
    summary.observe(0.5);

    let out = registry.render();
    assert!(out.contains("# HELP user_requests_total Total /users calls\n"));
    assert!(out.contains("# TYPE user_requests_total counter\n"));
    assert!(out.contains("user_requests_total 7\n"));
    assert!(out.contains("# TYPE product_processing_seconds summary\n"));
    assert!(out.contains("product_processing_seconds_count 1\n"));
    assert!(out.contains("product_processing_seconds_sum 0.5\n"));
    assert!(out.contains("# TYPE app_info gauge\n"));
    assert!(out.contains("app_info{version=\"1.0.0\"} 1\n"));

    // Registration order is preserved.
    let counter_at = out.find("# HELP user_requests_total").unwrap();
    let summary_at = out.find("# HELP product_processing_seconds").unwrap();
    assert!(counter_at < summary_at);
}
