use std::sync::Once;

use plastic::{HierarchyManager, Rect};

static TRACING: Once = Once::new();

/// Honors RUST_LOG, e.g. `RUST_LOG=plastic_layout=trace`
pub fn init_tracing() {
    TRACING.call_once(|| {
        let _ = tracing_subscriber::fmt()
            .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
            .with_test_writer()
            .with_target(false)
            .compact()
            .try_init();
    });
}

/// Root of 200x100 at multiplier 1 with a single empty child
pub fn root_and_child() -> HierarchyManager {
    init_tracing();
    let mut views = HierarchyManager::new();
    views
        .declare("root", None, 1.0, Rect::new(0.0, 0.0, 200.0, 100.0))
        .expect("root declares");
    views
        .declare("child", Some("root"), 1.0, Rect::ZERO)
        .expect("child declares");
    views
}
