//! Template catalog and tracing helpers shared across integration tests

use std::sync::Once;

use once_cell::sync::Lazy;
use slotsync::Template;

/// Templates the flow tests draw from, keyed by slug.
pub static TEMPLATE_CATALOG: Lazy<Vec<Template>> = Lazy::new(|| {
    vec![
        Template::new("drake", &["top text", "bottom text"]),
        Template::new("doge", &["left caption", "right caption"]),
        Template::new("expanding-brain", &["stage 1", "stage 2", "stage 3", "stage 4"]),
        Template::new("blank", &[]),
    ]
});

/// Fetch a catalog template by slug. Panics on an unknown slug so a typo
/// fails the test immediately.
pub fn template(slug: &str) -> Template {
    TEMPLATE_CATALOG
        .iter()
        .find(|t| t.slug == slug)
        .cloned()
        .unwrap_or_else(|| panic!("no fixture template {slug:?}"))
}

static TRACING: Once = Once::new();

/// Install a test subscriber once per process so library tracing output
/// lands in the captured test output. Honors RUST_LOG.
pub fn init_tracing() {
    TRACING.call_once(|| {
        let _ = tracing_subscriber::fmt()
            .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
            .with_test_writer()
            .try_init();
    });
}
