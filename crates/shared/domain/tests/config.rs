use skit_domain::config::{DismissalsConfig, SitekitConfig, WidgetsConfig};
use serde_json::json;

#[test]
fn config_defaults_are_sane() {
    let cfg = SitekitConfig::default();
    assert_eq!(cfg.notifications.default_priority, 10);
    assert_eq!(cfg.logging.level, "info");
    assert!(cfg.logging.console);

    let widgets = WidgetsConfig::default();
    assert_eq!(widgets.key_metrics_cta_threshold, 3);

    let dismissals = DismissalsConfig::default();
    assert!(dismissals.fetch_on_first_read);
    assert_eq!(
        dismissals.dismissed_items_path(),
        "/google-site-kit/v1/core/user/data/dismissed-items"
    );
    assert_eq!(dismissals.dismiss_item_path(), "/google-site-kit/v1/core/user/data/dismiss-item");
}

#[test]
fn config_deserializes_partial_sections() {
    let raw = json!({
        "logging": { "level": "debug", "json": true },
        "widgets": { "key_metrics_cta_threshold": 5 },
        "dismissals": { "api_root": "/wp-json/google-site-kit/v1/" }
    });

    let cfg: SitekitConfig = serde_json::from_value(raw).expect("config deserialize");
    assert_eq!(cfg.logging.level, "debug");
    assert!(cfg.logging.json);
    assert_eq!(cfg.widgets.key_metrics_cta_threshold, 5);
    assert_eq!(cfg.widgets.default_priority, 10);
    assert_eq!(
        cfg.dismissals.dismiss_item_path(),
        "/wp-json/google-site-kit/v1/core/user/data/dismiss-item"
    );
}

#[test]
fn config_is_copy_on_write() {
    let shared = SitekitConfig::default();
    let mut tuned = shared.clone();
    tuned.notifications.default_priority = 20;

    assert_eq!(shared.notifications.default_priority, 10);
    assert_eq!(tuned.notifications.default_priority, 20);
}
