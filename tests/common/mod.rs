#![allow(dead_code)]

use std::sync::Arc;

use nci_urs::config::UrsConfig;
use nci_urs::infrastructure::{MemoryCookieStore, StaticPage};
use nci_urs::prelude::*;

pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .with_test_writer()
        .try_init();
}

/// Classifier over a fresh in-memory cookie store and the given page.
pub fn urs_with_page(page: StaticPage) -> (UrsService<MemoryCookieStore, StaticPage>, Arc<MemoryCookieStore>) {
    init_tracing();
    let cookies = Arc::new(MemoryCookieStore::new());
    let service = UrsService::new(
        Arc::new(UrsConfig::default()),
        cookies.clone(),
        Arc::new(page),
    );
    (service, cookies)
}

/// Classifier with no document referrer.
pub fn urs() -> (UrsService<MemoryCookieStore, StaticPage>, Arc<MemoryCookieStore>) {
    urs_with_page(StaticPage::new())
}

/// One-shot classification with no document referrer fallback.
pub fn classify(campaign: Option<&str>, referrer: Option<&str>) -> UrsRecord {
    let (service, _) = urs();
    service.classify(campaign, referrer)
}
