mod common;

use std::sync::Arc;

use nci_urs::config::UrsConfig;
use nci_urs::infrastructure::MemoryCookieStore;
use nci_urs::prelude::*;

fn stack() -> (ChannelStackService<MemoryCookieStore>, Arc<MemoryCookieStore>) {
    common::init_tracing();
    let cookies = Arc::new(MemoryCookieStore::new());
    (ChannelStackService::new(cookies.clone()), cookies)
}

#[test]
fn pushing_same_prefix_twice_keeps_one_entry() {
    let config = UrsConfig::default().channel_stack;
    let (service, _) = stack();

    service.stacked_view(&config, "sem");
    let view = service.stacked_view(&config, "sem");

    assert_eq!(view, "sem");
}

#[test]
fn six_distinct_pushes_keep_five_newest() {
    let config = UrsConfig::default().channel_stack;
    let (service, _) = stack();

    let mut view = String::new();
    for prefix in ["em", "sem", "soc", "[seo]", "[ref]", "bn"] {
        view = service.stacked_view(&config, prefix);
    }

    assert_eq!(view, "sem>soc>[seo]>[ref]>bn");
}

#[test]
fn history_persists_across_service_instances() {
    let config = UrsConfig::default().channel_stack;
    let cookies = Arc::new(MemoryCookieStore::new());

    ChannelStackService::new(cookies.clone()).stacked_view(&config, "em");
    let view = ChannelStackService::new(cookies).stacked_view(&config, "sem");

    assert_eq!(view, "em>sem");
}

#[test]
fn stored_format_is_comma_joined_most_recent_first() {
    let config = UrsConfig::default().channel_stack;
    let (service, cookies) = stack();

    service.stacked_view(&config, "em");
    service.stacked_view(&config, "sem");

    assert_eq!(
        cookies.get(&config.cookie_name).unwrap().as_deref(),
        Some("sem,em")
    );
}

#[test]
fn classifier_and_stack_share_the_cookie() {
    let config = UrsConfig::default();
    let cookies = Arc::new(MemoryCookieStore::new());
    let urs = UrsService::new(
        Arc::new(config.clone()),
        cookies.clone(),
        Arc::new(nci_urs::infrastructure::StaticPage::new()),
    );

    urs.classify(Some("ppc_brand"), None);
    let view = ChannelStackService::new(cookies).stacked_view(&config.channel_stack, "");

    assert_eq!(view, "ppc");
}
