//! Feed Status Component
//!
//! Stale-data banner with a manual retry for one dashboard feed.

use dashboard_core::FeedKind;
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::commands;
use crate::context::use_app_context;
use crate::store::{use_app_store, AppStateStoreFields};

#[component]
pub fn FeedStatus(kind: FeedKind) -> impl IntoView {
    let ctx = use_app_context();
    let store = use_app_store();

    let error = move || store.dashboard().with(|d| d.error(kind).map(str::to_string));
    let loading = move || store.dashboard().with(|d| d.is_feed_loading(kind));
    let retry = move |_: web_sys::MouseEvent| {
        spawn_local(commands::refresh_feed(store, ctx.config(), kind));
    };

    view! {
        {move || error().map(|message| view! {
            <div class="feed-error" role="alert">
                <span class="feed-error-text">{message}</span>
                <span class="feed-error-hint">" (showing last known data)"</span>
                <button class="retry-btn" disabled=loading on:click=retry>
                    {move || if loading() { "Retrying..." } else { "Retry" }}
                </button>
            </div>
        })}
    }
}
