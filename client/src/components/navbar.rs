//! Top navigation bar: brand, external links and the contract-address
//! widget with copy-to-clipboard feedback.

use std::time::Duration;

use leptos::prelude::*;
use showcase::config::SiteConfig;
use showcase::navbar::{CopyIndicator, HideTicket, is_scrolled, shorten_address};

use crate::util::{clipboard, viewport};

const COPY_ICON_PATH: &str = "M16 1H4C2.9 1 2 1.9 2 3V17H4V3H16V1ZM19 5H8C6.9 5 6 5.9 6 7V21C6 22.1 6.9 23 8 23H19C20.1 23 21 22.1 21 21V7C21 5.9 20.1 5 19 5ZM19 21H8V7H19V21Z";

#[component]
pub fn Navbar(site: &'static SiteConfig) -> impl IntoView {
    let scrolled = RwSignal::new(false);
    let indicator = RwSignal::new(CopyIndicator::default());

    let scroll_handle = window_event_listener(leptos::ev::scroll, move |_| {
        scrolled.set(is_scrolled(viewport::scroll_offset()));
    });
    on_cleanup(move || scroll_handle.remove());

    let address = site.contract_address.as_str();
    let hide_after = site.timing.copied_indicator();
    let on_copy = move |_| {
        leptos::task::spawn_local(async move {
            match clipboard::write_text(address).await {
                Ok(()) => {
                    if let Some(ticket) = indicator.try_update(CopyIndicator::show) {
                        schedule_hide(indicator, ticket, hide_after);
                    }
                }
                Err(e) => log::error!("failed to copy contract address: {e}"),
            }
        });
    };

    view! {
        <nav class="navbar" class:scrolled=move || scrolled.get()>
            <div class="navbar-content">
                <div class="left-side">
                    <div class="logo-container">
                        <img src=site.brand.logo_url.as_str() alt=site.brand.logo_alt.as_str() class="logo-image"/>
                    </div>
                    <ul class="nav-links">
                        {site
                            .links
                            .iter()
                            .map(|link| {
                                view! {
                                    <li>
                                        <a target="_blank" rel="noopener noreferrer" href=link.href.as_str()>
                                            {link.label.as_str()}
                                        </a>
                                    </li>
                                }
                            })
                            .collect_view()}
                    </ul>
                </div>

                <div class="right-side">
                    <div class="contract-address-container">
                        <span class="ca-label">"CA:"</span>
                        <div class="address-wrapper" on:click=on_copy title=address>
                            <span class="contract-address">{shorten_address(address)}</span>
                            <button class="copy-button" aria-label="Copy contract address">
                                <svg width="16" height="16" viewBox="0 0 24 24" fill="none" xmlns="http://www.w3.org/2000/svg">
                                    <path d=COPY_ICON_PATH fill="currentColor"/>
                                </svg>
                            </button>
                        </div>
                        <Show when=move || indicator.with(CopyIndicator::is_visible)>
                            <div class="copied-tooltip">"Copied!"</div>
                        </Show>
                    </div>
                </div>
            </div>
        </nav>
    }
}

/// Hide the indicator after `delay` unless a newer copy has replaced `ticket`.
fn schedule_hide(indicator: RwSignal<CopyIndicator>, ticket: HideTicket, delay: Duration) {
    #[cfg(feature = "hydrate")]
    {
        let millis = u32::try_from(delay.as_millis()).unwrap_or(u32::MAX);
        gloo_timers::callback::Timeout::new(millis, move || {
            indicator.update(|state| state.hide(ticket));
        })
        .forget();
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (indicator, ticket, delay);
    }
}
