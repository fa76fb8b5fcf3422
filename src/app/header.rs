use leptos::prelude::*;

use crate::navigation::{emphasis_class, nav_items, scroll_to_section};
use crate::sections::SectionId;
use crate::viewport::BrowserViewport;

#[component]
pub fn Header(active: ReadSignal<SectionId>, progress: ReadSignal<f64>) -> impl IntoView {
    view! {
        <ProgressBar progress />
        <nav class="fixed top-0 left-0 right-0 z-40 bg-gray-900/90 shadow-md backdrop-blur-sm">
            <ul class="flex flex-wrap justify-center gap-x-4 p-4">
                {move || {
                    nav_items(active.get())
                        .map(|item| {
                            let class = format!(
                                "text-sm font-medium px-3 py-1 rounded-md {} hover:text-blue-300 transition-colors",
                                emphasis_class(item.is_active),
                            );
                            view! {
                                <li>
                                    <button
                                        type="button"
                                        class=class
                                        data-section=item.id.as_str()
                                        on:click=move |_| scroll_to_section(&BrowserViewport, item.id)
                                    >
                                        {item.id.label()}
                                    </button>
                                </li>
                            }
                        })
                        .collect_view()
                }}
            </ul>
        </nav>
    }
}

/// Thin bar across the top of the page whose width follows the smoothed
/// scroll fraction.
#[component]
fn ProgressBar(progress: ReadSignal<f64>) -> impl IntoView {
    view! {
        <div
            class="fixed top-0 left-0 right-0 h-1 bg-blue-500 origin-left z-50"
            style:transform=move || format!("scaleX({})", progress.get().clamp(0.0, 1.0))
        />
    }
}
