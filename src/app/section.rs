use leptos::{html, prelude::*};
use leptos_use::use_element_visibility;

use crate::sections::SectionId;

pub const HEADING_CLASS: &str =
    "text-4xl font-bold mb-8 bg-gradient-to-r from-blue-400 to-purple-500 text-transparent bg-clip-text";
pub const CARD_CLASS: &str = "bg-gray-800 text-white rounded-lg shadow-md border border-gray-700";

const SECTION_CLASS: &str =
    "min-h-screen flex flex-col items-center justify-center px-4 py-16 transition-all duration-700";

/// Full-height anchored section that fades in the first time it scrolls
/// into view and stays visible afterwards.
#[component]
pub fn PageSection(id: SectionId, title: &'static str, children: Children) -> impl IntoView {
    let section_ref = NodeRef::<html::Section>::new();
    let visible = use_element_visibility(section_ref);
    let (revealed, set_revealed) = signal(false);

    Effect::new(move |_| {
        if visible.get() && !revealed.get_untracked() {
            set_revealed.set(true);
        }
    });

    view! {
        <section
            node_ref=section_ref
            id=id.as_str()
            class=move || {
                let state = if revealed.get() {
                    "opacity-100 translate-y-0"
                } else {
                    "opacity-0 translate-y-8"
                };
                format!("{SECTION_CLASS} {state}")
            }
        >
            <h2 class=HEADING_CLASS>{title}</h2>
            {children()}
        </section>
    }
}
