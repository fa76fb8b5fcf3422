use leptos::{ev, prelude::*};
use leptos_meta::Title;
use leptos_use::{use_raf_fn, utils::Pausable, UseRafFnCallbackArgs};

use crate::config::SpringConfig;
use crate::content::PROFILE;
use crate::navigation::scroll_to_section;
use crate::progress::Spring;
use crate::sections::SectionId;
use crate::tracker::SectionTracker;
use crate::viewport::{BrowserViewport, Viewport};

use super::header::Header;
use super::resume::{Education, Experience, Projects, Skills};
use super::section::{PageSection, CARD_CLASS};

const BUILD_TIME: &str = env!("BUILD_TIME");
const BUILD_YEAR: &str = env!("BUILD_YEAR");

#[component]
pub fn HomePage() -> impl IntoView {
    let (active, set_active) = signal(SectionId::default());
    let (progress, set_progress) = signal(0.0_f64);
    let tracker = StoredValue::new(SectionTracker::new());
    let spring = StoredValue::new(Spring::new(SpringConfig::PROGRESS, 0.0));
    // true while the frame loop has to step the spring
    let (animating, set_animating) = signal(false);

    // the tracker is the only writer of `active`
    let refresh = move || {
        let viewport = BrowserViewport;
        let mut changed = None;
        tracker.update_value(|t| changed = t.track(&viewport));
        if let Some(id) = changed {
            log::debug!("active section: {id}");
            set_active.set(id);
        }
        match viewport.scroll_progress() {
            Ok(fraction) => {
                let mut moving = false;
                spring.update_value(|s| moving = s.set_target(fraction));
                if moving && !animating.get_untracked() {
                    set_animating.set(true);
                }
            }
            Err(e) => log::warn!("skipping progress update: {e}"),
        }
    };

    // pick up the initial position once hydrated (reloads keep the offset)
    Effect::new(move |_| refresh());

    let on_scroll = window_event_listener(ev::scroll, move |_| refresh());
    let on_resize = window_event_listener(ev::resize, move |_| refresh());
    on_cleanup(move || {
        on_scroll.remove();
        on_resize.remove();
    });

    let Pausable { pause, resume, .. } = use_raf_fn(move |args: UseRafFnCallbackArgs| {
        let mut value = 0.0;
        let mut settled = false;
        spring.update_value(|s| {
            value = s.step(args.delta);
            settled = s.is_at_rest();
        });
        set_progress.set(value);
        if settled {
            set_animating.set(false);
        }
    });

    Effect::new(move |_| {
        if animating.get() {
            resume();
        } else {
            pause();
        }
    });

    view! {
        <Title text="Portfolio" />
        <div class="min-h-screen bg-gradient-to-br from-gray-900 to-gray-800 text-white font-sans">
            <Header active progress />
            <Hero />
            <About />
            <Skills />
            <Experience />
            <Education />
            <Projects />
            <Contact />
            <footer class="py-8 text-center text-sm text-gray-500">
                <p>{format!("© {BUILD_YEAR} {}", PROFILE.name)}</p>
                <p class="text-xs">"Built " {BUILD_TIME}</p>
            </footer>
        </div>
    }
}

#[component]
fn Hero() -> impl IntoView {
    view! {
        <section
            id=SectionId::Hero.as_str()
            class="relative min-h-screen flex items-center justify-center text-center px-4"
        >
            <div class="bg-gray-900/80 p-8 rounded-lg backdrop-blur-sm">
                <h1 class="text-6xl font-bold mb-4 bg-gradient-to-r from-blue-400 to-purple-500 text-transparent bg-clip-text">
                    {PROFILE.name}
                </h1>
                <p class="text-2xl mb-8 font-light">{PROFILE.tagline}</p>
                <div class="flex justify-center space-x-4">
                    <button
                        type="button"
                        class="px-4 py-2 rounded-md bg-blue-500 hover:bg-blue-600 text-white"
                        on:click=move |_| scroll_to_section(&BrowserViewport, SectionId::Contact)
                    >
                        "Contact Me"
                    </button>
                    <button
                        type="button"
                        class="px-4 py-2 rounded-md border text-blue-400 border-blue-400 hover:bg-blue-400 hover:text-white"
                        on:click=move |_| scroll_to_section(&BrowserViewport, SectionId::About)
                    >
                        "Learn More"
                    </button>
                </div>
            </div>
            <button
                type="button"
                aria-label="Scroll to About"
                class="absolute bottom-10 left-1/2 -translate-x-1/2 animate-bounce text-blue-400"
                on:click=move |_| scroll_to_section(&BrowserViewport, SectionId::About)
            >
                <svg
                    class="w-8 h-8"
                    viewBox="0 0 24 24"
                    fill="none"
                    stroke="currentColor"
                    stroke-width="2"
                    stroke-linecap="round"
                    stroke-linejoin="round"
                >
                    <polyline points="6 9 12 15 18 9" />
                </svg>
            </button>
        </section>
    }
}

#[component]
fn About() -> impl IntoView {
    view! {
        <PageSection id=SectionId::About title="About Me">
            <div class=format!("max-w-3xl w-full p-6 {CARD_CLASS}")>
                {PROFILE
                    .bio
                    .iter()
                    .map(|paragraph| view! { <p class="text-lg mb-4 last:mb-0">{*paragraph}</p> })
                    .collect_view()}
            </div>
        </PageSection>
    }
}

#[component]
fn Contact() -> impl IntoView {
    let row = "flex items-center space-x-2 transition-transform hover:scale-105";
    view! {
        <PageSection id=SectionId::Contact title="Contact">
            <div class=format!("max-w-md w-full p-6 space-y-4 {CARD_CLASS}")>
                <div class=row>
                    <span class="text-blue-400">"✉"</span>
                    <a href=format!("mailto:{}", PROFILE.email)>{PROFILE.email}</a>
                </div>
                <div class=row>
                    <span class="text-blue-400">"☎"</span>
                    <a href=format!("tel:{}", PROFILE.phone)>{PROFILE.phone}</a>
                </div>
                <div class=row>
                    <span class="text-blue-400">"↗"</span>
                    <a
                        href=PROFILE.linkedin.href
                        target="_blank"
                        rel="noopener noreferrer"
                        class="text-blue-400 hover:underline"
                    >
                        {PROFILE.linkedin.label}
                    </a>
                </div>
                <div class=row>
                    <span class="text-blue-400">"↗"</span>
                    <a
                        href=PROFILE.github.href
                        target="_blank"
                        rel="noopener noreferrer"
                        class="text-blue-400 hover:underline"
                    >
                        {PROFILE.github.label}
                    </a>
                </div>
            </div>
        </PageSection>
    }
}
