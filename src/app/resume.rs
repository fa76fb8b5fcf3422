use leptos::prelude::*;

use crate::content::{EDUCATION, EXPERIENCE, PROJECTS, SKILLS};
use crate::navigation::open_external;
use crate::sections::SectionId;
use crate::viewport::BrowserViewport;

use super::section::{PageSection, CARD_CLASS};

#[component]
pub fn Skills() -> impl IntoView {
    view! {
        <PageSection id=SectionId::Skills title="Skills">
            <div class="grid grid-cols-1 md:grid-cols-2 gap-6 max-w-4xl w-full">
                {SKILLS
                    .iter()
                    .map(|entry| {
                        view! {
                            <div
                                data-card="skill"
                                class=format!(
                                    "h-full p-6 {CARD_CLASS} hover:bg-gray-700 transition hover:scale-105 active:scale-95",
                                )
                            >
                                <h3 class="text-xl font-semibold text-blue-400 mb-2">{entry.skill}</h3>
                                <p class="text-gray-300">{entry.tools}</p>
                            </div>
                        }
                    })
                    .collect_view()}
            </div>
        </PageSection>
    }
}

#[component]
pub fn Experience() -> impl IntoView {
    view! {
        <PageSection id=SectionId::Experience title="Experience">
            {EXPERIENCE
                .iter()
                .map(|job| {
                    view! {
                        <div data-card="experience" class=format!("max-w-3xl w-full p-6 mb-6 {CARD_CLASS}")>
                            <h3 class="text-2xl font-semibold text-blue-400">{job.role}</h3>
                            <p class="text-gray-300 mb-4">
                                {format!("{} | {} | {}", job.company, job.location, job.period)}
                            </p>
                            <ul class="list-disc pl-5 space-y-2 text-gray-200">
                                {job
                                    .highlights
                                    .iter()
                                    .map(|line| view! { <li>{*line}</li> })
                                    .collect_view()}
                            </ul>
                        </div>
                    }
                })
                .collect_view()}
        </PageSection>
    }
}

#[component]
pub fn Education() -> impl IntoView {
    view! {
        <PageSection id=SectionId::Education title="Education">
            <div class="space-y-6 max-w-3xl w-full">
                {EDUCATION
                    .iter()
                    .map(|edu| {
                        view! {
                            <div
                                data-card="education"
                                class=format!("p-6 {CARD_CLASS} transition hover:scale-[1.02]")
                            >
                                <h3 class="text-xl font-semibold text-blue-400">{edu.degree}</h3>
                                <p class="text-gray-300 mb-2">
                                    {format!("{} | {} | {}", edu.institution, edu.location, edu.year)}
                                </p>
                                <p class="text-gray-200">
                                    "Score: " <span class="font-semibold">{edu.score}</span>
                                </p>
                            </div>
                        }
                    })
                    .collect_view()}
            </div>
        </PageSection>
    }
}

#[component]
pub fn Projects() -> impl IntoView {
    view! {
        <PageSection id=SectionId::Projects title="Projects">
            <div class="space-y-6 max-w-4xl w-full">
                {PROJECTS
                    .iter()
                    .map(|project| {
                        view! {
                            <div
                                data-card="project"
                                class=format!("p-6 {CARD_CLASS} transition hover:scale-[1.02]")
                            >
                                <h3 class="text-2xl font-semibold text-blue-400 mb-2">
                                    {project.title}
                                </h3>
                                <p class="mb-4 text-gray-200">{project.description}</p>
                                <div class="flex flex-wrap gap-2 mb-4">
                                    {project
                                        .technologies
                                        .iter()
                                        .map(|tech| {
                                            view! {
                                                <span class="px-2 py-0.5 rounded-full text-xs bg-blue-600 text-white">
                                                    {*tech}
                                                </span>
                                            }
                                        })
                                        .collect_view()}
                                </div>
                                {project
                                    .external_link()
                                    .map(|link| {
                                        view! {
                                            <button
                                                type="button"
                                                class="px-4 py-2 rounded-md border text-blue-400 border-blue-400 hover:bg-blue-400 hover:text-white"
                                                on:click=move |_| open_external(&BrowserViewport, link)
                                            >
                                                "View Project"
                                            </button>
                                        }
                                    })}
                            </div>
                        }
                    })
                    .collect_view()}
            </div>
        </PageSection>
    }
}

#[cfg(all(test, feature = "ssr"))]
mod tests {
    use super::*;

    fn render<V: IntoView>(f: impl FnOnce() -> V) -> String {
        Owner::new().with(|| f().to_html())
    }

    fn escaped(s: &str) -> String {
        s.replace('&', "&amp;")
    }

    #[test]
    fn test_skills_render_every_card_in_order() {
        let html = render(|| view! { <Skills /> });
        assert_eq!(html.matches(r#"data-card="skill""#).count(), SKILLS.len());
        assert_eq!(SKILLS.len(), 8);

        let positions = SKILLS
            .iter()
            .map(|s| html.find(&escaped(s.skill)).expect("skill should be rendered"))
            .collect::<Vec<_>>();
        assert!(positions.windows(2).all(|w| w[0] < w[1]));
    }

    #[test]
    fn test_projects_only_link_real_targets() {
        let html = render(|| view! { <Projects /> });
        assert_eq!(html.matches(r#"data-card="project""#).count(), 3);
        assert_eq!(html.matches("View Project").count(), 2);
        assert!(html.contains("Data Visualization Dashboard"));
    }

    #[test]
    fn test_experience_lists_every_highlight() {
        let html = render(|| view! { <Experience /> });
        let highlights = EXPERIENCE.iter().map(|e| e.highlights.len()).sum::<usize>();
        assert_eq!(html.matches("<li>").count(), highlights);
    }

    #[test]
    fn test_education_cards() {
        let html = render(|| view! { <Education /> });
        assert_eq!(html.matches(r#"data-card="education""#).count(), EDUCATION.len());
        assert!(html.contains(r#"id="education""#));
    }
}
