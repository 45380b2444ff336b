use leptos::prelude::*;

use crate::content::{Profile, Project, Skill};

use super::icons::{ExternalLinkIcon, GithubIcon};
use super::theme::Theme;

#[component]
pub fn Hero(profile: Profile, theme: ReadSignal<Theme>) -> impl IntoView {
    let Profile {
        name,
        role,
        bio,
        avatar,
        ..
    } = profile;
    view! {
        <section class=move || format!("{} py-20 fade-up", theme.get().classes().surface)>
            <div class="max-w-6xl mx-auto px-4">
                <div class="flex flex-col md:flex-row items-center justify-between">
                    <div class="md:w-1/2 mb-8 md:mb-0">
                        <h1 class="text-4xl font-bold mb-4">{format!("Hi, I am {name}")}</h1>
                        <h2 class="text-xl mb-2">{role}</h2>
                        <p class="text-gray-600 dark:text-gray-400 mb-6">{bio}</p>
                        <a
                            href="#contact"
                            class="inline-block bg-green-100 text-green-800 px-6 py-2 rounded-md hover:bg-green-200 transition-all duration-200 transform hover:-translate-y-1 hover:scale-105 active:scale-95 shadow-md hover:shadow-lg"
                        >
                            "Contact Me"
                        </a>
                    </div>
                    <div class="md:w-1/2 flex justify-center">
                        <div class="w-64 h-64 bg-yellow-300 rounded-full overflow-hidden">
                            <img src=avatar alt="Profile" class="w-full h-full object-cover" />
                        </div>
                    </div>
                </div>
            </div>
        </section>
    }
}

#[component]
pub fn Projects(projects: Vec<Project>, theme: ReadSignal<Theme>) -> impl IntoView {
    view! {
        <section class="py-20">
            <div class="max-w-6xl mx-auto px-4">
                <h2 class="text-3xl font-bold mb-8">"Projects"</h2>
                <div class="grid grid-cols-1 md:grid-cols-2 lg:grid-cols-3 gap-8">
                    {projects
                        .into_iter()
                        .enumerate()
                        .map(|(i, project)| view! { <ProjectCard project index=i theme /> })
                        .collect_view()}
                </div>
            </div>
        </section>
    }
}

#[component]
fn ProjectCard(project: Project, index: usize, theme: ReadSignal<Theme>) -> impl IntoView {
    let Project {
        title,
        description,
        image,
        tags,
        demo,
        source,
    } = project;
    let alt = title.clone();
    view! {
        <div
            class=move || {
                format!(
                    "{} rounded-lg shadow-md overflow-hidden transform transition-all duration-200 hover:shadow-xl hover:scale-[1.03] fade-up",
                    theme.get().classes().surface,
                )
            }
            style=format!("animation-delay: {}ms", index * 100)
        >
            <div class="relative overflow-hidden">
                <img
                    src=image
                    alt=alt
                    class="w-full h-48 object-cover transition-transform duration-200 hover:scale-110"
                />
            </div>
            <div class="p-6">
                <h3 class="text-xl font-semibold mb-2">{title}</h3>
                <p class=move || format!("{} mb-4", theme.get().classes().muted)>{description}</p>
                <div class="flex flex-wrap gap-2 mb-4">
                    {tags
                        .into_iter()
                        .map(|tag| {
                            view! {
                                <span class=move || {
                                    format!(
                                        "{} px-2 py-1 rounded-md text-sm transition-all duration-200 hover:scale-110",
                                        theme.get().classes().chip,
                                    )
                                }>{tag}</span>
                            }
                        })
                        .collect_view()}
                </div>
                <div class="flex space-x-4">
                    <a
                        href=demo
                        class="flex items-center hover:text-blue-500 transition-all duration-200 hover:scale-110"
                    >
                        <ExternalLinkIcon size_class="w-4 h-4 mr-1" />
                        "Demo"
                    </a>
                    <a
                        href=source
                        class="flex items-center hover:text-blue-500 transition-all duration-200 hover:scale-110"
                    >
                        <GithubIcon size_class="w-4 h-4 mr-1" />
                        "Code"
                    </a>
                </div>
            </div>
        </div>
    }
}

#[component]
pub fn Skills(skills: Vec<Skill>, theme: ReadSignal<Theme>) -> impl IntoView {
    view! {
        <section class=move || format!("{} py-20", theme.get().classes().surface)>
            <div class="max-w-6xl mx-auto px-4">
                <h2 class="text-3xl font-bold mb-8">"Skills"</h2>
                <div class="grid grid-cols-2 md:grid-cols-3 lg:grid-cols-6 gap-6">
                    {skills
                        .into_iter()
                        .map(|skill| {
                            view! {
                                <div class=move || {
                                    format!(
                                        "{} rounded-lg p-6 text-center transition-all duration-200 hover:scale-110 cursor-pointer pop-in",
                                        theme.get().classes().skill_card,
                                    )
                                }>
                                    <div class="text-4xl mb-2">{skill.icon}</div>
                                    <div class="font-medium">{skill.name}</div>
                                </div>
                            }
                        })
                        .collect_view()}
                </div>
            </div>
        </section>
    }
}

#[component]
pub fn Footer(name: String, year: Option<i32>) -> impl IntoView {
    let line = match year {
        Some(y) => format!("© {y} {name}"),
        None => format!("© {name}"),
    };
    view! {
        <footer class="py-8 text-center text-sm opacity-70">
            <p>{line}</p>
        </footer>
    }
}
