mod contact_form;
mod header;
mod homepage;
mod icons;
pub mod theme;

use leptos::{either::Either, prelude::*};
use leptos_meta::*;

use crate::content::{self, Site};
use crate::contact::ContactState;
use contact_form::ContactSection;
use header::Header;
use homepage::{Footer, Hero, Projects, Skills};
use theme::Theme;

#[component]
pub fn App() -> impl IntoView {
    // Provides context that manages stylesheets, titles, meta tags, etc.
    provide_meta_context();

    match content::site() {
        Ok(site) => Either::Left(view! { <Portfolio site=site.clone() /> }),
        Err(e) => {
            log::error!("{e}");
            Either::Right(view! {
                <main class="min-h-screen flex items-center justify-center">
                    <p class="text-red-500">{e.to_string()}</p>
                </main>
            })
        }
    }
}

/// The whole page. Holds the only mutable state: the theme and the contact
/// form (data, errors from the last submit, delivery notice).
#[component]
fn Portfolio(site: Site) -> impl IntoView {
    let (theme, set_theme) = signal(Theme::default());
    let (contact, set_contact) = signal(ContactState::default());

    let Site {
        profile,
        projects,
        skills,
    } = site;
    let title = format!("{} - Portfolio", profile.name);
    let brand = profile.brand.clone();
    let footer_name = profile.name.clone();
    let description = profile.bio.clone();

    view! {
        <Title text=title />
        <Meta name="description" content=description />
        <div
            class=move || {
                let theme = theme.get();
                format!(
                    "min-h-screen transition-colors duration-200 {}{}",
                    theme.classes().page,
                    if theme.is_dark() { " dark" } else { "" },
                )
            }
        >
            <Header brand theme set_theme />
            <Hero profile theme />
            <Projects projects theme />
            <Skills skills theme />
            <ContactSection theme contact set_contact />
            <Footer name=footer_name year=content::build_year() />
        </div>
    }
}
