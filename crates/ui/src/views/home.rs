use dioxus::prelude::*;
use dioxus_router::use_navigator;

use crate::components::CourseCard;
use crate::context::AppContext;
use crate::routes::Route;
use crate::vm::map_course_card;

/// Landing page: hero, the first three courses as featured cards, and the
/// category shortcuts into the catalog.
#[component]
pub fn HomeView() -> Element {
    let ctx = use_context::<AppContext>();
    let nav = use_navigator();
    let catalog = ctx.catalog();
    let progress = ctx.progress_store().progress();

    let featured = catalog
        .courses()
        .iter()
        .take(3)
        .map(|course| map_course_card(course, &progress))
        .collect::<Vec<_>>();
    let categories = catalog.categories();

    rsx! {
        div { class: "page home-page",
            section { class: "hero",
                h1 { "Welcome to Learning Hub" }
                p {
                    "Learn at your own pace with expertly designed courses. "
                    "Track your progress and achieve your learning goals."
                }
                button {
                    class: "btn btn-primary",
                    r#type: "button",
                    onclick: move |_| {
                        let _ = nav.push(Route::Catalog {});
                    },
                    "Browse Courses"
                }
            }

            section { class: "featured",
                h2 { "Featured Courses" }
                div { class: "card-grid",
                    for card in featured {
                        CourseCard { card }
                    }
                }
            }

            section { class: "categories",
                h2 { "Explore Categories" }
                div { class: "category-links",
                    for category in categories {
                        button {
                            class: "category-link",
                            r#type: "button",
                            onclick: move |_| {
                                let _ = nav.push(Route::Catalog {});
                            },
                            "{category}"
                        }
                    }
                }
            }

            section { class: "cta",
                h2 { "Start Learning Today!" }
                p { "Join thousands of learners and track your progress seamlessly." }
                button {
                    class: "btn btn-primary",
                    r#type: "button",
                    onclick: move |_| {
                        let _ = nav.push(Route::Catalog {});
                    },
                    "Get Started"
                }
            }
        }
    }
}
