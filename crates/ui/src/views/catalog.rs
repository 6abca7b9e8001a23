use dioxus::prelude::*;
use hub_core::CategoryFilter;

use crate::components::CourseCard;
use crate::context::AppContext;
use crate::vm::map_course_card;

/// Full course listing with the category filter pills.
#[component]
pub fn CatalogView() -> Element {
    let ctx = use_context::<AppContext>();
    let catalog = ctx.catalog();
    let progress = ctx.progress_store().progress();
    let mut filter = use_signal(|| CategoryFilter::All);

    let options = catalog.category_options();
    let selected = filter();
    let cards = catalog
        .filter(&selected)
        .into_iter()
        .map(|course| map_course_card(course, &progress))
        .collect::<Vec<_>>();

    rsx! {
        div { class: "page catalog-page",
            h1 { "All Courses" }

            div { class: "filter-pills",
                for option in options {
                    button {
                        class: if option == selected { "pill pill--active" } else { "pill" },
                        r#type: "button",
                        onclick: {
                            let option = option.clone();
                            move |_| filter.set(option.clone())
                        },
                        "{option.label()}"
                    }
                }
            }

            if cards.is_empty() {
                p { class: "catalog-empty", "No courses in this category yet." }
            } else {
                div { class: "card-grid",
                    for card in cards {
                        CourseCard { card }
                    }
                }
            }
        }
    }
}
