use dioxus::prelude::*;
use dioxus_router::use_navigator;

use crate::components::ProgressBar;
use crate::routes::Route;
use crate::vm::CourseCardVm;

/// Summary card for one course: title, category, completion, detail link.
#[component]
pub fn CourseCard(card: CourseCardVm) -> Element {
    let nav = use_navigator();
    let id = card.id.as_str().to_owned();
    let percent_label = card.percent_label();

    rsx! {
        div { class: "course-card",
            div { class: "course-card-body",
                h3 { class: "course-card-title", "{card.title}" }
                p { class: "course-card-category", "{card.category}" }
            }
            div { class: "course-card-progress",
                ProgressBar { percent: card.percent }
                div { class: "course-card-footer",
                    span { class: "course-card-percent", "{percent_label}" }
                    button {
                        class: "link-button",
                        r#type: "button",
                        onclick: move |_| {
                            let _ = nav.push(Route::CourseDetail { id: id.clone() });
                        },
                        "View Course"
                    }
                }
            }
        }
    }
}
