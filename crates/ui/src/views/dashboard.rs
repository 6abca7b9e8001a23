use dioxus::prelude::*;
use hub_core::overall_completion;

use crate::components::ProgressBar;
use crate::context::AppContext;
use crate::vm::map_course_card;

/// Aggregate view: overall completion plus a per-course summary grid.
#[component]
pub fn DashboardView() -> Element {
    let ctx = use_context::<AppContext>();
    let catalog = ctx.catalog();
    let progress = ctx.progress_store().progress();

    let overall = overall_completion(&catalog, &progress);
    let overall_label = format!("{overall}% of all lessons completed");
    let cards = catalog
        .courses()
        .iter()
        .map(|course| map_course_card(course, &progress))
        .collect::<Vec<_>>();

    rsx! {
        div { class: "page dashboard-page",
            h1 { "Your Dashboard" }

            div { class: "overall-card",
                h2 { "Overall Progress" }
                ProgressBar { percent: overall }
                p { class: "overall-label", "{overall_label}" }
            }

            h2 { "Courses" }
            div { class: "card-grid",
                for card in cards {
                    div { class: "dashboard-course",
                        h3 { "{card.title}" }
                        p { class: "dashboard-lessons", "{card.lesson_count_label()}" }
                        ProgressBar { percent: card.percent }
                        p { class: "dashboard-percent", "{card.percent_label()}" }
                    }
                }
            }
        }
    }
}
