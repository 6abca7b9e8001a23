use dioxus::prelude::*;
use dioxus_router::use_navigator;
use hub_core::course_completion;
use hub_core::model::CourseId;

use crate::components::ProgressBar;
use crate::context::AppContext;
use crate::routes::Route;
use crate::vm::lesson_html;

/// Single-course page: description, completion bar, and the lesson list.
///
/// Clicking a lesson toggles completion. The commit is optimistic: the list
/// updates immediately and the persistence write runs in the background; if
/// the write fails a notice appears but the shown progress is kept.
#[component]
pub fn CourseDetailView(id: String) -> Element {
    let ctx = use_context::<AppContext>();
    let nav = use_navigator();
    let catalog = ctx.catalog();
    let store = ctx.progress_store();
    let course_id = CourseId::new(id);

    let store_for_signal = store.clone();
    let progress = use_signal(move || store_for_signal.progress());
    let mut save_error = use_signal(|| None::<String>);

    let Some(course) = catalog.get(&course_id).cloned() else {
        return rsx! {
            div { class: "page not-found",
                h1 { "Course not found" }
                p { "The course you are looking for does not exist." }
                button {
                    class: "link-button",
                    r#type: "button",
                    onclick: move |_| {
                        let _ = nav.push(Route::Catalog {});
                    },
                    "Go back to Catalog"
                }
            }
        };
    };

    let snapshot = progress();
    let percent = course_completion(&course, &snapshot);
    let percent_label = format!("{percent}% Completed");

    rsx! {
        div { class: "page course-detail",
            h1 { "{course.title()}" }
            p { class: "course-description", "{course.description()}" }
            ProgressBar { percent }
            p { class: "course-percent", "{percent_label}" }

            if let Some(message) = save_error() {
                p { class: "save-error",
                    "Progress could not be saved ({message}). Your changes are shown but may be lost."
                }
            }

            h2 { "Lessons" }
            div { class: "lesson-list",
                for lesson in course.lessons().iter().cloned() {
                    {
                        let completed = snapshot.is_completed(&course_id, lesson.id());
                        let store = store.clone();
                        let course_id = course_id.clone();
                        let lesson_id = lesson.id().clone();
                        let mut progress = progress;
                        let content = lesson_html(lesson.content());
                        let status = if completed { "Completed" } else { "Mark as Complete" };
                        rsx! {
                            div {
                                class: if completed { "lesson lesson--completed" } else { "lesson" },
                                onclick: move |_| {
                                    match store.toggle_lesson(&course_id, &lesson_id) {
                                        Ok(snapshot) => {
                                            progress.set(snapshot);
                                            save_error.set(None);
                                            let store = store.clone();
                                            spawn(async move {
                                                if let Err(err) = store.persist().await {
                                                    save_error.set(Some(err.to_string()));
                                                }
                                            });
                                        }
                                        Err(err) => save_error.set(Some(err.to_string())),
                                    }
                                },
                                div { class: "lesson-header",
                                    h3 { "{lesson.title()}" }
                                    span {
                                        class: if completed { "lesson-status lesson-status--done" } else { "lesson-status" },
                                        "{status}"
                                    }
                                }
                                div { class: "lesson-content", dangerous_inner_html: "{content}" }
                            }
                        }
                    }
                }
            }

            button {
                class: "btn btn-primary",
                r#type: "button",
                onclick: move |_| {
                    let _ = nav.push(Route::Catalog {});
                },
                "Back to Catalog"
            }
        }
    }
}
