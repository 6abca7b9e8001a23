use dioxus::prelude::*;

/// Horizontal completion bar. `percent` is clamped to 100.
#[component]
pub fn ProgressBar(percent: u8) -> Element {
    let width = percent.min(100);
    rsx! {
        div { class: "progress-track",
            div { class: "progress-fill", style: "width: {width}%;" }
        }
    }
}
