use dioxus::prelude::*;
use dioxus_router::{Link, Outlet, Routable};

use crate::context::AppContext;
use crate::views::{CatalogView, CourseDetailView, DashboardView, HomeView};

#[derive(Clone, Routable, PartialEq)]
#[rustfmt::skip]
pub enum Route {
    #[layout(Layout)]
        #[route("/", HomeView)] Home {},
        #[route("/catalog", CatalogView)] Catalog {},
        #[route("/courses/:id", CourseDetailView)] CourseDetail { id: String },
        #[route("/dashboard", DashboardView)] Dashboard {},
}

#[component]
fn Layout() -> Element {
    rsx! {
        div { class: "app",
            Navbar {}
            main { class: "content",
                Outlet::<Route> {}
            }
            Footer {}
        }
    }
}

#[component]
fn Navbar() -> Element {
    let ctx = use_context::<AppContext>();
    let user = ctx.current_user();

    rsx! {
        header { class: "navbar",
            nav { class: "navbar-links",
                Link { class: "brand", to: Route::Home {}, "Learning Hub" }
                Link { to: Route::Home {}, "Home" }
                Link { to: Route::Catalog {}, "Catalog" }
                Link { to: Route::Dashboard {}, "Dashboard" }
            }
            if let Some(user) = user {
                div { class: "navbar-user", "User ID: {user}" }
            }
        }
    }
}

#[component]
fn Footer() -> Element {
    rsx! {
        footer { class: "footer",
            p { "© Learning Hub. All rights reserved." }
        }
    }
}
