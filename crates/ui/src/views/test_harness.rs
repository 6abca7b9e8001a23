use std::sync::Arc;

use dioxus::core::NoOpMutations;
use dioxus::prelude::*;
use dioxus_router::{Routable, Router};
use hub_core::Catalog;
use hub_core::model::UserId;
use services::{AnonymousIdentity, ProgressStore};
use storage::repository::Storage;

use crate::context::{UiApp, build_app_context};
use crate::views::{CatalogView, CourseDetailView, DashboardView, HomeView};

struct TestApp {
    catalog: Arc<Catalog>,
    store: Arc<ProgressStore>,
    user: UserId,
}

impl UiApp for TestApp {
    fn catalog(&self) -> Arc<Catalog> {
        Arc::clone(&self.catalog)
    }

    fn progress_store(&self) -> Arc<ProgressStore> {
        Arc::clone(&self.store)
    }

    fn current_user(&self) -> Option<UserId> {
        Some(self.user.clone())
    }
}

#[derive(Clone, PartialEq, Eq)]
pub enum ViewKind {
    Home,
    Catalog,
    Dashboard,
    CourseDetail(String),
}

#[derive(Props, Clone)]
struct ViewHarnessProps {
    app: Arc<TestApp>,
    view: ViewKind,
}

impl PartialEq for ViewHarnessProps {
    fn eq(&self, _other: &Self) -> bool {
        true
    }
}

impl Eq for ViewHarnessProps {}

#[component]
fn ViewRouterHarness(props: ViewHarnessProps) -> Element {
    let app: Arc<dyn UiApp> = props.app.clone();
    use_context_provider(|| build_app_context(&app));
    use_context_provider(|| props.view.clone());
    rsx! { Router::<TestRoute> {} }
}

#[derive(Clone, Routable, PartialEq)]
#[rustfmt::skip]
enum TestRoute {
    #[route("/")]
    Root {},
}

#[component]
fn Root() -> Element {
    let view = use_context::<ViewKind>();
    match view {
        ViewKind::Home => rsx! { HomeView {} },
        ViewKind::Catalog => rsx! { CatalogView {} },
        ViewKind::Dashboard => rsx! { DashboardView {} },
        ViewKind::CourseDetail(id) => rsx! { CourseDetailView { id } },
    }
}

pub struct ViewHarness {
    pub dom: VirtualDom,
    pub store: Arc<ProgressStore>,
    pub catalog: Arc<Catalog>,
}

impl ViewHarness {
    pub fn rebuild(&mut self) {
        self.dom.rebuild_in_place();
        drive_dom(&mut self.dom);
    }

    pub fn render(&self) -> String {
        dioxus_ssr::render(&self.dom)
    }
}

pub fn drive_dom(dom: &mut VirtualDom) {
    dom.process_events();
    dom.render_immediate(&mut NoOpMutations);
    dom.process_events();
}

pub async fn setup_view_harness(view: ViewKind) -> ViewHarness {
    let storage = Storage::in_memory();
    let user = UserId::new("test-user");
    let identity = Arc::new(AnonymousIdentity::restore(user.clone()));
    let store = Arc::new(ProgressStore::new(identity, Arc::clone(&storage.progress)));
    store.hydrate().await;

    let catalog = Arc::new(Catalog::builtin());
    let app = Arc::new(TestApp {
        catalog: Arc::clone(&catalog),
        store: Arc::clone(&store),
        user,
    });

    let dom = VirtualDom::new_with_props(ViewRouterHarness, ViewHarnessProps { app, view });

    ViewHarness { dom, store, catalog }
}
