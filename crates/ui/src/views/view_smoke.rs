use hub_core::model::{CourseId, LessonId};

use super::test_harness::{ViewKind, setup_view_harness};

#[tokio::test(flavor = "current_thread")]
async fn home_view_smoke_renders_hero_and_featured() {
    let mut harness = setup_view_harness(ViewKind::Home).await;
    harness.rebuild();
    let html = harness.render();

    assert!(html.contains("Welcome to Learning Hub"), "missing hero in {html}");
    assert!(html.contains("Featured Courses"), "missing featured section");
    assert!(html.contains("Web Development 101"), "missing first course");
    assert!(html.contains("Explore Categories"), "missing categories");
}

#[tokio::test(flavor = "current_thread")]
async fn catalog_view_smoke_renders_every_course_and_filter() {
    let mut harness = setup_view_harness(ViewKind::Catalog).await;
    harness.rebuild();
    let html = harness.render();

    for course in harness.catalog.courses() {
        assert!(html.contains(course.title()), "missing {}", course.title());
    }
    assert!(html.contains("All"), "missing All filter pill");
    assert!(html.contains("Design"), "missing category pill");
    assert!(html.contains("0% completed"), "missing zero progress label");
}

#[tokio::test(flavor = "current_thread")]
async fn dashboard_view_smoke_reflects_overall_progress() {
    let mut harness = setup_view_harness(ViewKind::Dashboard).await;

    // Complete all of React from Scratch: 4 of the 16 built-in lessons.
    let course = CourseId::new("react-from-scratch");
    for lesson in ["react-intro", "components", "state-hooks", "context-api"] {
        harness
            .store
            .toggle_lesson(&course, &LessonId::new(lesson))
            .expect("toggle");
    }

    harness.rebuild();
    let html = harness.render();

    assert!(html.contains("Your Dashboard"), "missing heading in {html}");
    assert!(
        html.contains("25% of all lessons completed"),
        "missing overall label in {html}"
    );
    assert!(html.contains("100% completed"), "missing finished course");
}

#[tokio::test(flavor = "current_thread")]
async fn course_detail_smoke_renders_lessons() {
    let mut harness =
        setup_view_harness(ViewKind::CourseDetail("web-dev-101".to_owned())).await;
    harness.rebuild();
    let html = harness.render();

    assert!(html.contains("Web Development 101"), "missing title in {html}");
    assert!(html.contains("Introduction to HTML"), "missing lesson title");
    assert!(html.contains("Mark as Complete"), "missing toggle label");
    assert!(html.contains("0% Completed"), "missing percent label");
}

#[tokio::test(flavor = "current_thread")]
async fn course_detail_smoke_renders_not_found_state() {
    let mut harness = setup_view_harness(ViewKind::CourseDetail("no-such-course".to_owned())).await;
    harness.rebuild();
    let html = harness.render();

    assert!(html.contains("Course not found"), "missing not-found in {html}");
    assert!(html.contains("Go back to Catalog"), "missing escape link");
}

#[tokio::test(flavor = "current_thread")]
async fn course_detail_smoke_shows_completed_lessons() {
    let mut harness =
        setup_view_harness(ViewKind::CourseDetail("tailwind-css".to_owned())).await;

    let course = CourseId::new("tailwind-css");
    harness
        .store
        .toggle_lesson(&course, &LessonId::new("tailwind-intro"))
        .expect("toggle");

    harness.rebuild();
    let html = harness.render();

    assert!(html.contains("33% Completed"), "missing percent in {html}");
    assert!(html.contains("lesson--completed"), "missing completed class");
}
