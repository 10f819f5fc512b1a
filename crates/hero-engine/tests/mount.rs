use config::{
    Error, HttpSource, StaticSource,
    test_support::{local_client, serve_once},
};
use hero_engine::{
    FALLBACK_TEXT, LOG_TARGET, Mount, RenderPort, mount,
    test_support::{TestPage, slides_json},
};
use tracing_subscriber::prelude::*;

#[tokio::test]
async fn http_500_renders_fallback_and_logs_once() {
    let (layer, captured) = logging::capture::layer();
    let _guard = tracing::subscriber::set_default(tracing_subscriber::registry().with(layer));

    let url = serve_once(500, "boom").await.expect("serve");
    let source = HttpSource::with_client(url.clone(), local_client());
    let page = TestPage::new();
    let outcome = mount(page.dom.clone(), page.root, &source).await;

    match outcome {
        Mount::Fallback(Error::Status { status, .. }) => assert_eq!(status, 500),
        Mount::Fallback(other) => panic!("unexpected error {other:?}"),
        Mount::Ready(_) => panic!("expected fallback"),
    }

    let children = page.dom.children(page.root);
    assert_eq!(children.len(), 1);
    assert_eq!(page.dom.tag(children[0]).as_deref(), Some("pre"));
    assert_eq!(page.dom.text_content(page.root), FALLBACK_TEXT);
    assert!(page.dom.find_by_class(page.root, "btn").is_empty());
    assert!(page.dom.find_by_class(page.root, "hero").is_empty());

    let logs = captured.for_target(LOG_TARGET);
    assert_eq!(logs.len(), 1, "{logs:?}");
    assert_eq!(logs[0].level, "ERROR");
    assert!(logs[0].message.contains("500"), "{}", logs[0].message);
    assert!(logs[0].message.contains(&url));
}

#[tokio::test]
async fn malformed_document_falls_back() {
    let page = TestPage::new();
    let source = StaticSource::new(r#"{"slides": [{"alt": "no src"}]}"#).named("inline.json");
    let outcome = mount(page.dom.clone(), page.root, &source).await;
    let Mount::Fallback(err) = outcome else {
        panic!("expected fallback");
    };
    assert!(matches!(err, Error::Parse { .. }));
    assert_eq!(err.location(), "inline.json");
    assert_eq!(
        page.dom.to_html(page.host),
        format!("<div><template shadowrootmode=\"open\"><pre>{FALLBACK_TEXT}</pre></template></div>")
    );
}

#[tokio::test]
async fn successful_mount_builds_the_whole_widget() {
    let page = TestPage::new();
    let mount = page.mount_json(&slides_json(3, false, None)).await;
    let hero = mount.hero().expect("mounted");
    let view = hero.view();

    assert_eq!(page.dom.children(page.root), vec![view.style, view.hero]);
    assert_eq!(page.dom.find_by_class(page.root, "slide").len(), 3);
    assert_eq!(page.dom.find_by_class(page.root, "dot").len(), 3);
    assert_eq!(page.dom.find_by_class(page.root, "btn"), vec![view.prev, view.next]);
    assert_eq!(page.current_dots(view), vec![0]);
    assert_eq!(page.dom.preloaded(), vec!["slide-1.jpg".to_string()]);

    let html = page.dom.to_html(page.host);
    assert!(html.starts_with("<div><template shadowrootmode=\"open\"><style>"));
    assert!(html.contains("<section class=\"hero\" role=\"region\" aria-label=\"Featured\">"));
    assert!(html.contains("<div class=\"track\" style=\"transform:translateX(0%)\">"));
}

#[tokio::test]
async fn title_and_link_caption_has_no_subtitle() {
    let page = TestPage::new();
    let mount = page
        .mount_json(r#"{"slides":[{"src":"a.jpg","title":"Spring","href":"/spring"}]}"#)
        .await;
    let hero = mount.hero().expect("mounted");
    let cap = page.dom.find_by_class(hero.view().slides[0], "caption");
    assert_eq!(cap.len(), 1);
    let tags: Vec<String> = page
        .dom
        .children(cap[0])
        .into_iter()
        .filter_map(|n| page.dom.tag(n))
        .collect();
    assert_eq!(tags, vec!["h2", "a"]);
}

#[tokio::test]
async fn host_content_is_preserved() {
    let page = TestPage::new();
    let note = page.dom.create_text("before");
    page.dom.append_child(page.root, note);

    let mount = page.mount_json(&slides_json(1, false, None)).await;
    let view = mount.hero().expect("mounted").view().clone();
    assert_eq!(page.dom.children(page.root), vec![note, view.style, view.hero]);
}

#[tokio::test]
async fn single_slide_navigation_stays_put() {
    let page = TestPage::new();
    let mount = page.mount_json(&slides_json(1, false, None)).await;
    let hero = mount.hero().expect("mounted");
    hero.controller().next();
    hero.controller().prev();
    hero.controller().go_to(-3);
    assert_eq!(hero.state().current_index, 0);
    assert_eq!(page.current_dots(hero.view()), vec![0]);
}
