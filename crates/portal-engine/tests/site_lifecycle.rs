use std::sync::Arc;

use portal_core::{Focus, NotificationKind, PublishedState, SortOrder, Viewer, VoteType};
use portal_engine::{AdminDashboard, IdeasBoard, KnowledgeViewer, MenuSettings, RecordingNotifier, TileMenu};
use portal_provider::{JsonFileProvider, SiteData};

const SITE: &str = r#"{
    "ideas": [
        {"id": "a", "title": "Dark mode", "status": "New", "points": 120, "voteCount": 12,
         "category": "UX;Mobile", "createdDate": "2024-03-01T10:00:00Z"},
        {"id": "b", "title": "Bulk export", "status": "In Progress", "points": 30, "voteCount": 3,
         "category": "Reporting", "createdDate": "2024-04-12T10:00:00Z"},
        {"id": "c", "title": "SSO for partners", "status": "Completed", "points": 60, "voteCount": 6,
         "createdDate": "2024-04-20T10:00:00Z"}
    ],
    "categories": ["UX", "Mobile", "Reporting"],
    "statuses": [{"label": "New", "value": "New"}, {"label": "In Progress", "value": "In Progress"}],
    "collections": [
        {"id": "col1", "name": "Getting Started", "subcategories": [
            {"id": "sub1", "name": "Basics", "articles": [
                {"id": "art1", "title": "Welcome"},
                {"id": "art2", "title": "Your profile"}
            ]}
        ]}
    ],
    "menus": {
        "Default Navigation": [
            {"Label": "Home", "Target": "/s/", "Type": "HomePage", "AccessRestriction": "None"},
            {"Label": "Ideas", "Target": "/ideas", "Type": "InternalLink", "AccessRestriction": "None"},
            {"Label": "Cases", "Target": "Case", "Type": "SalesforceObject", "AccessRestriction": "LoginRequired"}
        ]
    }
}"#;

async fn open_site() -> (tempfile::TempDir, Arc<JsonFileProvider>) {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("site.json");
    std::fs::write(&path, SITE).unwrap();
    let provider = JsonFileProvider::load(&path).await.unwrap();
    (dir, Arc::new(provider))
}

#[tokio::test]
async fn test_board_vote_comment_and_create_persist() {
    let (_dir, provider) = open_site().await;
    let notifier = Arc::new(RecordingNotifier::new());
    let mut board = IdeasBoard::new(provider.clone(), notifier.clone(), 10);

    board.load().await;
    board.set_sort(SortOrder::Popular);
    let titles: Vec<_> = board.view().items.iter().map(|v| v.idea.title.as_str()).collect();
    assert_eq!(titles, vec!["Dark mode", "SSO for partners", "Bulk export"]);

    board.vote("b", VoteType::Up).await;
    board.set_comment_draft("b", "Would love CSV");
    board.submit_comment("b").await;

    board.open_new_idea();
    board.new_idea_mut().title = "Offline mode".to_string();
    board.new_idea_mut().category = "Mobile".to_string();
    board.new_idea_mut().description = "Work without a connection".to_string();
    board.submit_new_idea().await;

    assert!(notifier.snapshot().iter().all(|n| n.kind == NotificationKind::Success));
    assert_eq!(board.view().total_items, 4);

    let saved = SiteData::load(provider.path()).await.unwrap();
    let bulk = saved.ideas.iter().find(|i| i.id == "b").unwrap();
    assert_eq!(bulk.points, 40);
    assert_eq!(bulk.comments[0].text, "Would love CSV");
    assert!(saved.ideas.iter().any(|i| i.title == "Offline mode"));
}

#[tokio::test]
async fn test_dashboard_analytics_from_fixture() {
    let (_dir, provider) = open_site().await;
    let notifier = Arc::new(RecordingNotifier::new());
    let mut dashboard = AdminDashboard::new(provider, notifier.clone(), 10, 5);

    dashboard.load().await;
    let summary = &dashboard.analytics().summary;
    assert_eq!(summary.total, 3);
    assert_eq!(summary.completed, 1);
    assert_eq!(summary.in_progress, 1);
    assert_eq!(summary.high_priority, 2);
    assert!(notifier.take().is_empty());
}

#[tokio::test]
async fn test_knowledge_and_menu_from_fixture() {
    let (_dir, provider) = open_site().await;

    let mut viewer = KnowledgeViewer::new(provider.clone());
    let focus = Focus {
        active_article_id: Some("art2".to_string()),
        active_collection_id: None,
    };
    viewer.load(&focus).await;
    let view = viewer.view();
    assert_eq!(view.len(), 1);
    assert!(view[0].subcategories[0].is_expanded);
    assert!(view[0].subcategories[0].articles[1].is_selected);

    let settings = MenuSettings {
        menu_name: "Default Navigation".to_string(),
        base_path: "/s".to_string(),
        icon_base: "/resource/CommunityNavigation".to_string(),
    };
    let guest = Viewer {
        is_guest: true,
        profile_name: None,
    };
    let mut menu = TileMenu::new(provider, settings, PublishedState::Live, guest);
    menu.load().await;
    let labels: Vec<_> = menu.links("/s/ideas").into_iter().map(|l| (l.item.label, l.is_active)).collect();
    assert_eq!(labels, vec![("Home".to_string(), false), ("Ideas".to_string(), true)]);
}
