use std::fs;
use std::path::PathBuf;
use std::sync::{Arc, Mutex};
use std::time::{SystemTime, UNIX_EPOCH};

use chrono::NaiveDate;
use rusqlite::Connection;

use crate::config::{
    apply_env_overrides, ensure_webview_data_dir, DEFAULT_SHEET_URL, SHEET_FORMAT_ENV,
    SHEET_URL_ENV,
};
use crate::domain::entities::board::{
    LoadState, Priority, RequirementView, SortDirection, SortKey, SortState, StatusFilter,
};
use crate::domain::entities::settings::{Settings, SheetFormat, Theme};
use crate::domain::entities::sheet::{ContentLine, RawRow, RowTag};
use crate::domain::rules::deadline::{deadline_days, parse_review_date, UNKNOWN_DEADLINE_DAYS};
use crate::domain::rules::deliverable::{classify_deliverable, DeliverableTier};
use crate::domain::rules::email::is_valid_email;
use crate::domain::rules::numbering::number_content_lines;
use crate::infra::import::csv::read_csv_rows;
use crate::infra::import::xlsx::{cell_to_string, sheet_row_number};
use crate::infra::source::local_file::LocalSheetFile;
use crate::infra::source::published::export_url;
use crate::infra::sqlite::repo::SqliteRepo;
use crate::infra::sqlite::schema::init_db;
use crate::ui::components::sort_controls::{
    sort_indicator, status_filter_from_value, status_filter_value, ALL_STATUSES_VALUE,
};
use crate::ui::state::app_state::{published_source, Notice, NoticeLevel};
use crate::ui::style::{deliverable_line_style, priority_badge_style};
use crate::usecase::ports::outbox::{FeedbackEvent, FeedbackOutbox};
use crate::usecase::ports::sheet_source::{
    SheetError, SheetPayload, SheetSource, SourceChoice, WorkbookTabs,
};
use crate::usecase::services::board_service::{
    arrange_views, build_views, default_version, resolve_version, status_options, visible_views,
};
use crate::usecase::services::feedback_service::{
    FeedbackError, FeedbackService, APPROVAL_KIND, SUBSCRIPTION_KIND,
};
use crate::usecase::services::settings_service::SettingsService;
use crate::usecase::services::sheet_service::{
    parse_payload, snapshot_from_rows, snapshot_from_tabs, SheetService, CONTENT_TAB, LINKS_TAB,
    REQUIREMENTS_TAB, STAKEHOLDERS_TAB,
};

fn unique_test_dir(prefix: &str) -> PathBuf {
    let nanos = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .expect("clock should be after epoch")
        .as_nanos();
    std::env::temp_dir().join(format!("brd-{prefix}-{nanos}"))
}

fn today() -> NaiveDate {
    NaiveDate::from_ymd_opt(2024, 3, 1).expect("valid date")
}

fn content(key: &str, topic: &str, bullet: &str, sub: &str) -> ContentLine {
    ContentLine {
        key: key.to_string(),
        topic: topic.to_string(),
        bullet: bullet.to_string(),
        sub_bullet: sub.to_string(),
    }
}

fn row(line: usize, cells: &[&str]) -> RawRow {
    RawRow::new(line, cells.iter().map(|c| c.to_string()).collect())
}

fn view(title: &str, status: &str, deadline: u32) -> RequirementView {
    RequirementView {
        key: title.to_lowercase(),
        title: title.to_string(),
        subtitle: String::new(),
        document_version: "v1".to_string(),
        status: status.to_string(),
        priority: Priority::from_label(status),
        review_by: String::new(),
        note: String::new(),
        deliverables: Vec::new(),
        stakeholders: Vec::new(),
        links: Vec::new(),
        deadline_days: deadline,
    }
}

const SAMPLE_CSV: &str = "\
Tag,Version,Title,Key,Subtitle,Status,Review By,Note
true,v1,Search,search,Find exams fast,High,Review in 5 days,
true,v1,Checkout,checkout,\"Pay, then book\",Critical,2024-03-10,Needs legal sign-off
false,v1,Hidden,hidden,,Low,,
true,v2,Profile,profile,,Medium,Final review,
content,search,Filters,By product,
content,search,,By level,Beginner
content,search,Results,Paging,
content,checkout,Payment,Cards,
stakeholder,search,Jane Doe
stakeholder,checkout,Sam Roe
link,search,Figma,https://figma.example/search
link,orphan,Ghost,https://example.com
";

#[test]
fn numbering_rebuilds_topics_and_bullets() {
    let lines = vec![
        content("k", "A", "x", ""),
        content("k", "A", "y", ""),
        content("k", "B", "z", ""),
    ];

    let rendered = number_content_lines(&lines);

    assert_eq!(rendered, vec!["1.0 A", "1.1 x", "1.2 y", "2.0 B", "2.1 z"]);
}

#[test]
fn numbering_nests_sub_bullets_and_skips_empty_cells() {
    let lines = vec![
        content("k", "", "orphan bullet", ""),
        content("k", "Topic", "Bullet", "first"),
        content("k", "", "Bullet", "second"),
        content("k", "", "", ""),
        content("k", "", "Next", ""),
    ];

    let rendered = number_content_lines(&lines);

    assert_eq!(
        rendered,
        vec![
            "1.0 Topic",
            "1.1 Bullet",
            "1.1.1 first",
            "1.1.2 second",
            "1.2 Next",
        ]
    );
}

#[test]
fn numbering_counts_repeated_bullet_rows() {
    let lines = vec![
        content("k", "A", "TBD", ""),
        content("k", "A", "TBD", ""),
        content("k", "A", "y", ""),
        content("k", "", "y", "nested"),
    ];

    let rendered = number_content_lines(&lines);

    assert_eq!(
        rendered,
        vec!["1.0 A", "1.1 TBD", "1.2 TBD", "1.3 y", "1.3.1 nested"]
    );
}

#[test]
fn deliverable_tiers_follow_dot_depth() {
    assert_eq!(classify_deliverable("1.0 Topic").tier, DeliverableTier::Header);
    assert_eq!(classify_deliverable("2 Topic").tier, DeliverableTier::Header);
    assert_eq!(classify_deliverable("1.2 Bullet").tier, DeliverableTier::Level1);
    assert_eq!(classify_deliverable("1.2.3 Sub").tier, DeliverableTier::Level2);
    assert_eq!(
        classify_deliverable("1.2.3.4 Deep").tier,
        DeliverableTier::Scaled(3)
    );

    let plain = classify_deliverable("No number here");
    assert_eq!(plain.tier, DeliverableTier::Plain);
    assert_eq!(plain.number, None);
    assert_eq!(plain.text, "No number here");

    let line = classify_deliverable("3.1 Keep filters");
    assert_eq!(line.number.as_deref(), Some("3.1"));
    assert_eq!(line.text, "Keep filters");
}

#[test]
fn deadline_reads_phrases_dates_and_unknowns() {
    let today = today();

    assert_eq!(deadline_days("Review in 5 days", today), 5);
    assert_eq!(deadline_days("1 day left", today), 1);
    assert_eq!(deadline_days("Due today", today), 0);
    assert_eq!(deadline_days("Final review", today), 0);
    assert_eq!(deadline_days("Final review in 3 days", today), 3);
    assert_eq!(deadline_days("today, or within 2 days", today), 2);
    assert_eq!(deadline_days("2024-03-10", today), 9);
    assert_eq!(deadline_days("2024-02-01", today), 0);
    assert_eq!(deadline_days("whenever", today), UNKNOWN_DEADLINE_DAYS);
    assert_eq!(deadline_days("", today), UNKNOWN_DEADLINE_DAYS);

    assert_eq!(
        parse_review_date("March 5, 2024"),
        NaiveDate::from_ymd_opt(2024, 3, 5)
    );
    assert_eq!(
        parse_review_date("03/05/2024"),
        NaiveDate::from_ymd_opt(2024, 3, 5)
    );
}

#[test]
fn priority_labels_map_to_importance() {
    assert_eq!(Priority::from_label("critical"), Priority::Critical);
    assert_eq!(Priority::from_label(" High "), Priority::High);
    assert_eq!(Priority::from_label("In Review"), Priority::Unknown);
    assert!(Priority::Critical.importance() > Priority::High.importance());
    assert!(Priority::Low.importance() > Priority::Unknown.importance());
}

#[test]
fn priority_sort_descending_breaks_ties_by_title() {
    let views = vec![
        view("Zeta", "High", 3),
        view("alpha", "High", 7),
        view("Beta", "Critical", 9),
        view("Gamma", "Low", 1),
        view("Delta", "Someday", 2),
    ];

    let arranged = arrange_views(&views, SortState::default(), &StatusFilter::All);
    let titles: Vec<&str> = arranged.iter().map(|v| v.title.as_str()).collect();

    assert_eq!(titles, vec!["Beta", "alpha", "Zeta", "Gamma", "Delta"]);

    let ascending = SortState {
        key: SortKey::Priority,
        direction: SortDirection::Asc,
    };
    let arranged = arrange_views(&views, ascending, &StatusFilter::All);
    let titles: Vec<&str> = arranged.iter().map(|v| v.title.as_str()).collect();

    assert_eq!(titles, vec!["Delta", "Gamma", "alpha", "Zeta", "Beta"]);
}

#[test]
fn deadline_sort_puts_soonest_first() {
    let views = vec![
        view("Later", "High", 30),
        view("Unknown", "High", UNKNOWN_DEADLINE_DAYS),
        view("Now", "Low", 0),
        view("Also now", "Low", 0),
    ];
    let sort = SortState::default().select(SortKey::Deadline);

    let arranged = arrange_views(&views, sort, &StatusFilter::All);
    let titles: Vec<&str> = arranged.iter().map(|v| v.title.as_str()).collect();

    assert_eq!(sort.direction, SortDirection::Asc);
    assert_eq!(titles, vec!["Also now", "Now", "Later", "Unknown"]);
}

#[test]
fn sort_state_toggles_on_repeat_and_resets_on_new_key() {
    let initial = SortState::default();
    assert_eq!(initial.key, SortKey::Priority);
    assert_eq!(initial.direction, SortDirection::Desc);

    let flipped = initial.select(SortKey::Priority);
    assert_eq!(flipped.direction, SortDirection::Asc);

    let deadline = flipped.select(SortKey::Deadline);
    assert_eq!(deadline.key, SortKey::Deadline);
    assert_eq!(deadline.direction, SortDirection::Asc);

    let back = deadline.select(SortKey::Priority);
    assert_eq!(back.direction, SortDirection::Desc);
}

#[test]
fn status_filter_keeps_exact_matches_only() {
    let views = vec![
        view("One", "High", 1),
        view("Two", "Low", 2),
        view("Three", "High", 3),
    ];
    let filter = StatusFilter::Status("High".to_string());

    let arranged = arrange_views(&views, SortState::default(), &filter);

    assert_eq!(arranged.len(), 2);
    assert!(arranged.iter().all(|v| v.status == "High"));
    assert_eq!(status_options(&views), vec!["High", "Low"]);
}

#[test]
fn csv_snapshot_parses_every_row_kind() {
    let snapshot = parse_payload(SheetPayload::Csv(SAMPLE_CSV.to_string()), today())
        .expect("sample sheet should parse");

    assert_eq!(snapshot.requirements.len(), 4);
    assert_eq!(snapshot.contents.len(), 4);
    assert_eq!(snapshot.stakeholders.len(), 2);
    assert_eq!(snapshot.links.len(), 2);
    assert_eq!(snapshot.document_versions, vec!["v1", "v2"]);
    assert_eq!(snapshot.orphaned_row_count(), 1);

    let checkout = snapshot
        .requirements
        .iter()
        .find(|entry| entry.key == "checkout")
        .expect("checkout requirement should exist");
    assert_eq!(checkout.subtitle, "Pay, then book");
    assert_eq!(checkout.note, "Needs legal sign-off");
    assert!(!snapshot.requirements[2].display);
}

#[test]
fn views_join_rows_by_key_without_leaking() {
    let snapshot = parse_payload(SheetPayload::Csv(SAMPLE_CSV.to_string()), today())
        .expect("sample sheet should parse");

    let views = build_views(&snapshot, Some("v1"), today());
    let keys: Vec<&str> = views.iter().map(|v| v.key.as_str()).collect();
    assert_eq!(keys, vec!["search", "checkout"]);

    let search = &views[0];
    assert_eq!(
        search.deliverables,
        vec![
            "1.0 Filters",
            "1.1 By product",
            "1.2 By level",
            "1.2.1 Beginner",
            "2.0 Results",
            "2.1 Paging",
        ]
    );
    assert_eq!(search.stakeholders, vec!["Jane Doe"]);
    assert_eq!(search.links.len(), 1);
    assert_eq!(search.deadline_days, 5);

    let checkout = &views[1];
    assert_eq!(checkout.deliverables, vec!["1.0 Payment", "1.1 Cards"]);
    assert_eq!(checkout.stakeholders, vec!["Sam Roe"]);
    assert!(checkout.links.is_empty());
    assert_eq!(checkout.priority, Priority::Critical);
    assert_eq!(checkout.deadline_days, 9);
}

#[test]
fn default_version_is_the_last_introduced() {
    let snapshot = parse_payload(SheetPayload::Csv(SAMPLE_CSV.to_string()), today())
        .expect("sample sheet should parse");

    assert_eq!(default_version(&snapshot).as_deref(), Some("v2"));
    assert_eq!(
        resolve_version(&snapshot, Some("v1")).as_deref(),
        Some("v1")
    );
    assert_eq!(
        resolve_version(&snapshot, Some("v9")).as_deref(),
        Some("v2")
    );

    let state = LoadState::Ready(snapshot);
    let shown = visible_views(&state, None, SortState::default(), &StatusFilter::All, today());
    let titles: Vec<&str> = shown.iter().map(|v| v.title.as_str()).collect();
    assert_eq!(titles, vec!["Profile"]);
}

#[test]
fn parsing_the_same_payload_twice_is_deterministic() {
    let first = parse_payload(SheetPayload::Csv(SAMPLE_CSV.to_string()), today())
        .expect("first parse should succeed");
    let second = parse_payload(SheetPayload::Csv(SAMPLE_CSV.to_string()), today())
        .expect("second parse should succeed");

    assert_eq!(first, second);
}

#[test]
fn last_updated_uses_latest_review_date_or_today() {
    let snapshot = parse_payload(SheetPayload::Csv(SAMPLE_CSV.to_string()), today())
        .expect("sample sheet should parse");
    assert_eq!(
        snapshot.last_updated,
        NaiveDate::from_ymd_opt(2024, 3, 10).expect("valid date")
    );
    assert_eq!(snapshot.last_updated_label(), "Mar 10, 2024");

    let rows = vec![
        row(1, &["Tag"]),
        row(2, &["true", "v1", "Only", "only", "", "High", "soon", ""]),
    ];
    let undated = snapshot_from_rows(&rows, today()).expect("rows should parse");
    assert_eq!(undated.last_updated, today());
}

#[test]
fn unknown_row_tag_is_an_error() {
    let rows = vec![
        row(1, &["Tag"]),
        row(2, &["true", "v1", "Ok", "ok", "", "High", "", ""]),
        row(3, &["bogus", "x"]),
    ];

    let result = snapshot_from_rows(&rows, today());

    assert_eq!(
        result,
        Err(SheetError::UnknownRowTag {
            line: 3,
            tag: "bogus".to_string(),
        })
    );
}

#[test]
fn suffixed_row_tag_fails_with_accepted_list() {
    let rows = vec![row(1, &["Tag"]), row(2, &["content-2", "search", "Topic"])];

    let err = snapshot_from_rows(&rows, today()).expect_err("suffixed tag should fail");

    let message = err.to_string();
    assert!(message.contains("`content-2`"), "message: {message}");
    assert!(message.contains(RowTag::ACCEPTED), "message: {message}");
}

#[test]
fn empty_tag_ends_the_data_section() {
    let rows = vec![
        row(1, &["Tag"]),
        row(2, &["", "", ""]),
        row(3, &["TRUE", "v1", "Kept", "kept", "", "Low", "", ""]),
        row(4, &["", "Notes below are not data"]),
        row(5, &["bogus", "never read"]),
    ];

    let snapshot = snapshot_from_rows(&rows, today()).expect("rows should parse");

    assert_eq!(snapshot.requirements.len(), 1);
    assert_eq!(snapshot.requirements[0].title, "Kept");
}

#[test]
fn row_tags_parse_case_insensitively() {
    assert_eq!(
        RowTag::parse(" True "),
        Some(RowTag::Requirement { display: true })
    );
    assert_eq!(
        RowTag::parse("FALSE"),
        Some(RowTag::Requirement { display: false })
    );
    assert_eq!(RowTag::parse("Link"), Some(RowTag::Link));
    assert_eq!(RowTag::parse("notes"), None);
}

#[test]
fn csv_reader_keeps_quoted_commas_and_short_rows() {
    let rows = read_csv_rows("a,\"b, c\",\"say \"\"hi\"\"\"\nshort\n").expect("csv should parse");

    assert_eq!(rows.len(), 2);
    assert_eq!(rows[0].cells, vec!["a", "b, c", "say \"hi\""]);
    assert_eq!(rows[1].cell(0), "short");
    assert_eq!(rows[1].cell(5), "");
    assert_eq!(rows[1].line, 2);
}

fn sample_tabs() -> WorkbookTabs {
    let mut tabs = WorkbookTabs::new();
    tabs.insert(
        REQUIREMENTS_TAB.to_string(),
        vec![
            row(1, &["Display?", "Version", "Title", "Key", "Subtitle", "Status", "Review By", "Note"]),
            row(2, &["true", "v1", "Search", "search", "", "High", "3 days", ""]),
            row(3, &["false", "v1", "Hidden", "hidden", "", "Low", "", ""]),
        ],
    );
    tabs.insert(
        CONTENT_TAB.to_string(),
        vec![
            row(1, &["Key", "Topic", "Bullet", "Sub"]),
            row(2, &["search", "Filters", "By product", ""]),
        ],
    );
    tabs.insert(
        STAKEHOLDERS_TAB.to_string(),
        vec![row(1, &["Key", "Name"]), row(2, &["search", "Jane Doe"])],
    );
    tabs.insert(
        LINKS_TAB.to_string(),
        vec![
            row(1, &["Key", "Text", "Url"]),
            row(2, &["search", "Figma", "https://figma.example"]),
        ],
    );
    tabs
}

#[test]
fn workbook_tabs_build_the_same_snapshot_shape() {
    let snapshot = snapshot_from_tabs(&sample_tabs(), today()).expect("tabs should parse");

    assert_eq!(snapshot.requirements.len(), 2);
    assert_eq!(snapshot.contents.len(), 1);
    assert_eq!(snapshot.stakeholders[0].name, "Jane Doe");
    assert_eq!(snapshot.links[0].url, "https://figma.example");

    let views = build_views(&snapshot, None, today());
    assert_eq!(views.len(), 1);
    assert_eq!(views[0].deliverables, vec!["1.0 Filters", "1.1 By product"]);
    assert_eq!(views[0].deadline_days, 3);
}

#[test]
fn workbook_without_a_tab_fails() {
    let mut tabs = sample_tabs();
    tabs.remove(LINKS_TAB);

    let result = snapshot_from_tabs(&tabs, today());

    assert_eq!(result, Err(SheetError::MissingTab(LINKS_TAB.to_string())));
}

#[test]
fn workbook_display_flag_must_be_boolean() {
    let mut tabs = sample_tabs();
    if let Some(rows) = tabs.get_mut(REQUIREMENTS_TAB) {
        rows.push(row(4, &["maybe", "v1", "Odd", "odd", "", "Low", "", ""]));
    }

    let result = snapshot_from_tabs(&tabs, today());

    assert_eq!(
        result,
        Err(SheetError::InvalidDisplayFlag {
            tab: REQUIREMENTS_TAB.to_string(),
            line: 4,
            value: "maybe".to_string(),
        })
    );
}

#[test]
fn xlsx_row_numbers_follow_the_sheet_not_the_used_range() {
    assert_eq!(sheet_row_number(Some((0, 0)), 0), 1);
    assert_eq!(sheet_row_number(Some((3, 1)), 0), 4);
    assert_eq!(sheet_row_number(Some((3, 1)), 2), 6);
    assert_eq!(sheet_row_number(None, 4), 5);
}

#[test]
fn export_url_follows_the_chosen_format() {
    let xlsx = export_url(DEFAULT_SHEET_URL, SheetFormat::Xlsx);
    assert!(xlsx.ends_with("/pub?output=xlsx"), "url: {xlsx}");
    assert!(xlsx.starts_with("https://docs.google.com/spreadsheets/d/e/"));

    let back = export_url(&xlsx, SheetFormat::Csv);
    assert_eq!(back, DEFAULT_SHEET_URL);

    let with_gid = export_url("https://sheet.example/pub?gid=7&output=csv", SheetFormat::Xlsx);
    assert_eq!(with_gid, "https://sheet.example/pub?gid=7&output=xlsx");

    let plain = "https://sheet.example/export.xlsx";
    assert_eq!(export_url(plain, SheetFormat::Csv), plain);
    assert_eq!(export_url("not a url", SheetFormat::Xlsx), "not a url");
}

#[test]
fn xlsx_cells_render_as_text() {
    assert_eq!(cell_to_string(&calamine::Data::Empty), "");
    assert_eq!(
        cell_to_string(&calamine::Data::String("Filters".to_string())),
        "Filters"
    );
    assert_eq!(cell_to_string(&calamine::Data::Bool(true)), "true");
    assert_eq!(cell_to_string(&calamine::Data::Int(3)), "3");
}

struct FailingSource;

impl SheetSource for FailingSource {
    fn describe(&self) -> String {
        "failing test source".to_string()
    }

    fn fetch(&self) -> Result<SheetPayload, SheetError> {
        Err(SheetError::Status {
            status: 404,
            reason: "Not Found".to_string(),
        })
    }
}

#[test]
fn failed_fetch_shows_no_requirements() {
    let service = SheetService::new(Arc::new(FailingSource));

    let state = LoadState::from_result(service.load_snapshot(today()));

    match &state {
        LoadState::Failed(message) => assert!(message.contains("404"), "message: {message}"),
        other => panic!("expected failure, got {other:?}"),
    }
    let shown = visible_views(&state, None, SortState::default(), &StatusFilter::All, today());
    assert!(shown.is_empty());
    assert!(visible_views(
        &LoadState::Loading,
        None,
        SortState::default(),
        &StatusFilter::All,
        today()
    )
    .is_empty());
}

#[test]
fn local_file_source_reads_csv_exports() {
    let temp_dir = unique_test_dir("local-csv");
    fs::create_dir_all(&temp_dir).expect("should create temp dir");
    let path = temp_dir.join("export.CSV");
    fs::write(&path, SAMPLE_CSV).expect("should write sample csv");

    let source = LocalSheetFile::new(path.clone());
    assert_eq!(source.format(), SheetFormat::Csv);
    let snapshot = SheetService::for_choice(&SourceChoice::LocalFile(path))
        .load_snapshot(today())
        .expect("local csv should load");
    assert_eq!(snapshot.requirements.len(), 4);

    let missing = LocalSheetFile::new(temp_dir.join("missing.xlsx"));
    assert_eq!(missing.format(), SheetFormat::Xlsx);
    assert!(matches!(missing.fetch(), Err(SheetError::Io { .. })));

    fs::remove_dir_all(&temp_dir).expect("should cleanup temp dir");
}

#[derive(Default)]
struct RecordingOutbox {
    events: Mutex<Vec<FeedbackEvent>>,
}

impl RecordingOutbox {
    fn recorded(&self) -> Vec<FeedbackEvent> {
        self.events.lock().expect("outbox lock").clone()
    }
}

impl FeedbackOutbox for RecordingOutbox {
    fn deliver(&self, event: &FeedbackEvent) -> Result<(), String> {
        self.events.lock().expect("outbox lock").push(event.clone());
        Ok(())
    }
}

#[test]
fn email_validation_matches_simple_shape() {
    assert!(is_valid_email("a@b.co"));
    assert!(is_valid_email("  reader@example.com "));
    assert!(!is_valid_email("a@b"));
    assert!(!is_valid_email("a b@c.d"));
    assert!(!is_valid_email("@b.co"));
    assert!(!is_valid_email(""));
}

#[test]
fn invalid_email_never_reaches_the_outbox() {
    let outbox = Arc::new(RecordingOutbox::default());
    let service = FeedbackService::new(outbox.clone());

    let result = service.subscribe_email("not-an-email", SUBSCRIPTION_KIND);

    assert_eq!(result, Err(FeedbackError::InvalidEmail));
    assert!(outbox.recorded().is_empty());

    let message = service
        .subscribe_email(" reader@example.com ", SUBSCRIPTION_KIND)
        .expect("valid email should subscribe");
    assert!(message.contains("reader@example.com"));
    assert_eq!(
        outbox.recorded(),
        vec![FeedbackEvent::Subscription {
            email: "reader@example.com".to_string(),
            kind: SUBSCRIPTION_KIND.to_string(),
        }]
    );
}

#[test]
fn approvals_and_update_requests_are_recorded() {
    let outbox = Arc::new(RecordingOutbox::default());
    let service = FeedbackService::new(outbox.clone());

    service
        .record_approval(APPROVAL_KIND, "v2")
        .expect("approval should record");
    assert_eq!(
        service.request_update(Some("search"), "reader@example.com", "   "),
        Err(FeedbackError::EmptyMessage)
    );
    service
        .request_update(Some(""), "reader@example.com", "Please add paging")
        .expect("request should record");

    let events = outbox.recorded();
    assert_eq!(events.len(), 2);
    assert!(matches!(
        &events[0],
        FeedbackEvent::Approval { document_version, .. } if document_version == "v2"
    ));
    assert_eq!(
        events[1],
        FeedbackEvent::UpdateRequest {
            requirement_key: None,
            email: "reader@example.com".to_string(),
            message: "Please add paging".to_string(),
        }
    );
}

#[test]
fn settings_round_trip_through_sqlite() {
    let temp_dir = unique_test_dir("settings");
    let db_path = temp_dir.join("nested").join("settings.sqlite");
    let service = SettingsService::new(Arc::new(SqliteRepo {
        db_path: db_path.clone(),
    }));

    service.init().expect("init should create parent dirs and schema");
    assert_eq!(service.load().expect("load defaults"), Settings::default());

    service.set_theme(Theme::Dark).expect("theme should save");
    service
        .set_sheet_source(" https://sheet.example/pub ", SheetFormat::Xlsx)
        .expect("source should save");
    service.set_theme(Theme::Light).expect("theme should overwrite");
    service.set_theme(Theme::Dark).expect("theme should overwrite again");

    let loaded = service.load().expect("settings should load");
    assert_eq!(loaded.theme, Theme::Dark);
    assert_eq!(loaded.sheet_url, "https://sheet.example/pub");
    assert_eq!(loaded.sheet_format, SheetFormat::Xlsx);

    let conn = Connection::open(&db_path).expect("should open sqlite db");
    let count: i64 = conn
        .query_row("SELECT COUNT(*) FROM setting", [], |row| row.get(0))
        .expect("count query should succeed");
    assert_eq!(count, 3, "upserts should not duplicate keys");

    fs::remove_dir_all(&temp_dir).expect("should cleanup temp dir");
}

#[test]
fn unreadable_stored_values_fall_back_to_defaults() {
    let temp_dir = unique_test_dir("settings-fallback");
    fs::create_dir_all(&temp_dir).expect("should create temp dir");
    let db_path = temp_dir.join("settings.sqlite");
    init_db(&db_path).expect("init_db should succeed");

    let repo = SqliteRepo {
        db_path: db_path.clone(),
    };
    let service = SettingsService::new(Arc::new(repo));
    let conn = Connection::open(&db_path).expect("should open sqlite db");
    conn.execute(
        "INSERT INTO setting(key, value) VALUES ('theme', 'sepia'), ('sheet_format', 'ods')",
        [],
    )
    .expect("seed rows should insert");

    let loaded = service.load().expect("settings should load");

    assert_eq!(loaded.theme, Theme::Light);
    assert_eq!(loaded.sheet_format, SheetFormat::Csv);

    fs::remove_dir_all(&temp_dir).expect("should cleanup temp dir");
}

#[test]
fn env_overrides_replace_the_sheet_source() {
    let settings = Settings::default();

    let overridden = apply_env_overrides(settings.clone(), |key| match key {
        k if k == SHEET_URL_ENV => Some("https://other.example/pub".to_string()),
        k if k == SHEET_FORMAT_ENV => Some("XLSX".to_string()),
        _ => None,
    });
    assert_eq!(overridden.sheet_url, "https://other.example/pub");
    assert_eq!(overridden.sheet_format, SheetFormat::Xlsx);

    let untouched = apply_env_overrides(settings.clone(), |_| Some("  ".to_string()));
    assert_eq!(untouched, settings);

    assert_eq!(
        published_source(&overridden),
        SourceChoice::Published {
            url: "https://other.example/pub".to_string(),
            format: SheetFormat::Xlsx,
        }
    );
}

#[test]
fn ensure_webview_data_dir_creates_folder() {
    let temp_dir = unique_test_dir("webview");

    let created = ensure_webview_data_dir(&temp_dir).expect("should create webview dir");

    assert!(created.ends_with("webview2"));
    assert!(created.is_dir());

    fs::remove_dir_all(&temp_dir).expect("should cleanup temp dir");
}

#[test]
fn sort_and_filter_controls_round_trip_select_values() {
    assert_eq!(status_filter_from_value(ALL_STATUSES_VALUE), StatusFilter::All);
    assert_eq!(
        status_filter_from_value("High"),
        StatusFilter::Status("High".to_string())
    );
    assert_eq!(status_filter_value(&StatusFilter::All), ALL_STATUSES_VALUE);

    let sort = SortState::default();
    assert_eq!(sort_indicator(sort, SortKey::Priority), " ↓");
    assert_eq!(sort_indicator(sort, SortKey::Deadline), "");
    assert_eq!(
        sort_indicator(sort.select(SortKey::Priority), SortKey::Priority),
        " ↑"
    );
}

#[test]
fn styles_scale_with_tier_and_priority() {
    assert_eq!(deliverable_line_style(DeliverableTier::Plain), "");
    assert!(deliverable_line_style(DeliverableTier::Scaled(4)).contains("padding-left: 64px"));
    assert_ne!(
        priority_badge_style(Priority::Critical),
        priority_badge_style(Priority::Low)
    );
}

#[test]
fn notices_report_feedback_outcomes() {
    let ok = Notice::from_result(Ok("Saved.".to_string()));
    assert_eq!(ok.level, NoticeLevel::Success);

    let err = Notice::from_result(Err(FeedbackError::InvalidEmail));
    assert_eq!(err.level, NoticeLevel::Error);
    assert_eq!(err.message, "Please enter a valid email address.");
}
