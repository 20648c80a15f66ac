use mockito::Matcher;
use std::fs;
use tempfile::TempDir;
use wufoo_report::report::forms::generate_form_report;
use wufoo_report::{EnvConfig, ReportPaths, WufooClient};

const FORMS_HEADER: &str =
    "Name,Email,Description,IsPublic,DateCreated,DateUpdated,EntryCount,FirstEntry,LastEntry";

const SURVEY_FORM: &str = r#"{"Forms":[
    {"Name":"Survey","Hash":"h1","Email":"owner@x.com","Description":"Annual survey",
     "IsPublic":"1","DateCreated":"2020-01-01T00:00:00","DateUpdated":"2020-06-01T00:00:00"}
]}"#;

fn setup(server: &mockito::Server, forms_skip: &str) -> (TempDir, WufooClient, ReportPaths) {
    let _ = env_logger::builder().is_test(true).try_init();
    let dir = TempDir::new().expect("tempdir");
    let mut paths = ReportPaths::default();
    paths.forms_skip = dir.path().join("Forms-Done.csv");
    paths.forms_out = dir.path().join("forms.csv");
    fs::write(&paths.forms_skip, forms_skip).expect("write skip file");
    let config = EnvConfig::from_values(format!("{}/", server.url()), "secret".to_string());
    let client = WufooClient::new(config).expect("client");
    (dir, client, paths)
}

fn entries_query(direction: &str) -> Matcher {
    Matcher::AllOf(vec![
        Matcher::UrlEncoded("pageStart".into(), "0".into()),
        Matcher::UrlEncoded("pageSize".into(), "1".into()),
        Matcher::UrlEncoded("sort".into(), "EntryId".into()),
        Matcher::UrlEncoded("sortDirection".into(), direction.into()),
    ])
}

#[test]
fn enriches_each_form_with_entry_statistics() {
    let mut server = mockito::Server::new();
    server
        .mock("GET", "/forms.json")
        .with_header("content-type", "application/json")
        .with_body(SURVEY_FORM)
        .create();
    server
        .mock("GET", "/forms/h1/entries/count.json")
        .with_body(r#"{"EntryCount":42}"#)
        .create();
    server
        .mock("GET", "/forms/h1/entries.json")
        .match_query(entries_query("ASC"))
        .with_body(r#"{"Entries":[{"DateCreated":"2020-01-02 10:00:00"}]}"#)
        .create();
    server
        .mock("GET", "/forms/h1/entries.json")
        .match_query(entries_query("DESC"))
        .with_body(r#"{"Entries":[{"DateCreated":"2020-05-30 18:30:00"}]}"#)
        .create();

    let (_dir, client, paths) = setup(&server, "Name,DateCreated,Action\n");
    let retained = generate_form_report(&client, &paths).expect("report");

    assert_eq!(retained, 1);
    let out = fs::read_to_string(&paths.forms_out).expect("read output");
    assert_eq!(
        out,
        format!(
            "{FORMS_HEADER}\nSurvey,owner@x.com,Annual survey,1,\
             2020-01-01T00:00:00,2020-06-01T00:00:00,42,\
             2020-01-02 10:00:00,2020-05-30 18:30:00\n"
        )
    );
}

#[test]
fn missing_statistics_fall_back_to_defaults() {
    let mut server = mockito::Server::new();
    server
        .mock("GET", "/forms.json")
        .with_body(SURVEY_FORM)
        .create();
    server
        .mock("GET", "/forms/h1/entries/count.json")
        .with_body("{}")
        .create();
    server
        .mock("GET", "/forms/h1/entries.json")
        .match_query(Matcher::Any)
        .with_body(r#"{"Entries":[]}"#)
        .expect(2)
        .create();

    let (_dir, client, paths) = setup(&server, "Name,DateCreated,Action\n");
    generate_form_report(&client, &paths).expect("report");

    let out = fs::read_to_string(&paths.forms_out).expect("read output");
    let row = out.lines().nth(1).expect("data row");
    assert!(row.ends_with(",0,n/a,n/a"));
}

#[test]
fn keep_marked_form_is_dropped_without_enrichment_calls() {
    let mut server = mockito::Server::new();
    server
        .mock("GET", "/forms.json")
        .with_body(SURVEY_FORM)
        .create();
    let count_mock = server
        .mock("GET", "/forms/h1/entries/count.json")
        .expect(0)
        .create();
    let entries_mock = server
        .mock("GET", "/forms/h1/entries.json")
        .match_query(Matcher::Any)
        .expect(0)
        .create();

    // Skip key carries the date portion only; the form's full timestamp is
    // truncated to 10 characters before matching.
    let skip = "Name,DateCreated,Action\nSurvey,2020-01-01,Keep\n";
    let (_dir, client, paths) = setup(&server, skip);
    let retained = generate_form_report(&client, &paths).expect("report");

    assert_eq!(retained, 0);
    count_mock.assert();
    entries_mock.assert();
    let out = fs::read_to_string(&paths.forms_out).expect("read output");
    assert_eq!(out, format!("{FORMS_HEADER}\n"));
}

#[test]
fn two_runs_produce_identical_bytes() {
    let mut server = mockito::Server::new();
    server
        .mock("GET", "/forms.json")
        .with_body(SURVEY_FORM)
        .expect(2)
        .create();
    server
        .mock("GET", "/forms/h1/entries/count.json")
        .with_body(r#"{"EntryCount":3}"#)
        .expect(2)
        .create();
    server
        .mock("GET", "/forms/h1/entries.json")
        .match_query(Matcher::Any)
        .with_body(r#"{"Entries":[{"DateCreated":"2020-01-02 10:00:00"}]}"#)
        .expect(4)
        .create();

    let (_dir, client, paths) = setup(&server, "Name,DateCreated,Action\n");
    generate_form_report(&client, &paths).expect("first run");
    let first = fs::read(&paths.forms_out).expect("read first");
    generate_form_report(&client, &paths).expect("second run");
    let second = fs::read(&paths.forms_out).expect("read second");
    assert_eq!(first, second);
}

#[test]
fn delimiter_in_description_is_quoted() {
    let mut server = mockito::Server::new();
    server
        .mock("GET", "/forms.json")
        .with_body(
            r#"{"Forms":[
                {"Name":"Survey","Hash":"h1","Email":"owner@x.com",
                 "Description":"Q3, internal","IsPublic":"0",
                 "DateCreated":"2020-01-01T00:00:00","DateUpdated":"2020-01-01T00:00:00"}
            ]}"#,
        )
        .create();
    server
        .mock("GET", "/forms/h1/entries/count.json")
        .with_body("{}")
        .create();
    server
        .mock("GET", "/forms/h1/entries.json")
        .match_query(Matcher::Any)
        .with_body("{}")
        .expect(2)
        .create();

    let (_dir, client, paths) = setup(&server, "Name,DateCreated,Action\n");
    generate_form_report(&client, &paths).expect("report");

    let out = fs::read_to_string(&paths.forms_out).expect("read output");
    assert!(out.contains("\"Q3, internal\""));
}
