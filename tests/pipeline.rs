use std::path::{Path, PathBuf};

use chrono::NaiveDate;
use jmattaa::config::Config;
use jmattaa::document::DisplayDocument;
use jmattaa::{art, render};
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn res(name: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("res").join(name)
}

fn anniversary() -> NaiveDate {
    NaiveDate::from_ymd_opt(2024, 8, 18).unwrap()
}

fn config(base: String, dir: &Path) -> Config {
    Config {
        api_base: base,
        art_path: dir.join("missing.txt"),
        font_path: res("DejaVuSansMono.ttf"),
        output_path: dir.join("img.png"),
        ..Config::default()
    }
}

fn get(route: &str, status: u16, body: impl Into<String>) -> Mock {
    Mock::given(method("GET"))
        .and(path(route))
        .respond_with(ResponseTemplate::new(status).set_body_raw(body.into(), "application/json"))
}

async fn mount_repos(server: &MockServer) {
    let list = format!(
        r#"[
            {{"name": "lang", "fork": false, "stargazers_count": 7, "languages_url": "{}/repos/jmattaa/lang/languages"}},
            {{"name": "fork", "fork": true, "stargazers_count": 70, "languages_url": "unused"}}
        ]"#,
        server.uri(),
    );
    get("/users/jmattaa/repos", 200, list).mount(server).await;
    get("/repos/jmattaa/lang/languages", 200, r#"{"C": 3, "Lua": 1}"#)
        .mount(server)
        .await;
}

#[tokio::test]
async fn full_run_writes_image_without_art_or_profile() {
    let tmp = tempfile::tempdir().unwrap();
    let server = MockServer::start().await;
    get("/users/jmattaa", 500, "{}").mount(&server).await;
    mount_repos(&server).await;

    let config = config(server.uri(), tmp.path());
    jmattaa::run(&config, anniversary()).await.unwrap();

    let written = image::open(&config.output_path).unwrap();
    assert_eq!(written.to_rgb8().dimensions(), (1400, 700));
}

#[tokio::test]
async fn missing_font_aborts_before_anything_is_written() {
    let tmp = tempfile::tempdir().unwrap();
    let server = MockServer::start().await;
    get("/users/jmattaa", 500, "{}").mount(&server).await;
    // The repository list is only requested after the font has loaded.
    get("/users/jmattaa/repos", 200, "[]")
        .expect(0)
        .mount(&server)
        .await;

    let config = Config {
        font_path: tmp.path().join("missing.ttf"),
        ..config(server.uri(), tmp.path())
    };
    let err = jmattaa::run(&config, anniversary()).await.unwrap_err();

    assert!(format!("{err:#}").contains("not found"));
    assert!(!config.output_path.exists());
    server.verify().await;
}

#[tokio::test]
async fn repo_list_failure_aborts_without_image() {
    let tmp = tempfile::tempdir().unwrap();
    let server = MockServer::start().await;
    get("/users/jmattaa", 200, r#"{"public_repos": 1}"#)
        .mount(&server)
        .await;
    get("/users/jmattaa/repos", 403, r#"{"message": "rate limited"}"#)
        .mount(&server)
        .await;

    let config = config(server.uri(), tmp.path());
    let err = jmattaa::run(&config, anniversary()).await.unwrap_err();

    assert!(format!("{err:#}").contains("repository list"));
    assert!(!config.output_path.exists());
}

#[tokio::test]
async fn future_reference_date_is_an_error() {
    let tmp = tempfile::tempdir().unwrap();
    let config = config("http://127.0.0.1:1".into(), tmp.path());
    let before = NaiveDate::from_ymd_opt(2000, 1, 1).unwrap();

    assert!(jmattaa::run(&config, before).await.is_err());
    assert!(!config.output_path.exists());
}

#[test]
fn shipped_art_renders_on_reference_canvas() {
    let config = Config::default();
    let art = art::load_ascii_art(&res("me.txt")).unwrap();
    assert!(!art.is_empty());

    let font = render::load_font(&res("DejaVuSansMono.ttf")).unwrap();
    let colors = config.theme.colors();
    let image = render::render(
        &art,
        &DisplayDocument::default(),
        &font,
        &config.layout,
        &colors,
    );
    assert!(image.pixels().any(|p| *p != colors.bg));
}
