use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use std::path::PathBuf;
use tempfile::TempDir;

/// An address nothing listens on; any command that reaches the network
/// against it fails fast.
const UNROUTABLE_URL: &str = "http://127.0.0.1:1/api";

/// Test fixture with an isolated config file so runs never touch the
/// user's ~/.artshop.
struct TestFixture {
    temp_dir: TempDir,
    config_path: PathBuf,
}

impl TestFixture {
    fn new() -> Self {
        let temp_dir = TempDir::new().expect("Failed to create temp dir");
        let config_path = temp_dir.path().join("config.toml");
        Self {
            temp_dir,
            config_path,
        }
    }

    fn command(&self) -> Command {
        let mut cmd = Command::cargo_bin("artshop").expect("Failed to find artshop binary");
        cmd.arg("--config").arg(&self.config_path);
        cmd.env_remove("ARTSHOP_API_URL");
        cmd
    }

    fn write_file(&self, name: &str, content: &str) -> PathBuf {
        let path = self.temp_dir.path().join(name);
        fs::write(&path, content).expect("Failed to write test file");
        path
    }
}

#[test]
fn help_lists_entity_subcommands() {
    let fixture = TestFixture::new();
    fixture
        .command()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("artist"))
        .stdout(predicate::str::contains("art"))
        .stdout(predicate::str::contains("classification"))
        .stdout(predicate::str::contains("config"));
}

#[test]
fn art_add_rejects_future_year_before_any_request() {
    let fixture = TestFixture::new();
    // The unroutable URL proves validation short-circuits the network:
    // a request would fail with a connection error, not this message.
    fixture
        .command()
        .args(["art", "add", "--title", "Звёздная ночь", "--year", "3000"])
        .args(["--api-url", UNROUTABLE_URL])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Год не может быть в будущем"));
}

#[test]
fn art_add_rejects_non_numeric_year() {
    let fixture = TestFixture::new();
    fixture
        .command()
        .args(["art", "add", "--title", "Этюд", "--year", "MDCCC"])
        .args(["--api-url", UNROUTABLE_URL])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Год должен быть числом"));
}

#[test]
fn art_add_rejects_blank_title() {
    let fixture = TestFixture::new();
    fixture
        .command()
        .args(["art", "add", "--title", "   ", "--year", "1999"])
        .args(["--api-url", UNROUTABLE_URL])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Название обязательно"));
}

#[test]
fn artist_add_requires_last_name() {
    let fixture = TestFixture::new();
    fixture
        .command()
        .args(["artist", "add", "--first-name", "Ada"])
        .args(["--api-url", UNROUTABLE_URL])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Фамилия обязательна"));
}

#[test]
fn config_set_url_roundtrips_through_show() {
    let fixture = TestFixture::new();

    fixture
        .command()
        .args(["config", "set-url", "http://artshop.internal:8100/api"])
        .assert()
        .success();

    fixture
        .command()
        .args(["config", "show"])
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "api_url = http://artshop.internal:8100/api",
        ));
}

#[test]
fn config_show_reports_default_url_when_unset() {
    let fixture = TestFixture::new();
    fixture
        .command()
        .args(["config", "show"])
        .assert()
        .success()
        .stdout(predicate::str::contains("http://localhost:8100/api"));
}

#[test]
fn declined_delete_prompt_cancels_without_a_request() {
    let fixture = TestFixture::new();
    fixture
        .command()
        .args(["artist", "delete", "1"])
        .args(["--api-url", UNROUTABLE_URL])
        .write_stdin("n\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Отменено"));
}

#[test]
fn delete_with_yes_fails_when_server_is_unreachable() {
    let fixture = TestFixture::new();
    fixture
        .command()
        .args(["artist", "delete", "1", "--yes"])
        .args(["--api-url", UNROUTABLE_URL])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Ошибка"));
}

#[test]
fn patch_without_fields_reports_no_changes() {
    let fixture = TestFixture::new();
    // The guard fires before any request is built.
    fixture
        .command()
        .args(["artist", "patch", "1"])
        .args(["--api-url", UNROUTABLE_URL])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Нет изменений"));
}

#[test]
fn art_patch_validates_year_before_any_request() {
    let fixture = TestFixture::new();
    fixture
        .command()
        .args(["art", "patch", "1", "--year", "3000"])
        .args(["--api-url", UNROUTABLE_URL])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Год не может быть в будущем"));
}

#[test]
fn import_rejects_malformed_json() {
    let fixture = TestFixture::new();
    let file = fixture.write_file("artists.json", "это не json");
    fixture
        .command()
        .args(["artist", "import"])
        .arg(&file)
        .args(["--api-url", UNROUTABLE_URL])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Некорректный JSON"));
}

#[test]
fn import_reports_unreadable_file() {
    let fixture = TestFixture::new();
    fixture
        .command()
        .args(["classification", "import", "/nonexistent/classifications.json"])
        .args(["--api-url", UNROUTABLE_URL])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Не удалось прочитать файл"));
}

#[test]
fn show_fails_cleanly_when_server_is_unreachable() {
    let fixture = TestFixture::new();
    fixture
        .command()
        .args(["art", "show", "1"])
        .args(["--api-url", UNROUTABLE_URL])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Ошибка"));
}

#[test]
fn list_fails_cleanly_when_server_is_unreachable() {
    let fixture = TestFixture::new();
    fixture
        .command()
        .args(["artist", "list"])
        .args(["--api-url", UNROUTABLE_URL])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Ошибка"));
}
