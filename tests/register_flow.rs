//! End-to-end runs of the CLI against a mock registration server.

use std::path::{Path, PathBuf};

use clap::Parser;
use mockito::{Matcher, Server};
use regwizard_lib::cli::{self, Cli};
use rw_core::AppConfig;
use tempfile::TempDir;

const WORKER_ANSWERS: &str = r#"
role = "worker"
photo = "anu.png"

[fields]
name = "Anu Thomas"
gender = "Female"
dateOfBirth = "1994-03-12"
nationalId = "123456789012"
mobile = "9876543210"
address = "12 Market Road"
district = "Thiruvananthapuram"
postalCode = "695001"
bloodGroup = "O+"
height = 162
weight = 58
hasDisability = false
vaccinations = ["COVID-19", "Tetanus"]
employmentType = "Construction"
employerName = "Kerala Builders"
employerContact = "9123456780"
workLocation = "Kochi"
workAddress = "Site 4, Marine Drive"
employmentDuration = "1 - 3 years"
familyMembers = 4
password = "secret1"
confirmPassword = "secret1"
"#;

fn write_answers(dir: &Path, answers: &str) -> PathBuf {
    image::RgbImage::from_pixel(32, 24, image::Rgb([200, 120, 40]))
        .save(dir.join("anu.png"))
        .unwrap();
    let path = dir.join("answers.toml");
    std::fs::write(&path, answers).unwrap();
    path
}

fn config_for(server: &Server) -> AppConfig {
    let mut config = AppConfig::empty();
    config.base_url = server.url();
    config
}

async fn run(args: &[&str], config: AppConfig) -> (bool, String) {
    let cli = Cli::try_parse_from(args).unwrap();
    let mut out = Vec::new();
    let ok = cli::run(cli, config, &mut out).await.unwrap();
    (ok, String::from_utf8(out).unwrap())
}

#[tokio::test]
async fn worker_registers_with_multipart_photo() {
    let dir = TempDir::new().unwrap();
    let answers = write_answers(dir.path(), WORKER_ANSWERS);
    let mut server = Server::new_async().await;
    let mock = server
        .mock("POST", "/api/auth/register")
        .match_header(
            "content-type",
            Matcher::Regex("^multipart/form-data; boundary=".into()),
        )
        .match_body(Matcher::AllOf(vec![
            Matcher::Regex(r#""role":"worker""#.into()),
            Matcher::Regex(r#""employerName":"Kerala Builders""#.into()),
            Matcher::Regex(r#"name="photo"; filename="anu.png""#.into()),
        ]))
        .with_status(201)
        .with_body(r#"{"id":"u-1"}"#)
        .expect(1)
        .create_async()
        .await;

    let (ok, output) = run(
        &["regwizard", "register", "--answers", answers.to_str().unwrap()],
        config_for(&server),
    )
    .await;

    mock.assert_async().await;
    assert!(ok, "{output}");
    assert!(output.contains("== Employment details =="), "{output}");
    assert!(output.contains("Registration successful. Sign in at /login"));
    assert!(!output.contains("secret1"));
}

#[tokio::test]
async fn rejected_registration_reports_server_message() {
    let dir = TempDir::new().unwrap();
    let answers = write_answers(dir.path(), WORKER_ANSWERS);
    let mut server = Server::new_async().await;
    let _mock = server
        .mock("POST", "/api/auth/register")
        .with_status(409)
        .with_body(r#"{"message":"Mobile number already registered"}"#)
        .create_async()
        .await;

    let (ok, output) = run(
        &["regwizard", "register", "--answers", answers.to_str().unwrap()],
        config_for(&server),
    )
    .await;

    assert!(!ok);
    assert!(output.contains("Registration failed: Mobile number already registered"));
}

#[tokio::test]
async fn invalid_mobile_blocks_before_any_request() {
    let dir = TempDir::new().unwrap();
    let answers = write_answers(
        dir.path(),
        &WORKER_ANSWERS.replace(r#"mobile = "9876543210""#, r#"mobile = "98765""#),
    );
    let mut server = Server::new_async().await;
    let mock = server
        .mock("POST", "/api/auth/register")
        .expect(0)
        .create_async()
        .await;

    let (ok, output) = run(
        &["regwizard", "register", "--answers", answers.to_str().unwrap()],
        config_for(&server),
    )
    .await;

    mock.assert_async().await;
    assert!(!ok);
    assert!(output.contains("Blocked at Basic Information:"));
    assert!(output.contains("mobile: Mobile number must be exactly 10 digits"));
}

#[tokio::test]
async fn check_prints_summary_as_json_without_sending() {
    let dir = TempDir::new().unwrap();
    let answers = write_answers(dir.path(), WORKER_ANSWERS);

    let (ok, output) = run(
        &[
            "regwizard",
            "check",
            "--answers",
            answers.to_str().unwrap(),
            "--json",
        ],
        AppConfig::empty(),
    )
    .await;

    assert!(ok, "{output}");
    let summary: serde_json::Value = serde_json::from_str(&output).unwrap();
    let titles: Vec<_> = summary["sections"]
        .as_array()
        .unwrap()
        .iter()
        .map(|section| section["title"].as_str().unwrap().to_string())
        .collect();
    assert!(titles.contains(&"Health details".to_string()));
}
