//! Unit tests for URL parsing and the generic model.

use camino::Utf8PathBuf;
use rstest::rstest;
use serde_json::json;

use super::models::{ApiComment, ApiPullRequest};
use super::{CommentRecord, PullRequestLocator, PullRequestRecord, SyncError};

#[rstest]
#[case::canonical("https://github.com/owner/repo/pulls/1")]
#[case::trailing_slash("https://github.com/owner/repo/pulls/1/")]
#[case::path_suffix("https://github.com/owner/repo/pulls/1/files")]
#[case::http_scheme("http://github.com/owner/repo/pulls/1")]
#[case::ssh_scheme("ssh://github.com/owner/repo/pulls/1")]
#[case::foreign_host("https://example.com/owner/repo/pulls/1")]
#[case::singular_category("https://github.com/owner/repo/pull/1")]
#[case::arbitrary_category("https://github.com/owner/repo/foo/1")]
fn lenient_parse_accepts(#[case] url: &str) {
    let locator = PullRequestLocator::parse(url).expect("URL should parse");
    assert_eq!(locator.owner().as_str(), "owner", "owner mismatch for {url}");
    assert_eq!(
        locator.repository().as_str(),
        "repo",
        "repository mismatch for {url}"
    );
    assert_eq!(locator.number().get(), 1_u64, "number mismatch for {url}");
}

#[rstest]
#[case::empty("", SyncError::InvalidUrl(String::new()))]
#[case::too_short("https://github.com/owner/repo", SyncError::MissingPathSegments)]
#[case::non_numeric(
    "https://github.com/owner/repo/pulls/foo",
    SyncError::InvalidPullRequestNumber
)]
fn lenient_parse_rejects(#[case] url: &str, #[case] expected: SyncError) {
    let result = PullRequestLocator::parse(url);
    match (result, expected) {
        (Err(SyncError::InvalidUrl(_)), SyncError::InvalidUrl(_)) => {}
        (Err(actual), expected) => assert_eq!(actual, expected, "error mismatch for {url}"),
        (Ok(locator), _) => panic!("expected error for {url}, got {locator:?}"),
    }
}

#[rstest]
fn exact_parse_accepts_canonical_shape() {
    let locator = PullRequestLocator::parse_exact("https://github.com/owner/repo/pulls/1")
        .expect("exact-shape URL should parse");
    assert_eq!(locator.owner().as_str(), "owner");
    assert_eq!(locator.repository().as_str(), "repo");
    assert_eq!(locator.number().get(), 1_u64);
}

#[rstest]
#[case::trailing_slash("https://github.com/owner/repo/pulls/1/")]
#[case::path_suffix("https://github.com/owner/repo/pulls/1/files")]
#[case::too_short("https://github.com/owner/repo")]
fn exact_parse_rejects_inexact_shapes(#[case] url: &str) {
    let result = PullRequestLocator::parse_exact(url);
    assert!(
        matches!(result, Err(SyncError::MissingPathSegments)),
        "expected MissingPathSegments for {url}, got {result:?}"
    );
}

#[rstest]
fn derives_public_api_base() {
    let locator = PullRequestLocator::parse("https://github.com/owner/repo/pull/1")
        .expect("URL should parse");
    assert_eq!(locator.api_base().as_str(), "https://api.github.com/");
}

#[rstest]
fn derives_enterprise_api_base() {
    let locator = PullRequestLocator::parse("https://ghe.example.com/owner/repo/pull/7")
        .expect("URL should parse");
    assert_eq!(locator.api_base().as_str(), "https://ghe.example.com/api/v3");
}

#[rstest]
fn record_serializes_with_original_field_names() {
    let record = PullRequestRecord {
        kind: "github".to_owned(),
        id: 42,
        comments: vec![CommentRecord {
            text: "hello".to_owned(),
            author: "octocat".to_owned(),
            id: 7,
            raw: Some(Utf8PathBuf::from("/state/github/comments/7.json")),
        }],
        ..PullRequestRecord::default()
    };

    let value = serde_json::to_value(&record).expect("record should serialize");
    assert_eq!(value.get("Type"), Some(&json!("github")));
    assert_eq!(value.get("ID"), Some(&json!(42)));
    let head = value.get("Head").expect("head should serialize");
    assert!(head.get("SHA").is_some(), "SHA casing should be preserved");
    let comment = value
        .get("Comments")
        .and_then(|comments| comments.get(0))
        .expect("comment should serialize");
    assert_eq!(comment.get("Author"), Some(&json!("octocat")));
}

#[rstest]
fn hand_authored_comment_needs_only_text() {
    let comment: CommentRecord =
        serde_json::from_value(json!({ "Text": "ship it" })).expect("comment should decode");
    assert_eq!(comment.text, "ship it");
    assert_eq!(comment.id, 0, "absent ID should read as zero");
    assert!(comment.raw.is_none());
    assert!(comment.author.is_empty());
}

#[rstest]
fn pull_request_payload_maps_to_record() {
    let payload = json!({
        "id": 99,
        "head": {
            "ref": "feature",
            "sha": "2",
            "repo": { "clone_url": "https://github.com/baz/repo" }
        },
        "base": {
            "ref": "main",
            "sha": "1",
            "repo": { "clone_url": "https://github.com/owner/repo" }
        },
        "labels": [{ "name": "bug" }, { "name": "bug" }]
    });

    let api: ApiPullRequest = serde_json::from_value(payload).expect("payload should decode");
    let record = api.into_record(Utf8PathBuf::from("/state/github/pr.json"));

    assert_eq!(record.kind, "github");
    assert_eq!(record.id, 99);
    assert_eq!(record.head.branch, "feature");
    assert_eq!(record.head.repo, "https://github.com/baz/repo");
    assert_eq!(record.base.sha, "1");
    let labels: Vec<&str> = record.labels.iter().map(|label| label.text.as_str()).collect();
    assert_eq!(labels, ["bug", "bug"], "duplicates pass through in order");
    assert_eq!(
        record.raw.as_deref().map(|path| path.as_str()),
        Some("/state/github/pr.json")
    );
}

#[rstest]
fn comment_payload_maps_to_record() {
    let payload = json!({
        "id": 7,
        "body": "hello world!",
        "user": { "login": "octocat" }
    });

    let api: ApiComment = serde_json::from_value(payload).expect("payload should decode");
    let record = api.into_record(Utf8PathBuf::from("/state/github/comments/7.json"));

    assert_eq!(record.id, 7);
    assert_eq!(record.text, "hello world!");
    assert_eq!(record.author, "octocat");
}

#[rstest]
fn payload_without_branches_maps_to_empty_references() {
    let api: ApiPullRequest =
        serde_json::from_value(json!({ "id": 5 })).expect("payload should decode");
    let record = api.into_record(Utf8PathBuf::from("/state/github/pr.json"));
    assert!(record.head.repo.is_empty());
    assert!(record.base.sha.is_empty());
    assert!(record.labels.is_empty());
}
