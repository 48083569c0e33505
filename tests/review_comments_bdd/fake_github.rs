//! In-memory stand-in for the GitHub review comments endpoints.
//!
//! Unlike fixed Wiremock responses, the fake keeps comments between requests
//! so deletes, updates and replies are visible to later calls in the same
//! scenario.

use std::collections::BTreeMap;
use std::sync::{Arc, Mutex, PoisonError};

use serde_json::{Value, json};
use wiremock::matchers::path_regex;
use wiremock::{Mock, MockServer, Request, Respond, ResponseTemplate};

/// Token the fake accepts.
pub(crate) const VALID_TOKEN: &str = "valid-token";

const COLLECTION_PATH: &str = "/repos/owner/repo/pulls/comments";
const DEFAULT_PER_PAGE: usize = 30;

#[derive(Debug, Default)]
struct Store {
    comments: BTreeMap<u64, Value>,
    next_id: u64,
}

impl Store {
    fn insert(&mut self, body: &str, in_reply_to_id: Option<u64>) -> Value {
        self.next_id += 1;
        let id = self.next_id;
        let comment = json!({
            "id": id,
            "body": body,
            "user": { "login": "reviewer" },
            "path": "src/lib.rs",
            "line": id,
            "in_reply_to_id": in_reply_to_id,
        });
        self.comments.insert(id, comment.clone());
        comment
    }

    fn list(&self, page: usize, per_page: usize) -> ResponseTemplate {
        let skip = page.saturating_sub(1).saturating_mul(per_page);
        let items: Vec<&Value> = self.comments.values().skip(skip).take(per_page).collect();
        ResponseTemplate::new(200).set_body_json(items)
    }

    fn get(&self, id: u64) -> ResponseTemplate {
        self.comments
            .get(&id)
            .map_or_else(not_found, |comment| {
                ResponseTemplate::new(200).set_body_json(comment)
            })
    }

    fn update(&mut self, id: u64, body: &str) -> ResponseTemplate {
        let Some(comment) = self.comments.get_mut(&id) else {
            return not_found();
        };
        if let Some(field) = comment.get_mut("body") {
            *field = Value::from(body);
        }
        ResponseTemplate::new(200).set_body_json(&*comment)
    }

    fn delete(&mut self, id: u64) -> ResponseTemplate {
        if self.comments.remove(&id).is_some() {
            ResponseTemplate::new(204)
        } else {
            not_found()
        }
    }

    fn reply(&mut self, id: u64, body: &str) -> ResponseTemplate {
        if !self.comments.contains_key(&id) {
            return not_found();
        }
        let reply = self.insert(body, Some(id));
        ResponseTemplate::new(201).set_body_json(reply)
    }
}

/// Review comments for `owner/repo`, served from memory.
#[derive(Debug, Clone, Default)]
pub(crate) struct FakeReviewComments {
    store: Arc<Mutex<Store>>,
}

impl FakeReviewComments {
    /// Creates a fake holding `count` comments with identifiers `1..=count`.
    pub(crate) fn with_comments(count: u64) -> Self {
        let fake = Self::default();
        {
            let mut store = fake.lock();
            for index in 1..=count {
                store.insert(&format!("comment {index}"), None);
            }
        }
        fake
    }

    /// Routes every review comment request on `server` to this fake.
    pub(crate) async fn mount(&self, server: &MockServer) {
        Mock::given(path_regex(r"^/repos/owner/repo/pulls/comments(/.*)?$"))
            .respond_with(self.clone())
            .mount(server)
            .await;
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, Store> {
        self.store.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl Respond for FakeReviewComments {
    fn respond(&self, request: &Request) -> ResponseTemplate {
        if !is_authorised(request) {
            return ResponseTemplate::new(401).set_body_json(json!({
                "message": "Bad credentials",
                "documentation_url": "https://docs.github.com/rest"
            }));
        }

        let Some(rest) = request.url.path().strip_prefix(COLLECTION_PATH) else {
            return not_found();
        };
        let segments: Vec<&str> = rest.split('/').filter(|part| !part.is_empty()).collect();
        let mut store = self.lock();

        match (request.method.as_str(), segments.as_slice()) {
            ("GET", []) => {
                let page = query_number(request, "page").unwrap_or(1);
                let per_page = query_number(request, "per_page").unwrap_or(DEFAULT_PER_PAGE);
                store.list(page, per_page)
            }
            ("GET", [id]) => with_id(id, |comment_id| store.get(comment_id)),
            ("DELETE", [id]) => with_id(id, |comment_id| store.delete(comment_id)),
            ("PATCH", [id]) => with_body(request, |body| {
                with_id(id, |comment_id| store.update(comment_id, body))
            }),
            ("POST", [id, "replies"]) => with_body(request, |body| {
                with_id(id, |comment_id| store.reply(comment_id, body))
            }),
            _ => not_found(),
        }
    }
}

fn is_authorised(request: &Request) -> bool {
    let has_token = request
        .headers
        .get("authorization")
        .and_then(|value| value.to_str().ok())
        .is_some_and(|value| value == format!("Bearer {VALID_TOKEN}"));
    let accepts_v3 = request
        .headers
        .get("accept")
        .and_then(|value| value.to_str().ok())
        .is_some_and(|value| value == "application/vnd.github.v3+json");
    has_token && accepts_v3
}

fn query_number(request: &Request, name: &str) -> Option<usize> {
    request
        .url
        .query_pairs()
        .find(|(key, _)| key == name)
        .and_then(|(_, value)| value.parse().ok())
}

fn with_id(segment: &str, handler: impl FnOnce(u64) -> ResponseTemplate) -> ResponseTemplate {
    segment.parse::<u64>().map_or_else(|_| not_found(), handler)
}

fn with_body(
    request: &Request,
    handler: impl FnOnce(&str) -> ResponseTemplate,
) -> ResponseTemplate {
    let payload: Option<Value> = serde_json::from_slice(&request.body).ok();
    match payload.as_ref().and_then(|value| value.get("body")).and_then(Value::as_str) {
        Some(body) => handler(body),
        None => ResponseTemplate::new(422).set_body_json(json!({
            "message": "Validation Failed"
        })),
    }
}

fn not_found() -> ResponseTemplate {
    ResponseTemplate::new(404).set_body_json(json!({
        "message": "Not Found",
        "documentation_url": "https://docs.github.com/rest"
    }))
}
