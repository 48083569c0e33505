//! Scenario state and request plumbing for the review comments BDD tests.

use std::cell::RefCell;
use std::rc::Rc;

use review_comments::{
    ActionRequest, ApiResponse, ClientError, OctocrabReviewCommentGateway, PersonalAccessToken,
    RepositoryLocator, execute_action,
};
use rstest_bdd::Slot;
use rstest_bdd_macros::ScenarioState;
use tokio::runtime::Runtime;
use wiremock::MockServer;

/// Runtime handle that can live in a [`Slot`].
#[derive(Clone)]
pub(crate) struct SharedRuntime(Rc<RefCell<Runtime>>);

impl SharedRuntime {
    fn start() -> Self {
        let runtime = Runtime::new()
            .unwrap_or_else(|error| panic!("failed to create Tokio runtime: {error}"));
        Self(Rc::new(RefCell::new(runtime)))
    }

    pub(crate) fn block_on<F: std::future::Future>(&self, future: F) -> F::Output {
        self.0.borrow().block_on(future)
    }
}

#[derive(ScenarioState, Default)]
pub(crate) struct ReviewState {
    pub(crate) runtime: Slot<SharedRuntime>,
    pub(crate) server: Slot<MockServer>,
    pub(crate) token: Slot<String>,
    pub(crate) response: Slot<ApiResponse>,
}

/// Starts the runtime and mock server on first use.
pub(crate) fn ensure_runtime_and_server(review_state: &ReviewState) -> SharedRuntime {
    if review_state.runtime.with_ref(|_| ()).is_none() {
        review_state.runtime.set(SharedRuntime::start());
    }

    let shared_runtime = review_state
        .runtime
        .get()
        .unwrap_or_else(|| panic!("runtime not initialised after set"));

    if review_state.server.with_ref(|_| ()).is_none() {
        review_state
            .server
            .set(shared_runtime.block_on(MockServer::start()));
    }

    shared_runtime
}

/// Runs `request` against the mock server and stores the response.
///
/// The gateway is built inside the runtime because octocrab spawns its
/// service layer on the current Tokio context.
pub(crate) fn send_request(
    review_state: &ReviewState,
    request: &ActionRequest,
) -> Result<(), ClientError> {
    let runtime = ensure_runtime_and_server(review_state);
    let server_url = review_state
        .server
        .with_ref(MockServer::uri)
        .ok_or_else(|| ClientError::Api {
            message: "mock server URL missing".to_owned(),
        })?;
    let raw_token = review_state
        .token
        .get()
        .ok_or(ClientError::MissingToken)?;

    let response = runtime.block_on(async {
        let token = PersonalAccessToken::new(raw_token)?;
        let locator = RepositoryLocator::with_api_base(&server_url, "owner", "repo")?;
        let gateway = OctocrabReviewCommentGateway::new(&token, &locator)?;
        execute_action(&gateway, request).await
    })?;

    review_state.response.set(response);
    Ok(())
}
