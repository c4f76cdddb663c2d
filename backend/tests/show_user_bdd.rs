//! Behaviour tests for the "show user" endpoint wiring.
//!
//! Each scenario builds the real repository, service and proxy handler over
//! an in-memory or failing directory client and drives one event through it.

use std::sync::Arc;

use async_trait::async_trait;
use futures::executor::block_on;
use rstest::fixture;
use rstest_bdd::Slot;
use rstest_bdd_macros::{ScenarioState, given, scenario, then, when};
use serde_json::{Value, json};
use user_directory::inbound::http::show_user::{USER_ID_PARAM, show_user_handler};
use user_directory::inbound::proxy::{ProxyEvent, ProxyResponse};
use user_directory::outbound::directory::{
    DirectoryClient, DirectoryClientError, DirectoryItem, InMemoryDirectoryClient,
    UserOfIdRepository,
};

const TABLE: &str = "UserTable";
const DUMMY_USER: &str = "Dummy User";

/// Client whose store is never reachable.
struct UnreachableDirectory;

#[async_trait]
impl DirectoryClient for UnreachableDirectory {
    async fn get_item(
        &self,
        _table_name: &str,
        _key: &str,
    ) -> Result<Option<DirectoryItem>, DirectoryClientError> {
        Err(DirectoryClientError::connection("connection refused"))
    }
}

#[derive(Default, ScenarioState)]
struct ShowUserWorld {
    directory: Slot<Arc<dyn DirectoryClient>>,
    response: Slot<ProxyResponse>,
}

impl ShowUserWorld {
    fn request(&self, user_id: &str) {
        let directory = self.directory.get().expect("directory configured");
        let handler = show_user_handler(Arc::new(UserOfIdRepository::new(TABLE, directory)), None);
        let event = ProxyEvent::new("GET", format!("/users/{user_id}"))
            .with_path_parameter(USER_ID_PARAM, user_id);

        self.response.set(block_on(handler.handle(&event)));
    }

    fn assert_response(&self, status_code: u16, body: &Value) {
        let response = self.response.get().expect("response recorded");
        assert_eq!(response.status_code, status_code);
        let actual: Value = serde_json::from_str(&response.body).expect("json body");
        assert_eq!(&actual, body);
    }
}

#[fixture]
fn world() -> ShowUserWorld {
    ShowUserWorld::default()
}

#[given("a directory table holding Dummy User")]
fn a_table_holding_dummy_user(world: &ShowUserWorld) {
    let client = InMemoryDirectoryClient::new();
    let item = json!({ "userId": DUMMY_USER })
        .as_object()
        .cloned()
        .expect("object literal");
    block_on(client.put_item(TABLE, DUMMY_USER, item));
    world.directory.set(Arc::new(client));
}

#[given("an empty directory table")]
fn an_empty_table(world: &ShowUserWorld) {
    world.directory.set(Arc::new(InMemoryDirectoryClient::new()));
}

#[given("an unreachable directory")]
fn an_unreachable_directory(world: &ShowUserWorld) {
    world.directory.set(Arc::new(UnreachableDirectory));
}

#[when("Dummy User is requested")]
fn dummy_user_is_requested(world: &ShowUserWorld) {
    world.request(DUMMY_USER);
}

#[when("a blank user id is requested")]
fn a_blank_id_is_requested(world: &ShowUserWorld) {
    world.request("   ");
}

#[then("the response is 200 with the user id")]
fn ok_with_user_id(world: &ShowUserWorld) {
    world.assert_response(200, &json!({ "userId": DUMMY_USER }));
}

#[then("the response is 400 with an invalid user id message")]
fn bad_request_with_message(world: &ShowUserWorld) {
    world.assert_response(
        400,
        &json!({ "message": "invalid user id: user id must not be empty" }),
    );
}

#[then("the response is 404 with a user not found message")]
fn not_found_with_message(world: &ShowUserWorld) {
    world.assert_response(404, &json!({ "message": "user not found: Dummy User" }));
}

#[then("the response is 500 with the unknown error message")]
fn internal_error_with_fixed_message(world: &ShowUserWorld) {
    world.assert_response(500, &json!({ "message": "Unknown Error" }));
}

#[scenario(path = "tests/features/show_user.feature", name = "Existing user is returned")]
fn existing_user_is_returned(world: ShowUserWorld) {
    let _ = world;
}

#[scenario(path = "tests/features/show_user.feature", name = "Malformed user id is rejected")]
fn malformed_user_id_is_rejected(world: ShowUserWorld) {
    let _ = world;
}

#[scenario(path = "tests/features/show_user.feature", name = "Unknown user is not found")]
fn unknown_user_is_not_found(world: ShowUserWorld) {
    let _ = world;
}

#[scenario(
    path = "tests/features/show_user.feature",
    name = "Directory outage is an unknown error"
)]
fn directory_outage_is_an_unknown_error(world: ShowUserWorld) {
    let _ = world;
}
