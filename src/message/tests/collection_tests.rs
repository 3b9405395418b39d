//! Unit tests for indexed access, appends, filtering and serialisation.

use super::fixtures::{field_message, populated, texts};
use crate::message::{
    collection::{CollectionConfig, Messages, Offset},
    domain::Message,
    error::CollectionError,
    ports::message::{MessageInterface, StructuralRecord},
};
use rstest::rstest;
use serde_json::{Value, json};

// ============================================================================
// Construction and appends
// ============================================================================

#[rstest]
fn new_collection_is_empty() {
    let messages: Messages = Messages::new();
    assert_eq!(messages.count(), 0);
    assert!(messages.is_empty());
    assert_eq!(messages.key(), 0);
    assert!(!messages.valid());
}

#[rstest]
#[case(0)]
#[case(1)]
#[case(7)]
fn count_matches_initial_length(#[case] size: usize) {
    let initial: Vec<Message> = (0..size)
        .map(|i| Message::new(format!("message {i}")))
        .collect();
    let messages = Messages::with_messages(initial);
    assert_eq!(messages.count(), size);
    assert_eq!(messages.len(), size);
}

#[rstest]
fn append_message_chains_and_keeps_order() {
    let mut messages = Messages::new();
    messages
        .append_message(Message::new("first"))
        .append_message(Message::new("second"));

    assert_eq!(texts(&messages), vec!["first", "second"]);
}

#[rstest]
fn append_messages_extends_in_order(mut populated: Messages) {
    populated.append_messages([Message::new("fourth"), Message::new("fifth")]);

    assert_eq!(populated.count(), 5);
    assert_eq!(
        texts(&populated),
        vec![
            "Name is required",
            "Email is required",
            "Email is invalid",
            "fourth",
            "fifth"
        ]
    );
}

#[rstest]
fn extend_and_collect_behave_like_append() {
    let mut messages: Messages = ["a", "b"].into_iter().map(Message::new).collect();
    messages.extend([Message::new("c")]);
    assert_eq!(texts(&messages), vec!["a", "b", "c"]);
}

#[rstest]
fn equality_ignores_cursor(populated: Messages) {
    let mut walked = populated.clone();
    walked.next();
    walked.next();
    assert_eq!(walked, populated);
}

// ============================================================================
// Indexed access
// ============================================================================

#[rstest]
#[case(0, true)]
#[case(2, true)]
#[case(3, false)]
#[case(usize::MAX, false)]
fn offset_exists_reports_dense_indices(
    populated: Messages,
    #[case] index: usize,
    #[case] expected: bool,
) {
    assert_eq!(populated.offset_exists(index), expected);
}

#[rstest]
fn offset_get_returns_message(populated: Messages) {
    let message = populated.offset_get(1).expect("index 1 exists");
    assert_eq!(message.message(), "Email is required");
}

#[rstest]
fn offset_get_missing_index_fails(populated: Messages) {
    let result = populated.offset_get(3);
    assert_eq!(result, Err(CollectionError::index_out_of_range(3, 3)));
    assert!(populated.get(3).is_none());
}

#[rstest]
fn offset_set_existing_index_replaces_in_place(mut populated: Messages) {
    populated
        .offset_set(1, Message::new("Replaced"))
        .expect("index 1 exists");

    assert_eq!(populated.count(), 3);
    assert_eq!(
        texts(&populated),
        vec!["Name is required", "Replaced", "Email is invalid"]
    );
    assert_eq!(
        populated.offset_get(1).map(Message::message),
        Ok("Replaced")
    );
}

#[rstest]
#[case(Offset::Append)]
#[case(Offset::from(None::<usize>))]
#[case(Offset::Index(3))]
fn offset_set_next_position_appends(mut populated: Messages, #[case] offset: Offset) {
    populated
        .offset_set(offset, Message::new("Appended"))
        .expect("append succeeds");

    assert_eq!(populated.count(), 4);
    assert_eq!(
        populated.offset_get(3).map(Message::message),
        Ok("Appended")
    );
}

#[rstest]
fn offset_set_beyond_next_position_fails(mut populated: Messages) {
    let result = populated.offset_set(5, Message::new("Sparse"));

    assert_eq!(result, Err(CollectionError::index_out_of_range(5, 3)));
    assert_eq!(populated.count(), 3);
}

#[rstest]
#[case(0, vec!["Email is required", "Email is invalid"])]
#[case(1, vec!["Name is required", "Email is invalid"])]
#[case(2, vec!["Name is required", "Email is required"])]
fn offset_unset_reindexes(
    mut populated: Messages,
    #[case] index: usize,
    #[case] remaining: Vec<&str>,
) {
    let removed = populated.offset_unset(index).expect("index exists");

    assert!(removed.is_some());
    assert_eq!(populated.count(), 2);
    assert_eq!(texts(&populated), remaining);
    assert!(!populated.offset_exists(2));
}

#[rstest]
fn offset_unset_missing_index_is_noop_by_default(mut populated: Messages) {
    let removed = populated.offset_unset(10).expect("lenient unset succeeds");

    assert!(removed.is_none());
    assert_eq!(populated.count(), 3);
}

#[rstest]
fn offset_unset_missing_index_fails_when_strict(populated: Messages) {
    let mut strict = populated.configured(CollectionConfig::strict());

    let result = strict.offset_unset(10);

    assert_eq!(result, Err(CollectionError::index_out_of_range(10, 3)));
    assert_eq!(strict.count(), 3);
}

#[rstest]
fn strict_config_still_removes_existing_index() {
    let mut messages = Messages::with_config(CollectionConfig::strict());
    messages.append_message(Message::new("only"));

    let removed = messages.offset_unset(0).expect("index exists");

    assert_eq!(removed.map(|m| m.message().to_owned()), Some("only".to_owned()));
    assert!(messages.is_empty());
}

// ============================================================================
// Filtering
// ============================================================================

#[rstest]
#[case("email", vec!["Email is required", "Email is invalid"])]
#[case("name", vec!["Name is required"])]
#[case("phone", vec![])]
fn filter_returns_matching_messages_in_order(
    populated: Messages,
    #[case] field: &str,
    #[case] expected: Vec<&str>,
) {
    let filtered: Vec<&str> = populated
        .filter(field)
        .into_iter()
        .map(Message::message)
        .collect();
    assert_eq!(filtered, expected);
}

#[rstest]
fn filter_skips_messages_without_field(mut populated: Messages) {
    populated.append_message(Message::new("General failure"));

    assert!(populated.filter("").is_empty());
    assert_eq!(populated.filter("email").len(), 2);
}

#[rstest]
fn filter_is_pure_and_idempotent(mut populated: Messages) {
    populated.next();
    let first = populated.filter("email");
    let second = populated.filter("email");

    assert_eq!(first, second);
    assert_eq!(populated.key(), 1);
    assert_eq!(populated.count(), 3);
}

// ============================================================================
// Serialisation
// ============================================================================

#[rstest]
fn json_serialize_preserves_order_and_records(populated: Messages) {
    let records = populated.json_serialize();

    assert_eq!(records.len(), populated.count());
    for (record, message) in records.iter().zip(populated.iter()) {
        assert_eq!(record, &message.to_structural());
    }
}

#[rstest]
fn json_serialize_of_empty_collection_is_empty() {
    let messages: Messages = Messages::new();
    assert!(messages.json_serialize().is_empty());
}

#[rstest]
fn serde_output_matches_structural_form(populated: Messages) {
    let encoded = serde_json::to_value(&populated).expect("collection serialises");
    let expected = Value::Array(
        populated
            .json_serialize()
            .into_iter()
            .map(Value::Object)
            .collect(),
    );
    assert_eq!(encoded, expected);
}

#[rstest]
fn serialises_to_flat_records() {
    let messages = Messages::with_messages([field_message("Email is required", "email")
        .with_kind("PresenceOf")
        .with_code(12)]);

    let encoded = serde_json::to_value(&messages).expect("collection serialises");

    assert_eq!(
        encoded,
        json!([{
            "field": "email",
            "message": "Email is required",
            "type": "PresenceOf",
            "code": 12,
            "metaData": {}
        }])
    );
}

// ============================================================================
// State reconstruction and heterogeneous messages
// ============================================================================

#[rstest]
fn reconstruct_from_state_round_trips(populated: Messages) {
    let rebuilt = Messages::reconstruct_from_state(populated.as_slice().to_vec());

    assert_eq!(rebuilt, populated);
    assert_eq!(rebuilt.key(), 0);
}

#[rstest]
fn reconstructed_collection_is_lenient_until_configured(populated: Messages) {
    let strict = populated.configured(CollectionConfig::strict());

    let mut plain = Messages::reconstruct_from_state(strict.as_slice().to_vec());
    let mut kept =
        Messages::reconstruct_from_state(strict.as_slice().to_vec()).configured(strict.config());

    assert_eq!(plain.config(), CollectionConfig::lenient());
    assert_eq!(plain.offset_unset(10), Ok(None));
    assert_eq!(kept.config(), CollectionConfig::strict());
    assert_eq!(
        kept.offset_unset(10),
        Err(CollectionError::index_out_of_range(10, 3))
    );
}

#[rstest]
fn configured_keeps_messages_and_cursor(mut populated: Messages) {
    populated.next();
    let before = populated.clone();

    let strict = populated.configured(CollectionConfig::strict());

    assert_eq!(strict, before);
    assert_eq!(strict.key(), 1);
    assert!(strict.valid());
    assert!(strict.offset_exists(2));
    assert!(!strict.is_empty());
    assert_eq!(strict.len(), strict.count());
}

#[rstest]
fn into_inner_returns_messages_in_order(populated: Messages) {
    let inner = populated.clone().into_inner();
    assert_eq!(inner.as_slice(), populated.as_slice());
}

struct Notice;

impl MessageInterface for Notice {
    fn field(&self) -> Option<&str> {
        None
    }

    fn to_structural(&self) -> StructuralRecord {
        let mut record = StructuralRecord::new();
        record.insert("notice".to_owned(), Value::Bool(true));
        record
    }
}

#[rstest]
fn boxed_trait_objects_share_a_collection() {
    let mut messages: Messages<Box<dyn MessageInterface>> = Messages::new();
    messages
        .append_message(Box::new(field_message("Email is required", "email")))
        .append_message(Box::new(Notice));

    assert_eq!(messages.filter("email").len(), 1);
    assert_eq!(
        serde_json::to_value(&messages).expect("collection serialises"),
        json!([
            {
                "field": "email",
                "message": "Email is required",
                "type": "",
                "code": 0,
                "metaData": {}
            },
            { "notice": true }
        ])
    );
}
