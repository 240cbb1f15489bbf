//! Tests for transport size limits.

use rstest::{fixture, rstest};

use crate::render::{LimitViolation, RenderedReply, ReplyColor, ReplyField, ReplyLimits};

#[fixture]
fn tight_limits() -> ReplyLimits {
    ReplyLimits {
        title: 10,
        body: 20,
        field_name: 5,
        field_value: 8,
        fields: 2,
    }
}

#[rstest]
fn reply_within_limits_passes(tight_limits: ReplyLimits) {
    let reply = RenderedReply::new(ReplyColor::Success)
        .with_title("short")
        .with_body("a small body")
        .with_field(ReplyField::inline("web", "ID: 0"));

    assert_eq!(tight_limits.first_violation(&reply), None);
}

#[rstest]
fn oversized_body_is_reported(tight_limits: ReplyLimits) {
    let reply = RenderedReply::new(ReplyColor::Success).with_body("x".repeat(21));

    assert_eq!(
        tight_limits.first_violation(&reply),
        Some(LimitViolation {
            part: "reply.body".to_owned(),
            limit: 20,
            actual: 21,
        })
    );
}

#[rstest]
fn lengths_count_characters_not_bytes(tight_limits: ReplyLimits) {
    let reply = RenderedReply::new(ReplyColor::Normal).with_body("✓".repeat(20));

    assert_eq!(tight_limits.first_violation(&reply), None);
}

#[rstest]
fn too_many_fields_is_reported(tight_limits: ReplyLimits) {
    let reply = RenderedReply::new(ReplyColor::Normal).with_fields([
        ReplyField::inline("a", "1"),
        ReplyField::inline("b", "2"),
        ReplyField::inline("c", "3"),
    ]);

    let violation = tight_limits
        .first_violation(&reply)
        .expect("field count should be rejected");

    assert_eq!(violation.part, "reply.fields");
    assert_eq!(violation.actual, 3);
}

#[rstest]
fn oversized_field_value_names_its_index(tight_limits: ReplyLimits) {
    let reply = RenderedReply::new(ReplyColor::Normal).with_fields([
        ReplyField::inline("a", "ok"),
        ReplyField::inline("b", "too long value"),
    ]);

    let violation = tight_limits
        .first_violation(&reply)
        .expect("field value should be rejected");

    assert_eq!(violation.part, "reply.fields[1].value");
}
