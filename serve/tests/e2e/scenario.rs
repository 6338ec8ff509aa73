//! Full path: session → prompt → HTTP client → proxy → fake upstream → interpreter.

use axum::http::StatusCode;
use pitch::{AudienceMode, Field, HttpGateway, LengthMode, Session};

use super::common::{self, UpstreamReply};

fn acme_session() -> Session {
    let mut session = Session::new();
    session.inputs.set(Field::CompanyName, "Acme");
    session.inputs.set(Field::Offering, "a scheduling app");
    session.inputs.set(Field::Audience, "freelance photographers");
    session.inputs.set(Field::Problem, "double-booked shoots");
    session.inputs.set(Field::Outcome, "no more conflicting bookings");
    session.audience = AudienceMode::Investor;
    session.length = LengthMode::Sentence;
    session
}

#[tokio::test]
async fn e2e_acme_generate_round_trip() {
    let (url, seen) = common::spawn_upstream(UpstreamReply::Json(
        StatusCode::OK,
        common::text_reply(
            "  \"Acme is a scheduling app that saves freelance photographers from double-booked shoots.\"\n",
        ),
    ))
    .await;
    let base = common::spawn_proxy(common::settings_for(&url, common::fixed_key())).await;
    let gateway = HttpGateway::for_base_url(&base);

    let mut session = acme_session();
    assert!(session.can_generate());
    assert!(session.generate(&gateway).await.unwrap());
    assert_eq!(
        session.pitch,
        "Acme is a scheduling app that saves freelance photographers from double-booked shoots."
    );

    let seen = seen.lock().unwrap();
    let sent = &seen[0].body;
    assert_eq!(sent["max_tokens"], 300);
    let prompt = sent["messages"][0]["content"].as_str().unwrap();
    for value in [
        "Acme",
        "a scheduling app",
        "freelance photographers",
        "double-booked shoots",
        "no more conflicting bookings",
    ] {
        assert!(prompt.contains(value), "prompt missing {value:?}");
    }
    assert!(prompt.contains("market opportunity"));
    assert!(prompt.contains("15-25 words"));
}

#[tokio::test]
async fn e2e_iterate_parses_fenced_critique() {
    let critique = r#"```json
{"suggestions":[{"original":"scheduling app","issue":"generic","replacement":"booking calendar","priority":"high"}],"improvedVersion":"Acme's booking calendar ends double-booked shoots."}
```"#;
    let (url, seen) =
        common::spawn_upstream(UpstreamReply::Json(StatusCode::OK, common::text_reply(critique)))
            .await;
    let base = common::spawn_proxy(common::settings_for(&url, common::fixed_key())).await;
    let gateway = HttpGateway::for_base_url(&base);

    let mut session = acme_session();
    session.pitch = "Acme is a scheduling app for photographers.".to_string();
    let count = session.iterate(&gateway).await.unwrap().len();
    assert_eq!(count, 2);
    assert_eq!(seen.lock().unwrap()[0].body["max_tokens"], 600);

    session.apply_suggestion(0).unwrap();
    assert_eq!(session.pitch, "Acme is a booking calendar for photographers.");
}
