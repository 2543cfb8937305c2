#![allow(clippy::unwrap_used, clippy::expect_used)]
//! Integration tests for the HTTP endpoints.
//!
//! Every test drives the real router built by `routes::app` over the demo
//! site from `drakkar-test-utils`.

use axum::http::{StatusCode, header};
use serde_json::json;

use drakkar_test_utils::{assert, demo};

mod common;
use common::{CACHE_MAX_AGE, TestApp, uuid};

// =============================================================================
// Basic node envelope
// =============================================================================

#[tokio::test]
async fn node_envelope_has_meta_config_and_hero_entry() {
    let app = TestApp::new();
    let res = app.get(&format!("/get/node/{}", demo::PAGE_ID)).await;

    assert_eq!(res.status, StatusCode::OK);
    assert::json_eq(
        &res.json["meta"],
        &json!({"pageTitle": "Careers", "id": 1, "created": 1_700_000_000}),
    );
    assert_eq!(res.json["config"], json!({}));
    assert_eq!(res.json["content"]["body"], json!("<p>Join the crew.</p>"));

    let entry = &res.json["content"][uuid(demo::HERO_UUID)];
    assert::has_key(entry, "hero");
    assert::has_key(entry, "fields");
    assert::lacks_key(&res.json["content"], &uuid(demo::PAGE_UUID));
}

#[tokio::test]
async fn node_responses_carry_cache_control() {
    let app = TestApp::new();
    let res = app.get(&format!("/get/node/{}", demo::PAGE_ID)).await;

    let cache_control = res.headers.get(header::CACHE_CONTROL).unwrap();
    assert_eq!(
        cache_control.to_str().unwrap(),
        format!("max-age={CACHE_MAX_AGE}")
    );
}

#[tokio::test]
async fn hero_slides_are_keyed_by_uuid_in_order() {
    let app = TestApp::new();
    let res = app.get(&format!("/get/node/{}", demo::PAGE_ID)).await;

    let hero = &res.json["content"][uuid(demo::HERO_UUID)]["hero"];
    assert_eq!(hero["theme"], json!("dark"));

    let slide_keys: Vec<String> = demo::SLIDE_UUIDS.iter().map(|u| uuid(*u)).collect();
    let slide_keys: Vec<&str> = slide_keys.iter().map(String::as_str).collect();
    assert::keys_eq(&hero["slides"], &slide_keys);

    assert::json_eq(
        &hero["slides"][slide_keys[0]],
        &json!({
            "type": "slide",
            "content": {
                "title": "<p>Slide 1</p>",
                "imageSingle": {"url": "/sites/default/files/hero/sea.jpg"},
                "cta": {"uri": "internal:/jobs", "title": "See jobs", "options": {}}
            },
            "style": {"highlightColor": {"value": "Gold"}}
        }),
    );
}

#[tokio::test]
async fn node_fields_skip_excluded_and_hero_fields() {
    let app = TestApp::new();
    let res = app.get(&format!("/get/node/{}", demo::PAGE_ID)).await;

    let fields = &res.json["content"][uuid(demo::HERO_UUID)]["fields"];
    assert::keys_eq(
        fields,
        &[
            "title",
            "body",
            "field_page_sections",
            "field_link",
            "field_image",
        ],
    );
    assert::json_eq(
        &fields["body"],
        &json!({
            "label": "Body",
            "type": "text_with_summary",
            "content": {"format": "basic_html", "summary": "Join", "value": "<p>Join the crew.</p>"}
        }),
    );
    assert_eq!(
        fields["field_image"]["content"],
        json!({"url": "/sites/default/files/hero/sea.jpg"})
    );
    assert_eq!(
        fields["field_link"]["content"]["uri"],
        json!("https://drakkar.test/about")
    );
}

#[tokio::test]
async fn page_section_field_renders_every_known_child() {
    let app = TestApp::new();
    let res = app.get(&format!("/get/node/{}", demo::PAGE_ID)).await;

    let sections = &res.json["content"][uuid(demo::HERO_UUID)]["fields"]["field_page_sections"];
    assert_eq!(sections["type"], json!("page_section"));

    let section = &sections["content"][0];
    assert_eq!(section["type"], json!("page_section"));
    assert::json_eq(
        &section["style"],
        &json!({
            "sectionTitleStyle": "large",
            "backgroundColor": {"value": "Navy"},
            "bottomPadding": "medium",
            "highlightColor": {"value": "Gold"},
            "separators": ["thin", "thick"]
        }),
    );
    assert_eq!(section["content"]["anchor"], json!("careers"));

    let paragraphs = section["content"]["paragraphs"].as_object().unwrap();
    assert_eq!(paragraphs.len(), 20);
    assert!(!paragraphs.contains_key(&uuid(0x1202)));
    assert!(!paragraphs.contains_key(&uuid(0x1216)));
    assert!(
        paragraphs
            .values()
            .all(|p| p["type"] != json!("hero"))
    );

    assert_eq!(
        paragraphs[&uuid(0x1206)],
        json!({
            "type": "button",
            "content": {
                "cta": {"uri": "internal:/apply", "title": "Apply", "options": {}},
                "position": "center"
            }
        })
    );
    assert_eq!(
        paragraphs[&uuid(0x1208)]["content"]["images"],
        json!([
            {"url": "/sites/default/files/hero/sea.jpg"},
            {"url": "/sites/default/files/photos/crew.jpg"}
        ])
    );
    assert_eq!(
        paragraphs[&uuid(0x1212)]["content"],
        json!([{
            "title": "Hiring news",
            "image": "/sites/default/files/photos/crew.jpg",
            "teaser": "We are hiring."
        }])
    );
}

#[tokio::test]
async fn node_without_hero_is_keyed_by_node_uuid() {
    let app = TestApp::new();
    let res = app.get(&format!("/get/node/{}", demo::PLAIN_PAGE_ID)).await;

    assert_eq!(res.status, StatusCode::OK);
    let entry = &res.json["content"][uuid(demo::PLAIN_PAGE_UUID)];
    assert!(entry["hero"].is_null());
    assert_eq!(entry["fields"]["title"]["content"], json!("About"));
    assert_eq!(res.json["content"]["body"], json!(""));
}

// =============================================================================
// Article and recruitment envelopes
// =============================================================================

#[tokio::test]
async fn article_view_is_reduced_to_labelled_fields() {
    let app = TestApp::new();
    let res = app.get(&format!("/get/article/{}", demo::ARTICLE_ID)).await;

    assert_eq!(res.status, StatusCode::OK);
    let entry = &res.json[uuid(demo::ARTICLE_UUID)];
    assert::keys_eq(entry, &["image", "body", "tags"]);
    assert::json_eq(
        entry,
        &json!({
            "image": {"type": "image", "content": {"url": "/sites/default/files/photos/crew.jpg"}},
            "body": {
                "type": "text_with_summary",
                "content": {"format": "basic_html", "summary": "", "value": "<p>Story</p>"}
            },
            "tags": {"type": "entity_reference", "content": [{"name": "Careers", "id": 10}]}
        }),
    );
}

#[tokio::test]
async fn recruitment_view_wraps_hero_and_content() {
    let app = TestApp::new();
    let res = app
        .get(&format!("/get/recruitment/{}", demo::RECRUITMENT_ID))
        .await;

    assert_eq!(res.status, StatusCode::OK);
    let entry = &res.json[uuid(demo::RECRUITMENT_UUID)];
    assert_eq!(entry["hero"]["theme"], json!("light"));
    assert_eq!(entry["hero"]["slides"].as_object().unwrap().len(), 1);

    let content = &entry["content"];
    assert::keys_eq(content, &["title", "field_content"]);
    assert_eq!(content["field_content"]["type"], json!("text_block"));
    assert_eq!(
        content["field_content"]["content"][0]["field_wysiwyg"]["content"],
        json!("Retail jobs")
    );
}

#[tokio::test]
async fn recruitment_view_without_hero_has_empty_hero() {
    let app = TestApp::new();
    let res = app
        .get(&format!("/get/recruitment/{}", demo::PLAIN_PAGE_ID))
        .await;

    assert_eq!(res.json[uuid(demo::PLAIN_PAGE_UUID)]["hero"], json!({}));
}

// =============================================================================
// Errors
// =============================================================================

#[tokio::test]
async fn unknown_nodes_get_view_specific_messages() {
    let app = TestApp::new();
    let cases = [
        ("node", "Basic"),
        ("article", "Article"),
        ("recruitment", "Recruitment Industry"),
    ];

    for (route, kind) in cases {
        let res = app.get(&format!("/get/{route}/{}", demo::MISSING_ID)).await;
        assert_eq!(res.status, StatusCode::BAD_REQUEST);
        assert_eq!(
            res.json,
            json!({"message": format!("{kind} node with provided ID is not found.")})
        );
        assert!(res.headers.get(header::CACHE_CONTROL).is_none());
    }
}

#[tokio::test]
async fn non_numeric_ids_are_bad_requests() {
    let app = TestApp::new();
    let res = app.get("/get/node/abc").await;

    assert_eq!(res.status, StatusCode::BAD_REQUEST);
    assert_eq!(res.json["message"], json!("bad request: invalid node id: abc"));
}

// =============================================================================
// Access control
// =============================================================================

#[tokio::test]
async fn token_is_required_when_configured() {
    let app = TestApp::with_token("s3cret");
    let uri = format!("/get/node/{}", demo::PAGE_ID);

    let res = app.get(&uri).await;
    assert_eq!(res.status, StatusCode::FORBIDDEN);
    assert_eq!(res.json, json!({"message": "Access denied"}));

    for header in ["Bearer wrong", "Basic s3cret", "s3cret", "Bearer "] {
        let res = app.get_with_auth(&uri, header).await;
        assert_eq!(res.status, StatusCode::FORBIDDEN, "accepted {header:?}");
    }

    let res = app.get_with_auth(&uri, "Bearer s3cret").await;
    assert_eq!(res.status, StatusCode::OK);
}

#[tokio::test]
async fn access_is_checked_before_lookup() {
    let app = TestApp::with_token("s3cret");
    let res = app.get(&format!("/get/article/{}", demo::MISSING_ID)).await;
    assert_eq!(res.status, StatusCode::FORBIDDEN);
}

#[tokio::test]
async fn health_is_open_and_counts_nodes() {
    let app = TestApp::with_token("s3cret");
    let res = app.get("/health").await;

    assert_eq!(res.status, StatusCode::OK);
    assert_eq!(res.json, json!({"status": "healthy", "nodes": 4}));
}
