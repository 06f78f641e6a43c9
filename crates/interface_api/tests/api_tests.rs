//! HTTP API tests
//!
//! Each test spins up a fresh router over a freshly seeded store, logs in
//! through the real login endpoint, and drives the dashboards the way a
//! client would.

use axum::http::StatusCode;
use axum_test::TestServer;
use serde_json::{json, Value};

use interface_api::{config::ApiConfig, create_router, AppState};

fn server() -> TestServer {
    let state = AppState::seeded(ApiConfig::default());
    TestServer::new(create_router(state)).expect("router should start")
}

/// Logs in as a role and returns the bearer token
async fn token_for(server: &TestServer, role: &str) -> String {
    let response = server
        .post("/login")
        .json(&json!({
            "email": format!("{role}@example.com"),
            "password": "hunter2",
            "role": role,
        }))
        .await;
    response.assert_status_ok();
    let body: Value = response.json();
    body["token"].as_str().expect("login should mint a token").to_string()
}

// ============================================================================
// Login Tests
// ============================================================================

mod login_tests {
    use super::*;

    #[tokio::test]
    async fn test_login_with_empty_field_is_rejected_without_navigation() {
        let server = server();
        for body in [
            json!({"email": "", "password": "x", "role": "payer"}),
            json!({"email": "a@b.com", "password": "", "role": "payer"}),
            json!({"email": "a@b.com", "password": "x", "role": ""}),
        ] {
            let response = server.post("/login").json(&body).await;
            response.assert_status(StatusCode::UNPROCESSABLE_ENTITY);
            let error: Value = response.json();
            assert_eq!(error["message"], "Please fill in all fields");
        }
    }

    #[tokio::test]
    async fn test_login_redirects_to_role_dashboard() {
        let server = server();
        for role in ["pharmacy", "provider", "payer", "patient"] {
            let response = server
                .post("/login")
                .json(&json!({"email": "a@b.com", "password": "x", "role": role}))
                .await;
            response.assert_status_ok();
            let body: Value = response.json();
            assert_eq!(body["redirect"], format!("/{role}"));
            assert_eq!(body["toast"], format!("Logged in as {role}"));
            assert!(body["token"].is_string());
        }
    }

    #[tokio::test]
    async fn test_login_with_unknown_role_redirects_home() {
        let server = server();
        let response = server
            .post("/login")
            .json(&json!({"email": "a@b.com", "password": "x", "role": "admin"}))
            .await;
        response.assert_status_ok();
        let body: Value = response.json();
        assert_eq!(body["redirect"], "/");
        assert!(body["token"].is_null());
    }

    #[tokio::test]
    async fn test_logout_is_a_bare_redirect() {
        let server = server();
        let response = server.post("/logout").await;
        response.assert_status_ok();
        let body: Value = response.json();
        assert_eq!(body, json!({"redirect": "/"}));
    }
}

// ============================================================================
// Session Scoping Tests
// ============================================================================

mod session_tests {
    use super::*;

    #[tokio::test]
    async fn test_dashboards_require_a_session() {
        let server = server();
        for path in ["/pharmacy", "/provider", "/payer", "/patient"] {
            let response = server.get(path).await;
            response.assert_status_unauthorized();
        }
    }

    #[tokio::test]
    async fn test_dashboards_reject_the_wrong_role() {
        let server = server();
        let pharmacy_token = token_for(&server, "pharmacy").await;
        let response = server
            .get("/payer")
            .authorization_bearer(&pharmacy_token)
            .await;
        response.assert_status_forbidden();
    }

    #[tokio::test]
    async fn test_garbage_token_is_unauthorized() {
        let server = server();
        let response = server
            .get("/pharmacy")
            .authorization_bearer("not-a-token")
            .await;
        response.assert_status_unauthorized();
    }
}

// ============================================================================
// Layout / Tab Tests
// ============================================================================

mod layout_tests {
    use super::*;

    #[tokio::test]
    async fn test_each_tab_activates_exactly_one_nav_entry() {
        let server = server();
        let token = token_for(&server, "pharmacy").await;

        for tab in ["overview", "new-request", "track-requests", "patients"] {
            let response = server
                .get("/pharmacy")
                .add_query_param("tab", tab)
                .authorization_bearer(&token)
                .await;
            response.assert_status_ok();
            let body: Value = response.json();

            let active: Vec<&Value> = body["layout"]["nav"]
                .as_array()
                .unwrap()
                .iter()
                .filter(|entry| entry["active"] == true)
                .collect();
            assert_eq!(active.len(), 1, "tab {tab}");
            assert_eq!(active[0]["id"], tab);
            assert_eq!(body["tab"], tab);
        }
    }

    #[tokio::test]
    async fn test_unbuilt_tab_renders_placeholder() {
        let server = server();
        let token = token_for(&server, "pharmacy").await;

        let response = server
            .get("/pharmacy")
            .add_query_param("tab", "upload-docs")
            .authorization_bearer(&token)
            .await;
        response.assert_status_ok();
        let body: Value = response.json();
        assert_eq!(body["content"]["view"], "placeholder");
        assert_eq!(body["content"]["title"], "Upload Docs");
        assert_eq!(body["content"]["message"], "This section is under development");
    }

    #[tokio::test]
    async fn test_layout_names_the_demo_account() {
        let server = server();
        let token = token_for(&server, "payer").await;
        let response = server.get("/payer").authorization_bearer(&token).await;
        let body: Value = response.json();
        assert_eq!(body["layout"]["role_label"], "Payer");
        assert_eq!(body["layout"]["display_name"], "BlueCross Gold");
        assert_eq!(body["layout"]["sign_out"], "/logout");
    }
}

// ============================================================================
// Badge Consistency Tests
// ============================================================================

mod badge_tests {
    use super::*;

    /// The same request renders the same badge on every dashboard that
    /// shows it.
    #[tokio::test]
    async fn test_pa001_badge_matches_between_pharmacy_and_payer() {
        let server = server();
        let pharmacy_token = token_for(&server, "pharmacy").await;
        let payer_token = token_for(&server, "payer").await;

        let pharmacy: Value = server
            .get("/pharmacy")
            .add_query_param("tab", "track-requests")
            .authorization_bearer(&pharmacy_token)
            .await
            .json();
        let payer: Value = server
            .get("/payer")
            .add_query_param("tab", "incoming")
            .authorization_bearer(&payer_token)
            .await
            .json();

        let find = |body: &Value, key: &str| -> Value {
            body["content"][key]
                .as_array()
                .unwrap()
                .iter()
                .find(|r| r["id"] == "PA001")
                .expect("PA001 visible")
                .clone()
        };

        let a = find(&pharmacy, "requests");
        let b = find(&payer, "requests");
        assert_eq!(a["badge"], b["badge"]);
        assert_eq!(a["status"], "pending-review");
    }
}

// ============================================================================
// Pharmacy Workflow Tests
// ============================================================================

mod pharmacy_tests {
    use super::*;

    #[tokio::test]
    async fn test_submit_scenario_appends_and_switches_to_tracking() {
        let server = server();
        let token = token_for(&server, "pharmacy").await;

        let response = server
            .post("/pharmacy/requests")
            .authorization_bearer(&token)
            .json(&json!({
                "patient_name": "Jane Doe",
                "drug_name": "Lantus",
                "prescriber_name": "Dr. Smith",
            }))
            .await;
        response.assert_status_ok();
        let body: Value = response.json();
        assert_eq!(body["toast"], "PA request submitted successfully");
        assert_eq!(body["next_tab"], "track-requests");
        assert_eq!(body["request"]["id"], "PA007");
        assert_eq!(body["request"]["status"], "pending-review");

        // The submission is retained, not discarded.
        let tracking: Value = server
            .get("/pharmacy")
            .add_query_param("tab", "track-requests")
            .authorization_bearer(&token)
            .await
            .json();
        let ids: Vec<&str> = tracking["content"]["requests"]
            .as_array()
            .unwrap()
            .iter()
            .map(|r| r["id"].as_str().unwrap())
            .collect();
        assert!(ids.contains(&"PA007"));
    }

    #[tokio::test]
    async fn test_submit_with_missing_required_fields_toasts_an_error() {
        let server = server();
        let token = token_for(&server, "pharmacy").await;

        let response = server
            .post("/pharmacy/requests")
            .authorization_bearer(&token)
            .json(&json!({
                "patient_name": "Jane Doe",
                "drug_name": "",
                "prescriber_name": "",
            }))
            .await;
        response.assert_status(StatusCode::UNPROCESSABLE_ENTITY);
        let body: Value = response.json();
        assert_eq!(body["message"], "Please fill in required fields");
    }

    #[tokio::test]
    async fn test_tracking_status_filter_accepts_legacy_aliases() {
        let server = server();
        let token = token_for(&server, "pharmacy").await;

        // "pending" is the old pharmacy vocabulary for pending-review.
        let body: Value = server
            .get("/pharmacy")
            .add_query_param("tab", "track-requests")
            .add_query_param("status", "pending")
            .authorization_bearer(&token)
            .await
            .json();
        let requests = body["content"]["requests"].as_array().unwrap();
        assert!(!requests.is_empty());
        assert!(requests.iter().all(|r| r["status"] == "pending-review"));

        // "all" disables the filter.
        let body: Value = server
            .get("/pharmacy")
            .add_query_param("tab", "track-requests")
            .add_query_param("status", "all")
            .authorization_bearer(&token)
            .await
            .json();
        assert_eq!(body["content"]["requests"].as_array().unwrap().len(), 6);
    }

    #[tokio::test]
    async fn test_supply_info_returns_request_to_review_queue() {
        let server = server();
        let token = token_for(&server, "pharmacy").await;

        // PA004 is waiting on chart notes.
        let response = server
            .post("/pharmacy/requests/PA004/info")
            .authorization_bearer(&token)
            .await;
        response.assert_status_ok();
        let body: Value = response.json();
        assert_eq!(body["request"]["status"], "pending-review");
        assert_eq!(body["request"]["complete"], true);
    }
}

// ============================================================================
// Payer Workflow Tests
// ============================================================================

mod payer_tests {
    use super::*;

    #[tokio::test]
    async fn test_decision_scenario_pa002_approved() {
        let server = server();
        let token = token_for(&server, "payer").await;

        let response = server
            .post("/payer/requests/PA002/decision")
            .authorization_bearer(&token)
            .json(&json!({"decision": "approved"}))
            .await;
        response.assert_status_ok();
        let body: Value = response.json();
        let toast = body["toast"].as_str().unwrap();
        assert!(toast.contains("PA002"));
        assert!(toast.contains("approved"));
        assert_eq!(body["request"]["status"], "approved");

        // Terminal: a second decision conflicts.
        let second = server
            .post("/payer/requests/PA002/decision")
            .authorization_bearer(&token)
            .json(&json!({"decision": "denied"}))
            .await;
        second.assert_status(StatusCode::CONFLICT);
    }

    #[tokio::test]
    async fn test_decision_on_pending_review_request_is_rejected() {
        let server = server();
        let token = token_for(&server, "payer").await;

        // PA001 has not finished review.
        let response = server
            .post("/payer/requests/PA001/decision")
            .authorization_bearer(&token)
            .json(&json!({"decision": "approved"}))
            .await;
        response.assert_status(StatusCode::CONFLICT);
    }

    #[tokio::test]
    async fn test_urgent_queue_contains_only_urgent_requests() {
        let server = server();
        let token = token_for(&server, "payer").await;

        let body: Value = server.get("/payer").authorization_bearer(&token).await.json();
        let urgent = body["content"]["urgent"].as_array().unwrap();
        assert_eq!(urgent.len(), 1);
        assert_eq!(urgent[0]["id"], "PA002");
        assert_eq!(urgent[0]["priority"], "urgent");
    }

    #[tokio::test]
    async fn test_decision_panel_checklist_reflects_completeness() {
        let server = server();
        let token = token_for(&server, "payer").await;

        let body: Value = server
            .get("/payer")
            .add_query_param("tab", "decisions")
            .authorization_bearer(&token)
            .await
            .json();
        let panel = body["content"]["panel"].as_array().unwrap();
        assert_eq!(panel.len(), 1);
        assert_eq!(panel[0]["request"]["id"], "PA002");
        let checklist = panel[0]["checklist"].as_array().unwrap();
        assert!(checklist.iter().all(|item| item["passed"] == true));
    }

    #[tokio::test]
    async fn test_audit_tab_shows_decisions() {
        let server = server();
        let token = token_for(&server, "payer").await;

        server
            .post("/payer/requests/PA002/decision")
            .authorization_bearer(&token)
            .json(&json!({"decision": "approved", "note": "Criteria met"}))
            .await
            .assert_status_ok();

        let body: Value = server
            .get("/payer")
            .add_query_param("tab", "audit")
            .authorization_bearer(&token)
            .await
            .json();
        let trail = body["content"]["trail"].as_array().unwrap();
        assert_eq!(trail.len(), 1);
        assert_eq!(trail[0]["action"], "decision-made");
        assert!(trail[0]["detail"].as_str().unwrap().contains("PA002"));
    }

    #[tokio::test]
    async fn test_unknown_decision_value_is_rejected() {
        let server = server();
        let token = token_for(&server, "payer").await;
        let response = server
            .post("/payer/requests/PA002/decision")
            .authorization_bearer(&token)
            .json(&json!({"decision": "maybe"}))
            .await;
        response.assert_status(StatusCode::UNPROCESSABLE_ENTITY);
    }
}

// ============================================================================
// Provider Workflow Tests
// ============================================================================

mod provider_tests {
    use super::*;

    #[tokio::test]
    async fn test_sign_returns_request_to_decision_queue() {
        let server = server();
        let provider_token = token_for(&server, "provider").await;
        let payer_token = token_for(&server, "payer").await;

        // PA005 awaits signature on the provider portal.
        let response = server
            .post("/provider/requests/PA005/sign")
            .authorization_bearer(&provider_token)
            .await;
        response.assert_status_ok();
        let body: Value = response.json();
        assert_eq!(body["toast"], "PA request PA005 signed successfully");
        assert_eq!(body["request"]["status"], "ready-for-decision");

        // It now appears in the payer's decision panel.
        let payer: Value = server
            .get("/payer")
            .add_query_param("tab", "decisions")
            .authorization_bearer(&payer_token)
            .await
            .json();
        let ids: Vec<&str> = payer["content"]["panel"]
            .as_array()
            .unwrap()
            .iter()
            .map(|item| item["request"]["id"].as_str().unwrap())
            .collect();
        assert!(ids.contains(&"PA005"));
    }

    #[tokio::test]
    async fn test_provider_queue_holds_only_actionable_requests() {
        let server = server();
        let token = token_for(&server, "provider").await;

        let body: Value = server
            .get("/provider")
            .add_query_param("tab", "pa-requests")
            .authorization_bearer(&token)
            .await
            .json();
        let statuses: Vec<&str> = body["content"]["requests"]
            .as_array()
            .unwrap()
            .iter()
            .map(|r| r["status"].as_str().unwrap())
            .collect();
        assert!(!statuses.is_empty());
        assert!(statuses
            .iter()
            .all(|s| *s == "pending-signature" || *s == "needs-info"));
    }
}

// ============================================================================
// Patient View Tests
// ============================================================================

mod patient_tests {
    use super::*;

    #[tokio::test]
    async fn test_patient_view_is_read_only_and_name_scoped() {
        let server = server();
        let token = token_for(&server, "patient").await;

        let body: Value = server.get("/patient").authorization_bearer(&token).await.json();
        assert_eq!(body["content"]["read_only"], true);
        assert_eq!(body["content"]["profile"]["patient"]["name"], "Jane Doe");
        assert_eq!(body["content"]["profile"]["member_id"], "BC123456789");

        let requests = body["content"]["requests"].as_array().unwrap();
        assert_eq!(requests.len(), 1);
        assert_eq!(requests[0]["id"], "PA001");
    }

    #[tokio::test]
    async fn test_patient_timeline_completed_flags_are_monotonic() {
        let server = server();
        let token = token_for(&server, "patient").await;

        let body: Value = server.get("/patient").authorization_bearer(&token).await.json();
        let steps = body["content"]["requests"][0]["timeline"]["steps"]
            .as_array()
            .unwrap();
        let mut seen_incomplete = false;
        for step in steps {
            let completed = step["completed"].as_bool().unwrap();
            assert!(!(completed && seen_incomplete), "completed step after incomplete one");
            if !completed {
                seen_incomplete = true;
            }
        }
    }
}

// ============================================================================
// Landing / Fallback Tests
// ============================================================================

mod routing_tests {
    use super::*;

    #[tokio::test]
    async fn test_landing_lists_the_four_dashboards() {
        let server = server();
        let response = server.get("/").await;
        response.assert_status_ok();
        let body: Value = response.json();
        assert_eq!(body["name"], "MedAuth Pro");
        let paths: Vec<&str> = body["roles"]
            .as_array()
            .unwrap()
            .iter()
            .map(|r| r["path"].as_str().unwrap())
            .collect();
        assert_eq!(paths, vec!["/pharmacy", "/provider", "/payer", "/patient"]);
    }

    #[tokio::test]
    async fn test_health_endpoints() {
        let server = server();
        server.get("/health").await.assert_status_ok();
        server.get("/health/ready").await.assert_status_ok();
    }

    #[tokio::test]
    async fn test_unknown_route_falls_through_to_not_found() {
        let server = server();
        let response = server.get("/definitely-not-a-page").await;
        response.assert_status_not_found();
        let body: Value = response.json();
        assert_eq!(body["error"], "not_found");
    }

    #[tokio::test]
    async fn test_external_collaborators_are_a_configuration_error() {
        use core_kernel::{CollaboratorConfig, ExternalConfig};

        let collaborators = CollaboratorConfig::all_memory()
            .with_external_store(ExternalConfig::simple("https://pa-store.example.com", "key"));
        let result = AppState::from_collaborators(ApiConfig::default(), &collaborators);
        assert!(result.is_err());
    }
}
