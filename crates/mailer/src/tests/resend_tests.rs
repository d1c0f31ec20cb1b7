use super::*;
use wiremock::{
    matchers::{body_json, header, method, path},
    Mock, MockServer, ResponseTemplate,
};

fn email() -> OutboundEmail {
    OutboundEmail {
        from: "Scale BI Consulting <onboarding@resend.dev>".into(),
        to: "samuel@scalebi.ai".into(),
        subject: "Nuevo Cliente: Ana - Acme".into(),
        html: "<p>hola</p>".into(),
    }
}

#[test]
fn endpoint_appends_emails_path_once() {
    let client = ResendClient::new("https://api.resend.com/").expect("client");
    assert_eq!(client.endpoint(), "https://api.resend.com/emails");
}

#[test]
fn rejects_unparsable_base_url() {
    assert!(ResendClient::new("not a url").is_err());
}

#[tokio::test]
async fn posts_envelope_with_bearer_token() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/emails"))
        .and(header("authorization", "Bearer re_test"))
        .and(body_json(serde_json::json!({
            "from": "Scale BI Consulting <onboarding@resend.dev>",
            "to": ["samuel@scalebi.ai"],
            "subject": "Nuevo Cliente: Ana - Acme",
            "html": "<p>hola</p>",
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "id": "49a3999c-0ce1-4ea6-ab68-afcd6dc2e794"
        })))
        .expect(1)
        .mount(&server)
        .await;

    let client = ResendClient::new(&server.uri()).expect("client");
    let receipt = client.send("re_test", &email()).await.expect("accepted");
    assert_eq!(receipt.id, "49a3999c-0ce1-4ea6-ab68-afcd6dc2e794");
}

#[tokio::test]
async fn provider_error_object_is_kept_as_details() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/emails"))
        .respond_with(ResponseTemplate::new(422).set_body_json(serde_json::json!({
            "statusCode": 422,
            "name": "validation_error",
            "message": "Invalid `to` field.",
        })))
        .mount(&server)
        .await;

    let client = ResendClient::new(&server.uri()).expect("client");
    let err = client.send("re_test", &email()).await.expect_err("rejected");
    let DeliveryError::Rejected { status, body } = err else {
        panic!("expected provider rejection");
    };
    assert_eq!(status, 422);
    assert_eq!(body["name"], "validation_error");
}

#[tokio::test]
async fn non_json_error_body_is_wrapped_as_message() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(503).set_body_string("upstream down"))
        .mount(&server)
        .await;

    let client = ResendClient::new(&server.uri()).expect("client");
    let err = client.send("re_test", &email()).await.expect_err("rejected");
    assert_eq!(err.details(), serde_json::json!({ "message": "upstream down" }));
}

#[tokio::test]
async fn unreachable_provider_is_a_transport_failure() {
    let port = {
        let listener = std::net::TcpListener::bind("127.0.0.1:0").expect("bind");
        listener.local_addr().expect("addr").port()
    };

    let client = ResendClient::new(&format!("http://127.0.0.1:{port}")).expect("client");
    let err = client.send("re_test", &email()).await.expect_err("unreachable");
    assert!(matches!(err, DeliveryError::Transport(_)));
}
