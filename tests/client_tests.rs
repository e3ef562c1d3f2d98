use chatbot_sim::client::{ChatTransport, ChatView, ClientError, FALLBACK_REPLY, HttpTransport};
use chatbot_sim::message::{Message, Role};
use chatbot_sim::routes::create_router;
use chatbot_sim::rules::keyword_reply;
use chatbot_sim::services::thinking::ThinkingDelay;
use chatbot_sim::state::AppState;

use axum::Router;
use axum::http::StatusCode;
use axum::routing::post;
use std::collections::VecDeque;
use std::sync::{Arc, Mutex};

/// Replays canned results and records every history it was sent.
#[derive(Default)]
struct ScriptedTransport {
    replies: Mutex<VecDeque<Result<String, ClientError>>>,
    sent: Mutex<Vec<Vec<Message>>>,
}

impl ScriptedTransport {
    fn with(replies: Vec<Result<String, ClientError>>) -> Self {
        Self {
            replies: Mutex::new(replies.into()),
            sent: Mutex::default(),
        }
    }

    fn sent(&self) -> Vec<Vec<Message>> {
        self.sent.lock().unwrap().clone()
    }
}

impl ChatTransport for ScriptedTransport {
    async fn send(&self, history: &[Message]) -> Result<String, ClientError> {
        self.sent.lock().unwrap().push(history.to_vec());
        self.replies
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or_else(|| Err(ClientError::Decode("script exhausted".into())))
    }
}

async fn spawn_server(app: Router) -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });
    format!("http://{addr}")
}

#[tokio::test]
async fn blank_input_is_ignored() {
    let mut view = ChatView::new(ScriptedTransport::default());
    for blank in ["", "   ", "\n\t "] {
        view.set_input(blank);
        assert!(!view.can_submit());
        assert!(!view.submit().await);
    }
    assert!(view.messages().is_empty());
    assert!(view.transport().sent().is_empty());
}

#[test]
fn submit_while_pending_is_a_no_op() {
    let mut view = ChatView::new(ScriptedTransport::default());
    view.set_input("first");
    let history = view.begin_submit().unwrap();
    assert_eq!(history, vec![Message::user("first")]);
    assert!(view.is_pending());

    view.set_input("second");
    assert!(!view.can_submit());
    assert!(view.begin_submit().is_none());
    assert_eq!(view.messages().len(), 1);
    assert_eq!(view.input(), "second");

    view.complete_submit(Ok("reply".into()));
    assert!(!view.is_pending());
    assert!(view.begin_submit().is_some());
}

#[tokio::test]
async fn sends_full_history_and_appends_reply() {
    let transport = ScriptedTransport::with(vec![Ok("one".into()), Ok("two".into())]);
    let mut view = ChatView::new(transport);

    view.set_input("hello");
    assert!(view.submit().await);
    view.set_input("again");
    assert!(view.submit().await);

    assert_eq!(
        view.messages(),
        &[
            Message::user("hello"),
            Message::assistant("one"),
            Message::user("again"),
            Message::assistant("two"),
        ]
    );

    let sent = view.transport().sent();
    assert_eq!(sent.len(), 2);
    assert_eq!(sent[1].len(), 3);
    assert_eq!(sent[1].last().unwrap(), &Message::user("again"));
    assert!(!view.is_pending());
}

#[tokio::test]
async fn failure_becomes_fallback_message() {
    let transport = ScriptedTransport::with(vec![Err(ClientError::Status(500))]);
    let mut view = ChatView::new(transport);

    view.set_input("hello");
    assert!(view.submit().await);

    let last = view.messages().last().unwrap();
    assert_eq!(last.role, Role::Assistant);
    assert_eq!(last.content, FALLBACK_REPLY);
    assert!(!view.is_pending());
}

#[tokio::test]
async fn new_chat_clears_everything() {
    let transport = ScriptedTransport::with(vec![Ok("reply".into())]);
    let mut view = ChatView::new(transport);
    view.set_input("hello");
    view.submit().await;
    view.set_input("draft");

    view.new_chat();
    assert!(view.messages().is_empty());
    assert_eq!(view.input(), "");
}

#[tokio::test]
async fn talks_to_the_real_endpoint() {
    let state = Arc::new(AppState::new(ThinkingDelay::NONE));
    let app = create_router(concat!(env!("CARGO_MANIFEST_DIR"), "/public")).with_state(state);
    let base = spawn_server(app).await;

    let mut view = ChatView::new(HttpTransport::new(&format!("{base}/")));
    assert_eq!(view.transport().endpoint(), format!("{base}/api/chat"));

    view.set_input("hello");
    assert!(view.submit().await);
    assert_eq!(
        view.messages().last().unwrap().content,
        keyword_reply("hello").unwrap()
    );

    view.set_input("2*6");
    view.submit().await;
    assert_eq!(view.messages().last().unwrap().content, "The answer is 12.");
}

#[tokio::test]
async fn server_error_status_uses_fallback() {
    let app = Router::new().route(
        "/api/chat",
        post(|| async { (StatusCode::INTERNAL_SERVER_ERROR, "nope") }),
    );
    let base = spawn_server(app).await;

    let mut view = ChatView::new(HttpTransport::new(&base));
    view.set_input("hello");
    view.submit().await;
    assert_eq!(view.messages().last().unwrap().content, FALLBACK_REPLY);
}

#[tokio::test]
async fn unreachable_server_uses_fallback() {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);

    let mut view = ChatView::new(HttpTransport::new(&format!("http://{addr}")));
    view.set_input("hello");
    assert!(view.submit().await);
    assert_eq!(view.messages().len(), 2);
    assert_eq!(view.messages()[1].content, FALLBACK_REPLY);
    assert!(!view.is_pending());
}
