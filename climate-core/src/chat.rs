//! Client for the conversational climate assistant.
//!
//! Questions are POSTed to a webhook together with a [`SessionId`] that the
//! caller keeps for the lifetime of the conversation.

use async_trait::async_trait;
use chrono::Utc;
use rand::Rng;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use std::fmt::{self, Debug};

use crate::{
    Config,
    error::{ApiError, truncate_body},
};

/// Shown in place of a reply when the webhook cannot be reached or answers badly.
pub const FALLBACK_REPLY: &str = "Lo siento, encontré un error al procesar tu consulta. \
     Por favor, intenta de nuevo o reformula tu pregunta sobre el clima.";

pub const FAQS: [&str; 5] = [
    "¿Qué datos climáticos puedo consultar?",
    "¿De dónde provienen los datos?",
    "¿Cómo interpreto el mapa interactivo?",
    "¿Qué es el cambio climático?",
    "¿Cómo puedo contribuir al proyecto?",
];

const SESSION_ALPHABET: &[u8] = b"0123456789abcdefghijklmnopqrstuvwxyz";
const SESSION_SUFFIX_LEN: usize = 9;

/// Conversation identifier sent with every question.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SessionId(String);

impl SessionId {
    /// `session-<unix millis>-<9 base36 chars>`
    pub fn generate() -> Self {
        let mut rng = rand::rng();
        let suffix: String = (0..SESSION_SUFFIX_LEN)
            .map(|_| SESSION_ALPHABET[rng.random_range(0..SESSION_ALPHABET.len())] as char)
            .collect();

        Self(format!("session-{}-{suffix}", Utc::now().timestamp_millis()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<String> for SessionId {
    fn from(value: String) -> Self {
        Self(value)
    }
}

impl fmt::Display for SessionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[async_trait]
pub trait ChatBackend: Send + Sync + Debug {
    async fn ask(&self, session: &SessionId, question: &str) -> Result<String, ApiError>;
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct ChatRequest<'a> {
    session_id: &'a str,
    chat_input: &'a str,
}

#[derive(Debug, Deserialize)]
struct ChatReply {
    output: String,
}

/// Webhook speaking `{"sessionId", "chatInput"}` → `{"output"}`.
#[derive(Debug, Clone)]
pub struct WebhookChat {
    url: String,
    http: Client,
}

impl WebhookChat {
    pub fn new(url: String) -> Self {
        Self { url, http: Client::new() }
    }
}

#[async_trait]
impl ChatBackend for WebhookChat {
    async fn ask(&self, session: &SessionId, question: &str) -> Result<String, ApiError> {
        log::debug!("POST {} (session {session})", self.url);

        let res = self
            .http
            .post(&self.url)
            .json(&ChatRequest { session_id: session.as_str(), chat_input: question })
            .send()
            .await?;

        let status = res.status();
        let body = res.text().await?;

        if !status.is_success() {
            return Err(ApiError::Status { status: status.as_u16(), body: truncate_body(&body) });
        }

        let reply: ChatReply = serde_json::from_str(&body)?;
        Ok(reply.output)
    }
}

/// Construct the webhook backend from `config`.
pub fn chat_from_config(config: &Config) -> anyhow::Result<Box<dyn ChatBackend>> {
    let url = config.chat_webhook_url()?;
    Ok(Box::new(WebhookChat::new(url.to_owned())))
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Sender {
    User,
    Bot,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatMessage {
    pub from: Sender,
    pub text: String,
}

/// One conversation: its id and the transcript so far.
#[derive(Debug)]
pub struct ChatSession {
    id: SessionId,
    backend: Box<dyn ChatBackend>,
    transcript: Vec<ChatMessage>,
}

impl ChatSession {
    pub fn new(backend: Box<dyn ChatBackend>) -> Self {
        Self::with_id(SessionId::generate(), backend)
    }

    pub fn with_id(id: SessionId, backend: Box<dyn ChatBackend>) -> Self {
        Self { id, backend, transcript: Vec::new() }
    }

    pub fn id(&self) -> &SessionId {
        &self.id
    }

    pub fn transcript(&self) -> &[ChatMessage] {
        &self.transcript
    }

    /// Send `input` and return the bot's answer.
    ///
    /// Blank input is ignored (`None`). Failures are logged and answered with
    /// [`FALLBACK_REPLY`].
    pub async fn send(&mut self, input: &str) -> Option<&str> {
        let question = input.trim();
        if question.is_empty() {
            return None;
        }

        self.push(Sender::User, question.to_string());

        let answer = match self.backend.ask(&self.id, question).await {
            Ok(output) => output,
            Err(err) => {
                log::error!("Error sending message: {err}");
                FALLBACK_REPLY.to_string()
            }
        };

        self.push(Sender::Bot, answer);
        self.transcript.last().map(|m| m.text.as_str())
    }

    /// Ask one of the [`FAQS`] by index.
    pub async fn send_faq(&mut self, index: usize) -> Option<&str> {
        let question = FAQS.get(index)?;
        self.send(question).await
    }

    fn push(&mut self, from: Sender, text: String) {
        self.transcript.push(ChatMessage { from, text });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support;
    use std::sync::{Arc, Mutex};

    /// Echoes questions back, or fails every call.
    #[derive(Debug, Default)]
    struct EchoBackend {
        fail: bool,
        seen: Arc<Mutex<Vec<(String, String)>>>,
    }

    #[async_trait]
    impl ChatBackend for EchoBackend {
        async fn ask(&self, session: &SessionId, question: &str) -> Result<String, ApiError> {
            self.seen.lock().unwrap().push((session.to_string(), question.to_string()));
            if self.fail {
                return Err(ApiError::Status { status: 500, body: "boom".into() });
            }
            Ok(format!("re: {question}"))
        }
    }

    #[test]
    fn generated_session_id_has_expected_shape() {
        let id = SessionId::generate();
        let parts: Vec<&str> = id.as_str().splitn(3, '-').collect();

        assert_eq!(parts.len(), 3);
        assert_eq!(parts[0], "session");
        assert!(parts[1].parse::<i64>().is_ok());
        assert_eq!(parts[2].len(), 9);
        assert!(parts[2].bytes().all(|b| SESSION_ALPHABET.contains(&b)));
    }

    #[test]
    fn session_ids_differ() {
        assert_ne!(SessionId::generate(), SessionId::generate());
    }

    #[test]
    fn request_uses_webhook_field_names() {
        let body = serde_json::to_value(ChatRequest { session_id: "s-1", chat_input: "hola" })
            .unwrap();

        assert_eq!(body, serde_json::json!({"sessionId": "s-1", "chatInput": "hola"}));
    }

    #[test]
    fn reply_without_output_is_a_parse_error() {
        let err: ApiError = serde_json::from_str::<ChatReply>(r#"{"text": "hi"}"#).unwrap_err().into();
        assert!(matches!(err, ApiError::Parse(_)));
    }

    #[tokio::test]
    async fn send_records_both_sides_and_threads_session() {
        let backend = EchoBackend::default();
        let seen = Arc::clone(&backend.seen);
        let mut session = ChatSession::with_id("session-1-abc".to_string().into(), Box::new(backend));

        let reply = session.send("  ¿Lloverá mañana?  ").await.map(str::to_owned);

        assert_eq!(reply.as_deref(), Some("re: ¿Lloverá mañana?"));
        assert_eq!(
            session.transcript(),
            &[
                ChatMessage { from: Sender::User, text: "¿Lloverá mañana?".into() },
                ChatMessage { from: Sender::Bot, text: "re: ¿Lloverá mañana?".into() },
            ]
        );
        assert_eq!(
            seen.lock().unwrap().as_slice(),
            &[("session-1-abc".to_string(), "¿Lloverá mañana?".to_string())]
        );
    }

    #[tokio::test]
    async fn blank_input_is_ignored() {
        let mut session = ChatSession::new(Box::new(EchoBackend::default()));

        assert!(session.send("   ").await.is_none());
        assert!(session.transcript().is_empty());
    }

    #[tokio::test]
    async fn failure_is_answered_with_apology() {
        let mut session =
            ChatSession::new(Box::new(EchoBackend { fail: true, ..EchoBackend::default() }));

        let reply = session.send("hola").await.map(str::to_owned);

        assert_eq!(reply.as_deref(), Some(FALLBACK_REPLY));
        assert_eq!(session.transcript().len(), 2);
        assert_eq!(session.transcript()[1].from, Sender::Bot);
    }

    #[tokio::test]
    async fn faq_shortcut_sends_fixed_question() {
        let backend = EchoBackend::default();
        let seen = Arc::clone(&backend.seen);
        let mut session = ChatSession::new(Box::new(backend));

        assert!(session.send_faq(3).await.is_some());
        assert!(session.send_faq(FAQS.len()).await.is_none());

        let seen = seen.lock().unwrap();
        assert_eq!(seen.len(), 1);
        assert_eq!(seen[0].1, FAQS[3]);
        assert_eq!(seen[0].0, session.id().to_string());
    }

    #[tokio::test]
    async fn webhook_reply_is_returned() {
        let base = test_support::serve("200 OK", r#"{"output": "Hace calor."}"#).await;
        let webhook = WebhookChat::new(format!("{base}/webhook/chat"));

        let reply = webhook.ask(&"session-1-abc".to_string().into(), "¿Qué tiempo hace?").await;

        assert_eq!(reply.unwrap(), "Hace calor.");
    }

    #[tokio::test]
    async fn webhook_error_status_is_reported() {
        let base = test_support::serve("404 Not Found", r#"{"message": "no webhook"}"#).await;
        let webhook = WebhookChat::new(format!("{base}/webhook/chat"));

        let err = webhook.ask(&SessionId::generate(), "hola").await.unwrap_err();

        assert_eq!(err.status(), Some(404));
    }

    #[tokio::test]
    async fn webhook_server_error_yields_apology() {
        let base = test_support::serve("500 Internal Server Error", r#"{"message": "boom"}"#).await;
        let mut session =
            ChatSession::new(Box::new(WebhookChat::new(format!("{base}/webhook/chat"))));

        let reply = session.send("¿Qué es el cambio climático?").await.map(str::to_owned);

        assert_eq!(reply.as_deref(), Some(FALLBACK_REPLY));
        assert_eq!(session.transcript().len(), 2);
    }

    #[tokio::test]
    async fn webhook_malformed_reply_yields_apology() {
        let base = test_support::serve("200 OK", "<html>oops</html>").await;
        let mut session =
            ChatSession::new(Box::new(WebhookChat::new(format!("{base}/webhook/chat"))));

        let reply = session.send_faq(0).await.map(str::to_owned);

        assert_eq!(reply.as_deref(), Some(FALLBACK_REPLY));
    }

    #[test]
    fn chat_from_config_requires_webhook() {
        let mut cfg = Config::default();
        assert!(chat_from_config(&cfg).is_err());

        cfg.set_chat_webhook_url("https://example.org/chat".into());
        assert!(chat_from_config(&cfg).is_ok());
    }
}
