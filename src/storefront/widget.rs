// Chat widget: transcript, busy state and scroll policy.
//
// Rendering is left to the caller. The widget only decides what the
// transcript holds, whether input is enabled and whether to follow the
// bottom of the message list.

use super::transport::{ChatTransport, TransportError};
use lazy_static::lazy_static;
use regex::Regex;

pub const BOT_LABEL: &str = "FRAM";
pub const GREETING: &str = "Hei! Hva kan jeg hjelpe deg med i dag?";
pub const EMPTY_REPLY_MESSAGE: &str = "Beklager — jeg fikk ikke noe svar akkurat nå. Prøv igjen.";
pub const UNAVAILABLE_BUBBLE: &str = "Chat er midlertidig utilgjengelig akkurat nå. Prøv igjen senere.";

pub const ICON_SEND: &str = "↑";
pub const ICON_CANCEL: &str = "×";

/// Distance from the bottom, in pixels, that still counts as "at the bottom".
pub const NEAR_BOTTOM_PX: f64 = 100.0;

lazy_static! {
    static ref INLINE_WHITESPACE: Regex = Regex::new(r"[ \t]+").unwrap();
}

/// Trim and collapse runs of spaces/tabs; line breaks are kept.
pub fn normalize_input(raw: &str) -> String {
    INLINE_WHITESPACE.replace_all(raw.trim(), " ").into_owned()
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Role {
    User,
    Bot,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Bubble {
    pub role: Role,
    pub text: String,
}

impl Bubble {
    fn user(text: impl Into<String>) -> Self {
        Self { role: Role::User, text: text.into() }
    }

    fn bot(text: impl Into<String>) -> Self {
        Self { role: Role::Bot, text: text.into() }
    }

    /// Name shown above the bubble; user bubbles have none.
    pub fn label(&self) -> &'static str {
        match self.role {
            Role::Bot => BOT_LABEL,
            Role::User => "",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WidgetState {
    Idle,
    AwaitingResponse,
}

/// Scroll position of the message list.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScrollMetrics {
    pub scroll_height: f64,
    pub scroll_top: f64,
    pub client_height: f64,
}

impl ScrollMetrics {
    pub fn at_bottom() -> Self {
        Self { scroll_height: 0.0, scroll_top: 0.0, client_height: 0.0 }
    }

    pub fn is_near_bottom(&self) -> bool {
        self.scroll_height - self.scroll_top - self.client_height < NEAR_BOTTOM_PX
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Scroll {
    ToBottom,
    Keep,
}

impl Scroll {
    fn from_metrics(viewport: ScrollMetrics) -> Self {
        if viewport.is_near_bottom() {
            Scroll::ToBottom
        } else {
            Scroll::Keep
        }
    }
}

/// An accepted message waiting for its reply.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Submission {
    pub text: String,
    pub scroll: Scroll,
    generation: u64,
}

#[derive(Debug)]
pub struct ChatWidget {
    state: WidgetState,
    transcript: Vec<Bubble>,
    typing: bool,
    error_banner: Option<String>,
    generation: u64,
}

impl Default for ChatWidget {
    fn default() -> Self {
        Self::new()
    }
}

impl ChatWidget {
    /// A freshly activated widget showing only the greeting.
    pub fn new() -> Self {
        let mut widget = Self {
            state: WidgetState::Idle,
            transcript: Vec::new(),
            typing: false,
            error_banner: None,
            generation: 0,
        };
        widget.activate();
        widget
    }

    /// Full page (re)activation, including back/forward cache restores.
    /// History is never carried over; a reply still in flight is dropped.
    pub fn activate(&mut self) -> Scroll {
        self.generation += 1;
        self.state = WidgetState::Idle;
        self.transcript.clear();
        self.typing = false;
        self.error_banner = None;
        self.transcript.push(Bubble::bot(GREETING));
        Scroll::ToBottom
    }

    pub fn state(&self) -> WidgetState {
        self.state
    }

    pub fn is_busy(&self) -> bool {
        self.state == WidgetState::AwaitingResponse
    }

    pub fn input_disabled(&self) -> bool {
        self.is_busy()
    }

    pub fn send_icon(&self) -> &'static str {
        if self.is_busy() {
            ICON_CANCEL
        } else {
            ICON_SEND
        }
    }

    pub fn transcript(&self) -> &[Bubble] {
        &self.transcript
    }

    /// Whether the "typing" placeholder row is showing.
    pub fn is_typing(&self) -> bool {
        self.typing
    }

    pub fn error_banner(&self) -> Option<&str> {
        self.error_banner.as_deref()
    }

    /// Accept a message for sending. Returns `None` while a request is
    /// outstanding or when the normalized input is empty.
    pub fn begin_submit(&mut self, raw: &str, viewport: ScrollMetrics) -> Option<Submission> {
        if self.is_busy() {
            return None;
        }
        self.error_banner = None;

        let text = normalize_input(raw);
        if text.is_empty() {
            return None;
        }

        let scroll = Scroll::from_metrics(viewport);
        self.transcript.push(Bubble::user(text.clone()));
        self.state = WidgetState::AwaitingResponse;
        self.typing = true;

        Some(Submission {
            text,
            scroll,
            generation: self.generation,
        })
    }

    /// Record the outcome of a submission and go back to idle. Fallback
    /// replies from the endpoint are ordinary replies here; only a failed
    /// call raises the error banner.
    pub fn finish(&mut self, submission: Submission, outcome: Result<String, TransportError>) -> Scroll {
        if submission.generation != self.generation {
            tracing::debug!("dropping reply for a previous page activation");
            return Scroll::Keep;
        }

        self.typing = false;
        match outcome {
            Ok(reply) if !reply.trim().is_empty() => self.transcript.push(Bubble::bot(reply)),
            Ok(_) => self.transcript.push(Bubble::bot(EMPTY_REPLY_MESSAGE)),
            Err(e) => {
                tracing::warn!(error = %e, "chat request failed");
                self.error_banner = Some(e.to_string());
                self.transcript.push(Bubble::bot(UNAVAILABLE_BUBBLE));
            }
        }
        self.state = WidgetState::Idle;
        submission.scroll
    }

    /// Submit and wait for the reply in one step.
    pub async fn send<T>(&mut self, raw: &str, viewport: ScrollMetrics, transport: &T) -> Option<Scroll>
    where
        T: ChatTransport + ?Sized,
    {
        let submission = self.begin_submit(raw, viewport)?;
        let outcome = transport.send(&submission.text).await;
        Some(self.finish(submission, outcome))
    }
}
