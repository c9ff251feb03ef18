use std::time::Duration;

use super::{DEFAULT_DISMISS, FADE_IN_OUT_TIME, MAX_MSG_LENGTH, ToastKind};

/// Where a toast is in its fade-in / wait / fade-out lifecycle.
///
/// Ordered, so `a <= b` holds whenever `a` was observed before `b`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum ToastPhase {
    FadeIn,
    Wait,
    FadeOut,
    Expired,
}

/// Toast notification message
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Toast {
    kind: ToastKind,
    title: Option<String>,
    content: String,
    dismiss_time: Duration,
    created_at: Duration,
}

impl Toast {
    /// Start building a toast of the given kind
    pub fn builder(kind: ToastKind) -> ToastBuilder {
        ToastBuilder::new(kind)
    }

    pub fn kind(&self) -> ToastKind {
        self.kind
    }

    pub fn title(&self) -> Option<&str> {
        self.title.as_deref()
    }

    pub fn content(&self) -> &str {
        &self.content
    }

    pub fn dismiss_time(&self) -> Duration {
        self.dismiss_time
    }

    pub fn created_at(&self) -> Duration {
        self.created_at
    }

    /// Time since creation, zero if `now` is before the creation stamp
    pub fn elapsed(&self, now: Duration) -> Duration {
        now.saturating_sub(self.created_at)
    }

    /// Lifecycle phase at `now`
    pub fn phase_at(&self, now: Duration) -> ToastPhase {
        let elapsed = self.elapsed(now);

        if elapsed > self.lifetime() {
            ToastPhase::Expired
        } else if elapsed > self.visible_end() {
            ToastPhase::FadeOut
        } else if elapsed > FADE_IN_OUT_TIME {
            ToastPhase::Wait
        } else {
            ToastPhase::FadeIn
        }
    }

    /// Opacity multiplier in `[0, 1]` at `now`
    pub fn fade_percent_at(&self, now: Duration) -> f32 {
        let elapsed = self.elapsed(now);
        let fade = FADE_IN_OUT_TIME.as_secs_f32();

        let percent = match self.phase_at(now) {
            ToastPhase::FadeIn => elapsed.as_secs_f32() / fade,
            ToastPhase::FadeOut => {
                let into_fade = elapsed.saturating_sub(self.visible_end());
                1.0 - into_fade.as_secs_f32() / fade
            }
            ToastPhase::Wait | ToastPhase::Expired => 1.0,
        };
        percent.clamp(0.0, 1.0)
    }

    pub fn is_expired_at(&self, now: Duration) -> bool {
        self.phase_at(now) == ToastPhase::Expired
    }

    /// Full lifetime from creation to expiry, saturating at `Duration::MAX`
    pub fn lifetime(&self) -> Duration {
        self.visible_end().saturating_add(FADE_IN_OUT_TIME)
    }

    // End of the wait phase, relative to creation
    fn visible_end(&self) -> Duration {
        FADE_IN_OUT_TIME.saturating_add(self.dismiss_time)
    }
}

/// Builder for [`Toast`]. Text longer than [`MAX_MSG_LENGTH`] bytes is cut
/// at the last character boundary that fits.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ToastBuilder {
    kind: ToastKind,
    title: Option<String>,
    content: String,
    dismiss_time: Duration,
}

impl ToastBuilder {
    pub fn new(kind: ToastKind) -> Self {
        Self {
            kind,
            title: None,
            content: String::new(),
            dismiss_time: DEFAULT_DISMISS,
        }
    }

    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(truncate_message(title.into()));
        self
    }

    pub fn content(mut self, content: impl Into<String>) -> Self {
        self.content = truncate_message(content.into());
        self
    }

    pub fn dismiss_time(mut self, dismiss_time: Duration) -> Self {
        self.dismiss_time = dismiss_time;
        self
    }

    /// Signed milliseconds as typed into a form, negatives clamp to zero
    pub fn dismiss_millis(self, millis: i64) -> Self {
        self.dismiss_time(Duration::from_millis(millis.max(0) as u64))
    }

    /// Finish the toast with its creation timestamp
    pub fn build(self, created_at: Duration) -> Toast {
        Toast {
            kind: self.kind,
            title: self.title,
            content: self.content,
            dismiss_time: self.dismiss_time,
            created_at,
        }
    }
}

fn truncate_message(mut text: String) -> String {
    if text.len() <= MAX_MSG_LENGTH {
        return text;
    }
    let mut end = MAX_MSG_LENGTH;
    while !text.is_char_boundary(end) {
        end -= 1;
    }
    log::debug!("Truncating toast text from {} to {end} bytes", text.len());
    text.truncate(end);
    text
}
