use futures::channel::oneshot;

/// Modal text entry for a custom sticker glyph.
///
/// The UI owns the prompt while it is shown; the controller that opened it
/// keeps the receiving half and picks the answer up on a later frame.
/// Dropping the prompt counts as cancelling it.
#[derive(Debug)]
pub struct GlyphPrompt {
    text: String,
    reply: oneshot::Sender<Option<String>>,
}

/// Receiving half of an open [`GlyphPrompt`]
#[derive(Debug)]
pub(crate) struct PendingGlyph(oneshot::Receiver<Option<String>>);

#[derive(Debug, PartialEq, Eq)]
pub(crate) enum PromptPoll {
    Waiting,
    /// The prompt closed; `None` if it was cancelled
    Answered(Option<String>),
}

impl GlyphPrompt {
    pub(crate) fn open() -> (Self, PendingGlyph) {
        let (reply, answer) = oneshot::channel();
        let prompt = Self {
            text: String::new(),
            reply,
        };
        (prompt, PendingGlyph(answer))
    }

    pub fn text_mut(&mut self) -> &mut String {
        &mut self.text
    }

    pub fn submit(self) {
        let Self { text, reply } = self;
        drop(reply.send(Some(text)));
    }

    pub fn cancel(self) {
        drop(self.reply.send(None));
    }
}

impl PendingGlyph {
    pub(crate) fn poll(&mut self) -> PromptPoll {
        match self.0.try_recv() {
            Ok(Some(answer)) => PromptPoll::Answered(answer),
            Ok(None) => PromptPoll::Waiting,
            Err(oneshot::Canceled) => PromptPoll::Answered(None),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn answer_arrives_after_submit() {
        let (mut prompt, mut pending) = GlyphPrompt::open();
        assert_eq!(pending.poll(), PromptPoll::Waiting);
        prompt.text_mut().push_str("🦇");
        prompt.submit();
        assert_eq!(pending.poll(), PromptPoll::Answered(Some("🦇".to_owned())));
    }

    #[test]
    fn dropping_the_prompt_cancels() {
        let (prompt, mut pending) = GlyphPrompt::open();
        drop(prompt);
        assert_eq!(pending.poll(), PromptPoll::Answered(None));
    }
}
