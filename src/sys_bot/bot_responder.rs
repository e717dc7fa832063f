// ----- Imports ----- //

use std::sync::Arc;

use crate::sys_bot::{
    bot_catalog::Catalog, bot_errors::AiError, bot_generator::ReplyGenerator,
    bot_reply::OutboundReply,
};

// ----- Structs ----- //

/// Turns one inbound message into a reply. Holds only read-only state, so a
/// single instance is shared by every connection thread.
pub struct Responder {
    catalog: Arc<Catalog>,
    generator: Arc<dyn ReplyGenerator>,
}

// ----- Implementations ----- //

impl Responder {
    pub fn new(catalog: Arc<Catalog>, generator: Arc<dyn ReplyGenerator>) -> Self {
        Self { catalog, generator }
    }

    /// Course match first, then FAQ, then the AI fallback. The phone-ask flag
    /// is computed from the inbound text whichever branch answered.
    /// A fallback failure is returned as-is; there is no partial reply.
    pub fn build_reply(&self, text: &str) -> Result<OutboundReply, AiError> {
        let reply = if let Some(course) = self.catalog.find_course(text) {
            log::debug!("Course match: {}", course.name);
            course.answer.clone()
        } else if let Some(faq) = self.catalog.find_faq(text) {
            log::debug!("FAQ match: {}", faq.name);
            faq.answer.clone()
        } else {
            log::debug!("No static match, asking AI fallback");
            self.generator.generate_reply(text)?
        };

        let ask_phone = self.catalog.should_ask_phone(text);

        Ok(OutboundReply { reply, ask_phone })
    }
}

// ----- Tests ----- //

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use std::sync::Mutex;

    /// Deterministic generator that records every prompt it receives.
    pub(crate) struct StubGenerator {
        reply: Option<String>,
        pub(crate) prompts: Mutex<Vec<String>>,
    }

    impl StubGenerator {
        pub(crate) fn replying(reply: &str) -> Arc<Self> {
            Arc::new(Self {
                reply: Some(reply.to_string()),
                prompts: Mutex::new(Vec::new()),
            })
        }

        pub(crate) fn failing() -> Arc<Self> {
            Arc::new(Self {
                reply: None,
                prompts: Mutex::new(Vec::new()),
            })
        }

        pub(crate) fn calls(&self) -> usize {
            self.prompts.lock().unwrap().len()
        }
    }

    impl ReplyGenerator for StubGenerator {
        fn generate_reply(&self, text: &str) -> Result<String, AiError> {
            self.prompts.lock().unwrap().push(text.to_string());
            self.reply.clone().ok_or(AiError::EmptyResponse)
        }
    }

    fn responder(generator: Arc<StubGenerator>) -> Responder {
        Responder::new(Arc::new(Catalog::builtin().unwrap()), generator)
    }

    #[test]
    fn course_reply_without_ai() {
        let generator = StubGenerator::replying("AI Reply");
        let reply = responder(generator.clone()).build_reply("дижитал маркетинг").unwrap();

        assert!(reply.reply.contains("Стратегийн Дижитал Маркетер"));
        assert!(!reply.ask_phone);
        assert_eq!(generator.calls(), 0);
    }

    #[test]
    fn data_analyst_reply() {
        let generator = StubGenerator::replying("AI Reply");
        let reply = responder(generator.clone()).build_reply("data analyst").unwrap();

        assert!(reply.reply.contains("Data Analyst"));
        assert!(!reply.ask_phone);
        assert_eq!(generator.calls(), 0);
    }

    #[test]
    fn faq_reply_without_ai() {
        let generator = StubGenerator::replying("AI Reply");
        let catalog = Catalog::builtin().unwrap();
        let reply = responder(generator.clone()).build_reply("хаяг").unwrap();

        assert_eq!(Some(reply.reply.as_str()), catalog.match_faq("хаяг"));
        assert!(!reply.ask_phone);
        assert_eq!(generator.calls(), 0);
    }

    #[test]
    fn course_wins_over_faq() {
        let generator = StubGenerator::replying("AI Reply");
        let catalog = Catalog::builtin().unwrap();
        let text = "маркетинг сургалтын үнэ хэд вэ";
        assert!(catalog.match_faq(text).is_some());

        let reply = responder(generator).build_reply(text).unwrap();
        assert_eq!(Some(reply.reply.as_str()), catalog.match_course_info(text));
    }

    #[test]
    fn ask_phone_is_independent_of_branch() {
        let generator = StubGenerator::replying("AI Reply");
        let reply = responder(generator.clone())
            .build_reply("дижитал маркетинг сургалтад бүртгүүлье")
            .unwrap();

        assert!(reply.reply.contains("Стратегийн Дижитал Маркетер"));
        assert!(reply.ask_phone);
        assert_eq!(generator.calls(), 0);
    }

    #[test]
    fn enroll_intent_falls_back_to_ai() {
        let generator = StubGenerator::replying("AI Reply");
        let reply = responder(generator.clone()).build_reply("бүртгүүлмээр байна").unwrap();

        assert_eq!(reply.reply, "AI Reply");
        assert!(reply.ask_phone);
        assert_eq!(*generator.prompts.lock().unwrap(), vec!["бүртгүүлмээр байна".to_string()]);
    }

    #[test]
    fn everyday_word_does_not_shadow_ai_fallback() {
        let generator = StubGenerator::replying("AI Reply");
        let reply = responder(generator.clone())
            .build_reply("үнэхээр бүртгүүлмээр байна")
            .unwrap();

        assert_eq!(reply.reply, "AI Reply");
        assert!(reply.ask_phone);
        assert_eq!(generator.calls(), 1);
    }

    #[test]
    fn unmatched_text_returns_ai_reply_verbatim() {
        let generator = StubGenerator::replying("  AI Reply\n");
        let reply = responder(generator.clone()).build_reply("random string").unwrap();

        assert_eq!(reply.reply, "  AI Reply\n");
        assert!(!reply.ask_phone);
        assert_eq!(generator.calls(), 1);
    }

    #[test]
    fn empty_text_falls_back_to_ai() {
        let generator = StubGenerator::replying("AI Reply");
        let reply = responder(generator.clone()).build_reply("").unwrap();

        assert_eq!(reply.reply, "AI Reply");
        assert_eq!(generator.calls(), 1);
    }

    #[test]
    fn ai_failure_propagates() {
        let generator = StubGenerator::failing();
        let result = responder(generator.clone()).build_reply("бүртгүүлмээр байна");

        assert!(matches!(result, Err(AiError::EmptyResponse)));
        assert_eq!(generator.calls(), 1);
    }
}
