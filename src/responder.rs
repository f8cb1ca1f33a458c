//! Keyword-matching reply selection.
//!
//! Rules are checked top to bottom against the lower-cased query and the first rule
//! with any matching trigger wins, so a greeting that also mentions the weather is
//! still answered as a greeting.

pub struct Rule {
    pub triggers: &'static [&'static str],
    pub reply: &'static str,
}

impl Rule {
    fn matches(&self, normalized: &str) -> bool {
        self.triggers.iter().any(|trigger| normalized.contains(trigger))
    }
}

pub const RULES: &[Rule] = &[
    Rule {
        triggers: &["hello", "hi"],
        reply: "Hello! How can I help you today?",
    },
    Rule {
        triggers: &["who are you", "what are you"],
        reply: "I'm Jarvis, your virtual assistant. I'm here to help answer your questions and assist with tasks.",
    },
    Rule {
        triggers: &["how are you"],
        reply: "I'm functioning well, thank you for asking! How can I assist you today?",
    },
    Rule {
        triggers: &["weather"],
        reply: "I'm sorry, I don't have access to real-time weather data at the moment. Would you like me to help with something else?",
    },
    Rule {
        triggers: &["time"],
        reply: "I don't have access to your current time. Is there something else I can help with?",
    },
    Rule {
        triggers: &["thank"],
        reply: "You're welcome! Is there anything else you'd like help with?",
    },
    Rule {
        triggers: &["bye", "goodbye"],
        reply: "Goodbye! Feel free to ask for assistance anytime.",
    },
    Rule {
        triggers: &["help"],
        reply: "I can answer questions, provide information, or just chat. What would you like to know?",
    },
];

pub const DEFAULT_REPLY: &str =
    "I'm still learning and don't have a specific answer for that query. Is there something else I can help with?";

pub fn generate_response(query: &str) -> &'static str {
    let normalized = query.to_lowercase();
    RULES
        .iter()
        .find(|rule| rule.matches(&normalized))
        .map(|rule| rule.reply)
        .unwrap_or(DEFAULT_REPLY)
}
