// src/rules.rs
//! Canned replies used by the reply heuristics.

/// Keyword → reply, checked in this order. The first keyword found as a
/// substring of the lower-cased input wins, so `"thanks"` must precede
/// `"thank"`.
pub const KEYWORD_REPLIES: &[(&str, &str)] = &[
    (
        "code",
        "I can help you with coding! Whether it's JavaScript, Python, or any other language, I'm here to assist with debugging, writing functions, or explaining concepts.",
    ),
    (
        "programming",
        "Programming is a powerful skill! I can help you learn new languages, debug issues, or discuss best practices.",
    ),
    ("hello", "Hello! I'm your AI assistant. How can I help you today?"),
    ("hi", "Hi there! What can I do for you?"),
    (
        "help",
        "I'm here to help! You can ask me questions about various topics including:\n- Programming and coding\n- General knowledge\n- Writing and content creation\n- Problem solving\n- And much more!",
    ),
    (
        "weather",
        "I don't have real-time weather data, but I can help you understand weather patterns, climate concepts, or suggest weather apps you might find useful!",
    ),
    (
        "time",
        "I don't have access to real-time information, but you can check your device's clock for the current time.",
    ),
    ("thanks", "You're welcome! Is there anything else I can help you with?"),
    ("thank", "You're welcome! Feel free to ask if you need anything else."),
];

/// Question word → reply, only consulted when the input contains `?`.
pub const QUESTION_REPLIES: &[(&str, &str)] = &[
    (
        "how",
        "That's a great 'how' question! The approach depends on the specific context, but generally speaking, it involves breaking down the problem into smaller steps and tackling each one methodically.",
    ),
    (
        "what",
        "That's a good question about 'what'. To give you a comprehensive answer, I'd need to consider various aspects of the topic you're asking about.",
    ),
    (
        "why",
        "That's an insightful 'why' question! The reasons can be complex and multifaceted, often involving various factors that interact with each other.",
    ),
    (
        "when",
        "Timing is an interesting aspect to consider. The 'when' often depends on multiple factors and conditions.",
    ),
    (
        "where",
        "The 'where' aspect is important! Location and context can significantly impact the answer to your question.",
    ),
];

pub const PROGRAMMING_TERMS: &[&str] = &["function", "class", "variable"];

pub const PROGRAMMING_REPLY: &str = "I notice you're asking about programming concepts. I'd be happy to help you understand or write code. Could you provide more details about what you're trying to accomplish?";

/// Histories longer than this get the follow-up reply.
pub const FOLLOW_UP_AFTER: usize = 3;

pub const FOLLOW_UP_REPLY: &str = "That's a good follow-up question! Based on our conversation, I can provide more insights on this topic.";

pub const DEFAULT_OPENERS: [&str; 5] = [
    "I'm an AI assistant here to help you with your questions and tasks. Feel free to ask me anything!",
    "That's an interesting question! Let me help you with that.",
    "I understand what you're asking. Here's my take on it:",
    "Great question! Let me break this down for you:",
    "I'd be happy to help you with that. Here's what I think:",
];

pub const DEFAULT_TRAILER: &str = "While I'm a simulated AI for this demo, I'm designed to help with a wide variety of topics. What would you like to explore?";

pub fn keyword_reply(keyword: &str) -> Option<&'static str> {
    KEYWORD_REPLIES
        .iter()
        .find(|(k, _)| *k == keyword)
        .map(|(_, reply)| *reply)
}

pub fn question_reply(word: &str) -> Option<&'static str> {
    QUESTION_REPLIES
        .iter()
        .find(|(w, _)| *w == word)
        .map(|(_, reply)| *reply)
}
