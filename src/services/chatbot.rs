use std::sync::LazyLock;

use rand::Rng;
use regex::Regex;

use crate::message::Message;
use crate::rules::{
    DEFAULT_OPENERS, DEFAULT_TRAILER, FOLLOW_UP_AFTER, FOLLOW_UP_REPLY, KEYWORD_REPLIES,
    PROGRAMMING_REPLY, PROGRAMMING_TERMS, QUESTION_REPLIES,
};

// ASCII digits only; `\d` would also accept other Unicode digits.
static ARITHMETIC: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"([0-9]+)\s*([+\-*/])\s*([0-9]+)").expect("arithmetic pattern is valid")
});

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operator {
    Add,
    Sub,
    Mul,
    Div,
}

impl Operator {
    fn from_symbol(symbol: &str) -> Option<Self> {
        match symbol {
            "+" => Some(Operator::Add),
            "-" => Some(Operator::Sub),
            "*" => Some(Operator::Mul),
            "/" => Some(Operator::Div),
            _ => None,
        }
    }

    /// Division by zero yields `inf` or `NaN`, never a panic.
    pub fn apply(self, lhs: f64, rhs: f64) -> f64 {
        match self {
            Operator::Add => lhs + rhs,
            Operator::Sub => lhs - rhs,
            Operator::Mul => lhs * rhs,
            Operator::Div => lhs / rhs,
        }
    }
}

/// Which rule produced the reply. Rules are tried top to bottom.
#[derive(Debug, Clone, PartialEq)]
pub enum Heuristic {
    Keyword {
        keyword: &'static str,
        reply: &'static str,
    },
    Question {
        word: &'static str,
        reply: &'static str,
    },
    Programming,
    Arithmetic { lhs: f64, op: Operator, rhs: f64 },
    FollowUp,
    Default,
}

pub fn detect_heuristic(history: &[Message]) -> Heuristic {
    // An empty history behaves like an empty last message.
    let input = history
        .last()
        .map(|m| m.content.to_lowercase())
        .unwrap_or_default();

    if let Some(&(keyword, reply)) = KEYWORD_REPLIES.iter().find(|(k, _)| input.contains(k)) {
        return Heuristic::Keyword { keyword, reply };
    }

    if input.contains('?') {
        if let Some(&(word, reply)) = QUESTION_REPLIES.iter().find(|(w, _)| input.contains(w)) {
            return Heuristic::Question { word, reply };
        }
    }

    if PROGRAMMING_TERMS.iter().any(|term| input.contains(term)) {
        return Heuristic::Programming;
    }

    if let Some((lhs, op, rhs)) = parse_arithmetic(&input) {
        return Heuristic::Arithmetic { lhs, op, rhs };
    }

    if history.len() > FOLLOW_UP_AFTER {
        return Heuristic::FollowUp;
    }

    Heuristic::Default
}

/// Only the first `<int> <op> <int>` occurrence is considered.
pub fn parse_arithmetic(input: &str) -> Option<(f64, Operator, f64)> {
    let caps = ARITHMETIC.captures(input)?;
    let lhs = caps[1].parse::<f64>().ok()?;
    let op = Operator::from_symbol(&caps[2])?;
    let rhs = caps[3].parse::<f64>().ok()?;
    Some((lhs, op, rhs))
}

/// Formats like a browser's `Number#toString`: exponent form at or above
/// `1e21` and below `1e-6`, plain decimals otherwise.
pub fn format_number(value: f64) -> String {
    if value.is_nan() {
        return "NaN".to_string();
    }
    if value.is_infinite() {
        let sign = if value < 0.0 { "-" } else { "" };
        return format!("{sign}Infinity");
    }

    let magnitude = value.abs();
    if magnitude >= 1e21 || (magnitude != 0.0 && magnitude < 1e-6) {
        // `{:e}` gives the shortest mantissa but writes `e24`, not `e+24`.
        let exp = format!("{value:e}");
        return match exp.split_once('e') {
            Some((mantissa, power)) if !power.starts_with('-') => {
                format!("{mantissa}e+{power}")
            }
            _ => exp,
        };
    }

    // Display already drops a zero fractional part: 8.0 -> "8".
    value.to_string()
}

pub fn render_reply<R: Rng + ?Sized>(heuristic: &Heuristic, rng: &mut R) -> String {
    match heuristic {
        Heuristic::Keyword { reply, .. } | Heuristic::Question { reply, .. } => reply.to_string(),
        Heuristic::Programming => PROGRAMMING_REPLY.to_string(),
        Heuristic::Arithmetic { lhs, op, rhs } => {
            format!("The answer is {}.", format_number(op.apply(*lhs, *rhs)))
        }
        Heuristic::FollowUp => FOLLOW_UP_REPLY.to_string(),
        Heuristic::Default => {
            let opener = DEFAULT_OPENERS[rng.random_range(0..DEFAULT_OPENERS.len())];
            format!("{opener} {DEFAULT_TRAILER}")
        }
    }
}

pub fn generate_reply<R: Rng + ?Sized>(history: &[Message], rng: &mut R) -> String {
    let heuristic = detect_heuristic(history);
    tracing::debug!(?heuristic, history_len = history.len(), "reply heuristic selected");
    render_reply(&heuristic, rng)
}
