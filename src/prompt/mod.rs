// src/prompt/mod.rs
// Prompt composition: persona template + rolling transcript + turn-count
// framing, assembled into the single text prompt sent to Gemini.

use crate::persona::Persona;
use crate::session::Message;

/// Prior messages before the advice framing kicks in. Two messages is one
/// full user/assistant exchange.
const ADVICE_THRESHOLD: usize = 2;

const CLOSING_DIRECTIVE: &str =
    "Respond as this persona in a conversational, helpful way (2-3 paragraphs max):";

/// Renders prior history as newline-joined `role: content` lines, in
/// original order. Empty history renders as an empty string.
pub fn render_history(history: &[Message]) -> String {
    history
        .iter()
        .map(|msg| format!("{}: {}", msg.role, msg.content))
        .collect::<Vec<_>>()
        .join("\n")
}

/// The 1-based exchange number for a history of `len` prior messages.
pub fn exchange_number(len: usize) -> usize {
    len / 2 + 1
}

fn advice_block(len: usize) -> String {
    format!(
        "\n🎯 CONTEXT-SPECIFIC ACTIONABLE ADVICE: Since this is exchange {}, analyze their SPECIFIC PROBLEM/TOPIC and provide:\n\
         1. Identify the exact context (financial, career, health, relationships, etc.)\n\
         2. Give 2-3 targeted suggestions with specific numbers/actions\n\
         3. End with immediate CTAs they can do TODAY\n\
         4. Match the suggestions to their actual situation, not just emotions\n\n",
        exchange_number(len)
    )
}

/// Builds the full prompt for one relay call.
///
/// The result is returned verbatim: no truncation and no length limit, so
/// the prompt grows without bound as history accumulates.
pub fn compose(persona: Persona, message: &str, history: &[Message]) -> String {
    let exchange_count = history.len();
    let advice = if exchange_count >= ADVICE_THRESHOLD {
        advice_block(exchange_count)
    } else {
        String::new()
    };

    format!(
        "{template}\n\nPrevious conversation ({exchanges} exchanges):\n{context}\n\nUser: {message}\n\n{advice}{closing}",
        template = persona.prompt(),
        exchanges = exchange_count / 2,
        context = render_history(history),
        advice = advice,
        closing = CLOSING_DIRECTIVE,
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::session::Message;

    fn history_of(n: usize) -> Vec<Message> {
        (0..n)
            .map(|i| {
                if i % 2 == 0 {
                    Message::user(format!("question {}", i))
                } else {
                    Message::assistant(format!("answer {}", i))
                }
            })
            .collect()
    }

    #[test]
    fn test_empty_history_contains_template_and_empty_context() {
        for persona in Persona::ALL {
            let prompt = compose(persona, "hello", &[]);
            assert!(prompt.starts_with(persona.prompt()));
            assert!(prompt.contains("Previous conversation (0 exchanges):\n\n"));
        }
    }

    #[test]
    fn test_exchange_number_formula() {
        assert_eq!(exchange_number(0), 1);
        assert_eq!(exchange_number(1), 1);
        assert_eq!(exchange_number(2), 2);
        assert_eq!(exchange_number(3), 2);
        assert_eq!(exchange_number(4), 3);
    }

    #[test]
    fn test_advice_block_present_iff_two_or_more_prior_messages() {
        for len in 0..6 {
            let prompt = compose(Persona::FutureSelf, "hi", &history_of(len));
            let has_advice = prompt.contains("CONTEXT-SPECIFIC ACTIONABLE ADVICE");
            assert_eq!(has_advice, len >= 2, "history len {}", len);
        }
    }

    #[test]
    fn test_history_rendering_preserves_order_and_format() {
        let history = vec![
            Message::user("I hate my job"),
            Message::assistant("What would you rather do?"),
            Message::user("Start a bakery"),
        ];
        let rendered = render_history(&history);
        assert_eq!(
            rendered,
            "user: I hate my job\nassistant: What would you rather do?\nuser: Start a bakery"
        );
    }

    #[test]
    fn test_render_history_empty_is_empty_string() {
        assert_eq!(render_history(&[]), "");
    }

    #[test]
    fn test_biggest_fan_first_message() {
        let prompt = compose(Persona::BiggestFan, "I want to start a business", &[]);
        assert!(prompt.starts_with(Persona::BiggestFan.prompt()));
        assert!(prompt.contains("User: I want to start a business"));
        assert!(!prompt.contains("CONTEXT-SPECIFIC ACTIONABLE ADVICE"));
    }

    #[test]
    fn test_biggest_fan_second_exchange() {
        let prompt = compose(Persona::BiggestFan, "Where do I start?", &history_of(3));
        assert!(prompt.contains("Since this is exchange 2,"));
        assert!(prompt.contains("CONTEXT-SPECIFIC ACTIONABLE ADVICE"));
    }

    #[test]
    fn test_prompt_ends_with_closing_directive() {
        let prompt = compose(Persona::HonestFriend, "hi", &history_of(4));
        assert!(prompt.ends_with(CLOSING_DIRECTIVE));
    }

    #[test]
    fn test_message_included_verbatim_no_truncation() {
        let long = "x".repeat(50_000);
        let prompt = compose(Persona::ElderSelf, &long, &[]);
        assert!(prompt.contains(&long));
    }
}
