//! The ordered rule cascade.
//!
//! Rules are evaluated top to bottom against the lowercased message; the
//! first predicate that matches wins. The order matters: overwhelm and
//! substantial-answer detection must run before the confusion branch, and the
//! short-input rule deliberately shadows the learning-request rule for very
//! short messages.

/// Physics keywords that mark a substantial on-topic answer.
const DOMAIN_KEYWORDS: &[&str] = &["force", "gravity", "spin", "rotation", "centrifugal", "weight"];

/// Phrases signalling the learner is overwhelmed.
const OVERWHELM_PHRASES: &[&str] = &["everything", "nothing", "all of it", "not understanding"];

/// Phrases signalling expressed confusion.
const CONFUSION_PHRASES: &[&str] = &["don't know", "dont know", "idk", "confused", "no idea"];

/// Phrases signalling a request to be taught.
const LEARNING_PHRASES: &[&str] = &["teach me", "learn", "start", "beginning", "begenning"];

/// Single words that get the concrete-example treatment even when short.
const SHORT_VOCABULARY: &[&str] = &["rotation", "physics", "hard", "difficult", "clear", "small", "tiny"];

/// Inputs shorter than this take the short-input rule.
const SHORT_INPUT_CHARS: usize = 15;

/// The classified view of one user message.
struct Input<'a> {
    raw: &'a str,
    lower: String,
}

/// One rung of the cascade.
struct Rule {
    matches: fn(&Input) -> bool,
    respond: fn(&Input) -> String,
}

static RULES: &[Rule] = &[
    // 1. Overwhelm: ground the learner in one tiny example.
    Rule {
        matches: |input| contains_any(&input.lower, OVERWHELM_PHRASES),
        respond: |_| {
            "Feeling overwhelmed is completely normal. Let's start with something tiny and \
             concrete: picture a door opening - that's rotation. What makes a door easy or hard \
             to push open?"
                .to_string()
        },
    },
    // 2. Substantial on-topic input: affirm, then push one step further.
    Rule {
        matches: |input| {
            input.lower.chars().count() > 30 && contains_any(&input.lower, DOMAIN_KEYWORDS)
        },
        respond: |_| {
            "Excellent thinking! You mentioned forces - that's exactly the right track. Now \
             here's a key question: if you spin a coin on a table, what do you think slows it \
             down and makes it stop?"
                .to_string()
        },
    },
    // 3. Expressed confusion, sub-branched by detected topic.
    Rule {
        matches: |input| contains_any(&input.lower, CONFUSION_PHRASES),
        respond: |input| {
            if input.lower.contains("torque") || input.lower.contains("toque") {
                "You're unsure what torque means. Quick anchor: torque is the 'twist' effect of \
                 a force - pushing farther from the pivot makes rotation easier. If you push a \
                 door near the hinges vs the handle, where does the same push create more \
                 rotation?"
                    .to_string()
            } else if contains_any(&input.lower, &["rotation", "spin", "turn"]) {
                "You're feeling lost about rotation. Here's a simple start: rotation is just \
                 spinning around a center point, like a wheel or door. What happens when you try \
                 to stop a spinning coin with your finger?"
                    .to_string()
            } else {
                "That's completely normal when learning something new! Let's try a concrete \
                 example: imagine pushing a door. Would it be easier to push near the hinges or \
                 near the handle?"
                    .to_string()
            }
        },
    },
    // 4. Likely typo of a known term.
    Rule {
        matches: |input| input.lower.contains("toque") && !input.lower.contains("torque"),
        respond: |_| {
            "I'm assuming you meant 'torque' (the twist-force that causes rotation). Torque is \
             like the 'oomph' that makes things spin. Are you asking how torque differs from \
             regular force?"
                .to_string()
        },
    },
    // 5. Very short input or a bare vocabulary word: ask for a concrete link.
    Rule {
        matches: |input| {
            input.lower.chars().count() < SHORT_INPUT_CHARS
                || SHORT_VOCABULARY.contains(&input.lower.as_str())
        },
        respond: |input| {
            format!(
                "You said '{}'. Let's connect this to something you can picture. Think of a \
                 spinning coin - what do you think makes it start spinning, and what makes it \
                 wobble and fall over?",
                echo_safe(input.raw)
            )
        },
    },
    // 6. Request to be taught from scratch.
    Rule {
        matches: |input| contains_any(&input.lower, LEARNING_PHRASES),
        respond: |_| {
            "Perfect! You want to build this up from the beginning. The most basic place to \
             start is a door: you push one open every day without ever thinking about the \
             physics. Why is it easier to push near the handle than near the hinges?"
                .to_string()
        },
    },
    // 7. Compound concept: invite a comparison.
    Rule {
        matches: |input| {
            input.lower.contains("space")
                && (input.lower.contains("torque") || input.lower.contains("rotation"))
        },
        respond: |_| {
            "You're asking about torque vs space concepts. Torque is about causing rotation; \
             space is where things exist and move. Are you wondering how rotational motion works \
             in different environments?"
                .to_string()
        },
    },
];

/// Generate a Socratic reply for a raw user message.
///
/// Pure and infallible: always returns a non-empty reply ending in exactly
/// one question.
pub fn generate_reply(user_text: &str) -> String {
    let input = Input {
        raw: user_text.trim(),
        lower: user_text.trim().to_lowercase(),
    };

    for rule in RULES {
        if (rule.matches)(&input) {
            return (rule.respond)(&input);
        }
    }

    // Default: echo the message inside a concrete analogy.
    format!(
        "I hear you saying '{}'. Let's make this super concrete: imagine you're trying to \
         loosen a tight jar lid. Where do you grip it to make the twist easier?",
        echo_safe(input.raw)
    )
}

fn contains_any(haystack: &str, needles: &[&str]) -> bool {
    needles.iter().any(|needle| haystack.contains(needle))
}

/// Echoed user text must not smuggle question marks into the body, or the
/// one-trailing-question contract breaks.
fn echo_safe(text: &str) -> String {
    text.replace('?', "").trim().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Exactly one question mark, and it is the final character.
    fn assert_single_trailing_question(reply: &str) {
        assert!(reply.ends_with('?'), "no trailing question: {reply:?}");
        assert_eq!(
            reply.matches('?').count(),
            1,
            "more than one question: {reply:?}"
        );
    }

    #[test]
    fn test_overwhelm_rule() {
        let reply = generate_reply("I am not understanding anything at all today");
        assert!(reply.contains("door"));
        assert_single_trailing_question(&reply);
    }

    #[test]
    fn test_substantial_answer_rule() {
        let reply = generate_reply("I think gravity pulls the coin down while it keeps spinning");
        assert!(reply.starts_with("Excellent thinking!"));
        assert_single_trailing_question(&reply);
    }

    #[test]
    fn test_confusion_torque_branch() {
        let reply = generate_reply("I don't know torque");
        assert!(reply.contains("torque"));
        assert!(reply.contains("twist"));
        assert_single_trailing_question(&reply);
    }

    #[test]
    fn test_confusion_rotation_branch() {
        let reply = generate_reply("confused about rotation");
        assert!(reply.contains("center point"));
        assert_single_trailing_question(&reply);
    }

    #[test]
    fn test_confusion_generic_branch() {
        let reply = generate_reply("no idea where to even begin with homework");
        assert!(reply.contains("hinges"));
        assert_single_trailing_question(&reply);
    }

    #[test]
    fn test_typo_rule() {
        let reply = generate_reply("what is toque exactly in mechanics terms");
        assert!(reply.contains("meant 'torque'"));
        assert_single_trailing_question(&reply);
    }

    #[test]
    fn test_short_input_echoes_word() {
        let reply = generate_reply("rotation");
        assert!(reply.contains("'rotation'"));
        assert_single_trailing_question(&reply);
    }

    #[test]
    fn test_short_input_with_question_mark_stays_single_question() {
        let reply = generate_reply("why?");
        assert!(reply.contains("'why'"));
        assert_single_trailing_question(&reply);
    }

    #[test]
    fn test_learning_request_rule() {
        let reply = generate_reply("please teach me physics from the ground up");
        assert!(reply.contains("beginning"));
        assert_single_trailing_question(&reply);
    }

    #[test]
    fn test_compound_concept_rule() {
        let reply = generate_reply("how does torque even behave out in deep space then");
        assert!(reply.contains("torque vs space"));
        assert_single_trailing_question(&reply);
    }

    #[test]
    fn test_default_echoes_inside_analogy() {
        let reply = generate_reply("my bicycle wheel keeps wobbling when I ride fast");
        assert!(reply.contains("jar lid"));
        assert!(reply.contains("my bicycle wheel"));
        assert_single_trailing_question(&reply);
    }

    #[test]
    fn test_structural_contract_holds_across_corpus() {
        let corpus = [
            "",
            "hi",
            "everything",
            "I don't know",
            "dont know anything about spin",
            "idk",
            "toque",
            "what even is toque supposed to mean here",
            "I want to learn about rotation from the very beginning",
            "rotation in space is weird compared to rotation on earth",
            "the centrifugal force pushes outward when the wheel spins fast",
            "???",
            "A perfectly ordinary sentence about cooking dinner tonight.",
        ];

        for message in corpus {
            let reply = generate_reply(message);
            assert!(!reply.is_empty());
            assert_single_trailing_question(&reply);
        }
    }

    #[test]
    fn test_rule_order_substantial_beats_confusion() {
        // Long on-topic text that also contains a confusion phrase: the
        // substantial rule sits above confusion and must win.
        let reply = generate_reply("idk but maybe gravity and weight both pull the spinning coin");
        assert!(reply.starts_with("Excellent thinking!"));
    }
}
