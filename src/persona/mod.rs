// src/persona/mod.rs
// The four reflection personas. A closed enumeration: templates and
// selector metadata are static, defined at compile time, never mutated.

pub mod biggest_fan;
pub mod elder_self;
pub mod future_self;
pub mod honest_friend;

pub use biggest_fan::BIGGEST_FAN_PROMPT;
pub use elder_self::ELDER_SELF_PROMPT;
pub use future_self::FUTURE_SELF_PROMPT;
pub use honest_friend::HONEST_FRIEND_PROMPT;

use serde::Serialize;

/// One of the four fixed conversational personas.
///
/// Unknown identifiers are rejected at parse time rather than silently
/// degrading to an empty template.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Persona {
    FutureSelf,   // "future-self"
    ElderSelf,    // "60-year-old"
    BiggestFan,   // "biggest-fan"
    HonestFriend, // "honest-friend"
}

/// Presentation metadata for the persona selector.
/// Not part of prompt composition.
#[derive(Debug, Clone, Serialize)]
pub struct PersonaMeta {
    pub id: &'static str,
    pub name: &'static str,
    pub description: &'static str,
    pub color: &'static str,
    pub emoji: &'static str,
}

impl Persona {
    pub const ALL: [Persona; 4] = [
        Persona::FutureSelf,
        Persona::ElderSelf,
        Persona::BiggestFan,
        Persona::HonestFriend,
    ];

    /// Returns the static instructional template for this persona.
    pub fn prompt(&self) -> &'static str {
        match self {
            Persona::FutureSelf => FUTURE_SELF_PROMPT,
            Persona::ElderSelf => ELDER_SELF_PROMPT,
            Persona::BiggestFan => BIGGEST_FAN_PROMPT,
            Persona::HonestFriend => HONEST_FRIEND_PROMPT,
        }
    }

    /// Wire identifier, as sent by the client.
    pub fn id(&self) -> &'static str {
        match self {
            Persona::FutureSelf => "future-self",
            Persona::ElderSelf => "60-year-old",
            Persona::BiggestFan => "biggest-fan",
            Persona::HonestFriend => "honest-friend",
        }
    }

    pub fn meta(&self) -> PersonaMeta {
        match self {
            Persona::FutureSelf => PersonaMeta {
                id: self.id(),
                name: "Future Self",
                description: "Your wise future self offering guidance",
                color: "bg-blue-600",
                emoji: "🌟",
            },
            Persona::ElderSelf => PersonaMeta {
                id: self.id(),
                name: "60-Year-Old Self",
                description: "Life experience and wisdom",
                color: "bg-green-600",
                emoji: "👴",
            },
            Persona::BiggestFan => PersonaMeta {
                id: self.id(),
                name: "Biggest Fan",
                description: "Believes in you unconditionally",
                color: "bg-purple-600",
                emoji: "🎉",
            },
            Persona::HonestFriend => PersonaMeta {
                id: self.id(),
                name: "Brutally Honest Friend",
                description: "Tells you the truth",
                color: "bg-red-600",
                emoji: "💬",
            },
        }
    }
}

impl std::fmt::Display for Persona {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.id())
    }
}

impl std::str::FromStr for Persona {
    type Err = crate::error::ReflectError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "future-self" => Ok(Persona::FutureSelf),
            "60-year-old" => Ok(Persona::ElderSelf),
            "biggest-fan" => Ok(Persona::BiggestFan),
            "honest-friend" => Ok(Persona::HonestFriend),
            other => Err(crate::error::ReflectError::UnknownPersona(other.to_string())),
        }
    }
}
