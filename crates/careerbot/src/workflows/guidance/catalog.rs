//! Static tables driving the quiz: skills, career fields with their requirement vectors,
//! English fluency levels, and the 25-question scenario bank.

use serde::{Deserialize, Serialize};

/// Skills measured by the quiz, in requirement-vector order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Skill {
    Analytical,
    Communication,
    Leadership,
    Adaptability,
    Creativity,
}

impl Skill {
    pub const ALL: [Skill; 5] = [
        Skill::Analytical,
        Skill::Communication,
        Skill::Leadership,
        Skill::Adaptability,
        Skill::Creativity,
    ];

    pub const fn index(self) -> usize {
        match self {
            Self::Analytical => 0,
            Self::Communication => 1,
            Self::Leadership => 2,
            Self::Adaptability => 3,
            Self::Creativity => 4,
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::Analytical => "Analytical",
            Self::Communication => "Communication",
            Self::Leadership => "Leadership",
            Self::Adaptability => "Adaptability",
            Self::Creativity => "Creativity",
        }
    }
}

/// A career field and the skill levels (1-5) it asks for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CareerField {
    pub name: &'static str,
    pub requirements: [u8; 5],
}

impl CareerField {
    pub const fn requirement(&self, skill: Skill) -> u8 {
        self.requirements[skill.index()]
    }
}

pub const CAREER_FIELDS: [CareerField; 12] = [
    CareerField {
        name: "Medical Field",
        requirements: [5, 4, 3, 5, 2],
    },
    CareerField {
        name: "Engineering Field",
        requirements: [5, 3, 3, 4, 3],
    },
    CareerField {
        name: "Software/IT Field",
        requirements: [5, 3, 3, 4, 4],
    },
    CareerField {
        name: "Business & Entrepreneurship",
        requirements: [4, 5, 5, 4, 4],
    },
    CareerField {
        name: "Creative Arts & Design",
        requirements: [2, 4, 3, 5, 5],
    },
    CareerField {
        name: "Teaching & Academia",
        requirements: [4, 5, 4, 4, 3],
    },
    CareerField {
        name: "Law & Civil Services",
        requirements: [5, 5, 4, 4, 2],
    },
    CareerField {
        name: "Government/Defense Services",
        requirements: [5, 3, 4, 5, 2],
    },
    CareerField {
        name: "Media & Communication",
        requirements: [3, 5, 4, 5, 4],
    },
    CareerField {
        name: "Vocational Trades",
        requirements: [4, 3, 2, 5, 5],
    },
    CareerField {
        name: "Finance & Accounting",
        requirements: [5, 3, 3, 4, 2],
    },
    CareerField {
        name: "Social Work & Psychology",
        requirements: [4, 5, 4, 5, 3],
    },
];

/// Fields whose students are steered towards commerce when analytics alone do not decide.
pub const COMMERCE_FIELDS: [&str; 2] = ["Business & Entrepreneurship", "Finance & Accounting"];

pub fn career_field_labels() -> Vec<String> {
    CAREER_FIELDS
        .iter()
        .map(|field| field.name.to_string())
        .collect()
}

/// Self-reported English fluency, which shifts the communication level.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum EnglishLevel {
    Excellent,
    #[default]
    Good,
    Average,
    Poor,
}

impl EnglishLevel {
    pub const ALL: [EnglishLevel; 4] = [
        EnglishLevel::Excellent,
        EnglishLevel::Good,
        EnglishLevel::Average,
        EnglishLevel::Poor,
    ];

    pub const fn label(self) -> &'static str {
        match self {
            Self::Excellent => "Excellent",
            Self::Good => "Good",
            Self::Average => "Average",
            Self::Poor => "Poor",
        }
    }

    pub const fn communication_modifier(self) -> i8 {
        match self {
            Self::Excellent => 1,
            Self::Good => 0,
            Self::Average => -1,
            Self::Poor => -2,
        }
    }

    /// Exact, case-sensitive match against the offered labels.
    pub fn parse(label: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|level| level.label() == label)
    }
}

pub fn english_level_labels() -> Vec<String> {
    EnglishLevel::ALL
        .iter()
        .map(|level| level.label().to_string())
        .collect()
}

/// Points awarded for the option at each position; options run best to weakest.
pub const POINT_SCHEDULE: [u32; 4] = [4, 3, 2, 1];

pub fn points_for_rank(rank: usize) -> Option<u32> {
    POINT_SCHEDULE.get(rank).copied()
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Question {
    pub prompt: &'static str,
    pub options: [&'static str; 4],
    pub skill: Skill,
}

impl Question {
    pub fn option_rank(&self, answer: &str) -> Option<usize> {
        self.options.iter().position(|option| *option == answer)
    }

    pub fn option_labels(&self) -> Vec<String> {
        self.options.iter().map(|option| option.to_string()).collect()
    }
}

pub const QUESTION_COUNT: usize = 25;

const fn question(prompt: &'static str, options: [&'static str; 4], skill: Skill) -> Question {
    Question {
        prompt,
        options,
        skill,
    }
}

pub const QUESTIONS: [Question; QUESTION_COUNT] = [
    question(
        "When faced with a math problem you don't understand, what do you do first?",
        [
            "Break it into smaller parts and find logic.",
            "Find a similar solved example.",
            "Ask a friend directly.",
            "Skip it for later.",
        ],
        Skill::Analytical,
    ),
    question(
        "You are given a puzzle during a competition. How do you approach it?",
        [
            "Test different strategies.",
            "Try one method until it works.",
            "Guess if it looks complex.",
            "Ignore it to save time.",
        ],
        Skill::Analytical,
    ),
    question(
        "You notice a pattern in your exam scores. What would you do with this insight?",
        [
            "Analyze weak areas and plan.",
            "Focus a bit more on weak topics.",
            "Study equally for all.",
            "Do nothing special.",
        ],
        Skill::Analytical,
    ),
    question(
        "A friend asks you for help solving a problem. What's your process?",
        [
            "Explain step-by-step.",
            "Give the answer only.",
            "Ask them to try first.",
            "Say you're not sure.",
        ],
        Skill::Analytical,
    ),
    question(
        "You're assigned to research a topic for class. How do you begin?",
        [
            "Gather multiple sources and outline.",
            "Use first search results.",
            "Ask classmates.",
            "Wait till last minute.",
        ],
        Skill::Analytical,
    ),
    question(
        "You're in a group project and your idea isn't being understood. What do you do?",
        [
            "Use an example/visual.",
            "Repeat more clearly.",
            "Let them move on.",
            "Stay silent.",
        ],
        Skill::Communication,
    ),
    question(
        "How do you explain your opinions in a debate?",
        [
            "Use facts & examples.",
            "State briefly.",
            "Share feelings only.",
            "Avoid debates.",
        ],
        Skill::Communication,
    ),
    question(
        "You need help with homework from your teacher. How do you ask?",
        [
            "Ask a specific question.",
            "Say you didn't understand.",
            "Ask for the answer.",
            "Don't ask.",
        ],
        Skill::Communication,
    ),
    question(
        "When writing an essay, what is your focus?",
        [
            "Structure & creativity.",
            "Stay on topic.",
            "Reach word count.",
            "Finish quickly.",
        ],
        Skill::Communication,
    ),
    question(
        "You disagree with someone in class. How do you express it?",
        [
            "Share respectfully.",
            "Explain why you differ.",
            "Keep quiet.",
            "Argue loudly.",
        ],
        Skill::Communication,
    ),
    question(
        "No one leads in a team. What do you do?",
        [
            "Take the lead.",
            "Suggest actions.",
            "Wait for someone else.",
            "Just follow.",
        ],
        Skill::Leadership,
    ),
    question(
        "You have an idea for a school event but no one mentions it. What do you do?",
        [
            "Pitch it confidently.",
            "Mention quietly.",
            "Wait to see if others mention.",
            "Keep it to yourself.",
        ],
        Skill::Leadership,
    ),
    question(
        "A group project isn't moving. Next step?",
        [
            "Call a discussion & solve it.",
            "Do your part more actively.",
            "Wait for others.",
            "Ignore it.",
        ],
        Skill::Leadership,
    ),
    question(
        "Lead or follow in an activity - what do you choose?",
        [
            "Lead with ideas.",
            "Follow but engage.",
            "Join later.",
            "Avoid involvement.",
        ],
        Skill::Leadership,
    ),
    question(
        "You see someone struggling with a task. What do you do?",
        [
            "Offer help & guide.",
            "Ask if they need help.",
            "Inform the teacher.",
            "Do nothing.",
        ],
        Skill::Leadership,
    ),
    question(
        "Schedule suddenly changes. How do you react?",
        [
            "Adjust quickly.",
            "Follow quietly.",
            "Complain but comply.",
            "Skip class.",
        ],
        Skill::Adaptability,
    ),
    question(
        "You fail a test you studied for. Next?",
        [
            "Seek feedback & improve.",
            "Study harder.",
            "Feel down & study less.",
            "Ignore it.",
        ],
        Skill::Adaptability,
    ),
    question(
        "Given a task you've never done. Approach?",
        [
            "Try & ask guidance.",
            "Try & learn mistakes.",
            "Rely on others.",
            "Avoid it.",
        ],
        Skill::Adaptability,
    ),
    question(
        "Friend cancels plans last minute. What do you do?",
        [
            "Do something else.",
            "Say okay but sad.",
            "Complain to others.",
            "Get angry.",
        ],
        Skill::Adaptability,
    ),
    question(
        "Teacher switches partner mid-project. How do you handle?",
        [
            "Coordinate quickly.",
            "Accept & try best.",
            "Feel uncomfortable.",
            "Ask to drop.",
        ],
        Skill::Adaptability,
    ),
    question(
        "Design a poster: first step?",
        [
            "Sketch concept ideas.",
            "Look online for inspiration.",
            "Copy an old design.",
            "Let others do it.",
        ],
        Skill::Creativity,
    ),
    question(
        "Make a boring topic interesting. How?",
        [
            "Use visuals/stories.",
            "Prepare concise notes.",
            "Read content aloud.",
            "Avoid presenting.",
        ],
        Skill::Creativity,
    ),
    question(
        "Leftover materials for art project. You...",
        [
            "Create something unique.",
            "Use what fits.",
            "Do minimum work.",
            "Complain & delay.",
        ],
        Skill::Creativity,
    ),
    question(
        "Think of a new way to do a daily task. Response?",
        [
            "Brainstorm & test ideas.",
            "Ask others suggestions.",
            "Do it the usual way.",
            "Say unnecessary.",
        ],
        Skill::Creativity,
    ),
    question(
        "Students don't use school app. You suggest?",
        [
            "Recommend improvements.",
            "Share feedback.",
            "Tell friends only.",
            "Ignore issue.",
        ],
        Skill::Creativity,
    ),
];
