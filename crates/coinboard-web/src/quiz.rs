use lazy_static::lazy_static;
use serde::{Deserialize, Serialize};
use std::fmt;
use utoipa::ToSchema;

/// A single quiz answer: option A, B or C, scored 1, 2 or 3.
#[derive(Serialize, Deserialize, Copy, Clone, Debug, PartialEq, Eq)]
#[serde(try_from = "u8", into = "u8")]
pub struct Answer(u8);

impl Answer {
    pub fn score(&self) -> u8 {
        self.0
    }
}

impl TryFrom<u8> for Answer {
    type Error = String;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            1..=3 => Ok(Answer(value)),
            _ => Err(format!("answer must be 1, 2 or 3, got {value}")),
        }
    }
}

impl From<Answer> for u8 {
    fn from(answer: Answer) -> Self {
        answer.0
    }
}

/// Investor profile derived from the quiz.
#[derive(Serialize, Deserialize, ToSchema, Copy, Clone, Debug, PartialEq, Eq)]
#[serde(rename_all = "UPPERCASE")]
pub enum Tier {
    Beginner,
    Intermediate,
    Advanced,
}

impl fmt::Display for Tier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Tier::Beginner => "BEGINNER",
            Tier::Intermediate => "INTERMEDIATE",
            Tier::Advanced => "ADVANCED",
        })
    }
}

/// Bucket the mean of the three answers: up to 1.5 is a beginner, up to 2.5
/// intermediate, anything above advanced.
pub fn classify(experience: Answer, strategy: Answer, volatility: Answer) -> Tier {
    let total = experience.score() + strategy.score() + volatility.score();
    let avg = f64::from(total) / 3.0;

    if avg <= 1.5 {
        Tier::Beginner
    } else if avg <= 2.5 {
        Tier::Intermediate
    } else {
        Tier::Advanced
    }
}

/// Label shown under the quiz.
///
/// ```json
/// {
///     "level": "INTERMEDIATE",
///     "message": "Based on your answers your level is: INTERMEDIATE"
/// }
/// ```
#[derive(Serialize, Deserialize, ToSchema, Clone, Debug, PartialEq, Eq)]
pub struct InvestorLevel {
    pub level: Tier,
    pub message: String,
}

impl From<Tier> for InvestorLevel {
    fn from(level: Tier) -> Self {
        InvestorLevel {
            level,
            message: format!("Based on your answers your level is: {level}"),
        }
    }
}

///////////////////////////////////////////////////////////////////////////////////////////////////////
//
// Questions
//
///////////////////////////////////////////////////////////////////////////////////////////////////////

#[derive(Serialize, Deserialize, ToSchema, Clone, Debug, PartialEq)]
pub struct Question {
    /// Query parameter the answer is sent under.
    pub id: String,
    pub prompt: String,
    pub options: Vec<QuizOption>,
}

#[derive(Serialize, Deserialize, ToSchema, Clone, Debug, PartialEq)]
pub struct QuizOption {
    pub label: String,
    pub value: u8,
}

fn question(id: &str, prompt: &str, labels: [&str; 3]) -> Question {
    Question {
        id: id.to_string(),
        prompt: prompt.to_string(),
        options: labels
            .iter()
            .zip(1..)
            .map(|(label, value)| QuizOption {
                label: label.to_string(),
                value,
            })
            .collect(),
    }
}

lazy_static! {
    /// The profile quiz, in display order.
    pub static ref QUESTIONS: Vec<Question> = vec![
        question(
            "experience",
            "What is your experience with cryptocurrencies?",
            [
                "A) I started less than 1 year ago.",
                "B) I have been investing for 1 to 3 years.",
                "C) More than 3 years of experience.",
            ],
        ),
        question(
            "strategy",
            "Do you have an investment strategy?",
            [
                "A) No strategy, I follow tips.",
                "B) Basic research and I follow the news.",
                "C) I use analysis and build a plan.",
            ],
        ),
        question(
            "volatility",
            "How do you handle market volatility?",
            [
                "A) I get worried and avoid the swings.",
                "B) I have faced losses but I learn from them.",
                "C) I handle volatility and losses well.",
            ],
        ),
    ];
}

#[cfg(test)]
mod tests {
    use super::*;

    fn answers(a: u8, b: u8, c: u8) -> (Answer, Answer, Answer) {
        (
            Answer::try_from(a).unwrap(),
            Answer::try_from(b).unwrap(),
            Answer::try_from(c).unwrap(),
        )
    }

    fn tier(a: u8, b: u8, c: u8) -> Tier {
        let (a, b, c) = answers(a, b, c);
        classify(a, b, c)
    }

    #[test]
    fn uniform_answers() {
        assert_eq!(tier(1, 1, 1), Tier::Beginner);
        assert_eq!(tier(2, 2, 2), Tier::Intermediate);
        assert_eq!(tier(3, 3, 3), Tier::Advanced);
    }

    #[test]
    fn boundaries() {
        // 4 / 3 = 1.33
        assert_eq!(tier(1, 1, 2), Tier::Beginner);
        // 5 / 3 = 1.67
        assert_eq!(tier(1, 2, 2), Tier::Intermediate);
        // 7 / 3 = 2.33
        assert_eq!(tier(3, 2, 2), Tier::Intermediate);
        // 8 / 3 = 2.67
        assert_eq!(tier(3, 3, 2), Tier::Advanced);
    }

    #[test]
    fn answers_outside_range_are_rejected() {
        assert!(Answer::try_from(0).is_err());
        assert!(Answer::try_from(4).is_err());
        assert!(serde_json::from_str::<Answer>("5").is_err());
        assert_eq!(serde_json::from_str::<Answer>("2").unwrap().score(), 2);
    }

    #[test]
    fn message_names_the_tier() {
        let level = InvestorLevel::from(Tier::Advanced);
        assert_eq!(level.message, "Based on your answers your level is: ADVANCED");
        assert_eq!(serde_json::to_value(&level).unwrap()["level"], "ADVANCED");
    }

    #[test]
    fn every_question_offers_three_scored_options() {
        assert_eq!(QUESTIONS.len(), 3);
        for question in QUESTIONS.iter() {
            let values: Vec<u8> = question.options.iter().map(|o| o.value).collect();
            assert_eq!(values, [1, 2, 3]);
        }
    }
}
