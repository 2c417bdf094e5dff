//! Prompt context builder.
//!
//! Renders the routing decision and the brain content into the enhancement
//! string consumed by the prompt assembler. A crisis result renders the
//! crisis protocol and nothing else.

use super::crisis::CRISIS_PROTOCOL;
use super::emotional::{self, EmotionalGuidance};
use super::growth::{self, GrowthGuidance};
use super::logistic::{self, LogisticGuidance};
use super::mode::{Category, ModeDetectionResult};
use super::records::ContentRecord;
use serde::Serialize;

/// Content selected by the brain of one mode
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "mode", rename_all = "lowercase")]
pub enum BrainGuidance {
    Emotional(EmotionalGuidance),
    Logistic(LogisticGuidance),
    Growth(GrowthGuidance),
}

impl BrainGuidance {
    /// Run the brain of `category` over the message
    pub fn for_mode(category: Category, message: &str, is_crisis: bool) -> Self {
        match category {
            Category::Emotional => BrainGuidance::Emotional(emotional::guidance(message, is_crisis)),
            Category::Logistic => BrainGuidance::Logistic(logistic::guidance(message)),
            Category::Growth => BrainGuidance::Growth(growth::guidance(message)),
        }
    }

    pub fn category(&self) -> Category {
        match self {
            BrainGuidance::Emotional(_) => Category::Emotional,
            BrainGuidance::Logistic(_) => Category::Logistic,
            BrainGuidance::Growth(_) => Category::Growth,
        }
    }
}

/// Instruction header for the primary mode
pub fn mode_header(category: Category) -> &'static str {
    match category {
        Category::Emotional => {
            "MODE: EMOTIONAL SUPPORT\nLead with empathy. Validate feelings before offering anything practical. Keep the tone warm and unhurried."
        }
        Category::Logistic => {
            "MODE: LOGISTICS SUPPORT\nBe concrete and organized. Break the load into clear next steps and surface the hidden work."
        }
        Category::Growth => {
            "MODE: GROWTH COACHING\nAct as a supportive coach. Ask one clarifying question and offer a practical framework."
        }
    }
}

/// Instruction header for a blended secondary mode
pub fn blend_header(category: Category) -> String {
    format!(
        "SECONDARY MODE: {}\nBlend this guidance in after addressing the primary need; do not let it take over the response.",
        category.label().to_uppercase()
    )
}

/// Build the enhancement string for a detection result.
///
/// Runs the brain of the primary mode, and of the secondary mode when
/// blending, then renders them.
pub fn build_context(result: &ModeDetectionResult, message: &str) -> String {
    if result.is_crisis {
        return CRISIS_PROTOCOL.to_string();
    }

    let primary = BrainGuidance::for_mode(result.primary_mode, message, false);
    let secondary = blended_mode(result).map(|mode| BrainGuidance::for_mode(mode, message, false));
    render(result, &primary, secondary.as_ref())
}

/// Secondary mode to render, if any
pub(crate) fn blended_mode(result: &ModeDetectionResult) -> Option<Category> {
    if result.blend_modes {
        result.secondary_mode
    } else {
        None
    }
}

/// Render already-selected guidance.
///
/// The crisis check happens first, so nothing but the protocol can ever be
/// emitted for a crisis result.
pub fn render(
    result: &ModeDetectionResult,
    primary: &BrainGuidance,
    secondary: Option<&BrainGuidance>,
) -> String {
    if result.is_crisis {
        return CRISIS_PROTOCOL.to_string();
    }

    let mut sections = vec![mode_header(result.primary_mode).to_string()];
    sections.extend(render_guidance(primary));

    if let Some(guidance) = secondary {
        sections.push(blend_header(guidance.category()));
        sections.extend(render_guidance(guidance));
    }

    sections.join("\n\n")
}

fn render_record(label: &str, record: &ContentRecord) -> String {
    format!(
        "{}: {}\n{}\n{}",
        label, record.name, record.description, record.prompt
    )
}

fn render_guidance(guidance: &BrainGuidance) -> Vec<String> {
    let mut sections = Vec::new();

    match guidance {
        BrainGuidance::Emotional(EmotionalGuidance::Crisis { protocol }) => {
            sections.push(protocol.to_string());
        }
        BrainGuidance::Emotional(EmotionalGuidance::Support {
            technique,
            exercise,
        }) => {
            if let Some(record) = technique {
                sections.push(render_record("COPING TECHNIQUE", record));
            }
            if let Some(record) = exercise {
                sections.push(render_record("GROUNDING EXERCISE", record));
            }
        }
        BrainGuidance::Logistic(logistic) => {
            if !logistic.labor_tasks.is_empty() {
                let list = logistic
                    .labor_tasks
                    .iter()
                    .map(|task| format!("- {}", task))
                    .collect::<Vec<_>>()
                    .join("\n");
                sections.push(format!(
                    "INVISIBLE LABOR: Help the user see everything this involves.\n{}",
                    list
                ));
            }
            if logistic.delegation_opportunity {
                sections.push(
                    "DELEGATION: The user is carrying this alone. Suggest specific tasks they could hand off and to whom."
                        .to_string(),
                );
            }
            sections.push(format!("URGENCY: {}", logistic.urgency));
            if let Some(draft) = &logistic.draft {
                sections.push(format!(
                    "DRAFT AVAILABLE: Offer to draft a message ({}).",
                    draft.context
                ));
            }
        }
        BrainGuidance::Growth(growth) => {
            if let Some(record) = growth.career {
                sections.push(render_record("CAREER FRAMEWORK", record));
            }
            if let Some(record) = growth.parenting {
                sections.push(render_record("PARENTING FRAMEWORK", record));
            }
        }
    }

    sections
}
