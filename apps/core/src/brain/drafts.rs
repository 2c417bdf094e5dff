//! Message draft templates.
//!
//! Scenario text is matched against an ordered rule list; the first rule
//! that hits picks the template. Placeholders like `{recipient}` are filled
//! from caller overrides, then from the template's defaults.

use regex::{Captures, Regex};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::sync::LazyLock;

// NOTE: expect() is acceptable here: the pattern is a literal checked by the tests.
static PLACEHOLDER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\{([a-z_]+)\}").expect("Invalid regex: placeholder pattern"));

/// Delivery channel of a draft
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Channel {
    Text,
    Email,
}

/// Kind of message a draft is for.
///
/// Declaration order is the matching priority.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DraftScenario {
    PartnerFamily,
    School,
    Appointment,
    Playdate,
    WorkBoundary,
    Decline,
}

/// Parameterized message body for one scenario
#[derive(Debug)]
pub struct DraftTemplate {
    pub channel: Channel,
    pub recipient: &'static str,
    pub subject: Option<&'static str>,
    pub body: &'static str,
    pub context: &'static str,
    pub defaults: &'static [(&'static str, &'static str)],
}

/// A rendered draft ready to show to the user
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DraftMessage {
    pub scenario: DraftScenario,
    pub channel: Channel,
    pub recipient: String,
    pub subject: Option<String>,
    pub body: String,
    /// Short label describing the situation the draft addresses
    pub context: String,
}

const PARTNER_FAMILY: DraftTemplate = DraftTemplate {
    channel: Channel::Text,
    recipient: "{recipient}",
    subject: None,
    body: "Hey {recipient}, I've been carrying {task} on my own and I'm running on empty. \
           Could you take over {request} this week? It would mean a lot to me.",
    context: "Asking for a fairer share of the load",
    defaults: &[
        ("recipient", "Partner"),
        ("task", "most of the planning lately"),
        ("request", "one of these things"),
    ],
};

const SCHOOL: DraftTemplate = DraftTemplate {
    channel: Channel::Email,
    recipient: "{recipient}",
    subject: Some("Question about {child}"),
    body: "Hi {recipient},\n\nI wanted to reach out about {child}. {details}\n\nThank you for your time,\n{sender}",
    context: "School communication",
    defaults: &[
        ("recipient", "Teacher"),
        ("child", "my child"),
        ("details", "Could we find a time to talk this week?"),
        ("sender", "A parent"),
    ],
};

const APPOINTMENT: DraftTemplate = DraftTemplate {
    channel: Channel::Text,
    recipient: "{recipient}",
    subject: None,
    body: "Hi, this is {sender}. I'm reaching out about the appointment for {patient} on {date}. \
           {request} Thank you!",
    context: "Appointment scheduling",
    defaults: &[
        ("recipient", "Doctor's office"),
        ("sender", "a parent"),
        ("patient", "my child"),
        ("date", "the scheduled date"),
        ("request", "Could we move it to another time?"),
    ],
};

const PLAYDATE: DraftTemplate = DraftTemplate {
    channel: Channel::Text,
    recipient: "{recipient}",
    subject: None,
    body: "Hi {recipient}! {child} would love to get together with {friend}. \
           Would {date} work for a playdate? We could meet at {location}.",
    context: "Playdate planning",
    defaults: &[
        ("recipient", "there"),
        ("child", "My kid"),
        ("friend", "your kiddo"),
        ("date", "this weekend"),
        ("location", "the park"),
    ],
};

const WORK_BOUNDARY: DraftTemplate = DraftTemplate {
    channel: Channel::Email,
    recipient: "{recipient}",
    subject: Some("Update on {topic}"),
    body: "Hi {recipient},\n\nI want to give you a heads-up about {topic}. {request} \
           I'm committed to doing my work well and want to protect the time I need to do that.\n\nThanks,\n{sender}",
    context: "Setting a work boundary",
    defaults: &[
        ("recipient", "Manager"),
        ("topic", "my availability"),
        ("request", "I'm not able to take on work after 5pm on weekdays."),
        ("sender", "Me"),
    ],
};

const DECLINE: DraftTemplate = DraftTemplate {
    channel: Channel::Text,
    recipient: "{recipient}",
    subject: None,
    body: "Hi {recipient}, thank you so much for thinking of me. I'm not able to take on \
           {commitment} right now, but I hope it goes wonderfully.",
    context: "Declining a request",
    defaults: &[("recipient", "there"), ("commitment", "this")],
};

/// Scenario keyword rules in priority order
const SCENARIO_RULES: &[(DraftScenario, &[&str])] = &[
    (
        DraftScenario::PartnerFamily,
        &["partner", "husband", "wife", "spouse", "family", "in-laws", "mother-in-law"],
    ),
    (
        DraftScenario::School,
        &["school", "teacher", "principal", "classroom", "daycare"],
    ),
    (
        DraftScenario::Appointment,
        &["appointment", "doctor", "dentist", "pediatrician", "reschedule"],
    ),
    (DraftScenario::Playdate, &["playdate", "play date", "sleepover"]),
    (
        DraftScenario::WorkBoundary,
        &["boss", "manager", "coworker", "overtime", "work"],
    ),
    (
        DraftScenario::Decline,
        &["decline", "say no", "can't make it", "turn down", "volunteer", "bake sale"],
    ),
];

impl DraftScenario {
    pub const ALL: [DraftScenario; 6] = [
        DraftScenario::PartnerFamily,
        DraftScenario::School,
        DraftScenario::Appointment,
        DraftScenario::Playdate,
        DraftScenario::WorkBoundary,
        DraftScenario::Decline,
    ];

    pub fn template(&self) -> &'static DraftTemplate {
        match self {
            DraftScenario::PartnerFamily => &PARTNER_FAMILY,
            DraftScenario::School => &SCHOOL,
            DraftScenario::Appointment => &APPOINTMENT,
            DraftScenario::Playdate => &PLAYDATE,
            DraftScenario::WorkBoundary => &WORK_BOUNDARY,
            DraftScenario::Decline => &DECLINE,
        }
    }

    /// First scenario whose keywords appear in the text
    pub fn detect(scenario_text: &str) -> Option<DraftScenario> {
        let text = scenario_text.to_lowercase();
        SCENARIO_RULES
            .iter()
            .find(|(_, keywords)| keywords.iter().any(|kw| text.contains(kw)))
            .map(|(scenario, _)| *scenario)
    }

    /// Render this scenario's template
    pub fn instantiate(&self, overrides: &HashMap<String, String>) -> DraftMessage {
        let template = self.template();
        let fill = |text: &str| template.render(text, overrides);

        DraftMessage {
            scenario: *self,
            channel: template.channel,
            recipient: fill(template.recipient),
            subject: template.subject.map(fill),
            body: fill(template.body),
            context: template.context.to_string(),
        }
    }
}

impl DraftTemplate {
    fn default_for(&self, key: &str) -> Option<&'static str> {
        self.defaults
            .iter()
            .find(|(name, _)| *name == key)
            .map(|(_, value)| *value)
    }

    /// Substitute placeholders; blank overrides count as missing and
    /// unknown placeholders are left untouched.
    fn render(&self, text: &str, overrides: &HashMap<String, String>) -> String {
        PLACEHOLDER
            .replace_all(text, |caps: &Captures| {
                let key = &caps[1];
                overrides
                    .get(key)
                    .map(|value| value.trim())
                    .filter(|value| !value.is_empty())
                    .or_else(|| self.default_for(key))
                    .unwrap_or(&caps[0])
                    .to_string()
            })
            .into_owned()
    }
}

/// Suggest a draft for the given scenario text.
///
/// Returns `None` when no scenario rule matches.
pub fn suggest_draft(
    scenario_text: &str,
    overrides: &HashMap<String, String>,
) -> Option<DraftMessage> {
    DraftScenario::detect(scenario_text).map(|scenario| scenario.instantiate(overrides))
}
