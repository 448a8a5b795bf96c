//! Prompt template for the advice completion.

/// The keys the model is instructed to return, in response order.
///
/// `nearby_chemists` is deliberately requested as an empty array; the
/// orchestrator fills it from the facility search, never from the model.
pub const EXPECTED_KEYS: [&str; 7] = [
    "intent",
    "otc_medicines",
    "nearby_chemists",
    "home_remedies",
    "videos",
    "red_flags",
    "disclaimers",
];

/// System instruction sent alongside every prompt.
pub const SYSTEM_INSTRUCTION: &str =
    "You are a careful medical assistant. Always return valid JSON only.";

/// Build the user prompt for one symptom query.
///
/// The query text is embedded verbatim; the shape contract at the end matches
/// [`EXPECTED_KEYS`] exactly.
#[must_use]
pub fn build_prompt(query: &str) -> String {
    format!(
        r#"You are a cautious, helpful medical assistant. Expand on the user's message and return ALL of the following sections as JSON.

Input: "{query}"

Requirements:
1) Clarify the user intent from the symptom(s).
2) Suggest over-the-counter medicine options (if appropriate), with generic names and typical dosage guidance. Include cautions and when NOT to take.
3) The server will supply nearby chemists separately; set "nearby_chemists" to an empty array.
4) Suggest 3-5 home remedies with short rationales.
5) Provide 3-5 YouTube video LINKS relevant to home remedies or guidance; return as an array of objects with a single key "url" (full https YouTube watch URL, no embeds, no iframes, no placeholders).
6) Add red flags: list symptoms that require immediate medical attention.
7) Disclaimers: not a substitute for professional medical advice; consult a healthcare professional.

Return a single JSON object with exactly these keys:
{{
  "intent": string,
  "otc_medicines": [{{ "name": string, "dosage_guidance": string, "cautions": string }}],
  "nearby_chemists": [],
  "home_remedies": [{{ "title": string, "rationale": string }}],
  "videos": [{{ "url": string }}],
  "red_flags": [string],
  "disclaimers": [string]
}}
Ensure valid JSON."#
    )
}
