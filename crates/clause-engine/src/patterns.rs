//! Keyword vocabularies and cluster matching for risk detection

/// Termination/cancellation keywords
pub const TERMINATION_KEYWORDS: &[&str] = &[
    "terminate",
    "terminates",
    "terminated",
    "termination",
    "cancel",
    "cancels",
    "cancellation",
    "rescind",
];

/// Notice-related keywords
pub const NOTICE_KEYWORDS: &[&str] = &["notice", "notification", "notify", "advance notice"];

/// Negation markers that strip a protection ("without notice", "no liability")
pub const NEGATION_KEYWORDS: &[&str] = &["without", "no prior", "in the absence of", "lack of"];

/// Liability reference keywords
pub const LIABILITY_KEYWORDS: &[&str] = &[
    "liability",
    "liable",
    "damages",
    "indemnify",
    "indemnification",
    "claims",
    "losses",
];

/// Limitation/waiver keywords that remove or cap liability
pub const LIMITATION_KEYWORDS: &[&str] = &[
    "waive",
    "waives",
    "waiver",
    "limit",
    "limits",
    "limited",
    "limitation",
    "exclude",
    "excludes",
    "disclaim",
    "disclaims",
    "not be liable",
    "in no event",
    "cap",
];

/// Renewal/extension keywords
pub const RENEWAL_KEYWORDS: &[&str] = &["renew", "renews", "renewal", "extend", "extension"];

/// Automatic-action keywords
pub const AUTOMATIC_KEYWORDS: &[&str] = &[
    "automatic",
    "automatically",
    "auto-renew",
    "auto renew",
    "successive",
];

/// Amendment/modification keywords
pub const AMENDMENT_KEYWORDS: &[&str] = &[
    "amend",
    "amends",
    "amendment",
    "modify",
    "modifies",
    "modification",
    "revise",
    "change the terms",
    "change these terms",
];

/// One-sided discretion keywords
pub const UNILATERAL_KEYWORDS: &[&str] = &[
    "sole discretion",
    "unilateral",
    "unilaterally",
    "at any time",
    "without consent",
    "without the consent",
    "without notice",
];

/// Check if text contains semantic clustering of keywords
/// Returns true if words from at least two keyword groups are present
pub fn contains_semantic_cluster(text: &str, keyword_groups: &[&[&str]]) -> bool {
    let text_lower = text.to_lowercase();
    let mut found_groups = 0;

    for group in keyword_groups {
        if group.iter().any(|keyword| text_lower.contains(keyword)) {
            found_groups += 1;
        }
    }

    found_groups >= 2
}

/// True when every listed group has at least one match.
pub fn contains_all_groups(text: &str, keyword_groups: &[&[&str]]) -> bool {
    let text_lower = text.to_lowercase();
    keyword_groups
        .iter()
        .all(|group| group.iter().any(|keyword| text_lower.contains(keyword)))
}

/// Extract a snippet around a keyword match (roughly 100 characters of context)
pub fn extract_snippet(text: &str, keyword: &str) -> String {
    let text_lower = text.to_lowercase();
    let keyword_lower = keyword.to_lowercase();

    if let Some(pos) = text_lower.find(&keyword_lower) {
        let start = clamp_to_char_boundary(text, pos.saturating_sub(50));
        let end = clamp_to_char_boundary(text, pos + keyword.len() + 50);
        format!("...{}...", text[start..end].trim())
    } else {
        text.chars().take(150).collect::<String>()
    }
}

// Lowercasing can shift byte offsets for some scripts, so offsets computed on
// the lowered text are clamped back onto a valid boundary of the original.
fn clamp_to_char_boundary(text: &str, mut index: usize) -> usize {
    index = index.min(text.len());
    while index > 0 && !text.is_char_boundary(index) {
        index -= 1;
    }
    index
}
