use crate::models::{ConflictExplanation, NegotiationSuggestion, RedFlag, ScoreBand};

/// Build a plain-language explanation of a score and its red flags
///
/// Deterministic counterpart of the AI explanation: the summary names the
/// score, its band and each concern (most severe first), and the checklist
/// carries one suggestion per flagged category.
pub fn explain_conflicts(red_flags: &[RedFlag], match_score: u8) -> ConflictExplanation {
    let mut ordered: Vec<&RedFlag> = red_flags.iter().collect();
    ordered.sort_by(|a, b| b.severity.cmp(&a.severity));

    let mut summary = format!(
        "The compatibility score is {}/100, indicating {}.",
        match_score,
        band_phrase(match_score)
    );

    if ordered.is_empty() {
        summary.push_str(" No notable conflicts were found.");
    } else {
        let concerns: Vec<String> = ordered
            .iter()
            .map(|flag| {
                format!(
                    "a {} severity difference in {} ({})",
                    flag.severity,
                    flag.kind.to_lowercase(),
                    flag.evidence
                )
            })
            .collect();
        let noun = if concerns.len() == 1 { "concern is" } else { "concerns are" };
        summary.push_str(&format!(" The main {} {}.", noun, join_concerns(&concerns)));
    }

    let mut negotiation_checklist: Vec<NegotiationSuggestion> = Vec::new();
    for flag in ordered {
        if negotiation_checklist.iter().any(|s| s.category == flag.kind) {
            continue;
        }
        negotiation_checklist.push(NegotiationSuggestion {
            category: flag.kind.clone(),
            suggestion: suggestion_for(&flag.kind),
        });
    }

    ConflictExplanation {
        negotiation_checklist,
        summary_explanation: summary,
    }
}

fn band_phrase(score: u8) -> &'static str {
    match ScoreBand::from_score(score) {
        ScoreBand::Strong => "a strong overall match",
        ScoreBand::Moderate => "a workable match with a few differences",
        ScoreBand::Weak if score == 0 => "no overall match",
        ScoreBand::Weak => "a weak overall match",
    }
}

fn join_concerns(concerns: &[String]) -> String {
    match concerns {
        [] => String::new(),
        [only] => only.clone(),
        [rest @ .., last] => format!("{} and {}", rest.join(", "), last),
    }
}

fn suggestion_for(category: &str) -> String {
    let text = match category.to_lowercase().as_str() {
        "cleanliness" => "Create a mutually agreed cleaning schedule and define shared spaces where both can maintain the preferred level of tidiness.",
        "study" | "study habits" => "Establish quiet hours and separate study zones so different study routines do not disturb each other.",
        "sleep schedule" => "Agree on quiet hours around the earlier sleeper's bedtime and keep late-night activity out of shared rooms.",
        "noise tolerance" | "social habits" => "Set expectations for guests and music volume, and agree on which days are fine for visitors.",
        "budget" => "Settle on a rent ceiling you can both afford before viewing rooms and decide how shared bills are split.",
        _ => return format!("Talk through your expectations for {} before signing a lease.", category.to_lowercase()),
    };
    text.to_string()
}
