use crate::models::{Aspect, CompatibilityAspect, CompatibilityBreakdown, CompatibilityResult, MatchClass, RedFlag, Severity};

/// Identifier for an ordered pair of profiles
#[inline]
pub fn pair_id(profile_a: &str, profile_b: &str) -> String {
    format!("{}_{}", profile_a, profile_b)
}

/// Category name and severity reported when an aspect disagrees
pub fn flag_category(aspect: Aspect) -> (&'static str, Severity) {
    match aspect {
        Aspect::Budget => ("Budget", Severity::Medium),
        Aspect::SleepSchedule => ("Sleep Schedule", Severity::Low),
        Aspect::Cleanliness => ("Cleanliness", Severity::High),
        Aspect::StudyHabits => ("Study", Severity::Medium),
        Aspect::SocialHabits => ("Noise Tolerance", Severity::Low),
    }
}

/// Surface every aspect that is not a strong match as a red flag
///
/// Flags follow the scorer's classification rather than raw label
/// inequality, so values the scorer treats as equivalent (same label after
/// normalization, or cleanliness labels sharing a rank) raise nothing.
/// Flags come out in aspect order.
pub fn breakdown(profile_a: &str, profile_b: &str, result: &CompatibilityResult) -> CompatibilityBreakdown {
    let red_flags = result
        .aspects
        .iter()
        .filter(|a| a.class != MatchClass::Strong)
        .map(to_red_flag)
        .collect();

    CompatibilityBreakdown {
        pair_id: pair_id(profile_a, profile_b),
        red_flags,
    }
}

fn to_red_flag(aspect: &CompatibilityAspect) -> RedFlag {
    let (kind, severity) = flag_category(aspect.aspect);
    let evidence = match aspect.aspect {
        Aspect::Budget => format!(
            "Profile A budget {}, Profile B budget {}",
            aspect.user1_value, aspect.user2_value
        ),
        _ => format!(
            "Profile A prefers {}, Profile B prefers {}",
            aspect.user1_value, aspect.user2_value
        ),
    };

    RedFlag {
        kind: kind.to_string(),
        severity,
        evidence,
    }
}
