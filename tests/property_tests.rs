// Property tests for the roommate compatibility scorer

use proptest::prelude::*;
use roommate_compat::core::{breakdown, score_compatibility};
use roommate_compat::models::{Aspect, MatchClass, PreferenceProfile};

fn label(options: &'static [&'static str]) -> impl Strategy<Value = String> {
    prop_oneof![
        proptest::sample::select(options).prop_map(str::to_string),
        "[A-Za-z -]{0,12}",
    ]
}

fn budget() -> impl Strategy<Value = String> {
    prop_oneof![
        (0u64..5000).prop_map(|n| format!("${}", n)),
        (0u64..5000, 0u64..5000).prop_map(|(lo, hi)| format!("${}-{}", lo, hi)),
        (0u64..100_000).prop_map(|n| format!("{} PKR", n)),
        "[A-Za-z$ ]{0,10}",
    ]
}

fn profile() -> impl Strategy<Value = PreferenceProfile> {
    (
        budget(),
        label(&["Early Bird", "Night Owl", "Flexible"]),
        label(&["Very Tidy", "Tidy", "Moderately Tidy", "Average", "Relaxed", "Messy"]),
        label(&["Library", "Late-night study", "Online classes", "Group study", "Quiet study"]),
        label(&["Quiet", "Moderate", "Loud"]),
    )
        .prop_map(|(budget, sleep, cleanliness, study, social)| {
            PreferenceProfile::new(budget, sleep, cleanliness, study, social)
        })
}

proptest! {
    #[test]
    fn proptest_score_is_bounded(a in profile(), b in profile()) {
        let result = score_compatibility(&a, &b);
        prop_assert!(result.score <= 100);
        let penalties: u32 = result.aspects.iter().map(|x| u32::from(x.penalty)).sum();
        prop_assert_eq!(u32::from(result.score), 100u32.saturating_sub(penalties));
    }

    #[test]
    fn proptest_score_is_symmetric(a in profile(), b in profile()) {
        let forward = score_compatibility(&a, &b);
        let backward = score_compatibility(&b, &a);
        prop_assert_eq!(forward.score, backward.score);

        for (f, r) in forward.aspects.iter().zip(backward.aspects.iter()) {
            prop_assert_eq!(f.class, r.class);
        }
    }

    #[test]
    fn proptest_identical_profiles_are_perfect(a in profile()) {
        let result = score_compatibility(&a, &a);
        prop_assert_eq!(result.score, 100);
        prop_assert!(result.aspects.iter().all(|x| x.class == MatchClass::Strong));
    }

    #[test]
    fn proptest_always_five_aspects_in_order(a in profile(), b in profile()) {
        let result = score_compatibility(&a, &b);
        let order: Vec<Aspect> = result.aspects.iter().map(|x| x.aspect).collect();
        prop_assert_eq!(order, Aspect::ALL.to_vec());
    }

    #[test]
    fn proptest_one_flag_per_weak_aspect(a in profile(), b in profile()) {
        let result = score_compatibility(&a, &b);
        let weak = result.aspects.iter().filter(|x| x.class != MatchClass::Strong).count();
        prop_assert_eq!(breakdown("a", "b", &result).red_flags.len(), weak);
    }
}
