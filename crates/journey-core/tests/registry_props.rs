use journey_core::{build_registry, ComputedSteps, JourneyError, StepDefinition};
use proptest::prelude::*;
use serde_json::{json, Value};

fn unique_slugs() -> impl Strategy<Value = Vec<String>> {
    proptest::collection::btree_set("[a-z]{1,8}", 1..20).prop_map(|set| set.into_iter().collect::<Vec<_>>())
                                                       .prop_shuffle()
}

proptest! {
    #[test]
    fn registry_preserves_order_and_reaches_every_slug(slugs in unique_slugs()) {
        let steps: Vec<StepDefinition<Value>> = slugs.iter().map(|s| StepDefinition::headless(s.as_str())).collect();
        let registry = build_registry(steps).expect("unique slugs");

        let ordered: Vec<&str> = registry.slugs().collect();
        let expected: Vec<&str> = slugs.iter().map(String::as_str).collect();
        prop_assert_eq!(ordered, expected);
        for slug in &slugs {
            prop_assert!(registry.contains(slug));
        }
    }

    #[test]
    fn without_skips_neighbors_are_adjacent(slugs in unique_slugs()) {
        let steps: Vec<StepDefinition<Value>> = slugs.iter().map(|s| StepDefinition::headless(s.as_str())).collect();
        let computed = ComputedSteps::normalize(build_registry(steps).expect("unique slugs"));
        let state = json!({});

        for (i, step) in computed.iter().enumerate() {
            let previous = step.previous_step(&state, &computed).map(|s| s.slug().to_string());
            let next = step.next_step(&state, &computed).map(|s| s.slug().to_string());
            prop_assert_eq!(previous, i.checked_sub(1).map(|p| slugs[p].clone()));
            prop_assert_eq!(next, slugs.get(i + 1).cloned());
        }
    }

    #[test]
    fn duplicated_slug_is_rejected(slugs in unique_slugs(), pick in any::<prop::sample::Index>()) {
        let dup = pick.get(&slugs).clone();
        let mut steps: Vec<StepDefinition<Value>> = slugs.iter().map(|s| StepDefinition::headless(s.as_str())).collect();
        steps.push(StepDefinition::headless(dup.as_str()));
        prop_assert_eq!(build_registry(steps).err(), Some(JourneyError::DuplicateSlug { slug: dup }));
    }
}
