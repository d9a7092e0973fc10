//! Property tests for whole-plan resolution.

use std::collections::BTreeSet;

use proptest::prelude::*;

use extplan::domain::services::BundlePlanner;
use extplan::infrastructure::MemoryFs;
use extplan::{EntryPoint, OutputTemplates};

fn entry_names() -> impl Strategy<Value = BTreeSet<String>> {
    let name = proptest::string::string_regex("[a-z][a-z0-9_-]{0,11}").unwrap();
    proptest::collection::btree_set(name, 1..8)
}

fn planner_for(names: &BTreeSet<String>) -> BundlePlanner<MemoryFs> {
    let fs = MemoryFs::with_files(names.iter().map(|n| format!("/p/src/{}/index.ts", n)));
    let entries = names
        .iter()
        .map(|n| EntryPoint::new(n.as_str(), format!("src/{}/index.ts", n)).unwrap());
    BundlePlanner::new("/p", OutputTemplates::default(), fs)
        .with_entries(entries)
        .unwrap()
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 128,
        .. ProptestConfig::default()
    })]

    /// PROPERTY: Every entry gets its own `src/<name>/index.js`.
    #[test]
    fn property_plan_is_total_and_injective(names in entry_names()) {
        let plan = planner_for(&names).plan().unwrap();
        let expected: BTreeSet<String> =
            names.iter().map(|n| format!("src/{}/index.js", n)).collect();
        prop_assert_eq!(plan.entry_paths(), expected);
    }

    /// PROPERTY: Resolving the same entry twice yields identical strings.
    #[test]
    fn property_resolve_is_idempotent(names in entry_names()) {
        let planner = planner_for(&names);
        for name in &names {
            let first = planner.resolve_entry(name).unwrap();
            let second = planner.resolve_entry(name).unwrap();
            prop_assert_eq!(first, second);
        }
    }

    /// PROPERTY: Secondary outputs never take an entry's path.
    #[test]
    fn property_secondary_outputs_never_shadow_entries(
        names in entry_names(),
        chunks in proptest::collection::vec("[a-z]{1,6}", 0..6)
    ) {
        let mut plan = planner_for(&names).plan().unwrap();
        for chunk in &chunks {
            plan.add_chunk(chunk).unwrap();
        }
        let all: Vec<String> = plan.all().map(|r| r.as_str().to_lowercase()).collect();
        let unique: BTreeSet<&String> = all.iter().collect();
        prop_assert_eq!(unique.len(), all.len());
    }
}
