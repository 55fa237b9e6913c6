//! Property-based tests for the filter engine and delete transitions.

use proptest::prelude::*;
use udex::model::{Company, User, UserId};
use udex::state::filter::filter_users;
use udex::state::AppState;

fn field_string() -> impl Strategy<Value = String> {
    // Printable ASCII keeps the case-insensitivity law simple to state.
    proptest::string::string_regex("[ -~]{0,24}").expect("valid regex")
}

fn arb_user(id: i64) -> impl Strategy<Value = User> {
    (
        field_string(),
        field_string(),
        field_string(),
        field_string(),
    )
        .prop_map(move |(name, username, email, company)| User {
            id: UserId::new(id),
            name,
            username,
            email,
            company: Company {
                name: company,
                ..Company::default()
            },
            ..User::default()
        })
}

fn arb_records() -> impl Strategy<Value = Vec<User>> {
    proptest::collection::vec(any::<()>(), 0..12).prop_flat_map(|slots| {
        slots
            .into_iter()
            .enumerate()
            .map(|(index, ())| arb_user(index as i64))
            .collect::<Vec<_>>()
    })
}

fn matches(user: &User, needle: &str) -> bool {
    [
        user.name.as_str(),
        user.email.as_str(),
        user.company.name.as_str(),
        user.username.as_str(),
    ]
    .iter()
    .any(|field| field.to_lowercase().contains(needle))
}

proptest! {
    #[test]
    fn filtered_view_is_a_subset_and_every_element_matches(
        records in arb_records(),
        term in "[ -~]{1,8}",
    ) {
        let kept = filter_users(&records, &term);
        prop_assert!(kept.len() <= records.len());

        if term.trim().is_empty() {
            prop_assert_eq!(kept.len(), records.len());
        } else {
            let needle = term.to_lowercase();
            for user in &kept {
                prop_assert!(
                    matches(user, &needle),
                    "kept record {:?} does not contain {:?}",
                    user.id,
                    term
                );
            }
            // Nothing that matches was dropped.
            let expected = records.iter().filter(|user| matches(user, &needle)).count();
            prop_assert_eq!(kept.len(), expected);
        }
    }

    #[test]
    fn empty_and_whitespace_terms_are_identity(records in arb_records()) {
        let ids: Vec<UserId> = records.iter().map(|user| user.id).collect();

        let all = filter_users(&records, "");
        prop_assert_eq!(all.iter().map(|u| u.id).collect::<Vec<_>>(), ids.clone());

        let spaces = filter_users(&records, "   ");
        prop_assert_eq!(spaces.iter().map(|u| u.id).collect::<Vec<_>>(), ids);
    }

    #[test]
    fn filtering_preserves_input_order(
        records in arb_records(),
        term in "[ -~]{1,8}",
    ) {
        let kept = filter_users(&records, &term);
        let kept_ids: Vec<UserId> = kept.iter().map(|user| user.id).collect();
        let mut sorted = kept_ids.clone();
        // Ids were assigned in input order, so order preservation means
        // the kept ids are still ascending.
        sorted.sort();
        prop_assert_eq!(kept_ids, sorted);
    }

    #[test]
    fn matching_is_case_insensitive(records in arb_records(), term in "[a-zA-Z]{1,8}") {
        let lower = filter_users(&records, &term.to_lowercase());
        let upper = filter_users(&records, &term.to_uppercase());
        let lower_ids: Vec<UserId> = lower.iter().map(|user| user.id).collect();
        let upper_ids: Vec<UserId> = upper.iter().map(|user| user.id).collect();
        prop_assert_eq!(lower_ids, upper_ids);
    }

    #[test]
    fn delete_is_idempotent(records in arb_records(), raw_id in 0i64..16) {
        let id = UserId::new(raw_id);

        let mut once = AppState::new();
        once.resolve_users(Ok(records.clone()));
        once.delete(id);

        let mut twice = AppState::new();
        twice.resolve_users(Ok(records));
        twice.delete(id);
        twice.delete(id);

        prop_assert_eq!(once.records(), twice.records());
    }

    #[test]
    fn delete_removes_at_most_one_record(records in arb_records(), raw_id in 0i64..16) {
        let id = UserId::new(raw_id);
        let mut state = AppState::new();
        let before = records.len();
        let present = records.iter().any(|user| user.id == id);
        state.resolve_users(Ok(records));
        state.delete(id);

        let expected = if present { before - 1 } else { before };
        prop_assert_eq!(state.records().len(), expected);
        prop_assert!(state.records().iter().all(|user| user.id != id));
    }
}
