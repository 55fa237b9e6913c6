//! Record filtering (pure).
//!
//! The filtered view is a projection of (record set, search term),
//! recomputed on read. It is never stored as independent state, so it can
//! not desynchronize from the record set.

use crate::model::User;

/// Select the records containing `term` in any of the matchable fields:
/// name, email, company name, username.
///
/// Matching is case-insensitive substring containment; no tokenization, no
/// ranking. An empty or whitespace-only term selects everything. Order is
/// preserved (stable filter, not a sort), and an empty result is a valid
/// outcome, not an error.
pub fn filter_users<'a>(records: &'a [User], term: &str) -> Vec<&'a User> {
    if term.trim().is_empty() {
        return records.iter().collect();
    }
    let needle = term.to_lowercase();
    records
        .iter()
        .filter(|user| matches_term(user, &needle))
        .collect()
}

/// Check one record against an already-lowercased needle.
pub fn matches_term(user: &User, needle: &str) -> bool {
    [
        user.name.as_str(),
        user.email.as_str(),
        user.company.name.as_str(),
        user.username.as_str(),
    ]
    .iter()
    .any(|field| field.to_lowercase().contains(needle))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Company, UserId};

    fn user(id: i64, name: &str, username: &str, email: &str, company: &str) -> User {
        User {
            id: UserId::new(id),
            name: name.to_string(),
            username: username.to_string(),
            email: email.to_string(),
            company: Company {
                name: company.to_string(),
                ..Company::default()
            },
            ..User::default()
        }
    }

    fn sample() -> Vec<User> {
        vec![
            user(1, "John Doe", "johndoe", "john@example.com", "Test Company"),
            user(2, "Jane Smith", "janesmith", "jane@example.com", "Another Company"),
        ]
    }

    #[test]
    fn empty_term_returns_everything_in_order() {
        let records = sample();
        let kept = filter_users(&records, "");
        assert_eq!(kept.len(), 2);
        assert_eq!(kept[0].id, UserId::new(1));
        assert_eq!(kept[1].id, UserId::new(2));
    }

    #[test]
    fn whitespace_only_term_is_treated_as_empty() {
        let records = sample();
        assert_eq!(filter_users(&records, "   ").len(), 2);
        assert_eq!(filter_users(&records, "\t").len(), 2);
    }

    #[test]
    fn name_match_is_case_insensitive() {
        let records = sample();
        let kept = filter_users(&records, "john");
        assert_eq!(kept.len(), 1);
        assert_eq!(kept[0].name, "John Doe");

        let kept = filter_users(&records, "JOHN");
        assert_eq!(kept.len(), 1);
    }

    #[test]
    fn email_field_matches() {
        let records = sample();
        let kept = filter_users(&records, "jane@example.com");
        assert_eq!(kept.len(), 1);
        assert_eq!(kept[0].name, "Jane Smith");
    }

    #[test]
    fn company_name_field_matches() {
        let records = sample();
        let kept = filter_users(&records, "Test Company");
        assert_eq!(kept.len(), 1);
        assert_eq!(kept[0].name, "John Doe");
    }

    #[test]
    fn username_field_matches() {
        let records = sample();
        let kept = filter_users(&records, "janesmith");
        assert_eq!(kept.len(), 1);
        assert_eq!(kept[0].name, "Jane Smith");
    }

    #[test]
    fn no_match_yields_empty_result() {
        let records = sample();
        assert!(filter_users(&records, "NonExistentUser").is_empty());
    }

    #[test]
    fn phone_field_does_not_match() {
        let mut records = sample();
        records[0].phone = "555-0000".to_string();
        assert!(filter_users(&records, "555-0000").is_empty());
    }

    #[test]
    fn order_is_preserved_for_partial_matches() {
        let records = vec![
            user(1, "Company A", "", "", ""),
            user(2, "zzz", "", "", ""),
            user(3, "Company B", "", "", ""),
        ];
        let kept = filter_users(&records, "company");
        let ids: Vec<i64> = kept.iter().map(|u| u.id.get()).collect();
        assert_eq!(ids, vec![1, 3]);
    }
}
