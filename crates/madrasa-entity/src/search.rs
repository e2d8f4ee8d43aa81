//! Free-text search over record lists.
//!
//! Searching never touches the store: it filters an already loaded list and
//! preserves its order.

use crate::record::Record;

/// Whether any field contains `query`, ignoring case.
///
/// An empty query matches everything.
pub fn matches<S: AsRef<str>>(fields: &[S], query: &str) -> bool {
    if query.is_empty() {
        return true;
    }
    let needle = query.to_lowercase();
    fields
        .iter()
        .any(|field| field.as_ref().to_lowercase().contains(&needle))
}

/// Records whose searchable fields contain `query`, in their original order.
pub fn filter<R: Record>(records: &[R], query: &str) -> Vec<R> {
    records
        .iter()
        .filter(|record| matches(&record.search_fields(), query))
        .cloned()
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::staff::{StaffMember, StaffStatus};
    use chrono::{NaiveDate, Utc};
    use uuid::Uuid;

    fn staff(name: &str, designation: &str) -> StaffMember {
        StaffMember {
            id: Uuid::new_v4(),
            madrasa_name: "Al-Huda".to_string(),
            name: name.to_string(),
            father_name: None,
            designation: designation.to_string(),
            qualification: None,
            salary: 20000.0,
            joining_date: NaiveDate::from_ymd_opt(2022, 1, 1).unwrap(),
            contact: "0300".to_string(),
            email: None,
            address: None,
            cnic: None,
            status: StaffStatus::Active,
            bank_name: None,
            account_number: None,
            photo_url: None,
            created_by: None,
            created_at: Utc::now(),
            updated_at: Utc::now(),
        }
    }

    #[test]
    fn test_empty_query_returns_everything() {
        let list = vec![staff("Ahmed", "Teacher"), staff("Usman", "Cook")];
        assert_eq!(filter(&list, "").len(), 2);
    }

    #[test]
    fn test_match_is_case_insensitive_and_order_preserving() {
        let list = vec![
            staff("Ahmed", "Qari"),
            staff("Usman", "Cook"),
            staff("Zaid", "qari sahib"),
        ];
        let found = filter(&list, "QARI");
        let names: Vec<_> = found.iter().map(|s| s.name.as_str()).collect();
        assert_eq!(names, vec!["Ahmed", "Zaid"]);
    }

    #[test]
    fn test_result_is_subsequence_of_input() {
        let list = vec![
            staff("Ahmed", "Teacher"),
            staff("Bilal", "Guard"),
            staff("Hamid", "Teacher"),
        ];
        let found = filter(&list, "teach");
        let mut cursor = list.iter();
        for item in &found {
            assert!(cursor.any(|candidate| candidate.id == item.id));
        }
        assert!(filter(&list, "nobody").is_empty());
    }

    #[test]
    fn test_filter_keeps_exactly_the_matching_records() {
        let list = vec![
            staff("Ahmed", "Teacher"),
            staff("Bilal", "Guard"),
            staff("Hamid", "Head Teacher"),
            staff("Usman", "Cook"),
            staff("Zaid", "qari"),
        ];

        for query in ["", "a", "TEACH", "guard", "Cook", "ari", "0300", "x", "  "] {
            let found = filter(&list, query);

            for item in &found {
                assert!(matches(&item.search_fields(), query), "{query:?}");
            }
            let expected: Vec<_> = list
                .iter()
                .filter(|r| matches(&r.search_fields(), query))
                .map(|r| r.id)
                .collect();
            let ids: Vec<_> = found.iter().map(|r| r.id).collect();
            assert_eq!(ids, expected, "{query:?}");

            let needle = query.to_lowercase();
            let by_hand = list
                .iter()
                .filter(|r| {
                    query.is_empty()
                        || [&r.name, &r.designation, &r.contact]
                            .iter()
                            .any(|f| f.to_lowercase().contains(&needle))
                })
                .count();
            assert_eq!(found.len(), by_hand, "{query:?}");
        }
    }

    #[test]
    fn test_matches_urdu_text() {
        assert!(matches(&["ماہانہ عطیہ", "Bilal"], "عطیہ"));
    }
}
