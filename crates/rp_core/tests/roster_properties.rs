//! Behavioral tests for the roster container.

use rp_core::{Entry, Roster};

#[test]
fn sample_roster_matches_seeded_names() {
    let roster = Roster::with_sample_entries();
    assert_eq!(
        roster.labels().collect::<Vec<_>>(),
        vec!["Tanu", "Tina", "Tono"]
    );
    assert!(!roster.is_empty());
}

#[test]
fn push_appends_at_the_end() {
    let mut roster = Roster::with_sample_entries();
    roster.push(Entry::new("Budi"));

    assert_eq!(roster.len(), 4);
    assert_eq!(roster.labels().last(), Some("Budi"));
}

#[test]
fn push_never_reorders_existing_entries() {
    let mut roster = Roster::new();
    let names = ["Tanu", "Tina", "Tono", "Budi", "Sari"];
    for (i, name) in names.iter().enumerate() {
        let before: Vec<String> = roster.labels().map(str::to_owned).collect();
        roster.push(Entry::new(*name));

        assert_eq!(roster.len(), i + 1);
        let after: Vec<String> = roster.labels().map(str::to_owned).collect();
        assert_eq!(&after[..i], &before[..]);
    }
    assert_eq!(roster.labels().collect::<Vec<_>>(), names);
}

#[test]
fn guarded_push_rejects_blank_labels() {
    let mut roster = Roster::with_sample_entries();

    assert!(!roster.push_non_blank(Entry::new("")));
    assert!(!roster.push_non_blank(Entry::new("   \t")));
    assert_eq!(
        roster.labels().collect::<Vec<_>>(),
        vec!["Tanu", "Tina", "Tono"]
    );
}

#[test]
fn unguarded_push_accepts_blank_labels() {
    let mut roster = Roster::new();
    roster.push(Entry::new(""));
    assert_eq!(roster.len(), 1);
}

#[test]
fn display_joins_labels_in_insertion_order() {
    let mut roster = Roster::new();
    roster.push(Entry::new("Tanu"));
    roster.push(Entry::new("Tina"));

    assert_eq!(roster.to_string(), "[Tanu, Tina]");
}

#[test]
fn empty_roster_displays_as_empty_brackets() {
    assert_eq!(Roster::new().to_string(), "[]");
}

#[test]
fn revision_counts_appends() {
    let mut roster = Roster::new();
    assert_eq!(roster.revision(), 0);

    roster.push(Entry::new("Tanu"));
    assert!(!roster.push_non_blank(Entry::new("")));
    roster.push_non_blank(Entry::new("Tina"));

    // the rejected blank entry must not look like a change
    assert_eq!(roster.revision(), 2);
}
