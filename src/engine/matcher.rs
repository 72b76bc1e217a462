//! Free-text matching over the Greek labels stored in client records.
//!
//! Condition labels, preference lists and goals are free text typed by the
//! dietitian, so all matching is case-insensitive substring search against
//! fixed marker tables. The tables below are the single place the
//! vocabulary lives; the scorer and the energy estimator consume the
//! detected enums and never touch raw text themselves.

/// Condition-label stems that force the gluten-free hard filter.
const GLUTEN_MARKERS: &[&str] = &["κοιλιοκάκη", "γλουτένη"];

/// Chronic conditions the scorer recognizes via label stems.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChronicCondition {
    Diabetes,
    Cholesterol,
    Ibs,
    Nafld,
    UricAcid,
}

impl ChronicCondition {
    pub const ALL: [ChronicCondition; 5] = [
        ChronicCondition::Diabetes,
        ChronicCondition::Cholesterol,
        ChronicCondition::Ibs,
        ChronicCondition::Nafld,
        ChronicCondition::UricAcid,
    ];

    /// Lowercase label stems that indicate the condition.
    pub fn markers(self) -> &'static [&'static str] {
        match self {
            ChronicCondition::Diabetes => &["διαβήτ", "σακχαρώδ"],
            ChronicCondition::Cholesterol => &["χοληστερ"],
            ChronicCondition::Ibs => &["ευερέθιστ", "ibs"],
            ChronicCondition::Nafld => &["λιπώδ", "nafld"],
            ChronicCondition::UricAcid => &["ουρικ", "υπερουριχαιμ", "ποδάγρα"],
        }
    }

    /// Recipe tags that earn the +1 pathology boost for the condition.
    pub fn friendly_tags(self) -> &'static [&'static str] {
        match self {
            ChronicCondition::Diabetes => &["diabetes-friendly"],
            ChronicCondition::Cholesterol => &["cholesterol-friendly"],
            ChronicCondition::Ibs => &["ibs-friendly", "low-fodmap"],
            ChronicCondition::Nafld => &["nafld-friendly"],
            ChronicCondition::UricAcid => &["uric-acid-friendly"],
        }
    }
}

/// Direction read out of the free-text goals field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GoalDirection {
    Lose,
    Gain,
    Maintain,
}

const LOSS_MARKERS: &[&str] = &["αδυνάτισμα", "απώλεια", "χάσω", "χάσει", "μείωση βάρους"];
const GAIN_MARKERS: &[&str] = &["αύξηση βάρους", "μυϊκή μάζα", "πάρω βάρος", "πάρει βάρος", "πάρω κιλά"];

/// Splits comma-separated preference text into lowercase trimmed terms,
/// dropping empties.
pub fn split_terms(text: &str) -> Vec<String> {
    text.split(',')
        .map(|term| term.trim().to_lowercase())
        .filter(|term| !term.is_empty())
        .collect()
}

/// Case-insensitive substring test of any term against a single value.
pub fn contains_term(value: &str, terms: &[String]) -> bool {
    if terms.is_empty() {
        return false;
    }
    let value = value.to_lowercase();
    terms.iter().any(|term| value.contains(term.as_str()))
}

fn any_label_matches(labels: &[String], markers: &[&str]) -> bool {
    labels.iter().any(|label| {
        let label = label.to_lowercase();
        markers.iter().any(|marker| label.contains(marker))
    })
}

/// True when any condition label names celiac disease or gluten.
pub fn requires_gluten_free(condition_labels: &[String]) -> bool {
    any_label_matches(condition_labels, GLUTEN_MARKERS)
}

/// Chronic conditions present in the free-text labels, in `ALL` order.
pub fn detect_chronic_conditions(condition_labels: &[String]) -> Vec<ChronicCondition> {
    ChronicCondition::ALL
        .into_iter()
        .filter(|condition| any_label_matches(condition_labels, condition.markers()))
        .collect()
}

/// Reads the goal direction out of the free-text goals field. Loss markers
/// win over gain markers when both appear.
pub fn detect_goal_direction(goals: &str) -> GoalDirection {
    let goals = goals.to_lowercase();
    if LOSS_MARKERS.iter().any(|marker| goals.contains(marker)) {
        GoalDirection::Lose
    } else if GAIN_MARKERS.iter().any(|marker| goals.contains(marker)) {
        GoalDirection::Gain
    } else {
        GoalDirection::Maintain
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_split_terms_trims_and_lowercases() {
        let terms = split_terms("Ντομάτα,  Μπρόκολο ,, κρεμμύδι ");
        assert_eq!(terms, vec!["ντομάτα", "μπρόκολο", "κρεμμύδι"]);
        assert!(split_terms("").is_empty());
        assert!(split_terms("  ,  ,").is_empty());
    }

    #[test]
    fn test_contains_term_is_case_insensitive_for_greek() {
        let terms = split_terms("ντομάτα");
        assert!(contains_term("Σάλτσα Ντομάτας", &terms));
        // accented capitals keep their tonos through lowercasing
        assert!(contains_term("ΝΤΟΜΆΤΑ", &terms));
        assert!(!contains_term("Αγγούρι", &terms));
        assert!(!contains_term("Ντομάτα", &[]));
    }

    #[test]
    fn test_unaccented_capitals_are_out_of_vocabulary() {
        // All-caps Greek written without tonos lowercases to "ντοματα",
        // which is not a substring match for the accented term. Matching
        // stays plain lowercase folding with no accent stripping.
        let terms = split_terms("ντομάτα");
        assert!(!contains_term("ΝΤΟΜΑΤΑ", &terms));
    }

    #[test]
    fn test_gluten_markers_match_condition_labels() {
        let labels = vec!["Κοιλιοκάκη".to_string()];
        assert!(requires_gluten_free(&labels));

        let labels = vec!["Δυσανεξία στη Γλουτένη".to_string()];
        assert!(requires_gluten_free(&labels));

        let labels = vec!["Υπέρταση".to_string()];
        assert!(!requires_gluten_free(&labels));
    }

    #[test]
    fn test_detect_chronic_conditions_from_greek_labels() {
        let labels = vec![
            "Σακχαρώδης Διαβήτης τύπου 2".to_string(),
            "Υπερχοληστερολαιμία".to_string(),
        ];
        let found = detect_chronic_conditions(&labels);
        assert_eq!(found, vec![ChronicCondition::Diabetes, ChronicCondition::Cholesterol]);

        let labels = vec!["Ευερέθιστο Έντερο".to_string()];
        assert_eq!(detect_chronic_conditions(&labels), vec![ChronicCondition::Ibs]);

        let labels = vec!["Λιπώδης διήθηση ήπατος".to_string(), "Ουρικό οξύ".to_string()];
        assert_eq!(
            detect_chronic_conditions(&labels),
            vec![ChronicCondition::Nafld, ChronicCondition::UricAcid]
        );

        assert!(detect_chronic_conditions(&[]).is_empty());
    }

    #[test]
    fn test_goal_direction_markers() {
        assert_eq!(detect_goal_direction("Απώλεια βάρους 5 κιλά"), GoalDirection::Lose);
        assert_eq!(detect_goal_direction("Αύξηση βάρους και μυϊκή μάζα"), GoalDirection::Gain);
        assert_eq!(detect_goal_direction("Διατήρηση"), GoalDirection::Maintain);
        assert_eq!(detect_goal_direction(""), GoalDirection::Maintain);
        // loss wins when both appear
        assert_eq!(
            detect_goal_direction("απώλεια λίπους, μυϊκή μάζα"),
            GoalDirection::Lose
        );
    }
}
