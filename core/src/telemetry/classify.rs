use phf::phf_set;

use super::TelemetryBatch;

/// Event names that mark a batch as significant.
static HIGHLIGHT_EVENTS: phf::Set<&'static str> = phf_set! {
    "kill",
    "death",
    "assist",
    "level",
    "matchStart",
    "matchEnd",
};

pub fn is_highlight_event(name: &str) -> bool {
    HIGHLIGHT_EVENTS.contains(name)
}

/// True if any event in the batch is highlight-worthy.
///
/// Stops at the first match. Empty batches and unknown names never highlight.
pub fn classify(batch: &TelemetryBatch) -> bool {
    batch.names().any(is_highlight_event)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::telemetry::TelemetryEvent;
    use proptest::prelude::*;

    const HIGHLIGHTS: [&str; 6] = ["kill", "death", "assist", "level", "matchStart", "matchEnd"];

    fn batch(names: &[&str]) -> TelemetryBatch {
        TelemetryBatch::new(names.iter().map(|n| TelemetryEvent::named(*n)).collect())
    }

    #[test]
    fn empty_batch_is_not_highlighted() {
        assert!(!classify(&TelemetryBatch::default()));
    }

    #[test]
    fn kill_and_assist_highlight() {
        assert!(classify(&batch(&["kill", "assist"])));
    }

    #[test]
    fn roster_alone_does_not_highlight() {
        assert!(!classify(&batch(&["roster"])));
    }

    #[test]
    fn any_position_matches() {
        assert!(classify(&batch(&["roster", "location", "matchEnd"])));
        assert!(classify(&batch(&["matchStart", "roster"])));
    }

    #[test]
    fn every_highlight_name_matches_alone() {
        for name in ["kill", "death", "assist", "level", "matchStart", "matchEnd"] {
            assert!(classify(&batch(&[name])), "{name} should highlight");
        }
    }

    #[test]
    fn names_are_case_sensitive() {
        assert!(!is_highlight_event("Kill"));
        assert!(!is_highlight_event("match_start"));
        assert!(!is_highlight_event(""));
    }

    #[test]
    fn subscribed_topics_that_are_not_events_do_not_highlight() {
        assert!(!classify(&batch(&["killed", "killer", "revived", "phase", "team"])));
    }

    fn event_name() -> impl Strategy<Value = String> {
        prop_oneof![
            prop::sample::select(HIGHLIGHTS.to_vec()).prop_map(str::to_string),
            prop::sample::select(vec!["roster", "location", "killed", "killer", "phase", "team"])
                .prop_map(str::to_string),
            "[a-zA-Z_]{0,12}",
        ]
    }

    proptest! {
        #[test]
        fn highlights_iff_any_name_is_listed(names in prop::collection::vec(event_name(), 0..16)) {
            let refs: Vec<&str> = names.iter().map(String::as_str).collect();
            let expected = refs.iter().any(|n| HIGHLIGHTS.contains(n));
            prop_assert_eq!(classify(&batch(&refs)), expected);
        }
    }
}
