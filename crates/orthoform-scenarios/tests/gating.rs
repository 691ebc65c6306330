use orthoform_core::models::record::FormRecord;
use orthoform_scenarios::all_scenarios;
use proptest::prelude::*;

/// A controller answer, relative to whatever sentinel the pair uses.
#[derive(Debug, Clone)]
enum Answer {
    Sentinel,
    PaddedSentinel,
    UppercaseSentinel,
    Empty,
    Word(String),
}

impl Answer {
    fn value_for(&self, sentinel: &str) -> String {
        match self {
            Answer::Sentinel => sentinel.to_string(),
            Answer::PaddedSentinel => format!("  {sentinel} "),
            Answer::UppercaseSentinel => sentinel.to_uppercase(),
            Answer::Empty => String::new(),
            Answer::Word(word) => word.clone(),
        }
    }
}

fn answer() -> impl Strategy<Value = Answer> {
    prop_oneof![
        Just(Answer::Sentinel),
        Just(Answer::PaddedSentinel),
        Just(Answer::UppercaseSentinel),
        Just(Answer::Empty),
        "[a-z]{1,10}( [a-z]{1,8})?".prop_map(Answer::Word),
    ]
}

#[test]
fn every_scenario_gates_at_least_one_details_field() {
    for scenario in all_scenarios() {
        let gated = scenario.fields().iter().filter(|f| f.reveal.is_some()).count();
        assert!(gated >= 2, "{} has {gated} gated fields", scenario.id());
    }
}

proptest! {
    #[test]
    fn details_surface_only_while_the_controller_holds_the_sentinel(
        answer in answer(),
        marker in "[0-9]{6}",
    ) {
        let marker = format!("zq{marker}");
        for scenario in all_scenarios() {
            for details in scenario.fields().iter().filter(|f| f.reveal.is_some()) {
                let Some(reveal) = &details.reveal else { continue };
                let value = answer.value_for(&reveal.sentinel);
                let open = value.trim() == reveal.sentinel;

                let mut record = FormRecord::new();
                record.set(reveal.controller.as_str(), value.as_str());
                record.set(details.id.as_str(), marker.as_str());

                let visible = scenario
                    .visible_fields(&record)
                    .iter()
                    .any(|f| f.id == details.id);
                prop_assert_eq!(visible, open, "{} {}", scenario.id(), details.id);

                let context = scenario.narrative_context(&record).to_string();
                prop_assert_eq!(
                    context.contains(&marker),
                    open,
                    "{} {} = {:?}",
                    scenario.id(),
                    details.id,
                    value
                );
            }
        }
    }
}
