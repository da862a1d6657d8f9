//! Tests for event sinks

use coop_scheduler::builders::build_scenario;
use coop_scheduler::core::{EventSink, InMemorySink, JsonLineSink, StepEvent};

#[test]
fn test_json_line_sink_round_trip() {
    let event = StepEvent::Assigned {
        task: 7,
        workers: vec![0, 2],
    };
    let line = serde_json::to_string(&event).unwrap();
    let back: StepEvent = serde_json::from_str(&line).unwrap();
    assert_eq!(back, event);
}

#[test]
fn test_json_line_sink_full_run() {
    let mut sim = build_scenario([(1, 2)], [("A".to_string(), 1)]).unwrap();
    let mut sink = JsonLineSink::new(Vec::new());

    let summary = sim.run(10, &mut sink).unwrap();
    assert!(summary.exhausted);

    let out = String::from_utf8(sink.into_inner()).unwrap();
    let lines: Vec<&str> = out.lines().collect();
    // Two steps: marker + assigned + progress, then marker + progress +
    // completed.
    assert_eq!(lines.len(), 6);
    assert_eq!(lines[0], r#"{"type":"step","step":1}"#);
    assert_eq!(lines[3], r#"{"type":"step","step":2}"#);
    assert!(lines[5].contains(r#""type":"completed""#));

    // Every line is valid JSON with a type tag.
    for line in lines {
        let value: serde_json::Value = serde_json::from_str(line).unwrap();
        assert!(value.get("type").is_some());
    }
}

#[test]
fn test_in_memory_sink_per_step_view() {
    let mut sim = build_scenario([(1, 3)], [("A".to_string(), 1)]).unwrap();
    let mut sink = InMemorySink::new(1_000);
    sim.run(10, &mut sink).unwrap();

    assert_eq!(
        sink.events_for_step(1),
        vec![
            StepEvent::Assigned {
                task: 0,
                workers: vec![0]
            },
            StepEvent::Progress {
                worker: 0,
                task: 0,
                remaining_before: 3
            },
        ]
    );
    assert_eq!(
        sink.events_for_step(3),
        vec![
            StepEvent::Progress {
                worker: 0,
                task: 0,
                remaining_before: 1
            },
            StepEvent::Completed { task: 0 },
        ]
    );
}

#[test]
fn test_sink_trait_object() {
    // Sinks are consumed through `&mut dyn EventSink` by the driver.
    let mut sink = InMemorySink::new(10);
    let dyn_sink: &mut dyn EventSink = &mut sink;
    dyn_sink.begin_step(1);
    dyn_sink.record(&StepEvent::Completed { task: 0 });
    assert_eq!(sink.events().len(), 1);
}
