//! Rendering of results in every format

use cistern_engine::report::{Narrative, Severity};
use cistern_engine::utils::config::ReportConfig;
use cistern_engine::{evaluate, AgentSpec, EngineError, ReportFormat, Reporter};

#[test]
fn text_report_for_stalled_tank() {
    let agents = [AgentSpec::inlet(6), AgentSpec::outlet(10), AgentSpec::outlet(15)];
    let result = evaluate(&agents).unwrap();

    let text = Reporter::default().render(&agents, &result).unwrap();

    assert!(text.contains("Total Tank Capacity (Units): 30"));
    assert!(text.contains("(6, 10, 15)"));
    assert!(text.contains("[warning] The combined efficiency is 0."));
    assert!(!text.contains("Time to"));
}

#[test]
fn text_report_for_emptying_tank() {
    let agents = [AgentSpec::outlet(10), AgentSpec::outlet(12), AgentSpec::inlet(15)];
    let result = evaluate(&agents).unwrap();

    let text = Reporter::default().render(&agents, &result).unwrap();

    assert!(text.contains("Pipe C Efficiency (Units/hour): 4 (Fills)"));
    assert!(text.contains("[error] Combined efficiency is -7 units/hour. The tank will empty."));
    assert!(text.contains("Time to Empty the Tank (All Pipes Open): 8.57 hours"));
}

#[test]
fn json_report_is_structured() {
    let agents = [AgentSpec::outlet(10), AgentSpec::outlet(12), AgentSpec::inlet(15)];
    let result = evaluate(&agents).unwrap();

    let json = Reporter::new(ReportFormat::Json).render(&agents, &result).unwrap();
    let value: serde_json::Value = serde_json::from_str(&json).unwrap();

    assert_eq!(value["capacity"], 60);
    assert_eq!(value["combined_efficiency"], -7);
    assert_eq!(value["outcome"], "emptying");
    assert_eq!(value["completion_time"], 8.57);
    assert_eq!(value["completion_time_exact"], "60/7");
    assert_eq!(value["pipes"][0]["kind"], "outlet");
    assert_eq!(value["pipes"][0]["direction"], "Empties");
    assert_eq!(value["narrative"]["severity"], "error");
}

#[test]
fn json_report_for_stall_has_null_time() {
    let agents = [AgentSpec::inlet(6), AgentSpec::outlet(10), AgentSpec::outlet(15)];
    let result = evaluate(&agents).unwrap();

    let json = Reporter::new(ReportFormat::Json).render(&agents, &result).unwrap();
    let value: serde_json::Value = serde_json::from_str(&json).unwrap();

    assert!(value["completion_time"].is_null());
    assert_eq!(value["outcome"], "stalled");
    assert_eq!(value["narrative"]["severity"], "warning");
}

#[test]
fn yaml_report_contains_outcome() {
    let agents = [AgentSpec::inlet(10), AgentSpec::inlet(12), AgentSpec::inlet(15)];
    let result = evaluate(&agents).unwrap();

    let yaml = Reporter::new(ReportFormat::Yaml).render(&agents, &result).unwrap();

    assert!(yaml.contains("capacity: 60"));
    assert!(yaml.contains("outcome: filling"));
}

#[test]
fn precision_and_unit_come_from_config() {
    let agents = [AgentSpec::outlet(10), AgentSpec::outlet(12), AgentSpec::inlet(15)];
    let result = evaluate(&agents).unwrap();
    let config = ReportConfig {
        format: ReportFormat::Text,
        precision: 4,
        time_unit: "minute".to_string(),
    };

    let text = Reporter::from_config(&config).render(&agents, &result).unwrap();

    assert!(text.contains("Units/minute"));
    assert!(text.contains("8.5714 minutes"));
}

#[test]
fn narrative_severity_tracks_outcome() {
    let filling = evaluate(&[AgentSpec::inlet(3)]).unwrap();
    let emptying = evaluate(&[AgentSpec::outlet(3)]).unwrap();

    assert_eq!(Narrative::new(&filling, 2, "hour").severity, Severity::Success);
    assert_eq!(Narrative::new(&emptying, 2, "hour").severity, Severity::Error);
}

#[test]
fn rejection_without_agent() {
    let message = Reporter::default().render_rejection(&EngineError::invalid("at least one agent is required"));
    assert_eq!(
        message,
        "Invalid input: at least one agent is required. No calculation was performed."
    );
}
