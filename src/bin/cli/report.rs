use library_contract::{
    config::{ReportConfig, Styleable},
    contract::SCENARIOS,
    runner::{Failure, Report, ScenarioResult},
};

fn status(code: Option<u16>) -> String {
    code.map_or_else(|| "---".to_string(), |c| c.to_string())
}

fn format_result(result: &ScenarioResult, style: &ReportConfig) -> String {
    let verdict = match result.failure {
        None => "PASS".style(&style.style_pass),
        Some(Failure::Setup) => "SETUP".style(&style.style_setup),
        Some(Failure::Contract) => "FAIL".style(&style.style_fail),
    };
    let mut line = format!(
        "{verdict} {} expected {} got {} {}",
        result.scenario.name().style(&style.style_scenario),
        result.expected,
        status(result.actual),
        format!("({}ms)", result.elapsed_ms).style(&style.style_detail),
    );
    if let Some(error) = &result.error {
        line.push_str(&format!("\n     {}", error.style(&style.style_detail)));
    }
    line
}

pub fn print_report(report: &Report, style: &ReportConfig) {
    println!(
        "{}",
        format!("Checking {} (run {})", report.base_url, report.run_tag).style(&style.style_detail)
    );
    for result in &report.results {
        println!("{}", format_result(result, style));
    }
    let summary = report.summary();
    if report.is_success() {
        println!("{}", summary.style(&style.style_pass));
    } else {
        println!("{}", summary.style(&style.style_fail));
    }
}

pub fn print_scenarios() {
    for scenario in SCENARIOS {
        let request = match scenario.request(Default::default(), Default::default()) {
            Ok(request) => request.to_string(),
            Err(e) => format!("<{e}>"),
        };
        println!(
            "{:<40} {:<80} {} ({})",
            scenario.name(),
            request,
            scenario.expected_status(),
            scenario.precondition()
        );
    }
}
