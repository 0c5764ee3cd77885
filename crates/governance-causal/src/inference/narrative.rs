//! Reasoning-chain templates attached to inference results.

pub fn forward(source: &str, value: &str, target: Option<&str>) -> Vec<String> {
    match target {
        Some(target) => vec![
            format!("Given: {source} = {value}"),
            "Finding: Likely effects through causal pathways".to_string(),
            format!("Result: {target} is most likely affected"),
            format!("Reasoning: Variable {source} causally influences {target}"),
        ],
        None => vec![
            format!("Given: {source} = {value}"),
            "Finding: Likely effects through causal pathways".to_string(),
            format!("Result: {source} has no downstream effects"),
        ],
    }
}

pub fn backward(cause: Option<&str>, target: &str, value: &str) -> Vec<String> {
    match cause {
        Some(cause) => vec![
            format!("Observed: {target} = {value}"),
            "Finding: Causal origins".to_string(),
            format!("Result: {cause} is most likely cause"),
            "Reasoning: Backward tracing through causal graph".to_string(),
        ],
        None => vec![
            format!("Observed: {target} = {value}"),
            "Finding: Causal origins".to_string(),
            "Result: No clear causal origin found (may be external shock)".to_string(),
        ],
    }
}

pub fn intervention(variable: &str, value: &str, affected: Option<(&str, &str)>) -> Vec<String> {
    let result = match affected {
        Some((target, target_value)) => format!("Result: {target} would likely be {target_value}"),
        None => format!("Result: no variable depends on {variable}"),
    };
    vec![
        format!("Intervention: Changing {variable} to {value}"),
        "Finding: Effects on dependent variables".to_string(),
        result,
        "Reasoning: Forward propagation through causal graph".to_string(),
    ]
}

pub fn counterfactual_marker(actual: &str, alternative: &str) -> String {
    format!("COUNTERFACTUAL: If we had chosen '{alternative}' instead of '{actual}'")
}
