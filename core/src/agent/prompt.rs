use std::collections::BTreeMap;
use std::fmt::Write;

use crate::task::Task;

/// Fixed prompt layout of a specialist: a titled task line, the parameters
/// as key-ordered JSON, then a numbered list of required output sections.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PromptTemplate {
    pub title: &'static str,
    pub role: &'static str,
    pub sections: &'static [&'static str],
}

impl PromptTemplate {
    pub fn render(&self, task: &Task) -> String {
        let mut out = String::new();
        // Writing into a String cannot fail.
        let _ = writeln!(out, "{}: {}", self.title, task.description());
        let _ = writeln!(out, "Parameters: {}", render_parameters(task));
        let _ = writeln!(out);
        let _ = writeln!(out, "As a {}, provide:", self.role);
        for (i, section) in self.sections.iter().enumerate() {
            let _ = writeln!(out, "{}. {}", i + 1, section);
        }
        out
    }
}

fn render_parameters(task: &Task) -> String {
    let ordered: BTreeMap<&String, &serde_json::Value> = task.parameters().iter().collect();
    serde_json::to_string_pretty(&ordered).unwrap_or_else(|_| "{}".to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    const TEMPLATE: PromptTemplate = PromptTemplate {
        title: "Unit Task",
        role: "unit tester",
        sections: &["First", "Second"],
    };

    #[test]
    fn renders_numbered_sections() {
        let prompt = TEMPLATE.render(&Task::new("check things"));
        assert!(prompt.starts_with("Unit Task: check things\n"));
        assert!(prompt.contains("Parameters: {}\n"));
        assert!(prompt.contains("As a unit tester, provide:\n1. First\n2. Second\n"));
    }

    #[test]
    fn parameters_are_key_ordered() {
        let a = Task::new("t")
            .with_parameter("zeta", 1)
            .with_parameter("alpha", json!({"b": 2, "a": 1}));
        let b = Task::new("t")
            .with_parameter("alpha", json!({"a": 1, "b": 2}))
            .with_parameter("zeta", 1);
        let pa = TEMPLATE.render(&a);
        assert_eq!(pa, TEMPLATE.render(&b));
        assert!(pa.find("\"alpha\"").unwrap() < pa.find("\"zeta\"").unwrap());
    }
}
