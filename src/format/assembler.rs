//! Assembles one markdown document per component from its per-doc-type files.

use crate::types::{DocEntry, Framework};

/// Document contents gathered for one entry.
///
/// `None` means "leave the section out": the caller sets a field only when the
/// entry advertises the doc type, the caller asked for it, and the file was
/// actually readable.
#[derive(Debug, Clone, Default)]
pub struct DocSources {
    pub primary: Option<String>,
    pub api: Option<String>,
    pub guidelines: Option<String>,
    pub instructions: Option<String>,
}

/// Render the full documentation for `entry` targeting `framework`.
///
/// Sections, in order: title and framework banner, primary document, API
/// reference (angular/react only), design guidelines, usage instructions, and
/// a hint naming the other frameworks. Absent sections leave no separator.
pub fn assemble_component_docs(entry: &DocEntry, framework: Framework, sources: &DocSources) -> String {
    let label = framework.label();
    let mut lines: Vec<String> = vec![format!("# {} - {}", entry.tag_name, label), String::new()];

    if framework.is_framework_specific() {
        lines.push(format!("⚠️ **{}-Specific Documentation**", label));
        lines.push(format!(
            "The import paths and syntax below are for {} applications.",
            label
        ));
        lines.push(String::new());
    }

    if let Some(primary) = &sources.primary {
        lines.push(strip_title(primary).to_string());
        lines.push(String::new());
    }

    if framework.is_framework_specific()
        && let Some(api) = &sources.api
    {
        push_section(&mut lines, "Component API Reference");
        lines.push("The following properties, events, slots, and methods are available:".to_string());
        lines.push(String::new());
        lines.push(strip_api_header(api));
        lines.push(String::new());
    }

    if let Some(guidelines) = &sources.guidelines {
        push_section(&mut lines, "Design Guidelines");
        lines.push(guidelines.clone());
        lines.push(String::new());
    }

    if let Some(instructions) = &sources.instructions {
        push_section(&mut lines, "Usage Instructions");
        lines.push(instructions.clone());
        lines.push(String::new());
    }

    lines.push("---".to_string());
    lines.push(String::new());
    lines.push("💡 **Using a different framework?**".to_string());
    lines.push("Call this tool again with:".to_string());
    lines.extend(
        Framework::ALL
            .into_iter()
            .filter(|other| *other != framework)
            .map(framework_hint),
    );

    lines.join("\n")
}

fn push_section(lines: &mut Vec<String>, heading: &str) {
    lines.push("---".to_string());
    lines.push(String::new());
    lines.push(format!("## {}", heading));
    lines.push(String::new());
}

fn framework_hint(framework: Framework) -> String {
    let purpose = match framework {
        Framework::Angular => "for Angular documentation",
        Framework::React => "for React documentation",
        Framework::WebComponent => "for vanilla JS usage",
    };
    format!("- `framework: \"{}\"` {}", framework.as_str(), purpose)
}

/// Drop a leading `# Title` line; the assembled document supplies its own.
fn strip_title(content: &str) -> &str {
    let is_heading = content
        .strip_prefix('#')
        .and_then(|rest| rest.chars().next())
        .is_some_and(char::is_whitespace);
    if !is_heading {
        return content;
    }
    content.split_once('\n').map_or(content, |(_, rest)| rest)
}

/// API content minus its title and the first `**Class**:` and `**Tag**:` lines,
/// which repeat what the heading already says.
fn strip_api_header(api: &str) -> String {
    let body = strip_title(api);
    let body = remove_first_line_containing(body, "**Class**:");
    let body = remove_first_line_containing(&body, "**Tag**:");
    body.trim().to_string()
}

/// Remove from the first occurrence of `marker` through the end of its line.
fn remove_first_line_containing(text: &str, marker: &str) -> String {
    let Some(start) = text.find(marker) else {
        return text.to_string();
    };
    match text[start..].find('\n') {
        Some(offset) => format!("{}{}", &text[..start], &text[start + offset + 1..]),
        None => text.to_string(),
    }
}
