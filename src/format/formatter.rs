use crate::binder::{BindingSource, BoundCall};
use crate::signature::AlgorithmSignature;

/// Formats bound calls and signatures into human-readable strings
pub struct CallFormatter;

impl CallFormatter {
    /// Format a bound call as `Name(arg=value, ...)` in declaration order.
    pub fn format_call(call: &BoundCall) -> String {
        Self::format_with(call, false)
    }

    /// Like [`format_call`](Self::format_call), but marks arguments that fell back to their default.
    pub fn format_verbose(call: &BoundCall) -> String {
        Self::format_with(call, true)
    }

    fn format_with(call: &BoundCall, mark_defaults: bool) -> String {
        let arguments: Vec<String> = call
            .arguments
            .iter()
            .map(|argument| {
                if mark_defaults && argument.source == BindingSource::Default {
                    format!("{}={} (default)", argument.name, argument.value)
                } else {
                    format!("{}={}", argument.name, argument.value)
                }
            })
            .collect();
        format!("{}({})", call.algorithm, arguments.join(", "))
    }

    /// Multi-line summary of a signature: header, flags, then one line per parameter.
    pub fn describe(signature: &AlgorithmSignature) -> String {
        let mut lines = vec![format!(
            "{}({}) -> {}",
            signature.name,
            signature
                .parameters
                .iter()
                .map(|p| if p.optional {
                    format!("{}?", p.name)
                } else {
                    p.name.clone()
                })
                .collect::<Vec<_>>()
                .join(", "),
            Self::or_unknown(&signature.return_type)
        )];

        if !signature.description.is_empty() {
            lines.push(format!("  {}", signature.description));
        }
        if signature.is_hidden {
            lines.push("  [hidden]".to_string());
        }
        if let Some(guidance) = &signature.deprecated {
            if guidance.is_empty() {
                lines.push("  [deprecated]".to_string());
            } else {
                lines.push(format!("  [deprecated] {}", guidance));
            }
        }

        for parameter in &signature.parameters {
            let mut line = format!(
                "  - {}: {}",
                parameter.name,
                Self::or_unknown(&parameter.type_name)
            );
            if parameter.optional {
                line.push_str(&format!(" = {}", parameter.default));
            }
            if let Some(description) = &parameter.description {
                line.push_str(&format!("  # {}", description));
            }
            lines.push(line);
        }

        lines.join("\n")
    }

    fn or_unknown(type_name: &str) -> &str {
        if type_name.is_empty() { "Object" } else { type_name }
    }
}
