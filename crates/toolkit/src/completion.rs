//! Snippet-based code completion.
//!
//! Completion is a literal lookup against a fixed snippet table: a snippet is
//! suggested when its trigger is a prefix of the typed text. Placeholders in
//! snippet bodies (`{cursor}`, `{ClassName}`, ...) are plain text; nothing
//! expands them.

use agent_toolkit_core::{DEFAULT_COMPLETION_LANGUAGE, ToolkitConfig};
use serde::{Deserialize, Serialize};

/// A snippet template and the prefix that triggers it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Snippet {
    /// Prefix that activates the snippet
    pub trigger: &'static str,
    /// Template text with literal placeholders
    pub body: &'static str,
}

/// Python snippets, in suggestion order.
pub static PYTHON_SNIPPETS: [Snippet; 4] = [
    Snippet {
        trigger: "fprint",
        body: "print(f\"{text}\")",
    },
    Snippet {
        trigger: "fmain",
        body: r#"
def main():
    {cursor}

if __name__ == "__main__":
    main()
"#,
    },
    Snippet {
        trigger: "fclass",
        body: r"
class {ClassName}:
    '''{ClassName}'''

    def __init__(self):
        self.{cursor} = None

    def {method}(self):
        pass
",
    },
    Snippet {
        trigger: "ftry",
        body: r"
try:
    {cursor}
except {Exception}:
    raise
finally:
    pass
",
    },
];

/// Editing context for context-aware suggestions.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CompletionContext {
    /// Name of the function being edited
    pub function_name: String,
    /// Parameters of the function being edited (accepted, not consulted)
    pub parameters: Vec<serde_json::Value>,
}

impl CompletionContext {
    /// Creates a context for the named function with no parameters.
    #[must_use]
    pub fn for_function(function_name: impl Into<String>) -> Self {
        Self {
            function_name: function_name.into(),
            parameters: Vec::new(),
        }
    }
}

/// Suggests snippets for a single supported language.
///
/// # Examples
///
/// ```
/// use agent_toolkit::completion::CodeCompletionAssistant;
///
/// let assistant = CodeCompletionAssistant::new();
/// let suggestions = assistant.suggest_completion("fmaintest", "python");
/// assert_eq!(suggestions.len(), 1);
/// assert!(suggestions[0].contains("def main():"));
///
/// assert!(assistant.suggest_completion("xyz", "python").is_empty());
/// ```
#[derive(Debug, Clone)]
pub struct CodeCompletionAssistant {
    language: String,
}

impl Default for CodeCompletionAssistant {
    fn default() -> Self {
        Self {
            language: DEFAULT_COMPLETION_LANGUAGE.to_string(),
        }
    }
}

impl CodeCompletionAssistant {
    /// Creates an assistant for the default language (`python`).
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an assistant for the configured language.
    #[must_use]
    pub fn with_config(config: &ToolkitConfig) -> Self {
        Self {
            language: config.completion_language.clone(),
        }
    }

    /// Returns the language this assistant recognizes.
    #[must_use]
    pub fn language(&self) -> &str {
        &self.language
    }

    /// Returns the snippets this assistant draws from.
    #[must_use]
    pub fn snippets(&self) -> &'static [Snippet] {
        &PYTHON_SNIPPETS
    }

    /// Looks up a snippet by its exact trigger.
    #[must_use]
    pub fn snippet(&self, trigger: &str) -> Option<&'static Snippet> {
        PYTHON_SNIPPETS.iter().find(|s| s.trigger == trigger)
    }

    /// Suggests snippet bodies whose trigger is a prefix of `prefix`.
    ///
    /// Returns nothing when `language` differs (case-insensitively) from the
    /// supported language.
    #[must_use]
    pub fn suggest_completion(&self, prefix: &str, language: &str) -> Vec<&'static str> {
        if language.to_lowercase() != self.language.to_lowercase() {
            return Vec::new();
        }

        PYTHON_SNIPPETS
            .iter()
            .filter(|snippet| prefix.starts_with(snippet.trigger))
            .map(|snippet| snippet.body)
            .collect()
    }

    /// Picks a snippet from the function being edited.
    ///
    /// A function name containing `main` gets the main-function snippet,
    /// otherwise one containing `class` gets the class skeleton, otherwise
    /// the suggestion is empty.
    #[must_use]
    pub fn generate_context_aware_suggestion(&self, context: &CompletionContext) -> &'static str {
        let trigger = if context.function_name.contains("main") {
            "fmain"
        } else if context.function_name.contains("class") {
            "fclass"
        } else {
            return "";
        };

        self.snippet(trigger).map_or("", |snippet| snippet.body)
    }
}
