use dialoguer::Select;

use crate::error::Result;

/// Let the user pick one of several suggested dish names.
///
/// Returns `None` when the user picks "None of these".
pub fn prompt_suggestion(suggestions: &[String]) -> Result<Option<String>> {
    if suggestions.is_empty() {
        return Ok(None);
    }

    let mut options = suggestions.to_vec();
    options.push("None of these".to_string());

    let selection = Select::new()
        .with_prompt("Which did you mean?")
        .items(&options)
        .default(0)
        .interact()?;

    Ok(suggestions.get(selection).cloned())
}
