/// Instruction prepended to every set of meeting notes sent to the model.
pub const SUMMARY_INSTRUCTION: &str =
    "Summarize the following meeting notes concisely, focusing on key decisions and action items:";

/// Separator between the instruction and the notes (one blank line).
pub const PROMPT_SEPARATOR: &str = "\n\n";

/// Builds the outbound prompt. The notes are passed through verbatim,
/// with no truncation or escaping.
#[must_use]
pub fn build_prompt(text: &str) -> String {
    let mut prompt =
        String::with_capacity(SUMMARY_INSTRUCTION.len() + PROMPT_SEPARATOR.len() + text.len());
    prompt.push_str(SUMMARY_INSTRUCTION);
    prompt.push_str(PROMPT_SEPARATOR);
    prompt.push_str(text);
    prompt
}
