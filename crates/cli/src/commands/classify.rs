use crate::commands::CommandResult;
use greenlane_core::classify;

pub fn run(title: &str) -> CommandResult {
    if title.trim().is_empty() {
        return CommandResult::failure("classify", "invalid_input", "title must not be empty", 2);
    }

    CommandResult { exit_code: 0, output: classify(title).to_string() }
}

#[cfg(test)]
mod tests {
    use super::run;

    #[test]
    fn prints_bare_category_label() {
        let result = run("Yoga mat with strap");

        assert_eq!(result.exit_code, 0);
        assert_eq!(result.output, "sports");
    }

    #[test]
    fn blank_title_is_rejected() {
        let result = run("  ");

        assert_eq!(result.exit_code, 2);
        assert!(result.output.contains("\"error_class\":\"invalid_input\""));
    }
}
