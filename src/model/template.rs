//! Path template scanning

use once_cell::sync::Lazy;
use regex::Regex;

static PATH_PARAM_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\{([^{}/]+)\}").expect("path parameter regex is valid"));

/// Whether a path template could reference any path parameters at all.
pub fn can_have_path_params(template: &str) -> bool {
    template.contains('{')
}

/// Names of the `{name}` tokens in `template`, in order of first appearance.
///
/// Unbalanced or empty braces contribute nothing. A name repeated in the
/// template is reported once.
///
/// # Examples
/// ```
/// use pathparams::model::detect_path_param_names;
///
/// assert_eq!(
///     detect_path_param_names("/users/{id}/orders/{orderId}"),
///     vec!["id", "orderId"]
/// );
/// assert!(detect_path_param_names("/users/{id").is_empty());
/// ```
pub fn detect_path_param_names(template: &str) -> Vec<&str> {
    let mut names: Vec<&str> = Vec::new();
    for capture in PATH_PARAM_RE.captures_iter(template) {
        if let Some(name) = capture.get(1).map(|m| m.as_str()) {
            if !names.contains(&name) {
                names.push(name);
            }
        }
    }
    names
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_can_have_path_params() {
        assert!(can_have_path_params("/users/{id}"));
        assert!(!can_have_path_params("/users"));
        assert!(!can_have_path_params(""));
    }

    #[test]
    fn test_detects_names_in_order() {
        assert_eq!(
            detect_path_param_names("/a/{x}/b/{y}/c/{z}"),
            vec!["x", "y", "z"]
        );
    }

    #[test]
    fn test_tokens_inside_a_segment() {
        assert_eq!(
            detect_path_param_names("/files/{name}.{ext}"),
            vec!["name", "ext"]
        );
    }

    #[test]
    fn test_no_tokens() {
        assert!(detect_path_param_names("/users").is_empty());
        assert!(detect_path_param_names("/").is_empty());
    }

    #[test]
    fn test_malformed_templates_degrade_gracefully() {
        assert!(detect_path_param_names("/users/{id").is_empty());
        assert!(detect_path_param_names("/users/id}").is_empty());
        assert!(detect_path_param_names("/users/{}").is_empty());
        assert_eq!(detect_path_param_names("/a/{{x}/{y"), vec!["x"]);
    }

    #[test]
    fn test_repeated_names_collapse() {
        assert_eq!(detect_path_param_names("/{id}/copy/{id}"), vec!["id"]);
    }
}
