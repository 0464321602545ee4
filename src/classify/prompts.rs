//! Instruction templates for email classification

use serde::{Deserialize, Serialize};

/// Substitution point for the raw email text. Each template holds it exactly once.
pub const EMAIL_PLACEHOLDER: &str = "{email}";

const SPAM_NON_SPAM: &str = r#"
As an expert spam email classifier, analyze the email below and categorize it as either SPAM or NON-SPAM. After evaluating it, write a comprehensive yet concise report that explains the classification outcome with proper justification. Also judge the sentiment of the email. Pick out the name of the sender and any other important customer details, if present. Finally, classify the intent of the email according to the issue it raises and state it in one line.

email: {email}
"#;

const GENUINE_FRAUD: &str = r#"
As an expert fraud email analyst, analyze the email below and categorize it as either GENUINE or FRAUD. After evaluating it, write a comprehensive yet concise report that explains the classification outcome with proper justification. Also judge the sentiment of the email. Pick out the name of the sender and any other important customer details, if present. Finally, classify the intent of the email according to the issue it raises and state it in one line.

email: {email}
"#;

/// Named instruction template the prompt builder is configured with
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "kebab-case")]
pub enum PromptTemplate {
    #[default]
    SpamNonSpam,
    GenuineFraud,
}

impl PromptTemplate {
    pub const ALL: [PromptTemplate; 2] = [PromptTemplate::SpamNonSpam, PromptTemplate::GenuineFraud];

    fn source(self) -> &'static str {
        match self {
            Self::SpamNonSpam => SPAM_NON_SPAM,
            Self::GenuineFraud => GENUINE_FRAUD,
        }
    }

    /// Short name shown in the form
    pub fn label(self) -> &'static str {
        match self {
            Self::SpamNonSpam => "Spam / Non-spam",
            Self::GenuineFraud => "Genuine / Fraud",
        }
    }

    pub fn next(self) -> Self {
        match self {
            Self::SpamNonSpam => Self::GenuineFraud,
            Self::GenuineFraud => Self::SpamNonSpam,
        }
    }

    /// Substitute `email_text` verbatim into the template.
    ///
    /// No trimming, escaping or length capping happens here; emptiness is
    /// checked by the caller before a request is built.
    pub fn build(self, email_text: &str) -> String {
        let template = self.source();
        match template.split_once(EMAIL_PLACEHOLDER) {
            Some((before, after)) => {
                let mut prompt =
                    String::with_capacity(before.len() + email_text.len() + after.len());
                prompt.push_str(before);
                prompt.push_str(email_text);
                prompt.push_str(after);
                prompt
            }
            // Unreachable for the built-in templates
            None => format!("{template}{email_text}"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_template_has_one_placeholder() {
        for template in PromptTemplate::ALL {
            assert_eq!(template.source().matches(EMAIL_PLACEHOLDER).count(), 1);
        }
    }

    #[test]
    fn test_build_contains_email_once() {
        let email = "Please send your CVV to claim the prize";
        let prompt = PromptTemplate::SpamNonSpam.build(email);
        assert_eq!(prompt.matches(email).count(), 1);
        assert!(!prompt.contains(EMAIL_PLACEHOLDER));
    }

    #[test]
    fn test_build_is_verbatim() {
        let email = "  <b>Hi</b> \"quoted\" \\ {braces}\n\n";
        let prompt = PromptTemplate::GenuineFraud.build(email);
        assert!(prompt.contains(email));
    }

    #[test]
    fn test_placeholder_inside_email_is_not_expanded_again() {
        let prompt = PromptTemplate::SpamNonSpam.build("literal {email} text");
        assert_eq!(prompt.matches("literal {email} text").count(), 1);
    }

    #[test]
    fn test_distinct_emails_differ_only_in_substituted_region() {
        let a = PromptTemplate::SpamNonSpam.build("A");
        let b = PromptTemplate::SpamNonSpam.build("B");
        assert_ne!(a, b);
        assert_eq!(a.len(), b.len());

        let diffs: Vec<usize> = a
            .bytes()
            .zip(b.bytes())
            .enumerate()
            .filter(|(_, (x, y))| x != y)
            .map(|(i, _)| i)
            .collect();
        assert_eq!(diffs.len(), 1);

        let (prefix, _) = SPAM_NON_SPAM.split_once(EMAIL_PLACEHOLDER).unwrap();
        assert_eq!(diffs[0], prefix.len());
    }

    #[test]
    fn test_templates_ask_for_the_report_items() {
        for template in PromptTemplate::ALL {
            let text = template.source().to_lowercase();
            assert!(text.contains("justification"));
            assert!(text.contains("sentiment"));
            assert!(text.contains("sender"));
            assert!(text.contains("one line"));
        }
        assert!(SPAM_NON_SPAM.contains("NON-SPAM"));
        assert!(GENUINE_FRAUD.contains("FRAUD"));
    }

    #[test]
    fn test_next_cycles() {
        assert_eq!(PromptTemplate::SpamNonSpam.next(), PromptTemplate::GenuineFraud);
        assert_eq!(PromptTemplate::GenuineFraud.next(), PromptTemplate::SpamNonSpam);
    }

    #[test]
    fn test_serde_names() {
        #[derive(Deserialize)]
        struct Wrapper {
            template: PromptTemplate,
        }
        let w: Wrapper = toml::from_str(r#"template = "genuine-fraud""#).unwrap();
        assert_eq!(w.template, PromptTemplate::GenuineFraud);
        let w: Wrapper = toml::from_str(r#"template = "spam-non-spam""#).unwrap();
        assert_eq!(w.template, PromptTemplate::SpamNonSpam);
    }
}
