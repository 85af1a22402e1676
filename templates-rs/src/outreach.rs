//! The outreach email template
//!
//! One cold-outreach email body with three substitution points. The tokens
//! are filled in by the drafting step (see [`crate::prompts`]) or by any
//! plain string replacement; nothing here performs the substitution.

use crate::types::{EmailTemplate, Placeholder};

/// Raw body of the outreach email.
///
/// Contains exactly one occurrence of each of `{name_field}`,
/// `{latest_firm_name}`, and `{user_field}`, and no other `{...}` tokens.
pub const EMAIL_TEMPLATE: &str = "Hi {name_field},

I hope this email finds you well.

I found your profile on LinkedIn and I would very much like to learn more about your background. With that said, I would appreciate the opportunity to learn more about your time in the industry, specifically at {latest_firm_name}.

Please let me know if you would like to have a quick chat in the coming weeks. I'd be happy to work around your schedule.

Kind regards,
{user_field}";

/// The outreach email template together with its placeholder contract.
pub const OUTREACH_EMAIL: EmailTemplate = EmailTemplate {
    id: "outreach_email",
    body: EMAIL_TEMPLATE,
    placeholders: &[
        Placeholder {
            name: "name_field",
            description: "First name of the candidate profile",
        },
        Placeholder {
            name: "latest_firm_name",
            description: "Most recent firm on the candidate profile, in its \
                          casual form (\"CIBC\", not \"CIBC Capital Markets\")",
        },
        Placeholder {
            name: "user_field",
            description: "First name of the user sending the outreach",
        },
    ],
};

#[cfg(test)]
mod tests {
    use super::*;
    use regex::Regex;
    use std::collections::BTreeSet;

    #[test]
    fn test_body_is_non_empty() {
        assert!(!EMAIL_TEMPLATE.is_empty());
        assert_eq!(OUTREACH_EMAIL.body, EMAIL_TEMPLATE);
    }

    #[test]
    fn test_each_placeholder_appears_exactly_once() {
        for placeholder in OUTREACH_EMAIL.placeholders {
            let token = format!("{{{}}}", placeholder.name);
            let count = EMAIL_TEMPLATE.matches(&token).count();
            assert_eq!(count, 1, "token {token} appears {count} times");
        }
    }

    #[test]
    fn test_no_undocumented_tokens_in_body() {
        let token_re = Regex::new(r"\{([^{}]*)\}").unwrap();
        let scanned: BTreeSet<&str> = token_re
            .captures_iter(EMAIL_TEMPLATE)
            .map(|c| c.get(1).unwrap().as_str())
            .collect();
        let documented: BTreeSet<&str> = OUTREACH_EMAIL.placeholder_names().collect();
        assert_eq!(scanned, documented);
    }

    #[test]
    fn test_placeholder_lookup() {
        assert!(OUTREACH_EMAIL.has_placeholder("name_field"));
        assert!(OUTREACH_EMAIL.has_placeholder("latest_firm_name"));
        assert!(OUTREACH_EMAIL.has_placeholder("user_field"));
        assert!(!OUTREACH_EMAIL.has_placeholder("personalization_field"));
    }
}
