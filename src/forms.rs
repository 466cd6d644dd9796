use std::fmt;

/// The two capture inputs on the home page.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FormSlot {
    Hero,
    Footer,
}

/// Where a submission came from. Sent along in the mail body.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Origin {
    Hero,
    Footer,
    PremiumAccess,
}

impl Origin {
    pub fn label(self) -> &'static str {
        match self {
            Origin::Hero => "Hero Section",
            Origin::Footer => "Footer Section",
            Origin::PremiumAccess => "Premium Access",
        }
    }

    /// The premium access button submits whatever is in the hero input.
    pub fn form(self) -> FormSlot {
        match self {
            Origin::Hero | Origin::PremiumAccess => FormSlot::Hero,
            Origin::Footer => FormSlot::Footer,
        }
    }

    pub fn acknowledgment(self) -> &'static str {
        match self {
            Origin::Hero | Origin::Footer => "Thank you! Your request has been sent.",
            Origin::PremiumAccess => "Thank you! Your premium access request has been sent.",
        }
    }
}

impl fmt::Display for Origin {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct EmailForm {
    pub value: String,
    pub error: bool,
}

impl EmailForm {
    /// Any keystroke clears a previous validation error.
    pub fn input(&mut self, value: String) {
        self.value = value;
        self.error = false;
    }

    pub fn reject(&mut self) {
        self.error = true;
    }

    pub fn reset(&mut self) {
        self.value.clear();
        self.error = false;
    }
}

// Intentionally loose: "a@@..b" passes.
pub fn is_valid_email(value: &str) -> bool {
    !value.is_empty() && value.contains('@') && value.contains('.')
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_anything_with_an_at_and_a_dot() {
        assert!(is_valid_email("a@b.c"));
        assert!(is_valid_email("founder@startup.io"));
        assert!(is_valid_email("a@@b..c"));
        assert!(is_valid_email("a@@..b"));
        assert!(is_valid_email(".@"));
    }

    #[test]
    fn rejects_missing_parts() {
        assert!(!is_valid_email(""));
        assert!(!is_valid_email("no-at-sign.com"));
        assert!(!is_valid_email("missing-dot@domain"));
        assert!(!is_valid_email("plain"));
    }

    #[test]
    fn input_clears_the_error_flag() {
        let mut form = EmailForm::default();
        form.reject();
        assert!(form.error);

        form.input("a".to_string());
        assert!(!form.error);
        assert_eq!(form.value, "a");
    }

    #[test]
    fn premium_access_shares_the_hero_form() {
        assert_eq!(Origin::PremiumAccess.form(), FormSlot::Hero);
        assert_eq!(Origin::Hero.form(), FormSlot::Hero);
        assert_eq!(Origin::Footer.form(), FormSlot::Footer);
    }
}
