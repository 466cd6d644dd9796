use crate::router::Route;

/// A static policy page: title, verbatim body and an optional link to
/// another policy.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct LegalDocument {
    pub title: &'static str,
    pub body: &'static str,
    pub cross_link: Option<CrossLink>,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CrossLink {
    pub label: &'static str,
    pub to: Route,
}

impl LegalDocument {
    /// `None` for the home page.
    pub fn for_route(route: Route) -> Option<LegalDocument> {
        let document = match route {
            Route::Home => return None,
            Route::Privacy => LegalDocument {
                title: "Privacy Policy",
                body: PRIVACY_POLICY,
                cross_link: Some(CrossLink {
                    label: "Child Safety Standards Policy",
                    to: Route::ChildSafety,
                }),
            },
            Route::Terms => LegalDocument {
                title: "Terms of Service",
                body: TERMS_OF_SERVICE,
                cross_link: None,
            },
            Route::Cookies => LegalDocument {
                title: "Cookie Policy",
                body: COOKIE_POLICY,
                cross_link: None,
            },
            Route::ChildSafety => LegalDocument {
                title: "Child Safety Standards Policy",
                body: CHILD_SAFETY_POLICY,
                cross_link: None,
            },
        };
        Some(document)
    }
}

pub const PRIVACY_POLICY: &str = r#"Privacy Policy

Last updated: January 2025

1. Information We Collect
We collect information you provide directly to us, such as when you create an account, subscribe to our newsletter, or contact us for support.

2. How We Use Your Information
- To provide and maintain our services
- To notify you about changes to our services
- To provide customer support
- To monitor usage and improve our services

3. Information Sharing
We do not sell, trade, or rent your personal information to third parties without your consent.

4. Data Security
We implement appropriate security measures to protect your personal information against unauthorized access, alteration, disclosure, or destruction.

5. Your Rights
You have the right to access, update, or delete your personal information. Contact us at privacy@fundr.com for any requests.

6. Contact Us
If you have questions about this Privacy Policy, please contact us at info@fundr.com"#;

pub const TERMS_OF_SERVICE: &str = r#"Terms of Service

Last updated: January 2025

1. Acceptance of Terms
By accessing and using Fundr, you accept and agree to be bound by the terms and provision of this agreement.

2. Description of Service
Fundr is a platform that connects startup founders with investors through video pitches and data-driven profiles.

3. User Accounts
- You must be at least 18 years old to use our service
- You are responsible for maintaining the security of your account
- You agree to provide accurate and complete information

4. Prohibited Uses
You may not use our service:
- For any unlawful purpose or to solicit others to unlawful acts
- To violate any international, federal, provincial, or state regulations, rules, laws, or local ordinances
- To transmit or procure the sending of any advertising or promotional material

5. Limitation of Liability
Fundr shall not be liable for any indirect, incidental, special, consequential, or punitive damages.

6. Termination
We may terminate or suspend your account immediately, without prior notice, for conduct that we believe violates these Terms.

Contact us at legal@fundr.com for any questions regarding these terms."#;

pub const COOKIE_POLICY: &str = r#"Cookie Policy

Last updated: January 2025

1. What Are Cookies
Cookies are small text files that are placed on your computer by websites that you visit. They are widely used to make websites work more efficiently.

2. How We Use Cookies
We use cookies for the following purposes:
- Essential cookies: Required for the website to function properly
- Analytics cookies: Help us understand how visitors interact with our website
- Functional cookies: Remember your preferences and settings

3. Types of Cookies We Use
- Session cookies: Temporary cookies that expire when you close your browser
- Persistent cookies: Remain on your device for a set period or until deleted

4. Managing Cookies
You can control and/or delete cookies as you wish. You can delete all cookies that are already on your computer and set most browsers to prevent them from being placed.

5. Third-Party Cookies
We may use third-party services like Google Analytics that place cookies on your device.

For more information about our cookie practices, contact us at cookies@fundr.com"#;

pub const CHILD_SAFETY_POLICY: &str = r#"Child Safety and Protection Policy

Effective Date: August 2025
Last Updated: August 2025

Our Commitment to Child Safety

Fundr is committed to providing a safe environment for all users, especially children. We have zero tolerance for content or behavior that exploits, harms, or endangers children.

Prohibited Content and Activities

We strictly prohibit:
- Child sexual abuse material (CSAM)
- Content that sexualizes minors
- Grooming behavior or predatory conduct
- Content that facilitates child exploitation
- Inappropriate interactions between adults and minors
- Content that could endanger child safety or welfare

Safety Measures

Content Moderation
- All user-generated content is subject to review
- Automated detection systems for inappropriate content
- Human moderation for reported content
- Immediate removal of violating content

User Protection
- Age verification processes where applicable
- Parental controls and supervision features
- Clear reporting mechanisms for users
- Privacy protection for minor users

Account Management
- Immediate suspension of accounts violating child safety
- Cooperation with law enforcement when required
- Regular security audits and updates

Reporting Mechanisms

Users can report concerns through:
- In-app reporting feature within Fundr
- Email: official.fundr@gmail.com
- Direct contact through Fundr app support

Cooperation with Authorities

We fully cooperate with:
- Law enforcement agencies
- National Center for Missing & Exploited Children (NCMEC)
- Other relevant child protection organizations

Regular Review

This policy is reviewed and updated regularly to ensure continued effectiveness in protecting children.

Contact Information

For questions about this policy:
- Email: official.fundr@gmail.com
- App: Fundr (com.fundrnetwork.fundr)

This policy demonstrates our unwavering commitment to child safety and our proactive approach to preventing child sexual abuse and exploitation."#;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn home_has_no_document() {
        assert_eq!(LegalDocument::for_route(Route::Home), None);
    }

    #[test]
    fn every_legal_route_has_a_titled_document() {
        for route in Route::ALL.into_iter().filter(|r| r.is_legal()) {
            let document = LegalDocument::for_route(route).unwrap();
            assert!(document.body.starts_with(document.title.split(' ').next().unwrap()));
        }
    }

    #[test]
    fn terms_render_the_literal_text() {
        let document = LegalDocument::for_route(Route::Terms).unwrap();
        assert_eq!(document.title, "Terms of Service");
        assert_eq!(document.body, TERMS_OF_SERVICE);
        assert!(document
            .body
            .contains("Contact us at legal@fundr.com for any questions regarding these terms."));
    }

    #[test]
    fn only_privacy_links_to_child_safety() {
        let privacy = LegalDocument::for_route(Route::Privacy).unwrap();
        assert_eq!(privacy.cross_link.map(|link| link.to), Some(Route::ChildSafety));

        for route in [Route::Terms, Route::Cookies, Route::ChildSafety] {
            assert_eq!(LegalDocument::for_route(route).unwrap().cross_link, None);
        }
    }

    #[test]
    fn bodies_keep_their_line_structure() {
        assert!(PRIVACY_POLICY.contains("2. How We Use Your Information\n- To provide and maintain our services"));
        assert!(CHILD_SAFETY_POLICY.contains("\n\nSafety Measures\n\nContent Moderation\n"));
    }
}
