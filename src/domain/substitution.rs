//! Literal placeholder substitution for site templates.
//!
//! Tokens are plain markers (e.g. `{{GITHUB}}`) replaced verbatim. There are no
//! loops, conditionals or escaping rules, and a token missing from a template is
//! simply left alone.

/// Placeholder tokens recognized in site templates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Token {
    BuildId,
    BuildDate,
    SiteUrl,
    Github,
    Linkedin,
    Youtube,
    X,
    Certificates,
}

impl Token {
    pub const ALL: [Token; 8] = [
        Token::BuildId,
        Token::BuildDate,
        Token::SiteUrl,
        Token::Github,
        Token::Linkedin,
        Token::Youtube,
        Token::X,
        Token::Certificates,
    ];

    /// Marker text as it appears inside a template.
    pub fn marker(self) -> &'static str {
        match self {
            Token::BuildId => "{{BUILD_ID}}",
            Token::BuildDate => "{{BUILD_DATE}}",
            Token::SiteUrl => "{{SITE_URL}}",
            Token::Github => "{{GITHUB}}",
            Token::Linkedin => "{{LINKEDIN}}",
            Token::Youtube => "{{YOUTUBE}}",
            Token::X => "{{X}}",
            Token::Certificates => "{{CERTS}}",
        }
    }
}

/// Replace every occurrence of each token's marker with its value.
pub fn substitute(template: &str, values: &[(Token, &str)]) -> String {
    values
        .iter()
        .fold(template.to_string(), |text, (token, value)| text.replace(token.marker(), value))
}
