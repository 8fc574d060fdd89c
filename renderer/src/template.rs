/// Certificate template, one per participation category.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Template {
    Participant,
    Moderator,
    Host,
}

impl Template {
    /// Category matching is case-insensitive. Unknown categories land on the
    /// participant template rather than failing the render; the stores pass
    /// free-text categories through untouched, so this arm is reachable.
    pub fn for_category(category: &str) -> Self {
        match category.trim().to_ascii_uppercase().as_str() {
            "MODERATOR" => Self::Moderator,
            "HOST" => Self::Host,
            _ => Self::Participant,
        }
    }

    pub fn file_name(self) -> &'static str {
        match self {
            Self::Participant => "cert-participation-template.png",
            Self::Moderator => "cert-moderator-template.png",
            Self::Host => "cert-host-template.png",
        }
    }
}
