use serde::Serialize;

use revmeta_core::types::{Change, KeyStatus, ServerConfig};

pub const HELP_ICON: &str = "gr-icons:help";
pub const CHECK_ICON: &str = "gr-icons:check";
pub const CLOSE_ICON: &str = "gr-icons:close";

const MISSING_MESSAGE: &str = "This patch set was created without a push certificate";
const TRUSTED_MESSAGE: &str = "Push certificate is valid and key is trusted";
const INVALID_PREFIX: &str = "Push certificate is invalid:\n";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ValidationClass {
    Help,
    Trusted,
    Invalid,
}

impl ValidationClass {
    pub fn as_str(&self) -> &'static str {
        match self {
            ValidationClass::Help => "help",
            ValidationClass::Trusted => "trusted",
            ValidationClass::Invalid => "invalid",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PushCertificateValidation {
    pub message: String,
    pub icon: &'static str,
    pub class: ValidationClass,
}

/// Trust verdict for the current revision's push certificate. `None` when
/// signed push is off or there is no current revision.
pub fn validate_push_certificate(
    config: &ServerConfig,
    change: &Change,
) -> Option<PushCertificateValidation> {
    if !config.signed_push_enabled() {
        return None;
    }
    let rev = change.current_revision()?;

    let verdict = match &rev.push_certificate {
        None => PushCertificateValidation {
            message: MISSING_MESSAGE.to_string(),
            icon: HELP_ICON,
            class: ValidationClass::Help,
        },
        Some(cert) if cert.key.status == Some(KeyStatus::Trusted) => PushCertificateValidation {
            message: TRUSTED_MESSAGE.to_string(),
            icon: CHECK_ICON,
            class: ValidationClass::Trusted,
        },
        // BAD, OK, unknown and unset all fold into the invalid verdict.
        Some(cert) => PushCertificateValidation {
            message: format!("{INVALID_PREFIX}{}", cert.key.problems.join("\n")),
            icon: CLOSE_ICON,
            class: ValidationClass::Invalid,
        },
    };
    Some(verdict)
}
