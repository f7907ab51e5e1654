//! Client-side policy checks shared by the form screens.
//!
//! Everything a screen verifies before touching a remote gateway lives
//! here: title and password rules, the video-host allow-list, and the
//! per-field upload policy. Remote failures are a different taxonomy and
//! belong to the frontend's service layer.

use regex::Regex;
use thiserror::Error;

pub const MIN_TITLE_CHARS: usize = 3;
pub const MIN_PASSWORD_CHARS: usize = 6;

/// Hosts a sub-module video link may point at.
pub const ALLOWED_VIDEO_HOSTS: [&str; 5] = [
    "youtube.com",
    "www.youtube.com",
    "youtu.be",
    "vimeo.com",
    "www.vimeo.com",
];

/// Everything the screens can reject before a network call is made.
/// `Display` strings are shown to the user as-is.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("Title is required")]
    TitleMissing,
    #[error("Title must be at least {MIN_TITLE_CHARS} characters")]
    TitleTooShort,
    #[error("Select a module")]
    ParentModuleMissing,
    #[error("Video URL must point to an allowed video host")]
    VideoHostNotAllowed,
    #[error("Unknown level: {0}")]
    UnknownLevel(String),
    #[error("Passwords do not match")]
    PasswordMismatch,
    #[error("Password must be at least {MIN_PASSWORD_CHARS} characters")]
    PasswordTooShort,
    #[error("Only image files can be uploaded here")]
    NotAnImage,
    #[error("Only PDF files can be uploaded here")]
    NotAPdf,
    #[error("File is too large (limit {0} MiB)")]
    FileTooLarge(u32),
}

pub fn check_title(title: &str) -> Result<(), ValidationError> {
    let trimmed = title.trim();
    if trimmed.is_empty() {
        return Err(ValidationError::TitleMissing);
    }
    if trimmed.chars().count() < MIN_TITLE_CHARS {
        return Err(ValidationError::TitleTooShort);
    }
    Ok(())
}

/// Signup-time password rules; mismatch is reported before length so the
/// user fixes the typo first.
pub fn check_password(password: &str, confirm: &str) -> Result<(), ValidationError> {
    if password != confirm {
        return Err(ValidationError::PasswordMismatch);
    }
    if password.chars().count() < MIN_PASSWORD_CHARS {
        return Err(ValidationError::PasswordTooShort);
    }
    Ok(())
}

/// Accepts only http(s) URLs whose host (ignoring any port) is on the
/// allow-list.
pub fn check_video_host(url: &str) -> Result<(), ValidationError> {
    let host_re = Regex::new(r"^https?://([^/:?#]+)").unwrap();
    let host = host_re
        .captures(url.trim())
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str().to_ascii_lowercase())
        .ok_or(ValidationError::VideoHostNotAllowed)?;
    if ALLOWED_VIDEO_HOSTS.contains(&host.as_str()) {
        Ok(())
    } else {
        Err(ValidationError::VideoHostNotAllowed)
    }
}

/// Which kind of asset a form field takes. Decides the MIME allow-list and
/// the size cap enforced before the asset gateway is ever contacted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AssetField {
    /// Thumbnail image on a module or sub-module.
    Thumbnail,
    /// PDF note attached to a sub-module.
    Document,
}

impl AssetField {
    pub const fn max_bytes(self) -> u64 {
        match self {
            AssetField::Thumbnail => 5 * 1024 * 1024,
            AssetField::Document => 20 * 1024 * 1024,
        }
    }

    pub fn accepts(self, mime: &str) -> bool {
        match self {
            AssetField::Thumbnail => mime.starts_with("image/"),
            AssetField::Document => mime == "application/pdf",
        }
    }

    /// The pre-upload gate: wrong type or an oversized file fails here and
    /// no request is issued.
    pub fn check(self, mime: &str, size: u64) -> Result<(), ValidationError> {
        if !self.accepts(mime) {
            return Err(match self {
                AssetField::Thumbnail => ValidationError::NotAnImage,
                AssetField::Document => ValidationError::NotAPdf,
            });
        }
        if size > self.max_bytes() {
            let limit_mib = (self.max_bytes() / (1024 * 1024)) as u32;
            return Err(ValidationError::FileTooLarge(limit_mib));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn title_rules() {
        assert_eq!(check_title("Ownership"), Ok(()));
        assert_eq!(check_title("abc"), Ok(()));
        assert_eq!(check_title(""), Err(ValidationError::TitleMissing));
        assert_eq!(check_title("   "), Err(ValidationError::TitleMissing));
        assert_eq!(check_title("ab"), Err(ValidationError::TitleTooShort));
        assert_eq!(check_title("  ab  "), Err(ValidationError::TitleTooShort));
    }

    #[test]
    fn password_rules() {
        assert_eq!(check_password("secret1", "secret1"), Ok(()));
        assert_eq!(
            check_password("secret1", "secret2"),
            Err(ValidationError::PasswordMismatch)
        );
        assert_eq!(
            check_password("abc", "abc"),
            Err(ValidationError::PasswordTooShort)
        );
        // mismatch wins over length
        assert_eq!(
            check_password("abc", "abcd"),
            Err(ValidationError::PasswordMismatch)
        );
    }

    #[test]
    fn video_hosts_on_the_allow_list_pass() {
        for url in [
            "https://www.youtube.com/watch?v=dQw4w9WgXcQ",
            "https://youtu.be/dQw4w9WgXcQ",
            "http://vimeo.com/12345",
            "https://YOUTUBE.com/watch?v=x",
        ] {
            assert_eq!(check_video_host(url), Ok(()), "{url}");
        }
    }

    #[test]
    fn video_hosts_off_the_allow_list_fail() {
        for url in [
            "https://videos.example.com/x",
            "https://youtube.com.evil.example/x",
            "ftp://youtube.com/x",
            "not a url",
            "",
        ] {
            assert_eq!(
                check_video_host(url),
                Err(ValidationError::VideoHostNotAllowed),
                "{url}"
            );
        }
    }

    #[test]
    fn thumbnail_field_takes_images_only() {
        assert_eq!(AssetField::Thumbnail.check("image/png", 1024), Ok(()));
        assert_eq!(AssetField::Thumbnail.check("image/webp", 1024), Ok(()));
        assert_eq!(
            AssetField::Thumbnail.check("application/pdf", 1024),
            Err(ValidationError::NotAnImage)
        );
    }

    #[test]
    fn document_field_takes_pdf_only() {
        assert_eq!(AssetField::Document.check("application/pdf", 1024), Ok(()));
        assert_eq!(
            AssetField::Document.check("image/png", 1024),
            Err(ValidationError::NotAPdf)
        );
    }

    #[test]
    fn size_caps_are_enforced() {
        let just_under = AssetField::Thumbnail.max_bytes();
        assert_eq!(AssetField::Thumbnail.check("image/png", just_under), Ok(()));
        assert_eq!(
            AssetField::Thumbnail.check("image/png", just_under + 1),
            Err(ValidationError::FileTooLarge(5))
        );
        assert_eq!(
            AssetField::Document.check("application/pdf", 21 * 1024 * 1024),
            Err(ValidationError::FileTooLarge(20))
        );
    }
}
