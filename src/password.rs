//! Password strength scoring
//!
//! Fixed-weight heuristic used by registration forms to drive a five-segment
//! strength meter. Weights: +1.0 for length of 8 or more, +0.5 each for an
//! uppercase and a lowercase letter, +1.0 for a digit, +2.0 for a special
//! character, and -1.0 for each well-known weak substring (`admin`,
//! `password`, `1234`, case-insensitive). Scores clamp to [0, 5].

/// Special characters that earn the symbol bonus
const SPECIAL_CHARS: &[char] = &['!', '@', '#', '$', '%', '^', '&', '*'];

/// Substrings that each cost a point
const WEAK_SUBSTRINGS: &[&str] = &["admin", "password", "1234"];

/// Human-readable strength bucket
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum StrengthLabel {
    /// Score below 2
    VeryWeak,
    /// Score in [2, 3)
    Weak,
    /// Score in [3, 4)
    Medium,
    /// Score in [4, 5)
    Strong,
    /// Score of 5
    VeryStrong,
}

/// Scored password strength
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PasswordStrength {
    /// Clamped score in [0, 5]
    pub score: f32,
    /// Number of meter segments to fill (0..=5)
    pub segments: u8,
    /// Strength bucket for display
    pub label: StrengthLabel,
}

/// Score a password against the fixed-weight heuristic
pub fn score_password(password: &str) -> PasswordStrength {
    if password.is_empty() {
        return PasswordStrength {
            score: 0.0,
            segments: 0,
            label: StrengthLabel::VeryWeak,
        };
    }

    let mut score = 0.0f32;

    if password.chars().count() >= 8 {
        score += 1.0;
    }
    if password.chars().any(|c| c.is_ascii_uppercase()) {
        score += 0.5;
    }
    if password.chars().any(|c| c.is_ascii_lowercase()) {
        score += 0.5;
    }
    if password.chars().any(|c| c.is_ascii_digit()) {
        score += 1.0;
    }
    if password.chars().any(|c| SPECIAL_CHARS.contains(&c)) {
        score += 2.0;
    }

    let lowered = password.to_lowercase();
    for weak in WEAK_SUBSTRINGS {
        if lowered.contains(weak) {
            score -= 1.0;
        }
    }

    let score = score.clamp(0.0, 5.0);
    let segments = score.floor() as u8;

    PasswordStrength {
        score,
        segments,
        label: label_for(segments),
    }
}

fn label_for(segments: u8) -> StrengthLabel {
    match segments {
        0 | 1 => StrengthLabel::VeryWeak,
        2 => StrengthLabel::Weak,
        3 => StrengthLabel::Medium,
        4 => StrengthLabel::Strong,
        _ => StrengthLabel::VeryStrong,
    }
}
