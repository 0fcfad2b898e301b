// src/crack.rs
//
// Back-of-the-envelope password math shown next to the exercises. These are
// the textbook formulas, not a model of any real cracking rig.

/// Alphabet size implied by the character classes present in `password`.
pub fn charset_size(password: &str) -> u32 {
    let mut size = 0;
    if password.chars().any(|c| c.is_ascii_lowercase()) {
        size += 26;
    }
    if password.chars().any(|c| c.is_ascii_uppercase()) {
        size += 26;
    }
    if password.chars().any(|c| c.is_ascii_digit()) {
        size += 10;
    }
    if password.chars().any(|c| c.is_ascii_punctuation() || c == ' ') {
        size += 33;
    }
    if password.chars().any(|c| !c.is_ascii()) {
        size += 100;
    }
    size
}

/// `length * log2(charset)`
pub fn entropy_bits(charset: u32, length: u32) -> f64 {
    if charset < 2 {
        return 0.0;
    }
    length as f64 * (charset as f64).log2()
}

pub fn password_entropy(password: &str) -> f64 {
    entropy_bits(charset_size(password), password.chars().count() as u32)
}

/// `charset ^ length` as a float; saturates to infinity for huge spaces.
pub fn search_space(charset: u32, length: u32) -> f64 {
    (charset as f64).powf(length as f64)
}

/// Worst-case time to try every candidate.
pub fn seconds_to_crack(charset: u32, length: u32, guesses_per_sec: f64) -> f64 {
    if guesses_per_sec <= 0.0 {
        return f64::INFINITY;
    }
    search_space(charset, length) / guesses_per_sec
}

const MINUTE: f64 = 60.0;
const HOUR: f64 = 60.0 * MINUTE;
const DAY: f64 = 24.0 * HOUR;
const YEAR: f64 = 365.25 * DAY;

pub fn format_duration(secs: f64) -> String {
    if !secs.is_finite() || secs >= 1e6 * YEAR {
        return "longer than a million years".to_string();
    }
    if secs < 1.0 {
        return "instantly".to_string();
    }
    let (value, unit) = if secs < MINUTE {
        (secs, "second")
    } else if secs < HOUR {
        (secs / MINUTE, "minute")
    } else if secs < DAY {
        (secs / HOUR, "hour")
    } else if secs < YEAR {
        (secs / DAY, "day")
    } else {
        (secs / YEAR, "year")
    };
    let value = value.floor() as u64;
    if value == 1 {
        format!("1 {unit}")
    } else {
        format!("{value} {unit}s")
    }
}
