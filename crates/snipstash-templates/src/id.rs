//! Template id generation

use chrono::Utc;
use rand::distributions::Alphanumeric;
use rand::Rng;

const ID_PREFIX: &str = "template";
const SUFFIX_LEN: usize = 9;

/// Generate a fresh template id of the form `template_<millis>_<suffix>`.
///
/// Unique within one installation; not suitable as a secret.
pub fn generate_template_id() -> String {
    let suffix: String = rand::thread_rng()
        .sample_iter(&Alphanumeric)
        .take(SUFFIX_LEN)
        .map(|b| char::from(b).to_ascii_lowercase())
        .collect();

    format!("{}_{}_{}", ID_PREFIX, Utc::now().timestamp_millis(), suffix)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_id_format() {
        let id = generate_template_id();
        let parts: Vec<&str> = id.split('_').collect();
        assert_eq!(parts.len(), 3);
        assert_eq!(parts[0], "template");
        assert!(parts[1].parse::<i64>().is_ok());
        assert_eq!(parts[2].len(), SUFFIX_LEN);
        assert!(parts[2]
            .chars()
            .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit()));
    }

    #[test]
    fn test_ids_do_not_repeat() {
        let ids: HashSet<String> = (0..500).map(|_| generate_template_id()).collect();
        assert_eq!(ids.len(), 500);
    }
}
