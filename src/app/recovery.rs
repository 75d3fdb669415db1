#[must_use]
pub fn get_suggestions(msg: &str) -> Vec<String> {
    let mut suggestions = Vec::new();
    let msg_lower = msg.to_lowercase();

    if msg_lower.contains("duplicate catalog id") {
        suggestions.push("Give every [[items]] entry a unique id".to_string());
    }

    if msg_lower.contains("empty id") {
        suggestions.push("Every [[items]] entry needs a non-blank id".to_string());
    }

    if msg_lower.contains("failed to parse catalog") {
        suggestions
            .push("Check the TOML syntax and that section is home, about, work or contact".to_string());
    }

    if msg_lower.contains("failed to read catalog") {
        suggestions.push("Check that the catalog file exists and is readable".to_string());
    }

    suggestions
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_suggestions() {
        let s = get_suggestions("duplicate catalog id `home-intro`");
        assert!(s.contains(&"Give every [[items]] entry a unique id".to_string()));

        let s = get_suggestions("failed to read catalog /tmp/x.toml: No such file");
        assert!(s.contains(&"Check that the catalog file exists and is readable".to_string()));

        assert!(get_suggestions("something else").is_empty());
    }
}
