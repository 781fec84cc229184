use rubric_core::missing::MissingPolicy;

/// Parse missing-score policy from string
pub fn parse_missing_policy(s: &str) -> std::result::Result<MissingPolicy, String> {
    s.parse::<MissingPolicy>().map_err(|e| e.to_string())
}
