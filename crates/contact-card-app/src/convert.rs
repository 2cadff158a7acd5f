//! Decodes a jCard document and re-encodes it in the configured format.

use anyhow::Context;
use contact_card_core::config::{OutputFormat, Settings};
use contact_card_rfc::rfc::vcard::jcard::{DecodeDiagnostics, DecodeOptions, decode_with};

/// ## Summary
/// Decodes `input` with the configured decode policies and encodes the card
/// as jCard or vCard 3.0.
///
/// ## Errors
/// Returns an error if decoding fails, or if jCard encoding fails.
#[tracing::instrument(skip_all, fields(input_len = input.len(), format = ?settings.output.format))]
pub fn run(input: &str, settings: &Settings) -> anyhow::Result<String> {
    let options = DecodeOptions::from(&settings.decode);
    let mut diagnostics = DecodeDiagnostics::new();

    let card = decode_with(input, &options, &mut diagnostics).context("Failed to decode jCard")?;

    for anomaly in &diagnostics.anomalies {
        tracing::warn!(%anomaly, "Decoded with anomaly");
    }
    if !diagnostics.skipped.is_empty() {
        tracing::debug!(skipped = ?diagnostics.skipped, "Skipped unsupported properties");
    }

    match settings.output.format {
        OutputFormat::Jcard => {
            let mut json = card.encode_jcard().context("Failed to encode jCard")?;
            json.push('\n');
            Ok(json)
        }
        OutputFormat::Vcard3 => Ok(card.encode_vcard3()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use contact_card_core::config::{AnomalyPolicy, DuplicatePolicy};

    const CARD: &str = r#"["vcard", [
        ["version", {}, "text", "4.0"],
        ["fn", {}, "text", "Jane Doe"],
        ["n", {}, "text", ["Doe", "Jane", "", "", ""]],
        ["fn", {}, "text", "Second"]
    ]]"#;

    #[test_log::test]
    fn vcard3_by_default() {
        let output = run(CARD, &Settings::default()).unwrap();
        assert!(output.starts_with("BEGIN:VCARD\r\n"));
        assert!(output.contains("FN:Jane Doe\r\n"));
    }

    #[test_log::test]
    fn jcard_output() {
        let mut settings = Settings::default();
        settings.output.format = OutputFormat::Jcard;

        let output = run(CARD, &settings).unwrap();
        assert!(output.starts_with(r#"["vcard",["#));
        assert!(output.ends_with('\n'));
        assert!(output.contains(r#"["fn",{},"text","Jane Doe"]"#));
    }

    #[test]
    fn keep_last_duplicates() {
        let mut settings = Settings::default();
        settings.decode.duplicates = DuplicatePolicy::KeepLast;

        let output = run(CARD, &settings).unwrap();
        assert!(output.contains("FN:Second\r\n"));
    }

    #[test]
    fn strict_rejects_anomalies() {
        let mut settings = Settings::default();
        settings.decode.anomalies = AnomalyPolicy::Strict;

        let err = run(CARD, &settings).unwrap_err();
        assert!(format!("{err:#}").contains("property 3"));
    }

    #[test]
    fn bad_signature_is_an_error() {
        let err = run(r#"["vcalendar", []]"#, &Settings::default()).unwrap_err();
        assert!(format!("{err:#}").contains("Failed to decode jCard"));
    }
}
