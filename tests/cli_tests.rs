//! Tests for the wa-checkout binary's one-shot commands

use std::process::Command;

const WA_CHECKOUT: &str = env!("CARGO_BIN_EXE_wa-checkout");

fn run(args: &[&str]) -> (bool, String, String) {
    let output = Command::new(WA_CHECKOUT)
        .args(args)
        .env_remove("RUST_LOG")
        .output()
        .expect("Failed to run wa-checkout");
    (
        output.status.success(),
        String::from_utf8_lossy(&output.stdout).to_string(),
        String::from_utf8_lossy(&output.stderr).to_string(),
    )
}

/// The JSON result is the last non-empty stdout line
fn extract_json(output: &str) -> serde_json::Value {
    let line = output
        .lines()
        .rev()
        .find(|l| l.trim().starts_with('{'))
        .expect("No JSON line in output");
    serde_json::from_str(line).expect("Invalid JSON result")
}

const VALID: &[&str] = &[
    "--email",
    "budi@example.com",
    "--name",
    "Budi",
    "--phone",
    "08123456789",
    "--agree-terms",
];

fn with_valid<'a>(command: &'a str, extra: &[&'a str]) -> Vec<&'a str> {
    let mut args = vec![command];
    args.extend_from_slice(VALID);
    args.extend_from_slice(extra);
    args
}

#[test]
fn test_validate_reports_all_errors() {
    let (ok, stdout, _) = run(&["validate"]);
    assert!(!ok, "validate should fail on an empty form");

    let json = extract_json(&stdout);
    assert_eq!(json["valid"], false);
    let errors = json["errors"].as_object().unwrap();
    assert_eq!(errors.len(), 4);
    assert_eq!(errors["phone"], "Phone number is required.");
}

#[test]
fn test_validate_accepts_valid_form() {
    let (ok, stdout, _) = run(&with_valid("validate", &[]));
    assert!(ok);
    assert_eq!(extract_json(&stdout)["valid"], true);
}

#[test]
fn test_summary_with_bonus() {
    let (ok, stdout, _) = run(&with_valid(
        "summary",
        &["--quantity", "3", "--payment", "shopeepay", "--notes", "kategori beauty"],
    ));
    assert!(ok);

    let json = extract_json(&stdout);
    assert_eq!(json["total_display"], "Rp 15.000");
    assert_eq!(json["bonus"], true);
    assert_eq!(json["breakdown"]["total"], 15000);
    let message = json["message"].as_str().unwrap();
    assert!(message.contains("- Jumlah: 3"));
    assert!(message.contains("- Metode Pembayaran: ShopeePay"));
    assert!(message.contains("- Catatan Tambahan: kategori beauty"));
}

#[test]
fn test_summary_rejects_invalid_email() {
    let (ok, _, stderr) = run(&[
        "summary",
        "--email",
        "not-an-email",
        "--name",
        "Budi",
        "--phone",
        "0812",
        "--agree-terms",
    ]);
    assert!(!ok);
    assert!(stderr.contains("Email is invalid."));
}

#[test]
fn test_link_uses_config_recipient() {
    let dir = std::env::temp_dir().join(format!("wa_checkout_cli_{}", std::process::id()));
    std::fs::create_dir_all(&dir).unwrap();
    let config_path = dir.join("checkout.json");
    std::fs::write(
        &config_path,
        r#"{"whatsapp":{"recipient":"628999"},"product":{"unit_price":10000}}"#,
    )
    .unwrap();

    let config_arg = config_path.to_string_lossy().to_string();
    let (ok, stdout, _) = run(&with_valid("link", &["--config", &config_arg]));
    let _ = std::fs::remove_dir_all(&dir);
    assert!(ok);

    let json = extract_json(&stdout);
    let url = json["url"].as_str().unwrap();
    assert!(url.starts_with("https://wa.me/628999?text="));
    let decoded = urlencoding::decode(&url["https://wa.me/628999?text=".len()..]).unwrap();
    assert_eq!(decoded, json["message"].as_str().unwrap());
    assert!(decoded.contains("- Total Harga: Rp 10.000"));
}

#[test]
fn test_missing_config_file_fails() {
    let (ok, _, stderr) = run(&with_valid(
        "summary",
        &["--config", "/nonexistent/wa-checkout.json"],
    ));
    assert!(!ok);
    assert!(stderr.contains("Failed to load checkout config"));
}
