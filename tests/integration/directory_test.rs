//! Integration tests for batch directory annotation

#[cfg(test)]
mod batch_tests {
    use pretty_assertions::assert_eq;
    use serde_json::{json, Value};
    use std::fs::{self, File};
    use std::io::Write;
    use std::process::Command;
    use tempfile::tempdir;

    fn run_shipfix(args: &[&str]) -> Result<(String, String, Option<i32>), String> {
        let output = Command::new(env!("CARGO_BIN_EXE_shipfix"))
            .args(args)
            .output()
            .map_err(|e| format!("Failed to run shipfix: {}", e))?;

        let stdout = String::from_utf8_lossy(&output.stdout).into_owned();
        let stderr = String::from_utf8_lossy(&output.stderr).into_owned();

        Ok((stdout, stderr, output.status.code()))
    }

    fn read_json(path: &std::path::Path) -> Value {
        serde_json::from_str(&fs::read_to_string(path).unwrap()).unwrap()
    }

    #[test]
    fn test_batch_directory_annotation() {
        let input_dir = tempdir().unwrap();
        let nested = input_dir.path().join("mission_02");
        fs::create_dir_all(&nested).unwrap();

        let station = input_dir.path().join("station.json");
        let mut f1 = File::create(&station).unwrap();
        write!(f1, r#"{{"blocks":[{{"id":"hull1"}}]}}"#).unwrap();

        let rammer = nested.join("ship_rammer_00.JSON");
        let mut f2 = File::create(&rammer).unwrap();
        write!(f2, r#"{{"blocks":[{{"id":"hull1"}},{{"id":"smallEngine"}}]}}"#).unwrap();

        let notes = nested.join("notes.txt");
        fs::write(&notes, "not json").unwrap();

        let (stdout, stderr, code) = run_shipfix(&[input_dir.path().to_str().unwrap()]).unwrap();

        assert_eq!(code, Some(0), "stderr: {}", stderr);
        assert!(stdout.contains("Found 2 JSON files"), "{}", stdout);
        assert!(stdout.contains("- Files processed: 2"), "{}", stdout);
        assert!(stdout.contains("- Files skipped: 0"), "{}", stdout);

        assert_eq!(
            read_json(&station),
            json!({"blocks": [{"id": "hull1"}], "behavior": {"type": "spaceStation"}})
        );
        assert_eq!(read_json(&rammer)["behavior"], json!({"type": "default"}));
        assert_eq!(fs::read_to_string(&notes).unwrap(), "not json");
    }

    #[test]
    fn test_second_run_is_idempotent() {
        let input_dir = tempdir().unwrap();
        let a = input_dir.path().join("a.json");
        fs::write(&a, r#"{"blocks":[{"id":"engineMain"}]}"#).unwrap();
        let b = input_dir.path().join("b.json");
        fs::write(&b, r#"{"parts":[]}"#).unwrap();

        let dir = input_dir.path().to_str().unwrap();
        run_shipfix(&[dir]).unwrap();
        let after_first = (fs::read(&a).unwrap(), fs::read(&b).unwrap());

        let (stdout, _, code) = run_shipfix(&[dir]).unwrap();
        assert_eq!(code, Some(0));
        assert!(stdout.contains("- Files processed: 0"), "{}", stdout);
        assert!(stdout.contains("- Files skipped: 2"), "{}", stdout);
        assert_eq!((fs::read(&a).unwrap(), fs::read(&b).unwrap()), after_first);
    }

    #[test]
    fn test_ineligible_files_are_byte_identical() {
        let input_dir = tempdir().unwrap();
        let no_blocks = input_dir.path().join("no_blocks.json");
        let no_blocks_text = "{ \"blocks\": {\"id\": \"engine\"} }\n";
        fs::write(&no_blocks, no_blocks_text).unwrap();
        let has_behavior = input_dir.path().join("has_behavior.json");
        let has_behavior_text = "{\"blocks\":[], \"behavior\":{\"type\":\"default\"}}";
        fs::write(&has_behavior, has_behavior_text).unwrap();

        let (stdout, _, code) = run_shipfix(&[input_dir.path().to_str().unwrap()]).unwrap();

        assert_eq!(code, Some(0));
        assert!(stdout.contains("No blocks array found"), "{}", stdout);
        assert!(stdout.contains("Behavior already exists"), "{}", stdout);
        assert!(stdout.contains("- Files skipped: 2"), "{}", stdout);
        assert_eq!(fs::read_to_string(&no_blocks).unwrap(), no_blocks_text);
        assert_eq!(fs::read_to_string(&has_behavior).unwrap(), has_behavior_text);
    }

    #[test]
    fn test_dry_run_writes_nothing() {
        let input_dir = tempdir().unwrap();
        let a = input_dir.path().join("a.json");
        let text = r#"{"blocks":[{"id":"hull1"}]}"#;
        fs::write(&a, text).unwrap();

        let (stdout, _, code) =
            run_shipfix(&[input_dir.path().to_str().unwrap(), "--dry-run"]).unwrap();

        assert_eq!(code, Some(0));
        assert!(stdout.contains("Would update"), "{}", stdout);
        assert!(stdout.contains("- Files processed: 1"), "{}", stdout);
        assert_eq!(fs::read_to_string(&a).unwrap(), text);
    }

    #[test]
    fn test_write_manifest() {
        let input_dir = tempdir().unwrap();
        fs::create_dir_all(input_dir.path().join("mission_01")).unwrap();
        fs::write(input_dir.path().join("mission_01/b.json"), r#"{"blocks":[]}"#).unwrap();
        fs::write(input_dir.path().join("a.json"), r#"{"blocks":[]}"#).unwrap();

        let (stdout, stderr, code) =
            run_shipfix(&[input_dir.path().to_str().unwrap(), "--write-manifest"]).unwrap();

        assert_eq!(code, Some(0), "stderr: {}", stderr);
        assert!(stdout.contains("with 2 entries."), "{}", stdout);
        assert_eq!(
            read_json(&input_dir.path().join("manifest.json")),
            json!({"files": ["a.json", "mission_01/b.json"]})
        );
    }
}
