#![allow(dead_code)]
use assert_cmd::Command;
use std::path::PathBuf;
use tempfile::TempDir;

pub const SETTINGS: &str = r#"
[assets]
video_dir = "media/loops/"
videos = ["sea.mp4", "sea (1).mp4", "sky.mp4"]
images = ["dune.jpg"]

[[quotes]]
text = "Keep going."
source = "Anon"
"#;

pub struct TestEnv {
    _dir: TempDir,
    pub store: PathBuf,
    pub cfg: PathBuf,
    pub settings: PathBuf,
}

impl TestEnv {
    pub fn new() -> Self {
        Self::with_settings(SETTINGS)
    }

    pub fn with_settings(settings: &str) -> Self {
        let dir = tempfile::tempdir().expect("tempdir");
        let cfg = dir.path().join("config");
        std::fs::create_dir_all(&cfg).expect("cfg dir");
        let settings_path = cfg.join("settings.toml");
        std::fs::write(&settings_path, settings).expect("settings");
        let store = dir.path().join("state").join("storage.json");
        Self {
            _dir: dir,
            store,
            cfg,
            settings: settings_path,
        }
    }

    pub fn bin(&self) -> Command {
        let mut cmd = Command::cargo_bin("vibeverse").unwrap();
        cmd.env("XDG_CONFIG_HOME", &self.cfg);
        // keep the host's preferences out of the run
        for var in [
            "VIBEVERSE_REDUCED_DATA",
            "VIBEVERSE_REDUCED_MOTION",
            "VIBEVERSE_COLOR_SCHEME",
            "VIBEVERSE_LOG",
        ] {
            cmd.env_remove(var);
        }
        cmd.arg("--config").arg(&self.settings);
        cmd.arg("--store").arg(&self.store);
        cmd.args(["--seed", "42"]);
        cmd
    }

    pub fn stdout(&self, args: &[&str]) -> String {
        let out = self
            .bin()
            .args(args)
            .assert()
            .success()
            .get_output()
            .stdout
            .clone();
        String::from_utf8(out).unwrap()
    }

    pub fn json(&self, args: &[&str]) -> serde_json::Value {
        serde_json::from_str(&self.stdout(args)).unwrap()
    }
}

impl Default for TestEnv {
    fn default() -> Self {
        Self::new()
    }
}
