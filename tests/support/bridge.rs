//! Fake secrets manager bridge.

use super::Test;
use std::fs;
use std::path::PathBuf;

impl Test {
    /// Path of the bridge executable.
    pub fn bridge_path(&self) -> PathBuf {
        self.dir.path().join("functions-toolkit-bridge")
    }

    /// Write the bridge script into the temp dir.
    pub(super) fn install_bridge(&self) {
        let dir = self.dir.path().display();
        let script = format!(
            r#"#!/bin/sh
echo "$1" >> "{dir}/calls.log"
cat > "{dir}/$1.json"
if [ -f "{dir}/fail-$1" ]; then
  cat "{dir}/fail-$1" >&2
  exit 1
fi
case "$1" in
  initialize) echo '{{}}' ;;
  encrypt) echo '{{"encryptedSecrets":"0xc0ffee"}}' ;;
  upload) cat "{dir}/upload-response.json" ;;
  *) echo "unknown operation $1" >&2; exit 2 ;;
esac
"#
        );

        let path = self.bridge_path();
        fs::write(&path, script).expect("failed to write bridge");

        #[cfg(unix)]
        {
            use std::os::unix::fs::PermissionsExt;
            fs::set_permissions(&path, fs::Permissions::from_mode(0o755))
                .expect("failed to chmod bridge");
        }
    }

    /// Set the JSON the bridge prints for `upload`.
    pub fn upload_responds(&self, json: &str) {
        fs::write(self.dir.path().join("upload-response.json"), json)
            .expect("failed to write upload response");
    }

    /// Make the bridge fail `op` with `message` on stderr.
    pub fn fail_op(&self, op: &str, message: &str) {
        fs::write(self.dir.path().join(format!("fail-{}", op)), message)
            .expect("failed to write failure marker");
    }

    /// Operations the bridge received, in order.
    pub fn bridge_calls(&self) -> Vec<String> {
        match fs::read_to_string(self.dir.path().join("calls.log")) {
            Ok(log) => log.lines().map(str::to_string).collect(),
            Err(_) => Vec::new(),
        }
    }

    /// The JSON request the bridge received for `op`.
    pub fn bridge_request(&self, op: &str) -> serde_json::Value {
        let raw = fs::read_to_string(self.dir.path().join(format!("{}.json", op)))
            .unwrap_or_else(|_| panic!("bridge never received {}", op));
        serde_json::from_str(&raw).expect("bridge request is not JSON")
    }
}
